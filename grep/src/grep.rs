use crate::context::ContextWindow;
use crate::error::GrepError;
use crate::input::read_lines;
use crate::matcher::Matcher;
use crate::options::Options;
use crate::printer::{PrintOptions, Printer};
use std::fs::File;
use std::io::{Read, Write};
use tracing::{debug, trace};

const STDIN_NAME: &str = "(standard input)";

/// Totals over every searched source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Number of sources searched.
    pub sources: usize,
    /// Lines selected by the pattern (after `-v`).
    pub matched: usize,
    /// Lines printed, context included. Zero in count mode.
    pub printed: usize,
}

/// Everything needed to search one source; built once per run.
struct Searcher {
    matcher: Matcher,
    window: ContextWindow,
    print: PrintOptions,
}

impl Searcher {
    fn search(
        &self,
        reader: &mut dyn Read,
        out: &mut dyn Write,
        name: &str,
        prefix: Option<&str>,
    ) -> Result<Summary, GrepError> {
        let lines = read_lines(reader, name)?;
        let matches = self.matcher.find(&lines);
        let selection = self.window.expand(&matches, lines.len());

        debug!(
            source = name,
            lines = lines.len(),
            matched = matches.len(),
            selected = selection.len(),
            "searched source"
        );

        Printer::new(self.print, prefix).print(out, &lines, &matches, &selection)?;

        Ok(Summary {
            sources: 1,
            matched: matches.len(),
            printed: if self.print.count { 0 } else { selection.len() },
        })
    }
}

impl Summary {
    fn add(&mut self, other: Summary) {
        self.sources += other.sources;
        self.matched += other.matched;
        self.printed += other.printed;
    }
}

/// Searches standard input, or every file of `options.files` in order, and
/// writes the result to `stdout`.
///
/// The pattern is compiled before anything is read, so an invalid pattern
/// produces no output at all. The first file that cannot be opened stops the
/// run; whatever earlier files produced has already been written.
pub fn run(
    stdin: &mut dyn Read,
    stdout: &mut dyn Write,
    options: &Options,
) -> Result<Summary, GrepError> {
    let searcher = Searcher {
        matcher: Matcher::new(&options.pattern, &options.match_options())?,
        window: options.context_window(),
        print: options.print_options(),
    };
    trace!(window = ?searcher.window, files = options.files.len(), "starting search");

    let mut summary = Summary::default();

    if options.files.is_empty() {
        summary.add(searcher.search(stdin, stdout, STDIN_NAME, None)?);
    } else {
        let with_names = options.files.len() > 1;
        for path in &options.files {
            let mut file = File::open(path).map_err(|source| {
                debug!(path = %path.display(), error = %source, "cannot open input");
                GrepError::FileNotFound {
                    path: path.clone(),
                    source,
                }
            })?;

            let name = path.to_string_lossy();
            let prefix = with_names.then_some(name.as_ref());
            summary.add(searcher.search(&mut file, stdout, &name, prefix)?);
        }
    }

    stdout.flush().map_err(GrepError::Write)?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::{self, Cursor};
    use std::sync::{Arc, Mutex};

    fn run_stdin(input: &str, options: &Options) -> Result<(String, Summary), GrepError> {
        let mut out = Vec::new();
        let mut stdin = Cursor::new(input.as_bytes().to_vec());
        let summary = run(&mut stdin, &mut out, options)?;
        Ok((String::from_utf8(out).unwrap(), summary))
    }

    #[test]
    fn test_invert_from_stdin() {
        let options = Options {
            invert: true,
            ..Options::new("Dog")
        };
        let (s, summary) = run_stdin("Dog\nCat\nTom\nMouse\nJerry\n", &options).unwrap();
        assert_eq!(s, "Cat\nTom\nMouse\nJerry\n");
        assert_eq!(
            summary,
            Summary {
                sources: 1,
                matched: 4,
                printed: 4,
            }
        );
    }

    #[test]
    fn test_after_context_twenty_lines() {
        let input: String = (1..=20)
            .map(|n| match n {
                7 => "needle\n".to_string(),
                _ => format!("line {n}\n"),
            })
            .collect();
        let options = Options {
            after: Some(10),
            line_number: true,
            ..Options::new("needle")
        };
        let (s, _) = run_stdin(&input, &options).unwrap();

        let mut expected = String::from("7:needle\n");
        for n in 8..=17 {
            expected.push_str(&format!("{n}-line {n}\n"));
        }
        assert_eq!(s, expected);
    }

    #[test]
    fn test_overlapping_windows_print_each_line_once() {
        let input = "l1\nl2\nhit3\nl4\nhit5\nl6\nl7\nl8\nl9\nl10\n";
        let options = Options {
            before: Some(1),
            after: Some(1),
            ..Options::new("hit")
        };
        let (s, summary) = run_stdin(input, &options).unwrap();
        assert_eq!(s, "l2\nhit3\nl4\nhit5\nl6\n");
        assert_eq!(summary.printed, 5);
    }

    #[test]
    fn test_count_is_independent_of_context() {
        let input = "a\nb\na\nc\na\n";
        for context in [None, Some(1), Some(100)] {
            let options = Options {
                count: true,
                context,
                ..Options::new("a")
            };
            let (s, summary) = run_stdin(input, &options).unwrap();
            assert_eq!(s, "3\n");
            assert_eq!(summary.matched, 3);
            assert_eq!(summary.printed, 0);
        }
    }

    #[test]
    fn test_invalid_pattern_writes_nothing() {
        let mut out = Vec::new();
        let err = run(
            &mut Cursor::new(b"(\n".to_vec()),
            &mut out,
            &Options::new("("),
        )
        .unwrap_err();
        assert!(matches!(err, GrepError::InvalidPattern { .. }));
        assert!(out.is_empty());
    }

    #[test]
    fn test_no_match_is_not_an_error() {
        let (s, summary) = run_stdin("a\nb\n", &Options::new("z")).unwrap();
        assert_eq!(s, "");
        assert_eq!(summary.matched, 0);
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_missing_file_is_not_logged_at_warn() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_writer(move || writer.clone())
            .finish();

        let options = Options {
            files: vec!["wrong_path.txt".into()],
            ..Options::new("Dog")
        };
        let mut stdin = Cursor::new(Vec::new());
        let mut out = Vec::new();
        let result = tracing::subscriber::with_default(subscriber, || {
            run(&mut stdin, &mut out, &options)
        });

        // The caller reports the error; the library stays quiet at warn.
        assert!(matches!(result, Err(GrepError::FileNotFound { .. })));
        assert!(logs.0.lock().unwrap().is_empty());
    }
}
