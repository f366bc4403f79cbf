use crate::context::ContextWindow;
use crate::matcher::MatchOptions;
use crate::printer::PrintOptions;
use argh::FromArgs;
use std::path::PathBuf;

#[derive(FromArgs, Debug, Clone, Default, PartialEq, Eq)]
/// Print lines that match a pattern, optionally with surrounding context.
/// Reads standard input when no files are given.
pub struct Options {
    #[argh(positional)]
    /// the pattern to search for (a regular expression unless -F is given)
    pub pattern: String,

    #[argh(positional)]
    /// files to search; standard input when omitted
    pub files: Vec<PathBuf>,

    #[argh(option, short = 'A')]
    /// print NUM lines of trailing context after matching lines
    pub after: Option<usize>,

    #[argh(option, short = 'B')]
    /// print NUM lines of leading context before matching lines
    pub before: Option<usize>,

    #[argh(option, short = 'C')]
    /// print NUM lines of context around matching lines; -A and -B take precedence
    pub context: Option<usize>,

    #[argh(switch, short = 'c')]
    /// print only a count of matching lines per input
    pub count: bool,

    #[argh(switch, short = 'i')]
    /// ignore case distinctions
    pub ignore_case: bool,

    #[argh(switch, short = 'v')]
    /// select non-matching lines
    pub invert: bool,

    #[argh(switch, short = 'F')]
    /// interpret the pattern as a fixed string, not a regular expression
    pub fixed: bool,

    #[argh(switch, short = 'n')]
    /// prefix each output line with its 1-based line number
    pub line_number: bool,

    #[argh(switch)]
    /// log search progress to stderr
    pub verbose: bool,
}

impl Options {
    /// Options searching for `pattern` in standard input with every flag off.
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            ..Default::default()
        }
    }

    pub fn match_options(&self) -> MatchOptions {
        MatchOptions {
            fixed: self.fixed,
            ignore_case: self.ignore_case,
            invert: self.invert,
        }
    }

    pub fn print_options(&self) -> PrintOptions {
        PrintOptions {
            count: self.count,
            line_number: self.line_number,
        }
    }

    pub fn context_window(&self) -> ContextWindow {
        ContextWindow::resolve(self.after, self.before, self.context)
    }
}
