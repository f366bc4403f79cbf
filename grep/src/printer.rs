use crate::context::ContextIndex;
use crate::error::GrepError;
use crate::matcher::MatchSet;
use std::io::Write;

/// Output settings shared by every source of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrintOptions {
    /// Print only the number of matched lines (`-c`).
    pub count: bool,
    /// Prefix lines with their 1-based number (`-n`).
    pub line_number: bool,
}

/// Writes the result of one source to the output sink.
///
/// `file_name` is only set when several files are searched; it is printed
/// as `name:` in front of every output line.
pub struct Printer<'a> {
    options: PrintOptions,
    file_name: Option<&'a str>,
}

impl<'a> Printer<'a> {
    pub fn new(options: PrintOptions, file_name: Option<&'a str>) -> Self {
        Self { options, file_name }
    }

    /// Prints `selection`, or only the size of `matches` in count mode.
    ///
    /// # Panics
    ///
    /// Panics if `selection` refers to an index past the end of `lines`,
    /// i.e. it was expanded for a different line count.
    pub fn print<S: AsRef<str>>(
        &self,
        out: &mut dyn Write,
        lines: &[S],
        matches: &MatchSet,
        selection: &ContextIndex,
    ) -> Result<(), GrepError> {
        if self.options.count {
            self.write_prefix(out)?;
            return writeln!(out, "{}", matches.len()).map_err(GrepError::Write);
        }

        for selected in selection.iter() {
            self.write_prefix(out)?;
            if self.options.line_number {
                let separator = if selected.is_match { ':' } else { '-' };
                write!(out, "{}{}", selected.index + 1, separator).map_err(GrepError::Write)?;
            }
            writeln!(out, "{}", lines[selected.index].as_ref()).map_err(GrepError::Write)?;
        }

        Ok(())
    }

    fn write_prefix(&self, out: &mut dyn Write) -> Result<(), GrepError> {
        if let Some(name) = self.file_name {
            write!(out, "{}:", name).map_err(GrepError::Write)?;
        }
        Ok(())
    }
}
