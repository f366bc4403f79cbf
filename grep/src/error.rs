use std::io;
use std::path::PathBuf;

/// Everything that can abort a search.
///
/// None of these are retried: the first error stops the run and is handed
/// back to the caller as-is.
#[derive(Debug, thiserror::Error)]
pub enum GrepError {
    /// The pattern (after fixed-string escaping and case folding) did not compile.
    #[error("invalid pattern '{pattern}'")]
    InvalidPattern {
        /// Pattern as the user supplied it.
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// An input file could not be opened.
    #[error("{}: cannot open file", path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading lines from an already opened source failed.
    #[error("{name}: read error")]
    Read {
        name: String,
        #[source]
        source: io::Error,
    },

    /// The output sink rejected a write or a flush.
    #[error("write error")]
    Write(#[source] io::Error),
}
