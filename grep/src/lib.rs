//! A small `grep` with before/after context windows.
//!
//! Searching a source is a single pass: the input is split into lines, a
//! [`Matcher`] picks the matching line indices ([`MatchSet`]), a
//! [`ContextWindow`] grows them into the ordered, duplicate-free
//! [`ContextIndex`], and a [`Printer`] writes the selected lines.
//!
//! [`run`] drives that pipeline for standard input or a list of files, with
//! [`Options`] doubling as the command-line definition of the `grep` binary.
//!
//! ```
//! use grep_context::{Options, run};
//! use std::io::Cursor;
//!
//! let options = Options {
//!     line_number: true,
//!     context: Some(1),
//!     ..Options::new("Tom")
//! };
//! let mut out = Vec::new();
//! run(&mut Cursor::new(b"Dog\nCat\nTom\nMouse\nJerry\n".to_vec()), &mut out, &options).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "2-Cat\n3:Tom\n4-Mouse\n");
//! ```

pub mod context;
pub mod error;
mod grep;
pub mod input;
pub mod matcher;
mod options;
pub mod printer;

pub use context::{ContextIndex, ContextWindow, SelectedLine};
pub use error::GrepError;
pub use grep::{Summary, run};
pub use matcher::{MatchOptions, MatchSet, Matcher};
pub use options::Options;
pub use printer::{PrintOptions, Printer};
