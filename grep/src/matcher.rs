//! Selecting the lines a pattern matches.

use crate::error::GrepError;
use regex::Regex;

/// How a user pattern is turned into a line predicate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchOptions {
    /// Treat the pattern as a literal string (`-F`).
    pub fixed: bool,
    /// Match regardless of case (`-i`).
    pub ignore_case: bool,
    /// Select the lines that do *not* match (`-v`).
    pub invert: bool,
}

/// Ascending, duplicate-free indices of the lines selected by a [`Matcher`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchSet {
    indices: Vec<usize>,
}

impl MatchSet {
    /// Builds a set from arbitrary indices, sorting and deduplicating them.
    pub fn from_indices(indices: impl IntoIterator<Item = usize>) -> Self {
        let mut indices: Vec<usize> = indices.into_iter().collect();
        indices.sort_unstable();
        indices.dedup();
        Self { indices }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.binary_search(&index).is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.indices
    }
}

/// Rewrites the user pattern for the requested mode.
///
/// Fixed-string mode escapes every metacharacter first, then case-insensitive
/// mode prepends the `(?i)` inline flag.
pub fn effective_pattern(pattern: &str, fixed: bool, ignore_case: bool) -> String {
    let pattern = if fixed {
        regex::escape(pattern)
    } else {
        pattern.to_string()
    };

    if ignore_case {
        format!("(?i){}", pattern)
    } else {
        pattern
    }
}

/// A compiled pattern plus the invert flag.
#[derive(Debug, Clone)]
pub struct Matcher {
    re: Regex,
    invert: bool,
}

impl Matcher {
    pub fn new(pattern: &str, options: &MatchOptions) -> Result<Self, GrepError> {
        let effective = effective_pattern(pattern, options.fixed, options.ignore_case);
        tracing::trace!(pattern, effective = %effective, "compiling pattern");

        let re = Regex::new(&effective).map_err(|source| GrepError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;

        Ok(Self {
            re,
            invert: options.invert,
        })
    }

    /// Whether a single line is selected.
    pub fn is_selected(&self, line: &str) -> bool {
        self.re.is_match(line) != self.invert
    }

    /// Indices of every selected line, in input order.
    pub fn find<S: AsRef<str>>(&self, lines: &[S]) -> MatchSet {
        let indices = lines
            .iter()
            .enumerate()
            .filter(|(_, line)| self.is_selected(line.as_ref()))
            .map(|(index, _)| index)
            .collect();
        MatchSet { indices }
    }
}
