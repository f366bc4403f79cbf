//! Growing matched lines into context windows.
//!
//! Every matched index `i` pulls in the inclusive range
//! `[i - before, i + after]`, clamped to the input. Windows of neighbouring
//! matches are merged, so the result is a single ascending run of indices
//! where each line appears once no matter how many windows cover it.

use crate::matcher::MatchSet;

/// One line picked for output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectedLine {
    /// 0-based position in the input.
    pub index: usize,
    /// `true` for a line from the [`MatchSet`], `false` for pure context.
    pub is_match: bool,
}

/// Lines to print, strictly ascending by index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextIndex {
    lines: Vec<SelectedLine>,
}

impl ContextIndex {
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SelectedLine> + '_ {
        self.lines.iter()
    }

    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.lines.iter().map(|line| line.index)
    }
}

/// Number of context lines around each match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContextWindow {
    pub before: usize,
    pub after: usize,
}

impl ContextWindow {
    pub fn new(before: usize, after: usize) -> Self {
        Self { before, after }
    }

    /// Fills unset `-A`/`-B` values from the shared `-C` value.
    ///
    /// Only `None` falls back; an explicit `Some(0)` stays 0 even when
    /// `context` is larger.
    pub fn resolve(after: Option<usize>, before: Option<usize>, context: Option<usize>) -> Self {
        let context = context.unwrap_or(0);
        Self {
            before: before.unwrap_or(context),
            after: after.unwrap_or(context),
        }
    }

    /// Expands `matches` over an input of `line_count` lines.
    ///
    /// Indices of `matches` at or beyond `line_count` are ignored.
    pub fn expand(&self, matches: &MatchSet, line_count: usize) -> ContextIndex {
        let mut lines = Vec::new();
        if line_count == 0 {
            return ContextIndex { lines };
        }
        let last = line_count - 1;

        // First index not yet emitted. Matches come in ascending order, so
        // skipping everything below it is enough to merge overlapping windows.
        let mut next = 0;

        for matched in matches.iter().filter(|&i| i <= last) {
            let start = matched.saturating_sub(self.before).max(next);
            let end = matched.saturating_add(self.after).min(last);

            for index in start..=end {
                lines.push(SelectedLine {
                    index,
                    is_match: matches.contains(index),
                });
            }
            next = next.max(end + 1);
        }

        ContextIndex { lines }
    }
}
