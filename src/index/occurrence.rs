//! Occurrence keys.
//!
//! An occurrence has no stored identity of its own: the index keys its
//! occurrence tables by the 1-based `(line, startColumn, endColumn)` triple
//! of the identifier's word range, rendered as `line-start-end`. The key is
//! recomputed from the cursor's word span at lookup time, so the tokenizer
//! in [`core::text_utils`](crate::core::text_utils) is part of the contract.

use std::fmt;

use crate::base::Span;

/// Key into a module's occurrence table (1-based coordinates).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OccurrenceKey {
    pub line: u32,
    pub start_column: u32,
    pub end_column: u32,
}

impl OccurrenceKey {
    pub fn new(line: u32, start_column: u32, end_column: u32) -> Self {
        Self {
            line,
            start_column,
            end_column,
        }
    }

    /// Derive a key from a 0-indexed word span.
    ///
    /// Returns `None` for a span crossing lines; identifiers never do, but
    /// the guard keeps bad host input away from the coordinate arithmetic.
    pub fn from_word_span(span: Span) -> Option<Self> {
        if !span.is_single_line() {
            tracing::debug!(
                start_line = span.start.line,
                end_line = span.end.line,
                "word span crosses lines, no occurrence key"
            );
            return None;
        }
        Some(Self::new(
            span.start.line as u32 + 1,
            span.start.column as u32 + 1,
            span.end.column as u32 + 1,
        ))
    }
}

impl fmt::Display for OccurrenceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.line, self.start_column, self.end_column)
    }
}
