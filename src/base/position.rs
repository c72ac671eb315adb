//! Cursor positions and text ranges.
//!
//! Everything here is 0-indexed, matching the convention editors hand us.
//! The remote index speaks 1-based coordinates; conversion happens at the
//! `index` / `project` boundary, never here.

/// A position in source code (0-indexed line and column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// A range in source code (0-indexed, end column exclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// A span covering `[start_column, end_column)` on a single line.
    pub fn single_line(line: usize, start_column: usize, end_column: usize) -> Self {
        Self {
            start: Position::new(line, start_column),
            end: Position::new(line, end_column),
        }
    }

    /// Whether the span starts and ends on the same line.
    ///
    /// Identifier spans are always single-line; anything else is rejected
    /// before occurrence-key derivation.
    pub fn is_single_line(&self) -> bool {
        self.start.line == self.end.line
    }
}
