//! Text manipulation utilities for working with source code.
//!
//! The token grammar carves identifiers out of raw text the same way the
//! index server did when it assigned occurrence coordinates, so the two
//! sides agree on word boundaries. A token starts with an alphanumeric,
//! underscore, or apostrophe and continues with those plus `.`, which keeps
//! qualified names like `Data.Map.lookup` as one token and leaves symbolic
//! operators unmatched.

/// Check if a character can start an identifier token.
///
/// Uses Unicode Standard Annex #31 continue rules (covers alphanumerics and
/// underscore) plus the apostrophe, which Haskell allows in names.
#[inline]
pub fn is_word_start(c: char) -> bool {
    unicode_ident::is_xid_continue(c) || c == '\''
}

/// Check if a character can continue an identifier token.
///
/// Adds `.` so module-qualified names stay in one token.
#[inline]
pub fn is_word_continue(c: char) -> bool {
    is_word_start(c) || c == '.'
}

/// Find the boundaries of the identifier token at `column` in a line.
///
/// Returns `Some((start, end))` in character indices, `end` exclusive, or
/// `None` if the cursor is not on a token. Leading dots are trimmed off the
/// front of the match since a token cannot start with `.`; if that trims the
/// cursor out of the token, there is no match.
pub fn word_span_at(line: &str, column: usize) -> Option<(usize, usize)> {
    let chars: Vec<char> = line.chars().collect();

    if column >= chars.len() || !is_word_continue(chars[column]) {
        return None;
    }

    let mut start = column;
    while start > 0 && is_word_continue(chars[start - 1]) {
        start -= 1;
    }

    let mut end = column;
    while end < chars.len() && is_word_continue(chars[end]) {
        end += 1;
    }

    // A run of continue-characters may begin with dots (e.g. the cursor on
    // the ".." range operator); those cannot open an identifier.
    while start < end && !is_word_start(chars[start]) {
        start += 1;
    }

    if start == end || column < start {
        return None;
    }

    Some((start, end))
}

/// Extract the identifier token at the cursor position in a line of text.
///
/// # Example
/// ```
/// use glance::core::text_utils::word_at;
///
/// let line = "x = Data.Map.lookup k m";
/// assert_eq!(word_at(line, 6), Some("Data.Map.lookup".to_string()));
/// assert_eq!(word_at(line, 2), None); // on '='
/// ```
pub fn word_at(line: &str, column: usize) -> Option<String> {
    let (start, end) = word_span_at(line, column)?;
    Some(line.chars().skip(start).take(end - start).collect())
}
