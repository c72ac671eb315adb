//! Position resolution: cursor coordinates to an identifier.

use std::path::Path;
use std::sync::Arc;

use super::ModuleCache;
use crate::base::{Position, Span};
use crate::core::text_utils::word_span_at;
use crate::index::{IdentifierInfo, IdentifierOccurrence, LocationInfo, OccurrenceKey, OccurrenceSort};

/// What the cursor is on.
#[derive(Debug, Clone)]
pub enum Subject {
    /// An ordinary value or type identifier.
    Identifier(IdentifierInfo),
    /// A module name; the payload is the module's own location, so
    /// module-name hovers and jumps skip the identifier table entirely.
    Module(LocationInfo),
}

/// A successfully resolved cursor position.
#[derive(Debug, Clone)]
pub struct ResolvedPosition {
    /// The word range under the cursor (0-indexed, host convention).
    pub span: Span,
    pub occurrence: IdentifierOccurrence,
    pub subject: Subject,
}

/// Maps a `(file, position)` pair to an occurrence and its identifier.
///
/// Every failure point is a distinct soft miss: logged, `None` returned,
/// and a best-effort background prefetch of the module scheduled so a
/// subsequent call is more likely to succeed. Nothing here is an error.
pub struct PositionResolver {
    modules: Arc<ModuleCache>,
}

impl PositionResolver {
    pub fn new(modules: Arc<ModuleCache>) -> Self {
        Self { modules }
    }

    pub async fn resolve(
        &self,
        file: &Path,
        text: &str,
        position: Position,
    ) -> Option<ResolvedPosition> {
        let Some(line_text) = text.lines().nth(position.line) else {
            tracing::debug!(line = position.line, "cursor line beyond end of file");
            return None;
        };
        let Some((start, end)) = word_span_at(line_text, position.column) else {
            tracing::trace!(
                line = position.line,
                column = position.column,
                "no identifier token at cursor"
            );
            return None;
        };
        let span = Span::single_line(position.line, start, end);
        let key = OccurrenceKey::from_word_span(span)?;

        let Some(module) = self.modules.get(file).await else {
            tracing::debug!(file = %file.display(), "module info unavailable");
            self.modules.prefetch(file.to_path_buf());
            return None;
        };

        let Some(occurrence) = module.occurrences.get(&key.to_string()) else {
            tracing::debug!(%key, file = %file.display(), "no occurrence at cursor");
            self.modules.prefetch(file.to_path_buf());
            return None;
        };

        // Module-name occurrences carry their own location; the subject is
        // the module itself.
        if let OccurrenceSort::ModuleId { contents } = &occurrence.sort {
            return Some(ResolvedPosition {
                span,
                occurrence: occurrence.clone(),
                subject: Subject::Module(contents.clone()),
            });
        }

        let Some(internal_id) = occurrence.internal_id.as_deref().filter(|id| !id.is_empty())
        else {
            tracing::debug!(%key, "occurrence has no internal id");
            self.modules.prefetch(file.to_path_buf());
            return None;
        };

        let Some(info) = module.identifiers.get(internal_id) else {
            tracing::debug!(internal_id, "internal id missing from identifier table");
            self.modules.prefetch(file.to_path_buf());
            return None;
        };

        Some(ResolvedPosition {
            span,
            occurrence: occurrence.clone(),
            subject: Subject::Identifier(info.clone()),
        })
    }
}
