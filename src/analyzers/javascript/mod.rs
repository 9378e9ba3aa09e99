//! ECMAScript module adapter (`.js`, `.mjs`, `.jsx`).
//!
//! Flow type aliases and interfaces are exported like any other declaration;
//! enums are not part of the dialect. The `@private` marker is found by a
//! plain substring search over the statement's leading comments.

use super::declaration::DeclarationKind;
use super::jsdoc::mentions_private;
use super::ExportExtractor;
use crate::core::Dialect;

#[derive(Debug, Clone, Copy, Default)]
pub struct JavaScriptExtractor;

impl ExportExtractor for JavaScriptExtractor {
    fn dialect(&self) -> Dialect {
        Dialect::EcmaScript
    }

    /// Flow has type aliases and interfaces but no enums.
    fn supports(&self, kind: DeclarationKind) -> bool {
        kind != DeclarationKind::Enum
    }

    fn is_private(&self, leading_comments: &[&str]) -> bool {
        mentions_private(leading_comments)
    }
}
