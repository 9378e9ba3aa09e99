//! TypeScript module adapter (`.ts`, `.tsx`).
//!
//! Adds type aliases, interfaces and enums to the exported forms, reads
//! leading `/** ... */` comments as structured JSDoc, and skips the
//! `export type X = import("m").X` idiom (with or without `typeof`).

use super::declaration::DeclarationKind;
use super::jsdoc::has_private_tag;
use super::ExportExtractor;
use crate::core::ast::SyntaxTree;
use crate::core::Dialect;
use once_cell::sync::Lazy;
use regex::Regex;
use tree_sitter::Node;

/// `import("module").Name` or `typeof import("module").Name`, capturing `Name`
static IMPORT_TYPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^(?:typeof\s+)?import\s*\(\s*(?:"[^"]*"|'[^']*')\s*\)\s*\.\s*([A-Za-z_$][A-Za-z0-9_$]*)$"#).unwrap()
});

#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScriptExtractor;

impl ExportExtractor for TypeScriptExtractor {
    fn dialect(&self) -> Dialect {
        Dialect::TypeScript
    }

    fn supports(&self, _kind: DeclarationKind) -> bool {
        true
    }

    fn is_private(&self, leading_comments: &[&str]) -> bool {
        has_private_tag(leading_comments)
    }

    fn is_forwarding_type_alias(&self, alias: &Node, ast: &SyntaxTree) -> bool {
        let (Some(name), Some(value)) = (
            alias.child_by_field_name("name"),
            alias.child_by_field_name("value"),
        ) else {
            return false;
        };
        imported_type_name(ast.text(&value)) == Some(ast.text(&name))
    }
}

/// Name selected from an `import("module").Name` type, if `text` is exactly that.
fn imported_type_name(text: &str) -> Option<&str> {
    IMPORT_TYPE
        .captures(text.trim())
        .and_then(|captures| captures.get(1))
        .map(|name| name.as_str())
}
