use crate::core::ast::SyntaxTree;
use declaration::DeclarationKind;
use crate::core::{Dialect, FileTables, Result};
use std::path::Path;
use tree_sitter::Node;

pub mod declaration;
pub mod exports;
pub mod imports;
pub mod javascript;
pub mod jsdoc;
pub mod parser;
pub mod typescript;

pub use javascript::JavaScriptExtractor;
pub use typescript::TypeScriptExtractor;

/// Dialect-specific extraction of export and import tables.
///
/// Both adapters share the statement walk in [`exports`] and [`imports`];
/// an implementation decides which declaration kinds its grammar has and how
/// doc comments mark a declaration private.
pub trait ExportExtractor: Send + Sync {
    fn dialect(&self) -> Dialect;

    /// Run the syntax analyzer for this dialect.
    fn parse(&self, content: &str, path: &Path) -> Result<SyntaxTree> {
        parser::parse_source(content, path, self.dialect())
    }

    /// Whether this dialect has the exported declaration form `kind`.
    fn supports(&self, kind: DeclarationKind) -> bool;

    /// Whether the comments leading a statement mark it `@private`.
    fn is_private(&self, leading_comments: &[&str]) -> bool;

    /// `export type X = import("m").X` republishes a type instead of declaring one.
    fn is_forwarding_type_alias(&self, _alias: &Node, _ast: &SyntaxTree) -> bool {
        false
    }

    fn extract(&self, ast: &SyntaxTree) -> Result<FileTables> {
        Ok(FileTables {
            exports: exports::extract_exports(ast, self)?,
            imports: imports::extract_imports(ast),
        })
    }
}

static JAVASCRIPT: JavaScriptExtractor = JavaScriptExtractor;
static TYPESCRIPT: TypeScriptExtractor = TypeScriptExtractor;

pub fn get_extractor(dialect: Dialect) -> &'static dyn ExportExtractor {
    match dialect {
        Dialect::EcmaScript => &JAVASCRIPT,
        Dialect::TypeScript => &TYPESCRIPT,
    }
}

/// Parse `content` and extract its tables with `extractor`.
pub fn analyze_source(
    content: &str,
    path: &Path,
    extractor: &dyn ExportExtractor,
) -> Result<FileTables> {
    extractor
        .parse(content, path)
        .and_then(|ast| extractor.extract(&ast))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_extractor_matches_dialect() {
        assert_eq!(
            get_extractor(Dialect::EcmaScript).dialect(),
            Dialect::EcmaScript
        );
        assert_eq!(
            get_extractor(Dialect::TypeScript).dialect(),
            Dialect::TypeScript
        );
    }

    #[test]
    fn test_analyze_source_runs_parse_and_extract() {
        let tables = analyze_source(
            "import { a } from './a';\nexport { a };",
            Path::new("x.js"),
            get_extractor(Dialect::EcmaScript),
        )
        .unwrap();

        assert_eq!(tables.exports.names().collect::<Vec<_>>(), vec!["a"]);
        assert_eq!(tables.imports.len(), 1);
    }
}
