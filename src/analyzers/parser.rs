//! Tree-sitter parser integration for JavaScript/TypeScript
//!
//! Provides parsing using tree-sitter grammars for JS/JSX and TS/TSX, and
//! the small node helpers the extractors share.

use crate::core::ast::SyntaxTree;
use crate::core::{Dialect, Error, Result, SourceLocation};
use std::path::Path;
use tree_sitter::{Language as TsLanguage, Node, Parser, Tree};

/// Get the tree-sitter language for a dialect; `.tsx` files need the TSX grammar
fn get_language(dialect: Dialect, path: &Path) -> TsLanguage {
    match dialect {
        Dialect::EcmaScript => tree_sitter_javascript::LANGUAGE.into(),
        Dialect::TypeScript if is_tsx(path) => tree_sitter_typescript::LANGUAGE_TSX.into(),
        Dialect::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
    }
}

fn is_tsx(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("tsx"))
}

/// Parse source code into a syntax tree, rejecting trees that contain errors.
///
/// ECMAScript files that the JavaScript grammar rejects are retried with the
/// TSX grammar, which covers Flow's `type`, `interface` and `import type`
/// forms. When both grammars fail the JavaScript error is reported.
pub fn parse_source(content: &str, path: &Path, dialect: Dialect) -> Result<SyntaxTree> {
    let tree = match (dialect, parse_tree(content, get_language(dialect, path), dialect)) {
        (Dialect::EcmaScript, Err(error @ Error::Syntax { .. })) => {
            log::trace!(
                "Retrying {} with the TSX grammar: {}",
                path.display(),
                error
            );
            parse_tree(content, tree_sitter_typescript::LANGUAGE_TSX.into(), dialect)
                .map_err(|_| error)?
        }
        (_, result) => result?,
    };

    Ok(SyntaxTree {
        tree,
        source: content.to_string(),
        path: path.to_path_buf(),
        dialect,
    })
}

fn parse_tree(content: &str, language: TsLanguage, dialect: Dialect) -> Result<Tree> {
    let mut parser = Parser::new();
    parser.set_language(&language).map_err(|e| Error::Grammar {
        dialect,
        message: e.to_string(),
    })?;

    let tree = parser.parse(content, None).ok_or_else(|| Error::Syntax {
        message: "parser produced no tree".to_string(),
        location: SourceLocation::new(1, 1),
    })?;

    if let Some(node) = first_error(tree.root_node()) {
        let message = if node.is_missing() {
            format!("missing `{}`", node.kind())
        } else {
            "unexpected token".to_string()
        };
        return Err(Error::Syntax {
            message,
            location: node_location(&node),
        });
    }

    Ok(tree)
}

/// Find the first error or missing node in document order
pub fn first_error(node: Node) -> Option<Node> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }

    let mut cursor = node.walk();
    let children: Vec<Node> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_error)
}

/// Get the line number for a tree-sitter node (1-indexed)
pub fn node_line(node: &Node) -> usize {
    node.start_position().row + 1
}

/// Get the column number for a tree-sitter node (1-indexed)
pub fn node_column(node: &Node) -> usize {
    node.start_position().column + 1
}

pub fn node_location(node: &Node) -> SourceLocation {
    SourceLocation::new(node_line(node), node_column(node))
}

/// Name carried by an identifier or string node (`"a-b"` in `export { x as "a-b" }`)
pub fn binding_name(node: &Node, ast: &SyntaxTree) -> String {
    let text = ast.text(node);
    match node.kind() {
        "string" => text
            .trim_matches(|c| c == '"' || c == '\'')
            .to_string(),
        _ => text.to_string(),
    }
}

/// Whether `node` has an anonymous child token with the given text
pub fn has_token(node: &Node, token: &str) -> bool {
    let mut cursor = node.walk();
    let found = node
        .children(&mut cursor)
        .any(|child| !child.is_named() && child.kind() == token);
    found
}

/// First named child of the given kind
pub fn child_of_kind<'tree>(node: &Node<'tree>, kind: &str) -> Option<Node<'tree>> {
    let mut cursor = node.walk();
    let found = node
        .named_children(&mut cursor)
        .find(|child| child.kind() == kind);
    found
}
