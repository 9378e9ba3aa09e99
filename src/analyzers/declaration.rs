//! Classification of top-level `export` statements.
//!
//! Every exported form maps to exactly one [`DeclarationKind`]; forms the
//! extractors do not understand land in [`DeclarationKind::Unsupported`] so the
//! caller has to reject them explicitly.

use super::parser::{child_of_kind, has_token};
use tree_sitter::Node;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    /// `function f() {}`, generators and TypeScript overload signatures
    Function,
    /// `class C {}` and `abstract class C {}`
    Class,
    /// `const a = 1, b = 2;` / `let` / `var`
    Variables,
    TypeAlias,
    Interface,
    Enum,
    /// `export { a, b as c };`
    LocalExportList,
    /// `export { a } from "m";`
    ForwardingExportList,
    /// `export * from "m";` and `export * as ns from "m";`
    WildcardExport,
    /// `export default <expression>;`, anonymous default declarations, `export = x;`
    AnonymousDefault,
    /// Anything else, tagged with the grammar node kind
    Unsupported(&'static str),
}

impl DeclarationKind {
    fn from_declaration_node(kind: &'static str) -> Self {
        match kind {
            "function_declaration" | "generator_function_declaration" | "function_signature" => {
                Self::Function
            }
            "class_declaration" | "abstract_class_declaration" => Self::Class,
            "lexical_declaration" | "variable_declaration" => Self::Variables,
            "type_alias_declaration" => Self::TypeAlias,
            "interface_declaration" => Self::Interface,
            "enum_declaration" => Self::Enum,
            other => Self::Unsupported(other),
        }
    }
}

/// A classified `export_statement`.
#[derive(Debug, Clone, Copy)]
pub struct ExportedDeclaration<'tree> {
    pub kind: DeclarationKind,
    /// The whole `export ...` statement.
    pub statement: Node<'tree>,
    /// The node carrying the declaration (the statement itself for lists).
    pub node: Node<'tree>,
    pub is_default: bool,
}

/// Classify an `export_statement` node.
pub fn classify(statement: Node) -> ExportedDeclaration {
    let is_default = has_token(&statement, "default");
    let declared = |kind, node| ExportedDeclaration {
        kind,
        statement,
        node,
        is_default,
    };

    if let Some(declaration) = statement.child_by_field_name("declaration") {
        let declaration = unwrap_ambient(declaration);
        if declaration.kind() == "statement_block" {
            return declared(DeclarationKind::Unsupported("global_augmentation"), declaration);
        }
        let kind = DeclarationKind::from_declaration_node(declaration.kind());
        return declared(kind, declaration);
    }

    if let Some(value) = statement.child_by_field_name("value") {
        return declared(classify_default_value(&value), value);
    }

    if has_token(&statement, "=") {
        return declared(DeclarationKind::AnonymousDefault, statement);
    }

    let has_source = statement.child_by_field_name("source").is_some();

    if child_of_kind(&statement, "export_clause").is_some() {
        let kind = if has_source {
            DeclarationKind::ForwardingExportList
        } else {
            DeclarationKind::LocalExportList
        };
        return declared(kind, statement);
    }

    if has_source
        && (has_token(&statement, "*") || child_of_kind(&statement, "namespace_export").is_some())
    {
        return declared(DeclarationKind::WildcardExport, statement);
    }

    if has_token(&statement, "namespace") {
        return declared(DeclarationKind::Unsupported("namespace_export_declaration"), statement);
    }

    declared(DeclarationKind::Unsupported(statement.kind()), statement)
}

/// `declare function f(): void;` wraps the declaration it qualifies.
fn unwrap_ambient(node: Node) -> Node {
    if node.kind() != "ambient_declaration" {
        return node;
    }
    let mut cursor = node.walk();
    let inner = node
        .named_children(&mut cursor)
        .find(|child| child.kind() != "comment");
    inner.unwrap_or(node)
}

/// `export default function named() {}` may surface as an expression; it still
/// declares `named`.
fn classify_default_value(value: &Node) -> DeclarationKind {
    let named = value.child_by_field_name("name").is_some();
    match value.kind() {
        "function_expression" | "function" | "generator_function" if named => {
            DeclarationKind::Function
        }
        "class" if named => DeclarationKind::Class,
        _ => DeclarationKind::AnonymousDefault,
    }
}
