//! Export table extraction shared by both dialect adapters.

use super::declaration::{classify, DeclarationKind, ExportedDeclaration};
use super::jsdoc::leading_comments;
use super::parser::{binding_name, child_of_kind, node_line, node_location};
use super::ExportExtractor;
use crate::core::ast::SyntaxTree;
use crate::core::{Error, ExportRecord, ExportTable, Result};
use tree_sitter::Node;

/// Collect every export declared by the top-level statements of `ast`.
pub fn extract_exports<E>(ast: &SyntaxTree, extractor: &E) -> Result<ExportTable>
where
    E: ExportExtractor + ?Sized,
{
    let mut exports = ExportTable::new();
    let root = ast.root_node();
    let mut cursor = root.walk();

    for statement in root.named_children(&mut cursor) {
        if statement.kind() != "export_statement" {
            continue;
        }

        let declaration = classify(statement);
        let is_private = extractor.is_private(&leading_comments(&statement, ast));
        let mut sink = RecordSink {
            ast,
            exports: &mut exports,
            is_private,
        };
        collect_declaration(&declaration, extractor, &mut sink)?;
    }

    Ok(exports)
}

struct RecordSink<'a> {
    ast: &'a SyntaxTree,
    exports: &'a mut ExportTable,
    is_private: bool,
}

impl RecordSink<'_> {
    fn push(&mut self, name: String, line: usize) {
        self.exports.insert(ExportRecord {
            name,
            line,
            is_private: self.is_private,
        });
    }

    /// Record under the identifier in `node`'s `name` field.
    fn push_declared_name(&mut self, declaration: &ExportedDeclaration) -> Result<()> {
        match declaration.node.child_by_field_name("name") {
            Some(identifier) => {
                let name = binding_name(&identifier, self.ast);
                self.push(name, node_line(&identifier));
                Ok(())
            }
            None if declaration.is_default => Ok(()),
            None => Err(Error::unsupported(
                format!("anonymous {}", declaration.node.kind()),
                node_location(&declaration.node),
            )),
        }
    }

    fn push_declarators(&mut self, declaration: &Node) -> Result<()> {
        let mut cursor = declaration.walk();
        for declarator in declaration.named_children(&mut cursor) {
            if declarator.kind() != "variable_declarator" {
                continue;
            }
            let Some(target) = declarator.child_by_field_name("name") else {
                continue;
            };
            if target.kind() != "identifier" {
                return Err(Error::unsupported(target.kind(), node_location(&target)));
            }
            let name = binding_name(&target, self.ast);
            self.push(name, node_line(&target));
        }
        Ok(())
    }

    /// `export { a, b as c }` exports `a` and `c`.
    fn push_specifiers(&mut self, statement: &Node) {
        let Some(clause) = child_of_kind(statement, "export_clause") else {
            return;
        };
        let mut cursor = clause.walk();
        for specifier in clause.named_children(&mut cursor) {
            if specifier.kind() != "export_specifier" {
                continue;
            }
            let exported = specifier
                .child_by_field_name("alias")
                .or_else(|| specifier.child_by_field_name("name"));
            let line = exported
                .as_ref()
                .map(node_line)
                .unwrap_or_else(|| node_line(statement));
            if let Some(exported) = exported {
                let name = binding_name(&exported, self.ast);
                self.push(name, line);
            }
        }
    }
}

fn collect_declaration<E>(
    declaration: &ExportedDeclaration,
    extractor: &E,
    sink: &mut RecordSink,
) -> Result<()>
where
    E: ExportExtractor + ?Sized,
{
    match declaration.kind {
        kind if !extractor.supports(kind) => Err(
            Error::unsupported(declaration.node.kind(), node_location(&declaration.node)),
        ),
        DeclarationKind::Function
        | DeclarationKind::Class
        | DeclarationKind::Interface
        | DeclarationKind::Enum => sink.push_declared_name(declaration),
        DeclarationKind::TypeAlias => {
            if extractor.is_forwarding_type_alias(&declaration.node, sink.ast) {
                return Ok(());
            }
            sink.push_declared_name(declaration)
        }
        DeclarationKind::Variables => sink.push_declarators(&declaration.node),
        DeclarationKind::LocalExportList => {
            sink.push_specifiers(&declaration.statement);
            Ok(())
        }
        DeclarationKind::ForwardingExportList
        | DeclarationKind::WildcardExport
        | DeclarationKind::AnonymousDefault => Ok(()),
        DeclarationKind::Unsupported(kind) => Err(Error::unsupported(
            kind,
            node_location(&declaration.node),
        )),
    }
}
