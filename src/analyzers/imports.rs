//! Import table extraction.
//!
//! `import * as ns` bindings are never recorded: a namespace object is a new
//! local name and cannot alias an export of the importing file.

use super::parser::{binding_name, child_of_kind};
use crate::core::ast::SyntaxTree;
use crate::core::{ImportRecord, ImportTable};
use std::path::{Path, PathBuf};
use tree_sitter::Node;

pub fn extract_imports(ast: &SyntaxTree) -> ImportTable {
    let origin_directory = ast
        .path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();
    let mut imports = Vec::new();
    let root = ast.root_node();
    let mut cursor = root.walk();

    for statement in root.named_children(&mut cursor) {
        if statement.kind() != "import_statement" {
            continue;
        }
        // Side-effect imports and `import x = require(...)` bind nothing here
        let Some(clause) = child_of_kind(&statement, "import_clause") else {
            continue;
        };
        let module = statement
            .child_by_field_name("source")
            .map(|source| binding_name(&source, ast))
            .unwrap_or_default();
        let context = ImportContext {
            ast,
            module: &module,
            origin_directory: &origin_directory,
        };
        context.collect_clause(&clause, &mut imports);
    }

    imports
}

struct ImportContext<'a> {
    ast: &'a SyntaxTree,
    module: &'a str,
    origin_directory: &'a PathBuf,
}

impl ImportContext<'_> {
    fn record(&self, name: String, is_default: bool, is_renamed: bool) -> ImportRecord {
        ImportRecord {
            name,
            module: self.module.to_string(),
            origin_directory: self.origin_directory.clone(),
            is_default,
            is_renamed,
        }
    }

    fn collect_clause(&self, clause: &Node, imports: &mut ImportTable) {
        let mut cursor = clause.walk();
        for binding in clause.named_children(&mut cursor) {
            match binding.kind() {
                "identifier" => {
                    let name = binding_name(&binding, self.ast);
                    imports.push(self.record(name, true, false));
                }
                "named_imports" => self.collect_named(&binding, imports),
                _ => {}
            }
        }
    }

    /// `{ a, b as c }`: the local name is the alias when present.
    fn collect_named(&self, named_imports: &Node, imports: &mut ImportTable) {
        let mut cursor = named_imports.walk();
        for specifier in named_imports.named_children(&mut cursor) {
            if specifier.kind() != "import_specifier" {
                continue;
            }
            let Some(imported) = specifier.child_by_field_name("name") else {
                continue;
            };
            let imported = binding_name(&imported, self.ast);
            let local = specifier
                .child_by_field_name("alias")
                .map(|alias| binding_name(&alias, self.ast))
                .unwrap_or_else(|| imported.clone());
            let is_renamed = local != imported;
            imports.push(self.record(local, false, is_renamed));
        }
    }
}
