use super::Dialect;
use std::path::PathBuf;

/// A parsed source file together with the text its byte offsets refer to.
#[derive(Clone, Debug)]
pub struct SyntaxTree {
    pub tree: tree_sitter::Tree,
    pub source: String,
    pub path: PathBuf,
    pub dialect: Dialect,
}

impl SyntaxTree {
    pub fn root_node(&self) -> tree_sitter::Node<'_> {
        self.tree.root_node()
    }

    /// Source text covered by `node`.
    pub fn text(&self, node: &tree_sitter::Node) -> &str {
        &self.source[node.start_byte()..node.end_byte()]
    }
}
