//! Documentation comments attached to top-level statements.
//!
//! Two readers share the same input, the run of comments that immediately
//! precedes a statement: a lenient substring scan and a structured JSDoc tag
//! reader that only looks at `/** ... */` block tags.

use crate::core::ast::SyntaxTree;
use tree_sitter::Node;

const PRIVATE_TAG: &str = "private";

/// Comments directly preceding `statement`, nearest last.
///
/// A comment that starts on the line where the previous statement ends
/// trails that statement and is not part of the run.
pub fn leading_comments<'a>(statement: &Node, ast: &'a SyntaxTree) -> Vec<&'a str> {
    let mut comments = Vec::new();
    let mut current = statement.prev_sibling();
    while let Some(node) = current {
        if node.kind() != "comment" {
            let end_row = node.end_position().row;
            comments.retain(|comment: &Node| comment.start_position().row != end_row);
            break;
        }
        comments.push(node);
        current = node.prev_sibling();
    }
    comments.reverse();
    comments.iter().map(|comment| ast.text(comment)).collect()
}

/// Any leading comment mentions `@private` anywhere in its text.
pub fn mentions_private(comments: &[&str]) -> bool {
    comments.iter().any(|comment| comment.contains("@private"))
}

/// Any leading JSDoc block declares an `@private` tag.
pub fn has_private_tag(comments: &[&str]) -> bool {
    comments
        .iter()
        .filter_map(|comment| jsdoc_body(comment))
        .any(|body| block_tags(body).any(|tag| tag == PRIVATE_TAG))
}

/// Inner text of a `/** ... */` comment; `None` for line or plain block comments.
fn jsdoc_body(comment: &str) -> Option<&str> {
    comment.strip_prefix("/**")?.strip_suffix("*/")
}

/// Tag names of a JSDoc body: an `@name` that begins a line once the leading
/// `*` gutter is stripped.
fn block_tags(body: &str) -> impl Iterator<Item = &str> {
    body.lines().filter_map(|line| {
        let line = line.trim_start();
        let line = line.strip_prefix('*').unwrap_or(line).trim_start();
        let rest = line.strip_prefix('@')?;
        let end = rest
            .find(|c: char| !(c.is_alphanumeric() || c == '_' || c == '-'))
            .unwrap_or(rest.len());
        let tag = &rest[..end];
        (!tag.is_empty()).then_some(tag)
    })
}
