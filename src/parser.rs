//! Go frontend wrapper around tree-sitter.
//!
//! Parsing is delegated entirely to `tree-sitter-go`; this module only
//! reads the source, runs the parser, and rejects units whose tree
//! contains syntax errors. A rejected unit never reaches conversion.

use std::fs;
use std::path::{Path, PathBuf};

use tree_sitter::{Node, Parser, Point, Tree};

use crate::error::ConvertError;

/// A parsed source unit: the tree-sitter tree plus the bytes it was
/// parsed from, kept for node text extraction.
pub struct ParsedUnit {
    /// The tree-sitter parse tree.
    pub tree: Tree,
    /// The original source bytes.
    pub source: Vec<u8>,
    /// The unit's path, for error reporting.
    pub path: PathBuf,
}

impl ParsedUnit {
    /// The root syntax node of this unit.
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Source text of a node.
    pub fn node_text(&self, node: Node) -> &str {
        node.utf8_text(&self.source).unwrap_or("")
    }

    /// The unit's declared package name, if any.
    pub fn package_name(&self) -> Option<String> {
        let root = self.root();
        let mut cursor = root.walk();
        let clause = root
            .named_children(&mut cursor)
            .find(|n| n.kind() == "package_clause")?;
        let mut clause_cursor = clause.walk();
        let ident = clause
            .named_children(&mut clause_cursor)
            .find(|n| n.kind() == "package_identifier")?;
        Some(self.node_text(ident).to_string())
    }
}

/// Read and parse one source unit from disk.
pub fn parse_unit(path: &Path) -> Result<ParsedUnit, ConvertError> {
    let source = fs::read(path).map_err(|source| ConvertError::Path {
        path: path.to_path_buf(),
        source,
    })?;
    parse(path, source)
}

/// Parse source bytes already in memory. `path` is used only for error
/// reporting and the returned unit's identity.
pub fn parse(path: &Path, source: Vec<u8>) -> Result<ParsedUnit, ConvertError> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_go::LANGUAGE.into())
        .expect("Go grammar is ABI-compatible with the linked tree-sitter");

    let tree = parser
        .parse(&source, None)
        .ok_or_else(|| ConvertError::Parse {
            path: path.to_path_buf(),
            line: 0,
            column: 0,
        })?;

    if let Some(point) = first_error_position(&tree) {
        return Err(ConvertError::Parse {
            path: path.to_path_buf(),
            line: point.row + 1,
            column: point.column + 1,
        });
    }

    Ok(ParsedUnit {
        tree,
        source,
        path: path.to_path_buf(),
    })
}

/// Position of the leftmost error or missing node, if the tree has one.
///
/// Walks with an explicit cursor, descending only into subtrees that
/// report an error below them.
fn first_error_position(tree: &Tree) -> Option<Point> {
    let mut cursor = tree.walk();
    loop {
        let node = cursor.node();
        if node.is_error() || node.is_missing() {
            return Some(node.start_position());
        }
        if node.has_error() && cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return None;
            }
        }
    }
}
