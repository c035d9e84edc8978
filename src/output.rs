//! Rendering and placement of output documents.
//!
//! One JSON document per source unit, two-space indentation, optional
//! fields omitted entirely. The document lands next to its source file
//! with the extension swapped for `.json`, silently overwriting any
//! previous run's output.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConvertError;
use crate::tree::GenericNode;

/// The extension given to output documents.
pub const OUTPUT_EXTENSION: &str = "json";

/// Render a finished tree as a pretty-printed JSON document.
pub fn render(tree: &GenericNode) -> Result<String, ConvertError> {
    let mut document = serde_json::to_string_pretty(tree)?;
    document.push('\n');
    Ok(document)
}

/// Where the output document for a source unit goes:
/// `<dir>/<basename-without-extension>.json`.
pub fn output_path(source: &Path) -> PathBuf {
    source.with_extension(OUTPUT_EXTENSION)
}

/// Render `tree` and write it to the unit's output location.
pub fn write_unit(source: &Path, tree: &GenericNode) -> Result<PathBuf, ConvertError> {
    let out = output_path(source);
    let document = render(tree)?;
    fs::write(&out, document).map_err(|source| ConvertError::Write {
        path: out.clone(),
        source,
    })?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_swaps_extension() {
        assert_eq!(
            output_path(Path::new("/tmp/pkg/main.go")),
            PathBuf::from("/tmp/pkg/main.json")
        );
    }

    #[test]
    fn test_render_is_pretty_with_two_space_indent() {
        let mut tree = GenericNode::new("source_file");
        tree.children.push(GenericNode::new("function_declaration"));
        let document = render(&tree).unwrap();
        assert!(document.starts_with("{\n  \"type\": \"source_file\""));
        assert!(document.ends_with("\n"));
        assert!(document.contains("\n    {\n      \"type\": \"function_declaration\""));
    }

    #[test]
    fn test_render_omits_empty_optionals() {
        let document = render(&GenericNode::new("empty_statement")).unwrap();
        assert!(!document.contains("name"));
        assert!(!document.contains("children"));
        assert!(!document.contains("value"));
        assert!(!document.contains("comments"));
    }

    #[test]
    fn test_write_unit_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("demo.go");
        std::fs::write(&source, "package demo\n").unwrap();

        let out = write_unit(&source, &GenericNode::new("source_file")).unwrap();
        assert_eq!(out, dir.path().join("demo.json"));

        let first = std::fs::read_to_string(&out).unwrap();
        let mut bigger = GenericNode::new("source_file");
        bigger.children.push(GenericNode::new("function_declaration"));
        write_unit(&source, &bigger).unwrap();
        let second = std::fs::read_to_string(&out).unwrap();
        assert_ne!(first, second);
    }
}
