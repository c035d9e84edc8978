//! Bottom-up assembly of the generic tree.
//!
//! Traversal runs over an explicit frame stack instead of call
//! recursion, so depth is bounded by heap rather than call-stack
//! capacity. The builder performs no cycle logic of its own: every
//! identity is offered to the [`CycleGuard`] before it is scheduled, and
//! refused identities contribute nothing.

use tree_sitter::Node;

use crate::error::ConvertError;
use crate::parser::ParsedUnit;
use crate::tree::GenericNode;

use super::dispatch::{self, NodeShape};
use super::guard::CycleGuard;

/// One node under construction plus the children still to convert.
struct Frame<'a> {
    node: GenericNode,
    pending: std::vec::IntoIter<Node<'a>>,
}

impl<'a> Frame<'a> {
    fn new(shape: NodeShape<'a>) -> Self {
        Self {
            node: GenericNode {
                name: shape.name,
                kind: shape.kind.to_string(),
                children: Vec::new(),
                value: shape.value,
                comments: shape.comments,
            },
            pending: shape.children.into_iter(),
        }
    }
}

/// Convert the subtree rooted at `root` into a generic tree.
///
/// The guard must be claimed for a node before its children are walked;
/// that is what terminates traversal on inputs where the same identity
/// is reachable more than once.
pub fn build(
    unit: &ParsedUnit,
    root: Node<'_>,
    guard: &mut CycleGuard,
) -> Result<GenericNode, ConvertError> {
    guard.claim(root.id());
    let mut stack = vec![Frame::new(dispatch::shape(unit, root)?)];
    let mut finished_root = None;

    while let Some(top) = stack.last_mut() {
        match top.pending.next() {
            Some(child) => {
                if !guard.claim(child.id()) {
                    continue;
                }
                let child_shape = dispatch::shape(unit, child)?;
                stack.push(Frame::new(child_shape));
            }
            None => {
                let Some(done) = stack.pop() else { break };
                match stack.last_mut() {
                    Some(parent) => parent.node.children.push(done.node),
                    None => finished_root = Some(done.node),
                }
            }
        }
    }

    Ok(finished_root.unwrap_or_default())
}
