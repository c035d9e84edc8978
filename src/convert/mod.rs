//! Conversion of a parsed source unit into the generic tree.
//!
//! - `kind`: the closed schema of declared grammar kinds
//! - `dispatch`: per-kind shape extraction
//! - `guard`: identity tracking for one run
//! - `builder`: iterative bottom-up assembly

pub mod builder;
pub mod dispatch;
pub mod guard;
pub mod kind;

pub use guard::CycleGuard;
pub use kind::NodeKind;

use crate::error::ConvertError;
use crate::parser::ParsedUnit;
use crate::tree::GenericNode;

/// Convert a parsed unit into its generic tree.
///
/// A fresh [`CycleGuard`] is created per call and destroyed with it;
/// nothing is shared across units.
pub fn to_generic_tree(unit: &ParsedUnit) -> Result<GenericNode, ConvertError> {
    let mut guard = CycleGuard::new();
    builder::build(unit, unit.root(), &mut guard)
}
