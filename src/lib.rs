//! go2json - generic syntax-tree serialization for Go sources.
//!
//! go2json parses Go source files with the tree-sitter-go frontend and
//! converts each one into a language-independent generic tree, written
//! as a JSON document next to the source file.
//!
//! # Architecture
//!
//! - `parser`: frontend wrapper, one parsed unit per source file
//! - `convert`: the serialization engine - a closed grammar-kind schema,
//!   a per-kind dispatcher, an identity guard, and an iterative builder
//! - `tree`: the generic output record
//! - `output`: JSON rendering and output-path placement
//! - `cli`: source-unit discovery and the command surface
//!
//! The engine's contract: every syntax-node identity yields at most one
//! output node per run, output is always a finite rooted tree, and a
//! grammar kind outside the declared schema fails the unit rather than
//! being silently dropped.

pub mod cli;
pub mod convert;
pub mod error;
pub mod output;
pub mod parser;
pub mod tree;

pub use convert::{to_generic_tree, CycleGuard, NodeKind};
pub use error::ConvertError;
pub use parser::{parse_unit, ParsedUnit};
pub use tree::GenericNode;
