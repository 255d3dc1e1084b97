//! Rank-indexed binary search tree with pluggable value kinds.
//!
//! Values live in sorted order and are addressed by in-order rank. The
//! kind of value a tree holds (integers, words, points, fractions) is a
//! plugin: parse, render, compare, plus a stable marker name the codec
//! writes as the first line of the serialized image.
//!
//! The layers, bottom up:
//!
//! * [`tree`] owns the container: sorted insert with duplicates, rank
//!   access and removal, explicit balancing, traversals.
//! * [`value`] and [`kinds`] define the plugin contract and the built-in
//!   kinds.
//! * [`registry`] enumerates the kinds and builds trees by marker name.
//! * [`any_tree`] wraps one tree per kind for callers that pick the kind
//!   at runtime.
//! * [`codec`] turns trees into line-oriented text images and back,
//!   all-or-nothing.

pub mod any_tree;
pub mod codec;
pub mod errors;
pub mod kinds;
pub mod registry;
pub mod tree;
pub mod util;
pub mod value;

pub use any_tree::AnyTree;
pub use errors::{
    DecodeError, EncodeError, IndexError, IndexResult, ParseValueError, UnknownKindError,
};
pub use kinds::{Fraction, Point, Word};
pub use registry::ValueKind;
pub use tree::{InOrderIter, OrderedTree};
pub use value::TreeValue;
