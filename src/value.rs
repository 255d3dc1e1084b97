//! The capability contract shared by every tree value kind.

use std::fmt;

use crate::errors::ParseResult;

/// Capability set a value kind brings to the tree.
///
/// Rendering goes through [`fmt::Display`] and ordering through [`Ord`].
/// Parsing and rendering are inverse up to comparison: parsing a rendered
/// value succeeds and the result compares equal to the original.
pub trait TreeValue: Clone + Ord + fmt::Debug + fmt::Display {
    /// Stable marker name, unique across kinds. Doubles as the first line
    /// of the serialized image.
    const TYPE_NAME: &'static str;

    /// Parse user or codec text into a value.
    ///
    /// Pure and deterministic. Malformed input yields a typed error and
    /// never panics.
    fn parse(text: &str) -> ParseResult<Self>;

    /// A value whose rendering is valid input for [`TreeValue::parse`],
    /// shown to users as an input hint.
    fn example() -> Self;
}
