//! Registry of the available value kinds.
//!
//! The kind set is closed at build time; the registry is a const table,
//! never mutated at runtime.

use std::fmt;
use std::str::FromStr;

use crate::any_tree::AnyTree;
use crate::errors::UnknownKindError;
use crate::kinds::{Fraction, Point, Word};
use crate::tree::OrderedTree;
use crate::value::TreeValue;

/// The value kinds a tree can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Integer,
    Word,
    Point,
    Fraction,
}

impl ValueKind {
    /// Every kind, in the order pickers should present them.
    pub const ALL: [ValueKind; 4] = [
        ValueKind::Integer,
        ValueKind::Word,
        ValueKind::Point,
        ValueKind::Fraction,
    ];

    /// Stable marker name, unique across kinds.
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Integer => <i64 as TreeValue>::TYPE_NAME,
            ValueKind::Word => Word::TYPE_NAME,
            ValueKind::Point => Point::TYPE_NAME,
            ValueKind::Fraction => Fraction::TYPE_NAME,
        }
    }

    /// Marker names in presentation order.
    pub fn names() -> impl Iterator<Item = &'static str> {
        Self::ALL.into_iter().map(Self::name)
    }

    /// Look a kind up by its marker name. Exact match only.
    pub fn from_name(name: &str) -> Result<Self, UnknownKindError> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| UnknownKindError(name.to_string()))
    }

    /// Rendered example value, shown to users as an input hint.
    pub fn example(self) -> String {
        match self {
            ValueKind::Integer => i64::example().to_string(),
            ValueKind::Word => Word::example().to_string(),
            ValueKind::Point => Point::example().to_string(),
            ValueKind::Fraction => Fraction::example().to_string(),
        }
    }

    /// Empty tree holding this kind.
    pub fn new_tree(self) -> AnyTree {
        match self {
            ValueKind::Integer => AnyTree::Integer(OrderedTree::new()),
            ValueKind::Word => AnyTree::Word(OrderedTree::new()),
            ValueKind::Point => AnyTree::Point(OrderedTree::new()),
            ValueKind::Fraction => AnyTree::Fraction(OrderedTree::new()),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ValueKind {
    type Err = UnknownKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_names_are_unique_and_stable() {
        let names: Vec<_> = ValueKind::names().collect();
        assert_eq!(names, ["Integer", "Word", "Point", "Fraction"]);
        for kind in ValueKind::ALL {
            assert_eq!(ValueKind::from_name(kind.name()), Ok(kind));
        }
    }

    #[test]
    fn test_every_example_parses_under_its_own_kind() {
        for kind in ValueKind::ALL {
            let mut tree = kind.new_tree();
            tree.add_text(&kind.example())
                .unwrap_or_else(|e| panic!("example for {} must parse: {}", kind, e));
            assert_eq!(tree.len(), 1);
        }
    }
}
