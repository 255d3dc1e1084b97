//! Runtime-kinded tree facade.
//!
//! One variant per value kind, so values of different kinds can never end
//! up in the same tree. Callers that pick the kind at runtime go through
//! text: values enter as parseable input and leave rendered.

use std::fmt;

use tracing::instrument;

use crate::errors::{IndexResult, ParseResult};
use crate::kinds::{Fraction, Point, Word};
use crate::registry::ValueKind;
use crate::tree::OrderedTree;
use crate::value::TreeValue;

/// Tree over a kind selected at runtime.
#[derive(Debug)]
pub enum AnyTree {
    Integer(OrderedTree<i64>),
    Word(OrderedTree<Word>),
    Point(OrderedTree<Point>),
    Fraction(OrderedTree<Fraction>),
}

macro_rules! with_tree {
    ($any:expr, $tree:ident => $body:expr) => {
        match $any {
            AnyTree::Integer($tree) => $body,
            AnyTree::Word($tree) => $body,
            AnyTree::Point($tree) => $body,
            AnyTree::Fraction($tree) => $body,
        }
    };
}

fn add_parsed<V: TreeValue>(tree: &mut OrderedTree<V>, text: &str) -> ParseResult<()> {
    tree.add(V::parse(text)?);
    Ok(())
}

fn rendered_at<V: TreeValue>(tree: &OrderedTree<V>, index: usize) -> IndexResult<String> {
    tree.at(index).map(ToString::to_string)
}

fn rendered_delete<V: TreeValue>(tree: &mut OrderedTree<V>, index: usize) -> IndexResult<String> {
    tree.delete(index).map(|value| value.to_string())
}

impl AnyTree {
    /// Empty tree of the given kind. Same as [`ValueKind::new_tree`].
    pub fn new(kind: ValueKind) -> Self {
        kind.new_tree()
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            AnyTree::Integer(_) => ValueKind::Integer,
            AnyTree::Word(_) => ValueKind::Word,
            AnyTree::Point(_) => ValueKind::Point,
            AnyTree::Fraction(_) => ValueKind::Fraction,
        }
    }

    /// Parse `text` with this tree's kind and insert the value.
    ///
    /// A parse failure inserts nothing.
    #[instrument(level = "trace", skip(self))]
    pub fn add_text(&mut self, text: &str) -> ParseResult<()> {
        with_tree!(self, tree => add_parsed(tree, text))
    }

    /// Rendered value at rank `index`.
    pub fn at(&self, index: usize) -> IndexResult<String> {
        with_tree!(self, tree => rendered_at(tree, index))
    }

    /// Remove the value at rank `index`, returning its rendering.
    pub fn delete(&mut self, index: usize) -> IndexResult<String> {
        with_tree!(self, tree => rendered_delete(tree, index))
    }

    /// Rebuild the wrapped tree to minimal height.
    pub fn balance(&mut self) {
        with_tree!(self, tree => tree.balance());
    }

    pub fn clear(&mut self) {
        with_tree!(self, tree => tree.clear());
    }

    pub fn is_empty(&self) -> bool {
        with_tree!(self, tree => tree.is_empty())
    }

    pub fn len(&self) -> usize {
        with_tree!(self, tree => tree.len())
    }

    pub fn height(&self) -> usize {
        with_tree!(self, tree => tree.height())
    }

    /// In-order renderings, ascending.
    pub fn values(&self) -> Vec<String> {
        with_tree!(self, tree => tree.iter().map(ToString::to_string).collect())
    }
}

impl fmt::Display for AnyTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        with_tree!(self, tree => write!(f, "{}", tree))
    }
}
