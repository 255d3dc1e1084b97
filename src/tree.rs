//! Rank-indexed binary search tree with owning links.
//!
//! Nodes own their children; recursive operations hand back the possibly
//! replaced subtree root. Every node caches its subtree size, so rank
//! descent and length queries never walk the whole tree.

use std::cmp::Ordering;
use std::fmt;

use termtree::Tree as TextTree;
use tracing::{debug, instrument};

use crate::errors::{IndexError, IndexResult};

/// Binary search tree with rank access and duplicates.
///
/// Left subtree values are strictly less than the node's; right subtree
/// values are greater or equal. `balance` is the only restructuring
/// operation; mutation never rebalances on its own.
#[derive(Debug)]
pub struct OrderedTree<V> {
    root: Option<Box<Node<V>>>,
}

#[derive(Debug)]
struct Node<V> {
    value: V,
    size: usize,
    left: Option<Box<Node<V>>>,
    right: Option<Box<Node<V>>>,
}

impl<V> Node<V> {
    fn new(value: V) -> Self {
        Self {
            value,
            size: 1,
            left: None,
            right: None,
        }
    }

    fn update(&mut self) {
        self.size = 1 + Self::size(&self.left) + Self::size(&self.right);
    }

    fn size(node: &Option<Box<Node<V>>>) -> usize {
        node.as_ref().map_or(0, |n| n.size)
    }
}

impl<V> OrderedTree<V> {
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Number of stored values.
    pub fn len(&self) -> usize {
        Node::size(&self.root)
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Drop every value. The value kind is the type parameter and is
    /// unaffected.
    #[instrument(level = "trace", skip(self))]
    pub fn clear(&mut self) {
        self.root = None;
    }

    /// Value at in-order rank `index` (0-based).
    #[instrument(level = "trace", skip(self))]
    pub fn at(&self, index: usize) -> IndexResult<&V> {
        match Self::node_at(&self.root, index) {
            Some(value) => Ok(value),
            None => Err(IndexError {
                index,
                len: self.len(),
            }),
        }
    }

    fn node_at(node: &Option<Box<Node<V>>>, index: usize) -> Option<&V> {
        let node = node.as_deref()?;
        let left_size = Node::size(&node.left);
        match index.cmp(&left_size) {
            Ordering::Less => Self::node_at(&node.left, index),
            Ordering::Equal => Some(&node.value),
            Ordering::Greater => Self::node_at(&node.right, index - left_size - 1),
        }
    }

    /// Remove the value at rank `index` and return it.
    ///
    /// Out-of-range leaves the tree untouched.
    #[instrument(level = "trace", skip(self))]
    pub fn delete(&mut self, index: usize) -> IndexResult<V> {
        let len = self.len();
        if index >= len {
            return Err(IndexError { index, len });
        }
        let mut removed = None;
        self.root = Self::delete_node(self.root.take(), index, &mut removed);
        removed.ok_or(IndexError { index, len })
    }

    fn delete_node(
        node: Option<Box<Node<V>>>,
        index: usize,
        removed: &mut Option<V>,
    ) -> Option<Box<Node<V>>> {
        let mut node = node?;
        let left_size = Node::size(&node.left);
        match index.cmp(&left_size) {
            Ordering::Less => {
                node.left = Self::delete_node(node.left.take(), index, removed);
            }
            Ordering::Greater => {
                node.right = Self::delete_node(node.right.take(), index - left_size - 1, removed);
            }
            Ordering::Equal => {
                return match (node.left.take(), node.right.take()) {
                    (None, None) => {
                        *removed = Some(node.value);
                        None
                    }
                    (Some(child), None) | (None, Some(child)) => {
                        *removed = Some(node.value);
                        Some(child)
                    }
                    (Some(left), Some(right)) => {
                        // The in-order successor's value moves up, then the
                        // successor leaves the right subtree.
                        let (successor, right) = Self::take_min(right);
                        *removed = Some(std::mem::replace(&mut node.value, successor));
                        node.left = Some(left);
                        node.right = right;
                        node.update();
                        Some(node)
                    }
                };
            }
        }
        node.update();
        Some(node)
    }

    fn take_min(mut node: Box<Node<V>>) -> (V, Option<Box<Node<V>>>) {
        match node.left.take() {
            Some(left) => {
                let (min, rest) = Self::take_min(left);
                node.left = rest;
                node.update();
                (min, Some(node))
            }
            None => {
                let Node { value, right, .. } = *node;
                (value, right)
            }
        }
    }

    /// Rebuild into minimal height: collect in-order, then recurse on the
    /// middle element (`mid = len / 2`). The in-order sequence, including
    /// the relative order of equals, is preserved exactly; rebuilding an
    /// already balanced tree reproduces the same shape.
    #[instrument(level = "debug", skip(self))]
    pub fn balance(&mut self) {
        let len = self.len();
        if len < 2 {
            return;
        }
        let mut values = Vec::with_capacity(len);
        Self::drain_in_order(self.root.take(), &mut values);
        debug!("balance: rebuilding {} values", len);
        let mut ordered = values.into_iter();
        self.root = Self::build_balanced(&mut ordered, len);
    }

    fn drain_in_order(node: Option<Box<Node<V>>>, out: &mut Vec<V>) {
        if let Some(node) = node {
            let Node {
                value, left, right, ..
            } = *node;
            Self::drain_in_order(left, out);
            out.push(value);
            Self::drain_in_order(right, out);
        }
    }

    fn build_balanced<I: Iterator<Item = V>>(values: &mut I, n: usize) -> Option<Box<Node<V>>> {
        if n == 0 {
            return None;
        }
        let left = Self::build_balanced(values, n / 2);
        let mut node = Box::new(Node::new(values.next()?));
        node.left = left;
        node.right = Self::build_balanced(values, n - n / 2 - 1);
        node.update();
        Some(node)
    }

    /// Visit every value in ascending order. Equal values appear adjacent,
    /// oldest first.
    pub fn for_each<F: FnMut(&V)>(&self, mut f: F) {
        Self::visit_in_order(&self.root, &mut f);
    }

    fn visit_in_order<F: FnMut(&V)>(node: &Option<Box<Node<V>>>, f: &mut F) {
        if let Some(node) = node {
            Self::visit_in_order(&node.left, f);
            f(&node.value);
            Self::visit_in_order(&node.right, f);
        }
    }

    /// Visit every value in pre-order (node before its subtrees), the
    /// shape-revealing traversal.
    pub fn for_each_from_root<F: FnMut(&V)>(&self, mut f: F) {
        Self::visit_pre_order(&self.root, &mut f);
    }

    fn visit_pre_order<F: FnMut(&V)>(node: &Option<Box<Node<V>>>, f: &mut F) {
        if let Some(node) = node {
            f(&node.value);
            Self::visit_pre_order(&node.left, f);
            Self::visit_pre_order(&node.right, f);
        }
    }

    /// Levels in the tree. Empty is 0, a lone root is 1.
    pub fn height(&self) -> usize {
        Self::node_height(&self.root)
    }

    fn node_height(node: &Option<Box<Node<V>>>) -> usize {
        node.as_ref().map_or(0, |n| {
            1 + Self::node_height(&n.left).max(Self::node_height(&n.right))
        })
    }

    /// In-order iterator over borrowed values.
    pub fn iter(&self) -> InOrderIter<'_, V> {
        let mut iter = InOrderIter { stack: Vec::new() };
        iter.push_left_spine(&self.root);
        iter
    }
}

impl<V: Ord> OrderedTree<V> {
    /// Sorted insert. An incoming value equal to a stored one descends
    /// right, so it lands after every existing equal in the in-order
    /// sequence.
    #[instrument(level = "trace", skip(self, value))]
    pub fn add(&mut self, value: V) {
        self.root = Some(Self::insert_node(self.root.take(), value));
    }

    fn insert_node(node: Option<Box<Node<V>>>, value: V) -> Box<Node<V>> {
        let mut node = match node {
            Some(node) => node,
            None => return Box::new(Node::new(value)),
        };
        if value < node.value {
            node.left = Some(Self::insert_node(node.left.take(), value));
        } else {
            node.right = Some(Self::insert_node(node.right.take(), value));
        }
        node.update();
        node
    }
}

impl<V> Default for OrderedTree<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Display> OrderedTree<V> {
    /// Structural rendering, embeddable in larger termtree views. For
    /// humans only; never parsed and not part of the serialized image.
    pub fn to_display_tree(&self) -> TextTree<String> {
        match &self.root {
            Some(root) => Self::display_node(root),
            None => TextTree::new("(empty)".to_string()),
        }
    }

    fn display_node(node: &Node<V>) -> TextTree<String> {
        let mut tree = TextTree::new(node.value.to_string());
        if let Some(left) = &node.left {
            tree.push(Self::display_node(left));
        }
        if let Some(right) = &node.right {
            tree.push(Self::display_node(right));
        }
        tree
    }
}

impl<V: fmt::Display> fmt::Display for OrderedTree<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_display_tree())
    }
}

/// Stack-driven in-order traversal.
pub struct InOrderIter<'a, V> {
    stack: Vec<&'a Node<V>>,
}

impl<'a, V> InOrderIter<'a, V> {
    fn push_left_spine(&mut self, mut node: &'a Option<Box<Node<V>>>) {
        while let Some(n) = node.as_deref() {
            self.stack.push(n);
            node = &n.left;
        }
    }
}

impl<'a, V> Iterator for InOrderIter<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.right);
        Some(&node.value)
    }
}

impl<'a, V> IntoIterator for &'a OrderedTree<V> {
    type Item = &'a V;
    type IntoIter = InOrderIter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
