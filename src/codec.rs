//! Line-oriented text persistence for kind-tagged trees.
//!
//! The image is the kind's marker name on the first line, then the values
//! in in-order sequence, one rendering per line. An empty tree is just the
//! marker. Decoding is all-or-nothing: any bad line fails the whole image
//! and yields no tree.

use std::io::{BufRead, Write};

use tracing::{debug, instrument};

use crate::any_tree::AnyTree;
use crate::errors::{DecodeError, DecodeResult, EncodeError, EncodeResult};
use crate::registry::ValueKind;
use crate::tree::OrderedTree;
use crate::value::TreeValue;

/// Serialize `tree` into `out`. The marker comes from the tree's kind, so
/// it is always registered.
#[instrument(level = "debug", skip_all)]
pub fn serialize<W: Write>(tree: &AnyTree, mut out: W) -> EncodeResult<()> {
    out.write_all(serialize_to_string(tree).as_bytes())?;
    Ok(())
}

/// In-memory variant of [`serialize`].
pub fn serialize_to_string(tree: &AnyTree) -> String {
    let mut image = String::new();
    image.push_str(tree.kind().name());
    image.push('\n');
    for value in tree.values() {
        image.push_str(&value);
        image.push('\n');
    }
    image
}

/// Serialize a typed tree under an explicit marker name.
///
/// Fails only when the tree is non-empty and `kind` is not registered; an
/// empty tree encodes any marker.
#[instrument(level = "debug", skip(tree, out))]
pub fn serialize_with_kind<V: TreeValue, W: Write>(
    tree: &OrderedTree<V>,
    kind: &str,
    mut out: W,
) -> EncodeResult<()> {
    if !tree.is_empty() && ValueKind::from_name(kind).is_err() {
        return Err(EncodeError::UnknownKind {
            kind: kind.to_string(),
        });
    }
    writeln!(out, "{}", kind)?;
    for value in tree {
        writeln!(out, "{}", value)?;
    }
    Ok(())
}

/// Decode an image into a tree of its marker's kind.
///
/// The marker line is trimmed; a missing or blank first line fails with
/// [`DecodeError::MissingHeader`]. Value lines may carry several
/// whitespace-separated tokens; blank lines are skipped. Values are added
/// in encounter order, one sorted insert each.
#[instrument(level = "debug", skip(input))]
pub fn deserialize<R: BufRead>(input: R) -> DecodeResult<AnyTree> {
    let mut lines = input.lines();
    let header = match lines.next() {
        Some(line) => line?,
        None => return Err(DecodeError::MissingHeader),
    };
    let marker = header.trim();
    if marker.is_empty() {
        return Err(DecodeError::MissingHeader);
    }
    let kind = ValueKind::from_name(marker)?;
    let mut tree = kind.new_tree();
    let mut line_no = 1;
    for line in lines {
        line_no += 1;
        let line = line?;
        for token in line.split_whitespace() {
            tree.add_text(token).map_err(|source| DecodeError::Value {
                line: line_no,
                source,
            })?;
        }
    }
    debug!("deserialize: {} values of kind {}", tree.len(), kind);
    Ok(tree)
}

/// Decode from a string slice.
pub fn deserialize_str(text: &str) -> DecodeResult<AnyTree> {
    deserialize(text.as_bytes())
}
