//! Core data model for patch trees.
//!
//! A patch tree is pure data: a [`PatchedContent`] holds a root content value
//! and an ordered list of [`PatchNode`]s, each of which pairs an [`Op`] with
//! an optional nested `PatchedContent` payload. The tree carries no behavior;
//! all semantics live in the operation tables ([`crate::Patchable`],
//! [`crate::MutatingPatchable`]) and the reducer ([`crate::reduce`]).

use std::fmt;

use crate::patchable::{MutatingPatchable, Patchable};

/// Shorthand for the content type of a [`PatchType`].
pub type ContentOf<T> = <T as PatchType>::Content;
/// Shorthand for the address type of a [`PatchType`].
pub type AddressOf<T> = <T as PatchType>::Address;

/// The contract a content type implements to become patchable.
///
/// An implementor is a marker type tying together a content representation,
/// an address representation, and the operation tables that give the six
/// patch operations meaning for that representation. See `patchkit-string`
/// and `patchkit-json` for the two shipped adapters.
pub trait PatchType: Sized {
    /// The value being patched.
    type Content: Clone + fmt::Debug;
    /// An opaque locator for a target within a content value. Semantics are
    /// entirely adapter-defined (a substring to match, a JSON Pointer, ...).
    type Address: Clone + fmt::Debug;

    /// The designated empty value for this content type.
    fn empty_content() -> Self::Content;

    /// The pure operation table used by [`PatchedContent::reduced`].
    fn patcher() -> Patchable<Self>;

    /// The in-place operation table used by
    /// [`PatchedContent::reduce_in_place`], if the content type provides one.
    fn mutating_patcher() -> Option<MutatingPatchable<Self>> {
        None
    }
}

// ── Operations ─────────────────────────────────────────────────────────────

/// The kind of an operation, without its addresses.
///
/// Carried by [`crate::ReduceError::Unsupported`] to name the table entry
/// that was missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    Add,
    Remove,
    Replace,
    Copy,
    Move,
    Test,
}

impl OpKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OpKind::Add => "add",
            OpKind::Remove => "remove",
            OpKind::Replace => "replace",
            OpKind::Copy => "copy",
            OpKind::Move => "move",
            OpKind::Test => "test",
        }
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single patch operation, following JSON-Patch operation semantics but
/// generalized over the adapter's address and content types.
pub enum Op<T: PatchType> {
    /// Insert content at `address`.
    Add { address: T::Address },
    /// Delete content at `address`.
    Remove { address: T::Address },
    /// Substitute content at `address`.
    Replace { address: T::Address },
    /// Duplicate content from one address to another.
    Copy { from: T::Address, to: T::Address },
    /// Relocate content from one address to another.
    Move { from: T::Address, to: T::Address },
    /// Assert a condition about content at `address`; never mutates.
    Test {
        expected: T::Content,
        address: T::Address,
    },
    /// A no-op placeholder produced by optional construction. Pruned during
    /// construction-time normalization; the reducer skips any stragglers.
    Empty,
}

impl<T: PatchType> Op<T> {
    /// The kind of this operation, or `None` for the `Empty` sentinel.
    pub fn kind(&self) -> Option<OpKind> {
        match self {
            Op::Add { .. } => Some(OpKind::Add),
            Op::Remove { .. } => Some(OpKind::Remove),
            Op::Replace { .. } => Some(OpKind::Replace),
            Op::Copy { .. } => Some(OpKind::Copy),
            Op::Move { .. } => Some(OpKind::Move),
            Op::Test { .. } => Some(OpKind::Test),
            Op::Empty => None,
        }
    }
}

impl<T: PatchType> Clone for Op<T> {
    fn clone(&self) -> Self {
        match self {
            Op::Add { address } => Op::Add {
                address: address.clone(),
            },
            Op::Remove { address } => Op::Remove {
                address: address.clone(),
            },
            Op::Replace { address } => Op::Replace {
                address: address.clone(),
            },
            Op::Copy { from, to } => Op::Copy {
                from: from.clone(),
                to: to.clone(),
            },
            Op::Move { from, to } => Op::Move {
                from: from.clone(),
                to: to.clone(),
            },
            Op::Test { expected, address } => Op::Test {
                expected: expected.clone(),
                address: address.clone(),
            },
            Op::Empty => Op::Empty,
        }
    }
}

impl<T: PatchType> fmt::Debug for Op<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Add { address } => f.debug_struct("Add").field("address", address).finish(),
            Op::Remove { address } => f.debug_struct("Remove").field("address", address).finish(),
            Op::Replace { address } => {
                f.debug_struct("Replace").field("address", address).finish()
            }
            Op::Copy { from, to } => f
                .debug_struct("Copy")
                .field("from", from)
                .field("to", to)
                .finish(),
            Op::Move { from, to } => f
                .debug_struct("Move")
                .field("from", from)
                .field("to", to)
                .finish(),
            Op::Test { expected, address } => f
                .debug_struct("Test")
                .field("expected", expected)
                .field("address", address)
                .finish(),
            Op::Empty => f.write_str("Empty"),
        }
    }
}

// ── Patch nodes ────────────────────────────────────────────────────────────

/// One operation plus its optional nested payload.
///
/// The payload is present for `Add` and `Replace` (it supplies the new
/// content, which may itself carry further patches); `Remove`, `Copy`,
/// `Move`, and `Test` nodes never carry one. An `Add`/`Replace` node
/// constructed without a payload is inert and skipped by the reducer.
pub struct PatchNode<T: PatchType> {
    pub op: Op<T>,
    pub content: Option<PatchedContent<T>>,
}

impl<T: PatchType> PatchNode<T> {
    /// Insert `content` at `address`.
    pub fn add(address: impl Into<T::Address>, content: PatchedContent<T>) -> Self {
        PatchNode {
            op: Op::Add {
                address: address.into(),
            },
            content: Some(content),
        }
    }

    /// Insert a plain content value at `address` (no nested patches).
    pub fn add_value(address: impl Into<T::Address>, value: impl Into<T::Content>) -> Self {
        Self::add(address, PatchedContent::root(value))
    }

    /// Delete content at `address`.
    pub fn remove(address: impl Into<T::Address>) -> Self {
        PatchNode {
            op: Op::Remove {
                address: address.into(),
            },
            content: None,
        }
    }

    /// Substitute `content` at `address`.
    pub fn replace(address: impl Into<T::Address>, content: PatchedContent<T>) -> Self {
        PatchNode {
            op: Op::Replace {
                address: address.into(),
            },
            content: Some(content),
        }
    }

    /// Substitute a plain content value at `address` (no nested patches).
    pub fn replace_value(address: impl Into<T::Address>, value: impl Into<T::Content>) -> Self {
        Self::replace(address, PatchedContent::root(value))
    }

    /// Duplicate content from `from` to `to`.
    pub fn copy(from: impl Into<T::Address>, to: impl Into<T::Address>) -> Self {
        PatchNode {
            op: Op::Copy {
                from: from.into(),
                to: to.into(),
            },
            content: None,
        }
    }

    /// Relocate content from `from` to `to`.
    pub fn move_content(from: impl Into<T::Address>, to: impl Into<T::Address>) -> Self {
        PatchNode {
            op: Op::Move {
                from: from.into(),
                to: to.into(),
            },
            content: None,
        }
    }

    /// Assert that the content at `address` matches `expected`.
    pub fn test(expected: impl Into<T::Content>, address: impl Into<T::Address>) -> Self {
        PatchNode {
            op: Op::Test {
                expected: expected.into(),
                address: address.into(),
            },
            content: None,
        }
    }

    /// The no-op placeholder node.
    pub fn empty() -> Self {
        PatchNode {
            op: Op::Empty,
            content: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.op, Op::Empty)
    }
}

impl<T: PatchType> Clone for PatchNode<T> {
    fn clone(&self) -> Self {
        PatchNode {
            op: self.op.clone(),
            content: self.content.clone(),
        }
    }
}

impl<T: PatchType> fmt::Debug for PatchNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatchNode")
            .field("op", &self.op)
            .field("content", &self.content)
            .finish()
    }
}

// ── Patched content ────────────────────────────────────────────────────────

/// A content value plus its ordered list of patch nodes.
///
/// List order is the authoritative application order. The tree exclusively
/// owns its nodes and, transitively, any nested `PatchedContent`, so a
/// well-formed tree is finite and acyclic by construction.
pub struct PatchedContent<T: PatchType> {
    pub content: T::Content,
    pub patches: Vec<PatchNode<T>>,
}

impl<T: PatchType> PatchedContent<T> {
    /// Build a tree from a content value and a patch list, pruning any
    /// `Empty` placeholder nodes.
    pub fn new(content: impl Into<T::Content>, patches: Vec<PatchNode<T>>) -> Self {
        PatchedContent {
            content: content.into(),
            patches: patches.into_iter().filter(|n| !n.is_empty()).collect(),
        }
    }

    /// A bare content value with no patches.
    pub fn root(content: impl Into<T::Content>) -> Self {
        PatchedContent {
            content: content.into(),
            patches: Vec::new(),
        }
    }
}

impl<T: PatchType> Clone for PatchedContent<T> {
    fn clone(&self) -> Self {
        PatchedContent {
            content: self.content.clone(),
            patches: self.patches.clone(),
        }
    }
}

impl<T: PatchType> fmt::Debug for PatchedContent<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatchedContent")
            .field("content", &self.content)
            .field("patches", &self.patches)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Nop;

    impl PatchType for Nop {
        type Content = i64;
        type Address = i64;

        fn empty_content() -> i64 {
            0
        }

        fn patcher() -> Patchable<Self> {
            Patchable::default()
        }
    }

    #[test]
    fn new_prunes_empty_nodes() {
        let pc: PatchedContent<Nop> = PatchedContent::new(
            1,
            vec![
                PatchNode::empty(),
                PatchNode::remove(2),
                PatchNode::empty(),
            ],
        );
        assert_eq!(pc.patches.len(), 1);
        assert_eq!(pc.patches[0].op.kind(), Some(OpKind::Remove));
    }

    #[test]
    fn node_payload_presence_matches_op() {
        let add: PatchNode<Nop> = PatchNode::add_value(1, 2);
        let remove: PatchNode<Nop> = PatchNode::remove(1);
        let test: PatchNode<Nop> = PatchNode::test(2, 1);
        assert!(add.content.is_some());
        assert!(remove.content.is_none());
        assert!(test.content.is_none());
    }

    #[test]
    fn op_kind_names() {
        assert_eq!(OpKind::Add.as_str(), "add");
        assert_eq!(OpKind::Move.to_string(), "move");
        let op: Op<Nop> = Op::Empty;
        assert_eq!(op.kind(), None);
    }
}
