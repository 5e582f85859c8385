//! Operation tables ("witnesses") supplying per-content-type semantics.
//!
//! A content type becomes patchable by populating one of these records with
//! handlers for the operations it supports. Every entry is optional: absence
//! is a first-class, queryable state, and the reducer checks for it before
//! dispatching (yielding [`crate::ReduceError::Unsupported`] rather than a
//! crash). Handlers are plain `fn` pointers, so tables are `Copy` and can be
//! built as struct literals with `..Default::default()` for the gaps.
//!
//! [`Patchable`] is the pure table (content in, new content out);
//! [`MutatingPatchable`] is the in-place alternative for content types where
//! copying is expensive. The two are independent: the core never derives one
//! from the other, though an adapter author may.

use crate::types::{AddressOf, ContentOf, PatchType};

// ── Pure handler signatures ────────────────────────────────────────────────

/// `added(current, new_content, address) -> updated`
pub type AddedFn<T> = fn(ContentOf<T>, ContentOf<T>, &AddressOf<T>) -> ContentOf<T>;
/// `removed(current, address) -> updated`
pub type RemovedFn<T> = fn(ContentOf<T>, &AddressOf<T>) -> ContentOf<T>;
/// `replaced(current, replacement, address) -> updated`
pub type ReplacedFn<T> = fn(ContentOf<T>, ContentOf<T>, &AddressOf<T>) -> ContentOf<T>;
/// `copied(current, from, to) -> updated`
pub type CopiedFn<T> = fn(ContentOf<T>, &AddressOf<T>, &AddressOf<T>) -> ContentOf<T>;
/// `moved(current, from, to) -> updated`
pub type MovedFn<T> = fn(ContentOf<T>, &AddressOf<T>, &AddressOf<T>) -> ContentOf<T>;
/// `test(current, expected, address) -> bool`; shared by both tables since a
/// test never mutates content.
pub type TestFn<T> = fn(&ContentOf<T>, &ContentOf<T>, &AddressOf<T>) -> bool;

// ── In-place handler signatures ────────────────────────────────────────────

/// `add(current, new_content, address)`
pub type AddInPlaceFn<T> = fn(&mut ContentOf<T>, ContentOf<T>, &AddressOf<T>);
/// `remove(current, address)`
pub type RemoveInPlaceFn<T> = fn(&mut ContentOf<T>, &AddressOf<T>);
/// `replace(current, replacement, address)`
pub type ReplaceInPlaceFn<T> = fn(&mut ContentOf<T>, ContentOf<T>, &AddressOf<T>);
/// `copy(current, from, to)`
pub type CopyInPlaceFn<T> = fn(&mut ContentOf<T>, &AddressOf<T>, &AddressOf<T>);
/// `move(current, from, to)`
pub type MoveInPlaceFn<T> = fn(&mut ContentOf<T>, &AddressOf<T>, &AddressOf<T>);

/// The pure operation table for a content type.
///
/// Each handler is total over its declared domain; the adapter defines its
/// own policy for an address that resolves to nothing (the shipped adapters
/// treat that as a no-op).
pub struct Patchable<T: PatchType> {
    pub added: Option<AddedFn<T>>,
    pub removed: Option<RemovedFn<T>>,
    pub replaced: Option<ReplacedFn<T>>,
    pub copied: Option<CopiedFn<T>>,
    pub moved: Option<MovedFn<T>>,
    pub test: Option<TestFn<T>>,
}

impl<T: PatchType> Default for Patchable<T> {
    fn default() -> Self {
        Patchable {
            added: None,
            removed: None,
            replaced: None,
            copied: None,
            moved: None,
            test: None,
        }
    }
}

impl<T: PatchType> Clone for Patchable<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: PatchType> Copy for Patchable<T> {}

/// The in-place operation table for a content type.
///
/// Same operation set as [`Patchable`], but the non-test handlers receive
/// the current content by mutable reference and return nothing.
pub struct MutatingPatchable<T: PatchType> {
    pub added: Option<AddInPlaceFn<T>>,
    pub removed: Option<RemoveInPlaceFn<T>>,
    pub replaced: Option<ReplaceInPlaceFn<T>>,
    pub copied: Option<CopyInPlaceFn<T>>,
    pub moved: Option<MoveInPlaceFn<T>>,
    pub test: Option<TestFn<T>>,
}

impl<T: PatchType> Default for MutatingPatchable<T> {
    fn default() -> Self {
        MutatingPatchable {
            added: None,
            removed: None,
            replaced: None,
            copied: None,
            moved: None,
            test: None,
        }
    }
}

impl<T: PatchType> Clone for MutatingPatchable<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: PatchType> Copy for MutatingPatchable<T> {}
