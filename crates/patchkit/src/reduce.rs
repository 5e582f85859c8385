//! The reduction engine: a depth-first, left-to-right fold of a patch tree.
//!
//! Reduction walks a [`PatchedContent`]'s patch list in order. Nodes with a
//! nested payload (`Add`, `Replace`) have that payload fully reduced first,
//! so inner patches always resolve before the operation that consumes them.
//! Later operations in a list observe the cumulative effect of all earlier
//! ones; sibling branches never interact.
//!
//! Per the JSON Patch `test` contract, a failing `Test` abandons the
//! reduction of the list that owns it and yields that list's pre-reduction
//! content. The non-strict entry points absorb the failure there; the
//! `_strict` variants re-raise it for the top-level list only (nested lists
//! always absorb locally). A missing table entry is a different class of
//! failure entirely and always aborts the whole call with
//! [`ReduceError::Unsupported`].

use std::mem;

use crate::error::ReduceError;
use crate::patchable::{MutatingPatchable, Patchable};
use crate::types::{Op, OpKind, PatchNode, PatchType, PatchedContent};

impl<T: PatchType> PatchedContent<T> {
    /// Reduce with the content type's default table, non-destructively.
    ///
    /// Returns the new content value. A failing `Test` anywhere in the tree
    /// reverts its owning list; at this level that means the original root
    /// content is returned unchanged.
    pub fn reduced(&self) -> Result<T::Content, ReduceError<T>> {
        self.reduced_with(&T::patcher())
    }

    /// Reduce with an explicit operation table.
    pub fn reduced_with(&self, patcher: &Patchable<T>) -> Result<T::Content, ReduceError<T>> {
        match self.reduced_strict_with(patcher) {
            Err(err) if err.is_test_failure() => Ok(self.content.clone()),
            other => other,
        }
    }

    /// Like [`reduced`](Self::reduced), but a failing `Test` in the
    /// top-level list is returned as [`ReduceError::TestFailed`] instead of
    /// being absorbed. Failures inside nested payloads still revert locally.
    pub fn reduced_strict(&self) -> Result<T::Content, ReduceError<T>> {
        self.reduced_strict_with(&T::patcher())
    }

    /// Strict reduction with an explicit operation table.
    pub fn reduced_strict_with(
        &self,
        patcher: &Patchable<T>,
    ) -> Result<T::Content, ReduceError<T>> {
        reduce_list(&self.content, &self.patches, patcher)
    }

    /// Reduce in place with the content type's mutating table.
    ///
    /// Fails with [`ReduceError::MutatingReduceUnsupported`] if the content
    /// type supplies no mutating table. On success `self.content` holds the
    /// reduced value; nested payload contents are consumed in the process,
    /// so the tree is single-use. On error `self.content` is restored to its
    /// pre-call value.
    pub fn reduce_in_place(&mut self) -> Result<(), ReduceError<T>> {
        let patcher = T::mutating_patcher().ok_or(ReduceError::MutatingReduceUnsupported)?;
        self.reduce_in_place_with(&patcher)
    }

    /// In-place reduction with an explicit mutating table.
    pub fn reduce_in_place_with(
        &mut self,
        patcher: &MutatingPatchable<T>,
    ) -> Result<(), ReduceError<T>> {
        match self.reduce_in_place_strict_with(patcher) {
            Err(err) if err.is_test_failure() => Ok(()),
            other => other,
        }
    }

    /// Like [`reduce_in_place`](Self::reduce_in_place), but a failing `Test`
    /// in the top-level list is returned as [`ReduceError::TestFailed`]
    /// (after the content has been restored).
    pub fn reduce_in_place_strict(&mut self) -> Result<(), ReduceError<T>> {
        let patcher = T::mutating_patcher().ok_or(ReduceError::MutatingReduceUnsupported)?;
        self.reduce_in_place_strict_with(&patcher)
    }

    /// Strict in-place reduction with an explicit mutating table.
    pub fn reduce_in_place_strict_with(
        &mut self,
        patcher: &MutatingPatchable<T>,
    ) -> Result<(), ReduceError<T>> {
        reduce_list_in_place(&mut self.content, &mut self.patches, patcher)
    }
}

// ── Pure mode ──────────────────────────────────────────────────────────────

fn reduce_list<T: PatchType>(
    root: &T::Content,
    patches: &[PatchNode<T>],
    patcher: &Patchable<T>,
) -> Result<T::Content, ReduceError<T>> {
    let mut result = root.clone();
    for node in patches {
        match &node.op {
            Op::Add { address } => {
                // An Add without a payload is inert.
                if let Some(sub) = &node.content {
                    let new_content = sub.reduced_with(patcher)?;
                    let added = patcher
                        .added
                        .ok_or(ReduceError::Unsupported(OpKind::Add))?;
                    result = added(result, new_content, address);
                }
            }
            Op::Remove { address } => {
                let removed = patcher
                    .removed
                    .ok_or(ReduceError::Unsupported(OpKind::Remove))?;
                result = removed(result, address);
            }
            Op::Replace { address } => {
                if let Some(sub) = &node.content {
                    let new_content = sub.reduced_with(patcher)?;
                    let replaced = patcher
                        .replaced
                        .ok_or(ReduceError::Unsupported(OpKind::Replace))?;
                    result = replaced(result, new_content, address);
                }
            }
            Op::Copy { from, to } => {
                let copied = patcher
                    .copied
                    .ok_or(ReduceError::Unsupported(OpKind::Copy))?;
                result = copied(result, from, to);
            }
            Op::Move { from, to } => {
                let moved = patcher
                    .moved
                    .ok_or(ReduceError::Unsupported(OpKind::Move))?;
                result = moved(result, from, to);
            }
            Op::Test { expected, address } => {
                let test = patcher
                    .test
                    .ok_or(ReduceError::Unsupported(OpKind::Test))?;
                if !test(&result, expected, address) {
                    return Err(ReduceError::TestFailed {
                        content: result,
                        expected: expected.clone(),
                        address: address.clone(),
                    });
                }
            }
            Op::Empty => {}
        }
    }
    Ok(result)
}

// ── Mutating mode ──────────────────────────────────────────────────────────

fn reduce_list_in_place<T: PatchType>(
    content: &mut T::Content,
    patches: &mut [PatchNode<T>],
    patcher: &MutatingPatchable<T>,
) -> Result<(), ReduceError<T>> {
    let snapshot = content.clone();
    match apply_nodes_in_place(content, patches, patcher) {
        Ok(()) => Ok(()),
        Err(err) => {
            *content = snapshot;
            Err(err)
        }
    }
}

fn apply_nodes_in_place<T: PatchType>(
    content: &mut T::Content,
    patches: &mut [PatchNode<T>],
    patcher: &MutatingPatchable<T>,
) -> Result<(), ReduceError<T>> {
    for node in patches.iter_mut() {
        match &node.op {
            Op::Add { address } => {
                if let Some(sub) = node.content.as_mut() {
                    sub.reduce_in_place_with(patcher)?;
                    let added = patcher
                        .added
                        .ok_or(ReduceError::Unsupported(OpKind::Add))?;
                    let new_content = mem::replace(&mut sub.content, T::empty_content());
                    added(content, new_content, address);
                }
            }
            Op::Remove { address } => {
                let removed = patcher
                    .removed
                    .ok_or(ReduceError::Unsupported(OpKind::Remove))?;
                removed(content, address);
            }
            Op::Replace { address } => {
                if let Some(sub) = node.content.as_mut() {
                    sub.reduce_in_place_with(patcher)?;
                    let replaced = patcher
                        .replaced
                        .ok_or(ReduceError::Unsupported(OpKind::Replace))?;
                    let new_content = mem::replace(&mut sub.content, T::empty_content());
                    replaced(content, new_content, address);
                }
            }
            Op::Copy { from, to } => {
                let copied = patcher
                    .copied
                    .ok_or(ReduceError::Unsupported(OpKind::Copy))?;
                copied(content, from, to);
            }
            Op::Move { from, to } => {
                let moved = patcher
                    .moved
                    .ok_or(ReduceError::Unsupported(OpKind::Move))?;
                moved(content, from, to);
            }
            Op::Test { expected, address } => {
                let test = patcher
                    .test
                    .ok_or(ReduceError::Unsupported(OpKind::Test))?;
                if !test(content, expected, address) {
                    return Err(ReduceError::TestFailed {
                        content: content.clone(),
                        expected: expected.clone(),
                        address: address.clone(),
                    });
                }
            }
            Op::Empty => {}
        }
    }
    Ok(())
}

// ── Tests ──────────────────────────────────────────────────────────────────
