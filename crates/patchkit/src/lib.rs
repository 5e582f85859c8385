//! patchkit — generic, address-based patch trees and their reduction.
//!
//! Callers describe hierarchical modifications to a content value as a tree
//! of JSON-Patch-style operations (`add`, `remove`, `replace`, `copy`,
//! `move`, `test`) and hand it to a reducer together with a per-content-type
//! operation table. The engine is agnostic to what "content" and "address"
//! mean; adapters such as `patchkit-string` and `patchkit-json` supply the
//! concrete semantics.
//!
//! # Example
//!
//! See [`PatchListBuilder`] for constructing a tree and
//! [`PatchedContent::reduced`] / [`PatchedContent::reduce_in_place`] for the
//! two reduction modes.

pub mod builder;
pub mod error;
pub mod patchable;
pub mod reduce;
pub mod types;

pub use builder::PatchListBuilder;
pub use error::ReduceError;
pub use patchable::{MutatingPatchable, Patchable, TestFn};
pub use types::{AddressOf, ContentOf, Op, OpKind, PatchNode, PatchType, PatchedContent};
