//! Fluent construction of patch lists.
//!
//! The builder is the authoring front-end: conditional and loop-driven
//! construction are ordinary control flow against it, and [`build`]
//! normalizes the result by pruning `Empty` placeholder nodes so the reducer
//! never sees them.
//!
//! [`build`]: PatchListBuilder::build

use crate::types::{PatchNode, PatchType, PatchedContent};

/// Accumulates [`PatchNode`]s in application order.
///
/// ```
/// use patchkit::{PatchListBuilder, PatchType, Patchable, PatchedContent};
///
/// struct Numbers;
/// impl PatchType for Numbers {
///     type Content = i64;
///     type Address = i64;
///     fn empty_content() -> i64 { 0 }
///     fn patcher() -> Patchable<Self> {
///         Patchable { added: Some(|c: i64, n: i64, _: &i64| c + n), ..Patchable::default() }
///     }
/// }
///
/// let verbose = false;
/// let patches = PatchListBuilder::<Numbers>::new()
///     .add_value(0, 5)
///     .push_opt(verbose.then(|| patchkit::PatchNode::add_value(0, 100)))
///     .build();
/// let result = PatchedContent::<Numbers>::new(1, patches).reduced().unwrap();
/// assert_eq!(result, 6);
/// ```
pub struct PatchListBuilder<T: PatchType> {
    nodes: Vec<PatchNode<T>>,
}

impl<T: PatchType> PatchListBuilder<T> {
    pub fn new() -> Self {
        PatchListBuilder { nodes: Vec::new() }
    }

    /// Insert `content` at `address`.
    pub fn add(self, address: impl Into<T::Address>, content: PatchedContent<T>) -> Self {
        self.push(PatchNode::add(address, content))
    }

    /// Insert a plain content value at `address`.
    pub fn add_value(self, address: impl Into<T::Address>, value: impl Into<T::Content>) -> Self {
        self.push(PatchNode::add_value(address, value))
    }

    /// Delete content at `address`.
    pub fn remove(self, address: impl Into<T::Address>) -> Self {
        self.push(PatchNode::remove(address))
    }

    /// Substitute `content` at `address`.
    pub fn replace(self, address: impl Into<T::Address>, content: PatchedContent<T>) -> Self {
        self.push(PatchNode::replace(address, content))
    }

    /// Substitute a plain content value at `address`.
    pub fn replace_value(
        self,
        address: impl Into<T::Address>,
        value: impl Into<T::Content>,
    ) -> Self {
        self.push(PatchNode::replace_value(address, value))
    }

    /// Duplicate content from `from` to `to`.
    pub fn copy(self, from: impl Into<T::Address>, to: impl Into<T::Address>) -> Self {
        self.push(PatchNode::copy(from, to))
    }

    /// Relocate content from `from` to `to`.
    pub fn move_content(self, from: impl Into<T::Address>, to: impl Into<T::Address>) -> Self {
        self.push(PatchNode::move_content(from, to))
    }

    /// Assert that the content at `address` matches `expected`.
    pub fn test(self, expected: impl Into<T::Content>, address: impl Into<T::Address>) -> Self {
        self.push(PatchNode::test(expected, address))
    }

    /// Append an already-built node.
    pub fn push(mut self, node: PatchNode<T>) -> Self {
        self.nodes.push(node);
        self
    }

    /// Append a node that may be absent; `None` contributes nothing to the
    /// built list.
    pub fn push_opt(self, node: Option<PatchNode<T>>) -> Self {
        match node {
            Some(node) => self.push(node),
            None => self.push(PatchNode::empty()),
        }
    }

    /// Append every node from an iterator (loop-driven construction).
    pub fn extend(mut self, nodes: impl IntoIterator<Item = PatchNode<T>>) -> Self {
        self.nodes.extend(nodes);
        self
    }

    /// Seal the list, pruning `Empty` placeholders.
    pub fn build(self) -> Vec<PatchNode<T>> {
        self.nodes.into_iter().filter(|n| !n.is_empty()).collect()
    }

    /// Seal the list onto a root content value.
    pub fn build_content(self, content: impl Into<T::Content>) -> PatchedContent<T> {
        PatchedContent::new(content, self.build())
    }
}

impl<T: PatchType> Default for PatchListBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
