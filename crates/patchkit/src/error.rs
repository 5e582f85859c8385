//! The closed failure taxonomy of the reduction engine.

use std::fmt;

use thiserror::Error;

use crate::types::{OpKind, PatchType};

/// Failures raised while reducing a patch tree.
///
/// Two independent classes live here. Capability absence (`Unsupported`,
/// `MutatingReduceUnsupported`) is always fatal to the `reduce` call: the
/// caller used an operation the chosen adapter cannot perform. Assertion
/// failure (`TestFailed`) is locally recoverable: the non-strict entry
/// points absorb it at the boundary of the owning [`crate::PatchedContent`]
/// and hand back that content unchanged.
#[derive(Error)]
pub enum ReduceError<T: PatchType> {
    /// The active operation table has no handler for this operation kind.
    #[error("operation `{0}` is not supported by this patcher")]
    Unsupported(OpKind),

    /// A `Test` operation's predicate returned false. Carries the content
    /// the predicate saw, the expected content, and the tested address.
    #[error("test failed at address {address:?}")]
    TestFailed {
        content: T::Content,
        expected: T::Content,
        address: T::Address,
    },

    /// The mutating entry point was invoked for a content type that
    /// supplies no mutating operation table.
    #[error("content type provides no mutating patcher")]
    MutatingReduceUnsupported,
}

impl<T: PatchType> ReduceError<T> {
    pub fn is_test_failure(&self) -> bool {
        matches!(self, ReduceError::TestFailed { .. })
    }
}

impl<T: PatchType> fmt::Debug for ReduceError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReduceError::Unsupported(kind) => f.debug_tuple("Unsupported").field(kind).finish(),
            ReduceError::TestFailed {
                content,
                expected,
                address,
            } => f
                .debug_struct("TestFailed")
                .field("content", content)
                .field("expected", expected)
                .field("address", address)
                .finish(),
            ReduceError::MutatingReduceUnsupported => f.write_str("MutatingReduceUnsupported"),
        }
    }
}

impl<T: PatchType> PartialEq for ReduceError<T>
where
    T::Content: PartialEq,
    T::Address: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ReduceError::Unsupported(a), ReduceError::Unsupported(b)) => a == b,
            (
                ReduceError::TestFailed {
                    content: c1,
                    expected: e1,
                    address: a1,
                },
                ReduceError::TestFailed {
                    content: c2,
                    expected: e2,
                    address: a2,
                },
            ) => c1 == c2 && e1 == e2 && a1 == a2,
            (ReduceError::MutatingReduceUnsupported, ReduceError::MutatingReduceUnsupported) => {
                true
            }
            _ => false,
        }
    }
}
