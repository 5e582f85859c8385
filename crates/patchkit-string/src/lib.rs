//! String-matching adapter for `patchkit`.
//!
//! Content and addresses are both plain strings: an address is a substring
//! to match, and every occurrence is affected, deterministically, in match
//! order. An address that matches nothing (or the empty address) is a no-op
//! rather than an error; `test` asserts that the address occurs at all.
//!
//! Operation semantics:
//! - `add`: insert the new content before every occurrence of the address.
//! - `remove`: delete every occurrence of the address.
//! - `replace`: replace every occurrence of the address.
//! - `move`: delete every occurrence of `from`, then rewrite every
//!   occurrence of `to` as `from`. The order of those two steps matters.
//! - `copy`: no meaningful interpretation for substring addresses; the
//!   table entry is absent.
//! - `test`: does the content contain the address. The expected content is
//!   unused by this adapter; [`test_contains`] builds a node that passes the
//!   sought string in both positions.

use patchkit::{MutatingPatchable, PatchNode, PatchType, Patchable, PatchedContent};

pub type PatchedString = PatchedContent<StringPatch>;
pub type StringPatchNode = PatchNode<StringPatch>;
pub type StringPatchBuilder = patchkit::PatchListBuilder<StringPatch>;

/// The string-matching content type.
pub struct StringPatch;

impl PatchType for StringPatch {
    type Content = String;
    type Address = String;

    fn empty_content() -> String {
        String::new()
    }

    fn patcher() -> Patchable<Self> {
        Patchable {
            added: Some(added),
            removed: Some(removed),
            replaced: Some(replaced),
            moved: Some(moved),
            test: Some(test),
            ..Patchable::default()
        }
    }

    fn mutating_patcher() -> Option<MutatingPatchable<Self>> {
        Some(MutatingPatchable {
            added: Some(add_in_place),
            removed: Some(remove_in_place),
            replaced: Some(replace_in_place),
            moved: Some(move_in_place),
            test: Some(test),
            ..MutatingPatchable::default()
        })
    }
}

/// Convenience `test` node: asserts that `expected` occurs in the content.
///
/// The string adapter tests occurrence of the address, so the sought string
/// is supplied as the address as well as the expected content.
pub fn test_contains(expected: impl Into<String>) -> StringPatchNode {
    let expected = expected.into();
    PatchNode::test(expected.clone(), expected)
}

/// Insert `prefix` before every occurrence of `needle`.
fn prefixing(s: &str, needle: &str, prefix: &str) -> String {
    s.replace(needle, &format!("{prefix}{needle}"))
}

// ── Pure handlers ──────────────────────────────────────────────────────────

fn added(current: String, content: String, address: &String) -> String {
    if address.is_empty() {
        return current;
    }
    prefixing(&current, address, &content)
}

fn removed(current: String, address: &String) -> String {
    if address.is_empty() {
        return current;
    }
    current.replace(address.as_str(), "")
}

fn replaced(current: String, replacement: String, address: &String) -> String {
    // Replaces all occurrences; expected for a content-based address.
    if address.is_empty() {
        return current;
    }
    current.replace(address.as_str(), &replacement)
}

fn moved(current: String, from: &String, to: &String) -> String {
    if from.is_empty() || to.is_empty() {
        return current;
    }
    // The order here is crucial.
    current
        .replace(from.as_str(), "")
        .replace(to.as_str(), from.as_str())
}

fn test(current: &String, _expected: &String, address: &String) -> bool {
    current.contains(address.as_str())
}

// ── In-place handlers ──────────────────────────────────────────────────────
//
// Strings cannot be rewritten in place under substring substitution, so
// these assign the rebuilt string through the mutable reference. Same end
// result for the caller.

fn add_in_place(current: &mut String, content: String, address: &String) {
    *current = added(std::mem::take(current), content, address);
}

fn remove_in_place(current: &mut String, address: &String) {
    *current = removed(std::mem::take(current), address);
}

fn replace_in_place(current: &mut String, replacement: String, address: &String) {
    *current = replaced(std::mem::take(current), replacement, address);
}

fn move_in_place(current: &mut String, from: &String, to: &String) {
    *current = moved(std::mem::take(current), from, to);
}
