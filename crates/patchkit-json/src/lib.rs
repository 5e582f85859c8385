//! JSON document adapter for `patchkit`.
//!
//! Content is a `serde_json::Value`; an address is an RFC 6901 JSON Pointer
//! string. The six operations carry their JSON Patch meanings: `add` inserts
//! at the pointer (object key insert, array index insert, `-` appends),
//! `remove` deletes, `replace` substitutes, `copy`/`move` transfer between
//! pointers, and `test` asserts structural equality with the expected value.
//!
//! Witness handlers are total, so this adapter resolves addressing problems
//! by policy rather than error: a malformed or unresolvable pointer leaves
//! the document unchanged, a `move` whose destination lies inside its source
//! is skipped, and removing the root resets the document to `null` (the
//! adapter's empty content).

use std::mem;

use patchkit::{MutatingPatchable, PatchNode, PatchType, Patchable, PatchedContent};
use serde_json::Value;

pub mod pointer;

use pointer::{get, get_mut, parse_index, parse_pointer};

pub type PatchedJson = PatchedContent<JsonPatch>;
pub type JsonPatchNode = PatchNode<JsonPatch>;
pub type JsonPatchBuilder = patchkit::PatchListBuilder<JsonPatch>;

/// The JSON document content type.
pub struct JsonPatch;

impl PatchType for JsonPatch {
    type Content = Value;
    type Address = String;

    fn empty_content() -> Value {
        Value::Null
    }

    fn patcher() -> Patchable<Self> {
        Patchable {
            added: Some(added),
            removed: Some(removed),
            replaced: Some(replaced),
            copied: Some(copied),
            moved: Some(moved),
            test: Some(test),
        }
    }

    fn mutating_patcher() -> Option<MutatingPatchable<Self>> {
        Some(MutatingPatchable {
            added: Some(add_in_place),
            removed: Some(remove_in_place),
            replaced: Some(replace_in_place),
            copied: Some(copy_in_place),
            moved: Some(move_in_place),
            test: Some(test),
        })
    }
}

// ── Structural edits ───────────────────────────────────────────────────────

fn insert_at(doc: &mut Value, path: &[String], value: Value) {
    if path.is_empty() {
        *doc = value;
        return;
    }
    let (parent_path, key) = path.split_at(path.len() - 1);
    let key = &key[0];
    let Some(parent) = get_mut(doc, parent_path) else {
        return;
    };
    match parent {
        Value::Object(map) => {
            map.insert(key.clone(), value);
        }
        Value::Array(arr) => {
            if key == "-" {
                arr.push(value);
            } else if let Some(idx) = parse_index(key) {
                if idx <= arr.len() {
                    arr.insert(idx, value);
                }
            }
        }
        _ => {}
    }
}

fn remove_at(doc: &mut Value, path: &[String]) -> Option<Value> {
    if path.is_empty() {
        return Some(mem::replace(doc, Value::Null));
    }
    let (parent_path, key) = path.split_at(path.len() - 1);
    let key = &key[0];
    let parent = get_mut(doc, parent_path)?;
    match parent {
        Value::Object(map) => map.shift_remove(key),
        Value::Array(arr) => {
            let idx = parse_index(key)?;
            if idx < arr.len() {
                Some(arr.remove(idx))
            } else {
                None
            }
        }
        _ => None,
    }
}

fn replace_at(doc: &mut Value, path: &[String], value: Value) {
    if path.is_empty() {
        *doc = value;
        return;
    }
    let (parent_path, key) = path.split_at(path.len() - 1);
    let key = &key[0];
    let Some(parent) = get_mut(doc, parent_path) else {
        return;
    };
    match parent {
        // Insert-or-replace for objects; the key need not pre-exist.
        Value::Object(map) => {
            map.insert(key.clone(), value);
        }
        Value::Array(arr) => {
            if let Some(idx) = parse_index(key) {
                if let Some(slot) = arr.get_mut(idx) {
                    *slot = value;
                }
            }
        }
        _ => {}
    }
}

/// `to` must not sit inside `from`; moving a value into itself is skipped.
fn is_prefix_of(from: &[String], to: &[String]) -> bool {
    to.len() >= from.len() && to[..from.len()] == from[..]
}

// ── Pure handlers ──────────────────────────────────────────────────────────

fn added(mut current: Value, content: Value, address: &String) -> Value {
    add_in_place(&mut current, content, address);
    current
}

fn removed(mut current: Value, address: &String) -> Value {
    remove_in_place(&mut current, address);
    current
}

fn replaced(mut current: Value, replacement: Value, address: &String) -> Value {
    replace_in_place(&mut current, replacement, address);
    current
}

fn copied(mut current: Value, from: &String, to: &String) -> Value {
    copy_in_place(&mut current, from, to);
    current
}

fn moved(mut current: Value, from: &String, to: &String) -> Value {
    move_in_place(&mut current, from, to);
    current
}

fn test(current: &Value, expected: &Value, address: &String) -> bool {
    match parse_pointer(address) {
        Some(path) => get(current, &path) == Some(expected),
        None => false,
    }
}

// ── In-place handlers ──────────────────────────────────────────────────────

fn add_in_place(current: &mut Value, content: Value, address: &String) {
    if let Some(path) = parse_pointer(address) {
        insert_at(current, &path, content);
    }
}

fn remove_in_place(current: &mut Value, address: &String) {
    if let Some(path) = parse_pointer(address) {
        remove_at(current, &path);
    }
}

fn replace_in_place(current: &mut Value, replacement: Value, address: &String) {
    if let Some(path) = parse_pointer(address) {
        replace_at(current, &path, replacement);
    }
}

fn copy_in_place(current: &mut Value, from: &String, to: &String) {
    let (Some(from), Some(to)) = (parse_pointer(from), parse_pointer(to)) else {
        return;
    };
    if let Some(value) = get(current, &from).cloned() {
        insert_at(current, &to, value);
    }
}

fn move_in_place(current: &mut Value, from: &String, to: &String) {
    let (Some(from), Some(to)) = (parse_pointer(from), parse_pointer(to)) else {
        return;
    };
    if is_prefix_of(&from, &to) {
        return;
    }
    if let Some(value) = remove_at(current, &from) {
        insert_at(current, &to, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn add_to_object() {
        let doc = added(json!({"a": 1}), json!(2), &"/b".to_string());
        assert_eq!(doc, json!({"a": 1, "b": 2}));
    }

    #[test]
    fn add_to_array_and_append() {
        let doc = added(json!([1, 2, 3]), json!(99), &"/1".to_string());
        assert_eq!(doc, json!([1, 99, 2, 3]));

        let doc = added(json!([1, 2]), json!(3), &"/-".to_string());
        assert_eq!(doc, json!([1, 2, 3]));
    }

    #[test]
    fn add_at_root_replaces_the_document() {
        let doc = added(json!({"a": 1}), json!([true]), &String::new());
        assert_eq!(doc, json!([true]));
    }

    #[test]
    fn remove_from_object_and_array() {
        let doc = removed(json!({"a": 1, "b": 2}), &"/a".to_string());
        assert_eq!(doc, json!({"b": 2}));

        let doc = removed(json!([1, 2, 3]), &"/1".to_string());
        assert_eq!(doc, json!([1, 3]));
    }

    #[test]
    fn remove_at_root_resets_to_null() {
        let doc = removed(json!({"a": 1}), &String::new());
        assert_eq!(doc, Value::Null);
    }

    #[test]
    fn replace_value_in_object_and_array() {
        let doc = replaced(json!({"a": 1}), json!(99), &"/a".to_string());
        assert_eq!(doc, json!({"a": 99}));

        let doc = replaced(json!([1, 2]), json!(9), &"/0".to_string());
        assert_eq!(doc, json!([9, 2]));
    }

    #[test]
    fn copy_duplicates_a_subtree() {
        let doc = copied(
            json!({"a": {"x": 1}, "b": {}}),
            &"/a/x".to_string(),
            &"/b/x".to_string(),
        );
        assert_eq!(doc["b"]["x"], json!(1));
    }

    #[test]
    fn move_relocates_a_value() {
        let doc = moved(json!({"a": 1, "b": 2}), &"/a".to_string(), &"/c".to_string());
        assert_eq!(doc, json!({"b": 2, "c": 1}));
    }

    #[test]
    fn move_into_own_subtree_is_skipped() {
        let original = json!({"a": {"x": 1}});
        let doc = moved(original.clone(), &"/a".to_string(), &"/a/x".to_string());
        assert_eq!(doc, original);
    }

    #[test]
    fn test_compares_structurally() {
        let doc = json!({"a": 42, "s": "hi"});
        assert!(test(&doc, &json!(42), &"/a".to_string()));
        assert!(!test(&doc, &json!(99), &"/a".to_string()));
        assert!(!test(&doc, &json!(1), &"/missing".to_string()));
        assert!(test(&doc, &doc.clone(), &String::new()));
    }

    #[test]
    fn unresolvable_pointers_are_no_ops() {
        let original = json!({"a": [1, 2]});
        let doc = added(original.clone(), json!(5), &"/a/9".to_string());
        assert_eq!(doc, original);
        let doc = removed(original.clone(), &"/zzz".to_string());
        assert_eq!(doc, original);
        let doc = replaced(original.clone(), json!(5), &"not a pointer".to_string());
        assert_eq!(doc, original);
    }

    #[test]
    fn escaped_components_resolve() {
        let doc = json!({"a/b": 1, "c~d": 2});
        assert!(test(&doc, &json!(1), &"/a~1b".to_string()));
        assert!(test(&doc, &json!(2), &"/c~0d".to_string()));
    }
}
