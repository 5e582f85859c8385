//! JSON Pointer (RFC 6901) parsing and navigation.

use serde_json::Value;

/// Unescape a single pointer component: `~1` becomes `/`, `~0` becomes `~`.
pub fn unescape_component(component: &str) -> String {
    if !component.contains('~') {
        return component.to_string();
    }
    // Order matters: ~1 must be replaced before ~0.
    component.replace("~1", "/").replace("~0", "~")
}

/// Parse a JSON Pointer into its unescaped path components.
///
/// The empty pointer addresses the whole document. A non-empty pointer that
/// does not start with `/` is malformed and yields `None`.
pub fn parse_pointer(pointer: &str) -> Option<Vec<String>> {
    if pointer.is_empty() {
        return Some(Vec::new());
    }
    let rest = pointer.strip_prefix('/')?;
    Some(rest.split('/').map(unescape_component).collect())
}

/// Immutable navigation to the value at `path`.
pub fn get<'a>(doc: &'a Value, path: &[String]) -> Option<&'a Value> {
    let mut current = doc;
    for step in path {
        current = match current {
            Value::Object(map) => map.get(step)?,
            Value::Array(arr) => arr.get(parse_index(step)?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Mutable navigation to the value at `path`.
pub fn get_mut<'a>(doc: &'a mut Value, path: &[String]) -> Option<&'a mut Value> {
    let mut current = doc;
    for step in path {
        current = match current {
            Value::Object(map) => map.get_mut(step)?,
            Value::Array(arr) => {
                let idx = parse_index(step)?;
                arr.get_mut(idx)?
            }
            _ => return None,
        };
    }
    Some(current)
}

/// Array index parse per RFC 6901: digits only, no leading zeros (except
/// `0` itself), and `-` is not a readable index.
pub fn parse_index(step: &str) -> Option<usize> {
    if step.len() > 1 && step.starts_with('0') {
        return None;
    }
    if step.is_empty() || !step.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    step.parse().ok()
}
