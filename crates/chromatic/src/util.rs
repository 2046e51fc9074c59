//! Object utilities shared by the option parsers and the style compiler.
//!
//! Configuration values are plain [`serde_json::Value`] trees, so the helpers
//! here work on [`Map`] (a JSON object) and [`Value`]. The two sequence helpers
//! at the bottom work on the [`Piece`]s produced by a [`Stylizer`](crate::Stylizer).

use serde_json::{Map, Value};

use crate::style::Piece;

/// Returns `true` when the value is a JSON object (not an array, not null, not a scalar).
pub fn is_plain_object(value: &Value) -> bool {
    matches!(value, Value::Object(_))
}

/// Merges `assignable` into `reference`, keeping the shape of `reference`.
///
/// For every key present in both maps:
///
/// - two objects are merged recursively,
/// - two arrays are unioned: items of `assignable` not already in `reference`
///   are appended in their order,
/// - an object in `reference` facing the literal `true` in `assignable` is
///   kept as is (`true` means "keep the defaults"); an array facing `true`
///   is not locked and is overwritten like a scalar,
/// - anything else is overwritten by the value from `assignable`.
///
/// Keys only present in `assignable` are dropped.
///
/// # Example
///
/// ```rust
/// use chromatic::util::merge_object;
/// use serde_json::{json, Value};
///
/// let mut reference = json!({ "flat": true, "include": ["red"], "extra": { "a": 1 } });
/// let assignable = json!({ "flat": false, "include": ["red", "blue"], "extra": true, "other": 1 });
///
/// if let (Value::Object(reference), Value::Object(assignable)) = (&mut reference, &assignable) {
///     merge_object(reference, assignable);
/// }
///
/// assert_eq!(
///     reference,
///     json!({ "flat": false, "include": ["red", "blue"], "extra": { "a": 1 } })
/// );
/// ```
pub fn merge_object<'a>(
    reference: &'a mut Map<String, Value>,
    assignable: &Map<String, Value>,
) -> &'a mut Map<String, Value> {
    for (key, slot) in reference.iter_mut() {
        let Some(value) = assignable.get(key) else {
            continue;
        };

        match (slot, value) {
            (Value::Object(nested), Value::Object(incoming)) => {
                merge_object(nested, incoming);
            }
            (Value::Array(items), Value::Array(incoming)) => {
                for item in incoming {
                    if !items.contains(item) {
                        items.push(item.clone());
                    }
                }
            }
            (Value::Object(_), Value::Bool(true)) => {}
            (slot, value) => *slot = value.clone(),
        }
    }

    reference
}

/// Returns a copy of `obj` with its keys sorted lexicographically.
///
/// Only the first level is reordered; values are cloned unchanged.
pub fn order_object(obj: &Map<String, Value>) -> Map<String, Value> {
    let mut keys: Vec<&String> = obj.keys().collect();
    keys.sort();

    keys.into_iter()
        .filter_map(|key| obj.get(key).map(|value| (key.clone(), value.clone())))
        .collect()
}

/// Copies `obj`, recursing through nested objects.
///
/// Array values are cloned as they are rather than walked, so objects nested
/// inside arrays are copied as part of the array.
pub fn copy_object(obj: &Map<String, Value>) -> Map<String, Value> {
    obj.iter()
        .map(|(key, value)| {
            let copied = match value {
                Value::Object(nested) => Value::Object(copy_object(nested)),
                other => other.clone(),
            };
            (key.clone(), copied)
        })
        .collect()
}

/// Returns `true` when every piece is text. An empty slice is all text.
pub fn is_array_of_strings(pieces: &[Piece<'_>]) -> bool {
    pieces.iter().all(Piece::is_text)
}

/// Concatenates every maximal run of consecutive text pieces into one piece.
///
/// Value pieces keep their relative position.
pub fn group_strings_of_array(pieces: Vec<Piece<'_>>) -> Vec<Piece<'_>> {
    let mut grouped: Vec<Piece<'_>> = Vec::with_capacity(pieces.len());

    for piece in pieces {
        if let Piece::Text(text) = &piece {
            if let Some(Piece::Text(run)) = grouped.last_mut() {
                run.push_str(text);
                continue;
            }
        }
        grouped.push(piece);
    }

    grouped
}

/// Uppercases the first character and leaves the rest untouched.
///
/// # Example
///
/// ```rust
/// use chromatic::util::capitalize;
///
/// assert_eq!(capitalize("test"), "Test");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
