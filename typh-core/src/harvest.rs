//! Bounded deep harvesting of candidate strings (made by FontLab https://www.fontlab.com/)

use serde_json::Value;

use crate::filters::{is_alias_ref, is_plausible_family_name, is_skip_key};

/// Recursion ceiling that comfortably covers the trie shapes the
/// upstream encoding produces. Callers may raise or lower it per call.
pub const DEFAULT_MAX_DEPTH: usize = 8;

/// Walk `value` depth-first, appending every candidate string to `found`
/// in discovery order.
///
/// A string leaf is a candidate when its trimmed form is non-empty and
/// passes either [`is_alias_ref`] or [`is_plausible_family_name`].
/// Numbers and booleans are dead ends. Mapping entries under a skip key
/// are not descended into. Anything nested deeper than `max_depth` is
/// abandoned unexplored; that ceiling, not a cycle check, is what bounds
/// the work.
///
/// Never panics, whatever the shape of the input.
pub fn harvest_strings(value: &Value, found: &mut Vec<String>, depth: usize, max_depth: usize) {
    if depth > max_depth {
        return;
    }

    match value {
        Value::Null | Value::Bool(_) | Value::Number(_) => {}
        Value::String(raw) => {
            let trimmed = raw.trim();
            if !trimmed.is_empty() && (is_alias_ref(trimmed) || is_plausible_family_name(trimmed))
            {
                found.push(trimmed.to_string());
            }
        }
        Value::Array(items) => {
            for item in items {
                harvest_strings(item, found, depth + 1, max_depth);
            }
        }
        Value::Object(entries) => {
            for (key, entry) in entries {
                if is_skip_key(key) {
                    continue;
                }
                harvest_strings(entry, found, depth + 1, max_depth);
            }
        }
    }
}
