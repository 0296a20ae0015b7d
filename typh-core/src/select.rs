//! Selection policies over harvested candidates (made by FontLab https://www.fontlab.com/)

use serde_json::Value;

use crate::filters::is_alias_ref;
use crate::harvest::{harvest_strings, DEFAULT_MAX_DEPTH};
use crate::normalize::{Normalizer, PlainValues};

/// Pick the one font family string a caller wants out of `raw`, however
/// deeply the encoding buried it. `None` when nothing plausible exists.
pub fn select_font_family(raw: &Value) -> Option<String> {
    select_font_family_bounded(raw, DEFAULT_MAX_DEPTH)
}

/// [`select_font_family`] with a caller-chosen recursion ceiling.
///
/// A top-level string is returned trimmed without any traversal. For
/// every other shape the whole subtree is harvested once and a single
/// winner chosen: the first alias reference in discovery order if any
/// exists, else the first plausible name. An alias is an explicit
/// indirection the author wrote down, so it outranks a heuristic match
/// even when it is discovered later. When several aliases coexist the
/// first one wins; which of them the author meant is not recoverable
/// from the encoding.
pub fn select_font_family_bounded(raw: &Value, max_depth: usize) -> Option<String> {
    match raw {
        Value::Null => None,
        Value::String(text) => non_empty_trimmed(text),
        other => {
            let mut found = Vec::new();
            harvest_strings(other, &mut found, 0, max_depth);

            if let Some(alias) = found.iter().find(|candidate| is_alias_ref(candidate)) {
                return Some(alias.clone());
            }
            found.into_iter().next()
        }
    }
}

/// Extract a simple scalar typography field (weight, size, style) as a
/// string, peeling one proxy layer with the default normalizer.
pub fn select_first_string(raw: &Value) -> Option<String> {
    select_first_string_with(raw, &PlainValues)
}

/// [`select_first_string`] with an explicit [`Normalizer`].
///
/// Scalar fields are never buried inside the encoding's set/vector tries
/// the way families are, so this path stays deliberately narrow: plain
/// strings and numbers pass through, sequences yield their first
/// extractable element, and mappings are probed at exactly `"value"`
/// then `"name"`. Enumerating arbitrary mapping entries here would
/// surface bookkeeping fields as false positives.
pub fn select_first_string_with<N: Normalizer>(raw: &Value, normalizer: &N) -> Option<String> {
    match raw {
        Value::Null => None,
        Value::String(text) => non_empty_trimmed(text),
        Value::Number(number) => Some(number.to_string()),
        other => {
            let plain = normalizer.normalize(other);
            match plain {
                Value::String(text) => non_empty_trimmed(&text),
                Value::Number(number) => Some(number.to_string()),
                Value::Array(items) => items
                    .iter()
                    .find_map(|item| select_first_string_with(item, normalizer)),
                Value::Object(entries) => ["value", "name"]
                    .iter()
                    .find_map(|key| entries.get(*key).and_then(probe_scalar)),
                _ => None,
            }
        }
    }
}

fn probe_scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => non_empty_trimmed(text),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

fn non_empty_trimmed(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
