//! Normalizer seam for still-opaque input values (made by FontLab https://www.fontlab.com/)

use serde_json::Value;

/// Converts a raw value from some external serialization layer into a
/// plain tree of scalars, arrays, and maps.
///
/// The harvesting side never assumes normalization has already happened;
/// it works on whatever shape it is handed. A normalizer is consulted at
/// most once per scalar-field extraction, by
/// [`select_first_string_with`](crate::select::select_first_string_with),
/// to peel one proxy layer before probing.
pub trait Normalizer {
    fn normalize(&self, raw: &Value) -> Value;
}

/// Identity normalizer for input that is already plain data.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainValues;

impl Normalizer for PlainValues {
    fn normalize(&self, raw: &Value) -> Value {
        raw.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plain_values_is_identity() {
        let value = json!({ "value": 14, "name": "Inter" });
        assert_eq!(PlainValues.normalize(&value), value);
    }
}
