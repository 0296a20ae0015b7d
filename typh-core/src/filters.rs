/// The polite bouncers of typography harvesting
///
/// Serialized design documents are full of strings that only look like
/// data: hash buckets, node counters, namespaced bookkeeping ids. These
/// predicates decide which strings get past the velvet rope - either as
/// an alias reference ("{typography.font}") or as a name a human might
/// actually have typed ("IBM Plex Mono").
///
/// Made with curiosity at FontLab https://www.fontlab.com/

/// Lowercase tokens that look like names but are internal noise.
///
/// Compared against the lowercased candidate; membership rejects it.
pub const STOP_WORDS: &[&str] = &[
    "true",
    "false",
    "null",
    "undefined",
    "none",
    "auto",
    "inherit",
    "initial",
    "unset",
    "normal",
    "default",
    "mixed",
    "object",
    "array",
    "string",
    "number",
    "boolean",
    "value",
    "type",
    "unit",
    "id",
    "key",
    "ref",
    "data",
];

/// Mapping keys whose subtrees hold trie bookkeeping, never payload.
pub const SKIP_KEYS: &[&str] = &[
    "hash", "shift", "count", "edit", "root", "tail", "bitmap", "size", "level", "altered",
    "owner",
];

/// Prefix reserved by the upstream encoding for its own fields.
pub const INTERNAL_KEY_PREFIX: &str = "__";

/// Should traversal refuse to descend under this mapping key?
pub fn is_skip_key(key: &str) -> bool {
    SKIP_KEYS.contains(&key) || key.starts_with(INTERNAL_KEY_PREFIX)
}

/// Does this string read like a font family a person chose?
///
/// Five checks, cheapest first, each targeting one class of encoding
/// artifact: length bounds catch single chars and binary blobs, the
/// letter requirement catches numeric tokens, the stop-word list catches
/// keyword-shaped noise, and the character screens catch namespaced ids
/// (`$`, `/`) and structural markers (`(`, `[`, leading `{`).
pub fn is_plausible_family_name(candidate: &str) -> bool {
    let len = candidate.chars().count();
    if !(2..=80).contains(&len) {
        return false;
    }

    if !candidate.chars().any(|c| c.is_ascii_alphabetic()) {
        return false;
    }

    if STOP_WORDS.contains(&candidate.to_lowercase().as_str()) {
        return false;
    }

    if candidate.contains('$') || candidate.contains('/') {
        return false;
    }

    if candidate.contains('(') || candidate.contains('[') || candidate.starts_with('{') {
        return false;
    }

    true
}

/// Is this string a `{...}` reference to a value stored elsewhere?
///
/// Both ends are checked independently; a lone `{` is not a closed
/// bracket even though it begins and ends with the same byte.
pub fn is_alias_ref(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    let first = chars.next();
    let last = chars.next_back();

    matches!((first, last), (Some('{'), Some('}')))
}
