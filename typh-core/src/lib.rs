/// typh-core: The patient beachcomber of typography data
///
/// Design documents arrive as opaque nested structures whose layout
/// changes with every version of the upstream serializer. Somewhere in
/// that drift of hash buckets, node counters, and namespaced bookkeeping
/// sits the one string a caller actually wants: a font family name, an
/// alias reference, a weight. This library walks the beach and picks up
/// exactly that string, leaving the driftwood where it lies.
///
/// ## Three Habits of a Good Beachcomber
///
/// **Filtering**: Knowing treasure from trash at a glance
/// - A plausibility predicate that recognizes names humans type
/// - An alias predicate for `{...}` references to values stored elsewhere
/// - Denylists for the encoding's stop words and bookkeeping keys
///
/// **Harvesting**: Searching thoroughly but never obsessively
/// - Depth-first over scalars, sequences, and mappings
/// - Refuses to dig under known bookkeeping keys
/// - Stops at a depth ceiling, because some holes have no bottom
///
/// **Selecting**: Choosing one answer and standing by it
/// - Aliases outrank heuristic matches; they are authorial intent
/// - Scalar fields get a narrow probe that never wanders
/// - "Not found" is an answer, never an error
///
/// ## A Sample Stroll
///
/// ```rust
/// use serde_json::json;
/// use typh_core::select::{select_font_family, select_first_string};
///
/// // A family name buried inside versioned trie litter.
/// let raw = json!({
///     "shift": 5,
///     "arr": ["{typography.font}", "Roboto"],
/// });
/// assert_eq!(
///     select_font_family(&raw).as_deref(),
///     Some("{typography.font}"),
/// );
///
/// // A scalar field, probed narrowly.
/// let size = json!({ "value": 14, "shift": 5 });
/// assert_eq!(select_first_string(&size).as_deref(), Some("14"));
/// ```
///
/// ## House Rules
///
/// Every call is pure, synchronous, and re-entrant: no I/O, no shared
/// state, no panics on malformed input. The depth ceiling is the sole
/// bound on work. Empty hands are reported as `None`, never as an error.
///
/// ---
///
/// Crafted with care at FontLab https://www.fontlab.com/

pub mod catalog;
pub mod filters;
pub mod harvest;
pub mod normalize;
pub mod select;
