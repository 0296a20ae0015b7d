//! Catalog projection for the offline build step (made by FontLab https://www.fontlab.com/)

use std::fmt::Write as _;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One family projected out of the source catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFamily {
    pub family: String,
    #[serde(default)]
    pub variants: Vec<String>,
    #[serde(default)]
    pub category: String,
}

/// Parse a source catalog document and project each entry down to
/// family name, variant list, and category.
///
/// The document must carry a top-level `"items"` array; anything else is
/// a hard error, since the build step has no partial-success mode.
pub fn parse_catalog(json: &str) -> Result<Vec<CatalogFamily>> {
    let doc: Value = serde_json::from_str(json).context("parsing source catalog JSON")?;

    let items = doc
        .get("items")
        .and_then(Value::as_array)
        .ok_or_else(|| anyhow!("source catalog has no top-level \"items\" list"))?;

    items
        .iter()
        .map(|item| {
            serde_json::from_value(item.clone()).context("invalid catalog entry")
        })
        .collect()
}

/// Order families alphabetically, ignoring letter case.
///
/// Stable, so entries whose lowercased names collide keep their source
/// order.
pub fn sort_families(families: &mut [CatalogFamily]) {
    families.sort_by_cached_key(|entry| entry.family.to_lowercase());
}

/// Render the projected catalog as a self-contained generated Rust
/// module exposing the list as a typed constant.
pub fn render_module(families: &[CatalogFamily]) -> String {
    let mut out = String::new();

    out.push_str("//! Generated font catalog. Regenerate with `typh catalog`; do not edit.\n\n");
    out.push_str("#[derive(Debug, Clone, Copy)]\n");
    out.push_str("pub struct CatalogFamily {\n");
    out.push_str("    pub family: &'static str,\n");
    out.push_str("    pub variants: &'static [&'static str],\n");
    out.push_str("    pub category: &'static str,\n");
    out.push_str("}\n\n");
    out.push_str("pub static CATALOG: &[CatalogFamily] = &[\n");

    for entry in families {
        let variants: Vec<String> = entry.variants.iter().map(|v| format!("{v:?}")).collect();
        let _ = writeln!(
            out,
            "    CatalogFamily {{ family: {:?}, variants: &[{}], category: {:?} }},",
            entry.family,
            variants.join(", "),
            entry.category,
        );
    }

    out.push_str("];\n");
    out
}
