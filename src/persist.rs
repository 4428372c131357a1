//! Color map persistence.
//!
//! A map is stored as one flat JSON object whose keys are tuple literals
//! such as `"(12, 34, 56)"` and whose values are `[r, g, b]` arrays:
//!
//! ```json
//! {
//!   "(12, 34, 56)": [200, 10, 10]
//! }
//! ```
//!
//! Keys are decoded by a strict tuple parser; anything other than three
//! decimal channels in optional parentheses is rejected.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use anyhow::Context;
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};

use crate::color::{parse_channels, Color};
use crate::color_map::ColorMap;
use crate::error::{RecolorError, Result};

/// Encode a color as a tuple literal, e.g. `(12, 34, 56)`.
pub fn encode_key(color: Color) -> String {
    format!("({}, {}, {})", color.r, color.g, color.b)
}

/// Decode a tuple literal produced by [`encode_key`].
pub fn parse_key(key: &str) -> Result<Color> {
    let trimmed = key.trim();
    let inner = match (trimmed.strip_prefix('('), trimmed.strip_suffix(')')) {
        (Some(_), Some(_)) => &trimmed[1..trimmed.len() - 1],
        (None, None) => trimmed,
        _ => {
            return Err(RecolorError::MalformedMap(format!(
                "unbalanced parentheses in key '{key}'"
            )))
        }
    };
    parse_channels(inner)
        .map_err(|reason| RecolorError::MalformedMap(format!("key '{key}': {reason}")))
}

pub fn to_json(map: &ColorMap) -> String {
    let object: BTreeMap<String, [u8; 3]> = map
        .iter()
        .map(|(k, v)| (encode_key(k), v.to_array()))
        .collect();
    // A map of strings to byte arrays always serializes.
    serde_json::to_string_pretty(&object).unwrap_or_default()
}

/// Object entries in document order, repeated keys included.
struct RawEntries(Vec<(String, [u8; 3])>);

impl<'de> Deserialize<'de> for RawEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = RawEntries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object of color keys to [r, g, b] arrays")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<RawEntries, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry::<String, [u8; 3]>()? {
                    entries.push(entry);
                }
                Ok(RawEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

/// Parse a persisted map. Any bad key or value aborts the whole load, and
/// so does any color that appears as a key more than once.
pub fn from_json(text: &str) -> Result<ColorMap> {
    let RawEntries(raw) =
        serde_json::from_str(text).map_err(|e| RecolorError::MalformedMap(e.to_string()))?;

    let mut entries = BTreeMap::new();
    for (key, value) in &raw {
        let original = parse_key(key)?;
        if entries.insert(original, Color::from(*value)).is_some() {
            return Err(RecolorError::MalformedMap(format!(
                "duplicate key {}",
                encode_key(original)
            )));
        }
    }
    Ok(entries.into_iter().collect())
}

/// Write a color map to `path`.
pub fn save_color_map(map: &ColorMap, path: &Path) -> anyhow::Result<()> {
    std::fs::write(path, to_json(map))
        .with_context(|| format!("failed to write color map to {}", path.display()))?;
    log::info!("saved color map with {} entries to {}", map.len(), path.display());
    Ok(())
}

/// Read a color map from `path`.
pub fn load_color_map(path: &Path) -> anyhow::Result<ColorMap> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read color map from {}", path.display()))?;
    let map = from_json(&text).with_context(|| format!("invalid color map {}", path.display()))?;
    log::debug!("loaded color map with {} entries from {}", map.len(), path.display());
    Ok(map)
}
