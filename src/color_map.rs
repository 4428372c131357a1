use std::collections::BTreeMap;

use crate::color::Color;

/// An exact-match mapping from original colors to replacement colors.
///
/// Built once and never patched; iteration is ordered by key so equal maps
/// serialize identically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorMap {
    entries: BTreeMap<Color, Color>,
}

impl ColorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replacement for `color`, if it is a key. No nearest-color fallback.
    pub fn get(&self, color: &Color) -> Option<Color> {
        self.entries.get(color).copied()
    }

    pub fn contains(&self, color: &Color) -> bool {
        self.entries.contains_key(color)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Color, Color)> + '_ {
        self.entries.iter().map(|(&k, &v)| (k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = Color> + '_ {
        self.entries.keys().copied()
    }

    /// Whether no replacement color is also a key whose own replacement
    /// differs, i.e. applying the map twice cannot cascade.
    pub fn is_non_cascading(&self) -> bool {
        self.entries
            .iter()
            .all(|(k, v)| k == v || self.entries.get(v).map_or(true, |next| next == v))
    }
}

impl FromIterator<(Color, Color)> for ColorMap {
    fn from_iter<I: IntoIterator<Item = (Color, Color)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
