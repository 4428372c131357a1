use std::str::FromStr;

use crate::color::{hsv_to_rgb, rgb_to_hsv, rotate_hue, Color, HsvColor};
use crate::error::{RecolorError, Result};

/// A rule for deriving target hues from one base hue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Complementary,
    Analogous,
    Triadic,
    Monochrome,
}

impl Scheme {
    pub const ALL: [Scheme; 4] = [
        Scheme::Complementary,
        Scheme::Analogous,
        Scheme::Triadic,
        Scheme::Monochrome,
    ];

    /// Hue offsets in degrees, in generation order.
    pub fn offsets(self) -> &'static [f64] {
        match self {
            Scheme::Complementary => &[0.0, 180.0],
            Scheme::Analogous => &[-30.0, 0.0, 30.0],
            Scheme::Triadic => &[0.0, 120.0, 240.0],
            Scheme::Monochrome => &[0.0],
        }
    }

    /// The scheme's hues for a normalized base hue.
    pub fn hues(self, base_hue: f64) -> Vec<f64> {
        self.offsets()
            .iter()
            .map(|&deg| rotate_hue(base_hue, deg))
            .collect()
    }

    pub fn name(self) -> &'static str {
        match self {
            Scheme::Complementary => "complementary",
            Scheme::Analogous => "analogous",
            Scheme::Triadic => "triadic",
            Scheme::Monochrome => "monochrome",
        }
    }
}

impl FromStr for Scheme {
    type Err = RecolorError;

    fn from_str(s: &str) -> Result<Self> {
        Scheme::ALL
            .into_iter()
            .find(|scheme| scheme.name() == s)
            .ok_or_else(|| RecolorError::InvalidScheme(s.to_string()))
    }
}

impl std::fmt::Display for Scheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Generate `count` target colors from `base` by cycling through the
/// scheme's hues, each paired with the base saturation and value.
pub fn generate_scheme_palette(base: Color, count: usize, scheme: Scheme) -> Vec<Color> {
    let base_hsv = rgb_to_hsv(base);
    scheme
        .hues(base_hsv.h)
        .into_iter()
        .cycle()
        .take(count)
        .map(|h| {
            hsv_to_rgb(HsvColor {
                h,
                s: base_hsv.s,
                v: base_hsv.v,
            })
        })
        .collect()
}

/// Like [`generate_scheme_palette`], resolving the scheme from its name.
pub fn generate_named_palette(base: Color, count: usize, scheme: &str) -> Result<Vec<Color>> {
    Ok(generate_scheme_palette(base, count, scheme.parse()?))
}
