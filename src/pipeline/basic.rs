use rand::Rng;

use crate::color::Color;
use crate::color_map::ColorMap;
use crate::error::{RecolorError, Result};
use crate::random::random_color;

/// Build a color map without clustering.
///
/// With a palette, the i-th unique color maps to the i-th palette color; the
/// palette must be at least as long as `colors`. Without one, every color
/// gets an independent random replacement drawn from `rng`.
pub fn build_basic_map(
    colors: &[Color],
    palette: Option<&[Color]>,
    rng: &mut impl Rng,
) -> Result<ColorMap> {
    match palette {
        Some(palette) => {
            if palette.len() < colors.len() {
                return Err(RecolorError::InsufficientPalette {
                    needed: colors.len(),
                    available: palette.len(),
                });
            }
            Ok(colors.iter().copied().zip(palette.iter().copied()).collect())
        }
        None => Ok(colors.iter().map(|&c| (c, random_color(rng))).collect()),
    }
}
