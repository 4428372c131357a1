use crate::color::Color;
use crate::color_map::ColorMap;
use crate::grid::PixelGrid;

/// Recolor a grid through `map`, returning a new grid.
///
/// Every pixel is looked up by exact RGB match; pixels equal to `background`
/// are never touched, even when the background is a key of the map. Alpha
/// is copied through unchanged.
pub fn apply_map(grid: &PixelGrid, map: &ColorMap, background: Option<Color>) -> PixelGrid {
    let mut replaced = 0usize;
    let out = grid.map_colors(|c| {
        if Some(c) == background {
            return c;
        }
        match map.get(&c) {
            Some(new) => {
                replaced += 1;
                new
            }
            None => c,
        }
    });
    log::debug!(
        "recolored {replaced} of {} pixels",
        grid.width() as usize * grid.height() as usize
    );
    out
}
