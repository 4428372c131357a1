use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result};

use crate::color::Color;
use crate::grid::PixelGrid;

/// Load and decode an image into a pixel grid.
pub fn load_image(path: &Path) -> Result<PixelGrid> {
    let img = image::open(path).with_context(|| {
        if !path.exists() {
            format!("file not found: {}", path.display())
        } else {
            format!(
                "unsupported or corrupt image: {}. Supported formats: PNG, JPEG, BMP, GIF, TIFF, WebP",
                path.display()
            )
        }
    })?;
    let grid = PixelGrid::from_image(&img);
    log::debug!(
        "loaded {} ({}x{}, alpha: {})",
        path.display(),
        grid.width(),
        grid.height(),
        grid.has_alpha()
    );
    Ok(grid)
}

/// Collect the distinct colors of a grid in ascending (r, g, b) order.
///
/// With `ignore_background`, every pixel equal to the (0, 0) color is
/// dropped before deduplication.
pub fn unique_colors(grid: &PixelGrid, ignore_background: bool) -> Vec<Color> {
    let background = grid.background().filter(|_| ignore_background);
    let set: BTreeSet<Color> = grid
        .colors()
        .filter(|c| Some(*c) != background)
        .collect();
    log::debug!(
        "extracted {} unique colors (background {})",
        set.len(),
        match background {
            Some(bg) => format!("{bg} ignored"),
            None => "kept".to_string(),
        }
    );
    set.into_iter().collect()
}
