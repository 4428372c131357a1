use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::ImageFormat;

use crate::color_map::ColorMap;
use crate::grid::PixelGrid;
use crate::pipeline::apply::apply_map;
use crate::pipeline::extract::load_image;

/// File extensions recognized by the folder driver.
const IMAGE_EXTENSIONS: [&str; 4] = ["bmp", "png", "jpg", "jpeg"];

pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.iter().any(|e| e.eq_ignore_ascii_case(ext)))
}

/// Recognized images directly inside `dir`, sorted by file name.
pub fn list_images(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory {}", dir.display()))?;
    let mut images = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("failed to read entry in {}", dir.display()))?
            .path();
        if path.is_file() && is_supported_image(&path) {
            images.push(path);
        } else {
            log::debug!("skipping {}", path.display());
        }
    }
    images.sort();
    Ok(images)
}

/// Encode a grid to `path`, format chosen by extension.
///
/// The image is written to a sibling temporary file first and renamed into
/// place, so `path` never holds a partial image.
pub fn save_image(grid: &PixelGrid, path: &Path) -> Result<()> {
    let format = ImageFormat::from_path(path)
        .with_context(|| format!("unsupported output format: {}", path.display()))?;
    let mut img = grid.to_image();
    if format == ImageFormat::Jpeg {
        img = image::DynamicImage::ImageRgb8(img.to_rgb8());
    }

    let file_name = path
        .file_name()
        .with_context(|| format!("output path has no file name: {}", path.display()))?;
    let mut tmp_name = std::ffi::OsString::from(".");
    tmp_name.push(file_name);
    tmp_name.push(".partial");
    let tmp = path.with_file_name(tmp_name);

    let written = img
        .save_with_format(&tmp, format)
        .with_context(|| format!("failed to encode image to {}", path.display()))
        .and_then(|()| {
            std::fs::rename(&tmp, path)
                .with_context(|| format!("failed to move image into place at {}", path.display()))
        });
    if written.is_err() && tmp.exists() {
        if let Err(e) = std::fs::remove_file(&tmp) {
            log::warn!("could not remove {}: {e}", tmp.display());
        }
    }
    written
}

/// Recolor one image file with `map`, keeping its (0, 0) background.
pub fn recolor_image(input: &Path, output: &Path, map: &ColorMap) -> Result<()> {
    let grid = load_image(input)?;
    let recolored = apply_map(&grid, map, grid.background());
    save_image(&recolored, output)?;
    log::info!("recolored {} -> {}", input.display(), output.display());
    Ok(())
}

/// Recolor every recognized image in `input_dir` into `output_dir` under the
/// same file name, creating `output_dir` when absent.
///
/// Returns the written paths in processing order. Stops at the first
/// failure; images already written stay complete.
pub fn recolor_folder(input_dir: &Path, output_dir: &Path, map: &ColorMap) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory {}", output_dir.display()))?;

    let images = list_images(input_dir)?;
    if images.is_empty() {
        log::warn!("no recognized images in {}", input_dir.display());
    }

    let mut written = Vec::with_capacity(images.len());
    for input in images {
        let Some(name) = input.file_name() else {
            continue;
        };
        let output = output_dir.join(name);
        recolor_image(&input, &output, map)?;
        written.push(output);
    }
    Ok(written)
}
