use std::path::Path;

use anyhow::Context;

use crate::color::{parse_channels, Color};
use crate::error::{RecolorError, Result};

/// Parse a palette: one `r,g,b` color per line, blank lines ignored.
pub fn parse_palette(text: &str) -> Result<Vec<Color>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            parse_channels(line).map_err(|reason| RecolorError::MalformedPalette {
                line: i + 1,
                reason,
            })
        })
        .collect()
}

/// Read a palette file from disk.
pub fn load_palette_file(path: &Path) -> anyhow::Result<Vec<Color>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read palette file {}", path.display()))?;
    let palette =
        parse_palette(&text).with_context(|| format!("invalid palette file {}", path.display()))?;
    log::debug!("loaded {} palette colors from {}", palette.len(), path.display());
    Ok(palette)
}
