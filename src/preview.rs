use crossterm::style::{style, Color as TermColor, Stylize};

use crate::color::Color;
use crate::color_map::ColorMap;

fn to_term(c: Color) -> TermColor {
    TermColor::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}

/// Black or white text, whichever reads better on `c`.
fn contrast_fg(c: Color) -> TermColor {
    if c.luma() > 0.5 {
        TermColor::Black
    } else {
        TermColor::White
    }
}

fn swatch(c: Color) -> String {
    style(format!(" {} ", c.to_hex()))
        .with(contrast_fg(c))
        .on(to_term(c))
        .to_string()
}

/// One line per map entry: original swatch, arrow, replacement swatch.
pub fn render_preview(map: &ColorMap) -> String {
    let mut out = String::new();
    for (original, replacement) in map.iter() {
        out.push_str(&format!("  {} -> {}\n", swatch(original), swatch(replacement)));
    }
    out
}

/// A single row of replacement swatches, deduplicated, for a compact summary.
pub fn render_palette_row(map: &ColorMap) -> String {
    let mut targets: Vec<Color> = map.iter().map(|(_, v)| v).collect();
    targets.sort();
    targets.dedup();
    let mut out = String::from("  ");
    for c in targets {
        out.push_str(&style("   ").on(to_term(c)).to_string());
    }
    out.push('\n');
    out
}
