use crate::error::{RecolorError, Result};

/// Core color type used throughout the pipeline.
/// An exact 8-bit sRGB triple; used both as color map key and value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// A color in hue/saturation/value space, every channel normalized to [0, 1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HsvColor {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color string like `#ff8800` or `#FF8800`.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.trim().strip_prefix('#').unwrap_or(hex.trim());
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(RecolorError::InvalidColor(format!(
                "expected 6 hex digits, got '{hex}'"
            )));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|e| RecolorError::InvalidColor(format!("'{hex}': {e}")))
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Serialize to lowercase hex `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Perceived brightness in [0, 1], used to pick readable label text.
    pub fn luma(self) -> f32 {
        (0.2126 * self.r as f32 + 0.7152 * self.g as f32 + 0.0722 * self.b as f32) / 255.0
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Parse exactly three comma-separated decimal channels, e.g. `12, 0, 255`.
///
/// Only ASCII digits and surrounding whitespace are accepted per channel;
/// signs, exponents and anything else are rejected.
pub(crate) fn parse_channels(text: &str) -> std::result::Result<Color, String> {
    let parts: Vec<&str> = text.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(format!("expected 3 channels, got {}", parts.len()));
    }
    let mut channels = [0u8; 3];
    for (slot, part) in channels.iter_mut().zip(&parts) {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(format!("'{part}' is not a channel value"));
        }
        *slot = part
            .parse()
            .map_err(|_| format!("channel {part} is outside 0-255"))?;
    }
    Ok(Color::from(channels))
}

/// Convert an sRGB color to normalized HSV.
///
/// Value is the largest channel, so it comes back unchanged from
/// [`hsv_to_rgb`]. Achromatic colors get hue 0.
pub fn rgb_to_hsv(color: Color) -> HsvColor {
    let [r, g, b] = color.to_array().map(|c| c as f64 / 255.0);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    if max == min {
        return HsvColor { h: 0.0, s: 0.0, v: max };
    }
    let range = max - min;
    let rc = (max - r) / range;
    let gc = (max - g) / range;
    let bc = (max - b) / range;
    let sector = if r == max {
        bc - gc
    } else if g == max {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };
    HsvColor {
        h: rotate_hue(sector / 6.0, 0.0),
        s: range / max,
        v: max,
    }
}

/// Convert normalized HSV back to an sRGB color.
///
/// The largest channel is `v` itself and the other two are interpolated
/// within the hue sector. Channels are truncated toward zero.
pub fn hsv_to_rgb(hsv: HsvColor) -> Color {
    let HsvColor { h, s, v } = hsv;
    let (r, g, b) = if s == 0.0 {
        (v, v, v)
    } else {
        let scaled = h * 6.0;
        let sector = scaled.floor();
        let f = scaled - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));
        match (sector as i64).rem_euclid(6) {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        }
    };
    let quantize = |c: f64| (c.clamp(0.0, 1.0) * 255.0) as u8;
    Color {
        r: quantize(r),
        g: quantize(g),
        b: quantize(b),
    }
}

/// Rotate a normalized hue by `degrees`, wrapping into [0, 1).
pub fn rotate_hue(h: f64, degrees: f64) -> f64 {
    let rotated = (h + degrees / 360.0).rem_euclid(1.0);
    // rem_euclid rounds tiny negatives up to exactly 1.0
    if rotated >= 1.0 {
        0.0
    } else {
        rotated
    }
}
