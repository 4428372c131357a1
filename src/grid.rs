use image::{DynamicImage, RgbaImage};

use crate::color::Color;

/// An in-memory raster of RGBA pixels, row-major.
///
/// Color matching only ever looks at the RGB triple; alpha is carried along
/// untouched so it survives a recolor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
    has_alpha: bool,
}

impl PixelGrid {
    /// Build an opaque grid by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Color) -> Self {
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                let c = f(x, y);
                pixels.push([c.r, c.g, c.b, u8::MAX]);
            }
        }
        Self {
            width,
            height,
            pixels,
            has_alpha: false,
        }
    }

    /// Build an opaque grid from rows of colors. Returns `None` for ragged rows.
    pub fn from_rows(rows: &[Vec<Color>]) -> Option<Self> {
        let width = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != width) {
            return None;
        }
        Some(Self::from_fn(width as u32, rows.len() as u32, |x, y| {
            rows[y as usize][x as usize]
        }))
    }

    pub fn from_image(img: &DynamicImage) -> Self {
        let has_alpha = img.color().has_alpha();
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        let pixels = rgba.pixels().map(|p| p.0).collect();
        Self {
            width,
            height,
            pixels,
            has_alpha,
        }
    }

    /// Convert back to an image, dropping alpha when the source had none.
    pub fn to_image(&self) -> DynamicImage {
        let raw: Vec<u8> = self.pixels.iter().flatten().copied().collect();
        let rgba = RgbaImage::from_raw(self.width, self.height, raw)
            .unwrap_or_else(|| RgbaImage::new(self.width, self.height));
        let img = DynamicImage::ImageRgba8(rgba);
        if self.has_alpha {
            img
        } else {
            DynamicImage::ImageRgb8(img.to_rgb8())
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn has_alpha(&self) -> bool {
        self.has_alpha
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// RGB color at `(x, y)`.
    pub fn get(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let [r, g, b, _] = self.pixels[(y * self.width + x) as usize];
        Some(Color::new(r, g, b))
    }

    pub fn alpha(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[(y * self.width + x) as usize][3])
    }

    /// The background color: the pixel at (0, 0).
    pub fn background(&self) -> Option<Color> {
        self.get(0, 0)
    }

    /// All pixel colors in row-major order.
    pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
        self.pixels.iter().map(|&[r, g, b, _]| Color::new(r, g, b))
    }

    /// Rewrite every pixel's RGB through `f`, keeping alpha.
    pub(crate) fn map_colors(&self, mut f: impl FnMut(Color) -> Color) -> Self {
        let pixels = self
            .pixels
            .iter()
            .map(|&[r, g, b, a]| {
                let c = f(Color::new(r, g, b));
                [c.r, c.g, c.b, a]
            })
            .collect();
        Self {
            width: self.width,
            height: self.height,
            pixels,
            has_alpha: self.has_alpha,
        }
    }
}
