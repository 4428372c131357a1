//! Recolor pixel-art images by remapping their distinct colors.
//!
//! The usual flow is: load an image into a [`grid::PixelGrid`], collect its
//! unique colors, build a [`color_map::ColorMap`] (clustered or basic), then
//! apply the map to one or many images. Maps can be saved and reloaded.

pub mod batch;
pub mod cli;
pub mod color;
pub mod color_map;
pub mod error;
pub mod grid;
pub mod palette_file;
pub mod persist;
pub mod pipeline;
pub mod preview;
pub mod random;
pub mod scheme;

pub use color::{Color, HsvColor};
pub use color_map::ColorMap;
pub use error::{RecolorError, Result};
pub use grid::PixelGrid;
pub use scheme::Scheme;
