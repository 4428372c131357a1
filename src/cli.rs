use std::path::PathBuf;

use clap::Parser;

use crate::pipeline::smart::DEFAULT_CLUSTERS;
use crate::scheme::Scheme;

/// Recolor pixel-art images by remapping their distinct colors.
#[derive(Parser, Debug)]
#[command(name = "recolor", version, about)]
pub struct Args {
    /// Input image or folder of images
    pub input: PathBuf,

    /// Output image, or output folder when the input is a folder
    pub output: PathBuf,

    /// Seed for every random choice (clustering, random targets, random maps)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Color scheme for cluster target hues
    #[arg(long, value_enum, default_value_t = SchemeChoice::Random)]
    pub scheme: SchemeChoice,

    /// Base color for the scheme, as #rrggbb
    #[arg(short, long)]
    pub base: Option<String>,

    /// Number of HSV clusters for the smart mapping
    #[arg(short = 'k', long, default_value_t = DEFAULT_CLUSTERS)]
    pub clusters: usize,

    /// Use the basic (positional or random) mapping instead of clustering
    #[arg(long)]
    pub basic: bool,

    /// Palette file, one `r,g,b` per line (implies --basic)
    #[arg(short, long, conflicts_with_all = ["scheme", "base"])]
    pub palette: Option<PathBuf>,

    /// Reuse a saved color map instead of building one
    #[arg(long, conflicts_with_all = ["palette", "basic"])]
    pub load_map: Option<PathBuf>,

    /// Save the color map used to this file
    #[arg(long)]
    pub save_map: Option<PathBuf>,

    /// Include the background color when collecting colors to remap
    #[arg(long)]
    pub include_background: bool,

    /// Print a colored terminal preview of the color map
    #[arg(long)]
    pub preview: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SchemeChoice {
    Random,
    Complementary,
    Analogous,
    Triadic,
    Monochrome,
}

impl SchemeChoice {
    pub fn scheme(self) -> Option<Scheme> {
        match self {
            SchemeChoice::Random => None,
            SchemeChoice::Complementary => Some(Scheme::Complementary),
            SchemeChoice::Analogous => Some(Scheme::Analogous),
            SchemeChoice::Triadic => Some(Scheme::Triadic),
            SchemeChoice::Monochrome => Some(Scheme::Monochrome),
        }
    }
}
