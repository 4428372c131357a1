use anyhow::{Context, Result};
use clap::Parser;
use rand::Rng;

use recolor::batch::{list_images, recolor_folder, recolor_image};
use recolor::cli::Args;
use recolor::color::Color;
use recolor::color_map::ColorMap;
use recolor::palette_file::load_palette_file;
use recolor::persist::{load_color_map, save_color_map};
use recolor::pipeline::basic::build_basic_map;
use recolor::pipeline::extract::{load_image, unique_colors};
use recolor::pipeline::smart::{build_smart_map, Targets};
use recolor::preview::{render_palette_row, render_preview};
use recolor::random::rng_from_seed;

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    run(&args)
}

fn run(args: &Args) -> Result<()> {
    let folder_mode = args.input.is_dir();
    let mut rng = rng_from_seed(args.seed);

    let map = match &args.load_map {
        Some(path) => load_color_map(path)?,
        None => {
            let source = if folder_mode {
                list_images(&args.input)?
                    .into_iter()
                    .next()
                    .with_context(|| format!("no images found in {}", args.input.display()))?
            } else {
                args.input.clone()
            };
            let grid = load_image(&source)?;
            let colors = unique_colors(&grid, !args.include_background);
            log::info!("{} unique colors in {}", colors.len(), source.display());
            build_map(args, &colors, &mut rng)?
        }
    };

    if args.preview {
        print!("{}", render_palette_row(&map));
        print!("{}", render_preview(&map));
    }

    if let Some(path) = &args.save_map {
        save_color_map(&map, path)?;
        println!("Saved map: {}", path.display());
    }

    if folder_mode {
        for written in recolor_folder(&args.input, &args.output, &map)? {
            println!("Saved: {}", written.display());
        }
    } else {
        if let Some(parent) = args.output.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        recolor_image(&args.input, &args.output, &map)?;
        println!("Saved: {}", args.output.display());
    }

    Ok(())
}

fn build_map(args: &Args, colors: &[Color], rng: &mut impl Rng) -> Result<ColorMap> {
    if let Some(path) = &args.palette {
        let palette = load_palette_file(path)?;
        return Ok(build_basic_map(colors, Some(&palette), rng)?);
    }
    if args.basic {
        return Ok(build_basic_map(colors, None, rng)?);
    }

    let base = args.base.as_deref().map(Color::from_hex).transpose()?;
    let targets = match (args.scheme.scheme(), base) {
        (Some(scheme), Some(base)) => Targets::Scheme { base, scheme },
        (Some(scheme), None) => {
            log::warn!("--scheme {scheme} has no --base color; using random targets");
            Targets::Random
        }
        (None, Some(_)) => {
            log::warn!("--base is ignored without --scheme");
            Targets::Random
        }
        (None, None) => Targets::Random,
    };
    Ok(build_smart_map(colors, targets, args.clusters, rng))
}
