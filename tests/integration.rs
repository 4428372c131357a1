use std::path::{Path, PathBuf};

use recolor::batch::{recolor_folder, recolor_image};
use recolor::color::{rgb_to_hsv, Color};
use recolor::color_map::ColorMap;
use recolor::palette_file::load_palette_file;
use recolor::persist::{load_color_map, save_color_map};
use recolor::pipeline::apply::apply_map;
use recolor::pipeline::basic::build_basic_map;
use recolor::pipeline::extract::{load_image, unique_colors};
use recolor::pipeline::smart::{build_smart_map, Targets};
use recolor::random::rng_from_seed;
use recolor::{PixelGrid, RecolorError, Scheme};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const SKY: [u8; 3] = [90, 160, 230];

fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// A fresh, empty scratch directory under the fixtures folder.
fn scratch_dir(name: &str) -> PathBuf {
    let dir = fixture_dir().join(name);
    if dir.exists() {
        std::fs::remove_dir_all(&dir).unwrap();
    }
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// A 16x16 sprite on a flat sky background: a shaded red body, a green
/// outline and a yellow highlight.
fn create_sprite(path: &Path) {
    let img = image::RgbImage::from_fn(16, 16, |x, y| {
        let inside = (3..13).contains(&x) && (3..13).contains(&y);
        let edge = inside && (x == 3 || x == 12 || y == 3 || y == 12);
        if !inside {
            image::Rgb(SKY)
        } else if edge {
            image::Rgb([20, 120, 30])
        } else if x == 5 && y == 5 {
            image::Rgb([250, 230, 60])
        } else if y < 8 {
            image::Rgb([210, 40, 40])
        } else {
            image::Rgb([140, 25, 25])
        }
    });
    img.save(path).unwrap();
}

fn sprite_grid(dir: &Path, name: &str) -> (PathBuf, PixelGrid) {
    let path = dir.join(name);
    create_sprite(&path);
    let grid = load_image(&path).unwrap();
    (path, grid)
}

// ---------------------------------------------------------------------------
// End-to-end mapping
// ---------------------------------------------------------------------------

#[test]
fn sprite_colors_exclude_background() {
    let dir = scratch_dir("it_extract");
    let (_, grid) = sprite_grid(&dir, "sprite.png");

    let colors = unique_colors(&grid, true);
    assert_eq!(colors.len(), 4);
    assert!(!colors.contains(&Color::from(SKY)));

    let with_bg = unique_colors(&grid, false);
    assert_eq!(with_bg.len(), 5);
}

#[test]
fn smart_recolor_keeps_background_and_shading() {
    let dir = scratch_dir("it_smart");
    let (_, grid) = sprite_grid(&dir, "sprite.png");
    let colors = unique_colors(&grid, true);

    let targets = Targets::Scheme {
        base: Color::new(40, 80, 220),
        scheme: Scheme::Analogous,
    };
    let map = build_smart_map(&colors, targets, 3, &mut rng_from_seed(Some(1234)));
    assert_eq!(map.len(), colors.len());

    let out = apply_map(&grid, &map, grid.background());
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let before = grid.get(x, y).unwrap();
            let after = out.get(x, y).unwrap();
            if before == Color::from(SKY) {
                assert_eq!(after, before, "background changed at ({x}, {y})");
            } else {
                assert_eq!(Some(after), map.get(&before));
            }
        }
    }

    // Light and dark body shades stay ordered by value.
    let light = rgb_to_hsv(map.get(&Color::new(210, 40, 40)).unwrap());
    let dark = rgb_to_hsv(map.get(&Color::new(140, 25, 25)).unwrap());
    assert!(light.v > dark.v, "shading inverted: {light:?} vs {dark:?}");
}

#[test]
fn smart_map_is_reproducible_for_a_sprite() {
    let dir = scratch_dir("it_seed");
    let (_, grid) = sprite_grid(&dir, "sprite.png");
    let colors = unique_colors(&grid, true);

    let a = build_smart_map(&colors, Targets::Random, 8, &mut rng_from_seed(Some(77)));
    let b = build_smart_map(&colors, Targets::Random, 8, &mut rng_from_seed(Some(77)));
    assert_eq!(a, b);
    assert_eq!(recolor::persist::to_json(&a), recolor::persist::to_json(&b));
}

#[test]
fn basic_palette_covers_every_color_once() {
    let dir = scratch_dir("it_basic");
    let (_, grid) = sprite_grid(&dir, "sprite.png");
    let colors = unique_colors(&grid, false);

    let palette: Vec<Color> = (0..colors.len() as u8)
        .map(|i| Color::new(i, 100, 200))
        .collect();
    let map = build_basic_map(&colors, Some(&palette), &mut rng_from_seed(None)).unwrap();

    assert_eq!(map.len(), colors.len());
    let keys: Vec<Color> = map.keys().collect();
    assert_eq!(keys, colors);
    for (i, c) in colors.iter().enumerate() {
        assert_eq!(map.get(c), Some(palette[i]));
    }
}

#[test]
fn palette_file_too_short_fails_before_mapping() {
    let dir = scratch_dir("it_short_palette");
    let (_, grid) = sprite_grid(&dir, "sprite.png");
    let palette_path = dir.join("palette.txt");
    std::fs::write(&palette_path, "10,10,10\n\n20,20,20\n").unwrap();

    let palette = load_palette_file(&palette_path).unwrap();
    let colors = unique_colors(&grid, true);
    let err = build_basic_map(&colors, Some(&palette), &mut rng_from_seed(None)).unwrap_err();
    assert_eq!(
        err,
        RecolorError::InsufficientPalette {
            needed: 4,
            available: 2
        }
    );
}

#[test]
fn applying_a_non_cascading_map_twice_is_stable() {
    let dir = scratch_dir("it_idempotent");
    let (_, grid) = sprite_grid(&dir, "sprite.png");
    let colors = unique_colors(&grid, true);

    let palette: Vec<Color> = (0..colors.len() as u8)
        .map(|i| Color::new(1, 2, i))
        .collect();
    let map = build_basic_map(&colors, Some(&palette), &mut rng_from_seed(None)).unwrap();
    assert!(map.is_non_cascading());

    let once = apply_map(&grid, &map, grid.background());
    let twice = apply_map(&once, &map, grid.background());
    assert_eq!(once, twice);
}

// ---------------------------------------------------------------------------
// Files and folders
// ---------------------------------------------------------------------------

#[test]
fn saved_map_recolors_identically_after_reload() {
    let dir = scratch_dir("it_persist");
    let (input, grid) = sprite_grid(&dir, "sprite.png");
    let colors = unique_colors(&grid, true);
    let map = build_smart_map(&colors, Targets::Random, 4, &mut rng_from_seed(Some(5)));

    let map_path = dir.join("map.json");
    save_color_map(&map, &map_path).unwrap();
    let reloaded = load_color_map(&map_path).unwrap();
    assert_eq!(reloaded, map);

    let first = dir.join("first.png");
    let second = dir.join("second.png");
    recolor_image(&input, &first, &map).unwrap();
    recolor_image(&input, &second, &reloaded).unwrap();
    assert_eq!(load_image(&first).unwrap(), load_image(&second).unwrap());
}

#[test]
fn corrupt_map_file_is_rejected() {
    let dir = scratch_dir("it_bad_map");
    let path = dir.join("map.json");
    std::fs::write(&path, r#"{"(1, 2, 3)": [1, 2, 3], "os.system('x')": [0, 0, 0]}"#).unwrap();
    assert!(load_color_map(&path).is_err());
}

#[test]
fn folder_batch_applies_one_map_to_every_image() {
    let dir = scratch_dir("it_folder");
    let input_dir = dir.join("in");
    let output_dir = dir.join("out").join("nested");
    std::fs::create_dir_all(&input_dir).unwrap();

    create_sprite(&input_dir.join("b.png"));
    create_sprite(&input_dir.join("a.BMP"));
    std::fs::write(input_dir.join("notes.txt"), "not an image").unwrap();

    let grid = load_image(&input_dir.join("a.BMP")).unwrap();
    let colors = unique_colors(&grid, true);
    let map: ColorMap = colors
        .iter()
        .map(|&c| (c, Color::new(255 - c.r, 255 - c.g, 255 - c.b)))
        .collect();

    let written = recolor_folder(&input_dir, &output_dir, &map).unwrap();
    assert_eq!(
        written,
        vec![output_dir.join("a.BMP"), output_dir.join("b.png")]
    );

    for path in &written {
        let out = load_image(path).unwrap();
        assert_eq!(out.background(), Some(Color::from(SKY)));
        assert_eq!(out.get(6, 6), Some(Color::new(45, 215, 215)));
    }
    assert!(!output_dir.join("notes.txt").exists());
}

#[test]
fn missing_input_image_is_an_io_failure() {
    let dir = scratch_dir("it_missing");
    let result = recolor_image(&dir.join("nope.png"), &dir.join("out.png"), &ColorMap::new());
    assert!(result.is_err());
    assert!(!dir.join("out.png").exists());
}

#[test]
fn transparent_pixels_keep_alpha_through_recolor() {
    let dir = scratch_dir("it_alpha");
    let input = dir.join("alpha.png");
    let img = image::RgbaImage::from_fn(4, 1, |x, _| match x {
        0 => image::Rgba([0, 0, 0, 0]),
        _ => image::Rgba([200, 10, 10, 128]),
    });
    img.save(&input).unwrap();

    let map: ColorMap = [(Color::new(200, 10, 10), Color::new(10, 10, 200))]
        .into_iter()
        .collect();
    let output = dir.join("alpha_out.png");
    recolor_image(&input, &output, &map).unwrap();

    let out = load_image(&output).unwrap();
    assert!(out.has_alpha());
    assert_eq!(out.get(2, 0), Some(Color::new(10, 10, 200)));
    assert_eq!(out.alpha(2, 0), Some(128));
    assert_eq!(out.alpha(0, 0), Some(0));
}
