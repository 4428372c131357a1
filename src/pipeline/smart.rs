use kmeans_colors::{get_kmeans_hamerly, Kmeans};
use palette::Srgb;
use rand::Rng;

use crate::color::{hsv_to_rgb, rgb_to_hsv, Color, HsvColor};
use crate::color_map::ColorMap;
use crate::random::random_color;
use crate::scheme::{generate_scheme_palette, Scheme};

pub const DEFAULT_CLUSTERS: usize = 8;
/// Cluster labels are stored as `u8` by the k-means backend.
pub const MAX_CLUSTERS: usize = 256;

const MAX_ITER: usize = 300;
const CONVERGE: f32 = 1e-4;
const RUNS: usize = 10;

/// Where the smart builder takes its per-cluster target hues from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Targets {
    /// Hues generated from a base color and a scheme.
    Scheme { base: Color, scheme: Scheme },
    /// One uniformly random color per cluster.
    Random,
}

/// Build a color map by clustering `colors` in HSV space and giving every
/// member of a cluster the hue of that cluster's target color.
///
/// Each member keeps its own saturation and value, so shading survives.
/// `n_clusters` is reduced to the number of colors when there are fewer.
pub fn build_smart_map(
    colors: &[Color],
    targets: Targets,
    n_clusters: usize,
    rng: &mut impl Rng,
) -> ColorMap {
    if colors.is_empty() {
        return ColorMap::new();
    }
    let k = n_clusters.clamp(1, MAX_CLUSTERS).min(colors.len());
    let hsv: Vec<HsvColor> = colors.iter().map(|&c| rgb_to_hsv(c)).collect();
    let labels = cluster_hsv(&hsv, k, rng);

    let palette = match targets {
        Targets::Scheme { base, scheme } => generate_scheme_palette(base, k, scheme),
        Targets::Random => (0..k).map(|_| random_color(rng)).collect(),
    };
    let target_hues: Vec<f64> = palette.iter().map(|&c| rgb_to_hsv(c).h).collect();

    let mut sizes = vec![0usize; k];
    for &label in &labels {
        sizes[label as usize] += 1;
    }
    let empty = sizes.iter().filter(|&&n| n == 0).count();
    if empty > 0 {
        log::debug!("{empty} of {k} clusters came back empty");
    }
    log::debug!("clustered {} colors into {k} groups: {sizes:?}", colors.len());

    colors
        .iter()
        .zip(&hsv)
        .zip(&labels)
        .map(|((&original, member), &label)| {
            let replacement = hsv_to_rgb(HsvColor {
                h: target_hues[label as usize],
                s: member.s,
                v: member.v,
            });
            (original, replacement)
        })
        .collect()
}

/// Hard-assign every HSV point to one of `k` clusters.
///
/// Runs k-means (Hamerly, k-means++ init) several times with seeds drawn
/// from `rng` and keeps the lowest-score run. The HSV channels are fed to
/// the backend through an `Srgb<f32>` carrier: it only ever computes squared
/// Euclidean distances and means over the three channels.
pub fn cluster_hsv(points: &[HsvColor], k: usize, rng: &mut impl Rng) -> Vec<u8> {
    let k = k.min(points.len()).min(MAX_CLUSTERS);
    if k <= 1 {
        return vec![0; points.len()];
    }
    let buf: Vec<Srgb<f32>> = points
        .iter()
        .map(|p| Srgb::new(p.h as f32, p.s as f32, p.v as f32))
        .collect();

    let mut best: Option<Kmeans<Srgb<f32>>> = None;
    for _ in 0..RUNS {
        let run = get_kmeans_hamerly(k, MAX_ITER, CONVERGE, false, &buf, rng.gen());
        if best.as_ref().map_or(true, |b| run.score < b.score) {
            best = Some(run);
        }
    }
    best.map(|b| b.indices).unwrap_or_else(|| vec![0; points.len()])
}
