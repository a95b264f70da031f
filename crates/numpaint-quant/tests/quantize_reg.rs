//! Color quantization regression test
//!
//! Exercises k-means clustering and palette compaction over synthetic
//! images: uniform fields, two-tone splits, gradients, and sparse
//! cluster use.

use numpaint_core::{Raster, Rgb};
use numpaint_quant::{KMeansOptions, cluster_colors, compact_palette};
use numpaint_test::{RegParams, rgba_from_rgb};

fn options(max_colors: u32, seed: u64) -> KMeansOptions {
    KMeansOptions {
        max_colors,
        seed: Some(seed),
        ..Default::default()
    }
}

fn gradient_raster(width: u32, height: u32) -> Raster {
    let mut pixels = Vec::with_capacity((width * height) as usize);
    for _ in 0..height {
        for x in 0..width {
            let value = ((x * 255) / (width - 1)) as u8;
            pixels.push((value, value, value));
        }
    }
    Raster::from_rgba(rgba_from_rgb(&pixels), width, height).unwrap()
}

#[test]
fn quantize_reg() {
    let mut rp = RegParams::new("quantize");

    // Uniform image: every cluster centroid equals the single color and
    // compaction leaves exactly one palette entry.
    let uniform = Raster::from_rgba(rgba_from_rgb(&[(128, 64, 32); 36]), 6, 6).unwrap();
    let clustering = cluster_colors(&uniform, &options(8, 11)).unwrap();
    rp.compare_values(8.0, clustering.centroids.len() as f64, 0.0);
    rp.compare_values(36.0, clustering.assignments.len() as f64, 0.0);
    let compact = compact_palette(clustering).unwrap();
    rp.compare_values(1.0, compact.palette.len() as f64, 0.0);
    rp.check(
        compact.palette[0].rgb == Rgb::new(128, 64, 32),
        "uniform centroid matches the input color",
    );
    rp.check(
        compact.assignments.iter().all(|&a| a == 0),
        "uniform assignments all land on the sole entry",
    );

    // Two well-separated tones split into two exact clusters.
    let mut pixels = vec![(255u8, 0u8, 0u8); 32];
    pixels.extend(vec![(0, 0, 255); 32]);
    let two_tone = Raster::from_rgba(rgba_from_rgb(&pixels), 8, 8).unwrap();
    for seed in [1u64, 2, 3] {
        let compact = compact_palette(cluster_colors(&two_tone, &options(2, seed)).unwrap()).unwrap();
        rp.compare_values(2.0, compact.palette.len() as f64, 0.0);
        let reds: Vec<Rgb> = compact.palette.iter().map(|entry| entry.rgb).collect();
        rp.check(
            reds.contains(&Rgb::new(255, 0, 0)) && reds.contains(&Rgb::new(0, 0, 255)),
            "two-tone centroids are exact",
        );
        rp.check(
            compact.assignments[..32]
                .iter()
                .all(|&a| a == compact.assignments[0]),
            "red half is one cluster",
        );
        rp.check(
            compact.assignments[32..]
                .iter()
                .all(|&a| a == compact.assignments[32]),
            "blue half is one cluster",
        );
    }

    // Gray gradient: the palette stays within the requested size, ids
    // are contiguous, and assignments stay in range.
    let gradient = gradient_raster(100, 20);
    let compact = compact_palette(cluster_colors(&gradient, &options(8, 21)).unwrap()).unwrap();
    rp.check(compact.palette.len() >= 4, "gradient keeps several grays");
    rp.check(compact.palette.len() <= 8, "gradient respects the ceiling");
    let ids: Vec<u32> = compact.palette.iter().map(|entry| entry.id).collect();
    let expected: Vec<u32> = (1..=compact.palette.len() as u32).collect();
    rp.compare_ids(&expected, &ids);
    let limit = compact.palette.len() as u32;
    rp.check(
        compact.assignments.iter().all(|&a| a < limit),
        "assignments index the compact palette",
    );
    rp.check(
        compact.palette.iter().all(|entry| entry.count == 0),
        "counts stay zero until the emitter runs",
    );

    // Grays come out distinct: compaction preserves centroid identity.
    let mut lums: Vec<u32> = compact
        .palette
        .iter()
        .map(|entry| entry.rgb.yiq_luminance())
        .collect();
    lums.sort_unstable();
    lums.dedup();
    rp.compare_values(compact.palette.len() as f64, lums.len() as f64, 0.0);

    assert!(rp.cleanup(), "quantize regression test failed");
}
