//! The image-to-worksheet processor
//!
//! A pure function over an RGBA raster: quantize the colors, extract
//! 4-connected regions, merge undersized regions, compute borders and
//! label anchors, and assemble the worksheet. Stages run strictly in
//! order within one call; nothing escapes until the whole structure is
//! built, and a cancelled run emits nothing at all.
//!
//! The processor holds no global state. Every scratch buffer lives for
//! one call and is sized up front, proportional to `width * height` or
//! to the cluster count.

use crate::error::ProcessResult;
use numpaint_core::{CancelToken, Error, PaletteColor, Raster};
use numpaint_quant::{KMeansOptions, cluster_colors, compact_palette};
use numpaint_region::{
    Region, RegionMap, dynamic_min_size, extract_regions, finalize_regions, merge_small_regions,
};
use tracing::debug;

/// Options for one processing run.
#[derive(Debug, Clone)]
pub struct ProcessOptions {
    /// Palette size ceiling (at least 2); the worksheet may use fewer
    pub max_colors: u32,
    /// K-means pass limit
    pub kmeans_max_iterations: u32,
    /// Seed for reproducible runs; `None` for a random palette
    pub seed: Option<u64>,
    /// Minimum surviving region size; `None` applies
    /// [`dynamic_min_size`] for the input's pixel count
    pub min_region_size: Option<u32>,
    /// Cooperative cancellation shared with the host
    pub cancel: Option<CancelToken>,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            max_colors: 48,
            kmeans_max_iterations: 10,
            seed: None,
            min_region_size: None,
            cancel: None,
        }
    }
}

impl ProcessOptions {
    /// Options for a target palette size, defaults otherwise.
    pub fn with_colors(max_colors: u32) -> Self {
        Self {
            max_colors,
            ..Default::default()
        }
    }
}

/// A finished color-by-numbers worksheet.
///
/// Immutable after emission: painters keep their own filled-region set
/// keyed by region id and resolve clicks through
/// [`RegionMap::region_at`].
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedImage {
    /// Input width in pixels
    pub original_width: u32,
    /// Input height in pixels
    pub original_height: u32,
    /// Paintable regions; `regions[i].id == i`
    pub regions: Vec<Region>,
    /// Palette ordered by id (`1..=len`)
    pub palette: Vec<PaletteColor>,
    /// Verbatim copy of the input RGBA bytes ("show original" overlays)
    pub pixel_data: Vec<u8>,
    /// Dense pixel-to-region lookup
    pub region_map: RegionMap,
}

/// Process an RGBA raster into a color-by-numbers worksheet.
///
/// # Errors
///
/// - [`Error::InvalidMaxColors`] if `options.max_colors < 2`.
/// - [`Error::AllocationFailed`] if a scratch buffer cannot be reserved.
/// - [`Error::Cancelled`] if `options.cancel` fires; no partial result
///   is emitted.
pub fn process(raster: &Raster, options: &ProcessOptions) -> ProcessResult<ProcessedImage> {
    let width = raster.width();
    let height = raster.height();
    let pixel_count = raster.pixel_count();

    let kmeans = KMeansOptions {
        max_colors: options.max_colors,
        max_iterations: options.kmeans_max_iterations,
        seed: options.seed,
        cancel: options.cancel.clone(),
    };
    let clustering = cluster_colors(raster, &kmeans)?;
    let compact = compact_palette(clustering)?;
    debug!(
        clusters = options.max_colors,
        palette = compact.palette.len(),
        "palette quantized"
    );

    check_cancel(options)?;
    let (mut regions, mut map) = extract_regions(&compact.assignments, width, height)?;
    debug!(regions = regions.len(), "regions extracted");

    check_cancel(options)?;
    let min_size = options
        .min_region_size
        .unwrap_or_else(|| dynamic_min_size(pixel_count));
    let stats = merge_small_regions(&mut regions, &mut map, &compact.palette, min_size)?;
    debug!(
        min_size,
        absorbed = stats.absorbed,
        kept_isolated = stats.kept_isolated,
        surviving = regions.len(),
        "small regions merged"
    );

    check_cancel(options)?;
    finalize_regions(&mut regions, &map);

    let mut palette = compact.palette;
    for region in &regions {
        palette[region.color_id as usize].count += region.len() as u64;
    }

    Ok(ProcessedImage {
        original_width: width,
        original_height: height,
        regions,
        palette,
        pixel_data: raster.data().to_vec(),
        region_map: map,
    })
}

/// Convenience wrapper over [`process`]: validates the buffer and runs
/// with default options at the given palette size.
///
/// # Errors
///
/// As [`process`], plus [`Error::InvalidDimensions`] /
/// [`Error::BufferSizeMismatch`] for a malformed buffer.
pub fn process_rgba(
    pixels: &[u8],
    width: u32,
    height: u32,
    max_colors: u32,
) -> ProcessResult<ProcessedImage> {
    let raster = Raster::from_rgba(pixels.to_vec(), width, height).map_err(Error::from)?;
    process(&raster, &ProcessOptions::with_colors(max_colors))
}

fn check_cancel(options: &ProcessOptions) -> Result<(), Error> {
    match &options.cancel {
        Some(token) => token.check(),
        None => Ok(()),
    }
}
