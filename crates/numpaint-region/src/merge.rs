//! Small-region merging
//!
//! Quantization leaves a confetti of tiny slivers that would make the
//! worksheet unpaintable, so regions below a size threshold are absorbed
//! into their most color-similar active neighbor. Candidates are
//! processed smallest first; pixels an earlier merge moved into a
//! partner count for later neighbor searches, which lets chains of tiny
//! adjacent regions cascade into one paintable region.
//!
//! Similarity is squared RGB distance between the regions' palette
//! colors, not shared border length. A candidate with no active
//! neighbor is kept as-is.
//!
//! After the pass, surviving regions are renumbered densely (scan order
//! preserved) and the map is rewritten so that a region's id equals its
//! index in the region list.

use crate::error::{RegionError, RegionResult};
use crate::region::{Region, RegionMap};
use numpaint_core::PaletteColor;

/// Minimum surviving region size for an image of `pixel_count` pixels.
///
/// 20 for small images, scaling up for high-resolution inputs
/// (`pixel_count / 40000`) so large worksheets keep meaningful regions.
pub fn dynamic_min_size(pixel_count: usize) -> u32 {
    (pixel_count / 40_000).max(20) as u32
}

/// Outcome counters for one merge pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Regions absorbed into a neighbor
    pub absorbed: usize,
    /// Undersized regions kept because no active neighbor existed
    pub kept_isolated: usize,
}

/// Merge regions smaller than `min_size` into their nearest-color
/// active neighbor, then renumber the survivors densely.
///
/// `regions` must be the extractor's output (ids equal to indices);
/// on return that property is restored for the surviving set and the
/// map contains surviving ids only.
///
/// # Errors
///
/// Returns [`RegionError::ColorIdOutOfRange`] if a region's color does
/// not index into `palette`.
pub fn merge_small_regions(
    regions: &mut Vec<Region>,
    map: &mut RegionMap,
    palette: &[PaletteColor],
    min_size: u32,
) -> RegionResult<MergeStats> {
    for region in regions.iter() {
        if region.color_id as usize >= palette.len() {
            return Err(RegionError::ColorIdOutOfRange {
                color_id: region.color_id,
                palette_len: palette.len(),
            });
        }
    }

    let width = map.width();
    let height = map.height();
    let mut active = vec![true; regions.len()];
    let mut stats = MergeStats::default();

    // Snapshot of the undersized regions, smallest first. A candidate
    // absorbed before its turn is skipped; one grown past the threshold
    // by an earlier cascade is still processed at its snapshot position.
    let mut candidates: Vec<u32> = regions
        .iter()
        .filter(|region| (region.len() as u64) < u64::from(min_size))
        .map(|region| region.id)
        .collect();
    candidates.sort_by_key(|&id| regions[id as usize].len());

    let mut neighbor_ids: Vec<u32> = Vec::new();

    for &candidate_id in &candidates {
        if !active[candidate_id as usize] {
            continue;
        }

        // Distinct active neighbors across the candidate's 4-boundaries.
        neighbor_ids.clear();
        for &pixel in &regions[candidate_id as usize].pixels {
            let x = pixel % width;
            let y = pixel / width;
            if x > 0 {
                neighbor_ids.push(map.get(pixel as usize - 1));
            }
            if x + 1 < width {
                neighbor_ids.push(map.get(pixel as usize + 1));
            }
            if y > 0 {
                neighbor_ids.push(map.get(pixel as usize - width as usize));
            }
            if y + 1 < height {
                neighbor_ids.push(map.get(pixel as usize + width as usize));
            }
        }
        neighbor_ids.sort_unstable();
        neighbor_ids.dedup();
        neighbor_ids.retain(|&id| id != candidate_id && active[id as usize]);

        if neighbor_ids.is_empty() {
            stats.kept_isolated += 1;
            continue;
        }

        // Nearest palette color wins; the ascending sort above breaks
        // ties toward the lowest neighbor id.
        let candidate_rgb = palette[regions[candidate_id as usize].color_id as usize].rgb;
        let mut winner = neighbor_ids[0];
        let mut best = u32::MAX;
        for &neighbor in &neighbor_ids {
            let neighbor_rgb = palette[regions[neighbor as usize].color_id as usize].rgb;
            let dist = candidate_rgb.distance_squared(neighbor_rgb);
            if dist < best {
                best = dist;
                winner = neighbor;
            }
        }

        // Absorb: pixels move to the winner and take its color.
        let absorbed_pixels = std::mem::take(&mut regions[candidate_id as usize].pixels);
        for &pixel in &absorbed_pixels {
            map.set(pixel as usize, winner);
        }
        let absorbed_bounds = regions[candidate_id as usize].bounds;
        let winner_region = &mut regions[winner as usize];
        winner_region.pixels.extend(absorbed_pixels);
        winner_region.bounds = winner_region.bounds.union(absorbed_bounds);
        active[candidate_id as usize] = false;
        stats.absorbed += 1;
    }

    renumber(regions, map, &active);
    Ok(stats)
}

/// Drop absorbed regions and renumber the survivors densely, rewriting
/// the map through the old-id to new-id table.
fn renumber(regions: &mut Vec<Region>, map: &mut RegionMap, active: &[bool]) {
    let mut id_remap = vec![u32::MAX; regions.len()];
    let mut survivors = Vec::with_capacity(regions.len());

    for mut region in regions.drain(..) {
        if !active[region.id as usize] {
            continue;
        }
        let new_id = survivors.len() as u32;
        id_remap[region.id as usize] = new_id;
        region.id = new_id;
        survivors.push(region);
    }

    for entry in map.data_mut() {
        *entry = id_remap[*entry as usize];
    }
    *regions = survivors;
}
