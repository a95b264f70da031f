//! Region finalization
//!
//! Fills in the per-region metadata the painter needs: the border pixel
//! set (members with a 4-neighbor outside the region, where the image
//! edge counts as outside) and the label anchor. The anchor starts as the rounded
//! arithmetic mean of the member coordinates; for concave or
//! ring-shaped regions that point can land outside the region, in which
//! case it is pulled to the nearest member pixel. Large regions sample
//! roughly every 1% of members during that search, trading exactness
//! for a bounded cost; the anchor is a member pixel either way.

use crate::region::{Region, RegionMap};
use numpaint_core::Point;

/// Compute border pixels and label anchors for every region.
///
/// Expects renumbered regions whose ids match the map (the merger's
/// output).
pub fn finalize_regions(regions: &mut [Region], map: &RegionMap) {
    for region in regions.iter_mut() {
        region.border_pixels = border_pixels(region, map);
        region.centroid = label_anchor(region, map);
    }
}

/// Members of `region` with at least one 4-neighbor that is out of
/// bounds or belongs to a different region.
fn border_pixels(region: &Region, map: &RegionMap) -> Vec<u32> {
    let width = map.width();
    let height = map.height();
    let mut borders = Vec::new();

    for &pixel in &region.pixels {
        let x = pixel % width;
        let y = pixel / width;

        let exposed = (x == 0 || map.get(pixel as usize - 1) != region.id)
            || (x + 1 >= width || map.get(pixel as usize + 1) != region.id)
            || (y == 0 || map.get(pixel as usize - width as usize) != region.id)
            || (y + 1 >= height || map.get(pixel as usize + width as usize) != region.id);
        if exposed {
            borders.push(pixel);
        }
    }

    borders
}

/// The label anchor: the rounded coordinate mean, pulled onto the
/// nearest member pixel when the mean falls outside the region.
fn label_anchor(region: &Region, map: &RegionMap) -> Point {
    debug_assert!(!region.pixels.is_empty());

    let width = map.width();
    let mut sum_x = 0u64;
    let mut sum_y = 0u64;
    for &pixel in &region.pixels {
        sum_x += u64::from(pixel % width);
        sum_y += u64::from(pixel / width);
    }
    let n = region.pixels.len() as u64;
    let mean = Point::new(
        ((sum_x + n / 2) / n) as u32,
        ((sum_y + n / 2) / n) as u32,
    );

    if map.region_at(mean.x, mean.y) == Some(region.id) {
        return mean;
    }
    nearest_member(region, width, mean)
}

/// Member pixel closest (squared distance) to `target`, sampling every
/// `max(1, size / 100)`-th member for large regions.
fn nearest_member(region: &Region, width: u32, target: Point) -> Point {
    let step = (region.pixels.len() / 100).max(1);
    let mut best = Point::new(region.pixels[0] % width, region.pixels[0] / width);
    let mut best_dist = u64::MAX;

    for &pixel in region.pixels.iter().step_by(step) {
        let point = Point::new(pixel % width, pixel / width);
        let dist = point.distance_squared(target);
        if dist < best_dist {
            best_dist = dist;
            best = point;
        }
    }
    best
}
