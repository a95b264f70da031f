//! Structural invariant checks for processed worksheets
//!
//! Every end-to-end test runs [`check_processed`] on its output: the
//! checks cover the partition (every pixel in exactly one region, the
//! map agreeing with the pixel lists), region connectivity, anchor
//! placement, the border-pixel definition, palette id/count/display
//! consistency, and bounds containment.

use numpaint_core::Rgb;
use numpaint_pipeline::ProcessedImage;
use numpaint_region::Region;

/// Check all structural invariants, returning a list of violations
/// (empty when the worksheet is well-formed).
pub fn check_processed(image: &ProcessedImage) -> Vec<String> {
    let mut violations = Vec::new();
    let width = image.original_width;
    let height = image.original_height;
    let total = (width as usize) * (height as usize);

    if image.region_map.len() != total {
        violations.push(format!(
            "region map has {} entries for {} pixels",
            image.region_map.len(),
            total
        ));
        return violations;
    }
    if image.pixel_data.len() != total * 4 {
        violations.push(format!(
            "pixel data has {} bytes for {} pixels",
            image.pixel_data.len(),
            total
        ));
    }

    // Partition: every pixel covered exactly once, map and lists agree.
    let mut coverage = vec![0u32; total];
    for (index, region) in image.regions.iter().enumerate() {
        if region.id != index as u32 {
            violations.push(format!(
                "region at index {} carries id {}",
                index, region.id
            ));
        }
        if region.pixels.is_empty() {
            violations.push(format!("region {} has no pixels", region.id));
        }
        for &pixel in &region.pixels {
            let p = pixel as usize;
            if p >= total {
                violations.push(format!("region {} pixel {} out of range", region.id, pixel));
                continue;
            }
            coverage[p] += 1;
            if image.region_map.get(p) != region.id {
                violations.push(format!(
                    "map[{}] = {} but pixel belongs to region {}",
                    p,
                    image.region_map.get(p),
                    region.id
                ));
            }
        }
    }
    for (p, &count) in coverage.iter().enumerate() {
        if count != 1 {
            violations.push(format!("pixel {} covered {} times", p, count));
        }
    }

    for region in &image.regions {
        check_region(image, region, &mut violations);
    }

    check_palette(image, &mut violations);
    violations
}

/// Panic with a readable report if any invariant is violated.
pub fn assert_processed(image: &ProcessedImage) {
    let violations = check_processed(image);
    assert!(
        violations.is_empty(),
        "worksheet invariant violations:\n  {}",
        violations.join("\n  ")
    );
}

fn check_region(image: &ProcessedImage, region: &Region, violations: &mut Vec<String>) {
    let width = image.original_width;
    let height = image.original_height;

    // Connectivity: a 4-connected walk from the first pixel must reach
    // every member.
    if !region.pixels.is_empty() {
        let reached = connected_count(region, width, height, &image.region_map);
        if reached != region.pixels.len() {
            violations.push(format!(
                "region {} is disconnected: walked {} of {} pixels",
                region.id,
                reached,
                region.pixels.len()
            ));
        }
    }

    // Anchor inside the region.
    if image.region_map.region_at(region.centroid.x, region.centroid.y) != Some(region.id) {
        violations.push(format!(
            "region {} anchor ({}, {}) is outside the region",
            region.id, region.centroid.x, region.centroid.y
        ));
    }

    // Border definition: exactly the members with an exposed 4-neighbor.
    let mut expected = Vec::new();
    for &pixel in &region.pixels {
        let x = pixel % width;
        let y = pixel / width;
        let exposed = (x == 0 || image.region_map.get(pixel as usize - 1) != region.id)
            || (x + 1 >= width || image.region_map.get(pixel as usize + 1) != region.id)
            || (y == 0 || image.region_map.get(pixel as usize - width as usize) != region.id)
            || (y + 1 >= height
                || image.region_map.get(pixel as usize + width as usize) != region.id);
        if exposed {
            expected.push(pixel);
        }
    }
    expected.sort_unstable();
    let mut actual = region.border_pixels.clone();
    actual.sort_unstable();
    if expected != actual {
        violations.push(format!(
            "region {} border set mismatch: expected {} pixels, got {}",
            region.id,
            expected.len(),
            actual.len()
        ));
    }

    // Bounds containment.
    for &pixel in &region.pixels {
        let x = pixel % width;
        let y = pixel / width;
        if !region.bounds.contains(x, y) {
            violations.push(format!(
                "region {} pixel ({}, {}) outside bounds {:?}",
                region.id, x, y, region.bounds
            ));
            break;
        }
    }
}

fn check_palette(image: &ProcessedImage, violations: &mut Vec<String>) {
    for (index, entry) in image.palette.iter().enumerate() {
        if entry.id != index as u32 + 1 {
            violations.push(format!(
                "palette entry at index {} carries id {}",
                index, entry.id
            ));
        }
        if Rgb::from_hex(&entry.hex) != Some(entry.rgb) {
            violations.push(format!(
                "palette {} hex '{}' does not parse back to {:?}",
                entry.id, entry.hex, entry.rgb
            ));
        }
        let expect_black = entry.rgb.yiq_luminance() >= 128;
        let is_black = entry.text_color == numpaint_core::TextColor::Black;
        if expect_black != is_black {
            violations.push(format!(
                "palette {} text color disagrees with YIQ luminance {}",
                entry.id,
                entry.rgb.yiq_luminance()
            ));
        }
    }

    // Counts: sum of region sizes per color.
    let mut counts = vec![0u64; image.palette.len()];
    for region in &image.regions {
        let color = region.color_id as usize;
        if color >= counts.len() {
            violations.push(format!(
                "region {} color id {} has no palette entry",
                region.id, region.color_id
            ));
            continue;
        }
        counts[color] += region.pixels.len() as u64;
    }
    for (index, (&computed, entry)) in counts.iter().zip(&image.palette).enumerate() {
        if computed != entry.count {
            violations.push(format!(
                "palette {} count {} but regions sum to {}",
                index + 1,
                entry.count,
                computed
            ));
        }
    }
}

/// Number of member pixels reachable from the region's first pixel by a
/// 4-connected walk through the map.
fn connected_count(
    region: &Region,
    width: u32,
    height: u32,
    map: &numpaint_region::RegionMap,
) -> usize {
    use std::collections::HashSet;

    let mut seen: HashSet<u32> = HashSet::with_capacity(region.pixels.len());
    let mut stack = vec![region.pixels[0]];
    seen.insert(region.pixels[0]);

    while let Some(pixel) = stack.pop() {
        let x = pixel % width;
        let y = pixel / width;
        let mut push = |neighbor: u32, seen: &mut HashSet<u32>, stack: &mut Vec<u32>| {
            if map.get(neighbor as usize) == region.id && seen.insert(neighbor) {
                stack.push(neighbor);
            }
        };
        if x > 0 {
            push(pixel - 1, &mut seen, &mut stack);
        }
        if x + 1 < width {
            push(pixel + 1, &mut seen, &mut stack);
        }
        if y > 0 {
            push(pixel - width, &mut seen, &mut stack);
        }
        if y + 1 < height {
            push(pixel + width, &mut seen, &mut stack);
        }
    }

    seen.len()
}
