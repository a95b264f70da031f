//! Connected-region extraction
//!
//! Labels the remapped palette assignment into maximal 4-connected
//! regions of equal color. The scan is row-major; each unvisited pixel
//! seeds an iterative flood fill over same-color neighbors (up, down,
//! left, right; diagonal neighbors never join, even when their color
//! matches). Recursion is forbidden here: a uniform multi-megapixel
//! image would blow the call stack, so the fill runs on one
//! preallocated `Vec` stack of `width * height` capacity plus a visited
//! bitmap.

use crate::error::{RegionError, RegionResult};
use crate::region::{Region, RegionMap};
use numpaint_core::{Error, Point, Rect, alloc};

/// Extract 4-connected regions from a per-pixel palette assignment.
///
/// Region ids are dense, assigned in scan order starting at 0. The
/// returned regions carry pixels, color and bounds; centroids and
/// borders are left for the finalizer.
///
/// # Errors
///
/// - [`Error::InvalidDimensions`] if `width` or `height` is zero.
/// - [`RegionError::AssignmentSizeMismatch`] if
///   `assignments.len() != width * height`.
/// - [`Error::AllocationFailed`] if a scratch buffer cannot be reserved.
pub fn extract_regions(
    assignments: &[u32],
    width: u32,
    height: u32,
) -> RegionResult<(Vec<Region>, RegionMap)> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimensions { width, height }.into());
    }
    let total = (width as usize) * (height as usize);
    // Pixel indices travel as u32 throughout the output model.
    if total > u32::MAX as usize {
        return Err(Error::InvalidDimensions { width, height }.into());
    }
    if assignments.len() != total {
        return Err(RegionError::AssignmentSizeMismatch {
            expected: total,
            actual: assignments.len(),
        });
    }

    let mut map = RegionMap::new(width, height)?;
    let mut visited = alloc::filled_vec(false, total)?;
    let mut stack = alloc::vec_with_capacity::<u32>(total)?;
    let mut regions: Vec<Region> = Vec::new();

    for start in 0..total as u32 {
        if visited[start as usize] {
            continue;
        }

        let id = regions.len() as u32;
        let color_id = assignments[start as usize];
        let mut pixels = Vec::new();
        let mut bounds = Rect::from_pixel(start % width, start / width);

        visited[start as usize] = true;
        stack.push(start);

        while let Some(index) = stack.pop() {
            pixels.push(index);
            map.set(index as usize, id);

            let x = index % width;
            let y = index / width;
            bounds.include(x, y);

            if x > 0 {
                let neighbor = index - 1;
                if !visited[neighbor as usize] && assignments[neighbor as usize] == color_id {
                    visited[neighbor as usize] = true;
                    stack.push(neighbor);
                }
            }
            if x + 1 < width {
                let neighbor = index + 1;
                if !visited[neighbor as usize] && assignments[neighbor as usize] == color_id {
                    visited[neighbor as usize] = true;
                    stack.push(neighbor);
                }
            }
            if y > 0 {
                let neighbor = index - width;
                if !visited[neighbor as usize] && assignments[neighbor as usize] == color_id {
                    visited[neighbor as usize] = true;
                    stack.push(neighbor);
                }
            }
            if y + 1 < height {
                let neighbor = index + width;
                if !visited[neighbor as usize] && assignments[neighbor as usize] == color_id {
                    visited[neighbor as usize] = true;
                    stack.push(neighbor);
                }
            }
        }

        regions.push(Region {
            id,
            color_id,
            pixels,
            centroid: Point::default(),
            border_pixels: Vec::new(),
            bounds,
        });
    }

    Ok((regions, map))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_image_is_one_region() {
        let assignments = vec![0u32; 12];
        let (regions, map) = extract_regions(&assignments, 4, 3).unwrap();

        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].id, 0);
        assert_eq!(regions[0].color_id, 0);
        assert_eq!(regions[0].len(), 12);
        assert_eq!(regions[0].bounds, Rect { x: 0, y: 0, w: 4, h: 3 });
        assert!(map.data().iter().all(|&id| id == 0));
    }

    #[test]
    fn test_two_horizontal_bands() {
        // Top row color 0, bottom row color 1.
        let assignments = vec![0, 0, 0, 1, 1, 1];
        let (regions, map) = extract_regions(&assignments, 3, 2).unwrap();

        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].color_id, 0);
        assert_eq!(regions[1].color_id, 1);
        assert_eq!(map.data(), &[0, 0, 0, 1, 1, 1]);
    }

    #[test]
    fn test_diagonal_same_color_stays_separate() {
        // Color 1 at (0,0) and (1,1): diagonal contact only. The color-0
        // pixels at (1,0) and (0,1) are diagonal too, so every pixel is
        // its own region.
        let assignments = vec![1, 0, 0, 1];
        let (regions, _) = extract_regions(&assignments, 2, 2).unwrap();

        assert_eq!(regions.len(), 4);
        assert!(regions.iter().all(|r| r.len() == 1));
        let ones = regions.iter().filter(|r| r.color_id == 1).count();
        assert_eq!(ones, 2);
    }

    #[test]
    fn test_concave_region_single_fill() {
        // A 3x3 ring of color 0 around a center of color 1.
        let assignments = vec![0, 0, 0, 0, 1, 0, 0, 0, 0];
        let (regions, map) = extract_regions(&assignments, 3, 3).unwrap();

        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].len(), 8);
        assert_eq!(regions[1].len(), 1);
        assert_eq!(regions[1].pixels, vec![4]);
        assert_eq!(map.get(4), 1);
        // Ring bounds span the full square; center bounds are 1x1.
        assert_eq!(regions[0].bounds, Rect { x: 0, y: 0, w: 3, h: 3 });
        assert_eq!(regions[1].bounds, Rect { x: 1, y: 1, w: 1, h: 1 });
    }

    #[test]
    fn test_single_row_degenerates_to_runs() {
        let assignments = vec![0, 0, 1, 1, 1, 0];
        let (regions, map) = extract_regions(&assignments, 6, 1).unwrap();

        assert_eq!(regions.len(), 3);
        assert_eq!(regions[0].len(), 2);
        assert_eq!(regions[1].len(), 3);
        assert_eq!(regions[2].len(), 1);
        assert_eq!(map.data(), &[0, 0, 1, 1, 1, 2]);
    }

    #[test]
    fn test_every_pixel_labeled_exactly_once() {
        // Checkerboard: every pixel its own region.
        let mut assignments = Vec::with_capacity(16);
        for y in 0..4u32 {
            for x in 0..4u32 {
                assignments.push((x + y) % 2);
            }
        }
        let (regions, map) = extract_regions(&assignments, 4, 4).unwrap();

        assert_eq!(regions.len(), 16);
        let total: usize = regions.iter().map(Region::len).sum();
        assert_eq!(total, 16);
        for region in &regions {
            for &pixel in &region.pixels {
                assert_eq!(map.get(pixel as usize), region.id);
            }
        }
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(matches!(
            extract_regions(&[], 0, 4),
            Err(RegionError::Core(Error::InvalidDimensions { .. }))
        ));
        assert!(matches!(
            extract_regions(&[0, 0, 0], 2, 2),
            Err(RegionError::AssignmentSizeMismatch {
                expected: 4,
                actual: 3
            })
        ));
    }
}
