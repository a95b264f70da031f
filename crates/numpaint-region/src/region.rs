//! Region and region-map types
//!
//! A region is a set of pixels sharing one palette color, produced by
//! flood-fill extraction and possibly grown by the merger. Pixels are
//! stored as flat indices (`y * width + x`); membership queries go
//! through the dense [`RegionMap`] rather than the pixel list, so the
//! list's ordering is arbitrary (fill order within one run).

use numpaint_core::{Point, Rect, Result as CoreResult, alloc};
use serde::{Deserialize, Serialize};

/// A connected paint-by-number region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    /// Region id; equals this region's index in the emitted region list
    pub id: u32,
    /// 0-based palette index (the printed number is `color_id + 1`)
    pub color_id: u32,
    /// Member pixels as flat indices, fill order
    pub pixels: Vec<u32>,
    /// Label anchor; always a member pixel of this region
    pub centroid: Point,
    /// Members with at least one 4-neighbor outside the region
    pub border_pixels: Vec<u32>,
    /// Bounding box of the member pixels
    pub bounds: Rect,
}

impl Region {
    /// Number of member pixels.
    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Whether the region has no pixels (never true for emitted regions).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }
}

/// Dense pixel-index to region-id lookup.
///
/// One `u32` per pixel; the painter's point-to-region query
/// ([`RegionMap::region_at`]) is a single array read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionMap {
    width: u32,
    height: u32,
    data: Vec<u32>,
}

impl RegionMap {
    /// Marker for pixels not yet claimed by any region. Only present
    /// while extraction is running; emitted maps contain region ids only.
    pub const UNASSIGNED: u32 = u32::MAX;

    /// Create a map with every pixel unassigned.
    ///
    /// # Errors
    ///
    /// Returns [`numpaint_core::Error::AllocationFailed`] if the backing
    /// buffer cannot be reserved.
    pub fn new(width: u32, height: u32) -> CoreResult<Self> {
        let data = alloc::filled_vec(Self::UNASSIGNED, (width as usize) * (height as usize))?;
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Rebuild a map from its parts (used by the session loader).
    ///
    /// # Errors
    ///
    /// Returns [`numpaint_core::Error::BufferSizeMismatch`] if
    /// `data.len() != width * height`.
    pub fn from_parts(width: u32, height: u32, data: Vec<u32>) -> CoreResult<Self> {
        let expected = u64::from(width) * u64::from(height);
        if data.len() as u64 != expected {
            return Err(numpaint_core::Error::BufferSizeMismatch {
                expected,
                actual: data.len() as u64,
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Map width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Map height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of entries (`width * height`).
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the map has no entries (never true for valid dimensions).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Region id at a flat pixel index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[inline]
    pub fn get(&self, index: usize) -> u32 {
        self.data[index]
    }

    /// Store a region id at a flat pixel index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[inline]
    pub fn set(&mut self, index: usize, id: u32) {
        self.data[index] = id;
    }

    /// O(1) point-to-region query in image coordinates.
    ///
    /// Returns `None` if `(x, y)` is out of bounds.
    #[inline]
    pub fn region_at(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[(y as usize) * (self.width as usize) + (x as usize)])
    }

    /// The raw id array, row-major.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.data
    }

    #[inline]
    pub(crate) fn data_mut(&mut self) -> &mut [u32] {
        &mut self.data
    }
}
