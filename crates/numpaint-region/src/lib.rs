//! numpaint-region - Region processing for the numpaint processor
//!
//! This crate provides the middle stages of the worksheet pipeline:
//!
//! - **Region extraction** - 4-connected flood-fill labeling of the
//!   quantized assignment ([`extract_regions`])
//! - **Small-region merging** - absorb undersized regions into their
//!   most color-similar neighbor ([`merge_small_regions`],
//!   [`dynamic_min_size`])
//! - **Finalization** - border pixels and inside-region label anchors
//!   ([`finalize_regions`])
//!
//! plus the [`Region`] and [`RegionMap`] types the output is built from.
//!
//! # Examples
//!
//! ```
//! use numpaint_region::{extract_regions, finalize_regions};
//!
//! // Two 2x1 bands of different colors.
//! let assignments = vec![0u32, 0, 1, 1];
//! let (mut regions, map) = extract_regions(&assignments, 2, 2).unwrap();
//! finalize_regions(&mut regions, &map);
//!
//! assert_eq!(regions.len(), 2);
//! assert_eq!(map.region_at(0, 0), Some(0));
//! assert_eq!(map.region_at(1, 1), Some(1));
//! ```

mod error;
mod extract;
mod finalize;
mod merge;
mod region;

pub use error::{RegionError, RegionResult};
pub use extract::extract_regions;
pub use finalize::finalize_regions;
pub use merge::{MergeStats, dynamic_min_size, merge_small_regions};
pub use region::{Region, RegionMap};
