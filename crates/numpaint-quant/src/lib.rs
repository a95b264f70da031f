//! numpaint-quant - Color quantization for the numpaint processor
//!
//! This crate provides the first two pipeline stages:
//!
//! - **K-means clustering** - group pixels into at most K centroids in
//!   RGB space ([`cluster_colors`])
//! - **Palette compaction** - drop unused clusters, assign stable
//!   1-based palette ids, remap assignments ([`compact_palette`])
//!
//! # Examples
//!
//! ```
//! use numpaint_core::Raster;
//! use numpaint_quant::{KMeansOptions, cluster_colors, compact_palette};
//!
//! // A 2x1 image: one red pixel, one blue pixel.
//! let raster = Raster::from_rgba(vec![255, 0, 0, 255, 0, 0, 255, 255], 2, 1).unwrap();
//! let options = KMeansOptions {
//!     max_colors: 2,
//!     seed: Some(7),
//!     ..Default::default()
//! };
//!
//! let clustering = cluster_colors(&raster, &options).unwrap();
//! let compact = compact_palette(clustering).unwrap();
//! assert!(compact.palette.len() <= 2);
//! assert_eq!(compact.assignments.len(), 2);
//! ```

mod compact;
mod error;
mod kmeans;

pub use compact::{CompactPalette, compact_palette};
pub use error::{QuantError, QuantResult};
pub use kmeans::{Clustering, KMeansOptions, cluster_colors};
