//! Numpaint - color-by-numbers worksheet generation
//!
//! Numpaint turns a raster image into a paintable worksheet: a palette
//! of quantized colors, a partition of the image into numbered
//! 4-connected regions, and per-region metadata (borders, label
//! anchors, pixel lists) sufficient to render, paint and export it.
//!
//! # Overview
//!
//! - Color quantization (k-means in RGB space) and palette compaction
//! - Connected-region extraction, small-region merging, border and
//!   anchor computation
//! - A dense region map for O(1) click-to-region resolution
//! - A versioned JSON session format for saving and resuming paintings
//!
//! # Example
//!
//! ```
//! use numpaint::process_rgba;
//!
//! // A 3x3 image, all one color.
//! let pixels = [200u8, 40, 40, 255].repeat(9);
//! let worksheet = process_rgba(&pixels, 3, 3, 8).unwrap();
//!
//! assert_eq!(worksheet.palette.len(), 1);
//! assert_eq!(worksheet.regions.len(), 1);
//! assert_eq!(worksheet.region_map.region_at(2, 2), Some(0));
//! ```

// Re-export core types
pub use numpaint_core::*;

// Re-export quantization
pub use numpaint_quant::{
    Clustering, CompactPalette, KMeansOptions, QuantError, QuantResult, cluster_colors,
    compact_palette,
};

// Re-export region processing
pub use numpaint_region::{
    MergeStats, Region, RegionError, RegionMap, RegionResult, dynamic_min_size, extract_regions,
    finalize_regions, merge_small_regions,
};

// Re-export the pipeline
pub use numpaint_pipeline::{
    ProcessError, ProcessOptions, ProcessResult, ProcessedImage, process, process_rgba,
};

// Re-export session persistence
pub use numpaint_session::{
    BufferEncoding, ProcessedData, SESSION_VERSION, SessionDocument, SessionError, SessionResult,
    Theme, Tool, ToolConfig,
};
