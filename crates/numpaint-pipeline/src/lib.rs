//! numpaint-pipeline - The end-to-end worksheet processor
//!
//! Runs the whole image-to-worksheet pipeline in one synchronous call:
//!
//! 1. K-means color quantization (numpaint-quant)
//! 2. Palette compaction (numpaint-quant)
//! 3. 4-connected region extraction (numpaint-region)
//! 4. Small-region merging (numpaint-region)
//! 5. Borders and label anchors (numpaint-region)
//! 6. Worksheet assembly and palette pixel counts
//!
//! Hosts that need a responsive UI run [`process`] on a worker thread
//! and cancel it through [`numpaint_core::CancelToken`].
//!
//! # Examples
//!
//! ```
//! use numpaint_pipeline::{ProcessOptions, process_rgba};
//!
//! // A 2x2 image, all one color.
//! let pixels = [10u8, 200, 30, 255].repeat(4);
//! let worksheet = process_rgba(&pixels, 2, 2, 8).unwrap();
//!
//! assert_eq!(worksheet.palette.len(), 1);
//! assert_eq!(worksheet.regions.len(), 1);
//! assert_eq!(worksheet.region_map.region_at(1, 1), Some(0));
//! ```

mod error;
mod processor;

pub use error::{ProcessError, ProcessResult};
pub use processor::{ProcessOptions, ProcessedImage, process, process_rgba};
