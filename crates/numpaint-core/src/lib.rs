//! numpaint-core - Shared types for the numpaint processor
//!
//! This crate provides the building blocks the pipeline crates share:
//!
//! - **Raster** - validated RGBA input buffer with flat-index access
//! - **Color math** - [`Rgb`] distance/hex/YIQ helpers and [`TextColor`]
//! - **Palette entries** - [`PaletteColor`] worksheet colors
//! - **Geometry** - [`Point`] and [`Rect`] in image coordinates
//! - **Cancellation** - [`CancelToken`] for cooperative host cancellation
//! - **Errors** - the shared [`Error`]/[`Result`] pair
//!
//! # Examples
//!
//! ```
//! use numpaint_core::{Raster, Rgb};
//!
//! let data = vec![255, 0, 0, 255]; // one red pixel
//! let raster = Raster::from_rgba(data, 1, 1).unwrap();
//! assert_eq!(raster.rgb_at(0), Rgb::new(255, 0, 0));
//! ```

pub mod alloc;
mod cancel;
mod color;
mod error;
mod geometry;
mod palette;
mod raster;

pub use cancel::CancelToken;
pub use color::{Rgb, TextColor};
pub use error::{Error, Result};
pub use geometry::{Point, Rect};
pub use palette::PaletteColor;
pub use raster::Raster;
