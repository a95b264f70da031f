//! numpaint-test - Regression test support for numpaint
//!
//! This crate provides the regression test harness used by the
//! per-crate `tests/*_reg.rs` suites:
//!
//! - **RegParams** - named check sequences with recorded failures and a
//!   `REGTEST_MODE` environment switch
//! - **Invariant checks** - [`check_processed`] / [`assert_processed`]
//!   validate a finished worksheet's structural guarantees
//!
//! # Usage
//!
//! ```ignore
//! use numpaint_test::{RegParams, assert_processed};
//!
//! let mut rp = RegParams::new("process");
//! let worksheet = numpaint_pipeline::process_rgba(&pixels, 10, 10, 8).unwrap();
//! assert_processed(&worksheet);
//! rp.compare_values(1.0, worksheet.palette.len() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod check;
mod params;

pub use check::{assert_processed, check_processed};
pub use params::{RegParams, RegTestMode};

/// Build an RGBA buffer from per-pixel RGB triples (alpha 255).
pub fn rgba_from_rgb(pixels: &[(u8, u8, u8)]) -> Vec<u8> {
    let mut data = Vec::with_capacity(pixels.len() * 4);
    for &(r, g, b) in pixels {
        data.extend_from_slice(&[r, g, b, 255]);
    }
    data
}
