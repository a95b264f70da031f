//! numpaint-session - Session persistence for numpaint worksheets
//!
//! This crate defines the JSON document a painting session is saved
//! as and loads it back losslessly:
//!
//! - **SessionDocument** - versioned envelope: artist, timestamp,
//!   source image data URL, the worksheet, filled regions, theme and
//!   tool options
//! - **Buffer packing** - the RGBA copy and the region map travel as
//!   base64 strings or number arrays, chosen per save
//!   ([`BufferEncoding`]); readers accept both
//!
//! # Examples
//!
//! ```
//! use numpaint_pipeline::process_rgba;
//! use numpaint_session::{BufferEncoding, SessionDocument};
//!
//! let pixels = [120u8, 80, 40, 255].repeat(9);
//! let worksheet = process_rgba(&pixels, 3, 3, 4).unwrap();
//!
//! let document = SessionDocument::new(
//!     "ada",
//!     1_700_000_000_000,
//!     "data:image/png;base64,AAAA",
//!     &worksheet,
//!     BufferEncoding::Base64,
//! );
//! let json = document.to_json().unwrap();
//!
//! let loaded = SessionDocument::from_json(&json).unwrap();
//! assert_eq!(loaded.processed_data.unpack().unwrap(), worksheet);
//! ```

mod codec;
mod document;
mod error;

pub use codec::{BufferEncoding, PackedBytes, PackedIds};
pub use document::{
    ProcessedData, SESSION_VERSION, SessionDocument, Theme, Tool, ToolConfig,
};
pub use error::{SessionError, SessionResult};
