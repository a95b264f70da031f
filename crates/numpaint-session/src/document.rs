//! The session document
//!
//! Everything a saved painting session needs to resume: the worksheet
//! (regions, palette, map, original pixels), which regions are already
//! filled, the active palette theme, and the painter's tool options.
//! The document is JSON with camelCase keys; the two bulky buffers are
//! packed per [`BufferEncoding`].

use crate::codec::{BufferEncoding, PackedBytes, PackedIds};
use crate::error::{SessionError, SessionResult};
use numpaint_core::PaletteColor;
use numpaint_pipeline::ProcessedImage;
use numpaint_region::{Region, RegionMap};
use serde::{Deserialize, Serialize};

/// Current session format version.
pub const SESSION_VERSION: u32 = 1;

/// Palette theme applied by the painter (re-theming itself happens
/// downstream; only the selection is persisted).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// The quantized palette as processed
    #[default]
    Original,
    /// Warm-shifted palette
    Warm,
    /// Cool-shifted palette
    Cool,
    /// Grayscale palette
    Mono,
}

/// The painter's active tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Paint pixels under the cursor
    #[default]
    Brush,
    /// Fill a whole region per click
    Bucket,
}

/// Painter tool options carried in the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolConfig {
    /// Selected tool
    pub active_tool: Tool,
    /// Brush diameter in screen pixels
    pub brush_size: u32,
    /// Whether completed regions show the original colors
    pub show_completed: bool,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            active_tool: Tool::default(),
            brush_size: 1,
            show_completed: true,
        }
    }
}

/// Wire form of a [`ProcessedImage`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedData {
    /// Input width in pixels
    pub original_width: u32,
    /// Input height in pixels
    pub original_height: u32,
    /// Paintable regions
    pub regions: Vec<Region>,
    /// Palette ordered by id
    pub palette: Vec<PaletteColor>,
    /// Packed RGBA byte copy
    pub pixel_data: PackedBytes,
    /// Packed region map ids
    pub region_map: PackedIds,
}

impl ProcessedData {
    /// Pack a worksheet for persistence.
    pub fn pack(image: &ProcessedImage, encoding: BufferEncoding) -> Self {
        Self {
            original_width: image.original_width,
            original_height: image.original_height,
            regions: image.regions.clone(),
            palette: image.palette.clone(),
            pixel_data: PackedBytes::pack(&image.pixel_data, encoding),
            region_map: PackedIds::pack(image.region_map.data(), encoding),
        }
    }

    /// Rebuild the worksheet from its wire form.
    ///
    /// # Errors
    ///
    /// Returns a decode error for malformed packed buffers, or
    /// [`numpaint_core::Error::BufferSizeMismatch`] if a buffer does not
    /// match the stated dimensions.
    pub fn unpack(&self) -> SessionResult<ProcessedImage> {
        let pixel_data = self.pixel_data.unpack()?;
        let expected = u64::from(self.original_width) * u64::from(self.original_height) * 4;
        if pixel_data.len() as u64 != expected {
            return Err(numpaint_core::Error::BufferSizeMismatch {
                expected,
                actual: pixel_data.len() as u64,
            }
            .into());
        }

        let ids = self.region_map.unpack()?;
        let region_map = RegionMap::from_parts(self.original_width, self.original_height, ids)
            .map_err(SessionError::Core)?;

        Ok(ProcessedImage {
            original_width: self.original_width,
            original_height: self.original_height,
            regions: self.regions.clone(),
            palette: self.palette.clone(),
            pixel_data,
            region_map,
        })
    }
}

/// A saved painting session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDocument {
    /// Format version ([`SESSION_VERSION`])
    pub version: u32,
    /// Display name of the painter
    pub artist_name: String,
    /// Save time, milliseconds since the Unix epoch
    pub timestamp: u64,
    /// The source image as a data URL
    pub source_image: String,
    /// The worksheet
    pub processed_data: ProcessedData,
    /// Ids of regions already painted, sorted ascending
    pub filled_regions: Vec<u32>,
    /// Selected palette theme
    pub active_theme: Theme,
    /// Painter tool options
    pub tool_config: ToolConfig,
}

impl SessionDocument {
    /// Create a fresh document for a just-processed worksheet.
    pub fn new(
        artist_name: impl Into<String>,
        timestamp: u64,
        source_image: impl Into<String>,
        image: &ProcessedImage,
        encoding: BufferEncoding,
    ) -> Self {
        Self {
            version: SESSION_VERSION,
            artist_name: artist_name.into(),
            timestamp,
            source_image: source_image.into(),
            processed_data: ProcessedData::pack(image, encoding),
            filled_regions: Vec::new(),
            active_theme: Theme::default(),
            tool_config: ToolConfig::default(),
        }
    }

    /// Replace the filled-region set, storing it sorted and
    /// de-duplicated.
    pub fn set_filled_regions(&mut self, ids: impl IntoIterator<Item = u32>) {
        let mut filled: Vec<u32> = ids.into_iter().collect();
        filled.sort_unstable();
        filled.dedup();
        self.filled_regions = filled;
    }

    /// Serialize to a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Json`] on encoding failure.
    pub fn to_json(&self) -> SessionResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize from a JSON string, rejecting unknown versions.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Json`] for malformed JSON and
    /// [`SessionError::UnsupportedVersion`] for a version other than
    /// [`SESSION_VERSION`].
    pub fn from_json(json: &str) -> SessionResult<Self> {
        let document: SessionDocument = serde_json::from_str(json)?;
        if document.version != SESSION_VERSION {
            return Err(SessionError::UnsupportedVersion(document.version));
        }
        Ok(document)
    }
}
