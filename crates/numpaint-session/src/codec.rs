//! Buffer packing for the session document
//!
//! The worksheet carries two bulky buffers: the RGBA byte copy and the
//! region map's id array. The document stores each either as a base64
//! string (compact, the default) or as a plain number array (readable,
//! interoperable with hand-written tooling); readers accept both forms
//! without being told which was written.
//!
//! Ids are packed little-endian, four bytes per id, when base64 is
//! chosen.

use crate::error::{SessionError, SessionResult};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

/// How bulky buffers are written at save time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BufferEncoding {
    /// Base64 strings (compact)
    #[default]
    Base64,
    /// Plain number arrays
    Numbers,
}

/// Wire form of a byte buffer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PackedBytes {
    /// Base64-encoded bytes
    Base64(String),
    /// One array element per byte
    Numbers(Vec<u8>),
}

impl PackedBytes {
    /// Pack bytes with the chosen encoding.
    pub fn pack(bytes: &[u8], encoding: BufferEncoding) -> Self {
        match encoding {
            BufferEncoding::Base64 => PackedBytes::Base64(STANDARD.encode(bytes)),
            BufferEncoding::Numbers => PackedBytes::Numbers(bytes.to_vec()),
        }
    }

    /// Recover the raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Base64`] for a malformed base64 payload.
    pub fn unpack(&self) -> SessionResult<Vec<u8>> {
        match self {
            PackedBytes::Base64(text) => Ok(STANDARD.decode(text)?),
            PackedBytes::Numbers(bytes) => Ok(bytes.clone()),
        }
    }
}

/// Wire form of a `u32` id array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PackedIds {
    /// Base64 of the ids packed little-endian
    Base64(String),
    /// One array element per id
    Numbers(Vec<u32>),
}

impl PackedIds {
    /// Pack ids with the chosen encoding.
    pub fn pack(ids: &[u32], encoding: BufferEncoding) -> Self {
        match encoding {
            BufferEncoding::Base64 => {
                let mut bytes = Vec::with_capacity(ids.len() * 4);
                for &id in ids {
                    bytes.extend_from_slice(&id.to_le_bytes());
                }
                PackedIds::Base64(STANDARD.encode(&bytes))
            }
            BufferEncoding::Numbers => PackedIds::Numbers(ids.to_vec()),
        }
    }

    /// Recover the id array.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Base64`] for a malformed base64 payload
    /// and [`SessionError::MalformedRegionMap`] if the decoded byte
    /// count is not a multiple of 4.
    pub fn unpack(&self) -> SessionResult<Vec<u32>> {
        match self {
            PackedIds::Base64(text) => {
                let bytes = STANDARD.decode(text)?;
                if bytes.len() % 4 != 0 {
                    return Err(SessionError::MalformedRegionMap(bytes.len()));
                }
                Ok(bytes
                    .chunks_exact(4)
                    .map(|chunk| u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
                    .collect())
            }
            PackedIds::Numbers(ids) => Ok(ids.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_round_trip_both_encodings() {
        let bytes = [0u8, 1, 2, 254, 255];
        for encoding in [BufferEncoding::Base64, BufferEncoding::Numbers] {
            let packed = PackedBytes::pack(&bytes, encoding);
            assert_eq!(packed.unpack().unwrap(), bytes);
        }
    }

    #[test]
    fn test_ids_round_trip_both_encodings() {
        let ids = [0u32, 1, 300, u32::MAX];
        for encoding in [BufferEncoding::Base64, BufferEncoding::Numbers] {
            let packed = PackedIds::pack(&ids, encoding);
            assert_eq!(packed.unpack().unwrap(), ids);
        }
    }

    #[test]
    fn test_untagged_forms_deserialize() {
        let from_text: PackedBytes = serde_json::from_str("\"AAEC\"").unwrap();
        assert_eq!(from_text.unpack().unwrap(), vec![0, 1, 2]);

        let from_array: PackedBytes = serde_json::from_str("[0,1,2]").unwrap();
        assert_eq!(from_array.unpack().unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_truncated_id_payload_is_rejected() {
        // Five bytes cannot be a whole number of little-endian u32 ids.
        let packed = PackedIds::Base64(STANDARD.encode([0u8, 0, 0, 0, 0]));
        assert!(matches!(
            packed.unpack(),
            Err(SessionError::MalformedRegionMap(5))
        ));
    }

    #[test]
    fn test_bad_base64_is_rejected() {
        let packed = PackedBytes::Base64("not//valid!!".to_string());
        assert!(matches!(packed.unpack(), Err(SessionError::Base64(_))));
    }
}
