//! Fallible scratch-buffer allocation
//!
//! The pipeline allocates several buffers proportional to `width*height`
//! (visited bitmap, flood-fill stack, assignment arrays, the region map).
//! On constrained hosts those reservations can fail for multi-megapixel
//! inputs; these helpers surface that as [`Error::AllocationFailed`]
//! instead of aborting the process.

use crate::error::{Error, Result};

/// Allocate a vector of `len` copies of `value`.
///
/// # Errors
///
/// Returns [`Error::AllocationFailed`] if the reservation fails.
pub fn filled_vec<T: Clone>(value: T, len: usize) -> Result<Vec<T>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len).map_err(|_| Error::AllocationFailed)?;
    buf.resize(len, value);
    Ok(buf)
}

/// Allocate an empty vector with room for `capacity` elements.
///
/// # Errors
///
/// Returns [`Error::AllocationFailed`] if the reservation fails.
pub fn vec_with_capacity<T>(capacity: usize) -> Result<Vec<T>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(capacity)
        .map_err(|_| Error::AllocationFailed)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_vec() {
        let buf = filled_vec(7u32, 5).unwrap();
        assert_eq!(buf, vec![7, 7, 7, 7, 7]);
    }

    #[test]
    fn test_vec_with_capacity() {
        let buf: Vec<u32> = vec_with_capacity(16).unwrap();
        assert!(buf.is_empty());
        assert!(buf.capacity() >= 16);
    }
}
