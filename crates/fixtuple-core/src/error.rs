//! Error types for fixtuple operations.
//!
//! This module provides the single error type shared by every fallible
//! tuple operation in the workspace.
//!
//! # Overview
//!
//! The [`Error`] enum covers the failure modes that can occur during:
//! - Dynamic component access (`get`, `set`, `equals_at`)
//! - Rearrangement by explicit indices (`arrange`, `swizzle`)
//! - Construction from slices or indexable tuples of the wrong length
//! - Writing results into caller-supplied buffers
//!
//! Comparators never fail on a length mismatch; they report "not equal"
//! instead. See `fixtuple_math::compare`.
//!
//! # Usage
//!
//! ```rust
//! use fixtuple_core::{Error, Result};
//!
//! fn component(values: &[f32], index: usize) -> Result<f32> {
//!     values
//!         .get(index)
//!         .copied()
//!         .ok_or(Error::index_out_of_range(index, values.len()))
//! }
//!
//! assert!(component(&[1.0, 2.0], 2).is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - [`crate::tuple::Tuple`] - Bounds-checked access
//! - `fixtuple-math` - Rearrangement, `equals_at`, `*_into` sinks

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
///
/// Convenience alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during tuple operations.
///
/// This enum uses [`thiserror`] for automatic [`std::error::Error`] and
/// [`std::fmt::Display`] implementations.
///
/// # Categories
///
/// - **Index errors**: [`IndexOutOfRange`](Error::IndexOutOfRange)
/// - **Size errors**: [`LengthMismatch`](Error::LengthMismatch), [`BufferTooSmall`](Error::BufferTooSmall)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Component index is outside `[0, len)`.
    ///
    /// Returned by every direct-access entry point. Indices are never
    /// clamped or wrapped.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fixtuple_core::Error;
    ///
    /// let err = Error::IndexOutOfRange { index: 4, len: 3 };
    /// assert!(err.to_string().contains("4"));
    /// ```
    #[error("component index {index} out of range for tuple of length {len}")]
    IndexOutOfRange {
        /// Index that was requested
        index: usize,
        /// Number of components available
        len: usize,
    },

    /// Source has a different number of components than the target arity.
    ///
    /// Returned when building a fixed-arity tuple from a slice or an
    /// indexable tuple.
    #[error("length mismatch: expected {expected} components, got {got}")]
    LengthMismatch {
        /// Target arity
        expected: usize,
        /// Length of the source
        got: usize,
    },

    /// Caller-supplied output buffer cannot hold the result.
    #[error("output buffer too small: need {required} components, got {got}")]
    BufferTooSmall {
        /// Components the result needs
        required: usize,
        /// Length of the buffer
        got: usize,
    },
}

impl Error {
    /// Creates an [`Error::IndexOutOfRange`] error.
    ///
    /// # Arguments
    ///
    /// * `index` - Index that was accessed
    /// * `len` - Number of components available
    #[inline]
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Creates an [`Error::LengthMismatch`] error.
    #[inline]
    pub fn length_mismatch(expected: usize, got: usize) -> Self {
        Self::LengthMismatch { expected, got }
    }

    /// Creates an [`Error::BufferTooSmall`] error.
    #[inline]
    pub fn buffer_too_small(required: usize, got: usize) -> Self {
        Self::BufferTooSmall { required, got }
    }

    /// Returns `true` if this is an index error.
    #[inline]
    pub fn is_index_error(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }

    /// Returns `true` if this is a size-related error.
    #[inline]
    pub fn is_size_error(&self) -> bool {
        matches!(self, Self::LengthMismatch { .. } | Self::BufferTooSmall { .. })
    }
}

/// Checks `index < len`, logging and returning an index error otherwise.
#[inline]
pub fn check_index(index: usize, len: usize) -> Result<usize> {
    if index < len {
        Ok(index)
    } else {
        tracing::trace!(index, len, "component index out of range");
        Err(Error::index_out_of_range(index, len))
    }
}

/// Checks that `buffer` can hold `required` components.
#[inline]
pub fn check_buffer(required: usize, buffer: &[f32]) -> Result<()> {
    if buffer.len() >= required {
        Ok(())
    } else {
        tracing::trace!(required, got = buffer.len(), "output buffer too small");
        Err(Error::buffer_too_small(required, buffer.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_out_of_range() {
        let err = Error::index_out_of_range(5, 3);
        let msg = err.to_string();
        assert!(msg.contains("5"));
        assert!(msg.contains("3"));
        assert!(err.is_index_error());
        assert!(!err.is_size_error());
    }

    #[test]
    fn test_size_errors() {
        let err = Error::length_mismatch(4, 2);
        assert!(err.to_string().contains("expected 4"));
        assert!(err.is_size_error());

        let err = Error::buffer_too_small(3, 1);
        assert!(err.to_string().contains("need 3"));
        assert!(err.is_size_error());
    }

    #[test]
    fn test_check_index() {
        assert_eq!(check_index(0, 2), Ok(0));
        assert_eq!(check_index(1, 2), Ok(1));
        assert_eq!(check_index(2, 2), Err(Error::index_out_of_range(2, 2)));
    }

    #[test]
    fn test_check_buffer() {
        assert!(check_buffer(2, &[0.0; 4]).is_ok());
        assert!(check_buffer(2, &[0.0; 2]).is_ok());
        assert_eq!(
            check_buffer(3, &[0.0; 2]),
            Err(Error::buffer_too_small(3, 2))
        );
    }
}
