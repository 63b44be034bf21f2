//! Error types for structured error handling.
//!
//! This module provides `InterpolationError`, the closed error enumeration
//! shared by table construction and both lookup operations. Boundary
//! classifications (queries outside the table's domain during a nearest
//! lookup) are not errors and live in
//! [`Nearest`](crate::interpolators::Nearest) instead.

use thiserror::Error;

/// Interpolation and table-lookup errors.
///
/// Provides structured error handling for lookup operations with
/// descriptive context for each failure mode. Structural problems
/// (`InsufficientData`, `NonMonotonicData`) are detected before or during
/// the table scan; numeric problems (`DegenerateSegment`,
/// `NonFiniteResult`) are detected at the point of computation and
/// reported instead of a silently infinite or corrupted value.
///
/// # Variants
/// - `InsufficientData`: Table has fewer than two sample pairs
/// - `NonMonotonicData`: Sample x-coordinates decrease mid-table
/// - `DegenerateSegment`: Bracketing segment has (near-)zero x-width
/// - `NonFiniteResult`: Interpolation arithmetic produced a non-finite value
/// - `InvalidInput`: Invalid construction input
///
/// # Examples
/// ```
/// use caltab_core::types::InterpolationError;
///
/// let err = InterpolationError::InsufficientData { got: 1, need: 2 };
/// assert_eq!(
///     format!("{}", err),
///     "Insufficient data points: got 1, need at least 2"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterpolationError {
    /// Insufficient data points for interpolation.
    #[error("Insufficient data points: got {got}, need at least {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// Data is not monotonic in x where monotonicity is required.
    #[error("Data is not monotonic at index {index}")]
    NonMonotonicData {
        /// Index where the monotonicity violation was detected
        index: usize,
    },

    /// Bracketing segment narrower than the configured tolerance.
    #[error("Degenerate segment at index {index}: x-interval narrower than tolerance")]
    DegenerateSegment {
        /// Index of the segment's left sample
        index: usize,
    },

    /// Interpolation arithmetic overflowed to a non-finite value.
    #[error("Non-finite result for query x = {x}")]
    NonFiniteResult {
        /// The query point, converted to f64 for diagnostics
        x: f64,
    },

    /// Invalid input data or parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
