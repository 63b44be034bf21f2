//! Table-lookup interpolation for calibration data.
//!
//! This module provides the lookup engine for ordered sample tables,
//! designed for calibration curves and lookup-table-based control paths.
//!
//! ## Available Operations
//!
//! Both live on [`TableInterpolator`]:
//!
//! - [`get_y`](TableInterpolator::get_y): Piecewise-linear interpolation,
//!   extrapolating on the boundary segments outside the table's domain
//! - [`nearest_y`](TableInterpolator::nearest_y): Nearest-sample lookup,
//!   classifying out-of-domain queries via [`Nearest`]
//!
//! ## Scan Semantics
//!
//! Lookups scan the table left to right with purely call-local state. The
//! scan verifies sample order lazily as it goes: an x-inversion on the
//! path to the query aborts with
//! [`NonMonotonicData`](crate::types::InterpolationError::NonMonotonicData),
//! while entries beyond the first bracketing sample are never visited.
//!
//! ## Example
//!
//! ```
//! use caltab_core::interpolators::TableInterpolator;
//! use caltab_core::table::SampleTable;
//!
//! let table: SampleTable<f64, f64> = SampleTable::from_pairs(vec![(0.0, 0.0), (1.0, 2.0), (2.0, 4.0)]);
//! let interp = TableInterpolator::new(table);
//!
//! let y = interp.get_y(1.5).unwrap();
//! assert!((y - 3.0).abs() < 1e-10);
//! ```

mod linear;
mod nearest;

// Re-export public types at module level
pub use linear::TableInterpolator;
pub use nearest::Nearest;
