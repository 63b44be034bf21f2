//! # caltab_core: Calibration-Table Lookup Primitives
//!
//! ## Role
//!
//! caltab_core provides a small, self-contained table-lookup primitive for
//! numeric and scientific callers — sensor calibration curves,
//! lookup-table-based control systems — with:
//! - Shared immutable sample tables (`table`)
//! - Piecewise-linear interpolation and nearest-sample lookup
//!   (`interpolators`)
//! - Structured error types (`types::error`)
//!
//! ## Minimal Dependency Principle
//!
//! The crate has no I/O and minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error type derivation
//! - serde: Serialisation of error/outcome types (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use caltab_core::interpolators::{Nearest, TableInterpolator};
//! use caltab_core::table::SampleTable;
//!
//! // A calibration curve sampled at seven points.
//! let table: SampleTable<f64, f64> = SampleTable::from_pairs(vec![
//!     (1.0, 1.0),
//!     (2.5, 1.3),
//!     (3.0, 2.0),
//!     (3.75, 0.5),
//!     (4.1, 2.25),
//!     (5.0, 1.75),
//!     (5.3, 1.9),
//! ]);
//! let interp = TableInterpolator::new(table);
//!
//! // Linear interpolation inside the table
//! let y = interp.get_y(1.75).unwrap();
//! assert!((y - 1.15).abs() < 1e-10);
//!
//! // Queries outside the domain extrapolate on the boundary segments
//! let y = interp.get_y(0.0).unwrap();
//! assert!((y - 0.8).abs() < 1e-10);
//!
//! // Nearest-sample lookup classifies out-of-domain queries
//! assert_eq!(interp.nearest_y(0.75).unwrap(), Nearest::BelowRange(1.0));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for error and outcome types (the sample
//!   tables themselves are deliberately not serialisable)

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod interpolators;
pub mod table;
pub mod types;
