//! Piecewise-linear table interpolation implementation.

use super::Nearest;
use crate::table::SampleTable;
use crate::types::InterpolationError;
use num_traits::{Float, ToPrimitive};

/// Default tolerance below which a segment's x-width counts as zero.
const DEFAULT_TOLERANCE: f64 = 1e-4;

/// Where the bracket scan resolved. Scan state never outlives one call.
enum ScanHit<Y> {
    /// The query equals a sample's x-coordinate exactly.
    Exact(Y),
    /// `left` and `left + 1` bracket the query.
    Segment { left: usize },
    /// The query lies beyond the last sample.
    AboveRange,
}

/// Lossy coordinate cast into the value domain; NaN when unrepresentable.
#[inline]
fn coordinate<X: ToPrimitive, Y: Float>(x: X) -> Y {
    Y::from(x).unwrap_or_else(Y::nan)
}

/// Piecewise-linear interpolator over a shared sample table.
///
/// Holds a handle to an immutable [`SampleTable`] and answers per-query
/// lookups against it: [`get_y`](TableInterpolator::get_y) computes the
/// linear interpolation of a query coordinate, and
/// [`nearest_y`](TableInterpolator::nearest_y) returns the closest sample's
/// value with a boundary classification. All scan state is local to each
/// call, so one instance may be shared freely across threads.
///
/// # Type Parameters
///
/// * `X` - Coordinate type of the queries and sample x-values
/// * `Y` - Floating-point value type (e.g., `f64`, `f32`)
///
/// The two types may differ; coordinates are cast into the value domain
/// for the arithmetic, so an integer-keyed table with real values works
/// directly.
///
/// # Construction
///
/// Construction never fails: a table with fewer than two samples is
/// accepted and reported as [`InterpolationError::InsufficientData`] by
/// every lookup instead. The table is neither copied nor re-sorted — an
/// out-of-order x-coordinate surfaces as
/// [`InterpolationError::NonMonotonicData`] once a scan passes it.
///
/// # Example
///
/// ```
/// use caltab_core::interpolators::TableInterpolator;
/// use caltab_core::table::SampleTable;
///
/// let table: SampleTable<f64, f64> = SampleTable::from_pairs(vec![(1.0, 1.0), (3.0, 2.0), (5.0, 1.75)]);
/// let interp = TableInterpolator::new(table);
///
/// let y = interp.get_y(2.0).unwrap();
/// assert!((y - 1.5).abs() < 1e-10);
/// assert_eq!(interp.domain(), Some((1.0, 5.0)));
/// ```
#[derive(Debug, Clone)]
pub struct TableInterpolator<X, Y> {
    /// Shared sample table; a handle, not a copy
    table: SampleTable<X, Y>,
    /// Minimum acceptable segment x-width before division counts as degenerate
    tolerance: Y,
}

impl<X, Y> TableInterpolator<X, Y>
where
    X: Copy + PartialOrd + ToPrimitive,
    Y: Float,
{
    /// Construct an interpolator over a shared table with the default
    /// tolerance (`1e-4`).
    ///
    /// # Example
    ///
    /// ```
    /// use caltab_core::interpolators::TableInterpolator;
    /// use caltab_core::table::SampleTable;
    ///
    /// let table: SampleTable<f64, f64> = SampleTable::from_pairs(vec![(0.0, 0.0), (1.0, 2.0)]);
    /// let interp = TableInterpolator::new(table);
    /// assert!((interp.tolerance() - 1e-4).abs() < 1e-12);
    /// ```
    pub fn new(table: SampleTable<X, Y>) -> Self {
        let tolerance = Y::from(DEFAULT_TOLERANCE).unwrap_or_else(Y::epsilon);
        Self::with_tolerance(table, tolerance)
    }

    /// Construct an interpolator with a caller-chosen tolerance.
    ///
    /// The tolerance decides when a bracketing segment's x-width is
    /// "effectively zero": widths whose magnitude falls below it are
    /// reported as [`InterpolationError::DegenerateSegment`] instead of
    /// being divided by. A zero tolerance disables the pre-check; a
    /// genuinely zero-width segment is still caught by the finiteness
    /// check on the computed slope.
    pub fn with_tolerance(table: SampleTable<X, Y>, tolerance: Y) -> Self {
        Self { table, tolerance }
    }

    /// Returns the shared sample table.
    #[inline]
    pub fn table(&self) -> &SampleTable<X, Y> {
        &self.table
    }

    /// Returns the configured denominator tolerance.
    #[inline]
    pub fn tolerance(&self) -> Y {
        self.tolerance
    }

    /// Return the table's coordinate domain as `(first x, last x)`.
    ///
    /// `None` when the table has fewer than two samples and no lookup can
    /// succeed.
    #[inline]
    pub fn domain(&self) -> Option<(X, X)> {
        let samples = self.table.samples();
        if samples.len() < 2 {
            return None;
        }
        Some((samples[0].0, samples[samples.len() - 1].0))
    }

    /// Compute the linear interpolation of the query coordinate `x`.
    ///
    /// Queries inside the table's domain interpolate within the bracketing
    /// segment; a query equal to a sample's x-coordinate returns that
    /// sample's value with no interpolation arithmetic at all. Queries
    /// outside the domain extrapolate linearly: below the first sample on
    /// the first segment's slope, above the last sample on the last
    /// segment's slope. Extrapolation is an ordinary `Ok` — unlike
    /// [`nearest_y`](TableInterpolator::nearest_y), this operation does not
    /// classify out-of-domain queries.
    ///
    /// # Arguments
    ///
    /// * `x` - The coordinate at which to interpolate
    ///
    /// # Returns
    ///
    /// * `Ok(y)` - The interpolated (or extrapolated, or exact) value
    /// * `Err(InterpolationError::InsufficientData)` - Fewer than two samples
    /// * `Err(InterpolationError::NonMonotonicData)` - An x-inversion on the scan path
    /// * `Err(InterpolationError::DegenerateSegment)` - Bracketing segment narrower than the tolerance
    /// * `Err(InterpolationError::NonFiniteResult)` - Arithmetic overflowed
    ///
    /// # Example
    ///
    /// ```
    /// use caltab_core::interpolators::TableInterpolator;
    /// use caltab_core::table::SampleTable;
    ///
    /// let table: SampleTable<f64, f64> = SampleTable::from_pairs(vec![(1.0, 1.0), (2.5, 1.3), (3.0, 2.0)]);
    /// let interp = TableInterpolator::new(table);
    ///
    /// // Interpolate between (1, 1) and (2.5, 1.3)
    /// let y = interp.get_y(1.75).unwrap();
    /// assert!((y - 1.15).abs() < 1e-10);
    ///
    /// // Left of the table: extrapolate on the first segment
    /// let y = interp.get_y(0.0).unwrap();
    /// assert!((y - 0.8).abs() < 1e-10);
    /// ```
    pub fn get_y(&self, x: X) -> Result<Y, InterpolationError> {
        let samples = self.complete_samples()?;

        // Left of the table: the first segment's line extends leftwards.
        if x < samples[0].0 {
            return self.segment_value(0, x);
        }

        match self.scan_bracket(x)? {
            ScanHit::Exact(y) => Ok(y),
            ScanHit::Segment { left } => self.segment_value(left, x),
            // Right of the table: the last segment's line extends rightwards.
            ScanHit::AboveRange => self.segment_value(samples.len() - 2, x),
        }
    }

    /// Return the value of the sample closest to the query coordinate `x`.
    ///
    /// Queries outside the table's domain are classified — they still carry
    /// the boundary sample's value, as an answer with a caveat rather than
    /// a failure. A query equal to a sample's x-coordinate returns that
    /// sample's value directly; otherwise the nearer of the two bracketing
    /// samples wins and an exactly equidistant query resolves to the
    /// right-hand sample.
    ///
    /// # Arguments
    ///
    /// * `x` - The coordinate to look up
    ///
    /// # Returns
    ///
    /// * `Ok(Nearest::Within(y))` - In-domain query; nearest sample's value
    /// * `Ok(Nearest::BelowRange(y))` - Query below the table; first sample's value
    /// * `Ok(Nearest::AboveRange(y))` - Query above the table; last sample's value
    /// * `Err(InterpolationError::InsufficientData)` - Fewer than two samples
    /// * `Err(InterpolationError::NonMonotonicData)` - An x-inversion on the scan path
    ///
    /// # Example
    ///
    /// ```
    /// use caltab_core::interpolators::{Nearest, TableInterpolator};
    /// use caltab_core::table::SampleTable;
    ///
    /// let table = SampleTable::from_pairs(vec![(1.0, 1.0), (2.5, 1.3), (3.0, 2.0)]);
    /// let interp = TableInterpolator::new(table);
    ///
    /// assert_eq!(interp.nearest_y(2.9).unwrap(), Nearest::Within(2.0));
    /// assert_eq!(interp.nearest_y(0.5).unwrap(), Nearest::BelowRange(1.0));
    /// assert!(interp.nearest_y(9.0).unwrap().is_above_range());
    /// ```
    pub fn nearest_y(&self, x: X) -> Result<Nearest<Y>, InterpolationError> {
        let samples = self.complete_samples()?;

        if x < samples[0].0 {
            return Ok(Nearest::BelowRange(samples[0].1));
        }

        match self.scan_bracket(x)? {
            ScanHit::Exact(y) => Ok(Nearest::Within(y)),
            ScanHit::Segment { left } => {
                let (x0, y0) = samples[left];
                let (x1, y1) = samples[left + 1];
                let xv = coordinate::<X, Y>(x);
                let left_gap = (xv - coordinate::<X, Y>(x0)).abs();
                let right_gap = (coordinate::<X, Y>(x1) - xv).abs();
                // Ties go to the right-hand sample.
                if left_gap < right_gap {
                    Ok(Nearest::Within(y0))
                } else {
                    Ok(Nearest::Within(y1))
                }
            }
            ScanHit::AboveRange => Ok(Nearest::AboveRange(samples[samples.len() - 1].1)),
        }
    }

    /// The table's samples, or `InsufficientData` when fewer than two.
    fn complete_samples(&self) -> Result<&[(X, Y)], InterpolationError> {
        let samples = self.table.samples();
        if samples.len() < 2 {
            return Err(InterpolationError::InsufficientData {
                got: samples.len(),
                need: 2,
            });
        }
        Ok(samples)
    }

    /// Walk the table left to right until a sample closes the bracket.
    ///
    /// Each visited sample is order-checked against the previously accepted
    /// x before anything else, so an inversion anywhere on the scan path
    /// aborts the lookup. The scan stops at the first bracketing sample;
    /// entries beyond it are never visited, and an inversion there goes
    /// undetected for this query.
    fn scan_bracket(&self, x: X) -> Result<ScanHit<Y>, InterpolationError> {
        let samples = self.table.samples();
        let mut prev_x = samples[0].0;
        let mut left = 0;

        for (index, &(sx, sy)) in samples.iter().enumerate() {
            if sx < prev_x {
                return Err(InterpolationError::NonMonotonicData { index });
            }
            prev_x = sx;

            // Exact hit: the stored value, untouched by arithmetic.
            if x == sx {
                return Ok(ScanHit::Exact(sy));
            }

            // First sample to the right of the query closes the bracket.
            if sx > x {
                return Ok(ScanHit::Segment { left });
            }
            left = index;
        }

        Ok(ScanHit::AboveRange)
    }

    /// Evaluate the segment starting at sample `left` at the query `x`.
    ///
    /// The denominator is guarded twice: its magnitude is checked against
    /// the tolerance before dividing, and the slope is checked for
    /// finiteness afterwards (which also covers a zero tolerance meeting a
    /// genuinely zero-width segment). The final value is checked for
    /// finiteness so overflow surfaces as an error, never as infinity.
    fn segment_value(&self, left: usize, x: X) -> Result<Y, InterpolationError> {
        let samples = self.table.samples();
        let (x0, y0) = samples[left];
        let (x1, y1) = samples[left + 1];

        let run = coordinate::<X, Y>(x1) - coordinate::<X, Y>(x0);
        if run.abs() < self.tolerance {
            return Err(InterpolationError::DegenerateSegment { index: left });
        }

        let slope = (y1 - y0) / run;
        if !slope.is_finite() {
            return Err(InterpolationError::DegenerateSegment { index: left });
        }

        let y = y0 + (coordinate::<X, Y>(x) - coordinate::<X, Y>(x0)) * slope;
        if !y.is_finite() {
            return Err(InterpolationError::NonFiniteResult {
                x: x.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(y)
    }
}
