//! Shared immutable sample tables.
//!
//! A [`SampleTable`] is an ordered sequence of `(x, y)` pairs behind a
//! reference-counted handle. The constructing context and any number of
//! interpolators own the data jointly; cloning the table clones the handle,
//! never the samples. The sequence is taken as supplied — it is not sorted
//! or validated here, and an out-of-order x-coordinate is only discovered
//! lazily while a lookup scans past it.

use crate::types::InterpolationError;
use std::sync::Arc;

/// Ordered sequence of `(x, y)` sample pairs behind a shared handle.
///
/// # Type Parameters
///
/// * `X` - Coordinate type of the sample x-values
/// * `Y` - Value type of the sample y-values
///
/// # Ownership
///
/// Backed by `Arc<[(X, Y)]>`: the table is read-only for its whole
/// lifetime and safe to share across threads and across interpolator
/// instances. `Clone` is a handle copy.
///
/// # Example
///
/// ```
/// use caltab_core::table::SampleTable;
///
/// let table = SampleTable::from_pairs(vec![(0.0, 1.0), (1.0, 3.0)]);
/// assert_eq!(table.len(), 2);
///
/// // Cheap handle clone; both views see the same samples.
/// let shared = table.clone();
/// assert_eq!(shared.samples(), table.samples());
/// ```
#[derive(Debug, Clone)]
pub struct SampleTable<X, Y> {
    samples: Arc<[(X, Y)]>,
}

impl<X, Y> SampleTable<X, Y> {
    /// Construct a table from a sequence of `(x, y)` pairs.
    ///
    /// The pairs are stored as supplied: no sorting, no deduplication, no
    /// order validation. A table with fewer than two pairs is accepted here
    /// and reported as incomplete by the lookup operations instead.
    pub fn from_pairs(pairs: Vec<(X, Y)>) -> Self {
        Self {
            samples: pairs.into(),
        }
    }

    /// Returns the sample pairs in table order.
    #[inline]
    pub fn samples(&self) -> &[(X, Y)] {
        &self.samples
    }

    /// Returns the number of sample pairs.
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if the table holds no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Returns the first sample pair, if any.
    #[inline]
    pub fn first(&self) -> Option<&(X, Y)> {
        self.samples.first()
    }

    /// Returns the last sample pair, if any.
    #[inline]
    pub fn last(&self) -> Option<&(X, Y)> {
        self.samples.last()
    }
}

impl<X: Copy, Y: Copy> SampleTable<X, Y> {
    /// Construct a table from paired coordinate and value slices.
    ///
    /// # Arguments
    ///
    /// * `xs` - Slice of x-coordinates
    /// * `ys` - Slice of corresponding y-values
    ///
    /// # Returns
    ///
    /// * `Ok(SampleTable)` - Successfully constructed table
    /// * `Err(InterpolationError::InvalidInput)` - Mismatched slice lengths
    ///
    /// # Example
    ///
    /// ```
    /// use caltab_core::table::SampleTable;
    ///
    /// let table = SampleTable::from_slices(&[0.0, 1.0], &[0.0, 2.0]).unwrap();
    /// assert_eq!(table.len(), 2);
    ///
    /// let result = SampleTable::from_slices(&[0.0, 1.0], &[0.0]);
    /// assert!(result.is_err());
    /// ```
    pub fn from_slices(xs: &[X], ys: &[Y]) -> Result<Self, InterpolationError> {
        if xs.len() != ys.len() {
            return Err(InterpolationError::InvalidInput(format!(
                "xs and ys must have same length: got {} and {}",
                xs.len(),
                ys.len()
            )));
        }

        Ok(Self {
            samples: xs.iter().copied().zip(ys.iter().copied()).collect(),
        })
    }
}

impl<X, Y> From<Vec<(X, Y)>> for SampleTable<X, Y> {
    fn from(pairs: Vec<(X, Y)>) -> Self {
        Self::from_pairs(pairs)
    }
}
