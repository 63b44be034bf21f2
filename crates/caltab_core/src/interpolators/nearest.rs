//! Boundary classification for nearest-sample lookups.

/// Outcome of a nearest-sample lookup.
///
/// Distinguishes "answer" from "answer with caveat": a query outside the
/// table's domain still yields the boundary sample's value, but is
/// classified so callers can decide whether to trust it, substitute a
/// default, or abort.
///
/// # Example
///
/// ```
/// use caltab_core::interpolators::Nearest;
///
/// let outcome = Nearest::BelowRange(1.0);
/// assert!(outcome.is_below_range());
/// assert_eq!(outcome.value(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Nearest<Y> {
    /// Query inside the table's domain; value of the nearest sample.
    Within(Y),

    /// Query below the table's first sample; that sample's value.
    BelowRange(Y),

    /// Query above the table's last sample; that sample's value.
    AboveRange(Y),
}

impl<Y: Copy> Nearest<Y> {
    /// The nearest sample's value, whatever the classification.
    #[inline]
    pub fn value(&self) -> Y {
        match *self {
            Nearest::Within(y) | Nearest::BelowRange(y) | Nearest::AboveRange(y) => y,
        }
    }

    /// Check if the query fell inside the table's domain.
    #[inline]
    pub fn is_within(&self) -> bool {
        matches!(self, Nearest::Within(_))
    }

    /// Check if the query fell below the table's first sample.
    #[inline]
    pub fn is_below_range(&self) -> bool {
        matches!(self, Nearest::BelowRange(_))
    }

    /// Check if the query fell above the table's last sample.
    #[inline]
    pub fn is_above_range(&self) -> bool {
        matches!(self, Nearest::AboveRange(_))
    }
}
