//! Rate ranges and range lookup.
//!
//! A carrier tiers its price by half-open intervals `[lower, upper)` over the
//! measured cart value. The intervals are sorted, contiguous and start at zero,
//! so every non-negative value below the last upper bound falls into exactly
//! one of them.

use serde::{Deserialize, Serialize};

use shiprate_core::{DomainError, DomainResult, ValueObject};

/// Half-open interval `[lower, upper)` over a weight or price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub lower: f64,
    pub upper: f64,
}

impl ValueObject for Range {}

impl Range {
    pub fn new(lower: f64, upper: f64) -> DomainResult<Self> {
        let range = Self { lower, upper };
        range.check()?;
        Ok(range)
    }

    /// `lower` is inclusive, `upper` exclusive.
    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value < self.upper
    }

    fn check(&self) -> DomainResult<()> {
        if !self.lower.is_finite() || !self.upper.is_finite() {
            return Err(DomainError::configuration(format!(
                "range bounds must be finite: [{}, {})",
                self.lower, self.upper
            )));
        }
        if self.lower < 0.0 {
            return Err(DomainError::configuration(format!(
                "range bounds must be non-negative: [{}, {})",
                self.lower, self.upper
            )));
        }
        if self.lower >= self.upper {
            return Err(DomainError::configuration(format!(
                "range lower bound must be below its upper bound: [{}, {})",
                self.lower, self.upper
            )));
        }
        Ok(())
    }
}

/// The range chosen for a measured value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeSelection<'a> {
    /// Position of the range in the carrier's range list.
    pub index: usize,
    pub range: &'a Range,
    /// True when the value lay above every range and the largest was used instead.
    pub clamped: bool,
}

/// A validated, borrowed view over a carrier's ranges.
#[derive(Debug, Clone, Copy)]
pub struct RangeSet<'a> {
    ranges: &'a [Range],
}

impl<'a> RangeSet<'a> {
    /// Check that `ranges` are well-formed, sorted, contiguous and start at zero.
    pub fn validate(ranges: &'a [Range]) -> DomainResult<Self> {
        for range in ranges {
            range.check()?;
        }

        if let Some(first) = ranges.first() {
            if first.lower != 0.0 {
                return Err(DomainError::configuration(format!(
                    "first range must start at 0, starts at {}",
                    first.lower
                )));
            }
        }

        for (idx, pair) in ranges.windows(2).enumerate() {
            let (prev, next) = (&pair[0], &pair[1]);
            if next.lower < prev.upper {
                return Err(DomainError::configuration(format!(
                    "ranges {idx} and {} overlap or are out of order: [{}, {}) then [{}, {})",
                    idx + 1,
                    prev.lower,
                    prev.upper,
                    next.lower,
                    next.upper
                )));
            }
            if next.lower > prev.upper {
                return Err(DomainError::configuration(format!(
                    "gap between ranges {idx} and {}: [{}, {}) uncovered",
                    idx + 1,
                    prev.upper,
                    next.lower
                )));
            }
        }

        Ok(Self { ranges })
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn as_slice(&self) -> &'a [Range] {
        self.ranges
    }

    /// Upper bound of the last range; values at or above it are out of range.
    pub fn max_upper(&self) -> Option<f64> {
        self.ranges.last().map(|r| r.upper)
    }

    /// Find the range containing `value`.
    pub fn find(&self, value: f64) -> Option<RangeSelection<'a>> {
        // Ranges are sorted and contiguous: the first range whose upper bound
        // exceeds the value is the only candidate.
        let index = self.ranges.partition_point(|r| r.upper <= value);
        let range = self.ranges.get(index)?;
        range.contains(value).then_some(RangeSelection {
            index,
            range,
            clamped: false,
        })
    }

    /// The last (largest) range, marked as a clamped selection.
    pub fn largest(&self) -> Option<RangeSelection<'a>> {
        let index = self.ranges.len().checked_sub(1)?;
        Some(RangeSelection {
            index,
            range: &self.ranges[index],
            clamped: true,
        })
    }
}
