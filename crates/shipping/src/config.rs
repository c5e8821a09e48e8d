//! Per-carrier rate configuration.

use serde::{Deserialize, Serialize};

use shiprate_core::{DomainError, DomainResult, ValueObject};

use crate::formula::{CostFormula, CostRule};
use crate::method::{RangeBehavior, ShippingMethod};
use crate::range::{Range, RangeSet};

/// Everything the resolver needs to price a cart for one carrier.
///
/// Owned by the host's carrier records; treated as immutable for the duration
/// of a checkout computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarrierConfig {
    pub method: ShippingMethod,
    #[serde(default)]
    pub ranges: Vec<Range>,
    #[serde(default)]
    pub behavior: RangeBehavior,
    /// When false the carrier is priced at `flat_cost` without any range lookup.
    #[serde(default = "default_needs_range")]
    pub needs_range: bool,
    /// Cost used when no range lookup happens, smallest currency unit.
    #[serde(default)]
    pub flat_cost: u64,
    #[serde(default)]
    pub formula: CostRule,
}

fn default_needs_range() -> bool {
    true
}

impl ValueObject for CarrierConfig {}

impl CarrierConfig {
    /// A free-shipping carrier.
    pub fn free() -> Self {
        Self {
            method: ShippingMethod::Free,
            ranges: Vec::new(),
            behavior: RangeBehavior::default(),
            needs_range: false,
            flat_cost: 0,
            formula: CostRule::default(),
        }
    }

    /// A carrier tiered by `method` over `ranges`, priced with `formula`.
    pub fn ranged(
        method: ShippingMethod,
        ranges: Vec<Range>,
        behavior: RangeBehavior,
        formula: CostRule,
    ) -> Self {
        Self {
            method,
            ranges,
            behavior,
            needs_range: true,
            flat_cost: 0,
            formula,
        }
    }

    /// A carrier that always costs `flat_cost`.
    pub fn flat(method: ShippingMethod, flat_cost: u64) -> Self {
        Self {
            method,
            ranges: Vec::new(),
            behavior: RangeBehavior::default(),
            needs_range: false,
            flat_cost,
            formula: CostRule::default(),
        }
    }

    /// Whether pricing goes through range lookup at all.
    pub fn uses_ranges(&self) -> bool {
        self.method.uses_ranges() && self.needs_range
    }

    /// Validate the configuration against `formula` and return the checked ranges.
    pub fn validate_with<F>(&self, formula: &F) -> DomainResult<RangeSet<'_>>
    where
        F: CostFormula + ?Sized,
    {
        if !self.method.uses_ranges() {
            return RangeSet::validate(&[]);
        }

        let set = RangeSet::validate(&self.ranges)?;
        if self.uses_ranges() {
            if set.is_empty() {
                return Err(DomainError::configuration(
                    "carrier requires ranges but none are configured",
                ));
            }
            formula.check(&set)?;
        }
        Ok(set)
    }

    pub fn validate(&self) -> DomainResult<RangeSet<'_>> {
        self.validate_with(&self.formula)
    }
}
