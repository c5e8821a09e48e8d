//! Cost formulas: turning a selected range into a shipping cost.
//!
//! Range selection and pricing are separate concerns. The resolver only picks
//! the range; a `CostFormula` decides what that range costs. `CostRule` covers
//! the formulas carriers are usually configured with, and any closure of the
//! right shape can be injected instead.

use serde::{Deserialize, Serialize};

use shiprate_core::{DomainError, DomainResult};

use crate::range::{RangeSelection, RangeSet};

/// Pricing strategy applied to the range a cart falls into.
///
/// Costs are in the smallest currency unit. `base` is the cost already
/// computed upstream by the host (e.g. per-product shipping fees).
pub trait CostFormula {
    fn cost(&self, selection: &RangeSelection<'_>, base: u64) -> u64;

    /// Reject formulas that cannot price every range of `ranges`.
    fn check(&self, _ranges: &RangeSet<'_>) -> DomainResult<()> {
        Ok(())
    }
}

impl<F> CostFormula for F
where
    F: Fn(&RangeSelection<'_>, u64) -> u64,
{
    fn cost(&self, selection: &RangeSelection<'_>, base: u64) -> u64 {
        self(selection, base)
    }
}

/// Configurable cost formula.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CostRule {
    /// Upstream cost plus a fixed amount.
    Surcharge { amount: u64 },
    /// A fixed amount regardless of upstream cost.
    Fixed { amount: u64 },
    /// One price per range, optionally on top of the upstream cost.
    PerRange {
        amounts: Vec<u64>,
        #[serde(default)]
        add_base: bool,
    },
}

impl Default for CostRule {
    fn default() -> Self {
        Self::Surcharge { amount: 0 }
    }
}

impl CostFormula for CostRule {
    fn cost(&self, selection: &RangeSelection<'_>, base: u64) -> u64 {
        match self {
            CostRule::Surcharge { amount } => base.saturating_add(*amount),
            CostRule::Fixed { amount } => *amount,
            CostRule::PerRange { amounts, add_base } => {
                // `check` guarantees one amount per range.
                let amount = amounts.get(selection.index).copied().unwrap_or_default();
                if *add_base {
                    base.saturating_add(amount)
                } else {
                    amount
                }
            }
        }
    }

    fn check(&self, ranges: &RangeSet<'_>) -> DomainResult<()> {
        match self {
            CostRule::PerRange { amounts, .. } if amounts.len() != ranges.len() => {
                Err(DomainError::configuration(format!(
                    "per-range pricing lists {} amounts for {} ranges",
                    amounts.len(),
                    ranges.len()
                )))
            }
            _ => Ok(()),
        }
    }
}
