//! Rate resolution: carrier configuration + cart totals -> shipping quote.

use serde::{Deserialize, Serialize};

use shiprate_core::{DomainError, DomainResult};

use crate::config::CarrierConfig;
use crate::formula::CostFormula;
use crate::method::RangeBehavior;

/// Outcome of pricing a cart with one carrier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "cost", rename_all = "snake_case")]
pub enum ShippingQuote {
    /// Shipping cost in the smallest currency unit.
    Cost(u64),
    /// The carrier must not be offered for this cart.
    Inapplicable,
}

impl ShippingQuote {
    pub fn cost(self) -> Option<u64> {
        match self {
            ShippingQuote::Cost(c) => Some(c),
            ShippingQuote::Inapplicable => None,
        }
    }

    pub fn is_applicable(self) -> bool {
        matches!(self, ShippingQuote::Cost(_))
    }
}

/// Pure, deterministic rate resolver.
///
/// `measured_value` is the cart's total weight or total price, whichever the
/// carrier's method bills on, in the host's unit. No conversion happens here.
#[derive(Debug, Clone, Copy, Default)]
pub struct RateResolver;

impl RateResolver {
    pub fn new() -> Self {
        Self
    }

    /// Price a cart with the formula configured on the carrier.
    pub fn resolve(
        &self,
        config: &CarrierConfig,
        measured_value: f64,
        base_shipping_cost: u64,
    ) -> DomainResult<ShippingQuote> {
        self.resolve_with(config, &config.formula, measured_value, base_shipping_cost)
    }

    /// Price a cart with an injected formula instead of the configured one.
    pub fn resolve_with<F>(
        &self,
        config: &CarrierConfig,
        formula: &F,
        measured_value: f64,
        base_shipping_cost: u64,
    ) -> DomainResult<ShippingQuote>
    where
        F: CostFormula + ?Sized,
    {
        // Free carriers never look at ranges or totals.
        if !config.method.uses_ranges() {
            tracing::debug!(method = ?config.method, "free shipping");
            return Ok(ShippingQuote::Cost(0));
        }

        let ranges = config.validate_with(formula)?;

        if !measured_value.is_finite() || measured_value < 0.0 {
            return Err(DomainError::validation(format!(
                "measured value must be a non-negative number, got {measured_value}"
            )));
        }

        if !config.needs_range {
            tracing::debug!(flat_cost = config.flat_cost, "rangeless carrier, flat cost");
            return Ok(ShippingQuote::Cost(config.flat_cost));
        }

        let selection = match ranges.find(measured_value) {
            Some(sel) => sel,
            None => match config.behavior {
                RangeBehavior::ClampToLargest => ranges.largest().ok_or_else(|| {
                    DomainError::configuration("carrier requires ranges but none are configured")
                })?,
                RangeBehavior::DisableCarrier => {
                    tracing::debug!(
                        measured_value,
                        max_upper = ?ranges.max_upper(),
                        "value above all ranges, carrier disabled"
                    );
                    return Ok(ShippingQuote::Inapplicable);
                }
            },
        };

        let cost = formula.cost(&selection, base_shipping_cost);
        tracing::debug!(
            measured_value,
            range_index = selection.index,
            clamped = selection.clamped,
            cost,
            "range resolved"
        );
        Ok(ShippingQuote::Cost(cost))
    }
}
