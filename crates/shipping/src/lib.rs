//! Shipping rate domain module.
//!
//! This crate selects the rate range that applies to a cart and turns it into a
//! shipping cost, implemented purely as deterministic domain logic (no IO, no
//! storage). Carrier records, zones and cart totals belong to the host.

pub mod config;
pub mod formula;
pub mod method;
pub mod range;
pub mod resolver;

pub use config::CarrierConfig;
pub use formula::{CostFormula, CostRule};
pub use method::{RangeBehavior, ShippingMethod};
pub use range::{Range, RangeSelection, RangeSet};
pub use resolver::{RateResolver, ShippingQuote};
