//! Shipping method and out-of-range behavior.

use serde::{Deserialize, Serialize};

use shiprate_core::{DomainError, DomainResult};

/// How a carrier bills: which cart total drives the range lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShippingMethod {
    /// No charge, ranges are never consulted.
    Free,
    /// Ranges are bounds on the total cart weight.
    Weight,
    /// Ranges are bounds on the total cart price.
    Price,
}

impl ShippingMethod {
    /// Decode the numeric code hosts store on carrier records
    /// (`0` free, `1` weight, `2` price).
    pub fn from_code(code: u8) -> DomainResult<Self> {
        match code {
            0 => Ok(Self::Free),
            1 => Ok(Self::Weight),
            2 => Ok(Self::Price),
            other => Err(DomainError::validation(format!(
                "unknown shipping method code {other}"
            ))),
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Self::Free => 0,
            Self::Weight => 1,
            Self::Price => 2,
        }
    }

    pub fn uses_ranges(self) -> bool {
        !matches!(self, Self::Free)
    }
}

/// What happens when the measured value lies above every configured range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeBehavior {
    /// Price the cart as if it fell into the largest range.
    #[default]
    ClampToLargest,
    /// Hide the carrier from the customer's options.
    DisableCarrier,
}

impl RangeBehavior {
    /// Decode the host's numeric code (`0` clamp, `1` disable).
    pub fn from_code(code: u8) -> DomainResult<Self> {
        match code {
            0 => Ok(Self::ClampToLargest),
            1 => Ok(Self::DisableCarrier),
            other => Err(DomainError::validation(format!(
                "unknown range behavior code {other}"
            ))),
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Self::ClampToLargest => 0,
            Self::DisableCarrier => 1,
        }
    }
}
