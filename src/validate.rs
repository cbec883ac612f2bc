//! Input validation helpers for the strict policy.
//!
//! `!is_finite()` rejects NaN, +Inf and -Inf uniformly.

use crate::error::{PricingError, Result};
use crate::market_params::MarketParams;

/// Validate that a value is strictly positive and finite.
pub(crate) fn validate_positive(value: f64, parameter: &'static str) -> Result<f64> {
    if !value.is_finite() {
        return Err(PricingError::Domain {
            parameter,
            value,
            reason: "must be finite",
        });
    }
    if value <= 0.0 {
        return Err(PricingError::Domain {
            parameter,
            value,
            reason: "must be positive",
        });
    }
    Ok(value)
}

/// Validate that a value is non-negative and finite.
pub(crate) fn validate_non_negative(value: f64, parameter: &'static str) -> Result<f64> {
    if !value.is_finite() {
        return Err(PricingError::Domain {
            parameter,
            value,
            reason: "must be finite",
        });
    }
    if value < 0.0 {
        return Err(PricingError::Domain {
            parameter,
            value,
            reason: "must be non-negative",
        });
    }
    Ok(value)
}

/// Validate that a value is finite (zero and negatives allowed).
pub(crate) fn validate_finite(value: f64, parameter: &'static str) -> Result<f64> {
    if !value.is_finite() {
        return Err(PricingError::Domain {
            parameter,
            value,
            reason: "must be finite",
        });
    }
    Ok(value)
}

/// Check every field of `params` against the model domain.
pub(crate) fn validate_market_params(params: &MarketParams) -> Result<()> {
    validate_positive(params.spot, "spot")?;
    validate_positive(params.strike, "strike")?;
    validate_positive(params.volatility, "volatility")?;
    validate_finite(params.rate, "rate")?;
    validate_finite(params.dividend, "dividend")?;
    validate_non_negative(params.days, "days")?;
    Ok(())
}
