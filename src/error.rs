//! Error types for bsm-lib.
//!
//! The typed pricing API returns `Result<T, PricingError>` instead of letting
//! invalid inputs leak out as NaN or infinity.

use thiserror::Error;

/// Convenience type alias for results in this crate.
pub type Result<T> = std::result::Result<T, PricingError>;

/// Errors raised by input validation and configuration loading.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum PricingError {
    /// A numeric input lies outside the domain of the model
    /// (e.g. non-positive spot, strike or volatility, negative days).
    #[error("domain error: {parameter} = {value} ({reason})")]
    Domain {
        /// Name of the offending input, e.g. "volatility".
        parameter: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// The option type string is neither "Call" nor "Put".
    #[error("invalid option type: {value:?} (expected \"Call\" or \"Put\")")]
    InvalidOptionType { value: String },

    /// A configuration value could not be parsed or is inconsistent.
    #[error("invalid configuration: {message}")]
    Config { message: String },
}

impl PricingError {
    /// Returns `true` for [`PricingError::Domain`].
    pub fn is_domain(&self) -> bool {
        matches!(self, Self::Domain { .. })
    }
}
