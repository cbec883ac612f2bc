//! # bsm-lib: Black-Scholes-Merton Option Pricing and Greeks
//!
//! `bsm-lib` prices European options and their risk sensitivities with the
//! Black-Scholes-Merton closed form (continuous dividend yield), and exposes
//! the results as spreadsheet-style custom functions.
//!
//! ## Core Features
//!
//! - **Pricing**: call and put prices from D1/D2 and a polynomial normal CDF
//! - **Greeks**: delta, gamma, theta, vega and rho in closed form
//! - **Validation policies**: strict domain checks or reference-compatible
//!   IEEE propagation
//! - **Spreadsheet surface**: `CALLPRICE`, `PUTPRICE`, `OPTIONDELTA`, ... in [`sheet`]
//! - **Batch pricing**: price a whole column of quotes in one call
//!
//! ## Quick Start
//!
//! ```rust
//! use bsm_lib::{call_price, greeks, MarketParams, OptionType, PricingConfig};
//!
//! // price, strike, volatility, interest, dividend, days
//! let params = MarketParams::new(100.0, 100.0, 0.2, 0.05, 0.0, 365.0);
//! let config = PricingConfig::default();
//!
//! let price = call_price(&params, &config)?;
//! assert!((price - 10.4506).abs() < 1e-3);
//!
//! let g = greeks(&params, OptionType::Put, &config)?;
//! assert!(g.delta < 0.0);
//! # Ok::<(), bsm_lib::PricingError>(())
//! ```
//!
//! ## Configuration Presets
//!
//! - `strict()`: validated inputs, exact "Call"/"Put" matching
//! - `reference()`: no validation, unknown option types priced as calls
//! - `precise()`: strict, with a full-precision erf-based normal CDF

// ================================================================================================
// MODULES
// ================================================================================================

pub mod error;
pub mod market_params;
pub mod models;
pub mod pricing;
pub mod sheet;
mod validate;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

pub use error::{PricingError, Result};
pub use market_params::MarketParams;

pub use models::bs::bs_model::BlackScholesModel;
pub use models::normal::{norm_cdf, norm_pdf, NormalDistribution};
pub use models::traits::PricingModel;

pub use pricing::{
    config::{CdfMethod, PricingConfig, ThetaConvention, ValidationPolicy},
    pipeline::{price_quote, price_quotes},
    types::{FixedParameters, Greeks, OptionQuote, OptionType, PricingResult},
};

// ================================================================================================
// DEFAULT CONFIGURATIONS
// ================================================================================================

/// Pre-configured pricing settings.
///
/// - [`strict()`]: hardened defaults for production use
/// - [`reference()`]: reproduces the spreadsheet functions exactly
/// - [`precise()`]: strict, with the libm erf backend
pub mod default_configs {
    use crate::pricing::config::PricingConfig;

    /// Strict validation, polynomial CDF, annualized theta.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bsm_lib::{default_configs, ValidationPolicy};
    ///
    /// let config = default_configs::strict();
    /// assert_eq!(config.validation, ValidationPolicy::Strict);
    /// ```
    pub fn strict() -> PricingConfig {
        PricingConfig::strict()
    }

    /// Reference-compatible behaviour: no input checks, NaN/∞ propagate and
    /// anything other than a recognized option type is priced as a call.
    pub fn reference() -> PricingConfig {
        PricingConfig::reference()
    }

    /// Strict validation with a machine-precision normal CDF.
    pub fn precise() -> PricingConfig {
        PricingConfig::precise()
    }
}

// ================================================================================================
// TYPED API
// ================================================================================================

fn model(config: &PricingConfig) -> Result<BlackScholesModel> {
    BlackScholesModel::new(config.clone())
}

/// D1 term: `[ln(S/K) + (r − q + σ²/2)·τ] / (σ·√τ)`.
///
/// # Errors
///
/// Under the strict policy, [`PricingError::Domain`] for invalid inputs and
/// for `days = 0`, where D1 is undefined.
pub fn d1(params: &MarketParams, config: &PricingConfig) -> Result<f64> {
    model(config)?.d1(params)
}

/// D2 term: `D1 − σ·√τ`.
pub fn d2(params: &MarketParams, config: &PricingConfig) -> Result<f64> {
    model(config)?.d2(params)
}

/// European call price.
///
/// # Errors
///
/// Under the strict policy, [`PricingError::Domain`] when spot, strike or
/// volatility is not positive, days is negative, or any input is not finite.
/// `days = 0` returns the payoff `max(S − K, 0)`.
///
/// # Example
///
/// ```rust
/// use bsm_lib::{call_price, MarketParams, PricingConfig};
///
/// let params = MarketParams::new(100.0, 100.0, 0.2, 0.05, 0.0, 365.0);
/// let price = call_price(&params, &PricingConfig::default()).unwrap();
/// assert!(price > 0.0 && price < 100.0);
/// ```
pub fn call_price(params: &MarketParams, config: &PricingConfig) -> Result<f64> {
    model(config)?.call_price(params)
}

/// European put price. Errors as for [`call_price`].
pub fn put_price(params: &MarketParams, config: &PricingConfig) -> Result<f64> {
    model(config)?.put_price(params)
}

/// `∂V/∂S`.
pub fn option_delta(
    params: &MarketParams,
    option_type: OptionType,
    config: &PricingConfig,
) -> Result<f64> {
    model(config)?.delta(params, option_type)
}

/// `∂²V/∂S²`; identical for calls and puts.
pub fn option_gamma(
    params: &MarketParams,
    _option_type: OptionType,
    config: &PricingConfig,
) -> Result<f64> {
    model(config)?.gamma(params)
}

/// Calendar-time decay in the unit chosen by [`PricingConfig::theta_convention`].
pub fn option_theta(
    params: &MarketParams,
    option_type: OptionType,
    config: &PricingConfig,
) -> Result<f64> {
    model(config)?.theta(params, option_type)
}

/// `∂V/∂σ`; identical for calls and puts.
pub fn option_vega(
    params: &MarketParams,
    _option_type: OptionType,
    config: &PricingConfig,
) -> Result<f64> {
    model(config)?.vega(params)
}

/// `∂V/∂r`.
pub fn option_rho(
    params: &MarketParams,
    option_type: OptionType,
    config: &PricingConfig,
) -> Result<f64> {
    model(config)?.rho(params, option_type)
}

/// All Greeks from a single evaluation.
pub fn greeks(
    params: &MarketParams,
    option_type: OptionType,
    config: &PricingConfig,
) -> Result<Greeks> {
    model(config)?.greeks(params, option_type)
}

/// Put-call parity residual `C − P − (S·e^(−qτ) − K·e^(−rτ))`.
pub fn parity_residual(params: &MarketParams, config: &PricingConfig) -> Result<f64> {
    model(config)?.parity_residual(params)
}

/// Parse an option type string under `config`'s case and validation rules.
///
/// # Errors
///
/// [`PricingError::InvalidOptionType`] under the strict policy.
pub fn parse_option_type(value: &str, config: &PricingConfig) -> Result<OptionType> {
    model(config)?.resolve_option_type(value)
}
