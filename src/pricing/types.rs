use std::fmt;
use std::str::FromStr;

use crate::error::{PricingError, Result};

/// Side of a plain-vanilla European option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// Parse "Call" / "Put", optionally ignoring ASCII case.
    pub fn parse_with(value: &str, case_sensitive: bool) -> Result<Self> {
        let matches = |name: &str| {
            if case_sensitive {
                value == name
            } else {
                value.eq_ignore_ascii_case(name)
            }
        };

        if matches("Call") {
            Ok(Self::Call)
        } else if matches("Put") {
            Ok(Self::Put)
        } else {
            Err(PricingError::InvalidOptionType {
                value: value.to_string(),
            })
        }
    }

    /// Returns +1.0 for calls and -1.0 for puts.
    pub fn sign(self) -> f64 {
        match self {
            Self::Call => 1.0,
            Self::Put => -1.0,
        }
    }
}

impl FromStr for OptionType {
    type Err = PricingError;

    /// Exact, case-sensitive match on "Call" or "Put".
    fn from_str(s: &str) -> Result<Self> {
        Self::parse_with(s, true)
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Call => f.write_str("Call"),
            Self::Put => f.write_str("Put"),
        }
    }
}

/// All first-order sensitivities plus gamma for one option.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks {
    /// ∂V/∂S
    pub delta: f64,
    /// ∂²V/∂S²
    pub gamma: f64,
    /// Time decay, annualized or per day depending on configuration
    pub theta: f64,
    /// ∂V/∂σ, per unit of volatility
    pub vega: f64,
    /// ∂V/∂r, per unit of rate
    pub rho: f64,
}

/// Rates shared by every row of a batch
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedParameters {
    pub r: f64,
    pub q: f64,
}

impl Default for FixedParameters {
    fn default() -> Self {
        Self { r: 0.0, q: 0.0 }
    }
}

/// One row of a batch pricing request
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionQuote {
    /// Option type: "Call" or "Put"
    pub option_type: String,
    /// Strike price
    pub strike_price: f64,
    /// Underlying asset price
    pub underlying_price: f64,
    /// Annualized volatility (as decimal, e.g., 0.25 for 25%)
    pub volatility: f64,
    /// Calendar days to maturity
    pub days_to_exp: f64,
}

/// Outcome of pricing one [`OptionQuote`].
///
/// Exactly one of `model_price` / `error` is populated.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingResult {
    pub option_type: String,
    pub strike_price: f64,
    pub underlying_price: f64,
    pub days_to_exp: f64,
    pub model_price: Option<f64>,
    pub greeks: Option<Greeks>,
    /// Rendered error when the row could not be priced
    pub error: Option<String>,
}

impl PricingResult {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}
