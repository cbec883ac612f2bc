#[cfg(feature = "serde")]
use std::path::Path;

#[cfg(feature = "serde")]
use anyhow::Context;

use crate::error::{PricingError, Result};

/// Which approximation of the standard normal CDF to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CdfMethod {
    /// Abramowitz & Stegun 7.1.26 polynomial, |error| ≤ 1.5e-7
    #[default]
    AbramowitzStegun,
    /// `libm::erf`, accurate to machine precision
    Erf,
}

/// How the typed API treats inputs outside the model domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ValidationPolicy {
    /// Reject bad inputs and unknown option types with a [`PricingError`].
    /// Zero days evaluates the expiry payoff.
    #[default]
    Strict,
    /// No checks. NaN and infinity propagate, unknown option types are
    /// priced as calls.
    Permissive,
}

/// Unit in which theta is reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ThetaConvention {
    #[default]
    PerYear,
    /// Annualized theta divided by `days_per_year`
    PerDay,
}

/// Settings shared by every pricing call
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingConfig {
    /// Day count used to turn days into years
    #[cfg_attr(feature = "serde", serde(default = "default_days_per_year"))]
    pub days_per_year: f64,

    #[cfg_attr(feature = "serde", serde(default))]
    pub cdf_method: CdfMethod,

    #[cfg_attr(feature = "serde", serde(default))]
    pub validation: ValidationPolicy,

    /// Require "Call"/"Put" exactly as spelled
    #[cfg_attr(feature = "serde", serde(default = "default_case_sensitive"))]
    pub case_sensitive_option_type: bool,

    #[cfg_attr(feature = "serde", serde(default))]
    pub theta_convention: ThetaConvention,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            days_per_year: default_days_per_year(),
            cdf_method: CdfMethod::default(),
            validation: ValidationPolicy::default(),
            case_sensitive_option_type: default_case_sensitive(),
            theta_convention: ThetaConvention::default(),
        }
    }
}

impl PricingConfig {
    /// Hardened defaults: inputs validated, option type matched exactly
    pub fn strict() -> Self {
        Self::default()
    }

    /// Bit-for-bit the behaviour of the spreadsheet functions: no
    /// validation, unknown option types fall back to Call
    pub fn reference() -> Self {
        Self {
            validation: ValidationPolicy::Permissive,
            ..Self::default()
        }
    }

    /// Strict validation with the full-precision erf backend
    pub fn precise() -> Self {
        Self {
            cdf_method: CdfMethod::Erf,
            ..Self::default()
        }
    }

    /// Check internal consistency of the settings.
    pub fn validate(&self) -> Result<()> {
        if !self.days_per_year.is_finite() || self.days_per_year <= 0.0 {
            return Err(PricingError::Config {
                message: format!(
                    "days_per_year must be positive and finite, got {}",
                    self.days_per_year
                ),
            });
        }
        Ok(())
    }

    /// Parse a TOML document. Missing keys take their defaults.
    #[cfg(feature = "serde")]
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source).map_err(|e| PricingError::Config {
            message: e.to_string(),
        })?;
        config.validate()?;
        tracing::debug!(?config, "loaded pricing config");
        Ok(config)
    }

    /// Read and parse a TOML file.
    #[cfg(feature = "serde")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml_str(&source)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }
}

fn default_days_per_year() -> f64 {
    365.0
}

fn default_case_sensitive() -> bool {
    true
}
