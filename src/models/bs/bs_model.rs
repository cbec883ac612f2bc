//! Configured Black-Scholes-Merton model.
//!
//! [`BlackScholesModel`] wraps the raw formulas in [`crate::models::bs`] with
//! a [`PricingConfig`]: the day count, the normal CDF backend, the validation
//! policy and the theta unit. Under [`ValidationPolicy::Strict`] every input
//! is checked first and `days = 0` is evaluated as the expiry payoff; under
//! [`ValidationPolicy::Permissive`] the formulas run unchecked, exactly like
//! the spreadsheet functions.

use crate::error::{PricingError, Result};
use crate::market_params::MarketParams;
use crate::models::bs::{self, expiry, greeks};
use crate::models::normal::{self, NormalDistribution};
use crate::models::traits::PricingModel;
use crate::pricing::config::{PricingConfig, ThetaConvention, ValidationPolicy};
use crate::pricing::types::{Greeks, OptionType};
use crate::validate::validate_market_params;

/// Time to maturity after validation
#[derive(Debug, Clone, Copy, PartialEq)]
enum Horizon {
    Expired,
    Live(f64),
}

#[derive(Debug, Clone, Default)]
pub struct BlackScholesModel {
    config: PricingConfig,
}

impl BlackScholesModel {
    pub fn new(config: PricingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Model with [`PricingConfig::reference`], backing the spreadsheet functions.
    pub fn reference() -> Self {
        Self {
            config: PricingConfig::reference(),
        }
    }

    fn normal(&self) -> &'static dyn NormalDistribution {
        normal::distribution(self.config.cdf_method)
    }

    fn horizon(&self, params: &MarketParams) -> Result<Horizon> {
        let tau = params.years(self.config.days_per_year);
        match self.config.validation {
            ValidationPolicy::Permissive => Ok(Horizon::Live(tau)),
            ValidationPolicy::Strict => {
                validate_market_params(params)?;
                if tau == 0.0 {
                    Ok(Horizon::Expired)
                } else {
                    Ok(Horizon::Live(tau))
                }
            }
        }
    }

    fn live_horizon(&self, params: &MarketParams) -> Result<f64> {
        match self.horizon(params)? {
            Horizon::Live(tau) => Ok(tau),
            Horizon::Expired => Err(PricingError::Domain {
                parameter: "days",
                value: params.days,
                reason: "must be positive to evaluate d1/d2",
            }),
        }
    }

    fn scale_theta(&self, theta: f64) -> f64 {
        match self.config.theta_convention {
            ThetaConvention::PerYear => theta,
            ThetaConvention::PerDay => theta / self.config.days_per_year,
        }
    }

    pub fn d1(&self, p: &MarketParams) -> Result<f64> {
        let tau = self.live_horizon(p)?;
        Ok(bs::d1(p.spot, p.strike, p.volatility, p.rate, p.dividend, tau))
    }

    pub fn d2(&self, p: &MarketParams) -> Result<f64> {
        let tau = self.live_horizon(p)?;
        Ok(bs::d2(p.spot, p.strike, p.volatility, p.rate, p.dividend, tau))
    }

    pub fn call_price(&self, p: &MarketParams) -> Result<f64> {
        match self.horizon(p)? {
            Horizon::Expired => Ok(expiry::call_payoff(p.spot, p.strike)),
            Horizon::Live(tau) => Ok(bs::call_price_with(
                self.normal(),
                p.spot,
                p.strike,
                p.volatility,
                p.rate,
                p.dividend,
                tau,
            )),
        }
    }

    pub fn put_price(&self, p: &MarketParams) -> Result<f64> {
        match self.horizon(p)? {
            Horizon::Expired => Ok(expiry::put_payoff(p.spot, p.strike)),
            Horizon::Live(tau) => Ok(bs::put_price_with(
                self.normal(),
                p.spot,
                p.strike,
                p.volatility,
                p.rate,
                p.dividend,
                tau,
            )),
        }
    }

    pub fn delta(&self, p: &MarketParams, option_type: OptionType) -> Result<f64> {
        match self.horizon(p)? {
            Horizon::Expired => Ok(expiry::delta(p.spot, p.strike, option_type)),
            Horizon::Live(tau) => Ok(greeks::delta(
                self.normal(),
                p.spot,
                p.strike,
                p.volatility,
                p.rate,
                p.dividend,
                tau,
                option_type,
            )),
        }
    }

    /// Gamma does not depend on the option type.
    pub fn gamma(&self, p: &MarketParams) -> Result<f64> {
        match self.horizon(p)? {
            Horizon::Expired => Ok(0.0),
            Horizon::Live(tau) => Ok(greeks::gamma(
                self.normal(),
                p.spot,
                p.strike,
                p.volatility,
                p.rate,
                p.dividend,
                tau,
            )),
        }
    }

    /// Vega does not depend on the option type.
    pub fn vega(&self, p: &MarketParams) -> Result<f64> {
        match self.horizon(p)? {
            Horizon::Expired => Ok(0.0),
            Horizon::Live(tau) => Ok(greeks::vega(
                self.normal(),
                p.spot,
                p.strike,
                p.volatility,
                p.rate,
                p.dividend,
                tau,
            )),
        }
    }

    pub fn theta(&self, p: &MarketParams, option_type: OptionType) -> Result<f64> {
        match self.horizon(p)? {
            Horizon::Expired => Ok(0.0),
            Horizon::Live(tau) => Ok(self.scale_theta(greeks::theta(
                self.normal(),
                p.spot,
                p.strike,
                p.volatility,
                p.rate,
                p.dividend,
                tau,
                option_type,
            ))),
        }
    }

    pub fn rho(&self, p: &MarketParams, option_type: OptionType) -> Result<f64> {
        match self.horizon(p)? {
            Horizon::Expired => Ok(0.0),
            Horizon::Live(tau) => Ok(greeks::rho(
                self.normal(),
                p.spot,
                p.strike,
                p.volatility,
                p.rate,
                p.dividend,
                tau,
                option_type,
            )),
        }
    }

    /// Call − Put − (S·e^(−qτ) − K·e^(−rτ)).
    pub fn parity_residual(&self, p: &MarketParams) -> Result<f64> {
        match self.horizon(p)? {
            Horizon::Expired => Ok(0.0),
            Horizon::Live(tau) => Ok(bs::parity_residual(
                self.normal(),
                p.spot,
                p.strike,
                p.volatility,
                p.rate,
                p.dividend,
                tau,
            )),
        }
    }
}

impl PricingModel for BlackScholesModel {
    fn model_name(&self) -> &str {
        "black-scholes-merton"
    }

    fn resolve_option_type(&self, value: &str) -> Result<OptionType> {
        match OptionType::parse_with(value, self.config.case_sensitive_option_type) {
            Ok(option_type) => Ok(option_type),
            Err(err) => match self.config.validation {
                ValidationPolicy::Strict => Err(err),
                ValidationPolicy::Permissive => {
                    tracing::warn!(
                        option_type = value,
                        "unrecognized option type, pricing as Call"
                    );
                    Ok(OptionType::Call)
                }
            },
        }
    }

    fn price(&self, params: &MarketParams, option_type: OptionType) -> Result<f64> {
        match option_type {
            OptionType::Call => self.call_price(params),
            OptionType::Put => self.put_price(params),
        }
    }

    fn greeks(&self, p: &MarketParams, option_type: OptionType) -> Result<Greeks> {
        match self.horizon(p)? {
            Horizon::Expired => Ok(Greeks {
                delta: expiry::delta(p.spot, p.strike, option_type),
                ..Greeks::default()
            }),
            Horizon::Live(tau) => {
                let mut g = greeks::all_greeks(
                    self.normal(),
                    p.spot,
                    p.strike,
                    p.volatility,
                    p.rate,
                    p.dividend,
                    tau,
                    option_type,
                );
                g.theta = self.scale_theta(g.theta);
                Ok(g)
            }
        }
    }
}
