//! Market inputs for a single option evaluation. The spreadsheet-style
//! functions take the six numbers positionally; the typed API bundles them
//! into [`MarketParams`] so they can be validated once and passed around by
//! value.

/// Spot, strike, volatility, rates and time to maturity for one option.
///
/// All rates are annualized decimals (`0.05` for 5%). Time to maturity is a
/// count of calendar days and is converted to years with
/// [`MarketParams::years`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketParams {
    /// Underlying spot price (S)
    pub spot: f64,
    /// Strike price (K)
    pub strike: f64,
    /// Annualized volatility (σ)
    pub volatility: f64,
    /// Continuously compounded risk-free rate (r)
    pub rate: f64,
    /// Continuous dividend yield (q)
    pub dividend: f64,
    /// Calendar days to maturity
    pub days: f64,
}

impl MarketParams {
    /// Build parameters in spreadsheet argument order:
    /// price, strike, volatility, interest, dividend, days.
    pub fn new(
        spot: f64,
        strike: f64,
        volatility: f64,
        rate: f64,
        dividend: f64,
        days: f64,
    ) -> Self {
        Self {
            spot,
            strike,
            volatility,
            rate,
            dividend,
            days,
        }
    }

    /// Time to maturity in years (τ = days / days_per_year).
    pub fn years(&self, days_per_year: f64) -> f64 {
        self.days / days_per_year
    }

    /// Same inputs with a different spot, used for bumping and plotting.
    pub fn with_spot(self, spot: f64) -> Self {
        Self { spot, ..self }
    }
}
