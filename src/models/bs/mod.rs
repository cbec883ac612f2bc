// Closed-form Black-Scholes-Merton with a continuous dividend yield.
// Everything here works on raw scalars with T already in years and performs
// no validation: σ = 0 or T = 0 produce whatever IEEE arithmetic gives.

pub mod bs_model;
pub mod greeks;

use crate::models::normal::{NormalDistribution, PolynomialNormal};

/// Standardized drift-adjusted log-moneyness:
/// `[ln(S/K) + (r − q + σ²/2)·T] / (σ·√T)`.
#[allow(non_snake_case)]
pub fn d1(S: f64, K: f64, sigma: f64, r: f64, q: f64, T: f64) -> f64 {
    ((S / K).ln() + (r - q + 0.5 * sigma * sigma) * T) / (sigma * T.sqrt())
}

/// `d1 − σ·√T`.
#[allow(non_snake_case)]
pub fn d2(S: f64, K: f64, sigma: f64, r: f64, q: f64, T: f64) -> f64 {
    d1(S, K, sigma, r, q, T) - sigma * T.sqrt()
}

/// Price of a European call under Black-Scholes-Merton.
#[allow(non_snake_case)]
pub fn call_price_with(
    n: &dyn NormalDistribution,
    S: f64,
    K: f64,
    sigma: f64,
    r: f64,
    q: f64,
    T: f64,
) -> f64 {
    let discounted_strike = K * (-r * T).exp();
    let discounted_spot = S * (-q * T).exp();
    discounted_spot * n.cdf(d1(S, K, sigma, r, q, T))
        - discounted_strike * n.cdf(d2(S, K, sigma, r, q, T))
}

/// Price of a European put under Black-Scholes-Merton.
#[allow(non_snake_case)]
pub fn put_price_with(
    n: &dyn NormalDistribution,
    S: f64,
    K: f64,
    sigma: f64,
    r: f64,
    q: f64,
    T: f64,
) -> f64 {
    let discounted_strike = K * (-r * T).exp();
    let discounted_spot = S * (-q * T).exp();
    discounted_strike * n.cdf(-d2(S, K, sigma, r, q, T))
        - discounted_spot * n.cdf(-d1(S, K, sigma, r, q, T))
}

/// Call price with the polynomial normal CDF.
#[allow(non_snake_case)]
pub fn bs_call_price(S: f64, K: f64, sigma: f64, r: f64, q: f64, T: f64) -> f64 {
    call_price_with(&PolynomialNormal, S, K, sigma, r, q, T)
}

/// Put price with the polynomial normal CDF.
#[allow(non_snake_case)]
pub fn bs_put_price(S: f64, K: f64, sigma: f64, r: f64, q: f64, T: f64) -> f64 {
    put_price_with(&PolynomialNormal, S, K, sigma, r, q, T)
}

/// `Call − Put − (S·e^(−qT) − K·e^(−rT))`; zero when put-call parity holds.
#[allow(non_snake_case)]
pub fn parity_residual(
    n: &dyn NormalDistribution,
    S: f64,
    K: f64,
    sigma: f64,
    r: f64,
    q: f64,
    T: f64,
) -> f64 {
    let forward_value = S * (-q * T).exp() - K * (-r * T).exp();
    call_price_with(n, S, K, sigma, r, q, T) - put_price_with(n, S, K, sigma, r, q, T)
        - forward_value
}

/// Payoff values at T = 0, where the closed form degenerates to 0/0.
pub mod expiry {
    use crate::pricing::types::OptionType;

    #[allow(non_snake_case)]
    pub fn call_payoff(S: f64, K: f64) -> f64 {
        (S - K).max(0.0)
    }

    #[allow(non_snake_case)]
    pub fn put_payoff(S: f64, K: f64) -> f64 {
        (K - S).max(0.0)
    }

    /// Limit of delta as T → 0: a step at the strike, ±½ exactly at the money.
    #[allow(non_snake_case)]
    pub fn delta(S: f64, K: f64, option_type: OptionType) -> f64 {
        let call_delta = if S > K {
            1.0
        } else if S < K {
            0.0
        } else {
            0.5
        };
        match option_type {
            OptionType::Call => call_delta,
            OptionType::Put => call_delta - 1.0,
        }
    }
}
