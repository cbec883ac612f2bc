//! Closed-form Black-Scholes-Merton sensitivities.
//!
//! Theta is the annualized calendar-time decay (usually negative for long
//! options). Vega and rho are per unit change of σ and r, not per percent.

#![allow(non_snake_case, clippy::too_many_arguments)]

use super::{d1, d2};
use crate::models::normal::NormalDistribution;
use crate::pricing::types::{Greeks, OptionType};

/// `∂V/∂S`. For puts, `e^(−qT)·(N(d1) − 1)`.
pub fn delta(
    n: &dyn NormalDistribution,
    S: f64,
    K: f64,
    sigma: f64,
    r: f64,
    q: f64,
    T: f64,
    option_type: OptionType,
) -> f64 {
    let eqt = (-q * T).exp();
    let base = eqt * n.cdf(d1(S, K, sigma, r, q, T));
    match option_type {
        OptionType::Call => base,
        OptionType::Put => base - eqt,
    }
}

/// `φ(d1)·e^(−qT) / (S·σ·√T)`; the same for calls and puts.
pub fn gamma(
    n: &dyn NormalDistribution,
    S: f64,
    K: f64,
    sigma: f64,
    r: f64,
    q: f64,
    T: f64,
) -> f64 {
    let d1 = d1(S, K, sigma, r, q, T);
    n.pdf(d1) * (-q * T).exp() / (S * sigma * T.sqrt())
}

/// `S·e^(−qT)·φ(d1)·√T`; the same for calls and puts.
pub fn vega(
    n: &dyn NormalDistribution,
    S: f64,
    K: f64,
    sigma: f64,
    r: f64,
    q: f64,
    T: f64,
) -> f64 {
    let d1 = d1(S, K, sigma, r, q, T);
    S * (-q * T).exp() * n.pdf(d1) * T.sqrt()
}

pub fn theta(
    n: &dyn NormalDistribution,
    S: f64,
    K: f64,
    sigma: f64,
    r: f64,
    q: f64,
    T: f64,
    option_type: OptionType,
) -> f64 {
    let d1 = d1(S, K, sigma, r, q, T);
    let d2 = d1 - sigma * T.sqrt();
    let discounted_spot = S * (-q * T).exp();
    let discounted_strike = K * (-r * T).exp();
    let decay = -discounted_spot * n.pdf(d1) * sigma / (2.0 * T.sqrt());
    match option_type {
        OptionType::Call => {
            decay - r * discounted_strike * n.cdf(d2) + q * discounted_spot * n.cdf(d1)
        }
        OptionType::Put => {
            decay + r * discounted_strike * n.cdf(-d2) - q * discounted_spot * n.cdf(-d1)
        }
    }
}

pub fn rho(
    n: &dyn NormalDistribution,
    S: f64,
    K: f64,
    sigma: f64,
    r: f64,
    q: f64,
    T: f64,
    option_type: OptionType,
) -> f64 {
    let d2 = d2(S, K, sigma, r, q, T);
    let sign = option_type.sign();
    sign * K * T * (-r * T).exp() * n.cdf(sign * d2)
}

/// Every sensitivity from one evaluation of d1/d2 and the discount factors.
pub fn all_greeks(
    n: &dyn NormalDistribution,
    S: f64,
    K: f64,
    sigma: f64,
    r: f64,
    q: f64,
    T: f64,
    option_type: OptionType,
) -> Greeks {
    let sqrt_t = T.sqrt();
    let d1 = d1(S, K, sigma, r, q, T);
    let d2 = d1 - sigma * sqrt_t;
    let eqt = (-q * T).exp();
    let ert = (-r * T).exp();
    let pdf_d1 = n.pdf(d1);
    let decay = -S * eqt * pdf_d1 * sigma / (2.0 * sqrt_t);

    let (delta, theta, rho) = match option_type {
        OptionType::Call => {
            let nd1 = n.cdf(d1);
            let nd2 = n.cdf(d2);
            (
                eqt * nd1,
                decay - r * K * ert * nd2 + q * S * eqt * nd1,
                K * T * ert * nd2,
            )
        }
        OptionType::Put => {
            let nd1 = n.cdf(-d1);
            let nd2 = n.cdf(-d2);
            (
                eqt * (n.cdf(d1) - 1.0),
                decay + r * K * ert * nd2 - q * S * eqt * nd1,
                -K * T * ert * nd2,
            )
        }
    };

    Greeks {
        delta,
        gamma: pdf_d1 * eqt / (S * sigma * sqrt_t),
        theta,
        vega: S * eqt * pdf_d1 * sqrt_t,
        rho,
    }
}
