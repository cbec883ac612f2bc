//! Standard normal distribution: density and two CDF backends.

use crate::pricing::config::CdfMethod;

const INV_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Standard normal density φ(x) = e^(−x²/2) / √(2π).
pub fn norm_pdf(x: f64) -> f64 {
    INV_SQRT_2PI * (-0.5 * x * x).exp()
}

/// Error function approximation (Abramowitz & Stegun 7.1.26).
///
/// Odd by construction; |error| ≤ 1.5e-7.
pub fn erf_approx(x: f64) -> f64 {
    let a1 = 0.254829592;
    let a2 = -0.284496736;
    let a3 = 1.421413741;
    let a4 = -1.453152027;
    let a5 = 1.061405429;
    let p = 0.3275911;

    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();

    let t = 1.0 / (1.0 + p * x);
    let y = 1.0 - (((((a5 * t + a4) * t) + a3) * t + a2) * t + a1) * t * (-x * x).exp();

    sign * y
}

/// Standard normal CDF Φ(d) built on [`erf_approx`].
///
/// Result is in [0, 1] for every finite `d`, and NaN maps to NaN.
/// N(−d) = 1 − N(d) holds up to rounding.
pub fn norm_cdf(d: f64) -> f64 {
    0.5 * (1.0 + erf_approx(d / std::f64::consts::SQRT_2))
}

/// Standard normal CDF via `libm::erf`.
pub fn norm_cdf_exact(d: f64) -> f64 {
    0.5 * (1.0 + libm::erf(d / std::f64::consts::SQRT_2))
}

/// Density and distribution function of N(0, 1).
pub trait NormalDistribution: Send + Sync {
    fn cdf(&self, x: f64) -> f64;

    fn pdf(&self, x: f64) -> f64 {
        norm_pdf(x)
    }
}

/// Polynomial backend, matching the spreadsheet functions
#[derive(Debug, Clone, Copy, Default)]
pub struct PolynomialNormal;

impl NormalDistribution for PolynomialNormal {
    fn cdf(&self, x: f64) -> f64 {
        norm_cdf(x)
    }
}

/// Full-precision backend
#[derive(Debug, Clone, Copy, Default)]
pub struct ErfNormal;

impl NormalDistribution for ErfNormal {
    fn cdf(&self, x: f64) -> f64 {
        norm_cdf_exact(x)
    }
}

/// Resolve a configured method to its backend.
pub fn distribution(method: CdfMethod) -> &'static dyn NormalDistribution {
    match method {
        CdfMethod::AbramowitzStegun => &PolynomialNormal,
        CdfMethod::Erf => &ErfNormal,
    }
}
