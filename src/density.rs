//! Log-domain density kernels for the Beta and Normal families.
//!
//! Every kernel is evaluated in log space and exponentiated last: `Γ(a)` for
//! shape parameters in the hundreds overflows `f64`, its logarithm does not.
//!
//! None of these functions validate their arguments. Degenerate input flows
//! through IEEE arithmetic:
//! - `beta_density(0, 0.5, b)` is `+∞` (`(a-1)·ln 0 = +∞`).
//! - `beta_density(0, 2, b)` is `0` (`exp(-∞)`).
//! - a non-positive shape parameter gives NaN via [`ln_gamma`].
//! - `sigma = 0` in the Normal kernels is not special-cased.

use crate::special::HALF_LN_TWO_PI;
use crate::ln_gamma;

/// Log-density of `Beta(a, b)` at `x`.
///
/// `ln B⁻¹(a, b) + (a-1)·ln x + (b-1)·ln(1-x)`, where
/// `ln B⁻¹(a, b) = ln Γ(a+b) - ln Γ(a) - ln Γ(b)`.
#[must_use]
pub fn ln_beta_density(x: f64, a: f64, b: f64) -> f64 {
    let ln_norm = ln_gamma(a + b) - ln_gamma(a) - ln_gamma(b);
    ln_norm + (a - 1.0) * x.ln() + (b - 1.0) * (1.0 - x).ln()
}

/// Density of `Beta(a, b)` at `x`.
///
/// ```rust
/// use bandit_curves::beta_density;
///
/// assert_eq!(beta_density(0.5, 1.0, 1.0), 1.0);
/// assert_eq!(beta_density(0.0, 2.0, 2.0), 0.0);
/// assert_eq!(beta_density(0.0, 0.5, 2.0), f64::INFINITY);
/// ```
#[must_use]
pub fn beta_density(x: f64, a: f64, b: f64) -> f64 {
    ln_beta_density(x, a, b).exp()
}

/// Log-density of `Normal(mu, sigma)` at `x`.
#[must_use]
pub fn ln_normal_density(x: f64, mu: f64, sigma: f64) -> f64 {
    let z = (x - mu) / sigma;
    -HALF_LN_TWO_PI - sigma.ln() - 0.5 * z * z
}

/// Density of `Normal(mu, sigma)` at `x`.
///
/// ```rust
/// use bandit_curves::normal_density;
///
/// let peak = normal_density(0.0, 0.0, 1.0);
/// assert!((peak - 0.398_942_280_401_432_7).abs() < 1e-12);
/// ```
#[must_use]
pub fn normal_density(x: f64, mu: f64, sigma: f64) -> f64 {
    ln_normal_density(x, mu, sigma).exp()
}
