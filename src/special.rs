//! Special functions used by the density kernels.

/// `0.5 * ln(2π)`.
pub(crate) const HALF_LN_TWO_PI: f64 = 0.918_938_533_204_672_8;

/// Natural log of the Gamma function, `ln Γ(x)`, for `x > 0`.
///
/// Returns NaN (never panics) when `x` is NaN, non-positive, or infinite, so
/// that a bad shape parameter poisons the downstream density instead of
/// aborting the whole curve.
///
/// `ln Γ(1) = ln Γ(2) = 0` exactly, so the uniform Beta(1, 1) density
/// evaluates to exactly `1.0`.
///
/// ```rust
/// use bandit_curves::ln_gamma;
///
/// assert_eq!(ln_gamma(1.0), 0.0);
/// assert!((ln_gamma(5.0) - 24f64.ln()).abs() < 1e-12);
/// assert!(ln_gamma(-1.0).is_nan());
/// ```
#[must_use]
pub fn ln_gamma(x: f64) -> f64 {
    if !x.is_finite() || x <= 0.0 {
        return f64::NAN;
    }
    // statrs lands a few ulps off zero here.
    if x == 1.0 || x == 2.0 {
        return 0.0;
    }
    statrs::function::gamma::ln_gamma(x)
}
