//! Structural input errors.
//!
//! Numeric degeneracy (log of zero, Gamma of a non-positive argument, zero
//! sigma) is never reported here: it flows through the curves as NaN/∞.
//! These variants cover input *shape* only, and are raised before any density
//! is evaluated.

use thiserror::Error;

use crate::DistributionFamily;

/// Errors raised while validating curve-series input.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No arms were supplied where at least one is required.
    #[error("at least one arm is required")]
    Empty,

    /// Prior and posterior lists disagree in length under strict validation.
    #[error("length mismatch: {0} priors vs {1} posteriors")]
    LengthMismatch(usize, usize),

    /// A tagged arm list mixes distribution families.
    #[error("family mismatch: expected {expected}, found {found} at position {index}")]
    FamilyMismatch {
        expected: DistributionFamily,
        found: DistributionFamily,
        index: usize,
    },

    /// A configuration value is outside its domain.
    #[error("domain error: {0}")]
    Domain(&'static str),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
