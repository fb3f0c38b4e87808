//! Arm parameter types.
//!
//! An arm's role (prior or posterior) is not a field: it is decided by which
//! list the arm is passed in.  Arm identity is positional.  The index of an
//! arm in its list determines both its color and its series key, so
//! reordering a list between renders changes both.

use std::fmt;

use crate::{beta_density, ln_beta_density, ln_normal_density, normal_density, SampleGrid};

/// Distribution family of an arm's belief.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DistributionFamily {
    /// Beta(α, β) over `[0, 1]`, for binary-outcome arms.
    Beta,
    /// Normal(μ, σ) over the reals, for real-valued-outcome arms.
    Normal,
}

impl DistributionFamily {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beta => "beta",
            Self::Normal => "normal",
        }
    }
}

impl fmt::Display for DistributionFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Common interface over one family's arm parameters.
///
/// The curve builder is generic over this trait, so a chart is statically
/// single-family.  Use [`ArmParams`] when the family is only known at runtime.
pub trait ArmDistribution {
    /// Family of this parameter set.
    const FAMILY: DistributionFamily;

    /// Display name of the arm.
    fn name(&self) -> &str;

    /// Log-density at `x`.
    fn ln_density(&self, x: f64) -> f64;

    /// Density at `x`.
    fn density(&self, x: f64) -> f64 {
        self.ln_density(x).exp()
    }

    /// Default sampling grid for this family.
    fn default_grid() -> SampleGrid {
        SampleGrid::for_family(Self::FAMILY)
    }
}

impl<T: ArmDistribution + ?Sized> ArmDistribution for &T {
    const FAMILY: DistributionFamily = T::FAMILY;

    fn name(&self) -> &str {
        (**self).name()
    }

    fn ln_density(&self, x: f64) -> f64 {
        (**self).ln_density(x)
    }

    fn density(&self, x: f64) -> f64 {
        (**self).density(x)
    }
}

/// Beta parameters for one arm (`alpha > 0`, `beta > 0`).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BetaParams {
    pub name: String,
    pub alpha: f64,
    pub beta: f64,
}

impl BetaParams {
    pub fn new(name: impl Into<String>, alpha: f64, beta: f64) -> Self {
        Self {
            name: name.into(),
            alpha,
            beta,
        }
    }

    /// Posterior mean `α / (α + β)`.
    pub fn mean(&self) -> f64 {
        self.alpha / (self.alpha + self.beta)
    }
}

impl ArmDistribution for BetaParams {
    const FAMILY: DistributionFamily = DistributionFamily::Beta;

    fn name(&self) -> &str {
        &self.name
    }

    fn ln_density(&self, x: f64) -> f64 {
        ln_beta_density(x, self.alpha, self.beta)
    }

    fn density(&self, x: f64) -> f64 {
        beta_density(x, self.alpha, self.beta)
    }
}

/// Normal parameters for one arm (`sigma > 0`).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NormalParams {
    pub name: String,
    pub mu: f64,
    pub sigma: f64,
}

impl NormalParams {
    pub fn new(name: impl Into<String>, mu: f64, sigma: f64) -> Self {
        Self {
            name: name.into(),
            mu,
            sigma,
        }
    }
}

impl ArmDistribution for NormalParams {
    const FAMILY: DistributionFamily = DistributionFamily::Normal;

    fn name(&self) -> &str {
        &self.name
    }

    fn ln_density(&self, x: f64) -> f64 {
        ln_normal_density(x, self.mu, self.sigma)
    }

    fn density(&self, x: f64) -> f64 {
        normal_density(x, self.mu, self.sigma)
    }
}

/// Arm parameters tagged with their family.
///
/// With the `serde` feature this reads the API shape with an explicit tag:
///
/// ```json
/// {"distributionFamily": "beta", "name": "A", "alpha": 1.0, "beta": 1.0}
/// {"distributionFamily": "normal", "name": "B", "mu": 0.0, "sigma": 1.0}
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "distributionFamily", rename_all = "lowercase")
)]
pub enum ArmParams {
    Beta(BetaParams),
    Normal(NormalParams),
}

impl ArmParams {
    pub fn family(&self) -> DistributionFamily {
        match self {
            Self::Beta(_) => DistributionFamily::Beta,
            Self::Normal(_) => DistributionFamily::Normal,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Beta(p) => &p.name,
            Self::Normal(p) => &p.name,
        }
    }

    pub fn as_beta(&self) -> Option<&BetaParams> {
        match self {
            Self::Beta(p) => Some(p),
            Self::Normal(_) => None,
        }
    }

    pub fn as_normal(&self) -> Option<&NormalParams> {
        match self {
            Self::Normal(p) => Some(p),
            Self::Beta(_) => None,
        }
    }
}

impl From<BetaParams> for ArmParams {
    fn from(p: BetaParams) -> Self {
        Self::Beta(p)
    }
}

impl From<NormalParams> for ArmParams {
    fn from(p: NormalParams) -> Self {
        Self::Normal(p)
    }
}
