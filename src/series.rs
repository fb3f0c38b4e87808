//! Prior/posterior curve series: the rendering-ready output of the engine.
//!
//! [`build_curve_series`] evaluates every arm's prior and posterior density
//! on a fixed grid and returns one [`CurvePoint`] per grid value, plus one
//! color per arm.
//!
//! Policy:
//! - Structural problems (no arms, mismatched list lengths under
//!   [`LengthPolicy::Strict`], an invalid grid) are rejected before any
//!   density is evaluated.  There are no partial results.
//! - Numeric problems are not errors: NaN/∞ densities are stored as-is and
//!   left to the renderer.
//! - Output order is stable: points by grid index; within a point,
//!   posterior series (by arm index) then prior series (by arm index).

use std::fmt;
use std::sync::Arc;

use crate::{
    assign_colors, ArmDistribution, ArmParams, DistributionFamily, Error, Result, Rgb, SampleGrid,
};

/// Which list a series came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SeriesRole {
    Prior,
    Posterior,
}

impl SeriesRole {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Prior => "Prior",
            Self::Posterior => "Posterior",
        }
    }
}

impl fmt::Display for SeriesRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of one curve within a chart.
///
/// Renders as `"{role}-{index}_{name}"`, e.g. `Posterior-0_A`.  The index
/// keeps keys unique when two arms share a name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SeriesKey {
    role: SeriesRole,
    index: usize,
    name: String,
    label: String,
}

impl SeriesKey {
    pub fn new(role: SeriesRole, index: usize, name: impl Into<String>) -> Self {
        let name = name.into();
        let label = format!("{role}-{index}_{name}");
        Self {
            role,
            index,
            name,
            label,
        }
    }

    pub fn role(&self) -> SeriesRole {
        self.role
    }

    /// Position of the arm in its list.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The rendered key.
    pub fn as_str(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for SeriesKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SeriesKey {
    fn serialize<S: serde::Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        s.serialize_str(&self.label)
    }
}

/// How to treat prior/posterior lists of different lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LengthPolicy {
    /// Both lists must be non-empty and equally long.  The prior count sizes
    /// the color table.
    #[default]
    Strict,
    /// Lists may differ (e.g. posteriors only).  At least one arm overall is
    /// required; the color table covers the longer list so every series has
    /// a color.
    Lenient,
}

/// Configuration for curve-series construction.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurveConfig {
    /// Grid for Beta charts.
    pub beta_grid: SampleGrid,
    /// Grid for Normal charts.
    pub normal_grid: SampleGrid,
    pub length_policy: LengthPolicy,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            beta_grid: SampleGrid::BETA,
            normal_grid: SampleGrid::NORMAL,
            length_policy: LengthPolicy::Strict,
        }
    }
}

impl CurveConfig {
    pub fn grid_for(&self, family: DistributionFamily) -> SampleGrid {
        match family {
            DistributionFamily::Beta => self.beta_grid,
            DistributionFamily::Normal => self.normal_grid,
        }
    }

    /// Validate list shapes and return the color-table size.
    fn arm_count(&self, priors: usize, posteriors: usize) -> Result<usize> {
        match self.length_policy {
            LengthPolicy::Strict => {
                if priors != posteriors {
                    return Err(Error::LengthMismatch(priors, posteriors));
                }
                if priors == 0 {
                    return Err(Error::Empty);
                }
                Ok(priors)
            }
            LengthPolicy::Lenient => {
                let n = priors.max(posteriors);
                if n == 0 {
                    return Err(Error::Empty);
                }
                Ok(n)
            }
        }
    }
}

/// One sampled x value with every series' density at that x.
///
/// Series keys are shared across all points of a [`CurveSeries`].
#[derive(Debug, Clone, PartialEq)]
pub struct CurvePoint {
    pub x: f64,
    keys: Arc<[SeriesKey]>,
    values: Vec<f64>,
}

impl CurvePoint {
    /// Density of the series labelled `key`, if present.
    pub fn get(&self, key: &str) -> Option<f64> {
        self.keys
            .iter()
            .position(|k| k.as_str() == key)
            .map(|i| self.values[i])
    }

    /// `(key, density)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&SeriesKey, f64)> + '_ {
        self.keys.iter().zip(self.values.iter().copied())
    }

    /// Densities in key order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Serializes as one flat chart record: `{"x": .., "<key>": .., ...}`.
/// Non-finite densities become `null`.
#[cfg(feature = "serde")]
impl serde::Serialize for CurvePoint {
    fn serialize<S: serde::Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut m = s.serialize_map(Some(self.values.len() + 1))?;
        m.serialize_entry("x", &self.x)?;
        for (k, v) in self.iter() {
            let v = if v.is_finite() { Some(v) } else { None };
            m.serialize_entry(k.as_str(), &v)?;
        }
        m.end()
    }
}

/// A complete, rendering-ready chart: points plus per-arm colors.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CurveSeries {
    family: DistributionFamily,
    grid: SampleGrid,
    #[cfg_attr(feature = "serde", serde(skip))]
    keys: Arc<[SeriesKey]>,
    points: Vec<CurvePoint>,
    colors: Vec<Rgb>,
}

impl CurveSeries {
    pub fn family(&self) -> DistributionFamily {
        self.family
    }

    pub fn grid(&self) -> SampleGrid {
        self.grid
    }

    /// Series keys in insertion order.
    pub fn keys(&self) -> &[SeriesKey] {
        &self.keys
    }

    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// Colors by arm index.
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Color of the arm behind `key` (shared by its prior and posterior).
    pub fn color_for(&self, key: &SeriesKey) -> Option<Rgb> {
        self.colors.get(key.index).copied()
    }

    /// One series as `(x, density)` pairs.
    pub fn series(&self, key: &str) -> Option<Vec<(f64, f64)>> {
        let col = self.keys.iter().position(|k| k.as_str() == key)?;
        Some(self.points.iter().map(|p| (p.x, p.values[col])).collect())
    }

    /// Trapezoid-rule integral of one series over the grid.
    ///
    /// Non-finite samples propagate into the result.
    pub fn integrate(&self, key: &str) -> Option<f64> {
        let s = self.series(key)?;
        Some(
            s.windows(2)
                .map(|w| 0.5 * (w[1].0 - w[0].0) * (w[0].1 + w[1].1))
                .sum(),
        )
    }

    pub fn into_points(self) -> Vec<CurvePoint> {
        self.points
    }
}

/// Build a curve series with the default configuration.
///
/// ```rust
/// use bandit_curves::{build_curve_series, BetaParams};
///
/// let priors = [BetaParams::new("A", 1.0, 1.0), BetaParams::new("B", 1.0, 1.0)];
/// let posteriors = [BetaParams::new("A", 4.0, 1.0), BetaParams::new("B", 2.0, 3.0)];
/// let chart = build_curve_series(&priors, &posteriors).unwrap();
///
/// assert_eq!(chart.points().len(), 100);
/// assert_eq!(chart.colors().len(), 2);
/// assert_eq!(chart.points()[50].get("Prior-0_A"), Some(1.0));
/// ```
pub fn build_curve_series<P: ArmDistribution>(
    priors: &[P],
    posteriors: &[P],
) -> Result<CurveSeries> {
    build_curve_series_with(&CurveConfig::default(), priors, posteriors)
}

/// Build a curve series with an explicit configuration.
pub fn build_curve_series_with<P: ArmDistribution>(
    cfg: &CurveConfig,
    priors: &[P],
    posteriors: &[P],
) -> Result<CurveSeries> {
    let grid = cfg.grid_for(P::FAMILY);
    let arm_count = match validate(cfg, &grid, priors.len(), posteriors.len()) {
        Ok(n) => n,
        Err(e) => {
            #[cfg(feature = "tracing")]
            {
                let family = P::FAMILY;
                tracing::warn!(
                    %family,
                    priors = priors.len(),
                    posteriors = posteriors.len(),
                    error = %e,
                    "rejected curve series input"
                );
            }
            return Err(e);
        }
    };

    let keys: Arc<[SeriesKey]> = posteriors
        .iter()
        .enumerate()
        .map(|(i, p)| SeriesKey::new(SeriesRole::Posterior, i, p.name()))
        .chain(
            priors
                .iter()
                .enumerate()
                .map(|(i, p)| SeriesKey::new(SeriesRole::Prior, i, p.name())),
        )
        .collect();

    let points: Vec<CurvePoint> = grid
        .xs()
        .map(|x| {
            let values = posteriors
                .iter()
                .chain(priors.iter())
                .map(|p| p.density(x))
                .collect();
            CurvePoint {
                x,
                keys: Arc::clone(&keys),
                values,
            }
        })
        .collect();

    #[cfg(feature = "tracing")]
    {
        let family = P::FAMILY;
        tracing::debug!(
            %family,
            priors = priors.len(),
            posteriors = posteriors.len(),
            points = points.len(),
            "built curve series"
        );
    }

    Ok(CurveSeries {
        family: P::FAMILY,
        grid,
        keys,
        points,
        colors: assign_colors(arm_count),
    })
}

fn validate(
    cfg: &CurveConfig,
    grid: &SampleGrid,
    priors: usize,
    posteriors: usize,
) -> Result<usize> {
    grid.validate()?;
    cfg.arm_count(priors, posteriors)
}

/// Build a curve series from family-tagged arms.
///
/// The family is taken from the first arm (priors first, then posteriors)
/// and every other arm must match it.
pub fn build_curve_series_dyn(
    cfg: &CurveConfig,
    priors: &[ArmParams],
    posteriors: &[ArmParams],
) -> Result<CurveSeries> {
    let family = priors
        .first()
        .or_else(|| posteriors.first())
        .map(ArmParams::family)
        .ok_or(Error::Empty)?;

    match family {
        DistributionFamily::Beta => {
            let pr = collect_family(priors, 0, family, ArmParams::as_beta)?;
            let po = collect_family(posteriors, priors.len(), family, ArmParams::as_beta)?;
            build_curve_series_with(cfg, &pr, &po)
        }
        DistributionFamily::Normal => {
            let pr = collect_family(priors, 0, family, ArmParams::as_normal)?;
            let po = collect_family(posteriors, priors.len(), family, ArmParams::as_normal)?;
            build_curve_series_with(cfg, &pr, &po)
        }
    }
}

/// Narrow tagged arms to one family.  `offset` positions errors across the
/// concatenated prior + posterior input.
fn collect_family<'a, T>(
    arms: &'a [ArmParams],
    offset: usize,
    expected: DistributionFamily,
    narrow: fn(&'a ArmParams) -> Option<&'a T>,
) -> Result<Vec<&'a T>> {
    arms.iter()
        .enumerate()
        .map(|(i, a)| {
            narrow(a).ok_or(Error::FamilyMismatch {
                expected,
                found: a.family(),
                index: offset + i,
            })
        })
        .collect()
}
