//! `bandit-curves`: deterministic prior/posterior density curves for bandit
//! experiment charts.
//!
//! Designed for the "show me what the experiment believes" panel of a
//! Multi-Armed Bandit dashboard: each arm has a prior and a posterior belief
//! (Beta for binary rewards, Normal for real-valued rewards), and the chart
//! overlays both per arm on a shared x-axis.
//!
//! **Pipeline:**
//! - Density kernels: [`ln_gamma`], [`ln_beta_density`] / [`beta_density`],
//!   [`ln_normal_density`] / [`normal_density`].  Evaluated in log space.
//! - Grids: [`SampleGrid::BETA`] (100 points over `[0, 1)`) and
//!   [`SampleGrid::NORMAL`] (1000 points over `[-5, 5)`).
//! - Series: [`build_curve_series`] / [`build_curve_series_with`] (static
//!   family via [`ArmDistribution`]) and [`build_curve_series_dyn`]
//!   (family-tagged [`ArmParams`]).
//! - Colors: [`spectral`] colormap, [`assign_colors`] per arm.
//! - Layout: [`ChartLayout`] (axis ticks, per-series stroke/fill) and
//!   [`format_density`] for tooltips.
//!
//! **Goals:**
//! - **Deterministic**: identical input → identical output, value for value.
//! - **Never panics on numbers**: NaN/∞ densities flow through to the
//!   renderer.  Only malformed input shapes return [`Error`].
//! - **Stateless**: every call owns its intermediates; concurrent calls from
//!   several chart panels are safe.
//!
//! **Arm identity is positional.**  An arm's index in its list fixes its
//! color and its series key (`Posterior-0_A`).  Reordering or inserting arms
//! between renders reassigns both; keep list order stable across renders.
//!
//! **Non-goals:**
//! - Updating beliefs from observations (the backend does that; this crate
//!   consumes its output parameters).
//! - Drawing.  Output is data for a charting component.
//!
//! # Example
//!
//! ```rust
//! use bandit_curves::{build_curve_series, BetaParams, ChartLayout};
//!
//! let priors = vec![BetaParams::new("A", 1.0, 1.0), BetaParams::new("B", 1.0, 1.0)];
//! let posteriors = vec![BetaParams::new("A", 4.0, 1.0), BetaParams::new("B", 2.0, 3.0)];
//!
//! let chart = build_curve_series(&priors, &posteriors).unwrap();
//! let skewed = |x: usize| chart.points()[x].get("Posterior-0_A").unwrap();
//! assert!(skewed(90) > skewed(10));
//!
//! let layout = ChartLayout::from_series(&chart);
//! assert_eq!(layout.series.len(), 4);
//! ```

#![forbid(unsafe_code)]

mod error;
pub use error::*;

mod special;
pub use special::ln_gamma;

mod density;
pub use density::*;

mod params;
pub use params::*;

mod grid;
pub use grid::*;

mod colormap;
pub use colormap::*;

mod series;
pub use series::*;

mod chart;
pub use chart::*;
