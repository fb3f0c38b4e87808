//! Fixed x-sampling grids.
//!
//! Grids are configuration constants, never derived from the arm parameters:
//! prior and posterior curves in one chart must share the same x values.

use crate::{DistributionFamily, Error, Result};

/// Points in the default Beta grid.
pub const BETA_GRID_POINTS: usize = 100;
/// Points in the default Normal grid.
pub const NORMAL_GRID_POINTS: usize = 1000;

/// Number of x-axis ticks in a chart layout.
pub const AXIS_TICKS: usize = 10;

/// A half-open grid `[start, start + span)` sampled at `points` equal steps.
///
/// The `i`-th value is `start + i * span / points`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SampleGrid {
    pub start: f64,
    pub span: f64,
    pub points: usize,
}

impl SampleGrid {
    /// `[0, 1)` in 100 steps of 0.01.
    pub const BETA: Self = Self {
        start: 0.0,
        span: 1.0,
        points: BETA_GRID_POINTS,
    };

    /// `[-5, 5)` in 1000 steps of 0.01.
    pub const NORMAL: Self = Self {
        start: -5.0,
        span: 10.0,
        points: NORMAL_GRID_POINTS,
    };

    pub fn for_family(family: DistributionFamily) -> Self {
        match family {
            DistributionFamily::Beta => Self::BETA,
            DistributionFamily::Normal => Self::NORMAL,
        }
    }

    /// Reject grids that cannot produce a chart.
    pub fn validate(&self) -> Result<()> {
        if self.points == 0 {
            return Err(Error::Domain("grid must have at least one point"));
        }
        if !(self.start.is_finite() && self.span.is_finite()) || self.span <= 0.0 {
            return Err(Error::Domain("grid start/span must be finite with span > 0"));
        }
        Ok(())
    }

    /// Step between consecutive samples.
    pub fn step(&self) -> f64 {
        self.span / self.points as f64
    }

    /// The `i`-th sample.
    #[inline]
    pub fn x(&self, i: usize) -> f64 {
        self.start + (i as f64 * self.span) / self.points as f64
    }

    /// All samples in order.
    pub fn xs(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        (0..self.points).map(move |i| self.x(i))
    }

    /// Axis domain `[start, start + span]`.
    pub fn domain(&self) -> (f64, f64) {
        (self.start, self.start + self.span)
    }

    /// `n` evenly spaced axis ticks starting at `start`.
    pub fn ticks(&self, n: usize) -> Vec<f64> {
        (0..n)
            .map(|i| self.start + (i as f64 * self.span) / n as f64)
            .collect()
    }
}
