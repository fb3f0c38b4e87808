//! Rendering hints for an area chart of a [`CurveSeries`].
//!
//! Each arm is drawn twice in its own color: the posterior as a solid,
//! filled area and the prior as a dashed, unfilled outline.  Posteriors are
//! listed first so priors draw on top.

use crate::{CurveSeries, Rgb, SeriesKey, SeriesRole, AXIS_TICKS};

/// Fill opacity of a posterior area.
pub const POSTERIOR_FILL_OPACITY: f64 = 0.3;
/// Fill opacity of a prior outline.
pub const PRIOR_FILL_OPACITY: f64 = 0.1;
/// Dash pattern `(dash, gap)` of a prior outline.
pub const PRIOR_DASH: (u32, u32) = (5, 5);

/// Stroke/fill description of one series.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SeriesStyle {
    pub key: SeriesKey,
    pub stroke: Rgb,
    /// `None` draws an outline only.
    pub fill: Option<Rgb>,
    pub fill_opacity: f64,
    /// `None` draws a solid stroke.
    pub dash: Option<(u32, u32)>,
}

impl SeriesStyle {
    pub fn for_key(key: SeriesKey, color: Rgb) -> Self {
        match key.role() {
            SeriesRole::Posterior => Self {
                key,
                stroke: color,
                fill: Some(color),
                fill_opacity: POSTERIOR_FILL_OPACITY,
                dash: None,
            },
            SeriesRole::Prior => Self {
                key,
                stroke: color,
                fill: None,
                fill_opacity: PRIOR_FILL_OPACITY,
                dash: Some(PRIOR_DASH),
            },
        }
    }
}

/// Axis and series layout for one chart.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChartLayout {
    pub x_domain: (f64, f64),
    pub x_ticks: Vec<f64>,
    pub series: Vec<SeriesStyle>,
}

impl ChartLayout {
    /// Derive the layout of `chart`, in the chart's key order.
    pub fn from_series(chart: &CurveSeries) -> Self {
        let grid = chart.grid();
        let series = chart
            .keys()
            .iter()
            .map(|k| {
                let color = chart.color_for(k).unwrap_or(Rgb::new(0, 0, 0));
                SeriesStyle::for_key(k.clone(), color)
            })
            .collect();
        Self {
            x_domain: grid.domain(),
            x_ticks: grid.ticks(AXIS_TICKS),
            series,
        }
    }
}

/// Tooltip text for a density value: two decimals.
///
/// Non-finite values render as Rust formats them (`NaN`, `inf`).
///
/// ```rust
/// use bandit_curves::format_density;
///
/// assert_eq!(format_density(1.23456), "1.23");
/// assert_eq!(format_density(0.0), "0.00");
/// ```
#[must_use]
pub fn format_density(v: f64) -> String {
    format!("{v:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{build_curve_series, BetaParams, NormalParams};

    #[test]
    fn beta_layout() {
        let arms = vec![BetaParams::new("A", 1.0, 1.0), BetaParams::new("B", 2.0, 2.0)];
        let chart = build_curve_series(&arms, &arms).unwrap();
        let layout = ChartLayout::from_series(&chart);

        assert_eq!(layout.x_domain, (0.0, 1.0));
        assert_eq!(layout.x_ticks.len(), 10);
        assert_eq!(layout.series.len(), 4);

        let post = &layout.series[0];
        assert_eq!(post.key.as_str(), "Posterior-0_A");
        assert_eq!(post.fill, Some(chart.colors()[0]));
        assert_eq!(post.dash, None);
        assert_eq!(post.fill_opacity, 0.3);

        let prior = &layout.series[2];
        assert_eq!(prior.key.as_str(), "Prior-0_A");
        assert_eq!(prior.stroke, post.stroke);
        assert_eq!(prior.fill, None);
        assert_eq!(prior.dash, Some((5, 5)));
    }

    #[test]
    fn normal_layout_ticks() {
        let arms = vec![NormalParams::new("A", 0.0, 1.0)];
        let chart = build_curve_series(&arms, &arms).unwrap();
        let layout = ChartLayout::from_series(&chart);
        assert_eq!(layout.x_domain, (-5.0, 5.0));
        assert_eq!(layout.x_ticks[0], -5.0);
        assert_eq!(layout.x_ticks[9], 4.0);
    }

    #[test]
    fn density_formatting() {
        assert_eq!(format_density(0.398_942), "0.40");
        assert_eq!(format_density(12.0), "12.00");
        assert_eq!(format_density(f64::INFINITY), "inf");
        assert_eq!(format_density(f64::NAN), "NaN");
    }
}
