//! Continuous colormap and per-arm color assignment.
//!
//! The palette is the 11-stop ColorBrewer "Spectral" scheme, interpolated with
//! a uniform cubic B-spline per RGB channel.  This reproduces d3's
//! `interpolateSpectral` to the nearest integer channel value.

use std::fmt;

/// An 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    const fn from_hex(v: u32) -> Self {
        Self::new((v >> 16) as u8, (v >> 8) as u8, v as u8)
    }

    /// CSS functional notation, e.g. `rgb(158, 1, 66)`.
    pub fn css(&self) -> String {
        self.to_string()
    }

    /// Lowercase hex notation, e.g. `#9e0142`.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Spectral control points, red → yellow → blue.
const SPECTRAL: [Rgb; 11] = [
    Rgb::from_hex(0x9e0142),
    Rgb::from_hex(0xd53e4f),
    Rgb::from_hex(0xf46d43),
    Rgb::from_hex(0xfdae61),
    Rgb::from_hex(0xfee08b),
    Rgb::from_hex(0xffffbf),
    Rgb::from_hex(0xe6f598),
    Rgb::from_hex(0xabdda4),
    Rgb::from_hex(0x66c2a5),
    Rgb::from_hex(0x3288bd),
    Rgb::from_hex(0x5e4fa2),
];

/// Sample the Spectral colormap at `t ∈ [0, 1]`.
///
/// `t` is clamped; NaN maps to `0`.
///
/// ```rust
/// use bandit_curves::{spectral, Rgb};
///
/// assert_eq!(spectral(0.0), Rgb::new(158, 1, 66));
/// assert_eq!(spectral(0.5).css(), "rgb(251, 248, 176)");
/// ```
#[must_use]
pub fn spectral(t: f64) -> Rgb {
    let r = SPECTRAL.map(|c| f64::from(c.r));
    let g = SPECTRAL.map(|c| f64::from(c.g));
    let b = SPECTRAL.map(|c| f64::from(c.b));
    Rgb::new(
        to_channel(basis_spline(&r, t)),
        to_channel(basis_spline(&g, t)),
        to_channel(basis_spline(&b, t)),
    )
}

/// One color per arm: `colormap(i / arm_count)` for `i in 0..arm_count`.
///
/// Deterministic: the same `arm_count` always yields the same colors in the
/// same order.  Index `i` is used for both the prior and posterior curve of
/// arm `i`.
#[must_use]
pub fn assign_colors(arm_count: usize) -> Vec<Rgb> {
    assign_colors_with(arm_count, spectral)
}

/// [`assign_colors`] over an arbitrary colormap.
pub fn assign_colors_with<F>(arm_count: usize, colormap: F) -> Vec<Rgb>
where
    F: Fn(f64) -> Rgb,
{
    (0..arm_count)
        .map(|i| colormap(i as f64 / arm_count as f64))
        .collect()
}

/// Uniform cubic B-spline through `values`, with the end segments extended
/// by reflection (`2·v₁ - v₂`).
fn basis_spline(values: &[f64], t: f64) -> f64 {
    let n = values.len() - 1;
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let i = if t >= 1.0 {
        n - 1
    } else {
        ((t * n as f64).floor() as usize).min(n - 1)
    };
    let v1 = values[i];
    let v2 = values[i + 1];
    let v0 = if i > 0 { values[i - 1] } else { 2.0 * v1 - v2 };
    let v3 = if i < n - 1 {
        values[i + 2]
    } else {
        2.0 * v2 - v1
    };
    basis((t - i as f64 / n as f64) * n as f64, v0, v1, v2, v3)
}

fn basis(t1: f64, v0: f64, v1: f64, v2: f64, v3: f64) -> f64 {
    let t2 = t1 * t1;
    let t3 = t2 * t1;
    ((1.0 - 3.0 * t1 + 3.0 * t2 - t3) * v0
        + (4.0 - 6.0 * t2 + 3.0 * t3) * v1
        + (1.0 + 3.0 * t1 + 3.0 * t2 - 3.0 * t3) * v2
        + t3 * v3)
        / 6.0
}

fn to_channel(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    v.round().clamp(0.0, 255.0) as u8
}
