//! Per-point interpolation and coloring.
//!
//! Everything here is a pure function of its arguments; callers run it independently for every
//! query point.

use crate::color::hsv::{Hsv, hsv_to_rgb, mix_hsv, rgb_to_hsv};
use crate::foundation::core::{Rgb, Vec3};
use crate::foundation::math::smoothstep;
use crate::kernel::params::GradientParams;
use crate::kernel::weight::WeightKind;

/// Two-color gradient pre-converted to HSV.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorRamp {
    low: Hsv,
    high: Hsv,
}

impl ColorRamp {
    /// Build a ramp between two RGB endpoints.
    pub fn new(low: Rgb, high: Rgb) -> Self {
        Self {
            low: rgb_to_hsv(low),
            high: rgb_to_hsv(high),
        }
    }

    /// Ramp for the endpoint colors of `params`.
    pub fn from_params(params: &GradientParams) -> Self {
        Self::new(params.color_low, params.color_high)
    }

    /// Color at parameter `t` (HSV channel-wise blend, no hue wraparound).
    pub fn at(&self, t: f64) -> Rgb {
        hsv_to_rgb(mix_hsv(self.low, self.high, t))
    }
}

#[derive(Default)]
struct WeightedSum {
    weighted: f64,
    total: f64,
    coincident_sum: f64,
    coincident_count: u32,
    overflowed: bool,
}

impl WeightedSum {
    #[inline]
    fn push(&mut self, value: f64, distance: f64, weight: f64) {
        if !weight.is_finite() {
            // Only an exact hit is a true singularity; anything else overflowed the weight.
            if distance == 0.0 {
                self.coincident_sum += value;
                self.coincident_count += 1;
            } else {
                self.overflowed = true;
            }
            return;
        }
        self.weighted += value * weight;
        self.total += weight;
    }

    fn resolve(&self) -> Option<f64> {
        if self.coincident_count > 0 {
            return Some(self.coincident_sum / f64::from(self.coincident_count));
        }
        if self.overflowed || !self.total.is_finite() || !self.weighted.is_finite() {
            return None;
        }
        if self.total > 0.0 {
            return Some(self.weighted / self.total);
        }
        None
    }
}

/// Distance-weighted average of `values` as seen from `query`.
///
/// Reads every pair in `positions`/`values` (callers slice to the kernel capacity). A query that
/// coincides exactly with a sample under an inverse family returns that sample's value. If the
/// weights underflow to zero or overflow the sum, it is redone relative to the nearest sample,
/// which keeps the ratios.
pub fn interpolate(kind: WeightKind, query: Vec3, positions: &[Vec3], values: &[f64]) -> f64 {
    let mut acc = WeightedSum::default();
    let mut nearest = f64::INFINITY;
    for (p, &v) in positions.iter().zip(values) {
        let d = query.distance(*p);
        nearest = nearest.min(d);
        acc.push(v, d, kind.weight(d));
    }
    if let Some(v) = acc.resolve() {
        return v;
    }
    if !(nearest > 0.0 && nearest.is_finite()) {
        return f64::NAN;
    }

    let mut acc = WeightedSum::default();
    for (p, &v) in positions.iter().zip(values) {
        let d = query.distance(*p);
        acc.push(v, d, kind.relative_weight(d, nearest));
    }
    // The nearest sample weighs 1 here, so only non-finite values can leave this unresolved.
    acc.resolve().unwrap_or(acc.weighted / acc.total)
}

/// Gradient parameter in `[0, 1]` for an interpolated value: range normalization, then smoothstep.
pub fn gradient_t(params: &GradientParams, interpolated: f64) -> f64 {
    let edges = params.smoothstep_edges;
    smoothstep(edges.min, edges.max, params.normalize(interpolated))
}

/// Full per-point routine: interpolate, normalize, smooth, blend.
pub fn evaluate(
    params: &GradientParams,
    ramp: &ColorRamp,
    positions: &[Vec3],
    values: &[f64],
    query: Vec3,
) -> Rgb {
    let interpolated = interpolate(params.weight_kind, query, positions, values);
    ramp.at(gradient_t(params, interpolated))
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/eval.rs"]
mod tests;
