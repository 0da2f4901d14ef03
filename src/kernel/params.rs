use crate::foundation::core::Rgb;
use crate::foundation::error::{GradFieldError, GradFieldResult};
use crate::kernel::weight::WeightKind;
use serde::{Deserialize, Serialize};

/// Lower/upper edge of the smoothstep applied to the normalized value.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SmoothstepEdges {
    /// Lower edge; normalized values at or below map to 0.
    pub min: f64,
    /// Upper edge; normalized values at or above map to 1.
    pub max: f64,
}

impl Default for SmoothstepEdges {
    fn default() -> Self {
        Self { min: 0.0, max: 1.0 }
    }
}

/// Everything the kernel needs besides the samples themselves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientParams {
    /// Color at normalized value 0.
    pub color_low: Rgb,
    /// Color at normalized value 1.
    pub color_high: Rgb,
    /// Interpolated value that maps to normalized 0.
    pub min_value: f64,
    /// Interpolated value that maps to normalized 1.
    pub max_value: f64,
    /// Distance weighting family.
    pub weight_kind: WeightKind,
    /// Smoothstep edges applied after normalization.
    pub smoothstep_edges: SmoothstepEdges,
}

impl Default for GradientParams {
    fn default() -> Self {
        Self {
            color_low: Rgb::from_hex(0x0000ff),
            color_high: Rgb::from_hex(0xff0000),
            min_value: 0.0,
            max_value: 1.0,
            weight_kind: WeightKind::default(),
            smoothstep_edges: SmoothstepEdges::default(),
        }
    }
}

impl GradientParams {
    /// Reject parameter sets that would divide by zero or propagate non-finite values.
    ///
    /// An inverted range (`min_value > max_value`) is allowed and flips the gradient.
    pub fn validate(&self) -> GradFieldResult<()> {
        check_color("color_low", self.color_low)?;
        check_color("color_high", self.color_high)?;

        if !self.min_value.is_finite() || !self.max_value.is_finite() {
            return Err(GradFieldError::config(
                "min_value and max_value must be finite",
            ));
        }
        if self.min_value == self.max_value {
            return Err(GradFieldError::config(format!(
                "min_value and max_value must differ (both are {})",
                self.min_value
            )));
        }

        let edges = self.smoothstep_edges;
        if !edges.min.is_finite() || !edges.max.is_finite() {
            return Err(GradFieldError::config("smoothstep edges must be finite"));
        }
        if edges.min > edges.max {
            return Err(GradFieldError::config(format!(
                "smoothstep edges must satisfy min <= max (min={}, max={})",
                edges.min, edges.max
            )));
        }
        Ok(())
    }

    /// Map an interpolated value into `[0, 1]` against the configured range.
    #[inline]
    pub fn normalize(&self, value: f64) -> f64 {
        (value - self.min_value) / (self.max_value - self.min_value)
    }
}

fn check_color(field: &str, c: Rgb) -> GradFieldResult<()> {
    let in_unit = |x: f64| (0.0..=1.0).contains(&x);
    if in_unit(c.r) && in_unit(c.g) && in_unit(c.b) {
        return Ok(());
    }
    Err(GradFieldError::config(format!(
        "{field} channels must be within [0, 1], got ({}, {}, {})",
        c.r, c.g, c.b
    )))
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/params.rs"]
mod tests;
