use crate::color::def::deserialize_rgb;
use crate::foundation::core::{Rgb, Vec3};
use crate::foundation::error::{GradFieldError, GradFieldResult};
use crate::kernel::params::{GradientParams, SmoothstepEdges};
use crate::kernel::weight::WeightKind;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Construction parameters for a [`crate::GradientMaterial`].
///
/// Every field is optional in JSON. Keys are camelCase (`dataPoints`, `colorLow`, ...) with
/// snake_case aliases.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MaterialConfig {
    /// Sample positions. Empty means "not ready yet" and selects placeholder data.
    #[serde(alias = "data_points")]
    pub data_points: Vec<Vec3>,
    /// Sample values, paired with `data_points`.
    #[serde(alias = "data_values")]
    pub data_values: Vec<f64>,
    /// Color at the low end of the range.
    #[serde(alias = "color_low", deserialize_with = "deserialize_rgb")]
    pub color_low: Rgb,
    /// Color at the high end of the range.
    #[serde(alias = "color_high", deserialize_with = "deserialize_rgb")]
    pub color_high: Rgb,
    /// Value mapped to `color_low`.
    #[serde(alias = "min_value")]
    pub min_value: f64,
    /// Value mapped to `color_high`.
    #[serde(alias = "max_value")]
    pub max_value: f64,
    /// Weighting family name; unknown names fall back to inverse-square.
    #[serde(alias = "weight_function")]
    pub weight_function: WeightKind,
    /// Smoothstep edges applied to the normalized value.
    #[serde(alias = "smoothstep_edges")]
    pub smoothstep_edges: SmoothstepEdges,
}

impl Default for MaterialConfig {
    fn default() -> Self {
        let p = GradientParams::default();
        Self {
            data_points: Vec::new(),
            data_values: Vec::new(),
            color_low: p.color_low,
            color_high: p.color_high,
            min_value: p.min_value,
            max_value: p.max_value,
            weight_function: p.weight_kind,
            smoothstep_edges: p.smoothstep_edges,
        }
    }
}

impl MaterialConfig {
    /// Parse a config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> GradFieldResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| GradFieldError::serde(format!("parse material config JSON: {e}")))
    }

    /// Parse a config from a JSON string.
    pub fn from_json_str(s: &str) -> GradFieldResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| GradFieldError::serde(format!("parse material config JSON: {e}")))
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> GradFieldResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            GradFieldError::validation(format!("open material config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Gradient parameters described by this config (not yet validated).
    pub fn params(&self) -> GradientParams {
        GradientParams {
            color_low: self.color_low,
            color_high: self.color_high,
            min_value: self.min_value,
            max_value: self.max_value,
            weight_kind: self.weight_function,
            smoothstep_edges: self.smoothstep_edges,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/material/config.rs"]
mod tests;
