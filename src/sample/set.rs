use crate::foundation::core::Vec3;
use crate::foundation::error::{GradFieldError, GradFieldResult};

/// One anchor: a known scalar value at a model-space position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    /// Anchor position.
    pub position: Vec3,
    /// Scalar value measured at `position`.
    pub value: f64,
}

/// Non-empty, paired collection of sample positions and values.
///
/// `positions[i]` always belongs to `values[i]`. Order carries no meaning for interpolation.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleSet {
    positions: Vec<Vec3>,
    values: Vec<f64>,
}

impl SampleSet {
    /// Number of samples in [`SampleSet::placeholder`].
    pub const PLACEHOLDER_LEN: usize = 10;

    /// Build a validated set. Lengths must match and be non-zero.
    pub fn new(positions: Vec<Vec3>, values: Vec<f64>) -> GradFieldResult<Self> {
        check_paired(positions.len(), values.len())?;
        if positions.is_empty() {
            return Err(GradFieldError::validation("sample set must be non-empty"));
        }
        Ok(Self { positions, values })
    }

    /// Build a set from individual samples.
    pub fn from_samples(samples: impl IntoIterator<Item = Sample>) -> GradFieldResult<Self> {
        let (positions, values) = samples
            .into_iter()
            .map(|s| (s.position, s.value))
            .unzip();
        Self::new(positions, values)
    }

    /// Deterministic stand-in data: positions `(i, 0, 0)` carrying value `i` for `i` in `0..10`.
    pub fn placeholder() -> Self {
        let positions = (0..Self::PLACEHOLDER_LEN)
            .map(|i| Vec3::new(i as f64, 0.0, 0.0))
            .collect();
        let values = (0..Self::PLACEHOLDER_LEN).map(|i| i as f64).collect();
        Self { positions, values }
    }

    /// Number of samples (never zero).
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Always `false`; present for API symmetry with collections.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Sample positions.
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Sample values, paired index-wise with [`SampleSet::positions`].
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Iterate over paired samples.
    pub fn iter(&self) -> impl Iterator<Item = Sample> + '_ {
        self.positions
            .iter()
            .zip(&self.values)
            .map(|(&position, &value)| Sample { position, value })
    }

    /// Axis-aligned bounding box `(min, max)` of the sample positions.
    pub fn bounds(&self) -> (Vec3, Vec3) {
        let first = self.positions[0];
        self.positions
            .iter()
            .skip(1)
            .fold((first, first), |(lo, hi), &p| (lo.min(p), hi.max(p)))
    }

    /// Overwrite the data in place. The new data must have exactly the current length.
    pub(crate) fn overwrite(&mut self, positions: &[Vec3], values: &[f64]) -> GradFieldResult<()> {
        check_paired(positions.len(), values.len())?;
        if positions.len() != self.len() {
            return Err(GradFieldError::validation(format!(
                "in-place overwrite needs {} samples, got {}",
                self.len(),
                positions.len()
            )));
        }
        self.positions.copy_from_slice(positions);
        self.values.copy_from_slice(values);
        Ok(())
    }
}

pub(crate) fn check_paired(positions: usize, values: usize) -> GradFieldResult<()> {
    if positions != values {
        return Err(GradFieldError::validation(format!(
            "sample positions and values must have equal length (positions={positions}, values={values})"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/sample/set.rs"]
mod tests;
