use crate::foundation::core::{Rgb, Vec3};
use crate::foundation::error::{GradFieldError, GradFieldResult};
use crate::kernel::backend::{BackendKind, KernelBackend, create_backend};
use crate::kernel::params::GradientParams;
use crate::material::config::MaterialConfig;
use crate::material::snapshot::KernelSnapshot;
use crate::sample::set::{SampleSet, check_paired};
use std::sync::Arc;

/// Outcome of [`GradientMaterial::update_data`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataUpdate {
    /// Same sample count: data replaced, kernel kept.
    InPlace,
    /// Sample count changed (or the kernel was unusable): a new kernel was built.
    Respecialized {
        /// Capacity before the update.
        previous: usize,
        /// Capacity after the update.
        capacity: usize,
    },
}

/// Host-facing owner of the sample set, gradient parameters and specialized kernel.
///
/// Mutations validate first and then publish a fresh [`KernelSnapshot`]; snapshots already handed
/// out keep the inputs they were created with. Changing the sample count respecializes the kernel
/// through the configured [`KernelBackend`]. If that fails the material has no usable kernel until
/// a later [`GradientMaterial::update_data`] succeeds.
pub struct GradientMaterial {
    backend: Box<dyn KernelBackend>,
    current: Arc<KernelSnapshot>,
    next_generation: u64,
    unusable: Option<String>,
}

impl std::fmt::Debug for GradientMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GradientMaterial")
            .field("backend", &self.backend.name())
            .field("capacity", &self.capacity())
            .field("kernel_generation", &self.kernel_generation())
            .field("inputs_version", &self.inputs_version())
            .field("unusable", &self.unusable)
            .finish()
    }
}

impl GradientMaterial {
    /// Build a material on the CPU kernel backend.
    pub fn new(config: &MaterialConfig) -> GradFieldResult<Self> {
        Self::with_backend(config, create_backend(BackendKind::Cpu))
    }

    /// Build a material on a caller-supplied backend.
    ///
    /// Empty `data_points` or `data_values` select [`SampleSet::placeholder`] and log a warning,
    /// so construction never builds a zero-capacity kernel.
    pub fn with_backend(
        config: &MaterialConfig,
        mut backend: Box<dyn KernelBackend>,
    ) -> GradFieldResult<Self> {
        let params = config.params();
        params.validate()?;

        let samples = if config.data_points.is_empty() || config.data_values.is_empty() {
            tracing::warn!(
                points = config.data_points.len(),
                values = config.data_values.len(),
                placeholder_len = SampleSet::PLACEHOLDER_LEN,
                "sample data is empty, using placeholder data"
            );
            SampleSet::placeholder()
        } else {
            SampleSet::new(config.data_points.clone(), config.data_values.clone())?
        };

        let kernel = backend.specialize(samples.len(), 0)?;
        let current = Arc::new(KernelSnapshot::new(kernel, samples, params, 0)?);
        Ok(Self {
            backend,
            current,
            next_generation: 1,
            unusable: None,
        })
    }

    /// Replace the sample data.
    ///
    /// Same length as the current capacity: overwritten in place, no rebuild. Different length:
    /// the kernel is respecialized for the new length (logged at warn level). Mismatched
    /// position/value lengths and empty data are rejected before anything changes.
    pub fn update_data(
        &mut self,
        positions: &[Vec3],
        values: &[f64],
    ) -> GradFieldResult<DataUpdate> {
        check_paired(positions.len(), values.len())?;
        if positions.is_empty() {
            return Err(GradFieldError::validation(
                "update_data requires at least one sample",
            ));
        }

        let previous = self.current.kernel().capacity();
        if self.unusable.is_none() && positions.len() == previous {
            Arc::make_mut(&mut self.current).overwrite_samples(positions, values)?;
            return Ok(DataUpdate::InPlace);
        }

        tracing::warn!(
            previous,
            capacity = positions.len(),
            "sample count changed, kernel respecialization required"
        );
        self.respecialize(positions, values)?;
        Ok(DataUpdate::Respecialized {
            previous,
            capacity: positions.len(),
        })
    }

    #[tracing::instrument(skip(self, positions, values), fields(capacity = positions.len()))]
    fn respecialize(&mut self, positions: &[Vec3], values: &[f64]) -> GradFieldResult<()> {
        let samples = SampleSet::new(positions.to_vec(), values.to_vec())?;
        let generation = self.next_generation;
        self.next_generation += 1;

        let kernel = match self.backend.specialize(samples.len(), generation) {
            Ok(kernel) => kernel,
            Err(e) => {
                tracing::error!(error = %e, generation, "kernel respecialization failed");
                self.unusable = Some(e.to_string());
                return Err(e);
            }
        };

        let version = self.current.inputs_version() + 1;
        let params = *self.current.params();
        self.current = Arc::new(KernelSnapshot::new(kernel, samples, params, version)?);
        self.unusable = None;
        Ok(())
    }

    /// Replace the gradient parameters. Takes effect on the next evaluation, no rebuild.
    pub fn set_params(&mut self, params: GradientParams) -> GradFieldResult<()> {
        params.validate()?;
        Arc::make_mut(&mut self.current).set_params(params);
        Ok(())
    }

    /// Current read-only evaluation inputs.
    pub fn snapshot(&self) -> GradFieldResult<Arc<KernelSnapshot>> {
        self.check_usable()?;
        Ok(Arc::clone(&self.current))
    }

    /// Shade a single query position against the current snapshot.
    pub fn evaluate(&self, query: Vec3) -> GradFieldResult<Rgb> {
        self.check_usable()?;
        Ok(self.current.evaluate(query))
    }

    /// Fixed sample count of the current kernel.
    pub fn capacity(&self) -> usize {
        self.current.kernel().capacity()
    }

    /// Generation of the current kernel; bumps on each successful respecialization.
    pub fn kernel_generation(&self) -> u64 {
        self.current.kernel().generation()
    }

    /// Bumps on every sample or parameter change.
    pub fn inputs_version(&self) -> u64 {
        self.current.inputs_version()
    }

    /// Current gradient parameters.
    pub fn params(&self) -> &GradientParams {
        self.current.params()
    }

    /// Current samples.
    pub fn samples(&self) -> &SampleSet {
        self.current.samples()
    }

    /// `false` after a failed respecialization.
    pub fn is_usable(&self) -> bool {
        self.unusable.is_none()
    }

    fn check_usable(&self) -> GradFieldResult<()> {
        match &self.unusable {
            None => Ok(()),
            Some(reason) => Err(GradFieldError::kernel(format!(
                "kernel unavailable until respecialization succeeds: {reason}"
            ))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/material/gradient.rs"]
mod tests;
