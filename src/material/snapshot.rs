use crate::foundation::core::{Rgb, Vec3};
use crate::foundation::error::{GradFieldError, GradFieldResult};
use crate::kernel::backend::SpecializedKernel;
use crate::kernel::eval::{ColorRamp, evaluate};
use crate::kernel::params::GradientParams;
use crate::sample::set::SampleSet;

/// Immutable inputs for one batch of evaluations.
///
/// A snapshot pairs a specialized kernel with samples of exactly its capacity, so every
/// evaluation through it is well defined. Hosts clone the `Arc` handed out by
/// [`crate::GradientMaterial::snapshot`] and shade against it while the material is free to
/// publish newer snapshots.
#[derive(Clone, Debug)]
pub struct KernelSnapshot {
    kernel: SpecializedKernel,
    samples: SampleSet,
    params: GradientParams,
    ramp: ColorRamp,
    inputs_version: u64,
}

impl KernelSnapshot {
    pub(crate) fn new(
        kernel: SpecializedKernel,
        samples: SampleSet,
        params: GradientParams,
        inputs_version: u64,
    ) -> GradFieldResult<Self> {
        if samples.len() != kernel.capacity() {
            return Err(GradFieldError::kernel(format!(
                "kernel capacity {} does not match sample count {}",
                kernel.capacity(),
                samples.len()
            )));
        }
        Ok(Self {
            kernel,
            samples,
            ramp: ColorRamp::from_params(&params),
            params,
            inputs_version,
        })
    }

    /// Shade one query position.
    #[inline]
    pub fn evaluate(&self, query: Vec3) -> Rgb {
        // Sample count equals kernel capacity for the lifetime of a snapshot.
        evaluate(
            &self.params,
            &self.ramp,
            self.samples.positions(),
            self.samples.values(),
            query,
        )
    }

    /// Kernel this snapshot evaluates with.
    pub fn kernel(&self) -> &SpecializedKernel {
        &self.kernel
    }

    /// Samples visible to evaluations.
    pub fn samples(&self) -> &SampleSet {
        &self.samples
    }

    /// Gradient parameters visible to evaluations.
    pub fn params(&self) -> &GradientParams {
        &self.params
    }

    /// Counter bumped on every sample or parameter change.
    pub fn inputs_version(&self) -> u64 {
        self.inputs_version
    }

    pub(crate) fn overwrite_samples(
        &mut self,
        positions: &[Vec3],
        values: &[f64],
    ) -> GradFieldResult<()> {
        self.samples.overwrite(positions, values)?;
        self.inputs_version += 1;
        Ok(())
    }

    pub(crate) fn set_params(&mut self, params: GradientParams) {
        self.ramp = ColorRamp::from_params(&params);
        self.params = params;
        self.inputs_version += 1;
    }
}
