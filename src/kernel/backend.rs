use crate::foundation::core::{Rgb, Vec3};
use crate::foundation::error::{GradFieldError, GradFieldResult};
use crate::kernel::eval::{ColorRamp, evaluate};
use crate::kernel::params::GradientParams;
use std::num::NonZeroUsize;

/// A kernel built for one fixed sample capacity.
///
/// Every evaluation reads exactly `capacity` samples; feeding it a different number of samples
/// requires a new specialization.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpecializedKernel {
    capacity: NonZeroUsize,
    generation: u64,
}

impl SpecializedKernel {
    /// Describe a kernel specialized for `capacity` samples. `generation` identifies the build.
    pub fn new(capacity: NonZeroUsize, generation: u64) -> Self {
        Self {
            capacity,
            generation,
        }
    }

    /// Fixed number of samples each evaluation reads.
    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    /// Build counter; increases with every respecialization of the owning material.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Evaluate one query point.
    ///
    /// Only the first `capacity` entries of `positions` and `values` are read. Fewer than
    /// `capacity` entries in either slice is a kernel error.
    pub fn evaluate(
        &self,
        params: &GradientParams,
        ramp: &ColorRamp,
        positions: &[Vec3],
        values: &[f64],
        query: Vec3,
    ) -> GradFieldResult<Rgb> {
        let n = self.capacity();
        match (positions.get(..n), values.get(..n)) {
            (Some(positions), Some(values)) => {
                Ok(evaluate(params, ramp, positions, values, query))
            }
            _ => Err(GradFieldError::kernel(format!(
                "kernel capacity {n} exceeds supplied samples (positions={}, values={})",
                positions.len(),
                values.len()
            ))),
        }
    }
}

/// Infrastructure that (re)builds kernels for a given capacity.
///
/// A failing backend leaves the owning material without a usable kernel.
pub trait KernelBackend: Send + Sync {
    /// Build a kernel for `capacity` samples.
    fn specialize(
        &mut self,
        capacity: usize,
        generation: u64,
    ) -> GradFieldResult<SpecializedKernel>;

    /// Short backend name used in diagnostics.
    fn name(&self) -> &'static str;
}

/// Available backend kinds.
#[derive(Clone, Copy, Debug, Default)]
pub enum BackendKind {
    /// Portable CPU kernel; specialization only records the loop bound.
    #[default]
    Cpu,
}

/// CPU kernel backend. Never fails for a non-zero capacity.
#[derive(Clone, Copy, Debug, Default)]
pub struct CpuKernelBackend;

impl KernelBackend for CpuKernelBackend {
    fn specialize(
        &mut self,
        capacity: usize,
        generation: u64,
    ) -> GradFieldResult<SpecializedKernel> {
        let capacity = NonZeroUsize::new(capacity)
            .ok_or_else(|| GradFieldError::kernel("cannot specialize a zero-capacity kernel"))?;
        Ok(SpecializedKernel::new(capacity, generation))
    }

    fn name(&self) -> &'static str {
        "cpu"
    }
}

/// Create a kernel backend implementation.
pub fn create_backend(kind: BackendKind) -> Box<dyn KernelBackend> {
    match kind {
        BackendKind::Cpu => Box::new(CpuKernelBackend),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/backend.rs"]
mod tests;
