//! gradfield renders a continuous color field from a sparse set of scalar samples.
//!
//! Each sample pairs a 3D anchor position with a value. For every query position the kernel
//! takes a distance-weighted average of all sample values, normalizes it against a configured
//! range, eases it with a smoothstep and blends two endpoint colors in HSV space.
//!
//! # Pipeline overview
//!
//! 1. **Configure**: [`MaterialConfig`] (JSON-loadable) describes samples and gradient parameters.
//! 2. **Specialize**: [`GradientMaterial`] builds a [`SpecializedKernel`] whose fixed capacity is
//!    the sample count. Changing the count later respecializes the kernel.
//! 3. **Snapshot**: [`GradientMaterial::snapshot`] hands out an immutable [`KernelSnapshot`].
//! 4. **Shade**: [`shade_points`] / [`render_grid`] evaluate the snapshot for many points, in
//!    parallel when asked to.
//!
//! Evaluation is a pure function of `(query, samples, parameters)`; the same inputs always give
//! the same color.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod color;
mod foundation;
mod kernel;
mod material;
mod render;
mod sample;

pub use color::hsv::{Hsv, hsv_to_rgb, mix_hsv, rgb_to_hsv};
pub use foundation::core::{Rgb, Rgba8, Vec3};
pub use foundation::error::{GradFieldError, GradFieldResult};
pub use foundation::math::smoothstep;
pub use kernel::backend::{
    BackendKind, CpuKernelBackend, KernelBackend, SpecializedKernel, create_backend,
};
pub use kernel::eval::{ColorRamp, evaluate, gradient_t, interpolate};
pub use kernel::params::{GradientParams, SmoothstepEdges};
pub use kernel::weight::WeightKind;
pub use material::config::MaterialConfig;
pub use material::gradient::{DataUpdate, GradientMaterial};
pub use material::snapshot::KernelSnapshot;
pub use render::grid::{FrameRGBA, Plane, PlaneGrid, render_grid};
pub use render::pipeline::{ShadeThreading, shade_points};
pub use sample::set::{Sample, SampleSet};
