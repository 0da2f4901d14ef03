use super::*;
use crate::kernel::backend::{CpuKernelBackend, SpecializedKernel};

fn two_point_config() -> MaterialConfig {
    MaterialConfig {
        data_points: vec![Vec3::new(0.0, 0.0, 0.0), Vec3::new(10.0, 0.0, 0.0)],
        data_values: vec![0.0, 10.0],
        max_value: 10.0,
        ..MaterialConfig::default()
    }
}

/// Fails the specialization calls numbered `fail_from..fail_until` (0-based).
struct FlakyBackend {
    calls: usize,
    fail_from: usize,
    fail_until: usize,
}

impl KernelBackend for FlakyBackend {
    fn specialize(
        &mut self,
        capacity: usize,
        generation: u64,
    ) -> GradFieldResult<SpecializedKernel> {
        let call = self.calls;
        self.calls += 1;
        if (self.fail_from..self.fail_until).contains(&call) {
            return Err(GradFieldError::kernel("relink unavailable"));
        }
        CpuKernelBackend.specialize(capacity, generation)
    }

    fn name(&self) -> &'static str {
        "flaky"
    }
}

#[test]
fn empty_config_uses_placeholder_data() {
    let m = GradientMaterial::new(&MaterialConfig::default()).unwrap();
    assert_eq!(m.capacity(), SampleSet::PLACEHOLDER_LEN);
    assert_eq!(m.samples(), &SampleSet::placeholder());
    assert_eq!(m.kernel_generation(), 0);
}

#[test]
fn empty_values_alone_also_select_placeholder() {
    let cfg = MaterialConfig {
        data_points: vec![Vec3::ZERO; 3],
        ..MaterialConfig::default()
    };
    let m = GradientMaterial::new(&cfg).unwrap();
    assert_eq!(m.capacity(), SampleSet::PLACEHOLDER_LEN);
}

#[test]
fn construction_rejects_degenerate_range() {
    let cfg = MaterialConfig {
        max_value: 0.0,
        ..two_point_config()
    };
    let err = GradientMaterial::new(&cfg).unwrap_err();
    assert!(matches!(err, GradFieldError::Config(_)));
}

#[test]
fn same_length_update_is_in_place() {
    let mut m = GradientMaterial::new(&two_point_config()).unwrap();
    let before = m.inputs_version();
    let outcome = m
        .update_data(
            &[Vec3::new(0.0, 0.0, 0.0), Vec3::new(10.0, 0.0, 0.0)],
            &[10.0, 0.0],
        )
        .unwrap();
    assert_eq!(outcome, DataUpdate::InPlace);
    assert_eq!(m.kernel_generation(), 0);
    assert_eq!(m.inputs_version(), before + 1);
    assert_eq!(m.samples().values(), &[10.0, 0.0]);
}

#[test]
fn length_change_respecializes() {
    let mut m = GradientMaterial::new(&two_point_config()).unwrap();
    let positions: Vec<Vec3> = (0..5).map(|i| Vec3::new(i as f64, 1.0, 0.0)).collect();
    let values = vec![1.0; 5];
    let outcome = m.update_data(&positions, &values).unwrap();
    assert_eq!(
        outcome,
        DataUpdate::Respecialized {
            previous: 2,
            capacity: 5
        }
    );
    assert_eq!(m.capacity(), 5);
    assert_eq!(m.kernel_generation(), 1);
    assert_eq!(m.samples().positions(), positions.as_slice());
}

#[test]
fn mismatched_or_empty_update_changes_nothing() {
    let mut m = GradientMaterial::new(&two_point_config()).unwrap();
    let version = m.inputs_version();

    let err = m.update_data(&[Vec3::ZERO; 3], &[1.0, 2.0]).unwrap_err();
    assert!(matches!(err, GradFieldError::Validation(_)));
    let err = m.update_data(&[], &[]).unwrap_err();
    assert!(matches!(err, GradFieldError::Validation(_)));

    assert_eq!(m.inputs_version(), version);
    assert_eq!(m.capacity(), 2);
    assert!(m.is_usable());
}

#[test]
fn failed_respecialization_makes_kernel_unusable_until_rebuilt() {
    let backend = FlakyBackend {
        calls: 0,
        fail_from: 1,
        fail_until: 2,
    };
    let mut m = GradientMaterial::with_backend(&two_point_config(), Box::new(backend)).unwrap();

    let err = m
        .update_data(&[Vec3::ZERO; 3], &[1.0, 2.0, 3.0])
        .unwrap_err();
    assert!(matches!(err, GradFieldError::Kernel(_)));
    assert!(!m.is_usable());
    assert!(m.snapshot().is_err());
    assert!(m.evaluate(Vec3::ZERO).is_err());

    // Same length as the stale kernel still rebuilds, because the kernel is unusable.
    let outcome = m
        .update_data(&[Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0)], &[0.0, 1.0])
        .unwrap();
    assert!(matches!(outcome, DataUpdate::Respecialized { .. }));
    assert!(m.is_usable());
    assert_eq!(m.kernel_generation(), 2);
    m.evaluate(Vec3::new(0.5, 0.0, 0.0)).unwrap();
}

#[test]
fn initial_specialization_failure_is_fatal() {
    let backend = FlakyBackend {
        calls: 0,
        fail_from: 0,
        fail_until: 1,
    };
    let err = GradientMaterial::with_backend(&two_point_config(), Box::new(backend)).unwrap_err();
    assert!(matches!(err, GradFieldError::Kernel(_)));
}

#[test]
fn published_snapshots_are_not_mutated() {
    let mut m = GradientMaterial::new(&two_point_config()).unwrap();
    let q = Vec3::new(2.0, 0.0, 0.0);
    let held = m.snapshot().unwrap();
    let before = held.evaluate(q);

    m.update_data(&[Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0)], &[10.0, 0.0])
        .unwrap();
    m.set_params(GradientParams {
        color_low: Rgb::new(0.0, 1.0, 0.0),
        ..*m.params()
    })
    .unwrap();

    assert_eq!(held.evaluate(q), before);
    assert_eq!(held.samples().values(), &[0.0, 10.0]);
    assert_ne!(m.evaluate(q).unwrap(), before);
}

#[test]
fn set_params_validates_and_bumps_version() {
    let mut m = GradientMaterial::new(&two_point_config()).unwrap();
    let version = m.inputs_version();

    let bad = GradientParams {
        min_value: 5.0,
        max_value: 5.0,
        ..*m.params()
    };
    assert!(m.set_params(bad).is_err());
    assert_eq!(m.inputs_version(), version);

    let good = GradientParams {
        max_value: 20.0,
        ..*m.params()
    };
    m.set_params(good).unwrap();
    assert_eq!(m.inputs_version(), version + 1);
    assert_eq!(m.params().max_value, 20.0);
    assert_eq!(m.kernel_generation(), 0);
}
