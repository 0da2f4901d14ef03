use super::*;
use crate::kernel::params::SmoothstepEdges;

const TOL: f64 = 1e-6;

fn two_point_params(kind: WeightKind) -> GradientParams {
    GradientParams {
        color_low: Rgb::new(0.0, 0.0, 1.0),
        color_high: Rgb::new(1.0, 0.0, 0.0),
        min_value: 0.0,
        max_value: 10.0,
        weight_kind: kind,
        smoothstep_edges: SmoothstepEdges { min: 0.0, max: 1.0 },
    }
}

fn two_points() -> (Vec<Vec3>, Vec<f64>) {
    (
        vec![Vec3::new(0.0, 0.0, 0.0), Vec3::new(10.0, 0.0, 0.0)],
        vec![0.0, 10.0],
    )
}

#[test]
fn midpoint_is_hsv_midpoint_between_blue_and_red() {
    let params = two_point_params(WeightKind::InverseSquare);
    let ramp = ColorRamp::from_params(&params);
    let (pos, val) = two_points();

    let q = Vec3::new(5.0, 0.0, 0.0);
    assert!((interpolate(params.weight_kind, q, &pos, &val) - 5.0).abs() < 1e-12);
    assert!((gradient_t(&params, 5.0) - 0.5).abs() < 1e-12);

    let c = evaluate(&params, &ramp, &pos, &val, q);
    assert!(c.max_abs_diff(ramp.at(0.5)) < 1e-12);
    // Hue 2/3 -> 0 at t=0.5 lands on 1/3: green.
    assert!(c.max_abs_diff(Rgb::new(0.0, 1.0, 0.0)) < TOL, "{c:?}");
}

#[test]
fn coincident_query_returns_color_low() {
    let params = two_point_params(WeightKind::InverseSquare);
    let ramp = ColorRamp::from_params(&params);
    let (pos, val) = two_points();

    let c = evaluate(&params, &ramp, &pos, &val, Vec3::ZERO);
    assert!(c.r.is_finite() && c.g.is_finite() && c.b.is_finite());
    assert!(c.max_abs_diff(params.color_low) < TOL, "{c:?}");
}

#[test]
fn coincident_query_snaps_to_sample_value() {
    let (pos, val) = two_points();
    for kind in [WeightKind::Inverse, WeightKind::InverseSquare] {
        assert_eq!(interpolate(kind, pos[1], &pos, &val), 10.0);
        assert_eq!(interpolate(kind, pos[0], &pos, &val), 0.0);
    }
}

#[test]
fn approaching_a_sample_converges_to_its_value() {
    let pos = vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(4.0, 1.0, 0.0),
        Vec3::new(-2.0, 3.0, 5.0),
    ];
    let val = vec![1.0, 7.0, -3.0];
    for kind in [WeightKind::Inverse, WeightKind::InverseSquare] {
        let mut prev_err = f64::INFINITY;
        for eps in [1e-1, 1e-2, 1e-3, 1e-4] {
            let q = Vec3::new(4.0 + eps, 1.0, 0.0);
            let err = (interpolate(kind, q, &pos, &val) - 7.0).abs();
            assert!(err < prev_err, "{kind:?} eps={eps} err={err}");
            prev_err = err;
        }
        assert!(prev_err < 1e-2, "{kind:?} final err {prev_err}");
    }
}

#[test]
fn single_sample_is_constant_everywhere() {
    let pos = vec![Vec3::new(1.0, 2.0, 3.0)];
    let val = vec![4.2];
    for kind in [
        WeightKind::Inverse,
        WeightKind::InverseSquare,
        WeightKind::Exponential,
    ] {
        for q in [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 2.5, 3.0),
            Vec3::new(50.0, -20.0, 8.0),
        ] {
            let v = interpolate(kind, q, &pos, &val);
            assert!((v - 4.2).abs() < 1e-12, "{kind:?} at {q:?}: {v}");
        }
    }
}

#[test]
fn reordering_samples_does_not_change_result() {
    let pos = vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(3.0, 1.0, -1.0),
        Vec3::new(-2.0, 4.0, 2.0),
        Vec3::new(5.0, -3.0, 0.5),
    ];
    let val = vec![0.5, 2.0, -1.0, 8.0];
    let order = [2usize, 0, 3, 1];
    let pos_p: Vec<Vec3> = order.iter().map(|&i| pos[i]).collect();
    let val_p: Vec<f64> = order.iter().map(|&i| val[i]).collect();

    for kind in [
        WeightKind::Inverse,
        WeightKind::InverseSquare,
        WeightKind::Exponential,
    ] {
        for q in [Vec3::new(1.0, 1.0, 1.0), Vec3::new(-4.0, 0.0, 3.0)] {
            let a = interpolate(kind, q, &pos, &val);
            let b = interpolate(kind, q, &pos_p, &val_p);
            assert!((a - b).abs() < 1e-12, "{kind:?}: {a} vs {b}");
        }
    }
}

#[test]
fn normalized_value_clamps_outside_edges() {
    let params = GradientParams {
        min_value: 0.0,
        max_value: 1.0,
        smoothstep_edges: SmoothstepEdges { min: 0.2, max: 0.8 },
        ..GradientParams::default()
    };
    for v in [-1e12, -3.0, 0.0, 0.2] {
        assert_eq!(gradient_t(&params, v), 0.0, "value {v}");
    }
    for v in [0.8, 1.0, 42.0, 1e12] {
        assert_eq!(gradient_t(&params, v), 1.0, "value {v}");
    }
}

#[test]
fn exponential_underflow_falls_back_to_relative_weights() {
    let (pos, val) = two_points();
    let q = Vec3::new(2000.0, 0.0, 0.0);
    assert_eq!(WeightKind::Exponential.weight(1990.0), 0.0);

    let v = interpolate(WeightKind::Exponential, q, &pos, &val);
    let expected = 10.0 / (1.0 + (-10.0f64).exp());
    assert!((v - expected).abs() < 1e-9, "{v}");
}

#[test]
fn tiny_nonzero_distances_stay_distance_weighted() {
    // 1/d^2 overflows for both samples; the ratio 4:1 must still hold.
    let pos = vec![Vec3::new(1e-170, 0.0, 0.0), Vec3::new(-2e-170, 0.0, 0.0)];
    let val = vec![0.0, 10.0];
    assert!(WeightKind::InverseSquare.weight(1e-170).is_infinite());

    let v = interpolate(WeightKind::InverseSquare, Vec3::ZERO, &pos, &val);
    assert!((v - 2.0).abs() < 1e-12, "{v}");
    let v = interpolate(WeightKind::Inverse, Vec3::new(0.0, 0.0, 0.0), &pos, &val);
    assert!(v.is_finite(), "{v}");
}

#[test]
fn overflowing_total_weight_is_recovered() {
    // Each weight is finite (~1e308) but their sum is not.
    let pos = vec![Vec3::new(1e-154, 0.0, 0.0), Vec3::new(-1e-154, 0.0, 0.0)];
    let val = vec![0.0, 10.0];
    assert!(WeightKind::InverseSquare.weight(1e-154).is_finite());

    let v = interpolate(WeightKind::InverseSquare, Vec3::ZERO, &pos, &val);
    assert!((v - 5.0).abs() < 1e-12, "{v}");
}

#[test]
fn exact_hit_still_wins_over_overflowing_neighbours() {
    let pos = vec![Vec3::ZERO, Vec3::new(1e-170, 0.0, 0.0)];
    let val = vec![3.0, 9.0];
    assert_eq!(interpolate(WeightKind::InverseSquare, Vec3::ZERO, &pos, &val), 3.0);
}

#[test]
fn unrecognized_kind_matches_inverse_square() {
    let (pos, val) = two_points();
    let q = Vec3::new(3.0, 1.0, 0.0);
    assert_eq!(
        interpolate(WeightKind::Unrecognized, q, &pos, &val),
        interpolate(WeightKind::InverseSquare, q, &pos, &val)
    );
}
