use super::*;
use crate::material::config::MaterialConfig;
use crate::material::gradient::GradientMaterial;

fn snapshot() -> std::sync::Arc<KernelSnapshot> {
    let cfg = MaterialConfig {
        data_points: vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(4.0, 0.0, 0.0),
            Vec3::new(0.0, 4.0, 1.0),
        ],
        data_values: vec![0.0, 1.0, 0.5],
        ..MaterialConfig::default()
    };
    GradientMaterial::new(&cfg).unwrap().snapshot().unwrap()
}

fn queries(n: usize) -> Vec<Vec3> {
    (0..n)
        .map(|i| Vec3::new((i % 17) as f64 * 0.3, (i / 17) as f64 * 0.2, 0.5))
        .collect()
}

#[test]
fn parallel_matches_sequential() {
    let snap = snapshot();
    let qs = queries(1000);
    let seq = shade_points(&snap, &qs, &ShadeThreading::default()).unwrap();
    let par = shade_points(
        &snap,
        &qs,
        &ShadeThreading {
            parallel: true,
            chunk_size: 7,
            threads: Some(3),
        },
    )
    .unwrap();
    assert_eq!(seq.len(), qs.len());
    assert_eq!(seq, par);
}

#[test]
fn zero_threads_is_rejected() {
    let snap = snapshot();
    let err = shade_points(
        &snap,
        &queries(4),
        &ShadeThreading {
            parallel: true,
            chunk_size: 1,
            threads: Some(0),
        },
    )
    .unwrap_err();
    assert!(matches!(err, GradFieldError::Validation(_)));
}

#[test]
fn zero_chunk_size_is_normalized() {
    let snap = snapshot();
    let qs = queries(10);
    let out = shade_points(
        &snap,
        &qs,
        &ShadeThreading {
            parallel: true,
            chunk_size: 0,
            threads: Some(2),
        },
    )
    .unwrap();
    assert_eq!(out.len(), 10);
}

#[test]
fn empty_query_list_yields_empty_output() {
    let snap = snapshot();
    assert!(
        shade_points(&snap, &[], &ShadeThreading::default())
            .unwrap()
            .is_empty()
    );
}
