//! Cross-checks against a direct O(n^2) evaluation of the transform
//! definitions.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use srdct::Dct1d64;
use std::f64::consts::PI;

fn random_signal(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect()
}

/// Unscaled DCT-II: y[k] = sum_j x[j] cos(pi (j + 1/2) k / n).
fn naive_dct2(x: &[f64]) -> Vec<f64> {
    let n = x.len();
    (0..n)
        .map(|k| {
            x.iter()
                .enumerate()
                .map(|(j, &v)| v * (PI * (j as f64 + 0.5) * k as f64 / n as f64).cos())
                .sum()
        })
        .collect()
}

/// Unscaled DCT-III: y[j] = sum_k z[k] cos(pi k (j + 1/2) / n).
fn naive_dct3(z: &[f64]) -> Vec<f64> {
    let n = z.len();
    (0..n)
        .map(|j| {
            z.iter()
                .enumerate()
                .map(|(k, &v)| v * (PI * k as f64 * (j as f64 + 0.5) / n as f64).cos())
                .sum()
        })
        .collect()
}

#[test]
fn forward_matches_direct_evaluation() {
    for &n in &[8usize, 16, 64, 128, 256, 1024] {
        let dct = Dct1d64::new(n).unwrap();
        let x = random_signal(n, n as u64);
        let mut a = x.clone();
        dct.forward(&mut a, false).unwrap();
        let want = naive_dct2(&x);
        for k in 0..n {
            assert!(
                (a[k] - want[k]).abs() < 1e-9 * n as f64,
                "n={} k={}: {} vs {}",
                n,
                k,
                a[k],
                want[k]
            );
        }
    }
}

#[test]
fn inverse_matches_direct_evaluation() {
    for &n in &[8usize, 16, 64, 128, 256, 1024] {
        let dct = Dct1d64::new(n).unwrap();
        let z = random_signal(n, n as u64 + 1);
        let mut a = z.clone();
        dct.inverse(&mut a, false).unwrap();
        let want = naive_dct3(&z);
        for j in 0..n {
            assert!(
                (a[j] - want[j]).abs() < 1e-9 * n as f64,
                "n={} j={}: {} vs {}",
                n,
                j,
                a[j],
                want[j]
            );
        }
    }
}

#[test]
fn impulse_response_is_cosine_ramp() {
    for &n in &[8usize, 16] {
        let dct = Dct1d64::new(n).unwrap();
        let mut a = vec![0.0; n];
        a[0] = 1.0;
        dct.forward(&mut a, false).unwrap();
        for k in 0..n {
            let want = (PI * k as f64 / (2.0 * n as f64)).cos();
            assert!((a[k] - want).abs() < 1e-12, "n={} k={}", n, k);
        }
    }
}

#[test]
fn orthonormal_transform_preserves_energy() {
    let n = 512;
    let dct = Dct1d64::new(n).unwrap();
    let x = random_signal(n, 31);
    let mut a = x.clone();
    dct.forward(&mut a, true).unwrap();
    let ein: f64 = x.iter().map(|v| v * v).sum();
    let eout: f64 = a.iter().map(|v| v * v).sum();
    assert!((ein - eout).abs() < 1e-9 * ein);
}
