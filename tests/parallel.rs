#![cfg(feature = "parallel")]

//! The worker-count thresholds are process-wide, so everything that
//! touches them lives in a single test function.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use srdct::{set_parallel_dct_quad_threshold, set_parallel_dct_threshold, Dct1d64};

fn random_signal(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect()
}

fn forward(dct: &Dct1d64, x: &[f64]) -> Vec<f64> {
    let mut a = x.to_vec();
    dct.forward(&mut a, true).unwrap();
    a
}

fn inverse(dct: &Dct1d64, x: &[f64]) -> Vec<f64> {
    let mut a = x.to_vec();
    dct.inverse(&mut a, true).unwrap();
    a
}

#[test]
fn parallel_decomposition_matches_sequential() {
    // Sequential baselines with the parallel path disabled outright.
    set_parallel_dct_threshold(usize::MAX);
    set_parallel_dct_quad_threshold(usize::MAX);
    let n2 = 16384;
    let n4 = 131072;
    let x2 = random_signal(n2, 1);
    let x4 = random_signal(n4, 2);
    let dct2 = Dct1d64::new(n2).unwrap();
    let dct4 = Dct1d64::new(n4).unwrap();
    let seq_f2 = forward(&dct2, &x2);
    let seq_i2 = inverse(&dct2, &x2);
    let seq_f4 = forward(&dct4, &x4);

    // Defaults: n2 crosses the 2-way cutover, n4 the 4-way one.
    set_parallel_dct_threshold(0);
    set_parallel_dct_quad_threshold(0);
    assert_eq!(forward(&dct2, &x2), seq_f2);
    assert_eq!(inverse(&dct2, &x2), seq_i2);
    assert_eq!(forward(&dct4, &x4), seq_f4);

    // Lowered cutovers push n2 through the 4-way split as well.
    set_parallel_dct_threshold(1024);
    set_parallel_dct_quad_threshold(8192);
    assert_eq!(forward(&dct2, &x2), seq_f2);
    assert_eq!(inverse(&dct2, &x2), seq_i2);

    // Just-below-threshold sizes stay on the sequential path.
    set_parallel_dct_threshold(0);
    set_parallel_dct_quad_threshold(0);
    let dct_small = Dct1d64::new(8192).unwrap();
    let xs = random_signal(8192, 3);
    let f_small = forward(&dct_small, &xs);
    set_parallel_dct_threshold(usize::MAX);
    assert_eq!(forward(&dct_small, &xs), f_small);

    set_parallel_dct_threshold(0);
    set_parallel_dct_quad_threshold(0);
}

#[test]
fn concurrent_large_transforms_share_one_descriptor() {
    let n = 32768;
    let dct = std::sync::Arc::new(Dct1d64::new(n).unwrap());
    let x = random_signal(n, 77);
    let expected = forward(&dct, &x);
    let handles: Vec<_> = (0..3)
        .map(|_| {
            let dct = std::sync::Arc::clone(&dct);
            let x = x.clone();
            std::thread::spawn(move || forward(&dct, &x))
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), expected);
    }
}
