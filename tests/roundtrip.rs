use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use srdct::{Dct1d32, Dct1d64};

fn random_signal(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect()
}

// Tolerance grows with the number of butterfly stages.
fn tol64(n: usize) -> f64 {
    1e-12 * (n.max(2).trailing_zeros() as f64)
}

#[test]
fn roundtrip_all_sizes_f64() {
    for &n in &[1usize, 2, 4, 8, 16, 32, 128, 512, 1024, 8192, 65536, 131072] {
        let dct = Dct1d64::new(n).unwrap();
        let x = random_signal(n, 0x5eed + n as u64);
        let mut a = x.clone();
        dct.forward(&mut a, true).unwrap();
        dct.inverse(&mut a, true).unwrap();
        for (i, (got, want)) in a.iter().zip(x.iter()).enumerate() {
            assert!(
                (got - want).abs() < tol64(n),
                "n={} i={}: {} vs {}",
                n,
                i,
                got,
                want
            );
        }
    }
}

#[test]
fn roundtrip_f32() {
    for &n in &[4usize, 64, 1024, 8192] {
        let dct = Dct1d32::new(n).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let x: Vec<f32> = (0..n).map(|_| rng.gen_range(-1.0f32..1.0)).collect();
        let mut a = x.clone();
        dct.forward(&mut a, true).unwrap();
        dct.inverse(&mut a, true).unwrap();
        for (got, want) in a.iter().zip(x.iter()) {
            assert!((got - want).abs() < 1e-3, "n={}: {} vs {}", n, got, want);
        }
    }
}

#[test]
fn repeated_forward_is_bit_identical() {
    let n = 2048;
    let dct = Dct1d64::new(n).unwrap();
    let x = random_signal(n, 7);
    let mut a = x.clone();
    let mut b = x.clone();
    dct.forward(&mut a, true).unwrap();
    dct.forward(&mut b, true).unwrap();
    assert_eq!(a, b);
}

#[test]
fn shared_descriptor_across_threads() {
    let n = 4096;
    let dct = std::sync::Arc::new(Dct1d64::new(n).unwrap());
    let x = random_signal(n, 99);
    let mut expected = x.clone();
    dct.forward(&mut expected, true).unwrap();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let dct = std::sync::Arc::clone(&dct);
            let x = x.clone();
            std::thread::spawn(move || {
                let mut a = x;
                dct.forward(&mut a, true).unwrap();
                a
            })
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), expected);
    }
}

#[test]
fn offset_roundtrip_in_larger_buffer() {
    let n = 512;
    let dct = Dct1d64::new(n).unwrap();
    let mut buf = vec![-3.0; n + 100];
    let x = random_signal(n, 1234);
    buf[37..37 + n].copy_from_slice(&x);
    dct.forward_at(&mut buf, 37, true).unwrap();
    dct.inverse_at(&mut buf, 37, true).unwrap();
    for i in 0..37 {
        assert_eq!(buf[i], -3.0);
    }
    for i in 37 + n..buf.len() {
        assert_eq!(buf[i], -3.0);
    }
    for i in 0..n {
        assert!((buf[37 + i] - x[i]).abs() < tol64(n));
    }
}

#[test]
fn scale_flag_matches_manual_normalization() {
    let n = 1024;
    let dct = Dct1d64::new(n).unwrap();
    let x = random_signal(n, 5);
    let mut scaled = x.clone();
    dct.forward(&mut scaled, true).unwrap();
    let mut manual = x.clone();
    dct.forward(&mut manual, false).unwrap();
    let s = (2.0 / n as f64).sqrt();
    for v in manual.iter_mut() {
        *v *= s;
    }
    manual[0] /= 2.0f64.sqrt();
    assert_eq!(scaled, manual);
}
