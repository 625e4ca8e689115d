//! DCT-II / DCT-III transform descriptors.
//!
//! A [`Dct1d`] is built once for a fixed power-of-two length and owns the
//! coefficient tables; transforms run in place through `&self`, so one
//! descriptor can serve many buffers, including concurrently. The real
//! input is folded pairwise into a half-length complex signal, pushed
//! through the split-radix complex core, and unfolded by the
//! `rft*`/`dctsub` boundary passes. [`DctPlanner`] caches descriptors by
//! length.

use crate::cft::{cftbsub, cftfsub};
use crate::num::Float;
use crate::tables::Tables;
use alloc::sync::Arc;
use hashbrown::HashMap;

/// Errors reported by transform construction and execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DctError {
    /// The requested transform length is zero or not a power of two.
    NonPowerOfTwo,
    /// The buffer does not hold `len` elements past the start offset.
    BufferTooShort,
}

impl core::fmt::Display for DctError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DctError::NonPowerOfTwo => write!(f, "transform length must be a power of two"),
            DctError::BufferTooShort => write!(f, "buffer too short for transform length"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DctError {}

/// In-place DCT-II/DCT-III over `n` elements, `n` a power of two.
///
/// The forward direction is the DCT-II
/// `y[k] = sum_j x[j] cos(pi (j + 1/2) k / n)`; the inverse is the
/// DCT-III. With `scale = true` both are orthonormally scaled by
/// `sqrt(2/n)` (DC term by an extra `1/sqrt(2)`), making them exact
/// inverses of each other.
#[derive(Debug)]
pub struct Dct1d<T> {
    n: usize,
    tables: Tables<T>,
}

/// Single-precision descriptor.
pub type Dct1d32 = Dct1d<f32>;
/// Double-precision descriptor.
pub type Dct1d64 = Dct1d<f64>;

impl<T: Float> Dct1d<T> {
    /// Create a descriptor for length-`n` transforms. All coefficient
    /// tables are built here; the descriptor is immutable afterwards.
    pub fn new(n: usize) -> Result<Self, DctError> {
        if n == 0 || !n.is_power_of_two() {
            return Err(DctError::NonPowerOfTwo);
        }
        #[cfg(feature = "verbose-logging")]
        log::debug!("building DCT descriptor: n={}", n);
        Ok(Self {
            n,
            tables: Tables::new(n),
        })
    }

    /// Transform length.
    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    /// Always false; descriptors for length zero cannot be constructed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Compute the forward DCT-II of `a[..len]` in place.
    pub fn forward(&self, a: &mut [T], scale: bool) -> Result<(), DctError> {
        self.forward_at(a, 0, scale)
    }

    /// Compute the forward DCT-II of `a[start..start + len]` in place.
    pub fn forward_at(&self, a: &mut [T], start: usize, scale: bool) -> Result<(), DctError> {
        let a = self.window(a, start)?;
        let n = self.n;
        // A 1-point DCT is the identity (up to the DC scale, which the
        // orthonormal convention also makes 1).
        if n == 1 {
            return Ok(());
        }
        let nw = self.tables.nw();
        let nc = self.tables.nc();
        let w = self.tables.w();
        let xr = a[n - 1];
        let mut j = n - 2;
        while j >= 2 {
            a[j + 1] = a[j] - a[j - 1];
            a[j] = a[j] + a[j - 1];
            j -= 2;
        }
        a[1] = a[0] - xr;
        a[0] = a[0] + xr;
        if n > 4 {
            rftbsub(n, a, nc, &w[nw..]);
            cftbsub(n, a, self.tables.ip(), nw, w);
        } else if n == 4 {
            cftbsub(n, a, self.tables.ip(), nw, w);
        }
        dctsub(n, a, nc, &w[nw..]);
        if scale {
            self.scale(a);
        }
        Ok(())
    }

    /// Compute the inverse DCT-III of `a[..len]` in place.
    pub fn inverse(&self, a: &mut [T], scale: bool) -> Result<(), DctError> {
        self.inverse_at(a, 0, scale)
    }

    /// Compute the inverse DCT-III of `a[start..start + len]` in place.
    pub fn inverse_at(&self, a: &mut [T], start: usize, scale: bool) -> Result<(), DctError> {
        let a = self.window(a, start)?;
        let n = self.n;
        if n == 1 {
            return Ok(());
        }
        let nw = self.tables.nw();
        let nc = self.tables.nc();
        let w = self.tables.w();
        if scale {
            self.scale(a);
        }
        dctsub(n, a, nc, &w[nw..]);
        if n > 4 {
            cftfsub(n, a, self.tables.ip(), nw, w);
            rftfsub(n, a, nc, &w[nw..]);
        } else if n == 4 {
            cftfsub(n, a, self.tables.ip(), nw, w);
        }
        let xr = a[0] - a[1];
        a[0] = a[0] + a[1];
        let mut j = 2;
        while j < n {
            a[j - 1] = a[j] - a[j + 1];
            a[j] = a[j] + a[j + 1];
            j += 2;
        }
        a[n - 1] = xr;
        Ok(())
    }

    fn window<'a>(&self, a: &'a mut [T], start: usize) -> Result<&'a mut [T], DctError> {
        match start.checked_add(self.n) {
            Some(end) if end <= a.len() => Ok(&mut a[start..end]),
            _ => Err(DctError::BufferTooShort),
        }
    }

    /// Orthonormal scaling: every element by `sqrt(2/n)`, the DC term by
    /// an extra `1/sqrt(2)`.
    fn scale(&self, a: &mut [T]) {
        let n = self.n;
        let s = (T::from_f32(2.0) / T::from_usize(n)).sqrt();
        #[cfg(feature = "parallel")]
        if rayon::current_num_threads() > 1 && n > crate::cft::threads2_begin() {
            use rayon::prelude::*;
            let chunk = core::cmp::max(n / rayon::current_num_threads(), 1);
            a.par_chunks_mut(chunk).for_each(|c| {
                for x in c {
                    *x = *x * s;
                }
            });
            a[0] = a[0] / T::from_f32(2.0).sqrt();
            return;
        }
        for x in a.iter_mut() {
            *x = *x * s;
        }
        a[0] = a[0] / T::from_f32(2.0).sqrt();
    }
}

/// Forward real↔complex boundary fold: recombines the half-length
/// complex spectrum into the spectrum of the real signal.
fn rftfsub<T: Float>(n: usize, a: &mut [T], nc: usize, c: &[T]) {
    let m = n >> 1;
    let ks = 2 * nc / m;
    let mut kk = 0;
    let half = T::from_f32(0.5);
    let mut j = 2;
    while j < m {
        let k = n - j;
        kk += ks;
        let wkr = half - c[nc - kk];
        let wki = c[kk];
        let xr = a[j] - a[k];
        let xi = a[j + 1] + a[k + 1];
        let yr = wkr * xr - wki * xi;
        let yi = wkr * xi + wki * xr;
        a[j] = a[j] - yr;
        a[j + 1] = a[j + 1] - yi;
        a[k] = a[k] + yr;
        a[k + 1] = a[k + 1] - yi;
        j += 2;
    }
}

/// Conjugate of [`rftfsub`], used before the backward complex transform.
fn rftbsub<T: Float>(n: usize, a: &mut [T], nc: usize, c: &[T]) {
    let m = n >> 1;
    let ks = 2 * nc / m;
    let mut kk = 0;
    let half = T::from_f32(0.5);
    let mut j = 2;
    while j < m {
        let k = n - j;
        kk += ks;
        let wkr = half - c[nc - kk];
        let wki = c[kk];
        let xr = a[j] - a[k];
        let xi = a[j + 1] + a[k + 1];
        let yr = wkr * xr + wki * xi;
        let yi = wkr * xi - wki * xr;
        a[j] = a[j] - yr;
        a[j + 1] = a[j + 1] - yi;
        a[k] = a[k] + yr;
        a[k + 1] = a[k + 1] - yi;
        j += 2;
    }
}

/// Quarter-wave rotation that turns the real FFT into the cosine
/// transform, applied symmetrically around the midpoint.
fn dctsub<T: Float>(n: usize, a: &mut [T], nc: usize, c: &[T]) {
    let m = n >> 1;
    let ks = nc / n;
    let mut kk = 0;
    for j in 1..m {
        let k = n - j;
        kk += ks;
        let wkr = c[kk] - c[nc - kk];
        let wki = c[kk] + c[nc - kk];
        let xr = wki * a[j] - wkr * a[k];
        a[j] = wkr * a[j] + wki * a[k];
        a[k] = xr;
    }
    a[m] = a[m] * c[0];
}

/// Cache of transform descriptors keyed by length.
///
/// Descriptors are handed out as `Arc`s, so plans stay valid after the
/// planner is dropped and can be shared across threads.
pub struct DctPlanner<T> {
    cache: HashMap<usize, Arc<Dct1d<T>>>,
}

impl<T: Float> DctPlanner<T> {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }

    /// Return the cached descriptor for length `n`, building it on first
    /// request.
    pub fn plan_dct(&mut self, n: usize) -> Result<Arc<Dct1d<T>>, DctError> {
        if let Some(plan) = self.cache.get(&n) {
            return Ok(Arc::clone(plan));
        }
        let plan = Arc::new(Dct1d::new(n)?);
        self.cache.insert(n, Arc::clone(&plan));
        Ok(plan)
    }
}

impl<T: Float> Default for DctPlanner<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    fn naive_dct2(x: &[f64]) -> Vec<f64> {
        let n = x.len();
        (0..n)
            .map(|k| {
                x.iter()
                    .enumerate()
                    .map(|(j, &v)| v * (core::f64::consts::PI * (j as f64 + 0.5) * k as f64 / n as f64).cos())
                    .sum()
            })
            .collect()
    }

    #[test]
    fn descriptor_is_debuggable() {
        let dct = Dct1d::<f32>::new(4).unwrap();
        let s = alloc::format!("{:?}", dct);
        assert!(s.contains('4'));
        assert_eq!(dct.len(), 4);
        assert!(!dct.is_empty());
    }

    #[test]
    fn rejects_invalid_lengths() {
        assert_eq!(Dct1d::<f64>::new(0).unwrap_err(), DctError::NonPowerOfTwo);
        assert_eq!(Dct1d::<f64>::new(3).unwrap_err(), DctError::NonPowerOfTwo);
        assert_eq!(Dct1d::<f64>::new(96).unwrap_err(), DctError::NonPowerOfTwo);
    }

    #[test]
    fn rejects_short_buffers() {
        let dct = Dct1d::<f64>::new(8).unwrap();
        let mut a = vec![0.0; 7];
        assert_eq!(dct.forward(&mut a, true).unwrap_err(), DctError::BufferTooShort);
        let mut a = vec![0.0; 10];
        assert_eq!(
            dct.forward_at(&mut a, 3, true).unwrap_err(),
            DctError::BufferTooShort
        );
        assert_eq!(
            dct.inverse_at(&mut a, usize::MAX, true).unwrap_err(),
            DctError::BufferTooShort
        );
    }

    #[test]
    fn length_one_is_identity() {
        let dct = Dct1d::<f64>::new(1).unwrap();
        let mut a = vec![3.25];
        dct.forward(&mut a, true).unwrap();
        assert_eq!(a[0], 3.25);
        dct.inverse(&mut a, true).unwrap();
        assert_eq!(a[0], 3.25);
    }

    #[test]
    fn forward_matches_naive_small() {
        for &n in &[2usize, 4, 8, 16, 32] {
            let dct = Dct1d::<f64>::new(n).unwrap();
            let x: Vec<f64> = (0..n).map(|i| ((i * 3 + 1) as f64 * 0.41).sin()).collect();
            let mut a = x.clone();
            dct.forward(&mut a, false).unwrap();
            let want = naive_dct2(&x);
            for k in 0..n {
                assert!(
                    (a[k] - want[k]).abs() < 1e-10,
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
    fn impulse_transforms_to_cosine_ramp() {
        let n = 16usize;
        let dct = Dct1d::<f64>::new(n).unwrap();
        let mut a = vec![0.0; n];
        a[0] = 1.0;
        dct.forward(&mut a, false).unwrap();
        for k in 0..n {
            let want = (core::f64::consts::PI * k as f64 / (2.0 * n as f64)).cos();
            assert!((a[k] - want).abs() < 1e-12, "k={}: {} vs {}", k, a[k], want);
        }
    }

    #[test]
    fn constant_input_has_dc_only() {
        let n = 32usize;
        let dct = Dct1d::<f64>::new(n).unwrap();
        let mut a = vec![2.5; n];
        dct.forward(&mut a, false).unwrap();
        assert!((a[0] - 2.5 * n as f64).abs() < 1e-10);
        for k in 1..n {
            assert!(a[k].abs() < 1e-9, "k={}: {}", k, a[k]);
        }
    }

    #[test]
    fn offset_window_leaves_neighbors_untouched() {
        let n = 8usize;
        let dct = Dct1d::<f64>::new(n).unwrap();
        let mut a = vec![7.0; n + 4];
        for i in 0..n {
            a[2 + i] = (i as f64 * 0.9).cos();
        }
        let before: Vec<f64> = a.clone();
        dct.forward_at(&mut a, 2, true).unwrap();
        dct.inverse_at(&mut a, 2, true).unwrap();
        assert_eq!(a[0], 7.0);
        assert_eq!(a[1], 7.0);
        assert_eq!(a[n + 2], 7.0);
        assert_eq!(a[n + 3], 7.0);
        for i in 0..n {
            assert!((a[2 + i] - before[2 + i]).abs() < 1e-12);
        }
    }

    #[test]
    fn scale_flag_equals_manual_scaling() {
        let n = 64usize;
        let dct = Dct1d::<f64>::new(n).unwrap();
        let x: Vec<f64> = (0..n).map(|i| (i as f64 * 0.27).sin()).collect();
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

    #[test]
    fn planner_reuses_descriptors() {
        let mut planner = DctPlanner::<f32>::new();
        let a = planner.plan_dct(256).unwrap();
        let b = planner.plan_dct(256).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        let c = planner.plan_dct(512).unwrap();
        assert!(!Arc::ptr_eq(&a, &c));
        assert_eq!(
            planner.plan_dct(100).unwrap_err(),
            DctError::NonPowerOfTwo
        );
    }

    #[cfg(feature = "internal-tests")]
    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn roundtrip_recovers_input(xs in proptest::collection::vec(-100.0f64..100.0, 64)) {
                let dct = Dct1d::<f64>::new(64).unwrap();
                let mut a = xs.clone();
                dct.forward(&mut a, true).unwrap();
                dct.inverse(&mut a, true).unwrap();
                for (got, want) in a.iter().zip(xs.iter()) {
                    prop_assert!((got - want).abs() < 1e-9);
                }
            }

            #[test]
            fn forward_is_linear(
                xs in proptest::collection::vec(-10.0f64..10.0, 32),
                ys in proptest::collection::vec(-10.0f64..10.0, 32),
                alpha in -4.0f64..4.0,
            ) {
                let dct = Dct1d::<f64>::new(32).unwrap();
                let mut combo: Vec<f64> =
                    xs.iter().zip(ys.iter()).map(|(x, y)| alpha * x + y).collect();
                let mut fx = xs.clone();
                let mut fy = ys.clone();
                dct.forward(&mut combo, false).unwrap();
                dct.forward(&mut fx, false).unwrap();
                dct.forward(&mut fy, false).unwrap();
                for k in 0..32 {
                    prop_assert!((combo[k] - (alpha * fx[k] + fy[k])).abs() < 1e-8);
                }
            }
        }
    }
}
