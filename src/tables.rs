//! Trigonometric coefficient and bit-reversal index tables.
//!
//! The twiddle table `w` stores cosine/sine pairs at geometrically halving
//! angular resolutions (total size `5n/4` rather than the naive `O(n)` per
//! stage), with the reciprocal-cosine correction terms consumed by the
//! top-level radix-4 stage. The tail of `w` (from index `nw`) holds the
//! half-angle cosine table used by the real↔complex boundary folding. `ip`
//! encodes the bit-reversal permutation, with `ip[0]`/`ip[1]` recording the
//! twiddle and cosine table sizes already built so that rebuild requests for
//! the same or a smaller size are no-ops.

use crate::num::Float;
use alloc::vec;
use alloc::vec::Vec;

/// Derived coefficient tables for one transform length.
///
/// Immutable after construction; `forward`/`inverse` only read from it, so a
/// single instance can serve concurrent calls on independent buffers.
#[derive(Debug)]
pub(crate) struct Tables<T> {
    w: Vec<T>,
    ip: Vec<usize>,
}

impl<T: Float> Tables<T> {
    /// Build all tables required for length-`n` transforms. `n` must be a
    /// power of two (validated by the caller).
    pub(crate) fn new(n: usize) -> Self {
        let log2n = n.trailing_zeros() as usize;
        let ip_len = 2 + (1usize << (log2n.saturating_sub(1) / 2));
        let mut tables = Self {
            w: vec![T::zero(); core::cmp::max(n * 5 / 4, 1)],
            ip: vec![0; ip_len],
        };
        tables.ensure(n);
        tables
    }

    /// Twiddle table length the tables were built for (`n / 4`).
    #[inline]
    pub(crate) fn nw(&self) -> usize {
        self.ip[0]
    }

    /// Cosine table length the tables were built for (`n`).
    #[inline]
    pub(crate) fn nc(&self) -> usize {
        self.ip[1]
    }

    #[inline]
    pub(crate) fn w(&self) -> &[T] {
        &self.w
    }

    #[inline]
    pub(crate) fn ip(&self) -> &[usize] {
        &self.ip
    }

    /// Grow the tables to cover length-`n` transforms. Idempotent: requests
    /// already covered by `ip[0]`/`ip[1]` do nothing.
    fn ensure(&mut self, n: usize) {
        let mut nw = self.ip[0];
        if n > (nw << 2) {
            nw = n >> 2;
            self.makewt(nw);
        }
        let nc = self.ip[1];
        if n > nc {
            #[cfg(feature = "verbose-logging")]
            log::trace!("building cosine table: nc={} nw={}", n, nw);
            self.makect(n, nw);
        }
    }

    fn makewt(&mut self, nw: usize) {
        self.ip[0] = nw;
        self.ip[1] = 1;
        if nw <= 2 {
            return;
        }
        let mut nwh = nw >> 1;
        let delta = T::pi() * T::from_f32(0.25) / T::from_usize(nwh);
        let wn4r = (delta * T::from_usize(nwh)).cos();
        let half = T::from_f32(0.5);
        self.w[0] = T::one();
        self.w[1] = wn4r;
        if nwh == 4 {
            self.w[2] = (delta * T::from_usize(2)).cos();
            self.w[3] = (delta * T::from_usize(2)).sin();
        } else if nwh > 4 {
            self.makeipt(nw);
            let w = &mut self.w;
            w[2] = half / (delta * T::from_usize(2)).cos();
            w[3] = half / (delta * T::from_usize(6)).cos();
            let mut j = 4;
            while j < nwh {
                let dj = delta * T::from_usize(j);
                let dj3 = T::from_usize(3) * delta * T::from_usize(j);
                w[j] = dj.cos();
                w[j + 1] = dj.sin();
                w[j + 2] = dj3.cos();
                w[j + 3] = -dj3.sin();
                j += 4;
            }
        }
        // Successive halvings copy the even-indexed entries of the previous
        // resolution level into the next block of the table.
        let w = &mut self.w;
        let mut nw0 = 0;
        while nwh > 2 {
            let nw1 = nw0 + nwh;
            nwh >>= 1;
            w[nw1] = T::one();
            w[nw1 + 1] = wn4r;
            if nwh == 4 {
                let wk1r = w[nw0 + 4];
                let wk1i = w[nw0 + 5];
                w[nw1 + 2] = wk1r;
                w[nw1 + 3] = wk1i;
            } else if nwh > 4 {
                let wk1r = w[nw0 + 4];
                let wk3r = w[nw0 + 6];
                w[nw1 + 2] = half / wk1r;
                w[nw1 + 3] = half / wk3r;
                let mut j = 4;
                while j < nwh {
                    let idx1 = nw0 + 2 * j;
                    let idx2 = nw1 + j;
                    w[idx2] = w[idx1];
                    w[idx2 + 1] = w[idx1 + 1];
                    w[idx2 + 2] = w[idx1 + 2];
                    w[idx2 + 3] = w[idx1 + 3];
                    j += 4;
                }
            }
            nw0 = nw1;
        }
    }

    fn makeipt(&mut self, nw: usize) {
        let ip = &mut self.ip;
        ip[2] = 0;
        ip[3] = 16;
        let mut m = 2;
        let mut l = nw;
        while l > 32 {
            let m2 = m << 1;
            let q = m2 << 3;
            for j in m..m2 {
                let p = ip[j] << 2;
                ip[m + j] = p;
                ip[m2 + j] = p + q;
            }
            m = m2;
            l >>= 2;
        }
    }

    fn makect(&mut self, nc: usize, startc: usize) {
        self.ip[1] = nc;
        if nc <= 1 {
            return;
        }
        let c = &mut self.w;
        let half = T::from_f32(0.5);
        let nch = nc >> 1;
        let delta = T::pi() * T::from_f32(0.25) / T::from_usize(nch);
        c[startc] = (delta * T::from_usize(nch)).cos();
        c[startc + nch] = half * c[startc];
        for j in 1..nch {
            let dj = delta * T::from_usize(j);
            c[startc + j] = half * dj.cos();
            c[startc + nc - j] = half * dj.sin();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_markers_record_built_lengths() {
        let t = Tables::<f64>::new(64);
        assert_eq!(t.nw(), 16);
        assert_eq!(t.nc(), 64);
        assert_eq!(t.w().len(), 80);
    }

    #[test]
    fn rebuild_for_same_size_is_noop() {
        let mut t = Tables::<f64>::new(256);
        let w_before = t.w.clone();
        let ip_before = t.ip.clone();
        t.ensure(256);
        t.ensure(128);
        assert_eq!(t.w, w_before);
        assert_eq!(t.ip, ip_before);
    }

    #[test]
    fn quarter_wave_constant() {
        // w[1] is cos(pi/4) at every resolution level.
        let t = Tables::<f64>::new(1024);
        let wn4r = core::f64::consts::FRAC_1_SQRT_2;
        assert!((t.w()[1] - wn4r).abs() < 1e-15);
    }

    #[test]
    fn tiny_sizes_build_cosine_table_only() {
        let t = Tables::<f32>::new(2);
        assert_eq!(t.nw(), 0);
        assert_eq!(t.nc(), 2);
        let t4 = Tables::<f32>::new(4);
        assert_eq!(t4.nw(), 1);
        assert_eq!(t4.nc(), 4);
    }
}
