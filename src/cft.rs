//! Split-radix complex transform core.
//!
//! The buffer holds `n/2` complex values as interleaved re/im pairs; `n`
//! throughout this module counts real slots. The driver pair
//! `cftfsub`/`cftbsub` dispatches on size: the fully unrolled kernels
//! below 64 slots, a flat leaf pass up to 512, and the recursive
//! split-radix decomposition (`cftrec4`/`cfttree`) above that. The top
//! radix-4 stage (`cftf1st`/`cftb1st`) runs before the recursion and
//! carries the reciprocal-cosine twiddle corrections; `cftmdl1`/`cftmdl2`
//! are the in-recursion stages for even and odd sub-blocks. The final
//! bit-reversal pass restores natural order.
//!
//! With the `parallel` feature the recursion below the top stage splits
//! into 2 or 4 disjoint contiguous chunks handled by `cftrec4_th`; the
//! chunk transforms are independent, so no synchronization is needed
//! beyond the scope join.

use crate::bitrev::{bitrv2, bitrv208, bitrv208neg, bitrv216, bitrv216neg, bitrv2conj};
use crate::kernels::{cftb040, cftf040, cftf081, cftf082, cftf161, cftf162, cftx020};
use crate::num::Float;

#[cfg(feature = "parallel")]
use core::sync::atomic::{AtomicUsize, Ordering};

/// Real-slot count above which the recursion splits across two workers.
#[cfg(feature = "parallel")]
pub(crate) const DCT_2THREADS_BEGIN_N: usize = 8192;

/// Real-slot count above which the recursion splits across four workers.
#[cfg(feature = "parallel")]
pub(crate) const DCT_4THREADS_BEGIN_N: usize = 65536;

#[cfg(feature = "parallel")]
static THREADS2_OVERRIDE: AtomicUsize = AtomicUsize::new(0);
#[cfg(feature = "parallel")]
static THREADS4_OVERRIDE: AtomicUsize = AtomicUsize::new(0);

/// Override the size above which transforms split across two workers.
/// Pass `0` to restore the built-in default. Affects all descriptors.
#[cfg(feature = "parallel")]
pub fn set_parallel_dct_threshold(n: usize) {
    THREADS2_OVERRIDE.store(n, Ordering::Relaxed);
}

/// Override the size above which transforms split across four workers.
/// Pass `0` to restore the built-in default. Affects all descriptors.
#[cfg(feature = "parallel")]
pub fn set_parallel_dct_quad_threshold(n: usize) {
    THREADS4_OVERRIDE.store(n, Ordering::Relaxed);
}

#[cfg(feature = "parallel")]
pub(crate) fn threads2_begin() -> usize {
    match THREADS2_OVERRIDE.load(Ordering::Relaxed) {
        0 => DCT_2THREADS_BEGIN_N,
        v => v,
    }
}

#[cfg(feature = "parallel")]
fn threads4_begin() -> usize {
    match THREADS4_OVERRIDE.load(Ordering::Relaxed) {
        0 => DCT_4THREADS_BEGIN_N,
        v => v,
    }
}

pub(crate) fn cftfsub<T: Float>(n: usize, a: &mut [T], ip: &[usize], nw: usize, w: &[T]) {
    if n > 8 {
        if n > 32 {
            cftf1st(n, a, &w[nw - (n >> 2)..]);
            cftrec(n, a, nw, w);
            bitrv2(n, ip, a);
        } else if n == 32 {
            cftf161(a, &w[nw - 8..]);
            bitrv216(a);
        } else {
            cftf081(a, w);
            bitrv208(a);
        }
    } else if n == 8 {
        cftf040(a);
    } else if n == 4 {
        cftx020(a);
    }
}

pub(crate) fn cftbsub<T: Float>(n: usize, a: &mut [T], ip: &[usize], nw: usize, w: &[T]) {
    if n > 8 {
        if n > 32 {
            cftb1st(n, a, &w[nw - (n >> 2)..]);
            cftrec(n, a, nw, w);
            bitrv2conj(n, ip, a);
        } else if n == 32 {
            cftf161(a, &w[nw - 8..]);
            bitrv216neg(a);
        } else {
            cftf081(a, w);
            bitrv208neg(a);
        }
    } else if n == 8 {
        cftb040(a);
    } else if n == 4 {
        cftx020(a);
    }
}

/// Dispatch the post-top-stage recursion by size, forking to worker
/// threads when enabled and profitable.
fn cftrec<T: Float>(n: usize, a: &mut [T], nw: usize, w: &[T]) {
    #[cfg(feature = "parallel")]
    if rayon::current_num_threads() > 1 && n > threads2_begin() {
        cftrec4_th(n, a, nw, w);
        return;
    }
    if n > 512 {
        cftrec4(n, a, nw, w);
    } else if n > 128 {
        cftleaf(n, 1, a, nw, w);
    } else {
        cftfx41(n, a, nw, w);
    }
}

/// Parallel recursion driver: the buffer is split into 2 or 4 contiguous
/// chunks of `m` slots. The chunk with index `idiv4` descends through the
/// odd-sub-block stage (`cftmdl2`); all others descend through the even
/// stage, mirroring what the sequential recursion would do in place.
#[cfg(feature = "parallel")]
fn cftrec4_th<T: Float>(n: usize, a: &mut [T], nw: usize, w: &[T]) {
    let mut idiv4 = 0;
    let mut m = n >> 1;
    if n > threads4_begin() {
        idiv4 = 1;
        m >>= 1;
    }
    #[cfg(feature = "verbose-logging")]
    log::trace!("parallel recursion: n={} chunks={}", n, n / m);
    rayon::scope(|s| {
        for (i, chunk) in a[..n].chunks_mut(m).enumerate() {
            s.spawn(move |_| {
                if i != idiv4 {
                    let mut mm = n;
                    while mm > 512 {
                        mm >>= 2;
                        cftmdl1(mm, &mut chunk[m - mm..], &w[nw - (mm >> 1)..]);
                    }
                    cftleaf(mm, 1, &mut chunk[m - mm..], nw, w);
                    let mut k = 0;
                    let mut j = m - mm;
                    while j > 0 {
                        k += 1;
                        let isplt = cfttree(mm, j, k, chunk, nw, w);
                        cftleaf(mm, isplt, &mut chunk[j - mm..], nw, w);
                        j -= mm;
                    }
                } else {
                    let mut k = 1;
                    let mut mm = n;
                    while mm > 512 {
                        mm >>= 2;
                        k <<= 2;
                        cftmdl2(mm, &mut chunk[m - mm..], &w[nw - mm..]);
                    }
                    cftleaf(mm, 0, &mut chunk[m - mm..], nw, w);
                    k >>= 1;
                    let mut j = m - mm;
                    while j > 0 {
                        k += 1;
                        let isplt = cfttree(mm, j, k, chunk, nw, w);
                        cftleaf(mm, isplt, &mut chunk[j - mm..], nw, w);
                        j -= mm;
                    }
                }
            });
        }
    });
}

fn cftrec4<T: Float>(n: usize, a: &mut [T], nw: usize, w: &[T]) {
    let mut m = n;
    while m > 512 {
        m >>= 2;
        cftmdl1(m, &mut a[n - m..], &w[nw - (m >> 1)..]);
    }
    cftleaf(m, 1, &mut a[n - m..], nw, w);
    let mut k = 0;
    let mut j = n - m;
    while j > 0 {
        k += 1;
        let isplt = cfttree(m, j, k, a, nw, w);
        cftleaf(m, isplt, &mut a[j - m..], nw, w);
        j -= m;
    }
}

/// Apply the pending mid stages above block `j` and report which leaf
/// flavor the block needs. The parity of the recursion path is recovered
/// from the bit pattern of the block counter `k`: the low bit decides
/// between the even and odd stage, and trailing zero bit-pairs tell how
/// many enclosing levels still need their stage applied.
fn cfttree<T: Float>(n: usize, j: usize, k: usize, a: &mut [T], nw: usize, w: &[T]) -> usize {
    if (k & 3) != 0 {
        let isplt = k & 1;
        if isplt != 0 {
            cftmdl1(n, &mut a[j - n..], &w[nw - (n >> 1)..]);
        } else {
            cftmdl2(n, &mut a[j - n..], &w[nw - n..]);
        }
        isplt
    } else {
        let mut m = n;
        let mut i = k;
        while (i & 3) == 0 {
            m <<= 2;
            i >>= 2;
        }
        let isplt = i & 1;
        if isplt != 0 {
            while m > 128 {
                cftmdl1(m, &mut a[j - m..], &w[nw - (m >> 1)..]);
                m >>= 2;
            }
        } else {
            while m > 128 {
                cftmdl2(m, &mut a[j - m..], &w[nw - m..]);
                m >>= 2;
            }
        }
        isplt
    }
}

fn cftleaf<T: Float>(n: usize, isplt: usize, a: &mut [T], nw: usize, w: &[T]) {
    if n == 512 {
        cftmdl1(128, a, &w[nw - 64..]);
        cftf161(a, &w[nw - 8..]);
        cftf162(&mut a[32..], &w[nw - 32..]);
        cftf161(&mut a[64..], &w[nw - 8..]);
        cftf161(&mut a[96..], &w[nw - 8..]);
        cftmdl2(128, &mut a[128..], &w[nw - 128..]);
        cftf161(&mut a[128..], &w[nw - 8..]);
        cftf162(&mut a[160..], &w[nw - 32..]);
        cftf161(&mut a[192..], &w[nw - 8..]);
        cftf162(&mut a[224..], &w[nw - 32..]);
        cftmdl1(128, &mut a[256..], &w[nw - 64..]);
        cftf161(&mut a[256..], &w[nw - 8..]);
        cftf162(&mut a[288..], &w[nw - 32..]);
        cftf161(&mut a[320..], &w[nw - 8..]);
        cftf161(&mut a[352..], &w[nw - 8..]);
        if isplt != 0 {
            cftmdl1(128, &mut a[384..], &w[nw - 64..]);
            cftf161(&mut a[480..], &w[nw - 8..]);
        } else {
            cftmdl2(128, &mut a[384..], &w[nw - 128..]);
            cftf162(&mut a[480..], &w[nw - 32..]);
        }
        cftf161(&mut a[384..], &w[nw - 8..]);
        cftf162(&mut a[416..], &w[nw - 32..]);
        cftf161(&mut a[448..], &w[nw - 8..]);
    } else {
        cftmdl1(64, a, &w[nw - 32..]);
        cftf081(a, &w[nw - 8..]);
        cftf082(&mut a[16..], &w[nw - 8..]);
        cftf081(&mut a[32..], &w[nw - 8..]);
        cftf081(&mut a[48..], &w[nw - 8..]);
        cftmdl2(64, &mut a[64..], &w[nw - 64..]);
        cftf081(&mut a[64..], &w[nw - 8..]);
        cftf082(&mut a[80..], &w[nw - 8..]);
        cftf081(&mut a[96..], &w[nw - 8..]);
        cftf082(&mut a[112..], &w[nw - 8..]);
        cftmdl1(64, &mut a[128..], &w[nw - 32..]);
        cftf081(&mut a[128..], &w[nw - 8..]);
        cftf082(&mut a[144..], &w[nw - 8..]);
        cftf081(&mut a[160..], &w[nw - 8..]);
        cftf081(&mut a[176..], &w[nw - 8..]);
        if isplt != 0 {
            cftmdl1(64, &mut a[192..], &w[nw - 32..]);
            cftf081(&mut a[240..], &w[nw - 8..]);
        } else {
            cftmdl2(64, &mut a[192..], &w[nw - 64..]);
            cftf082(&mut a[240..], &w[nw - 8..]);
        }
        cftf081(&mut a[192..], &w[nw - 8..]);
        cftf082(&mut a[208..], &w[nw - 8..]);
        cftf081(&mut a[224..], &w[nw - 8..]);
    }
}

fn cftfx41<T: Float>(n: usize, a: &mut [T], nw: usize, w: &[T]) {
    if n == 128 {
        cftf161(a, &w[nw - 8..]);
        cftf162(&mut a[32..], &w[nw - 32..]);
        cftf161(&mut a[64..], &w[nw - 8..]);
        cftf161(&mut a[96..], &w[nw - 8..]);
    } else {
        cftf081(a, &w[nw - 8..]);
        cftf082(&mut a[16..], &w[nw - 8..]);
        cftf081(&mut a[32..], &w[nw - 8..]);
        cftf081(&mut a[48..], &w[nw - 8..]);
    }
}

/// First radix-4 stage over the whole buffer. Twiddles are consumed in
/// half-resolution pairs: `wk*` apply to the even sub-column, `wd*` to the
/// odd one, with the reciprocal-cosine factors `csc1`/`csc3` correcting
/// the averaged pair.
fn cftf1st<T: Float>(n: usize, a: &mut [T], w: &[T]) {
    let mh = n >> 3;
    let m = 2 * mh;
    let mut j1 = m;
    let mut j2 = j1 + m;
    let mut j3 = j2 + m;
    let mut x0r = a[0] + a[j2];
    let mut x0i = a[1] + a[j2 + 1];
    let mut x1r = a[0] - a[j2];
    let mut x1i = a[1] - a[j2 + 1];
    let mut x2r = a[j1] + a[j3];
    let mut x2i = a[j1 + 1] + a[j3 + 1];
    let mut x3r = a[j1] - a[j3];
    let mut x3i = a[j1 + 1] - a[j3 + 1];
    a[0] = x0r + x2r;
    a[1] = x0i + x2i;
    a[j1] = x0r - x2r;
    a[j1 + 1] = x0i - x2i;
    a[j2] = x1r - x3i;
    a[j2 + 1] = x1i + x3r;
    a[j3] = x1r + x3i;
    a[j3 + 1] = x1i - x3r;
    let wn4r = w[1];
    let csc1 = w[2];
    let csc3 = w[3];
    let mut wd1r = T::one();
    let mut wd1i = T::zero();
    let mut wd3r = T::one();
    let mut wd3i = T::zero();
    let mut k = 0;
    let mut j = 2;
    while j < mh - 2 {
        k += 4;
        let wk1r = csc1 * (wd1r + w[k]);
        let wk1i = csc1 * (wd1i + w[k + 1]);
        let wk3r = csc3 * (wd3r + w[k + 2]);
        let wk3i = csc3 * (wd3i + w[k + 3]);
        wd1r = w[k];
        wd1i = w[k + 1];
        wd3r = w[k + 2];
        wd3i = w[k + 3];
        j1 = j + m;
        j2 = j1 + m;
        j3 = j2 + m;
        x0r = a[j] + a[j2];
        x0i = a[j + 1] + a[j2 + 1];
        x1r = a[j] - a[j2];
        x1i = a[j + 1] - a[j2 + 1];
        let mut y0r = a[j + 2] + a[j2 + 2];
        let mut y0i = a[j + 3] + a[j2 + 3];
        let mut y1r = a[j + 2] - a[j2 + 2];
        let mut y1i = a[j + 3] - a[j2 + 3];
        x2r = a[j1] + a[j3];
        x2i = a[j1 + 1] + a[j3 + 1];
        x3r = a[j1] - a[j3];
        x3i = a[j1 + 1] - a[j3 + 1];
        let mut y2r = a[j1 + 2] + a[j3 + 2];
        let mut y2i = a[j1 + 3] + a[j3 + 3];
        let mut y3r = a[j1 + 2] - a[j3 + 2];
        let mut y3i = a[j1 + 3] - a[j3 + 3];
        a[j] = x0r + x2r;
        a[j + 1] = x0i + x2i;
        a[j + 2] = y0r + y2r;
        a[j + 3] = y0i + y2i;
        a[j1] = x0r - x2r;
        a[j1 + 1] = x0i - x2i;
        a[j1 + 2] = y0r - y2r;
        a[j1 + 3] = y0i - y2i;
        x0r = x1r - x3i;
        x0i = x1i + x3r;
        a[j2] = wk1r * x0r - wk1i * x0i;
        a[j2 + 1] = wk1r * x0i + wk1i * x0r;
        x0r = y1r - y3i;
        x0i = y1i + y3r;
        a[j2 + 2] = wd1r * x0r - wd1i * x0i;
        a[j2 + 3] = wd1r * x0i + wd1i * x0r;
        x0r = x1r + x3i;
        x0i = x1i - x3r;
        a[j3] = wk3r * x0r + wk3i * x0i;
        a[j3 + 1] = wk3r * x0i - wk3i * x0r;
        x0r = y1r + y3i;
        x0i = y1i - y3r;
        a[j3 + 2] = wd3r * x0r + wd3i * x0i;
        a[j3 + 3] = wd3r * x0i - wd3i * x0r;
        let j0 = m - j;
        j1 = j0 + m;
        j2 = j1 + m;
        j3 = j2 + m;
        x0r = a[j0] + a[j2];
        x0i = a[j0 + 1] + a[j2 + 1];
        x1r = a[j0] - a[j2];
        x1i = a[j0 + 1] - a[j2 + 1];
        y0r = a[j0 - 2] + a[j2 - 2];
        y0i = a[j0 - 1] + a[j2 - 1];
        y1r = a[j0 - 2] - a[j2 - 2];
        y1i = a[j0 - 1] - a[j2 - 1];
        x2r = a[j1] + a[j3];
        x2i = a[j1 + 1] + a[j3 + 1];
        x3r = a[j1] - a[j3];
        x3i = a[j1 + 1] - a[j3 + 1];
        y2r = a[j1 - 2] + a[j3 - 2];
        y2i = a[j1 - 1] + a[j3 - 1];
        y3r = a[j1 - 2] - a[j3 - 2];
        y3i = a[j1 - 1] - a[j3 - 1];
        a[j0] = x0r + x2r;
        a[j0 + 1] = x0i + x2i;
        a[j0 - 2] = y0r + y2r;
        a[j0 - 1] = y0i + y2i;
        a[j1] = x0r - x2r;
        a[j1 + 1] = x0i - x2i;
        a[j1 - 2] = y0r - y2r;
        a[j1 - 1] = y0i - y2i;
        x0r = x1r - x3i;
        x0i = x1i + x3r;
        a[j2] = wk1i * x0r - wk1r * x0i;
        a[j2 + 1] = wk1i * x0i + wk1r * x0r;
        x0r = y1r - y3i;
        x0i = y1i + y3r;
        a[j2 - 2] = wd1i * x0r - wd1r * x0i;
        a[j2 - 1] = wd1i * x0i + wd1r * x0r;
        x0r = x1r + x3i;
        x0i = x1i - x3r;
        a[j3] = wk3i * x0r + wk3r * x0i;
        a[j3 + 1] = wk3i * x0i - wk3r * x0r;
        x0r = y1r + y3i;
        x0i = y1i - y3r;
        a[j3 - 2] = wd3i * x0r + wd3r * x0i;
        a[j3 - 1] = wd3i * x0i - wd3r * x0r;
        j += 4;
    }
    let wk1r = csc1 * (wd1r + wn4r);
    let wk1i = csc1 * (wd1i + wn4r);
    let wk3r = csc3 * (wd3r - wn4r);
    let wk3i = csc3 * (wd3i - wn4r);
    let j0 = mh;
    j1 = j0 + m;
    j2 = j1 + m;
    j3 = j2 + m;
    x0r = a[j0 - 2] + a[j2 - 2];
    x0i = a[j0 - 1] + a[j2 - 1];
    x1r = a[j0 - 2] - a[j2 - 2];
    x1i = a[j0 - 1] - a[j2 - 1];
    x2r = a[j1 - 2] + a[j3 - 2];
    x2i = a[j1 - 1] + a[j3 - 1];
    x3r = a[j1 - 2] - a[j3 - 2];
    x3i = a[j1 - 1] - a[j3 - 1];
    a[j0 - 2] = x0r + x2r;
    a[j0 - 1] = x0i + x2i;
    a[j1 - 2] = x0r - x2r;
    a[j1 - 1] = x0i - x2i;
    x0r = x1r - x3i;
    x0i = x1i + x3r;
    a[j2 - 2] = wk1r * x0r - wk1i * x0i;
    a[j2 - 1] = wk1r * x0i + wk1i * x0r;
    x0r = x1r + x3i;
    x0i = x1i - x3r;
    a[j3 - 2] = wk3r * x0r + wk3i * x0i;
    a[j3 - 1] = wk3r * x0i - wk3i * x0r;
    x0r = a[j0] + a[j2];
    x0i = a[j0 + 1] + a[j2 + 1];
    x1r = a[j0] - a[j2];
    x1i = a[j0 + 1] - a[j2 + 1];
    x2r = a[j1] + a[j3];
    x2i = a[j1 + 1] + a[j3 + 1];
    x3r = a[j1] - a[j3];
    x3i = a[j1 + 1] - a[j3 + 1];
    a[j0] = x0r + x2r;
    a[j0 + 1] = x0i + x2i;
    a[j1] = x0r - x2r;
    a[j1 + 1] = x0i - x2i;
    x0r = x1r - x3i;
    x0i = x1i + x3r;
    a[j2] = wn4r * (x0r - x0i);
    a[j2 + 1] = wn4r * (x0i + x0r);
    x0r = x1r + x3i;
    x0i = x1i - x3r;
    a[j3] = -wn4r * (x0r + x0i);
    a[j3 + 1] = -wn4r * (x0i - x0r);
    x0r = a[j0 + 2] + a[j2 + 2];
    x0i = a[j0 + 3] + a[j2 + 3];
    x1r = a[j0 + 2] - a[j2 + 2];
    x1i = a[j0 + 3] - a[j2 + 3];
    x2r = a[j1 + 2] + a[j3 + 2];
    x2i = a[j1 + 3] + a[j3 + 3];
    x3r = a[j1 + 2] - a[j3 + 2];
    x3i = a[j1 + 3] - a[j3 + 3];
    a[j0 + 2] = x0r + x2r;
    a[j0 + 3] = x0i + x2i;
    a[j1 + 2] = x0r - x2r;
    a[j1 + 3] = x0i - x2i;
    x0r = x1r - x3i;
    x0i = x1i + x3r;
    a[j2 + 2] = wk1i * x0r - wk1r * x0i;
    a[j2 + 3] = wk1i * x0i + wk1r * x0r;
    x0r = x1r + x3i;
    x0i = x1i - x3r;
    a[j3 + 2] = wk3i * x0r + wk3r * x0i;
    a[j3 + 3] = wk3i * x0i - wk3r * x0r;
}

/// Conjugate counterpart of [`cftf1st`]: imaginary inputs enter negated,
/// which folds the complex conjugation of the backward transform into the
/// first stage instead of a separate pass.
fn cftb1st<T: Float>(n: usize, a: &mut [T], w: &[T]) {
    let mh = n >> 3;
    let m = 2 * mh;
    let mut j1 = m;
    let mut j2 = j1 + m;
    let mut j3 = j2 + m;
    let mut x0r = a[0] + a[j2];
    let mut x0i = -a[1] - a[j2 + 1];
    let mut x1r = a[0] - a[j2];
    let mut x1i = -a[1] + a[j2 + 1];
    let mut x2r = a[j1] + a[j3];
    let mut x2i = a[j1 + 1] + a[j3 + 1];
    let mut x3r = a[j1] - a[j3];
    let mut x3i = a[j1 + 1] - a[j3 + 1];
    a[0] = x0r + x2r;
    a[1] = x0i - x2i;
    a[j1] = x0r - x2r;
    a[j1 + 1] = x0i + x2i;
    a[j2] = x1r + x3i;
    a[j2 + 1] = x1i + x3r;
    a[j3] = x1r - x3i;
    a[j3 + 1] = x1i - x3r;
    let wn4r = w[1];
    let csc1 = w[2];
    let csc3 = w[3];
    let mut wd1r = T::one();
    let mut wd1i = T::zero();
    let mut wd3r = T::one();
    let mut wd3i = T::zero();
    let mut k = 0;
    let mut j = 2;
    while j < mh - 2 {
        k += 4;
        let wk1r = csc1 * (wd1r + w[k]);
        let wk1i = csc1 * (wd1i + w[k + 1]);
        let wk3r = csc3 * (wd3r + w[k + 2]);
        let wk3i = csc3 * (wd3i + w[k + 3]);
        wd1r = w[k];
        wd1i = w[k + 1];
        wd3r = w[k + 2];
        wd3i = w[k + 3];
        j1 = j + m;
        j2 = j1 + m;
        j3 = j2 + m;
        x0r = a[j] + a[j2];
        x0i = -a[j + 1] - a[j2 + 1];
        x1r = a[j] - a[j2];
        x1i = -a[j + 1] + a[j2 + 1];
        let mut y0r = a[j + 2] + a[j2 + 2];
        let mut y0i = -a[j + 3] - a[j2 + 3];
        let mut y1r = a[j + 2] - a[j2 + 2];
        let mut y1i = -a[j + 3] + a[j2 + 3];
        x2r = a[j1] + a[j3];
        x2i = a[j1 + 1] + a[j3 + 1];
        x3r = a[j1] - a[j3];
        x3i = a[j1 + 1] - a[j3 + 1];
        let mut y2r = a[j1 + 2] + a[j3 + 2];
        let mut y2i = a[j1 + 3] + a[j3 + 3];
        let mut y3r = a[j1 + 2] - a[j3 + 2];
        let mut y3i = a[j1 + 3] - a[j3 + 3];
        a[j] = x0r + x2r;
        a[j + 1] = x0i - x2i;
        a[j + 2] = y0r + y2r;
        a[j + 3] = y0i - y2i;
        a[j1] = x0r - x2r;
        a[j1 + 1] = x0i + x2i;
        a[j1 + 2] = y0r - y2r;
        a[j1 + 3] = y0i + y2i;
        x0r = x1r + x3i;
        x0i = x1i + x3r;
        a[j2] = wk1r * x0r - wk1i * x0i;
        a[j2 + 1] = wk1r * x0i + wk1i * x0r;
        x0r = y1r + y3i;
        x0i = y1i + y3r;
        a[j2 + 2] = wd1r * x0r - wd1i * x0i;
        a[j2 + 3] = wd1r * x0i + wd1i * x0r;
        x0r = x1r - x3i;
        x0i = x1i - x3r;
        a[j3] = wk3r * x0r + wk3i * x0i;
        a[j3 + 1] = wk3r * x0i - wk3i * x0r;
        x0r = y1r - y3i;
        x0i = y1i - y3r;
        a[j3 + 2] = wd3r * x0r + wd3i * x0i;
        a[j3 + 3] = wd3r * x0i - wd3i * x0r;
        let j0 = m - j;
        j1 = j0 + m;
        j2 = j1 + m;
        j3 = j2 + m;
        x0r = a[j0] + a[j2];
        x0i = -a[j0 + 1] - a[j2 + 1];
        x1r = a[j0] - a[j2];
        x1i = -a[j0 + 1] + a[j2 + 1];
        y0r = a[j0 - 2] + a[j2 - 2];
        y0i = -a[j0 - 1] - a[j2 - 1];
        y1r = a[j0 - 2] - a[j2 - 2];
        y1i = -a[j0 - 1] + a[j2 - 1];
        x2r = a[j1] + a[j3];
        x2i = a[j1 + 1] + a[j3 + 1];
        x3r = a[j1] - a[j3];
        x3i = a[j1 + 1] - a[j3 + 1];
        y2r = a[j1 - 2] + a[j3 - 2];
        y2i = a[j1 - 1] + a[j3 - 1];
        y3r = a[j1 - 2] - a[j3 - 2];
        y3i = a[j1 - 1] - a[j3 - 1];
        a[j0] = x0r + x2r;
        a[j0 + 1] = x0i - x2i;
        a[j0 - 2] = y0r + y2r;
        a[j0 - 1] = y0i - y2i;
        a[j1] = x0r - x2r;
        a[j1 + 1] = x0i + x2i;
        a[j1 - 2] = y0r - y2r;
        a[j1 - 1] = y0i + y2i;
        x0r = x1r + x3i;
        x0i = x1i + x3r;
        a[j2] = wk1i * x0r - wk1r * x0i;
        a[j2 + 1] = wk1i * x0i + wk1r * x0r;
        x0r = y1r + y3i;
        x0i = y1i + y3r;
        a[j2 - 2] = wd1i * x0r - wd1r * x0i;
        a[j2 - 1] = wd1i * x0i + wd1r * x0r;
        x0r = x1r - x3i;
        x0i = x1i - x3r;
        a[j3] = wk3i * x0r + wk3r * x0i;
        a[j3 + 1] = wk3i * x0i - wk3r * x0r;
        x0r = y1r - y3i;
        x0i = y1i - y3r;
        a[j3 - 2] = wd3i * x0r + wd3r * x0i;
        a[j3 - 1] = wd3i * x0i - wd3r * x0r;
        j += 4;
    }
    let wk1r = csc1 * (wd1r + wn4r);
    let wk1i = csc1 * (wd1i + wn4r);
    let wk3r = csc3 * (wd3r - wn4r);
    let wk3i = csc3 * (wd3i - wn4r);
    let j0 = mh;
    j1 = j0 + m;
    j2 = j1 + m;
    j3 = j2 + m;
    x0r = a[j0 - 2] + a[j2 - 2];
    x0i = -a[j0 - 1] - a[j2 - 1];
    x1r = a[j0 - 2] - a[j2 - 2];
    x1i = -a[j0 - 1] + a[j2 - 1];
    x2r = a[j1 - 2] + a[j3 - 2];
    x2i = a[j1 - 1] + a[j3 - 1];
    x3r = a[j1 - 2] - a[j3 - 2];
    x3i = a[j1 - 1] - a[j3 - 1];
    a[j0 - 2] = x0r + x2r;
    a[j0 - 1] = x0i - x2i;
    a[j1 - 2] = x0r - x2r;
    a[j1 - 1] = x0i + x2i;
    x0r = x1r + x3i;
    x0i = x1i + x3r;
    a[j2 - 2] = wk1r * x0r - wk1i * x0i;
    a[j2 - 1] = wk1r * x0i + wk1i * x0r;
    x0r = x1r - x3i;
    x0i = x1i - x3r;
    a[j3 - 2] = wk3r * x0r + wk3i * x0i;
    a[j3 - 1] = wk3r * x0i - wk3i * x0r;
    x0r = a[j0] + a[j2];
    x0i = -a[j0 + 1] - a[j2 + 1];
    x1r = a[j0] - a[j2];
    x1i = -a[j0 + 1] + a[j2 + 1];
    x2r = a[j1] + a[j3];
    x2i = a[j1 + 1] + a[j3 + 1];
    x3r = a[j1] - a[j3];
    x3i = a[j1 + 1] - a[j3 + 1];
    a[j0] = x0r + x2r;
    a[j0 + 1] = x0i - x2i;
    a[j1] = x0r - x2r;
    a[j1 + 1] = x0i + x2i;
    x0r = x1r + x3i;
    x0i = x1i + x3r;
    a[j2] = wn4r * (x0r - x0i);
    a[j2 + 1] = wn4r * (x0i + x0r);
    x0r = x1r - x3i;
    x0i = x1i - x3r;
    a[j3] = -wn4r * (x0r + x0i);
    a[j3 + 1] = -wn4r * (x0i - x0r);
    x0r = a[j0 + 2] + a[j2 + 2];
    x0i = -a[j0 + 3] - a[j2 + 3];
    x1r = a[j0 + 2] - a[j2 + 2];
    x1i = -a[j0 + 3] + a[j2 + 3];
    x2r = a[j1 + 2] + a[j3 + 2];
    x2i = a[j1 + 3] + a[j3 + 3];
    x3r = a[j1 + 2] - a[j3 + 2];
    x3i = a[j1 + 3] - a[j3 + 3];
    a[j0 + 2] = x0r + x2r;
    a[j0 + 3] = x0i - x2i;
    a[j1 + 2] = x0r - x2r;
    a[j1 + 3] = x0i + x2i;
    x0r = x1r + x3i;
    x0i = x1i + x3r;
    a[j2 + 2] = wk1i * x0r - wk1r * x0i;
    a[j2 + 3] = wk1i * x0i + wk1r * x0r;
    x0r = x1r - x3i;
    x0i = x1i - x3r;
    a[j3 + 2] = wk3i * x0r + wk3r * x0i;
    a[j3 + 3] = wk3i * x0i - wk3r * x0r;
}

/// Mid-recursion radix-4 stage for even sub-blocks.
fn cftmdl1<T: Float>(n: usize, a: &mut [T], w: &[T]) {
    let mh = n >> 3;
    let m = 2 * mh;
    let mut j1 = m;
    let mut j2 = j1 + m;
    let mut j3 = j2 + m;
    let mut x0r = a[0] + a[j2];
    let mut x0i = a[1] + a[j2 + 1];
    let mut x1r = a[0] - a[j2];
    let mut x1i = a[1] - a[j2 + 1];
    let mut x2r = a[j1] + a[j3];
    let mut x2i = a[j1 + 1] + a[j3 + 1];
    let mut x3r = a[j1] - a[j3];
    let mut x3i = a[j1 + 1] - a[j3 + 1];
    a[0] = x0r + x2r;
    a[1] = x0i + x2i;
    a[j1] = x0r - x2r;
    a[j1 + 1] = x0i - x2i;
    a[j2] = x1r - x3i;
    a[j2 + 1] = x1i + x3r;
    a[j3] = x1r + x3i;
    a[j3 + 1] = x1i - x3r;
    let wn4r = w[1];
    let mut k = 0;
    let mut j = 2;
    while j < mh {
        k += 4;
        let wk1r = w[k];
        let wk1i = w[k + 1];
        let wk3r = w[k + 2];
        let wk3i = w[k + 3];
        j1 = j + m;
        j2 = j1 + m;
        j3 = j2 + m;
        x0r = a[j] + a[j2];
        x0i = a[j + 1] + a[j2 + 1];
        x1r = a[j] - a[j2];
        x1i = a[j + 1] - a[j2 + 1];
        x2r = a[j1] + a[j3];
        x2i = a[j1 + 1] + a[j3 + 1];
        x3r = a[j1] - a[j3];
        x3i = a[j1 + 1] - a[j3 + 1];
        a[j] = x0r + x2r;
        a[j + 1] = x0i + x2i;
        a[j1] = x0r - x2r;
        a[j1 + 1] = x0i - x2i;
        x0r = x1r - x3i;
        x0i = x1i + x3r;
        a[j2] = wk1r * x0r - wk1i * x0i;
        a[j2 + 1] = wk1r * x0i + wk1i * x0r;
        x0r = x1r + x3i;
        x0i = x1i - x3r;
        a[j3] = wk3r * x0r + wk3i * x0i;
        a[j3 + 1] = wk3r * x0i - wk3i * x0r;
        let j0 = m - j;
        j1 = j0 + m;
        j2 = j1 + m;
        j3 = j2 + m;
        x0r = a[j0] + a[j2];
        x0i = a[j0 + 1] + a[j2 + 1];
        x1r = a[j0] - a[j2];
        x1i = a[j0 + 1] - a[j2 + 1];
        x2r = a[j1] + a[j3];
        x2i = a[j1 + 1] + a[j3 + 1];
        x3r = a[j1] - a[j3];
        x3i = a[j1 + 1] - a[j3 + 1];
        a[j0] = x0r + x2r;
        a[j0 + 1] = x0i + x2i;
        a[j1] = x0r - x2r;
        a[j1 + 1] = x0i - x2i;
        x0r = x1r - x3i;
        x0i = x1i + x3r;
        a[j2] = wk1i * x0r - wk1r * x0i;
        a[j2 + 1] = wk1i * x0i + wk1r * x0r;
        x0r = x1r + x3i;
        x0i = x1i - x3r;
        a[j3] = wk3i * x0r + wk3r * x0i;
        a[j3 + 1] = wk3i * x0i - wk3r * x0r;
        j += 2;
    }
    let j0 = mh;
    j1 = j0 + m;
    j2 = j1 + m;
    j3 = j2 + m;
    x0r = a[j0] + a[j2];
    x0i = a[j0 + 1] + a[j2 + 1];
    x1r = a[j0] - a[j2];
    x1i = a[j0 + 1] - a[j2 + 1];
    x2r = a[j1] + a[j3];
    x2i = a[j1 + 1] + a[j3 + 1];
    x3r = a[j1] - a[j3];
    x3i = a[j1 + 1] - a[j3 + 1];
    a[j0] = x0r + x2r;
    a[j0 + 1] = x0i + x2i;
    a[j1] = x0r - x2r;
    a[j1 + 1] = x0i - x2i;
    x0r = x1r - x3i;
    x0i = x1i + x3r;
    a[j2] = wn4r * (x0r - x0i);
    a[j2 + 1] = wn4r * (x0i + x0r);
    x0r = x1r + x3i;
    x0i = x1i - x3r;
    a[j3] = -wn4r * (x0r + x0i);
    a[j3 + 1] = -wn4r * (x0i - x0r);
}

/// Mid-recursion radix-4 stage for odd sub-blocks. The second twiddle
/// index `kr` walks the table backwards, pairing each forward twiddle
/// with its mirrored half-angle counterpart.
fn cftmdl2<T: Float>(n: usize, a: &mut [T], w: &[T]) {
    let mh = n >> 3;
    let m = 2 * mh;
    let wn4r = w[1];
    let mut j1 = m;
    let mut j2 = j1 + m;
    let mut j3 = j2 + m;
    let mut x0r = a[0] - a[j2 + 1];
    let mut x0i = a[1] + a[j2];
    let mut x1r = a[0] + a[j2 + 1];
    let mut x1i = a[1] - a[j2];
    let mut x2r = a[j1] - a[j3 + 1];
    let mut x2i = a[j1 + 1] + a[j3];
    let mut x3r = a[j1] + a[j3 + 1];
    let mut x3i = a[j1 + 1] - a[j3];
    let mut y0r = wn4r * (x2r - x2i);
    let mut y0i = wn4r * (x2i + x2r);
    a[0] = x0r + y0r;
    a[1] = x0i + y0i;
    a[j1] = x0r - y0r;
    a[j1 + 1] = x0i - y0i;
    y0r = wn4r * (x3r - x3i);
    y0i = wn4r * (x3i + x3r);
    a[j2] = x1r - y0i;
    a[j2 + 1] = x1i + y0r;
    a[j3] = x1r + y0i;
    a[j3 + 1] = x1i - y0r;
    let mut k = 0;
    let mut kr = 2 * m;
    let mut j = 2;
    while j < mh {
        k += 4;
        let wk1r = w[k];
        let wk1i = w[k + 1];
        let wk3r = w[k + 2];
        let wk3i = w[k + 3];
        kr -= 4;
        let wd1i = w[kr];
        let wd1r = w[kr + 1];
        let wd3i = w[kr + 2];
        let wd3r = w[kr + 3];
        j1 = j + m;
        j2 = j1 + m;
        j3 = j2 + m;
        x0r = a[j] - a[j2 + 1];
        x0i = a[j + 1] + a[j2];
        x1r = a[j] + a[j2 + 1];
        x1i = a[j + 1] - a[j2];
        x2r = a[j1] - a[j3 + 1];
        x2i = a[j1 + 1] + a[j3];
        x3r = a[j1] + a[j3 + 1];
        x3i = a[j1 + 1] - a[j3];
        y0r = wk1r * x0r - wk1i * x0i;
        y0i = wk1r * x0i + wk1i * x0r;
        let mut y2r = wd1r * x2r - wd1i * x2i;
        let mut y2i = wd1r * x2i + wd1i * x2r;
        a[j] = y0r + y2r;
        a[j + 1] = y0i + y2i;
        a[j1] = y0r - y2r;
        a[j1 + 1] = y0i - y2i;
        y0r = wk3r * x1r + wk3i * x1i;
        y0i = wk3r * x1i - wk3i * x1r;
        y2r = wd3r * x3r + wd3i * x3i;
        y2i = wd3r * x3i - wd3i * x3r;
        a[j2] = y0r + y2r;
        a[j2 + 1] = y0i + y2i;
        a[j3] = y0r - y2r;
        a[j3 + 1] = y0i - y2i;
        let j0 = m - j;
        j1 = j0 + m;
        j2 = j1 + m;
        j3 = j2 + m;
        x0r = a[j0] - a[j2 + 1];
        x0i = a[j0 + 1] + a[j2];
        x1r = a[j0] + a[j2 + 1];
        x1i = a[j0 + 1] - a[j2];
        x2r = a[j1] - a[j3 + 1];
        x2i = a[j1 + 1] + a[j3];
        x3r = a[j1] + a[j3 + 1];
        x3i = a[j1 + 1] - a[j3];
        y0r = wd1i * x0r - wd1r * x0i;
        y0i = wd1i * x0i + wd1r * x0r;
        y2r = wk1i * x2r - wk1r * x2i;
        y2i = wk1i * x2i + wk1r * x2r;
        a[j0] = y0r + y2r;
        a[j0 + 1] = y0i + y2i;
        a[j1] = y0r - y2r;
        a[j1 + 1] = y0i - y2i;
        y0r = wd3i * x1r + wd3r * x1i;
        y0i = wd3i * x1i - wd3r * x1r;
        y2r = wk3i * x3r + wk3r * x3i;
        y2i = wk3i * x3i - wk3r * x3r;
        a[j2] = y0r + y2r;
        a[j2 + 1] = y0i + y2i;
        a[j3] = y0r - y2r;
        a[j3 + 1] = y0i - y2i;
        j += 2;
    }
    let wk1r = w[m];
    let wk1i = w[m + 1];
    let j0 = mh;
    j1 = j0 + m;
    j2 = j1 + m;
    j3 = j2 + m;
    x0r = a[j0] - a[j2 + 1];
    x0i = a[j0 + 1] + a[j2];
    x1r = a[j0] + a[j2 + 1];
    x1i = a[j0 + 1] - a[j2];
    x2r = a[j1] - a[j3 + 1];
    x2i = a[j1 + 1] + a[j3];
    x3r = a[j1] + a[j3 + 1];
    x3i = a[j1 + 1] - a[j3];
    y0r = wk1r * x0r - wk1i * x0i;
    y0i = wk1r * x0i + wk1i * x0r;
    let mut y2r = wk1i * x2r - wk1r * x2i;
    let mut y2i = wk1i * x2i + wk1r * x2r;
    a[j0] = y0r + y2r;
    a[j0 + 1] = y0i + y2i;
    a[j1] = y0r - y2r;
    a[j1 + 1] = y0i - y2i;
    y0r = wk1i * x1r - wk1r * x1i;
    y0i = wk1i * x1i + wk1r * x1r;
    y2r = wk1r * x3r - wk1i * x3i;
    y2i = wk1r * x3i + wk1i * x3r;
    a[j2] = y0r - y2r;
    a[j2 + 1] = y0i - y2i;
    a[j3] = y0r + y2r;
    a[j3 + 1] = y0i + y2i;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::Tables;
    use alloc::vec::Vec;

    fn energy(a: &[f64]) -> f64 {
        a.iter().map(|x| x * x).sum()
    }

    // Parseval for the unnormalized complex DFT over n/2 points:
    // output energy is (n/2) times input energy. Exercises every size
    // class of the dispatcher, including the recursive path.
    #[test]
    fn forward_transform_preserves_energy() {
        for &n in &[8usize, 16, 32, 64, 128, 256, 512, 1024, 2048, 8192] {
            let t = Tables::<f64>::new(n);
            let a0: Vec<f64> = (0..n).map(|i| ((i * 7 + 3) as f64 * 0.371).sin()).collect();
            let mut a = a0.clone();
            cftfsub(n, &mut a, t.ip(), t.nw(), t.w());
            let e0 = energy(&a0);
            let e1 = energy(&a);
            let expected = (n / 2) as f64 * e0;
            assert!(
                (e1 - expected).abs() < 1e-6 * expected,
                "n={}: energy {} vs expected {}",
                n,
                e1,
                expected
            );
        }
    }

    #[test]
    fn backward_transform_preserves_energy() {
        for &n in &[8usize, 16, 32, 64, 256, 1024, 4096] {
            let t = Tables::<f64>::new(n);
            let a0: Vec<f64> = (0..n).map(|i| ((i * 5 + 1) as f64 * 0.173).cos()).collect();
            let mut a = a0.clone();
            cftbsub(n, &mut a, t.ip(), t.nw(), t.w());
            let e0 = energy(&a0);
            let e1 = energy(&a);
            let expected = (n / 2) as f64 * e0;
            assert!(
                (e1 - expected).abs() < 1e-6 * expected,
                "n={}: energy {} vs expected {}",
                n,
                e1,
                expected
            );
        }
    }

    #[test]
    fn forward_dc_input_concentrates_at_bin_zero() {
        // Constant complex input transforms to a single spike of height n/2.
        let n = 256usize;
        let t = Tables::<f64>::new(n);
        let mut a = alloc::vec![0.0f64; n];
        for j in (0..n).step_by(2) {
            a[j] = 1.0;
        }
        cftfsub(n, &mut a, t.ip(), t.nw(), t.w());
        assert!((a[0] - (n / 2) as f64).abs() < 1e-9);
        for j in 2..n {
            assert!(a[j].abs() < 1e-9, "bin slot {} = {}", j, a[j]);
        }
    }
}
