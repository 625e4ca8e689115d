//! Bit-reversal permutations over interleaved real/imaginary pairs.
//!
//! `bitrv2`/`bitrv2conj` reorder the in-place buffer between the butterfly
//! network and natural order, driven by the precomputed `ip` index table.
//! The two code paths (radix-group count `l == 8` vs. the rest) are a
//! performance specialization only; both realize the same permutation.
//! The conjugate variant additionally negates imaginary parts during the
//! swap, as required by the backward transform's conjugate symmetry.
//! `bitrv208`/`bitrv216` and their `neg` counterparts hard-code the
//! permutations for 16- and 32-slot buffers.

use crate::num::Float;

/// Swap the complex pair at slot `i` with the pair at slot `j`.
#[inline(always)]
fn swap2<T: Float>(a: &mut [T], i: usize, j: usize) {
    a.swap(i, j);
    a.swap(i + 1, j + 1);
}

/// Swap the complex pairs at slots `i` and `j`, negating both imaginary
/// parts in transit.
#[inline(always)]
fn swap2_conj<T: Float>(a: &mut [T], i: usize, j: usize) {
    let xr = a[i];
    let xi = -a[i + 1];
    let yr = a[j];
    let yi = -a[j + 1];
    a[i] = yr;
    a[i + 1] = yi;
    a[j] = xr;
    a[j + 1] = xi;
}

pub(crate) fn bitrv2<T: Float>(n: usize, ip: &[usize], a: &mut [T]) {
    let mut m = 1;
    let mut l = n >> 2;
    while l > 8 {
        m <<= 1;
        l >>= 2;
    }
    let nh = n >> 1;
    let nm = 4 * m;
    if l == 8 {
        for k in 0..m {
            for j in 0..k {
                let mut j1 = 4 * j + 2 * ip[m + k];
                let mut k1 = 4 * k + 2 * ip[m + j];
                swap2(a, j1, k1);
                j1 += nm;
                k1 += 2 * nm;
                swap2(a, j1, k1);
                j1 += nm;
                k1 -= nm;
                swap2(a, j1, k1);
                j1 += nm;
                k1 += 2 * nm;
                swap2(a, j1, k1);
                j1 += nh;
                k1 += 2;
                swap2(a, j1, k1);
                j1 -= nm;
                k1 -= 2 * nm;
                swap2(a, j1, k1);
                j1 -= nm;
                k1 += nm;
                swap2(a, j1, k1);
                j1 -= nm;
                k1 -= 2 * nm;
                swap2(a, j1, k1);
                j1 += 2;
                k1 += nh;
                swap2(a, j1, k1);
                j1 += nm;
                k1 += 2 * nm;
                swap2(a, j1, k1);
                j1 += nm;
                k1 -= nm;
                swap2(a, j1, k1);
                j1 += nm;
                k1 += 2 * nm;
                swap2(a, j1, k1);
                j1 -= nh;
                k1 -= 2;
                swap2(a, j1, k1);
                j1 -= nm;
                k1 -= 2 * nm;
                swap2(a, j1, k1);
                j1 -= nm;
                k1 += nm;
                swap2(a, j1, k1);
                j1 -= nm;
                k1 -= 2 * nm;
                swap2(a, j1, k1);
            }
            let mut k1 = 4 * k + 2 * ip[m + k];
            let mut j1 = k1 + 2;
            k1 += nh;
            swap2(a, j1, k1);
            j1 += nm;
            k1 += 2 * nm;
            swap2(a, j1, k1);
            j1 += nm;
            k1 -= nm;
            swap2(a, j1, k1);
            j1 -= 2;
            k1 -= nh;
            swap2(a, j1, k1);
            j1 += nh + 2;
            k1 += nh + 2;
            swap2(a, j1, k1);
            j1 -= nh - nm;
            k1 += 2 * nm - 2;
            swap2(a, j1, k1);
        }
    } else {
        for k in 0..m {
            for j in 0..k {
                let mut j1 = 4 * j + ip[m + k];
                let mut k1 = 4 * k + ip[m + j];
                swap2(a, j1, k1);
                j1 += nm;
                k1 += nm;
                swap2(a, j1, k1);
                j1 += nh;
                k1 += 2;
                swap2(a, j1, k1);
                j1 -= nm;
                k1 -= nm;
                swap2(a, j1, k1);
                j1 += 2;
                k1 += nh;
                swap2(a, j1, k1);
                j1 += nm;
                k1 += nm;
                swap2(a, j1, k1);
                j1 -= nh;
                k1 -= 2;
                swap2(a, j1, k1);
                j1 -= nm;
                k1 -= nm;
                swap2(a, j1, k1);
            }
            let mut k1 = 4 * k + ip[m + k];
            let mut j1 = k1 + 2;
            k1 += nh;
            swap2(a, j1, k1);
            j1 += nm;
            k1 += nm;
            swap2(a, j1, k1);
        }
    }
}

pub(crate) fn bitrv2conj<T: Float>(n: usize, ip: &[usize], a: &mut [T]) {
    let mut m = 1;
    let mut l = n >> 2;
    while l > 8 {
        m <<= 1;
        l >>= 2;
    }
    let nh = n >> 1;
    let nm = 4 * m;
    if l == 8 {
        for k in 0..m {
            for j in 0..k {
                let mut j1 = 4 * j + 2 * ip[m + k];
                let mut k1 = 4 * k + 2 * ip[m + j];
                swap2_conj(a, j1, k1);
                j1 += nm;
                k1 += 2 * nm;
                swap2_conj(a, j1, k1);
                j1 += nm;
                k1 -= nm;
                swap2_conj(a, j1, k1);
                j1 += nm;
                k1 += 2 * nm;
                swap2_conj(a, j1, k1);
                j1 += nh;
                k1 += 2;
                swap2_conj(a, j1, k1);
                j1 -= nm;
                k1 -= 2 * nm;
                swap2_conj(a, j1, k1);
                j1 -= nm;
                k1 += nm;
                swap2_conj(a, j1, k1);
                j1 -= nm;
                k1 -= 2 * nm;
                swap2_conj(a, j1, k1);
                j1 += 2;
                k1 += nh;
                swap2_conj(a, j1, k1);
                j1 += nm;
                k1 += 2 * nm;
                swap2_conj(a, j1, k1);
                j1 += nm;
                k1 -= nm;
                swap2_conj(a, j1, k1);
                j1 += nm;
                k1 += 2 * nm;
                swap2_conj(a, j1, k1);
                j1 -= nh;
                k1 -= 2;
                swap2_conj(a, j1, k1);
                j1 -= nm;
                k1 -= 2 * nm;
                swap2_conj(a, j1, k1);
                j1 -= nm;
                k1 += nm;
                swap2_conj(a, j1, k1);
                j1 -= nm;
                k1 -= 2 * nm;
                swap2_conj(a, j1, k1);
            }
            let mut k1 = 4 * k + 2 * ip[m + k];
            let mut j1 = k1 + 2;
            k1 += nh;
            a[j1 - 1] = -a[j1 - 1];
            swap2_conj(a, j1, k1);
            a[k1 + 3] = -a[k1 + 3];
            j1 += nm;
            k1 += 2 * nm;
            swap2_conj(a, j1, k1);
            j1 += nm;
            k1 -= nm;
            swap2_conj(a, j1, k1);
            j1 -= 2;
            k1 -= nh;
            swap2_conj(a, j1, k1);
            j1 += nh + 2;
            k1 += nh + 2;
            swap2_conj(a, j1, k1);
            j1 -= nh - nm;
            k1 += 2 * nm - 2;
            a[j1 - 1] = -a[j1 - 1];
            swap2_conj(a, j1, k1);
            a[k1 + 3] = -a[k1 + 3];
        }
    } else {
        for k in 0..m {
            for j in 0..k {
                let mut j1 = 4 * j + ip[m + k];
                let mut k1 = 4 * k + ip[m + j];
                swap2_conj(a, j1, k1);
                j1 += nm;
                k1 += nm;
                swap2_conj(a, j1, k1);
                j1 += nh;
                k1 += 2;
                swap2_conj(a, j1, k1);
                j1 -= nm;
                k1 -= nm;
                swap2_conj(a, j1, k1);
                j1 += 2;
                k1 += nh;
                swap2_conj(a, j1, k1);
                j1 += nm;
                k1 += nm;
                swap2_conj(a, j1, k1);
                j1 -= nh;
                k1 -= 2;
                swap2_conj(a, j1, k1);
                j1 -= nm;
                k1 -= nm;
                swap2_conj(a, j1, k1);
            }
            let mut k1 = 4 * k + ip[m + k];
            let mut j1 = k1 + 2;
            k1 += nh;
            a[j1 - 1] = -a[j1 - 1];
            swap2_conj(a, j1, k1);
            a[k1 + 3] = -a[k1 + 3];
            j1 += nm;
            k1 += nm;
            a[j1 - 1] = -a[j1 - 1];
            swap2_conj(a, j1, k1);
            a[k1 + 3] = -a[k1 + 3];
        }
    }
}

/// Hard-coded reversal for a 16-slot (8-point) block.
pub(crate) fn bitrv208<T: Float>(a: &mut [T]) {
    swap2(a, 2, 8);
    swap2(a, 6, 12);
}

/// Reversed-order variant of [`bitrv208`] used by the backward transform.
pub(crate) fn bitrv208neg<T: Float>(a: &mut [T]) {
    let x1r = a[2];
    let x1i = a[3];
    let x2r = a[4];
    let x2i = a[5];
    let x3r = a[6];
    let x3i = a[7];
    let x4r = a[8];
    let x4i = a[9];
    let x5r = a[10];
    let x5i = a[11];
    let x6r = a[12];
    let x6i = a[13];
    let x7r = a[14];
    let x7i = a[15];
    a[2] = x7r;
    a[3] = x7i;
    a[4] = x3r;
    a[5] = x3i;
    a[6] = x5r;
    a[7] = x5i;
    a[8] = x1r;
    a[9] = x1i;
    a[10] = x6r;
    a[11] = x6i;
    a[12] = x2r;
    a[13] = x2i;
    a[14] = x4r;
    a[15] = x4i;
}

/// Hard-coded reversal for a 32-slot (16-point) block.
pub(crate) fn bitrv216<T: Float>(a: &mut [T]) {
    swap2(a, 2, 16);
    swap2(a, 4, 8);
    swap2(a, 6, 24);
    swap2(a, 10, 20);
    swap2(a, 14, 28);
    swap2(a, 22, 26);
}

/// Reversed-order variant of [`bitrv216`] used by the backward transform.
pub(crate) fn bitrv216neg<T: Float>(a: &mut [T]) {
    let x1r = a[2];
    let x1i = a[3];
    let x2r = a[4];
    let x2i = a[5];
    let x3r = a[6];
    let x3i = a[7];
    let x4r = a[8];
    let x4i = a[9];
    let x5r = a[10];
    let x5i = a[11];
    let x6r = a[12];
    let x6i = a[13];
    let x7r = a[14];
    let x7i = a[15];
    let x8r = a[16];
    let x8i = a[17];
    let x9r = a[18];
    let x9i = a[19];
    let x10r = a[20];
    let x10i = a[21];
    let x11r = a[22];
    let x11i = a[23];
    let x12r = a[24];
    let x12i = a[25];
    let x13r = a[26];
    let x13i = a[27];
    let x14r = a[28];
    let x14i = a[29];
    let x15r = a[30];
    let x15i = a[31];
    a[2] = x15r;
    a[3] = x15i;
    a[4] = x7r;
    a[5] = x7i;
    a[6] = x11r;
    a[7] = x11i;
    a[8] = x3r;
    a[9] = x3i;
    a[10] = x13r;
    a[11] = x13i;
    a[12] = x5r;
    a[13] = x5i;
    a[14] = x9r;
    a[15] = x9i;
    a[16] = x1r;
    a[17] = x1i;
    a[18] = x14r;
    a[19] = x14i;
    a[20] = x6r;
    a[21] = x6i;
    a[22] = x10r;
    a[23] = x10i;
    a[24] = x2r;
    a[25] = x2i;
    a[26] = x12r;
    a[27] = x12i;
    a[28] = x4r;
    a[29] = x4i;
    a[30] = x8r;
    a[31] = x8i;
}
