//! Fixed-size butterfly kernels for the smallest block lengths.
//!
//! These are fully unrolled 2-, 4-, 8- and 16-point complex transforms.
//! The `1`-suffixed kernels take unit-stride twiddles for first-in-block
//! use; the `2`-suffixed kernels absorb the extra twiddle rotation applied
//! to odd sub-blocks. `a` is the 4/8/16/32-slot block, `w` the twiddle
//! slice already offset by the caller.

use crate::num::Float;

#[inline(always)]
pub(crate) fn cftf161<T: Float>(a: &mut [T], w: &[T]) {
    let wn4r = w[1];
    let wk1r = w[2];
    let wk1i = w[3];
    let mut x0r = a[0] + a[16];
    let mut x0i = a[1] + a[17];
    let mut x1r = a[0] - a[16];
    let mut x1i = a[1] - a[17];
    let mut x2r = a[8] + a[24];
    let mut x2i = a[9] + a[25];
    let mut x3r = a[8] - a[24];
    let mut x3i = a[9] - a[25];
    let y0r = x0r + x2r;
    let y0i = x0i + x2i;
    let y4r = x0r - x2r;
    let y4i = x0i - x2i;
    let y8r = x1r - x3i;
    let y8i = x1i + x3r;
    let y12r = x1r + x3i;
    let y12i = x1i - x3r;
    x0r = a[2] + a[18];
    x0i = a[3] + a[19];
    x1r = a[2] - a[18];
    x1i = a[3] - a[19];
    x2r = a[10] + a[26];
    x2i = a[11] + a[27];
    x3r = a[10] - a[26];
    x3i = a[11] - a[27];
    let y1r = x0r + x2r;
    let y1i = x0i + x2i;
    let y5r = x0r - x2r;
    let y5i = x0i - x2i;
    x0r = x1r - x3i;
    x0i = x1i + x3r;
    let y9r = wk1r * x0r - wk1i * x0i;
    let y9i = wk1r * x0i + wk1i * x0r;
    x0r = x1r + x3i;
    x0i = x1i - x3r;
    let y13r = wk1i * x0r - wk1r * x0i;
    let y13i = wk1i * x0i + wk1r * x0r;
    x0r = a[4] + a[20];
    x0i = a[5] + a[21];
    x1r = a[4] - a[20];
    x1i = a[5] - a[21];
    x2r = a[12] + a[28];
    x2i = a[13] + a[29];
    x3r = a[12] - a[28];
    x3i = a[13] - a[29];
    let y2r = x0r + x2r;
    let y2i = x0i + x2i;
    let y6r = x0r - x2r;
    let y6i = x0i - x2i;
    x0r = x1r - x3i;
    x0i = x1i + x3r;
    let y10r = wn4r * (x0r - x0i);
    let y10i = wn4r * (x0i + x0r);
    x0r = x1r + x3i;
    x0i = x1i - x3r;
    let y14r = wn4r * (x0r + x0i);
    let y14i = wn4r * (x0i - x0r);
    x0r = a[6] + a[22];
    x0i = a[7] + a[23];
    x1r = a[6] - a[22];
    x1i = a[7] - a[23];
    x2r = a[14] + a[30];
    x2i = a[15] + a[31];
    x3r = a[14] - a[30];
    x3i = a[15] - a[31];
    let y3r = x0r + x2r;
    let y3i = x0i + x2i;
    let y7r = x0r - x2r;
    let y7i = x0i - x2i;
    x0r = x1r - x3i;
    x0i = x1i + x3r;
    let y11r = wk1i * x0r - wk1r * x0i;
    let y11i = wk1i * x0i + wk1r * x0r;
    x0r = x1r + x3i;
    x0i = x1i - x3r;
    let y15r = wk1r * x0r - wk1i * x0i;
    let y15i = wk1r * x0i + wk1i * x0r;
    x0r = y12r - y14r;
    x0i = y12i - y14i;
    x1r = y12r + y14r;
    x1i = y12i + y14i;
    x2r = y13r - y15r;
    x2i = y13i - y15i;
    x3r = y13r + y15r;
    x3i = y13i + y15i;
    a[24] = x0r + x2r;
    a[25] = x0i + x2i;
    a[26] = x0r - x2r;
    a[27] = x0i - x2i;
    a[28] = x1r - x3i;
    a[29] = x1i + x3r;
    a[30] = x1r + x3i;
    a[31] = x1i - x3r;
    x0r = y8r + y10r;
    x0i = y8i + y10i;
    x1r = y8r - y10r;
    x1i = y8i - y10i;
    x2r = y9r + y11r;
    x2i = y9i + y11i;
    x3r = y9r - y11r;
    x3i = y9i - y11i;
    a[16] = x0r + x2r;
    a[17] = x0i + x2i;
    a[18] = x0r - x2r;
    a[19] = x0i - x2i;
    a[20] = x1r - x3i;
    a[21] = x1i + x3r;
    a[22] = x1r + x3i;
    a[23] = x1i - x3r;
    x0r = y5r - y7i;
    x0i = y5i + y7r;
    x2r = wn4r * (x0r - x0i);
    x2i = wn4r * (x0i + x0r);
    x0r = y5r + y7i;
    x0i = y5i - y7r;
    x3r = wn4r * (x0r - x0i);
    x3i = wn4r * (x0i + x0r);
    x0r = y4r - y6i;
    x0i = y4i + y6r;
    x1r = y4r + y6i;
    x1i = y4i - y6r;
    a[8] = x0r + x2r;
    a[9] = x0i + x2i;
    a[10] = x0r - x2r;
    a[11] = x0i - x2i;
    a[12] = x1r - x3i;
    a[13] = x1i + x3r;
    a[14] = x1r + x3i;
    a[15] = x1i - x3r;
    x0r = y0r + y2r;
    x0i = y0i + y2i;
    x1r = y0r - y2r;
    x1i = y0i - y2i;
    x2r = y1r + y3r;
    x2i = y1i + y3i;
    x3r = y1r - y3r;
    x3i = y1i - y3i;
    a[0] = x0r + x2r;
    a[1] = x0i + x2i;
    a[2] = x0r - x2r;
    a[3] = x0i - x2i;
    a[4] = x1r - x3i;
    a[5] = x1i + x3r;
    a[6] = x1r + x3i;
    a[7] = x1i - x3r;
}

#[inline(always)]
pub(crate) fn cftf162<T: Float>(a: &mut [T], w: &[T]) {
    let wn4r = w[1];
    let wk1r = w[4];
    let wk1i = w[5];
    let wk3r = w[6];
    let wk3i = -w[7];
    let wk2r = w[8];
    let wk2i = w[9];
    let mut x1r = a[0] - a[17];
    let mut x1i = a[1] + a[16];
    let mut x0r = a[8] - a[25];
    let mut x0i = a[9] + a[24];
    let mut x2r = wn4r * (x0r - x0i);
    let mut x2i = wn4r * (x0i + x0r);
    let y0r = x1r + x2r;
    let y0i = x1i + x2i;
    let y4r = x1r - x2r;
    let y4i = x1i - x2i;
    x1r = a[0] + a[17];
    x1i = a[1] - a[16];
    x0r = a[8] + a[25];
    x0i = a[9] - a[24];
    x2r = wn4r * (x0r - x0i);
    x2i = wn4r * (x0i + x0r);
    let y8r = x1r - x2i;
    let y8i = x1i + x2r;
    let y12r = x1r + x2i;
    let y12i = x1i - x2r;
    x0r = a[2] - a[19];
    x0i = a[3] + a[18];
    x1r = wk1r * x0r - wk1i * x0i;
    x1i = wk1r * x0i + wk1i * x0r;
    x0r = a[10] - a[27];
    x0i = a[11] + a[26];
    x2r = wk3i * x0r - wk3r * x0i;
    x2i = wk3i * x0i + wk3r * x0r;
    let y1r = x1r + x2r;
    let y1i = x1i + x2i;
    let y5r = x1r - x2r;
    let y5i = x1i - x2i;
    x0r = a[2] + a[19];
    x0i = a[3] - a[18];
    x1r = wk3r * x0r - wk3i * x0i;
    x1i = wk3r * x0i + wk3i * x0r;
    x0r = a[10] + a[27];
    x0i = a[11] - a[26];
    x2r = wk1r * x0r + wk1i * x0i;
    x2i = wk1r * x0i - wk1i * x0r;
    let y9r = x1r - x2r;
    let y9i = x1i - x2i;
    let y13r = x1r + x2r;
    let y13i = x1i + x2i;
    x0r = a[4] - a[21];
    x0i = a[5] + a[20];
    x1r = wk2r * x0r - wk2i * x0i;
    x1i = wk2r * x0i + wk2i * x0r;
    x0r = a[12] - a[29];
    x0i = a[13] + a[28];
    x2r = wk2i * x0r - wk2r * x0i;
    x2i = wk2i * x0i + wk2r * x0r;
    let y2r = x1r + x2r;
    let y2i = x1i + x2i;
    let y6r = x1r - x2r;
    let y6i = x1i - x2i;
    x0r = a[4] + a[21];
    x0i = a[5] - a[20];
    x1r = wk2i * x0r - wk2r * x0i;
    x1i = wk2i * x0i + wk2r * x0r;
    x0r = a[12] + a[29];
    x0i = a[13] - a[28];
    x2r = wk2r * x0r - wk2i * x0i;
    x2i = wk2r * x0i + wk2i * x0r;
    let y10r = x1r - x2r;
    let y10i = x1i - x2i;
    let y14r = x1r + x2r;
    let y14i = x1i + x2i;
    x0r = a[6] - a[23];
    x0i = a[7] + a[22];
    x1r = wk3r * x0r - wk3i * x0i;
    x1i = wk3r * x0i + wk3i * x0r;
    x0r = a[14] - a[31];
    x0i = a[15] + a[30];
    x2r = wk1i * x0r - wk1r * x0i;
    x2i = wk1i * x0i + wk1r * x0r;
    let y3r = x1r + x2r;
    let y3i = x1i + x2i;
    let y7r = x1r - x2r;
    let y7i = x1i - x2i;
    x0r = a[6] + a[23];
    x0i = a[7] - a[22];
    x1r = wk1i * x0r + wk1r * x0i;
    x1i = wk1i * x0i - wk1r * x0r;
    x0r = a[14] + a[31];
    x0i = a[15] - a[30];
    x2r = wk3i * x0r - wk3r * x0i;
    x2i = wk3i * x0i + wk3r * x0r;
    let y11r = x1r + x2r;
    let y11i = x1i + x2i;
    let y15r = x1r - x2r;
    let y15i = x1i - x2i;
    x1r = y0r + y2r;
    x1i = y0i + y2i;
    x2r = y1r + y3r;
    x2i = y1i + y3i;
    a[0] = x1r + x2r;
    a[1] = x1i + x2i;
    a[2] = x1r - x2r;
    a[3] = x1i - x2i;
    x1r = y0r - y2r;
    x1i = y0i - y2i;
    x2r = y1r - y3r;
    x2i = y1i - y3i;
    a[4] = x1r - x2i;
    a[5] = x1i + x2r;
    a[6] = x1r + x2i;
    a[7] = x1i - x2r;
    x1r = y4r - y6i;
    x1i = y4i + y6r;
    x0r = y5r - y7i;
    x0i = y5i + y7r;
    x2r = wn4r * (x0r - x0i);
    x2i = wn4r * (x0i + x0r);
    a[8] = x1r + x2r;
    a[9] = x1i + x2i;
    a[10] = x1r - x2r;
    a[11] = x1i - x2i;
    x1r = y4r + y6i;
    x1i = y4i - y6r;
    x0r = y5r + y7i;
    x0i = y5i - y7r;
    x2r = wn4r * (x0r - x0i);
    x2i = wn4r * (x0i + x0r);
    a[12] = x1r - x2i;
    a[13] = x1i + x2r;
    a[14] = x1r + x2i;
    a[15] = x1i - x2r;
    x1r = y8r + y10r;
    x1i = y8i + y10i;
    x2r = y9r - y11r;
    x2i = y9i - y11i;
    a[16] = x1r + x2r;
    a[17] = x1i + x2i;
    a[18] = x1r - x2r;
    a[19] = x1i - x2i;
    x1r = y8r - y10r;
    x1i = y8i - y10i;
    x2r = y9r + y11r;
    x2i = y9i + y11i;
    a[20] = x1r - x2i;
    a[21] = x1i + x2r;
    a[22] = x1r + x2i;
    a[23] = x1i - x2r;
    x1r = y12r - y14i;
    x1i = y12i + y14r;
    x0r = y13r + y15i;
    x0i = y13i - y15r;
    x2r = wn4r * (x0r - x0i);
    x2i = wn4r * (x0i + x0r);
    a[24] = x1r + x2r;
    a[25] = x1i + x2i;
    a[26] = x1r - x2r;
    a[27] = x1i - x2i;
    x1r = y12r + y14i;
    x1i = y12i - y14r;
    x0r = y13r - y15i;
    x0i = y13i + y15r;
    x2r = wn4r * (x0r - x0i);
    x2i = wn4r * (x0i + x0r);
    a[28] = x1r - x2i;
    a[29] = x1i + x2r;
    a[30] = x1r + x2i;
    a[31] = x1i - x2r;
}

#[inline(always)]
pub(crate) fn cftf081<T: Float>(a: &mut [T], w: &[T]) {
    let wn4r = w[1];
    let mut x0r = a[0] + a[8];
    let mut x0i = a[1] + a[9];
    let mut x1r = a[0] - a[8];
    let mut x1i = a[1] - a[9];
    let mut x2r = a[4] + a[12];
    let mut x2i = a[5] + a[13];
    let mut x3r = a[4] - a[12];
    let mut x3i = a[5] - a[13];
    let y0r = x0r + x2r;
    let y0i = x0i + x2i;
    let y2r = x0r - x2r;
    let y2i = x0i - x2i;
    let y1r = x1r - x3i;
    let y1i = x1i + x3r;
    let y3r = x1r + x3i;
    let y3i = x1i - x3r;
    x0r = a[2] + a[10];
    x0i = a[3] + a[11];
    x1r = a[2] - a[10];
    x1i = a[3] - a[11];
    x2r = a[6] + a[14];
    x2i = a[7] + a[15];
    x3r = a[6] - a[14];
    x3i = a[7] - a[15];
    let y4r = x0r + x2r;
    let y4i = x0i + x2i;
    let y6r = x0r - x2r;
    let y6i = x0i - x2i;
    x0r = x1r - x3i;
    x0i = x1i + x3r;
    x2r = x1r + x3i;
    x2i = x1i - x3r;
    let y5r = wn4r * (x0r - x0i);
    let y5i = wn4r * (x0r + x0i);
    let y7r = wn4r * (x2r - x2i);
    let y7i = wn4r * (x2r + x2i);
    a[8] = y1r + y5r;
    a[9] = y1i + y5i;
    a[10] = y1r - y5r;
    a[11] = y1i - y5i;
    a[12] = y3r - y7i;
    a[13] = y3i + y7r;
    a[14] = y3r + y7i;
    a[15] = y3i - y7r;
    a[0] = y0r + y4r;
    a[1] = y0i + y4i;
    a[2] = y0r - y4r;
    a[3] = y0i - y4i;
    a[4] = y2r - y6i;
    a[5] = y2i + y6r;
    a[6] = y2r + y6i;
    a[7] = y2i - y6r;
}

#[inline(always)]
pub(crate) fn cftf082<T: Float>(a: &mut [T], w: &[T]) {
    let wn4r = w[1];
    let wk1r = w[2];
    let wk1i = w[3];
    let y0r = a[0] - a[9];
    let y0i = a[1] + a[8];
    let y1r = a[0] + a[9];
    let y1i = a[1] - a[8];
    let mut x0r = a[4] - a[13];
    let mut x0i = a[5] + a[12];
    let y2r = wn4r * (x0r - x0i);
    let y2i = wn4r * (x0i + x0r);
    x0r = a[4] + a[13];
    x0i = a[5] - a[12];
    let y3r = wn4r * (x0r - x0i);
    let y3i = wn4r * (x0i + x0r);
    x0r = a[2] - a[11];
    x0i = a[3] + a[10];
    let y4r = wk1r * x0r - wk1i * x0i;
    let y4i = wk1r * x0i + wk1i * x0r;
    x0r = a[2] + a[11];
    x0i = a[3] - a[10];
    let y5r = wk1i * x0r - wk1r * x0i;
    let y5i = wk1i * x0i + wk1r * x0r;
    x0r = a[6] - a[15];
    x0i = a[7] + a[14];
    let y6r = wk1i * x0r - wk1r * x0i;
    let y6i = wk1i * x0i + wk1r * x0r;
    x0r = a[6] + a[15];
    x0i = a[7] - a[14];
    let y7r = wk1r * x0r - wk1i * x0i;
    let y7i = wk1r * x0i + wk1i * x0r;
    x0r = y0r + y2r;
    x0i = y0i + y2i;
    let mut x1r = y4r + y6r;
    let mut x1i = y4i + y6i;
    a[0] = x0r + x1r;
    a[1] = x0i + x1i;
    a[2] = x0r - x1r;
    a[3] = x0i - x1i;
    x0r = y0r - y2r;
    x0i = y0i - y2i;
    x1r = y4r - y6r;
    x1i = y4i - y6i;
    a[4] = x0r - x1i;
    a[5] = x0i + x1r;
    a[6] = x0r + x1i;
    a[7] = x0i - x1r;
    x0r = y1r - y3i;
    x0i = y1i + y3r;
    x1r = y5r - y7r;
    x1i = y5i - y7i;
    a[8] = x0r + x1r;
    a[9] = x0i + x1i;
    a[10] = x0r - x1r;
    a[11] = x0i - x1i;
    x0r = y1r + y3i;
    x0i = y1i - y3r;
    x1r = y5r + y7r;
    x1i = y5i + y7i;
    a[12] = x0r - x1i;
    a[13] = x0i + x1r;
    a[14] = x0r + x1i;
    a[15] = x0i - x1r;
}

#[inline(always)]
pub(crate) fn cftf040<T: Float>(a: &mut [T]) {
    let x0r = a[0] + a[4];
    let x0i = a[1] + a[5];
    let x1r = a[0] - a[4];
    let x1i = a[1] - a[5];
    let x2r = a[2] + a[6];
    let x2i = a[3] + a[7];
    let x3r = a[2] - a[6];
    let x3i = a[3] - a[7];
    a[0] = x0r + x2r;
    a[1] = x0i + x2i;
    a[2] = x1r - x3i;
    a[3] = x1i + x3r;
    a[4] = x0r - x2r;
    a[5] = x0i - x2i;
    a[6] = x1r + x3i;
    a[7] = x1i - x3r;
}

#[inline(always)]
pub(crate) fn cftb040<T: Float>(a: &mut [T]) {
    let x0r = a[0] + a[4];
    let x0i = a[1] + a[5];
    let x1r = a[0] - a[4];
    let x1i = a[1] - a[5];
    let x2r = a[2] + a[6];
    let x2i = a[3] + a[7];
    let x3r = a[2] - a[6];
    let x3i = a[3] - a[7];
    a[0] = x0r + x2r;
    a[1] = x0i + x2i;
    a[2] = x1r + x3i;
    a[3] = x1i - x3r;
    a[4] = x0r - x2r;
    a[5] = x0i - x2i;
    a[6] = x1r - x3i;
    a[7] = x1i + x3r;
}

#[inline(always)]
pub(crate) fn cftx020<T: Float>(a: &mut [T]) {
    let x0r = a[0] - a[2];
    let x0i = a[1] - a[3];
    a[0] = a[0] + a[2];
    a[1] = a[1] + a[3];
    a[2] = x0r;
    a[3] = x0i;
}
