use core::f32::consts::PI as PI32;
use core::f64::consts::PI as PI64;

/// Minimal float trait for the generic transform kernel (no_std, libm-backed).
///
/// Only the operations the kernel actually needs: arithmetic operators for
/// the butterfly code, and `cos`/`sin`/`sqrt` for table construction and
/// output scaling.
pub trait Float:
    Copy
    + Clone
    + PartialEq
    + PartialOrd
    + core::fmt::Debug
    + core::ops::Add<Output = Self>
    + core::ops::Sub<Output = Self>
    + core::ops::Mul<Output = Self>
    + core::ops::Div<Output = Self>
    + core::ops::Neg<Output = Self>
    + Send
    + Sync
    + 'static
{
    fn zero() -> Self;
    fn one() -> Self;
    fn from_f32(x: f32) -> Self;
    /// Convert a table index or transform length into the float type.
    ///
    /// Plain `as` cast semantics; all values fed through this are small
    /// (bounded by the transform length).
    fn from_usize(x: usize) -> Self;
    fn cos(self) -> Self;
    fn sin(self) -> Self;
    fn sqrt(self) -> Self;
    fn pi() -> Self;
}

impl Float for f32 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
    fn from_f32(x: f32) -> Self {
        x
    }
    fn from_usize(x: usize) -> Self {
        x as f32
    }
    fn cos(self) -> Self {
        libm::cosf(self)
    }
    fn sin(self) -> Self {
        libm::sinf(self)
    }
    fn sqrt(self) -> Self {
        libm::sqrtf(self)
    }
    fn pi() -> Self {
        PI32
    }
}

impl Float for f64 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
    fn from_f32(x: f32) -> Self {
        x as f64
    }
    fn from_usize(x: usize) -> Self {
        x as f64
    }
    fn cos(self) -> Self {
        libm::cos(self)
    }
    fn sin(self) -> Self {
        libm::sin(self)
    }
    fn sqrt(self) -> Self {
        libm::sqrt(self)
    }
    fn pi() -> Self {
        PI64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqrt_is_exactly_rounded() {
        // libm and std both round sqrt correctly, so they agree bit-for-bit.
        assert_eq!(Float::sqrt(2.0f32), 2.0f32.sqrt());
        assert_eq!(Float::sqrt(0.5f64), 0.5f64.sqrt());
    }

    #[test]
    fn trig_close_to_std() {
        let x = 0.3f64;
        assert!((Float::cos(x) - 0.3f64.cos()).abs() < 1e-15);
        assert!((Float::sin(x) - 0.3f64.sin()).abs() < 1e-15);
    }
}
