//! # srdct - Split-radix DCT for Rust
//!
//! Fast in-place DCT-II/DCT-III (the "forward"/"inverse" discrete cosine
//! transform pair) for power-of-two sizes, built on a split-radix real FFT.
//! Works on `f32` and `f64` buffers through a single generic code body.
//!
//! ## Features
//!
//! - **In-place transforms** over plain slices, with optional offset forms
//!   for windows inside larger buffers
//! - **Orthonormal scaling** behind a flag, so `inverse(forward(x))` is the
//!   identity
//! - **Descriptor reuse**: tables are built once per length; transforms go
//!   through `&self` and are safe to share across threads
//! - **Planner cache** keyed by transform length
//! - **Parallel decomposition** of large transforms (optional)
//!
//! ## Cargo Features
//!
//! - `std` (default): standard library support
//! - `parallel`: split large transforms across Rayon workers
//! - `verbose-logging`: trace-level logging of table builds and dispatch
//!
//! ## Example
//!
//! ```
//! use srdct::Dct1d64;
//!
//! let dct = Dct1d64::new(8).unwrap();
//! let mut data = [1.0, 2.0, 3.0, 4.0, 4.0, 3.0, 2.0, 1.0];
//! dct.forward(&mut data, true).unwrap();
//! dct.inverse(&mut data, true).unwrap();
//! assert!((data[0] - 1.0).abs() < 1e-12);
//! ```
//!
//! ## License
//!
//! Licensed under either of
//! - Apache License, Version 2.0
//! - MIT license
//!
//! at your option.

#![no_std]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bitrev;
mod cft;
mod kernels;
mod tables;

/// Transform descriptors, planner, and error type.
pub mod dct;
/// Minimal float abstraction the kernels are generic over.
pub mod num;

pub use dct::{Dct1d, Dct1d32, Dct1d64, DctError, DctPlanner};
pub use num::Float;

#[cfg(feature = "parallel")]
pub use cft::{set_parallel_dct_quad_threshold, set_parallel_dct_threshold};
