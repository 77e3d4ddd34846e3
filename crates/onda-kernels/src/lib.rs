//! Onda Kernels - fixed-shape buffer kernels for audio DSP and vector math
//!
//! This crate provides a set of free functions over caller-owned sample
//! slices, designed as the numeric substrate for audio/DSP pipelines:
//! no allocation, no state, no error plumbing in the processing path.
//!
//! # Kernel Groups
//!
//! ## Elementwise Arithmetic
//!
//! - [`add`] / [`sub`] / [`mul`] / [`div`] - per-element buffer arithmetic
//! - [`add_scalar`] / [`sub_scalar`] / [`mul_scalar`] / [`div_scalar`] - scalar operand forms
//! - [`madd`] / [`madd_scalar`] - fused multiply-add in one pass
//!
//! ## Complex Arithmetic
//!
//! Complex signals are pairs of same-length (real, imag) buffers:
//!
//! - [`mul_complex`] / [`mul_complex_scalar`] - complex multiply
//! - [`div_complex`] / [`div_complex_scalar`] - complex divide (conjugate over squared magnitude)
//! - [`abs_complex`] - complex magnitude
//!
//! ## Table Resampling
//!
//! - [`sample_linear`] - linear interpolation at fractional table positions
//! - [`sample_cubic`] - Catmull-Rom cubic Hermite interpolation
//! - [`Boundary`] - clamp or wrap (periodic) handling of out-of-range positions
//!
//! ## Channel Interleaving
//!
//! - [`pack`] - write planar channels into one interleaved buffer (offset + stride)
//! - [`unpack`] - split an interleaved buffer back into planar channels
//!
//! ## Elementwise Maps, Reductions, Fills
//!
//! - [`map`] - unary/binary transcendental maps ([`map::sin`], [`map::exp`], [`map::sign`], ...)
//! - [`reduce`] - [`reduce::min`], [`reduce::max`], [`reduce::sum`]
//! - [`fill`] - [`fill::ramp`] and seedable uniform noise via [`fill::Lcg`]
//!
//! # The Truncation Contract
//!
//! Every buffer-consuming kernel operates on the **minimum length** among
//! its buffer arguments and ignores any excess tail in longer buffers.
//! Destination samples beyond that effective length are left untouched.
//! There is no panic and no error return for mismatched shapes: elementwise
//! kernels truncate, and [`pack`] / [`unpack`] reject malformed shape
//! arguments as a silent no-op (observable via the `tracing` feature).
//!
//! Numeric edge cases (division by zero, log of a negative, out-of-domain
//! asin) propagate IEEE 754 infinities and NaNs unchanged rather than
//! signaling errors - uninterrupted single-pass throughput over per-sample
//! validation.
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the default `std` feature in
//! your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! onda-kernels = { version = "0.1", default-features = false }
//! ```
//!
//! All transcendental math goes through `libm`, so kernels behave
//! identically with and without `std`.
//!
//! # Example
//!
//! ```rust
//! use onda_kernels::{Boundary, mul_scalar, pack, sample_linear};
//!
//! // Evaluate a wavetable at fractional positions.
//! let table = [0.0, 1.0, 4.0, 9.0];
//! let positions = [0.5, 1.5, 2.5];
//! let mut out = [0.0; 3];
//! sample_linear(&mut out, &table, &positions, Boundary::Clamp);
//! assert_eq!(out, [0.5, 2.5, 6.5]);
//!
//! // Scale it and interleave with a second channel.
//! let mut scaled = [0.0; 3];
//! mul_scalar(&mut scaled, &out, 0.5);
//!
//! let mut stereo = [0.0; 6];
//! pack(&mut stereo, 0, 2, &[&out, &scaled]);
//! assert_eq!(stereo, [0.5, 0.25, 2.5, 1.25, 6.5, 3.25]);
//! ```
//!
//! # Design Principles
//!
//! - **Caller owns every buffer**: kernels borrow slices for one call and
//!   never allocate, resize, or retain them
//! - **Stateless**: concurrent calls on disjoint buffers are automatically
//!   safe; the borrow checker rules out destination/input aliasing
//! - **Shape errors are not errors**: truncate or no-op, never panic

#![cfg_attr(not(feature = "std"), no_std)]

pub mod arith;
pub mod complex;
pub mod fill;
pub mod interleave;
pub mod interp;
pub mod map;
pub mod reduce;

/// A single audio/vector sample. The sole scalar unit throughout the crate.
pub type Sample = f32;

// Re-export main kernels at crate root
pub use arith::{
    add, add_scalar, div, div_scalar, madd, madd_scalar, mul, mul_scalar, sub, sub_scalar,
};
pub use complex::{
    abs_complex, div_complex, div_complex_scalar, mul_complex, mul_complex_scalar,
};
pub use interleave::{pack, unpack};
pub use interp::{Boundary, sample_cubic, sample_linear};
