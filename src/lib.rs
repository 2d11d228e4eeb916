// SPDX-License-Identifier: MPL-2.0

//! Radix-2 Cooley-Tukey Fourier transforms and frequency-domain image compression.
//!
//! The 1-D transform comes in two numerically equivalent flavors: a recursive
//! even/odd decomposition ([`fft::fft`]) and a non-recursive in-place butterfly
//! network ([`fft::fft_inplace`]). Both require power-of-two lengths. The 2-D
//! transform ([`fft2`]) applies a chosen 1-D backend separably across rows and
//! columns of a row-major buffer, and [`compress`] builds a lossy image
//! compressor on top of it by discarding small-magnitude frequency
//! coefficients.
//!
//! ```
//! use fftpress::fft::{fft, ifft, Direction};
//! use fftpress::num_complex::Complex;
//!
//! let x: Vec<Complex<f64>> = (0..8).map(|i| Complex::new(i as f64, 0.0)).collect();
//! let spectrum = fft(&x, Direction::Forward);
//! let back = ifft(&spectrum);
//! for (a, b) in x.iter().zip(&back) {
//!     assert!((a - b).norm() < 1e-12);
//! }
//! ```

#![warn(missing_docs)]

pub use num_complex;

// bit-reversal permutation used by the in-place transform
pub mod bits;

// 1-D transforms, recursive and in-place
pub mod fft;

// separable 2-D transform on row-major slices
pub mod fft2;

// lossy compression by frequency-domain thresholding
pub mod compress;

#[cfg(feature = "nalgebra")]
pub mod nalgebra;
