// SPDX-License-Identifier: MPL-2.0

//! 1-D radix-2 Cooley-Tukey transforms.
//!
//! Two backends compute the same unnormalized DFT
//! `X_k = Σ_n x_n · e^(−2πi·k·n/N)` (sign flipped for the inverse):
//! a recursive even/odd decomposition ([`fft`]) and a non-recursive in-place
//! butterfly network ([`fft_inplace`]). Inverse transforms ([`ifft`],
//! [`ifft_inplace`]) additionally scale every element by `1/N`.
//!
//! All lengths must be powers of two; anything else is a contract violation
//! and panics.

use num_complex::Complex;
use std::f64::consts::PI;

use crate::bits;

/// Direction of a transform: forward maps samples to frequency coefficients,
/// inverse maps them back (unnormalized unless applied through [`ifft`] or
/// [`ifft_inplace`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Kernel `e^(−2πi·k·n/N)`.
    Forward,
    /// Kernel `e^(+2πi·k·n/N)`.
    Inverse,
}

impl Direction {
    fn sign(self) -> f64 {
        match self {
            Direction::Forward => 1.0,
            Direction::Inverse => -1.0,
        }
    }
}

/// Which 1-D backend the 2-D transform and the compressor run on.
///
/// Both produce results within floating-point rounding of each other; the
/// in-place variant avoids recursion and per-level allocations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Technique {
    /// Recursive even/odd decomposition.
    Recursive,
    /// Non-recursive in-place butterfly network.
    InPlace,
}

impl Default for Technique {
    fn default() -> Self {
        Technique::Recursive
    }
}

/// Twiddle factor `e^(−2πi·k·sign/n)`. Recomputed at every recursion level
/// and butterfly stage, never cached across calls.
fn twiddle(k: usize, n: usize, direction: Direction) -> Complex<f64> {
    Complex::from_polar(1.0, -2.0 * PI * k as f64 * direction.sign() / n as f64)
}

/// Compute the unnormalized DFT of `x` by recursive even/odd decomposition.
///
/// The base case is a single sample, which is its own transform. Larger
/// inputs split into even- and odd-indexed sub-sequences, recurse, and
/// combine: `out[k] = even[k] + w_k·odd[k]`,
/// `out[k + N/2] = even[k] − w_k·odd[k]`.
///
/// # Panics
///
/// Panics if the length is not a power of two.
pub fn fft(x: &[Complex<f64>], direction: Direction) -> Vec<Complex<f64>> {
    let n = x.len();
    assert!(
        n.is_power_of_two(),
        "transform length must be a power of two, got {}",
        n
    );
    if n == 1 {
        return x.to_vec();
    }

    // Strided sub-sequences are not expressible as plain slices, so the
    // even/odd split copies.
    let even: Vec<Complex<f64>> = x.iter().step_by(2).copied().collect();
    let odd: Vec<Complex<f64>> = x.iter().skip(1).step_by(2).copied().collect();
    let even = fft(&even, direction);
    let odd = fft(&odd, direction);

    let half = n / 2;
    let mut out = vec![Complex::default(); n];
    for k in 0..half {
        let t = twiddle(k, n, direction) * odd[k];
        out[k] = even[k] + t;
        out[k + half] = even[k] - t;
    }
    out
}

/// Compute the inverse DFT of `x` recursively, scaled by `1/N`.
///
/// The scaling is a single elementwise pass after the unnormalized inverse
/// transform, so `ifft(fft(x, Forward))` recovers `x` up to rounding.
///
/// # Panics
///
/// Panics if the length is not a power of two.
pub fn ifft(x: &[Complex<f64>]) -> Vec<Complex<f64>> {
    let n = x.len();
    let mut out = fft(x, Direction::Inverse);
    let scale = 1.0 / n as f64;
    for value in &mut out {
        *value *= scale;
    }
    out
}

/// Compute the unnormalized DFT of `buffer` in place, without recursion.
///
/// The buffer is first reordered by [`bits::permute_in_place`], then combined
/// bottom-up in `log2(N)` butterfly stages. After the stage with block size
/// `2^scale`, every contiguous `2^scale` block holds the transform of its
/// bit-reversed input segment; after the last stage the buffer holds the full
/// transform.
///
/// The exclusive borrow is the ownership contract: nothing can observe the
/// buffer between stages, and its previous contents are gone on return.
///
/// # Panics
///
/// Panics if the length is not a power of two.
pub fn fft_inplace(buffer: &mut [Complex<f64>], direction: Direction) {
    let n = buffer.len();
    assert!(
        n.is_power_of_two(),
        "transform length must be a power of two, got {}",
        n
    );
    bits::permute_in_place(buffer);

    let stages = n.trailing_zeros();
    for scale in 1..=stages {
        let block = 1usize << scale;
        let half = block / 2;
        for start in (0..n).step_by(block) {
            for k in 0..half {
                let t = twiddle(k, block, direction) * buffer[start + half + k];
                let even = buffer[start + k];
                buffer[start + k] = even + t;
                buffer[start + half + k] = even - t;
            }
        }
    }
}

/// Compute the inverse DFT of `buffer` in place, scaled by `1/N`.
///
/// # Panics
///
/// Panics if the length is not a power of two.
pub fn ifft_inplace(buffer: &mut [Complex<f64>]) {
    let n = buffer.len();
    fft_inplace(buffer, Direction::Inverse);
    let scale = 1.0 / n as f64;
    for value in buffer.iter_mut() {
        *value *= scale;
    }
}
