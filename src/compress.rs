// SPDX-License-Identifier: MPL-2.0

//! Lossy image compression by frequency-domain thresholding.
//!
//! The pipeline pads a real-valued image to power-of-two dimensions, takes
//! its 2-D Fourier transform, zeroes every coefficient whose magnitude falls
//! at or below a threshold derived from the compression factor, inverts the
//! transform and crops back to the original shape. Larger factors discard
//! more coefficients.

use num_complex::Complex;

use crate::fft::Technique;
use crate::fft2::{fft_2d, ifft_2d};

/// Zero-pad a row-major image so that each dimension independently reaches
/// the next power of two.
///
/// The original content occupies the low-index corner of the returned buffer;
/// the input is not mutated. Dimensions that already are powers of two are
/// left as is. The padded dimensions are `width.next_power_of_two()` by
/// `height.next_power_of_two()`.
///
/// # Panics
///
/// Panics if `img.len() != width * height` or either dimension is zero.
pub fn expand(width: usize, height: usize, img: &[f64]) -> Vec<f64> {
    assert!(width > 0 && height > 0, "image dimensions must be nonzero");
    assert_eq!(
        img.len(),
        width * height,
        "image length {} does not match {}x{}",
        img.len(),
        width,
        height
    );
    let padded_width = width.next_power_of_two();
    let padded_height = height.next_power_of_two();
    let mut padded = vec![0.0; padded_width * padded_height];
    for (padded_row, row) in padded
        .chunks_exact_mut(padded_width)
        .zip(img.chunks_exact(width))
    {
        padded_row[..width].copy_from_slice(row);
    }
    padded
}

/// Crop a row-major buffer of width `padded_width` back to its original
/// `width` by `height` low-index corner. The input is not mutated.
///
/// # Panics
///
/// Panics if the requested region does not fit in the buffer.
pub fn contract<T: Copy>(
    padded_width: usize,
    width: usize,
    height: usize,
    buffer: &[T],
) -> Vec<T> {
    assert!(
        width <= padded_width && height * padded_width <= buffer.len(),
        "cannot contract {} samples of width {} to {}x{}",
        buffer.len(),
        padded_width,
        width,
        height
    );
    let mut cropped = Vec::with_capacity(width * height);
    for row in buffer.chunks_exact(padded_width).take(height) {
        cropped.extend_from_slice(&row[..width]);
    }
    cropped
}

/// Clamp to the pixel range [0, 255] and floor to an integer sample.
/// Saturation here is the documented lossy step, not an error.
fn quantize(value: f64) -> u8 {
    value.clamp(0.0, 255.0).floor() as u8
}

/// Zero every coefficient whose magnitude is at or below the threshold
/// derived from `factor`, and return how many coefficients survive.
///
/// The threshold is the magnitude ranked `floor(total / factor)` in
/// descending order, clamped into the valid index range so a degenerate
/// factor still keeps at least the single largest coefficient. The keep rule
/// is strictly `|F| > threshold`: ties at the threshold are discarded.
fn hard_threshold(coeffs: &mut [Complex<f64>], factor: f64) -> usize {
    let mut magnitudes: Vec<f64> = coeffs.iter().map(|c| c.norm()).collect();
    magnitudes.sort_unstable_by(|a, b| b.total_cmp(a));
    let index = ((magnitudes.len() as f64 / factor).floor() as usize).min(magnitudes.len() - 1);
    let threshold = magnitudes[index];

    let mut kept = 0;
    for coeff in coeffs.iter_mut() {
        if coeff.norm() > threshold {
            kept += 1;
        } else {
            *coeff = Complex::default();
        }
    }
    kept
}

/// Compress a single-channel image and return it as integer pixels.
///
/// Expands the image to power-of-two dimensions, transforms it with the
/// selected backend, discards small-magnitude coefficients, inverts the
/// transform, crops back to `width` by `height`, and clamps the real part to
/// [0, 255]. A `factor` of 100 aims to keep roughly 1/100 of the
/// coefficients.
///
/// # Panics
///
/// Panics if `img.len() != width * height`, either dimension is zero, or
/// `factor <= 1`.
pub fn compress_monotone(
    width: usize,
    height: usize,
    img: &[f64],
    factor: f64,
    technique: Technique,
) -> Vec<u8> {
    assert!(factor > 1.0, "compression factor must be > 1, got {}", factor);
    let padded = expand(width, height, img);
    let padded_width = width.next_power_of_two();
    let padded_height = height.next_power_of_two();

    let mut buffer: Vec<Complex<f64>> =
        padded.into_iter().map(|p| Complex::new(p, 0.0)).collect();
    fft_2d(padded_width, padded_height, &mut buffer, technique);
    hard_threshold(&mut buffer, factor);
    ifft_2d(padded_width, padded_height, &mut buffer, technique);

    contract(padded_width, width, height, &buffer)
        .into_iter()
        .map(|c| quantize(c.re))
        .collect()
}

/// Compress a multi-channel image, one planar channel at a time.
///
/// Each channel is an independent `width` by `height` row-major buffer; the
/// channels are compressed separately with [`compress_monotone`] and returned
/// in the same order. A single-channel image is the rank-2 case; callers may
/// equivalently use [`compress_monotone`] directly.
///
/// # Panics
///
/// Panics if there are no channels, any channel length differs from
/// `width * height`, or `factor <= 1`.
pub fn compress(
    width: usize,
    height: usize,
    channels: &[Vec<f64>],
    factor: f64,
    technique: Technique,
) -> Vec<Vec<u8>> {
    assert!(!channels.is_empty(), "image must have at least one channel");
    channels
        .iter()
        .map(|channel| compress_monotone(width, height, channel, factor, technique))
        .collect()
}
