// SPDX-License-Identifier: MPL-2.0

//! Separable 2-D Fourier transform for nalgebra matrices.

use nalgebra::DMatrix;
use num_complex::Complex;

use crate::fft::Technique;
use crate::fft2;

/// Compute the 2-D Fourier transform of a matrix.
///
/// nalgebra stores matrices column-major, so the matrix data viewed as a
/// row-major buffer of width `nrows` feeds the slice engine columns-first;
/// the two separable passes commute, so the result is the same 2-D transform
/// rebuilt with the original storage order.
///
/// The transformation is not normalized; [`ifft_2d`] applies the full
/// `1 / (nrows * ncols)` scaling, so a forward/inverse pair composes to the
/// identity.
///
/// # Panics
///
/// Panics if either dimension is not a power of two.
pub fn fft_2d(mat: &DMatrix<Complex<f64>>, technique: Technique) -> DMatrix<Complex<f64>> {
    let (nrows, ncols) = mat.shape();
    let mut buffer = mat.as_slice().to_vec();
    fft2::fft_2d(nrows, ncols, &mut buffer, technique);
    DMatrix::from_column_slice(nrows, ncols, &buffer)
}

/// Compute the inverse 2-D Fourier transform of a matrix, normalized by
/// `1 / (nrows * ncols)`.
///
/// # Panics
///
/// Panics if either dimension is not a power of two.
pub fn ifft_2d(mat: &DMatrix<Complex<f64>>, technique: Technique) -> DMatrix<Complex<f64>> {
    let (nrows, ncols) = mat.shape();
    let mut buffer = mat.as_slice().to_vec();
    fft2::ifft_2d(nrows, ncols, &mut buffer, technique);
    DMatrix::from_column_slice(nrows, ncols, &buffer)
}
