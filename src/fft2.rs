// SPDX-License-Identifier: MPL-2.0

//! Separable 2-D Fourier transform for row-major data such as images.

use num_complex::Complex;

use crate::fft::{fft, fft_inplace, ifft, ifft_inplace, Direction, Technique};

/// Compute the 2-D Fourier transform of a row-major image buffer.
///
/// Every row is transformed by the selected 1-D backend, then every column of
/// the intermediate result. The buffer comes back in its natural row-major
/// orientation: one transposition is needed to process the columns and a
/// second one restores the layout.
///
/// The transformation is not normalized; [`ifft_2d`] applies the full
/// `1 / (width * height)` scaling, so a forward/inverse pair composes to the
/// identity.
///
/// Remark: an allocation the size of the buffer is performed for each
/// transposition, and the recursive backend allocates per row.
///
/// # Panics
///
/// Panics if `buffer.len() != width * height` or either dimension is not a
/// power of two. Callers with arbitrary dimensions pad first, e.g. with
/// [`crate::compress::expand`].
pub fn fft_2d(width: usize, height: usize, buffer: &mut [Complex<f64>], technique: Technique) {
    check_dimensions(width, height, buffer.len());

    transform_rows(width, buffer, Direction::Forward, technique);

    // Transpose to reach the columns, then restore the orientation.
    let mut transposed = transpose(width, height, buffer);
    transform_rows(height, &mut transposed, Direction::Forward, technique);
    buffer.copy_from_slice(&transpose(height, width, &transposed));
}

/// Compute the inverse 2-D Fourier transform of a row-major buffer.
///
/// The composition order of [`fft_2d`] (rows, then columns) is undone in
/// reverse: columns first, then rows. Each 1-D inverse carries its own
/// `1/len` scaling, so the pair multiplies out to the
/// `1 / (width * height)` normalization of the 2-D inverse.
///
/// # Panics
///
/// Panics if `buffer.len() != width * height` or either dimension is not a
/// power of two.
pub fn ifft_2d(width: usize, height: usize, buffer: &mut [Complex<f64>], technique: Technique) {
    check_dimensions(width, height, buffer.len());

    let mut transposed = transpose(width, height, buffer);
    inverse_rows(height, &mut transposed, technique);
    buffer.copy_from_slice(&transpose(height, width, &transposed));

    inverse_rows(width, buffer, technique);
}

fn check_dimensions(width: usize, height: usize, len: usize) {
    assert_eq!(
        len,
        width * height,
        "buffer length {} does not match {}x{}",
        len,
        width,
        height
    );
    assert!(
        width.is_power_of_two() && height.is_power_of_two(),
        "both dimensions must be powers of two, got {}x{}",
        width,
        height
    );
}

fn transform_rows(
    width: usize,
    buffer: &mut [Complex<f64>],
    direction: Direction,
    technique: Technique,
) {
    for row in buffer.chunks_exact_mut(width) {
        match technique {
            Technique::Recursive => {
                let transformed = fft(row, direction);
                row.copy_from_slice(&transformed);
            }
            Technique::InPlace => fft_inplace(row, direction),
        }
    }
}

fn inverse_rows(width: usize, buffer: &mut [Complex<f64>], technique: Technique) {
    for row in buffer.chunks_exact_mut(width) {
        match technique {
            Technique::Recursive => {
                let transformed = ifft(row);
                row.copy_from_slice(&transformed);
            }
            Technique::InPlace => ifft_inplace(row),
        }
    }
}

pub(crate) fn transpose<T: Copy + Default>(width: usize, height: usize, matrix: &[T]) -> Vec<T> {
    let mut ind = 0;
    let mut ind_tr;
    let mut transposed = vec![T::default(); matrix.len()];
    for row in 0..height {
        ind_tr = row;
        for _ in 0..width {
            transposed[ind_tr] = matrix[ind];
            ind += 1;
            ind_tr += height;
        }
    }
    transposed
}

/// Shift the 4 quadrants of a Fourier transform to have all the low
/// frequencies at the center of the buffer.
///
/// For the even (power-of-two) dimensions this crate works with, the shift is
/// its own inverse.
pub fn fftshift<T: Copy + Default>(width: usize, height: usize, matrix: &[T]) -> Vec<T> {
    let mut shifted = vec![T::default(); matrix.len()];
    let half_width = width / 2;
    let half_height = height / 2;
    // Shift top and bottom quadrants.
    for row in 0..half_height {
        // top
        let mrow_start = row * width;
        let m_row = &matrix[mrow_start..mrow_start + width];
        // bottom
        let srow_start = mrow_start + (height - half_height) * width;
        let s_row = &mut shifted[srow_start..srow_start + width];
        // swap left and right
        s_row[width - half_width..width].copy_from_slice(&m_row[0..half_width]);
        s_row[0..width - half_width].copy_from_slice(&m_row[half_width..width]);
    }
    // Shift bottom and top quadrants.
    for row in half_height..height {
        // bottom
        let mrow_start = row * width;
        let m_row = &matrix[mrow_start..mrow_start + width];
        // top
        let srow_start = (row - half_height) * width;
        let s_row = &mut shifted[srow_start..srow_start + width];
        // swap left and right
        s_row[width - half_width..width].copy_from_slice(&m_row[0..half_width]);
        s_row[0..width - half_width].copy_from_slice(&m_row[half_width..width]);
    }
    shifted
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_grid(width: usize, height: usize, seed: u64) -> Vec<Complex<f64>> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..width * height)
            .map(|_| Complex::new(rng.gen_range(-1.0..1.0), 0.0))
            .collect()
    }

    fn l2_distance(a: &[Complex<f64>], b: &[Complex<f64>]) -> f64 {
        a.iter()
            .zip(b)
            .map(|(x, y)| (x - y).norm_sqr())
            .sum::<f64>()
            .sqrt()
    }

    #[test]
    fn transpose_rectangular() {
        #[rustfmt::skip]
        let matrix = [
            1, 2, 3,
            4, 5, 6,
        ];
        assert_eq!(transpose(3, 2, &matrix), vec![1, 4, 2, 5, 3, 6]);
    }

    #[test]
    fn transpose_twice_is_identity() {
        let grid = random_grid(8, 4, 3);
        assert_eq!(transpose(4, 8, &transpose(8, 4, &grid)), grid);
    }

    #[test]
    fn round_trip_both_techniques() {
        for technique in [Technique::Recursive, Technique::InPlace] {
            for &(width, height) in &[(1usize, 1usize), (4, 4), (8, 16), (16, 2)] {
                let grid = random_grid(width, height, 5);
                let mut buffer = grid.clone();
                fft_2d(width, height, &mut buffer, technique);
                ifft_2d(width, height, &mut buffer, technique);
                assert!(
                    l2_distance(&grid, &buffer) < 1e-9 * (width * height) as f64,
                    "round trip failed for {}x{} with {:?}",
                    width,
                    height,
                    technique
                );
            }
        }
    }

    #[test]
    fn techniques_agree() {
        let grid = random_grid(8, 8, 9);
        let mut recursive = grid.clone();
        let mut inplace = grid;
        fft_2d(8, 8, &mut recursive, Technique::Recursive);
        fft_2d(8, 8, &mut inplace, Technique::InPlace);
        assert!(l2_distance(&recursive, &inplace) < 1e-9 * 64.0);
    }

    #[test]
    fn constant_grid_concentrates_at_dc() {
        let mut buffer = vec![Complex::new(1.0, 0.0); 16];
        fft_2d(4, 4, &mut buffer, Technique::Recursive);
        assert!((buffer[0] - Complex::new(16.0, 0.0)).norm() < 1e-12);
        for value in &buffer[1..] {
            assert!(value.norm() < 1e-12);
        }
    }

    #[test]
    fn fftshift_moves_dc_to_center() {
        let mut grid = vec![0.0f64; 16];
        grid[0] = 1.0;
        let shifted = fftshift(4, 4, &grid);
        // DC lands at (height/2, width/2) in row-major order.
        assert_eq!(shifted[2 * 4 + 2], 1.0);
        assert_eq!(shifted.iter().filter(|&&x| x != 0.0).count(), 1);
    }

    #[test]
    #[should_panic(expected = "powers of two")]
    fn rejects_non_power_of_two_dimension() {
        let mut buffer = vec![Complex::default(); 12];
        fft_2d(3, 4, &mut buffer, Technique::Recursive);
    }

    #[test]
    #[should_panic(expected = "does not match")]
    fn rejects_mismatched_length() {
        let mut buffer = vec![Complex::default(); 10];
        fft_2d(4, 4, &mut buffer, Technique::Recursive);
    }
}
