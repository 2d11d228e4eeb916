// SPDX-License-Identifier: MPL-2.0

//! Comparison against rustfft as the trusted reference implementation.

use fftpress::fft::{fft, fft_inplace, ifft, Direction, Technique};
use fftpress::fft2;
use fftpress::num_complex::Complex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustfft::FftPlanner;

fn random_signal(n: usize, seed: u64) -> Vec<Complex<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
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

fn reference_forward(x: &[Complex<f64>]) -> Vec<Complex<f64>> {
    let mut buffer = x.to_vec();
    FftPlanner::new()
        .plan_fft_forward(x.len())
        .process(&mut buffer);
    buffer
}

#[test]
fn recursive_matches_reference() {
    for &n in &[8usize, 64] {
        let x = random_signal(n, 1);
        let result = fft(&x, Direction::Forward);
        let expected = reference_forward(&x);
        assert!(l2_distance(&result, &expected) < 1e-9 * n as f64);
    }
}

#[test]
fn inplace_matches_reference() {
    for &n in &[8usize, 64] {
        let x = random_signal(n, 2);
        let mut result = x.clone();
        fft_inplace(&mut result, Direction::Forward);
        let expected = reference_forward(&x);
        assert!(l2_distance(&result, &expected) < 1e-9 * n as f64);
    }
}

#[test]
fn inverse_matches_reference() {
    let n = 64;
    let x = random_signal(n, 3);
    let result = ifft(&x);

    // rustfft's inverse is unnormalized; scale it by 1/n to compare.
    let mut expected = x.clone();
    FftPlanner::new().plan_fft_inverse(n).process(&mut expected);
    for value in &mut expected {
        *value /= n as f64;
    }

    assert!(l2_distance(&result, &expected) < 1e-9 * n as f64);
}

#[test]
fn transform_2d_matches_reference() {
    let (width, height) = (16usize, 8usize);
    let grid = random_signal(width * height, 4);

    for technique in [Technique::Recursive, Technique::InPlace] {
        let mut result = grid.clone();
        fft2::fft_2d(width, height, &mut result, technique);

        // reference: rustfft over every row, then over every column
        let mut expected = grid.clone();
        let mut planner = FftPlanner::new();
        let row_fft = planner.plan_fft_forward(width);
        for row in expected.chunks_exact_mut(width) {
            row_fft.process(row);
        }
        let col_fft = planner.plan_fft_forward(height);
        for col in 0..width {
            let mut column: Vec<Complex<f64>> =
                (0..height).map(|r| expected[r * width + col]).collect();
            col_fft.process(&mut column);
            for (r, value) in column.into_iter().enumerate() {
                expected[r * width + col] = value;
            }
        }

        assert!(
            l2_distance(&result, &expected) < 1e-9 * (width * height) as f64,
            "2-D transform diverges from reference with {:?}",
            technique
        );
    }
}
