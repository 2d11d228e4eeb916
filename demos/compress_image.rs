// SPDX-License-Identifier: MPL-2.0

//! Compress a synthetic grayscale image at several factors and write the
//! results, plus a centered view of its magnitude spectrum, as PNG files.

use fftpress::compress::compress_monotone;
use fftpress::fft::Technique;
use fftpress::fft2::{fft_2d, fftshift};
use fftpress::num_complex::Complex;
use image::GrayImage;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let width = 300usize;
    let height = 200usize;
    let pixels = synthetic_image(width, height);

    for factor in [2.0, 10.0, 50.0] {
        let compressed = compress_monotone(width, height, &pixels, factor, Technique::InPlace);
        let img = GrayImage::from_raw(width as u32, height as u32, compressed)
            .expect("buffer matches dimensions");
        let path = format!("compressed_{}.png", factor as u32);
        img.save(&path)?;
        println!("wrote {}", path);
    }

    // Spectrum view of the padded image, log scale, low frequencies centered.
    let padded_width = width.next_power_of_two();
    let padded_height = height.next_power_of_two();
    let padded = fftpress::compress::expand(width, height, &pixels);
    let mut buffer: Vec<Complex<f64>> =
        padded.into_iter().map(|p| Complex::new(p, 0.0)).collect();
    fft_2d(padded_width, padded_height, &mut buffer, Technique::InPlace);
    let shifted = fftshift(padded_width, padded_height, &buffer);

    let log_norms: Vec<f64> = shifted.iter().map(|c| (1.0 + c.norm()).ln()).collect();
    let max_norm = log_norms.iter().cloned().fold(f64::MIN, f64::max);
    let spectrum_raw: Vec<u8> = log_norms
        .into_iter()
        .map(|x| (x / max_norm * 255.0) as u8)
        .collect();
    let spectrum = GrayImage::from_raw(padded_width as u32, padded_height as u32, spectrum_raw)
        .expect("buffer matches dimensions");
    spectrum.save("spectrum.png")?;
    println!("wrote spectrum.png");

    Ok(())
}

/// Smooth gradient with a few superposed waves, enough structure for the
/// thresholding to visibly bite at high factors.
fn synthetic_image(width: usize, height: usize) -> Vec<f64> {
    let mut pixels = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let u = x as f64 / width as f64;
            let v = y as f64 / height as f64;
            let value = 96.0 * u + 64.0 * v
                + 48.0 * (12.0 * std::f64::consts::PI * u).sin()
                + 32.0 * (8.0 * std::f64::consts::PI * v).cos();
            pixels.push(value.clamp(0.0, 255.0));
        }
    }
    pixels
}
