use super::histogram::{channel_histograms, chi_square, histogram_difference};
use super::ssim::ssim;
use crate::media::RawImage;
use crate::result::Result;

const PEAK: f64 = 255.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageMetrics {
    pub mse: f64,
    /// `+∞` for identical images
    pub psnr: f64,
    pub ssim: f64,
    pub histogram_difference: f64,
    pub chi_square: f64,
}

pub fn mean_squared_error(original: &RawImage, stego: &RawImage) -> f64 {
    let sum: f64 = original
        .samples()
        .iter()
        .zip(stego.samples())
        .map(|(&a, &b)| {
            let d = a as f64 - b as f64;
            d * d
        })
        .sum();

    sum / original.samples().len() as f64
}

pub fn peak_signal_to_noise(mse: f64) -> f64 {
    if mse == 0.0 {
        f64::INFINITY
    } else {
        20.0 * (PEAK / mse.sqrt()).log10()
    }
}

/// Compares a stego image against its original.
pub fn calculate_metrics(original: &RawImage, stego: &RawImage) -> Result<ImageMetrics> {
    original.ensure_same_layout(stego)?;

    let mse = mean_squared_error(original, stego);
    let h1 = channel_histograms(original);
    let h2 = channel_histograms(stego);

    Ok(ImageMetrics {
        mse,
        psnr: peak_signal_to_noise(mse),
        ssim: ssim(original, stego),
        histogram_difference: histogram_difference(&h1, &h2),
        chi_square: chi_square(&h1, &h2),
    })
}
