use crate::media::RawImage;

pub const BINS: usize = 256;

pub type Histogram = [u64; BINS];

/// one 256 bin histogram per channel
pub fn channel_histograms(image: &RawImage) -> Vec<Histogram> {
    let channels = image.channels() as usize;
    let mut histograms = vec![[0u64; BINS]; channels];
    for pixel in image.samples().chunks_exact(channels) {
        for (histogram, &value) in histograms.iter_mut().zip(pixel) {
            histogram[value as usize] += 1;
        }
    }

    histograms
}

/// mean over all channels of `Σ |h1 - h2|`
pub fn histogram_difference(original: &[Histogram], stego: &[Histogram]) -> f64 {
    mean_over_channels(original, stego, |h1, h2| (h1 - h2).abs())
}

/// mean over all channels of `Σ (h1 - h2)² / (h1 + 1e-10)`
pub fn chi_square(original: &[Histogram], stego: &[Histogram]) -> f64 {
    mean_over_channels(original, stego, |h1, h2| (h1 - h2).powi(2) / (h1 + 1e-10))
}

fn mean_over_channels<F>(original: &[Histogram], stego: &[Histogram], bin_term: F) -> f64
where
    F: Fn(f64, f64) -> f64,
{
    if original.is_empty() {
        return 0.0;
    }
    let total: f64 = original
        .iter()
        .zip(stego)
        .map(|(h1, h2)| {
            h1.iter()
                .zip(h2.iter())
                .map(|(&a, &b)| bin_term(a as f64, b as f64))
                .sum::<f64>()
        })
        .sum();

    total / original.len() as f64
}
