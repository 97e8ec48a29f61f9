//! Quality metrics and visual diagnostics for a stego image and its original.

mod bit_planes;
mod histogram;
mod metrics;
mod noise;
mod recommendations;
mod ssim;

pub use bit_planes::*;
pub use histogram::{channel_histograms, chi_square, histogram_difference, Histogram, BINS};
pub use metrics::*;
pub use noise::*;
pub use recommendations::*;
pub use ssim::{grayscale, ssim, ssim_planes};

use crate::capacity;
use crate::media::{CodecOptions, RawImage};
use crate::result::Result;

#[derive(Debug, Clone, PartialEq)]
pub struct QualityReport {
    pub psnr: f64,
    pub mse: f64,
    pub ssim: f64,
    pub histogram_difference: f64,
    pub chi_square: f64,
    /// bytes the chosen method can carry in the original image
    pub capacity: usize,
    pub recommendations: Vec<String>,
}

pub fn quality_report(
    original: &RawImage,
    stego: &RawImage,
    options: &CodecOptions,
) -> Result<QualityReport> {
    let metrics = calculate_metrics(original, stego)?;
    let capacity = capacity::plan(original, options).bytes();
    log::debug!(
        "quality of {} embedding: psnr={:.2} ssim={:.4} capacity={capacity}",
        options.method(),
        metrics.psnr,
        metrics.ssim
    );

    Ok(QualityReport {
        psnr: metrics.psnr,
        mse: metrics.mse,
        ssim: metrics.ssim,
        histogram_difference: metrics.histogram_difference,
        chi_square: metrics.chi_square,
        capacity,
        recommendations: recommendations(&metrics),
    })
}

/// everything the analyzer knows about a stego image
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub quality: QualityReport,
    pub noise: NoisePattern,
    /// bit planes of the stego image, least significant first
    pub bit_planes: [RawImage; 8],
}

pub fn generate_report(
    original: &RawImage,
    stego: &RawImage,
    options: &CodecOptions,
) -> Result<AnalysisReport> {
    Ok(AnalysisReport {
        quality: quality_report(original, stego, options)?,
        noise: analyze_noise_pattern(original, stego)?,
        bit_planes: analyze_bit_planes(stego)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::image::{LsbCodec, StegoCodec};
    use crate::test_utils::prepare_noise_image;

    #[test]
    fn should_report_on_an_lsb_embedding() {
        let original = prepare_noise_image(32, 32, 11);
        let stego = LsbCodec.hide(&original, "hello analysis", None).unwrap();
        let report = quality_report(&original, &stego, &CodecOptions::Lsb).unwrap();

        assert!(report.mse > 0.0 && report.mse <= 1.0);
        assert!(report.psnr > 48.0);
        assert!(report.ssim > 0.98);
        assert_eq!(report.capacity, 32 * 32 * 3 / 8);
        assert_eq!(
            report.recommendations,
            vec![
                "PSNR is good, image quality is preserved",
                "SSIM is good, image structure is preserved",
                "Histogram is stable, embedding is hard to detect",
            ]
        );
    }

    #[test]
    fn should_bundle_noise_and_bit_planes() {
        let original = prepare_noise_image(16, 8, 5);
        let stego = LsbCodec.hide(&original, "hi", None).unwrap();
        let report = generate_report(&original, &stego, &CodecOptions::Lsb).unwrap();

        assert!(report
            .noise
            .difference
            .samples()
            .iter()
            .all(|&s| s == 0 || s == 5));
        assert_eq!(report.bit_planes[0].dimensions(), stego.dimensions());
        assert_eq!(report.noise.histograms.len(), 3);
    }
}
