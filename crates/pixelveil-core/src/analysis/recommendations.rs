use super::ImageMetrics;

pub const PSNR_LOW: f64 = 30.0;
pub const PSNR_GOOD: f64 = 40.0;
pub const SSIM_LOW: f64 = 0.95;
pub const SSIM_GOOD: f64 = 0.98;
pub const HISTOGRAM_DETECTABLE: f64 = 1000.0;
pub const HISTOGRAM_STABLE: f64 = 500.0;

/// advice derived from the metrics, in a fixed order: PSNR, SSIM, histogram
pub fn recommendations(metrics: &ImageMetrics) -> Vec<String> {
    let mut advice = Vec::new();

    if metrics.psnr < PSNR_LOW {
        advice.push("PSNR is low, image quality needs improvement");
    } else if metrics.psnr > PSNR_GOOD {
        advice.push("PSNR is good, image quality is preserved");
    }

    if metrics.ssim < SSIM_LOW {
        advice.push("SSIM is low, image structure changed significantly");
    } else if metrics.ssim > SSIM_GOOD {
        advice.push("SSIM is good, image structure is preserved");
    }

    if metrics.histogram_difference > HISTOGRAM_DETECTABLE {
        advice.push("Histogram changed considerably, embedding may be detectable");
    } else if metrics.histogram_difference < HISTOGRAM_STABLE {
        advice.push("Histogram is stable, embedding is hard to detect");
    }

    advice.into_iter().map(String::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(psnr: f64, ssim: f64, histogram_difference: f64) -> ImageMetrics {
        ImageMetrics {
            mse: 0.0,
            psnr,
            ssim,
            histogram_difference,
            chi_square: 0.0,
        }
    }

    #[test]
    fn should_praise_a_clean_embedding() {
        assert_eq!(
            recommendations(&metrics(f64::INFINITY, 1.0, 0.0)),
            vec![
                "PSNR is good, image quality is preserved",
                "SSIM is good, image structure is preserved",
                "Histogram is stable, embedding is hard to detect",
            ]
        );
    }

    #[test]
    fn should_warn_about_a_poor_embedding() {
        assert_eq!(
            recommendations(&metrics(20.0, 0.5, 5000.0)),
            vec![
                "PSNR is low, image quality needs improvement",
                "SSIM is low, image structure changed significantly",
                "Histogram changed considerably, embedding may be detectable",
            ]
        );
    }

    #[test]
    fn should_stay_silent_in_between() {
        assert!(recommendations(&metrics(35.0, 0.96, 700.0)).is_empty());
        // thresholds themselves are neither good nor bad
        assert!(recommendations(&metrics(30.0, 0.95, 1000.0)).is_empty());
        assert!(recommendations(&metrics(40.0, 0.98, 500.0)).is_empty());
    }
}
