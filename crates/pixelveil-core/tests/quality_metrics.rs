mod common;

use common::*;
use pixelveil_core::analysis::{calculate_metrics, quality_report};
use pixelveil_core::{Codec, CodecOptions, RawImage, StegoCodec, VeilError};

fn shifted(image: &RawImage, k: u8) -> RawImage {
    let samples = image.samples().iter().map(|s| s.saturating_add(k)).collect();
    RawImage::new(image.width(), image.height(), image.channels(), samples).unwrap()
}

#[test]
fn equal_images_have_perfect_metrics() {
    let image = noise_image(40, 30, 1);
    let metrics = calculate_metrics(&image, &image).unwrap();

    assert_eq!(metrics.mse, 0.0);
    assert!(metrics.psnr.is_infinite());
    assert_eq!(metrics.ssim, 1.0);
}

#[test]
fn constant_offset_has_known_error() {
    // noise samples stay below 240, so nothing saturates
    let image = noise_image(40, 30, 2);
    for k in [1u8, 2, 5, 15] {
        let metrics = calculate_metrics(&image, &shifted(&image, k)).unwrap();
        let expected_psnr = 20.0 * (255.0 / k as f64).log10();

        assert!((metrics.mse - (k as f64).powi(2)).abs() < 1e-9);
        assert!((metrics.psnr - expected_psnr).abs() < 1e-9);
    }
}

#[test]
fn metrics_refuse_different_layouts() {
    let a = noise_image(40, 30, 3);
    let b = noise_image(30, 40, 3);
    assert!(matches!(
        calculate_metrics(&a, &b),
        Err(VeilError::DimensionMismatch { .. })
    ));
}

#[test]
fn every_method_keeps_the_image_close_to_its_original() {
    let image = noise_image(96, 96, 4);
    for options in all_options() {
        let stego = Codec::from(options)
            .hide(&image, &message_of_len(100), Some(PASSWORD))
            .unwrap();
        let report = quality_report(&image, &stego, &options).unwrap();

        assert!(report.psnr > 45.0, "{options:?}: {report:?}");
        assert!(report.ssim > 0.98, "{options:?}: {report:?}");
        assert!(report.mse < 1.0, "{options:?}: {report:?}");
        assert_eq!(
            report.recommendations[..2],
            [
                "PSNR is good, image quality is preserved",
                "SSIM is good, image structure is preserved",
            ]
        );
    }
}

#[test]
fn report_carries_the_method_capacity() {
    let image = noise_image(64, 64, 5);
    let report = quality_report(&image, &image, &CodecOptions::Lsb).unwrap();
    assert_eq!(report.capacity, 64 * 64 * 3 / 8);
}
