mod common;

use common::*;
use pixelveil_core::media::image::HybridCodec;
use pixelveil_core::media::{HybridCodecOptions, HybridMode};
use pixelveil_core::{Codec, CodecOptions, RawImage, StegoCodec};

const MESSAGE: &str = "kept twice, survives once";

fn redundant() -> Codec {
    Codec::from(CodecOptions::Hybrid(
        HybridCodecOptions::default().with_mode(HybridMode::Redundant),
    ))
}

/// flips the least significant bit of every sample below the transform region
fn flip_pixel_region(image: &RawImage) -> RawImage {
    let mut damaged = image.clone();
    for y in HybridCodec::transform_rows(image.height())..image.height() {
        for x in 0..image.width() {
            damaged.pixel_mut(x, y).iter_mut().for_each(|s| *s ^= 1);
        }
    }

    damaged
}

/// Raises the top left pixel of every 2x2 block of the transform region by one in all
/// channels. That moves its luma by exactly one and flips the parity of every block.
fn flip_transform_region(image: &RawImage) -> RawImage {
    let mut damaged = image.clone();
    for y in (0..HybridCodec::transform_rows(image.height())).step_by(2) {
        for x in (0..image.width()).step_by(2) {
            damaged.pixel_mut(x, y).iter_mut().for_each(|s| *s += 1);
        }
    }

    damaged
}

#[test]
fn redundant_mode_survives_a_broken_pixel_region() {
    let image = noise_image(96, 96, 31);
    let stego = redundant().hide(&image, MESSAGE, Some(PASSWORD)).unwrap();
    let damaged = flip_pixel_region(&stego);

    assert_eq!(redundant().unveil(&damaged, Some(PASSWORD)).unwrap(), MESSAGE);
}

#[test]
fn redundant_mode_survives_a_broken_transform_region() {
    let image = noise_image(96, 96, 32);
    let stego = redundant().hide(&image, MESSAGE, Some(PASSWORD)).unwrap();
    let damaged = flip_transform_region(&stego);

    assert_eq!(redundant().unveil(&damaged, Some(PASSWORD)).unwrap(), MESSAGE);
}

#[test]
fn split_mode_needs_both_regions() {
    let split = Codec::from(CodecOptions::Hybrid(HybridCodecOptions::default()));
    let image = noise_image(96, 96, 33);
    let stego = split.hide(&image, MESSAGE, Some(PASSWORD)).unwrap();
    assert!(split.unveil(&flip_pixel_region(&stego), Some(PASSWORD)).is_err());
    assert!(split
        .unveil(&flip_transform_region(&stego), Some(PASSWORD))
        .is_err());
}
