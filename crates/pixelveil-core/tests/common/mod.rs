#![allow(dead_code)]

use pixelveil_core::media::{DwtCodecOptions, HybridCodecOptions, HybridMode};
use pixelveil_core::{CodecOptions, RawImage};

pub const PASSWORD: &str = "Secret42";

/// Deterministic noisy RGB image with samples in `[16, 240)`.
pub fn noise_image(width: u32, height: u32, seed: u64) -> RawImage {
    let mut state = seed ^ 0x9e37_79b9_7f4a_7c15;
    let mut samples = Vec::with_capacity((width * height * 3) as usize);
    for _ in 0..width * height * 3 {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        samples.push(16 + ((state >> 33) % 224) as u8);
    }

    RawImage::new(width, height, 3, samples).expect("noise image")
}

/// White RGB image with a pure red square in the middle, off the 2x2 block grid by one
/// pixel. Pure red cannot change its luma without leaving the RGB cube.
pub fn logo_image(width: u32, height: u32) -> RawImage {
    let (x0, y0) = (width / 4 - 1, height / 4 - 1);
    let (x1, y1) = (x0 + width / 2, y0 + height / 2);
    RawImage::from_fn(width, height, 3, |x, y, c| {
        let red = (x0..x1).contains(&x) && (y0..y1).contains(&y);
        if red && c > 0 {
            0
        } else {
            255
        }
    })
    .expect("logo image")
}

/// every method, LSB first, then DWT, Hybrid split and Hybrid redundant
pub fn all_options() -> Vec<CodecOptions> {
    vec![
        CodecOptions::Lsb,
        CodecOptions::Dwt(DwtCodecOptions::default()),
        CodecOptions::Hybrid(HybridCodecOptions::default().with_mode(HybridMode::Split)),
        CodecOptions::Hybrid(HybridCodecOptions::default().with_mode(HybridMode::Redundant)),
    ]
}

/// `len` printable single byte characters
pub fn message_of_len(len: usize) -> String {
    (0..len).map(|i| (b'a' + (i % 26) as u8) as char).collect()
}
