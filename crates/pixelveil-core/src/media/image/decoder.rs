use super::TransformPolicy;
use crate::media::primitives::{BlockHeadroom, MediaPrimitive};
use crate::media::types::RawImage;
use crate::wavelet::Matrix;

/// Carrier over all color samples of an image, in the same order as
/// [`ImageColorsMut`](super::encoder::ImageColorsMut).
///
/// ## Example of usage
/// ```rust
/// use std::io::{Read, Write};
/// use pixelveil_core::media::RawImage;
/// use pixelveil_core::media::image::decoder::ImageColors;
/// use pixelveil_core::media::image::encoder::ImageColorsMut;
/// use pixelveil_core::universal_decoder::{Decoder, OneBitUnveil};
/// use pixelveil_core::universal_encoder::{Encoder, OneBitHide};
///
/// let mut image = RawImage::new(4, 4, 3, vec![0x80; 48]).expect("Cannot build image");
/// Encoder::new(ImageColorsMut::new(&mut image), OneBitHide)
///     .write_all(b"Hello!")
///     .expect("Cannot write secret message");
///
/// let mut secret = vec![0; 6];
/// Decoder::new(ImageColors::new(&image), OneBitUnveil)
///     .read_exact(&mut secret)
///     .expect("Cannot read 6 bytes from decoder");
/// assert_eq!(secret, b"Hello!");
/// ```
pub struct ImageColors<'a> {
    samples: std::slice::Iter<'a, u8>,
}

impl<'a> ImageColors<'a> {
    pub fn new(input: &'a RawImage) -> Self {
        Self {
            samples: input.samples().iter(),
        }
    }
}

impl Iterator for ImageColors<'_> {
    type Item = MediaPrimitive;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        self.samples
            .next()
            .map(|c| MediaPrimitive::ImageColorChannel(*c))
    }
}

/// Carrier over the coefficients of one subband, row major.
///
/// Skips the same blocks as [`coefficient_blocks_mut`](super::encoder::coefficient_blocks_mut).
pub struct Coefficients<'a> {
    values: std::iter::Zip<std::slice::Iter<'a, f64>, std::slice::Iter<'a, BlockHeadroom>>,
    policy: TransformPolicy,
}

impl<'a> Coefficients<'a> {
    pub fn new(subband: &'a Matrix, headroom: &'a [BlockHeadroom], policy: TransformPolicy) -> Self {
        Self {
            values: subband.as_slice().iter().zip(headroom.iter()),
            policy,
        }
    }
}

impl Iterator for Coefficients<'_> {
    type Item = MediaPrimitive;

    fn next(&mut self) -> Option<Self::Item> {
        let policy = self.policy;
        self.values
            .find(|(_, room)| policy.carries(room))
            .map(|(c, _)| MediaPrimitive::Coefficient(*c))
    }
}
