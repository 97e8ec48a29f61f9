use super::TransformPolicy;
use crate::media::color::YccPlanes;
use crate::media::primitives::{BlockHeadroom, CoefficientBlockMut, MediaPrimitiveMut};
use crate::media::types::RawImage;
use crate::wavelet::Subbands;

/// Mutable carrier over all color samples of an image, row by row, channel by channel
/// within a pixel.
///
/// ## Example of usage
/// ```rust
/// use std::io::Write;
/// use pixelveil_core::media::RawImage;
/// use pixelveil_core::media::image::encoder::ImageColorsMut;
/// use pixelveil_core::universal_encoder::{Encoder, OneBitHide};
///
/// let original = RawImage::from_fn(4, 4, 3, |x, y, c| (x * 16 + y * 4 + c as u32) as u8 * 2)
///     .expect("Cannot build carrier image");
/// let mut image = original.clone();
/// {
///     let mut encoder = Encoder::new(ImageColorsMut::new(&mut image), OneBitHide);
///     encoder.write_all(b"Hi!").expect("Cannot write secret message");
/// }
/// assert_ne!(original, image);
/// ```
pub struct ImageColorsMut<'a> {
    samples: std::slice::IterMut<'a, u8>,
}

impl<'a> ImageColorsMut<'a> {
    pub fn new(input: &'a mut RawImage) -> Self {
        Self {
            samples: input.samples_mut().iter_mut(),
        }
    }
}

impl<'a> Iterator for ImageColorsMut<'a> {
    type Item = MediaPrimitiveMut<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.samples.next().map(MediaPrimitiveMut::ImageColorChannel)
    }
}

/// luma headroom of the pixels `a`, `b`, `c` and `d` behind every Haar block, row major
pub fn block_headroom(planes: &YccPlanes, rows: usize, cols: usize) -> Vec<BlockHeadroom> {
    let (height, width) = (planes.height() as usize, planes.width() as usize);
    let pixel = |row: usize, col: usize| {
        (row < height && col < width).then(|| planes.headroom(row * width + col))
    };

    let mut headroom = Vec::with_capacity(rows * cols);
    for i in 0..rows {
        for j in 0..cols {
            headroom.push([
                pixel(2 * i, 2 * j),
                pixel(2 * i, 2 * j + 1),
                pixel(2 * i + 1, 2 * j),
                pixel(2 * i + 1, 2 * j + 1),
            ]);
        }
    }

    headroom
}

/// mutable carrier over the Haar blocks of a decomposed luma plane, row major, leaving
/// out the blocks the policy does not embed into
pub fn coefficient_blocks_mut<'a>(
    bands: &'a mut Subbands,
    headroom: &'a [BlockHeadroom],
    policy: TransformPolicy,
) -> impl Iterator<Item = MediaPrimitiveMut<'a>> + 'a {
    let Subbands {
        approximation,
        horizontal,
        vertical,
        diagonal,
    } = bands;

    approximation
        .as_mut_slice()
        .iter_mut()
        .zip(horizontal.as_mut_slice().iter_mut())
        .zip(vertical.as_mut_slice().iter_mut())
        .zip(diagonal.as_mut_slice().iter_mut())
        .zip(headroom.iter())
        .enumerate()
        .filter(move |(_, (_, room))| policy.carries(room))
        .map(|(index, ((((a, h), v), d), room))| {
            MediaPrimitiveMut::CoefficientBlock(CoefficientBlockMut {
                index,
                approximation: a,
                horizontal: h,
                vertical: v,
                diagonal: d,
                headroom: *room,
            })
        })
}
