//! Reversible integer color transform between RGB and luma / chroma planes.
//!
//! Forward: `Y = ⌊(R + 2G + B) / 4⌋`, `Cb = B − G`, `Cr = R − G`.
//! Inverse: `G = Y − ⌊(Cb + Cr) / 4⌋`, `R = Cr + G`, `B = Cb + G`.
//!
//! The transform is exact on integers, so a luma plane written through [`YccPlanes::into_image`]
//! reads back unchanged through [`YccPlanes::from_image`] as long as every pixel stays in range.

use crate::error::VeilError;
use crate::media::types::RawImage;
use crate::result::Result;

/// luma and chroma planes of an image, channels past the third are kept aside untouched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YccPlanes {
    width: u32,
    height: u32,
    channels: u8,
    pub luma: Vec<i32>,
    pub cb: Vec<i32>,
    pub cr: Vec<i32>,
    extra: Vec<u8>,
}

/// inclusive luma interval in which a pixel keeps R, G and B inside 0..=255 for fixed chroma
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LumaRange {
    pub value: i32,
    pub min: i32,
    pub max: i32,
}

impl LumaRange {
    pub fn of(y: i32, cb: i32, cr: i32) -> Self {
        let f = (cb + cr).div_euclid(4);
        Self {
            value: y,
            min: f + 0i32.max(-cr).max(-cb),
            max: f + 255 - 0i32.max(cr).max(cb),
        }
    }

    pub fn allows(&self, step: i32) -> bool {
        let target = self.value + step;
        target >= self.min && target <= self.max
    }

    /// a pixel with one channel at 0 and another at 255 cannot change its luma at all
    pub fn is_frozen(&self) -> bool {
        self.min >= self.max
    }
}

impl YccPlanes {
    pub fn from_image(image: &RawImage) -> Result<Self> {
        let channels = image.channels();
        if channels < 3 {
            return Err(VeilError::UnreadableImage(format!(
                "{channels} channel image has no color to transform, at least 3 are needed"
            )));
        }
        let pixels = image.pixel_count();
        let mut planes = Self {
            width: image.width(),
            height: image.height(),
            channels,
            luma: Vec::with_capacity(pixels),
            cb: Vec::with_capacity(pixels),
            cr: Vec::with_capacity(pixels),
            extra: Vec::with_capacity(pixels * (channels as usize - 3)),
        };

        for pixel in image.samples().chunks_exact(channels as usize) {
            let (r, g, b) = (pixel[0] as i32, pixel[1] as i32, pixel[2] as i32);
            planes.luma.push((r + 2 * g + b).div_euclid(4));
            planes.cb.push(b - g);
            planes.cr.push(r - g);
            planes.extra.extend_from_slice(&pixel[3..]);
        }

        Ok(planes)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn headroom(&self, index: usize) -> LumaRange {
        LumaRange::of(self.luma[index], self.cb[index], self.cr[index])
    }

    pub fn into_image(self) -> Result<RawImage> {
        let extra_len = self.channels as usize - 3;
        let mut samples = Vec::with_capacity(self.luma.len() * self.channels as usize);

        for (i, ((&y, &cb), &cr)) in self.luma.iter().zip(&self.cb).zip(&self.cr).enumerate() {
            let g = y - (cb + cr).div_euclid(4);
            samples.push(clamp_sample(cr + g));
            samples.push(clamp_sample(g));
            samples.push(clamp_sample(cb + g));
            samples.extend_from_slice(&self.extra[i * extra_len..(i + 1) * extra_len]);
        }

        RawImage::new(self.width, self.height, self.channels, samples)
    }
}

fn clamp_sample(value: i32) -> u8 {
    value.clamp(0, u8::MAX as i32) as u8
}
