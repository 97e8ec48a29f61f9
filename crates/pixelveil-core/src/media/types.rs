use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

use image::{DynamicImage, GrayAlphaImage, GrayImage, ImageFormat, RgbImage, RgbaImage};
use log::error;

use crate::error::VeilError;
use crate::result::Result;

/// a decoded, interleaved 8 bit pixel buffer, samples are stored row by row and
/// channel by channel within a pixel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawImage {
    width: u32,
    height: u32,
    channels: u8,
    samples: Vec<u8>,
}

impl RawImage {
    pub fn new(width: u32, height: u32, channels: u8, samples: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(VeilError::UnreadableImage(format!(
                "empty dimensions {width}x{height}"
            )));
        }
        if !(1..=4).contains(&channels) {
            return Err(VeilError::UnreadableImage(format!(
                "unsupported channel count {channels}"
            )));
        }
        let expected = width as usize * height as usize * channels as usize;
        if samples.len() != expected {
            return Err(VeilError::UnreadableImage(format!(
                "{} samples found, {expected} expected for {width}x{height}x{channels}",
                samples.len()
            )));
        }

        Ok(Self {
            width,
            height,
            channels,
            samples,
        })
    }

    /// builds an image by calling `f(x, y, channel)` for every sample
    pub fn from_fn<F>(width: u32, height: u32, channels: u8, mut f: F) -> Result<Self>
    where
        F: FnMut(u32, u32, u8) -> u8,
    {
        let mut samples =
            Vec::with_capacity(width as usize * height as usize * channels as usize);
        for y in 0..height {
            for x in 0..width {
                for c in 0..channels {
                    samples.push(f(x, y, c));
                }
            }
        }

        Self::new(width, height, channels, samples)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    pub fn dimensions(&self) -> (u32, u32, u8) {
        (self.width, self.height, self.channels)
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    pub fn samples_mut(&mut self) -> &mut [u8] {
        &mut self.samples
    }

    pub fn pixel(&self, x: u32, y: u32) -> &[u8] {
        let c = self.channels as usize;
        let start = (y as usize * self.width as usize + x as usize) * c;
        &self.samples[start..start + c]
    }

    pub fn pixel_mut(&mut self, x: u32, y: u32) -> &mut [u8] {
        let c = self.channels as usize;
        let start = (y as usize * self.width as usize + x as usize) * c;
        &mut self.samples[start..start + c]
    }

    /// fails with `DimensionMismatch` unless both images share width, height and channels
    pub fn ensure_same_layout(&self, other: &RawImage) -> Result<()> {
        if self.dimensions() != other.dimensions() {
            return Err(VeilError::DimensionMismatch {
                original: self.dimensions(),
                stego: other.dimensions(),
            });
        }

        Ok(())
    }

    /// splits the image into the first `rows` rows and the rest, either part may be `None` if empty
    pub fn split_rows(&self, rows: u32) -> (Option<RawImage>, Option<RawImage>) {
        let rows = rows.min(self.height);
        let row_len = self.width as usize * self.channels as usize;
        let (top, bottom) = self.samples.split_at(rows as usize * row_len);
        let part = |height: u32, samples: &[u8]| {
            (height > 0).then(|| RawImage {
                width: self.width,
                height,
                channels: self.channels,
                samples: samples.to_vec(),
            })
        };

        (part(rows, top), part(self.height - rows, bottom))
    }

    /// stacks `bottom` below `top`, the inverse of [`RawImage::split_rows`]
    pub fn stack_rows(top: Option<RawImage>, bottom: Option<RawImage>) -> Result<RawImage> {
        match (top, bottom) {
            (Some(mut top), Some(bottom)) => {
                if top.width != bottom.width || top.channels != bottom.channels {
                    return Err(VeilError::DimensionMismatch {
                        original: top.dimensions(),
                        stego: bottom.dimensions(),
                    });
                }
                top.height += bottom.height;
                top.samples.extend_from_slice(&bottom.samples);
                Ok(top)
            }
            (Some(image), None) | (None, Some(image)) => Ok(image),
            (None, None) => Err(VeilError::UnreadableImage(
                "nothing to stack".to_string(),
            )),
        }
    }
}

impl RawImage {
    /// Opens any image format `image` can decode. Gray and alpha layouts are kept, everything
    /// else ends up as 8 bit RGB.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let decoded = image::open(path).map_err(|e| {
            error!("Error opening image {path:?}: {e}");
            VeilError::InvalidImageMedia(e)
        })?;

        Ok(match decoded {
            DynamicImage::ImageLuma8(gray) => gray.into(),
            DynamicImage::ImageLumaA8(gray) => {
                let (width, height) = gray.dimensions();
                Self::new(width, height, 2, gray.into_raw())?
            }
            DynamicImage::ImageRgba8(rgba) => rgba.into(),
            other if other.color().has_alpha() => other.to_rgba8().into(),
            other => other.to_rgb8().into(),
        })
    }

    /// Always writes PNG, lossy formats would destroy the payload.
    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| {
            error!("Error creating file {path:?}: {e}");
            VeilError::WriteError { source: e }
        })?;
        let mut writer = BufWriter::new(file);
        self.save_to_writer(&mut writer)?;
        writer
            .flush()
            .map_err(|source| VeilError::WriteError { source })
    }

    pub fn save_to_writer<W: Write + Seek>(&self, mut writer: W) -> Result<()> {
        let invalid = || VeilError::UnreadableImage("sample buffer does not match dimensions".into());
        let (width, height, channels) = self.dimensions();
        let samples = self.samples.clone();
        let dynamic = match channels {
            1 => DynamicImage::ImageLuma8(
                GrayImage::from_raw(width, height, samples).ok_or_else(invalid)?,
            ),
            2 => DynamicImage::ImageLumaA8(
                GrayAlphaImage::from_raw(width, height, samples).ok_or_else(invalid)?,
            ),
            3 => DynamicImage::ImageRgb8(
                RgbImage::from_raw(width, height, samples).ok_or_else(invalid)?,
            ),
            _ => DynamicImage::ImageRgba8(
                RgbaImage::from_raw(width, height, samples).ok_or_else(invalid)?,
            ),
        };

        dynamic
            .write_to(&mut writer, ImageFormat::Png)
            .map_err(|e| {
                error!("Error saving image: {e}");
                VeilError::ImageEncodingError(e)
            })
    }
}

impl From<RgbImage> for RawImage {
    fn from(image: RgbImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            width,
            height,
            channels: 3,
            samples: image.into_raw(),
        }
    }
}

impl From<RgbaImage> for RawImage {
    fn from(image: RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            width,
            height,
            channels: 4,
            samples: image.into_raw(),
        }
    }
}

impl From<GrayImage> for RawImage {
    fn from(image: GrayImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            width,
            height,
            channels: 1,
            samples: image.into_raw(),
        }
    }
}

impl TryFrom<RawImage> for RgbImage {
    type Error = VeilError;

    fn try_from(image: RawImage) -> Result<Self> {
        let (width, height, channels) = image.dimensions();
        let samples = match channels {
            3 => image.samples,
            1 => image.samples.iter().flat_map(|&v| [v, v, v]).collect(),
            4 => image
                .samples
                .chunks_exact(4)
                .flat_map(|p| [p[0], p[1], p[2]])
                .collect(),
            other => {
                return Err(VeilError::UnreadableImage(format!(
                    "cannot express {other} channels as RGB"
                )))
            }
        };

        RgbImage::from_raw(width, height, samples).ok_or_else(|| {
            VeilError::UnreadableImage("sample buffer does not match dimensions".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::prepare_gradient_image;

    #[test]
    fn should_reject_inconsistent_buffers() {
        assert!(matches!(
            RawImage::new(2, 2, 3, vec![0; 11]),
            Err(VeilError::UnreadableImage(_))
        ));
        assert!(matches!(
            RawImage::new(0, 2, 3, vec![]),
            Err(VeilError::UnreadableImage(_))
        ));
        assert!(matches!(
            RawImage::new(1, 1, 5, vec![0; 5]),
            Err(VeilError::UnreadableImage(_))
        ));
        assert!(RawImage::new(2, 2, 3, vec![0; 12]).is_ok());
    }

    #[test]
    fn should_lay_out_samples_row_major_channel_minor() {
        let img = RawImage::from_fn(3, 2, 3, |x, y, c| (y * 30 + x * 3 + c as u32) as u8).unwrap();

        assert_eq!(img.samples()[..6], [0, 1, 2, 3, 4, 5]);
        assert_eq!(img.pixel(0, 1), &[30, 31, 32]);
        assert_eq!(img.pixel(2, 1), &[36, 37, 38]);
    }

    #[test]
    fn should_split_and_stack_rows() {
        let img = prepare_gradient_image(5, 7);
        let (top, bottom) = img.split_rows(4);
        assert_eq!(top.as_ref().map(RawImage::height), Some(4));
        assert_eq!(bottom.as_ref().map(RawImage::height), Some(3));

        let restored = RawImage::stack_rows(top, bottom).unwrap();
        assert_eq!(restored, img);

        let (top, bottom) = img.split_rows(7);
        assert!(top.is_some());
        assert!(bottom.is_none());
    }

    #[test]
    fn should_convert_from_and_into_image_buffers() {
        let rgb = RgbImage::from_fn(4, 3, |x, y| image::Rgb([x as u8, y as u8, 7]));
        let raw = RawImage::from(rgb.clone());
        assert_eq!(raw.dimensions(), (4, 3, 3));
        assert_eq!(raw.pixel(3, 2), &[3, 2, 7]);

        let back = RgbImage::try_from(raw).unwrap();
        assert_eq!(back, rgb);
    }

    #[test]
    fn should_survive_a_png_file_round_trip() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let img = prepare_gradient_image(9, 6);
        let target = dir.path().join("gradient.png");

        img.save_as(&target)?;
        assert_eq!(RawImage::from_file(&target)?, img);

        Ok(())
    }

    #[test]
    fn should_refuse_files_that_are_no_images() {
        assert!(matches!(
            RawImage::from_file("Cargo.toml"),
            Err(VeilError::InvalidImageMedia(_))
        ));
    }
}
