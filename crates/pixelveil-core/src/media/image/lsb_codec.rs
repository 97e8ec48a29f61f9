use std::io::{Read, Write};

use super::decoder::ImageColors;
use super::encoder::ImageColorsMut;
use super::{PolicyTag, StegoCodec};
use crate::capacity::ensure_fits;
use crate::media::codec_options::EmbeddingMethod;
use crate::media::payload::{payload_codec_factory, PayloadDecoder, END_DELIMITER};
use crate::media::types::RawImage;
use crate::result::Result;
use crate::universal_decoder::{Decoder, OneBitUnveil};
use crate::universal_encoder::{lift_io_error, Encoder, OneBitHide};

/// Pixel domain codec, one payload bit in the least significant bit of every color sample.
///
/// Samples are visited row by row, channel by channel within a pixel, every byte is written
/// MSB first. Capacity is `width * height * channels` bits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LsbCodec;

impl LsbCodec {
    /// builds a LSB Image Decoder that implements Read
    pub fn decoder(input: &RawImage) -> Box<dyn Read + '_> {
        Box::new(Decoder::new(ImageColors::new(input), OneBitUnveil))
    }

    /// builds a LSB Image Encoder that implements Write
    pub fn encoder(carrier: &mut RawImage) -> Box<dyn Write + '_> {
        Box::new(Encoder::new(ImageColorsMut::new(carrier), OneBitHide))
    }

    pub fn capacity_for(width: u32, height: u32, channels: u8) -> usize {
        width as usize * height as usize * channels as usize
    }

    /// writes already framed payload bytes into a copy of the image
    pub fn embed(&self, image: &RawImage, payload: &[u8]) -> Result<RawImage> {
        ensure_fits(self.capacity_bits(image), payload.len())?;

        let mut stego = image.clone();
        LsbCodec::encoder(&mut stego)
            .write_all(payload)
            .map_err(lift_io_error)?;
        log::trace!("{} payload bytes embedded into pixel samples", payload.len());

        Ok(stego)
    }

    /// reads one framed message back with the given payload decoder
    pub fn extract(&self, image: &RawImage, payload: &dyn PayloadDecoder) -> Result<String> {
        let capacity = self.capacity_bits(image) / 8;
        payload.decode(&mut LsbCodec::decoder(image), capacity)
    }
}

impl StegoCodec for LsbCodec {
    fn method(&self) -> EmbeddingMethod {
        EmbeddingMethod::Lsb
    }

    fn capacity_bits(&self, image: &RawImage) -> usize {
        LsbCodec::capacity_for(image.width(), image.height(), image.channels())
    }

    fn hide(&self, image: &RawImage, message: &str, password: Option<&str>) -> Result<RawImage> {
        let codec = payload_codec_factory(password).create_codec(PolicyTag::LsbV1, END_DELIMITER);
        let payload = codec.encode(message)?;
        log::debug!(
            "hiding {} message bytes as {} payload bytes with LSB",
            message.len(),
            payload.len()
        );

        self.embed(image, &payload)
    }

    fn unveil(&self, image: &RawImage, password: Option<&str>) -> Result<String> {
        let codec = payload_codec_factory(password).create_codec(PolicyTag::LsbV1, END_DELIMITER);

        self.extract(image, codec.as_ref())
    }
}
