use std::io::Write;

use super::decoder::Coefficients;
use super::encoder::{block_headroom, coefficient_blocks_mut};
use super::{require_password, PolicyTag, StegoCodec, TransformPolicy};
use crate::capacity::ensure_fits;
use crate::media::codec_options::EmbeddingMethod;
use crate::media::color::YccPlanes;
use crate::media::primitives::BlockHeadroom;
use crate::media::payload::{FabS, PayloadCodecFactory, PayloadDecoder, END_DELIMITER};
use crate::media::types::RawImage;
use crate::result::Result;
use crate::universal_decoder::{CoefficientParityUnveil, Decoder};
use crate::universal_encoder::{lift_io_error, CoefficientParityHide, Encoder};
use crate::wavelet::{decompose, reconstruct, Matrix, Subbands};

/// Transform domain codec.
///
/// The image is turned into luma / chroma planes, the luma plane is decomposed with one
/// level of the Haar wavelet and every approximation coefficient carries one bit in its
/// fractional part. Chroma and alpha are not touched. Capacity is `⌈H/2⌉ * ⌈W/2⌉` bits
/// minus the blocks made only of fully saturated colors, which the policy skips.
///
/// Payloads are always encrypted, the codec refuses to work without a password.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DwtCodec {
    pub policy: TransformPolicy,
}

impl DwtCodec {
    pub fn new(policy: TransformPolicy) -> Self {
        Self { policy }
    }

    /// writes already framed payload bytes into a copy of the image
    pub fn embed(&self, image: &RawImage, payload: &[u8]) -> Result<RawImage> {
        let mut planes = YccPlanes::from_image(image)?;
        let (height, width) = (planes.height() as usize, planes.width() as usize);
        let mut bands = decompose_luma(&planes)?;
        let headroom = block_headroom(&planes, bands.rows(), bands.cols());
        ensure_fits(self.carrying_blocks(&headroom), payload.len())?;

        Encoder::new(
            coefficient_blocks_mut(&mut bands, &headroom, self.policy),
            CoefficientParityHide::new(self.policy),
        )
        .write_all(payload)
        .map_err(lift_io_error)?;

        let luma = reconstruct(&bands, height, width);
        for (y, value) in planes.luma.iter_mut().zip(luma.as_slice()) {
            *y = value.clamp(0.0, 255.0).round() as i32;
        }
        log::trace!(
            "{} payload bytes embedded into {} approximation coefficients",
            payload.len(),
            bands.approximation.as_slice().len()
        );

        planes.into_image()
    }

    /// reads one framed message back with the given payload decoder
    pub fn extract(&self, image: &RawImage, payload: &dyn PayloadDecoder) -> Result<String> {
        let planes = YccPlanes::from_image(image)?;
        let bands = decompose_luma(&planes)?;
        let headroom = block_headroom(&planes, bands.rows(), bands.cols());
        let capacity = self.carrying_blocks(&headroom) / 8;

        let mut decoder = Decoder::new(
            Coefficients::new(&bands.approximation, &headroom, self.policy),
            CoefficientParityUnveil::new(self.policy),
        );
        payload.decode(&mut decoder, capacity)
    }

    fn carrying_blocks(&self, headroom: &[BlockHeadroom]) -> usize {
        headroom
            .iter()
            .filter(|room| self.policy.carries(room))
            .count()
    }
}

fn decompose_luma(planes: &YccPlanes) -> Result<Subbands> {
    let luma = Matrix::from_vec(
        planes.height() as usize,
        planes.width() as usize,
        planes.luma.iter().map(|&y| f64::from(y)).collect(),
    )?;

    Ok(decompose(&luma))
}

impl StegoCodec for DwtCodec {
    fn method(&self) -> EmbeddingMethod {
        EmbeddingMethod::Dwt
    }

    /// 0 for images without color, they cannot be embedded into
    fn capacity_bits(&self, image: &RawImage) -> usize {
        let Ok(planes) = YccPlanes::from_image(image) else {
            return 0;
        };
        let rows = planes.height().div_ceil(2) as usize;
        let cols = planes.width().div_ceil(2) as usize;

        self.carrying_blocks(&block_headroom(&planes, rows, cols))
    }

    fn hide(&self, image: &RawImage, message: &str, password: Option<&str>) -> Result<RawImage> {
        let password = require_password(password)?;
        let payload = FabS::new(password)
            .create_codec(PolicyTag::DwtV1, END_DELIMITER)
            .encode(message)?;
        log::debug!(
            "hiding {} message bytes as {} payload bytes with DWT",
            message.len(),
            payload.len()
        );

        self.embed(image, &payload)
    }

    fn unveil(&self, image: &RawImage, password: Option<&str>) -> Result<String> {
        let password = require_password(password)?;
        let codec = FabS::new(password).create_codec(PolicyTag::DwtV1, END_DELIMITER);

        self.extract(image, codec.as_ref())
    }
}
