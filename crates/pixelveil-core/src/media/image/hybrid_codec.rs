use super::{require_password, DwtCodec, LsbCodec, PolicyTag, StegoCodec, TransformPolicy};
use crate::capacity::ensure_fits;
use crate::error::VeilError;
use crate::media::codec_options::{EmbeddingMethod, HybridMode};
use crate::media::payload::{
    FabS, PayloadCodecFactory, DWT_DELIMITER, END_DELIMITER, LSB_DELIMITER,
};
use crate::media::types::RawImage;
use crate::result::Result;

/// Combines both domains on disjoint regions of one image.
///
/// The top `⌈H/2⌉` rows are the transform region handled by [`DwtCodec`], the bottom
/// `⌊H/2⌋` rows the pixel region handled by [`LsbCodec`]. Since the regions do not
/// overlap, writing one never disturbs the bits of the other.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HybridCodec {
    pub mode: HybridMode,
    pub policy: TransformPolicy,
}

impl HybridCodec {
    pub fn new(mode: HybridMode, policy: TransformPolicy) -> Self {
        Self { mode, policy }
    }

    /// number of rows that belong to the transform region
    pub fn transform_rows(height: u32) -> u32 {
        height.div_ceil(2)
    }

    /// `(transform, pixel)` capacity in bits of the two regions of an image
    pub fn region_capacity(&self, image: &RawImage) -> (usize, usize) {
        let (top, bottom) = image.split_rows(Self::transform_rows(image.height()));
        (
            top.map_or(0, |top| self.transform_codec().capacity_bits(&top)),
            bottom.map_or(0, |bottom| LsbCodec.capacity_bits(&bottom)),
        )
    }

    fn regions(image: &RawImage) -> Result<(RawImage, Option<RawImage>)> {
        match image.split_rows(Self::transform_rows(image.height())) {
            (Some(top), bottom) => Ok((top, bottom)),
            (None, _) => Err(VeilError::UnreadableImage(
                "image has no rows for the transform region".to_string(),
            )),
        }
    }

    fn transform_codec(&self) -> DwtCodec {
        DwtCodec::new(self.policy)
    }

    fn hide_split(&self, image: &RawImage, message: &str, password: &str) -> Result<RawImage> {
        let (first, second) = split_message(message);
        let factory = FabS::new(password);
        let transform_payload = factory
            .create_codec(PolicyTag::HybridSplitV1, DWT_DELIMITER)
            .encode(first)?;
        let pixel_payload = factory
            .create_codec(PolicyTag::HybridSplitV1, LSB_DELIMITER)
            .encode(second)?;
        log::debug!(
            "hiding {} + {} message bytes as {} + {} payload bytes with Hybrid (split)",
            first.len(),
            second.len(),
            transform_payload.len(),
            pixel_payload.len()
        );

        self.embed_regions(image, &transform_payload, &pixel_payload)
    }

    fn hide_redundant(&self, image: &RawImage, message: &str, password: &str) -> Result<RawImage> {
        let payload = FabS::new(password)
            .create_codec(PolicyTag::HybridRedundantV1, END_DELIMITER)
            .encode(message)?;
        log::debug!(
            "hiding {} message bytes twice as {} payload bytes with Hybrid (redundant)",
            message.len(),
            payload.len()
        );

        self.embed_regions(image, &payload, &payload)
    }

    fn embed_regions(
        &self,
        image: &RawImage,
        transform_payload: &[u8],
        pixel_payload: &[u8],
    ) -> Result<RawImage> {
        let (transform_bits, pixel_bits) = self.region_capacity(image);
        ensure_fits(transform_bits, transform_payload.len())?;
        ensure_fits(pixel_bits, pixel_payload.len())?;

        let (top, bottom) = Self::regions(image)?;
        let top = self.transform_codec().embed(&top, transform_payload)?;
        let bottom = match bottom {
            Some(bottom) => Some(LsbCodec.embed(&bottom, pixel_payload)?),
            None => None,
        };

        RawImage::stack_rows(Some(top), bottom)
    }

    fn extract_regions(
        &self,
        image: &RawImage,
        factory: &FabS,
        tag: PolicyTag,
        delimiters: (&'static str, &'static str),
    ) -> Result<(Result<String>, Result<String>)> {
        let (top, bottom) = Self::regions(image)?;
        let transform = self
            .transform_codec()
            .extract(&top, factory.create_codec(tag, delimiters.0).as_ref());
        let pixel = match bottom {
            Some(bottom) => LsbCodec.extract(&bottom, factory.create_codec(tag, delimiters.1).as_ref()),
            None => Err(VeilError::DelimiterNotFound),
        };

        Ok((transform, pixel))
    }

    fn unveil_split(&self, image: &RawImage, password: &str) -> Result<String> {
        let (transform, pixel) = self.extract_regions(
            image,
            &FabS::new(password),
            PolicyTag::HybridSplitV1,
            (DWT_DELIMITER, LSB_DELIMITER),
        )?;

        match (transform, pixel) {
            (Ok(first), Ok(second)) => Ok(first + &second),
            (Err(e), Ok(_)) => {
                log::debug!("transform half failed: {e}");
                Err(e)
            }
            (Ok(_), Err(e)) => {
                log::debug!("pixel half failed: {e}");
                Err(e)
            }
            (Err(transform), Err(pixel)) => Err(combine_failures(transform, pixel)),
        }
    }

    fn unveil_redundant(&self, image: &RawImage, password: &str) -> Result<String> {
        let (transform, pixel) = self.extract_regions(
            image,
            &FabS::new(password),
            PolicyTag::HybridRedundantV1,
            (END_DELIMITER, END_DELIMITER),
        )?;

        match (transform, pixel) {
            (Ok(transform), Ok(pixel)) => {
                if transform != pixel {
                    log::warn!("redundant copies differ, keeping the transform domain copy");
                }
                Ok(transform)
            }
            (Ok(transform), Err(e)) => {
                log::warn!("pixel domain copy is damaged: {e}");
                Ok(transform)
            }
            (Err(e), Ok(pixel)) => {
                log::warn!("transform domain copy is damaged, falling back to the pixel domain copy: {e}");
                Ok(pixel)
            }
            (Err(transform), Err(pixel)) => Err(combine_failures(transform, pixel)),
        }
    }
}

/// splits at character index `⌊n/2⌋`, never inside of a multi byte character
pub(crate) fn split_message(message: &str) -> (&str, &str) {
    let half = message.chars().count() / 2;
    let at = message
        .char_indices()
        .nth(half)
        .map_or(message.len(), |(i, _)| i);

    message.split_at(at)
}

fn combine_failures(transform: VeilError, pixel: VeilError) -> VeilError {
    if transform.same_kind(&pixel) {
        transform
    } else {
        VeilError::HybridFailed {
            transform: Box::new(transform),
            pixel: Box::new(pixel),
        }
    }
}

impl StegoCodec for HybridCodec {
    fn method(&self) -> EmbeddingMethod {
        EmbeddingMethod::Hybrid
    }

    fn capacity_bits(&self, image: &RawImage) -> usize {
        let (transform, pixel) = self.region_capacity(image);
        match self.mode {
            HybridMode::Split => transform + pixel,
            HybridMode::Redundant => transform.min(pixel),
        }
    }

    fn hide(&self, image: &RawImage, message: &str, password: Option<&str>) -> Result<RawImage> {
        let password = require_password(password)?;
        match self.mode {
            HybridMode::Split => self.hide_split(image, message, password),
            HybridMode::Redundant => self.hide_redundant(image, message, password),
        }
    }

    fn unveil(&self, image: &RawImage, password: Option<&str>) -> Result<String> {
        let password = require_password(password)?;
        match self.mode {
            HybridMode::Split => self.unveil_split(image, password),
            HybridMode::Redundant => self.unveil_redundant(image, password),
        }
    }
}
