//! Capacity planning: how many payload bits an image offers for a method, and how long a
//! message may be once framing, delimiters and encryption overhead are paid for.

use crate::error::VeilError;
use crate::media::codec_options::{CodecOptions, EmbeddingMethod, HybridMode};
use crate::media::image::{Codec, DwtCodec, HybridCodec, LsbCodec, PolicyTag, StegoCodec};
use crate::media::payload::{
    CryptedPayloadCodec, PayloadEncoder, PlainPayloadCodec, DWT_DELIMITER, END_DELIMITER,
    LSB_DELIMITER,
};
use crate::media::types::RawImage;
use crate::result::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityPlan {
    pub method: EmbeddingMethod,
    /// total payload bits the method can place
    pub bits: usize,
    /// bits of the transform region, for DWT and Hybrid
    pub transform_bits: Option<usize>,
    /// bits of the pixel region, for LSB and Hybrid
    pub pixel_bits: Option<usize>,
}

impl CapacityPlan {
    pub fn bytes(&self) -> usize {
        self.bits / 8
    }
}

/// Capacity of an image for the chosen method.
///
/// Depends on dimensions, channels, method and hybrid mode, and for the transform domain
/// on how many Haar blocks are made only of fully saturated colors.
pub fn plan(image: &RawImage, options: &CodecOptions) -> CapacityPlan {
    let method = options.method();
    let bits = Codec::from(options).capacity_bits(image);

    let (transform_bits, pixel_bits) = match options {
        CodecOptions::Lsb => (None, Some(LsbCodec.capacity_bits(image))),
        CodecOptions::Dwt(opts) => (Some(DwtCodec::new(opts.policy).capacity_bits(image)), None),
        CodecOptions::Hybrid(opts) => {
            let codec = HybridCodec::new(opts.mode, opts.policy);
            let (transform, pixel) = codec.region_capacity(image);
            (Some(transform), Some(pixel))
        }
    };

    CapacityPlan {
        method,
        bits,
        transform_bits,
        pixel_bits,
    }
}

/// Longest message of single byte characters that fits.
///
/// `encrypted` only matters for LSB, the other methods always encrypt. Returns 0 when not
/// even an empty message fits.
pub fn max_message_len(image: &RawImage, options: &CodecOptions, encrypted: bool) -> usize {
    let plan = plan(image, options);
    // the password only shapes the size of a token, not its length
    let sealed = |tag, delimiter| CryptedPayloadCodec::new("-", tag, delimiter).encoded_size(0);
    let room = |bits: Option<usize>, overhead: usize| (bits.unwrap_or(0) / 8).saturating_sub(overhead);

    match options {
        CodecOptions::Lsb if encrypted => {
            room(plan.pixel_bits, sealed(PolicyTag::LsbV1, END_DELIMITER))
        }
        CodecOptions::Lsb => room(
            plan.pixel_bits,
            PlainPayloadCodec::new(END_DELIMITER).encoded_size(0),
        ),
        CodecOptions::Dwt(_) => room(plan.transform_bits, sealed(PolicyTag::DwtV1, END_DELIMITER)),
        CodecOptions::Hybrid(opts) => match opts.mode {
            HybridMode::Split => {
                let first = room(
                    plan.transform_bits,
                    sealed(PolicyTag::HybridSplitV1, DWT_DELIMITER),
                );
                let second = room(
                    plan.pixel_bits,
                    sealed(PolicyTag::HybridSplitV1, LSB_DELIMITER),
                );
                // the first half takes ⌊n/2⌋ characters, the second half ⌈n/2⌉
                (2 * first + 1).min(2 * second)
            }
            HybridMode::Redundant => {
                let overhead = sealed(PolicyTag::HybridRedundantV1, END_DELIMITER);
                room(plan.transform_bits, overhead).min(room(plan.pixel_bits, overhead))
            }
        },
    }
}

/// fails with `CapacityExceeded` if `payload_len` bytes do not fit into `available_bits`
pub fn ensure_fits(available_bits: usize, payload_len: usize) -> Result<()> {
    let required = payload_len.saturating_mul(8);
    if required > available_bits {
        return Err(VeilError::CapacityExceeded {
            required,
            available: available_bits,
        });
    }

    Ok(())
}
