use bitstream_io::{BigEndian, BitRead, BitReader};
use std::io::{Cursor, ErrorKind, Result, Write};

use crate::error::VeilError;
use crate::media::image::TransformPolicy;
use crate::media::primitives::{CoefficientBlockMut, MediaPrimitiveMut};

/// generic hiding algorithm, used for specific ones like LSB
pub trait HideAlgorithm {
    /// encodes one bit onto a carrier
    fn encode(&self, carrier: MediaPrimitiveMut<'_>, bit: bool) -> crate::Result<()>;
}

/// generic stegano encoder, writes every byte MSB first, one bit per carrier item
pub struct Encoder<I, A> {
    pub carrier: I,
    pub algorithm: A,
}

impl<I, A> Encoder<I, A> {
    pub fn new(carrier: I, algorithm: A) -> Self {
        Encoder { carrier, algorithm }
    }
}

impl<'a, I, A> Write for Encoder<I, A>
where
    I: Iterator<Item = MediaPrimitiveMut<'a>>,
    A: HideAlgorithm,
{
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        let mut bits = BitReader::endian(Cursor::new(buf), BigEndian);
        let mut bytes_written = 0;
        for _ in 0..buf.len() {
            for _ in 0..8 {
                let bit = bits.read_bit()?;
                let Some(item) = self.carrier.next() else {
                    return Ok(bytes_written);
                };
                self.algorithm
                    .encode(item, bit)
                    .map_err(|e| std::io::Error::new(ErrorKind::Other, e))?;
            }
            bytes_written += 1;
        }

        Ok(bytes_written)
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// turns an io error coming out of an [`Encoder`] or a decoder back into the error that caused it
pub(crate) fn lift_io_error(error: std::io::Error) -> VeilError {
    let kind = error.kind();
    match error.into_inner() {
        Some(inner) => match inner.downcast::<VeilError>() {
            Ok(veil) => *veil,
            Err(other) => VeilError::IoError(std::io::Error::new(kind, other)),
        },
        None => VeilError::IoError(kind.into()),
    }
}

/// default 1 bit hiding strategy, replaces the least significant bit of a color channel
#[derive(Debug, Clone, Copy, Default)]
pub struct OneBitHide;

impl HideAlgorithm for OneBitHide {
    #[inline(always)]
    fn encode(&self, carrier: MediaPrimitiveMut<'_>, bit: bool) -> crate::Result<()> {
        if let MediaPrimitiveMut::ImageColorChannel(c) = carrier {
            *c = (*c & (u8::MAX - 1)) | if bit { 1 } else { 0 };
        }

        Ok(())
    }
}

/// Moves the approximation coefficient of a Haar block onto the fractional part that
/// stands for the bit.
///
/// The residual is pushed into the detail coefficients so that a single pixel absorbs it.
/// If no pixel can move in the preferred direction the opposite half step is taken, it
/// lands on the same fractional part.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoefficientParityHide {
    pub policy: TransformPolicy,
}

impl CoefficientParityHide {
    pub fn new(policy: TransformPolicy) -> Self {
        Self { policy }
    }

    fn hide_in_block(&self, mut block: CoefficientBlockMut<'_>, bit: bool) -> crate::Result<()> {
        let delta = self.policy.quantize(*block.approximation, bit) - *block.approximation;
        if delta == 0.0 {
            return Ok(());
        }
        let step: i32 = if delta > 0.0 { 1 } else { -1 };

        if let Some(p) = block.movable_pixel(step) {
            block.shift_through_pixel(p, delta);
        } else if let Some(p) = block.movable_pixel(-step) {
            block.shift_through_pixel(p, delta - step as f64);
        } else {
            return Err(VeilError::CarrierSaturated { block: block.index });
        }

        Ok(())
    }
}

impl HideAlgorithm for CoefficientParityHide {
    fn encode(&self, carrier: MediaPrimitiveMut<'_>, bit: bool) -> crate::Result<()> {
        match carrier {
            MediaPrimitiveMut::CoefficientBlock(block) => self.hide_in_block(block, bit),
            MediaPrimitiveMut::ImageColorChannel(_) => Ok(()),
        }
    }
}
