use bitstream_io::{BigEndian, BitWrite, BitWriter};
use std::io::{Cursor, Read, Result};

use crate::media::image::TransformPolicy;
use crate::media::primitives::MediaPrimitive;

/// generic unveil algorithm
pub trait UnveilAlgorithm {
    fn decode(&self, carrier: MediaPrimitive) -> bool;
}

/// generic stegano decoder, assembles bytes MSB first from one bit per carrier item
///
/// It reads until the carrier is exhausted, bits of a trailing incomplete byte are dropped.
pub struct Decoder<I, A>
where
    I: Iterator<Item = MediaPrimitive>,
    A: UnveilAlgorithm,
{
    pub carrier: I,
    pub algorithm: A,
}

impl<I, A> Decoder<I, A>
where
    I: Iterator<Item = MediaPrimitive>,
    A: UnveilAlgorithm,
{
    pub fn new(carrier: I, algorithm: A) -> Self {
        Decoder { carrier, algorithm }
    }
}

impl<I, A> Read for Decoder<I, A>
where
    I: Iterator<Item = MediaPrimitive>,
    A: UnveilAlgorithm,
{
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        let bits_wanted = buf.len() << 3;
        let mut bit_buffer = BitWriter::endian(Cursor::new(buf), BigEndian);

        let mut bits_read = 0;
        for item in self.carrier.by_ref().take(bits_wanted) {
            bit_buffer.write_bit(self.algorithm.decode(item))?;
            bits_read += 1;
        }

        Ok(bits_read >> 3)
    }
}

/// default 1 bit unveil strategy, reads the least significant bit of a color channel
#[derive(Debug, Clone, Copy, Default)]
pub struct OneBitUnveil;

impl UnveilAlgorithm for OneBitUnveil {
    #[inline(always)]
    fn decode(&self, carrier: MediaPrimitive) -> bool {
        match carrier {
            MediaPrimitive::ImageColorChannel(c) => (c & 0x1) > 0,
            MediaPrimitive::Coefficient(_) => false,
        }
    }
}

/// reads the bit from the fractional part of an approximation coefficient
#[derive(Debug, Clone, Copy, Default)]
pub struct CoefficientParityUnveil {
    pub policy: TransformPolicy,
}

impl CoefficientParityUnveil {
    pub fn new(policy: TransformPolicy) -> Self {
        Self { policy }
    }
}

impl UnveilAlgorithm for CoefficientParityUnveil {
    fn decode(&self, carrier: MediaPrimitive) -> bool {
        match carrier {
            MediaPrimitive::Coefficient(c) => self.policy.decode_bit(c),
            MediaPrimitive::ImageColorChannel(_) => false,
        }
    }
}
