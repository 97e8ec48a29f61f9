//! Versioned embedding policies.
//!
//! Encoder and decoder must agree on every constant of a policy bit for bit. Encrypted
//! payloads carry the [`PolicyTag`] of the policy that wrote them, so reading them back
//! with a different one fails with [`VeilError::PolicyMismatch`] instead of producing
//! garbage.

use crate::error::VeilError;
use crate::media::primitives::BlockHeadroom;
use crate::result::Result;

/// one byte identifying method and policy version of an encrypted payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyTag {
    LsbV1,
    DwtV1,
    HybridSplitV1,
    HybridRedundantV1,
}

impl From<PolicyTag> for u8 {
    fn from(value: PolicyTag) -> Self {
        match value {
            PolicyTag::LsbV1 => 0x11,
            PolicyTag::DwtV1 => 0x21,
            PolicyTag::HybridSplitV1 => 0x31,
            PolicyTag::HybridRedundantV1 => 0x32,
        }
    }
}

impl TryFrom<u8> for PolicyTag {
    type Error = u8;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            0x11 => Ok(PolicyTag::LsbV1),
            0x21 => Ok(PolicyTag::DwtV1),
            0x31 => Ok(PolicyTag::HybridSplitV1),
            0x32 => Ok(PolicyTag::HybridRedundantV1),
            other => Err(other),
        }
    }
}

/// The wavelet basis used by the transform codec
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wavelet {
    /// orthonormal two-tap Haar basis
    Haar,
}

/// The subband that carries the payload bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subband {
    Approximation,
}

/// Fractional part a coefficient gets for a `1` bit
pub const ONE_FRACTION: f64 = 0.5;
/// Fractional part a coefficient gets for a `0` bit
pub const ZERO_FRACTION: f64 = 0.0;
/// Fractional parts at or above this decode to `1`
pub const DEFAULT_THRESHOLD: f64 = 0.4;

/// The transform domain embedding policy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformPolicy {
    pub wavelet: Wavelet,
    pub subband: Subband,
    pub one_fraction: f64,
    pub zero_fraction: f64,
    threshold: f64,
}

impl TransformPolicy {
    /// Haar basis, approximation subband, fractions 0.5 / 0.0, threshold 0.4.
    ///
    /// Blocks whose pixels are all frozen (see [`TransformPolicy::carries`]) are skipped on
    /// both sides, the next block takes the bit.
    pub const V1: TransformPolicy = TransformPolicy {
        wavelet: Wavelet::Haar,
        subband: Subband::Approximation,
        one_fraction: ONE_FRACTION,
        zero_fraction: ZERO_FRACTION,
        threshold: DEFAULT_THRESHOLD,
    };

    /// tunes the decoding threshold, it has to lie strictly between the two fractions
    pub fn with_threshold(mut self, threshold: f64) -> Result<Self> {
        if !(threshold > self.zero_fraction && threshold < self.one_fraction) {
            return Err(VeilError::InvalidThreshold(threshold));
        }
        self.threshold = threshold;

        Ok(self)
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// quantizes a coefficient onto the fractional part that stands for `bit`
    pub fn quantize(&self, coefficient: f64, bit: bool) -> f64 {
        coefficient.floor() + if bit { self.one_fraction } else { self.zero_fraction }
    }

    /// reads the bit a coefficient carries
    pub fn decode_bit(&self, coefficient: f64) -> bool {
        coefficient - coefficient.floor() >= self.threshold
    }

    /// Whether a Haar block takes part in embedding.
    ///
    /// A block needs at least one real pixel whose luma can move. Frozen pixels only depend
    /// on chroma, which embedding never touches, so a stego image yields the same answer as
    /// its carrier.
    pub fn carries(&self, headroom: &BlockHeadroom) -> bool {
        headroom.iter().flatten().any(|range| !range.is_frozen())
    }
}

impl Default for TransformPolicy {
    fn default() -> Self {
        Self::V1
    }
}
