use std::fmt::{self, Display, Formatter};

use crate::media::image::TransformPolicy;

/// Codec configuration for steganography encoding/decoding
///
/// The choice has to be the same on both ends, unencrypted payloads carry no hint about it:
/// - `Lsb` → least significant bits of every color sample
/// - `Dwt` → fractional part of the Haar approximation coefficients of the luma plane
/// - `Hybrid` → `Dwt` in the upper half of the image, `Lsb` in the lower half
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum CodecOptions {
    #[default]
    Lsb,
    Dwt(DwtCodecOptions),
    Hybrid(HybridCodecOptions),
}

impl CodecOptions {
    pub fn method(&self) -> EmbeddingMethod {
        match self {
            CodecOptions::Lsb => EmbeddingMethod::Lsb,
            CodecOptions::Dwt(_) => EmbeddingMethod::Dwt,
            CodecOptions::Hybrid(_) => EmbeddingMethod::Hybrid,
        }
    }

    /// true for the methods that refuse to work without a password
    pub fn requires_password(&self) -> bool {
        !matches!(self, CodecOptions::Lsb)
    }
}

impl From<EmbeddingMethod> for CodecOptions {
    fn from(method: EmbeddingMethod) -> Self {
        match method {
            EmbeddingMethod::Lsb => CodecOptions::Lsb,
            EmbeddingMethod::Dwt => CodecOptions::Dwt(DwtCodecOptions::default()),
            EmbeddingMethod::Hybrid => CodecOptions::Hybrid(HybridCodecOptions::default()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmbeddingMethod {
    Lsb,
    Dwt,
    Hybrid,
}

impl Display for EmbeddingMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            EmbeddingMethod::Lsb => write!(f, "LSB"),
            EmbeddingMethod::Dwt => write!(f, "DWT"),
            EmbeddingMethod::Hybrid => write!(f, "Hybrid"),
        }
    }
}

/// Options for the wavelet transform codec
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DwtCodecOptions {
    pub policy: TransformPolicy,
}

impl DwtCodecOptions {
    pub fn with_policy(mut self, policy: TransformPolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// How a hybrid codec spreads a message over its two regions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HybridMode {
    /// first half of the message in the transform region, second half in the pixel region
    #[default]
    Split,
    /// the whole message in both regions
    Redundant,
}

/// Options for the hybrid codec
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HybridCodecOptions {
    pub mode: HybridMode,
    pub policy: TransformPolicy,
}

impl HybridCodecOptions {
    pub fn with_mode(mut self, mode: HybridMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_policy(mut self, policy: TransformPolicy) -> Self {
        self.policy = policy;
        self
    }
}
