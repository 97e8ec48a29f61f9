pub mod decoder;
pub mod dwt_codec;
pub mod encoder;
pub mod hybrid_codec;
pub mod lsb_codec;
mod policy;

use enum_dispatch::enum_dispatch;

pub use dwt_codec::DwtCodec;
pub use hybrid_codec::HybridCodec;
pub use lsb_codec::LsbCodec;
pub use policy::*;

use crate::error::VeilError;
use crate::media::codec_options::{CodecOptions, EmbeddingMethod};
use crate::media::types::RawImage;
use crate::result::Result;

/// An embedding method: hides a message in a copy of an image and reads it back.
///
/// Codecs never modify their input, the stego image is only returned on success.
#[enum_dispatch]
pub trait StegoCodec {
    fn method(&self) -> EmbeddingMethod;

    /// bits the image can carry with this method, framing overhead included
    fn capacity_bits(&self, image: &RawImage) -> usize;

    fn hide(&self, image: &RawImage, message: &str, password: Option<&str>) -> Result<RawImage>;

    fn unveil(&self, image: &RawImage, password: Option<&str>) -> Result<String>;
}

#[enum_dispatch(StegoCodec)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Codec {
    LsbCodec,
    DwtCodec,
    HybridCodec,
}

impl From<&CodecOptions> for Codec {
    fn from(options: &CodecOptions) -> Self {
        match options {
            CodecOptions::Lsb => LsbCodec.into(),
            CodecOptions::Dwt(opts) => DwtCodec::new(opts.policy).into(),
            CodecOptions::Hybrid(opts) => HybridCodec::new(opts.mode, opts.policy).into(),
        }
    }
}

impl From<CodecOptions> for Codec {
    fn from(options: CodecOptions) -> Self {
        Codec::from(&options)
    }
}

/// an empty password counts as none
pub(crate) fn require_password(password: Option<&str>) -> Result<&str> {
    password
        .filter(|p| !p.is_empty())
        .ok_or(VeilError::MissingPassword)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::codec_options::{HybridCodecOptions, HybridMode};

    #[test]
    fn options_pick_the_codec() {
        assert_eq!(Codec::from(CodecOptions::Lsb), Codec::LsbCodec(LsbCodec));
        assert_eq!(
            Codec::from(CodecOptions::Hybrid(
                HybridCodecOptions::default().with_mode(HybridMode::Redundant)
            ))
            .method(),
            EmbeddingMethod::Hybrid
        );
    }

    #[test]
    fn dispatch_matches_the_concrete_codecs() {
        let image = crate::test_utils::prepare_noise_image(32, 32, 6);
        let dwt = CodecOptions::Dwt(Default::default());

        assert_eq!(
            Codec::from(dwt).hide(&image, "same", Some("pw")).unwrap(),
            DwtCodec::default().hide(&image, "same", Some("pw")).unwrap()
        );
        assert_eq!(
            Codec::from(CodecOptions::Lsb).capacity_bits(&image),
            LsbCodec.capacity_bits(&image)
        );
    }

    #[test]
    fn empty_passwords_are_missing() {
        assert!(matches!(require_password(None), Err(VeilError::MissingPassword)));
        assert!(matches!(require_password(Some("")), Err(VeilError::MissingPassword)));
        assert_eq!(require_password(Some("pw")).unwrap(), "pw");
    }
}
