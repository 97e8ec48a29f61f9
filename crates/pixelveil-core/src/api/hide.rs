use crate::analysis::{quality_report, QualityReport};
use crate::media::image::{Codec, StegoCodec};
use crate::media::{CodecOptions, RawImage};
use crate::{Result, VeilError};

use super::Password;

pub fn prepare() -> HideApi {
    HideApi::default()
}

/// the stego image together with a quality report against its carrier
#[derive(Debug, Clone)]
pub struct HiddenMessage {
    pub image: RawImage,
    pub report: QualityReport,
}

#[derive(Default, Debug)]
pub struct HideApi {
    message: Option<String>,
    image: Option<RawImage>,
    password: Password,
    options: CodecOptions,
}

impl HideApi {
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    pub fn use_message<S: AsRef<str>>(mut self, message: Option<S>) -> Self {
        self.message = message.map(|s| s.as_ref().to_string());
        self
    }

    /// The carrier, it stays untouched
    pub fn with_image(mut self, image: RawImage) -> Self {
        self.image = Some(image);
        self
    }

    /// Set the password
    pub fn with_password(mut self, password: &str) -> Self {
        self.password = password.into();
        self
    }

    /// Set the password
    /// If `None` or an empty password is passed, no encryption is used. Only LSB accepts that.
    pub fn use_password<S: AsRef<str>>(mut self, password: Option<S>) -> Self {
        let password: Option<&str> = password.as_ref().map(|s| s.as_ref());
        self.password = password.into();
        self
    }

    pub fn execute(self) -> Result<HiddenMessage> {
        let Some(carrier) = self.image else {
            return Err(VeilError::CarrierNotSet);
        };
        let Some(message) = self.message else {
            return Err(VeilError::MissingMessage);
        };

        let codec = Codec::from(&self.options);
        log::info!(
            "hiding {} bytes with {} in a {}x{} image",
            message.len(),
            codec.method(),
            carrier.width(),
            carrier.height()
        );
        let image = codec.hide(&carrier, &message, self.password.as_deref())?;
        let report = quality_report(&carrier, &image, &self.options)?;

        Ok(HiddenMessage { image, report })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::{DwtCodecOptions, EmbeddingMethod};
    use crate::test_utils::prepare_noise_image;

    #[test]
    fn illustrate_api_usage() {
        let hidden = crate::api::hide::prepare()
            .with_message("Hello, World!")
            .with_image(prepare_noise_image(64, 64, 1))
            .with_password("SuperSecret42")
            .with_options(CodecOptions::Dwt(DwtCodecOptions::default()))
            .execute()
            .expect("Failed to hide message in image");

        assert_eq!(hidden.image.dimensions(), (64, 64, 3));
        assert!(hidden.report.psnr > 40.0);
        assert_eq!(CodecOptions::Dwt(DwtCodecOptions::default()).method(), EmbeddingMethod::Dwt);
    }

    #[test]
    fn should_require_a_carrier() {
        assert!(matches!(
            prepare().with_message("hi").execute(),
            Err(VeilError::CarrierNotSet)
        ));
    }

    #[test]
    fn should_require_a_message() {
        assert!(matches!(
            prepare()
                .with_image(prepare_noise_image(8, 8, 1))
                .use_message(None::<&str>)
                .execute(),
            Err(VeilError::MissingMessage)
        ));
    }

    #[test]
    fn empty_password_counts_as_none() {
        let result = prepare()
            .with_image(prepare_noise_image(64, 64, 1))
            .with_message("hi")
            .use_password(Some(""))
            .with_options(CodecOptions::Dwt(DwtCodecOptions::default()))
            .execute();

        assert!(matches!(result, Err(VeilError::MissingPassword)));
    }
}
