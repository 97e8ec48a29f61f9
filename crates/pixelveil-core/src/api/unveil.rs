use crate::media::image::{Codec, StegoCodec};
use crate::media::{CodecOptions, RawImage};
use crate::{Result, VeilError};

use super::Password;

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_image: Option<RawImage>,
    password: Password,
    options: CodecOptions,
}

impl UnveilApi {
    /// Use the given codec options, they have to match the ones used for hiding
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// This is the image that contains the message to be unveiled
    pub fn from_secret_image(mut self, secret_image: RawImage) -> Self {
        self.secret_image = Some(secret_image);
        self
    }

    /// Set the password used for decrypting the message
    /// If `None` is passed, no password will be used, leads to no decryption used
    pub fn using_password<P: Into<Password>>(mut self, password: P) -> Self {
        self.password = password.into();
        self
    }

    /// Execute the unveil process and blocks until it is finished
    pub fn execute(self) -> Result<String> {
        let Some(secret_image) = self.secret_image else {
            return Err(VeilError::CarrierNotSet);
        };

        let codec = Codec::from(&self.options);
        log::info!("unveiling with {}", codec.method());
        codec.unveil(&secret_image, self.password.as_deref())
    }
}
