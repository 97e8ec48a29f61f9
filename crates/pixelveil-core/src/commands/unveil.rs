use std::path::Path;

use crate::media::{CodecOptions, RawImage};
use crate::Result;

pub fn unveil(
    secret_media: &Path,
    password: Option<String>,
    options: CodecOptions,
) -> Result<String> {
    crate::api::unveil::prepare()
        .with_options(options)
        .from_secret_image(RawImage::from_file(secret_media)?)
        .using_password(password)
        .execute()
}
