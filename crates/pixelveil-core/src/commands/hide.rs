use std::path::Path;

use crate::analysis::QualityReport;
use crate::media::{CodecOptions, RawImage};
use crate::Result;

/// Hides `message` in the image at `media` and stores the result as PNG at `write_to_file`.
pub fn hide(
    media: &Path,
    write_to_file: &Path,
    message: Option<String>,
    password: Option<String>,
    options: CodecOptions,
) -> Result<QualityReport> {
    let hidden = crate::api::hide::prepare()
        .with_options(options)
        .with_image(RawImage::from_file(media)?)
        .use_password(password)
        .use_message(message)
        .execute()?;

    hidden.image.save_as(write_to_file)?;

    Ok(hidden.report)
}
