use std::path::Path;

use crate::capacity::{max_message_len, plan, CapacityPlan};
use crate::media::{CodecOptions, RawImage};
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityReport {
    pub plan: CapacityPlan,
    /// longest message of single byte characters, with encryption
    pub max_message_len: usize,
    /// longest message without encryption, LSB only
    pub max_plain_message_len: Option<usize>,
}

pub fn capacity(media: &Path, options: CodecOptions) -> Result<CapacityReport> {
    let image = RawImage::from_file(media)?;
    let max_plain_message_len =
        (!options.requires_password()).then(|| max_message_len(&image, &options, false));

    Ok(CapacityReport {
        plan: plan(&image, &options),
        max_message_len: max_message_len(&image, &options, true),
        max_plain_message_len,
    })
}
