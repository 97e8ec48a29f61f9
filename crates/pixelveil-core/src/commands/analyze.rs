use std::fs;
use std::path::Path;

use crate::analysis::QualityReport;
use crate::media::{CodecOptions, RawImage};
use crate::{Result, VeilError};

/// Compares a stego image with its original, optionally writing the amplified noise image
/// and the 8 bit planes of the stego image as PNG files.
pub fn analyze(
    original: &Path,
    stego: &Path,
    options: CodecOptions,
    noise_out: Option<&Path>,
    bit_planes_out: Option<&Path>,
) -> Result<QualityReport> {
    let report = crate::api::analyze::prepare()
        .with_options(options)
        .with_original(RawImage::from_file(original)?)
        .with_stego(RawImage::from_file(stego)?)
        .execute()?;

    if let Some(noise_out) = noise_out {
        report.noise.difference.save_as(noise_out)?;
    }

    if let Some(folder) = bit_planes_out {
        fs::create_dir_all(folder).map_err(|source| VeilError::WriteError { source })?;
        for (k, plane) in report.bit_planes.iter().enumerate() {
            plane.save_as(folder.join(format!("bit_plane_{k}.png")))?;
        }
    }

    Ok(report.quality)
}
