use std::path::PathBuf;

use clap::Args;
use pixelveil_core::{CodecOptions, QualityReport};

use crate::CliResult;

/// Measures how much a stego image differs from its original
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// The untouched carrier image
    #[arg(long, value_name = "original image", required = true)]
    pub original: PathBuf,

    /// The image that contains the message
    #[arg(long, value_name = "stego image", required = true)]
    pub stego: PathBuf,

    /// Stores the amplified difference of both images as PNG
    #[arg(long = "noise-out", value_name = "noise image file")]
    pub noise_out: Option<PathBuf>,

    /// Stores the 8 bit planes of the stego image as PNG files in this folder
    #[arg(long = "bit-planes-out", value_name = "output folder")]
    pub bit_planes_out: Option<PathBuf>,
}

impl AnalyzeArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        let report = pixelveil_core::commands::analyze(
            &self.original,
            &self.stego,
            options,
            self.noise_out.as_deref(),
            self.bit_planes_out.as_deref(),
        )?;

        print!("{}", render(&report));
        Ok(())
    }
}

pub(crate) fn render(report: &QualityReport) -> String {
    let mut out = format!(
        "PSNR: {:.2} dB\nMSE: {:.4}\nSSIM: {:.4}\nHistogram difference: {:.2}\nChi-square: {:.2}\nCapacity: {} bytes\n",
        report.psnr,
        report.mse,
        report.ssim,
        report.histogram_difference,
        report.chi_square,
        report.capacity
    );
    for advice in &report.recommendations {
        out.push_str(&format!("- {advice}\n"));
    }

    out
}
