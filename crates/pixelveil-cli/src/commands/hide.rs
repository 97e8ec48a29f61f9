use std::path::PathBuf;

use clap::Args;
use log::warn;
use pixelveil_core::CodecOptions;

use crate::cli::resolve_password;
use crate::CliResult;

/// Hides a text message in an image, the result is always stored as PNG
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Password used to encrypt the message, prompted for when the method needs one
    #[arg(short, long, value_name = "password")]
    pub password: Option<String>,

    /// Carrier image such as PNG or JPEG, used readonly.
    #[arg(short = 'i', long = "in", value_name = "image file", required = true)]
    pub media: PathBuf,

    /// Final image will be stored as file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// A text message that will be hidden
    #[arg(short, long, value_name = "text message", required = true)]
    pub message: String,
}

impl HideArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        let is_png = self
            .write_to_file
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("png"));
        if !is_png {
            warn!(
                "{} is written as PNG regardless of its extension",
                self.write_to_file.display()
            );
        }

        let password = resolve_password(self.password, &options, true)?;
        let report = pixelveil_core::commands::hide(
            &self.media,
            &self.write_to_file,
            Some(self.message),
            password,
            options,
        )?;

        println!("PSNR: {:.2} dB", report.psnr);
        println!("SSIM: {:.4}", report.ssim);
        Ok(())
    }
}
