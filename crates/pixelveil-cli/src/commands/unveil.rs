use std::path::PathBuf;

use clap::Args;
use pixelveil_core::CodecOptions;

use crate::cli::resolve_password;
use crate::CliResult;

/// Unveils a text message from an image
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Password used to encrypt the message
    #[arg(short, long, value_name = "password")]
    pub password: Option<String>,

    /// Source image that contains the secret message
    #[arg(
        short = 'i',
        long = "in",
        value_name = "image source file",
        required = true
    )]
    pub media: PathBuf,
}

impl UnveilArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        let password = resolve_password(self.password, &options, false)?;
        let message = pixelveil_core::commands::unveil(&self.media, password, options)?;

        println!("{message}");
        Ok(())
    }
}
