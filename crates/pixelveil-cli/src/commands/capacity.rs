use std::path::PathBuf;

use clap::Args;
use pixelveil_core::CodecOptions;

use crate::CliResult;

/// Shows how much text an image can carry with the chosen method
#[derive(Args, Debug)]
pub struct CapacityArgs {
    /// The carrier image
    #[arg(short = 'i', long = "in", value_name = "image file", required = true)]
    pub media: PathBuf,
}

impl CapacityArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        let report = pixelveil_core::commands::capacity(&self.media, options)?;

        println!("Method: {}", report.plan.method);
        println!("Capacity: {} bytes", report.plan.bytes());
        if let Some(bits) = report.plan.transform_bits {
            println!("  transform region: {} bytes", bits / 8);
        }
        if let Some(bits) = report.plan.pixel_bits {
            println!("  pixel region: {} bytes", bits / 8);
        }
        if let Some(len) = report.max_plain_message_len {
            println!("Longest message without password: {len} characters");
        }
        println!(
            "Longest message with password: {} characters",
            report.max_message_len
        );
        Ok(())
    }
}
