use clap::{Parser, Subcommand, ValueEnum};
use dialoguer::Password;
use pixelveil_core::media::image::TransformPolicy;
use pixelveil_core::media::{DwtCodecOptions, HybridCodecOptions, HybridMode};
use pixelveil_core::CodecOptions;

use crate::commands::*;
use crate::{CliError, CliResult};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    /// Embedding method, dwt and hybrid always encrypt
    #[arg(long, value_enum, default_value_t = Method::Lsb, global = true)]
    pub method: Method,

    /// How hybrid spreads the message over its two regions
    #[arg(long = "hybrid-mode", value_enum, default_value_t = Mode::Split, global = true)]
    pub hybrid_mode: Mode,

    /// Experimental: decoding threshold of the wavelet coefficients, between 0 and 0.5
    #[arg(long = "x-threshold", global = true)]
    pub threshold: Option<f64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Hide(hide::HideArgs),
    Unveil(unveil::UnveilArgs),
    Analyze(analyze::AnalyzeArgs),
    Capacity(capacity::CapacityArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Lsb,
    Dwt,
    Hybrid,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Split,
    Redundant,
}

impl From<Mode> for HybridMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Split => HybridMode::Split,
            Mode::Redundant => HybridMode::Redundant,
        }
    }
}

impl CliArgs {
    pub fn codec_options(&self) -> CliResult<CodecOptions> {
        let policy = match self.threshold {
            Some(_) if self.method == Method::Lsb => {
                return Err(CliError::ThresholdWithoutTransform)
            }
            Some(threshold) => TransformPolicy::V1.with_threshold(threshold)?,
            None => TransformPolicy::V1,
        };

        Ok(match self.method {
            Method::Lsb => CodecOptions::Lsb,
            Method::Dwt => CodecOptions::Dwt(DwtCodecOptions::default().with_policy(policy)),
            Method::Hybrid => CodecOptions::Hybrid(
                HybridCodecOptions::default()
                    .with_mode(self.hybrid_mode.into())
                    .with_policy(policy),
            ),
        })
    }
}

/// Resolves the password of a command, prompting for one when the method needs it and
/// none was given. An empty answer means no password.
pub fn resolve_password(
    password: Option<String>,
    options: &CodecOptions,
    confirmation: bool,
) -> CliResult<Option<String>> {
    if password.is_some() || !options.requires_password() {
        return Ok(password);
    }

    ask_for_password(confirmation)
}

pub fn ask_for_password(confirmation: bool) -> CliResult<Option<String>> {
    let mut prompt = Password::new()
        .with_prompt("Password")
        .allow_empty_password(true);
    if confirmation {
        prompt = prompt.with_confirmation("Repeat password", "Error: the passwords don't match");
    }

    let password = prompt.interact()?;

    Ok(Some(password).filter(|p| !p.is_empty()))
}
