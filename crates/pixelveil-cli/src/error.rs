use thiserror::Error;

use pixelveil_core::VeilError;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] VeilError),

    /// Represents a password prompt that could not be shown or read
    #[error("Password prompt failed: {0}")]
    PasswordPrompt(#[from] dialoguer::Error),

    /// Represents a decoding threshold given without a transform method
    #[error("--x-threshold only applies to the dwt and hybrid methods")]
    ThresholdWithoutTransform,
}

pub type CliResult<T> = std::result::Result<T, CliError>;
