use std::string::FromUtf8Error;
use thiserror::Error;

pub use pixelveil_seal::SealError;

use crate::media::image::PolicyTag;

#[derive(Error, Debug)]
pub enum VeilError {
    /// Represents a pixel buffer that cannot be interpreted, for example a sample count that does not match the dimensions
    #[error("Image buffer is unreadable: {0}")]
    UnreadableImage(String),

    /// Represents a comparison of two images that do not share dimensions and channel layout
    #[error(
        "Image dimensions do not match: {}x{}x{} vs. {}x{}x{}",
        original.0, original.1, original.2, stego.0, stego.1, stego.2
    )]
    DimensionMismatch {
        original: (u32, u32, u8),
        stego: (u32, u32, u8),
    },

    /// Represents a payload that is larger than what the carrier can take for the chosen method
    #[error("Capacity Error: the payload needs {required} bits but the carrier only offers {available} bits")]
    CapacityExceeded { required: usize, available: usize },

    /// Represents a method that mandates a password, called without one
    #[error("The chosen method requires a password")]
    MissingPassword,

    /// Represents a wrong password, or a corrupted or truncated payload
    #[error("Decryption failed, wrong password or corrupted payload")]
    DecryptionFailed(#[source] SealError),

    /// Represents an error when encrypting the data
    #[error("Encryption failed")]
    EncryptionFailed(#[source] SealError),

    /// Represents an unveil that found no framed message, also caused by a wrong method or password combination
    #[error("No message delimiter found")]
    DelimiterNotFound,

    /// Represents a payload written by a different method or policy version than the one used to read it
    #[error("Payload was written with policy {found:?} but read with policy {expected:?}")]
    PolicyMismatch { expected: PolicyTag, found: PolicyTag },

    /// Represents a wavelet block whose pixels cannot move without leaving the RGB range
    #[error("Carrier block {block} is saturated and cannot carry a bit")]
    CarrierSaturated { block: usize },

    /// Represents a plain text message that contains the end of message delimiter itself
    #[error("The message contains the reserved delimiter {0:?}")]
    MessageContainsDelimiter(&'static str),

    /// Represents the error of invalid UTF-8 text data found inside of a message
    #[error("Invalid text data found inside a message")]
    InvalidTextData(#[from] FromUtf8Error),

    /// Represents the failure of both halves of a hybrid payload
    #[error("Hybrid unveil failed, transform domain: {transform}, pixel domain: {pixel}")]
    HybridFailed {
        transform: Box<VeilError>,
        pixel: Box<VeilError>,
    },

    /// Represents a decoding threshold outside of the open interval (0, 0.5)
    #[error("Decoding threshold {0} must lie strictly between 0 and 0.5")]
    InvalidThreshold(f64),

    /// Represents an image file that cannot be opened or decoded, for example a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia(#[source] image::ImageError),

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError(#[source] image::ImageError),

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No carrier image set")]
    CarrierNotSet,

    #[error("API Error: Missing message")]
    MissingMessage,

    #[error("API Error: Missing original image")]
    MissingOriginal,

    #[error("API Error: Missing stego image")]
    MissingStego,
}

impl VeilError {
    /// true when both errors are of the same kind, payloads are not compared
    pub fn same_kind(&self, other: &VeilError) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}
