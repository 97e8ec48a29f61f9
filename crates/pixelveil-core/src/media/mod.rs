pub mod codec_options;
pub mod color;
pub mod image;
pub mod payload;
pub mod primitives;
pub mod types;

pub use codec_options::{
    CodecOptions, DwtCodecOptions, EmbeddingMethod, HybridCodecOptions, HybridMode,
};
pub use primitives::*;
pub use types::*;
