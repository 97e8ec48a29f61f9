//! # Pixelveil Core API
//!
//! Hides text messages inside of images and tells how visible that is. Three methods are
//! offered, see [`CodecOptions`]:
//! - `Lsb` writes the message into the least significant bit of every color sample
//! - `Dwt` writes the message into the Haar wavelet approximation of the luma channel,
//!   encrypted with a password
//! - `Hybrid` splits the image into a transform region on top and a pixel region below
//!
//! # Usage Examples
//!
//! ## Hide a message inside an image
//!
//! ```rust
//! use pixelveil_core::{CodecOptions, RawImage};
//! use pixelveil_core::media::DwtCodecOptions;
//!
//! let carrier = RawImage::from_fn(64, 64, 3, |x, y, c| (x * 3 + y * 2 + c as u32 * 40) as u8 % 200 + 20)
//!     .expect("Failed to create the carrier");
//!
//! let hidden = pixelveil_core::api::hide::prepare()
//!     .with_message("Hello, World!")     // will hide this message inside the image
//!     .with_password("SuperSecret42")    // will encrypt the message with this password
//!     .with_options(CodecOptions::Dwt(DwtCodecOptions::default()))
//!     .with_image(carrier)
//!     .execute()
//!     .expect("Failed to hide message in image");
//!
//! assert!(hidden.report.psnr > 40.0);
//! ```
//!
//! ## Unveil a message from an image
//!
//! ```rust
//! use pixelveil_core::RawImage;
//!
//! let carrier = RawImage::from_fn(16, 16, 3, |x, y, c| (x + y + c as u32) as u8)
//!     .expect("Failed to create the carrier");
//! let hidden = pixelveil_core::api::hide::prepare()
//!     .with_message("Hello World")
//!     .with_image(carrier)
//!     .execute()
//!     .expect("Failed to hide message in image");
//!
//! let message = pixelveil_core::api::unveil::prepare()
//!     .from_secret_image(hidden.image)
//!     .execute()
//!     .expect("Failed to unveil message from image");
//!
//! assert_eq!(message, "Hello World");
//! ```

#![warn(clippy::redundant_else)]

pub mod analysis;
pub mod api;
pub mod capacity;
pub mod commands;
pub mod error;
pub mod media;
pub mod result;
pub mod universal_decoder;
pub mod universal_encoder;
pub mod wavelet;

pub use crate::analysis::{AnalysisReport, ImageMetrics, QualityReport};
pub use crate::capacity::CapacityPlan;
pub use crate::error::VeilError;
pub use crate::media::image::{Codec, StegoCodec};
pub use crate::media::{CodecOptions, EmbeddingMethod, RawImage};
pub use crate::result::Result;

#[cfg(test)]
mod e2e_tests {
    use super::*;
    use crate::commands::{analyze, capacity, hide, unveil};
    use crate::media::{HybridCodecOptions, HybridMode};
    use crate::test_utils::prepare_noise_image;
    use tempfile::TempDir;

    #[test]
    fn should_hide_and_unveil_through_png_files() -> Result<()> {
        let out_dir = TempDir::new()?;
        let carrier = out_dir.path().join("carrier.png");
        let secret = out_dir.path().join("secret.png");
        prepare_noise_image(96, 96, 21).save_as(&carrier)?;
        let options = CodecOptions::Hybrid(HybridCodecOptions::default());

        let report = hide(
            &carrier,
            &secret,
            Some("Hello from a file".to_string()),
            Some("Secret42".to_string()),
            options,
        )?;
        assert!(report.psnr > 40.0);

        let message = unveil(&secret, Some("Secret42".to_string()), options)?;
        assert_eq!(message, "Hello from a file");

        Ok(())
    }

    #[test]
    fn should_write_noise_and_bit_planes() -> Result<()> {
        let out_dir = TempDir::new()?;
        let carrier = out_dir.path().join("carrier.png");
        let secret = out_dir.path().join("secret.png");
        let noise = out_dir.path().join("noise.png");
        let planes = out_dir.path().join("planes");
        prepare_noise_image(32, 32, 3).save_as(&carrier)?;

        hide(&carrier, &secret, Some("hi".into()), None, CodecOptions::Lsb)?;
        let report = analyze(
            &carrier,
            &secret,
            CodecOptions::Lsb,
            Some(noise.as_path()),
            Some(planes.as_path()),
        )?;

        assert!(report.mse > 0.0);
        assert_eq!(RawImage::from_file(&noise)?.dimensions(), (32, 32, 3));
        for k in 0..8 {
            assert!(planes.join(format!("bit_plane_{k}.png")).exists());
        }

        Ok(())
    }

    #[test]
    fn should_report_capacity_of_a_file() -> Result<()> {
        let out_dir = TempDir::new()?;
        let carrier = out_dir.path().join("carrier.png");
        prepare_noise_image(64, 64, 1).save_as(&carrier)?;

        let lsb = capacity(&carrier, CodecOptions::Lsb)?;
        assert_eq!(lsb.plan.bytes(), 64 * 64 * 3 / 8);
        assert_eq!(lsb.max_plain_message_len, Some(64 * 64 * 3 / 8 - 7));

        let hybrid = capacity(
            &carrier,
            CodecOptions::Hybrid(HybridCodecOptions::default().with_mode(HybridMode::Redundant)),
        )?;
        assert_eq!(hybrid.max_plain_message_len, None);
        assert!(hybrid.max_message_len > 0);

        Ok(())
    }

    #[test]
    fn should_refuse_a_broken_carrier_file() {
        let out_dir = TempDir::new().unwrap();
        let result = hide(
            "Cargo.toml".as_ref(),
            &out_dir.path().join("out.png"),
            Some("hi".into()),
            None,
            CodecOptions::Lsb,
        );

        assert!(matches!(result, Err(VeilError::InvalidImageMedia(_))));
    }
}
