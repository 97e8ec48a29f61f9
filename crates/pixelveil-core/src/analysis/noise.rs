use super::histogram::{channel_histograms, Histogram};
use crate::media::RawImage;
use crate::result::Result;

/// Amplification of the per sample difference in a noise image
pub const NOISE_GAIN: u8 = 5;

/// what embedding added to the original
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoisePattern {
    /// `|original - stego| * 5`, saturating at 255
    pub difference: RawImage,
    /// one histogram per channel of the amplified difference
    pub histograms: Vec<Histogram>,
}

pub fn analyze_noise_pattern(original: &RawImage, stego: &RawImage) -> Result<NoisePattern> {
    original.ensure_same_layout(stego)?;

    let samples = original
        .samples()
        .iter()
        .zip(stego.samples())
        .map(|(a, b)| a.abs_diff(*b).saturating_mul(NOISE_GAIN))
        .collect();
    let difference = RawImage::new(
        original.width(),
        original.height(),
        original.channels(),
        samples,
    )?;
    let histograms = channel_histograms(&difference);

    Ok(NoisePattern {
        difference,
        histograms,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VeilError;

    #[test]
    fn should_amplify_and_saturate() {
        let a = RawImage::new(3, 1, 1, vec![10, 200, 0]).unwrap();
        let b = RawImage::new(3, 1, 1, vec![11, 150, 0]).unwrap();
        let noise = analyze_noise_pattern(&a, &b).unwrap();

        assert_eq!(noise.difference.samples(), &[5, 250, 0]);
        assert_eq!(noise.histograms[0][5], 1);
        assert_eq!(noise.histograms[0][0], 1);
    }

    #[test]
    fn should_refuse_different_layouts() {
        let a = RawImage::new(3, 1, 1, vec![0; 3]).unwrap();
        let b = RawImage::new(1, 1, 3, vec![0; 3]).unwrap();
        assert!(matches!(
            analyze_noise_pattern(&a, &b),
            Err(VeilError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn large_differences_saturate() {
        let a = RawImage::new(1, 1, 1, vec![0]).unwrap();
        let b = RawImage::new(1, 1, 1, vec![100]).unwrap();
        assert_eq!(
            analyze_noise_pattern(&a, &b).unwrap().difference.samples(),
            &[255]
        );
    }
}
