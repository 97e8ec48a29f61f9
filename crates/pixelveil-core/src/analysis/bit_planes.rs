use crate::media::RawImage;
use crate::result::Result;

/// Splits an image into its 8 bit planes, plane `k` holds 255 wherever bit `k` of a sample
/// is set and 0 elsewhere. Plane 0 is the least significant one.
pub fn analyze_bit_planes(image: &RawImage) -> Result<[RawImage; 8]> {
    let plane = |k: u8| {
        let samples = image
            .samples()
            .iter()
            .map(|s| if (s >> k) & 1 == 1 { u8::MAX } else { 0 })
            .collect();
        RawImage::new(image.width(), image.height(), image.channels(), samples)
    };

    Ok([
        plane(0)?,
        plane(1)?,
        plane(2)?,
        plane(3)?,
        plane(4)?,
        plane(5)?,
        plane(6)?,
        plane(7)?,
    ])
}
