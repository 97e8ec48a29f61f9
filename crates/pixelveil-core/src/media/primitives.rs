use crate::media::color::LumaRange;

/// wrap the low level values that carry information
#[derive(Debug, PartialEq)]
pub enum MediaPrimitive {
    ImageColorChannel(u8),
    Coefficient(f64),
}

impl From<u8> for MediaPrimitive {
    fn from(value: u8) -> Self {
        MediaPrimitive::ImageColorChannel(value)
    }
}

impl From<f64> for MediaPrimitive {
    fn from(value: f64) -> Self {
        MediaPrimitive::Coefficient(value)
    }
}

/// luma headroom of the pixels `a`, `b`, `c` and `d` behind a Haar block, `None` for padding
pub type BlockHeadroom = [Option<LumaRange>; 4];

/// mutable primitive for storing stegano data
#[derive(Debug, PartialEq)]
pub enum MediaPrimitiveMut<'a> {
    ImageColorChannel(&'a mut u8),
    CoefficientBlock(CoefficientBlockMut<'a>),
}

/// One Haar block of the luma plane: its approximation coefficient, the three
/// detail coefficients and the luma headroom of the up to four pixels behind it.
///
/// Pixels are ordered `a` (top left), `b` (top right), `c` (bottom left), `d` (bottom right).
/// Padding pixels outside of the image have no headroom.
#[derive(Debug, PartialEq)]
pub struct CoefficientBlockMut<'a> {
    pub index: usize,
    pub approximation: &'a mut f64,
    pub horizontal: &'a mut f64,
    pub vertical: &'a mut f64,
    pub diagonal: &'a mut f64,
    pub headroom: BlockHeadroom,
}

/// `(horizontal, vertical, diagonal)` signs that move exactly one pixel of a block
pub(crate) const PIXEL_SIGNS: [(f64, f64, f64); 4] = [
    (1.0, 1.0, 1.0),
    (1.0, -1.0, -1.0),
    (-1.0, 1.0, -1.0),
    (-1.0, -1.0, 1.0),
];

impl CoefficientBlockMut<'_> {
    /// shifts the approximation by `delta` and compensates the details so that only pixel `p` moves, by `2 * delta`
    pub(crate) fn shift_through_pixel(&mut self, p: usize, delta: f64) {
        let (h, v, d) = PIXEL_SIGNS[p];
        *self.approximation += delta;
        *self.horizontal += h * delta;
        *self.vertical += v * delta;
        *self.diagonal += d * delta;
    }

    /// the first pixel, in block order, whose luma can move by `step`
    pub(crate) fn movable_pixel(&self, step: i32) -> Option<usize> {
        self.headroom
            .iter()
            .position(|range| range.is_some_and(|r| r.allows(step)))
    }
}
