/// A position in screen space: origin top-left, x right, y down.
///
/// Fractional and out-of-canvas positions are valid; the viewport mapping is
/// affine and has no domain restriction.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn offset_from(&self, anchor: PixelPoint) -> (f64, f64) {
        (self.x - anchor.x, self.y - anchor.y)
    }
}

impl From<(i32, i32)> for PixelPoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self {
            x: f64::from(x),
            y: f64::from(y),
        }
    }
}
