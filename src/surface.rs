// Drawable area in CSS pixels. The canvas backing buffer is scaled by the
// device pixel ratio so strokes stay sharp on dense screens.

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Surface {
    pub width: u32,
    pub height: u32,
}

impl Surface {
    pub fn new(width: u32, height: u32) -> Surface {
        Surface { width, height }
    }

    /// Layout sizes come in as floats; negative or NaN extents collapse to 0.
    pub fn from_css(width: f64, height: f64) -> Surface {
        Surface {
            width: css_extent(width),
            height: css_extent(height),
        }
    }

    pub fn extent(&self) -> [f64; 2] {
        [self.width as f64, self.height as f64]
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn backing_size(&self, device_pixel_ratio: f64) -> (u32, u32) {
        let ratio = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio
        } else {
            1.0
        };
        (
            css_extent(self.width as f64 * ratio),
            css_extent(self.height as f64 * ratio),
        )
    }
}

fn css_extent(value: f64) -> u32 {
    if value.is_nan() || value <= 0.0 {
        0
    } else {
        value.round().min(u32::MAX as f64) as u32
    }
}
