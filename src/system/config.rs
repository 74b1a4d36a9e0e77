//! Watch face layout configuration

use embedded_graphics::{
    geometry::{Point, Size},
    primitives::Rectangle,
};

/// Display width in pixels
pub const SCREEN_WIDTH: u32 = 144;
/// Display height in pixels
pub const SCREEN_HEIGHT: u32 = 168;
/// Horizontal gap between the digits and the AM/PM suffix
pub const PAIR_GAP: u32 = 3;
/// Top edge of the digits label
pub const DIGITS_TOP: i32 = 5;
/// Top edge of the AM/PM label
pub const SUFFIX_TOP: i32 = 15;

const fn frame(x: i32, y: i32, w: u32, h: u32) -> Rectangle {
    Rectangle::new(Point::new(x, y), Size::new(w, h))
}

/// Layout of the watch face.
///
/// `Default` describes the 144 x 168 panel. The initial frames are only used
/// until the first tick replaces the time labels with measured ones; the date
/// frames stay fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FaceConfig {
    pub screen: Size,
    pub pair_gap: u32,
    pub digits_top: i32,
    pub suffix_top: i32,
    pub digits_frame: Rectangle,
    pub ampm_frame: Rectangle,
    /// Month abbreviation, right-aligned in its frame
    pub month_frame: Rectangle,
    /// Day of month, left-aligned in its frame
    pub day_frame: Rectangle,
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self {
            screen: Size::new(SCREEN_WIDTH, SCREEN_HEIGHT),
            pair_gap: PAIR_GAP,
            digits_top: DIGITS_TOP,
            suffix_top: SUFFIX_TOP,
            digits_frame: frame(20, 5, 90, 32),
            ampm_frame: frame(110, 10, 50, 32),
            month_frame: frame(15, 125, 55, 20),
            day_frame: frame(74, 125, 55, 20),
        }
    }
}

impl FaceConfig {
    /// Full screen rectangle, used for the background and layer bounds
    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(Point::zero(), self.screen)
    }
}
