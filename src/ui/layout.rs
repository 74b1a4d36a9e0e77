//! Centered layout of the digits and AM/PM labels

use embedded_graphics::{
    geometry::{Point, Size},
    primitives::Rectangle,
    text::{renderer::TextRenderer, Baseline},
};

use crate::FaceConfig;

/// Measures rendered text in pixels
pub trait TextMetrics {
    fn measure(&self, text: &str) -> Size;
}

impl<S: TextRenderer> TextMetrics for S {
    fn measure(&self, text: &str) -> Size {
        self.measure_string(text, Point::zero(), Baseline::Top)
            .bounding_box
            .size
    }
}

/// Places the digits and the suffix as one horizontally centered pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PairLayout {
    screen_width: u32,
    gap: u32,
    digits_top: i32,
    suffix_top: i32,
}

impl PairLayout {
    pub fn new(config: &FaceConfig) -> Self {
        Self {
            screen_width: config.screen.width,
            gap: config.pair_gap,
            digits_top: config.digits_top,
            suffix_top: config.suffix_top,
        }
    }

    /// Width of both labels plus the gap
    pub fn total_width(&self, digits: Size, suffix: Size) -> u32 {
        digits.width + self.gap + suffix.width
    }

    /// Frames for the digits and the suffix, given their measured sizes.
    ///
    /// A pair wider than the screen is pinned to the left edge.
    pub fn layout(&self, digits: Size, suffix: Size) -> (Rectangle, Rectangle) {
        let total = self.total_width(digits, suffix);
        let left = if total > self.screen_width {
            warn!("Time labels overflow the screen: {} px", total);
            0
        } else {
            ((self.screen_width - total) / 2) as i32
        };

        let digits_rect = Rectangle::new(Point::new(left, self.digits_top), digits);
        let suffix_rect = Rectangle::new(
            Point::new(left + (digits.width + self.gap) as i32, self.suffix_top),
            suffix,
        );

        (digits_rect, suffix_rect)
    }

    /// Measure both texts and lay them out
    pub fn measure_and_layout(
        &self,
        digits: (&str, &impl TextMetrics),
        suffix: (&str, &impl TextMetrics),
    ) -> (Rectangle, Rectangle) {
        self.layout(digits.1.measure(digits.0), suffix.1.measure(suffix.0))
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::{
        mono_font::{ascii::FONT_6X10, MonoTextStyle},
        pixelcolor::Rgb565,
        prelude::RgbColor,
    };

    use super::*;

    fn layout() -> PairLayout {
        PairLayout::new(&FaceConfig::default())
    }

    #[test]
    fn centers_pair_with_gap() {
        let (digits, suffix) = layout().layout(Size::new(40, 28), Size::new(20, 18));

        assert_eq!(layout().total_width(Size::new(40, 28), Size::new(20, 18)), 63);
        assert_eq!(digits, Rectangle::new(Point::new(40, 5), Size::new(40, 28)));
        assert_eq!(suffix, Rectangle::new(Point::new(83, 15), Size::new(20, 18)));
    }

    #[test]
    fn empty_suffix_keeps_gap() {
        let (digits, suffix) = layout().layout(Size::new(50, 28), Size::new(0, 0));

        // (144 - 53) / 2 = 45
        assert_eq!(digits.top_left, Point::new(45, 5));
        assert_eq!(suffix.top_left, Point::new(98, 15));
    }

    #[test]
    fn oversized_pair_pins_to_left_edge() {
        let (digits, suffix) = layout().layout(Size::new(130, 28), Size::new(20, 18));

        assert_eq!(digits.top_left.x, 0);
        assert_eq!(suffix.top_left.x, 133);
    }

    #[test]
    fn mono_font_metrics() {
        let style = MonoTextStyle::new(&FONT_6X10, Rgb565::WHITE);

        assert_eq!(style.measure("12:34"), Size::new(30, 10));

        let (digits, suffix) = layout().measure_and_layout(("12:34", &style), ("PM", &style));
        // 30 + 3 + 12 = 45, (144 - 45) / 2 = 49
        assert_eq!(digits, Rectangle::new(Point::new(49, 5), Size::new(30, 10)));
        assert_eq!(suffix.top_left, Point::new(82, 15));
    }
}
