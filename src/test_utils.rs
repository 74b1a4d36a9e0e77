//! Fakes shared by the unit tests

use core::convert::Infallible;

use embedded_graphics::{
    draw_target::DrawTarget,
    geometry::{Dimensions, OriginDimensions, Size},
    pixelcolor::{Rgb565, RgbColor},
    primitives::{PointsIter, Rectangle},
    Pixel,
};

use crate::{
    peripherals::display::{DisplayKind, DisplaySurface},
    ui::{DirtyLayers, FormattedLabel, LabelId, LayerId},
};

/// In-memory RGB565 framebuffer, initially blue
pub struct Framebuffer {
    size: Size,
    pixels: Vec<Rgb565>,
}

impl Framebuffer {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            pixels: vec![Rgb565::BLUE; (size.width * size.height) as usize],
        }
    }

    pub fn pixel(&self, x: i32, y: i32) -> Rgb565 {
        self.pixels[(y as u32 * self.size.width + x as u32) as usize]
    }

    pub fn count_in(&self, area: &Rectangle, color: Rgb565) -> usize {
        area.points()
            .filter(|p| self.pixel(p.x, p.y) == color)
            .count()
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size {
        self.size
    }
}

impl DrawTarget for Framebuffer {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let bounds = self.bounding_box();
        for Pixel(point, color) in pixels {
            if bounds.contains(point) {
                let index = (point.y as u32 * self.size.width + point.x as u32) as usize;
                self.pixels[index] = color;
            }
        }
        Ok(())
    }
}

/// Surface that records placements.
///
/// Digits measure 10 px per character and 28 px high, every other label
/// 8 px per character and 18 px high.
#[derive(Default)]
pub struct RecordingSurface {
    pub labels: [Option<FormattedLabel>; 4],
    pub dirty: DirtyLayers,
    pub flushes: usize,
    pub cleared: bool,
}

impl RecordingSurface {
    pub fn label(&self, label: LabelId) -> &FormattedLabel {
        self.labels[label.index()]
            .as_ref()
            .expect("label was never placed")
    }

    pub fn text(&self, label: LabelId) -> &str {
        self.label(label).as_str()
    }
}

impl DisplaySurface for RecordingSurface {
    type Error = Infallible;

    fn kind(&self) -> DisplayKind {
        DisplayKind::Color
    }

    fn measure(&self, label: LabelId, text: &str) -> Size {
        let chars = text.chars().count() as u32;
        match label {
            LabelId::Digits => Size::new(chars * 10, 28),
            _ => Size::new(chars * 8, 18),
        }
    }

    fn place_label(&mut self, label: LabelId, placed: &FormattedLabel) {
        self.labels[label.index()] = Some(placed.clone());
    }

    fn mark_dirty(&mut self, layer: LayerId) {
        self.dirty.insert(layer);
    }

    fn dirty(&self) -> DirtyLayers {
        self.dirty
    }

    fn clear(&mut self) {
        self.labels = Default::default();
        self.cleared = true;
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.flushes += 1;
        self.dirty = DirtyLayers::default();
        Ok(())
    }
}
