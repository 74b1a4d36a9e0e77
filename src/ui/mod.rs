//! UI definitions module

use core::fmt::{self, Write};

use embedded_graphics::primitives::Rectangle;

use crate::{peripherals::display::DisplaySurface, system::time::TimeSample, Error, FaceConfig};

pub mod default_watchface;
pub mod format;
pub mod layout;

/// Longest label is a clock string such as "12:59"
pub const LABEL_CAPACITY: usize = 8;

/// Owned label text
pub type LabelText = heapless::String<LABEL_CAPACITY>;

/// Text labels on the watch face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LabelId {
    /// Hours and minutes
    Digits,
    /// AM/PM suffix, empty in 24-hour mode
    AmPm,
    /// Month abbreviation in the date strip
    Month,
    /// Day of month in the date strip
    Day,
}

impl LabelId {
    pub const ALL: [LabelId; 4] = [Self::Digits, Self::AmPm, Self::Month, Self::Day];

    pub fn layer(self) -> LayerId {
        match self {
            Self::Digits | Self::AmPm => LayerId::Time,
            Self::Month | Self::Day => LayerId::Date,
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// Layers stacked on the window, bottom to top
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LayerId {
    Background,
    Time,
    Date,
}

impl LayerId {
    pub const ALL: [LayerId; 3] = [Self::Background, Self::Time, Self::Date];

    fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Set of layers waiting for a redraw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DirtyLayers(u8);

impl DirtyLayers {
    pub fn insert(&mut self, layer: LayerId) {
        self.0 |= layer.bit();
    }

    pub fn contains(&self, layer: LayerId) -> bool {
        self.0 & layer.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = LayerId> {
        LayerId::ALL
            .into_iter()
            .filter(move |layer| self.contains(*layer))
    }
}

impl FromIterator<LayerId> for DirtyLayers {
    fn from_iter<I: IntoIterator<Item = LayerId>>(iter: I) -> Self {
        let mut dirty = Self::default();
        for layer in iter {
            dirty.insert(layer);
        }
        dirty
    }
}

/// Label text with its placement on screen
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FormattedLabel {
    pub text: LabelText,
    pub frame: Rectangle,
}

impl FormattedLabel {
    /// Create new label, failing if `text` does not fit the label buffer
    pub fn new(text: &str, frame: Rectangle) -> Result<Self, Error> {
        let mut buf = LabelText::new();
        buf.push_str(text).map_err(|_| Error::LabelOverflow)?;
        Ok(Self { text: buf, frame })
    }

    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }
}

/// Render formatting arguments into a label buffer.
///
/// Clock strings always fit; a piece that would overflow is dropped.
pub(crate) fn render(args: fmt::Arguments<'_>) -> LabelText {
    let mut text = LabelText::new();
    if text.write_fmt(args).is_err() {
        warn!("Label overflow, kept {} bytes", text.len());
    }
    text
}

pub trait WatchFace: Sized {
    /// Create the watch face and place its initial labels
    fn load<S: DisplaySurface>(config: FaceConfig, surface: &mut S) -> Self;

    /// Update the watch face for a new minute
    fn tick<S: DisplaySurface>(&mut self, sample: &TimeSample, surface: &mut S);

    /// Refresh a dirty layer before it is drawn
    fn redraw<S: DisplaySurface>(&mut self, layer: LayerId, sample: &TimeSample, surface: &mut S);

    /// Remove the watch face from the surface
    fn unload<S: DisplaySurface>(self, surface: &mut S);
}

#[cfg(test)]
mod tests {
    use embedded_graphics::geometry::{Point, Size};

    use super::*;

    #[test]
    fn dirty_layers_iterate_bottom_to_top() {
        let dirty: DirtyLayers = [LayerId::Date, LayerId::Background].into_iter().collect();

        assert!(dirty.contains(LayerId::Date));
        assert!(!dirty.contains(LayerId::Time));

        let mut order = dirty.iter();
        assert_eq!(order.next(), Some(LayerId::Background));
        assert_eq!(order.next(), Some(LayerId::Date));
        assert_eq!(order.next(), None);
    }

    #[test]
    fn label_rejects_oversized_text() {
        let frame = Rectangle::new(Point::zero(), Size::new(10, 10));

        assert_eq!(FormattedLabel::new("12:34", frame).unwrap().as_str(), "12:34");
        assert_eq!(
            FormattedLabel::new("September", frame),
            Err(Error::LabelOverflow)
        );
    }

    #[test]
    fn render_drops_overflow_instead_of_failing() {
        let text = render(format_args!("{}", "0123456789"));
        assert!(text.len() <= LABEL_CAPACITY);
    }
}
