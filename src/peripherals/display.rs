//! Display surface for the watch face

use embedded_graphics::{
    draw_target::DrawTarget,
    geometry::{AnchorPoint, Dimensions, Point, Size},
    image::{Image, ImageRawLE},
    mono_font::{ascii::FONT_9X18_BOLD, MonoTextStyle},
    pixelcolor::{Rgb565, RgbColor, WebColors},
    primitives::Rectangle,
    text::{Alignment, Baseline, Text, TextStyleBuilder},
    Drawable, Pixel,
};
use profont::{PROFONT_14_POINT, PROFONT_24_POINT};

use crate::{
    ui::{layout::TextMetrics, DirtyLayers, FormattedLabel, LabelId, LayerId},
    Error, FaceConfig,
};

/// Background image pixels in this color are not drawn on color panels
pub const TRANSPARENT_KEY: Rgb565 = Rgb565::MAGENTA;

/// Panel capability, fixed when the surface is created
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayKind {
    /// Color panel: orange window, background image composited over it
    Color,
    /// Black and white panel: black window, background image copied as is
    Monochrome,
}

impl DisplayKind {
    pub fn window_color(self) -> Rgb565 {
        match self {
            Self::Color => Rgb565::CSS_ORANGE,
            Self::Monochrome => Rgb565::BLACK,
        }
    }

    /// Whether `TRANSPARENT_KEY` pixels of the background are skipped
    pub fn composites(self) -> bool {
        self == Self::Color
    }
}

/// Rendering side of the host: receives label placements and redraw marks.
pub trait DisplaySurface {
    type Error;

    fn kind(&self) -> DisplayKind;

    /// Size of `text` when rendered with the font of `label`
    fn measure(&self, label: LabelId, text: &str) -> Size;

    /// Replace the text and frame of a label
    fn place_label(&mut self, label: LabelId, placed: &FormattedLabel);

    /// Request a redraw of a layer
    fn mark_dirty(&mut self, layer: LayerId);

    /// Layers waiting for a redraw
    fn dirty(&self) -> DirtyLayers;

    /// Drop every label
    fn clear(&mut self);

    /// Draw dirty layers and reset the dirty set
    fn flush(&mut self) -> Result<(), Self::Error>;
}

/// Fonts of the four labels
#[derive(Debug, Clone, Copy)]
pub struct LabelStyles<'a> {
    pub digits: MonoTextStyle<'a, Rgb565>,
    pub ampm: MonoTextStyle<'a, Rgb565>,
    pub month: MonoTextStyle<'a, Rgb565>,
    pub day: MonoTextStyle<'a, Rgb565>,
}

impl Default for LabelStyles<'_> {
    fn default() -> Self {
        Self {
            digits: MonoTextStyle::new(&PROFONT_24_POINT, Rgb565::WHITE),
            ampm: MonoTextStyle::new(&PROFONT_14_POINT, Rgb565::WHITE),
            month: MonoTextStyle::new(&PROFONT_14_POINT, Rgb565::WHITE),
            day: MonoTextStyle::new(&FONT_9X18_BOLD, Rgb565::WHITE),
        }
    }
}

impl<'a> LabelStyles<'a> {
    fn get(&self, label: LabelId) -> &MonoTextStyle<'a, Rgb565> {
        match label {
            LabelId::Digits => &self.digits,
            LabelId::AmPm => &self.ampm,
            LabelId::Month => &self.month,
            LabelId::Day => &self.day,
        }
    }
}

/// Background bitmap, resolved by the host
#[derive(Debug, Clone, Copy)]
pub struct Background<'a> {
    pub image: ImageRawLE<'a, Rgb565>,
    pub origin: Point,
}

/// Draw target adapter that skips one color
struct ColorKeyed<'t, D> {
    inner: &'t mut D,
    key: Rgb565,
}

impl<D: DrawTarget<Color = Rgb565>> Dimensions for ColorKeyed<'_, D> {
    fn bounding_box(&self) -> Rectangle {
        self.inner.bounding_box()
    }
}

impl<D: DrawTarget<Color = Rgb565>> DrawTarget for ColorKeyed<'_, D> {
    type Color = Rgb565;
    type Error = D::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let key = self.key;
        self.inner
            .draw_iter(pixels.into_iter().filter(|Pixel(_, color)| *color != key))
    }
}

/// Watch face surface on top of an embedded-graphics draw target.
///
/// Keeps the placed labels and redraws the whole screen on `flush` when any
/// layer is dirty.
pub struct Display<'a, D> {
    target: D,
    kind: DisplayKind,
    bounds: Rectangle,
    background: Option<Background<'a>>,
    styles: LabelStyles<'a>,
    labels: [Option<FormattedLabel>; 4],
    dirty: DirtyLayers,
}

impl<'a, D> Display<'a, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    /// Configure the surface for a panel
    pub fn new(target: D, kind: DisplayKind, config: &FaceConfig) -> Self {
        Self {
            target,
            kind,
            bounds: config.bounds(),
            background: None,
            styles: LabelStyles::default(),
            labels: Default::default(),
            dirty: DirtyLayers::default(),
        }
    }

    pub fn with_background(mut self, background: Background<'a>) -> Self {
        self.background = Some(background);
        self
    }

    pub fn with_styles(mut self, styles: LabelStyles<'a>) -> Self {
        self.styles = styles;
        self
    }

    /// Label currently placed for `label`
    pub fn label(&self, label: LabelId) -> Option<&FormattedLabel> {
        self.labels[label.index()].as_ref()
    }

    pub fn target(&self) -> &D {
        &self.target
    }

    /// Release the draw target
    pub fn release(self) -> D {
        self.target
    }

    fn draw_background(&mut self) -> Result<(), D::Error> {
        let kind = self.kind();
        self.target.fill_solid(&self.bounds, kind.window_color())?;

        if let Some(background) = &self.background {
            let image = Image::new(&background.image, background.origin);
            if kind.composites() {
                image.draw(&mut ColorKeyed {
                    inner: &mut self.target,
                    key: TRANSPARENT_KEY,
                })?;
            } else {
                image.draw(&mut self.target)?;
            }
        }

        Ok(())
    }

    fn draw_label(&mut self, label: LabelId) -> Result<(), D::Error> {
        let Some(placed) = &self.labels[label.index()] else {
            return Ok(());
        };
        if placed.text.is_empty() {
            return Ok(());
        }

        // Month sits right-aligned against the day number
        let (position, alignment) = match label {
            LabelId::Month => (placed.frame.anchor_point(AnchorPoint::TopRight), Alignment::Right),
            _ => (placed.frame.top_left, Alignment::Left),
        };
        let text_style = TextStyleBuilder::new()
            .alignment(alignment)
            .baseline(Baseline::Top)
            .build();

        Text::with_text_style(
            placed.as_str(),
            position,
            *self.styles.get(label),
            text_style,
        )
        .draw(&mut self.target)?;

        Ok(())
    }
}

impl<'a, D> DisplaySurface for Display<'a, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    type Error = Error<D::Error>;

    fn kind(&self) -> DisplayKind {
        self.kind
    }

    fn measure(&self, label: LabelId, text: &str) -> Size {
        self.styles.get(label).measure(text)
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
        self.dirty = DirtyLayers::default();
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        if self.dirty.is_empty() {
            return Ok(());
        }
        debug!("Redrawing screen");

        // Layers overlap, so any dirty layer repaints the whole stack
        self.draw_background().map_err(Error::Draw)?;
        for label in LabelId::ALL {
            self.draw_label(label).map_err(Error::Draw)?;
        }

        self.dirty = DirtyLayers::default();
        Ok(())
    }
}
