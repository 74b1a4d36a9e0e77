//! Default watchface

use embedded_graphics::primitives::Rectangle;

use super::{
    format::{DateFormatter, TimeFormatter},
    layout::PairLayout,
    render, FormattedLabel, LabelId, LayerId, WatchFace,
};
use crate::{
    peripherals::display::DisplaySurface,
    system::time::{ClockStyle, TimeSample},
    FaceConfig,
};

fn label(text: &str, frame: Rectangle) -> FormattedLabel {
    FormattedLabel {
        text: render(format_args!("{}", text)),
        frame,
    }
}

/// Digital clock with an AM/PM suffix over a date strip
pub struct ClockFace {
    config: FaceConfig,
    layout: PairLayout,
    /// Time label
    digits: FormattedLabel,
    /// AM/PM label, shared by the time and date layers
    ampm: FormattedLabel,
    /// Date labels
    month: FormattedLabel,
    day: FormattedLabel,
    style: ClockStyle,
}

impl ClockFace {
    pub fn label(&self, label: LabelId) -> &FormattedLabel {
        match label {
            LabelId::Digits => &self.digits,
            LabelId::AmPm => &self.ampm,
            LabelId::Month => &self.month,
            LabelId::Day => &self.day,
        }
    }

    pub fn config(&self) -> &FaceConfig {
        &self.config
    }

    /// Clock style seen on the last tick
    pub fn style(&self) -> ClockStyle {
        self.style
    }

    fn update_time<S: DisplaySurface>(&mut self, sample: &TimeSample, surface: &mut S) {
        let time = TimeFormatter::format(sample);

        let (digits_frame, suffix_frame) = self.layout.layout(
            surface.measure(LabelId::Digits, &time.digits),
            surface.measure(LabelId::AmPm, time.suffix),
        );
        debug!(
            "Time labels at x={} and x={}",
            digits_frame.top_left.x,
            suffix_frame.top_left.x
        );

        self.style = sample.style();
        self.digits = FormattedLabel {
            text: time.digits,
            frame: digits_frame,
        };
        self.ampm = label(time.suffix, suffix_frame);

        surface.place_label(LabelId::Digits, &self.digits);
        surface.place_label(LabelId::AmPm, &self.ampm);

        surface.mark_dirty(LayerId::Time);
        surface.mark_dirty(LayerId::Date);
    }

    fn update_date<S: DisplaySurface>(&mut self, sample: &TimeSample, surface: &mut S) {
        let date = DateFormatter::format(sample);

        self.month = label(date.month, self.config.month_frame);
        self.day = FormattedLabel {
            text: date.day,
            frame: self.config.day_frame,
        };
        surface.place_label(LabelId::Month, &self.month);
        surface.place_label(LabelId::Day, &self.day);

        // The suffix stays empty in 24-hour mode
        if !self.style.is_24h() {
            self.ampm = label(date.ampm, self.ampm.frame);
            surface.place_label(LabelId::AmPm, &self.ampm);
        }
    }
}

impl WatchFace for ClockFace {
    fn load<S: DisplaySurface>(config: FaceConfig, surface: &mut S) -> Self {
        let face = Self {
            layout: PairLayout::new(&config),
            digits: label("00:00", config.digits_frame),
            ampm: label("AM", config.ampm_frame),
            month: label("Jan", config.month_frame),
            day: label("01", config.day_frame),
            style: ClockStyle::default(),
            config,
        };

        for id in LabelId::ALL {
            surface.place_label(id, face.label(id));
        }
        surface.mark_dirty(LayerId::Background);

        info!("Watch face loaded");
        face
    }

    fn tick<S: DisplaySurface>(&mut self, sample: &TimeSample, surface: &mut S) {
        self.update_time(sample, surface);
    }

    fn redraw<S: DisplaySurface>(&mut self, layer: LayerId, sample: &TimeSample, surface: &mut S) {
        if layer == LayerId::Date {
            self.update_date(sample, surface);
        }
    }

    fn unload<S: DisplaySurface>(self, surface: &mut S) {
        surface.clear();
        info!("Watch face unloaded");
    }
}
