//! Digital watch face for a 144 x 168 wearable display.
//!
//! Renders a background image, the current time (with an AM/PM suffix in
//! 12-hour mode) and a date strip. The host owns the window system and the
//! event loop; this crate only reacts to minute ticks and redraw requests
//! through [`TimeSource`] and [`DisplaySurface`].
#![cfg_attr(not(test), no_std)]

// Must come first so the logging macros are visible to every module.
#[macro_use]
mod fmt;

pub mod error;
pub mod peripherals;
pub mod runtime;
pub mod system;
pub mod ui;

#[cfg(test)]
mod test_utils;

pub use error::Error;
pub use peripherals::display::{Display, DisplayKind, DisplaySurface};
pub use runtime::WatchApp;
pub use system::{
    config::FaceConfig,
    time::{ClockStyle, TimeSample, TimeSource},
};
pub use ui::{default_watchface::ClockFace, FormattedLabel, LabelId, LayerId, WatchFace};
