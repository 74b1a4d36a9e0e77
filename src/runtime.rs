//! Glue between the host's notifications and the watch face

use crate::{
    peripherals::display::DisplaySurface,
    system::time::{TimeSample, TimeSource},
    ui::{default_watchface::ClockFace, LayerId, WatchFace},
    FaceConfig,
};

/// Seconds left until the next minute boundary
pub fn seconds_until_next_minute(sample: &TimeSample) -> u64 {
    60 - u64::from(sample.second())
}

/// Watch face bound to its time source and display surface.
pub struct WatchApp<T, S> {
    face: ClockFace,
    source: T,
    surface: S,
}

impl<T, S> WatchApp<T, S>
where
    T: TimeSource,
    S: DisplaySurface,
{
    /// Load the face and draw the first frame
    pub fn start(config: FaceConfig, source: T, mut surface: S) -> Result<Self, S::Error> {
        info!("Starting watch face");
        let face = ClockFace::load(config, &mut surface);
        let mut app = Self {
            face,
            source,
            surface,
        };

        app.on_minute()?;
        Ok(app)
    }

    /// A minute elapsed: update the time labels and redraw
    pub fn on_minute(&mut self) -> Result<TimeSample, S::Error> {
        let sample = self.source.sample();
        info!("Tick at {}:{}", sample.hour(), sample.minute());

        self.face.tick(&sample, &mut self.surface);
        self.refresh(&sample)?;
        Ok(sample)
    }

    /// The host asked for the date strip to be redrawn
    pub fn on_redraw_requested(&mut self) -> Result<(), S::Error> {
        let sample = self.source.sample();
        self.surface.mark_dirty(LayerId::Date);
        self.refresh(&sample)
    }

    /// Remove the face and hand back the time source and the surface
    pub fn stop(mut self) -> (T, S) {
        self.face.unload(&mut self.surface);
        (self.source, self.surface)
    }

    pub fn face(&self) -> &ClockFace {
        &self.face
    }

    pub fn source_mut(&mut self) -> &mut T {
        &mut self.source
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    fn refresh(&mut self, sample: &TimeSample) -> Result<(), S::Error> {
        for layer in self.surface.dirty().iter() {
            self.face.redraw(layer, sample, &mut self.surface);
        }
        self.surface.flush()
    }
}

/// Drive the watch face on every minute boundary, forever.
#[cfg(feature = "embassy")]
pub async fn run<T, S>(mut app: WatchApp<T, S>) -> Result<core::convert::Infallible, S::Error>
where
    T: TimeSource,
    S: DisplaySurface,
{
    use embassy_time::{Duration, Timer};

    loop {
        let wait = seconds_until_next_minute(&app.source.sample());
        Timer::after(Duration::from_secs(wait)).await;
        app.on_minute()?;
    }
}
