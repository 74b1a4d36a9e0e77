//! Time keeping module

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeDelta, Timelike};

use crate::Error;

// Current UTC epoch at compile time
include!(concat!(env!("OUT_DIR"), "/utc.rs"));

/// 12-hour vs 24-hour display convention, owned by the host settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockStyle {
    #[default]
    TwelveHour,
    TwentyFourHour,
}

impl ClockStyle {
    pub fn from_24h_flag(is_24h: bool) -> Self {
        if is_24h {
            Self::TwentyFourHour
        } else {
            Self::TwelveHour
        }
    }

    pub fn is_24h(self) -> bool {
        self == Self::TwentyFourHour
    }
}

/// Half of the day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    pub fn from_hour(hour: u8) -> Self {
        if hour < 12 {
            Self::Am
        } else {
            Self::Pm
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Am => "AM",
            Self::Pm => "PM",
        }
    }
}

/// Wall clock snapshot taken once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSample {
    date: NaiveDate,
    hour: u8,
    minute: u8,
    second: u8,
    style: ClockStyle,
}

impl TimeSample {
    /// Build a sample from raw fields, rejecting out of range values.
    pub fn new(
        date: NaiveDate,
        hour: u8,
        minute: u8,
        second: u8,
        style: ClockStyle,
    ) -> Result<Self, Error> {
        if hour > 23 || minute > 59 || second > 59 {
            return Err(Error::InvalidTime);
        }

        Ok(Self {
            date,
            hour,
            minute,
            second,
            style,
        })
    }

    /// Snapshot a local date time. Leap seconds fold into second 59.
    pub fn from_datetime(time: NaiveDateTime, style: ClockStyle) -> Self {
        Self {
            date: time.date(),
            hour: time.hour() as u8,
            minute: time.minute() as u8,
            second: time.second().min(59) as u8,
            style,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Hour in 24-hour form (0–23)
    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn second(&self) -> u8 {
        self.second
    }

    pub fn style(&self) -> ClockStyle {
        self.style
    }

    pub fn is_24h(&self) -> bool {
        self.style.is_24h()
    }

    /// Hour on a 12-hour dial (1–12); midnight and noon read 12.
    pub fn hour12(&self) -> u8 {
        match self.hour % 12 {
            0 => 12,
            hour => hour,
        }
    }

    pub fn meridiem(&self) -> Meridiem {
        Meridiem::from_hour(self.hour)
    }

    /// Day of month (1–31)
    pub fn day(&self) -> u8 {
        self.date.day() as u8
    }

    /// Month index starting at 0 for January
    pub fn month0(&self) -> u8 {
        self.date.month0() as u8
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for TimeSample {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "{}-{}-{} {}:{}:{} ({})",
            self.date.year(),
            self.date.month(),
            self.date.day(),
            self.hour,
            self.minute,
            self.second,
            self.style,
        )
    }
}

/// Source of the current local time and the user's clock style.
pub trait TimeSource {
    /// Current local wall clock time
    fn now(&self) -> NaiveDateTime;

    /// 12/24-hour preference from the device settings
    fn clock_style(&self) -> ClockStyle;

    /// Take a snapshot for one tick
    fn sample(&self) -> TimeSample {
        TimeSample::from_datetime(self.now(), self.clock_style())
    }
}

/// Time source for hosts that already know the wall clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    time: NaiveDateTime,
    style: ClockStyle,
}

impl FixedClock {
    pub fn new(time: NaiveDateTime, style: ClockStyle) -> Self {
        Self { time, style }
    }

    pub fn set_time(&mut self, time: NaiveDateTime) {
        self.time = time;
    }

    pub fn set_style(&mut self, style: ClockStyle) {
        self.style = style;
    }
}

impl TimeSource for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.time
    }

    fn clock_style(&self) -> ClockStyle {
        self.style
    }
}

/// Monotonic seconds counter, e.g. time since boot
pub trait Monotonic {
    fn now_secs(&self) -> u64;
}

/// Monotonic counter backed by the embassy time driver
#[cfg(feature = "embassy")]
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyMonotonic;

#[cfg(feature = "embassy")]
impl Monotonic for EmbassyMonotonic {
    fn now_secs(&self) -> u64 {
        embassy_time::Instant::now().as_secs()
    }
}

fn datetime_from_epoch(secs: i64) -> Option<NaiveDateTime> {
    DateTime::from_timestamp(secs, 0).map(|utc| utc.naive_utc())
}

/// UTC time paired with the monotonic reading it was valid at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeReference {
    /// Clock time (UTC)
    time: NaiveDateTime,
    /// Related monotonic time in seconds
    uptime: u64,
}

impl Default for TimeReference {
    fn default() -> Self {
        Self {
            time: NaiveDateTime::default(),
            uptime: 0,
        }
    }
}

impl TimeReference {
    /// Create new time reference from a UTC date time observed at `uptime`
    pub fn from_datetime(time: NaiveDateTime, uptime: u64) -> Self {
        Self { time, uptime }
    }

    /// Reference taken from the build timestamp, valid at uptime 0
    pub fn at_build_time() -> Self {
        match datetime_from_epoch(BUILD_UTC_EPOCH) {
            Some(time) => Self { time, uptime: 0 },
            None => Self::default(),
        }
    }
}

/// Derives local wall clock time from a reference and a monotonic counter.
pub struct TimeManager<M> {
    reference: TimeReference,
    monotonic: M,
    /// Offset of local time from UTC in seconds
    utc_offset: i32,
    style: ClockStyle,
}

impl<M: Monotonic> TimeManager<M> {
    /// Initialize time measurement on boot
    pub fn init(monotonic: M, utc_offset: i32, style: ClockStyle) -> Self {
        Self {
            reference: TimeReference::at_build_time(),
            monotonic,
            utc_offset,
            style,
        }
    }

    /// Update time reference
    pub fn set_time(&mut self, reference: TimeReference) {
        info!("Time reference updated");
        self.reference = reference;
    }

    pub fn set_style(&mut self, style: ClockStyle) {
        self.style = style;
    }

    pub fn set_utc_offset(&mut self, utc_offset: i32) {
        self.utc_offset = utc_offset;
    }

    /// Get current UTC time
    pub fn utc(&self) -> NaiveDateTime {
        let elapsed = self
            .monotonic
            .now_secs()
            .saturating_sub(self.reference.uptime);

        i64::try_from(elapsed)
            .ok()
            .and_then(TimeDelta::try_seconds)
            .and_then(|delta| self.reference.time.checked_add_signed(delta))
            .unwrap_or(self.reference.time)
    }
}

impl<M: Monotonic> TimeSource for TimeManager<M> {
    fn now(&self) -> NaiveDateTime {
        let utc = self.utc();
        TimeDelta::try_seconds(self.utc_offset.into())
            .and_then(|offset| utc.checked_add_signed(offset))
            .unwrap_or(utc)
    }

    fn clock_style(&self) -> ClockStyle {
        self.style
    }
}
