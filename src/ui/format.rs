//! Time and date strings for the watch face labels

use super::{render, LabelText};
use crate::system::time::TimeSample;

/// Abbreviated month names, C locale
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Text of the two time labels
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FormattedTime {
    /// "HH:MM" in 24-hour mode, "H:MM" or "HH:MM" in 12-hour mode
    pub digits: LabelText,
    /// "AM"/"PM", empty in 24-hour mode
    pub suffix: &'static str,
}

/// Text of the date strip
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FormattedDate {
    pub month: &'static str,
    /// Two-digit day of month
    pub day: LabelText,
    /// "AM"/"PM" regardless of the clock style
    pub ampm: &'static str,
}

pub struct TimeFormatter;

impl TimeFormatter {
    pub fn format(sample: &TimeSample) -> FormattedTime {
        if sample.is_24h() {
            return FormattedTime {
                digits: render(format_args!("{:02}:{:02}", sample.hour(), sample.minute())),
                suffix: "",
            };
        }

        // Same shape as "%I:%M", which always pads the hour
        let padded = render(format_args!("{:02}:{:02}", sample.hour12(), sample.minute()));
        let digits = if padded.starts_with('0') {
            render(format_args!("{}", &padded[1..]))
        } else {
            padded
        };

        FormattedTime {
            digits,
            suffix: sample.meridiem().as_str(),
        }
    }
}

pub struct DateFormatter;

impl DateFormatter {
    pub fn format(sample: &TimeSample) -> FormattedDate {
        FormattedDate {
            month: month_abbrev(sample.month0()),
            day: render(format_args!("{:02}", sample.day())),
            ampm: sample.meridiem().as_str(),
        }
    }
}

/// Abbreviated month name for a zero-based month index
pub fn month_abbrev(month0: u8) -> &'static str {
    MONTHS.get(usize::from(month0)).copied().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::system::time::ClockStyle;

    fn sample(hour: u8, minute: u8, style: ClockStyle) -> TimeSample {
        let date = NaiveDate::from_ymd_opt(2024, 3, 3).unwrap();
        TimeSample::new(date, hour, minute, 0, style).unwrap()
    }

    fn on_day(year: i32, month: u32, day: u32) -> TimeSample {
        let time = NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(15, 0, 0)
            .unwrap();
        TimeSample::from_datetime(time, ClockStyle::TwentyFourHour)
    }

    #[test]
    fn twenty_four_hour_pads_both_fields() {
        for hour in 0..24 {
            for minute in 0..60 {
                let time = TimeFormatter::format(&sample(hour, minute, ClockStyle::TwentyFourHour));
                let expected = format!("{:02}:{:02}", hour, minute);

                assert_eq!(time.digits.as_str(), expected);
                assert_eq!(time.suffix, "");
            }
        }
    }

    #[test]
    fn twelve_hour_strips_single_leading_zero() {
        for hour in 0..24u8 {
            for minute in 0..60 {
                let time = TimeFormatter::format(&sample(hour, minute, ClockStyle::TwelveHour));
                let dial = match hour % 12 {
                    0 => 12,
                    h => h,
                };

                assert_eq!(time.digits.as_str(), format!("{}:{:02}", dial, minute));
                assert!(!time.digits.starts_with('0'));
                assert_eq!(time.suffix, if hour < 12 { "AM" } else { "PM" });
            }
        }
    }

    #[test]
    fn twelve_hour_keeps_minute_zero() {
        let time = TimeFormatter::format(&sample(9, 5, ClockStyle::TwelveHour));
        assert_eq!(time.digits.as_str(), "9:05");
        assert_eq!(time.suffix, "AM");

        let time = TimeFormatter::format(&sample(22, 0, ClockStyle::TwelveHour));
        assert_eq!(time.digits.as_str(), "10:00");
        assert_eq!(time.suffix, "PM");
    }

    #[test]
    fn midnight_reads_twelve_am() {
        let time = TimeFormatter::format(&sample(0, 7, ClockStyle::TwelveHour));
        assert_eq!(time.digits.as_str(), "12:07");
        assert_eq!(time.suffix, "AM");

        let time = TimeFormatter::format(&sample(12, 30, ClockStyle::TwelveHour));
        assert_eq!(time.digits.as_str(), "12:30");
        assert_eq!(time.suffix, "PM");
    }

    #[test]
    fn formatting_is_idempotent() {
        let sample = sample(13, 45, ClockStyle::TwelveHour);
        assert_eq!(TimeFormatter::format(&sample), TimeFormatter::format(&sample));
        assert_eq!(DateFormatter::format(&sample), DateFormatter::format(&sample));
    }

    #[test]
    fn day_is_zero_padded() {
        assert_eq!(DateFormatter::format(&on_day(2024, 1, 1)).day.as_str(), "01");
        assert_eq!(DateFormatter::format(&on_day(2024, 1, 31)).day.as_str(), "31");
    }

    #[test]
    fn month_uses_three_letter_abbreviation() {
        assert_eq!(DateFormatter::format(&on_day(2024, 1, 15)).month, "Jan");
        assert_eq!(DateFormatter::format(&on_day(2024, 9, 15)).month, "Sep");
        assert_eq!(DateFormatter::format(&on_day(2024, 12, 15)).month, "Dec");
        assert_eq!(month_abbrev(12), "");
    }

    #[test]
    fn date_ampm_ignores_clock_style() {
        // 15:00 sampled with the 24-hour style still reports PM
        let date = DateFormatter::format(&on_day(2024, 3, 3));
        assert_eq!(date.ampm, "PM");
    }
}
