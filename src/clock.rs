//! Wall-clock sampling and the host clock abstraction.
//!
//! The face never reads the system clock directly. Each tick captures a
//! [`TimeSample`] snapshot, and everything rendered during that tick reflects
//! that single snapshot. The [`ClockHost`] trait also carries the host's
//! 12h/24h display preference so the text formatter can follow it.

use chrono::{Datelike, Local, Timelike};

/// Immutable snapshot of the wall clock, taken once per tick.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TimeSample {
    /// Hour of day, 0-23.
    pub hour: u8,
    /// Minute, 0-59.
    pub minute: u8,
    /// Second, 0-59.
    pub second: u8,
    /// Month of year, 1-12.
    pub month: u8,
    /// Day of month, 1-31.
    pub day: u8,
}

impl TimeSample {
    /// Build a sample from any chrono date-time (local time, naive, ...).
    pub fn from_datetime<T: Timelike + Datelike>(dt: &T) -> Self {
        Self {
            hour: dt.hour() as u8,
            minute: dt.minute() as u8,
            second: dt.second() as u8,
            month: dt.month() as u8,
            day: dt.day() as u8,
        }
    }
}

/// Host-provided clock and locale preference.
pub trait ClockHost {
    /// Current wall-clock time.
    fn now(&self) -> TimeSample;

    /// Whether the host prefers 24-hour time display.
    fn is_24h_style(&self) -> bool;
}

/// Clock host backed by the local system clock.
///
/// The display-style preference is a plain field; the simulator has no
/// system-wide locale setting to read it from, so the host loop toggles it
/// from a key instead.
pub struct LocalClock {
    use_24h: bool,
}

impl LocalClock {
    pub const fn new() -> Self { Self { use_24h: true } }

    /// Flip between 12h and 24h display style.
    pub const fn toggle_style(&mut self) { self.use_24h = !self.use_24h; }
}

impl Default for LocalClock {
    fn default() -> Self { Self::new() }
}

impl ClockHost for LocalClock {
    fn now(&self) -> TimeSample { TimeSample::from_datetime(&Local::now()) }

    fn is_24h_style(&self) -> bool { self.use_24h }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn test_sample_from_datetime() {
        let dt = NaiveDate::from_ymd_opt(2026, 8, 5)
            .unwrap()
            .and_hms_opt(14, 5, 30)
            .unwrap();
        let sample = TimeSample::from_datetime(&dt);
        assert_eq!(
            sample,
            TimeSample {
                hour: 14,
                minute: 5,
                second: 30,
                month: 8,
                day: 5,
            }
        );
    }

    #[test]
    fn test_local_clock_defaults_to_24h() {
        assert!(LocalClock::new().is_24h_style());
    }

    #[test]
    fn test_local_clock_style_toggle() {
        let mut clock = LocalClock::new();
        clock.toggle_style();
        assert!(!clock.is_24h_style());
        clock.toggle_style();
        assert!(clock.is_24h_style());
    }

    #[test]
    fn test_local_clock_now_is_in_range() {
        let sample = LocalClock::new().now();
        assert!(sample.hour < 24);
        assert!(sample.minute < 60);
        assert!(sample.second < 60);
        assert!((1..=12).contains(&sample.month));
        assert!((1..=31).contains(&sample.day));
    }
}
