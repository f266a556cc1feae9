//! Time and date text formatting.
//!
//! Formats a [`TimeSample`] into the three display strings each tick:
//!
//! - hour: 24h style is space padded (" 9", "14"); 12h style drops the
//!   leading zero entirely ("9", "12")
//! - minute: always two digits, zero padded ("05")
//! - date: abbreviated month plus zero-padded day ("Aug 05")
//!
//! All output goes into caller-owned `heapless::String` buffers sized to the
//! maximum possible output, so formatting never allocates. Buffers are
//! cleared before writing; a tick therefore fully replaces the previous text.

use core::fmt::Write;

use heapless::String;

use crate::clock::TimeSample;

/// Capacity of the hour and minute buffers.
pub const TIME_TEXT_CAP: usize = 3;

/// Capacity of the date buffer.
pub const DATE_TEXT_CAP: usize = 32;

/// Hour display style, provided by the clock host.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum HourStyle {
    /// 12-hour display without a leading zero.
    H12,
    /// 24-hour display, space padded to two characters.
    H24,
}

impl HourStyle {
    pub const fn from_24h_preference(use_24h: bool) -> Self {
        if use_24h { Self::H24 } else { Self::H12 }
    }
}

/// Abbreviated month names, indexed by `month - 1`.
const MONTH_ABBREV: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Format the hour into `buf` according to the display style.
pub fn format_hour(
    buf: &mut String<TIME_TEXT_CAP>,
    hour: u8,
    style: HourStyle,
) {
    buf.clear();
    match style {
        // Space padded, strftime %k style
        HourStyle::H24 => {
            let _ = write!(buf, "{hour:2}");
        }
        // 12-hour clock face value with no padding: 0 and 12 -> 12
        HourStyle::H12 => {
            let display = match hour % 12 {
                0 => 12,
                h => h,
            };
            let _ = write!(buf, "{display}");
        }
    }
}

/// Format the minute into `buf`, always two digits.
pub fn format_minute(
    buf: &mut String<TIME_TEXT_CAP>,
    minute: u8,
) {
    buf.clear();
    let _ = write!(buf, "{minute:02}");
}

/// Format the date into `buf` as abbreviated month + zero-padded day.
pub fn format_date(
    buf: &mut String<DATE_TEXT_CAP>,
    sample: &TimeSample,
) {
    buf.clear();
    let month = MONTH_ABBREV
        .get(usize::from(sample.month).wrapping_sub(1))
        .copied()
        .unwrap_or("???");
    let _ = write!(buf, "{month} {:02}", sample.day);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(hour: u8, minute: u8, second: u8) -> TimeSample {
        TimeSample {
            hour,
            minute,
            second,
            month: 8,
            day: 5,
        }
    }

    #[test]
    fn test_hour_12h_strips_leading_zero() {
        let mut buf = String::new();
        format_hour(&mut buf, 9, HourStyle::H12);
        assert_eq!(buf.as_str(), "9", "12h mode must never show 09");
    }

    #[test]
    fn test_hour_12h_wraps_afternoon() {
        let mut buf = String::new();
        format_hour(&mut buf, 13, HourStyle::H12);
        assert_eq!(buf.as_str(), "1");
        format_hour(&mut buf, 23, HourStyle::H12);
        assert_eq!(buf.as_str(), "11");
    }

    #[test]
    fn test_hour_12h_midnight_and_noon_show_twelve() {
        let mut buf = String::new();
        format_hour(&mut buf, 0, HourStyle::H12);
        assert_eq!(buf.as_str(), "12");
        format_hour(&mut buf, 12, HourStyle::H12);
        assert_eq!(buf.as_str(), "12");
    }

    #[test]
    fn test_hour_24h_space_pads_single_digits() {
        let mut buf = String::new();
        format_hour(&mut buf, 9, HourStyle::H24);
        assert_eq!(buf.as_str(), " 9");
        format_hour(&mut buf, 0, HourStyle::H24);
        assert_eq!(buf.as_str(), " 0");
    }

    #[test]
    fn test_hour_24h_keeps_both_digits() {
        let mut buf = String::new();
        format_hour(&mut buf, 13, HourStyle::H24);
        assert_eq!(buf.as_str(), "13");
        format_hour(&mut buf, 23, HourStyle::H24);
        assert_eq!(buf.as_str(), "23");
    }

    #[test]
    fn test_minute_is_always_two_digits() {
        let mut buf = String::new();
        format_minute(&mut buf, 5);
        assert_eq!(buf.as_str(), "05");
        format_minute(&mut buf, 0);
        assert_eq!(buf.as_str(), "00");
        format_minute(&mut buf, 59);
        assert_eq!(buf.as_str(), "59");
    }

    #[test]
    fn test_date_abbreviated_month_padded_day() {
        let mut buf = String::new();
        format_date(&mut buf, &sample(14, 5, 30));
        assert_eq!(buf.as_str(), "Aug 05");

        let december = TimeSample {
            hour: 0,
            minute: 0,
            second: 0,
            month: 12,
            day: 25,
        };
        format_date(&mut buf, &december);
        assert_eq!(buf.as_str(), "Dec 25");
    }

    #[test]
    fn test_date_out_of_range_month_is_harmless() {
        let mut buf = String::new();
        let bogus = TimeSample {
            hour: 0,
            minute: 0,
            second: 0,
            month: 13,
            day: 1,
        };
        format_date(&mut buf, &bogus);
        assert_eq!(buf.as_str(), "??? 01");
    }

    #[test]
    fn test_formatting_replaces_previous_contents() {
        let mut buf = String::new();
        format_minute(&mut buf, 59);
        format_minute(&mut buf, 5);
        assert_eq!(buf.as_str(), "05", "stale digits must not survive a tick");
    }

    #[test]
    fn test_style_from_preference() {
        assert_eq!(HourStyle::from_24h_preference(true), HourStyle::H24);
        assert_eq!(HourStyle::from_24h_preference(false), HourStyle::H12);
    }
}
