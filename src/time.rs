//! Time-of-day and duration values derived from ring angles.
//!
//! A full turn maps linearly onto 24 hours. Every displayed minute value is
//! floored to a multiple of [`MINUTE_GRANULARITY`], never rounded to nearest.

use core::fmt;
use core::str::FromStr;

use crate::geometry::{FULL_TURN, normalize_degrees};
use crate::types::TimeParseError;

/// Hours covered by one full turn of the ring.
pub const HOURS_PER_TURN: f64 = 24.0;

/// Displayed minutes are floored to this step.
pub const MINUTE_GRANULARITY: u32 = 5;

const MINUTES_PER_DAY: u32 = 24 * 60;

// Float error from angle arithmetic must not drop a whole minute step,
// e.g. 6 h computed as 5.999999999 h.
const SLACK_HOURS: f64 = 1e-9;

/// Maps an angle onto hours of the day: `angle * 24 / 360`.
#[inline]
pub fn hours_from_angle(angle: f64) -> f64 {
    angle * HOURS_PER_TURN / FULL_TURN
}

#[inline]
fn floor_to_granularity(minutes: u32) -> u32 {
    minutes - minutes % MINUTE_GRANULARITY
}

/// Splits fractional hours into whole hours and truncated whole minutes.
fn split_hours(hours: f64) -> (u32, u32) {
    if !hours.is_finite() || hours <= 0.0 {
        return (0, 0);
    }
    // Slack never carries a value across midnight
    let nudged = hours + SLACK_HOURS;
    let hours = if hours < HOURS_PER_TURN && nudged >= HOURS_PER_TURN {
        hours
    } else {
        nudged
    };
    let whole = libm::floor(hours);
    let minutes = ((hours - whole) * 60.0) as u32;
    (whole as u32, minutes.min(59))
}

/// A wall-clock time shown on the face, minutes floored to 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// Midnight.
    pub const MIDNIGHT: Self = Self { hour: 0, minute: 0 };

    /// Creates a clock time, returning `None` if either field is out of range.
    ///
    /// The minute is kept as given; only angle-derived times are floored.
    pub const fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self { hour, minute })
        } else {
            None
        }
    }

    /// Time of day at `angle` degrees, with minutes floored to 5.
    pub fn from_angle(angle: f64) -> Self {
        let (hours, minutes) = split_hours(hours_from_angle(normalize_degrees(angle)));
        Self {
            // Angles within rounding of 360 map to exactly 24 h and read as midnight
            hour: (hours % 24) as u8,
            minute: floor_to_granularity(minutes) as u8,
        }
    }

    /// Hour component (0-23).
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Minute component (0-59).
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Minutes elapsed since 00:00.
    pub fn minutes_since_midnight(&self) -> u32 {
        u32::from(self.hour) * 60 + u32::from(self.minute)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

fn parse_field(field: &str) -> Option<u8> {
    if field.is_empty() || field.len() > 2 || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

impl FromStr for ClockTime {
    type Err = TimeParseError;

    /// Parses `"HH:MM"` (one or two digits per field).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = s
            .split_once(':')
            .and_then(|(h, m)| Some((parse_field(h)?, parse_field(m)?)));

        let Some((hour, minute)) = parsed else {
            #[cfg(feature = "defmt")]
            defmt::warn!("malformed time string: {=str}", s);
            return Err(TimeParseError::MalformedTimeString);
        };

        if hour >= 24 {
            return Err(TimeParseError::HourOutOfRange(hour));
        }
        if minute >= 60 {
            return Err(TimeParseError::MinuteOutOfRange(minute));
        }
        Ok(Self { hour, minute })
    }
}

/// A displayed duration: whole hours plus minutes floored to 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DurationParts {
    pub hours: u32,
    pub minutes: u32,
}

impl DurationParts {
    /// Splits fractional hours for display.
    ///
    /// Hours and minutes are both truncated, then minutes are floored to 5.
    /// Negative or non-finite input yields zero.
    pub fn from_hours(hours: f64) -> Self {
        let (hours, minutes) = split_hours(hours);
        Self {
            hours,
            minutes: floor_to_granularity(minutes),
        }
    }

    /// Total displayed minutes.
    pub fn total_minutes(&self) -> u32 {
        self.hours * 60 + self.minutes
    }
}

impl fmt::Display for DurationParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hours > 0 {
            write!(f, "{} hr {} min", self.hours, self.minutes)
        } else {
            write!(f, "{} min", self.minutes)
        }
    }
}

/// Span between two displayed clock times, wrapping past midnight.
///
/// Renders as `"HH:MM:SS"`; seconds are always zero since clock times carry
/// no seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockSpan {
    minutes: u32,
}

impl ClockSpan {
    /// Span from `start` to `end`. An earlier `end` is taken to be on the
    /// next day; equal times give a zero span.
    pub fn between(start: ClockTime, end: ClockTime) -> Self {
        let start = start.minutes_since_midnight();
        let end = end.minutes_since_midnight();
        let minutes = if end < start {
            end + MINUTES_PER_DAY - start
        } else {
            end - start
        };
        Self { minutes }
    }

    /// Length in minutes.
    pub fn total_minutes(&self) -> u32 {
        self.minutes
    }
}

impl fmt::Display for ClockSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:00", self.minutes / 60, self.minutes % 60)
    }
}
