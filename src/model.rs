//! Start/end angle state and every value derived from it.
//!
//! [`TimeRangeModel`] is a pull model: a renderer calls the mutators from its
//! drag handlers and re-reads the derived getters on every redraw. For push
//! notifications wrap it in a [`TimeRangeController`](crate::TimeRangeController).

use core::fmt::{self, Write};

use crate::config::SliderConfig;
use crate::geometry::{FULL_TURN, Point, angular_distance, normalize_degrees, point_on_ring};
use crate::time::{ClockSpan, ClockTime, DurationParts, HOURS_PER_TURN, hours_from_angle};

/// Fixed-capacity text for formatted times and durations.
pub type Label = heapless::String<16>;

/// Default start angle (00:00).
pub const DEFAULT_START_ANGLE: f64 = 0.0;

/// Default end angle (06:00).
pub const DEFAULT_END_ANGLE: f64 = 90.0;

fn render(value: &impl fmt::Display) -> Label {
    let mut label = Label::new();
    // Longest rendering is "23 hr 55 min", well within capacity
    let _ = write!(label, "{}", value);
    label
}

/// Everything a renderer reads in one redraw.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RangeSnapshot {
    pub start_angle: f64,
    pub end_angle: f64,
    pub connector_fraction: f64,
    pub duration: DurationParts,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    pub start_knob: Point,
    pub end_knob: Point,
}

/// Two angles on the clock face plus the derived time range.
///
/// Both angles are kept in `[0, 360)` after every mutation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeRangeModel {
    start_angle: f64,
    end_angle: f64,
    config: SliderConfig,
}

impl TimeRangeModel {
    /// Creates a model spanning 00:00 to 06:00.
    pub fn new(config: SliderConfig) -> Self {
        Self {
            start_angle: DEFAULT_START_ANGLE,
            end_angle: DEFAULT_END_ANGLE,
            config,
        }
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    pub fn end_angle(&self) -> f64 {
        self.end_angle
    }

    /// Moves the start knob. No separation is enforced.
    pub fn set_start_angle(&mut self, angle: f64) {
        self.start_angle = normalize_degrees(angle);
    }

    /// Moves the end knob. No separation is enforced.
    pub fn set_end_angle(&mut self, angle: f64) {
        self.end_angle = normalize_degrees(angle);
    }

    /// Moves the start knob only if it stays at least `min_separation`
    /// degrees from the end knob around the ring; otherwise pushes the end
    /// knob to `start + min_separation` and leaves start where it was.
    ///
    /// Distance is measured the short way round, so a selection crossing
    /// midnight is compared the same as any other.
    pub fn set_start_angle_guarded(&mut self, angle: f64, min_separation: f64) {
        let angle = normalize_degrees(angle);
        if angular_distance(angle, self.end_angle) >= min_separation {
            self.start_angle = angle;
        } else {
            self.end_angle = normalize_degrees(self.start_angle + min_separation);
        }
    }

    /// Mirror of [`set_start_angle_guarded`](Self::set_start_angle_guarded):
    /// a rejected end angle pulls start to `end - min_separation` instead.
    pub fn set_end_angle_guarded(&mut self, angle: f64, min_separation: f64) {
        let angle = normalize_degrees(angle);
        if angular_distance(angle, self.start_angle) >= min_separation {
            self.end_angle = angle;
        } else {
            self.start_angle = normalize_degrees(self.end_angle - min_separation);
        }
    }

    /// Rotates the whole selection, keeping its arc length.
    pub fn rotate_both_by(&mut self, delta: f64) {
        self.start_angle = normalize_degrees(self.start_angle + delta);
        self.end_angle = normalize_degrees(self.end_angle + delta);
    }

    /// Fraction of the ring covered by the connector arc, in `[0, 1)`.
    pub fn connector_fraction(&self) -> f64 {
        let (start, end) = (self.start_angle, self.end_angle);
        let span = if end >= start {
            end - start
        } else {
            FULL_TURN - start + end
        };
        // Sub-ulp spans can round up to a full turn
        let fraction = span / FULL_TURN;
        if fraction >= 1.0 { 0.0 } else { fraction }
    }

    /// Hours from start to end, in `[0, 24)`.
    ///
    /// An end before the start falls on the next day. Equal angles give zero,
    /// as does a start so close past the end that the span rounds to a day.
    pub fn duration_hours(&self) -> f64 {
        let start = hours_from_angle(self.start_angle);
        let mut end = hours_from_angle(self.end_angle);
        if start > end {
            end += HOURS_PER_TURN;
        }
        let span = end - start;
        if span >= HOURS_PER_TURN { 0.0 } else { span }
    }

    /// Displayed duration, minutes floored to 5.
    pub fn duration_parts(&self) -> DurationParts {
        DurationParts::from_hours(self.duration_hours())
    }

    /// `"H hr M min"`, or `"M min"` under one hour.
    pub fn formatted_duration(&self) -> Label {
        render(&self.duration_parts())
    }

    /// `"HH:MM"` for any angle, minutes floored to 5.
    pub fn formatted_clock_time(&self, angle: f64) -> Label {
        render(&ClockTime::from_angle(angle))
    }

    pub fn start_time(&self) -> ClockTime {
        ClockTime::from_angle(self.start_angle)
    }

    pub fn end_time(&self) -> ClockTime {
        ClockTime::from_angle(self.end_angle)
    }

    /// Span between the displayed start and end clock times.
    ///
    /// Can differ from [`duration_parts`](Self::duration_parts) by up to
    /// five minutes, since each clock time is floored separately.
    pub fn clock_span(&self) -> ClockSpan {
        ClockSpan::between(self.start_time(), self.end_time())
    }

    /// Start knob center in the renderer's local coordinates.
    pub fn start_knob_point(&self) -> Point {
        self.knob_point(self.start_angle)
    }

    /// End knob center in the renderer's local coordinates.
    pub fn end_knob_point(&self) -> Point {
        self.knob_point(self.end_angle)
    }

    fn knob_point(&self, angle: f64) -> Point {
        point_on_ring(angle, self.config.radius(), self.config.center_offset())
    }

    /// Captures every derived value at once.
    pub fn snapshot(&self) -> RangeSnapshot {
        RangeSnapshot {
            start_angle: self.start_angle,
            end_angle: self.end_angle,
            connector_fraction: self.connector_fraction(),
            duration: self.duration_parts(),
            start_time: self.start_time(),
            end_time: self.end_time(),
            start_knob: self.start_knob_point(),
            end_knob: self.end_knob_point(),
        }
    }
}

impl Default for TimeRangeModel {
    fn default() -> Self {
        Self::new(SliderConfig::default())
    }
}
