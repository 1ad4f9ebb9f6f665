//! Pointer geometry for the clock face.
//!
//! Angles are in degrees, 0° at the top of the ring, increasing clockwise.
//! Pointer coordinates use the renderer's local space (y grows downward),
//! with the ring center sitting at `(center_offset, center_offset)`.

use core::f64::consts::{FRAC_PI_2, PI};

/// Degrees in one full turn of the ring.
pub const FULL_TURN: f64 = 360.0;

/// A point in the renderer's local coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Wraps any angle into `[0, 360)`.
///
/// Non-finite input maps to 0°.
pub fn normalize_degrees(degrees: f64) -> f64 {
    if !degrees.is_finite() {
        return 0.0;
    }

    let mut wrapped = libm::fmod(degrees, FULL_TURN);
    if wrapped < 0.0 {
        wrapped += FULL_TURN;
    }

    // Tiny negative remainders round up to exactly 360.0
    if wrapped >= FULL_TURN {
        return 0.0;
    }
    wrapped
}

/// Shortest distance between two angles around the ring, in `[0, 180]`.
pub fn angular_distance(a: f64, b: f64) -> f64 {
    let forward = normalize_degrees(a - b);
    forward.min(FULL_TURN - forward)
}

/// Converts a pointer position into a clock-face angle in `[0, 360)`.
///
/// `center_offset` is the distance from the local origin to the ring center
/// along both axes (the knob radius in the usual drawing convention).
///
/// A pointer exactly on the center has no direction and resolves to 0°.
pub fn resolve_angle(pointer: Point, center_offset: f64) -> f64 {
    let dx = pointer.x - center_offset;
    let dy = pointer.y - center_offset;

    if dx == 0.0 && dy == 0.0 {
        return 0.0;
    }

    let mut angle = (libm::atan2(dy, dx) + FRAC_PI_2) / PI * 180.0;
    if angle < 0.0 {
        angle += FULL_TURN;
    }

    normalize_degrees(angle)
}

/// Places a point on a ring of `radius` at `angle` degrees.
///
/// Inverse of [`resolve_angle`] for any non-zero radius.
pub fn point_on_ring(angle: f64, radius: f64, center_offset: f64) -> Point {
    let radians = angle / 180.0 * PI;
    Point::new(
        center_offset + radius * libm::sin(radians),
        center_offset - radius * libm::cos(radians),
    )
}

/// Angle of the `index`-th of `count` evenly spaced tick marks.
///
/// Returns 0° when `count` is zero.
pub fn tick_angle(index: u32, count: u32) -> f64 {
    if count == 0 {
        return 0.0;
    }
    normalize_degrees(FULL_TURN / f64::from(count) * f64::from(index))
}

/// Label drawn next to hour tick `hour` (1..=24).
///
/// Only even hours are labelled; hour 24 reads as `0`.
pub fn hour_label(hour: u8) -> Option<u8> {
    match hour {
        24 => Some(0),
        h if h % 2 == 0 && h < 24 => Some(h),
        _ => None,
    }
}
