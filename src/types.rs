//! Shared enums and error types.

/// How knob drags are applied to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KnobPolicy {
    /// Knobs move freely; start and end may cross or coincide.
    #[default]
    Free,

    /// Knobs keep at least the configured minimum duration apart.
    ///
    /// A knob dragged too close pushes the opposite knob instead of moving.
    Guarded,
}

/// What the user is dragging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DragTarget {
    /// The start-time knob.
    StartKnob,

    /// The end-time knob.
    EndKnob,

    /// An hour label; rotates the whole selection.
    Arc,
}

/// Errors from parsing an `"HH:MM"` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimeParseError {
    /// Not two numeric fields separated by `:`.
    MalformedTimeString,

    /// Hour field was 24 or more.
    HourOutOfRange(u8),

    /// Minute field was 60 or more.
    MinuteOutOfRange(u8),
}

impl core::fmt::Display for TimeParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TimeParseError::MalformedTimeString => {
                write!(f, "malformed time string, expected HH:MM")
            }
            TimeParseError::HourOutOfRange(hour) => {
                write!(f, "hour {} out of range 0-23", hour)
            }
            TimeParseError::MinuteOutOfRange(minute) => {
                write!(f, "minute {} out of range 0-59", minute)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TimeParseError {}

/// Slider configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Ring radius is not a positive finite number.
    InvalidRadius,

    /// Knob radius is not positive, not finite, or larger than the ring radius.
    InvalidKnobRadius,

    /// Minimum duration is negative, not finite, or a full day or more.
    InvalidMinDuration,

    /// Tick step count is zero.
    ZeroSteps,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::InvalidRadius => {
                write!(f, "ring radius must be positive and finite")
            }
            ConfigError::InvalidKnobRadius => {
                write!(
                    f,
                    "knob radius must be positive, finite and no larger than the ring radius"
                )
            }
            ConfigError::InvalidMinDuration => {
                write!(f, "minimum duration must be in [0, 24) hours")
            }
            ConfigError::ZeroSteps => {
                write!(f, "tick step count must be at least 1")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
