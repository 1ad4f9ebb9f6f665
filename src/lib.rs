#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`resolve_angle`**: Turns a pointer position into a clock-face angle (0° at the top, clockwise)
//! - **`TimeRangeModel`**: Holds the start and end angles and derives duration, clock times and arc fraction
//! - **`ClockTime`**: A displayed time of day, minutes floored to 5 (`"HH:MM"`)
//! - **`DurationParts`**: A displayed duration, minutes floored to 5 (`"H hr M min"`)
//! - **`SliderConfig`**: Immutable ring geometry, minimum duration, tick count and colors
//! - **`TimeRangeController`**: Applies `DragEvent`s to a model and notifies a `RangeObserver`
//!
//! One full turn is 24 hours. The model is pull-based: a renderer reports drags
//! and re-reads the derived values each redraw. Nothing here draws.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod colors;
pub mod command;
pub mod config;
pub mod controller;
pub mod geometry;
pub mod model;
pub mod time;
pub mod types;

pub use colors::SliderColors;
pub use command::DragEvent;
pub use config::{SliderConfig, SliderConfigBuilder};
pub use controller::{RangeObserver, TimeRangeController};
pub use geometry::{Point, normalize_degrees, point_on_ring, resolve_angle};
pub use model::{Label, RangeSnapshot, TimeRangeModel};
pub use time::{ClockSpan, ClockTime, DurationParts, hours_from_angle};
pub use types::{ConfigError, DragTarget, KnobPolicy, TimeParseError};
