//! Per-instance slider configuration.

use crate::colors::SliderColors;
use crate::geometry::FULL_TURN;
use crate::time::HOURS_PER_TURN;
use crate::types::{ConfigError, KnobPolicy};

/// Default ring radius.
pub const DEFAULT_RADIUS: f64 = 130.0;

/// Default knob radius.
pub const DEFAULT_KNOB_RADIUS: f64 = 20.0;

/// Default minimum duration in hours.
pub const DEFAULT_MIN_DURATION_HOURS: f64 = 1.0;

/// Default tick count: 24 hours in 10 minute steps.
pub const DEFAULT_STEP_COUNT: u32 = 24 * 60 / 10;

/// Immutable geometry and behavior parameters, fixed at construction.
///
/// Build one with [`SliderConfig::builder`] or take the [`Default`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SliderConfig {
    radius: f64,
    knob_radius: f64,
    min_duration_hours: f64,
    step_count: u32,
    policy: KnobPolicy,
    colors: SliderColors,
}

impl SliderConfig {
    /// Creates a new configuration builder seeded with the defaults.
    pub fn builder() -> SliderConfigBuilder {
        SliderConfigBuilder::new()
    }

    /// Ring radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Knob radius.
    pub fn knob_radius(&self) -> f64 {
        self.knob_radius
    }

    /// Smallest selectable duration, in hours.
    pub fn min_duration_hours(&self) -> f64 {
        self.min_duration_hours
    }

    /// Number of minor tick marks around the ring.
    pub fn step_count(&self) -> u32 {
        self.step_count
    }

    /// How knob drags are applied.
    pub fn policy(&self) -> KnobPolicy {
        self.policy
    }

    /// Renderer colors.
    pub fn colors(&self) -> &SliderColors {
        &self.colors
    }

    pub fn diameter(&self) -> f64 {
        self.radius * 2.0
    }

    pub fn knob_diameter(&self) -> f64 {
        self.knob_radius * 2.0
    }

    /// Offset from the renderer's local origin to the ring center.
    ///
    /// Knob-local pointer coordinates are shifted by the knob radius.
    pub fn center_offset(&self) -> f64 {
        self.knob_radius
    }

    /// Minimum duration expressed as an arc, in degrees.
    pub fn min_separation_degrees(&self) -> f64 {
        self.min_duration_hours * FULL_TURN / HOURS_PER_TURN
    }

    /// Arc between adjacent tick marks, in degrees.
    pub fn step_degrees(&self) -> f64 {
        FULL_TURN / f64::from(self.step_count)
    }
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            knob_radius: DEFAULT_KNOB_RADIUS,
            min_duration_hours: DEFAULT_MIN_DURATION_HOURS,
            step_count: DEFAULT_STEP_COUNT,
            policy: KnobPolicy::default(),
            colors: SliderColors::default(),
        }
    }
}

/// Builder for validated slider configurations.
#[derive(Debug, Clone, Copy)]
pub struct SliderConfigBuilder {
    config: SliderConfig,
}

impl SliderConfigBuilder {
    /// Creates a builder holding the default configuration.
    pub fn new() -> Self {
        Self {
            config: SliderConfig::default(),
        }
    }

    pub fn radius(mut self, radius: f64) -> Self {
        self.config.radius = radius;
        self
    }

    pub fn knob_radius(mut self, knob_radius: f64) -> Self {
        self.config.knob_radius = knob_radius;
        self
    }

    /// Sets the smallest selectable duration in hours.
    ///
    /// Only enforced under [`KnobPolicy::Guarded`].
    pub fn min_duration_hours(mut self, hours: f64) -> Self {
        self.config.min_duration_hours = hours;
        self
    }

    pub fn step_count(mut self, count: u32) -> Self {
        self.config.step_count = count;
        self
    }

    pub fn policy(mut self, policy: KnobPolicy) -> Self {
        self.config.policy = policy;
        self
    }

    pub fn colors(mut self, colors: SliderColors) -> Self {
        self.config.colors = colors;
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    /// * `InvalidRadius` - Radius is not positive and finite
    /// * `InvalidKnobRadius` - Knob radius is not positive and finite, or exceeds the radius
    /// * `InvalidMinDuration` - Minimum duration is outside `[0, 24)` hours
    /// * `ZeroSteps` - Step count is zero
    pub fn build(self) -> Result<SliderConfig, ConfigError> {
        let config = self.config;

        if !config.radius.is_finite() || config.radius <= 0.0 {
            return Err(ConfigError::InvalidRadius);
        }

        if !config.knob_radius.is_finite()
            || config.knob_radius <= 0.0
            || config.knob_radius > config.radius
        {
            return Err(ConfigError::InvalidKnobRadius);
        }

        if !config.min_duration_hours.is_finite()
            || config.min_duration_hours < 0.0
            || config.min_duration_hours >= HOURS_PER_TURN
        {
            return Err(ConfigError::InvalidMinDuration);
        }

        if config.step_count == 0 {
            return Err(ConfigError::ZeroSteps);
        }

        Ok(config)
    }
}

impl Default for SliderConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
