//! Shared test infrastructure for clock-range integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use clock_range::{DurationParts, RangeObserver, SliderConfig};

// ============================================================================
// Mock Observer
// ============================================================================

/// Mock observer that records every duration notification
pub struct MockObserver {
    history: heapless::Vec<DurationParts, 32>,
}

impl MockObserver {
    pub fn new() -> Self {
        Self {
            history: heapless::Vec::new(),
        }
    }

    pub fn history(&self) -> &[DurationParts] {
        &self.history
    }

    pub fn count(&self) -> usize {
        self.history.len()
    }
}

impl RangeObserver for MockObserver {
    fn duration_changed(&mut self, duration: DurationParts) {
        let _ = self.history.push(duration);
    }
}

// ============================================================================
// Geometry Constants
// ============================================================================

/// Center offset of the default configuration (knob radius)
pub const CENTER: f64 = 20.0;

/// Distance from center used when placing test pointers
pub const REACH: f64 = 100.0;

pub fn default_config() -> SliderConfig {
    SliderConfig::default()
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Compare two floats with tolerance
pub fn approx_eq(a: f64, b: f64) -> bool {
    const EPSILON: f64 = 1e-9;
    (a - b).abs() < EPSILON
}

/// Compare two floats with custom epsilon
pub fn approx_eq_epsilon(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}

/// Shortest distance between two angles around the circle
pub fn angular_distance(a: f64, b: f64) -> f64 {
    let diff = (a - b).rem_euclid(360.0);
    diff.min(360.0 - diff)
}

/// Angle in degrees for a time of day
pub fn angle_for(hours: u32, minutes: u32) -> f64 {
    (hours as f64 + minutes as f64 / 60.0) * 15.0
}
