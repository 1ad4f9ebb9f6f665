//! Color scheme handed to the renderer.
//!
//! The core never draws; it only carries the colors so a renderer can read
//! them from the same configuration it takes geometry from.

use palette::{FromColor, Hsv, Srgb};

/// Light gray used for the inactive ring and secondary text.
pub const GRAY: Srgb<u8> = Srgb::new(142, 142, 147);

/// Orange accent used for the active arc and knobs.
pub const ORANGE: Srgb<u8> = Srgb::new(255, 149, 0);

/// Cyan used for primary text.
pub const CYAN: Srgb<u8> = Srgb::new(50, 173, 230);

/// Colors for each drawn element of the slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderColors {
    /// Full ring behind the selection.
    pub inactive_ring: Srgb<u8>,

    /// Connector arc and knobs.
    pub active_arc: Srgb<u8>,

    /// Duration and clock time text.
    pub text_primary: Srgb<u8>,

    /// Hour labels and minor ticks.
    pub text_secondary: Srgb<u8>,

    /// "Start time" / "End time" captions.
    pub text_tertiary: Srgb<u8>,
}

impl SliderColors {
    /// Default scheme with the accent (arc, knobs, captions) replaced by a
    /// fully saturated color of the given hue in degrees.
    pub fn with_accent_hue(hue: f32) -> Self {
        let accent = accent(hue);
        Self {
            active_arc: accent,
            text_tertiary: accent,
            ..Self::default()
        }
    }
}

impl Default for SliderColors {
    fn default() -> Self {
        Self {
            inactive_ring: GRAY,
            active_arc: ORANGE,
            text_primary: CYAN,
            text_secondary: GRAY,
            text_tertiary: ORANGE,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for SliderColors {
    fn format(&self, f: defmt::Formatter) {
        let rgb = |c: Srgb<u8>| (c.red, c.green, c.blue);
        defmt::write!(
            f,
            "SliderColors {{ inactive_ring: {}, active_arc: {}, text_primary: {}, text_secondary: {}, text_tertiary: {} }}",
            rgb(self.inactive_ring),
            rgb(self.active_arc),
            rgb(self.text_primary),
            rgb(self.text_secondary),
            rgb(self.text_tertiary),
        );
    }
}

/// Fully saturated, full value color of `hue` degrees.
#[inline]
pub fn accent(hue: f32) -> Srgb<u8> {
    let rgb: Srgb<f32> = Srgb::from_color(Hsv::new(hue, 1.0, 1.0));
    rgb.into_format()
}
