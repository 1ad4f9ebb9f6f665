#![no_std]
#![no_main]

use clock_range::{
    ClockTime, DragEvent, DragTarget, DurationParts, KnobPolicy, Point, RangeObserver,
    SliderConfig, TimeRangeController, TimeRangeModel,
};
use cortex_m_rt::entry;
use panic_halt as _;

// ============================================================================
// Minimal Observer Implementation
// ============================================================================

/// Zero-size observer for measuring library overhead
pub struct MinimalObserver;

impl RangeObserver for MinimalObserver {
    fn duration_changed(&mut self, _duration: DurationParts) {
        // Minimal no-op implementation
        core::hint::black_box(());
    }
}

// ============================================================================
// Test Gestures
// ============================================================================

// This function uses the library to prevent optimizer from removing code
#[inline(never)]
fn test_gestures() {
    // Free knobs with the default configuration
    let mut free = TimeRangeController::new(TimeRangeModel::default(), MinimalObserver);
    let _ = free.handle_drag(DragEvent::start_knob(-80.0, 20.0));
    let _ = free.handle_drag(DragEvent::end_knob(120.0, 20.0));
    let _ = free.handle_drag(DragEvent::arc(20.0, -80.0));
    core::hint::black_box(free.model().formatted_duration());
    core::hint::black_box(free.model().formatted_clock_time(free.model().start_angle()));

    // Guarded knobs
    let config = SliderConfig::builder()
        .policy(KnobPolicy::Guarded)
        .min_duration_hours(2.0)
        .build();

    if let Ok(config) = config {
        let mut guarded = TimeRangeController::new(TimeRangeModel::new(config), MinimalObserver);
        let _ = guarded.handle_drag(DragEvent::new(DragTarget::EndKnob, Point::new(25.0, -80.0)));
        core::hint::black_box(guarded.model().clock_span());
        core::hint::black_box(guarded.model().snapshot());
    }

    // Time string parsing
    let parsed = "14:20".parse::<ClockTime>();
    core::hint::black_box(parsed);
}

#[entry]
fn main() -> ! {
    // Call test function to ensure all code is included
    test_gestures();

    // Halt - this is a size analysis binary, not meant to run
    loop {
        cortex_m::asm::nop();
    }
}
