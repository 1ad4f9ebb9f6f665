//! Drag dispatch with change notification.
//!
//! Provides [`TimeRangeController`], which turns raw drag events into model
//! mutations, and the [`RangeObserver`] trait it notifies whenever the
//! displayed duration changes (the hook renderers use for haptic ticks).

use crate::command::DragEvent;
use crate::geometry::resolve_angle;
use crate::model::{RangeSnapshot, TimeRangeModel};
use crate::time::DurationParts;
use crate::types::{DragTarget, KnobPolicy};

/// Receives notifications when the displayed range changes.
pub trait RangeObserver {
    /// Called after an event changed the displayed duration.
    ///
    /// Not called for moves that leave the text unchanged, such as knob
    /// jitter within one five-minute step.
    ///
    /// Tracks the angle-derived [`DurationParts`], not
    /// [`clock_span`](crate::TimeRangeModel::clock_span). The two floor
    /// differently, so a move can change the span without a notification.
    fn duration_changed(&mut self, duration: DurationParts);
}

impl RangeObserver for () {
    fn duration_changed(&mut self, _duration: DurationParts) {}
}

/// Owns a [`TimeRangeModel`] and applies drag events to it in arrival order.
///
/// # Type Parameters
/// * `O` - Observer notified on duration changes; `()` for none
pub struct TimeRangeController<O: RangeObserver = ()> {
    model: TimeRangeModel,
    observer: O,
    last_duration: DurationParts,
}

impl<O: RangeObserver> TimeRangeController<O> {
    /// Wraps a model. The observer is not called for the initial state.
    pub fn new(model: TimeRangeModel, observer: O) -> Self {
        let last_duration = model.duration_parts();
        Self {
            model,
            observer,
            last_duration,
        }
    }

    /// Applies one pointer move.
    ///
    /// Knob targets set the absolute pointer angle, through the guarded
    /// setters under [`KnobPolicy::Guarded`]. The arc target rotates both
    /// angles by the pointer's offset from the current start angle, so
    /// consecutive events accumulate.
    pub fn handle_drag(&mut self, event: DragEvent) -> RangeSnapshot {
        let config = *self.model.config();
        let angle = resolve_angle(event.pointer, config.center_offset());
        let min_separation = config.min_separation_degrees();

        match (event.target, config.policy()) {
            (DragTarget::StartKnob, KnobPolicy::Free) => self.model.set_start_angle(angle),
            (DragTarget::StartKnob, KnobPolicy::Guarded) => {
                self.model.set_start_angle_guarded(angle, min_separation)
            }
            (DragTarget::EndKnob, KnobPolicy::Free) => self.model.set_end_angle(angle),
            (DragTarget::EndKnob, KnobPolicy::Guarded) => {
                self.model.set_end_angle_guarded(angle, min_separation)
            }
            (DragTarget::Arc, _) => {
                let delta = angle - self.model.start_angle();
                self.model.rotate_both_by(delta);
            }
        }

        self.notify_if_changed();
        self.model.snapshot()
    }

    fn notify_if_changed(&mut self) {
        let duration = self.model.duration_parts();
        if duration != self.last_duration {
            self.last_duration = duration;
            self.observer.duration_changed(duration);
        }
    }

    /// Returns the model for reading derived values.
    pub fn model(&self) -> &TimeRangeModel {
        &self.model
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Consumes the controller, returning the model and observer.
    pub fn into_parts(self) -> (TimeRangeModel, O) {
        (self.model, self.observer)
    }
}
