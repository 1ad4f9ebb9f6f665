//! Drag events reported by the renderer.

use crate::geometry::Point;
use crate::types::DragTarget;

/// One pointer move during a drag gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DragEvent {
    /// What is being dragged.
    pub target: DragTarget,
    /// Pointer position in the renderer's local coordinates.
    pub pointer: Point,
}

impl DragEvent {
    /// Creates event.
    pub fn new(target: DragTarget, pointer: Point) -> Self {
        Self { target, pointer }
    }

    pub fn start_knob(x: f64, y: f64) -> Self {
        Self::new(DragTarget::StartKnob, Point::new(x, y))
    }

    pub fn end_knob(x: f64, y: f64) -> Self {
        Self::new(DragTarget::EndKnob, Point::new(x, y))
    }

    pub fn arc(x: f64, y: f64) -> Self {
        Self::new(DragTarget::Arc, Point::new(x, y))
    }
}
