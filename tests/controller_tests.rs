//! Integration tests for TimeRangeController

mod common;
use common::*;

use clock_range::{
    DragEvent, DragTarget, DurationParts, KnobPolicy, Point, SliderConfig, TimeRangeController,
    TimeRangeModel, point_on_ring,
};

fn pointer_at(angle: f64) -> Point {
    point_on_ring(angle, REACH, CENTER)
}

fn controller() -> TimeRangeController<MockObserver> {
    TimeRangeController::new(TimeRangeModel::new(default_config()), MockObserver::new())
}

fn guarded_controller() -> TimeRangeController<MockObserver> {
    let config = SliderConfig::builder()
        .policy(KnobPolicy::Guarded)
        .min_duration_hours(1.0)
        .build()
        .unwrap();
    TimeRangeController::new(TimeRangeModel::new(config), MockObserver::new())
}

#[test]
fn start_knob_drag_sets_absolute_angle() {
    let mut controller = controller();

    let snapshot = controller.handle_drag(DragEvent::new(DragTarget::StartKnob, pointer_at(270.0)));

    assert!(approx_eq(controller.model().start_angle(), 270.0));
    assert!(approx_eq(controller.model().end_angle(), 90.0));
    assert_eq!(snapshot.duration, DurationParts { hours: 12, minutes: 0 });
}

#[test]
fn end_knob_drag_sets_absolute_angle() {
    let mut controller = controller();

    controller.handle_drag(DragEvent::new(DragTarget::EndKnob, pointer_at(180.0)));

    assert!(approx_eq(controller.model().start_angle(), 0.0));
    assert!(approx_eq(controller.model().end_angle(), 180.0));
    assert_eq!(controller.model().formatted_duration().as_str(), "12 hr 0 min");
}

#[test]
fn last_event_in_a_gesture_wins() {
    let mut controller = controller();

    for angle in [30.0, 60.0, 45.0, 120.0] {
        controller.handle_drag(DragEvent::new(DragTarget::EndKnob, pointer_at(angle)));
    }

    assert!(approx_eq(controller.model().end_angle(), 120.0));
}

#[test]
fn coordinate_constructors_use_local_space() {
    let mut controller = controller();

    // Directly below the ring center
    controller.handle_drag(DragEvent::start_knob(CENTER, CENTER + REACH));
    assert!(approx_eq(controller.model().start_angle(), 180.0));

    controller.handle_drag(DragEvent::end_knob(CENTER - REACH, CENTER));
    assert!(approx_eq(controller.model().end_angle(), 270.0));
}

#[test]
fn arc_drag_rotates_both_knobs() {
    let mut controller = controller();

    controller.handle_drag(DragEvent::new(DragTarget::Arc, pointer_at(45.0)));

    assert!(approx_eq(controller.model().start_angle(), 45.0));
    assert!(approx_eq(controller.model().end_angle(), 135.0));
    assert!(approx_eq(controller.model().connector_fraction(), 0.25));
}

#[test]
fn arc_drag_accumulates_across_events() {
    let mut controller = controller();

    for angle in [10.0, 20.0, 350.0, 300.0] {
        controller.handle_drag(DragEvent::arc(pointer_at(angle).x, pointer_at(angle).y));
    }

    assert!(approx_eq_epsilon(controller.model().start_angle(), 300.0, 1e-9));
    assert!(approx_eq_epsilon(controller.model().end_angle(), 30.0, 1e-9));
    assert!(approx_eq_epsilon(controller.model().connector_fraction(), 0.25, 1e-12));
}

#[test]
fn arc_drag_does_not_notify() {
    let mut controller = controller();

    controller.handle_drag(DragEvent::new(DragTarget::Arc, pointer_at(100.0)));
    controller.handle_drag(DragEvent::new(DragTarget::Arc, pointer_at(250.0)));

    assert_eq!(controller.observer().count(), 0);
}

#[test]
fn observer_notified_only_when_displayed_duration_changes() {
    let mut controller = controller();

    // 06:00 -> 06:02 still reads "6 hr 0 min"
    controller.handle_drag(DragEvent::new(DragTarget::EndKnob, pointer_at(angle_for(6, 2))));
    assert_eq!(controller.observer().count(), 0);

    // 06:07 reads "6 hr 5 min"
    controller.handle_drag(DragEvent::new(DragTarget::EndKnob, pointer_at(angle_for(6, 7))));
    assert_eq!(controller.observer().count(), 1);

    // Same text again
    controller.handle_drag(DragEvent::new(DragTarget::EndKnob, pointer_at(angle_for(6, 8))));
    assert_eq!(controller.observer().count(), 1);

    controller.handle_drag(DragEvent::new(DragTarget::EndKnob, pointer_at(angle_for(8, 0))));
    assert_eq!(
        controller.observer().history(),
        &[
            DurationParts { hours: 6, minutes: 5 },
            DurationParts { hours: 8, minutes: 0 },
        ]
    );
}

#[test]
fn free_policy_allows_knobs_to_meet() {
    let mut controller = controller();

    controller.handle_drag(DragEvent::new(DragTarget::EndKnob, pointer_at(0.0)));

    assert_eq!(controller.model().duration_hours(), 0.0);
    assert_eq!(controller.model().formatted_duration().as_str(), "0 min");
}

#[test]
fn guarded_policy_pulls_start_behind_end() {
    let mut controller = guarded_controller();

    // One hour minimum is 15 degrees; end at 5 degrees is too close to start
    controller.handle_drag(DragEvent::new(DragTarget::EndKnob, pointer_at(5.0)));

    assert!(approx_eq(controller.model().end_angle(), 90.0));
    assert!(approx_eq(controller.model().start_angle(), 75.0));
    assert_eq!(controller.model().formatted_duration().as_str(), "1 hr 0 min");
}

#[test]
fn guarded_policy_pushes_end_ahead_of_start() {
    let mut controller = guarded_controller();

    controller.handle_drag(DragEvent::new(DragTarget::StartKnob, pointer_at(85.0)));

    assert!(approx_eq(controller.model().start_angle(), 0.0));
    assert!(approx_eq(controller.model().end_angle(), 15.0));
}

#[test]
fn guarded_policy_keeps_overnight_selection() {
    let mut controller = guarded_controller();

    controller.handle_drag(DragEvent::new(DragTarget::StartKnob, pointer_at(300.0)));
    controller.handle_drag(DragEvent::new(DragTarget::EndKnob, pointer_at(95.0)));

    assert!(approx_eq(controller.model().start_angle(), 300.0));
    assert!(approx_eq(controller.model().end_angle(), 95.0));
    assert_eq!(controller.model().formatted_duration().as_str(), "10 hr 20 min");
}

#[test]
fn observer_follows_duration_text_not_clock_span() {
    let mut controller = controller();

    // 00:03 -> 06:00 reads "5 hr 55 min"
    controller.handle_drag(DragEvent::new(DragTarget::StartKnob, pointer_at(angle_for(0, 3))));
    // 00:03 -> 06:04 reads "6 hr 0 min"
    controller.handle_drag(DragEvent::new(DragTarget::EndKnob, pointer_at(angle_for(6, 4))));
    assert_eq!(controller.observer().count(), 2);
    assert_eq!(controller.model().clock_span().total_minutes(), 360);

    // 00:03 -> 06:05 still reads "6 hr 0 min" while the span grows
    controller.handle_drag(DragEvent::new(DragTarget::EndKnob, pointer_at(angle_for(6, 5))));
    assert_eq!(controller.model().clock_span().total_minutes(), 365);
    assert_eq!(controller.observer().count(), 2);
}

#[test]
fn guarded_policy_passes_distant_moves_through() {
    let mut controller = guarded_controller();

    controller.handle_drag(DragEvent::new(DragTarget::StartKnob, pointer_at(30.0)));
    controller.handle_drag(DragEvent::new(DragTarget::EndKnob, pointer_at(200.0)));

    assert!(approx_eq(controller.model().start_angle(), 30.0));
    assert!(approx_eq(controller.model().end_angle(), 200.0));
}

#[test]
fn unit_observer_is_a_no_op() {
    let mut controller = TimeRangeController::new(TimeRangeModel::default(), ());

    let snapshot = controller.handle_drag(DragEvent::new(DragTarget::StartKnob, pointer_at(300.0)));

    assert_eq!(snapshot.duration, DurationParts { hours: 10, minutes: 0 });
}

#[test]
fn into_parts_returns_model_and_observer() {
    let mut controller = controller();
    controller.handle_drag(DragEvent::new(DragTarget::EndKnob, pointer_at(120.0)));

    let (model, observer) = controller.into_parts();

    assert!(approx_eq(model.end_angle(), 120.0));
    assert_eq!(observer.count(), 1);
}
