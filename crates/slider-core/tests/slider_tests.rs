// Host-side tests for slider value, geometry and lifecycle.

use glam::{Affine3A, Quat, Vec3};
use slider_core::*;
use std::cell::RefCell;
use std::rc::Rc;

const EPS: f32 = 1e-5;

fn assert_vec_close(a: Vec3, b: Vec3) {
    assert!((a - b).length() < EPS, "expected {b}, got {a}");
}

fn unit_track_slider(value: f32, thumb: Vec3) -> AxisSlider {
    let config = SliderConfig::default()
        .with_track(Vec3::ZERO, Vec3::X)
        .with_value(value)
        .with_thumb(thumb);
    let mut slider = AxisSlider::new(config, Affine3A::IDENTITY).unwrap();
    slider.initialize().unwrap();
    slider
}

fn record(event: &mut SliderEvent) -> Rc<RefCell<Vec<SliderEventData>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = log.clone();
    event.add_listener(move |d| sink.borrow_mut().push(*d));
    log
}

#[test]
fn set_value_places_thumb_along_track() {
    let mut slider = unit_track_slider(0.0, Vec3::ZERO);
    for i in 0..=20 {
        let v = i as f32 / 20.0;
        slider.set_value(v);
        assert_eq!(slider.value(), v);
        let expected = slider.track_start() + slider.thumb_offset() + slider.track_direction() * v;
        assert_vec_close(slider.thumb_position().unwrap(), expected);
    }
}

#[test]
fn set_value_clamps_out_of_range_input() {
    let mut slider = unit_track_slider(0.5, Vec3::new(0.5, 0.0, 0.0));
    slider.set_value(1.7);
    assert_eq!(slider.value(), 1.0);
    slider.set_value(-0.2);
    assert_eq!(slider.value(), 0.0);
}

#[test]
fn set_value_ignores_nan() {
    let mut slider = unit_track_slider(0.25, Vec3::new(0.25, 0.0, 0.0));
    let updates = record(&mut slider.events_mut().on_value_updated);
    slider.set_value(f32::NAN);
    assert_eq!(slider.value(), 0.25);
    assert!(updates.borrow().is_empty());
}

#[test]
fn set_value_notifies_old_and_new() {
    let mut slider = unit_track_slider(0.2, Vec3::new(0.2, 0.0, 0.0));
    let updates = record(&mut slider.events_mut().on_value_updated);
    slider.set_value(0.9);
    assert_eq!(
        *updates.borrow(),
        vec![SliderEventData::new(0.2, 0.9, false)]
    );
}

#[test]
fn initialize_announces_current_value() {
    let config = SliderConfig::default().with_value(0.4).with_thumb(Vec3::ZERO);
    let mut slider = AxisSlider::new(config, Affine3A::IDENTITY).unwrap();
    let updates = record(&mut slider.events_mut().on_value_updated);
    slider.initialize().unwrap();
    assert_eq!(
        *updates.borrow(),
        vec![SliderEventData::unchanged(0.4, false)]
    );
    assert!(slider.is_active());
}

#[test]
fn initialize_without_thumb_fails() {
    let mut slider = AxisSlider::new(SliderConfig::default(), Affine3A::IDENTITY).unwrap();
    assert_eq!(slider.initialize(), Err(SliderError::MissingThumb));
    assert!(!slider.is_active());
}

#[test]
fn degenerate_track_rejected_at_construction() {
    let config = SliderConfig::default()
        .with_track(Vec3::ONE, Vec3::ONE)
        .with_thumb(Vec3::ZERO);
    let err = AxisSlider::new(config, Affine3A::IDENTITY).unwrap_err();
    assert!(matches!(err, SliderError::DegenerateTrack { .. }));
}

#[test]
fn degenerate_world_track_rejected_at_initialize() {
    let config = SliderConfig::default().with_thumb(Vec3::ZERO);
    let squashed = Affine3A::from_scale(Vec3::new(0.0, 1.0, 1.0));
    let mut slider = AxisSlider::new(config, squashed).unwrap();
    let err = slider.initialize().unwrap_err();
    assert!(matches!(err, SliderError::DegenerateTrack { .. }));
    assert!(!slider.is_active());
}

#[test]
fn thumb_offset_is_perpendicular_residual() {
    let slider = unit_track_slider(0.5, Vec3::new(0.3, 0.1, -0.05));
    assert_vec_close(slider.thumb_offset(), Vec3::new(0.0, 0.1, -0.05));
    // rendered at value 0.5, keeping the offset
    assert_vec_close(slider.thumb_position().unwrap(), Vec3::new(0.5, 0.1, -0.05));
}

#[test]
fn reinitialize_preserves_off_track_offset() {
    let mut slider = unit_track_slider(0.0, Vec3::new(0.0, 0.2, 0.0));
    slider.set_value(0.6);
    slider.initialize().unwrap();
    assert_vec_close(slider.thumb_offset(), Vec3::new(0.0, 0.2, 0.0));
    for v in [0.0, 0.35, 1.0] {
        slider.set_value(v);
        assert_vec_close(slider.thumb_position().unwrap(), Vec3::new(v, 0.2, 0.0));
    }
}

#[test]
fn set_value_before_initialize_keeps_host_placement() {
    let thumb = Vec3::new(0.1, 0.3, 0.0);
    let config = SliderConfig::default().with_thumb(thumb);
    let mut slider = AxisSlider::new(config, Affine3A::IDENTITY).unwrap();
    slider.set_value(0.9);
    assert_eq!(slider.thumb_position(), Some(thumb));
    slider.initialize().unwrap();
    assert_vec_close(slider.thumb_offset(), Vec3::new(0.0, 0.3, 0.0));
}

#[test]
fn track_endpoints_follow_frame_transform() {
    let frame = Affine3A::from_rotation_translation(
        Quat::from_rotation_z(std::f32::consts::FRAC_PI_2),
        Vec3::new(1.0, 2.0, 3.0),
    );
    let slider = AxisSlider::new(SliderConfig::default(), frame).unwrap();
    assert_vec_close(slider.track_start(), Vec3::new(1.0, 1.5, 3.0));
    assert_vec_close(slider.track_end(), Vec3::new(1.0, 2.5, 3.0));
    assert_vec_close(slider.track_direction(), Vec3::Y);
}

#[test]
fn shared_frame_moves_track_live() {
    let host = SharedFrame::new(Affine3A::IDENTITY);
    let config = SliderConfig::default().with_thumb(Vec3::new(0.0, 0.1, 0.0));
    let mut slider = AxisSlider::new(config, host.clone()).unwrap();
    slider.initialize().unwrap();

    host.set(Affine3A::from_translation(Vec3::new(0.0, 0.0, 2.0)));
    assert_vec_close(slider.track_start(), Vec3::new(-0.5, 0.0, 2.0));
    assert_vec_close(slider.track_end(), Vec3::new(0.5, 0.0, 2.0));

    slider.set_value(1.0);
    assert_vec_close(slider.thumb_position().unwrap(), Vec3::new(0.5, 0.1, 2.0));
}

#[test]
fn set_track_keeps_only_axis_component() {
    let mut slider = unit_track_slider(0.5, Vec3::new(0.5, 0.0, 0.0));
    slider.set_track_end(Vec3::new(2.0, 0.7, -3.0)).unwrap();
    assert_vec_close(slider.track_end(), Vec3::new(2.0, 0.0, 0.0));
    slider.set_track_start(Vec3::new(-1.0, 5.0, 5.0)).unwrap();
    assert_vec_close(slider.track_start(), Vec3::new(-1.0, 0.0, 0.0));
    // thumb re-derived against the new track
    assert_vec_close(slider.thumb_position().unwrap(), Vec3::new(0.5, 0.0, 0.0));
}

#[test]
fn set_track_projects_in_local_space() {
    let frame = Affine3A::from_translation(Vec3::new(0.0, 1.0, 0.0));
    let config = SliderConfig::default().with_axis(SliderAxis::Y).with_track(
        Vec3::new(0.0, -0.5, 0.0),
        Vec3::new(0.0, 0.5, 0.0),
    );
    let mut slider = AxisSlider::new(config, frame).unwrap();
    slider.set_track_end(Vec3::new(3.0, 3.0, 3.0)).unwrap();
    // local (3, 2, 3) projected onto Y -> (0, 2, 0), world (0, 3, 0)
    assert_vec_close(slider.track_end(), Vec3::new(0.0, 3.0, 0.0));
}

#[test]
fn set_track_rejects_collapse() {
    let mut slider = unit_track_slider(0.5, Vec3::new(0.5, 0.0, 0.0));
    let before = slider.track_start();
    let err = slider.set_track_start(Vec3::new(1.0, 9.0, 0.0)).unwrap_err();
    assert!(matches!(err, SliderError::DegenerateTrack { .. }));
    assert_eq!(slider.track_start(), before);
}

#[test]
fn shutdown_deactivates() {
    let mut slider = unit_track_slider(0.5, Vec3::new(0.5, 0.0, 0.0));
    slider.shutdown();
    assert!(!slider.is_active());
    slider.initialize().unwrap();
    assert!(slider.is_active());
}

#[test]
fn nan_track_rejected_at_construction() {
    let config = SliderConfig::default()
        .with_track(Vec3::new(f32::NAN, 0.0, 0.0), Vec3::X)
        .with_thumb(Vec3::ZERO);
    let err = AxisSlider::new(config, Affine3A::IDENTITY).unwrap_err();
    assert!(matches!(err, SliderError::DegenerateTrack { .. }));
}

#[test]
fn nan_thumb_rejected_at_initialize() {
    let config = SliderConfig::default().with_thumb(Vec3::new(0.0, f32::NAN, 0.0));
    let mut slider = AxisSlider::new(config, Affine3A::IDENTITY).unwrap();
    let err = slider.initialize().unwrap_err();
    assert!(matches!(err, SliderError::NonFiniteThumb(_)));
    assert!(!slider.is_active());
}

#[test]
fn infinite_track_end_rejected() {
    let mut slider = unit_track_slider(0.5, Vec3::new(0.5, 0.0, 0.0));
    let err = slider
        .set_track_end(Vec3::new(f32::INFINITY, 0.0, 0.0))
        .unwrap_err();
    assert!(matches!(err, SliderError::DegenerateTrack { .. }));
    assert_vec_close(slider.track_end(), Vec3::X);
    assert_vec_close(slider.thumb_position().unwrap(), Vec3::new(0.5, 0.0, 0.0));
}

#[test]
fn set_track_through_singular_frame_rejected() {
    let config = SliderConfig::default().with_thumb(Vec3::ZERO);
    let squashed = Affine3A::from_scale(Vec3::new(0.0, 1.0, 1.0));
    let mut slider = AxisSlider::new(config, squashed).unwrap();
    assert!(slider.set_track_end(Vec3::new(1.0, 0.0, 0.0)).is_err());
}

#[test]
fn events_accessor_sees_registered_listeners() {
    let mut slider = unit_track_slider(0.5, Vec3::new(0.5, 0.0, 0.0));
    slider.events_mut().on_hover_entered.add_listener(|_| {});
    assert_eq!(slider.events().on_hover_entered.len(), 1);
    assert!(slider.events().on_value_updated.is_empty());
    assert_eq!(*slider.frame(), Affine3A::IDENTITY);
}
