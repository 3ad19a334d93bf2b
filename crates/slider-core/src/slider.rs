//! The axis slider: a value in \[0, 1\] rendered as a thumb along a 3D track.
//!
//! Dragging works on deltas: when a pointer engages, the slider remembers the
//! value and the pointer position, and every drag sample projects the pointer's
//! displacement onto the track direction. The thumb never snaps to the pointer.

use glam::{Affine3A, Vec3};

use crate::config::{ensure_track, SliderAxis, SliderConfig};
use crate::constants::{SLIDER_VALUE_MAX, SLIDER_VALUE_MIN};
use crate::error::{Result, SliderError};
use crate::events::{SliderEventData, SliderEvents};
use crate::frame::SpatialFrame;
use crate::input::{FocusEvent, PointerEvent, PointerHandler, PointerId};

/// Exclusive engagement between one pointer and the slider.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Session {
    pub pointer: PointerId,
    pub start_value: f32,
    pub start_pointer_position: Vec3,
}

pub struct AxisSlider<F: SpatialFrame = Affine3A> {
    frame: F,
    axis: SliderAxis,
    track_start: Vec3,
    track_end: Vec3,
    value: f32,
    thumb: Option<Vec3>,
    thumb_offset: Vec3,
    session: Option<Session>,
    active: bool,
    events: SliderEvents,
}

impl<F: SpatialFrame> AxisSlider<F> {
    /// Build an inactive slider. Call [`initialize`](Self::initialize) before
    /// feeding it input.
    pub fn new(config: SliderConfig, frame: F) -> Result<Self> {
        let config = config.validate()?;
        Ok(Self {
            frame,
            axis: config.axis,
            track_start: config.track_start,
            track_end: config.track_end,
            value: config.value,
            thumb: config.thumb,
            thumb_offset: Vec3::ZERO,
            session: None,
            active: false,
            events: SliderEvents::default(),
        })
    }

    /// Compute the thumb offset from the thumb's current placement, position
    /// the thumb and start accepting input.
    ///
    /// Safe to call again; a thumb already sitting off the track line keeps
    /// its offset.
    pub fn initialize(&mut self) -> Result<()> {
        let thumb = self.thumb.ok_or(SliderError::MissingThumb)?;
        if !thumb.is_finite() {
            return Err(SliderError::NonFiniteThumb(thumb));
        }
        let start = self.track_start();
        let end = self.track_end();
        ensure_track(start, end)?;

        let start_to_thumb = thumb - start;
        let thumb_on_track = start + start_to_thumb.project_onto(end - start);
        self.thumb_offset = thumb - thumb_on_track;

        self.active = true;
        self.update_thumb();
        log::info!(
            "[slider] initialized: value {:.3}, thumb offset {}",
            self.value,
            self.thumb_offset
        );
        self.events
            .on_value_updated
            .invoke(&SliderEventData::unchanged(self.value, false));
        Ok(())
    }

    /// Stop accepting input. An engaged session is force-released first and
    /// reports interaction-ended like a normal pointer-up.
    pub fn shutdown(&mut self) {
        if self.session.is_some() {
            log::debug!("[slider] forced release on shutdown");
            self.end_interaction();
        }
        self.active = false;
        log::info!("[slider] shut down at value {:.3}", self.value);
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Set the value, clamped into \[0, 1\], move the thumb and notify
    /// value listeners. Non-finite input is ignored.
    pub fn set_value(&mut self, value: f32) {
        if !value.is_finite() {
            log::warn!("[slider] ignoring non-finite value {}", value);
            return;
        }
        let old = self.value;
        self.value = value.clamp(SLIDER_VALUE_MIN, SLIDER_VALUE_MAX);
        self.update_thumb();
        let data = SliderEventData::new(old, self.value, self.session.is_some());
        self.events.on_value_updated.invoke(&data);
    }

    /// World-space track start.
    pub fn track_start(&self) -> Vec3 {
        self.frame.transform_point(self.track_start)
    }

    /// World-space track end.
    pub fn track_end(&self) -> Vec3 {
        self.frame.transform_point(self.track_end)
    }

    pub fn track_direction(&self) -> Vec3 {
        self.track_end() - self.track_start()
    }

    /// Move the track start to the world point `point`, keeping only its
    /// component along the slider axis.
    pub fn set_track_start(&mut self, point: Vec3) -> Result<()> {
        let local = self.axis.project(self.frame.inverse_transform_point(point));
        ensure_track(local, self.track_end)?;
        self.track_start = local;
        self.update_thumb();
        Ok(())
    }

    /// Move the track end to the world point `point`, keeping only its
    /// component along the slider axis.
    pub fn set_track_end(&mut self, point: Vec3) -> Result<()> {
        let local = self.axis.project(self.frame.inverse_transform_point(point));
        ensure_track(self.track_start, local)?;
        self.track_end = local;
        self.update_thumb();
        Ok(())
    }

    pub fn axis(&self) -> SliderAxis {
        self.axis
    }

    pub fn thumb_position(&self) -> Option<Vec3> {
        self.thumb
    }

    /// Place the thumb in world space. Takes effect on the next
    /// [`initialize`](Self::initialize).
    pub fn set_thumb_position(&mut self, position: Vec3) {
        self.thumb = Some(position);
    }

    pub fn thumb_offset(&self) -> Vec3 {
        self.thumb_offset
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_engaged(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn active_pointer(&self) -> Option<PointerId> {
        self.session.map(|s| s.pointer)
    }

    pub fn frame(&self) -> &F {
        &self.frame
    }

    pub fn events(&self) -> &SliderEvents {
        &self.events
    }

    pub fn events_mut(&mut self) -> &mut SliderEvents {
        &mut self.events
    }

    /// Re-derive the thumb from the track and value. Before initialization the
    /// offset is unknown, so the host's placement is left untouched.
    fn update_thumb(&mut self) {
        if !self.active || self.thumb.is_none() {
            return;
        }
        let start = self.track_start();
        self.thumb = Some(start + self.thumb_offset + self.track_direction() * self.value);
    }

    fn end_interaction(&mut self) {
        let data = SliderEventData::unchanged(self.value, true);
        self.events.on_interaction_ended.invoke(&data);
        self.session = None;
    }

    /// True when `event` belongs to the engaged pointer and nobody has
    /// consumed it yet.
    fn owns(&self, event: &PointerEvent) -> bool {
        self.active
            && !event.is_used()
            && self.session.is_some_and(|s| s.pointer == event.pointer)
    }
}

impl<F: SpatialFrame> PointerHandler for AxisSlider<F> {
    fn on_pointer_down(&mut self, event: &mut PointerEvent) {
        if !self.active || self.session.is_some() || event.is_used() {
            log::trace!("[slider] pointer-down from {:?} ignored", event.pointer);
            return;
        }
        self.session = Some(Session {
            pointer: event.pointer,
            start_value: self.value,
            start_pointer_position: event.position,
        });
        log::debug!(
            "[slider] engaged by {:?} at value {:.3}",
            event.pointer,
            self.value
        );
        let data = SliderEventData::unchanged(self.value, true);
        self.events.on_interaction_started.invoke(&data);
        event.use_event();
    }

    fn on_pointer_dragged(&mut self, event: &mut PointerEvent) {
        if !self.owns(event) {
            log::trace!("[slider] drag from {:?} ignored", event.pointer);
            return;
        }
        let Some(session) = self.session else { return };
        let direction = self.track_direction();
        let delta = event.position - session.start_pointer_position;
        let progress = direction.normalize().dot(delta);
        let value = (session.start_value + progress / direction.length())
            .clamp(SLIDER_VALUE_MIN, SLIDER_VALUE_MAX);
        self.set_value(value);
        event.use_event();
    }

    fn on_pointer_up(&mut self, event: &mut PointerEvent) {
        if !self.owns(event) {
            log::trace!("[slider] pointer-up from {:?} ignored", event.pointer);
            return;
        }
        log::debug!(
            "[slider] released by {:?} at value {:.3}",
            event.pointer,
            self.value
        );
        self.end_interaction();
        event.use_event();
    }

    fn on_focus_enter(&mut self, event: &FocusEvent) {
        if !self.active {
            return;
        }
        let data = SliderEventData::unchanged(self.value, event.is_near());
        self.events.on_hover_entered.invoke(&data);
    }

    fn on_focus_exit(&mut self, event: &FocusEvent) {
        if !self.active {
            return;
        }
        let data = SliderEventData::unchanged(self.value, event.is_near());
        self.events.on_hover_exited.invoke(&data);
    }
}

impl<F: SpatialFrame + std::fmt::Debug> std::fmt::Debug for AxisSlider<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AxisSlider")
            .field("frame", &self.frame)
            .field("axis", &self.axis)
            .field("track_start", &self.track_start)
            .field("track_end", &self.track_end)
            .field("value", &self.value)
            .field("thumb", &self.thumb)
            .field("thumb_offset", &self.thumb_offset)
            .field("session", &self.session)
            .field("active", &self.active)
            .finish()
    }
}
