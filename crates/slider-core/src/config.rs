use glam::Vec3;

use crate::constants::{
    default_track_end, default_track_start, DEFAULT_SLIDER_VALUE, DEGENERATE_TRACK_EPSILON,
    SLIDER_VALUE_MAX, SLIDER_VALUE_MIN,
};
use crate::error::{Result, SliderError};

/// Principal axis of the slider's local frame that the track runs along.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SliderAxis {
    #[default]
    X,
    Y,
    Z,
}

impl SliderAxis {
    /// Unit vector of this axis in local space.
    #[inline]
    pub fn unit(self) -> Vec3 {
        match self {
            SliderAxis::X => Vec3::X,
            SliderAxis::Y => Vec3::Y,
            SliderAxis::Z => Vec3::Z,
        }
    }

    /// Keep only the component of `local` that lies along this axis.
    #[inline]
    pub fn project(self, local: Vec3) -> Vec3 {
        local.project_onto_normalized(self.unit())
    }
}

impl TryFrom<u8> for SliderAxis {
    type Error = SliderError;

    fn try_from(index: u8) -> Result<Self> {
        match index {
            0 => Ok(SliderAxis::X),
            1 => Ok(SliderAxis::Y),
            2 => Ok(SliderAxis::Z),
            other => Err(SliderError::InvalidAxis(other)),
        }
    }
}

/// Construction parameters for an [`AxisSlider`](crate::AxisSlider).
///
/// Track endpoints are in the slider's local frame. `thumb` is the thumb's
/// world position before initialization; leaving it `None` makes
/// `initialize` fail with [`SliderError::MissingThumb`].
#[derive(Clone, Debug, PartialEq)]
pub struct SliderConfig {
    pub axis: SliderAxis,
    pub track_start: Vec3,
    pub track_end: Vec3,
    pub value: f32,
    pub thumb: Option<Vec3>,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            axis: SliderAxis::X,
            track_start: default_track_start(),
            track_end: default_track_end(),
            value: DEFAULT_SLIDER_VALUE,
            thumb: None,
        }
    }
}

impl SliderConfig {
    pub fn with_axis(mut self, axis: SliderAxis) -> Self {
        self.axis = axis;
        self
    }

    pub fn with_track(mut self, start: Vec3, end: Vec3) -> Self {
        self.track_start = start;
        self.track_end = end;
        self
    }

    pub fn with_value(mut self, value: f32) -> Self {
        self.value = value;
        self
    }

    pub fn with_thumb(mut self, thumb: Vec3) -> Self {
        self.thumb = Some(thumb);
        self
    }

    /// Check the track and value, returning a config with the value clamped
    /// into \[0, 1\].
    pub fn validate(mut self) -> Result<Self> {
        ensure_track(self.track_start, self.track_end)?;
        if !self.value.is_finite() {
            return Err(SliderError::NonFiniteValue(self.value));
        }
        let clamped = self.value.clamp(SLIDER_VALUE_MIN, SLIDER_VALUE_MAX);
        if clamped != self.value {
            log::warn!(
                "[slider] configured value {} outside [0, 1]; clamped to {}",
                self.value,
                clamped
            );
            self.value = clamped;
        }
        Ok(self)
    }
}

/// Reject tracks too short to project onto, or with non-finite endpoints.
pub(crate) fn ensure_track(start: Vec3, end: Vec3) -> Result<()> {
    let long_enough = start.distance(end) >= DEGENERATE_TRACK_EPSILON;
    if !start.is_finite() || !end.is_finite() || !long_enough {
        return Err(SliderError::DegenerateTrack { start, end });
    }
    Ok(())
}
