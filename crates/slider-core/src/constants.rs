use glam::Vec3;

// Defaults and tolerances shared by the slider core and native host.

// Track layout (local space)
pub const DEFAULT_TRACK_START: [f32; 3] = [-0.5, 0.0, 0.0]; // half a unit left of the pivot
pub const DEFAULT_TRACK_END: [f32; 3] = [0.5, 0.0, 0.0]; // half a unit right of the pivot

// Value
pub const DEFAULT_SLIDER_VALUE: f32 = 0.5; // thumb starts centred
pub const SLIDER_VALUE_MIN: f32 = 0.0;
pub const SLIDER_VALUE_MAX: f32 = 1.0;

// Geometry
pub const DEGENERATE_TRACK_EPSILON: f32 = 1e-6; // shorter tracks cannot be projected onto

#[inline]
pub fn default_track_start() -> Vec3 {
    Vec3::from_array(DEFAULT_TRACK_START)
}

#[inline]
pub fn default_track_end() -> Vec3 {
    Vec3::from_array(DEFAULT_TRACK_END)
}
