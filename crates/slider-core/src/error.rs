use glam::Vec3;
use thiserror::Error;

/// Configuration errors raised while building or initializing a slider.
///
/// Per-event filtering (foreign pointer, consumed event) is never an error;
/// those events are dropped silently.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SliderError {
    #[error("slider thumb is not specified; place it with set_thumb_position before initialize")]
    MissingThumb,
    #[error("slider thumb position must be finite, got {0}")]
    NonFiniteThumb(Vec3),
    #[error("invalid slider axis index {0}; expected 0 (x), 1 (y) or 2 (z)")]
    InvalidAxis(u8),
    #[error("degenerate slider track: start {start} and end {end} coincide or are not finite")]
    DegenerateTrack { start: Vec3, end: Vec3 },
    #[error("slider value must be finite, got {0}")]
    NonFiniteValue(f32),
}

pub type Result<T> = std::result::Result<T, SliderError>;
