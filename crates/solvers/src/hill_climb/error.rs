use climb_core::{Axis, Point};

/// Precondition violations detected before a search starts.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("invalid bounds on {axis} axis: [{low}, {high}]")]
    InvalidBounds { axis: Axis, low: f64, high: f64 },

    #[error("sample count must be at least 1")]
    InvalidSampleCount,

    #[error("step radius must be finite and positive, got {0}")]
    InvalidStepRadius(f64),

    #[error("start point {0} lies outside the search bounds")]
    StartOutOfBounds(Point),
}
