use std::fmt;

use crate::Point;

/// Identifies one coordinate axis of the search space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => f.write_str("x"),
            Self::Y => f.write_str("y"),
        }
    }
}

/// A closed interval `[low, high]` on one axis.
///
/// The interval is only meaningful when `low <= high`. Construction does not
/// enforce this; solvers check [`Interval::is_valid`] before searching so that
/// misconfigured bounds are reported rather than silently producing degenerate
/// candidates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub low: f64,
    pub high: f64,
}

impl Interval {
    /// Creates an interval from its endpoints.
    #[must_use]
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Returns `true` if `low <= high`.
    ///
    /// An interval with a NaN endpoint is never valid.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.low <= self.high
    }

    /// Returns `true` if `v` lies in `[low, high]`.
    #[must_use]
    pub fn contains(&self, v: f64) -> bool {
        self.low <= v && v <= self.high
    }

    /// Clamps `v` into `[low, high]`.
    ///
    /// Callers must only clamp into valid intervals.
    #[must_use]
    pub fn clamp(&self, v: f64) -> f64 {
        v.max(self.low).min(self.high)
    }
}

/// The feasible rectangle: one closed interval per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: Interval,
    pub y: Interval,
}

impl Bounds {
    /// Half-width of the default square search domain.
    pub const DEFAULT_HALF_WIDTH: f64 = 6.0;

    /// Creates bounds from one interval per axis.
    #[must_use]
    pub const fn new(x: Interval, y: Interval) -> Self {
        Self { x, y }
    }

    /// Creates square bounds `[-half_width, half_width]` on both axes.
    #[must_use]
    pub const fn square(half_width: f64) -> Self {
        let axis = Interval::new(-half_width, half_width);
        Self::new(axis, axis)
    }

    /// Returns the interval for `axis`.
    #[must_use]
    pub fn axis(&self, axis: Axis) -> Interval {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Returns the first axis whose interval is not valid, if any.
    #[must_use]
    pub fn invalid_axis(&self) -> Option<Axis> {
        [Axis::X, Axis::Y]
            .into_iter()
            .find(|&axis| !self.axis(axis).is_valid())
    }

    /// Returns `true` if both coordinates of `point` lie inside the bounds.
    #[must_use]
    pub fn contains(&self, point: &Point) -> bool {
        self.x.contains(point.x) && self.y.contains(point.y)
    }

    /// Clamps each coordinate of `point` independently into its interval.
    #[must_use]
    pub fn clamp(&self, point: Point) -> Point {
        Point::new(self.x.clamp(point.x), self.y.clamp(point.y))
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::square(Self::DEFAULT_HALF_WIDTH)
    }
}
