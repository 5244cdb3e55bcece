use climb_core::{Bounds, Point};

use super::Error;

/// Configuration for a hill climb or a refinement chain.
///
/// Defaults: `step_radius = 0.10`, `sample_count = 400`, `seed = 9999`,
/// bounds `[-6, 6]²`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Half-width of the uniform perturbation applied to each coordinate.
    ///
    /// For a refinement chain this is the radius of the first stage.
    pub step_radius: f64,

    /// Number of neighbors drawn per iteration.
    pub sample_count: usize,

    /// Seed for the run's private random stream.
    pub seed: i64,

    /// Feasible rectangle; every neighbor is clamped into it.
    pub bounds: Bounds,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            step_radius: 0.10,
            sample_count: 400,
            seed: 9999,
            bounds: Bounds::default(),
        }
    }
}

impl Config {
    /// Creates a config with the default bounds.
    #[must_use]
    pub fn new(step_radius: f64, sample_count: usize, seed: i64) -> Self {
        Self {
            step_radius,
            sample_count,
            seed,
            ..Self::default()
        }
    }

    /// Returns the config with `bounds` replaced.
    #[must_use]
    pub fn with_bounds(self, bounds: Bounds) -> Self {
        Self { bounds, ..self }
    }

    /// Returns the config with `seed` replaced.
    #[must_use]
    pub fn with_seed(self, seed: i64) -> Self {
        Self { seed, ..self }
    }

    /// Returns the config with `step_radius` replaced.
    #[must_use]
    pub fn with_step_radius(self, step_radius: f64) -> Self {
        Self {
            step_radius,
            ..self
        }
    }

    /// Validates bounds, sample count, and step radius, in that order.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidBounds`] if an axis has `low > high` or a NaN endpoint
    /// - [`Error::InvalidSampleCount`] if `sample_count` is zero
    /// - [`Error::InvalidStepRadius`] if `step_radius` is not finite and positive
    pub fn validate(&self) -> Result<(), Error> {
        if let Some(axis) = self.bounds.invalid_axis() {
            let interval = self.bounds.axis(axis);
            return Err(Error::InvalidBounds {
                axis,
                low: interval.low,
                high: interval.high,
            });
        }
        if self.sample_count == 0 {
            return Err(Error::InvalidSampleCount);
        }
        if !self.step_radius.is_finite() || self.step_radius <= 0.0 {
            return Err(Error::InvalidStepRadius(self.step_radius));
        }
        Ok(())
    }

    /// Validates the config and checks that `start` lies inside the bounds.
    ///
    /// # Errors
    ///
    /// Any error from [`Config::validate`], or [`Error::StartOutOfBounds`].
    pub fn check_start(&self, start: Point) -> Result<(), Error> {
        self.validate()?;
        if !self.bounds.contains(&start) {
            return Err(Error::StartOutOfBounds(start));
        }
        Ok(())
    }
}
