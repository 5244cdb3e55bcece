//! Randomized hill climbing solvers for the fixed bivariate objective.
//!
//! # Solvers
//!
//! - [`hill_climb`] — one randomized hill climbing (RHC) run: sample a batch
//!   of neighbors around the incumbent, move to the best one if it improves,
//!   stop when a whole batch fails to improve
//! - [`refine`] — three chained RHC runs with a shrinking step radius, each
//!   starting from the previous run's optimum
//!
//! Both solvers are deterministic for a given [`Config`]: each run seeds its
//! own random stream from [`Config::seed`](Config) and discards it at the end.
//!
//! # Example
//!
//! ```
//! use climb_core::Point;
//! use climb_solvers::{Config, run_chain};
//!
//! let config = Config::new(0.25, 30, 42);
//! let solution = run_chain(Point::new(2.9, 3.2), &config).unwrap();
//!
//! assert!(solution.f_calls_total() > 3);
//! ```

pub mod hill_climb;
pub mod refine;

pub use hill_climb::{Config, Error};

use climb_core::Point;

/// Runs a single hill climb from `start` without observer support.
///
/// # Errors
///
/// Returns an error if the config is invalid or `start` lies outside the
/// configured bounds. No objective evaluation happens in that case.
pub fn run_single(start: Point, config: &Config) -> Result<hill_climb::Solution, Error> {
    hill_climb::minimize_unobserved(start, config)
}

/// Runs the three-stage refinement chain from `start` without observer support.
///
/// # Errors
///
/// Returns an error if the config is invalid or `start` lies outside the
/// configured bounds. No objective evaluation happens in that case.
pub fn run_chain(start: Point, config: &Config) -> Result<refine::Solution, Error> {
    refine::minimize_unobserved(start, config)
}
