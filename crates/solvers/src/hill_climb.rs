//! Randomized hill climbing (RHC) over the fixed two-variable objective.
//!
//! # Algorithm
//!
//! The solver keeps an incumbent point and its objective value, starting from
//! the caller's start point (one objective call). Each iteration draws
//! `sample_count` neighbors by perturbing both coordinates of the incumbent
//! with independent uniform offsets in `[-step_radius, step_radius]`, clamps
//! each neighbor into the bounds, and evaluates it.
//!
//! After the whole batch is evaluated, the best neighbor replaces the incumbent
//! if its value is strictly lower. Otherwise the search stops. Acceptance is
//! greedy best-of-batch: every neighbor in a batch is evaluated even when an
//! earlier one already improved, so call counts are always a multiple of the
//! sample count plus one.
//!
//! There is no iteration cap. Each accepted move strictly lowers the value of
//! a function bounded below by zero, and on this objective the search stops
//! after a modest number of batches.
//!
//! # Reproducibility
//!
//! Every run owns a 32-bit Mersenne Twister keyed by the 32-bit words of
//! `|seed|` (see [`Config::seed`]). Each uniform draw combines two outputs
//! into a 53-bit float, and each neighbor consumes exactly two uniform draws,
//! x offset first, then y offset. Identical inputs give bit-identical
//! solutions, matching other MT19937 implementations that seed and build
//! floats the same way.
//!
//! # Observer Events
//!
//! - [`Event::Evaluated`] — after every neighbor evaluation
//! - [`Event::Moved`] — after the incumbent moves to an improving neighbor
//!
//! Observers can return [`Action::StopEarly`] to halt immediately. The
//! solution then reports the incumbent at that moment and the counters so far.

mod action;
mod candidate;
mod config;
mod error;
mod event;
mod neighborhood;
mod search;
mod solution;


pub use action::Action;
pub use candidate::Candidate;
pub use config::Config;
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

pub(crate) use search::climb;

use climb_core::{Observer, Point};

/// Minimizes the objective with a randomized hill climb from `start`.
///
/// The observer receives an [`Event`] for every neighbor evaluation and every
/// accepted move. See the [module docs](self) for details.
///
/// # Errors
///
/// Returns an error if the config is invalid or `start` is outside the bounds.
/// Validation happens before any objective evaluation or random draw.
pub fn minimize<Obs>(start: Point, config: &Config, observer: Obs) -> Result<Solution, Error>
where
    Obs: Observer<Event, Action>,
{
    config.check_start(start)?;
    Ok(climb(start, config, observer))
}

/// Minimizes the objective without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the config is invalid or `start` is outside the bounds.
pub fn minimize_unobserved(start: Point, config: &Config) -> Result<Solution, Error> {
    minimize(start, config, ())
}
