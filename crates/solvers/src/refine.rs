//! Staged refinement: three chained hill climbs with a shrinking step radius.
//!
//! # Algorithm
//!
//! The chain runs the [`hill_climb`](crate::hill_climb) solver three times.
//! Each stage starts from the previous stage's best point and reuses the same
//! seed, sample count, and bounds. Only the step radius changes:
//!
//! | Stage            | Radius             |
//! |------------------|--------------------|
//! | [`Stage::Coarse`] | `step_radius`       |
//! | [`Stage::Medium`] | `step_radius / 20`  |
//! | [`Stage::Fine`]   | `step_radius / 400` |
//!
//! The first stage explores broadly and the later stages polish the incumbent
//! at finer resolution. Radii are not floored.
//!
//! Because every stage starts at the previous optimum and only accepts
//! improving moves, stage values never increase along the chain.
//!
//! # Observer Events
//!
//! - [`Event::Search`] — every hill climb event, tagged with its stage
//! - [`Event::StageCompleted`] — after each stage finishes
//!
//! Returning [`Action::StopEarly`] stops the current stage and skips the
//! remaining ones.

mod event;
mod solution;
mod stage;

#[cfg(test)]
mod tests;

pub use event::Event;
pub use solution::{Solution, Status};
pub use stage::Stage;

pub use crate::hill_climb::{Action, Config, Error};

use climb_core::{Observer, Point};
use tracing::debug;

use crate::hill_climb::{self, climb};

/// Minimizes the objective with the three-stage refinement chain.
///
/// `config.step_radius` is the radius of the first stage.
///
/// # Errors
///
/// Returns an error if the config is invalid or `start` is outside the bounds.
/// Validation happens once, before the first stage evaluates anything.
pub fn minimize<Obs>(start: Point, config: &Config, mut observer: Obs) -> Result<Solution, Error>
where
    Obs: Observer<Event, Action>,
{
    config.check_start(start)?;

    let mut stages = Vec::with_capacity(Stage::ALL.len());
    let mut point = start;

    for stage in Stage::ALL {
        let stage_config = config.with_step_radius(stage.radius(config.step_radius));
        let forward = |event: &hill_climb::Event| {
            observer.observe(&Event::Search {
                stage,
                event: *event,
            })
        };
        let result = climb(point, &stage_config, forward);
        stages.push(result);

        debug!(
            ?stage,
            radius = stage_config.step_radius,
            value = result.value,
            f_calls = result.f_calls(),
            "refinement stage finished"
        );

        if result.status == hill_climb::Status::StoppedByObserver {
            return Ok(Solution::new(Status::StoppedByObserver, stages));
        }
        if let Some(Action::StopEarly) = observer.observe(&Event::StageCompleted { stage, result }) {
            return Ok(Solution::new(Status::StoppedByObserver, stages));
        }

        point = result.point;
    }

    Ok(Solution::new(Status::Completed, stages))
}

/// Minimizes the objective with the refinement chain, without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the config is invalid or `start` is outside the bounds.
pub fn minimize_unobserved(start: Point, config: &Config) -> Result<Solution, Error> {
    minimize(start, config, ())
}
