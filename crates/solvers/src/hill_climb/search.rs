use climb_core::{Observer, Point};
use tracing::{debug, trace};

use super::{Action, Candidate, Config, Event, Solution, Status, neighborhood::Neighborhood};

/// Running counters and the incumbent of one hill climb.
struct State {
    incumbent: Candidate,
    iters: usize,
    moves: usize,
    solutions_generated: usize,
}

impl State {
    fn new(incumbent: Candidate) -> Self {
        Self {
            incumbent,
            iters: 0,
            moves: 0,
            solutions_generated: 0,
        }
    }

    fn into_solution(self, status: Status) -> Solution {
        Solution {
            status,
            point: self.incumbent.point,
            value: self.incumbent.value,
            iters: self.iters,
            moves: self.moves,
            solutions_generated: self.solutions_generated,
        }
    }
}

/// Core hill climbing loop.
///
/// The caller must have validated `config` and `start`; the loop assumes a
/// positive sample count and valid bounds.
pub(crate) fn climb<Obs>(start: Point, config: &Config, mut observer: Obs) -> Solution
where
    Obs: Observer<Event, Action>,
{
    let mut neighborhood = Neighborhood::new(config);
    let mut state = State::new(Candidate::evaluate(start));

    loop {
        state.iters += 1;
        let iteration = state.iters;

        let mut batch_best: Option<Candidate> = None;
        for _ in 0..config.sample_count {
            let candidate = Candidate::evaluate(neighborhood.sample(state.incumbent.point));
            state.solutions_generated += 1;

            let to_beat = batch_best.as_ref().unwrap_or(&state.incumbent);
            if candidate.improves_on(to_beat) {
                batch_best = Some(candidate);
            }

            let event = Event::Evaluated {
                iteration,
                candidate,
                incumbent: state.incumbent,
            };
            if let Some(Action::StopEarly) = observer.observe(&event) {
                return finish(state, Status::StoppedByObserver);
            }
        }

        let Some(next) = batch_best else {
            return finish(state, Status::Converged);
        };

        let from = std::mem::replace(&mut state.incumbent, next);
        state.moves += 1;
        trace!(iteration, value = next.value, x = next.point.x, y = next.point.y, "moved");

        let event = Event::Moved {
            iteration,
            from,
            to: next,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return finish(state, Status::StoppedByObserver);
        }
    }
}

fn finish(state: State, status: Status) -> Solution {
    let solution = state.into_solution(status);
    debug!(
        ?status,
        iters = solution.iters,
        moves = solution.moves,
        f_calls = solution.f_calls(),
        value = solution.value,
        "hill climb finished"
    );
    solution
}
