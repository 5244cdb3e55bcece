use climb_core::Observer;
use climb_solvers::{hill_climb, refine};
use tracing::{Level, debug, enabled, info, trace};

/// Logs solver progress through `tracing` without ever steering the search.
///
/// - accepted moves at `DEBUG`
/// - individual neighbor evaluations at `TRACE`
/// - completed refinement stages at `INFO`
///
/// The observer also counts the events it has seen, which is handy when
/// comparing the log against a solution's call counters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TraceObserver {
    evaluations: usize,
    moves: usize,
}

impl TraceObserver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Neighbor evaluations seen so far.
    #[must_use]
    pub fn evaluations(&self) -> usize {
        self.evaluations
    }

    /// Accepted moves seen so far.
    #[must_use]
    pub fn moves(&self) -> usize {
        self.moves
    }

    fn log_search(&mut self, stage: Option<refine::Stage>, event: &hill_climb::Event) {
        match *event {
            hill_climb::Event::Evaluated {
                iteration,
                candidate,
                ..
            } => {
                self.evaluations += 1;
                if enabled!(Level::TRACE) {
                    trace!(
                        stage = stage.map(|s| s.index() + 1),
                        iteration,
                        x = candidate.point.x,
                        y = candidate.point.y,
                        value = candidate.value,
                        "evaluated neighbor"
                    );
                }
            }
            hill_climb::Event::Moved { iteration, from, to } => {
                self.moves += 1;
                debug!(
                    stage = stage.map(|s| s.index() + 1),
                    iteration,
                    from = from.value,
                    to = to.value,
                    x = to.point.x,
                    y = to.point.y,
                    "accepted move"
                );
            }
        }
    }
}

impl<A> Observer<hill_climb::Event, A> for TraceObserver {
    fn observe(&mut self, event: &hill_climb::Event) -> Option<A> {
        self.log_search(None, event);
        None
    }
}

impl<A> Observer<refine::Event, A> for TraceObserver {
    fn observe(&mut self, event: &refine::Event) -> Option<A> {
        match event {
            refine::Event::Search { stage, event } => self.log_search(Some(*stage), event),
            refine::Event::StageCompleted { stage, result } => info!(
                stage = stage.index() + 1,
                x = result.point.x,
                y = result.point.y,
                value = result.value,
                solutions_generated = result.solutions_generated,
                f_calls = result.f_calls(),
                "stage completed"
            ),
        }
        None
    }
}

impl<A> Observer<hill_climb::Event, A> for &mut TraceObserver {
    fn observe(&mut self, event: &hill_climb::Event) -> Option<A> {
        Observer::<hill_climb::Event, A>::observe(&mut **self, event)
    }
}

impl<A> Observer<refine::Event, A> for &mut TraceObserver {
    fn observe(&mut self, event: &refine::Event) -> Option<A> {
        Observer::<refine::Event, A>::observe(&mut **self, event)
    }
}
