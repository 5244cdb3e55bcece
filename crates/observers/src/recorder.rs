use climb_core::Observer;
use climb_solvers::hill_climb::Candidate;

use crate::traits::HasMove;

/// Records the path of the incumbent through the search space.
///
/// The first recorded candidate is the incumbent before the first accepted
/// move; each later one is the destination of an accepted move. For a
/// refinement chain the stages join seamlessly, since each stage starts where
/// the previous one ended.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PathRecorder {
    path: Vec<Candidate>,
}

impl PathRecorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded path, oldest first.
    #[must_use]
    pub fn path(&self) -> &[Candidate] {
        &self.path
    }

    /// Consumes the recorder and returns the recorded path.
    #[must_use]
    pub fn into_path(self) -> Vec<Candidate> {
        self.path
    }

    fn record<E: HasMove>(&mut self, event: &E) {
        if let Some((from, to)) = event.accepted_move() {
            if self.path.is_empty() {
                self.path.push(from);
            }
            self.path.push(to);
        }
    }
}

impl<E: HasMove, A> Observer<E, A> for PathRecorder {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event);
        None
    }
}

impl<E: HasMove, A> Observer<E, A> for &mut PathRecorder {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event);
        None
    }
}
