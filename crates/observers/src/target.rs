use climb_core::Observer;

use crate::traits::{CanStopEarly, HasObjective};

/// Stops a search as soon as the incumbent reaches a target objective value.
///
/// Only the incumbent counts: a neighbor that beats the target but has not yet
/// been accepted does not stop the search, since stopping would discard it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetValue {
    target: f64,
}

impl TargetValue {
    /// Creates an observer that stops once the best value is `<= target`.
    #[must_use]
    pub fn new(target: f64) -> Self {
        Self { target }
    }
}

impl<E: HasObjective, A: CanStopEarly> Observer<E, A> for TargetValue {
    fn observe(&mut self, event: &E) -> Option<A> {
        (event.best_objective() <= self.target).then(A::stop_early)
    }
}
