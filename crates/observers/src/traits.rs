//! Capability traits for observers that work with both solvers.
//!
//! These traits abstract over the [`hill_climb`] and [`refine`] event and
//! action types, so an observer written once can watch either solver.
//!
//! # Event traits
//!
//! - [`HasObjective`] — events that report the best objective value so far
//! - [`HasMove`] — events that may report an accepted move
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use climb_core::Observer;
//! use climb_observers::traits::{CanStopEarly, HasObjective};
//!
//! struct Budget {
//!     remaining: usize,
//! }
//!
//! impl<E: HasObjective, A: CanStopEarly> Observer<E, A> for Budget {
//!     fn observe(&mut self, _event: &E) -> Option<A> {
//!         self.remaining = self.remaining.saturating_sub(1);
//!         (self.remaining == 0).then(A::stop_early)
//!     }
//! }
//! ```

use climb_solvers::{
    hill_climb::{self, Candidate},
    refine,
};

/// An event that reports the best objective value known so far.
pub trait HasObjective {
    /// Returns the best objective value known when the event was emitted.
    fn best_objective(&self) -> f64;
}

/// An event that may report an accepted move of the incumbent.
pub trait HasMove {
    /// Returns `(from, to)` if the event is an accepted move.
    fn accepted_move(&self) -> Option<(Candidate, Candidate)>;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- hill_climb::Event ---

impl HasObjective for hill_climb::Event {
    fn best_objective(&self) -> f64 {
        self.incumbent_value()
    }
}

impl HasMove for hill_climb::Event {
    fn accepted_move(&self) -> Option<(Candidate, Candidate)> {
        match self {
            Self::Moved { from, to, .. } => Some((*from, *to)),
            Self::Evaluated { .. } => None,
        }
    }
}

// --- refine::Event ---

impl HasObjective for refine::Event {
    fn best_objective(&self) -> f64 {
        match self {
            Self::Search { event, .. } => event.incumbent_value(),
            Self::StageCompleted { result, .. } => result.value,
        }
    }
}

impl HasMove for refine::Event {
    fn accepted_move(&self) -> Option<(Candidate, Candidate)> {
        match self {
            Self::Search { event, .. } => event.accepted_move(),
            Self::StageCompleted { .. } => None,
        }
    }
}

// --- CanStopEarly for hill_climb::Action (shared by refine) ---

impl CanStopEarly for hill_climb::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
