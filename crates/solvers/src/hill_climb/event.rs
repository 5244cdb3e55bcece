use super::Candidate;

/// Events emitted by the hill climbing solver.
///
/// `iteration` is the 1-based index of the neighbor batch being sampled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// A neighbor of the incumbent was evaluated.
    Evaluated {
        iteration: usize,

        /// The neighbor just evaluated.
        candidate: Candidate,

        /// The incumbent the neighbor was drawn around.
        incumbent: Candidate,
    },

    /// The best neighbor of a batch improved on the incumbent and replaced it.
    Moved {
        iteration: usize,
        from: Candidate,
        to: Candidate,
    },
}

impl Event {
    /// Returns the best value known when the event was emitted.
    #[must_use]
    pub fn incumbent_value(&self) -> f64 {
        match self {
            Self::Evaluated { incumbent, .. } => incumbent.value,
            Self::Moved { to, .. } => to.value,
        }
    }
}
