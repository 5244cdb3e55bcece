use crate::hill_climb;

use super::Stage;

/// Events emitted by the refinement chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// A hill climb event from the running stage.
    Search {
        stage: Stage,
        event: hill_climb::Event,
    },

    /// A stage ran to convergence.
    StageCompleted {
        stage: Stage,
        result: hill_climb::Solution,
    },
}

impl Event {
    /// Returns the stage the event belongs to.
    #[must_use]
    pub fn stage(&self) -> Stage {
        match self {
            Self::Search { stage, .. } | Self::StageCompleted { stage, .. } => *stage,
        }
    }
}
