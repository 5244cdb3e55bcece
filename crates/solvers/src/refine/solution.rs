use climb_core::Point;

use crate::hill_climb;

use super::Stage;

/// Indicates whether the chain ran all of its stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// All three stages ran to convergence.
    Completed,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a refinement chain.
///
/// A completed chain holds exactly one result per [`Stage`]. A chain stopped
/// by an observer holds the stages that ran, the last one possibly partial.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    status: Status,
    stages: Vec<hill_climb::Solution>,
}

impl Solution {
    pub(super) fn new(status: Status, stages: Vec<hill_climb::Solution>) -> Self {
        debug_assert!(!stages.is_empty() && stages.len() <= Stage::ALL.len());
        Self { status, stages }
    }

    /// Final chain status.
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Per-stage results in execution order.
    #[must_use]
    pub fn stages(&self) -> &[hill_climb::Solution] {
        &self.stages
    }

    /// Result of `stage`, if it ran.
    #[must_use]
    pub fn stage(&self, stage: Stage) -> Option<&hill_climb::Solution> {
        self.stages.get(stage.index())
    }

    /// Best point of `stage`, if it ran.
    #[must_use]
    pub fn point(&self, stage: Stage) -> Option<Point> {
        self.stage(stage).map(|s| s.point)
    }

    /// Objective value at the best point of `stage`, if it ran.
    #[must_use]
    pub fn value(&self, stage: Stage) -> Option<f64> {
        self.stage(stage).map(|s| s.value)
    }

    /// Neighbors generated during `stage`, if it ran.
    #[must_use]
    pub fn solutions_generated(&self, stage: Stage) -> Option<usize> {
        self.stage(stage).map(|s| s.solutions_generated)
    }

    /// Objective calls made during `stage`, if it ran.
    #[must_use]
    pub fn f_calls(&self, stage: Stage) -> Option<usize> {
        self.stage(stage).map(hill_climb::Solution::f_calls)
    }

    /// Result of the last stage that ran, which holds the chain's best point.
    #[must_use]
    pub fn last(&self) -> Option<&hill_climb::Solution> {
        self.stages.last()
    }

    /// Sum of the objective calls of every stage that ran.
    #[must_use]
    pub fn f_calls_total(&self) -> usize {
        self.stages.iter().map(hill_climb::Solution::f_calls).sum()
    }
}
