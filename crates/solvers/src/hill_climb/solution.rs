use climb_core::Point;

/// Indicates why the hill climb finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// A full batch of neighbors failed to improve on the incumbent.
    Converged,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of one hill climb.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Best point found.
    pub point: Point,

    /// Objective value at `point`.
    pub value: f64,

    /// Number of neighbor batches started, including the final one that
    /// found no improvement.
    pub iters: usize,

    /// Number of accepted moves.
    pub moves: usize,

    /// Number of neighbors drawn and evaluated.
    pub solutions_generated: usize,
}

impl Solution {
    /// Total objective calls: every generated neighbor plus the start point.
    #[must_use]
    pub fn f_calls(&self) -> usize {
        self.solutions_generated + 1
    }
}
