/// Actions an observer can take during a hill climb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the incumbent found so far.
    ///
    /// A neighbor that was evaluated but not yet accepted is discarded.
    StopEarly,
}
