use climb_core::{Point, objective};

/// A point together with its objective value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    /// The evaluated point.
    pub point: Point,

    /// The objective value at `point`.
    pub value: f64,
}

impl Candidate {
    /// Evaluates the objective at `point`.
    #[must_use]
    pub fn evaluate(point: Point) -> Self {
        Self {
            point,
            value: objective(point),
        }
    }

    /// Returns `true` if this candidate's value is strictly lower than `other`'s.
    #[must_use]
    pub fn improves_on(&self, other: &Candidate) -> bool {
        self.value < other.value
    }
}
