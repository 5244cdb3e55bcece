use std::fmt;

/// One stage of the refinement chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stage {
    Coarse,
    Medium,
    Fine,
}

impl Stage {
    /// All stages, in execution order.
    pub const ALL: [Stage; 3] = [Stage::Coarse, Stage::Medium, Stage::Fine];

    /// Zero-based position in the chain.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Coarse => 0,
            Self::Medium => 1,
            Self::Fine => 2,
        }
    }

    /// Factor the base step radius is divided by for this stage.
    #[must_use]
    pub fn divisor(self) -> f64 {
        match self {
            Self::Coarse => 1.0,
            Self::Medium => 20.0,
            Self::Fine => 400.0,
        }
    }

    /// Step radius for this stage given the chain's base radius.
    #[must_use]
    pub fn radius(self, base: f64) -> f64 {
        base / self.divisor()
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stage {}", self.index() + 1)
    }
}
