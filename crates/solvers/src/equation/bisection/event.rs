use crate::equation::Iteration;

/// Event emitted by the bisection solver once per iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The midpoint estimate and half-width step.
    pub iteration: Iteration,

    /// The ordered bracket the midpoint was taken from.
    pub bracket: [f64; 2],
}

impl Event {
    /// Returns the width of the bracket before this iteration shrank it.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.bracket[1] - self.bracket[0]
    }
}
