//! Error taxonomy for the annealing engine.

use std::error::Error;
use std::fmt;

/// Failures surfaced by [`Annealer::run`](crate::anneal::Annealer::run)
/// before any iteration begins. A run never partially executes: either the
/// configuration and initial state are usable and the run completes, or one
/// of these is returned first.
#[derive(Debug, Clone, PartialEq)]
pub enum AnnealError {
    /// The run parameters fail validation.
    InvalidConfig(String),

    /// Tolerance-based early exit was requested but the initial cost is
    /// zero or non-finite, so the cost-reduction ratio is undefined.
    DegenerateInitialCost(f64),
}

impl fmt::Display for AnnealError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnnealError::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
            AnnealError::DegenerateInitialCost(cost) => write!(
                f,
                "cost reduction tolerance requires a finite nonzero initial cost, got {cost}"
            ),
        }
    }
}

impl Error for AnnealError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = AnnealError::InvalidConfig("bad tolerance".into());
        assert!(err.to_string().contains("bad tolerance"));

        let err = AnnealError::DegenerateInitialCost(0.0);
        assert!(err.to_string().contains("initial cost"));
    }
}
