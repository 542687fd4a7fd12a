use crate::Probability;

/// Why a distribution failed validation.
///
/// Offending outcomes are carried in their `Debug` rendering so the error
/// stays independent of the outcome type.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("negative probability for outcome {outcome}: {mass}")]
    Negative { outcome: String, mass: Probability },
    #[error("non-finite probability for outcome {outcome}: {mass}")]
    NonFinite { outcome: String, mass: Probability },
    #[error("empty distribution")]
    Empty,
    #[error("distribution does not sum to 1: total is {total}")]
    Unnormalized { total: Probability },
}

impl ValidationError {
    pub fn negative<T: std::fmt::Debug>(outcome: &T, mass: Probability) -> Self {
        Self::Negative {
            outcome: format!("{:?}", outcome),
            mass,
        }
    }
    pub fn non_finite<T: std::fmt::Debug>(outcome: &T, mass: Probability) -> Self {
        Self::NonFinite {
            outcome: format!("{:?}", outcome),
            mass,
        }
    }
}
