use thiserror::Error;

/// Errors raised by the interferometer model.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InterferometerError {
    /// Phase was NaN or infinite.
    #[error("invalid input: phase must be finite, got {0}")]
    NonFinitePhase(f64),

    /// Photon count was zero, negative or non-finite.
    #[error("invalid input: photon count must be positive and finite, got {0}")]
    InvalidPhotonCount(f64),

    /// Detection counts no longer sum to the photon count.
    ///
    /// Advisory: `compute` only logs this, `check_conservation` returns it.
    #[error("numeric drift: counts sum to {actual}, expected {expected}")]
    NumericDrift { expected: f64, actual: f64 },
}

pub type Result<T> = std::result::Result<T, InterferometerError>;
