use mach_zehnder::InterferometerError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Model(#[from] InterferometerError),

    #[error("invalid sweep: {0}")]
    InvalidSweep(String),

    #[error("invalid control ranges: {0}")]
    InvalidControls(String),

    #[error("simulation worker disconnected")]
    WorkerDisconnected,

    #[error("failed to serialize results: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
