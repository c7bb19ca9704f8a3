use thiserror::Error;

use crate::types::DeviceIndex;

/// Error type for backend operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to initialize the backend (SDL2 or subsystems).
    #[error("Backend init failed: {0}")]
    BackendInit(String),
    /// The device at the given slot could not be opened.
    #[error("Failed to open device {index}: {reason}")]
    Open { index: DeviceIndex, reason: String },
    /// A logical axis name was not recognized.
    #[error("Unknown game axis: {0}")]
    UnknownGameAxis(String),
}

/// Convenient result alias for backend operations.
pub type Result<T> = std::result::Result<T, Error>;
