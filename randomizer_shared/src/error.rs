use std::path::PathBuf;
use thiserror::Error;

/// Failure reported by the MIDI transport for a single send.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Per-batch and per-parameter failures during randomization.
///
/// `DeviceNotFound` aborts the whole batch before anything is sent; the
/// other two are recorded against one parameter while the batch continues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RandomizeError {
    #[error("MIDI device '{0}' not found")]
    DeviceNotFound(String),
    #[error("transport: {0}")]
    Transport(#[from] TransportError),
    #[error("parameter {id}: empty range (min {min} > max {max})")]
    EmptyRange { id: u16, min: i32, max: i32 },
}

/// Settings persistence failures. Neither is fatal: a load failure leaves
/// built-in defaults in place, a save failure leaves in-memory state intact.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to load settings from {}: {}", .path.display(), .reason)]
    Load { path: PathBuf, reason: String },
    #[error("failed to save settings to {}: {}", .path.display(), .reason)]
    Save { path: PathBuf, reason: String },
}
