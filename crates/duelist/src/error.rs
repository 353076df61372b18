//! Errors for the duelist host layer

use duel_core::DuelError;
use thiserror::Error;

/// Errors raised by sessions, stores, config loading and collaborators.
#[derive(Debug, Error)]
pub enum ArenaError {
    /// The ladder engine rejected an operation.
    #[error(transparent)]
    Duel(#[from] DuelError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    /// No stored decision has this id.
    #[error("decision not found: {0}")]
    NotFound(String),

    /// A finished decision was asked for while its ladder is still open.
    #[error("decision {0} is still pending")]
    Unfinished(String),

    /// An external suggester, advisor or store failed.
    #[error("collaborator failed: {0}")]
    Collaborator(String),
}

/// Result type for host operations.
pub type ArenaResult<T> = Result<T, ArenaError>;
