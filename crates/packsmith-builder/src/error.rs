//! Error types for session ordering, stage application and validation.

use std::path::PathBuf;

use packsmith_config::ConfigError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BuildError>;

#[derive(Debug, Error)]
pub enum BuildError {
    // Session ordering errors
    #[error("`{operation}` called before `initialize`")]
    NotInitialized { operation: &'static str },

    #[error("session already finalized; call `initialize` to start a new session")]
    AlreadyFinalized,

    #[error("stage `{stage}` applied to a finalized session")]
    StageAfterFinalize { stage: &'static str },

    #[error("stage `{stage}` already applied in this session")]
    StageAlreadyApplied { stage: &'static str },

    // Descriptor construction errors
    #[error("invalid html options: {0}")]
    InvalidHtmlOptions(String),

    // Snapshot validation errors
    #[error("snapshot validation failed: {message}")]
    Validation {
        message: String,
        hint: Option<String>,
    },

    #[error("entry point not found: {}", .0.display())]
    EntryNotFound(PathBuf),

    #[error("html template not found: {}", .0.display())]
    TemplateNotFound(PathBuf),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl BuildError {
    /// Actionable hint for the caller, when one exists.
    pub fn hint(&self) -> Option<&str> {
        match self {
            BuildError::NotInitialized { .. } => Some("Call `initialize` before enabling stages"),
            BuildError::AlreadyFinalized | BuildError::StageAfterFinalize { .. } => {
                Some("Call `initialize` again to start a fresh session")
            }
            BuildError::StageAlreadyApplied { .. } => {
                Some("Each rule-producing stage runs at most once per session")
            }
            BuildError::Validation { hint, .. } => hint.as_deref(),
            _ => None,
        }
    }
}
