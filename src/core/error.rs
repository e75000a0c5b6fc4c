//! Error types for core module
//!
//! Provides custom error types for settings persistence and for building a
//! game from settings.

use thiserror::Error;

use crate::game::GameError;

/// Errors that can occur in the core module
#[derive(Error, Debug)]
pub enum CoreError {
    /// Settings file I/O error
    #[error("Settings I/O error: {0}")]
    SettingsIo(#[from] std::io::Error),

    /// Settings serialization/deserialization error
    #[error("Settings serialization error: {0}")]
    SettingsSerialization(#[from] serde_json::Error),

    /// A setting has a value the game cannot use
    #[error("Invalid setting: {message}")]
    InvalidSettings { message: String },

    /// Game could not be set up from the settings
    #[error(transparent)]
    Game(#[from] GameError),
}

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;
