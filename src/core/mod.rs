//! Core module - application infrastructure around the game
//!
//! - [`GameSettings`] - User preferences, persisted as JSON
//! - [`CoreError`] - Settings and setup failures
//!
//! # Usage Example
//!
//! ```rust,ignore
//! use chess3d::core::load_settings;
//!
//! let settings = load_settings(None)?;
//! let mut game = settings.build_controller()?;
//! game.start_new_game()?;
//! ```

pub mod error;
pub mod settings;

pub use error::{CoreError, CoreResult};
pub use settings::{load_settings, save_settings, settings_path, GameSettings};
