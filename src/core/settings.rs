//! Game settings and their persistence
//!
//! [`GameSettings`] are stored as JSON. Without an explicit path the file
//! lives in the user's configuration directory, e.g.
//! `~/.config/chess3d/settings.json` on Linux.
//!
//! # Error Handling
//!
//! - A missing file at the default location falls back to default settings
//! - A file that exists but cannot be read or parsed is an error, since
//!   silently ignoring a broken configuration hides it from the user
//! - An unknown promotion piece name is fatal when the game is built

use std::fs;
use std::path::{Path, PathBuf};

use chess_rules::PieceKind;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::error::{CoreError, CoreResult};
use crate::game::{BoardGeometry, BoardLayout, ChessGameController, GameError};

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// User-adjustable game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Board-local units per square, used to turn clicks into squares
    pub square_size: f32,

    /// Kind a pawn becomes on the far rank
    pub promotion_piece: String,

    /// Custom starting layout; the standard position when absent
    pub layout_path: Option<PathBuf>,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            square_size: 1.0,
            promotion_piece: PieceKind::Queen.name().to_string(),
            layout_path: None,
        }
    }
}

impl GameSettings {
    /// Parsed promotion kind
    pub fn promotion_kind(&self) -> CoreResult<PieceKind> {
        self.promotion_piece
            .parse()
            .map_err(|e| CoreError::Game(GameError::Rules(e)))
    }

    pub fn geometry(&self) -> CoreResult<BoardGeometry> {
        if !self.square_size.is_finite() || self.square_size <= 0.0 {
            return Err(CoreError::InvalidSettings {
                message: format!("square_size must be positive, got {}", self.square_size),
            });
        }
        Ok(BoardGeometry::new(self.square_size))
    }

    /// Starting layout named by the settings
    pub fn layout(&self) -> CoreResult<BoardLayout> {
        match &self.layout_path {
            Some(path) => Ok(BoardLayout::load(path)?),
            None => Ok(BoardLayout::standard()),
        }
    }

    /// Controller configured from these settings, not yet started
    pub fn build_controller(&self) -> CoreResult<ChessGameController> {
        let controller = ChessGameController::new(&self.layout()?)?
            .with_promotion_kind(self.promotion_kind()?)?
            .with_geometry(self.geometry()?);
        Ok(controller)
    }
}

/// Resolve the default settings file path
///
/// Returns `settings.json` in the user's configuration directory, falling
/// back to the working directory if none can be determined.
pub fn settings_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "chess3d", "Chess3D") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        PathBuf::from(SETTINGS_FILENAME)
    }
}

/// Load settings from `path`, or from [`settings_path`] when `None`
///
/// # Errors
///
/// - [`CoreError::SettingsIo`] if an explicit `path` does not exist or any
///   existing file cannot be read
/// - [`CoreError::SettingsSerialization`] if the file is not valid settings
///   JSON
pub fn load_settings(path: Option<&Path>) -> CoreResult<GameSettings> {
    let settings_path = match path {
        Some(path) => path.to_path_buf(),
        None => {
            let default_path = settings_path();
            if !default_path.exists() {
                info!(
                    "[SETTINGS] No settings file found at {:?}. Using defaults.",
                    default_path
                );
                return Ok(GameSettings::default());
            }
            default_path
        }
    };

    let contents = fs::read_to_string(&settings_path)?;
    let settings = serde_json::from_str::<GameSettings>(&contents)?;
    info!("[SETTINGS] Loaded settings from {:?}", settings_path);
    Ok(settings)
}

/// Write `settings` as pretty JSON, creating parent directories as needed
pub fn save_settings(settings: &GameSettings, path: &Path) -> CoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    info!("[SETTINGS] Saved settings to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = GameSettings::default();
        assert_eq!(settings.square_size, 1.0);
        assert_eq!(settings.promotion_kind().unwrap(), PieceKind::Queen);
        assert!(settings.layout_path.is_none());
    }

    #[test]
    fn test_partial_json_uses_defaults_for_missing_fields() {
        let settings: GameSettings = serde_json::from_str(r#"{ "promotion_piece": "rook" }"#).unwrap();
        assert_eq!(settings.square_size, 1.0);
        assert_eq!(settings.promotion_kind().unwrap(), PieceKind::Rook);
    }

    #[test]
    fn test_unknown_promotion_piece_is_fatal() {
        let settings = GameSettings {
            promotion_piece: "Dragon".to_string(),
            ..GameSettings::default()
        };
        assert!(matches!(
            settings.build_controller(),
            Err(CoreError::Game(GameError::Rules(
                chess_rules::RulesError::UnknownPieceKind { .. }
            )))
        ));
    }

    #[test]
    fn test_invalid_square_size() {
        for square_size in [0.0, -1.0, f32::NAN] {
            let settings = GameSettings {
                square_size,
                ..GameSettings::default()
            };
            assert!(matches!(
                settings.geometry(),
                Err(CoreError::InvalidSettings { .. })
            ));
        }
    }

    #[test]
    fn test_save_then_load() {
        let dir = std::env::temp_dir().join(format!("chess3d-settings-{}", std::process::id()));
        let path = dir.join("nested").join(SETTINGS_FILENAME);
        let settings = GameSettings {
            square_size: 2.5,
            promotion_piece: "Knight".to_string(),
            layout_path: Some(PathBuf::from("layouts/endgame.json")),
        };

        save_settings(&settings, &path).unwrap();
        let loaded = load_settings(Some(&path)).unwrap();

        assert_eq!(loaded, settings);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_explicit_path_is_an_error() {
        let path = std::env::temp_dir().join("chess3d-does-not-exist").join(SETTINGS_FILENAME);
        assert!(matches!(
            load_settings(Some(&path)),
            Err(CoreError::SettingsIo(_))
        ));
    }
}
