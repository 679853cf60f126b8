//! Display configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tictac_rules::BOARD_SIZE_PX;
use tracing::{debug, info, instrument};

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "tictac.toml";

/// Largest accepted `board_size`.
pub const MAX_BOARD_SIZE: u32 = u16::MAX as u32;

/// Visual settings for the terminal frontend.
///
/// Every field is optional in the file; missing ones take the defaults of
/// the classic 600px board.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Size of the virtual pixel board that clicks are mapped onto.
    board_size: u32,

    /// Color of X marks and of X's win message.
    x_color: String,

    /// Color of O marks and of O's win message.
    o_color: String,

    /// Color of the scoreboard text.
    accent_color: String,

    /// File that receives tracing output.
    log_file: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE_PX,
            x_color: "#EE4035".to_string(),
            o_color: "#0492CF".to_string(),
            accent_color: "#7BC043".to_string(),
            log_file: PathBuf::from("tictac.log"),
        }
    }
}

/// Parsed colors used by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// X marks.
    pub x: Color,
    /// O marks.
    pub o: Color,
    /// Scoreboard.
    pub accent: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            x: Color::Rgb(0xEE, 0x40, 0x35),
            o: Color::Rgb(0x04, 0x92, 0xCF),
            accent: Color::Rgb(0x7B, 0xC0, 0x43),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file and validates it.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(board_size = config.board_size, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Resolves the effective configuration.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_FILE`] is
    /// read if present, otherwise the defaults apply.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Checks the board size and that every color parses.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(3..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(ConfigError::new(format!(
                "board_size must be between 3 and {}, got {}",
                MAX_BOARD_SIZE, self.board_size
            )));
        }
        self.palette().map(|_| ())
    }

    /// Parses the configured colors.
    #[instrument(skip(self))]
    pub fn palette(&self) -> Result<Palette, ConfigError> {
        Ok(Palette {
            x: parse_color("x_color", &self.x_color)?,
            o: parse_color("o_color", &self.o_color)?,
            accent: parse_color("accent_color", &self.accent_color)?,
        })
    }

    /// Renders the configuration as TOML.
    #[instrument(skip(self))]
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::new(format!("Failed to serialize config: {}", e)))
    }
}

fn parse_color(key: &str, value: &str) -> Result<Color, ConfigError> {
    Color::from_str(value)
        .map_err(|_| ConfigError::new(format!("Invalid color for {}: {:?}", key, value)))
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette_matches_default_config() {
        let palette = GameConfig::default().palette().unwrap();
        assert_eq!(palette, Palette::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = GameConfig::from_toml("board_size = 900\n").unwrap();
        assert_eq!(*config.board_size(), 900);
        assert_eq!(config.x_color(), "#EE4035");
        assert_eq!(config.log_file(), &PathBuf::from("tictac.log"));
    }

    #[test]
    fn test_named_colors_accepted() {
        let config = GameConfig::from_toml("x_color = \"red\"\no_color = \"blue\"\n").unwrap();
        let palette = config.palette().unwrap();
        assert_eq!(palette.x, Color::Red);
        assert_eq!(palette.o, Color::Blue);
    }

    #[test]
    fn test_bad_color_rejected() {
        let err = GameConfig::from_toml("accent_color = \"not-a-color\"\n").unwrap_err();
        assert!(err.message.contains("accent_color"));
    }

    #[test]
    fn test_tiny_board_rejected() {
        let err = GameConfig::from_toml("board_size = 2\n").unwrap_err();
        assert!(err.message.contains("board_size"));
    }

    #[test]
    fn test_board_size_upper_limit() {
        let config = GameConfig::from_toml(&format!("board_size = {}\n", MAX_BOARD_SIZE)).unwrap();
        assert_eq!(*config.board_size(), MAX_BOARD_SIZE);

        let err = GameConfig::from_toml("board_size = 100000000\n").unwrap_err();
        assert!(err.message.contains("between 3 and 65535"));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let err = GameConfig::from_toml("board_size = \"big\"\n").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = GameConfig::default();
        let text = config.to_toml().unwrap();
        assert_eq!(GameConfig::from_toml(&text).unwrap(), config);
    }
}
