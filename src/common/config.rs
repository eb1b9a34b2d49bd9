use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Contents of `domino-layout.default.toml`, shipped with the binary.
pub const DEFAULT_CONFIG: &str = include_str!("../../domino-layout.default.toml");

pub fn config_file() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("domino-layout").join("config.toml"))
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub board: BoardSettings,
    #[serde(default)]
    pub display: DisplaySettings,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone, Copy)]
#[serde(deny_unknown_fields)]
pub struct BoardSettings {
    /// Board width in px. The pivot sits at its horizontal centre.
    #[serde(default = "default_width")]
    pub width: f64,
    /// Short edge of a tile in px; the long edge is twice as long.
    #[serde(default = "default_piece_size")]
    pub piece_size: f64,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone, Copy)]
#[serde(deny_unknown_fields)]
pub struct DisplaySettings {
    /// Smallest height reported above the pivot row, so the board does not
    /// collapse while the chain is short.
    #[serde(default = "default_min_extent")]
    pub min_extent_up: f64,
    #[serde(default = "default_min_extent")]
    pub min_extent_down: f64,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            width: default_width(),
            piece_size: default_piece_size(),
        }
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            min_extent_up: default_min_extent(),
            min_extent_down: default_min_extent(),
        }
    }
}

impl BoardSettings {
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if self.width <= 0.0 {
            issues.push(format!("board.width must be positive, got {}", self.width));
        }

        if self.piece_size <= 0.0 {
            issues.push(format!("board.piece_size must be positive, got {}", self.piece_size));
        } else if self.width < 7.0 * self.piece_size {
            // pivot plus one tile on each side before the first wrap
            issues.push(format!(
                "board.width ({}) must be at least 7 times board.piece_size ({})",
                self.width, self.piece_size
            ));
        }

        issues
    }
}

impl DisplaySettings {
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if self.min_extent_up < 0.0 {
            issues.push(format!(
                "display.min_extent_up must be non-negative, got {}",
                self.min_extent_up
            ));
        }

        if self.min_extent_down < 0.0 {
            issues.push(format!(
                "display.min_extent_down must be non-negative, got {}",
                self.min_extent_down
            ));
        }

        issues
    }
}

fn default_width() -> f64 { 700.0 }

fn default_piece_size() -> f64 { 40.0 }

fn default_min_extent() -> f64 { 100.0 }

impl Config {
    pub fn read(path: &Path) -> anyhow::Result<Config> {
        let buf = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read config file {}", path.display()))?;
        Self::parse(&buf).with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Reads `path` if it exists and falls back to the defaults otherwise.
    pub fn read_or_default(path: Option<&Path>) -> anyhow::Result<Config> {
        match path {
            Some(path) if path.exists() => Self::read(path),
            _ => Ok(Config::default()),
        }
    }

    pub fn parse(buf: &str) -> anyhow::Result<Config> { Ok(toml::from_str::<Config>(buf)?) }

    /// Validates the entire configuration and returns a list of issues found.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        issues.extend(self.board.validate());

        issues.extend(self.display.validate());

        issues
    }
}
