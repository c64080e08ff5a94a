use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_CONFIG_PATH: &str = "twomove-cli-config.json";

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TwoMoveCliConfig {
    pub start_fen: Option<String>,
    pub unicode_pieces: bool,
    /// Draw the board from the point of view of the side to move.
    pub flip_board: bool
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error")]
    IoError(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] serde_json::Error)
}

impl TwoMoveCliConfig {
    /// An explicit `path` must exist; the default path is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(path) => path,
            None => {
                let default = Path::new(DEFAULT_CONFIG_PATH);
                if !default.exists() {
                    return Ok(Self::default());
                }
                default
            }
        };
        log::debug!("loading config from {}", path.display());
        let config = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&config)?)
    }
}
