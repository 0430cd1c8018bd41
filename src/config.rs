//! Construction-time configuration of a game machine.
//!
//! Configuration is fixed once the machine is built; there is no runtime
//! reconfiguration.

use crate::core::PlayerIndex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Seat that moves first once both players are ready.
///
/// The opponent of this seat is sent to wait when play starts.
pub const DEFAULT_FIRST_PLAYER: PlayerIndex = PlayerIndex::One;

/// Deepest allowed nesting of notification handling within one call.
pub const DEFAULT_MAX_CASCADE_DEPTH: usize = 8;

/// Errors raised while loading or validating a [`GameConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("max_cascade_depth must be at least 1")]
    ZeroCascadeDepth,
}

/// Settings baked into a game machine at construction.
///
/// # Example
///
/// ```rust
/// use turnmind::config::GameConfig;
/// use turnmind::core::PlayerIndex;
///
/// let config = GameConfig::from_json(r#"{ "first_player": "Zero" }"#).unwrap();
/// assert_eq!(config.first_player, PlayerIndex::Zero);
/// assert_eq!(config.max_cascade_depth, 8);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub first_player: PlayerIndex,
    pub max_cascade_depth: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            first_player: DEFAULT_FIRST_PLAYER,
            max_cascade_depth: DEFAULT_MAX_CASCADE_DEPTH,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON configuration. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_cascade_depth == 0 {
            return Err(ConfigError::ZeroCascadeDepth);
        }
        Ok(())
    }
}
