//! Playground layout settings.
//!
//! Every field has a default, so hosts can pass partial JSON.

use crate::element::{Footprint, Position};
use crate::params::PLACEHOLDER_TEXT;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid playground config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("footprint must not be negative, got {width}x{height}")]
    NegativeFootprint { width: f64, height: f64 },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaygroundConfig {
    /// Text of the element present when the playground opens.
    pub initial_text: String,
    /// Text of elements created with "add element".
    pub new_element_text: String,
    /// Where the initial element sits, and where reset puts an element back.
    pub default_position: Position,
    /// New element `n` is placed at `spawn_origin + n * spawn_step` on both axes.
    pub spawn_origin: f64,
    pub spawn_step: f64,
    /// Space kept free at the right and bottom edges when randomizing position.
    pub footprint: Footprint,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            initial_text: PLACEHOLDER_TEXT.to_string(),
            new_element_text: "NEW".to_string(),
            default_position: Position::new(50.0, 50.0),
            spawn_origin: 50.0,
            spawn_step: 30.0,
            footprint: Footprint::default(),
        }
    }
}

impl PlaygroundConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        let Footprint { width, height } = config.footprint;
        if width < 0.0 || height < 0.0 {
            return Err(ConfigError::NegativeFootprint { width, height });
        }
        Ok(config)
    }

    pub fn spawn_position(&self, index: u32) -> Position {
        let offset = self.spawn_origin + index as f64 * self.spawn_step;
        Position::new(offset, offset)
    }
}
