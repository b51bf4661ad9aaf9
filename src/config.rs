//! Game options
//!
//! Read-only: parsed from JSON supplied by the page, never written back.

use serde::{Deserialize, Serialize};

use crate::consts::STARTING_LIVES;
use crate::error::{Error, Result};

/// Phosphor green used for outlines and text
pub const GREEN: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
pub const BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

/// Game options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// RNG seed; `None` seeds from the clock
    pub seed: Option<u64>,
    /// Lives granted at the start of each round
    pub starting_lives: u32,
    /// Whether the hyperspace key teleports the ship (otherwise it fires)
    pub hyperspace: bool,

    // === Colors ===
    pub stroke_color: [f32; 4],
    pub text_color: [f32; 4],
    pub background_color: [f32; 4],
    /// Outline width in pixels
    pub line_width: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            starting_lives: STARTING_LIVES,
            hyperspace: true,
            stroke_color: GREEN,
            text_color: GREEN,
            background_color: BLACK,
            line_width: 1.0,
        }
    }
}

impl Config {
    /// Parse and validate options; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse options, falling back to defaults on any problem
    pub fn from_json_or_default(json: Option<&str>) -> Self {
        let Some(json) = json else {
            log::info!("No config supplied, using defaults");
            return Self::default();
        };
        match Self::from_json(json) {
            Ok(config) => {
                log::info!("Loaded config: {:?}", config);
                config
            }
            Err(e) => {
                log::warn!("{}; using defaults", e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.starting_lives == 0 {
            return Err(Error::InvalidConfig(
                "starting_lives must be at least 1".to_string(),
            ));
        }
        if !(self.line_width > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "line_width must be positive, got {}",
                self.line_width
            )));
        }
        Ok(())
    }
}
