//! Game settings and tuning
//!
//! Supplied by the host once at construction. Nothing here is persisted.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Reasons a host-supplied settings blob is rejected
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("field {name} must be finite and at least 1, got {value}")]
    InvalidDimension { name: &'static str, value: f32 },
    #[error("spawn probability must be within [0, 1], got {0}")]
    InvalidProbability(f32),
    #[error("{name} must be finite and non-negative, got {value}")]
    NegativeValue { name: &'static str, value: f32 },
}

/// Simulation tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Play field ===
    pub field_width: f32,
    pub field_height: f32,

    // === Spawning ===
    /// Per-tick spawn chance
    pub spawn_probability: f32,
    /// Entities spawned immediately on start
    pub seed_entities: u32,

    // === Physics ===
    /// Half-width of the horizontal velocity perturbation
    pub drift: f32,
    /// Distance below the field at which entities retire
    pub retire_margin: f32,

    // === Player ===
    /// Visual radius (drives the clamp margin)
    pub player_radius: f32,
    /// Effective catch radius used for collisions
    pub player_hit_radius: f32,
    pub player_inset_x: f32,
    pub player_inset_y: f32,
    /// Default anchor height above the bottom edge
    pub anchor_offset_y: f32,

    // === Scoring ===
    pub catch_points: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            field_width: DEFAULT_FIELD_WIDTH,
            field_height: DEFAULT_FIELD_HEIGHT,

            spawn_probability: SPAWN_PROBABILITY,
            seed_entities: SEED_ENTITIES,

            drift: DRIFT,
            retire_margin: RETIRE_MARGIN,

            player_radius: PLAYER_RADIUS,
            player_hit_radius: PLAYER_HIT_RADIUS,
            player_inset_x: PLAYER_INSET_X,
            player_inset_y: PLAYER_INSET_Y,
            anchor_offset_y: ANCHOR_OFFSET_Y,

            catch_points: CATCH_POINTS,
        }
    }
}

impl Settings {
    /// Default tuning for a host field of the given size
    pub fn with_field(width: f32, height: f32) -> Self {
        Self {
            field_width: width,
            field_height: height,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON settings blob (missing keys use defaults)
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        log::debug!(
            "Parsed settings: field {}x{}, spawn p={}",
            settings.field_width,
            settings.field_height,
            settings.spawn_probability
        );
        Ok(settings)
    }

    /// Check every tunable is usable
    pub fn validate(&self) -> Result<(), SettingsError> {
        for (name, value) in [("width", self.field_width), ("height", self.field_height)] {
            if !value.is_finite() || value < MIN_FIELD_EXTENT {
                return Err(SettingsError::InvalidDimension { name, value });
            }
        }

        if !(0.0..=1.0).contains(&self.spawn_probability) {
            return Err(SettingsError::InvalidProbability(self.spawn_probability));
        }

        for (name, value) in [
            ("drift", self.drift),
            ("retire_margin", self.retire_margin),
            ("player_radius", self.player_radius),
            ("player_hit_radius", self.player_hit_radius),
            ("player_inset_x", self.player_inset_x),
            ("player_inset_y", self.player_inset_y),
            ("anchor_offset_y", self.anchor_offset_y),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(SettingsError::NegativeValue { name, value });
            }
        }

        Ok(())
    }

    /// Clamp margin on the x axis
    pub fn margin_x(&self) -> f32 {
        self.player_radius + self.player_inset_x
    }

    /// Clamp margin on the y axis
    pub fn margin_y(&self) -> f32 {
        self.player_radius + self.player_inset_y
    }
}
