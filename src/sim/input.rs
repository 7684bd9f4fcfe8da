//! Pointer tracking for the catcher
//!
//! Turns raw pointer coordinates into a player position that keeps the
//! catcher's visual extent inside the field.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::PlayField;
use crate::clamp_finite;
use crate::settings::Settings;

/// Owns the player position; nothing else writes it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputTracker {
    min: Vec2,
    max: Vec2,
    anchor: Vec2,
    position: Vec2,
}

impl InputTracker {
    pub fn new(field: PlayField, settings: &Settings) -> Self {
        let margin_x = settings.margin_x();
        let margin_y = settings.margin_y();
        let min = Vec2::new(margin_x, margin_y);
        let max = Vec2::new(field.width - margin_x, field.height - margin_y);

        let anchor = clamp_point(
            Vec2::new(field.width / 2.0, field.height - settings.anchor_offset_y),
            min,
            max,
            Vec2::new(field.width / 2.0, field.height / 2.0),
        );

        Self {
            min,
            max,
            anchor,
            position: anchor,
        }
    }

    /// Apply a pointer sample and return the clamped position
    pub fn update(&mut self, raw_x: f32, raw_y: f32) -> Vec2 {
        if !raw_x.is_finite() || !raw_y.is_finite() {
            log::warn!("Non-finite pointer sample ({}, {}) clamped", raw_x, raw_y);
        }
        self.position = clamp_point(Vec2::new(raw_x, raw_y), self.min, self.max, self.position);
        self.position
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Default resting position
    pub fn anchor(&self) -> Vec2 {
        self.anchor
    }

    /// Allowed range as (min, max) corners
    pub fn bounds(&self) -> (Vec2, Vec2) {
        (self.min, self.max)
    }

    pub fn reset(&mut self) {
        self.position = self.anchor;
    }
}

/// Per-axis clamp; NaN components keep the fallback's coordinate
fn clamp_point(p: Vec2, min: Vec2, max: Vec2, fallback: Vec2) -> Vec2 {
    Vec2::new(
        clamp_finite(p.x, min.x, max.x, fallback.x),
        clamp_finite(p.y, min.y, max.y, fallback.y),
    )
}
