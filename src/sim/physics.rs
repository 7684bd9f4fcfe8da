//! Per-tick motion integration
//!
//! Moves every live entity by its velocity, nudges horizontal velocity by a
//! small random amount, and retires whatever has fallen past the bottom.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::{Entity, PlayField};
use crate::settings::Settings;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhysicsIntegrator {
    /// Half-width of the vx perturbation
    drift: f32,
    /// Entities at or past this y are retired
    retire_y: f32,
}

impl PhysicsIntegrator {
    pub fn new(field: PlayField, settings: &Settings) -> Self {
        Self {
            drift: settings.drift.max(0.0),
            retire_y: field.retire_y(settings.retire_margin),
        }
    }

    /// Advance all entities by `dt` frames and drop retired ones.
    ///
    /// Returns the number of entities retired this step. `vy` is never
    /// perturbed, so descent rate stays fixed per entity.
    pub fn step<R: Rng + ?Sized>(&self, entities: &mut Vec<Entity>, dt: f32, rng: &mut R) -> usize {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

        for entity in entities.iter_mut() {
            entity.pos += entity.vel * dt;
            entity.vel.x += (rng.random::<f32>() * 2.0 - 1.0) * self.drift;
        }

        let before = entities.len();
        entities.retain(|e| e.pos.y < self.retire_y);
        let retired = before - entities.len();

        if retired > 0 {
            log::trace!("Retired {} entities", retired);
        }
        retired
    }

    pub fn retire_y(&self) -> f32 {
        self.retire_y
    }
}
