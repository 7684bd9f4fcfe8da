//! Entity spawning
//!
//! Entities appear just above the top edge and fall. Positions, speeds,
//! sizes and colors all come from the injected RNG.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::{Entity, EntityColor, PlayField};
use crate::consts::*;
use crate::settings::Settings;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntitySpawner {
    probability: f32,
    field_width: f32,
    /// Next entity ID (never reused within a session)
    next_id: u32,
}

impl EntitySpawner {
    pub fn new(field: PlayField, settings: &Settings) -> Self {
        Self {
            probability: settings.spawn_probability.clamp(0.0, 1.0),
            field_width: field.width,
            next_id: 1,
        }
    }

    /// Roll for a spawn this tick
    pub fn try_spawn<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Entity> {
        // Always consume the roll so the stream doesn't depend on outcome
        let roll: f32 = rng.random();
        if roll < self.probability {
            Some(self.spawn(rng))
        } else {
            None
        }
    }

    /// Spawn unconditionally
    pub fn spawn<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Entity {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);

        let span = (self.field_width - 2.0 * SPAWN_EDGE_INSET).max(0.0);
        let x = if span > 0.0 {
            SPAWN_EDGE_INSET + rng.random::<f32>() * span
        } else {
            self.field_width / 2.0
        };

        let vx = (rng.random::<f32>() * 2.0 - 1.0) * SPAWN_MAX_VX;
        let vy = SPAWN_MIN_VY + rng.random::<f32>() * (SPAWN_MAX_VY - SPAWN_MIN_VY);
        let color = EntityColor::PALETTE[rng.random_range(0..EntityColor::PALETTE.len())];
        let size = ENTITY_MIN_SIZE + rng.random::<f32>() * (ENTITY_MAX_SIZE - ENTITY_MIN_SIZE);

        log::debug!("Spawned entity {} at x={:.1}", id, x);

        Entity {
            id,
            pos: Vec2::new(x, -SPAWN_HEIGHT),
            vel: Vec2::new(vx, vy),
            size,
            color,
        }
    }

    pub fn probability(&self) -> f32 {
        self.probability
    }
}
