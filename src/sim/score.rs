//! Scoring and feedback events
//!
//! Every collision reported in a tick is worth a fixed number of points and
//! raises one [`CollisionEvent`] for the cosmetic layer.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Entity, EntityColor, GamePhase};

/// Transient signal that a scoring collision happened
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollisionEvent {
    pub entity_id: u32,
    /// Entity position at the moment of contact
    pub pos: Vec2,
    pub size: f32,
    pub color: EntityColor,
    /// Points this hit was worth
    pub points: u64,
    /// Score after applying this hit
    pub total: u64,
    /// Simulation tick the hit happened on
    pub tick: u64,
}

/// Outcome of scoring one tick's collisions
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreDelta {
    pub gained: u64,
    pub total: u64,
    pub events: Vec<CollisionEvent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreKeeper {
    score: u64,
    points_per_hit: u64,
}

impl ScoreKeeper {
    pub fn new(points_per_hit: u64) -> Self {
        Self {
            score: 0,
            points_per_hit,
        }
    }

    /// Score this tick's hits. Outside `Running` nothing changes.
    ///
    /// IDs not found in `entities` are ignored.
    pub fn on_collisions(
        &mut self,
        phase: GamePhase,
        collided: &[u32],
        entities: &[Entity],
        tick: u64,
    ) -> ScoreDelta {
        if phase != GamePhase::Running {
            return ScoreDelta {
                total: self.score,
                ..Default::default()
            };
        }

        let mut delta = ScoreDelta::default();
        for id in collided {
            let Some(entity) = entities.iter().find(|e| e.id == *id) else {
                continue;
            };

            self.score = self.score.saturating_add(self.points_per_hit);
            delta.gained = delta.gained.saturating_add(self.points_per_hit);
            log::debug!(
                "Caught entity {} (+{}, total {})",
                entity.id,
                self.points_per_hit,
                self.score
            );

            delta.events.push(CollisionEvent {
                entity_id: entity.id,
                pos: entity.pos,
                size: entity.size,
                color: entity.color,
                points: self.points_per_hit,
                total: self.score,
                tick,
            });
        }
        delta.total = self.score;
        delta
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn reset(&mut self) {
        self.score = 0;
    }
}
