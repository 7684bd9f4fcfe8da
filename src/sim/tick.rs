//! Per-frame simulation tick
//!
//! Fixed order: integrate, detect, score, spawn.

use super::score::CollisionEvent;
use super::state::{GamePhase, GameState};

/// What happened during one tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    /// Whether the tick actually ran
    pub ran: bool,
    /// Entity IDs that overlapped the player
    pub hits: Vec<u32>,
    /// ID of the entity spawned at the end of the tick
    pub spawned: Option<u32>,
    pub retired: usize,
    pub events: Vec<CollisionEvent>,
}

/// Advance the game state by one frame.
///
/// Does nothing unless the game is running.
pub fn tick(state: &mut GameState, dt: f32) -> TickReport {
    if state.phase != GamePhase::Running {
        return TickReport::default();
    }

    state.time_ticks += 1;

    // Move and retire
    let retired = state.physics.step(&mut state.entities, dt, &mut state.rng);

    // Collide against the latest tracked position
    let player = state.input.position();
    let hits = state.detector.detect(&state.entities, player);

    let delta = state
        .scorer
        .on_collisions(state.phase, &hits, &state.entities, state.time_ticks);

    let spawned = state.spawner.try_spawn(&mut state.rng).map(|entity| {
        let id = entity.id;
        state.entities.push(entity);
        id
    });

    state.stats.retired += retired as u64;
    state.stats.caught += delta.events.len() as u64;
    if spawned.is_some() {
        state.stats.spawned += 1;
    }

    TickReport {
        ran: true,
        hits,
        spawned,
        retired,
        events: delta.events,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::FRAME_DT;
    use crate::settings::Settings;
    use crate::sim::state::{Entity, EntityColor};
    use glam::Vec2;

    fn running_state(spawn_probability: f32) -> GameState {
        let settings = Settings {
            spawn_probability,
            ..Settings::default()
        };
        let mut state = GameState::new(settings, 12345);
        state.phase = GamePhase::Running;
        state
    }

    #[test]
    fn test_tick_skipped_unless_running() {
        let mut state = GameState::new(Settings::default(), 1);
        state.seed_field();
        let before = state.entities.clone();

        for phase in [GamePhase::Idle, GamePhase::Paused] {
            state.phase = phase;
            let report = tick(&mut state, FRAME_DT);
            assert!(!report.ran);
            assert_eq!(state.entities, before);
            assert_eq!(state.time_ticks, 0);
        }
    }

    #[test]
    fn test_tick_advances_entities() {
        let mut state = running_state(0.0);
        state.seed_field();
        let before = state.entities.clone();

        let report = tick(&mut state, FRAME_DT);
        assert!(report.ran);
        assert_eq!(report.spawned, None);
        assert_eq!(state.entities.len(), 2);
        for (old, new) in before.iter().zip(&state.entities) {
            assert_eq!(old.id, new.id);
            assert_eq!(new.pos, old.pos + old.vel);
        }
    }

    #[test]
    fn test_tick_scores_overlap() {
        let mut state = running_state(0.0);
        let player = state.player();
        state.entities.push(Entity {
            id: 99,
            pos: player,
            vel: Vec2::ZERO,
            size: 20.0,
            color: EntityColor::Magenta,
        });

        let report = tick(&mut state, FRAME_DT);
        assert_eq!(report.hits, vec![99]);
        assert_eq!(report.events.len(), 1);
        assert_eq!(report.events[0].tick, 1);
        assert_eq!(state.score(), 10);
        assert_eq!(state.stats.caught, 1);
    }

    #[test]
    fn test_spawned_entity_not_integrated_same_tick() {
        let mut state = running_state(1.0);
        let report = tick(&mut state, FRAME_DT);

        let id = report.spawned.expect("spawn with p=1");
        let entity = state.entities.iter().find(|e| e.id == id).expect("live");
        assert_eq!(entity.pos.y, -crate::consts::SPAWN_HEIGHT);
        assert_eq!(state.stats.spawned, 1);
    }

    #[test]
    fn test_retired_counted() {
        let mut state = running_state(0.0);
        state.entities.push(Entity {
            id: 1,
            pos: Vec2::new(50.0, 849.0),
            vel: Vec2::new(0.0, 4.0),
            size: 15.0,
            color: EntityColor::Mint,
        });

        let report = tick(&mut state, FRAME_DT);
        assert_eq!(report.retired, 1);
        assert!(state.entities.is_empty());
        assert_eq!(state.stats.retired, 1);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = running_state(0.2);
        let mut state2 = running_state(0.2);
        state1.seed_field();
        state2.seed_field();

        for _ in 0..300 {
            tick(&mut state1, FRAME_DT);
            tick(&mut state2, FRAME_DT);
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.entities, state2.entities);
        assert_eq!(state1.score(), state2.score());
    }
}
