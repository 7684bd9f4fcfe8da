//! Chaos Catcher - falling-entity catching game core
//!
//! Core modules:
//! - `sim`: Simulation (spawning, physics, collisions, scoring, run state)
//! - `settings`: Host-supplied tuning with validation
//! - `platform`: Frame clock and browser host bridge

pub mod platform;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};
pub use sim::{GameLoop, GamePhase, Snapshot};

/// Game configuration constants
pub mod consts {
    /// Nominal frame step passed to the integrator (velocities are per frame)
    pub const FRAME_DT: f32 = 1.0;

    /// Default play-field dimensions
    pub const DEFAULT_FIELD_WIDTH: f32 = 400.0;
    pub const DEFAULT_FIELD_HEIGHT: f32 = 800.0;
    /// Smallest field the simulation will accept before falling back
    pub const MIN_FIELD_EXTENT: f32 = 1.0;

    /// Chance of a new entity appearing on any given tick
    pub const SPAWN_PROBABILITY: f32 = 0.03;
    /// Entities seeded on start so the field is never empty
    pub const SEED_ENTITIES: u32 = 2;
    /// Entities spawn this far above the top edge
    pub const SPAWN_HEIGHT: f32 = 20.0;
    /// Horizontal inset from each side for spawn positions
    pub const SPAWN_EDGE_INSET: f32 = 20.0;
    /// Horizontal spawn speed range is [-MAX, MAX)
    pub const SPAWN_MAX_VX: f32 = 2.0;
    /// Downward speed range [MIN, MAX)
    pub const SPAWN_MIN_VY: f32 = 2.0;
    pub const SPAWN_MAX_VY: f32 = 5.0;
    /// Entity size range [MIN, MAX)
    pub const ENTITY_MIN_SIZE: f32 = 15.0;
    pub const ENTITY_MAX_SIZE: f32 = 35.0;

    /// Half-width of the per-tick horizontal velocity perturbation
    pub const DRIFT: f32 = 0.05;
    /// Entities are retired once this far below the bottom edge
    pub const RETIRE_MARGIN: f32 = 50.0;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 25.0;
    pub const PLAYER_HIT_RADIUS: f32 = 25.0;
    pub const PLAYER_INSET_X: f32 = 0.0;
    pub const PLAYER_INSET_Y: f32 = 75.0;
    /// Default anchor sits this far above the bottom edge
    pub const ANCHOR_OFFSET_Y: f32 = 200.0;

    /// Points per caught entity
    pub const CATCH_POINTS: u64 = 10;
    /// Undrained collision events kept by the controller
    pub const MAX_PENDING_EVENTS: usize = 256;
}

/// Clamp `value` into `[min, max]`, mapping non-finite input to a bound.
///
/// NaN resolves to `fallback` (itself clamped). Degenerate ranges where
/// `min > max` collapse to their midpoint.
#[inline]
pub fn clamp_finite(value: f32, min: f32, max: f32, fallback: f32) -> f32 {
    if !(min <= max) {
        let mid = (min + max) * 0.5;
        return if mid.is_finite() { mid } else { 0.0 };
    }
    if value.is_nan() {
        return if fallback.is_nan() {
            (min + max) * 0.5
        } else {
            fallback.clamp(min, max)
        };
    }
    // +/- infinity clamps to the matching bound
    value.clamp(min, max)
}

/// HUD score string, zero-padded to six digits
pub fn format_score(score: u64) -> String {
    format!("SCORE: {:06}", score)
}
