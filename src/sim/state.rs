//! Game state and core simulation types
//!
//! Everything a running game needs lives in [`GameState`]; the step functions
//! in the sibling modules borrow the pieces they own from it.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::CollisionDetector;
use super::input::InputTracker;
use super::physics::PhysicsIntegrator;
use super::score::ScoreKeeper;
use super::spawner::EntitySpawner;
use crate::consts::*;
use crate::settings::Settings;

/// Run state of the game loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Nothing on the field, loop inactive
    #[default]
    Idle,
    /// One tick per frame
    Running,
    /// Loop inactive, everything frozen in place
    Paused,
}

/// Cosmetic color tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityColor {
    #[serde(rename = "#ff006e")]
    Magenta,
    #[serde(rename = "#00ff88")]
    Mint,
    #[serde(rename = "#ffaa00")]
    Amber,
    #[serde(rename = "#8338ec")]
    Violet,
    #[serde(rename = "#3a86ff")]
    Azure,
}

impl EntityColor {
    pub const PALETTE: [EntityColor; 5] = [
        EntityColor::Magenta,
        EntityColor::Mint,
        EntityColor::Amber,
        EntityColor::Violet,
        EntityColor::Azure,
    ];

    pub fn hex(&self) -> &'static str {
        match self {
            EntityColor::Magenta => "#ff006e",
            EntityColor::Mint => "#00ff88",
            EntityColor::Amber => "#ffaa00",
            EntityColor::Violet => "#8338ec",
            EntityColor::Azure => "#3a86ff",
        }
    }
}

/// A falling entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: u32,
    pub pos: Vec2,
    /// Velocity in field units per frame
    pub vel: Vec2,
    /// Visual radius, also the entity's share of the hit distance
    pub size: f32,
    pub color: EntityColor,
}

/// Play-field dimensions, fixed for the session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayField {
    pub width: f32,
    pub height: f32,
}

impl Default for PlayField {
    fn default() -> Self {
        Self {
            width: DEFAULT_FIELD_WIDTH,
            height: DEFAULT_FIELD_HEIGHT,
        }
    }
}

impl PlayField {
    /// Build a field, replacing unusable dimensions with the defaults
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: sanitize_extent("width", width, DEFAULT_FIELD_WIDTH),
            height: sanitize_extent("height", height, DEFAULT_FIELD_HEIGHT),
        }
    }

    /// Lowest y an entity may reach before retiring
    pub fn retire_y(&self, retire_margin: f32) -> f32 {
        self.height + retire_margin
    }
}

fn sanitize_extent(name: &str, value: f32, fallback: f32) -> f32 {
    if value.is_finite() && value >= MIN_FIELD_EXTENT {
        value
    } else {
        log::warn!("Field {} {} unusable, using {}", name, value, fallback);
        fallback
    }
}

/// Counters for the current run (cleared on reset)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    pub spawned: u64,
    pub caught: u64,
    pub retired: u64,
}

/// Render-facing view of the game
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub score: u64,
    pub tick: u64,
    pub player: Vec2,
    pub entities: Vec<Entity>,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub settings: Settings,
    pub field: PlayField,
    /// Current phase
    pub phase: GamePhase,
    /// Live entities in spawn order
    pub entities: Vec<Entity>,
    /// Sole owner of the player position
    pub input: InputTracker,
    pub spawner: EntitySpawner,
    pub physics: PhysicsIntegrator,
    pub detector: CollisionDetector,
    pub scorer: ScoreKeeper,
    /// Simulation tick counter (ticks run while Running)
    pub time_ticks: u64,
    pub stats: RunStats,
    /// Seed the RNG was last created from
    pub seed: u64,
    pub rng: Pcg32,
}

impl GameState {
    /// Create an idle game state for the given settings and seed
    pub fn new(settings: Settings, seed: u64) -> Self {
        let mut settings = match settings.validate() {
            Ok(()) => settings,
            Err(e) => {
                log::warn!("Invalid settings ({}), falling back to defaults", e);
                Settings::with_field(settings.field_width, settings.field_height)
            }
        };
        let field = PlayField::new(settings.field_width, settings.field_height);
        settings.field_width = field.width;
        settings.field_height = field.height;

        Self {
            input: InputTracker::new(field, &settings),
            spawner: EntitySpawner::new(field, &settings),
            physics: PhysicsIntegrator::new(field, &settings),
            detector: CollisionDetector::new(settings.player_hit_radius),
            scorer: ScoreKeeper::new(settings.catch_points),
            settings,
            field,
            phase: GamePhase::Idle,
            entities: Vec::new(),
            time_ticks: 0,
            stats: RunStats::default(),
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Current player position
    pub fn player(&self) -> Vec2 {
        self.input.position()
    }

    /// Current score
    pub fn score(&self) -> u64 {
        self.scorer.score()
    }

    /// Replace the RNG with a freshly seeded one
    pub fn reseed(&mut self, seed: u64) {
        self.seed = seed;
        self.rng = Pcg32::seed_from_u64(seed);
    }

    /// Discard the run: no entities, zero score, player at the anchor
    pub fn clear(&mut self) {
        self.phase = GamePhase::Idle;
        self.entities.clear();
        self.scorer.reset();
        self.input.reset();
        self.time_ticks = 0;
        self.stats = RunStats::default();
    }

    /// Spawn the opening entities for a fresh run
    pub fn seed_field(&mut self) {
        for _ in 0..self.settings.seed_entities {
            let entity = self.spawner.spawn(&mut self.rng);
            self.entities.push(entity);
            self.stats.spawned += 1;
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            score: self.score(),
            tick: self.time_ticks,
            player: self.player(),
            entities: self.entities.clone(),
        }
    }
}
