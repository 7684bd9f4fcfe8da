//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One tick per host frame, no internal timers
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod controller;
pub mod input;
pub mod physics;
pub mod score;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{CollisionDetector, circles_overlap};
pub use controller::GameLoop;
pub use input::InputTracker;
pub use physics::PhysicsIntegrator;
pub use score::{CollisionEvent, ScoreDelta, ScoreKeeper};
pub use spawner::EntitySpawner;
pub use state::{Entity, EntityColor, GamePhase, GameState, PlayField, RunStats, Snapshot};
pub use tick::{TickReport, tick};
