//! Run-state machine and host-facing game loop
//!
//! `Idle -> start -> Running <-> Paused`, and `reset` from anywhere back to
//! `Idle`. Every control is total: calls that don't apply are no-ops. The
//! host calls [`GameLoop::tick`] once per frame callback and feeds pointer
//! samples through [`GameLoop::pointer_move`] whenever they arrive.

use std::collections::VecDeque;

use glam::Vec2;

use super::score::CollisionEvent;
use super::state::{Entity, GamePhase, GameState, PlayField, RunStats, Snapshot};
use super::tick::{TickReport, tick};
use crate::consts::{FRAME_DT, MAX_PENDING_EVENTS};
use crate::settings::Settings;

/// Owns the game state and the undrained feedback events
#[derive(Debug, Clone)]
pub struct GameLoop {
    state: GameState,
    pending: VecDeque<CollisionEvent>,
    overflow_logged: bool,
}

impl GameLoop {
    pub fn new(settings: Settings, seed: u64) -> Self {
        Self {
            state: GameState::new(settings, seed),
            pending: VecDeque::new(),
            overflow_logged: false,
        }
    }

    /// Begin a run from `Idle` (seeding the field), or resume from `Paused`
    pub fn start(&mut self) {
        match self.state.phase {
            GamePhase::Idle => {
                self.state.seed_field();
                self.state.phase = GamePhase::Running;
                log::info!(
                    "Run started with {} entities (seed {})",
                    self.state.entities.len(),
                    self.state.seed
                );
            }
            GamePhase::Paused => self.resume(),
            GamePhase::Running => {}
        }
    }

    pub fn pause(&mut self) {
        if self.state.phase == GamePhase::Running {
            self.state.phase = GamePhase::Paused;
            log::info!("Paused at tick {}", self.state.time_ticks);
        }
    }

    pub fn resume(&mut self) {
        if self.state.phase == GamePhase::Paused {
            self.state.phase = GamePhase::Running;
            log::info!("Resumed at tick {}", self.state.time_ticks);
        }
    }

    /// Single play/pause control
    pub fn toggle(&mut self) {
        match self.state.phase {
            GamePhase::Running => self.pause(),
            GamePhase::Idle | GamePhase::Paused => self.start(),
        }
    }

    /// Back to `Idle` from any state
    pub fn reset(&mut self) {
        let was = self.state.phase;
        self.state.clear();
        self.pending.clear();
        self.overflow_logged = false;
        if was != GamePhase::Idle {
            log::info!("Reset from {:?}", was);
        }
    }

    /// Run one frame. No-op unless running.
    pub fn tick(&mut self) -> TickReport {
        let report = tick(&mut self.state, FRAME_DT);
        for event in &report.events {
            self.push_event(event.clone());
        }
        report
    }

    /// Apply a pointer sample; returns the clamped player position.
    ///
    /// Ignored while paused so the catcher stays frozen with the field.
    pub fn pointer_move(&mut self, x: f32, y: f32) -> Vec2 {
        if self.state.phase == GamePhase::Paused {
            return self.state.input.position();
        }
        self.state.input.update(x, y)
    }

    /// Take every buffered collision event, oldest first
    pub fn drain_events(&mut self) -> Vec<CollisionEvent> {
        self.overflow_logged = false;
        self.pending.drain(..).collect()
    }

    fn push_event(&mut self, event: CollisionEvent) {
        if self.pending.len() >= MAX_PENDING_EVENTS {
            self.pending.pop_front();
            if !self.overflow_logged {
                log::warn!("Collision event queue full, dropping oldest events");
                self.overflow_logged = true;
            }
        }
        self.pending.push_back(event);
    }

    /// Replace the RNG (e.g. with a wall-clock seed)
    pub fn reseed(&mut self, seed: u64) {
        self.state.reseed(seed);
        log::info!("Reseeded with {}", seed);
    }

    pub fn seed(&self) -> u64 {
        self.state.seed
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn score(&self) -> u64 {
        self.state.score()
    }

    pub fn player(&self) -> Vec2 {
        self.state.player()
    }

    pub fn entities(&self) -> &[Entity] {
        &self.state.entities
    }

    pub fn stats(&self) -> RunStats {
        self.state.stats
    }

    pub fn ticks(&self) -> u64 {
        self.state.time_ticks
    }

    pub fn settings(&self) -> &Settings {
        &self.state.settings
    }

    /// Sanitized play-field dimensions
    pub fn field(&self) -> PlayField {
        self.state.field
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new(Settings::default(), 0)
    }
}
