//! Game state
//!
//! One `GameState` owns every entity plus the round bookkeeping. The timer
//! callback and the keyboard handlers both borrow it mutably, one at a time.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::entities::{Shapes, Ship};
use super::slots::SlotVec;
use super::{Asteroid, Shot};
use crate::config::Config;
use crate::Viewport;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub viewport: Viewport,
    /// Outlines scaled to the viewport
    pub shapes: Shapes,
    /// Player ship (kept across lives and rounds)
    pub ship: Ship,
    pub asteroids: SlotVec<Asteroid>,
    pub shots: SlotVec<Shot>,
    pub score: u64,
    /// Best score this session
    pub high_score: u64,
    pub lives: u32,
    /// Current level (0 before the first round starts)
    pub level: u32,
    /// Invulnerability counter; 0 when inactive, counts up to `BLINK_END`
    pub blink: f32,
    /// Lives granted by `start_round`
    pub starting_lives: u32,
    /// Whether the hyperspace key teleports
    pub hyperspace: bool,
    rng: Pcg32,
}

impl GameState {
    /// Create a game in attract mode (no lives, no round started)
    pub fn new(viewport: Viewport, seed: u64) -> Self {
        Self::with_config(viewport, &Config::default(), seed)
    }

    pub fn with_config(viewport: Viewport, config: &Config, seed: u64) -> Self {
        Self {
            seed,
            viewport,
            shapes: Shapes::new(viewport.base),
            ship: Ship::new(viewport.center()),
            asteroids: SlotVec::new(),
            shots: SlotVec::new(),
            score: 0,
            high_score: 0,
            lives: 0,
            level: 0,
            blink: 0.0,
            starting_lives: config.starting_lives,
            hyperspace: config.hyperspace,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Uniform sample in `[0, 1)`
    pub fn random(&mut self) -> f32 {
        self.rng.random::<f32>()
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.viewport.width, self.viewport.height)
    }

    /// Respawn invulnerability is active
    pub fn is_blinking(&self) -> bool {
        self.blink > 0.0
    }

    /// The ship moves and is drawn only in the "on" half of each blink cycle
    pub fn ship_active(&self) -> bool {
        self.lives > 0 && (self.blink.floor() as u32) % 4 < 2
    }

    pub fn is_game_over(&self) -> bool {
        self.lives == 0
    }

    pub fn add_score(&mut self, points: u64) {
        self.score += points;
        if self.score > self.high_score {
            self.high_score = self.score;
        }
    }

    /// Re-center the ship at rest and start invulnerability
    pub fn respawn_ship(&mut self) {
        let center = self.viewport.center();
        self.ship.place(center);
        self.blink = 1.0;
    }

    /// Fire a shot from the ship
    pub fn fire(&mut self) -> usize {
        let shot = Shot::fire(&self.ship, &self.viewport);
        self.shots.insert(shot)
    }
}
