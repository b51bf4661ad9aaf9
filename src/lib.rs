//! Canvasoids - A vector-outline asteroids game
//!
//! Core modules:
//! - `sim`: Simulation (entities, stepping, collisions, input, frame clock)
//! - `renderer`: Drawing surfaces, scene drawing and the WebGPU line pipeline
//! - `config`: Data-driven options loaded from JSON
//! - `error`: Error types for config and startup

pub mod config;
pub mod error;
pub mod renderer;
pub mod sim;

pub use config::Config;
pub use error::{Error, Result};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Milliseconds of wall time that make one unit of step factor
    pub const STEP_FACTOR_MS: f32 = 50.0;
    /// Fixed simulation step in milliseconds (~33 Hz)
    pub const STEP_MS: f32 = 30.0;
    /// Step factor of one fixed step
    pub const STEP_FACTOR: f32 = STEP_MS / STEP_FACTOR_MS;
    /// Lower bound for the timer re-arm delay
    pub const MIN_DELAY_MS: f32 = 10.0;
    /// Longest frame fed into the accumulator (tab switches, debugger pauses)
    pub const MAX_FRAME_MS: f32 = 250.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Viewport size that maps to a base scale of 1.0
    pub const BASE_DIVISOR: f32 = 400.0;
    /// Out-of-view margin used when wrapping asteroids and shots
    pub const WRAP_MARGIN: f32 = 10.0;

    /// Blink counter value past which invulnerability ends
    pub const BLINK_END: f32 = 50.0;
    /// Ship angular velocity while a rotate key is held
    pub const SHIP_SPIN: f32 = 0.2;
    /// Shot muzzle speed in base units
    pub const SHOT_SPEED: f32 = 15.0;
    /// Shots are removed once they have traveled this far
    pub const SHOT_RANGE: f32 = 30.0;

    /// Nominal sizes (base units), squared for hit testing
    pub const BIG_SIZE: f32 = 20.0;
    pub const SMALL_SIZE: f32 = 10.0;

    pub const BIG_POINTS: u64 = 10;
    pub const SMALL_POINTS: u64 = 50;

    pub const STARTING_LIVES: u32 = 3;
}

/// Drawing area size and the scale derived from it.
///
/// Read once at startup; there is no resize handling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    /// Scale unit for every shape and speed
    pub base: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            base: width.min(height) / consts::BASE_DIVISOR,
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Unit vector for a heading in radians
#[inline]
pub fn heading(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}
