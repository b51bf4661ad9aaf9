//! Simulation module
//!
//! All gameplay logic lives here:
//! - Seeded RNG only
//! - Collision scans run from the highest slot down
//! - No rendering or platform dependencies

pub mod clock;
pub mod collision;
pub mod entities;
pub mod input;
pub mod slots;
pub mod state;
pub mod tick;

pub use clock::{Frame, FrameClock, next_delay_ms};
pub use collision::{split_velocity, within_range, wrap};
pub use entities::{Asteroid, AsteroidKind, Body, Polygon, Shapes, Ship, Shot};
pub use input::{Key, key_down, key_up, start_round};
pub use slots::SlotVec;
pub use state::GameState;
pub use tick::{asteroid_count, next_level, shoot_asteroid_at, tick};
