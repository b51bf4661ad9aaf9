//! Simulation step
//!
//! Advances the game by the wall time elapsed since the previous step.
//! Motion is scaled by `elapsed_ms / STEP_FACTOR_MS` so speed does not depend
//! on how often the host calls in.

use glam::Vec2;

use super::collision::within_range;
use super::entities::{Asteroid, AsteroidKind, Body};
use super::state::GameState;
use crate::consts::*;

/// Advance the game state by `elapsed_ms` of wall time
pub fn tick(state: &mut GameState, elapsed_ms: f32) {
    let factor = elapsed_ms / STEP_FACTOR_MS;
    let size = state.size();

    if state.ship_active() {
        state.ship.advance(factor, size);
    }

    if state.blink > 0.0 {
        state.blink += factor;
        if state.blink > BLINK_END {
            state.blink = 0.0;
        }
    }

    update_asteroids(state, factor, size);
    update_shots(state, factor, size);

    if state.ship.reset_spin {
        state.ship.body.spin = 0.0;
    }
}

/// Ship-vs-asteroid pass. Every asteroid moves; an empty field starts the
/// next level.
fn update_asteroids(state: &mut GameState, factor: f32, size: Vec2) {
    let ship_pos = state.ship.body.pos;
    let mut any = false;

    for i in (0..state.asteroids.capacity()).rev() {
        let Some(hit) = state
            .asteroids
            .get(i)
            .map(|a| within_range(a.body.pos, ship_pos, a.hit_range_sq))
        else {
            continue;
        };
        any = true;

        if hit && state.blink == 0.0 && state.lives > 0 {
            state.lives -= 1;
            state.respawn_ship();
            log::debug!("Ship hit by asteroid {}, {} lives left", i, state.lives);
            if state.lives == 0 {
                log::info!(
                    "Game over at level {} with score {}",
                    state.level,
                    state.score
                );
            }
        }

        if let Some(asteroid) = state.asteroids.get_mut(i) {
            asteroid.advance(factor, size);
        }
    }

    if !any {
        next_level(state);
    }
}

/// Shot-vs-asteroid pass. A shot that hits or runs out of range is removed.
fn update_shots(state: &mut GameState, factor: f32, size: Vec2) {
    for i in (0..state.shots.capacity()).rev() {
        let Some((pos, expired)) = state.shots.get(i).map(|s| (s.pos, s.expired())) else {
            continue;
        };

        if shoot_asteroid_at(state, pos) || expired {
            state.shots.remove(i);
        } else if let Some(shot) = state.shots.get_mut(i) {
            shot.advance(factor, size);
        }
    }
}

/// Destroy the highest-index asteroid covering `pos`, score it and spawn its
/// fragments. Returns whether anything was hit.
pub fn shoot_asteroid_at(state: &mut GameState, pos: Vec2) -> bool {
    let Some(index) = state
        .asteroids
        .iter()
        .rev()
        .find(|(_, a)| within_range(a.body.pos, pos, a.hit_range_sq))
        .map(|(i, _)| i)
    else {
        return false;
    };
    let Some(asteroid) = state.asteroids.remove(index) else {
        return false;
    };

    state.add_score(asteroid.kind.points());
    if asteroid.kind == AsteroidKind::Big {
        split(state, &asteroid);
    }
    log::debug!(
        "Destroyed {:?} asteroid in slot {}, score {}",
        asteroid.kind,
        index,
        state.score
    );
    true
}

/// Throw off two fragments at opposite dispersions, and a third one at a
/// random dispersion with a chance that grows with the level.
fn split(state: &mut GameState, parent: &Asteroid) {
    let base = state.viewport.base;
    state.asteroids.insert(parent.fragment(1.0, base));
    state.asteroids.insert(parent.fragment(-1.0, base));

    if state.random() > 2.0 / state.level as f32 {
        let dir = (state.random() - 0.5) * 1.5;
        state.asteroids.insert(parent.fragment(dir, base));
    }
}

/// Number of big asteroids spawned for `level`
pub fn asteroid_count(level: u32) -> u32 {
    (0.6 + level as f32 / 2.0).floor() as u32
}

/// Clear the field and spawn the next level's asteroids. Spawns alternate
/// between the left edge (x = 0) and the top edge (y = 0); count and speed
/// grow with the level.
pub fn next_level(state: &mut GameState) {
    state.asteroids.clear();
    state.level += 1;

    let level = state.level;
    let base = state.viewport.base;
    let (w, h) = (state.viewport.width, state.viewport.height);
    let speed = base * (8 + level) as f32;
    let count = asteroid_count(level);

    for i in 0..count {
        let x = state.random() * w * (i % 2) as f32;
        let y = state.random() * h * ((i + 1) % 2) as f32;
        let dx = (state.random() - 0.5) * speed;
        let dy = (state.random() - 0.5) * speed;
        let rot = state.random() * 2.0 - 1.0;
        let spin = (state.random() - 0.5) / 5.0;

        let body = Body {
            pos: Vec2::new(x, y),
            rot,
            vel: Vec2::new(dx, dy),
            spin,
        };
        state
            .asteroids
            .insert(Asteroid::new(AsteroidKind::Big, body, base));
    }

    log::info!("Level {}: {} asteroids", level, count);
}
