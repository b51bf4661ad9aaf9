//! Keyboard input
//!
//! Key events are applied to the state as they arrive, between steps.

use super::state::GameState;
use super::tick::next_level;
use crate::consts::SHIP_SPIN;

/// A key as the game sees it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    RotateLeft,
    RotateRight,
    Thrust,
    Reverse,
    /// The "4" key, shifted or not: jump to a random spot
    Hyperspace,
    /// Anything else fires
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_dom_key(key: &str) -> Self {
        match key {
            "ArrowLeft" | "Left" => Key::RotateLeft,
            "ArrowRight" | "Right" => Key::RotateRight,
            "ArrowUp" | "Up" => Key::Thrust,
            "ArrowDown" | "Down" => Key::Reverse,
            "4" | "$" => Key::Hyperspace,
            _ => Key::Other,
        }
    }
}

/// Start a new round from the game-over screen
pub fn start_round(state: &mut GameState) {
    state.lives = state.starting_lives;
    state.score = 0;
    state.level = 0;
    log::info!("New round with {} lives", state.lives);
    next_level(state);
}

/// Apply a key press
pub fn key_down(state: &mut GameState, key: Key) {
    if state.is_game_over() {
        // Any key restarts once the last death has finished blinking
        if !state.is_blinking() {
            start_round(state);
        }
        return;
    }

    let base = state.viewport.base;
    match key {
        Key::RotateLeft => {
            state.ship.body.spin = -SHIP_SPIN;
            state.ship.reset_spin = false;
        }
        Key::RotateRight => {
            state.ship.body.spin = SHIP_SPIN;
            state.ship.reset_spin = false;
        }
        Key::Thrust => state.ship.thrust(1.0, base),
        Key::Reverse => state.ship.thrust(-1.0, base),
        Key::Hyperspace if state.hyperspace && !state.is_blinking() => hyperspace(state),
        _ => {
            state.fire();
        }
    }
}

/// Apply a key release
pub fn key_up(state: &mut GameState, key: Key) {
    if matches!(key, Key::RotateLeft | Key::RotateRight) {
        state.ship.reset_spin = true;
    }
}

/// Teleport the ship to a random spot at rest, invulnerable while it blinks
fn hyperspace(state: &mut GameState) {
    let x = state.random() * state.viewport.width;
    let y = state.random() * state.viewport.height;
    state.ship.place(glam::Vec2::new(x, y));
    state.blink = 1.0;
    log::debug!("Hyperspace to ({:.0}, {:.0})", x, y);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Viewport;
    use glam::Vec2;

    fn playing_state() -> GameState {
        let mut state = GameState::new(Viewport::new(800.0, 600.0), 3);
        start_round(&mut state);
        state
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(Key::from_dom_key("ArrowLeft"), Key::RotateLeft);
        assert_eq!(Key::from_dom_key("ArrowDown"), Key::Reverse);
        assert_eq!(Key::from_dom_key("4"), Key::Hyperspace);
        assert_eq!(Key::from_dom_key("Right"), Key::RotateRight);
        assert_eq!(Key::from_dom_key("ArrowUp"), Key::Thrust);
        assert_eq!(Key::from_dom_key(" "), Key::Other);
    }

    #[test]
    fn test_shifted_four_is_hyperspace() {
        assert_eq!(Key::from_dom_key("$"), Key::Hyperspace);
        let mut state = playing_state();
        key_down(&mut state, Key::from_dom_key("$"));
        assert_eq!(state.blink, 1.0);
        assert!(state.shots.is_empty());
    }

    #[test]
    fn test_any_key_starts_round() {
        let mut state = GameState::new(Viewport::new(800.0, 600.0), 3);
        state.score = 120;
        state.level = 6;
        key_down(&mut state, Key::RotateLeft);

        assert_eq!(state.lives, 3);
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.asteroids.len(), 1);
        // The key itself does nothing else
        assert_eq!(state.ship.body.spin, 0.0);
        assert!(state.shots.is_empty());
    }

    #[test]
    fn test_restart_waits_for_blink() {
        let mut state = GameState::new(Viewport::new(800.0, 600.0), 3);
        state.blink = 12.0;
        key_down(&mut state, Key::Other);
        assert_eq!(state.lives, 0);
        assert_eq!(state.level, 0);
        assert!(state.shots.is_empty());
    }

    #[test]
    fn test_rotate_and_release() {
        let mut state = playing_state();
        key_down(&mut state, Key::RotateLeft);
        assert_eq!(state.ship.body.spin, -SHIP_SPIN);
        assert!(!state.ship.reset_spin);

        key_down(&mut state, Key::RotateRight);
        assert_eq!(state.ship.body.spin, SHIP_SPIN);

        key_up(&mut state, Key::Thrust);
        assert!(!state.ship.reset_spin);
        key_up(&mut state, Key::RotateRight);
        assert!(state.ship.reset_spin);
        // Spin is cleared by the next step, not by the release itself
        assert_eq!(state.ship.body.spin, SHIP_SPIN);
    }

    #[test]
    fn test_thrust_and_reverse() {
        let mut state = playing_state();
        let base = state.viewport.base;
        key_down(&mut state, Key::Thrust);
        key_down(&mut state, Key::Thrust);
        assert!((state.ship.body.vel - Vec2::new(2.0 * base, 0.0)).length() < 1e-5);

        key_down(&mut state, Key::Reverse);
        key_down(&mut state, Key::Reverse);
        assert_eq!(state.ship.body.vel, Vec2::ZERO);
    }

    #[test]
    fn test_other_key_fires() {
        let mut state = playing_state();
        key_down(&mut state, Key::Other);
        key_down(&mut state, Key::Other);
        assert_eq!(state.shots.len(), 2);
    }

    #[test]
    fn test_hyperspace_teleports() {
        let mut state = playing_state();
        state.ship.body.vel = Vec2::new(3.0, 3.0);
        key_down(&mut state, Key::Hyperspace);

        assert_eq!(state.ship.body.vel, Vec2::ZERO);
        assert_eq!(state.blink, 1.0);
        let p = state.ship.body.pos;
        assert!((0.0..800.0).contains(&p.x) && (0.0..600.0).contains(&p.y));
        assert!(state.shots.is_empty());
    }

    #[test]
    fn test_hyperspace_while_blinking_fires() {
        let mut state = playing_state();
        state.blink = 5.0;
        let before = state.ship.body.pos;
        key_down(&mut state, Key::Hyperspace);
        assert_eq!(state.ship.body.pos, before);
        assert_eq!(state.shots.len(), 1);
    }

    #[test]
    fn test_hyperspace_disabled_fires() {
        let mut state = playing_state();
        state.hyperspace = false;
        key_down(&mut state, Key::Hyperspace);
        assert_eq!(state.blink, 0.0);
        assert_eq!(state.shots.len(), 1);
    }
}
