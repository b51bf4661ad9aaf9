//! Draws one frame of the game onto a surface

use glam::Vec2;

use super::surface::{Align, Surface, TextRenderer, draw_string};
use crate::config::Config;
use crate::consts::STEP_FACTOR;
use crate::sim::{GameState, Polygon};

/// Stroke a closed outline at `pos` turned by `rot`
fn draw_polygon(surface: &mut dyn Surface, poly: &Polygon, pos: Vec2, rot: f32) {
    let Some(first) = poly.first() else {
        return;
    };
    surface.save();
    surface.translate(pos);
    surface.rotate(rot);
    surface.begin_path();
    surface.move_to(*first);
    for p in poly.iter().rev() {
        surface.line_to(*p);
    }
    surface.stroke();
    surface.restore();
}

/// Draw the whole scene. Text overlays are skipped when `text` is `None`.
pub fn draw_frame(
    state: &GameState,
    config: &Config,
    surface: &mut dyn Surface,
    text: Option<&mut dyn TextRenderer>,
) {
    surface.clear(config.background_color);
    surface.set_stroke_color(config.stroke_color);

    if state.ship_active() {
        let ship = &state.ship.body;
        draw_polygon(surface, &state.shapes.ship, ship.pos, ship.rot);
    }

    for (_, rock) in state.asteroids.iter() {
        draw_polygon(surface, state.shapes.asteroid(rock.kind), rock.body.pos, rock.body.rot);
    }

    // Shots are short streaks along their direction of travel
    for (_, shot) in state.shots.iter() {
        surface.begin_path();
        surface.move_to(shot.pos);
        surface.line_to(shot.pos + shot.vel * STEP_FACTOR);
        surface.stroke();
    }

    if let Some(text) = text {
        draw_overlay(state, config, text);
    }
}

fn draw_overlay(state: &GameState, config: &Config, text: &mut dyn TextRenderer) {
    let (w, h) = (state.viewport.width, state.viewport.height);
    text.set_fill_color(config.text_color);

    draw_string(text, Vec2::new(0.0, 20.0), &state.score.to_string(), Align::Left);
    draw_string(
        text,
        Vec2::new(w, 20.0),
        &format!("HI {}", state.high_score),
        Align::Right,
    );
    draw_string(
        text,
        Vec2::new(w, h - 5.0),
        &format!("Ships: {}", state.lives),
        Align::Right,
    );

    if state.is_game_over() {
        draw_string(text, Vec2::new(w / 2.0, h / 2.0 - 10.0), "GAME OVER", Align::Center);
        if !state.is_blinking() {
            draw_string(
                text,
                Vec2::new(w / 2.0, h / 2.0 + 10.0),
                "Press any key",
                Align::Center,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Viewport;
    use crate::renderer::DisplayList;
    use crate::sim::{Asteroid, AsteroidKind, Body, Shot, start_round};

    /// Fixed-width text: 10px per character
    #[derive(Default)]
    struct RecordingText {
        calls: Vec<(String, Vec2)>,
    }

    impl TextRenderer for RecordingText {
        fn set_fill_color(&mut self, _color: [f32; 4]) {}

        fn measure_text(&mut self, text: &str) -> f32 {
            text.len() as f32 * 10.0
        }

        fn fill_text(&mut self, text: &str, pos: Vec2) {
            self.calls.push((text.to_string(), pos));
        }
    }

    fn state() -> GameState {
        GameState::new(Viewport::new(800.0, 600.0), 5)
    }

    #[test]
    fn test_draws_ship_asteroids_and_shots() {
        let mut state = state();
        start_round(&mut state);
        state.asteroids.insert(Asteroid::new(AsteroidKind::Small, Body::default(), 1.5));
        state.shots.insert(Shot {
            pos: Vec2::new(10.0, 10.0),
            vel: Vec2::new(5.0, 0.0),
            traveled: 0.0,
        });

        let mut dl = DisplayList::new();
        draw_frame(&state, &Config::default(), &mut dl, None);

        // Ship + one big + one small + one shot
        assert_eq!(dl.strokes.len(), 4);
        // Closed outlines: n points -> n segments
        assert_eq!(dl.strokes[0].points.len(), 4);
        assert_eq!(dl.strokes[1].points.len(), 8);
        assert_eq!(dl.strokes[2].points.len(), 5);
        assert_eq!(dl.strokes[0].points[0], dl.strokes[0].points[3]);
        let streak = &dl.strokes[3].points;
        assert_eq!(streak.len(), 2);
        assert!((streak[0] - Vec2::new(10.0, 10.0)).length() < 1e-4);
        assert!((streak[1] - Vec2::new(13.0, 10.0)).length() < 1e-4);
    }

    #[test]
    fn test_ship_outline_follows_heading() {
        let mut state = state();
        state.lives = 1;
        state.ship.body.rot = std::f32::consts::PI;

        let mut dl = DisplayList::new();
        draw_frame(&state, &Config::default(), &mut dl, None);
        let nose = dl.strokes[0].points[0];
        // Nose is 10 base units ahead of the center, pointing left
        assert!((nose - Vec2::new(400.0 - 15.0, 300.0)).length() < 1e-3);
    }

    #[test]
    fn test_blinking_ship_hidden() {
        let mut state = state();
        state.lives = 2;
        state.blink = 2.0;
        let mut dl = DisplayList::new();
        draw_frame(&state, &Config::default(), &mut dl, None);
        assert!(dl.strokes.is_empty());
    }

    #[test]
    fn test_overlay_text_and_alignment() {
        let mut state = state();
        state.lives = 2;
        state.score = 40;
        state.high_score = 90;
        let mut text = RecordingText::default();
        let mut dl = DisplayList::new();
        draw_frame(&state, &Config::default(), &mut dl, Some(&mut text));

        assert_eq!(
            text.calls,
            vec![
                ("40".to_string(), Vec2::new(0.0, 20.0)),
                ("HI 90".to_string(), Vec2::new(750.0, 20.0)),
                ("Ships: 2".to_string(), Vec2::new(720.0, 595.0)),
            ]
        );
    }

    #[test]
    fn test_game_over_prompt() {
        let mut state = state();
        let mut text = RecordingText::default();
        draw_frame(&state, &Config::default(), &mut DisplayList::new(), Some(&mut text));
        let lines: Vec<&str> = text.calls.iter().map(|(t, _)| t.as_str()).collect();
        assert!(lines.contains(&"GAME OVER"));
        assert!(lines.contains(&"Press any key"));
        let (_, pos) = &text.calls[3];
        assert_eq!(*pos, Vec2::new(400.0 - 45.0, 290.0));

        // Still blinking from the last death: no prompt yet
        state.blink = 3.0;
        let mut text = RecordingText::default();
        draw_frame(&state, &Config::default(), &mut DisplayList::new(), Some(&mut text));
        let lines: Vec<&str> = text.calls.iter().map(|(t, _)| t.as_str()).collect();
        assert!(lines.contains(&"GAME OVER"));
        assert!(!lines.contains(&"Press any key"));
    }

    #[test]
    fn test_without_text_renderer_only_strokes() {
        let state = state();
        let mut dl = DisplayList::new();
        draw_frame(&state, &Config::default(), &mut dl, None);
        assert!(dl.strokes.is_empty());
        assert_eq!(dl.background, Config::default().background_color);
    }
}
