//! Ship, asteroid and shot entities

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{split_velocity, wrap};
use crate::consts::*;
use crate::{Viewport, heading};

/// Outline points relative to the entity origin, drawn as a closed loop
pub type Polygon = Vec<Vec2>;

fn scaled(points: &[(f32, f32)], base: f32) -> Polygon {
    points
        .iter()
        .map(|&(x, y)| Vec2::new(x * base, y * base))
        .collect()
}

/// Outlines scaled to the viewport, built once at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shapes {
    pub ship: Polygon,
    pub big: Polygon,
    pub small: Polygon,
}

impl Shapes {
    pub fn new(base: f32) -> Self {
        Self {
            ship: scaled(&[(10.0, 0.0), (-5.0, 5.0), (-5.0, -5.0)], base),
            big: scaled(
                &[
                    (-20.0, 0.0),
                    (0.0, 10.0),
                    (10.0, 0.0),
                    (5.0, 10.0),
                    (10.0, 20.0),
                    (25.0, -10.0),
                    (0.0, -20.0),
                ],
                base,
            ),
            small: scaled(&[(-5.0, 7.0), (6.0, 4.0), (8.0, -5.0), (-7.0, -6.0)], base),
        }
    }

    pub fn asteroid(&self, kind: AsteroidKind) -> &Polygon {
        match kind {
            AsteroidKind::Big => &self.big,
            AsteroidKind::Small => &self.small,
        }
    }
}

/// Position, heading and their rates of change
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    /// Heading in radians
    pub rot: f32,
    pub vel: Vec2,
    /// Angular velocity
    pub spin: f32,
}

impl Body {
    /// Move and rotate by the step factor, then wrap with `margin`
    pub fn advance(&mut self, factor: f32, size: Vec2, margin: f32) {
        self.pos = wrap(self.pos + self.vel * factor, size, margin);
        self.rot += self.spin * factor;
    }
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub body: Body,
    /// Zero the spin at the end of the next step (rotate key released)
    pub reset_spin: bool,
}

impl Ship {
    pub fn new(pos: Vec2) -> Self {
        Self {
            body: Body {
                pos,
                ..Default::default()
            },
            reset_spin: false,
        }
    }

    /// Ship wraps on the view edges without a margin
    pub fn advance(&mut self, factor: f32, size: Vec2) {
        self.body.advance(factor, size, 0.0);
    }

    /// Put the ship at `pos` at rest
    pub fn place(&mut self, pos: Vec2) {
        self.body.pos = pos;
        self.body.vel = Vec2::ZERO;
    }

    /// Add `sign` thrust along the heading. Velocities that end up below half
    /// a base unit on both axes snap to rest.
    pub fn thrust(&mut self, sign: f32, base: f32) {
        self.body.vel += heading(self.body.rot) * base * sign;
        let v = self.body.vel;
        if v.x.abs() < base / 2.0 && v.y.abs() < base / 2.0 {
            self.body.vel = Vec2::ZERO;
        }
    }
}

/// Asteroid size class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AsteroidKind {
    /// Splits into fragments when shot
    Big,
    /// Fragment; destroyed outright
    Small,
}

impl AsteroidKind {
    /// Nominal radius in base units
    pub fn size(self) -> f32 {
        match self {
            AsteroidKind::Big => BIG_SIZE,
            AsteroidKind::Small => SMALL_SIZE,
        }
    }

    pub fn points(self) -> u64 {
        match self {
            AsteroidKind::Big => BIG_POINTS,
            AsteroidKind::Small => SMALL_POINTS,
        }
    }
}

/// An asteroid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asteroid {
    pub kind: AsteroidKind,
    pub body: Body,
    /// Squared hit radius
    pub hit_range_sq: f32,
}

impl Asteroid {
    pub fn new(kind: AsteroidKind, body: Body, base: f32) -> Self {
        let size = kind.size() * base;
        Self {
            kind,
            body,
            hit_range_sq: size * size,
        }
    }

    /// Small fragment thrown off at dispersion `dir`
    pub fn fragment(&self, dir: f32, base: f32) -> Self {
        Self::new(
            AsteroidKind::Small,
            Body {
                pos: self.body.pos,
                rot: self.body.rot,
                vel: split_velocity(self.body.vel, dir),
                spin: 2.0 * self.body.spin * dir,
            },
            base,
        )
    }

    pub fn advance(&mut self, factor: f32, size: Vec2) {
        self.body.advance(factor, size, WRAP_MARGIN);
    }
}

/// A shot fired by the ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shot {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Distance counter; the shot expires past `SHOT_RANGE`
    pub traveled: f32,
}

impl Shot {
    /// Fire from the ship's nose along its heading, inheriting its velocity.
    /// The shot starts one frame of travel ahead of the ship.
    pub fn fire(ship: &Ship, viewport: &Viewport) -> Self {
        let vel = heading(ship.body.rot) * viewport.base * SHOT_SPEED + ship.body.vel;
        Self {
            pos: ship.body.pos + vel,
            vel,
            traveled: 0.0,
        }
    }

    pub fn advance(&mut self, factor: f32, size: Vec2) {
        self.pos = wrap(self.pos + self.vel * factor, size, WRAP_MARGIN);
        // Counted twice per step; the range constant is tuned for that
        self.traveled += 2.0 * factor;
    }

    pub fn expired(&self) -> bool {
        self.traveled > SHOT_RANGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thrust_and_snap_to_rest() {
        let mut ship = Ship::new(Vec2::ZERO);
        ship.thrust(1.0, 2.0);
        assert!((ship.body.vel - Vec2::new(2.0, 0.0)).length() < 1e-6);

        // Reverse thrust lands exactly on zero
        ship.thrust(-1.0, 2.0);
        assert_eq!(ship.body.vel, Vec2::ZERO);

        // Small residual drift is snapped away
        ship.body.vel = Vec2::new(2.9, 0.0);
        ship.thrust(-1.0, 2.0);
        assert_eq!(ship.body.vel, Vec2::ZERO);
    }

    #[test]
    fn test_fragment_inherits_parent() {
        let parent = Asteroid::new(
            AsteroidKind::Big,
            Body {
                pos: Vec2::new(50.0, 60.0),
                rot: 0.3,
                vel: Vec2::new(1.0, 2.0),
                spin: 0.05,
            },
            1.0,
        );
        assert_eq!(parent.hit_range_sq, 400.0);

        let frag = parent.fragment(-1.0, 1.0);
        assert_eq!(frag.kind, AsteroidKind::Small);
        assert_eq!(frag.body.pos, parent.body.pos);
        assert_eq!(frag.body.rot, 0.3);
        assert_eq!(frag.body.vel, Vec2::new(-1.0, 3.0));
        assert_eq!(frag.body.spin, -0.1);
        assert_eq!(frag.hit_range_sq, 100.0);
    }

    #[test]
    fn test_shot_fires_ahead_of_ship() {
        let viewport = Viewport::new(400.0, 400.0);
        let mut ship = Ship::new(Vec2::new(100.0, 100.0));
        ship.body.vel = Vec2::new(0.0, 1.0);
        let shot = Shot::fire(&ship, &viewport);
        assert_eq!(shot.vel, Vec2::new(15.0, 1.0));
        assert_eq!(shot.pos, Vec2::new(115.0, 101.0));
        assert_eq!(shot.traveled, 0.0);
    }

    #[test]
    fn test_shot_range() {
        let mut shot = Shot {
            pos: Vec2::new(10.0, 10.0),
            vel: Vec2::ZERO,
            traveled: 0.0,
        };
        let size = Vec2::new(100.0, 100.0);
        for _ in 0..15 {
            shot.advance(1.0, size);
        }
        assert_eq!(shot.traveled, 30.0);
        assert!(!shot.expired());
        shot.advance(0.1, size);
        assert!(shot.expired());
    }
}
