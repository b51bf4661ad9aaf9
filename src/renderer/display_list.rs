//! Recording surface
//!
//! Flattens everything drawn on it into world-space polylines. The GPU path
//! tessellates the result; tests and the headless run inspect it directly.

use glam::{Affine2, Vec2};

use super::surface::{Rgba, Surface};

/// One stroked polyline in surface pixels
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub points: Vec<Vec2>,
    pub color: Rgba,
}

#[derive(Debug, Clone)]
pub struct DisplayList {
    pub background: Rgba,
    pub strokes: Vec<Stroke>,
    stroke_color: Rgba,
    transform: Affine2,
    saved: Vec<Affine2>,
    /// Subpaths of the path under construction
    path: Vec<Vec<Vec2>>,
}

impl Default for DisplayList {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayList {
    pub fn new() -> Self {
        Self {
            background: [0.0, 0.0, 0.0, 1.0],
            strokes: Vec::new(),
            stroke_color: [1.0; 4],
            transform: Affine2::IDENTITY,
            saved: Vec::new(),
            path: Vec::new(),
        }
    }

    /// Total line segments across all strokes
    pub fn segment_count(&self) -> usize {
        self.strokes
            .iter()
            .map(|s| s.points.len().saturating_sub(1))
            .sum()
    }
}

impl Surface for DisplayList {
    fn clear(&mut self, color: Rgba) {
        self.background = color;
        self.strokes.clear();
    }

    fn set_stroke_color(&mut self, color: Rgba) {
        self.stroke_color = color;
    }

    fn save(&mut self) {
        self.saved.push(self.transform);
    }

    fn restore(&mut self) {
        if let Some(t) = self.saved.pop() {
            self.transform = t;
        }
    }

    fn translate(&mut self, offset: Vec2) {
        self.transform = self.transform * Affine2::from_translation(offset);
    }

    fn rotate(&mut self, angle: f32) {
        self.transform = self.transform * Affine2::from_angle(angle);
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, point: Vec2) {
        self.path.push(vec![self.transform.transform_point2(point)]);
    }

    fn line_to(&mut self, point: Vec2) {
        let p = self.transform.transform_point2(point);
        match self.path.last_mut() {
            Some(sub) => sub.push(p),
            // Canvas semantics: a line with no current point starts one
            None => self.path.push(vec![p]),
        }
    }

    fn stroke(&mut self) {
        for sub in &self.path {
            if sub.len() >= 2 {
                self.strokes.push(Stroke {
                    points: sub.clone(),
                    color: self.stroke_color,
                });
            }
        }
    }
}
