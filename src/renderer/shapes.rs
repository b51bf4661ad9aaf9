//! Line tessellation
//!
//! The GPU has no thick-line primitive, so every stroked segment becomes a
//! quad (two triangles) of the requested width.

use glam::Vec2;

use super::display_list::Stroke;
use super::vertex::Vertex;

/// Triangles for one segment of `width` pixels
fn segment_quad(p1: Vec2, p2: Vec2, width: f32, color: [f32; 4], out: &mut Vec<Vertex>) {
    let dir = (p2 - p1).normalize_or_zero();
    if dir == Vec2::ZERO {
        return;
    }
    let half = width / 2.0;
    // Perpendicular for width
    let perp = Vec2::new(-dir.y, dir.x) * half;
    // Extend the ends so joints between segments don't notch
    let p1 = p1 - dir * half;
    let p2 = p2 + dir * half;

    let v1a = p1 + perp;
    let v1b = p1 - perp;
    let v2a = p2 + perp;
    let v2b = p2 - perp;

    out.push(Vertex::new(v1a.x, v1a.y, color));
    out.push(Vertex::new(v1b.x, v1b.y, color));
    out.push(Vertex::new(v2a.x, v2a.y, color));

    out.push(Vertex::new(v2a.x, v2a.y, color));
    out.push(Vertex::new(v1b.x, v1b.y, color));
    out.push(Vertex::new(v2b.x, v2b.y, color));
}

/// Tessellate strokes into a triangle list in surface pixels
pub fn stroke_quads(strokes: &[Stroke], width: f32) -> Vec<Vertex> {
    let segments: usize = strokes.iter().map(|s| s.points.len().saturating_sub(1)).sum();
    let mut vertices = Vec::with_capacity(segments * 6);
    for stroke in strokes {
        for pair in stroke.points.windows(2) {
            segment_quad(pair[0], pair[1], width, stroke.color, &mut vertices);
        }
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    const GREEN: [f32; 4] = [0.0, 1.0, 0.0, 1.0];

    #[test]
    fn test_six_vertices_per_segment() {
        let strokes = vec![
            Stroke {
                points: vec![Vec2::ZERO, Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0)],
                color: GREEN,
            },
            Stroke {
                points: vec![Vec2::ZERO, Vec2::new(0.0, 5.0)],
                color: GREEN,
            },
        ];
        let verts = stroke_quads(&strokes, 2.0);
        assert_eq!(verts.len(), 18);
        assert!(verts.iter().all(|v| v.color == GREEN));
    }

    #[test]
    fn test_quad_extent() {
        let strokes = vec![Stroke {
            points: vec![Vec2::ZERO, Vec2::new(10.0, 0.0)],
            color: GREEN,
        }];
        let verts = stroke_quads(&strokes, 2.0);
        let xs: Vec<f32> = verts.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = verts.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), -1.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 11.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), -1.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 1.0);
    }

    #[test]
    fn test_degenerate_segment_skipped() {
        let strokes = vec![Stroke {
            points: vec![Vec2::ONE, Vec2::ONE],
            color: GREEN,
        }];
        assert!(stroke_quads(&strokes, 1.0).is_empty());
    }
}
