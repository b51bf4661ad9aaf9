//! Drawing interfaces the scene is drawn through

use glam::Vec2;

/// RGBA color, components in 0..=1
pub type Rgba = [f32; 4];

/// Path-and-transform drawing target, modeled on a 2D canvas context.
/// Coordinates are pixels with y pointing down.
pub trait Surface {
    /// Fill the whole surface with `color`, discarding earlier drawing
    fn clear(&mut self, color: Rgba);
    fn set_stroke_color(&mut self, color: Rgba);

    /// Push the current transform
    fn save(&mut self);
    /// Pop back to the last saved transform
    fn restore(&mut self);
    fn translate(&mut self, offset: Vec2);
    fn rotate(&mut self, angle: f32);

    fn begin_path(&mut self);
    fn move_to(&mut self, point: Vec2);
    fn line_to(&mut self, point: Vec2);
    /// Outline the current path
    fn stroke(&mut self);
}

/// Optional text output. Hosts without text support simply don't provide one.
pub trait TextRenderer {
    fn set_fill_color(&mut self, color: Rgba);
    /// Width of `text` in pixels
    fn measure_text(&mut self, text: &str) -> f32;
    /// Draw `text` with its baseline-left corner at `pos`
    fn fill_text(&mut self, text: &str, pos: Vec2);
}

/// Horizontal anchoring for `draw_string`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// Draw `text` anchored at `pos`
pub fn draw_string(text_out: &mut dyn TextRenderer, pos: Vec2, text: &str, align: Align) {
    let x = match align {
        Align::Left => pos.x,
        Align::Center => pos.x - text_out.measure_text(text) / 2.0,
        Align::Right => pos.x - text_out.measure_text(text),
    };
    text_out.fill_text(text, Vec2::new(x, pos.y));
}
