//! Rendering module
//!
//! The scene is drawn through the `Surface` / `TextRenderer` traits. A
//! `DisplayList` records it and the WebGPU line pipeline presents it.

#[cfg(target_arch = "wasm32")]
pub mod canvas_text;
pub mod display_list;
pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod surface;
pub mod vertex;

pub use display_list::{DisplayList, Stroke};
pub use pipeline::RenderState;
pub use scene::draw_frame;
pub use surface::{Align, Rgba, Surface, TextRenderer, draw_string};
