mod background;
mod raster;
mod renderer;
mod text;

pub use background::{Background, BackgroundError, BackgroundSource};
pub use renderer::Renderer;

use super::{Color, Vec2};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextSize {
    Regular,
    Small,
}

/// Drawing surface handed to `Scene::render`. Every primitive clips to the frame.
pub trait Canvas {
    fn size(&self) -> (u32, u32);
    fn draw_background(&mut self);
    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color, thickness: f32);
    fn measure_text(&self, text: &str, size: TextSize) -> (u32, u32);
    /// Draws `text` with its top-left corner at `top_left` and returns the drawn extent.
    fn draw_text(&mut self, text: &str, top_left: Vec2, size: TextSize, color: Color) -> (u32, u32);
}
