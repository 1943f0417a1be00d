use std::time::Instant;

use super::input::InputEvent;
use super::rendering::Canvas;

/// Screen-space position in window pixels, origin at the top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Vec2) -> f32 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    pub fn midpoint(self, other: Vec2) -> Vec2 {
        Vec2 {
            x: (self.x + other.x) * 0.5,
            y: (self.y + other.y) * 0.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub(crate) const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

/// A scene owns all interactive state. The loop feeds it normalized input one event at a time,
/// then asks it to draw itself once per frame.
pub trait Scene {
    fn handle_event(&mut self, event: &InputEvent, now: Instant);
    fn render(&self, canvas: &mut dyn Canvas);
    fn title(&self) -> Option<String> {
        None
    }
}
