use std::sync::Arc;

use pixels::{Error, Pixels, SurfaceTexture};
use winit::window::Window;

use crate::app::{Color, Vec2};

use super::raster::{draw_filled_circle, draw_thick_line};
use super::text::{draw_text_clipped, measure_text};
use super::{Background, Canvas, TextSize};

pub struct Renderer {
    window: Arc<Window>,
    pixels: Pixels<'static>,
    width: u32,
    height: u32,
    background: Background,
    background_rgba: Vec<u8>,
}

impl Renderer {
    pub fn new(window: Arc<Window>, background: Background) -> Result<Self, Error> {
        let size = window.inner_size();
        let pixels = Self::build_pixels(Arc::clone(&window), size.width, size.height)?;
        let background_rgba = background.rasterize(size.width, size.height);
        Ok(Self {
            window,
            pixels,
            width: size.width,
            height: size.height,
            background,
            background_rgba,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), Error> {
        if width == 0 || height == 0 {
            return Ok(());
        }
        self.pixels = Self::build_pixels(Arc::clone(&self.window), width, height)?;
        self.width = width;
        self.height = height;
        self.background_rgba = self.background.rasterize(width, height);
        Ok(())
    }

    fn build_pixels(
        window: Arc<Window>,
        width: u32,
        height: u32,
    ) -> Result<Pixels<'static>, Error> {
        let surface = SurfaceTexture::new(width, height, window);
        Pixels::new(width, height, surface)
    }

    pub fn present(&self) -> Result<(), Error> {
        self.pixels.render()
    }
}

impl Canvas for Renderer {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn draw_background(&mut self) {
        let frame = self.pixels.frame_mut();
        if frame.len() == self.background_rgba.len() {
            frame.copy_from_slice(&self.background_rgba);
        }
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        let (width, height) = (self.width, self.height);
        draw_filled_circle(
            self.pixels.frame_mut(),
            width,
            height,
            center,
            radius,
            color.to_rgba(),
        );
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color, thickness: f32) {
        let (width, height) = (self.width, self.height);
        draw_thick_line(
            self.pixels.frame_mut(),
            width,
            height,
            from,
            to,
            thickness,
            color.to_rgba(),
        );
    }

    fn measure_text(&self, text: &str, size: TextSize) -> (u32, u32) {
        measure_text(text, size)
    }

    fn draw_text(&mut self, text: &str, top_left: Vec2, size: TextSize, color: Color) -> (u32, u32) {
        let (width, height) = (self.width, self.height);
        draw_text_clipped(
            self.pixels.frame_mut(),
            width,
            height,
            top_left.x.round() as i32,
            top_left.y.round() as i32,
            text,
            size,
            color.to_rgba(),
        )
    }
}
