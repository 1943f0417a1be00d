use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::{ImageError, ImageReader, RgbaImage};
use thiserror::Error;

use super::raster::fill_rgba;
use crate::app::Color;

pub const DEFAULT_BACKGROUND_COLOR: Color = Color::rgb(250, 250, 250);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackgroundSource {
    Solid(Color),
    Image(PathBuf),
}

impl Default for BackgroundSource {
    fn default() -> Self {
        BackgroundSource::Solid(DEFAULT_BACKGROUND_COLOR)
    }
}

#[derive(Debug, Error)]
pub enum BackgroundError {
    #[error("failed to open background image {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode background image {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },
}

/// Decoded background, kept at source resolution and stretched to the viewport on demand.
#[derive(Debug, Clone)]
pub enum Background {
    Solid(Color),
    Image(RgbaImage),
}

impl Background {
    pub fn load(source: &BackgroundSource) -> Result<Self, BackgroundError> {
        match source {
            BackgroundSource::Solid(color) => Ok(Background::Solid(*color)),
            BackgroundSource::Image(path) => load_image_rgba(path).map(Background::Image),
        }
    }

    /// RGBA bytes covering exactly `width * height` pixels.
    pub fn rasterize(&self, width: u32, height: u32) -> Vec<u8> {
        let mut rgba = vec![0u8; width as usize * height as usize * 4];
        match self {
            Background::Solid(color) => fill_rgba(&mut rgba, color.to_rgba()),
            Background::Image(image) => {
                if width > 0 && height > 0 && image.width() > 0 && image.height() > 0 {
                    let scaled = image::imageops::resize(image, width, height, FilterType::Triangle);
                    rgba.copy_from_slice(scaled.as_raw());
                }
            }
        }
        rgba
    }
}

fn load_image_rgba(path: &Path) -> Result<RgbaImage, BackgroundError> {
    let open_error = |source| BackgroundError::Open {
        path: path.to_path_buf(),
        source,
    };
    let reader = ImageReader::open(path)
        .map_err(open_error)?
        .with_guessed_format()
        .map_err(open_error)?;
    let decoded = reader.decode().map_err(|source| BackgroundError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(decoded.to_rgba8())
}
