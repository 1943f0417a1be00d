use std::time::Duration;

use engine::{Color, Vec2};

mod commands;
mod overlay;
mod scene;
mod token;

pub(crate) use scene::TabletopScene;

/// Length of one board unit in window pixels. Token size, picking and ruler readout derive from it.
pub(crate) const BOARD_UNIT_PX: f32 = 45.0;
pub(crate) const HALF_UNIT_PX: f32 = BOARD_UNIT_PX * 0.5;
pub(crate) const BOARD_WIDTH_UNITS: u32 = 30;
pub(crate) const BOARD_HEIGHT_UNITS: u32 = 22;
pub(crate) const TOKEN_SPAWN_POSITION: Vec2 = Vec2::new(HALF_UNIT_PX, HALF_UNIT_PX);
pub(crate) const DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(500);
pub(crate) const DEFAULT_MULTIPLIER: u8 = 1;
pub(crate) const DIE_SIDES: u8 = 6;
pub(crate) const TOKEN_RED: Color = Color::rgb(255, 0, 0);
pub(crate) const TOKEN_GREEN: Color = Color::rgb(0, 255, 0);
pub(crate) const TOKEN_BLUE: Color = Color::rgb(0, 0, 255);
pub(crate) const RULER_COLOR: Color = Color::rgb(80, 190, 0);
pub(crate) const RULER_THICKNESS_PX: f32 = 5.0;

pub(crate) fn board_size_px() -> (u32, u32) {
    let unit = BOARD_UNIT_PX as u32;
    (BOARD_WIDTH_UNITS * unit, BOARD_HEIGHT_UNITS * unit)
}
