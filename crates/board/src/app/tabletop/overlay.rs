use engine::{Canvas, Color, TextSize, Vec2};

use super::{BOARD_UNIT_PX, RULER_COLOR, RULER_THICKNESS_PX};

/// Live measurement between the ruler anchor and the pointer.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RulerReadout {
    pub(crate) from: Vec2,
    pub(crate) to: Vec2,
    pub(crate) label: String,
    pub(crate) label_anchor: Vec2,
}

impl RulerReadout {
    pub(crate) fn measure(anchor: Vec2, pointer: Vec2) -> Self {
        let distance_units = anchor.distance(pointer) / BOARD_UNIT_PX;
        let midpoint = anchor.midpoint(pointer);
        Self {
            from: anchor,
            to: pointer,
            label: format!("{distance_units:.1}\""),
            label_anchor: Vec2::new(midpoint.x, midpoint.y - BOARD_UNIT_PX * 0.25),
        }
    }
}

pub(crate) fn roll_readout(values: &[u8]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

pub(crate) fn draw_ruler(canvas: &mut dyn Canvas, readout: &RulerReadout) {
    canvas.draw_line(readout.from, readout.to, RULER_COLOR, RULER_THICKNESS_PX);
    draw_text_centered(canvas, &readout.label, readout.label_anchor, TextSize::Regular);
}

/// Right-aligned one unit in from the top-right corner.
pub(crate) fn draw_roll(canvas: &mut dyn Canvas, readout: &str) {
    if readout.is_empty() {
        return;
    }
    let (canvas_width, _) = canvas.size();
    let (text_width, _) = canvas.measure_text(readout, TextSize::Regular);
    let top_left = Vec2::new(
        canvas_width as f32 - BOARD_UNIT_PX - text_width as f32,
        BOARD_UNIT_PX,
    );
    canvas.draw_text(readout, top_left, TextSize::Regular, Color::BLACK);
}

pub(crate) fn draw_text_centered(canvas: &mut dyn Canvas, text: &str, center: Vec2, size: TextSize) {
    if text.is_empty() {
        return;
    }
    let (width, height) = canvas.measure_text(text, size);
    let top_left = Vec2::new(
        center.x - width as f32 * 0.5,
        center.y - height as f32 * 0.5,
    );
    canvas.draw_text(text, top_left, size, Color::BLACK);
}
