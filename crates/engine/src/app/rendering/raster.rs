use crate::app::Vec2;

pub(super) fn fill_rgba(frame: &mut [u8], color: [u8; 4]) {
    for chunk in frame.chunks_exact_mut(4) {
        chunk.copy_from_slice(&color);
    }
}

pub(super) fn write_pixel_rgba_clipped(
    frame: &mut [u8],
    width: usize,
    x: i32,
    y: i32,
    color: [u8; 4],
) {
    if x < 0 || y < 0 || x as usize >= width {
        return;
    }
    let x = x as usize;
    let y = y as usize;
    let Some(pixel_offset) = y.checked_mul(width).and_then(|row| row.checked_add(x)) else {
        return;
    };
    let Some(byte_offset) = pixel_offset.checked_mul(4) else {
        return;
    };
    let Some(end) = byte_offset.checked_add(4) else {
        return;
    };
    if end > frame.len() {
        return;
    }
    frame[byte_offset..end].copy_from_slice(&color);
}

/// Inclusive pixel range covering `[min, max]`, clamped to `[0, limit)`.
fn clamped_span(min: f32, max: f32, limit: u32) -> Option<(i32, i32)> {
    if limit == 0 || !min.is_finite() || !max.is_finite() {
        return None;
    }
    let start = (min.floor() as i32).max(0);
    let end = (max.ceil() as i32).min(limit as i32 - 1);
    (start <= end).then_some((start, end))
}

pub(super) fn draw_filled_circle(
    frame: &mut [u8],
    width: u32,
    height: u32,
    center: Vec2,
    radius: f32,
    color: [u8; 4],
) {
    if radius <= 0.0 {
        return;
    }
    let Some((x_start, x_end)) = clamped_span(center.x - radius, center.x + radius, width) else {
        return;
    };
    let Some((y_start, y_end)) = clamped_span(center.y - radius, center.y + radius, height) else {
        return;
    };

    let radius_sq = radius * radius;
    for y in y_start..=y_end {
        let dy = y as f32 + 0.5 - center.y;
        for x in x_start..=x_end {
            let dx = x as f32 + 0.5 - center.x;
            if dx * dx + dy * dy <= radius_sq {
                write_pixel_rgba_clipped(frame, width as usize, x, y, color);
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
pub(super) fn draw_thick_line(
    frame: &mut [u8],
    width: u32,
    height: u32,
    from: Vec2,
    to: Vec2,
    thickness: f32,
    color: [u8; 4],
) {
    let half = (thickness * 0.5).max(0.5);
    let Some((x_start, x_end)) = clamped_span(from.x.min(to.x) - half, from.x.max(to.x) + half, width)
    else {
        return;
    };
    let Some((y_start, y_end)) =
        clamped_span(from.y.min(to.y) - half, from.y.max(to.y) + half, height)
    else {
        return;
    };

    for y in y_start..=y_end {
        for x in x_start..=x_end {
            let pixel = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            if distance_to_segment(pixel, from, to) <= half {
                write_pixel_rgba_clipped(frame, width as usize, x, y, color);
            }
        }
    }
}

fn distance_to_segment(point: Vec2, a: Vec2, b: Vec2) -> f32 {
    let seg_x = b.x - a.x;
    let seg_y = b.y - a.y;
    let len_sq = seg_x * seg_x + seg_y * seg_y;
    if len_sq <= f32::EPSILON {
        return point.distance(a);
    }
    let t = (((point.x - a.x) * seg_x + (point.y - a.y) * seg_y) / len_sq).clamp(0.0, 1.0);
    point.distance(Vec2::new(a.x + seg_x * t, a.y + seg_y * t))
}
