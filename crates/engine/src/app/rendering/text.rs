use super::raster::write_pixel_rgba_clipped;
use super::TextSize;

const GLYPH_WIDTH: i32 = 3;
const GLYPH_HEIGHT: i32 = 5;

impl TextSize {
    /// Pixels per font cell. Sized so a 45 px board unit gets roughly 3/4 and 1/2 unit text.
    const fn scale(self) -> i32 {
        match self {
            TextSize::Regular => 6,
            TextSize::Small => 4,
        }
    }

    const fn advance(self) -> i32 {
        (GLYPH_WIDTH + 1) * self.scale()
    }
}

pub(super) fn measure_text(text: &str, size: TextSize) -> (u32, u32) {
    let chars = text.chars().count() as i32;
    if chars == 0 {
        return (0, 0);
    }
    let width = chars * size.advance() - size.scale();
    let height = GLYPH_HEIGHT * size.scale();
    (width as u32, height as u32)
}

/// Draws caps-only text. Lower-case letters are folded to upper-case; characters without a glyph
/// leave a blank cell.
#[allow(clippy::too_many_arguments)]
pub(super) fn draw_text_clipped(
    frame: &mut [u8],
    width: u32,
    height: u32,
    mut x: i32,
    y: i32,
    text: &str,
    size: TextSize,
    color: [u8; 4],
) -> (u32, u32) {
    if width > 0 && height > 0 {
        for ch in text.chars() {
            if let Some(rows) = glyph_rows(ch) {
                draw_glyph_clipped(frame, width, height, x, y, rows, size.scale(), color);
            }
            x += size.advance();
        }
    }
    measure_text(text, size)
}

#[allow(clippy::too_many_arguments)]
fn draw_glyph_clipped(
    frame: &mut [u8],
    width: u32,
    height: u32,
    x: i32,
    y: i32,
    rows: [u8; GLYPH_HEIGHT as usize],
    scale: i32,
    color: [u8; 4],
) {
    for (row_index, row_bits) in rows.iter().enumerate() {
        let glyph_y = y + row_index as i32 * scale;
        for col in 0..GLYPH_WIDTH {
            if (row_bits & (1 << (GLYPH_WIDTH - 1 - col))) == 0 {
                continue;
            }
            let glyph_x = x + col * scale;
            for sy in 0..scale {
                let pixel_y = glyph_y + sy;
                if pixel_y < 0 || pixel_y >= height as i32 {
                    continue;
                }
                for sx in 0..scale {
                    write_pixel_rgba_clipped(frame, width as usize, glyph_x + sx, pixel_y, color);
                }
            }
        }
    }
}

fn glyph_rows(ch: char) -> Option<[u8; GLYPH_HEIGHT as usize]> {
    let rows = match ch.to_ascii_uppercase() {
        'A' => [0b010, 0b101, 0b111, 0b101, 0b101],
        'B' => [0b110, 0b101, 0b110, 0b101, 0b110],
        'C' => [0b111, 0b100, 0b100, 0b100, 0b111],
        'D' => [0b110, 0b101, 0b101, 0b101, 0b110],
        'E' => [0b111, 0b100, 0b110, 0b100, 0b111],
        'F' => [0b111, 0b100, 0b110, 0b100, 0b100],
        'G' => [0b111, 0b100, 0b101, 0b101, 0b111],
        'H' => [0b101, 0b101, 0b111, 0b101, 0b101],
        'I' => [0b111, 0b010, 0b010, 0b010, 0b111],
        'J' => [0b111, 0b001, 0b001, 0b101, 0b111],
        'K' => [0b101, 0b101, 0b110, 0b101, 0b101],
        'L' => [0b100, 0b100, 0b100, 0b100, 0b111],
        'M' => [0b101, 0b111, 0b111, 0b101, 0b101],
        'N' => [0b101, 0b111, 0b111, 0b111, 0b101],
        'O' => [0b111, 0b101, 0b101, 0b101, 0b111],
        'P' => [0b110, 0b101, 0b110, 0b100, 0b100],
        'Q' => [0b111, 0b101, 0b101, 0b111, 0b001],
        'R' => [0b110, 0b101, 0b110, 0b101, 0b101],
        'S' => [0b111, 0b100, 0b111, 0b001, 0b111],
        'T' => [0b111, 0b010, 0b010, 0b010, 0b010],
        'U' => [0b101, 0b101, 0b101, 0b101, 0b111],
        'V' => [0b101, 0b101, 0b101, 0b101, 0b010],
        'W' => [0b101, 0b101, 0b111, 0b111, 0b101],
        'X' => [0b101, 0b101, 0b010, 0b101, 0b101],
        'Y' => [0b101, 0b101, 0b010, 0b010, 0b010],
        'Z' => [0b111, 0b001, 0b010, 0b100, 0b111],
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b010, 0b010, 0b010],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],
        '.' => [0b000, 0b000, 0b000, 0b000, 0b010],
        ',' => [0b000, 0b000, 0b000, 0b010, 0b100],
        '"' => [0b101, 0b101, 0b000, 0b000, 0b000],
        '-' => [0b000, 0b000, 0b111, 0b000, 0b000],
        ':' => [0b000, 0b010, 0b000, 0b010, 0b000],
        _ => return None,
    };
    Some(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    const INK: [u8; 4] = [0, 0, 0, 255];

    #[test]
    fn board_readout_characters_all_have_glyphs() {
        for ch in "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789.,\"".chars() {
            assert!(glyph_rows(ch).is_some(), "missing glyph for '{ch}'");
        }
    }

    #[test]
    fn lowercase_folds_to_uppercase_glyph() {
        assert_eq!(glyph_rows('q'), glyph_rows('Q'));
    }

    #[test]
    fn measure_drops_trailing_gap() {
        assert_eq!(measure_text("", TextSize::Regular), (0, 0));
        assert_eq!(measure_text("1", TextSize::Regular), (18, 30));
        assert_eq!(measure_text("12", TextSize::Regular), (42, 30));
        assert_eq!(measure_text("AB", TextSize::Small), (28, 20));
    }

    #[test]
    fn unknown_character_draws_nothing_but_keeps_its_cell() {
        let mut frame = vec![0u8; 64 * 32 * 4];
        let extent = draw_text_clipped(&mut frame, 64, 32, 0, 0, "\u{1f642}", TextSize::Small, INK);
        assert!(frame.iter().all(|byte| *byte == 0));
        assert_eq!(extent, (12, 20));
    }

    #[test]
    fn draw_reports_measured_extent() {
        let mut frame = vec![0u8; 128 * 64 * 4];
        let extent = draw_text_clipped(&mut frame, 128, 64, 2, 2, "4,6", TextSize::Regular, INK);
        assert_eq!(extent, measure_text("4,6", TextSize::Regular));
        assert!(frame.chunks_exact(4).any(|px| px == INK));
    }

    #[test]
    fn clipped_draws_never_write_out_of_bounds() {
        let mut frame = vec![0u8; 8 * 8 * 4];
        draw_text_clipped(&mut frame, 8, 8, -5, -5, "XYZ", TextSize::Regular, INK);
        draw_text_clipped(&mut frame, 8, 8, 64, 64, "XYZ", TextSize::Regular, INK);
        let mut tiny = vec![];
        draw_text_clipped(&mut tiny, 0, 8, 0, 0, "A", TextSize::Small, INK);
        assert_eq!(frame.len(), 8 * 8 * 4);
    }
}
