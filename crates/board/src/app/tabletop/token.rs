use engine::{Color, Vec2};

use super::HALF_UNIT_PX;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct TokenId(pub(crate) u64);

#[derive(Debug, Default)]
pub(crate) struct TokenIdAllocator {
    next: u64,
}

impl TokenIdAllocator {
    pub(crate) fn allocate(&mut self) -> TokenId {
        let id = TokenId(self.next);
        self.next = self.next.saturating_add(1);
        id
    }
}

/// A colored marker on the board. Its footprint for picking is one board unit square.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Token {
    id: TokenId,
    position: Vec2,
    color: Color,
    label: String,
}

impl Token {
    pub(crate) fn new(id: TokenId, color: Color, position: Vec2) -> Self {
        Self {
            id,
            position,
            color,
            label: String::new(),
        }
    }

    pub(crate) fn id(&self) -> TokenId {
        self.id
    }

    pub(crate) fn position(&self) -> Vec2 {
        self.position
    }

    pub(crate) fn color(&self) -> Color {
        self.color
    }

    pub(crate) fn label(&self) -> &str {
        &self.label
    }

    pub(crate) fn display_label(&self) -> String {
        self.label().to_ascii_uppercase()
    }

    pub(crate) fn radius(&self) -> f32 {
        HALF_UNIT_PX
    }

    /// Points exactly on the square's edge are outside.
    pub(crate) fn hit_test(&self, point: Vec2) -> bool {
        point.x > self.position.x - HALF_UNIT_PX
            && point.x < self.position.x + HALF_UNIT_PX
            && point.y > self.position.y - HALF_UNIT_PX
            && point.y < self.position.y + HALF_UNIT_PX
    }

    pub(crate) fn move_to(&mut self, point: Vec2) {
        self.position = point;
    }

    /// Returns whether the character was accepted.
    pub(crate) fn append_to_label(&mut self, ch: char) -> bool {
        if !ch.is_ascii_alphanumeric() {
            return false;
        }
        self.label.push(ch);
        true
    }

    pub(crate) fn clear_label(&mut self) {
        self.label.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_at(x: f32, y: f32) -> Token {
        Token::new(TokenId(0), Color::rgb(255, 0, 0), Vec2::new(x, y))
    }

    #[test]
    fn allocator_never_reuses_ids() {
        let mut allocator = TokenIdAllocator::default();
        let first = allocator.allocate();
        let second = allocator.allocate();
        assert_eq!(first, TokenId(0));
        assert_eq!(second, TokenId(1));
    }

    #[test]
    fn hit_test_accepts_points_strictly_inside() {
        let token = token_at(100.0, 100.0);
        assert!(token.hit_test(Vec2::new(100.0, 100.0)));
        assert!(token.hit_test(Vec2::new(122.4, 77.6)));
        assert!(token.hit_test(Vec2::new(77.6, 122.4)));
    }

    #[test]
    fn hit_test_rejects_boundary_points() {
        let token = token_at(100.0, 100.0);
        assert!(!token.hit_test(Vec2::new(122.5, 100.0)));
        assert!(!token.hit_test(Vec2::new(77.5, 100.0)));
        assert!(!token.hit_test(Vec2::new(100.0, 122.5)));
        assert!(!token.hit_test(Vec2::new(100.0, 77.5)));
        assert!(!token.hit_test(Vec2::new(122.5, 122.5)));
    }

    #[test]
    fn hit_test_rejects_points_outside() {
        let token = token_at(100.0, 100.0);
        assert!(!token.hit_test(Vec2::new(200.0, 100.0)));
        assert!(!token.hit_test(Vec2::new(100.0, -5.0)));
    }

    #[test]
    fn hit_test_covers_square_corners_outside_the_circle() {
        let token = token_at(100.0, 100.0);
        assert!(token.hit_test(Vec2::new(121.0, 121.0)));
    }

    #[test]
    fn move_to_repositions_without_clamping() {
        let mut token = token_at(0.0, 0.0);
        token.move_to(Vec2::new(-40.0, 9000.0));
        assert_eq!(token.position(), Vec2::new(-40.0, 9000.0));
        assert!(token.hit_test(Vec2::new(-40.0, 9000.0)));
    }

    #[test]
    fn append_accepts_letters_and_digits() {
        let mut token = token_at(0.0, 0.0);
        assert!(token.append_to_label('o'));
        assert!(token.append_to_label('r'));
        assert!(token.append_to_label('c'));
        assert!(token.append_to_label('2'));
        assert_eq!(token.label(), "orc2");
        assert_eq!(token.display_label(), "ORC2");
    }

    #[test]
    fn append_ignores_non_alphanumeric() {
        let mut token = token_at(0.0, 0.0);
        token.append_to_label('a');
        for ch in [' ', '-', '!', '\n', 'é'] {
            assert!(!token.append_to_label(ch));
        }
        assert_eq!(token.label(), "a");
    }

    #[test]
    fn clear_label_resets_to_empty() {
        let mut token = token_at(0.0, 0.0);
        token.append_to_label('x');
        token.clear_label();
        assert_eq!(token.label(), "");
    }
}
