use winit::keyboard::KeyCode;

use super::Vec2;

/// Normalized input stream handed to the active scene, in arrival order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Quit,
    KeyDown { key: Key, modifiers: Modifiers },
    PointerDown { button: PointerButton, position: Vec2 },
    PointerUp { button: PointerButton, position: Vec2 },
    PointerMove { position: Vec2 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// ASCII letter (always lower-case) or digit.
    Char(char),
    Space,
    Enter,
    Escape,
    Delete,
    Backspace,
    Other,
}

impl Key {
    pub fn as_char(self) -> Option<char> {
        match self {
            Key::Char(ch) => Some(ch),
            _ => None,
        }
    }

    pub fn digit(self) -> Option<u8> {
        match self {
            Key::Char(ch) => ch.to_digit(10).map(|value| value as u8),
            _ => None,
        }
    }

    pub(crate) fn from_key_code(code: KeyCode) -> Key {
        match code {
            KeyCode::Space => Key::Space,
            KeyCode::Enter | KeyCode::NumpadEnter => Key::Enter,
            KeyCode::Escape => Key::Escape,
            KeyCode::Delete => Key::Delete,
            KeyCode::Backspace => Key::Backspace,
            other => letter_or_digit(other).map_or(Key::Other, Key::Char),
        }
    }
}

fn letter_or_digit(code: KeyCode) -> Option<char> {
    let ch = match code {
        KeyCode::KeyA => 'a',
        KeyCode::KeyB => 'b',
        KeyCode::KeyC => 'c',
        KeyCode::KeyD => 'd',
        KeyCode::KeyE => 'e',
        KeyCode::KeyF => 'f',
        KeyCode::KeyG => 'g',
        KeyCode::KeyH => 'h',
        KeyCode::KeyI => 'i',
        KeyCode::KeyJ => 'j',
        KeyCode::KeyK => 'k',
        KeyCode::KeyL => 'l',
        KeyCode::KeyM => 'm',
        KeyCode::KeyN => 'n',
        KeyCode::KeyO => 'o',
        KeyCode::KeyP => 'p',
        KeyCode::KeyQ => 'q',
        KeyCode::KeyR => 'r',
        KeyCode::KeyS => 's',
        KeyCode::KeyT => 't',
        KeyCode::KeyU => 'u',
        KeyCode::KeyV => 'v',
        KeyCode::KeyW => 'w',
        KeyCode::KeyX => 'x',
        KeyCode::KeyY => 'y',
        KeyCode::KeyZ => 'z',
        KeyCode::Digit0 | KeyCode::Numpad0 => '0',
        KeyCode::Digit1 | KeyCode::Numpad1 => '1',
        KeyCode::Digit2 | KeyCode::Numpad2 => '2',
        KeyCode::Digit3 | KeyCode::Numpad3 => '3',
        KeyCode::Digit4 | KeyCode::Numpad4 => '4',
        KeyCode::Digit5 | KeyCode::Numpad5 => '5',
        KeyCode::Digit6 | KeyCode::Numpad6 => '6',
        KeyCode::Digit7 | KeyCode::Numpad7 => '7',
        KeyCode::Digit8 | KeyCode::Numpad8 => '8',
        KeyCode::Digit9 | KeyCode::Numpad9 => '9',
        _ => return None,
    };
    Some(ch)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        shift: false,
        alt: false,
    };

    pub const CTRL: Modifiers = Modifiers {
        ctrl: true,
        shift: false,
        alt: false,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_map_to_lowercase_chars() {
        assert_eq!(Key::from_key_code(KeyCode::KeyA), Key::Char('a'));
        assert_eq!(Key::from_key_code(KeyCode::KeyZ), Key::Char('z'));
    }

    #[test]
    fn row_and_numpad_digits_share_a_key() {
        assert_eq!(Key::from_key_code(KeyCode::Digit7), Key::Char('7'));
        assert_eq!(Key::from_key_code(KeyCode::Numpad7), Key::Char('7'));
        assert_eq!(Key::Char('7').digit(), Some(7));
        assert_eq!(Key::Char('x').digit(), None);
    }

    #[test]
    fn control_keys_have_named_variants() {
        assert_eq!(Key::from_key_code(KeyCode::Enter), Key::Enter);
        assert_eq!(Key::from_key_code(KeyCode::NumpadEnter), Key::Enter);
        assert_eq!(Key::from_key_code(KeyCode::Escape), Key::Escape);
        assert_eq!(Key::from_key_code(KeyCode::Delete), Key::Delete);
        assert_eq!(Key::from_key_code(KeyCode::Backspace), Key::Backspace);
        assert_eq!(Key::from_key_code(KeyCode::Space), Key::Space);
    }

    #[test]
    fn unmapped_keys_are_other() {
        assert_eq!(Key::from_key_code(KeyCode::F3), Key::Other);
        assert_eq!(Key::from_key_code(KeyCode::Comma), Key::Other);
        assert_eq!(Key::Other.as_char(), None);
    }
}
