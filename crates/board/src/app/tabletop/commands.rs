use engine::{Color, Key, Modifiers};

use super::{TOKEN_BLUE, TOKEN_GREEN, TOKEN_RED};

/// Board-level actions bound to keys while no label is being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BoardCommand {
    Spawn(Color),
    ClearScene,
    DeleteSelection,
    RollDice,
    SetMultiplier(u8),
}

impl BoardCommand {
    pub(crate) fn from_key(key: Key, modifiers: Modifiers) -> Option<Self> {
        match key {
            Key::Char('c') if modifiers.ctrl => Some(BoardCommand::ClearScene),
            Key::Char('r') => Some(BoardCommand::Spawn(TOKEN_RED)),
            Key::Char('g') => Some(BoardCommand::Spawn(TOKEN_GREEN)),
            Key::Char('b') => Some(BoardCommand::Spawn(TOKEN_BLUE)),
            Key::Delete | Key::Backspace => Some(BoardCommand::DeleteSelection),
            Key::Space | Key::Char('d') => Some(BoardCommand::RollDice),
            _ => key.digit().map(BoardCommand::SetMultiplier),
        }
    }
}

/// Actions while the selected token's label is being edited. Every key is consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EditingCommand {
    Finish,
    ClearLabel,
    DeleteToken,
    Append(char),
    Ignore,
}

impl EditingCommand {
    pub(crate) fn from_key(key: Key) -> Self {
        match key {
            Key::Enter | Key::Escape => EditingCommand::Finish,
            Key::Delete => EditingCommand::ClearLabel,
            Key::Backspace => EditingCommand::DeleteToken,
            other => other.as_char().map_or(EditingCommand::Ignore, EditingCommand::Append),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_keys_spawn_tokens() {
        assert_eq!(
            BoardCommand::from_key(Key::Char('r'), Modifiers::NONE),
            Some(BoardCommand::Spawn(Color::rgb(255, 0, 0)))
        );
        assert_eq!(
            BoardCommand::from_key(Key::Char('g'), Modifiers::NONE),
            Some(BoardCommand::Spawn(Color::rgb(0, 255, 0)))
        );
        assert_eq!(
            BoardCommand::from_key(Key::Char('b'), Modifiers::NONE),
            Some(BoardCommand::Spawn(Color::rgb(0, 0, 255)))
        );
    }

    #[test]
    fn clear_requires_ctrl() {
        assert_eq!(
            BoardCommand::from_key(Key::Char('c'), Modifiers::CTRL),
            Some(BoardCommand::ClearScene)
        );
        assert_eq!(BoardCommand::from_key(Key::Char('c'), Modifiers::NONE), None);
    }

    #[test]
    fn delete_and_backspace_both_delete_selection() {
        for key in [Key::Delete, Key::Backspace] {
            assert_eq!(
                BoardCommand::from_key(key, Modifiers::NONE),
                Some(BoardCommand::DeleteSelection)
            );
        }
    }

    #[test]
    fn space_and_d_roll() {
        for key in [Key::Space, Key::Char('d')] {
            assert_eq!(
                BoardCommand::from_key(key, Modifiers::NONE),
                Some(BoardCommand::RollDice)
            );
        }
    }

    #[test]
    fn digits_set_multiplier_including_zero() {
        assert_eq!(
            BoardCommand::from_key(Key::Char('0'), Modifiers::NONE),
            Some(BoardCommand::SetMultiplier(0))
        );
        assert_eq!(
            BoardCommand::from_key(Key::Char('9'), Modifiers::NONE),
            Some(BoardCommand::SetMultiplier(9))
        );
    }

    #[test]
    fn unbound_keys_produce_no_command() {
        for key in [Key::Char('x'), Key::Enter, Key::Escape, Key::Other] {
            assert_eq!(BoardCommand::from_key(key, Modifiers::NONE), None);
        }
    }

    #[test]
    fn editing_keys_map_to_editing_commands() {
        assert_eq!(EditingCommand::from_key(Key::Enter), EditingCommand::Finish);
        assert_eq!(EditingCommand::from_key(Key::Escape), EditingCommand::Finish);
        assert_eq!(EditingCommand::from_key(Key::Delete), EditingCommand::ClearLabel);
        assert_eq!(
            EditingCommand::from_key(Key::Backspace),
            EditingCommand::DeleteToken
        );
        assert_eq!(
            EditingCommand::from_key(Key::Char('r')),
            EditingCommand::Append('r')
        );
        assert_eq!(EditingCommand::from_key(Key::Space), EditingCommand::Ignore);
    }
}
