use std::time::Instant;

use engine::{Canvas, Color, InputEvent, Key, Modifiers, PointerButton, Scene, TextSize, Vec2};
use rand::Rng;
use tracing::debug;

use super::commands::{BoardCommand, EditingCommand};
use super::overlay::{draw_roll, draw_ruler, draw_text_centered, roll_readout, RulerReadout};
use super::token::{Token, TokenId, TokenIdAllocator};
use super::{DEFAULT_MULTIPLIER, DIE_SIDES, DOUBLE_CLICK_WINDOW, TOKEN_SPAWN_POSITION};

/// Pointer/keyboard interaction state. The ruler anchor is tracked separately, so a measurement
/// stays on screen whatever the mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum InteractionMode {
    #[default]
    Idle,
    Dragging,
    Editing,
    Measuring,
}

/// The whole board: tokens in draw order (last on top), selection, dice and ruler state.
pub(crate) struct TabletopScene<R> {
    tokens: Vec<Token>,
    token_ids: TokenIdAllocator,
    selection: Option<TokenId>,
    mode: InteractionMode,
    ruler_anchor: Option<Vec2>,
    roll_values: Vec<u8>,
    multiplier: u8,
    last_click: Option<Instant>,
    pointer: Vec2,
    rng: R,
}

impl<R: Rng> TabletopScene<R> {
    pub(crate) fn new(rng: R) -> Self {
        Self {
            tokens: Vec::new(),
            token_ids: TokenIdAllocator::default(),
            selection: None,
            mode: InteractionMode::Idle,
            ruler_anchor: None,
            roll_values: Vec::new(),
            multiplier: DEFAULT_MULTIPLIER,
            last_click: None,
            pointer: Vec2::default(),
            rng,
        }
    }

    fn selected_token_mut(&mut self) -> Option<&mut Token> {
        let id = self.selection?;
        self.tokens.iter_mut().find(|token| token.id() == id)
    }

    pub(crate) fn ruler_readout(&self) -> Option<RulerReadout> {
        self.ruler_anchor
            .map(|anchor| RulerReadout::measure(anchor, self.pointer))
    }

    pub(crate) fn roll_readout(&self) -> String {
        roll_readout(&self.roll_values)
    }

    pub(crate) fn clear(&mut self) {
        self.tokens.clear();
        self.selection = None;
        self.mode = InteractionMode::Idle;
        self.ruler_anchor = None;
        self.roll_values.clear();
        self.multiplier = DEFAULT_MULTIPLIER;
        self.last_click = None;
        debug!("scene_cleared");
    }

    pub(crate) fn spawn_token(&mut self, color: Color) -> TokenId {
        let id = self.token_ids.allocate();
        self.tokens.push(Token::new(id, color, TOKEN_SPAWN_POSITION));
        debug!(token = id.0, ?color, token_count = self.tokens.len(), "token_spawned");
        id
    }

    /// Removes the selected token. Returns false when nothing was selected.
    pub(crate) fn delete_selection(&mut self) -> bool {
        let Some(id) = self.selection.take() else {
            return false;
        };
        if self.mode == InteractionMode::Editing {
            self.mode = InteractionMode::Idle;
        }
        let Some(index) = self.tokens.iter().position(|token| token.id() == id) else {
            return false;
        };
        self.tokens.remove(index);
        debug!(token = id.0, token_count = self.tokens.len(), "token_deleted");
        true
    }

    pub(crate) fn roll_dice(&mut self) {
        let count = self.multiplier;
        self.roll_values = (0..count)
            .map(|_| self.rng.random_range(1..=DIE_SIDES))
            .collect();
        debug!(dice = count, values = ?self.roll_values, "dice_rolled");
    }

    /// Zero is passed through: the next roll is empty.
    pub(crate) fn set_multiplier(&mut self, multiplier: u8) {
        self.multiplier = multiplier.min(9);
        debug!(multiplier = self.multiplier, "multiplier_set");
    }

    /// Topmost token under `point`, or none. Replaces the current selection either way.
    pub(crate) fn select_at(&mut self, point: Vec2) -> Option<TokenId> {
        self.selection = self
            .tokens
            .iter()
            .rev()
            .find(|token| token.hit_test(point))
            .map(Token::id);
        if let Some(id) = self.selection {
            debug!(token = id.0, "token_selected");
        }
        self.selection
    }

    /// Every press restarts the window, including the one that completes a double click.
    fn register_click(&mut self, now: Instant) -> bool {
        let is_double = self
            .last_click
            .is_some_and(|last| now.saturating_duration_since(last) < DOUBLE_CLICK_WINDOW);
        self.last_click = Some(now);
        is_double
    }

    fn primary_pressed(&mut self, position: Vec2, now: Instant) {
        self.pointer = position;
        let hit = self.select_at(position);
        let is_double = self.register_click(now);
        if is_double && hit.is_some() {
            self.mode = InteractionMode::Editing;
            debug!(token = ?hit.map(|id| id.0), "editing_started");
        } else {
            self.mode = InteractionMode::Dragging;
        }
    }

    fn primary_released(&mut self) {
        if self.mode == InteractionMode::Dragging {
            self.mode = InteractionMode::Idle;
        }
    }

    fn pointer_moved(&mut self, position: Vec2) {
        self.pointer = position;
        if self.mode != InteractionMode::Dragging {
            return;
        }
        if let Some(token) = self.selected_token_mut() {
            token.move_to(position);
        }
    }

    fn secondary_pressed(&mut self, position: Vec2) {
        self.pointer = position;
        if self.ruler_anchor.is_some() {
            return;
        }
        self.ruler_anchor = Some(position);
        if self.mode == InteractionMode::Idle {
            self.mode = InteractionMode::Measuring;
        }
        debug!(x = position.x, y = position.y, "ruler_started");
    }

    fn secondary_released(&mut self, position: Vec2) {
        self.pointer = position;
        if self.ruler_anchor.take().is_some() {
            debug!("ruler_cleared");
        }
        if self.mode == InteractionMode::Measuring {
            self.mode = InteractionMode::Idle;
        }
    }

    fn key_pressed(&mut self, key: Key, modifiers: Modifiers) {
        if self.mode == InteractionMode::Editing {
            self.apply_editing_command(EditingCommand::from_key(key));
            return;
        }
        if let Some(command) = BoardCommand::from_key(key, modifiers) {
            self.apply_board_command(command);
        }
    }

    fn apply_board_command(&mut self, command: BoardCommand) {
        match command {
            BoardCommand::Spawn(color) => {
                self.spawn_token(color);
            }
            BoardCommand::ClearScene => self.clear(),
            BoardCommand::DeleteSelection => {
                self.delete_selection();
            }
            BoardCommand::RollDice => self.roll_dice(),
            BoardCommand::SetMultiplier(multiplier) => self.set_multiplier(multiplier),
        }
    }

    fn apply_editing_command(&mut self, command: EditingCommand) {
        match command {
            EditingCommand::Finish => {
                self.mode = InteractionMode::Idle;
                let finished = self.selection.take();
                debug!(token = ?finished.map(|id| id.0), "editing_finished");
            }
            EditingCommand::ClearLabel => {
                if let Some(token) = self.selected_token_mut() {
                    token.clear_label();
                }
            }
            EditingCommand::DeleteToken => {
                self.delete_selection();
            }
            EditingCommand::Append(ch) => {
                if let Some(token) = self.selected_token_mut() {
                    token.append_to_label(ch);
                }
            }
            EditingCommand::Ignore => {}
        }
    }

    fn draw_token(canvas: &mut dyn Canvas, token: &Token) {
        canvas.draw_circle(token.position(), token.radius(), token.color());
        draw_text_centered(
            canvas,
            &token.display_label(),
            token.position(),
            TextSize::Small,
        );
    }
}

#[cfg(test)]
impl<R: Rng> TabletopScene<R> {
    pub(crate) fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub(crate) fn selection(&self) -> Option<TokenId> {
        self.selected_token().map(Token::id)
    }

    pub(crate) fn selected_token(&self) -> Option<&Token> {
        let id = self.selection?;
        self.tokens.iter().find(|token| token.id() == id)
    }

    pub(crate) fn mode(&self) -> InteractionMode {
        self.mode
    }

    pub(crate) fn ruler_anchor(&self) -> Option<Vec2> {
        self.ruler_anchor
    }

    pub(crate) fn roll_values(&self) -> &[u8] {
        &self.roll_values
    }

    pub(crate) fn multiplier(&self) -> u8 {
        self.multiplier
    }
}

impl<R: Rng> Scene for TabletopScene<R> {
    fn handle_event(&mut self, event: &InputEvent, now: Instant) {
        match *event {
            InputEvent::Quit => {}
            InputEvent::KeyDown { key, modifiers } => self.key_pressed(key, modifiers),
            InputEvent::PointerDown { button, position } => match button {
                PointerButton::Primary => self.primary_pressed(position, now),
                PointerButton::Secondary => self.secondary_pressed(position),
                PointerButton::Middle => self.pointer = position,
            },
            InputEvent::PointerUp { button, position } => match button {
                PointerButton::Primary => {
                    self.pointer = position;
                    self.primary_released();
                }
                PointerButton::Secondary => self.secondary_released(position),
                PointerButton::Middle => self.pointer = position,
            },
            InputEvent::PointerMove { position } => self.pointer_moved(position),
        }
    }

    fn render(&self, canvas: &mut dyn Canvas) {
        canvas.draw_background();
        for token in &self.tokens {
            Self::draw_token(canvas, token);
        }
        if let Some(readout) = self.ruler_readout() {
            draw_ruler(canvas, &readout);
        }
        draw_roll(canvas, &self.roll_readout());
    }

    fn title(&self) -> Option<String> {
        let editing = if self.mode == InteractionMode::Editing {
            " - editing"
        } else {
            ""
        };
        Some(format!("Board - {}d{DIE_SIDES}{editing}", self.multiplier))
    }
}
