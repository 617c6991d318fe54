//! Keyboard input handling
//!
//! Maps crossterm key events to [`KeyAction`]s. The mapping is pure; the
//! app decides what each action does.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::operand::is_operand_char;
use crate::core::Operation;

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Insert a character into the focused operand
    InsertChar(char),
    /// Delete the last character of the focused operand
    Backspace,
    /// Apply an operation to both operands
    Apply(Operation),
    /// Reset operands and result
    Clear,
    /// Move focus to the next operand field
    FocusNext,
    /// Move focus to the previous operand field
    FocusPrevious,
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        if kind == KeyEventKind::Release {
            return KeyAction::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                KeyCode::Char('l') => KeyAction::Clear,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char(c) if is_operand_char(c) => KeyAction::InsertChar(c),
            KeyCode::Char(c) => Self::char_action(c),
            KeyCode::Backspace => KeyAction::Backspace,
            KeyCode::Tab | KeyCode::Down | KeyCode::Enter => KeyAction::FocusNext,
            KeyCode::BackTab | KeyCode::Up => KeyAction::FocusPrevious,
            KeyCode::Esc => KeyAction::Clear,
            _ => KeyAction::None,
        }
    }

    fn char_action(c: char) -> KeyAction {
        match c {
            '+' => KeyAction::Apply(Operation::Add),
            '-' => KeyAction::Apply(Operation::Subtract),
            '*' | 'x' | 'X' => KeyAction::Apply(Operation::Multiply),
            '/' => KeyAction::Apply(Operation::Divide),
            'c' | 'C' => KeyAction::Clear,
            'q' => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }
}
