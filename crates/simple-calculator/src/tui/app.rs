//! TUI application state
//!
//! Holds the two operand texts and the result text. Every mutation of an
//! operand goes through [`CalculatorApp::set_operand`], which filters the
//! text, so the stored operands only ever contain digits and one point.

use tracing::debug;

use super::input::KeyAction;
use super::keypad::{ButtonAction, Keypad};
use super::ui::ClickTarget;
use crate::config::DisplayConfig;
use crate::core::evaluator::{display_outcome, Evaluator};
use crate::core::operand::sanitize_operand;
use crate::core::{CalcResult, Operation, INITIAL_RESULT};

/// One of the two operand fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    /// The first operand ("Number 1")
    #[default]
    First,
    /// The second operand ("Number 2")
    Second,
}

impl Field {
    /// Returns the other field
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }
}

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp {
    first: String,
    second: String,
    result: String,
    /// Last evaluation, kept for styling the result label
    outcome: Option<CalcResult<f64>>,
    focus: Field,
    keypad: Keypad,
    evaluator: Evaluator,
    display: DisplayConfig,
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates a new calculator app with default labels
    #[must_use]
    pub fn new() -> Self {
        Self::with_display(DisplayConfig::default())
    }

    /// Creates a calculator app with custom title, labels and footer
    #[must_use]
    pub fn with_display(display: DisplayConfig) -> Self {
        Self {
            first: String::new(),
            second: String::new(),
            result: INITIAL_RESULT.to_string(),
            outcome: None,
            focus: Field::First,
            keypad: Keypad::new(),
            evaluator: Evaluator::new(),
            display,
            should_quit: false,
        }
    }

    /// Returns the first operand text
    #[must_use]
    pub fn first(&self) -> &str {
        &self.first
    }

    /// Returns the second operand text
    #[must_use]
    pub fn second(&self) -> &str {
        &self.second
    }

    /// Returns the text of an operand field
    #[must_use]
    pub fn operand(&self, field: Field) -> &str {
        match field {
            Field::First => &self.first,
            Field::Second => &self.second,
        }
    }

    /// Returns the result label text
    #[must_use]
    pub fn result(&self) -> &str {
        &self.result
    }

    /// Returns the last evaluation, if any since the last clear
    #[must_use]
    pub fn outcome(&self) -> Option<&CalcResult<f64>> {
        self.outcome.as_ref()
    }

    /// Returns true if the result label shows an error message
    #[must_use]
    pub fn result_is_error(&self) -> bool {
        matches!(self.outcome, Some(Err(_)))
    }

    /// Returns the focused field
    #[must_use]
    pub fn focus(&self) -> Field {
        self.focus
    }

    /// Returns the button pad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns the display configuration
    #[must_use]
    pub fn display(&self) -> &DisplayConfig {
        &self.display
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Replaces an operand's text, keeping only digits and the first point
    pub fn set_operand(&mut self, field: Field, text: &str) {
        let clean = sanitize_operand(text);
        debug!(?field, raw = text, clean = clean.as_str(), "operand changed");
        match field {
            Field::First => self.first = clean,
            Field::Second => self.second = clean,
        }
    }

    /// Appends a character to the focused operand
    pub fn insert_char(&mut self, c: char) {
        let mut text = self.operand(self.focus).to_string();
        text.push(c);
        self.set_operand(self.focus, &text);
    }

    /// Appends pasted text to the focused operand
    pub fn paste(&mut self, pasted: &str) {
        let text = format!("{}{pasted}", self.operand(self.focus));
        self.set_operand(self.focus, &text);
    }

    /// Deletes the last character of the focused operand
    pub fn delete_char(&mut self) {
        let mut text = self.operand(self.focus).to_string();
        if text.pop().is_some() {
            self.set_operand(self.focus, &text);
        }
    }

    /// Moves focus to a field
    pub fn focus_field(&mut self, field: Field) {
        self.focus = field;
    }

    /// Moves focus to the next field
    pub fn focus_next(&mut self) {
        self.focus = self.focus.other();
    }

    /// Moves focus to the previous field
    pub fn focus_previous(&mut self) {
        // two fields: previous and next coincide
        self.focus = self.focus.other();
    }

    /// Evaluates an operation against both operands and updates the result
    pub fn calculate(&mut self, op: Operation) {
        let outcome = self.evaluator.evaluate(&self.first, &self.second, op);
        self.result = display_outcome(&outcome);
        self.outcome = Some(outcome);
        self.keypad.highlight(ButtonAction::Operation(op));
    }

    /// Resets both operands to empty and the result to "0"
    pub fn clear(&mut self) {
        debug!("clear");
        self.first.clear();
        self.second.clear();
        self.result = INITIAL_RESULT.to_string();
        self.outcome = None;
        self.focus = Field::First;
        self.keypad.highlight(ButtonAction::Clear);
    }

    /// Performs a button's action
    pub fn press_button(&mut self, action: ButtonAction) {
        match action {
            ButtonAction::Operation(op) => self.calculate(op),
            ButtonAction::Clear => self.clear(),
        }
    }

    /// Handles a mouse click on a field or button
    pub fn click(&mut self, target: ClickTarget) {
        match target {
            ClickTarget::Field(field) => self.focus_field(field),
            ClickTarget::Button(action) => self.press_button(action),
        }
    }

    /// Applies a key action; returns true if the app should quit
    pub fn apply_action(&mut self, action: KeyAction) -> bool {
        match action {
            KeyAction::InsertChar(c) => self.insert_char(c),
            KeyAction::Backspace => self.delete_char(),
            KeyAction::Apply(op) => self.calculate(op),
            KeyAction::Clear => self.clear(),
            KeyAction::FocusNext => self.focus_next(),
            KeyAction::FocusPrevious => self.focus_previous(),
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
        self.should_quit
    }
}
