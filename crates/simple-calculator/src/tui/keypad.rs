//! Operation button pad
//!
//! ```text
//! [ + ] [ - ]
//! [ x ] [ / ]
//! [    C    ]
//! ```
//!
//! Rows may hold different numbers of buttons; each button takes an equal
//! share of its row's width.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::core::Operation;

/// Actions that pad buttons can perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    /// Apply an operation to both operands
    Operation(Operation),
    /// Reset operands and result
    Clear,
}

/// A single pad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The label on the button
    pub label: char,
    /// Whether the button is highlighted
    pub pressed: bool,
    /// The action this button performs
    pub action: ButtonAction,
}

impl KeypadButton {
    /// Creates an operation button labelled with the operation symbol
    #[must_use]
    pub fn operation(op: Operation) -> Self {
        Self {
            label: op.symbol(),
            pressed: false,
            action: ButtonAction::Operation(op),
        }
    }

    /// Creates the clear button
    #[must_use]
    pub fn clear() -> Self {
        Self {
            label: 'C',
            pressed: false,
            action: ButtonAction::Clear,
        }
    }

    /// Sets the pressed state
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }
}

/// The button pad
#[derive(Debug, Clone)]
pub struct Keypad {
    rows: Vec<Vec<KeypadButton>>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Inner height the pad needs to give every row a button line
    pub const MIN_INNER_HEIGHT: u16 = 3;

    /// Creates the standard pad
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: vec![
                vec![
                    KeypadButton::operation(Operation::Add),
                    KeypadButton::operation(Operation::Subtract),
                ],
                vec![
                    KeypadButton::operation(Operation::Multiply),
                    KeypadButton::operation(Operation::Divide),
                ],
                vec![KeypadButton::clear()],
            ],
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Returns the number of rows
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Finds the position of the button performing an action
    #[must_use]
    pub fn find_button(&self, action: ButtonAction) -> Option<(usize, usize)> {
        self.buttons_with_positions()
            .find(|(_, btn)| btn.action == action)
            .map(|(pos, _)| pos)
    }

    /// Highlights the button performing an action, releasing all others
    pub fn highlight(&mut self, action: ButtonAction) {
        for btn in self.rows.iter_mut().flatten() {
            btn.set_pressed(btn.action == action);
        }
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for btn in self.rows.iter_mut().flatten() {
            btn.set_pressed(false);
        }
    }

    /// Returns an iterator over buttons with their (row, col) positions
    pub fn buttons_with_positions(&self) -> impl Iterator<Item = ((usize, usize), &KeypadButton)> {
        self.rows.iter().enumerate().flat_map(|(row, buttons)| {
            buttons
                .iter()
                .enumerate()
                .map(move |(col, btn)| ((row, col), btn))
        })
    }

    /// Converts a click position inside the bordered pad area to a button action
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<ButtonAction> {
        let inner = inner_area(area);
        if x < inner.x || y < inner.y || x >= inner.right() || y >= inner.bottom() {
            return None;
        }

        let row_height = inner.height / self.rows.len() as u16;
        if row_height == 0 {
            return None;
        }
        let row = ((y - inner.y) / row_height) as usize;
        let buttons = self.rows.get(row)?;

        let btn_width = inner.width / buttons.len() as u16;
        if btn_width == 0 {
            return None;
        }
        let col = ((x - inner.x) / btn_width) as usize;
        buttons.get(col).map(|btn| btn.action)
    }

    /// Returns a screen position inside the button performing an action
    ///
    /// The position is the centre of the button's cell, so
    /// [`Keypad::hit_test`] maps it back to the same action.
    #[must_use]
    pub fn button_center(&self, area: Rect, action: ButtonAction) -> Option<(u16, u16)> {
        let (row, col) = self.find_button(action)?;
        let inner = inner_area(area);
        let row_height = inner.height / self.rows.len() as u16;
        let btn_width = inner.width / self.rows[row].len() as u16;
        if row_height == 0 || btn_width == 0 {
            return None;
        }
        Some((
            inner.x + col as u16 * btn_width + btn_width / 2,
            inner.y + row as u16 * row_height + row_height / 2,
        ))
    }
}

fn inner_area(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Operations ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = inner_area(area);
        if inner.width < 3 || inner.height < Keypad::MIN_INNER_HEIGHT {
            return;
        }

        let row_height = inner.height / self.keypad.rows.len() as u16;
        for (row, buttons) in self.keypad.rows.iter().enumerate() {
            let btn_width = inner.width / buttons.len() as u16;
            let y = inner.y + row as u16 * row_height + row_height / 2;

            for (col, btn) in buttons.iter().enumerate() {
                let x = inner.x + col as u16 * btn_width;

                let style = if btn.pressed {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    match btn.action {
                        ButtonAction::Operation(_) => Style::default().fg(Color::Yellow),
                        ButtonAction::Clear => Style::default().fg(Color::Red),
                    }
                };

                let label = format!("[ {} ]", btn.label);
                let label_x = x + btn_width.saturating_sub(label.len() as u16) / 2;
                buf.set_span(label_x, y, &Span::styled(label, style), btn_width);
            }
        }
    }
}
