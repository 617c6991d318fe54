//! TUI rendering and mouse hit-testing
//!
//! The screen is a single column: result label, the two operand fields,
//! the button pad, an optional info footer and a help line.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};

use super::app::{CalculatorApp, Field};
use super::keypad::{ButtonAction, Keypad, KeypadWidget};

/// One-line key reference shown at the bottom of the screen
pub const HELP_LINE: &str = "0-9 . type  Tab switch  + - x / calculate  C clear  q quit";

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Screen regions, computed from the terminal area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Result label
    pub result: Rect,
    /// First operand field
    pub first: Rect,
    /// Second operand field
    pub second: Rect,
    /// Button pad
    pub keypad: Rect,
    /// Info footer (zero height when no footer lines are configured)
    pub footer: Rect,
    /// Help line
    pub help: Rect,
}

impl ScreenLayout {
    /// Splits the terminal area for the given app
    #[must_use]
    pub fn new(app: &CalculatorApp, area: Rect) -> Self {
        let footer_lines = app.display().footer.len() as u16;
        let footer_height = if footer_lines == 0 { 0 } else { footer_lines + 2 };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(Keypad::MIN_INNER_HEIGHT + 2),
                Constraint::Length(footer_height),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            result: chunks[0],
            first: chunks[1],
            second: chunks[2],
            keypad: chunks[3],
            footer: chunks[4],
            help: chunks[5],
        }
    }

    /// Returns the area of an operand field
    #[must_use]
    pub fn field(&self, field: Field) -> Rect {
        match field {
            Field::First => self.first,
            Field::Second => self.second,
        }
    }
}

/// What a mouse click landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// An operand field
    Field(Field),
    /// A pad button
    Button(ButtonAction),
}

/// Maps a click position to the element under it
#[must_use]
pub fn hit_test(app: &CalculatorApp, area: Rect, x: u16, y: u16) -> Option<ClickTarget> {
    let layout = ScreenLayout::new(app, area);
    let position = (x, y).into();

    for field in [Field::First, Field::Second] {
        if layout.field(field).contains(position) {
            return Some(ClickTarget::Field(field));
        }
    }
    app.keypad()
        .hit_test(layout.keypad, x, y)
        .map(ClickTarget::Button)
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    fn render_result(&self, area: Rect, buf: &mut Buffer) {
        let color = if self.app.result_is_error() {
            Color::Red
        } else {
            Color::Green
        };
        let style = Style::default().fg(color).add_modifier(Modifier::BOLD);

        Paragraph::new(Span::styled(self.app.result(), style))
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .title(" Result ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .render(area, buf);
    }

    fn render_field(&self, field: Field, area: Rect, buf: &mut Buffer) {
        let focused = self.app.focus() == field;
        let label = match field {
            Field::First => &self.app.display().first_label,
            Field::Second => &self.app.display().second_label,
        };

        let mut spans = vec![Span::raw(self.app.operand(field))];
        if focused {
            spans.push(Span::styled(
                " ",
                Style::default().bg(Color::White).fg(Color::Black),
            ));
        }

        let border = if focused { Color::Cyan } else { Color::DarkGray };
        Paragraph::new(Line::from(spans))
            .block(
                Block::default()
                    .title(format!(" {label} "))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border)),
            )
            .render(area, buf);
    }

    fn render_footer(&self, area: Rect, buf: &mut Buffer) {
        let footer = &self.app.display().footer;
        if footer.is_empty() || area.height == 0 {
            return;
        }

        let lines: Vec<Line> = footer.iter().map(|l| Line::from(l.as_str())).collect();
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }

    fn render_help(area: Rect, buf: &mut Buffer) {
        Paragraph::new(Span::styled(HELP_LINE, Style::default().fg(Color::Gray)))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(self.app.display().title.as_str())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let layout = ScreenLayout::new(self.app, area);
        self.render_result(layout.result, buf);
        self.render_field(Field::First, layout.first, buf);
        self.render_field(Field::Second, layout.second, buf);
        KeypadWidget::new(self.app.keypad()).render(layout.keypad, buf);
        self.render_footer(layout.footer, buf);
        Self::render_help(layout.help, buf);
    }
}
