//! Calculator drivers
//!
//! A driver operates the calculator the way a user would. The verification
//! routines below are written once against [`CalculatorDriver`] and run
//! against every driver: keyboard and mouse.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;

use crate::core::Operation;
use crate::tui::{hit_test, ButtonAction, CalculatorApp, Field, InputHandler, ScreenLayout};

/// Abstract driver trait for calculator interactions
pub trait CalculatorDriver {
    /// Replaces the text of both operand fields
    fn enter_operands(&mut self, first: &str, second: &str);

    /// Presses an operation button
    fn press(&mut self, op: Operation);

    /// Presses the clear button
    fn clear(&mut self);

    /// Gets the result label text
    fn get_result(&self) -> String;

    /// Gets the text of both operand fields
    fn get_operands(&self) -> (String, String);
}

/// Drives the app with synthesized key events and bracketed paste
#[derive(Debug, Default)]
pub struct TuiDriver {
    app: CalculatorApp,
    input: InputHandler,
}

impl TuiDriver {
    /// Creates a new keyboard driver
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a reference to the underlying app
    #[must_use]
    pub fn app(&self) -> &CalculatorApp {
        &self.app
    }

    /// Sends a single key press
    pub fn send_key(&mut self, code: KeyCode) {
        let action = self.input.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
        self.app.apply_action(action);
    }

    /// Types characters one key at a time
    pub fn type_keys(&mut self, keys: &str) {
        for c in keys.chars() {
            self.send_key(KeyCode::Char(c));
        }
    }

    fn replace_field(&mut self, field: Field, text: &str) {
        while self.app.focus() != field {
            self.send_key(KeyCode::Tab);
        }
        while !self.app.operand(field).is_empty() {
            self.send_key(KeyCode::Backspace);
        }
        self.app.paste(text);
    }
}

impl CalculatorDriver for TuiDriver {
    fn enter_operands(&mut self, first: &str, second: &str) {
        self.replace_field(Field::First, first);
        self.replace_field(Field::Second, second);
    }

    fn press(&mut self, op: Operation) {
        self.send_key(KeyCode::Char(op.symbol()));
    }

    fn clear(&mut self) {
        self.send_key(KeyCode::Esc);
    }

    fn get_result(&self) -> String {
        self.app.result().to_string()
    }

    fn get_operands(&self) -> (String, String) {
        (self.app.first().to_string(), self.app.second().to_string())
    }
}

/// Drives the app with mouse clicks on a virtual screen
#[derive(Debug)]
pub struct MouseDriver {
    app: CalculatorApp,
    screen: Rect,
}

impl Default for MouseDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl MouseDriver {
    /// Screen size used when none is given
    pub const DEFAULT_SCREEN: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 24,
    };

    /// Creates a mouse driver on an 80x24 screen
    #[must_use]
    pub fn new() -> Self {
        Self::with_screen(Self::DEFAULT_SCREEN)
    }

    /// Creates a mouse driver on a screen of the given size
    #[must_use]
    pub fn with_screen(screen: Rect) -> Self {
        Self {
            app: CalculatorApp::new(),
            screen,
        }
    }

    /// Returns a reference to the underlying app
    #[must_use]
    pub fn app(&self) -> &CalculatorApp {
        &self.app
    }

    /// Clicks a screen position; returns whether anything was hit
    pub fn click_at(&mut self, x: u16, y: u16) -> bool {
        match hit_test(&self.app, self.screen, x, y) {
            Some(target) => {
                self.app.click(target);
                true
            }
            None => false,
        }
    }

    fn click_button(&mut self, action: ButtonAction) {
        let layout = ScreenLayout::new(&self.app, self.screen);
        let (x, y) = self
            .app
            .keypad()
            .button_center(layout.keypad, action)
            .expect("screen too small for the button pad");
        self.click_at(x, y);
    }

    fn replace_field(&mut self, field: Field, text: &str) {
        let area = ScreenLayout::new(&self.app, self.screen).field(field);
        self.click_at(area.x + 1, area.y + 1);
        self.app.set_operand(field, text);
    }
}

impl CalculatorDriver for MouseDriver {
    fn enter_operands(&mut self, first: &str, second: &str) {
        self.replace_field(Field::First, first);
        self.replace_field(Field::Second, second);
    }

    fn press(&mut self, op: Operation) {
        self.click_button(ButtonAction::Operation(op));
    }

    fn clear(&mut self) {
        self.click_button(ButtonAction::Clear);
    }

    fn get_result(&self) -> String {
        self.app.result().to_string()
    }

    fn get_operands(&self) -> (String, String) {
        (self.app.first().to_string(), self.app.second().to_string())
    }
}

// ===== Verification routines =====
// These work with ANY CalculatorDriver implementation

fn calculate<D: CalculatorDriver>(
    driver: &mut D,
    first: &str,
    second: &str,
    op: Operation,
) -> String {
    driver.enter_operands(first, second);
    driver.press(op);
    driver.get_result()
}

/// Verifies the four operations on well-formed operands
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    assert_eq!(calculate(driver, "2", "3", Operation::Add), "5");
    assert_eq!(calculate(driver, "10", "4", Operation::Subtract), "6");
    assert_eq!(calculate(driver, "6", "7", Operation::Multiply), "42");
    assert_eq!(calculate(driver, "6", "3", Operation::Divide), "2");
    assert_eq!(calculate(driver, "5", "2", Operation::Divide), "2.5");
    driver.clear();
}

/// Verifies that a zero divisor always reports division by zero
pub fn verify_division<D: CalculatorDriver>(driver: &mut D) {
    for dividend in ["0", "1", "3.75", "1000000"] {
        assert_eq!(
            calculate(driver, dividend, "0", Operation::Divide),
            "Error: Div by zero"
        );
    }
    assert_eq!(
        calculate(driver, "9", "0.0", Operation::Divide),
        "Error: Div by zero"
    );
    for dividend in ["", "."] {
        assert_eq!(
            calculate(driver, dividend, "0", Operation::Divide),
            "Error: Div by zero"
        );
    }
    driver.clear();
}

/// Verifies that empty or unparsable operands report invalid input
pub fn verify_invalid_input<D: CalculatorDriver>(driver: &mut D) {
    assert_eq!(calculate(driver, "", "3", Operation::Add), "Invalid Input");
    assert_eq!(calculate(driver, "3", "", Operation::Multiply), "Invalid Input");
    assert_eq!(calculate(driver, ".", "3", Operation::Subtract), "Invalid Input");
    assert_eq!(calculate(driver, "0", "", Operation::Divide), "Invalid Input");
    driver.clear();
}

/// Verifies that operand fields only keep digits and one decimal point
pub fn verify_input_filtering<D: CalculatorDriver>(driver: &mut D) {
    driver.enter_operands("1a2.5.0", "-4 kg");
    assert_eq!(driver.get_operands(), ("12.50".to_string(), "4".to_string()));
    driver.press(Operation::Multiply);
    assert_eq!(driver.get_result(), "50");
    driver.clear();
}

/// Verifies that clear resets operands and result
pub fn verify_clear<D: CalculatorDriver>(driver: &mut D) {
    calculate(driver, "8", "2", Operation::Divide);
    driver.clear();
    assert_eq!(driver.get_operands(), (String::new(), String::new()));
    assert_eq!(driver.get_result(), "0");
}

/// Complete verification suite - runs all routines
pub fn run_full_suite<D: CalculatorDriver>(driver: &mut D) {
    verify_basic_arithmetic(driver);
    verify_division(driver);
    verify_invalid_input(driver);
    verify_input_filtering(driver);
    verify_clear(driver);
}
