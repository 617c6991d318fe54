//! Terminal front end: state holder, key mapping, button pad and rendering

mod app;
mod input;
mod keypad;
mod ui;

pub use app::{CalculatorApp, Field};
pub use input::{InputHandler, KeyAction};
pub use keypad::{ButtonAction, Keypad, KeypadButton, KeypadWidget};
pub use ui::{hit_test, render, CalculatorUI, ClickTarget, ScreenLayout, HELP_LINE};
