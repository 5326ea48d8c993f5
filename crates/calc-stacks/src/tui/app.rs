//! Terminal application state
//!
//! A thin shell around the core calculator: it forwards events, keeps
//! the keypad highlight in sync with whatever was pressed, and carries
//! the quit flag.

use ratatui::layout::Rect;

use crate::core::session::{CalculatorState, InputEvent};
use crate::tui::input::KeyAction;
use crate::tui::keypad::Keypad;

/// The running terminal calculator.
#[derive(Debug, Default)]
pub struct TuiApp {
    state: CalculatorState,
    keypad: Keypad,
    should_quit: bool,
}

impl TuiApp {
    /// Creates a fresh app with an empty display.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The underlying calculator state.
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// The keypad model, including highlight state.
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// The current display text.
    #[must_use]
    pub fn display(&self) -> &str {
        self.state.display()
    }

    /// Returns whether the app should quit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Applies a calculator event and highlights the matching button.
    pub fn press(&mut self, event: InputEvent) {
        self.keypad.highlight(event);
        self.state.apply(event);
    }

    /// Routes a decoded key action.
    pub fn handle_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Press(event) => self.press(event),
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }

    /// Routes a mouse click at terminal coordinates through the keypad.
    pub fn click(&mut self, keypad_area: Rect, x: u16, y: u16) {
        if let Some(action) = self.keypad.hit_test(keypad_area, x, y) {
            self.press(action.to_event());
        }
    }
}
