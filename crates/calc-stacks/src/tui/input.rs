//! Keyboard input handling
//!
//! Maps raw crossterm key events onto calculator events. The keyboard
//! is just another button panel: every key press becomes the same
//! [`InputEvent`] the on-screen buttons produce.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::session::InputEvent;

/// Decoded keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Forward an event to the calculator.
    Press(InputEvent),
    /// Quit the application.
    Quit,
    /// Ignored input.
    None,
}

/// Input handler that maps key events to actions.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action.
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => {
                KeyAction::Press(InputEvent::DigitOrDot(c))
            }
            KeyCode::Char(c @ ('+' | '-' | '*' | '/')) => {
                KeyAction::Press(InputEvent::Operator(c))
            }
            KeyCode::Char('=') | KeyCode::Enter => KeyAction::Press(InputEvent::Evaluate),
            KeyCode::Char('c' | 'C') | KeyCode::Esc => KeyAction::Press(InputEvent::Clear),
            KeyCode::Char('q') => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    #[test]
    fn test_digit_keys() {
        let handler = InputHandler::new();
        for c in '0'..='9' {
            assert_eq!(
                handler.handle_key(key(KeyCode::Char(c))),
                KeyAction::Press(InputEvent::DigitOrDot(c))
            );
        }
    }

    #[test]
    fn test_decimal_point_key() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('.'))),
            KeyAction::Press(InputEvent::DigitOrDot('.'))
        );
    }

    #[test]
    fn test_operator_keys() {
        let handler = InputHandler::new();
        for c in ['+', '-', '*', '/'] {
            assert_eq!(
                handler.handle_key(key(KeyCode::Char(c))),
                KeyAction::Press(InputEvent::Operator(c))
            );
        }
    }

    #[test]
    fn test_evaluate_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Enter)),
            KeyAction::Press(InputEvent::Evaluate)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('='))),
            KeyAction::Press(InputEvent::Evaluate)
        );
    }

    #[test]
    fn test_clear_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Esc)),
            KeyAction::Press(InputEvent::Clear)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('c'))),
            KeyAction::Press(InputEvent::Clear)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('C'))),
            KeyAction::Press(InputEvent::Clear)
        );
    }

    #[test]
    fn test_quit_keys() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(handler.handle_key(ctrl(KeyCode::Char('c'))), KeyAction::Quit);
        assert_eq!(handler.handle_key(ctrl(KeyCode::Char('q'))), KeyAction::Quit);
    }

    #[test]
    fn test_ctrl_other_ignored() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(ctrl(KeyCode::Char('x'))), KeyAction::None);
        // ctrl-modified digits are not calculator input either
        assert_eq!(handler.handle_key(ctrl(KeyCode::Char('5'))), KeyAction::None);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key(KeyCode::Tab)), KeyAction::None);
        assert_eq!(handler.handle_key(key(KeyCode::F(1))), KeyAction::None);
        assert_eq!(handler.handle_key(key(KeyCode::Char('z'))), KeyAction::None);
    }
}
