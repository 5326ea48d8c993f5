//! Calculator state and event dispatch
//!
//! One owned value holds everything a frontend needs: the expression
//! buffer (whose text is the display), the evaluator with its stacks,
//! and the history. Frontends translate button activations or key
//! presses into [`InputEvent`]s and read the display back after each
//! one; no other coupling exists.

use crate::core::buffer::ExpressionBuffer;
use crate::core::evaluator::Evaluator;
use crate::core::history::History;
use crate::core::CalcError;

/// A discrete calculator input, one per button activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A digit (`0`-`9`) or decimal-point button.
    DigitOrDot(char),
    /// One of the four operator buttons (`+ - * /`).
    Operator(char),
    /// The clear button.
    Clear,
    /// The equals button.
    Evaluate,
}

/// The complete calculator: display text, evaluation stacks, history.
#[derive(Debug, Default)]
pub struct CalculatorState {
    buffer: ExpressionBuffer,
    evaluator: Evaluator,
    history: History,
}

impl CalculatorState {
    /// Creates a calculator with an empty display.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The text the display shows right now.
    #[must_use]
    pub fn display(&self) -> &str {
        self.buffer.text()
    }

    /// Past successful calculations.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Routes one event to its handler.
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::DigitOrDot(c) => self.press_digit(c),
            InputEvent::Operator(c) => self.press_operator(c),
            InputEvent::Clear => self.press_clear(),
            InputEvent::Evaluate => self.press_equals(),
        }
    }

    /// Handles a digit or decimal-point press.
    pub fn press_digit(&mut self, c: char) {
        self.buffer.push_digit(c);
    }

    /// Handles an operator press.
    pub fn press_operator(&mut self, c: char) {
        self.buffer.push_operator(c);
    }

    /// Handles the clear press: display and stacks both reset. History
    /// is kept.
    pub fn press_clear(&mut self) {
        self.buffer.clear();
        self.evaluator.reset();
    }

    /// Handles the equals press. The formatted result re-seeds the
    /// buffer so the next operator press chains off it. Errors are
    /// installed as display text and stay until a later event writes
    /// over them; an empty buffer leaves the display untouched.
    pub fn press_equals(&mut self) {
        let expression = self.buffer.text().to_string();
        match self.evaluator.evaluate(&expression) {
            Ok(value) => {
                self.history.record(&expression, value);
                self.buffer.set_text(&format_result(value));
            }
            Err(CalcError::EmptyExpression) => {}
            Err(e) => self.buffer.set_text(&format!("Error: {e}")),
        }
    }
}

/// Formats a result for the display: integral values without decimals,
/// otherwise trailing zeros trimmed.
pub(crate) fn format_result(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        let formatted = format!("{value:.10}");
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}
