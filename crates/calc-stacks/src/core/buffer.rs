//! Expression accumulation
//!
//! The buffer owns the display text and mutates it in response to
//! discrete input events. Every operation is total: there is no invalid
//! input at this layer, only text that evaluates poorly later.

/// The in-progress expression as human-readable display text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpressionBuffer {
    text: String,
}

impl ExpressionBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current display text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns true if no text has accumulated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Appends a digit or decimal point verbatim, with no separators.
    /// Repeated dots within one number are accepted as typed.
    pub fn push_digit(&mut self, c: char) {
        self.text.push(c);
    }

    /// Appends an operator padded with single spaces on both sides.
    /// Dropped when the buffer is empty: an expression cannot start with
    /// an operator. A freshly installed result counts as non-empty, so
    /// chained calculations continue from it.
    pub fn push_operator(&mut self, c: char) {
        if self.text.is_empty() {
            return;
        }
        self.text.push(' ');
        self.text.push(c);
        self.text.push(' ');
    }

    /// Resets the text to empty.
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Replaces the whole text. Used to install evaluation results and
    /// error messages.
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let buffer = ExpressionBuffer::new();
        assert!(buffer.is_empty());
        assert_eq!(buffer.text(), "");
    }

    #[test]
    fn test_push_digits_no_separators() {
        let mut buffer = ExpressionBuffer::new();
        for c in ['1', '2', '.', '5'] {
            buffer.push_digit(c);
        }
        assert_eq!(buffer.text(), "12.5");
    }

    #[test]
    fn test_push_operator_is_space_padded() {
        let mut buffer = ExpressionBuffer::new();
        buffer.push_digit('3');
        buffer.push_operator('+');
        assert_eq!(buffer.text(), "3 + ");
    }

    #[test]
    fn test_push_operator_on_empty_is_noop() {
        let mut buffer = ExpressionBuffer::new();
        buffer.push_operator('+');
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_push_operator_after_result_text() {
        let mut buffer = ExpressionBuffer::new();
        buffer.set_text("7");
        buffer.push_operator('*');
        assert_eq!(buffer.text(), "7 * ");
    }

    #[test]
    fn test_multiple_dots_accepted_as_typed() {
        let mut buffer = ExpressionBuffer::new();
        for c in ['1', '.', '2', '.', '3'] {
            buffer.push_digit(c);
        }
        assert_eq!(buffer.text(), "1.2.3");
    }

    #[test]
    fn test_clear() {
        let mut buffer = ExpressionBuffer::new();
        buffer.push_digit('9');
        buffer.clear();
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_set_text_replaces_wholesale() {
        let mut buffer = ExpressionBuffer::new();
        buffer.push_digit('1');
        buffer.set_text("Error: Invalid Calculation");
        assert_eq!(buffer.text(), "Error: Invalid Calculation");
    }
}
