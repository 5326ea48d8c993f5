//! calc-stacks - a stack-based desktop calculator
//!
//! A numeric display over a button grid: digits, the four basic
//! operators, decimal point, clear, and equals. Button presses
//! accumulate expression text in an [`core::buffer::ExpressionBuffer`];
//! equals hands the text to the two-stack
//! [`core::evaluator::Evaluator`], which resolves the two precedence
//! tiers left-to-right and writes the result (or an error message) back
//! to the display.
//!
//! The core consumes abstract [`core::session::InputEvent`]s and knows
//! nothing about widgets; the bundled `tui` feature binds a terminal
//! button grid to those events.
//!
//! # Example
//!
//! ```rust
//! use calc_stacks::prelude::*;
//!
//! let mut calc = CalculatorState::new();
//! for event in [
//!     InputEvent::DigitOrDot('3'),
//!     InputEvent::Operator('+'),
//!     InputEvent::DigitOrDot('4'),
//!     InputEvent::Operator('*'),
//!     InputEvent::DigitOrDot('2'),
//!     InputEvent::Evaluate,
//! ] {
//!     calc.apply(event);
//! }
//! assert_eq!(calc.display(), "11");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::buffer::ExpressionBuffer;
    pub use crate::core::evaluator::Evaluator;
    pub use crate::core::history::{History, HistoryEntry};
    pub use crate::core::session::{CalculatorState, InputEvent};
    pub use crate::core::tokens::{tokenize, Token};
    pub use crate::core::{CalcError, CalcResult, Operator};
    pub use crate::driver::{CalculatorDriver, HistoryItem};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let mut evaluator = Evaluator::new();
        assert_eq!(evaluator.evaluate("2 + 3"), Ok(5.0));
    }

    #[test]
    fn test_operator_direct() {
        assert_eq!(Operator::Multiply.apply(6.0, 7.0), Ok(42.0));
    }

    #[test]
    fn test_tokenize_direct() {
        let tokens = tokenize("1 + 2");
        assert_eq!(tokens.len(), 3);
        assert!(tokens[0].is_number());
        assert!(tokens[1].is_operator());
    }

    #[test]
    fn test_full_event_round() {
        let mut calc = CalculatorState::new();
        calc.apply(InputEvent::DigitOrDot('8'));
        calc.apply(InputEvent::Operator('/'));
        calc.apply(InputEvent::DigitOrDot('2'));
        calc.apply(InputEvent::Evaluate);
        assert_eq!(calc.display(), "4");
        assert_eq!(calc.history().len(), 1);
    }

    #[test]
    fn test_error_taxonomy() {
        let mut evaluator = Evaluator::new();
        assert!(matches!(
            evaluator.evaluate(""),
            Err(CalcError::EmptyExpression)
        ));
        assert!(matches!(
            evaluator.evaluate("1 / 0"),
            Err(CalcError::DivisionByZero)
        ));
        assert!(matches!(
            evaluator.evaluate("1 2"),
            Err(CalcError::InvalidCalculation)
        ));
    }
}
