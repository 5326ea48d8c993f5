//! Abstract calculator driver
//!
//! One interface over every frontend: the four input events plus
//! display and history readback. Verification logic written against the
//! trait runs unchanged on the headless core and on the TUI app.

use crate::core::session::{CalculatorState, InputEvent};

/// The event-handler interface a concrete frontend binds its buttons to.
pub trait CalculatorDriver {
    /// Presses a digit or decimal-point button.
    fn press_digit(&mut self, digit: char);

    /// Presses one of the four operator buttons.
    fn press_operator(&mut self, op: char);

    /// Presses the clear button.
    fn press_clear(&mut self);

    /// Presses the equals button.
    fn press_equals(&mut self);

    /// Reads the current display text.
    fn display(&self) -> String;

    /// Gets history entries (newest first).
    fn history_items(&self) -> Vec<HistoryItem>;

    /// Feeds a key sequence, one event per character: digits and dots
    /// press digit buttons, `+ - * /` press operator buttons, `=`
    /// evaluates, `C` clears. Anything else is ignored.
    fn enter_keys(&mut self, keys: &str) {
        for c in keys.chars() {
            match c {
                '0'..='9' | '.' => self.press_digit(c),
                '+' | '-' | '*' | '/' => self.press_operator(c),
                '=' => self.press_equals(),
                'C' | 'c' => self.press_clear(),
                _ => {}
            }
        }
    }
}

/// A frontend-independent view of one history entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryItem {
    /// The expression that was evaluated
    pub expression: String,
    /// The result as a string
    pub result: String,
}

impl CalculatorDriver for CalculatorState {
    fn press_digit(&mut self, digit: char) {
        self.apply(InputEvent::DigitOrDot(digit));
    }

    fn press_operator(&mut self, op: char) {
        self.apply(InputEvent::Operator(op));
    }

    fn press_clear(&mut self) {
        self.apply(InputEvent::Clear);
    }

    fn press_equals(&mut self) {
        self.apply(InputEvent::Evaluate);
    }

    fn display(&self) -> String {
        let text: &str = CalculatorState::display(self);
        text.to_string()
    }

    fn history_items(&self) -> Vec<HistoryItem> {
        self.history()
            .iter_rev()
            .map(|entry| HistoryItem {
                expression: entry.expression.clone(),
                result: format!("{}", entry.result),
            })
            .collect()
    }
}

/// TUI driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::{CalculatorDriver, HistoryItem};
    use crate::core::session::InputEvent;
    use crate::tui::TuiApp;

    /// Driver wrapping the terminal app, so shared verifications
    /// exercise the frontend path rather than the bare core.
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: TuiApp,
    }

    impl TuiDriver {
        /// Creates a driver around a fresh app.
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Returns a reference to the underlying app.
        #[must_use]
        pub fn app(&self) -> &TuiApp {
            &self.app
        }

        /// Returns a mutable reference to the underlying app.
        pub fn app_mut(&mut self) -> &mut TuiApp {
            &mut self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press_digit(&mut self, digit: char) {
            self.app.press(InputEvent::DigitOrDot(digit));
        }

        fn press_operator(&mut self, op: char) {
            self.app.press(InputEvent::Operator(op));
        }

        fn press_clear(&mut self) {
            self.app.press(InputEvent::Clear);
        }

        fn press_equals(&mut self) {
            self.app.press(InputEvent::Evaluate);
        }

        fn display(&self) -> String {
            self.app.display().to_string()
        }

        fn history_items(&self) -> Vec<HistoryItem> {
            self.app
                .state()
                .history()
                .iter_rev()
                .map(|entry| HistoryItem {
                    expression: entry.expression.clone(),
                    result: format!("{}", entry.result),
                })
                .collect()
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Unified verification suite =====
// These checks work with ANY CalculatorDriver implementation.

/// Verifies the four basic operations.
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    driver.press_clear();
    driver.enter_keys("3+4=");
    assert_eq!(driver.display(), "7");
    driver.press_clear();

    driver.enter_keys("10-4=");
    assert_eq!(driver.display(), "6");
    driver.press_clear();

    driver.enter_keys("6*7=");
    assert_eq!(driver.display(), "42");
    driver.press_clear();

    driver.enter_keys("20/4=");
    assert_eq!(driver.display(), "5");
    driver.press_clear();
}

/// Verifies that the multiplicative tier binds tighter.
pub fn verify_precedence<D: CalculatorDriver>(driver: &mut D) {
    driver.press_clear();
    driver.enter_keys("3+4*2=");
    assert_eq!(driver.display(), "11");
    driver.press_clear();
}

/// Verifies left-to-right evaluation within one tier.
pub fn verify_left_associativity<D: CalculatorDriver>(driver: &mut D) {
    driver.press_clear();
    driver.enter_keys("10-2-3=");
    assert_eq!(driver.display(), "5");
    driver.press_clear();
}

/// Verifies the division-by-zero display message.
pub fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) {
    driver.press_clear();
    driver.enter_keys("5/0=");
    assert_eq!(driver.display(), "Error: Division by 0");
    driver.press_clear();
}

/// Verifies that results chain into follow-up calculations.
pub fn verify_chained_results<D: CalculatorDriver>(driver: &mut D) {
    driver.press_clear();
    driver.enter_keys("3+4=");
    assert_eq!(driver.display(), "7");
    driver.enter_keys("+5=");
    assert_eq!(driver.display(), "12");
    driver.press_clear();
}

/// Verifies history tracking of successful calculations.
pub fn verify_history<D: CalculatorDriver>(driver: &mut D) {
    driver.press_clear();
    driver.enter_keys("1+1=");
    driver.press_clear();
    driver.enter_keys("2+2=");

    let history = driver.history_items();
    assert!(history.len() >= 2);
    // newest first
    assert_eq!(history[0].expression, "2 + 2");
    assert_eq!(history[0].result, "4");
}

/// Runs every verification against the given driver.
pub fn run_full_verification<D: CalculatorDriver>(driver: &mut D) {
    verify_basic_arithmetic(driver);
    verify_precedence(driver);
    verify_left_associativity(driver);
    verify_division_by_zero(driver);
    verify_chained_results(driver);
    verify_history(driver);
}
