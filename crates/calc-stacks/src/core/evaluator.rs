//! Two-stack infix evaluation
//!
//! A single linear pass over the token stream. Numbers push onto the
//! operand stack; each operator first reduces every stacked operator of
//! equal or higher precedence (`<=`, which is what makes equal tiers
//! left-associative) and then pushes itself. Once the tokens are
//! consumed the operator stack is drained the same way.

use crate::core::operations::{apply_operator, precedence_of};
use crate::core::tokens::{tokenize, Token};
use crate::core::{CalcError, CalcResult};

/// Evaluator for accumulated expression text.
///
/// The stacks are owned fields so the Clear event can wipe them, but
/// every evaluation starts from a clean slate: both stacks and the
/// division flag are reset before the token pass.
#[derive(Debug, Default)]
pub struct Evaluator {
    operands: Vec<f64>,
    operators: Vec<char>,
    division_by_zero: bool,
}

impl Evaluator {
    /// Creates a new evaluator with empty stacks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears both stacks and the division flag (the Clear event).
    pub fn reset(&mut self) {
        self.operands.clear();
        self.operators.clear();
        self.division_by_zero = false;
    }

    /// Evaluates expression text to a single value.
    ///
    /// Empty text reports [`CalcError::EmptyExpression`]. A zero divisor
    /// anywhere in the expression reports [`CalcError::DivisionByZero`].
    /// Otherwise the operand stack must end with exactly one value,
    /// which is the result; any other count is
    /// [`CalcError::InvalidCalculation`].
    pub fn evaluate(&mut self, text: &str) -> CalcResult<f64> {
        if text.is_empty() {
            return Err(CalcError::EmptyExpression);
        }
        self.reset();

        for token in tokenize(text) {
            match token {
                Token::Number(n) => self.operands.push(n),
                Token::Operator(op) => {
                    while self
                        .operators
                        .last()
                        .is_some_and(|&top| precedence_of(op) <= precedence_of(top))
                    {
                        if !self.reduce() {
                            break;
                        }
                    }
                    self.operators.push(op);
                }
            }
        }

        while !self.operators.is_empty() {
            if !self.reduce() {
                break;
            }
        }

        if self.division_by_zero {
            return Err(CalcError::DivisionByZero);
        }
        match self.operands.pop() {
            Some(value) if self.operands.is_empty() => Ok(value),
            _ => Err(CalcError::InvalidCalculation),
        }
    }

    /// Pops two operands and one operator and pushes the combined value
    /// back. A reduction that divides by zero restores nothing: the
    /// stacks stay shrunk and the condition is recorded for the final
    /// verdict. Returns false when there is not enough stacked data to
    /// pop anything, so callers stop looping instead of spinning on an
    /// unchanged stack.
    fn reduce(&mut self) -> bool {
        if self.operands.len() < 2 || self.operators.is_empty() {
            return false;
        }
        let Some(b) = self.operands.pop() else {
            return false;
        };
        let Some(a) = self.operands.pop() else {
            return false;
        };
        let Some(op) = self.operators.pop() else {
            return false;
        };

        match apply_operator(a, b, op) {
            Ok(value) => self.operands.push(value),
            // the reduction is dropped; both operands stay consumed
            Err(_) => self.division_by_zero = true,
        }
        true
    }
}
