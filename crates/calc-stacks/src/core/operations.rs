//! The four fixed binary operators
//!
//! Two precedence tiers, all left-associative. Raw operator characters
//! outside the fixed set still participate in evaluation through the
//! char-level helpers, which rank them below every real operator and
//! reduce them to zero.

use crate::core::{CalcError, CalcResult};

/// Type-safe operator enum covering the fixed operator set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
}

impl Operator {
    /// Classifies an operator character, or `None` for anything outside
    /// the fixed set.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Returns the operator symbol for display.
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Returns the precedence tier (higher binds tighter).
    #[must_use]
    pub const fn precedence(&self) -> u8 {
        match self {
            Self::Add | Self::Subtract => 1,
            Self::Multiply | Self::Divide => 2,
        }
    }

    /// Applies the operator to two operands, left operand first.
    pub fn apply(self, a: f64, b: f64) -> CalcResult<f64> {
        match self {
            Self::Add => Ok(a + b),
            Self::Subtract => Ok(a - b),
            Self::Multiply => Ok(a * b),
            Self::Divide => {
                if b == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                Ok(a / b)
            }
        }
    }
}

/// Precedence rank for a raw operator character. Characters outside the
/// fixed set rank 0, below every real operator.
pub(crate) fn precedence_of(c: char) -> u8 {
    Operator::from_char(c).map_or(0, |op| op.precedence())
}

/// Applies a raw operator character. Characters outside the fixed set
/// reduce to zero rather than failing.
pub(crate) fn apply_operator(a: f64, b: f64, c: char) -> CalcResult<f64> {
    match Operator::from_char(c) {
        Some(op) => op.apply(a, b),
        None => Ok(0.0),
    }
}
