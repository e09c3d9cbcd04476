//! User actions and the binary operator set.
//!
//! Actions are the only input to the state machine. The hosting UI maps
//! each gesture (button click, keypress) to one `Action` value and feeds
//! it to [`transition`](crate::core::transition).

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four binary operators the calculator supports.
///
/// The set is closed: there is no way to hand the evaluator an operator
/// it does not know.
///
/// # Example
///
/// ```rust
/// use tenkey::core::Operator;
///
/// assert_eq!(Operator::Add.symbol(), "+");
/// assert_eq!(Operator::Divide.apply(1.0, 4.0), 0.25);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// The display symbol for this operator.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Apply the operator to two parsed operands.
    ///
    /// Pure `f64` arithmetic. Division by zero yields an infinity here;
    /// classifying non-finite results as invalid is the state machine's
    /// job, not this function's.
    pub fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A discrete user action fed to the state machine.
///
/// Each variant carries only the minimal payload: the digit value for
/// `Digit`, the operator for `Operation`, nothing otherwise.
///
/// # Example
///
/// ```rust
/// use tenkey::core::{Action, Operator};
///
/// assert_eq!(Action::from_key('7'), Some(Action::Digit(7)));
/// assert_eq!(Action::from_key('+'), Some(Action::Operation(Operator::Add)));
/// assert_eq!(Action::from_key('='), Some(Action::Equal));
/// assert_eq!(Action::from_key('x'), None);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Action {
    /// A digit key, `0..=9`. Values above 9 are malformed and ignored by
    /// the transition function.
    Digit(u8),
    /// The decimal point key.
    Decimal,
    /// One of the four operator keys.
    Operation(Operator),
    /// Backspace over the last character of the current operand.
    Delete,
    /// All-clear: reset to the initial state.
    Clear,
    /// Compute the pending operation.
    Equal,
}

impl Action {
    /// Map a keypress to an action, the adapter the hosting UI uses.
    ///
    /// Mappings: `0`-`9` digits, `.` decimal, `+ - * /` operators,
    /// `=` equal, `c`/`C` clear, `d`/`D` or backspace delete. Any other
    /// key has no action.
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            '0'..='9' => Some(Self::Digit(key as u8 - b'0')),
            '.' => Some(Self::Decimal),
            '+' => Some(Self::Operation(Operator::Add)),
            '-' => Some(Self::Operation(Operator::Subtract)),
            '*' => Some(Self::Operation(Operator::Multiply)),
            '/' => Some(Self::Operation(Operator::Divide)),
            '=' => Some(Self::Equal),
            'c' | 'C' => Some(Self::Clear),
            'd' | 'D' | '\u{8}' => Some(Self::Delete),
            _ => None,
        }
    }
}
