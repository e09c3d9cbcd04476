//! Arithmetic evaluator.
//!
//! The leaf of the crate: no state, no dependencies on the state machine.
//! Given two raw operand strings and an operator it either produces an
//! `f64` or reports why the inputs were unusable.

use crate::core::Operator;
use thiserror::Error;

/// Why an evaluation could not be performed.
///
/// These never reach the user: the state machine absorbs them into a
/// no-op transition. They exist so the seam between entry and arithmetic
/// stays inspectable in tests and in any richer host UI.
#[derive(Clone, PartialEq, Eq, Debug, Error)]
pub enum EvalError {
    /// An operand was never entered.
    #[error("missing operand")]
    MissingOperand,

    /// An operand string does not parse as a finite decimal number.
    #[error("operand '{0}' is not a finite decimal number")]
    MalformedOperand(String),
}

/// Evaluate `first <operator> second` over raw operand strings.
///
/// Deterministic and side-effect free. Operands are the strings stored in
/// the calculator state; either may be absent. Anything that does not
/// parse as a *finite* decimal number is rejected here, but a non-finite
/// *result* (division by zero) is returned as `Ok` — classifying it is
/// the caller's responsibility.
///
/// # Example
///
/// ```rust
/// use tenkey::core::Operator;
/// use tenkey::eval::{evaluate, EvalError};
///
/// assert_eq!(evaluate(Some("2"), Operator::Add, Some("3")), Ok(5.0));
/// assert_eq!(
///     evaluate(None, Operator::Add, Some("3")),
///     Err(EvalError::MissingOperand)
/// );
/// ```
pub fn evaluate(
    first: Option<&str>,
    operator: Operator,
    second: Option<&str>,
) -> Result<f64, EvalError> {
    let lhs = parse_operand(first)?;
    let rhs = parse_operand(second)?;
    Ok(operator.apply(lhs, rhs))
}

fn parse_operand(operand: Option<&str>) -> Result<f64, EvalError> {
    let raw = operand.ok_or(EvalError::MissingOperand)?;
    raw.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| EvalError::MalformedOperand(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluates_each_operator() {
        assert_eq!(evaluate(Some("2"), Operator::Add, Some("3")), Ok(5.0));
        assert_eq!(evaluate(Some("2"), Operator::Subtract, Some("3")), Ok(-1.0));
        assert_eq!(evaluate(Some("2"), Operator::Multiply, Some("3")), Ok(6.0));
        assert_eq!(evaluate(Some("3"), Operator::Divide, Some("2")), Ok(1.5));
    }

    #[test]
    fn accepts_fractional_operands() {
        assert_eq!(
            evaluate(Some("9.0"), Operator::Add, Some("0.5")),
            Ok(9.5)
        );
    }

    #[test]
    fn missing_operands_are_rejected() {
        assert_eq!(
            evaluate(None, Operator::Add, Some("3")),
            Err(EvalError::MissingOperand)
        );
        assert_eq!(
            evaluate(Some("3"), Operator::Add, None),
            Err(EvalError::MissingOperand)
        );
        assert_eq!(
            evaluate(None, Operator::Add, None),
            Err(EvalError::MissingOperand)
        );
    }

    #[test]
    fn malformed_operands_are_rejected() {
        assert_eq!(
            evaluate(Some(""), Operator::Add, Some("3")),
            Err(EvalError::MalformedOperand(String::new()))
        );
        assert_eq!(
            evaluate(Some("2"), Operator::Add, Some("abc")),
            Err(EvalError::MalformedOperand("abc".to_string()))
        );
    }

    #[test]
    fn non_finite_operand_strings_are_rejected() {
        // "inf" and "NaN" parse as f64 but are not finite decimal numbers.
        assert_eq!(
            evaluate(Some("inf"), Operator::Add, Some("1")),
            Err(EvalError::MalformedOperand("inf".to_string()))
        );
        assert_eq!(
            evaluate(Some("1"), Operator::Add, Some("NaN")),
            Err(EvalError::MalformedOperand("NaN".to_string()))
        );
    }

    #[test]
    fn division_by_zero_returns_ok_infinity() {
        let result = evaluate(Some("5"), Operator::Divide, Some("0")).unwrap();
        assert!(result.is_infinite());
    }

    #[test]
    fn computed_results_are_valid_operands() {
        // A chained computation feeds a previous result back in, possibly
        // with a sign.
        assert_eq!(evaluate(Some("-1"), Operator::Multiply, Some("4")), Ok(-4.0));
    }

    #[test]
    fn evaluation_is_deterministic() {
        let first = evaluate(Some("0.1"), Operator::Add, Some("0.2"));
        let second = evaluate(Some("0.1"), Operator::Add, Some("0.2"));
        assert_eq!(first, second);
    }
}
