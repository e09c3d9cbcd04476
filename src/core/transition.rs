//! The entry state machine's transition function.
//!
//! A single pure reducer: `(state, action) -> state`. Every rejected or
//! malformed action is absorbed as a no-op transition, so the function is
//! total and never panics. There is no error channel here at all; the
//! hosting UI signals rejection implicitly by not visibly updating.

use super::action::{Action, Operator};
use super::state::CalculatorState;
use crate::eval::evaluate;

/// Compute the next calculator state for one user action.
///
/// Pure and total: the input state is never mutated, and every
/// state/action pair is defined. Each call interprets the action relative
/// to the current entry phase — typing the first operand, typing the
/// second, or sitting on a just-computed result (`overwrite == true`).
///
/// # Example
///
/// ```rust
/// use tenkey::core::{transition, Action, CalculatorState, Operator};
///
/// let state = CalculatorState::initial();
/// let state = transition(&state, Action::Digit(2));
/// let state = transition(&state, Action::Operation(Operator::Add));
/// let state = transition(&state, Action::Digit(3));
/// let state = transition(&state, Action::Equal);
///
/// assert_eq!(state.current.as_deref(), Some("5"));
/// assert!(state.overwrite);
/// ```
pub fn transition(state: &CalculatorState, action: Action) -> CalculatorState {
    match action {
        Action::Digit(digit) => press_digit(state, digit),
        Action::Decimal => press_decimal(state),
        Action::Operation(operator) => press_operation(state, operator),
        Action::Delete => press_delete(state),
        Action::Clear => CalculatorState::initial(),
        Action::Equal => press_equal(state),
    }
}

/// Append a digit, or start a fresh entry right after `=`.
fn press_digit(state: &CalculatorState, digit: u8) -> CalculatorState {
    // Malformed payload; only 0..=9 are digits.
    if digit > 9 {
        return state.clone();
    }

    let digit = char::from(b'0' + digit);

    if !state.overwrite {
        let mut current = state.current.clone().unwrap_or_default();
        current.push(digit);
        return CalculatorState {
            current: Some(current),
            ..state.clone()
        };
    }

    // A digit right after `=` begins a brand-new computation.
    CalculatorState {
        current: Some(digit.to_string()),
        ..CalculatorState::initial()
    }
}

/// Add a decimal point, at most one per operand.
fn press_decimal(state: &CalculatorState) -> CalculatorState {
    let Some(current) = &state.current else {
        // A bare decimal point reads as "zero point".
        return CalculatorState {
            current: Some("0.".to_string()),
            ..state.clone()
        };
    };

    if current.contains('.') {
        return state.clone();
    }

    CalculatorState {
        current: Some(format!("{current}.")),
        ..state.clone()
    }
}

/// Commit the current operand and set the pending operator.
fn press_operation(state: &CalculatorState, operator: Operator) -> CalculatorState {
    // A trailing decimal point is syntactically incomplete; resolve it
    // before the operand is carried forward.
    let committed = state.current.clone().map(|current| {
        if current.ends_with('.') {
            format!("{current}0")
        } else {
            current
        }
    });

    // Operator pressed again before any second-operand digits: the user
    // is changing their mind, keep `previous` and swap the operator.
    if state.operation.is_some() && state.current.is_none() {
        return CalculatorState {
            operation: Some(operator),
            ..state.clone()
        };
    }

    // An operator cannot be the very first input.
    if state.previous.is_none() && state.current.is_none() {
        return state.clone();
    }

    // First-operand entry ends here; second-operand entry begins. When
    // digits of a second operand were already typed, this re-commits them
    // as the new left operand and drops the old one without computing —
    // last operator wins.
    CalculatorState {
        previous: committed,
        current: None,
        operation: Some(operator),
        overwrite: false,
    }
}

/// Drop the last character of the current operand, bounded at empty.
fn press_delete(state: &CalculatorState) -> CalculatorState {
    let Some(current) = &state.current else {
        return state.clone();
    };

    let mut shortened = current.clone();
    shortened.pop();

    CalculatorState {
        current: (!shortened.is_empty()).then_some(shortened),
        ..state.clone()
    }
}

/// Evaluate the pending operation, accepting only finite results.
fn press_equal(state: &CalculatorState) -> CalculatorState {
    let Some(operator) = state.operation else {
        return state.clone();
    };

    match evaluate(state.previous.as_deref(), operator, state.current.as_deref()) {
        Ok(value) if value.is_finite() => CalculatorState {
            previous: None,
            current: Some(value.to_string()),
            operation: None,
            overwrite: true,
        },
        // Invalid operands and non-finite results (division by zero)
        // leave the prior state untouched.
        _ => state.clone(),
    }
}
