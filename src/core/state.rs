//! The calculator's state value.
//!
//! `CalculatorState` is an immutable snapshot of the entry state machine.
//! Every action produces a brand-new value via [`transition`](crate::core::transition);
//! nothing mutates a state in place.

use super::action::Operator;
use serde::{Deserialize, Serialize};

/// Snapshot of the calculator between two user actions.
///
/// Operands are kept as the strings the user typed, not as parsed numbers,
/// so in-progress entry like `"12."` survives a render round-trip exactly.
/// Parsing happens once, inside the evaluator, when `=` is pressed.
///
/// # Example
///
/// ```rust
/// use tenkey::core::CalculatorState;
///
/// let state = CalculatorState::initial();
/// assert!(state.is_initial());
/// assert!(state.current.is_none());
/// assert!(!state.overwrite);
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Left operand, already committed by an operator press.
    pub previous: Option<String>,
    /// Operand currently being typed, or a just-computed result.
    pub current: Option<String>,
    /// Pending binary operator, set only while a second operand is awaited.
    pub operation: Option<Operator>,
    /// True only in the state produced by a successful `=`; the next digit
    /// press starts a fresh entry instead of appending.
    pub overwrite: bool,
}

impl CalculatorState {
    /// The empty state the calculator starts in.
    ///
    /// `AC` returns here unconditionally; `initial` is `Default` spelled
    /// for intent.
    pub fn initial() -> Self {
        Self::default()
    }

    /// Check whether this state is the initial state.
    pub fn is_initial(&self) -> bool {
        *self == Self::initial()
    }

    /// Check whether an operator press has been committed and the machine
    /// is awaiting the second operand or its computation.
    pub fn has_pending_operation(&self) -> bool {
        self.operation.is_some()
    }
}

/// Check a string against the typed-operand grammar: `digit+ ('.' digit*)?`.
///
/// This is the shape `current` takes while the user is typing
/// (`overwrite == false`). A just-computed result is the `Display`
/// rendering of a finite `f64` instead and may carry a leading `-`.
///
/// # Example
///
/// ```rust
/// use tenkey::core::is_well_formed_operand;
///
/// assert!(is_well_formed_operand("123"));
/// assert!(is_well_formed_operand("0."));
/// assert!(is_well_formed_operand("12.5"));
/// assert!(!is_well_formed_operand(""));
/// assert!(!is_well_formed_operand(".5"));
/// assert!(!is_well_formed_operand("1.2.3"));
/// assert!(!is_well_formed_operand("-1"));
/// ```
pub fn is_well_formed_operand(value: &str) -> bool {
    let (integer, fraction) = match value.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (value, None),
    };

    if integer.is_empty() || !integer.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }

    fraction.is_none_or(|f| f.chars().all(|c| c.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_empty() {
        let state = CalculatorState::initial();

        assert!(state.previous.is_none());
        assert!(state.current.is_none());
        assert!(state.operation.is_none());
        assert!(!state.overwrite);
    }

    #[test]
    fn initial_equals_default() {
        assert_eq!(CalculatorState::initial(), CalculatorState::default());
    }

    #[test]
    fn is_initial_detects_any_populated_field() {
        assert!(CalculatorState::initial().is_initial());

        let typing = CalculatorState {
            current: Some("7".to_string()),
            ..CalculatorState::initial()
        };
        assert!(!typing.is_initial());

        let after_equal = CalculatorState {
            current: Some("5".to_string()),
            overwrite: true,
            ..CalculatorState::initial()
        };
        assert!(!after_equal.is_initial());
    }

    #[test]
    fn has_pending_operation_tracks_operator() {
        let mut state = CalculatorState::initial();
        assert!(!state.has_pending_operation());

        state.operation = Some(Operator::Add);
        assert!(state.has_pending_operation());
    }

    #[test]
    fn operand_grammar_accepts_typed_shapes() {
        assert!(is_well_formed_operand("0"));
        assert!(is_well_formed_operand("007"));
        assert!(is_well_formed_operand("0."));
        assert!(is_well_formed_operand("9.0"));
        assert!(is_well_formed_operand("123.456"));
    }

    #[test]
    fn operand_grammar_rejects_malformed_shapes() {
        assert!(!is_well_formed_operand(""));
        assert!(!is_well_formed_operand("."));
        assert!(!is_well_formed_operand(".5"));
        assert!(!is_well_formed_operand("1.2.3"));
        assert!(!is_well_formed_operand("-1"));
        assert!(!is_well_formed_operand("1e5"));
        assert!(!is_well_formed_operand("12a"));
    }

    #[test]
    fn state_serializes_correctly() {
        let state = CalculatorState {
            previous: Some("9.0".to_string()),
            current: Some("12".to_string()),
            operation: Some(Operator::Multiply),
            overwrite: false,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: CalculatorState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }

    #[test]
    fn state_is_cloneable_and_comparable() {
        let state = CalculatorState {
            current: Some("3.14".to_string()),
            ..CalculatorState::initial()
        };
        let cloned = state.clone();

        assert_eq!(state, cloned);
        assert_ne!(state, CalculatorState::initial());
    }
}
