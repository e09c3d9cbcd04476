//! Imperative shell around the pure transition function.
//!
//! `Calculator` owns the single live `CalculatorState` and replaces it
//! wholesale on every keypress — the reducer does all the thinking, this
//! type just holds the value and keeps the tape.

use crate::core::{transition, Action, CalculatorState, Tape, TapeEntry};
use crate::format::format_operand;
use chrono::Utc;

/// A running calculator session.
///
/// One writer, whole-value replacement: `press` feeds the pure
/// [`transition`](crate::core::transition) function and installs the
/// returned state atomically from the caller's perspective. A successful
/// `=` additionally appends the computation to the [`Tape`].
///
/// # Example
///
/// ```rust
/// use tenkey::keys;
/// use tenkey::machine::Calculator;
///
/// let mut calculator = Calculator::new();
/// calculator.press_all(keys!['1', '2', '3', '4', '+', '1', '=']);
///
/// assert_eq!(calculator.display().as_deref(), Some("1,235"));
/// assert_eq!(calculator.tape().last().unwrap().to_string(), "1234 + 1 = 1235");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Calculator {
    state: CalculatorState,
    tape: Tape,
}

impl Calculator {
    /// Create a calculator in the initial state with an empty tape.
    pub fn new() -> Self {
        Self::default()
    }

    /// The live state.
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// The record of completed computations.
    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// Process one action and return the new live state.
    pub fn press(&mut self, action: Action) -> &CalculatorState {
        let next = transition(&self.state, action);

        // A successful `=` is the only transition that sets overwrite,
        // and the inputs it consumed are still in the outgoing state.
        if action == Action::Equal && next.overwrite {
            if let (Some(first), Some(operator), Some(second), Some(result)) = (
                self.state.previous.clone(),
                self.state.operation,
                self.state.current.clone(),
                next.current.clone(),
            ) {
                self.tape = self.tape.record(TapeEntry {
                    first,
                    operator,
                    second,
                    result,
                    timestamp: Utc::now(),
                });
            }
        }

        self.state = next;
        &self.state
    }

    /// Process a sequence of actions in order.
    pub fn press_all(&mut self, actions: impl IntoIterator<Item = Action>) -> &CalculatorState {
        for action in actions {
            self.press(action);
        }
        &self.state
    }

    /// The formatted current operand, per the display contract.
    pub fn display(&self) -> Option<String> {
        format_operand(self.state.current.as_deref())
    }

    /// The formatted committed operand with its pending operator, the
    /// upper display line of a two-line layout.
    pub fn pending_display(&self) -> Option<String> {
        let previous = format_operand(self.state.previous.as_deref())?;
        let operator = self.state.operation?;
        Some(format!("{previous} {operator}"))
    }

    /// Reset to the initial state, clearing the tape too.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
