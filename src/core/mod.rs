//! Core calculator types and logic.
//!
//! This module contains the pure functional core of the calculator:
//! - The `CalculatorState` value and its operand grammar
//! - Actions and the operator set
//! - The reducer-style `transition` function
//! - The immutable computation tape
//!
//! All logic in this module is pure (no side effects), following the
//! "pure core, imperative shell" philosophy; the shell lives in
//! [`machine`](crate::machine).

mod action;
mod macros;
mod state;
mod tape;
mod transition;

pub use action::{Action, Operator};
pub use state::{is_well_formed_operand, CalculatorState};
pub use tape::{Tape, TapeEntry};
pub use transition::transition;
