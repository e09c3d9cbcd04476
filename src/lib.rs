//! Tenkey: a pure functional four-function calculator engine
//!
//! Tenkey follows the "pure core, imperative shell" philosophy. The core
//! is a reducer: a single pure, total [`transition`](core::transition)
//! function that consumes the current [`CalculatorState`](core::CalculatorState)
//! and one user [`Action`](core::Action) and returns a brand-new state.
//! Rendering, event dispatch, and anything else that touches the outside
//! world belongs to the host; the thin shell provided here is
//! [`Calculator`](machine::Calculator), which just owns the live state
//! value and the computation tape.
//!
//! # Core Concepts
//!
//! - **State**: operands stay raw strings until `=`, so in-progress entry
//!   like `"12."` is preserved exactly
//! - **Actions**: six tagged variants, one per calculator key class
//! - **No error channel**: rejected input is a no-op transition, never a
//!   panic or an error state
//!
//! # Example
//!
//! ```rust
//! use tenkey::core::{transition, Action, CalculatorState, Operator};
//!
//! let state = CalculatorState::initial();
//! let state = transition(&state, Action::Digit(9));
//! let state = transition(&state, Action::Decimal);
//! let state = transition(&state, Action::Operation(Operator::Add));
//!
//! // The trailing decimal point was normalized when the operand committed.
//! assert_eq!(state.previous.as_deref(), Some("9.0"));
//! assert_eq!(state.operation, Some(Operator::Add));
//! assert!(state.current.is_none());
//! ```

pub mod core;
pub mod eval;
pub mod format;
pub mod machine;

// Re-export commonly used types
pub use core::{transition, Action, CalculatorState, Operator, Tape, TapeEntry};
pub use eval::{evaluate, EvalError};
pub use format::format_operand;
pub use machine::Calculator;
