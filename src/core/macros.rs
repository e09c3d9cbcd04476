//! Macros for ergonomic action-sequence construction.

/// Build a `Vec<Action>` from key characters.
///
/// Each key goes through [`Action::from_key`](crate::core::Action::from_key),
/// so the macro accepts exactly what the keypress adapter accepts.
///
/// # Panics
///
/// Panics if a key has no action mapping. Intended for tests and demos
/// where the sequence is a literal.
///
/// # Example
///
/// ```rust
/// use tenkey::core::{Action, Operator};
/// use tenkey::keys;
///
/// let actions = keys!['1', '2', '+', '3', '='];
/// assert_eq!(actions[0], Action::Digit(1));
/// assert_eq!(actions[2], Action::Operation(Operator::Add));
/// assert_eq!(actions[4], Action::Equal);
/// ```
#[macro_export]
macro_rules! keys {
    ($($key:literal),* $(,)?) => {
        vec![
            $(
                $crate::core::Action::from_key($key)
                    .expect(concat!("no action is mapped to key '", $key, "'")),
            )*
        ]
    };
}
