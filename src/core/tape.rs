//! Paper-tape record of completed computations.
//!
//! Provides immutable tracking of every successful `=` press, following
//! functional programming principles: recording returns a new tape and
//! never mutates the receiver.

use super::action::Operator;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of a single completed computation.
///
/// Operands and result are kept as the strings the calculator actually
/// held, so the tape replays exactly what was on the display.
///
/// # Example
///
/// ```rust
/// use tenkey::core::{Operator, TapeEntry};
/// use chrono::Utc;
///
/// let entry = TapeEntry {
///     first: "2".to_string(),
///     operator: Operator::Add,
///     second: "3".to_string(),
///     result: "5".to_string(),
///     timestamp: Utc::now(),
/// };
/// assert_eq!(entry.to_string(), "2 + 3 = 5");
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct TapeEntry {
    /// The committed left operand.
    pub first: String,
    /// The operator that was applied.
    pub operator: Operator,
    /// The typed right operand.
    pub second: String,
    /// The stringified finite result.
    pub result: String,
    /// When the computation completed.
    pub timestamp: DateTime<Utc>,
}

impl std::fmt::Display for TapeEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            self.first, self.operator, self.second, self.result
        )
    }
}

/// Ordered, immutable history of completed computations.
///
/// # Example
///
/// ```rust
/// use tenkey::core::{Operator, Tape, TapeEntry};
/// use chrono::Utc;
///
/// let tape = Tape::new();
/// assert!(tape.is_empty());
///
/// let tape = tape.record(TapeEntry {
///     first: "2".to_string(),
///     operator: Operator::Add,
///     second: "3".to_string(),
///     result: "5".to_string(),
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(tape.len(), 1);
/// assert_eq!(tape.last().unwrap().result, "5");
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Tape {
    entries: Vec<TapeEntry>,
}

impl Tape {
    /// Create a new empty tape.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed computation, returning a new tape.
    ///
    /// This is a pure function - it does not mutate the existing tape but
    /// returns a new one with the entry appended.
    pub fn record(&self, entry: TapeEntry) -> Self {
        let mut entries = self.entries.clone();
        entries.push(entry);
        Self { entries }
    }

    /// All recorded entries, oldest first.
    pub fn entries(&self) -> &[TapeEntry] {
        &self.entries
    }

    /// The most recent computation, if any.
    pub fn last(&self) -> Option<&TapeEntry> {
        self.entries.last()
    }

    /// Number of recorded computations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether nothing has been computed yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
