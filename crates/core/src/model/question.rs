use std::fmt;

use serde::{Deserialize, Serialize};

/// A single multiplication problem.
///
/// Both operands are fixed at construction; the answer and the prompt
/// text are derived from them and never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    first: u32,
    second: u32,
}

impl Question {
    #[must_use]
    pub fn new(first: u32, second: u32) -> Self {
        Self { first, second }
    }

    #[must_use]
    pub fn first(&self) -> u32 {
        self.first
    }

    #[must_use]
    pub fn second(&self) -> u32 {
        self.second
    }

    /// The product of the two operands.
    ///
    /// Computed in `u64`, so it cannot overflow for `u32` operands.
    #[must_use]
    pub fn answer(&self) -> u64 {
        u64::from(self.first) * u64::from(self.second)
    }

    /// Returns true when `value` equals the answer exactly.
    ///
    /// Negative values are legitimate input but can never be correct.
    #[must_use]
    pub fn is_correct(&self, value: i64) -> bool {
        u64::try_from(value).is_ok_and(|v| v == self.answer())
    }

    /// Human-readable prompt, e.g. `4 × 7`.
    #[must_use]
    pub fn prompt(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} × {}", self.first, self.second)
    }
}
