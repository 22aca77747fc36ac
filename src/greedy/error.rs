// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the greedy algorithms.

use thiserror::Error;

/// Errors that can occur in the greedy algorithms.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GreedyError {
    /// Input violated a stated precondition.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Checked integer arithmetic overflowed.
    #[error("Arithmetic overflow")]
    Overflow,
}

/// Result type for the greedy algorithms.
pub type Result<T> = std::result::Result<T, GreedyError>;

/// Rejects parallel slices whose lengths differ.
pub(crate) fn ensure_same_length<A, B>(left: &[A], right: &[B], names: (&str, &str)) -> Result<()> {
    if left.len() != right.len() {
        return Err(GreedyError::InvalidInput(format!(
            "{} and {} must have the same length ({} != {})",
            names.0,
            names.1,
            left.len(),
            right.len()
        )));
    }
    Ok(())
}
