// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Lanai Trie.
//!
//! Both variants describe invalid input. Absent words are not errors: lookups
//! report them through `bool` and `Option` results.

/// Errors that can occur in Lanai Trie operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LanaiTrieError {
    /// Error when an empty word is inserted and empty words are disabled.
    #[error("Invalid input: empty word not allowed")]
    EmptyWord,

    /// Error when a word has more symbols than a configured depth limit.
    #[error("Invalid input: word of {length} symbols exceeds maximum trie depth of {max_depth}")]
    WordTooLong {
        /// Number of symbols in the rejected word.
        length: usize,
        /// The maximum allowed depth.
        max_depth: usize,
    },
}
