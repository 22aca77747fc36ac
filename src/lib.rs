// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lanai Library
//!
//! An in-memory prefix trie with counted insertion, deletion that keeps
//! shared prefixes, longest stored prefix lookup, and shortest unique prefix
//! extraction, together with a handful of greedy algorithms and the
//! configuration, error, and word-list plumbing used by the `lanai` binary.
//!
//! # Architecture
//!
//! - [`data_structures`]: the trie
//! - [`greedy`]: fractions, activity selection, job sequencing
//! - [`config`]: layered configuration with validation
//! - [`error`]: crate-wide error type and reporting
//! - [`wordlist`]: reading newline-delimited word files

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod error;
pub mod greedy;
pub mod wordlist;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use data_structures::{shortest_unique_prefix, LanaiTrie, LanaiTrieConfig, SharedTrie};
pub use error::{LanaiError, LanaiResult};

/// Version information for Lanai.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

