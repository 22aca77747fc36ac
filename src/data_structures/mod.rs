// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Data structures for Lanai.
//!
//! All implementations are single-threaded and lock-free by construction;
//! sharing across threads is done by the caller (see [`SharedTrie`]).

pub mod lanai_trie;

// Re-export common data structures
pub use lanai_trie::{
    shortest_unique_prefix, LanaiTrie, LanaiTrieConfig, LanaiTrieError, LanaiTrieResult,
    SharedTrie, TrieNode,
};
