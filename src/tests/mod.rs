// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Test modules for Lanai.
//!
//! Cross-module tests that need fixtures: configuration files, word lists,
//! and the global error reporter. Trie and greedy unit tests live next to
//! their code.


// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{word_strategy, TestFixture};
