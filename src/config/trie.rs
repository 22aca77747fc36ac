// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Validation of the `[trie]` configuration section.

use super::{ConfigResult, Validate};
use crate::data_structures::LanaiTrieConfig;
use crate::error::config::ConfigError;

impl Validate for LanaiTrieConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_depth == Some(0) {
            return Err(ConfigError::ValidationError(
                "trie.max_depth must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
