// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Greedy algorithms over small numeric inputs.
//!
//! Exact fractions with Egyptian decomposition, activity selection (exhaustive
//! and greedy), and job sequencing with deadlines. Every function validates
//! its input and reports precondition violations as
//! [`GreedyError::InvalidInput`].
//!
//! # Example
//!
//! ```
//! use lanai_lib::greedy::{activity_selection_greedy, egyptian_fractions, Fraction};
//!
//! let parts = egyptian_fractions(Fraction::new(2, 3).unwrap()).unwrap();
//! assert_eq!(parts, vec![Fraction::unit(2).unwrap(), Fraction::unit(6).unwrap()]);
//!
//! let chosen = activity_selection_greedy(&[1, 3, 0, 5, 8, 5], &[2, 4, 6, 7, 9, 9]).unwrap();
//! assert_eq!(chosen, vec![0, 1, 3, 4]);
//! ```

mod activity;
mod error;
mod fraction;
mod jobs;

pub use activity::{activity_selection_brute, activity_selection_greedy, MAX_BRUTE_FORCE_ACTIVITIES};
pub use error::{GreedyError, Result};
pub use fraction::{egyptian_fractions, Fraction};
pub use jobs::{job_sequencing, JobSchedule};
