// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Job sequencing with deadlines.

use super::error::{ensure_same_length, GreedyError, Result};

/// Outcome of [`job_sequencing`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSchedule {
    /// Indices of the scheduled jobs, in the order they run
    pub jobs: Vec<usize>,

    /// Sum of the profits of the scheduled jobs
    pub total_profit: u64,
}

/// Schedules unit-time jobs to maximize profit.
///
/// Job `i` earns `profits[i]` if it runs in a slot ending no later than
/// `deadlines[i]`. Jobs are considered from most to least profitable (ties by
/// index) and each takes the latest free slot before its deadline. A job with
/// deadline 0 can never run.
///
/// # Errors
///
/// [`GreedyError::InvalidInput`] for mismatched lengths and
/// [`GreedyError::Overflow`] if the total profit overflows.
pub fn job_sequencing(deadlines: &[usize], profits: &[u64]) -> Result<JobSchedule> {
    ensure_same_length(deadlines, profits, ("deadlines", "profits"))?;

    let horizon = deadlines.iter().copied().max().unwrap_or(0).min(deadlines.len());
    let mut slots: Vec<Option<usize>> = vec![None; horizon];

    let mut order: Vec<usize> = (0..deadlines.len()).collect();
    order.sort_by(|&a, &b| profits[b].cmp(&profits[a]));

    for job in order {
        let latest = deadlines[job].min(horizon);
        if let Some(slot) = (0..latest).rev().find(|&s| slots[s].is_none()) {
            slots[slot] = Some(job);
        }
    }

    let jobs: Vec<usize> = slots.into_iter().flatten().collect();
    let total_profit = jobs
        .iter()
        .try_fold(0u64, |acc, &job| acc.checked_add(profits[job]))
        .ok_or(GreedyError::Overflow)?;

    Ok(JobSchedule { jobs, total_profit })
}
