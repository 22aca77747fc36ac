// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Activity selection: the largest set of mutually compatible activities.
//!
//! Activities are closed intervals `[start, finish]`, so two activities that
//! touch at an endpoint overlap.

use super::error::{ensure_same_length, GreedyError, Result};

/// Largest input accepted by the exhaustive solver.
pub const MAX_BRUTE_FORCE_ACTIVITIES: usize = 20;

fn overlaps(a: (i64, i64), b: (i64, i64)) -> bool {
    !(b.0 > a.1 || b.1 < a.0)
}

fn validate(start: &[i64], finish: &[i64]) -> Result<()> {
    ensure_same_length(start, finish, ("start", "finish"))?;
    if let Some(idx) = start.iter().zip(finish).position(|(s, f)| s > f) {
        return Err(GreedyError::InvalidInput(format!(
            "activity {idx} starts after it finishes"
        )));
    }
    Ok(())
}

/// Finds an optimal activity set by trying every subset.
///
/// Among optimal sets the lexicographically smallest list of indices wins.
///
/// # Errors
///
/// [`GreedyError::InvalidInput`] for mismatched lengths, an activity that
/// starts after it finishes, or more than [`MAX_BRUTE_FORCE_ACTIVITIES`]
/// activities.
pub fn activity_selection_brute(start: &[i64], finish: &[i64]) -> Result<Vec<usize>> {
    validate(start, finish)?;
    let n = start.len();
    if n > MAX_BRUTE_FORCE_ACTIVITIES {
        return Err(GreedyError::InvalidInput(format!(
            "exhaustive search supports at most {MAX_BRUTE_FORCE_ACTIVITIES} activities, got {n}"
        )));
    }

    let activities: Vec<(i64, i64)> = start.iter().copied().zip(finish.iter().copied()).collect();
    let mut best: Vec<usize> = Vec::new();

    for mask in 0u32..(1u32 << n) {
        let chosen: Vec<usize> = (0..n).filter(|i| mask & (1 << i) != 0).collect();
        if chosen.len() < best.len() {
            continue;
        }

        let compatible = chosen.iter().enumerate().all(|(pos, &i)| {
            chosen[pos + 1..]
                .iter()
                .all(|&j| !overlaps(activities[i], activities[j]))
        });

        if compatible && (chosen.len() > best.len() || chosen < best) {
            best = chosen;
        }
    }

    Ok(best)
}

/// Selects activities greedily by earliest finish time.
///
/// `finish` must be sorted in ascending order.
///
/// # Errors
///
/// [`GreedyError::InvalidInput`] for mismatched lengths, an activity that
/// starts after it finishes, or unsorted finish times.
pub fn activity_selection_greedy(start: &[i64], finish: &[i64]) -> Result<Vec<usize>> {
    validate(start, finish)?;
    if finish.windows(2).any(|w| w[0] > w[1]) {
        return Err(GreedyError::InvalidInput(
            "finish times must be sorted in ascending order".to_string(),
        ));
    }
    if start.is_empty() {
        return Ok(Vec::new());
    }

    let mut selected = vec![0];
    let mut last_finish = finish[0];
    for i in 1..start.len() {
        if start[i] > last_finish {
            selected.push(i);
            last_finish = finish[i];
        }
    }
    Ok(selected)
}
