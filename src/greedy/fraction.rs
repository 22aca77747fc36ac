// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Exact fractions and their greedy Egyptian decomposition.

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

use super::error::{GreedyError, Result};

/// A rational number kept in lowest terms with a positive denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fraction {
    numerator: i64,
    denominator: i64,
}

impl Fraction {
    /// Creates a fraction and reduces it.
    ///
    /// # Errors
    ///
    /// Returns [`GreedyError::InvalidInput`] if `denominator` is zero and
    /// [`GreedyError::Overflow`] if normalizing the sign overflows.
    pub fn new(numerator: i64, denominator: i64) -> Result<Self> {
        if denominator == 0 {
            return Err(GreedyError::InvalidInput(
                "fraction denominator must not be zero".to_string(),
            ));
        }
        Self::reduced(i128::from(numerator), i128::from(denominator))
    }

    /// Creates the unit fraction `1/denominator`.
    pub fn unit(denominator: i64) -> Result<Self> {
        Self::new(1, denominator)
    }

    /// The numerator in lowest terms.
    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    /// The denominator in lowest terms, always positive.
    pub fn denominator(&self) -> i64 {
        self.denominator
    }

    /// Whether the fraction equals zero.
    pub fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    /// Subtracts `other`, failing instead of overflowing.
    pub fn checked_sub(&self, other: &Fraction) -> Result<Fraction> {
        let numerator = i128::from(self.numerator) * i128::from(other.denominator)
            - i128::from(other.numerator) * i128::from(self.denominator);
        let denominator = i128::from(self.denominator) * i128::from(other.denominator);
        Self::reduced(numerator, denominator)
    }

    fn reduced(numerator: i128, denominator: i128) -> Result<Self> {
        let (numerator, denominator) = if denominator < 0 {
            (-numerator, -denominator)
        } else {
            (numerator, denominator)
        };
        let divisor = gcd(numerator.abs(), denominator);

        Ok(Self {
            numerator: i64::try_from(numerator / divisor).map_err(|_| GreedyError::Overflow)?,
            denominator: i64::try_from(denominator / divisor).map_err(|_| GreedyError::Overflow)?,
        })
    }
}

fn gcd(mut a: i128, mut b: i128) -> i128 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        let left = i128::from(self.numerator) * i128::from(other.denominator);
        let right = i128::from(other.numerator) * i128::from(self.denominator);
        left.cmp(&right)
    }
}

impl Display for Fraction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Decomposes a fraction in (0, 1) into distinct unit fractions.
///
/// Each step takes the largest unit fraction not exceeding the remainder,
/// so denominators strictly increase.
///
/// # Errors
///
/// * [`GreedyError::InvalidInput`] if `fraction` is not strictly between 0 and 1.
/// * [`GreedyError::Overflow`] if a denominator no longer fits in `i64`.
pub fn egyptian_fractions(fraction: Fraction) -> Result<Vec<Fraction>> {
    if fraction.numerator <= 0 || fraction.numerator >= fraction.denominator {
        return Err(GreedyError::InvalidInput(format!(
            "egyptian decomposition needs a fraction between 0 and 1, got {fraction}"
        )));
    }

    let mut remainder = fraction;
    let mut components = Vec::new();

    while !remainder.is_zero() {
        // ceil(d / n)
        let next = (remainder.denominator - 1) / remainder.numerator + 1;
        let unit = Fraction::unit(next)?;
        remainder = remainder.checked_sub(&unit)?;
        components.push(unit);
    }

    tracing::trace!(%fraction, terms = components.len(), "egyptian decomposition");
    Ok(components)
}
