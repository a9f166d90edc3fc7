// Copyright © 2024 The euclid-crypto developers
//
// This file is part of euclid-crypto.
//
// euclid-crypto is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains the Euclidean algorithm, its extended variant
//! recording every division step, and the back substitution turning such a
//! record into a linear factorization of the greatest common divisor,
//! following Algorithms 2.104 and 2.107 in [\[1\]](<../index.html#:~:text=[1]>).

use crate::error::MathError;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

/// Computes the greatest common divisor of two integers with the iterative
/// Euclidean algorithm.
///
/// The remainders are taken with floor division, hence the result is
/// non-negative for the non-negative operands used throughout this crate.
///
/// Parameters:
/// - `a`: the first integer
/// - `b`: the second integer
///
/// Returns the greatest common divisor of `a` and `b` as a [`BigInt`].
///
/// # Examples
/// ```
/// use euclid_crypto::arithmetic::euclid::gcd;
/// use num_bigint::BigInt;
///
/// assert_eq!(BigInt::from(12), gcd(36, 24));
/// assert_eq!(BigInt::from(1), gcd(13, 7));
/// ```
pub fn gcd(a: impl Into<BigInt>, b: impl Into<BigInt>) -> BigInt {
    let (mut a, mut b) = (a.into(), b.into());
    while !b.is_zero() {
        let r = a.mod_floor(&b);
        a = b;
        b = r;
    }
    a
}

/// One Euclidean division `dividend = divisor * quotient + remainder` as
/// recorded by [`extended_gcd`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivisionStep {
    pub dividend: BigInt,
    pub divisor: BigInt,
    pub quotient: BigInt,
    pub remainder: BigInt,
}

/// The ordered record of division steps produced by [`extended_gcd`].
/// The final step always carries remainder `0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtendedGcdTrace {
    pub steps: Vec<DivisionStep>,
}

impl ExtendedGcdTrace {
    /// Returns the greatest common divisor the recorded divisions computed,
    /// i.e. the last remainder before the division was exact.
    /// If the very first division is already exact, its divisor is the
    /// greatest common divisor.
    ///
    /// # Examples
    /// ```
    /// use euclid_crypto::arithmetic::euclid::extended_gcd;
    /// use num_bigint::BigInt;
    ///
    /// let trace = extended_gcd(13, 7).unwrap();
    ///
    /// assert_eq!(BigInt::from(1), trace.gcd());
    /// ```
    ///
    /// # Panics ...
    /// - if the record contains no steps.
    pub fn gcd(&self) -> BigInt {
        if self.steps.len() < 2 {
            self.steps[0].divisor.clone()
        } else {
            self.steps[self.steps.len() - 2].remainder.clone()
        }
    }
}

/// Computes all division steps of the extended Euclidean algorithm for the
/// pair `(m, a)`: each step divides the previous divisor by the previous
/// remainder until the division is exact. At least one step is recorded.
///
/// Parameters:
/// - `m`: the dividend of the first division
/// - `a`: the divisor of the first division
///
/// Returns the full [`ExtendedGcdTrace`] or a [`MathError`] if `m` or `a`
/// is smaller than `1`.
///
/// # Examples
/// ```
/// use euclid_crypto::arithmetic::euclid::extended_gcd;
/// use num_bigint::BigInt;
///
/// let trace = extended_gcd(13, 7).unwrap();
///
/// assert_eq!(3, trace.steps.len());
/// assert_eq!(BigInt::from(6), trace.steps[0].remainder);
/// assert_eq!(BigInt::from(1), trace.gcd());
/// ```
///
/// # Errors and Failures
/// - Returns a [`MathError`] of type [`MathError::OutOfRange`]
/// if `m` or `a` is smaller than `1`.
pub fn extended_gcd(
    m: impl Into<BigInt>,
    a: impl Into<BigInt>,
) -> Result<ExtendedGcdTrace, MathError> {
    let (mut m, mut a) = (m.into(), a.into());
    if m < BigInt::one() || a < BigInt::one() {
        return Err(MathError::OutOfRange(format!(
            "The extended Euclidean algorithm requires positive integers, got ({m}, {a})."
        )));
    }

    let mut steps = Vec::new();
    loop {
        let (quotient, remainder) = m.div_mod_floor(&a);
        steps.push(DivisionStep {
            dividend: m.clone(),
            divisor: a.clone(),
            quotient,
            remainder: remainder.clone(),
        });
        m = a;
        a = remainder;
        if a.is_zero() {
            break;
        }
    }
    Ok(ExtendedGcdTrace { steps })
}

/// The Bézout coefficients back-substituted from an [`ExtendedGcdTrace`],
/// aligned with the forward order of the record: every step `i` satisfies
/// `gcd = steps[i].dividend * x[i] + steps[i].divisor * y[i]`, so the first
/// entries express the greatest common divisor in the initial pair `(m, a)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BezoutCoefficients {
    pub x: Vec<BigInt>,
    pub y: Vec<BigInt>,
}

/// Back-substitutes the recorded division steps into a linear factorization
/// of the greatest common divisor, i.e. into [`BezoutCoefficients`] with
/// `gcd(m, a) = m * x[0] + a * y[0]`.
///
/// The substitution folds over the record in reverse, skipping the final
/// exact division: there the greatest common divisor appears as
/// `0 * dividend + 1 * divisor`, and each earlier step replaces the larger
/// operand through its division identity.
///
/// Parameters:
/// - `trace`: the record produced by [`extended_gcd`]
///
/// Returns the [`BezoutCoefficients`] of the traced pair.
///
/// # Examples
/// ```
/// use euclid_crypto::arithmetic::euclid::{extended_gcd, linear_factorization};
/// use num_bigint::BigInt;
///
/// let trace = extended_gcd(13, 7).unwrap();
/// let coefficients = linear_factorization(&trace);
///
/// // 1 = 13 * (-1) + 7 * 2
/// assert_eq!(BigInt::from(-1), coefficients.x[0]);
/// assert_eq!(BigInt::from(2), coefficients.y[0]);
/// ```
pub fn linear_factorization(trace: &ExtendedGcdTrace) -> BezoutCoefficients {
    let seed = (
        vec![BigInt::zero()],
        vec![BigInt::one()],
        BigInt::zero(),
        BigInt::one(),
    );
    let (mut x, mut y, _, _) =
        trace
            .steps
            .iter()
            .rev()
            .skip(1)
            .fold(seed, |(mut x, mut y, prev_x, prev_y), step| {
                let next_y = &prev_x - &step.quotient * &prev_y;
                x.push(prev_y.clone());
                y.push(next_y.clone());
                (x, y, prev_y, next_y)
            });
    x.reverse();
    y.reverse();
    BezoutCoefficients { x, y }
}

#[cfg(test)]
mod test_gcd {
    use super::gcd;
    use num_bigint::BigInt;

    /// Ensure that classic pairs compute correctly.
    #[test]
    fn small_pairs() {
        assert_eq!(BigInt::from(12), gcd(36, 24));
        assert_eq!(BigInt::from(12), gcd(24, 36));
        assert_eq!(BigInt::from(1), gcd(13, 7));
        assert_eq!(BigInt::from(11), gcd(22, 33));
    }

    /// Ensure that zero operands behave like the mathematical convention.
    #[test]
    fn zero_operands() {
        assert_eq!(BigInt::from(5), gcd(5, 0));
        assert_eq!(BigInt::from(5), gcd(0, 5));
        assert_eq!(BigInt::from(0), gcd(0, 0));
    }

    /// Ensure that operands beyond machine word size are handled.
    #[test]
    fn large_operands() {
        let a = BigInt::from(3) << 80;
        let b = BigInt::from(5) << 75;

        assert_eq!(BigInt::from(1) << 75, gcd(a, b));
    }
}

#[cfg(test)]
mod test_extended_gcd {
    use super::extended_gcd;
    use num_bigint::BigInt;

    /// Ensure that the record contains every division step of the
    /// worked pair `(13, 7)`.
    #[test]
    fn records_all_steps() {
        let trace = extended_gcd(13, 7).unwrap();

        assert_eq!(3, trace.steps.len());
        assert_eq!(BigInt::from(13), trace.steps[0].dividend);
        assert_eq!(BigInt::from(7), trace.steps[0].divisor);
        assert_eq!(BigInt::from(1), trace.steps[0].quotient);
        assert_eq!(BigInt::from(6), trace.steps[0].remainder);
        assert_eq!(BigInt::from(0), trace.steps[2].remainder);
    }

    /// Ensure that every step satisfies its division identity.
    #[test]
    fn division_identities() {
        let trace = extended_gcd(240, 46).unwrap();

        for step in &trace.steps {
            assert_eq!(
                step.dividend,
                &step.divisor * &step.quotient + &step.remainder
            );
        }
    }

    /// Ensure that an exact first division still records one step and
    /// reports the divisor as greatest common divisor.
    #[test]
    fn exact_first_division() {
        let trace = extended_gcd(4, 2).unwrap();

        assert_eq!(1, trace.steps.len());
        assert_eq!(BigInt::from(2), trace.gcd());
    }

    /// Ensure that the computed greatest common divisor matches the
    /// simple algorithm.
    #[test]
    fn matches_gcd() {
        for m in 1..30 {
            for a in 1..30 {
                let trace = extended_gcd(m, a).unwrap();
                assert_eq!(super::gcd(m, a), trace.gcd());
            }
        }
    }

    /// Ensure that non-positive operands are rejected.
    #[test]
    fn rejects_non_positive() {
        assert!(extended_gcd(13, 0).is_err());
        assert!(extended_gcd(0, 13).is_err());
        assert!(extended_gcd(-13, 7).is_err());
        assert!(extended_gcd(13, -7).is_err());
    }
}
