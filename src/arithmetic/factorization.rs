// Copyright © 2024 The euclid-crypto developers
//
// This file is part of euclid-crypto.
//
// euclid-crypto is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module factors composite integers with Fermat's difference of
//! squares method and the rho method of
//! [\[4\]](<../index.html#:~:text=[4]>).

use crate::arithmetic::euclid::gcd;
use crate::arithmetic::primality::is_prime;
use crate::error::MathError;
use crate::utils::sqrt::{ceil_sqrt, is_perfect_square};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, ToPrimitive};
use serde::{Deserialize, Serialize};

/// A pair of factors with `p * q = n`, ordered such that `p >= q`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorPair {
    pub p: BigInt,
    pub q: BigInt,
}

impl FactorPair {
    /// Creates a new [`FactorPair`] from two factors, placing the larger
    /// one first.
    ///
    /// Parameters:
    /// - `a`: the first factor
    /// - `b`: the second factor
    ///
    /// Returns the pair ordered such that `p >= q`.
    ///
    /// # Examples
    /// ```
    /// use euclid_crypto::arithmetic::factorization::FactorPair;
    /// use num_bigint::BigInt;
    ///
    /// let pair = FactorPair::new(3, 11);
    ///
    /// assert_eq!(BigInt::from(11), pair.p);
    /// assert_eq!(BigInt::from(3), pair.q);
    /// ```
    pub fn new(a: impl Into<BigInt>, b: impl Into<BigInt>) -> Self {
        let (a, b) = (a.into(), b.into());
        if a >= b {
            FactorPair { p: a, q: b }
        } else {
            FactorPair { p: b, q: a }
        }
    }
}

/// Factors `n = x^2 - y^2 = (x + y) * (x - y)` by searching upwards from
/// `x = ⌈√n⌉` until `x^2 - n` is a perfect square.
///
/// The search is fast whenever the two factors are close to `√n` and
/// degrades towards trial division for unbalanced factors. Even `n` that
/// are not multiples of `4` are rejected, as they are never a difference
/// of two squares.
///
/// Parameters:
/// - `n`: the composite integer to factor
///
/// Returns the [`FactorPair`] `(x + y, x - y)` or a [`MathError`] if `n`
/// cannot be factored this way.
///
/// # Examples
/// ```
/// use euclid_crypto::arithmetic::factorization::fermat_factorize;
/// use num_bigint::BigInt;
///
/// let pair = fermat_factorize(33).unwrap();
///
/// assert_eq!(BigInt::from(11), pair.p);
/// assert_eq!(BigInt::from(3), pair.q);
/// ```
///
/// # Errors and Failures
/// - Returns a [`MathError`] of type [`MathError::OutOfRange`]
/// if `n` is negative or congruent to `2` modulo `4`.
/// - Returns a [`MathError`] of type [`MathError::NotComposite`]
/// if `n` is prime.
pub fn fermat_factorize(n: impl Into<BigInt>) -> Result<FactorPair, MathError> {
    let n = n.into();
    if n < BigInt::from(0) {
        return Err(MathError::OutOfRange(format!(
            "Fermat's factorization method requires a non-negative integer, got {n}."
        )));
    }
    if is_prime(n.clone()) {
        return Err(MathError::NotComposite(format!(
            "{n} is prime and cannot be factored into two non-trivial factors."
        )));
    }
    if (&n).mod_floor(&BigInt::from(4)) == BigInt::from(2) {
        return Err(MathError::OutOfRange(format!(
            "{n} is congruent to 2 modulo 4 and therefore not a difference of two squares."
        )));
    }

    let mut x = ceil_sqrt(&n);
    let mut y_squared = &x * &x - &n;
    while !is_perfect_square(&y_squared) {
        x += 1;
        y_squared = &x * &x - &n;
    }
    let y = y_squared.sqrt();
    Ok(FactorPair::new(&x + &y, &x - &y))
}

/// The result of a [`pollard_rho`] run over its recorded divisors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PollardOutcome {
    /// A full factorization `n = p * q` into two primes was found.
    Factored(FactorPair),
    /// Only a non-trivial divisor of `n` was found.
    PartiallyFactored(BigInt),
    /// Every recorded divisor was trivial.
    RetryWithDifferentConstant,
}

/// Runs Pollard's rho method on `n` with the iteration
/// `f(x) = (x^2 + c) mod n`, starting both cursors at `x0`.
///
/// Each round advances the slow cursor once and the fast cursor twice and
/// records `gcd(x - y, n)`. The recording stops as soon as the slow cursor
/// revisits `x0` or after `n` rounds. The recorded divisors are then
/// scanned twice: first for a non-trivial divisor `d` such that both `d`
/// and `n / d` are prime, then for any non-trivial divisor at all.
///
/// Parameters:
/// - `n`: the composite integer to factor
/// - `x0`: the common starting value of both cursors
/// - `c`: the additive constant of the iteration
///
/// Returns the [`PollardOutcome`] of the run or a [`MathError`] if `n` is
/// out of range or prime.
///
/// # Examples
/// ```
/// use euclid_crypto::arithmetic::factorization::{pollard_rho, FactorPair, PollardOutcome};
///
/// let outcome = pollard_rho(33, 2, 1).unwrap();
///
/// assert_eq!(PollardOutcome::Factored(FactorPair::new(3, 11)), outcome);
/// ```
///
/// # Errors and Failures
/// - Returns a [`MathError`] of type [`MathError::OutOfRange`]
/// if `n` is smaller than `2`.
/// - Returns a [`MathError`] of type [`MathError::NotComposite`]
/// if `n` is prime.
pub fn pollard_rho(
    n: impl Into<BigInt>,
    x0: impl Into<BigInt>,
    c: impl Into<BigInt>,
) -> Result<PollardOutcome, MathError> {
    let (n, x0, c) = (n.into(), x0.into(), c.into());
    if n < BigInt::from(2) {
        return Err(MathError::OutOfRange(format!(
            "The rho method requires an integer of at least 2, got {n}."
        )));
    }
    if is_prime(n.clone()) {
        return Err(MathError::NotComposite(format!(
            "{n} is prime and cannot be factored into two non-trivial factors."
        )));
    }

    let advance = |x: &BigInt| (x * x + &c).mod_floor(&n);

    // the cycle of f contains at most n values, so n rounds suffice
    let rounds = (&n).to_u64().unwrap_or(u64::MAX);
    let mut x = x0.clone();
    let mut y = x0.clone();
    let mut divisors = Vec::new();
    for _ in 0..rounds {
        x = advance(&x);
        y = advance(&advance(&y));
        divisors.push(gcd(&x - &y, n.clone()));
        if x == x0 {
            break;
        }
    }

    for d in &divisors {
        if d > &BigInt::one() && d < &n {
            let cofactor = &n / d;
            if is_prime(d.clone()) && is_prime(cofactor.clone()) && d * &cofactor == n {
                return Ok(PollardOutcome::Factored(FactorPair::new(
                    d.clone(),
                    cofactor,
                )));
            }
        }
    }
    for d in divisors {
        if d > BigInt::one() && d < n {
            return Ok(PollardOutcome::PartiallyFactored(d));
        }
    }
    Ok(PollardOutcome::RetryWithDifferentConstant)
}


#[cfg(test)]
mod test_pollard_rho {
    use super::{pollard_rho, FactorPair, PollardOutcome};
    use crate::error::MathError;
    use num_bigint::BigInt;

    /// Ensure that a semiprime is fully factored.
    #[test]
    fn factors_semiprime() {
        let outcome = pollard_rho(33, 2, 1).unwrap();

        assert_eq!(PollardOutcome::Factored(FactorPair::new(11, 3)), outcome);
    }

    /// Ensure that a run stopped by the seed revisit still yields the full
    /// factorization.
    #[test]
    fn seed_revisit() {
        let outcome = pollard_rho(15, 2, 1).unwrap();

        assert_eq!(PollardOutcome::Factored(FactorPair::new(5, 3)), outcome);
    }

    /// Ensure that the classic example `n = 91` factors into `13 * 7`.
    #[test]
    fn textbook_example() {
        let outcome = pollard_rho(91, 2, 1).unwrap();

        assert_eq!(PollardOutcome::Factored(FactorPair::new(13, 7)), outcome);
    }

    /// Ensure that a run without any non-trivial divisor asks for a
    /// different constant.
    #[test]
    fn trivial_divisors_only() {
        let outcome = pollard_rho(15, 1, 2).unwrap();

        assert_eq!(PollardOutcome::RetryWithDifferentConstant, outcome);
    }

    /// Ensure that an integer with more than two prime factors is reported
    /// as partially factored.
    #[test]
    fn partial_factorization() {
        let outcome = pollard_rho(30, 2, 1).unwrap();

        assert_eq!(
            PollardOutcome::PartiallyFactored(BigInt::from(3)),
            outcome
        );
    }

    /// Ensure that primes are rejected as not composite.
    #[test]
    fn rejects_primes() {
        assert!(matches!(pollard_rho(13, 2, 1), Err(MathError::NotComposite(_))));
    }

    /// Ensure that integers below `2` are rejected.
    #[test]
    fn rejects_out_of_range() {
        assert!(matches!(pollard_rho(1, 2, 1), Err(MathError::OutOfRange(_))));
        assert!(matches!(pollard_rho(0, 2, 1), Err(MathError::OutOfRange(_))));
        assert!(matches!(pollard_rho(-4, 2, 1), Err(MathError::OutOfRange(_))));
    }
}
