// Copyright © 2024 The euclid-crypto developers
//
// This file is part of euclid-crypto.
//
// euclid-crypto is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains sampling algorithms for uniform distributions over
//! integer intervals.

use crate::arithmetic::euclid::gcd;
use crate::error::MathError;
use num_bigint::{BigInt, RandBigInt};
use num_traits::One;

/// Samples an integer uniformly from the interval `[lower, upper)`.
///
/// Parameters:
/// - `lower`: the inclusive lower bound of the interval
/// - `upper`: the exclusive upper bound of the interval
///
/// Returns a fresh sample from `[lower, upper)` or a [`MathError`]
/// if the interval is empty.
///
/// # Examples
/// ```
/// use euclid_crypto::sample::uniform::sample_uniform;
/// use num_bigint::BigInt;
///
/// let sample = sample_uniform(2, 17).unwrap();
///
/// assert!(BigInt::from(2) <= sample && sample < BigInt::from(17));
/// ```
///
/// # Errors and Failures
/// - Returns a [`MathError`] of type [`MathError::OutOfRange`]
/// if `lower >= upper`.
pub fn sample_uniform(
    lower: impl Into<BigInt>,
    upper: impl Into<BigInt>,
) -> Result<BigInt, MathError> {
    let (lower, upper) = (lower.into(), upper.into());
    if lower >= upper {
        return Err(MathError::OutOfRange(format!(
            "An empty interval [{lower}, {upper}) cannot be sampled."
        )));
    }
    Ok(rand::thread_rng().gen_bigint_range(&lower, &upper))
}

/// Samples an integer uniformly from the interval `[lower, upper)` until
/// the sample is coprime to `n`, giving up after `1000` attempts.
///
/// Parameters:
/// - `lower`: the inclusive lower bound of the interval
/// - `upper`: the exclusive upper bound of the interval
/// - `n`: the modulus the sample has to be coprime to
///
/// Returns a fresh sample from `[lower, upper)` coprime to `n` or a
/// [`MathError`] if the interval is empty or no coprime sample was found.
///
/// # Examples
/// ```
/// use euclid_crypto::arithmetic::euclid::gcd;
/// use euclid_crypto::sample::uniform::sample_coprime;
/// use num_bigint::BigInt;
///
/// let sample = sample_coprime(1, 12, 12).unwrap();
///
/// assert_eq!(BigInt::from(1), gcd(sample, 12));
/// ```
///
/// # Errors and Failures
/// - Returns a [`MathError`] of type [`MathError::OutOfRange`]
/// if `lower >= upper`.
/// - Returns a [`MathError`] of type [`MathError::NotFound`]
/// if `1000` consecutive samples shared a divisor with `n`.
pub fn sample_coprime(
    lower: impl Into<BigInt>,
    upper: impl Into<BigInt>,
    n: impl Into<BigInt>,
) -> Result<BigInt, MathError> {
    let (lower, upper, n) = (lower.into(), upper.into(), n.into());
    if lower >= upper {
        return Err(MathError::OutOfRange(format!(
            "An empty interval [{lower}, {upper}) cannot be sampled."
        )));
    }
    for _ in 0..1000 {
        let candidate = rand::thread_rng().gen_bigint_range(&lower, &upper);
        if gcd(candidate.clone(), n.clone()).is_one() {
            return Ok(candidate);
        }
    }
    Err(MathError::NotFound(format!(
        "No sample from [{lower}, {upper}) coprime to {n} was found within 1000 attempts."
    )))
}
