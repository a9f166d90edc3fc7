// Copyright © 2024 The euclid-crypto developers
//
// This file is part of euclid-crypto.
//
// euclid-crypto is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains the four elementary operations in `Z/mZ`.
//! Subtraction and division are reduced to addition and multiplication
//! with the matching inverse from [`crate::arithmetic::inverse`].

use crate::arithmetic::inverse::{additive_inverse, multiplicative_inverse, TraceMode};
use crate::error::MathError;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};

/// Computes `(a + b) mod m`.
///
/// Parameters:
/// - `m`: the modulus of the ring
/// - `a`: the first summand in `[0, m)`
/// - `b`: the second summand in `[0, m)`
///
/// Returns the sum as a residue in `[0, m)` or a [`MathError`]
/// if an operand violates its range.
///
/// # Examples
/// ```
/// use euclid_crypto::arithmetic::ring;
/// use num_bigint::BigInt;
///
/// let sum = ring::add(13, 7, 9).unwrap();
///
/// assert_eq!(BigInt::from(3), sum);
/// ```
///
/// # Errors and Failures
/// - Returns a [`MathError`] of type [`MathError::InvalidModulus`]
/// if `m` is smaller than `2`.
/// - Returns a [`MathError`] of type [`MathError::OutOfRange`]
/// if `a` or `b` does not lie in `[0, m)`.
pub fn add(
    m: impl Into<BigInt>,
    a: impl Into<BigInt>,
    b: impl Into<BigInt>,
) -> Result<BigInt, MathError> {
    let (m, a, b) = (m.into(), a.into(), b.into());
    check_modulus(&m)?;
    check_residue(&a, &BigInt::zero(), &m)?;
    check_residue(&b, &BigInt::zero(), &m)?;
    Ok((a + b).mod_floor(&m))
}

/// Computes `(a - b) mod m` as `a` plus the additive inverse of `b`.
///
/// Parameters:
/// - `m`: the modulus of the ring
/// - `a`: the minuend in `[0, m)`
/// - `b`: the subtrahend in `[0, m)`
///
/// Returns the difference as a residue in `[0, m)` or a [`MathError`]
/// if an operand violates its range.
///
/// # Examples
/// ```
/// use euclid_crypto::arithmetic::ring;
/// use num_bigint::BigInt;
///
/// let difference = ring::sub(13, 7, 9).unwrap();
///
/// assert_eq!(BigInt::from(11), difference);
/// ```
///
/// # Errors and Failures
/// - Returns a [`MathError`] of type [`MathError::InvalidModulus`]
/// if `m` is smaller than `2`.
/// - Returns a [`MathError`] of type [`MathError::OutOfRange`]
/// if `a` or `b` does not lie in `[0, m)`.
pub fn sub(
    m: impl Into<BigInt>,
    a: impl Into<BigInt>,
    b: impl Into<BigInt>,
) -> Result<BigInt, MathError> {
    let (m, a, b) = (m.into(), a.into(), b.into());
    check_modulus(&m)?;
    check_residue(&a, &BigInt::zero(), &m)?;
    let inverse = additive_inverse(m.clone(), b, TraceMode::Silent)?;
    Ok((a + inverse.residue).mod_floor(&m))
}

/// Computes `(a * b) mod m`.
///
/// Parameters:
/// - `m`: the modulus of the ring
/// - `a`: the first factor in `[1, m)`
/// - `b`: the second factor in `[1, m)`
///
/// Returns the product as a residue in `[0, m)` or a [`MathError`]
/// if an operand violates its range.
///
/// # Examples
/// ```
/// use euclid_crypto::arithmetic::ring;
/// use num_bigint::BigInt;
///
/// let product = ring::mul(13, 7, 9).unwrap();
///
/// assert_eq!(BigInt::from(11), product);
/// ```
///
/// # Errors and Failures
/// - Returns a [`MathError`] of type [`MathError::InvalidModulus`]
/// if `m` is smaller than `2`.
/// - Returns a [`MathError`] of type [`MathError::OutOfRange`]
/// if `a` or `b` does not lie in `[1, m)`.
pub fn mul(
    m: impl Into<BigInt>,
    a: impl Into<BigInt>,
    b: impl Into<BigInt>,
) -> Result<BigInt, MathError> {
    let (m, a, b) = (m.into(), a.into(), b.into());
    check_modulus(&m)?;
    check_residue(&a, &BigInt::one(), &m)?;
    check_residue(&b, &BigInt::one(), &m)?;
    Ok((a * b).mod_floor(&m))
}

/// Computes `(a / b) mod m` as `a` times the multiplicative inverse of `b`.
///
/// Parameters:
/// - `m`: the modulus of the ring
/// - `a`: the dividend in `[1, m)`
/// - `b`: the divisor in `[1, m)`, coprime to `m`
///
/// Returns the quotient as a residue in `[0, m)` or a [`MathError`]
/// if an operand violates its range or `b` is not invertible.
///
/// # Examples
/// ```
/// use euclid_crypto::arithmetic::ring;
/// use num_bigint::BigInt;
///
/// let quotient = ring::div(13, 7, 9).unwrap();
///
/// assert_eq!(BigInt::from(8), quotient);
/// ```
///
/// # Errors and Failures
/// - Returns a [`MathError`] of type [`MathError::InvalidModulus`]
/// if `m` is smaller than `2`.
/// - Returns a [`MathError`] of type [`MathError::OutOfRange`]
/// if `a` or `b` does not lie in `[1, m)`.
/// - Returns a [`MathError`] of type [`MathError::NotCoprime`]
/// if `b` has no multiplicative inverse modulo `m`.
pub fn div(
    m: impl Into<BigInt>,
    a: impl Into<BigInt>,
    b: impl Into<BigInt>,
) -> Result<BigInt, MathError> {
    let (m, a, b) = (m.into(), a.into(), b.into());
    check_modulus(&m)?;
    check_residue(&a, &BigInt::one(), &m)?;
    let inverse = multiplicative_inverse(m.clone(), b, TraceMode::Silent)?;
    Ok((a * inverse.residue).mod_floor(&m))
}

/// Rejects moduli below `2` with a [`MathError::InvalidModulus`].
fn check_modulus(m: &BigInt) -> Result<(), MathError> {
    if m < &BigInt::from(2) {
        return Err(MathError::InvalidModulus(format!(
            "The ring Z/mZ requires a modulus of at least 2, got {m}."
        )));
    }
    Ok(())
}

/// Rejects residues outside `[lower, m)` with a [`MathError::OutOfRange`].
fn check_residue(value: &BigInt, lower: &BigInt, m: &BigInt) -> Result<(), MathError> {
    if value < lower || value >= m {
        return Err(MathError::OutOfRange(format!(
            "The residue {value} must lie in [{lower}, {m})."
        )));
    }
    Ok(())
}

#[cfg(test)]
mod test_add {
    use super::add;
    use crate::error::MathError;
    use num_bigint::BigInt;

    /// Ensure that sums wrap around the modulus.
    #[test]
    fn wraps_modulus() {
        assert_eq!(BigInt::from(3), add(13, 7, 9).unwrap());
        assert_eq!(BigInt::from(12), add(13, 5, 7).unwrap());
        assert_eq!(BigInt::from(0), add(13, 0, 0).unwrap());
    }

    /// Ensure that operands outside `[0, m)` are rejected.
    #[test]
    fn rejects_out_of_range() {
        assert!(matches!(add(13, 13, 1), Err(MathError::OutOfRange(_))));
        assert!(matches!(add(13, 1, -1), Err(MathError::OutOfRange(_))));
    }

    /// Ensure that moduli below `2` are rejected.
    #[test]
    fn rejects_small_modulus() {
        assert!(matches!(add(1, 0, 0), Err(MathError::InvalidModulus(_))));
    }
}

#[cfg(test)]
mod test_sub {
    use super::{add, sub};
    use crate::error::MathError;
    use num_bigint::BigInt;

    /// Ensure that differences wrap around the modulus.
    #[test]
    fn wraps_modulus() {
        assert_eq!(BigInt::from(11), sub(13, 7, 9).unwrap());
        assert_eq!(BigInt::from(2), sub(13, 9, 7).unwrap());
        assert_eq!(BigInt::from(0), sub(13, 9, 9).unwrap());
    }

    /// Ensure that subtraction undoes addition for every pair of residues.
    #[test]
    fn inverts_addition() {
        for a in 0..13 {
            for b in 0..13 {
                let sum = add(13, a, b).unwrap();
                assert_eq!(BigInt::from(a), sub(13, sum, b).unwrap());
            }
        }
    }

    /// Ensure that operands outside `[0, m)` are rejected.
    #[test]
    fn rejects_out_of_range() {
        assert!(matches!(sub(13, 13, 1), Err(MathError::OutOfRange(_))));
        assert!(matches!(sub(13, 1, 13), Err(MathError::OutOfRange(_))));
    }
}

#[cfg(test)]
mod test_mul {
    use super::mul;
    use crate::error::MathError;
    use num_bigint::BigInt;

    /// Ensure that products wrap around the modulus.
    #[test]
    fn wraps_modulus() {
        assert_eq!(BigInt::from(11), mul(13, 7, 9).unwrap());
        assert_eq!(BigInt::from(1), mul(13, 1, 1).unwrap());
        assert_eq!(BigInt::from(12), mul(13, 12, 1).unwrap());
    }

    /// Ensure that zero operands are rejected, as the original operation is
    /// defined on units only.
    #[test]
    fn rejects_zero() {
        assert!(matches!(mul(13, 0, 5), Err(MathError::OutOfRange(_))));
        assert!(matches!(mul(13, 5, 0), Err(MathError::OutOfRange(_))));
    }
}
