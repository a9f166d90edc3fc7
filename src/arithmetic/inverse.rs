// Copyright © 2024 The euclid-crypto developers
//
// This file is part of euclid-crypto.
//
// euclid-crypto is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains the additive and multiplicative inverse in `Z/mZ`.
//! Both operations can return the calculation that produced the residue as
//! plain data, so callers can display or inspect every intermediate step.

use crate::arithmetic::euclid::{
    extended_gcd, linear_factorization, BezoutCoefficients, DivisionStep, ExtendedGcdTrace,
};
use crate::error::MathError;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use serde::{Deserialize, Serialize};

/// Controls whether an inverse computation returns the calculation steps it
/// took alongside the residue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TraceMode {
    /// Return the residue only.
    #[default]
    Silent,
    /// Additionally return the intermediate calculation as data.
    WithTrace,
}

/// The calculation behind a multiplicative inverse: the division steps of
/// the extended Euclidean algorithm together with the back-substituted
/// Bézout coefficients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinearDecomposition {
    pub trace: ExtendedGcdTrace,
    pub coefficients: BezoutCoefficients,
}

/// A multiplicative inverse in `Z/mZ`, optionally carrying the
/// [`LinearDecomposition`] that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiplicativeInverse {
    pub residue: BigInt,
    pub decomposition: Option<LinearDecomposition>,
}

/// An additive inverse in `Z/mZ`, optionally carrying the division identity
/// showing `a + residue ≡ 0 (mod m)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditiveInverse {
    pub residue: BigInt,
    pub identity: Option<DivisionStep>,
}

/// Computes the multiplicative inverse of `a` in `Z/mZ` via the extended
/// Euclidean algorithm: the Bézout coefficient of `a` is normalized into
/// `[0, m)` by adding `m` once if it is negative.
///
/// Parameters:
/// - `m`: the modulus of the ring
/// - `a`: the residue to invert
/// - `mode`: whether the result carries the full [`LinearDecomposition`]
///
/// Returns the [`MultiplicativeInverse`] satisfying
/// `(a * residue) mod m = 1`, or a [`MathError`] if no inverse exists or an
/// operand violates its range.
///
/// # Examples
/// ```
/// use euclid_crypto::arithmetic::inverse::{multiplicative_inverse, TraceMode};
/// use num_bigint::BigInt;
///
/// let inverse = multiplicative_inverse(13, 7, TraceMode::Silent).unwrap();
///
/// assert_eq!(BigInt::from(2), inverse.residue);
/// assert!(inverse.decomposition.is_none());
/// ```
///
/// With [`TraceMode::WithTrace`] the full calculation is returned:
/// ```
/// use euclid_crypto::arithmetic::inverse::{multiplicative_inverse, TraceMode};
/// use num_bigint::BigInt;
///
/// let inverse = multiplicative_inverse(13, 7, TraceMode::WithTrace).unwrap();
/// let decomposition = inverse.decomposition.unwrap();
///
/// assert_eq!(3, decomposition.trace.steps.len());
/// assert_eq!(BigInt::from(2), decomposition.coefficients.y[0]);
/// ```
///
/// # Errors and Failures
/// - Returns a [`MathError`] of type [`MathError::InvalidModulus`]
/// if `m` is smaller than `2`.
/// - Returns a [`MathError`] of type [`MathError::OutOfRange`]
/// if `a` does not lie in `[1, m)`.
/// - Returns a [`MathError`] of type [`MathError::NotCoprime`]
/// if `m` and `a` share a common divisor.
pub fn multiplicative_inverse(
    m: impl Into<BigInt>,
    a: impl Into<BigInt>,
    mode: TraceMode,
) -> Result<MultiplicativeInverse, MathError> {
    let (m, a) = (m.into(), a.into());
    if m < BigInt::from(2) {
        return Err(MathError::InvalidModulus(format!(
            "The multiplicative inverse requires a modulus of at least 2, got {m}."
        )));
    }
    if a < BigInt::one() || a >= m {
        return Err(MathError::OutOfRange(format!(
            "The residue a = {a} must lie in [1, {m})."
        )));
    }

    let trace = extended_gcd(m.clone(), a.clone())?;
    let coefficients = linear_factorization(&trace);
    let gcd = trace.gcd();
    if !gcd.is_one() {
        return Err(MathError::NotCoprime(format!(
            "{a} has no multiplicative inverse modulo {m}, as gcd({m}, {a}) = {gcd}."
        )));
    }

    let mut residue = coefficients.y[0].clone();
    if residue.is_negative() {
        residue += &m;
    }
    let decomposition = match mode {
        TraceMode::Silent => None,
        TraceMode::WithTrace => Some(LinearDecomposition {
            trace,
            coefficients,
        }),
    };
    Ok(MultiplicativeInverse {
        residue,
        decomposition,
    })
}

/// Computes the additive inverse of `a` in `Z/mZ`, i.e. the residue
/// `(m - a) mod m`.
///
/// Parameters:
/// - `m`: the modulus of the ring
/// - `a`: the residue to invert
/// - `mode`: whether the result carries the division identity of
/// `a + residue`
///
/// Returns the [`AdditiveInverse`] satisfying `(a + residue) mod m = 0`,
/// or a [`MathError`] if an operand violates its range.
///
/// # Examples
/// ```
/// use euclid_crypto::arithmetic::inverse::{additive_inverse, TraceMode};
/// use num_bigint::BigInt;
///
/// let inverse = additive_inverse(13, 7, TraceMode::Silent).unwrap();
///
/// assert_eq!(BigInt::from(6), inverse.residue);
/// ```
///
/// # Errors and Failures
/// - Returns a [`MathError`] of type [`MathError::InvalidModulus`]
/// if `m` is smaller than `2`.
/// - Returns a [`MathError`] of type [`MathError::OutOfRange`]
/// if `a` does not lie in `[0, m)`.
pub fn additive_inverse(
    m: impl Into<BigInt>,
    a: impl Into<BigInt>,
    mode: TraceMode,
) -> Result<AdditiveInverse, MathError> {
    let (m, a) = (m.into(), a.into());
    if m < BigInt::from(2) {
        return Err(MathError::InvalidModulus(format!(
            "The additive inverse requires a modulus of at least 2, got {m}."
        )));
    }
    if a < BigInt::zero() || a >= m {
        return Err(MathError::OutOfRange(format!(
            "The residue a = {a} must lie in [0, {m})."
        )));
    }

    let residue = (&m - &a).mod_floor(&m);
    let identity = match mode {
        TraceMode::Silent => None,
        TraceMode::WithTrace => {
            let sum = &a + &residue;
            let (quotient, remainder) = sum.div_mod_floor(&m);
            Some(DivisionStep {
                dividend: sum,
                divisor: m,
                quotient,
                remainder,
            })
        }
    };
    Ok(AdditiveInverse { residue, identity })
}


#[cfg(test)]
mod test_additive_inverse {
    use super::{additive_inverse, TraceMode};
    use crate::error::MathError;
    use num_bigint::BigInt;
    use num_integer::Integer;
    use num_traits::Zero;

    /// Ensure that the worked example `-7 mod 13 = 6` computes correctly.
    #[test]
    fn worked_example() {
        let inverse = additive_inverse(13, 7, TraceMode::Silent).unwrap();

        assert_eq!(BigInt::from(6), inverse.residue);
        assert!(inverse.identity.is_none());
    }

    /// Ensure that zero is its own additive inverse.
    #[test]
    fn zero_is_self_inverse() {
        let inverse = additive_inverse(13, 0, TraceMode::Silent).unwrap();

        assert_eq!(BigInt::from(0), inverse.residue);
    }

    /// Ensure that the identity step shows `a + residue` as a multiple of
    /// the modulus.
    #[test]
    fn identity_step() {
        let inverse = additive_inverse(13, 7, TraceMode::WithTrace).unwrap();
        let identity = inverse.identity.unwrap();

        assert_eq!(BigInt::from(13), identity.dividend);
        assert_eq!(BigInt::from(13), identity.divisor);
        assert_eq!(BigInt::from(1), identity.quotient);
        assert_eq!(BigInt::from(0), identity.remainder);
    }

    /// Ensure that every residue of small rings satisfies the inverse
    /// equation.
    #[test]
    fn inverse_equation() {
        for m in 2i32..50 {
            for a in 0..m {
                let inverse = additive_inverse(m, a, TraceMode::Silent).unwrap();
                assert!((inverse.residue + a).mod_floor(&BigInt::from(m)).is_zero());
            }
        }
    }

    /// Ensure that invalid moduli and residues are rejected.
    #[test]
    fn rejects_invalid_parameters() {
        assert!(matches!(
            additive_inverse(1, 0, TraceMode::Silent),
            Err(MathError::InvalidModulus(_))
        ));
        assert!(matches!(
            additive_inverse(13, 13, TraceMode::Silent),
            Err(MathError::OutOfRange(_))
        ));
        assert!(matches!(
            additive_inverse(13, -1, TraceMode::Silent),
            Err(MathError::OutOfRange(_))
        ));
    }
}
