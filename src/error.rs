// Copyright © 2024 The euclid-crypto developers
//
// This file is part of euclid-crypto.
//
// euclid-crypto is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains this crate's error enum [`MathError`].
//! Every operation that can be called with invalid parameters reports the
//! violation through one of its variants instead of panicking.

use thiserror::Error;

/// [`MathError`] defines one enum collecting all errors that can occur when
/// operating on the toy parameters this library works with.
/// Each variant carries a description of the concrete violation.
///
/// # Examples
/// ```
/// use euclid_crypto::error::MathError;
///
/// fn check_modulus(m: i64) -> Result<(), MathError> {
///     if m < 2 {
///         return Err(MathError::InvalidModulus(format!(
///             "A ring requires a modulus of at least 2, got {m}."
///         )));
///     }
///     Ok(())
/// }
///
/// assert!(check_modulus(1).is_err());
/// assert!(check_modulus(13).is_ok());
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    /// The modulus is too small to span a ring.
    #[error("invalid modulus: {0}")]
    InvalidModulus(String),

    /// An operand lies outside the interval its operation is defined on.
    #[error("value out of range: {0}")]
    OutOfRange(String),

    /// Two values that have to be coprime share a common divisor.
    #[error("values are not coprime: {0}")]
    NotCoprime(String),

    /// A parameter that has to be prime is not.
    #[error("value is not prime: {0}")]
    NotPrime(String),

    /// A factorization was requested for a prime.
    #[error("value is not composite: {0}")]
    NotComposite(String),

    /// A search exhausted its range without a result.
    #[error("no result found: {0}")]
    NotFound(String),

    /// Two parameters that have to differ are equal.
    #[error("values are not distinct: {0}")]
    NotDistinct(String),

    /// Two keys that have to agree on their modulus do not.
    #[error("mismatched moduli: {0}")]
    MismatchedModulus(String),

    /// A generated key pair fails its scheme's validity condition.
    #[error("invalid key pair: {0}")]
    InvalidKeyPair(String),

    /// A protocol run ended in an inconsistent state.
    #[error("protocol failure: {0}")]
    ProtocolFailure(String),

    /// A point does not satisfy its curve equation.
    #[error("point not on curve: {0}")]
    PointNotOnCurve(String),
}
