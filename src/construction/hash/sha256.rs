// Copyright © 2024 The euclid-crypto developers
//
// This file is part of euclid-crypto.
//
// euclid-crypto is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains hashes into different domains.

use crate::error::MathError;
use num_bigint::BigInt;
use num_integer::Integer;
use sha2::{Digest, Sha256};

/// Computes the sha256 hash value of a given String literal.
///
/// Parameters:
/// - `string`: specifies the value that is hashed.
///
/// Returns the sha256 value of the given string as a hex string.
///
/// # Examples
/// ```
/// use euclid_crypto::construction::hash::sha256::sha256;
///
/// let string = "Hello World!";
/// let hash = sha256(string);
/// assert_eq!("7f83b1657ff1fc53b92dc18148a1d65dfc2d4b1fa3d677284addd200126d9069", hash);
/// ```
pub fn sha256(string: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(string);
    let result = hasher.finalize();
    format!("{:x}", result)
}

/// Hashes a given String literal into a residue modulo `modulus`.
///
/// Parameters:
/// - `string`: specifies the value that is hashed.
/// - `modulus`: specifies the modulus of the returned residue
///
/// Returns a residue in `[0, modulus)` as a hash value for the given
/// string, or a [`MathError`] if the modulus is invalid.
///
/// # Examples
/// ```
/// use euclid_crypto::construction::hash::sha256::hash_to_residue;
/// use num_bigint::BigInt;
///
/// let string = "Hello World!";
///
/// let hash = hash_to_residue("Hello World!", 256).unwrap();
/// assert_eq!(BigInt::from(150), hash);
/// ```
///
/// # Errors and Failures
/// - Returns a [`MathError`] of type [`MathError::InvalidModulus`]
/// if `modulus` is smaller than `2`.
pub fn hash_to_residue(string: &str, modulus: impl Into<BigInt>) -> Result<BigInt, MathError> {
    let modulus = modulus.into();
    if modulus < BigInt::from(2) {
        return Err(MathError::InvalidModulus(format!(
            "Hashing requires a modulus of at least 2, got {modulus}."
        )));
    }
    let bitsize = modulus.bits();
    let mut hex = "".to_string();
    let string2 = format!("{modulus} {string}");

    for i in 0..=bitsize / 128
    // hashing into e.g. residues with 256 bit length of the modulus from 256 bit
    // will result in lower values to be up to two times as likely as higher values.
    // Doubling the bit size of the hashed number will
    // reduce this difference to 1/2^n which is negligible.
    // https://crypto.stackexchange.com/questions/37305/how-can-i-instantiate-a-generalized-hash-function
    {
        hex = hex + &sha256(&format!("{i} {string2}"));
    }

    Ok(BigInt::parse_bytes(hex.as_bytes(), 16)
        .unwrap()
        .mod_floor(&modulus))
}
