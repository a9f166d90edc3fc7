// Copyright © 2024 The euclid-crypto developers
//
// This file is part of euclid-crypto.
//
// euclid-crypto is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module classifies the residues of `Z/mZ` by whether they generate
//! the full set `{1, ..., m-1}` under repeated multiplication, following
//! the cyclic group treatment in Chapter 8.2 of
//! [\[2\]](<../index.html#:~:text=[2]>).

use crate::error::MathError;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::One;
use serde::{Deserialize, Serialize};

/// The residues of `Z/mZ` partitioned into primitive elements, whose powers
/// enumerate all of `{1, ..., m-1}`, and the remaining non-primitive ones.
///
/// Either partition may be empty. For `m = 8` no residue is primitive, as
/// the multiplicative structure modulo `8` is not cyclic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupClassification {
    pub primitive: Vec<BigInt>,
    pub non_primitive: Vec<BigInt>,
}

/// Classifies every residue in `[1, m)` as primitive or non-primitive by
/// computing its powers `x^1, ..., x^(m-1)` modulo `m` and comparing the
/// sorted row against `{1, ..., m-1}`.
///
/// The exhaustive check takes `O(m^2)` multiplications and is intended for
/// small teaching moduli.
///
/// Parameters:
/// - `m`: the modulus of the group
///
/// Returns the [`GroupClassification`] of all residues in `[1, m)` or a
/// [`MathError`] if the modulus is invalid.
///
/// # Examples
/// ```
/// use euclid_crypto::arithmetic::cyclic_group::classify_cyclic_group;
/// use num_bigint::BigInt;
///
/// let classification = classify_cyclic_group(5).unwrap();
///
/// assert_eq!(vec![BigInt::from(2), BigInt::from(3)], classification.primitive);
/// assert_eq!(vec![BigInt::from(1), BigInt::from(4)], classification.non_primitive);
/// ```
///
/// # Errors and Failures
/// - Returns a [`MathError`] of type [`MathError::InvalidModulus`]
/// if `m` is smaller than `2`.
pub fn classify_cyclic_group(m: impl Into<BigInt>) -> Result<GroupClassification, MathError> {
    let m = m.into();
    if m < BigInt::from(2) {
        return Err(MathError::InvalidModulus(format!(
            "The classification of cyclic groups requires a modulus of at least 2, got {m}."
        )));
    }

    let mut expected = Vec::new();
    let mut value = BigInt::one();
    while value < m {
        expected.push(value.clone());
        value += 1;
    }

    let mut primitive = Vec::new();
    let mut non_primitive = Vec::new();
    for base in &expected {
        let mut row = Vec::new();
        let mut power = BigInt::one();
        for _ in &expected {
            power = (&power * base).mod_floor(&m);
            row.push(power.clone());
        }
        row.sort();
        if row == expected {
            primitive.push(base.clone());
        } else {
            non_primitive.push(base.clone());
        }
    }
    Ok(GroupClassification {
        primitive,
        non_primitive,
    })
}
