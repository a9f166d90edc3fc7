// Copyright © 2024 The euclid-crypto developers
//
// This file is part of euclid-crypto.
//
// euclid-crypto is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module computes discrete logarithms modulo a prime with the
//! baby-step giant-step algorithm of
//! [\[3\]](<../index.html#:~:text=[3]>).

use crate::arithmetic::primality::is_prime;
use crate::error::MathError;
use crate::utils::sqrt::ceil_sqrt;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};
use std::collections::HashMap;

/// Computes the discrete logarithm `d` with `g^d ≡ e (mod p)` via
/// baby-step giant-step.
///
/// With `m = ⌈√(p-1)⌉`, the baby steps tabulate `g^r mod p` for all
/// `r in [0, m)` and the giant steps multiply `e` by `g^(-m) mod p`,
/// obtained as `g^(m * (p-2)) mod p` via Fermat's little theorem, until the
/// table is hit. The logarithm is then `q * m + r` after `q` giant steps.
///
/// Parameters:
/// - `p`: the prime modulus of the group
/// - `g`: the base of the logarithm
/// - `e`: the group element whose logarithm is sought
///
/// Returns the smallest `d >= 0` with `g^d ≡ e (mod p)` or a [`MathError`]
/// if no logarithm exists or an operand violates its range.
///
/// # Examples
/// ```
/// use euclid_crypto::arithmetic::discrete_log::discrete_log_bsgs;
/// use num_bigint::BigInt;
///
/// let d = discrete_log_bsgs(23, 5, 8).unwrap();
///
/// assert_eq!(BigInt::from(6), d);
/// ```
///
/// # Errors and Failures
/// - Returns a [`MathError`] of type [`MathError::NotPrime`]
/// if `p` is not prime.
/// - Returns a [`MathError`] of type [`MathError::OutOfRange`]
/// if `g` or `e` does not lie in `[1, p)`.
/// - Returns a [`MathError`] of type [`MathError::NotFound`]
/// if `e` is not a power of `g` modulo `p`.
pub fn discrete_log_bsgs(
    p: impl Into<BigInt>,
    g: impl Into<BigInt>,
    e: impl Into<BigInt>,
) -> Result<BigInt, MathError> {
    let (p, g, e) = (p.into(), g.into(), e.into());
    if !is_prime(p.clone()) {
        return Err(MathError::NotPrime(format!(
            "The baby-step giant-step algorithm requires a prime modulus, got {p}."
        )));
    }
    for value in [&g, &e] {
        if value < &BigInt::one() || value >= &p {
            return Err(MathError::OutOfRange(format!(
                "The value {value} must lie in [1, {p})."
            )));
        }
    }

    let m = ceil_sqrt(&(&p - 1));

    let mut table = HashMap::new();
    let mut power = BigInt::one();
    let mut r = BigInt::zero();
    while r < m {
        table.insert(power.clone(), r.clone());
        power = (&power * &g).mod_floor(&p);
        r += 1;
    }

    // g^(-m) = g^(m * (p-2)) mod p by Fermat's little theorem
    let y = g.modpow(&(&m * (&p - 2)), &p);

    let mut z = e;
    let mut q = BigInt::zero();
    while q < m {
        if let Some(r) = table.get(&z) {
            return Ok(&q * &m + r);
        }
        z = (&z * &y).mod_floor(&p);
        q += 1;
    }
    Err(MathError::NotFound(format!(
        "No discrete logarithm of e to the base g modulo {p} exists."
    )))
}
