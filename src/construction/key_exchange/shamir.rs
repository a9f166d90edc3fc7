// Copyright © 2024 The euclid-crypto developers
//
// This file is part of euclid-crypto.
//
// euclid-crypto is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains an implementation of the Shamir three-pass
//! protocol, which transports a session key through three public messages
//! using commuting exponentiation locks instead of pre-shared key material.
//!
//! The main references are listed in the following:
//! - \[1\] Menezes, Alfred and van Oorschot, Paul and Vanstone, Scott (1996).
//! Handbook of Applied Cryptography.
//! In: CRC Press.
//! <https://cacr.uwaterloo.ca/hac/>

use crate::arithmetic::inverse::{multiplicative_inverse, TraceMode};
use crate::arithmetic::primality::is_prime;
use crate::error::MathError;
use crate::sample::uniform::{sample_coprime, sample_uniform};
use num_bigint::BigInt;
use num_traits::One;
use serde::{Deserialize, Serialize};

/// This struct manages and stores the public parameters of a
/// [`ShamirThreePass`] protocol instance.
///
/// Attributes:
/// - `p`: specifies the prime modulus both parties agree on
/// - `a`: specifies the secret exponent of the first party. If it is
///   `None`, a fresh exponent coprime to `p - 1` is sampled per key
///   generation
/// - `b`: specifies the secret exponent of the second party. If it is
///   `None`, a fresh exponent distinct from `a` is sampled per key
///   generation
///
/// # Examples
/// ```
/// use euclid_crypto::construction::key_exchange::ShamirThreePass;
/// use num_bigint::BigInt;
///
/// let scheme = ShamirThreePass::new(23, 3, 5);
/// let (key_a, key_b) = scheme.gen().unwrap();
///
/// let exchange =
///     ShamirThreePass::exchange(&key_a, &key_b, Some(BigInt::from(2))).unwrap();
///
/// assert_eq!(BigInt::from(2), exchange.key);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShamirThreePass {
    pub p: BigInt,
    pub a: Option<BigInt>,
    pub b: Option<BigInt>,
}

/// One party's key `{exponent, inverse, p}`: a locking exponent together
/// with its multiplicative inverse modulo `p - 1`, which removes the lock
/// again by Fermat's little theorem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShamirKey {
    pub exponent: BigInt,
    pub inverse: BigInt,
    pub p: BigInt,
}

/// The transcript of a three-pass exchange: the three publicly exchanged
/// messages and the session key the second party recovered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreePassExchange {
    pub first: BigInt,
    pub second: BigInt,
    pub third: BigInt,
    pub key: BigInt,
}

impl ShamirThreePass {
    /// Instantiates a [`ShamirThreePass`] instance with fixed secret
    /// exponents, yielding reproducible keys.
    ///
    /// **WARNING:** The given parameters are not checked for validity.
    /// Invalid choices are rejected once [`ShamirThreePass::gen`] is
    /// called.
    ///
    /// Parameters:
    /// - `p`: specifies the prime modulus
    /// - `a`: specifies the secret exponent of the first party
    /// - `b`: specifies the secret exponent of the second party
    ///
    /// Returns a [`ShamirThreePass`] instance with the specified
    /// parameters.
    ///
    /// # Examples
    /// ```
    /// use euclid_crypto::construction::key_exchange::ShamirThreePass;
    ///
    /// let scheme = ShamirThreePass::new(23, 3, 5);
    /// ```
    pub fn new(p: impl Into<BigInt>, a: impl Into<BigInt>, b: impl Into<BigInt>) -> Self {
        Self {
            p: p.into(),
            a: Some(a.into()),
            b: Some(b.into()),
        }
    }

    /// Instantiates a [`ShamirThreePass`] instance that samples fresh
    /// distinct secret exponents on every key generation.
    ///
    /// Parameters:
    /// - `p`: specifies the prime modulus
    ///
    /// Returns a [`ShamirThreePass`] instance with the specified modulus.
    ///
    /// # Examples
    /// ```
    /// use euclid_crypto::construction::key_exchange::ShamirThreePass;
    ///
    /// let scheme = ShamirThreePass::new_random(23);
    /// ```
    pub fn new_random(p: impl Into<BigInt>) -> Self {
        Self {
            p: p.into(),
            a: None,
            b: None,
        }
    }

    /// Generates the key pair of both parties by following these steps:
    /// - resolve the secret exponents `a` and `b`, sampling fresh distinct
    ///   ones from `[1, p)` coprime to `p - 1` where they are not fixed
    /// - compute the unlocking exponents `a^-1 mod (p - 1)` and
    ///   `b^-1 mod (p - 1)`
    ///
    /// Returns the [`ShamirKey`]s of both parties, or a [`MathError`] if a
    /// parameter is invalid.
    ///
    /// # Examples
    /// ```
    /// use euclid_crypto::construction::key_exchange::ShamirThreePass;
    /// use num_bigint::BigInt;
    ///
    /// let scheme = ShamirThreePass::new(23, 3, 5);
    ///
    /// let (key_a, key_b) = scheme.gen().unwrap();
    ///
    /// assert_eq!(BigInt::from(15), key_a.inverse);
    /// assert_eq!(BigInt::from(9), key_b.inverse);
    /// ```
    ///
    /// # Errors and Failures
    /// - Returns a [`MathError`] of type [`MathError::NotPrime`]
    /// if `p` is not prime.
    /// - Returns a [`MathError`] of type [`MathError::NotDistinct`]
    /// if both parties use the same secret exponent.
    /// - Returns a [`MathError`] of type [`MathError::OutOfRange`]
    /// if `a` or `b` does not lie in `[1, p - 1)`.
    /// - Returns a [`MathError`] of type [`MathError::NotCoprime`]
    /// if `a` or `b` is not invertible modulo `p - 1`.
    /// - Returns a [`MathError`] of type [`MathError::NotFound`]
    /// if no distinct second exponent was sampled within 1000 attempts.
    pub fn gen(&self) -> Result<(ShamirKey, ShamirKey), MathError> {
        if !is_prime(self.p.clone()) {
            return Err(MathError::NotPrime(format!(
                "The Shamir three-pass protocol requires a prime modulus, got {}.",
                self.p
            )));
        }
        let group_order = &self.p - BigInt::one();

        let a = match &self.a {
            Some(a) => a.clone(),
            None => sample_coprime(1, self.p.clone(), group_order.clone())?,
        };
        let b = match &self.b {
            Some(b) => b.clone(),
            None => {
                let mut candidate = sample_coprime(1, self.p.clone(), group_order.clone())?;
                let mut attempts = 1;
                while candidate == a {
                    if attempts >= 1000 {
                        return Err(MathError::NotFound(format!(
                            "No secret exponent distinct from {a} was sampled within 1000 attempts."
                        )));
                    }
                    candidate = sample_coprime(1, self.p.clone(), group_order.clone())?;
                    attempts += 1;
                }
                candidate
            }
        };
        if a == b {
            return Err(MathError::NotDistinct(format!(
                "The secret exponents of both parties must be distinct, got {a} twice."
            )));
        }

        let a_inverse = multiplicative_inverse(group_order.clone(), a.clone(), TraceMode::Silent)?;
        let b_inverse = multiplicative_inverse(group_order, b.clone(), TraceMode::Silent)?;
        Ok((
            ShamirKey {
                exponent: a,
                inverse: a_inverse.residue,
                p: self.p.clone(),
            },
            ShamirKey {
                exponent: b,
                inverse: b_inverse.residue,
                p: self.p.clone(),
            },
        ))
    }

    /// Runs the three-pass exchange by following these steps:
    /// - resolve the session key `k`, sampling a fresh one from `[1, p)`
    ///   if it is not fixed
    /// - the first party locks it: first = k^a mod p
    /// - the second party locks it again: second = first^b mod p
    /// - the first party removes its lock: third = second^(a^-1) mod p
    /// - the second party removes its lock and recovers
    ///   k = third^(b^-1) mod p
    ///
    /// Parameters:
    /// - `key_a`: specifies the key of the first party
    /// - `key_b`: specifies the key of the second party
    /// - `k`: specifies the session key to transport. If it is `None`, a
    ///   fresh one is sampled
    ///
    /// Returns the [`ThreePassExchange`] transcript holding the three
    /// exchanged messages and the recovered session key, or a
    /// [`MathError`] if a parameter is invalid.
    ///
    /// # Examples
    /// ```
    /// use euclid_crypto::construction::key_exchange::ShamirThreePass;
    ///
    /// let scheme = ShamirThreePass::new(23, 3, 5);
    /// let (key_a, key_b) = scheme.gen().unwrap();
    ///
    /// let exchange = ShamirThreePass::exchange(&key_a, &key_b, None).unwrap();
    /// ```
    ///
    /// # Errors and Failures
    /// - Returns a [`MathError`] of type [`MathError::MismatchedModulus`]
    /// if both keys do not agree on the modulus.
    /// - Returns a [`MathError`] of type [`MathError::OutOfRange`]
    /// if `k` does not lie in `[1, p)`.
    /// - Returns a [`MathError`] of type [`MathError::ProtocolFailure`]
    /// if the recovered session key differs from `k`.
    pub fn exchange(
        key_a: &ShamirKey,
        key_b: &ShamirKey,
        k: Option<BigInt>,
    ) -> Result<ThreePassExchange, MathError> {
        if key_a.p != key_b.p {
            return Err(MathError::MismatchedModulus(format!(
                "Both keys must agree on the modulus, got {} and {}.",
                key_a.p, key_b.p
            )));
        }
        let p = &key_a.p;

        let k = match k {
            Some(k) => k,
            None => sample_uniform(1, p.clone())?,
        };
        if k < BigInt::one() || &k >= p {
            return Err(MathError::OutOfRange(format!(
                "The session key k = {k} must lie in [1, {p})."
            )));
        }

        let first = k.modpow(&key_a.exponent, p);
        let second = first.modpow(&key_b.exponent, p);
        let third = second.modpow(&key_a.inverse, p);
        let key = third.modpow(&key_b.inverse, p);
        if key != k {
            return Err(MathError::ProtocolFailure(format!(
                "The recovered session key {key} differs from the transported key {k}."
            )));
        }
        Ok(ThreePassExchange {
            first,
            second,
            third,
            key,
        })
    }
}

impl Default for ShamirThreePass {
    /// Initializes a [`ShamirThreePass`] struct over the group modulo `23`
    /// with freshly sampled secret exponents.
    ///
    /// # Examples
    /// ```
    /// use euclid_crypto::construction::key_exchange::ShamirThreePass;
    ///
    /// let scheme = ShamirThreePass::default();
    /// ```
    fn default() -> Self {
        ShamirThreePass::new_random(23)
    }
}

#[cfg(test)]
mod test_gen {
    use super::ShamirThreePass;
    use crate::error::MathError;
    use num_bigint::BigInt;

    /// Checks whether the textbook key pairs over `p = 23` carry the
    /// expected unlocking exponents.
    #[test]
    fn worked_example() {
        let scheme = ShamirThreePass::new(23, 3, 5);

        let (key_a, key_b) = scheme.gen().unwrap();

        assert_eq!(BigInt::from(3), key_a.exponent);
        assert_eq!(BigInt::from(15), key_a.inverse);
        assert_eq!(BigInt::from(5), key_b.exponent);
        assert_eq!(BigInt::from(9), key_b.inverse);
        assert_eq!(BigInt::from(23), key_a.p);
    }

    /// Checks whether sampled exponents are invertible modulo `p - 1`.
    #[test]
    fn sampled_exponents_invertible() {
        let scheme = ShamirThreePass::default();

        for _ in 0..5 {
            let (key_a, key_b) = scheme.gen().unwrap();
            let order = BigInt::from(22);
            assert_eq!(
                BigInt::from(1),
                (key_a.exponent * key_a.inverse) % &order
            );
            assert_eq!(
                BigInt::from(1),
                (key_b.exponent * key_b.inverse) % &order
            );
        }
    }

    /// Checks whether composite moduli are rejected.
    #[test]
    fn rejects_composite_modulus() {
        let scheme = ShamirThreePass::new(15, 3, 5);

        assert!(matches!(scheme.gen(), Err(MathError::NotPrime(_))));
    }

    /// Checks whether equal fixed secret exponents are rejected.
    #[test]
    fn rejects_equal_exponents() {
        let scheme = ShamirThreePass::new(23, 5, 5);

        assert!(matches!(scheme.gen(), Err(MathError::NotDistinct(_))));
    }

    /// Checks whether an exponent sharing a divisor with `p - 1` is
    /// rejected when the unlocking exponent is computed.
    #[test]
    fn rejects_non_invertible_exponent() {
        let scheme = ShamirThreePass::new(23, 4, 5);

        assert!(matches!(scheme.gen(), Err(MathError::NotCoprime(_))));
    }
}

#[cfg(test)]
mod test_exchange {
    use super::ShamirThreePass;
    use crate::error::MathError;
    use num_bigint::BigInt;

    /// Checks whether the session key `k = 2` survives the three passes
    /// over `p = 23`.
    #[test]
    fn worked_example() {
        let scheme = ShamirThreePass::new(23, 3, 5);
        let (key_a, key_b) = scheme.gen().unwrap();

        let exchange =
            ShamirThreePass::exchange(&key_a, &key_b, Some(BigInt::from(2))).unwrap();

        assert_eq!(BigInt::from(8), exchange.first);
        assert_eq!(BigInt::from(16), exchange.second);
        assert_eq!(BigInt::from(9), exchange.third);
        assert_eq!(BigInt::from(2), exchange.key);
    }

    /// Checks whether every fixed session key from `[1, p)` is recovered.
    #[test]
    fn recovers_all_session_keys() {
        let scheme = ShamirThreePass::new(23, 3, 5);
        let (key_a, key_b) = scheme.gen().unwrap();

        for k in 1..23 {
            let exchange =
                ShamirThreePass::exchange(&key_a, &key_b, Some(BigInt::from(k))).unwrap();
            assert_eq!(BigInt::from(k), exchange.key);
        }
    }

    /// Checks whether a sampled session key survives the exchange.
    #[test]
    fn sampled_session_key() {
        let scheme = ShamirThreePass::default();
        let (key_a, key_b) = scheme.gen().unwrap();

        let exchange = ShamirThreePass::exchange(&key_a, &key_b, None).unwrap();

        assert!(BigInt::from(1) <= exchange.key && exchange.key < BigInt::from(23));
    }

    /// Checks whether keys over different moduli are rejected.
    #[test]
    fn rejects_mismatched_moduli() {
        let (key_a, _) = ShamirThreePass::new(23, 3, 5).gen().unwrap();
        let (_, key_b) = ShamirThreePass::new(29, 3, 5).gen().unwrap();

        assert!(matches!(
            ShamirThreePass::exchange(&key_a, &key_b, Some(BigInt::from(2))),
            Err(MathError::MismatchedModulus(_))
        ));
    }

    /// Checks whether session keys outside `[1, p)` are rejected.
    #[test]
    fn rejects_out_of_range_session_key() {
        let scheme = ShamirThreePass::new(23, 3, 5);
        let (key_a, key_b) = scheme.gen().unwrap();

        assert!(matches!(
            ShamirThreePass::exchange(&key_a, &key_b, Some(BigInt::from(0))),
            Err(MathError::OutOfRange(_))
        ));
        assert!(matches!(
            ShamirThreePass::exchange(&key_a, &key_b, Some(BigInt::from(23))),
            Err(MathError::OutOfRange(_))
        ));
    }
}
