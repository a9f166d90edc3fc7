// Copyright © 2024 The euclid-crypto developers
//
// This file is part of euclid-crypto.
//
// euclid-crypto is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains an implementation of the Diffie-Hellman key
//! exchange over the multiplicative group of a small prime field.
//!
//! The main references are listed in the following:
//! - \[1\] Diffie, Whitfield and Hellman, Martin (1976).
//! New directions in cryptography.
//! In: IEEE Transactions on Information Theory 22.6.
//! <https://doi.org/10.1109/TIT.1976.1055638>

use crate::arithmetic::primality::is_prime;
use crate::error::MathError;
use crate::sample::uniform::sample_uniform;
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

/// This struct manages and stores the public parameters of a
/// [`DiffieHellman`] key exchange instance.
///
/// Attributes:
/// - `p`: specifies the prime modulus of the group
/// - `g`: specifies the public generator both parties agree on
/// - `a`: specifies the secret exponent of the first party. If it is
///   `None`, a fresh exponent from `[2, p)` is sampled per exchange
/// - `b`: specifies the secret exponent of the second party. If it is
///   `None`, a fresh exponent distinct from `a` is sampled per exchange
///
/// # Examples
/// ```
/// use euclid_crypto::construction::key_exchange::DiffieHellman;
/// use num_bigint::BigInt;
///
/// let dh = DiffieHellman::new(23, 5, 6, 15);
/// let exchange = dh.exchange().unwrap();
///
/// assert_eq!(BigInt::from(2), exchange.key);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffieHellman {
    pub p: BigInt,
    pub g: BigInt,
    pub a: Option<BigInt>,
    pub b: Option<BigInt>,
}

/// The transcript of a Diffie-Hellman exchange: the exchanged group
/// elements `alpha = g^a mod p` and `beta = g^b mod p` together with the
/// shared key both parties derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DhExchange {
    pub alpha: BigInt,
    pub beta: BigInt,
    pub key: BigInt,
}

impl DiffieHellman {
    /// Instantiates a [`DiffieHellman`] instance with fixed secret
    /// exponents, yielding a reproducible exchange.
    ///
    /// **WARNING:** The given parameters are not checked for validity.
    /// Invalid choices are rejected once [`DiffieHellman::exchange`] is
    /// called.
    ///
    /// Parameters:
    /// - `p`: specifies the prime modulus of the group
    /// - `g`: specifies the public generator
    /// - `a`: specifies the secret exponent of the first party
    /// - `b`: specifies the secret exponent of the second party
    ///
    /// Returns a [`DiffieHellman`] instance with the specified parameters.
    ///
    /// # Examples
    /// ```
    /// use euclid_crypto::construction::key_exchange::DiffieHellman;
    ///
    /// let dh = DiffieHellman::new(23, 5, 6, 15);
    /// ```
    pub fn new(
        p: impl Into<BigInt>,
        g: impl Into<BigInt>,
        a: impl Into<BigInt>,
        b: impl Into<BigInt>,
    ) -> Self {
        Self {
            p: p.into(),
            g: g.into(),
            a: Some(a.into()),
            b: Some(b.into()),
        }
    }

    /// Instantiates a [`DiffieHellman`] instance that samples fresh
    /// distinct secret exponents on every exchange.
    ///
    /// Parameters:
    /// - `p`: specifies the prime modulus of the group
    /// - `g`: specifies the public generator
    ///
    /// Returns a [`DiffieHellman`] instance with the specified group.
    ///
    /// # Examples
    /// ```
    /// use euclid_crypto::construction::key_exchange::DiffieHellman;
    ///
    /// let dh = DiffieHellman::new_random(23, 5);
    /// ```
    pub fn new_random(p: impl Into<BigInt>, g: impl Into<BigInt>) -> Self {
        Self {
            p: p.into(),
            g: g.into(),
            a: None,
            b: None,
        }
    }

    /// Runs the key exchange by following these steps:
    /// - resolve the secret exponents `a` and `b`, sampling fresh distinct
    ///   ones from `[2, p)` where they are not fixed
    /// - alpha = g^a mod p and beta = g^b mod p are exchanged in public
    /// - both parties derive the shared key as beta^a = alpha^b mod p
    ///
    /// Returns the [`DhExchange`] transcript holding the exchanged
    /// elements and the shared key, or a [`MathError`] if a parameter is
    /// invalid.
    ///
    /// # Examples
    /// ```
    /// use euclid_crypto::construction::key_exchange::DiffieHellman;
    ///
    /// let dh = DiffieHellman::new_random(23, 5);
    ///
    /// let exchange = dh.exchange().unwrap();
    /// ```
    ///
    /// # Errors and Failures
    /// - Returns a [`MathError`] of type [`MathError::NotPrime`]
    /// if `p` is not prime.
    /// - Returns a [`MathError`] of type [`MathError::OutOfRange`]
    /// if `g`, `a` or `b` does not lie in `[2, p)`.
    /// - Returns a [`MathError`] of type [`MathError::NotDistinct`]
    /// if both parties use the same secret exponent.
    /// - Returns a [`MathError`] of type [`MathError::NotFound`]
    /// if no distinct second exponent was sampled within 1000 attempts.
    /// - Returns a [`MathError`] of type [`MathError::ProtocolFailure`]
    /// if the derived keys of both parties mismatch.
    pub fn exchange(&self) -> Result<DhExchange, MathError> {
        if !is_prime(self.p.clone()) {
            return Err(MathError::NotPrime(format!(
                "The Diffie-Hellman key exchange requires a prime modulus, got {}.",
                self.p
            )));
        }
        if self.g < BigInt::from(2) || self.g >= self.p {
            return Err(MathError::OutOfRange(format!(
                "The generator g = {} must lie in [2, {}).",
                self.g, self.p
            )));
        }

        let a = match &self.a {
            Some(a) => a.clone(),
            None => sample_uniform(2, self.p.clone())?,
        };
        let b = match &self.b {
            Some(b) => b.clone(),
            None => {
                let mut candidate = sample_uniform(2, self.p.clone())?;
                let mut attempts = 1;
                while candidate == a {
                    if attempts >= 1000 {
                        return Err(MathError::NotFound(format!(
                            "No secret exponent distinct from {a} was sampled within 1000 attempts."
                        )));
                    }
                    candidate = sample_uniform(2, self.p.clone())?;
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
        for exponent in [&a, &b] {
            if exponent < &BigInt::from(2) || exponent >= &self.p {
                return Err(MathError::OutOfRange(format!(
                    "The secret exponent {exponent} must lie in [2, {}).",
                    self.p
                )));
            }
        }

        let alpha = self.g.modpow(&a, &self.p);
        let beta = self.g.modpow(&b, &self.p);
        let key_a = beta.modpow(&a, &self.p);
        let key_b = alpha.modpow(&b, &self.p);
        if key_a != key_b {
            return Err(MathError::ProtocolFailure(format!(
                "The derived keys {key_a} and {key_b} of both parties mismatch."
            )));
        }
        Ok(DhExchange {
            alpha,
            beta,
            key: key_a,
        })
    }
}

impl Default for DiffieHellman {
    /// Initializes a [`DiffieHellman`] struct over the group modulo `23`
    /// with generator `5` and freshly sampled secret exponents.
    ///
    /// # Examples
    /// ```
    /// use euclid_crypto::construction::key_exchange::DiffieHellman;
    ///
    /// let dh = DiffieHellman::default();
    /// ```
    fn default() -> Self {
        DiffieHellman::new_random(23, 5)
    }
}

#[cfg(test)]
mod test_exchange {
    use super::DiffieHellman;
    use crate::error::MathError;
    use num_bigint::BigInt;

    /// Checks whether the textbook exchange over `p = 23` derives the
    /// shared key `2`.
    #[test]
    fn worked_example() {
        let dh = DiffieHellman::new(23, 5, 6, 15);

        let exchange = dh.exchange().unwrap();

        assert_eq!(BigInt::from(8), exchange.alpha);
        assert_eq!(BigInt::from(19), exchange.beta);
        assert_eq!(BigInt::from(2), exchange.key);
    }

    /// Checks whether exchanges with sampled secret exponents succeed and
    /// stay within the group.
    #[test]
    fn sampled_secrets() {
        let dh = DiffieHellman::default();

        for _ in 0..5 {
            let exchange = dh.exchange().unwrap();
            assert!(BigInt::from(0) <= exchange.key && exchange.key < dh.p);
        }
    }

    /// Checks whether a tiny group with only three possible exponents
    /// still finds a distinct pair.
    #[test]
    fn tiny_group() {
        let dh = DiffieHellman::new_random(5, 2);

        assert!(dh.exchange().is_ok());
    }

    /// Checks whether equal fixed secret exponents are rejected.
    #[test]
    fn rejects_equal_secrets() {
        let dh = DiffieHellman::new(23, 5, 6, 6);

        assert!(matches!(dh.exchange(), Err(MathError::NotDistinct(_))));
    }

    /// Checks whether composite moduli are rejected.
    #[test]
    fn rejects_composite_modulus() {
        let dh = DiffieHellman::new(15, 2, 3, 7);

        assert!(matches!(dh.exchange(), Err(MathError::NotPrime(_))));
    }

    /// Checks whether generators and exponents outside `[2, p)` are
    /// rejected.
    #[test]
    fn rejects_out_of_range() {
        assert!(matches!(
            DiffieHellman::new(23, 1, 6, 15).exchange(),
            Err(MathError::OutOfRange(_))
        ));
        assert!(matches!(
            DiffieHellman::new(23, 5, 1, 15).exchange(),
            Err(MathError::OutOfRange(_))
        ));
        assert!(matches!(
            DiffieHellman::new(23, 5, 6, 23).exchange(),
            Err(MathError::OutOfRange(_))
        ));
    }
}
