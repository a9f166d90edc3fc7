// Copyright © 2024 The euclid-crypto developers
//
// This file is part of euclid-crypto.
//
// euclid-crypto is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains an implementation of the ElGamal public key
//! encryption scheme over the multiplicative group of a small prime field.
//!
//! The main references are listed in the following:
//! - \[1\] ElGamal, Taher (1985).
//! A public key cryptosystem and a signature scheme based on discrete logarithms.
//! In: IEEE Transactions on Information Theory 31.4.
//! <https://doi.org/10.1109/TIT.1985.1057074>
//! - \[2\] Paar, Christof and Pelzl, Jan (2010).
//! Understanding Cryptography.
//! In: Springer Berlin, Heidelberg.
//! <https://doi.org/10.1007/978-3-642-04101-3>

use super::PKEncryption;
use crate::arithmetic::euclid::gcd;
use crate::arithmetic::inverse::{multiplicative_inverse, TraceMode};
use crate::arithmetic::primality::is_prime;
use crate::error::MathError;
use crate::sample::uniform::{sample_coprime, sample_uniform};
use num_bigint::BigInt;
use num_traits::One;
use serde::{Deserialize, Serialize};

/// This struct manages and stores the public parameters of an [`ElGamal`]
/// public key encryption instance.
///
/// Attributes:
/// - `p`: specifies the prime modulus of the group
/// - `g`: specifies the generator the public key is derived from
/// - `d`: specifies the secret exponent. If it is `None`, a fresh exponent
///   from `[1, p - 1)` is sampled during key generation
/// - `k`: specifies the ephemeral exponent used during encryption. If it
///   is `None`, a fresh exponent coprime to `p - 1` is sampled per message
///
/// # Examples
/// ```
/// use euclid_crypto::construction::pk_encryption::{ElGamal, PKEncryption};
/// use num_bigint::BigInt;
/// // setup public parameters and key pair
/// let elgamal = ElGamal::new(23, 5, 11, 5);
/// let (pk, sk) = elgamal.gen().unwrap();
///
/// // encrypt a message from [1, p)
/// let cipher = elgamal.enc(&pk, 11).unwrap();
///
/// // decrypt
/// let m = elgamal.dec(&sk, &cipher).unwrap();
///
/// assert_eq!(BigInt::from(11), m);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElGamal {
    pub p: BigInt,
    pub g: BigInt,
    pub d: Option<BigInt>,
    pub k: Option<BigInt>,
}

/// An ElGamal public key `(p, g, e)` with `e = g^d mod p`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElGamalPublicKey {
    pub p: BigInt,
    pub g: BigInt,
    pub e: BigInt,
}

/// An ElGamal secret key `(p, d)` holding the secret exponent `d`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElGamalPrivateKey {
    pub p: BigInt,
    pub d: BigInt,
}

/// An ElGamal cipher `(a, b)` with `a = g^k mod p` and
/// `b = e^k * message mod p`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElGamalCiphertext {
    pub a: BigInt,
    pub b: BigInt,
}

impl ElGamal {
    /// Instantiates an [`ElGamal`] instance with a fixed secret exponent
    /// and a fixed ephemeral exponent, yielding reproducible ciphers.
    ///
    /// **WARNING:** The given parameters are not checked for validity.
    /// Invalid choices are rejected once [`ElGamal::gen`] or
    /// [`ElGamal::enc`] is called.
    ///
    /// Parameters:
    /// - `p`: specifies the prime modulus of the group
    /// - `g`: specifies the generator
    /// - `d`: specifies the secret exponent
    /// - `k`: specifies the ephemeral exponent
    ///
    /// Returns an [`ElGamal`] instance with the specified parameters.
    ///
    /// # Examples
    /// ```
    /// use euclid_crypto::construction::pk_encryption::ElGamal;
    ///
    /// let elgamal = ElGamal::new(23, 5, 11, 5);
    /// ```
    pub fn new(
        p: impl Into<BigInt>,
        g: impl Into<BigInt>,
        d: impl Into<BigInt>,
        k: impl Into<BigInt>,
    ) -> Self {
        Self {
            p: p.into(),
            g: g.into(),
            d: Some(d.into()),
            k: Some(k.into()),
        }
    }

    /// Instantiates an [`ElGamal`] instance that samples a fresh secret
    /// exponent on key generation and a fresh ephemeral exponent on every
    /// encryption.
    ///
    /// Parameters:
    /// - `p`: specifies the prime modulus of the group
    /// - `g`: specifies the generator
    ///
    /// Returns an [`ElGamal`] instance with the specified group.
    ///
    /// # Examples
    /// ```
    /// use euclid_crypto::construction::pk_encryption::ElGamal;
    ///
    /// let elgamal = ElGamal::new_random(23, 5);
    /// ```
    pub fn new_random(p: impl Into<BigInt>, g: impl Into<BigInt>) -> Self {
        Self {
            p: p.into(),
            g: g.into(),
            d: None,
            k: None,
        }
    }
}

impl Default for ElGamal {
    /// Initializes an [`ElGamal`] struct over the group modulo `23` with
    /// generator `5` and freshly sampled exponents.
    ///
    /// # Examples
    /// ```
    /// use euclid_crypto::construction::pk_encryption::ElGamal;
    ///
    /// let elgamal = ElGamal::default();
    /// ```
    fn default() -> Self {
        ElGamal::new_random(23, 5)
    }
}

impl PKEncryption for ElGamal {
    type Cipher = ElGamalCiphertext;
    type PublicKey = ElGamalPublicKey;
    type SecretKey = ElGamalPrivateKey;

    /// Generates a (pk, sk) pair for the ElGamal public key encryption
    /// scheme by following these steps:
    /// - check that the given `d` lies in `[1, p - 1)`, or sample a fresh
    ///   one from that interval
    /// - e = g^d mod p
    ///
    /// Returns the key pair `((p, g, e), (p, d))` or a [`MathError`] if
    /// the public parameters are invalid.
    ///
    /// # Examples
    /// ```
    /// use euclid_crypto::construction::pk_encryption::{ElGamal, PKEncryption};
    /// let elgamal = ElGamal::default();
    ///
    /// let (pk, sk) = elgamal.gen().unwrap();
    /// ```
    ///
    /// # Errors and Failures
    /// - Returns a [`MathError`] of type [`MathError::NotPrime`]
    /// if `p` is not prime.
    /// - Returns a [`MathError`] of type [`MathError::OutOfRange`]
    /// if `g` does not lie in `[1, p)` or `d` does not lie in
    /// `[1, p - 1)`.
    fn gen(&self) -> Result<(Self::PublicKey, Self::SecretKey), MathError> {
        if !is_prime(self.p.clone()) {
            return Err(MathError::NotPrime(format!(
                "The ElGamal scheme requires a prime modulus, got {}.",
                self.p
            )));
        }
        if self.g < BigInt::one() || self.g >= self.p {
            return Err(MathError::OutOfRange(format!(
                "The generator g = {} must lie in [1, {}).",
                self.g, self.p
            )));
        }

        let d = match &self.d {
            Some(d) => d.clone(),
            None => sample_uniform(1, &self.p - 1)?,
        };
        if d < BigInt::one() || d >= &self.p - 1 {
            return Err(MathError::OutOfRange(format!(
                "The secret exponent d = {d} must lie in [1, {}).",
                &self.p - 1
            )));
        }
        let e = self.g.modpow(&d, &self.p);

        Ok((
            ElGamalPublicKey {
                p: self.p.clone(),
                g: self.g.clone(),
                e,
            },
            ElGamalPrivateKey {
                p: self.p.clone(),
                d,
            },
        ))
    }

    /// Encrypts the provided `message` under the public key `pk` by
    /// following these steps:
    /// - check that the given ephemeral `k` is coprime to `p - 1` and lies
    ///   in `[1, p - 1)`, or sample a fresh one with these properties
    /// - a = g^k mod p
    /// - b = e^k * message mod p
    ///
    /// Parameters:
    /// - `pk`: specifies the public key `pk = (p, g, e)`
    /// - `message`: specifies the message from `[1, p)`
    ///
    /// Returns the cipher `(a, b)` or a [`MathError`] if the message or
    /// the ephemeral exponent violates its range.
    ///
    /// # Examples
    /// ```
    /// use euclid_crypto::construction::pk_encryption::{ElGamal, PKEncryption};
    /// use num_bigint::BigInt;
    /// let elgamal = ElGamal::new(23, 5, 11, 5);
    /// let (pk, _) = elgamal.gen().unwrap();
    ///
    /// let cipher = elgamal.enc(&pk, 11).unwrap();
    ///
    /// assert_eq!(BigInt::from(20), cipher.a);
    /// assert_eq!(BigInt::from(12), cipher.b);
    /// ```
    ///
    /// # Errors and Failures
    /// - Returns a [`MathError`] of type [`MathError::OutOfRange`]
    /// if the message or `k` violates its range.
    /// - Returns a [`MathError`] of type [`MathError::NotCoprime`]
    /// if the given `k` shares a divisor with `p - 1`.
    fn enc(
        &self,
        pk: &Self::PublicKey,
        message: impl Into<BigInt>,
    ) -> Result<Self::Cipher, MathError> {
        let message = message.into();
        if message < BigInt::one() || message >= pk.p {
            return Err(MathError::OutOfRange(format!(
                "The message {message} must lie in [1, {}).",
                pk.p
            )));
        }

        let group_order = &pk.p - 1;
        let k = match &self.k {
            Some(k) => {
                if k < &BigInt::one() || k >= &group_order {
                    return Err(MathError::OutOfRange(format!(
                        "The ephemeral exponent k = {k} must lie in [1, {group_order})."
                    )));
                }
                if !gcd(k.clone(), group_order.clone()).is_one() {
                    return Err(MathError::NotCoprime(format!(
                        "The ephemeral exponent k = {k} must be coprime to {group_order}."
                    )));
                }
                k.clone()
            }
            None => sample_coprime(1, group_order.clone(), group_order.clone())?,
        };

        let a = pk.g.modpow(&k, &pk.p);
        let b = (pk.e.modpow(&k, &pk.p) * message) % &pk.p;
        Ok(ElGamalCiphertext { a, b })
    }

    /// Decrypts the provided `cipher` using the secret key `sk` by
    /// following these steps:
    /// - a_d = a^d mod p
    /// - m = a_d^(-1) * b mod p
    ///
    /// Parameters:
    /// - `sk`: specifies the secret key `sk = (p, d)`
    /// - `cipher`: specifies the cipher containing `cipher = (a, b)`
    ///
    /// Returns the decrypted message or a [`MathError`] if a component of
    /// the cipher violates its range.
    ///
    /// # Examples
    /// ```
    /// use euclid_crypto::construction::pk_encryption::{ElGamal, PKEncryption};
    /// use num_bigint::BigInt;
    /// let elgamal = ElGamal::new(23, 5, 11, 5);
    /// let (pk, sk) = elgamal.gen().unwrap();
    /// let cipher = elgamal.enc(&pk, 11).unwrap();
    ///
    /// let m = elgamal.dec(&sk, &cipher).unwrap();
    ///
    /// assert_eq!(BigInt::from(11), m);
    /// ```
    ///
    /// # Errors and Failures
    /// - Returns a [`MathError`] of type [`MathError::OutOfRange`]
    /// if a component of the cipher does not lie in `[1, p)`.
    fn dec(&self, sk: &Self::SecretKey, cipher: &Self::Cipher) -> Result<BigInt, MathError> {
        for component in [&cipher.a, &cipher.b] {
            if component < &BigInt::one() || component >= &sk.p {
                return Err(MathError::OutOfRange(format!(
                    "The cipher component {component} must lie in [1, {}).",
                    sk.p
                )));
            }
        }

        let a_d = cipher.a.modpow(&sk.d, &sk.p);
        let inverse = multiplicative_inverse(sk.p.clone(), a_d, TraceMode::Silent)?;
        Ok((inverse.residue * &cipher.b) % &sk.p)
    }
}

#[cfg(test)]
mod test_key_generation {
    use super::{ElGamal, PKEncryption};
    use crate::error::MathError;
    use num_bigint::BigInt;

    /// Checks whether a fixed secret exponent yields the textbook public
    /// key `e = 5^11 mod 23 = 22`.
    #[test]
    fn fixed_secret_exponent() {
        let elgamal = ElGamal::new(23, 5, 11, 5);

        let (pk, sk) = elgamal.gen().unwrap();

        assert_eq!(BigInt::from(23), pk.p);
        assert_eq!(BigInt::from(5), pk.g);
        assert_eq!(BigInt::from(22), pk.e);
        assert_eq!(BigInt::from(11), sk.d);
    }

    /// Checks whether sampled secret exponents stay in range and match the
    /// published key.
    #[test]
    fn sampled_secret_exponent() {
        let elgamal = ElGamal::default();

        for _ in 0..5 {
            let (pk, sk) = elgamal.gen().unwrap();
            assert!(BigInt::from(1) <= sk.d && sk.d < BigInt::from(22));
            assert_eq!(pk.e, pk.g.modpow(&sk.d, &pk.p));
        }
    }

    /// Checks whether composite moduli are rejected.
    #[test]
    fn rejects_composite_modulus() {
        assert!(matches!(
            ElGamal::new(15, 2, 3, 7).gen(),
            Err(MathError::NotPrime(_))
        ));
    }

    /// Checks whether generators outside `[1, p)` are rejected.
    #[test]
    fn rejects_generator_out_of_range() {
        assert!(matches!(
            ElGamal::new(23, 0, 11, 5).gen(),
            Err(MathError::OutOfRange(_))
        ));
        assert!(matches!(
            ElGamal::new(23, 23, 11, 5).gen(),
            Err(MathError::OutOfRange(_))
        ));
    }

    /// Checks whether secret exponents outside `[1, p - 1)` are rejected.
    #[test]
    fn rejects_secret_out_of_range() {
        assert!(matches!(
            ElGamal::new(23, 5, 0, 5).gen(),
            Err(MathError::OutOfRange(_))
        ));
        assert!(matches!(
            ElGamal::new(23, 5, 22, 5).gen(),
            Err(MathError::OutOfRange(_))
        ));
    }
}
