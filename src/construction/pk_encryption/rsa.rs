// Copyright © 2024 The euclid-crypto developers
//
// This file is part of euclid-crypto.
//
// euclid-crypto is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains an implementation of the textbook RSA public key
//! encryption scheme over small teaching parameters.
//!
//! The main references are listed in the following:
//! - \[1\] Rivest, Ronald and Shamir, Adi and Adleman, Leonard (1978).
//! A method for obtaining digital signatures and public-key cryptosystems.
//! In: Communications of the ACM 21.2.
//! <https://dl.acm.org/doi/pdf/10.1145/359340.359342>
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
use num_traits::{One, ToPrimitive, Zero};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// This struct manages and stores the public parameters of an [`Rsa`]
/// public key encryption instance.
///
/// Attributes:
/// - `p`: specifies the first prime factor of the modulus
/// - `q`: specifies the second prime factor of the modulus
/// - `e`: specifies the public exponent. If it is `None`, a fresh exponent
///   coprime to `(p - 1) * (q - 1)` is sampled during key generation
///
/// # Examples
/// ```
/// use euclid_crypto::construction::pk_encryption::{PKEncryption, Rsa};
/// use num_bigint::BigInt;
/// // setup public parameters and key pair
/// let rsa = Rsa::default();
/// let (pk, sk) = rsa.gen().unwrap();
///
/// // encrypt a message from [0, n)
/// let cipher = rsa.enc(&pk, 4).unwrap();
///
/// // decrypt
/// let m = rsa.dec(&sk, &cipher).unwrap();
///
/// assert_eq!(BigInt::from(4), m);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rsa {
    pub p: BigInt,
    pub q: BigInt,
    pub e: Option<BigInt>,
}

/// An RSA public key `(e, n)` with modulus `n = p * q`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsaPublicKey {
    pub e: BigInt,
    pub n: BigInt,
}

/// An RSA secret key `(d, n)` with `e * d ≡ 1 (mod (p - 1) * (q - 1))`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsaPrivateKey {
    pub d: BigInt,
    pub n: BigInt,
}

impl Rsa {
    /// Instantiates an [`Rsa`] instance with a fixed public exponent.
    ///
    /// **WARNING:** The given parameters are not checked for validity.
    /// Invalid choices are rejected once [`Rsa::gen`] is called.
    ///
    /// Parameters:
    /// - `p`: specifies the first prime factor of the modulus
    /// - `q`: specifies the second prime factor of the modulus
    /// - `e`: specifies the public exponent
    ///
    /// Returns an [`Rsa`] instance with the specified parameters.
    ///
    /// # Examples
    /// ```
    /// use euclid_crypto::construction::pk_encryption::Rsa;
    ///
    /// let rsa = Rsa::new(3, 11, 3);
    /// ```
    pub fn new(p: impl Into<BigInt>, q: impl Into<BigInt>, e: impl Into<BigInt>) -> Self {
        Self {
            p: p.into(),
            q: q.into(),
            e: Some(e.into()),
        }
    }

    /// Instantiates an [`Rsa`] instance that samples a fresh public
    /// exponent on every key generation.
    ///
    /// Parameters:
    /// - `p`: specifies the first prime factor of the modulus
    /// - `q`: specifies the second prime factor of the modulus
    ///
    /// Returns an [`Rsa`] instance with the specified prime factors.
    ///
    /// # Examples
    /// ```
    /// use euclid_crypto::construction::pk_encryption::Rsa;
    ///
    /// let rsa = Rsa::new_random(11, 13);
    /// ```
    pub fn new_random(p: impl Into<BigInt>, q: impl Into<BigInt>) -> Self {
        Self {
            p: p.into(),
            q: q.into(),
            e: None,
        }
    }
}

impl Default for Rsa {
    /// Initializes an [`Rsa`] struct with `p = 3`, `q = 11`, `e = 3`.
    /// This parameter choice is not secure, but it provides a small
    /// working example with modulus `n = 33`.
    ///
    /// # Examples
    /// ```
    /// use euclid_crypto::construction::pk_encryption::Rsa;
    ///
    /// let rsa = Rsa::default();
    /// ```
    fn default() -> Self {
        Rsa::new(3, 11, 3)
    }
}

impl PKEncryption for Rsa {
    type Cipher = BigInt;
    type PublicKey = RsaPublicKey;
    type SecretKey = RsaPrivateKey;

    /// Generates a (pk, sk) pair for the RSA public key encryption scheme
    /// by following these steps:
    /// - n = p * q and phi = (p - 1) * (q - 1)
    /// - check that the given `e` lies in `[1, phi)` and is coprime to
    ///   `phi`, or sample a fresh one with these properties
    /// - d = e^(-1) mod phi
    ///
    /// Returns the key pair `((e, n), (d, n))` or a [`MathError`] if the
    /// public parameters are invalid.
    ///
    /// # Examples
    /// ```
    /// use euclid_crypto::construction::pk_encryption::{PKEncryption, Rsa};
    /// let rsa = Rsa::default();
    ///
    /// let (pk, sk) = rsa.gen().unwrap();
    /// ```
    ///
    /// # Errors and Failures
    /// - Returns a [`MathError`] of type [`MathError::NotPrime`]
    /// if `p` or `q` is not prime.
    /// - Returns a [`MathError`] of type [`MathError::NotDistinct`]
    /// if `p` and `q` are equal.
    /// - Returns a [`MathError`] of type [`MathError::OutOfRange`]
    /// if the given `e` does not lie in `[1, phi)`.
    /// - Returns a [`MathError`] of type [`MathError::NotCoprime`]
    /// if the given `e` shares a divisor with `phi`.
    fn gen(&self) -> Result<(Self::PublicKey, Self::SecretKey), MathError> {
        for factor in [&self.p, &self.q] {
            if !is_prime(factor.clone()) {
                return Err(MathError::NotPrime(format!(
                    "The RSA modulus requires prime factors, but {factor} is not prime."
                )));
            }
        }
        if self.p == self.q {
            return Err(MathError::NotDistinct(format!(
                "The prime factors of the RSA modulus must be distinct, got {} twice.",
                self.p
            )));
        }
        let n = &self.p * &self.q;
        let phi = (&self.p - 1) * (&self.q - 1);

        let e = match &self.e {
            Some(e) => {
                if e < &BigInt::one() || e >= &phi {
                    return Err(MathError::OutOfRange(format!(
                        "The public exponent e = {e} must lie in [1, {phi})."
                    )));
                }
                if !gcd(e.clone(), phi.clone()).is_one() {
                    return Err(MathError::NotCoprime(format!(
                        "The public exponent e = {e} must be coprime to phi = {phi}."
                    )));
                }
                e.clone()
            }
            None => sample_coprime(1, phi.clone(), phi.clone())?,
        };
        let d = multiplicative_inverse(phi, e.clone(), TraceMode::Silent)?.residue;

        Ok((
            RsaPublicKey { e, n: n.clone() },
            RsaPrivateKey { d, n },
        ))
    }

    /// Encrypts the provided `message` under the public key `pk` as
    /// `c = message^e mod n`.
    ///
    /// Parameters:
    /// - `pk`: specifies the public key `pk = (e, n)`
    /// - `message`: specifies the message from `[0, n)`
    ///
    /// Returns the cipher `c` or a [`MathError`] if the message violates
    /// its range.
    ///
    /// # Examples
    /// ```
    /// use euclid_crypto::construction::pk_encryption::{PKEncryption, Rsa};
    /// use num_bigint::BigInt;
    /// let rsa = Rsa::default();
    /// let (pk, _) = rsa.gen().unwrap();
    ///
    /// let cipher = rsa.enc(&pk, 4).unwrap();
    ///
    /// assert_eq!(BigInt::from(31), cipher);
    /// ```
    ///
    /// # Errors and Failures
    /// - Returns a [`MathError`] of type [`MathError::OutOfRange`]
    /// if the message does not lie in `[0, n)`.
    ///
    /// # Panics ...
    /// - if a hand-crafted public key contains a negative exponent.
    fn enc(&self, pk: &Self::PublicKey, message: impl Into<BigInt>) -> Result<BigInt, MathError> {
        let message = message.into();
        if message < BigInt::zero() || message >= pk.n {
            return Err(MathError::OutOfRange(format!(
                "The message {message} must lie in [0, {}).",
                pk.n
            )));
        }
        Ok(message.modpow(&pk.e, &pk.n))
    }

    /// Decrypts the provided `cipher` using the secret key `sk` as
    /// `m = cipher^d mod n`.
    ///
    /// Parameters:
    /// - `sk`: specifies the secret key `sk = (d, n)`
    /// - `cipher`: specifies the cipher from `[0, n)`
    ///
    /// Returns the decrypted message or a [`MathError`] if the cipher
    /// violates its range.
    ///
    /// # Examples
    /// ```
    /// use euclid_crypto::construction::pk_encryption::{PKEncryption, Rsa};
    /// use num_bigint::BigInt;
    /// let rsa = Rsa::default();
    /// let (pk, sk) = rsa.gen().unwrap();
    /// let cipher = rsa.enc(&pk, 4).unwrap();
    ///
    /// let m = rsa.dec(&sk, &cipher).unwrap();
    ///
    /// assert_eq!(BigInt::from(4), m);
    /// ```
    ///
    /// # Errors and Failures
    /// - Returns a [`MathError`] of type [`MathError::OutOfRange`]
    /// if the cipher does not lie in `[0, n)`.
    fn dec(&self, sk: &Self::SecretKey, cipher: &Self::Cipher) -> Result<BigInt, MathError> {
        if cipher < &BigInt::zero() || cipher >= &sk.n {
            return Err(MathError::OutOfRange(format!(
                "The cipher {cipher} must lie in [0, {}).",
                sk.n
            )));
        }
        Ok(cipher.modpow(&sk.d, &sk.n))
    }
}

/// Recovers the secret exponent matching the public key `(e, n)` by
/// encrypting random distinct plaintexts and testing every candidate
/// exponent `b` in `[0, n)` against all of them.
///
/// The exhaustive search is only feasible for the small teaching moduli
/// this crate targets.
///
/// Parameters:
/// - `public_key`: specifies the public key `(e, n)` under attack
/// - `samples`: specifies the number of distinct random plaintexts to
///   test against. If it is `None`, `n / 2` plaintexts are used for
///   `n < 50` and `5` otherwise
///
/// Returns the smallest exponent decrypting all sampled ciphers or a
/// [`MathError`] if the search fails or a parameter violates its range.
///
/// # Examples
/// ```
/// use euclid_crypto::construction::pk_encryption::{brute_force_exponent, PKEncryption, Rsa};
/// use num_bigint::BigInt;
/// let rsa = Rsa::default();
/// let (pk, sk) = rsa.gen().unwrap();
///
/// let d = brute_force_exponent(&pk, None).unwrap();
///
/// assert_eq!(sk.d, d);
/// ```
///
/// # Errors and Failures
/// - Returns a [`MathError`] of type [`MathError::InvalidModulus`]
/// if `n` is smaller than `2`.
/// - Returns a [`MathError`] of type [`MathError::OutOfRange`]
/// if the exponent of the public key is negative or the number of
/// samples does not lie in `[1, n)`.
/// - Returns a [`MathError`] of type [`MathError::NotFound`]
/// if no exponent decrypts all sampled ciphers.
pub fn brute_force_exponent(
    public_key: &RsaPublicKey,
    samples: Option<usize>,
) -> Result<BigInt, MathError> {
    let (e, n) = (&public_key.e, &public_key.n);
    if n < &BigInt::from(2) {
        return Err(MathError::InvalidModulus(format!(
            "The attack requires a modulus of at least 2, got {n}."
        )));
    }
    if e < &BigInt::zero() {
        return Err(MathError::OutOfRange(format!(
            "The attack requires a non-negative public exponent, got {e}."
        )));
    }

    let samples = match samples {
        Some(samples) => samples,
        // half of the plaintext space for tiny moduli, a handful otherwise
        None => {
            if n < &BigInt::from(50) {
                (n / 2u32).to_usize().unwrap()
            } else {
                5
            }
        }
    };
    if samples < 1 || BigInt::from(samples) >= *n {
        return Err(MathError::OutOfRange(format!(
            "The number of samples {samples} must lie in [1, {n})."
        )));
    }

    let mut plaintexts = HashSet::new();
    while plaintexts.len() < samples {
        plaintexts.insert(sample_uniform(0, n.clone())?);
    }
    let pairs: Vec<(BigInt, BigInt)> = plaintexts
        .into_iter()
        .map(|plain| {
            let cipher = plain.modpow(e, n);
            (plain, cipher)
        })
        .collect();

    let mut b = BigInt::zero();
    while &b < n {
        if pairs
            .iter()
            .all(|(plain, cipher)| &cipher.modpow(&b, n) == plain)
        {
            return Ok(b);
        }
        b += 1;
    }
    Err(MathError::NotFound(format!(
        "No exponent in [0, {n}) decrypts all sampled ciphers."
    )))
}

#[cfg(test)]
mod test_key_generation {
    use super::{PKEncryption, Rsa};
    use crate::error::MathError;
    use num_bigint::BigInt;

    /// Checks whether the default parameters yield the textbook key pair
    /// `((3, 33), (7, 33))`.
    #[test]
    fn default_key_pair() {
        let rsa = Rsa::default();

        let (pk, sk) = rsa.gen().unwrap();

        assert_eq!(BigInt::from(3), pk.e);
        assert_eq!(BigInt::from(33), pk.n);
        assert_eq!(BigInt::from(7), sk.d);
        assert_eq!(BigInt::from(33), sk.n);
    }

    /// Checks whether a sampled exponent is invertible modulo phi.
    #[test]
    fn sampled_exponent() {
        let rsa = Rsa::new_random(11, 13);

        for _ in 0..5 {
            let (pk, sk) = rsa.gen().unwrap();
            assert_eq!(
                BigInt::from(1),
                (&pk.e * &sk.d) % BigInt::from(120)
            );
        }
    }

    /// Checks whether composite factors are rejected.
    #[test]
    fn rejects_composite_factors() {
        assert!(matches!(
            Rsa::new(4, 11, 3).gen(),
            Err(MathError::NotPrime(_))
        ));
        assert!(matches!(
            Rsa::new(3, 15, 3).gen(),
            Err(MathError::NotPrime(_))
        ));
    }

    /// Checks whether equal prime factors are rejected.
    #[test]
    fn rejects_equal_factors() {
        assert!(matches!(
            Rsa::new(11, 11, 3).gen(),
            Err(MathError::NotDistinct(_))
        ));
    }

    /// Checks whether exponents outside `[1, phi)` are rejected before the
    /// coprimality check.
    #[test]
    fn rejects_exponent_out_of_range() {
        assert!(matches!(
            Rsa::new(3, 11, 0).gen(),
            Err(MathError::OutOfRange(_))
        ));
        assert!(matches!(
            Rsa::new(3, 11, 20).gen(),
            Err(MathError::OutOfRange(_))
        ));
    }

    /// Checks whether exponents sharing a divisor with phi are rejected.
    #[test]
    fn rejects_non_coprime_exponent() {
        assert!(matches!(
            Rsa::new(3, 11, 4).gen(),
            Err(MathError::NotCoprime(_))
        ));
    }

    /// Checks whether a key pair can be serialized and deserialized
    /// without loss.
    #[test]
    fn serialization_roundtrip() {
        let (pk, sk) = Rsa::default().gen().unwrap();

        let pk_json = serde_json::to_string(&pk).unwrap();
        let sk_json = serde_json::to_string(&sk).unwrap();

        assert_eq!(pk, serde_json::from_str(&pk_json).unwrap());
        assert_eq!(sk, serde_json::from_str(&sk_json).unwrap());
    }
}


#[cfg(test)]
mod test_brute_force_exponent {
    use super::{brute_force_exponent, PKEncryption, Rsa, RsaPublicKey};
    use crate::error::MathError;
    use num_bigint::BigInt;

    /// Checks whether the secret exponent of the default key pair is
    /// recovered. With half of the plaintext space sampled, every smaller
    /// exponent fails on at least one plaintext.
    #[test]
    fn recovers_default_exponent() {
        let (pk, sk) = Rsa::default().gen().unwrap();

        let d = brute_force_exponent(&pk, None).unwrap();

        assert_eq!(sk.d, d);
    }

    /// Checks whether the recovered exponent decrypts a cipher.
    #[test]
    fn recovered_exponent_decrypts() {
        let rsa = Rsa::default();
        let (pk, _) = rsa.gen().unwrap();
        let cipher = rsa.enc(&pk, 4).unwrap();

        let d = brute_force_exponent(&pk, None).unwrap();

        assert_eq!(BigInt::from(4), cipher.modpow(&d, &pk.n));
    }

    /// Checks whether sample counts outside `[1, n)` are rejected.
    #[test]
    fn rejects_sample_count() {
        let (pk, _) = Rsa::default().gen().unwrap();

        assert!(matches!(
            brute_force_exponent(&pk, Some(33)),
            Err(MathError::OutOfRange(_))
        ));
        assert!(matches!(
            brute_force_exponent(&pk, Some(0)),
            Err(MathError::OutOfRange(_))
        ));
    }

    /// Checks whether hand-crafted public keys are rejected.
    #[test]
    fn rejects_invalid_key() {
        let tiny = RsaPublicKey {
            e: BigInt::from(3),
            n: BigInt::from(1),
        };
        let negative = RsaPublicKey {
            e: BigInt::from(-3),
            n: BigInt::from(33),
        };

        assert!(matches!(
            brute_force_exponent(&tiny, None),
            Err(MathError::InvalidModulus(_))
        ));
        assert!(matches!(
            brute_force_exponent(&negative, None),
            Err(MathError::OutOfRange(_))
        ));
    }
}
