// Copyright © 2024 The euclid-crypto developers
//
// This file is part of euclid-crypto.
//
// euclid-crypto is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains an implementation of the Fiat-Shamir
//! identification protocol: the prover demonstrates knowledge of a square
//! root `s` of `v^-1` modulo `n` over interactive commitment-challenge-
//! response rounds, together with the challenge-bit guessing attack and the
//! non-interactive variant deriving the challenge from a hash of the
//! commitment.
//!
//! The main references are listed in the following:
//! - \[1\] Fiat, Amos and Shamir, Adi (1986).
//! How to prove yourself: practical solutions to identification and
//! signature problems.
//! In: Advances in Cryptology — CRYPTO '86.
//! <https://doi.org/10.1007/3-540-47721-7_12>

use crate::arithmetic::euclid::gcd;
use crate::arithmetic::inverse::{multiplicative_inverse, TraceMode};
use crate::arithmetic::primality::is_prime;
use crate::construction::hash::sha256::hash_to_residue;
use crate::error::MathError;
use crate::sample::uniform::{sample_coprime, sample_uniform};
use num_bigint::BigInt;
use num_traits::{One, ToPrimitive};
use serde::{Deserialize, Serialize};

/// This struct manages and stores the public parameters of a
/// [`FiatShamir`] identification instance.
///
/// Attributes:
/// - `p`: specifies the first prime factor of the modulus
/// - `q`: specifies the second prime factor of the modulus
/// - `s`: specifies the secret of the prover. If it is `None`, a fresh
///   secret coprime to `n = p * q` is sampled during key generation
///
/// # Examples
/// ```
/// use euclid_crypto::construction::identification::FiatShamir;
///
/// let scheme = FiatShamir::new(3, 5, 2);
/// let (pk, sk) = scheme.gen().unwrap();
///
/// let round = FiatShamir::verify(&pk, &sk, None, None).unwrap();
///
/// assert!(round.accepted);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiatShamir {
    pub p: BigInt,
    pub q: BigInt,
    pub s: Option<BigInt>,
}

/// A Fiat-Shamir public key `(v, n)` with `v = s^2 mod n`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiatShamirPublicKey {
    pub v: BigInt,
    pub n: BigInt,
}

/// A Fiat-Shamir private key `(s, n)` holding the prover's secret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiatShamirPrivateKey {
    pub s: BigInt,
    pub n: BigInt,
}

/// The transcript of one identification round: the commitment
/// `x = k^2 mod n`, the challenge bit, the prover's response, the
/// verifier's check value, and whether `response^2 ≡ check (mod n)` held.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentificationRound {
    pub commitment: BigInt,
    pub challenge: u8,
    pub response: BigInt,
    pub check: BigInt,
    pub accepted: bool,
}

impl FiatShamir {
    /// Instantiates a [`FiatShamir`] instance with a fixed secret,
    /// yielding a reproducible key pair.
    ///
    /// **WARNING:** The given parameters are not checked for validity.
    /// Invalid choices are rejected once [`FiatShamir::gen`] is called.
    ///
    /// Parameters:
    /// - `p`: specifies the first prime factor of the modulus
    /// - `q`: specifies the second prime factor of the modulus
    /// - `s`: specifies the secret of the prover
    ///
    /// Returns a [`FiatShamir`] instance with the specified parameters.
    ///
    /// # Examples
    /// ```
    /// use euclid_crypto::construction::identification::FiatShamir;
    ///
    /// let scheme = FiatShamir::new(3, 5, 2);
    /// ```
    pub fn new(p: impl Into<BigInt>, q: impl Into<BigInt>, s: impl Into<BigInt>) -> Self {
        Self {
            p: p.into(),
            q: q.into(),
            s: Some(s.into()),
        }
    }

    /// Instantiates a [`FiatShamir`] instance that samples a fresh secret
    /// on every key generation.
    ///
    /// Parameters:
    /// - `p`: specifies the first prime factor of the modulus
    /// - `q`: specifies the second prime factor of the modulus
    ///
    /// Returns a [`FiatShamir`] instance with the specified prime factors.
    ///
    /// # Examples
    /// ```
    /// use euclid_crypto::construction::identification::FiatShamir;
    ///
    /// let scheme = FiatShamir::new_random(3, 5);
    /// ```
    pub fn new_random(p: impl Into<BigInt>, q: impl Into<BigInt>) -> Self {
        Self {
            p: p.into(),
            q: q.into(),
            s: None,
        }
    }

    /// Generates a key pair by following these steps:
    /// - the modulus is n = p * q for distinct primes p and q
    /// - resolve the secret `s`, sampling a fresh one from `(1, n)`
    ///   coprime to `n` if it is not fixed
    /// - v = s^2 mod n is published
    /// - the key pair is accepted only if s^2 * v ≡ 1 (mod n), i.e. the
    ///   scheme treats `v` as the inverse square of `s`
    ///
    /// Returns the [`FiatShamirPublicKey`] and [`FiatShamirPrivateKey`],
    /// or a [`MathError`] if a parameter is invalid.
    ///
    /// # Examples
    /// ```
    /// use euclid_crypto::construction::identification::FiatShamir;
    /// use num_bigint::BigInt;
    ///
    /// let scheme = FiatShamir::new(3, 5, 2);
    ///
    /// let (pk, sk) = scheme.gen().unwrap();
    ///
    /// assert_eq!(BigInt::from(4), pk.v);
    /// assert_eq!(BigInt::from(15), pk.n);
    /// ```
    ///
    /// # Errors and Failures
    /// - Returns a [`MathError`] of type [`MathError::NotPrime`]
    /// if `p` or `q` is not prime.
    /// - Returns a [`MathError`] of type [`MathError::NotDistinct`]
    /// if `p` and `q` are equal.
    /// - Returns a [`MathError`] of type [`MathError::OutOfRange`]
    /// if `s` does not lie in `(1, n)`.
    /// - Returns a [`MathError`] of type [`MathError::NotCoprime`]
    /// if `s` and `n` share a common divisor.
    /// - Returns a [`MathError`] of type [`MathError::InvalidKeyPair`]
    /// if the validity condition s^2 * v ≡ 1 (mod n) fails.
    pub fn gen(&self) -> Result<(FiatShamirPublicKey, FiatShamirPrivateKey), MathError> {
        for prime in [&self.p, &self.q] {
            if !is_prime(prime.clone()) {
                return Err(MathError::NotPrime(format!(
                    "The Fiat-Shamir protocol requires prime factors, got {prime}."
                )));
            }
        }
        if self.p == self.q {
            return Err(MathError::NotDistinct(format!(
                "The prime factors must be distinct, got {} twice.",
                self.p
            )));
        }
        let n = &self.p * &self.q;

        let s = match &self.s {
            Some(s) => {
                if s <= &BigInt::one() || s >= &n {
                    return Err(MathError::OutOfRange(format!(
                        "The secret s = {s} must lie in (1, {n})."
                    )));
                }
                if !gcd(s.clone(), n.clone()).is_one() {
                    return Err(MathError::NotCoprime(format!(
                        "The secret s = {s} must be coprime to n = {n}."
                    )));
                }
                s.clone()
            }
            None => sample_coprime(2, n.clone(), n.clone())?,
        };

        let v = (&s * &s) % &n;
        let validity = (&s * &s * &v) % &n;
        if !validity.is_one() {
            return Err(MathError::InvalidKeyPair(format!(
                "The key pair (v, s) = ({v}, {s}) violates s^2 * v ≡ 1 (mod {n}), \
                 got {validity}."
            )));
        }
        Ok((
            FiatShamirPublicKey { v, n: n.clone() },
            FiatShamirPrivateKey { s, n },
        ))
    }

    /// Runs one honest identification round by following these steps:
    /// - resolve the witness `k`, sampling a fresh one from `(1, n)`
    ///   coprime to `n` if it is not fixed, and the challenge bit
    /// - commitment: x = k^2 mod n
    /// - response: y = k for challenge 0, y = k * s mod n for challenge 1
    /// - check value: y_v = x for challenge 0, y_v = x * v^-1 mod n for
    ///   challenge 1
    /// - the round is accepted iff y^2 ≡ y_v (mod n)
    ///
    /// Parameters:
    /// - `pk`: specifies the public key of the prover
    /// - `sk`: specifies the private key of the prover
    /// - `k`: specifies the commitment witness. If it is `None`, a fresh
    ///   one is sampled
    /// - `challenge`: specifies the challenge bit of the verifier. If it
    ///   is `None`, a fresh bit is sampled
    ///
    /// Returns the [`IdentificationRound`] transcript, or a [`MathError`]
    /// if a parameter is invalid.
    ///
    /// # Examples
    /// ```
    /// use euclid_crypto::construction::identification::FiatShamir;
    /// use num_bigint::BigInt;
    ///
    /// let (pk, sk) = FiatShamir::new(3, 5, 2).gen().unwrap();
    ///
    /// let round = FiatShamir::verify(&pk, &sk, Some(BigInt::from(4)), Some(1)).unwrap();
    ///
    /// assert!(round.accepted);
    /// ```
    ///
    /// # Errors and Failures
    /// - Returns a [`MathError`] of type [`MathError::MismatchedModulus`]
    /// if both keys do not agree on the modulus.
    /// - Returns a [`MathError`] of type [`MathError::OutOfRange`]
    /// if `k` does not lie in `(1, n)` or the challenge is not a bit.
    /// - Returns a [`MathError`] of type [`MathError::NotCoprime`]
    /// if `k` and `n` share a common divisor.
    pub fn verify(
        pk: &FiatShamirPublicKey,
        sk: &FiatShamirPrivateKey,
        k: Option<BigInt>,
        challenge: Option<u8>,
    ) -> Result<IdentificationRound, MathError> {
        if pk.n != sk.n {
            return Err(MathError::MismatchedModulus(format!(
                "Both keys must agree on the modulus, got {} and {}.",
                pk.n, sk.n
            )));
        }
        let n = &pk.n;

        let k = match k {
            Some(k) => {
                if k <= BigInt::one() || &k >= n {
                    return Err(MathError::OutOfRange(format!(
                        "The witness k = {k} must lie in (1, {n})."
                    )));
                }
                if !gcd(k.clone(), n.clone()).is_one() {
                    return Err(MathError::NotCoprime(format!(
                        "The witness k = {k} must be coprime to n = {n}."
                    )));
                }
                k
            }
            None => sample_coprime(2, n.clone(), n.clone())?,
        };
        let challenge = resolve_challenge(challenge)?;

        let commitment = (&k * &k) % n;
        let response = match challenge {
            0 => k,
            _ => (&k * &sk.s) % n,
        };
        Self::complete_round(pk, commitment, challenge, response)
    }

    /// Runs one forged identification round without knowledge of the
    /// secret by following these steps:
    /// - the forger guesses the challenge bit ahead of time and picks a
    ///   response `y` from `(1, n)` first
    /// - commitment: x = y^2 mod n for guess 0, x = y^2 * v mod n for
    ///   guess 1
    /// - the verifier then picks the actual challenge bit and computes its
    ///   check value as in an honest round
    ///
    /// The forged round is accepted exactly when the verifier's challenge
    /// bit equals the forger's guess, so the forger survives a single
    /// round with probability 1/2.
    ///
    /// Parameters:
    /// - `pk`: specifies the public key under attack
    /// - `y`: specifies the prepared response. If it is `None`, a fresh
    ///   one is sampled
    /// - `guess`: specifies the guessed challenge bit. If it is `None`, a
    ///   fresh bit is sampled
    /// - `challenge`: specifies the challenge bit of the verifier. If it
    ///   is `None`, a fresh bit is sampled
    ///
    /// Returns the [`IdentificationRound`] transcript, or a [`MathError`]
    /// if a parameter is invalid.
    ///
    /// # Examples
    /// ```
    /// use euclid_crypto::construction::identification::FiatShamir;
    /// use num_bigint::BigInt;
    ///
    /// let (pk, _) = FiatShamir::new(3, 5, 2).gen().unwrap();
    ///
    /// let round = FiatShamir::attack(&pk, Some(BigInt::from(2)), Some(1), Some(1)).unwrap();
    ///
    /// assert!(round.accepted);
    /// ```
    ///
    /// # Errors and Failures
    /// - Returns a [`MathError`] of type [`MathError::OutOfRange`]
    /// if `y` does not lie in `(1, n)` or the guess or challenge is not a
    /// bit.
    pub fn attack(
        pk: &FiatShamirPublicKey,
        y: Option<BigInt>,
        guess: Option<u8>,
        challenge: Option<u8>,
    ) -> Result<IdentificationRound, MathError> {
        let n = &pk.n;

        let y = match y {
            Some(y) => {
                if y <= BigInt::one() || &y >= n {
                    return Err(MathError::OutOfRange(format!(
                        "The prepared response y = {y} must lie in (1, {n})."
                    )));
                }
                y
            }
            None => sample_uniform(2, n.clone())?,
        };
        let guess = resolve_challenge(guess)?;
        let challenge = resolve_challenge(challenge)?;

        let commitment = match guess {
            0 => (&y * &y) % n,
            _ => (&y * &y * &pk.v) % n,
        };
        Self::complete_round(pk, commitment, challenge, y)
    }

    /// Runs one non-interactive identification round: the challenge bit is
    /// derived from a hash of the commitment instead of the verifier's
    /// coin, removing the interaction.
    ///
    /// Parameters:
    /// - `pk`: specifies the public key of the prover
    /// - `sk`: specifies the private key of the prover
    /// - `k`: specifies the commitment witness. If it is `None`, a fresh
    ///   one is sampled
    ///
    /// Returns the [`IdentificationRound`] transcript, or a [`MathError`]
    /// if a parameter is invalid.
    ///
    /// # Examples
    /// ```
    /// use euclid_crypto::construction::identification::FiatShamir;
    ///
    /// let (pk, sk) = FiatShamir::new(3, 5, 2).gen().unwrap();
    ///
    /// let round = FiatShamir::verify_noninteractive(&pk, &sk, None).unwrap();
    ///
    /// assert!(round.accepted);
    /// ```
    ///
    /// # Errors and Failures
    /// - Returns a [`MathError`] of type [`MathError::MismatchedModulus`]
    /// if both keys do not agree on the modulus.
    /// - Returns a [`MathError`] of type [`MathError::OutOfRange`]
    /// if `k` does not lie in `(1, n)`.
    /// - Returns a [`MathError`] of type [`MathError::NotCoprime`]
    /// if `k` and `n` share a common divisor.
    pub fn verify_noninteractive(
        pk: &FiatShamirPublicKey,
        sk: &FiatShamirPrivateKey,
        k: Option<BigInt>,
    ) -> Result<IdentificationRound, MathError> {
        if pk.n != sk.n {
            return Err(MathError::MismatchedModulus(format!(
                "Both keys must agree on the modulus, got {} and {}.",
                pk.n, sk.n
            )));
        }
        let n = &pk.n;

        let k = match k {
            Some(k) => {
                if k <= BigInt::one() || &k >= n {
                    return Err(MathError::OutOfRange(format!(
                        "The witness k = {k} must lie in (1, {n})."
                    )));
                }
                if !gcd(k.clone(), n.clone()).is_one() {
                    return Err(MathError::NotCoprime(format!(
                        "The witness k = {k} must be coprime to n = {n}."
                    )));
                }
                k
            }
            None => sample_coprime(2, n.clone(), n.clone())?,
        };

        let commitment = (&k * &k) % n;
        // Fiat-Shamir heuristic: the commitment itself selects the bit.
        let challenge = hash_to_residue(&commitment.to_string(), 2)?
            .to_u8()
            .unwrap_or(0);
        let response = match challenge {
            0 => k,
            _ => (&k * &sk.s) % n,
        };
        Self::complete_round(pk, commitment, challenge, response)
    }

    /// Computes the verifier's side of a round: the check value for the
    /// given challenge bit and the acceptance decision.
    fn complete_round(
        pk: &FiatShamirPublicKey,
        commitment: BigInt,
        challenge: u8,
        response: BigInt,
    ) -> Result<IdentificationRound, MathError> {
        let n = &pk.n;
        let v_inverse = multiplicative_inverse(n.clone(), pk.v.clone(), TraceMode::Silent)?;
        let check = match challenge {
            0 => commitment.clone(),
            _ => (&commitment * &v_inverse.residue) % n,
        };
        let accepted = (&response * &response) % n == check;
        Ok(IdentificationRound {
            commitment,
            challenge,
            response,
            check,
            accepted,
        })
    }
}

impl Default for FiatShamir {
    /// Initializes a [`FiatShamir`] struct over the modulus `n = 3 * 5`
    /// with a freshly sampled secret.
    ///
    /// # Examples
    /// ```
    /// use euclid_crypto::construction::identification::FiatShamir;
    ///
    /// let scheme = FiatShamir::default();
    /// ```
    fn default() -> Self {
        FiatShamir::new_random(3, 5)
    }
}

/// Resolves an optional challenge bit, sampling a fresh one if necessary.
fn resolve_challenge(challenge: Option<u8>) -> Result<u8, MathError> {
    match challenge {
        Some(bit) => {
            if bit > 1 {
                return Err(MathError::OutOfRange(format!(
                    "The challenge bit {bit} must lie in {{0, 1}}."
                )));
            }
            Ok(bit)
        }
        None => Ok(sample_uniform(0, 2)?.to_u8().unwrap_or(0)),
    }
}

#[cfg(test)]
mod test_gen {
    use super::FiatShamir;
    use crate::error::MathError;
    use num_bigint::BigInt;

    /// Checks whether the textbook key pair over `n = 15` is generated.
    #[test]
    fn worked_example() {
        let scheme = FiatShamir::new(3, 5, 2);

        let (pk, sk) = scheme.gen().unwrap();

        assert_eq!(BigInt::from(4), pk.v);
        assert_eq!(BigInt::from(15), pk.n);
        assert_eq!(BigInt::from(2), sk.s);
        assert_eq!(BigInt::from(15), sk.n);
    }

    /// Checks whether sampled secrets always satisfy the validity
    /// condition s^2 * v ≡ 1 (mod 15), which holds for every s coprime
    /// to 15.
    #[test]
    fn sampled_secrets_valid() {
        let scheme = FiatShamir::default();

        for _ in 0..5 {
            let (pk, sk) = scheme.gen().unwrap();
            assert_eq!(BigInt::from(1), (&sk.s * &sk.s * &pk.v) % &pk.n);
        }
    }

    /// Checks whether composite factors are rejected.
    #[test]
    fn rejects_composite_factor() {
        assert!(matches!(
            FiatShamir::new(4, 5, 2).gen(),
            Err(MathError::NotPrime(_))
        ));
        assert!(matches!(
            FiatShamir::new(3, 9, 2).gen(),
            Err(MathError::NotPrime(_))
        ));
    }

    /// Checks whether equal prime factors are rejected.
    #[test]
    fn rejects_equal_factors() {
        let scheme = FiatShamir::new(5, 5, 2);

        assert!(matches!(scheme.gen(), Err(MathError::NotDistinct(_))));
    }

    /// Checks whether secrets outside `(1, n)` or sharing a divisor with
    /// `n` are rejected.
    #[test]
    fn rejects_invalid_secret() {
        assert!(matches!(
            FiatShamir::new(3, 5, 1).gen(),
            Err(MathError::OutOfRange(_))
        ));
        assert!(matches!(
            FiatShamir::new(3, 5, 15).gen(),
            Err(MathError::OutOfRange(_))
        ));
        assert!(matches!(
            FiatShamir::new(3, 5, 6).gen(),
            Err(MathError::NotCoprime(_))
        ));
    }

    /// Checks whether a modulus violating the validity condition is
    /// rejected: modulo `n = 3 * 7` the coprime secret `s = 2` yields
    /// s^2 * v = 16 * 16 ≠ 1.
    #[test]
    fn rejects_invalid_key_pair() {
        let scheme = FiatShamir::new(3, 7, 2);

        assert!(matches!(scheme.gen(), Err(MathError::InvalidKeyPair(_))));
    }
}


#[cfg(test)]
mod test_attack {
    use super::FiatShamir;
    use num_bigint::BigInt;

    /// Checks whether the forged round is accepted exactly when the
    /// verifier's challenge bit equals the forger's guess.
    #[test]
    fn accepted_iff_guess_matches() {
        let (pk, _) = FiatShamir::new(3, 5, 2).gen().unwrap();

        for guess in [0, 1] {
            for challenge in [0, 1] {
                let round = FiatShamir::attack(
                    &pk,
                    Some(BigInt::from(2)),
                    Some(guess),
                    Some(challenge),
                )
                .unwrap();
                assert_eq!(guess == challenge, round.accepted);
            }
        }
    }

    /// Checks whether the forged commitment matches the guessed branch.
    #[test]
    fn commitment_follows_guess() {
        let (pk, _) = FiatShamir::new(3, 5, 2).gen().unwrap();

        let plain = FiatShamir::attack(&pk, Some(BigInt::from(2)), Some(0), Some(0)).unwrap();
        let blinded = FiatShamir::attack(&pk, Some(BigInt::from(2)), Some(1), Some(1)).unwrap();

        assert_eq!(BigInt::from(4), plain.commitment);
        assert_eq!(BigInt::from(1), blinded.commitment);
    }
}

#[cfg(test)]
mod test_verify_noninteractive {
    use super::FiatShamir;
    use num_bigint::BigInt;

    /// Checks whether non-interactive rounds with a fixed witness verify
    /// and derive the challenge deterministically.
    #[test]
    fn deterministic_challenge() {
        let (pk, sk) = FiatShamir::new(3, 5, 2).gen().unwrap();

        let first =
            FiatShamir::verify_noninteractive(&pk, &sk, Some(BigInt::from(4))).unwrap();
        let second =
            FiatShamir::verify_noninteractive(&pk, &sk, Some(BigInt::from(4))).unwrap();

        assert!(first.accepted);
        assert_eq!(first, second);
    }

    /// Checks whether non-interactive rounds with sampled witnesses
    /// verify.
    #[test]
    fn sampled_rounds_verify() {
        let (pk, sk) = FiatShamir::default().gen().unwrap();

        for _ in 0..10 {
            let round = FiatShamir::verify_noninteractive(&pk, &sk, None).unwrap();
            assert!(round.accepted);
        }
    }
}
