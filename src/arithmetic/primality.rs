// Copyright © 2024 The euclid-crypto developers
//
// This file is part of euclid-crypto.
//
// euclid-crypto is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains a deterministic primality test based on trial
//! division, see Section 7.2.4 in [\[2\]](<../index.html#:~:text=[2]>).

use num_bigint::BigInt;
use num_integer::Integer;

/// Checks whether `n` is prime by trial division.
/// Every prime larger than `3` has the form `6k ± 1`, so after ruling out
/// multiples of `2` and `3` only divisor candidates of that form up to `√n`
/// remain.
///
/// The test is exact and costs `O(√n)` divisions, which the toy parameter
/// sizes of this library keep affordable.
///
/// Parameters:
/// - `n`: the integer to test
///
/// Returns `true` if `n` is prime and `false` otherwise.
///
/// # Examples
/// ```
/// use euclid_crypto::arithmetic::primality::is_prime;
///
/// assert!(is_prime(23));
/// assert!(!is_prime(33));
/// ```
pub fn is_prime(n: impl Into<BigInt>) -> bool {
    let n = n.into();
    if n <= BigInt::from(1) {
        return false;
    }
    if n <= BigInt::from(3) {
        return true;
    }
    if n.is_even() || n.is_multiple_of(&BigInt::from(3)) {
        return false;
    }

    let mut i = BigInt::from(5);
    while &i * &i <= n {
        if n.is_multiple_of(&i) || n.is_multiple_of(&(&i + 2)) {
            return false;
        }
        i += 6;
    }
    true
}

#[cfg(test)]
mod test_is_prime {
    use super::is_prime;

    /// Ensure that small primes are recognized.
    #[test]
    fn small_primes() {
        for n in [2, 3, 5, 7, 11, 13, 23, 101] {
            assert!(is_prime(n));
        }
    }

    /// Ensure that units, composites, and negative integers are rejected.
    #[test]
    fn non_primes() {
        for n in [-7, -2, 0, 1, 4, 9, 15, 21, 25, 27, 33, 91] {
            assert!(!is_prime(n));
        }
    }

    /// Ensure that the wheel matches naive trial division on a large range.
    #[test]
    fn matches_naive_trial_division() {
        fn naive(n: u32) -> bool {
            n >= 2 && (2..n).take_while(|d| d * d <= n).all(|d| n % d != 0)
        }

        for n in 0..=10000u32 {
            assert_eq!(naive(n), is_prime(n), "mismatch at {n}");
        }
    }

    /// Ensure that integers beyond the test wheel's first windows work.
    #[test]
    fn larger_integers() {
        assert!(is_prime(104729));
        assert!(!is_prime(104729i64 * 2));
        assert!(!is_prime(104729i64 * 104729));
    }
}
