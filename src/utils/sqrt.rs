// Copyright © 2024 The euclid-crypto developers
//
// This file is part of euclid-crypto.
//
// euclid-crypto is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains integer square root helpers shared by the
//! factorization and discrete logarithm algorithms.

use num_bigint::BigInt;
use num_traits::{One, Signed};

/// Computes the ceiling of the square root of `n`, i.e. the smallest
/// integer `x` satisfying `x^2 >= n`.
///
/// Parameters:
/// - `n`: the radicand
///
/// Returns `⌈√n⌉` as a [`BigInt`].
///
/// # Examples
/// ```
/// use euclid_crypto::utils::sqrt::ceil_sqrt;
/// use num_bigint::BigInt;
///
/// assert_eq!(BigInt::from(6), ceil_sqrt(&BigInt::from(33)));
/// assert_eq!(BigInt::from(6), ceil_sqrt(&BigInt::from(36)));
/// ```
///
/// # Panics ...
/// - if `n` is negative.
pub fn ceil_sqrt(n: &BigInt) -> BigInt {
    let root = n.sqrt();
    if &(&root * &root) == n {
        root
    } else {
        root + BigInt::one()
    }
}

/// Checks whether `n` is the square of an integer.
/// Negative integers are no perfect squares.
///
/// Parameters:
/// - `n`: the integer to check
///
/// Returns `true` if an integer `y` with `y^2 = n` exists and `false`
/// otherwise.
///
/// # Examples
/// ```
/// use euclid_crypto::utils::sqrt::is_perfect_square;
/// use num_bigint::BigInt;
///
/// assert!(is_perfect_square(&BigInt::from(16)));
/// assert!(!is_perfect_square(&BigInt::from(15)));
/// ```
pub fn is_perfect_square(n: &BigInt) -> bool {
    if n.is_negative() {
        return false;
    }
    let root = n.sqrt();
    &(&root * &root) == n
}


#[cfg(test)]
mod test_is_perfect_square {
    use super::is_perfect_square;
    use num_bigint::BigInt;

    /// Ensure that squares are recognized.
    #[test]
    fn squares() {
        for root in 0..20 {
            assert!(is_perfect_square(&BigInt::from(root * root)));
        }
    }

    /// Ensure that non-squares and negative integers are rejected.
    #[test]
    fn non_squares() {
        assert!(!is_perfect_square(&BigInt::from(2)));
        assert!(!is_perfect_square(&BigInt::from(3)));
        assert!(!is_perfect_square(&BigInt::from(15)));
        assert!(!is_perfect_square(&BigInt::from(-4)));
    }
}
