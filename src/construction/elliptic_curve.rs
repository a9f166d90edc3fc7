// Copyright © 2024 The euclid-crypto developers
//
// This file is part of euclid-crypto.
//
// euclid-crypto is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains point arithmetic on elliptic curves in short
//! Weierstrass form `y^2 = x^3 + a*x + b` over `GF(n)`: membership tests
//! and the chord-rule addition of distinct points.
//!
//! The main references are listed in the following:
//! - \[1\] Paar, Christof and Pelzl, Jan (2010).
//! Understanding Cryptography.
//! In: Springer Berlin, Heidelberg.
//! <https://doi.org/10.1007/978-3-642-04101-3>

use crate::arithmetic::inverse::{multiplicative_inverse, TraceMode};
use crate::error::MathError;
use num_bigint::BigInt;
use num_integer::Integer;
use serde::{Deserialize, Serialize};

/// An elliptic curve `y^2 = x^3 + a*x + b` over `GF(n)`.
///
/// Attributes:
/// - `a`: specifies the linear coefficient of the curve equation
/// - `b`: specifies the constant coefficient of the curve equation
/// - `n`: specifies the modulus of the underlying field
///
/// # Examples
/// ```
/// use euclid_crypto::construction::elliptic_curve::{CurvePoint, EllipticCurve};
///
/// let curve = EllipticCurve::new(2, 2, 17).unwrap();
/// let p = CurvePoint::new(5, 1);
/// let q = CurvePoint::new(6, 3);
///
/// let r = curve.add(&p, &q).unwrap();
///
/// assert_eq!(CurvePoint::new(10, 6), r);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EllipticCurve {
    pub a: BigInt,
    pub b: BigInt,
    pub n: BigInt,
}

/// An affine point `(x|y)` on an [`EllipticCurve`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub x: BigInt,
    pub y: BigInt,
}

impl CurvePoint {
    /// Instantiates a [`CurvePoint`] from its affine coordinates. Whether
    /// the point lies on a concrete curve is checked by
    /// [`EllipticCurve::contains`].
    ///
    /// Parameters:
    /// - `x`: specifies the x-coordinate of the point
    /// - `y`: specifies the y-coordinate of the point
    ///
    /// Returns a [`CurvePoint`] with the specified coordinates.
    ///
    /// # Examples
    /// ```
    /// use euclid_crypto::construction::elliptic_curve::CurvePoint;
    ///
    /// let p = CurvePoint::new(5, 1);
    /// ```
    pub fn new(x: impl Into<BigInt>, y: impl Into<BigInt>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
}

impl EllipticCurve {
    /// Instantiates an [`EllipticCurve`] `y^2 = x^3 + a*x + b` over
    /// `GF(n)`.
    ///
    /// Parameters:
    /// - `a`: specifies the linear coefficient of the curve equation
    /// - `b`: specifies the constant coefficient of the curve equation
    /// - `n`: specifies the modulus of the underlying field
    ///
    /// Returns an [`EllipticCurve`] with the specified parameters, or a
    /// [`MathError`] if the modulus is invalid.
    ///
    /// # Examples
    /// ```
    /// use euclid_crypto::construction::elliptic_curve::EllipticCurve;
    ///
    /// let curve = EllipticCurve::new(2, 2, 17).unwrap();
    /// ```
    ///
    /// # Errors and Failures
    /// - Returns a [`MathError`] of type [`MathError::InvalidModulus`]
    /// if `n` is smaller than `2`.
    pub fn new(
        a: impl Into<BigInt>,
        b: impl Into<BigInt>,
        n: impl Into<BigInt>,
    ) -> Result<Self, MathError> {
        let n = n.into();
        if n < BigInt::from(2) {
            return Err(MathError::InvalidModulus(format!(
                "An elliptic curve requires a modulus of at least 2, got {n}."
            )));
        }
        Ok(Self {
            a: a.into(),
            b: b.into(),
            n,
        })
    }

    /// Checks whether a point satisfies the curve equation, i.e. whether
    /// y^2 ≡ x^3 + a*x + b (mod n).
    ///
    /// Parameters:
    /// - `point`: specifies the point to test
    ///
    /// Returns `true` if the point lies on the curve.
    ///
    /// # Examples
    /// ```
    /// use euclid_crypto::construction::elliptic_curve::{CurvePoint, EllipticCurve};
    ///
    /// let curve = EllipticCurve::new(2, 2, 17).unwrap();
    ///
    /// assert!(curve.contains(&CurvePoint::new(5, 1)));
    /// assert!(!curve.contains(&CurvePoint::new(5, 2)));
    /// ```
    pub fn contains(&self, point: &CurvePoint) -> bool {
        let lhs = (&point.y * &point.y).mod_floor(&self.n);
        let rhs = (&point.x * &point.x * &point.x + &self.a * &point.x + &self.b)
            .mod_floor(&self.n);
        lhs == rhs
    }

    /// Adds two distinct points on the curve by the chord rule:
    /// - the slope is m = (y_p - y_q) * (x_p - x_q)^-1 mod n
    /// - the chord meets the curve a third time at
    ///   x_r = m^2 - x_p - x_q and y_r = y_p - m * (x_p - x_r)
    /// - the sum is the reflection (x_r, -y_r mod n)
    ///
    /// Parameters:
    /// - `p`: specifies the first summand
    /// - `q`: specifies the second summand
    ///
    /// Returns the sum of both points as a [`CurvePoint`], or a
    /// [`MathError`] if an operand is invalid.
    ///
    /// # Examples
    /// ```
    /// use euclid_crypto::construction::elliptic_curve::{CurvePoint, EllipticCurve};
    ///
    /// let curve = EllipticCurve::new(2, 2, 17).unwrap();
    ///
    /// let r = curve.add(&CurvePoint::new(5, 1), &CurvePoint::new(6, 3)).unwrap();
    ///
    /// assert_eq!(CurvePoint::new(10, 6), r);
    /// ```
    ///
    /// # Errors and Failures
    /// - Returns a [`MathError`] of type [`MathError::PointNotOnCurve`]
    /// if an operand or the computed sum does not lie on the curve.
    /// - Returns a [`MathError`] of type [`MathError::OutOfRange`]
    /// if both points share their x-coordinate, as the chord rule cannot
    /// invert `x_p - x_q = 0`.
    /// - Returns a [`MathError`] of type [`MathError::NotCoprime`]
    /// if `x_p - x_q` is not invertible modulo `n`.
    pub fn add(&self, p: &CurvePoint, q: &CurvePoint) -> Result<CurvePoint, MathError> {
        for point in [p, q] {
            if !self.contains(point) {
                return Err(MathError::PointNotOnCurve(format!(
                    "The point ({}|{}) does not lie on the curve y^2 = x^3 + {}x + {} over GF({}).",
                    point.x, point.y, self.a, self.b, self.n
                )));
            }
        }

        let numerator = (&p.y - &q.y).mod_floor(&self.n);
        let denominator = (&p.x - &q.x).mod_floor(&self.n);
        let inverse = multiplicative_inverse(self.n.clone(), denominator, TraceMode::Silent)?;
        let m = (numerator * inverse.residue).mod_floor(&self.n);

        let x_r = (&m * &m - &p.x - &q.x).mod_floor(&self.n);
        let y_r = (&p.y - &m * (&p.x - &x_r)).mod_floor(&self.n);
        let sum = CurvePoint {
            x: x_r,
            y: (-y_r).mod_floor(&self.n),
        };
        if !self.contains(&sum) {
            return Err(MathError::PointNotOnCurve(format!(
                "The computed sum ({}|{}) does not lie on the curve y^2 = x^3 + {}x + {} over GF({}).",
                sum.x, sum.y, self.a, self.b, self.n
            )));
        }
        Ok(sum)
    }
}

#[cfg(test)]
mod test_contains {
    use super::{CurvePoint, EllipticCurve};

    /// Checks whether the points of the textbook curve over `GF(17)` are
    /// recognized.
    #[test]
    fn accepts_curve_points() {
        let curve = EllipticCurve::new(2, 2, 17).unwrap();

        for (x, y) in [(5, 1), (6, 3), (10, 6), (3, 1), (0, 6)] {
            assert!(curve.contains(&CurvePoint::new(x, y)));
        }
    }

    /// Checks whether points off the curve are rejected.
    #[test]
    fn rejects_other_points() {
        let curve = EllipticCurve::new(2, 2, 17).unwrap();

        for (x, y) in [(5, 2), (6, 4), (1, 1)] {
            assert!(!curve.contains(&CurvePoint::new(x, y)));
        }
    }

    /// Checks whether coordinates outside `[0, n)` are reduced before the
    /// comparison.
    #[test]
    fn reduces_coordinates() {
        let curve = EllipticCurve::new(2, 2, 17).unwrap();

        assert!(curve.contains(&CurvePoint::new(22, 18)));
        assert!(curve.contains(&CurvePoint::new(-12, -16)));
    }

    /// Checks whether moduli below 2 are rejected at construction.
    #[test]
    fn rejects_invalid_modulus() {
        assert!(EllipticCurve::new(2, 2, 1).is_err());
        assert!(EllipticCurve::new(2, 2, 0).is_err());
    }
}
