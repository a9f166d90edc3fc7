// Copyright © 2024 The euclid-crypto developers
//
// This file is part of euclid-crypto.
//
// euclid-crypto is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains the number-theoretic algorithms the cryptographic
//! constructions are built on: the Euclidean algorithm and its extended
//! variant, primality testing, modular inverses, arithmetic in finite rings,
//! the classification of multiplicative cyclic groups, discrete logarithms,
//! and integer factorization.
//!
//! The main references are listed in the following:
//! - \[1\] Menezes, Alfred J. and van Oorschot, Paul C. and Vanstone, Scott A. (1996).
//! Handbook of Applied Cryptography.
//! CRC Press.
//! <https://cacr.uwaterloo.ca/hac/>
//! - \[2\] Paar, Christof and Pelzl, Jan (2009).
//! Understanding Cryptography.
//! Springer.
//! <https://doi.org/10.1007/978-3-642-04101-3>
//! - \[3\] Shanks, Daniel (1971).
//! Class number, a theory of factorization, and genera.
//! In: Proceedings of Symposia in Pure Mathematics 20.
//! - \[4\] Pollard, John M. (1975).
//! A monte carlo method for factorization.
//! In: BIT Numerical Mathematics 15.
//! <https://doi.org/10.1007/BF01933667>

pub mod cyclic_group;
pub mod discrete_log;
pub mod euclid;
pub mod factorization;
pub mod inverse;
pub mod primality;
pub mod ring;
