// Copyright © 2024 The euclid-crypto developers
//
// This file is part of euclid-crypto.
//
// euclid-crypto is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This crate provides classical number-theoretic algorithms (the extended
//! Euclidean algorithm, modular inverses, primality testing, cyclic group
//! classification, discrete logarithms, and integer factorization) together
//! with the textbook cryptosystems built on them, over small teaching
//! parameters. It is meant for studying how these schemes work, not for
//! protecting anything.

pub mod arithmetic;
pub mod construction;
pub mod error;
pub mod sample;
pub mod utils;
