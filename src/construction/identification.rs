// Copyright © 2024 The euclid-crypto developers
//
// This file is part of euclid-crypto.
//
// euclid-crypto is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains identification protocols with which one party
//! proves knowledge of a secret to another party without revealing it.
//!
//! The main references are listed in the following:
//! - \[1\] Fiat, Amos and Shamir, Adi (1986).
//! How to prove yourself: practical solutions to identification and
//! signature problems.
//! In: Advances in Cryptology — CRYPTO '86.
//! <https://doi.org/10.1007/3-540-47721-7_12>

mod fiat_shamir;

pub use fiat_shamir::{
    FiatShamir, FiatShamirPrivateKey, FiatShamirPublicKey, IdentificationRound,
};
