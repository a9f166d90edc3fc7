// Copyright © 2024 The euclid-crypto developers
//
// This file is part of euclid-crypto.
//
// euclid-crypto is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains protocols with which two parties agree on a shared
//! secret over an insecure channel: the Diffie-Hellman key exchange and the
//! Shamir three-pass protocol.
//!
//! The main references are listed in the following:
//! - \[1\] Diffie, Whitfield and Hellman, Martin (1976).
//! New directions in cryptography.
//! In: IEEE Transactions on Information Theory 22.6.
//! <https://doi.org/10.1109/TIT.1976.1055638>
//! - \[2\] Menezes, Alfred and van Oorschot, Paul and Vanstone, Scott (1996).
//! Handbook of Applied Cryptography.
//! In: CRC Press.
//! <https://cacr.uwaterloo.ca/hac/>

mod diffie_hellman;
mod shamir;

pub use diffie_hellman::{DhExchange, DiffieHellman};
pub use shamir::{ShamirKey, ShamirThreePass, ThreePassExchange};
