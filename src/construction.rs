// Copyright © 2024 The euclid-crypto developers
//
// This file is part of euclid-crypto.
//
// euclid-crypto is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains fundamental cryptographic constructions, on which other
//! constructions can be build on.
//! Among others these include encryption schemes and key exchange protocols.
//! A construction is build the same way:
//!
//! 1. A trait that combines the common feature, e.g.
//! [`public key encryption`](pk_encryption::PKEncryption).
//! 2. Explicit implementations of the trait, e.g.
//! [`Rsa`](pk_encryption::Rsa).

pub mod elliptic_curve;
pub mod hash;
pub mod identification;
pub mod key_exchange;
pub mod pk_encryption;
