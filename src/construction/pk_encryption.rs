// Copyright © 2024 The euclid-crypto developers
//
// This file is part of euclid-crypto.
//
// euclid-crypto is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module provides the trait a struct should implement if it is an
//! instance of a public key encryption scheme. Furthermore, it contains
//! cryptographic schemes implementing the `PKEncryption` trait.
//!
//! The main references are listed in the following:
//! - \[1\] Rivest, Ronald and Shamir, Adi and Adleman, Leonard (1978).
//! A method for obtaining digital signatures and public-key cryptosystems.
//! In: Communications of the ACM 21.2.
//! <https://dl.acm.org/doi/pdf/10.1145/359340.359342>
//! - \[2\] ElGamal, Taher (1985).
//! A public key cryptosystem and a signature scheme based on discrete logarithms.
//! In: IEEE Transactions on Information Theory 31.4.
//! <https://doi.org/10.1109/TIT.1985.1057074>
//! - \[3\] Paar, Christof and Pelzl, Jan (2010).
//! Understanding Cryptography.
//! In: Springer Berlin, Heidelberg.
//! <https://doi.org/10.1007/978-3-642-04101-3>

mod elgamal;
mod rsa;
pub use elgamal::{ElGamal, ElGamalCiphertext, ElGamalPrivateKey, ElGamalPublicKey};
pub use rsa::{brute_force_exponent, Rsa, RsaPrivateKey, RsaPublicKey};

use crate::error::MathError;
use num_bigint::BigInt;

pub trait PKEncryption {
    type PublicKey;
    type SecretKey;
    type Cipher;

    fn gen(&self) -> Result<(Self::PublicKey, Self::SecretKey), MathError>;
    fn enc(&self, pk: &Self::PublicKey, message: impl Into<BigInt>)
        -> Result<Self::Cipher, MathError>;
    fn dec(&self, sk: &Self::SecretKey, cipher: &Self::Cipher) -> Result<BigInt, MathError>;
}
