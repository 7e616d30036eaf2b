#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

//! ## Signature format
//!
//! A [`SignatureData`] serializes to 65 bytes, `r ‖ s ‖ v`, where `r` and
//! `s` are 32-byte big endian integers and `v` is the [`RecoveryId`]
//! (`0` or `1`). `s` is not normalized: signatures with `s > N/2` are
//! produced and accepted.
//!
//! ## Hash functions
//!
//! Messages are hashed with any [`digest::Digest`] with a 32-byte output
//! before signing. [`Blake2b256`] is used by default; SHA-256 is available
//! with the `sha256` feature. Already hashed messages can be signed
//! directly by clearing [`SignOptions::with_hash_first`].

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod arithmetic;
pub mod domain;

mod error;
mod keypair;
mod recoverable;
mod recovery;
mod sign;
mod signer;

#[cfg(any(feature = "test-vectors", test))]
pub mod test_vectors;

pub use crate::{
    arithmetic::GroupArithmetic,
    domain::{CurveDomain, SECP256K1},
    error::{Error, Result},
    keypair::{KeyPair, PUBLIC_KEY_SIZE, PublicKeyBytes, public_key_from_secret},
    recoverable::{SIZE as SIGNATURE_SIZE, SignatureData},
    recovery::{RecoveryId, recover, recover_public_key},
    sign::{RawSignature, sign_prehashed, try_sign_prehashed},
    signer::{DEFAULT_MAX_ATTEMPTS, SignOptions, sign_recoverable_with_rng},
};
pub use digest;
pub use elliptic_curve::{self, bigint::U256};
pub use k256;

#[cfg(all(feature = "blake2b", feature = "getrandom"))]
pub use crate::signer::sign_recoverable;

#[cfg(feature = "sha256")]
pub use sha2::Sha256;

/// Size of a message digest in bytes.
pub const DIGEST_SIZE: usize = 32;

/// Blake2b with a 256-bit output: the default message hash.
#[cfg(feature = "blake2b")]
pub type Blake2b256 = blake2::Blake2b<digest::consts::U32>;
