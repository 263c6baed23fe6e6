// SPDX-License-Identifier: MIT OR Apache-2.0

//! # One-Way Permutations
//!
//! Number-theoretic building blocks and two one-way-permutation
//! constructions:
//!
//! - a modular arithmetic kernel (extended Euclid, modular inverse,
//!   square-and-multiply exponentiation),
//! - a Miller-Rabin primality oracle,
//! - rejection-sampling searches for primes, safe primes and generators
//!   of safe-prime groups,
//! - the discrete-exponentiation permutation `x ↦ g^x mod p` (no trapdoor),
//! - the RSA permutation `x ↦ x^e mod N` with trapdoor inversion via the
//!   secret exponent `d`.
//!
//! ## Randomness
//!
//! Every randomized function takes a caller-supplied `&mut impl RngCore`
//! rather than reaching for an ambient source. Pass [`rand::rngs::OsRng`]
//! when the output matters and a seeded `StdRng` when you need
//! reproducibility in tests. The library makes no claim about the
//! cryptographic strength of the source you hand it.
//!
//! ## Security
//!
//! Arithmetic here is not constant-time and no side-channel hardening is
//! attempted; treat the crate as an implementation of the textbook
//! constructions, not a hardened production primitive. The RSA trapdoor
//! exponent is zeroized on drop via the `zeroize` crate. Primality is
//! probabilistic: a "probably prime" answer is wrong with probability at
//! most `4^-rounds` (ten rounds by default).
//!
//! ## Example
//!
//! ```rust,no_run
//! use owp::RsaKeyPair;
//! use rand::rngs::OsRng;
//!
//! let mut rng = OsRng;
//! let keys = RsaKeyPair::generate(2048, &mut rng).expect("key generation failed");
//!
//! let x = keys.pub_key().sample_domain(&mut rng);
//! let fx = keys.pub_key().evaluate(&x);
//! assert_eq!(keys.priv_key().invert(&fx), x);
//! ```

mod arith;
mod dlog;
mod error;
mod generate;
mod primality;
mod rsa;

pub use arith::*;
pub use dlog::*;
pub use error::*;
pub use generate::*;
pub use primality::*;
pub use rsa::*;
