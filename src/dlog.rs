// SPDX-License-Identifier: MIT OR Apache-2.0

//! Discrete-exponentiation one-way permutation over a safe-prime group.
//!
//! With `p` a safe prime and `g` a generator of `Z_p*`, the map
//! `x ↦ g^x mod p` permutes `[1, p-1]`. Forward evaluation is a single
//! modular exponentiation; going back is the discrete-logarithm problem.
//! There is no trapdoor for this construction — it is intentionally
//! one-directional.

use num_bigint_dig::{BigUint, RandBigInt};
use num_traits::One;
use rand::RngCore;

use crate::arith::pow_mod;
use crate::error::{Error, Result};
use crate::generate::random_safe_prime_generator;

/// Public parameters `(p, g)` of the exponentiation permutation.
///
/// Carries no secret; the whole struct is distributable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DlogParams {
    p: BigUint,
    q: BigUint,
    g: BigUint,
    bit_length: usize,
}

impl DlogParams {
    /// Generate fresh parameters from a safe prime of `bits` bits.
    pub fn generate<R: RngCore>(bits: usize, rng: &mut R) -> Result<Self> {
        let (pair, g) = random_safe_prime_generator(bits, rng)?;
        let (p, q) = pair.into_parts();
        Ok(Self {
            p,
            q,
            g,
            bit_length: bits,
        })
    }

    /// Wrap existing parameters.
    ///
    /// Checks the structural invariants `p = 2q + 1` and `g ∈ [2, p-2]`;
    /// primality and the order of `g` are the caller's burden.
    pub fn new(p: BigUint, q: BigUint, g: BigUint) -> Result<Self> {
        if p != (&q << 1) + BigUint::one() {
            return Err(Error::InvalidParameters);
        }
        let p_minus_1 = &p - 1u32;
        if g <= BigUint::one() || g >= p_minus_1 {
            return Err(Error::InvalidParameters);
        }

        let bit_length = p.bits();
        Ok(Self {
            p,
            q,
            g,
            bit_length,
        })
    }

    /// The safe-prime modulus `p`.
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    /// The subgroup order `q = (p - 1) / 2`.
    pub fn q(&self) -> &BigUint {
        &self.q
    }

    /// The group generator `g`.
    pub fn g(&self) -> &BigUint {
        &self.g
    }

    pub fn bit_length(&self) -> usize {
        self.bit_length
    }

    /// Sample a domain point uniformly from `[1, p-1]`.
    pub fn sample<R: RngCore>(&self, rng: &mut R) -> BigUint {
        rng.gen_biguint_range(&BigUint::one(), &self.p)
    }

    /// Evaluate the permutation: `g^x mod p`.
    pub fn evaluate(&self, x: &BigUint) -> BigUint {
        pow_mod(&self.g, x, &self.p)
    }
}
