// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rejection-sampling searches for primes, safe primes and group generators.
//!
//! Every search draws candidates from a caller-supplied randomness source
//! and filters them through the Miller-Rabin oracle. Expected work grows
//! with the bit length (roughly linearly for a prime, quadratically for a
//! safe prime), so large parameters can take a while. Each search carries
//! an attempt ceiling and reports [`Error::GenerationExhausted`] instead of
//! looping forever on a degenerate randomness source.

use num_bigint_dig::{BigUint, RandBigInt};
use num_traits::One;
use rand::RngCore;

use crate::arith::pow_mod;
use crate::error::{Error, Result};
use crate::primality::is_probable_prime;

/// Smallest supported prime bit length; no prime fits in fewer than two bits.
pub const MIN_BIT_LENGTH: usize = 2;

/// Rejection-sampling attempts allowed per bit of the target length.
///
/// Prime density near `2^n` is about `1 / (n ln 2)`, so the expected number
/// of draws is well under one per bit; this ceiling leaves orders of
/// magnitude of headroom before declaring the source degenerate.
const ATTEMPTS_PER_BIT: usize = 400;

pub(crate) fn attempt_budget(bits: usize) -> usize {
    bits.saturating_mul(ATTEMPTS_PER_BIT)
}

/// A safe prime `p` together with its Sophie Germain half `q = (p - 1) / 2`.
///
/// Both components are prime (up to the oracle's error bound) and immutable
/// once generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafePrime {
    p: BigUint,
    q: BigUint,
}

impl SafePrime {
    /// Bundle an already-verified pair.
    ///
    /// Only the structural relation `p = 2q + 1` is checked here; primality
    /// of the components is the caller's burden.
    pub fn new(p: BigUint, q: BigUint) -> Result<Self> {
        if p != (&q << 1) + BigUint::one() {
            return Err(Error::InvalidParameters);
        }
        Ok(Self { p, q })
    }

    /// The safe prime `p`.
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    /// The Sophie Germain prime `q = (p - 1) / 2`.
    pub fn q(&self) -> &BigUint {
        &self.q
    }

    pub fn into_parts(self) -> (BigUint, BigUint) {
        (self.p, self.q)
    }
}

/// Draw a probable prime representable in `bits` bits.
///
/// Candidates are uniform over `[0, 2^bits)`, matching the width of the
/// underlying bit source, so the result may occupy fewer than `bits` bits
/// when the leading draws come up zero.
pub fn random_prime<R: RngCore>(bits: usize, rng: &mut R) -> Result<BigUint> {
    if bits < MIN_BIT_LENGTH {
        return Err(Error::BitLengthTooSmall {
            min: MIN_BIT_LENGTH,
            actual: bits,
        });
    }

    let budget = attempt_budget(bits);
    for _ in 0..budget {
        let candidate = rng.gen_biguint(bits);
        if is_probable_prime(&candidate, rng) {
            return Ok(candidate);
        }
    }

    Err(Error::GenerationExhausted { attempts: budget })
}

/// Search for a safe prime of at most `bits` bits.
///
/// Draws a prime `p` and accepts when `q = (p - 1) / 2` is itself prime.
/// Sophie Germain primes thin out as `bits` grows, so expect many outer
/// iterations for large parameters.
pub fn random_safe_prime<R: RngCore>(bits: usize, rng: &mut R) -> Result<SafePrime> {
    // The smallest safe prime, 5, needs three bits.
    if bits < 3 {
        return Err(Error::BitLengthTooSmall {
            min: 3,
            actual: bits,
        });
    }

    let budget = attempt_budget(bits);
    for _ in 0..budget {
        let p = random_prime(bits, rng)?;
        let q = (&p - 1u32) >> 1;
        if is_probable_prime(&q, rng) {
            return SafePrime::new(p, q);
        }
    }

    Err(Error::GenerationExhausted { attempts: budget })
}

/// Search for a safe prime together with a generator of the multiplicative
/// group mod `p`.
pub fn random_safe_prime_generator<R: RngCore>(
    bits: usize,
    rng: &mut R,
) -> Result<(SafePrime, BigUint)> {
    let pair = random_safe_prime(bits, rng)?;
    let g = find_group_generator(&pair, rng)?;
    Ok((pair, g))
}

/// Draw a generator of `Z_p*` for an existing safe-prime pair.
///
/// A candidate `g` from `[1, p-1]` is accepted when it avoids the fixed
/// points `1` and `p - 1` and satisfies `g^q ≢ 1 (mod p)`. In a safe-prime
/// group the element orders are 1, 2, q and 2q, so the surviving candidates
/// have order exactly `2q` and generate the whole group. A failed draw
/// keeps the pair and only redraws `g`.
pub fn find_group_generator<R: RngCore>(pair: &SafePrime, rng: &mut R) -> Result<BigUint> {
    let one = BigUint::one();
    let p_minus_1 = pair.p() - 1u32;

    // Roughly half of [1, p-1] generates the whole group, so a small fixed
    // budget is already conservative.
    const MAX_DRAWS: usize = 128;
    for _ in 0..MAX_DRAWS {
        let g = rng.gen_biguint_range(&one, pair.p());
        if g == one || g == p_minus_1 {
            continue;
        }
        if pow_mod(&g, pair.q(), pair.p()) != one {
            return Ok(g);
        }
    }

    Err(Error::GenerationExhausted {
        attempts: MAX_DRAWS,
    })
}
