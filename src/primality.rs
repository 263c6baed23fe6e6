// SPDX-License-Identifier: MIT OR Apache-2.0

//! Miller-Rabin probabilistic primality testing.
//!
//! The test is one-sided: "composite" answers are always correct, while a
//! "probably prime" answer is wrong with probability at most `4^-rounds`.
//! Witnesses are drawn from a caller-supplied randomness source, so a seeded
//! generator makes the whole test deterministic.

use num_bigint_dig::{BigUint, RandBigInt};
use num_traits::{One, Zero};
use rand::RngCore;

use crate::arith::pow_mod;

/// Default number of independent witness rounds.
///
/// Each round a composite survives with probability at most 1/4, so ten
/// rounds bound the false-accept probability at `4^-10` (about `9.3e-7`).
pub const DEFAULT_ROUNDS: usize = 10;

/// Miller-Rabin test with [`DEFAULT_ROUNDS`] witness rounds.
pub fn is_probable_prime<R: RngCore>(n: &BigUint, rng: &mut R) -> bool {
    is_probable_prime_with_rounds(n, DEFAULT_ROUNDS, rng)
}

/// Miller-Rabin test with an explicit round count.
///
/// Factors `n - 1 = u · 2^j` with `u` odd, then for each round draws a
/// witness `a` uniform in `[1, n-1]` and walks the full square chain
/// `a^u, a^(2u), ..., a^(u·2^(j-1))` looking for a nontrivial square root
/// of unity. One witness draw is consumed per round.
pub fn is_probable_prime_with_rounds<R: RngCore>(n: &BigUint, rounds: usize, rng: &mut R) -> bool {
    let one = BigUint::one();
    let two = BigUint::from(2u32);

    if *n == two {
        return true;
    }
    if n <= &one {
        return false;
    }
    if (n % 2u32).is_zero() {
        return false;
    }

    // n - 1 = u · 2^j with u odd
    let n_minus_1 = n - 1u32;
    let mut u = n_minus_1.clone();
    let mut j = 0usize;
    while (&u % 2u32).is_zero() {
        u = u >> 1;
        j += 1;
    }

    'witnesses: for _ in 0..rounds {
        let a = rng.gen_biguint_range(&one, n);

        let mut x = pow_mod(&a, &u, n);
        if x == one || x == n_minus_1 {
            continue 'witnesses;
        }
        for _ in 1..j {
            x = &x * &x % n;
            if x == n_minus_1 {
                continue 'witnesses;
            }
            if x == one {
                // nontrivial square root of unity
                return false;
            }
        }
        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint_dig::prime::probably_prime;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn uint(n: u64) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn accepts_known_primes() {
        let mut rng = StdRng::seed_from_u64(1);
        for p in [2u64, 3, 5, 97, 7919, 104_729] {
            assert!(is_probable_prime(&uint(p), &mut rng), "{p} is prime");
        }
    }

    #[test]
    fn rejects_known_composites() {
        let mut rng = StdRng::seed_from_u64(2);
        // 561 and 1105 are Carmichael numbers: Fermat pseudoprimes to every
        // coprime base, caught only by the square-chain walk.
        for c in [0u64, 1, 4, 9, 100, 561, 1105] {
            assert!(!is_probable_prime(&uint(c), &mut rng), "{c} is composite");
        }
    }

    #[test]
    fn rejects_large_even_number() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(!is_probable_prime(&uint(1_000_000), &mut rng));
    }

    #[test]
    fn agrees_with_library_oracle_on_small_range() {
        let mut rng = StdRng::seed_from_u64(4);
        for n in 2u64..2000 {
            let ours = is_probable_prime_with_rounds(&uint(n), 40, &mut rng);
            let theirs = probably_prime(&uint(n), 20);
            assert_eq!(ours, theirs, "disagreement at {n}");
        }
    }

    #[test]
    fn deterministic_under_seeded_source() {
        let p = uint(104_729);
        let a = is_probable_prime(&p, &mut StdRng::seed_from_u64(7));
        let b = is_probable_prime(&p, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }
}
