// SPDX-License-Identifier: MIT OR Apache-2.0

//! RSA one-way permutation with trapdoor inversion.
//!
//! Forward evaluation `x ↦ x^e mod N` is public; inversion requires the
//! secret exponent `d = e^{-1} mod φ(N)`, which only the holder of
//! [`RsaPrivateKey`] possesses. The prime factorization of `N` is discarded
//! right after key generation and the trapdoor exponent is wiped from
//! memory on drop.

use num_bigint_dig::{BigInt, BigUint, RandBigInt};
use num_traits::{One, Zero};
use rand::RngCore;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::arith::{extended_gcd, mod_inverse, pow_mod};
use crate::error::{Error, Result};
use crate::generate::{attempt_budget, random_prime};

/// Attempts allowed when searching for a public exponent coprime to φ(N).
const MAX_EXPONENT_ATTEMPTS: usize = 10_000;

/// Public description `(N, e)` of the permutation. Safe to distribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPublicKey {
    n: BigUint,
    e: BigUint,
    bit_length: usize,
}

impl RsaPublicKey {
    /// Construct a public key from its components.
    ///
    /// Requires `n ≥ 2` and `e ∈ [2, n)`. `bit_length` records the prime
    /// size the modulus was generated from.
    pub fn new(n: BigUint, e: BigUint, bit_length: usize) -> Result<Self> {
        if n <= BigUint::one() {
            return Err(Error::InvalidParameters);
        }
        if e < BigUint::from(2u32) || e >= n {
            return Err(Error::InvalidParameters);
        }

        Ok(Self { n, e, bit_length })
    }

    /// The public modulus `N`.
    pub fn n(&self) -> &BigUint {
        &self.n
    }

    /// The public exponent `e`.
    pub fn e(&self) -> &BigUint {
        &self.e
    }

    pub fn bit_length(&self) -> usize {
        self.bit_length
    }

    /// Sample a domain point uniformly from `[1, N-1]`.
    ///
    /// `N` itself is excluded: it reduces to zero, which the permutation
    /// maps ambiguously and the trapdoor cannot recover.
    pub fn sample_domain<R: RngCore>(&self, rng: &mut R) -> BigUint {
        rng.gen_biguint_range(&BigUint::one(), &self.n)
    }

    /// Forward evaluation: `x^e mod N`.
    pub fn evaluate(&self, x: &BigUint) -> BigUint {
        pow_mod(x, &self.e, &self.n)
    }
}

/// Trapdoor half of the permutation.
///
/// Holds the secret exponent `d = e^{-1} mod φ(N)`. The exponent is
/// zeroized on drop; the embedded public key is not sensitive and is
/// skipped.
#[derive(PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct RsaPrivateKey {
    #[zeroize(skip)]
    public_key: RsaPublicKey,
    d: BigUint,
}

impl RsaPrivateKey {
    pub(crate) fn new(public_key: RsaPublicKey, d: BigUint) -> Result<Self> {
        if d.is_zero() {
            return Err(Error::InvalidParameters);
        }
        Ok(Self { public_key, d })
    }

    /// The public half of the key.
    pub fn pub_key(&self) -> &RsaPublicKey {
        &self.public_key
    }

    /// Trapdoor inversion: recover `x` from `fx = x^e mod N` as
    /// `fx^d mod N`, by Euler's theorem.
    pub fn invert(&self, fx: &BigUint) -> BigUint {
        pow_mod(fx, &self.d, &self.public_key.n)
    }
}

/// Freshly generated permutation parameters: the public `(N, e)` plus the
/// secret trapdoor.
#[derive(PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct RsaKeyPair {
    #[zeroize(skip)]
    pub_key: RsaPublicKey,
    priv_key: RsaPrivateKey,
}

impl RsaKeyPair {
    /// Generate parameters from two independent probable primes of `bits`
    /// bits each.
    ///
    /// The public exponent is drawn uniformly from `[2, φ(N) - 1]` until a
    /// draw is coprime to `φ(N)`, verified through the Bézout identity; the
    /// trapdoor is its inverse modulo `φ(N)`. The factorization is dropped
    /// before returning.
    pub fn generate<R: RngCore>(bits: usize, rng: &mut R) -> Result<Self> {
        if bits < 3 {
            return Err(Error::BitLengthTooSmall {
                min: 3,
                actual: bits,
            });
        }

        let two = BigUint::from(2u32);
        let budget = attempt_budget(bits);

        let (n, phi) = 'primes: {
            for _ in 0..budget {
                let p = random_prime(bits, rng)?;
                let q = random_prime(bits, rng)?;
                if p == q {
                    // astronomically unlikely at real sizes, but N must be
                    // a product of two distinct primes
                    continue;
                }
                let phi = (&p - 1u32) * (&q - 1u32);
                // φ ≤ 2 leaves no room for a public exponent in [2, φ-1]
                if phi > two {
                    break 'primes (&p * &q, phi);
                }
            }
            return Err(Error::GenerationExhausted { attempts: budget });
        };

        let phi_signed = BigInt::from(phi.clone());
        let mut e = None;
        for _ in 0..MAX_EXPONENT_ATTEMPTS {
            let candidate = rng.gen_biguint_range(&two, &phi);
            let (g, _, _) = extended_gcd(&BigInt::from(candidate.clone()), &phi_signed);
            if g.is_one() {
                e = Some(candidate);
                break;
            }
        }
        let e = e.ok_or(Error::GenerationExhausted {
            attempts: MAX_EXPONENT_ATTEMPTS,
        })?;

        let d = mod_inverse(&e, &phi)?;

        let pub_key = RsaPublicKey::new(n, e, bits)?;
        let priv_key = RsaPrivateKey::new(pub_key.clone(), d)?;

        Ok(Self { pub_key, priv_key })
    }

    pub fn pub_key(&self) -> &RsaPublicKey {
        &self.pub_key
    }

    pub fn priv_key(&self) -> &RsaPrivateKey {
        &self.priv_key
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn uint(n: u64) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn roundtrip_recovers_every_sample() {
        let mut rng = StdRng::seed_from_u64(30);
        let keys = RsaKeyPair::generate(128, &mut rng).unwrap();

        for _ in 0..100 {
            let x = keys.pub_key().sample_domain(&mut rng);
            let fx = keys.pub_key().evaluate(&x);
            assert_eq!(keys.priv_key().invert(&fx), x);
        }
    }

    #[test]
    fn roundtrip_at_edge_points() {
        let mut rng = StdRng::seed_from_u64(31);
        let keys = RsaKeyPair::generate(64, &mut rng).unwrap();
        let n_minus_1 = keys.pub_key().n() - 1u32;

        for x in [uint(1), n_minus_1] {
            let fx = keys.pub_key().evaluate(&x);
            assert_eq!(keys.priv_key().invert(&fx), x);
        }
    }

    #[test]
    fn evaluate_output_in_range() {
        let mut rng = StdRng::seed_from_u64(32);
        let keys = RsaKeyPair::generate(64, &mut rng).unwrap();

        let x = keys.pub_key().sample_domain(&mut rng);
        let fx = keys.pub_key().evaluate(&x);
        assert!(&fx < keys.pub_key().n());
    }

    #[test]
    fn sample_excludes_zero_and_modulus() {
        let mut rng = StdRng::seed_from_u64(33);
        let keys = RsaKeyPair::generate(32, &mut rng).unwrap();

        for _ in 0..100 {
            let x = keys.pub_key().sample_domain(&mut rng);
            assert!(x >= BigUint::one());
            assert!(&x < keys.pub_key().n());
        }
    }

    #[test]
    fn rejects_tiny_bit_length() {
        let mut rng = StdRng::seed_from_u64(34);
        assert!(matches!(
            RsaKeyPair::generate(2, &mut rng),
            Err(Error::BitLengthTooSmall { .. })
        ));
    }

    #[test]
    fn reproducible_with_seed() {
        let a = RsaKeyPair::generate(64, &mut StdRng::seed_from_u64(35)).unwrap();
        let b = RsaKeyPair::generate(64, &mut StdRng::seed_from_u64(35)).unwrap();
        assert_eq!(a.pub_key(), b.pub_key());
    }

    #[test]
    fn public_key_validation() {
        assert!(RsaPublicKey::new(uint(0), uint(3), 8).is_err());
        assert!(RsaPublicKey::new(uint(15), uint(1), 8).is_err());
        assert!(RsaPublicKey::new(uint(15), uint(15), 8).is_err());
        assert!(RsaPublicKey::new(uint(15), uint(7), 8).is_ok());
    }

    #[test]
    fn exponent_is_coprime_to_known_phi() {
        // 3 and 7: N = 21, φ = 12; the generated e must be invertible mod φ
        let pub_key = RsaPublicKey::new(uint(21), uint(5), 3).unwrap();
        let d = mod_inverse(pub_key.e(), &uint(12)).unwrap();
        let priv_key = RsaPrivateKey::new(pub_key.clone(), d).unwrap();

        for x in 1u64..21 {
            let fx = pub_key.evaluate(&uint(x));
            assert_eq!(priv_key.invert(&fx), uint(x), "x={x}");
        }
    }
}
