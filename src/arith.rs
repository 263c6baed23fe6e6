// SPDX-License-Identifier: MIT OR Apache-2.0

//! Modular arithmetic kernel: extended Euclid, modular inverse and
//! square-and-multiply exponentiation over arbitrary-precision integers.

use num_bigint_dig::{BigInt, BigUint};
use num_traits::{One, Zero};

use crate::error::{Error, Result};

/// Extended Euclidean algorithm.
///
/// Returns `(g, x, y)` satisfying `a·x + b·y = g = gcd(a, b)`. Runs
/// iteratively so very large inputs cannot exhaust the stack. Inputs are
/// expected to be non-negative; `b = 0` yields `(a, 1, 0)`.
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let (mut r0, mut r1) = (a.clone(), b.clone());
    let (mut x0, mut x1) = (BigInt::one(), BigInt::zero());
    let (mut y0, mut y1) = (BigInt::zero(), BigInt::one());

    while !r1.is_zero() {
        let q = &r0 / &r1;
        let r2 = &r0 - &q * &r1;
        r0 = std::mem::replace(&mut r1, r2);
        let x2 = &x0 - &q * &x1;
        x0 = std::mem::replace(&mut x1, x2);
        let y2 = &y0 - &q * &y1;
        y0 = std::mem::replace(&mut y1, y2);
    }

    (r0, x0, y0)
}

/// Modular inverse of `a` modulo `m`.
///
/// Returns the unique `x` in `[0, m)` with `a·x ≡ 1 (mod m)`, or
/// [`Error::NoInverseExists`] when `gcd(a, m) ≠ 1`.
pub fn mod_inverse(a: &BigUint, m: &BigUint) -> Result<BigUint> {
    if m.is_zero() {
        return Err(Error::ZeroModulus);
    }

    let a_signed = BigInt::from(a.clone());
    let m_signed = BigInt::from(m.clone());
    let (g, x, _) = extended_gcd(&a_signed, &m_signed);

    if !g.is_one() {
        return Err(Error::NoInverseExists);
    }

    // BigInt `%` truncates toward zero, so lift the coefficient into [0, m).
    let x = ((x % &m_signed) + &m_signed) % &m_signed;
    x.to_biguint().ok_or(Error::NoInverseExists)
}

/// Modular exponentiation by square-and-multiply.
///
/// Computes `base^exponent mod modulus` in `O(log exponent)` modular
/// multiplications. The result lies in `[0, modulus)`; a modulus of one
/// degenerates to zero for every input.
pub fn mod_exp(base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> Result<BigUint> {
    if modulus.is_zero() {
        return Err(Error::ZeroModulus);
    }
    Ok(pow_mod(base, exponent, modulus))
}

/// Square-and-multiply core. Callers must guarantee `modulus >= 1`.
pub(crate) fn pow_mod(base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> BigUint {
    let mut acc = BigUint::one() % modulus;
    let mut base = base % modulus;
    let mut exp = exponent.clone();

    while !exp.is_zero() {
        if (&exp % 2u32).is_one() {
            acc = acc * &base % modulus;
        }
        base = &base * &base % modulus;
        exp = exp >> 1;
    }

    acc
}
