//! Modular arithmetic over a single word-sized modulus
//!
//! Products are formed in `u128` before reduction, so every modulus below
//! `2^64` is safe from intermediate overflow.

use crate::error::{ensure_modulus, NttError, Result};
use crate::FieldElement;

/// Multiply `a * b mod modulus` through a double-width intermediate.
///
/// `modulus` must be non-zero.
#[inline]
pub fn mul_mod(a: u64, b: u64, modulus: u64) -> FieldElement {
    ((u128::from(a) * u128::from(b)) % u128::from(modulus)) as u64
}

/// Add `a + b mod modulus`. `modulus` must be non-zero.
#[inline]
pub fn add_mod(a: u64, b: u64, modulus: u64) -> FieldElement {
    ((u128::from(a) + u128::from(b)) % u128::from(modulus)) as u64
}

/// Subtract `a - b mod modulus`. `modulus` must be non-zero.
#[inline]
pub fn sub_mod(a: u64, b: u64, modulus: u64) -> FieldElement {
    let (a, b) = (a % modulus, b % modulus);
    if a >= b {
        a - b
    } else {
        modulus - (b - a)
    }
}

/// Greatest common divisor
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Compute `base^exp mod modulus` by binary exponentiation.
///
/// Takes O(log exp) modular multiplications. The result is always in
/// `[0, modulus)`, so `power_mod(x, 0, 1)` is `0`.
pub fn power_mod(base: u64, exp: u64, modulus: u64) -> Result<FieldElement> {
    ensure_modulus(modulus)?;
    Ok(pow_unchecked(base, exp, modulus))
}

/// [`power_mod`] for callers that have already validated `modulus`.
pub(crate) fn pow_unchecked(base: u64, mut exp: u64, modulus: u64) -> FieldElement {
    let mut result = 1 % modulus;
    let mut cur = base % modulus;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, cur, modulus);
        }
        cur = mul_mod(cur, cur, modulus);
        exp >>= 1;
    }
    result
}

/// Normalize a possibly negative value into `[0, modulus)`.
pub fn true_mod(val: i64, modulus: u64) -> Result<FieldElement> {
    ensure_modulus(modulus)?;
    Ok(i128::from(val).rem_euclid(i128::from(modulus)) as u64)
}

/// Multiplicative inverse of `val` modulo `modulus` (extended Euclid).
///
/// Fails with [`NttError::NotInvertible`] when `gcd(val, modulus) != 1`.
pub fn inverse(val: u64, modulus: u64) -> Result<FieldElement> {
    ensure_modulus(modulus)?;

    // Only the Bezout coefficient of `val` is tracked
    let (mut old_r, mut r) = (i128::from(modulus), i128::from(val % modulus));
    let (mut old_s, mut s) = (0i128, 1i128);
    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_s, s) = (s, old_s - q * s);
    }

    if old_r != 1 {
        return Err(NttError::NotInvertible {
            value: val,
            modulus,
        });
    }
    Ok(old_s.rem_euclid(i128::from(modulus)) as u64)
}
