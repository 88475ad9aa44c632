//! Generators and roots of unity in F_P
//!
//! A primitive N-th root of unity is derived from a generator `g` of the
//! multiplicative group as `g^((P - 1) / N)`, which has exact order `N`
//! whenever `N` divides `P - 1`.

use tracing::{debug, trace};

use crate::arith::{add_mod, gcd, mul_mod, pow_unchecked};
use crate::error::{ensure_modulus, NttError, Result};
use crate::FieldElement;

/// Witnesses that make Miller-Rabin deterministic for every `u64`.
const MR_WITNESSES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// Deterministic primality test for `u64`.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    for &p in &MR_WITNESSES {
        if n == p {
            return true;
        }
        if n % p == 0 {
            return false;
        }
    }

    // n - 1 = d * 2^s with d odd
    let s = (n - 1).trailing_zeros();
    let d = (n - 1) >> s;

    'witness: for &a in &MR_WITNESSES {
        let mut x = pow_unchecked(a, d, n);
        if x == 1 || x == n - 1 {
            continue;
        }
        for _ in 1..s {
            x = mul_mod(x, x, n);
            if x == n - 1 {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

/// Trial division stops here; larger cofactors are split by Pollard's rho.
const TRIAL_DIVISION_BOUND: u64 = 1 << 10;

/// Distinct prime factors of `n` in increasing order.
///
/// Small factors come from trial division, the remaining cofactor from
/// Pollard's rho, so a 63-bit `n` with two large prime factors is still fast.
pub fn prime_factors(mut n: u64) -> Vec<u64> {
    let mut factors = Vec::new();
    let mut d = 2u64;
    while d <= TRIAL_DIVISION_BOUND && d.saturating_mul(d) <= n {
        if n % d == 0 {
            factors.push(d);
            while n % d == 0 {
                n /= d;
            }
        }
        d += if d == 2 { 1 } else { 2 };
    }
    split_cofactor(n, &mut factors);
    factors.sort_unstable();
    factors.dedup();
    factors
}

fn split_cofactor(n: u64, factors: &mut Vec<u64>) {
    if n <= 1 {
        return;
    }
    if is_prime(n) {
        factors.push(n);
        return;
    }
    let d = pollard_rho(n);
    trace!(n, divisor = d, "split cofactor");
    split_cofactor(d, factors);
    split_cofactor(n / d, factors);
}

/// Non-trivial divisor of the odd composite `n`.
fn pollard_rho(n: u64) -> u64 {
    let mut c = 1u64;
    loop {
        let step = |x: u64| add_mod(mul_mod(x, x, n), c, n);
        let (mut x, mut y, mut d) = (2u64, 2u64, 1u64);
        while d == 1 {
            x = step(x);
            y = step(step(y));
            d = gcd(x.abs_diff(y), n);
        }
        if d != n {
            return d;
        }
        c += 1;
    }
}

/// `g` has order exactly `order` mod `modulus`, given the prime factors of `order`.
fn has_exact_order(g: u64, order: u64, modulus: u64, factors: &[u64]) -> bool {
    let one = 1 % modulus;
    pow_unchecked(g, order, modulus) == one
        && factors
            .iter()
            .all(|&q| pow_unchecked(g, order / q, modulus) != one)
}

/// Decide whether `g` generates the multiplicative group of F_P.
///
/// `g` is a generator iff `g^(P-1) = 1` and `g^((P-1)/q) != 1` for every
/// prime `q` dividing `P - 1`. The first condition also rejects every `g`
/// when `P` is composite.
pub fn is_generator(g: FieldElement, modulus: u64) -> Result<bool> {
    ensure_modulus(modulus)?;
    if modulus < 2 || g % modulus == 0 {
        return Ok(false);
    }
    let order = modulus - 1;
    Ok(has_exact_order(g % modulus, order, modulus, &prime_factors(order)))
}

/// Smallest generator of F_P*, found by linear scan.
///
/// Fails with [`NttError::NoGeneratorFound`] when `modulus` is not prime.
pub fn generator(modulus: u64) -> Result<FieldElement> {
    ensure_modulus(modulus)?;
    if !is_prime(modulus) {
        return Err(NttError::NoGeneratorFound { modulus });
    }

    let order = modulus - 1;
    debug!(modulus, "factoring group order");
    let factors = prime_factors(order);
    trace!(modulus, ?factors, "factored group order");

    let found = (1..modulus).find(|&g| has_exact_order(g, order, modulus, &factors));
    match found {
        Some(g) => {
            debug!(generator = g, modulus, "found generator");
            Ok(g)
        }
        None => Err(NttError::NoGeneratorFound { modulus }),
    }
}

/// Primitive `n`-th root of unity in F_P, `generator(P)^((P-1)/n)`.
///
/// `n` must divide `P - 1`; otherwise no element of order `n` exists and
/// [`NttError::PreconditionViolated`] is returned.
pub fn get_root(n: usize, modulus: u64) -> Result<FieldElement> {
    let n64 = ensure_divides_order(n, modulus)?;
    let order = modulus - 1;
    let g = generator(modulus)?;
    let root = pow_unchecked(g, order / n64, modulus);
    debug!(root, n, modulus, "derived root of unity");
    Ok(root)
}

/// Check that `root` has exact multiplicative order `n` mod `modulus`.
pub fn has_order(root: FieldElement, n: usize, modulus: u64) -> Result<bool> {
    ensure_modulus(modulus)?;
    let n64 = checked_length(n)?;
    Ok(has_exact_order(root % modulus, n64, modulus, &prime_factors(n64)))
}

/// Validate `modulus` and check that `n` is a positive divisor of `P - 1`.
pub(crate) fn ensure_divides_order(n: usize, modulus: u64) -> Result<u64> {
    ensure_modulus(modulus)?;
    let n64 = checked_length(n)?;
    let order = modulus - 1;
    if order % n64 != 0 {
        return Err(NttError::precondition(format!(
            "transform length {n} does not divide P - 1 = {order}"
        )));
    }
    Ok(n64)
}

pub(crate) fn checked_length(n: usize) -> Result<u64> {
    match u64::try_from(n) {
        Ok(0) => Err(NttError::precondition("transform length must be positive")),
        Ok(n) => Ok(n),
        Err(_) => Err(NttError::precondition(format!("transform length {n} exceeds u64"))),
    }
}
