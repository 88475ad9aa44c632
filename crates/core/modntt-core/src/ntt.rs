//! Number Theoretic Transform (NTT) operations
//!
//! This module implements the direct O(N^2) forward and inverse transform
//! over F_P. The root passed in must have exact multiplicative order `n`;
//! that is not checked here (see [`crate::roots::has_order`]).

use tracing::trace;

use crate::arith::{add_mod, inverse, mul_mod};
use crate::error::{ensure_length, ensure_modulus, NttError, Result};
use crate::roots::checked_length;
use crate::{FieldElement, Sequence};

/// Perform forward NTT
///
/// `out[i] = sum_j sequence[j] * root^(i*j) mod P` for `i` in `0..n`.
/// The input is left untouched and may hold unreduced values.
pub fn ntt(
    sequence: &[FieldElement],
    n: usize,
    modulus: u64,
    root: FieldElement,
) -> Result<Sequence> {
    ensure_modulus(modulus)?;
    if n == 0 {
        return Err(NttError::precondition("transform length must be positive"));
    }
    ensure_length("sequence", sequence, n)?;
    trace!(n, modulus, root, "forward ntt");

    let one = 1 % modulus;
    let root = root % modulus;
    let mut out = Vec::with_capacity(n);

    // step = root^i; twiddle walks root^(i*j) across the row
    let mut step = one;
    for _ in 0..n {
        let mut sum = 0;
        let mut twiddle = one;
        for &coeff in sequence {
            sum = add_mod(sum, mul_mod(coeff, twiddle, modulus), modulus);
            twiddle = mul_mod(twiddle, step, modulus);
        }
        out.push(sum);
        step = mul_mod(step, root, modulus);
    }
    Ok(out)
}

/// Perform inverse NTT
///
/// Runs the forward transform with `root^-1` and scales by `n^-1 mod P`.
/// Fails with [`NttError::NotInvertible`] if `root` or `n` is not a unit.
pub fn inv_ntt(
    sequence: &[FieldElement],
    n: usize,
    modulus: u64,
    root: FieldElement,
) -> Result<Sequence> {
    ensure_modulus(modulus)?;
    let root_inv = inverse(root, modulus)?;
    let n_inv = inverse(checked_length(n)? % modulus, modulus)?;

    let mut out = ntt(sequence, n, modulus, root_inv)?;
    for coeff in &mut out {
        *coeff = mul_mod(*coeff, n_inv, modulus);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ntt_known_vector() {
        assert_eq!(ntt(&[2, 3, 3], 3, 7, 2).unwrap(), vec![1, 6, 6]);
    }

    #[test]
    fn test_inv_ntt_known_vector() {
        assert_eq!(inv_ntt(&[1, 6, 6], 3, 7, 2).unwrap(), vec![2, 3, 3]);
    }

    #[test]
    fn test_ntt_inv_ntt() {
        let (n, p) = (16, 97);
        let root = crate::roots::get_root(n, p).unwrap();
        let coeffs: Vec<u64> = (0..n as u64).map(|i| (i * 31 + 7) % p).collect();

        let transformed = ntt(&coeffs, n, p, root).unwrap();
        assert_eq!(inv_ntt(&transformed, n, p, root).unwrap(), coeffs);
    }

    #[test]
    fn test_ntt_reduces_input() {
        let reduced = ntt(&[2, 3, 3], 3, 7, 2).unwrap();
        assert_eq!(ntt(&[9, 10, 24], 3, 7, 9).unwrap(), reduced);
    }

    #[test]
    fn test_ntt_of_delta_is_constant() {
        let mut delta = vec![0u64; 8];
        delta[0] = 5;
        let root = crate::roots::get_root(8, 17).unwrap();
        assert_eq!(ntt(&delta, 8, 17, root).unwrap(), vec![5; 8]);
    }

    #[test]
    fn test_ntt_length_mismatch() {
        assert!(matches!(ntt(&[1, 2], 3, 7, 2), Err(NttError::PreconditionViolated(_))));
        assert!(matches!(ntt(&[], 0, 7, 2), Err(NttError::PreconditionViolated(_))));
    }

    #[test]
    fn test_inv_ntt_non_unit_root() {
        assert_eq!(
            inv_ntt(&[1, 2, 3], 3, 7, 0),
            Err(NttError::NotInvertible {
                value: 0,
                modulus: 7
            })
        );
    }

    #[test]
    fn test_inv_ntt_length_divisible_by_modulus() {
        // n = 7 is zero in F_7, so n^-1 does not exist
        assert!(matches!(inv_ntt(&[0; 7], 7, 7, 1), Err(NttError::NotInvertible { .. })));
    }
}
