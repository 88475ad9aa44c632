//! Cyclic convolution in F_P[X]/(X^N - 1)
//!
//! [`convolution`] goes through the transform; [`check_conv`] is the
//! schoolbook reference used to validate it.

use crate::arith::{add_mod, mul_mod};
use crate::error::{ensure_length, ensure_modulus, NttError, Result};
use crate::ntt::{inv_ntt, ntt};
use crate::{FieldElement, Sequence};

/// Pointwise multiplication of two sequences in the transformed domain
pub fn pointwise_multiply(
    a: &[FieldElement],
    b: &[FieldElement],
    modulus: u64,
) -> Result<Sequence> {
    ensure_modulus(modulus)?;
    ensure_length("rhs", b, a.len())?;
    Ok(a.iter().zip(b).map(|(&x, &y)| mul_mod(x, y, modulus)).collect())
}

/// Multiply `a` and `b` modulo `X^n - 1` over F_P using the NTT.
///
/// Only correct when `root` has exact order `n`.
pub fn convolution(
    a: &[FieldElement],
    b: &[FieldElement],
    n: usize,
    modulus: u64,
    root: FieldElement,
) -> Result<Sequence> {
    let fa = ntt(a, n, modulus, root)?;
    let fb = ntt(b, n, modulus, root)?;
    let product = pointwise_multiply(&fa, &fb, modulus)?;
    inv_ntt(&product, n, modulus, root)
}

/// Slow O(n^2) cyclic convolution, independent of the transform.
pub fn check_conv(
    a: &[FieldElement],
    b: &[FieldElement],
    n: usize,
    modulus: u64,
) -> Result<Sequence> {
    ensure_modulus(modulus)?;
    if n == 0 {
        return Err(NttError::precondition("transform length must be positive"));
    }
    ensure_length("lhs", a, n)?;
    ensure_length("rhs", b, n)?;

    let mut dest = vec![0; n];
    for (i, &x) in a.iter().enumerate() {
        for (j, &y) in b.iter().enumerate() {
            let k = (i + j) % n;
            dest[k] = add_mod(dest[k], mul_mod(x, y, modulus), modulus);
        }
    }
    Ok(dest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roots::get_root;

    #[test]
    fn test_convolution_matches_reference() {
        let (n, p) = (8, 17);
        let root = get_root(n, p).unwrap();
        let a = vec![1, 2, 3, 4, 5, 6, 7, 8];
        let b = vec![16, 0, 3, 9, 1, 1, 0, 2];
        assert_eq!(convolution(&a, &b, n, p, root).unwrap(), check_conv(&a, &b, n, p).unwrap());
    }

    #[test]
    fn test_check_conv_wraps_indices() {
        // (1 + X^2) * X = X + X^3 = X + 1 modulo X^3 - 1
        assert_eq!(check_conv(&[1, 0, 1], &[0, 1, 0], 3, 7).unwrap(), vec![1, 1, 0]);
    }

    #[test]
    fn test_single_element_convolution() {
        assert_eq!(convolution(&[5], &[6], 1, 7, 1).unwrap(), vec![2]);
        assert_eq!(check_conv(&[5], &[6], 1, 7).unwrap(), vec![2]);
    }

    #[test]
    fn test_convolution_identity() {
        let (n, p) = (4, 13);
        let root = get_root(n, p).unwrap();
        let a = vec![3, 1, 4, 1];
        assert_eq!(convolution(&a, &[1, 0, 0, 0], n, p, root).unwrap(), a);
    }

    #[test]
    fn test_pointwise_multiply() {
        assert_eq!(pointwise_multiply(&[2, 3, 4], &[4, 5, 6], 7).unwrap(), vec![1, 1, 3]);
        assert!(pointwise_multiply(&[1, 2], &[1], 7).is_err());
    }

    #[test]
    fn test_length_mismatch() {
        assert!(matches!(
            convolution(&[1, 2, 3], &[1, 2], 3, 7, 2),
            Err(NttError::PreconditionViolated(_))
        ));
        assert!(matches!(
            check_conv(&[1, 2, 3], &[1, 2], 3, 7),
            Err(NttError::PreconditionViolated(_))
        ));
    }
}
