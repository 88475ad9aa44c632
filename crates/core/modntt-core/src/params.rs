//! Transform parameters derived once per `(N, P)` and reused
//!
//! [`NttParams`] holds a transform length, a modulus and a root of unity
//! whose exact order has been established, so every transform run through
//! it satisfies the root precondition of [`crate::ntt`].

use serde::Serialize;
use tracing::{debug, warn};

use crate::convolution::{check_conv, convolution};
use crate::error::{NttError, Result};
use crate::ntt::{inv_ntt, ntt};
use crate::roots::{ensure_divides_order, get_root, has_order, is_prime};
use crate::{FieldElement, Sequence};

/// Validated `(n, P, root)` triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NttParams {
    n: usize,
    modulus: u64,
    root: FieldElement,
}

/// Outcome of running both convolutions on the same inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConvolutionCheck {
    /// Result computed through the transform
    pub ntt: Sequence,
    /// Result of the schoolbook reference
    pub reference: Sequence,
}

impl ConvolutionCheck {
    /// Whether the two results agree elementwise
    #[must_use]
    pub fn matches(&self) -> bool {
        self.ntt == self.reference
    }

    /// Indices at which the two results differ
    pub fn mismatches(&self) -> impl Iterator<Item = usize> + '_ {
        self.ntt
            .iter()
            .zip(&self.reference)
            .enumerate()
            .filter(|(_, (x, y))| x != y)
            .map(|(i, _)| i)
    }
}

impl NttParams {
    /// Derive parameters for length `n` over F_P, finding the root with [`get_root`].
    pub fn new(n: usize, modulus: u64) -> Result<Self> {
        let root = get_root(n, modulus)?;
        Ok(Self { n, modulus, root })
    }

    /// Use a caller-supplied root, rejecting it unless it has exact order `n`.
    ///
    /// The modulus must be prime, as for [`NttParams::new`]; over a composite
    /// modulus a root of order `n` does not make the transform invertible.
    pub fn with_root(n: usize, modulus: u64, root: FieldElement) -> Result<Self> {
        ensure_divides_order(n, modulus)?;
        if !is_prime(modulus) {
            warn!(modulus, "rejected composite modulus");
            return Err(NttError::NoGeneratorFound { modulus });
        }
        if !has_order(root, n, modulus)? {
            warn!(root, n, modulus, "rejected root of wrong order");
            return Err(NttError::precondition(format!(
                "{root} is not a primitive {n}-th root of unity mod {modulus}"
            )));
        }
        debug!(root, n, modulus, "accepted supplied root");
        Ok(Self {
            n,
            modulus,
            root: root % modulus,
        })
    }

    /// Transform length
    #[must_use]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Field modulus
    #[must_use]
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Primitive `n`-th root of unity
    #[must_use]
    pub fn root(&self) -> FieldElement {
        self.root
    }

    /// Forward transform
    pub fn forward(&self, sequence: &[FieldElement]) -> Result<Sequence> {
        ntt(sequence, self.n, self.modulus, self.root)
    }

    /// Inverse transform
    pub fn inverse(&self, sequence: &[FieldElement]) -> Result<Sequence> {
        inv_ntt(sequence, self.n, self.modulus, self.root)
    }

    /// Cyclic convolution through the transform
    pub fn convolve(&self, a: &[FieldElement], b: &[FieldElement]) -> Result<Sequence> {
        convolution(a, b, self.n, self.modulus, self.root)
    }

    /// Schoolbook cyclic convolution
    pub fn reference_convolve(&self, a: &[FieldElement], b: &[FieldElement]) -> Result<Sequence> {
        check_conv(a, b, self.n, self.modulus)
    }

    /// Run both convolutions on `a` and `b` for comparison.
    pub fn verify(&self, a: &[FieldElement], b: &[FieldElement]) -> Result<ConvolutionCheck> {
        Ok(ConvolutionCheck {
            ntt: self.convolve(a, b)?,
            reference: self.reference_convolve(a, b)?,
        })
    }
}
