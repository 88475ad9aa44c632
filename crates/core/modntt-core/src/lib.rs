//! # modntt core
//!
//! Exact, integer-only cyclic convolution over a prime field F_P using the
//! Number-Theoretic Transform, plus the schoolbook convolution used to
//! cross-check it.
//!
//! ## Overview
//!
//! Two length-`N` sequences are multiplied as elements of F_P[X]/(X^N - 1).
//! The transform needs a primitive `N`-th root of unity, which exists
//! exactly when `N` divides `P - 1`.
//!
//! ## Quick Start
//!
//! ```
//! use modntt_core::prelude::*;
//!
//! # fn main() -> modntt_core::Result<()> {
//! let root = get_root(3, 7)?;
//! assert_eq!(root, 2);
//!
//! assert_eq!(ntt(&[2, 3, 3], 3, 7, root)?, vec![1, 6, 6]);
//! assert_eq!(inv_ntt(&[1, 6, 6], 3, 7, root)?, vec![2, 3, 3]);
//!
//! let a = [1u64, 2, 3];
//! let b = [4u64, 5, 6];
//! assert_eq!(convolution(&a, &b, 3, 7, root)?, check_conv(&a, &b, 3, 7)?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Structure
//!
//! - [`arith`]: modular exponentiation, normalization and inversion
//! - [`roots`]: generators and roots of unity
//! - [`ntt`]: forward and inverse transform
//! - [`convolution`]: transform-based and reference convolution
//! - [`params`]: validated `(N, P, root)` parameters
//!
//! Every operation is a pure function of its arguments. Field elements are
//! `u64` and products go through `u128`, so any modulus below `2^64` works.

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    unused_qualifications,
    missing_debug_implementations
)]

pub use crate::error::{NttError, Result};

pub mod arith;
pub mod convolution;
pub mod error;
pub mod ntt;
pub mod params;
pub mod roots;

/// An integer in `[0, P)`
pub type FieldElement = u64;

/// Coefficients of an element of F_P[X]/(X^N - 1), lowest degree first
pub type Sequence = Vec<FieldElement>;

pub mod prelude {
    //! Common imports for using modntt-core

    pub use crate::arith::{inverse, power_mod, true_mod};
    pub use crate::convolution::{check_conv, convolution, pointwise_multiply};
    pub use crate::error::{NttError, Result};
    pub use crate::ntt::{inv_ntt, ntt};
    pub use crate::params::{ConvolutionCheck, NttParams};
    pub use crate::roots::{generator, get_root, is_generator};
    pub use crate::{FieldElement, Sequence};
}

/// Version information for the modntt core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
