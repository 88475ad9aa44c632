//! Error types for modular arithmetic and transform operations.
//!
//! Every fallible operation in this crate reports one of the variants below
//! instead of handing back an unspecified value.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::FieldElement;

/// The error type shared by all `modntt-core` operations.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NttError {
    /// A modulus of zero was passed to a modular operation
    #[error("invalid modulus {modulus}: must be positive")]
    InvalidModulus {
        /// The rejected modulus
        modulus: u64,
    },

    /// The value shares a factor with the modulus, so no inverse exists
    #[error("{value} has no inverse modulo {modulus}")]
    NotInvertible {
        /// Value that was inverted
        value: FieldElement,
        /// Modulus it was inverted against
        modulus: u64,
    },

    /// The generator search ran out of candidates (modulus not prime)
    #[error("no generator of the multiplicative group mod {modulus}")]
    NoGeneratorFound {
        /// Modulus that was searched
        modulus: u64,
    },

    /// A documented precondition of the operation does not hold
    #[error("precondition violated: {0}")]
    PreconditionViolated(String),
}

impl NttError {
    /// Create a new precondition error
    pub fn precondition<T: fmt::Display>(msg: T) -> Self {
        Self::PreconditionViolated(msg.to_string())
    }

    /// Check if this error came from the caller's parameters rather than the arithmetic
    #[must_use]
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::PreconditionViolated(_) | Self::InvalidModulus { .. })
    }

    /// Check if this error is a property of the numbers involved
    #[must_use]
    pub fn is_arithmetic(&self) -> bool {
        matches!(self, Self::NotInvertible { .. } | Self::NoGeneratorFound { .. })
    }
}

/// Result type alias for modntt operations
pub type Result<T> = std::result::Result<T, NttError>;

/// Fail with [`NttError::InvalidModulus`] unless `modulus` is positive.
pub(crate) fn ensure_modulus(modulus: u64) -> Result<()> {
    if modulus == 0 {
        return Err(NttError::InvalidModulus { modulus });
    }
    Ok(())
}

/// Fail with [`NttError::PreconditionViolated`] unless `sequence` has length `n`.
pub(crate) fn ensure_length(name: &str, sequence: &[FieldElement], n: usize) -> Result<()> {
    if sequence.len() != n {
        return Err(NttError::precondition(format!(
            "{name} has length {} but the transform length is {n}",
            sequence.len()
        )));
    }
    Ok(())
}
