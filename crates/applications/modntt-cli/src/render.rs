//! Human-readable polynomial rendering

use std::fmt;

/// Displays a coefficient sequence as `c0X^0 + c1X^1 + ...`.
#[derive(Debug, Clone, Copy)]
pub struct Polynomial<'a>(pub &'a [u64]);

impl fmt::Display for Polynomial<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "0");
        }
        for (i, coeff) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{coeff}X^{i}")?;
        }
        Ok(())
    }
}
