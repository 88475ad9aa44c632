//! Result of one `modntt run`

use anyhow::{Context, Result};
use modntt_core::prelude::*;
use serde::Serialize;
use std::fmt;

use crate::config::OutputFormat;
use crate::render::Polynomial;

/// Inputs, both convolution results and the verdict
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Parameters the transform ran with
    pub params: NttParams,
    /// First input polynomial
    pub lhs: Vec<u64>,
    /// Second input polynomial
    pub rhs: Vec<u64>,
    /// Transform and reference results
    pub check: ConvolutionCheck,
    /// Whether the two results agree
    pub success: bool,
}

impl RunReport {
    /// Bundle a finished run
    pub fn new(params: NttParams, lhs: Vec<u64>, rhs: Vec<u64>, check: ConvolutionCheck) -> Self {
        let success = check.matches();
        Self {
            params,
            lhs,
            rhs,
            check,
            success,
        }
    }

    /// Render the report in the requested format
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(self).context("failed to serialize report")
            }
            OutputFormat::Text => Ok(self.to_string()),
        }
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "root: {}", self.params.root())?;
        let sections = [
            ("Polynomial 1", &self.lhs),
            ("Polynomial 2", &self.rhs),
            ("NTT Result", &self.check.ntt),
            ("Correct Result", &self.check.reference),
        ];
        for (title, coeffs) in sections {
            writeln!(f, "{title}")?;
            writeln!(f, "\t{}", Polynomial(coeffs))?;
        }
        if self.success {
            write!(f, "Test is Success")
        } else {
            let mismatched: Vec<usize> = self.check.mismatches().collect();
            write!(f, "Test is Failure (coefficients {mismatched:?} differ)")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> RunReport {
        let params = NttParams::new(3, 7).unwrap();
        let (lhs, rhs) = (vec![2, 3, 3], vec![1, 0, 0]);
        let check = params.verify(&lhs, &rhs).unwrap();
        RunReport::new(params, lhs, rhs, check)
    }

    #[test]
    fn test_text_report() {
        let text = sample_report().render(OutputFormat::Text).unwrap();
        assert!(text.starts_with("root: 2\n"));
        assert!(text.contains("NTT Result\n\t2X^0 + 3X^1 + 3X^2\n"));
        assert!(text.ends_with("Test is Success"));
    }

    #[test]
    fn test_json_report() {
        let json = sample_report().render(OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["params"]["root"], 2);
        assert_eq!(value["params"]["modulus"], 7);
        assert_eq!(value["success"], true);
        assert_eq!(value["check"]["ntt"], serde_json::json!([2, 3, 3]));
    }

    #[test]
    fn test_failure_report() {
        let params = NttParams::new(3, 7).unwrap();
        let check = ConvolutionCheck {
            ntt: vec![1, 2, 3],
            reference: vec![1, 2, 4],
        };
        let report = RunReport::new(params, vec![0; 3], vec![0; 3], check);
        assert!(!report.success);
        let text = report.render(OutputFormat::Text).unwrap();
        assert!(text.ends_with("Test is Failure (coefficients [2] differ)"));
    }
}
