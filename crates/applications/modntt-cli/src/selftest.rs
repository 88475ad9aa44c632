//! Built-in arithmetic checks for `modntt selftest`

use anyhow::Result;
use modntt_core::arith::{inverse, mul_mod, power_mod};
use modntt_core::ntt::{inv_ntt, ntt};
use tracing::debug;

const SMALL_PRIMES: [u64; 5] = [3, 5, 7, 11, 13];

/// Run every check, returning a description of each one that failed.
pub fn run_all() -> Result<Vec<String>> {
    let mut failures = Vec::new();
    failures.extend(check_transform_vector()?);
    failures.extend(check_inverses()?);
    failures.extend(check_powers()?);
    debug!(failed = failures.len(), "self-test finished");
    Ok(failures)
}

/// N = 3, P = 7, root = 2 maps [2, 3, 3] to [1, 6, 6] and back.
fn check_transform_vector() -> Result<Vec<String>> {
    let vec = [2u64, 3, 3];
    let trans = [1u64, 6, 6];
    let mut failures = Vec::new();

    let forward = ntt(&vec, 3, 7, 2)?;
    if forward != trans {
        failures.push(format!("forward transform gave {forward:?}, expected {trans:?}"));
    }
    let back = inv_ntt(&trans, 3, 7, 2)?;
    if back != vec {
        failures.push(format!("inverse transform gave {back:?}, expected {vec:?}"));
    }
    Ok(failures)
}

fn check_inverses() -> Result<Vec<String>> {
    let expected = [2u64, 3, 4, 6, 7];
    let mut failures = Vec::new();
    for (&m, &inv) in SMALL_PRIMES.iter().zip(&expected) {
        let got = inverse(2, m)?;
        if got != inv || mul_mod(2, got, m) != 1 {
            failures.push(format!("2^-1 mod {m} gave {got}, expected {inv}"));
        }
    }
    Ok(failures)
}

fn check_powers() -> Result<Vec<String>> {
    let mut failures = Vec::new();
    for m in SMALL_PRIMES {
        for exp in 1..6u32 {
            let got = power_mod(2, u64::from(exp), m)?;
            let expected = 2u64.pow(exp) % m;
            if got != expected {
                failures.push(format!("2^{exp} mod {m} gave {got}, expected {expected}"));
            }
        }
    }
    Ok(failures)
}
