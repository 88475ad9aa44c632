//! Error handling tests for modntt-core
//!
//! Every failure must surface as a distinguishable `NttError` variant.

use modntt_core::prelude::*;

#[test]
fn test_error_display_and_debug() {
    let errors = [
        NttError::InvalidModulus { modulus: 0 },
        NttError::NotInvertible {
            value: 4,
            modulus: 8,
        },
        NttError::NoGeneratorFound { modulus: 9 },
        NttError::precondition("length mismatch"),
    ];

    for error in errors {
        let display_str = format!("{error}");
        assert!(!display_str.is_empty());

        let debug_str = format!("{error:?}");
        assert!(!debug_str.is_empty());
    }
}

#[test]
fn test_error_serialization() {
    let err = NttError::NotInvertible {
        value: 4,
        modulus: 8,
    };
    let json = serde_json::to_string(&err).unwrap();
    let restored: NttError = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, err);
}

#[test]
fn test_inverse_not_invertible() {
    let result = inverse(4, 8);
    assert_eq!(
        result,
        Err(NttError::NotInvertible {
            value: 4,
            modulus: 8
        })
    );
}

#[test]
fn test_zero_modulus_everywhere() {
    let invalid = NttError::InvalidModulus { modulus: 0 };
    assert_eq!(power_mod(2, 3, 0), Err(invalid.clone()));
    assert_eq!(true_mod(-3, 0), Err(invalid.clone()));
    assert_eq!(inverse(3, 0), Err(invalid.clone()));
    assert_eq!(is_generator(3, 0), Err(invalid.clone()));
    assert_eq!(generator(0), Err(invalid.clone()));
    assert_eq!(get_root(1, 0), Err(invalid.clone()));
    assert_eq!(ntt(&[1], 1, 0, 1), Err(invalid.clone()));
    assert_eq!(inv_ntt(&[1], 1, 0, 1), Err(invalid.clone()));
    assert_eq!(convolution(&[1], &[1], 1, 0, 1), Err(invalid.clone()));
    assert_eq!(check_conv(&[1], &[1], 1, 0), Err(invalid));
}

#[test]
fn test_no_generator_for_composite() {
    for m in [4u64, 6, 8, 9, 15, 561] {
        assert_eq!(generator(m), Err(NttError::NoGeneratorFound { modulus: m }));
    }
}

#[test]
fn test_root_precondition() {
    // 5 does not divide 12
    let err = get_root(5, 13).unwrap_err();
    assert!(err.is_precondition());
    assert!(err.to_string().contains("does not divide"));

    let err = NttParams::new(5, 13).unwrap_err();
    assert!(matches!(err, NttError::PreconditionViolated(_)));
}

#[test]
fn test_supplied_root_of_wrong_order() {
    // 3 generates F_7*, so it has order 6, not 3
    let err = NttParams::with_root(3, 7, 3).unwrap_err();
    assert!(matches!(err, NttError::PreconditionViolated(_)));
}

#[test]
fn test_supplied_root_over_composite_modulus() {
    // 31 has order 4 mod 65, yet 31 - 1 is a zero divisor and the
    // transform would not round-trip
    let err = NttParams::with_root(4, 65, 31).unwrap_err();
    assert_eq!(err, NttError::NoGeneratorFound { modulus: 65 });
    assert!(err.is_arithmetic());
    assert_eq!(NttParams::new(4, 65).unwrap_err(), err);
}

#[test]
fn test_sequence_length_mismatch() {
    let params = NttParams::new(4, 13).unwrap();
    assert!(matches!(params.forward(&[1, 2, 3]), Err(NttError::PreconditionViolated(_))));
    assert!(matches!(params.inverse(&[1, 2, 3, 4, 5]), Err(NttError::PreconditionViolated(_))));
    assert!(matches!(params.convolve(&[1, 2, 3, 4], &[1]), Err(NttError::PreconditionViolated(_))));
    assert!(matches!(params.verify(&[1], &[1, 2, 3, 4]), Err(NttError::PreconditionViolated(_))));
}
