//! Property-based tests over generated canonical decimals.
//!
//! Canonical here means text that survives a round trip unchanged: no
//! superfluous leading zeros, no trailing point, and a non-zero value (zero
//! always composes back as "0").

use decimal_parts::{compose, decompose, Form};
use num_bigint::BigInt;
use proptest::prelude::*;

fn canonical_decimal() -> impl Strategy<Value = String> {
    (any::<bool>(), "[1-9][0-9]{0,59}", 0usize..70).prop_map(|(negative, digits, scale)| {
        let sign = if negative { "-" } else { "" };
        if scale == 0 {
            format!("{}{}", sign, digits)
        } else if scale >= digits.len() {
            format!("{}0.{}{}", sign, "0".repeat(scale - digits.len()), digits)
        } else {
            let (int, frac) = digits.split_at(digits.len() - scale);
            format!("{}{}.{}", sign, int, frac)
        }
    })
}

proptest! {
    #[test]
    fn prop_round_trip(text in canonical_decimal()) {
        let parts = decompose(&text, Vec::new());
        prop_assert_eq!(parts.form, Form::Finite);
        prop_assert_eq!(parts.negative, text.starts_with('-'));
        prop_assert_eq!(compose(&parts).unwrap(), text);
    }

    #[test]
    fn prop_buffer_reuse_is_transparent(text in canonical_decimal(), fill in any::<u8>(), len in 0usize..40) {
        let fresh = decompose(&text, Vec::new());
        let reused = decompose(&text, vec![fill; len]);
        prop_assert_eq!(reused, fresh);
    }

    #[test]
    fn prop_coefficient_matches_bigint(n in any::<i128>(), exponent in -40i32..40) {
        let parts = decimal_parts::Parts::from_bigint(&BigInt::from(n), exponent, Vec::new());
        prop_assert_eq!(parts.to_bigint(), Some(BigInt::from(n)));
        prop_assert_eq!(parts.coefficient, BigInt::from(n).magnitude().to_bytes_be().into_iter().skip_while(|&b| b == 0).collect::<Vec<u8>>());
    }

    #[test]
    fn prop_garbage_never_panics(text in "\\PC{0,20}") {
        let parts = decompose(&text, Vec::new());
        if parts.form == Form::NaN {
            prop_assert!(parts.coefficient.is_empty());
            prop_assert_eq!(parts.exponent, 0);
        }
    }
}
