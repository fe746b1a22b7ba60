//! [`Parts`](crate::Parts) to textual decimal.
//!
//! The output is sized once up front: one byte for the sign, three digits per
//! coefficient byte (`256^n < 10^(3n)`), the decimal point, and the zero
//! padding the exponent calls for. The point and any padding are then spliced
//! into the digit run in place, so the text is built in a single allocation.

use crate::error::{Error, Result};
use crate::form::Form;
use crate::options::CodecOptions;
use num_bigint::BigUint;
use std::cmp::Ordering;
use std::io::Write;
use tracing::debug;

/// Composes finite parts into a textual decimal.
///
/// Positive exponents append zeros; negative exponents place the point that
/// many digits from the end, padding with leading zeros as needed. A zero
/// coefficient always yields `"0"`.
///
/// # Errors
///
/// Returns [`Error::NotRepresentable`] for infinite and NaN forms, which have
/// no textual representation, and for parts exceeding `options` limits.
///
/// # Examples
///
/// ```rust
/// use decimal_parts::compose::compose_string;
/// use decimal_parts::{CodecOptions, Form};
///
/// let options = CodecOptions::default();
/// assert_eq!(compose_string(Form::Finite, true, &[0x01, 0x3a], -2, &options).unwrap(), "-3.14");
/// assert_eq!(compose_string(Form::Finite, false, &[1], -10, &options).unwrap(), "0.0000000001");
/// assert_eq!(compose_string(Form::Finite, false, &[7], 3, &options).unwrap(), "7000");
/// assert!(compose_string(Form::Infinite, false, &[], 0, &options).is_err());
/// ```
pub fn compose_string(
    form: Form,
    negative: bool,
    coefficient: &[u8],
    exponent: i32,
    options: &CodecOptions,
) -> Result<String> {
    if !form.is_finite() {
        debug!(%form, negative, "non-finite form has no textual representation");
        return Err(Error::not_representable(&format!(
            "{} values have no textual representation",
            form
        )));
    }

    let first = coefficient
        .iter()
        .position(|&b| b != 0)
        .unwrap_or(coefficient.len());
    let coefficient = &coefficient[first..];
    if coefficient.is_empty() {
        return Ok("0".to_string());
    }

    check_limits(coefficient, exponent, options)?;

    let start = usize::from(negative);
    let scale = exponent.unsigned_abs() as usize;
    let mut capacity = start + coefficient.len() * 3;
    match exponent.cmp(&0) {
        Ordering::Greater => capacity += scale,
        Ordering::Less => capacity = (capacity + 1).max(start + 2 + scale),
        Ordering::Equal => {}
    }

    let mut out = Vec::with_capacity(capacity);
    if negative {
        out.push(b'-');
    }
    write!(out, "{}", BigUint::from_bytes_be(coefficient)).map_err(Error::custom)?;

    match exponent.cmp(&0) {
        Ordering::Greater => out.resize(out.len() + scale, b'0'),
        Ordering::Less => {
            let digits = out.len() - start;
            if digits <= scale {
                // "0." followed by left padding, ahead of the digit run
                let pad = scale - digits;
                out.splice(start..start, std::iter::repeat(b'0').take(pad + 2));
                out[start + 1] = b'.';
            } else {
                out.insert(out.len() - scale, b'.');
            }
        }
        Ordering::Equal => {}
    }

    String::from_utf8(out).map_err(Error::custom)
}

fn check_limits(coefficient: &[u8], exponent: i32, options: &CodecOptions) -> Result<()> {
    if let Some(max) = options.max_coefficient_len {
        if coefficient.len() > max {
            debug!(len = coefficient.len(), max, "coefficient over length limit");
            return Err(Error::not_representable(&format!(
                "coefficient of {} bytes exceeds limit of {}",
                coefficient.len(),
                max
            )));
        }
    }
    if let Some(max) = options.max_scale {
        if exponent.unsigned_abs() > max {
            debug!(exponent, max, "exponent over scale limit");
            return Err(Error::not_representable(&format!(
                "exponent {} exceeds scale limit of {}",
                exponent, max
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finite(negative: bool, coefficient: &[u8], exponent: i32) -> String {
        compose_string(
            Form::Finite,
            negative,
            coefficient,
            exponent,
            &CodecOptions::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_point_splice() {
        assert_eq!(finite(false, &[0x01, 0x3a], -2), "3.14");
        assert_eq!(finite(false, &[0x01, 0x3a], -1), "31.4");
        assert_eq!(finite(true, &[89], -2), "-0.89");
    }

    #[test]
    fn test_zero_padding() {
        assert_eq!(finite(false, &[1], -2), "0.01");
        assert_eq!(finite(true, &[9], -2), "-0.09");
        assert_eq!(finite(false, &[0x01, 0x3a], -3), "0.314");
        assert_eq!(finite(true, &[0x01, 0x3a], -5), "-0.00314");
    }

    #[test]
    fn test_positive_exponent() {
        assert_eq!(finite(false, &[1], 3), "1000");
        assert_eq!(finite(true, &[2], 1), "-20");
    }

    #[test]
    fn test_zero_ignores_sign_and_exponent() {
        assert_eq!(finite(false, &[], 0), "0");
        assert_eq!(finite(true, &[], -4), "0");
        assert_eq!(finite(true, &[0, 0], 7), "0");
    }

    #[test]
    fn test_leading_zero_bytes_tolerated() {
        assert_eq!(finite(false, &[0, 0, 0x01, 0x3a], -2), "3.14");
    }

    #[test]
    fn test_non_finite_rejected() {
        let options = CodecOptions::default();
        for form in [Form::Infinite, Form::NaN] {
            let err = compose_string(form, false, &[], 0, &options).unwrap_err();
            assert!(err.is_not_representable());
        }
    }

    #[test]
    fn test_scale_limit() {
        let options = CodecOptions::new().with_max_scale(4);
        assert_eq!(
            compose_string(Form::Finite, false, &[1], -4, &options).unwrap(),
            "0.0001"
        );
        assert!(compose_string(Form::Finite, false, &[1], -5, &options).is_err());
        assert!(compose_string(Form::Finite, false, &[1], 5, &options).is_err());
        // zero never reaches the limits
        assert_eq!(
            compose_string(Form::Finite, false, &[], i32::MIN, &options).unwrap(),
            "0"
        );
    }

    #[test]
    fn test_coefficient_limit() {
        let options = CodecOptions::new().with_max_coefficient_len(2);
        assert!(compose_string(Form::Finite, false, &[0, 0xff, 0xff], 0, &options).is_ok());
        let err = compose_string(Form::Finite, false, &[1, 0, 0], 0, &options).unwrap_err();
        assert!(err.to_string().contains("3 bytes"));
    }

    #[test]
    fn test_capacity_is_not_exceeded() {
        // 38 nines needs 16 bytes; digits stay within the 3-per-byte bound
        let coefficient = BigUint::parse_bytes(b"99999999999999999999999999999999999999", 10)
            .unwrap()
            .to_bytes_be();
        let text = finite(true, &coefficient, -40);
        assert_eq!(text, format!("-0.00{}", "9".repeat(38)));
    }
}
