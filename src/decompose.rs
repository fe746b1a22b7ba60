//! Textual decimal to [`Parts`].
//!
//! Accepted text follows `-?[0-9]+(\.[0-9]*)?`: an optional minus sign, at least
//! one integer digit, and an optional point followed by any number of
//! fractional digits. There is no `+` sign, exponent notation, whitespace or
//! digit separator.
//!
//! The point is dropped from the digit stream and the fractional digit count
//! becomes the negated exponent:
//!
//! ```text
//! "-3.14"  ->  negative, coefficient 314, exponent -2
//! "1000"   ->  positive, coefficient 1000, exponent 0
//! "0.00"   ->  zero (positive, empty coefficient, exponent 0)
//! "abc"    ->  NaN
//! ```

use crate::parts::Parts;
use num_bigint::BigInt;
use tracing::trace;

/// First byte of a textual decimal that breaks the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Malformed {
    pub position: usize,
    pub msg: &'static str,
}

/// Checks `text` against the grammar and returns the offset of its decimal
/// point, if any.
pub(crate) fn scan(text: &str) -> Result<Option<usize>, Malformed> {
    let bytes = text.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let int_start = usize::from(bytes.first() == Some(&b'-'));
    let int_end = digits_from(int_start);
    if int_end == int_start {
        return Err(Malformed {
            position: int_start,
            msg: "expected a digit",
        });
    }
    if int_end == bytes.len() {
        return Ok(None);
    }
    if bytes[int_end] != b'.' {
        return Err(Malformed {
            position: int_end,
            msg: "expected a digit or '.'",
        });
    }

    let frac_end = digits_from(int_end + 1);
    if frac_end != bytes.len() {
        return Err(Malformed {
            position: frac_end,
            msg: "expected a digit",
        });
    }
    Ok(Some(int_end))
}

/// Decomposes a textual decimal, writing the coefficient into `buf` when it
/// has room.
///
/// Never fails: text outside the grammar, or with more fractional digits than
/// an `i32` exponent can express, comes back as NaN parts carrying the cleared
/// scratch buffer. Zero always decomposes to positive zero with exponent 0.
///
/// # Examples
///
/// ```rust
/// use decimal_parts::{decompose, Form};
///
/// let parts = decompose("-0.09", Vec::new());
/// assert_eq!(parts.form, Form::Finite);
/// assert!(parts.negative);
/// assert_eq!(parts.coefficient, vec![9]);
/// assert_eq!(parts.exponent, -2);
///
/// assert_eq!(decompose("1e10", Vec::new()).form, Form::NaN);
/// ```
#[must_use]
pub fn decompose_str(text: &str, buf: Vec<u8>) -> Parts {
    let point = match scan(text) {
        Ok(point) => point,
        Err(malformed) => {
            trace!(
                position = malformed.position,
                reason = malformed.msg,
                "malformed decimal text decomposed as NaN"
            );
            return Parts::nan_in(buf);
        }
    };

    let bytes = text.as_bytes();
    let parsed = match point {
        None => BigInt::parse_bytes(bytes, 10).map(|value| (value, 0)),
        Some(point) => {
            let Ok(scale) = i32::try_from(bytes.len() - point - 1) else {
                trace!(
                    digits = bytes.len() - point - 1,
                    "fractional part exceeds exponent range, decomposed as NaN"
                );
                return Parts::nan_in(buf);
            };
            let mut digits = Vec::with_capacity(bytes.len() - 1);
            digits.extend_from_slice(&bytes[..point]);
            digits.extend_from_slice(&bytes[point + 1..]);
            BigInt::parse_bytes(&digits, 10).map(|value| (value, -scale))
        }
    };

    match parsed {
        Some((value, exponent)) => Parts::from_bigint(&value, exponent, buf),
        None => {
            trace!("decimal digits failed to parse, decomposed as NaN");
            Parts::nan_in(buf)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::Form;

    #[test]
    fn test_scan_accepts_grammar() {
        assert_eq!(scan("0"), Ok(None));
        assert_eq!(scan("-12"), Ok(None));
        assert_eq!(scan("3.14"), Ok(Some(1)));
        assert_eq!(scan("-3.14"), Ok(Some(2)));
        assert_eq!(scan("5."), Ok(Some(1)));
    }

    #[test]
    fn test_scan_rejects() {
        let cases = [
            ("", 0),
            ("-", 1),
            ("+1", 0),
            (".5", 0),
            ("-.5", 1),
            ("1e10", 1),
            ("1.2.3", 3),
            ("1_000", 1),
            (" 1", 0),
            ("1 ", 1),
            ("abc", 0),
        ];
        for (text, position) in cases {
            let err = scan(text).unwrap_err();
            assert_eq!(err.position, position, "input {:?}", text);
        }
    }

    #[test]
    fn test_exponent_from_fraction_length() {
        assert_eq!(decompose_str("3.456789", Vec::new()).exponent, -6);
        assert_eq!(decompose_str("0.0000000001", Vec::new()).exponent, -10);
        assert_eq!(decompose_str("1000", Vec::new()).exponent, 0);
    }

    #[test]
    fn test_trailing_point_has_zero_exponent() {
        let parts = decompose_str("5.", Vec::new());
        assert_eq!(parts, Parts::finite(false, vec![5], 0));
    }

    #[test]
    fn test_trailing_zeros_keep_scale() {
        let parts = decompose_str("1.50", Vec::new());
        assert_eq!(parts, Parts::finite(false, vec![150], -2));
    }

    #[test]
    fn test_negative_zero_normalizes() {
        for text in ["-0", "-0.000", "00.0"] {
            assert_eq!(decompose_str(text, Vec::new()), Parts::zero(), "input {:?}", text);
        }
    }

    #[test]
    fn test_nan_returns_scratch_buffer() {
        let scratch = Vec::with_capacity(64);
        let ptr = scratch.as_ptr();
        let parts = decompose_str("not a number", scratch);
        assert_eq!(parts.form, Form::NaN);
        assert!(!parts.negative);
        assert_eq!(parts.exponent, 0);
        let buf = parts.into_coefficient();
        assert!(buf.is_empty());
        assert_eq!(buf.as_ptr(), ptr);
    }
}
