//! The decomposed form of a decimal value.
//!
//! A [`Parts`] value is the interchange unit between decimal representations:
//!
//! ```text
//! value = (-1)^negative * coefficient * 10^exponent      (form = Finite)
//! ```
//!
//! ## Coefficient layout
//!
//! The coefficient is the unsigned magnitude as **big-endian** bytes with no
//! leading zero bytes. An empty coefficient is zero. Every producer and
//! consumer in this crate uses this layout; other backends exchanging parts
//! with it must do the same.
//!
//! ```rust
//! use decimal_parts::Parts;
//! use num_bigint::BigInt;
//!
//! // -314 * 10^-2
//! let parts = Parts::from_bigint(&BigInt::from(-314), -2, Vec::new());
//! assert!(parts.negative);
//! assert_eq!(parts.coefficient, vec![0x01, 0x3a]);
//! assert_eq!(parts.to_bigint(), Some(BigInt::from(-314)));
//! ```

use crate::form::Form;
use num_bigint::{BigInt, BigUint, Sign};
use serde::{Deserialize, Serialize};

/// A decimal split into form, sign, coefficient bytes and base-10 exponent.
///
/// For [`Form::Infinite`] and [`Form::NaN`] the coefficient is empty and the
/// exponent zero; consumers ignore anything else found there.
///
/// Parts built by this crate's producers are normalized. Deserialized parts
/// are taken as they come: the coefficient may carry leading zero bytes and a
/// non-finite form may carry a coefficient or exponent. Compose tolerates both.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Parts {
    pub form: Form,
    pub negative: bool,
    pub coefficient: Vec<u8>,
    pub exponent: i32,
}

impl Parts {
    /// Creates finite parts. `coefficient` must already be minimal big-endian.
    #[must_use]
    pub fn finite(negative: bool, coefficient: Vec<u8>, exponent: i32) -> Self {
        Parts {
            form: Form::Finite,
            negative,
            coefficient,
            exponent,
        }
    }

    /// Finite zero: positive, empty coefficient, exponent 0.
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn infinite(negative: bool) -> Self {
        Parts {
            form: Form::Infinite,
            negative,
            coefficient: Vec::new(),
            exponent: 0,
        }
    }

    #[must_use]
    pub fn nan() -> Self {
        Self::nan_in(Vec::new())
    }

    /// NaN parts that carry the (cleared) scratch buffer back to the caller.
    pub(crate) fn nan_in(mut buf: Vec<u8>) -> Self {
        buf.clear();
        Parts {
            form: Form::NaN,
            negative: false,
            coefficient: buf,
            exponent: 0,
        }
    }

    /// Builds finite parts from a signed coefficient, writing the magnitude
    /// into `buf` when it has room.
    ///
    /// Zero normalizes to positive with exponent 0.
    #[must_use]
    pub fn from_bigint(value: &BigInt, exponent: i32, buf: Vec<u8>) -> Self {
        let coefficient = encode_magnitude(value.magnitude(), buf);
        match value.sign() {
            Sign::NoSign => Parts::finite(false, coefficient, 0),
            Sign::Minus => Parts::finite(true, coefficient, exponent),
            Sign::Plus => Parts::finite(false, coefficient, exponent),
        }
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.form.is_finite()
    }

    /// True for finite parts whose coefficient has magnitude zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.is_finite() && self.coefficient.iter().all(|&b| b == 0)
    }

    /// Reads the coefficient as an unsigned magnitude.
    #[must_use]
    pub fn magnitude(&self) -> BigUint {
        BigUint::from_bytes_be(&self.coefficient)
    }

    /// Returns the signed coefficient, or `None` for non-finite parts.
    #[must_use]
    pub fn to_bigint(&self) -> Option<BigInt> {
        if !self.is_finite() {
            return None;
        }
        let sign = if self.negative { Sign::Minus } else { Sign::Plus };
        Some(BigInt::from_biguint(sign, self.magnitude()))
    }

    /// Hands the coefficient buffer back for reuse as a scratch buffer.
    #[must_use]
    pub fn into_coefficient(self) -> Vec<u8> {
        self.coefficient
    }
}

/// Serializes `magnitude` as minimal big-endian bytes.
///
/// `buf` is reused when its capacity covers the `(bits + 7) / 8` bytes needed;
/// otherwise a buffer of that length is allocated. Zero yields an empty buffer.
///
/// # Examples
///
/// ```rust
/// use decimal_parts::encode_magnitude;
/// use num_bigint::BigUint;
///
/// let scratch = Vec::with_capacity(16);
/// let bytes = encode_magnitude(&BigUint::from(0x0102_03u32), scratch);
/// assert_eq!(bytes, vec![1, 2, 3]);
/// assert_eq!(bytes.capacity(), 16);
/// ```
#[must_use]
pub fn encode_magnitude(magnitude: &BigUint, mut buf: Vec<u8>) -> Vec<u8> {
    let len = ((magnitude.bits() + 7) / 8) as usize;
    if buf.capacity() < len {
        buf = Vec::with_capacity(len);
    }
    buf.clear();
    buf.resize(len, 0);

    // u64 digits are least significant first
    for (i, digit) in magnitude.iter_u64_digits().enumerate() {
        for (k, byte) in digit.to_le_bytes().into_iter().enumerate() {
            let offset = i * 8 + k;
            if offset >= len {
                break;
            }
            buf[len - 1 - offset] = byte;
        }
    }
    buf
}
