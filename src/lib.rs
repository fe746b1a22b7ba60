//! # decimal_parts
//!
//! Lossless interchange of arbitrary-precision decimals through a four-part
//! decomposition.
//!
//! ## The parts
//!
//! Every decimal, whatever its backing representation, can be described as:
//!
//! - **form**: finite, infinite or NaN
//! - **negative**: the sign flag
//! - **coefficient**: the unsigned magnitude as minimal big-endian bytes
//!   (empty for zero)
//! - **exponent**: an `i32` power of ten
//!
//! A finite value equals `(-1)^negative * coefficient * 10^exponent`. Types
//! implementing [`Decomposer`] convert to and from [`Parts`], so a value
//! decomposed from one representation can be composed into any other.
//!
//! ## Quick Start
//!
//! ```rust
//! use decimal_parts::{compose, decompose, Form};
//!
//! let parts = decompose("-3.14", Vec::new());
//! assert_eq!(parts.form, Form::Finite);
//! assert!(parts.negative);
//! assert_eq!(parts.coefficient, vec![0x01, 0x3a]); // 314
//! assert_eq!(parts.exponent, -2);
//!
//! assert_eq!(compose(&parts).unwrap(), "-3.14");
//! ```
//!
//! ### Reusing a scratch buffer
//!
//! Decompose takes a buffer by value and writes the coefficient into it when
//! it has room, handing it back inside [`Parts`]:
//!
//! ```rust
//! use decimal_parts::decompose;
//!
//! let mut scratch = Vec::with_capacity(38);
//! for text in ["1", "1000", "3.456789"] {
//!     let parts = decompose(text, scratch);
//!     assert!(!parts.coefficient.is_empty());
//!     scratch = parts.into_coefficient();
//! }
//! assert!(scratch.capacity() >= 38);
//! ```
//!
//! ## Textual decimals
//!
//! The reference codec reads and writes `-?[0-9]+(\.[0-9]*)?`. Text outside
//! the grammar decomposes to NaN rather than failing, so callers who must tell
//! "NaN" apart from "malformed" should validate first, for example by parsing
//! into a [`DecimalString`]. Zero decomposes to positive zero with exponent 0,
//! so `"0.00"` and `"-0"` compose back as `"0"`.
//!
//! ## Performance Characteristics
//!
//! - **Decompose**: one digit-stream copy when the text has a point, plus the
//!   big integer parse; the coefficient goes straight into the scratch buffer
//! - **Compose**: a single output allocation sized up front; the point and
//!   zero padding are spliced in place

pub mod compose;
pub mod decompose;
pub mod decomposer;
pub mod error;
pub mod form;
pub mod options;
pub mod parts;
pub mod string;

pub use decomposer::Decomposer;
pub use error::{Error, Result};
pub use form::Form;
pub use options::CodecOptions;
pub use parts::{encode_magnitude, Parts};
pub use string::DecimalString;

/// Decomposes a textual decimal into [`Parts`].
///
/// Malformed text yields [`Form::NaN`]. `buf` is reused for the coefficient
/// when its capacity suffices.
///
/// # Examples
///
/// ```rust
/// use decimal_parts::{decompose, Form, Parts};
///
/// assert_eq!(decompose("1000", Vec::new()), Parts::finite(false, vec![0x03, 0xe8], 0));
/// assert_eq!(decompose("0.0", Vec::new()), Parts::zero());
/// assert_eq!(decompose("abc", Vec::new()).form, Form::NaN);
/// ```
#[must_use]
pub fn decompose(text: &str, buf: Vec<u8>) -> Parts {
    decompose::decompose_str(text, buf)
}

/// Composes [`Parts`] into a textual decimal.
///
/// # Examples
///
/// ```rust
/// use decimal_parts::{compose, Parts};
///
/// let parts = Parts::finite(false, vec![1], -10);
/// assert_eq!(compose(&parts).unwrap(), "0.0000000001");
/// ```
///
/// # Errors
///
/// Returns [`Error::NotRepresentable`] for infinite and NaN parts.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn compose(parts: &Parts) -> Result<String> {
    compose_with_options(parts, &CodecOptions::default())
}

/// Composes [`Parts`] into a textual decimal under custom limits.
///
/// # Examples
///
/// ```rust
/// use decimal_parts::{compose_with_options, CodecOptions, Parts};
///
/// let options = CodecOptions::new().with_max_scale(6);
/// let parts = Parts::finite(true, vec![0x01, 0x3a], -2);
/// assert_eq!(compose_with_options(&parts, &options).unwrap(), "-3.14");
/// ```
///
/// # Errors
///
/// Returns [`Error::NotRepresentable`] for infinite and NaN parts, and for
/// parts exceeding the limits in `options`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn compose_with_options(parts: &Parts, options: &CodecOptions) -> Result<String> {
    compose::compose_string(
        parts.form,
        parts.negative,
        &parts.coefficient,
        parts.exponent,
        options,
    )
}
