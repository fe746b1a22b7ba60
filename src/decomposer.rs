//! The capability shared by every decimal representation that can travel as
//! [`Parts`].
//!
//! Any decimal type, whether fixed-precision, floating big-decimal or plain
//! text, implements [`Decomposer`] to take part in the interchange. Parts
//! produced by one implementation's `decompose` are fed to another's
//! `compose`.
//!
//! ## Error policy
//!
//! - `decompose` never fails. Values a type cannot describe as a finite
//!   number are reported through [`Form`].
//! - `compose` returns [`Error::NotRepresentable`](crate::Error::NotRepresentable)
//!   when the magnitude, scale or form exceeds what the type can hold.
//! - A type without Infinity may store NaN instead; a type with neither must
//!   fail.
//! - A type without negative zero or negative NaN may drop the sign silently.
//!
//! ## Examples
//!
//! ```rust
//! use decimal_parts::{DecimalString, Decomposer};
//!
//! let source = DecimalString::new("-3.14");
//! let parts = source.decompose(Vec::with_capacity(8));
//!
//! let mut target = DecimalString::default();
//! target.compose_parts(&parts).unwrap();
//! assert_eq!(target.as_str(), "-3.14");
//! ```

use crate::error::Result;
use crate::form::Form;
use crate::parts::Parts;

/// Converts a decimal value to and from its [`Parts`].
pub trait Decomposer {
    /// Splits the current value into parts.
    ///
    /// `buf` is a scratch buffer moved in by the caller. When its capacity
    /// covers the coefficient it is reused as [`Parts::coefficient`]; the caller
    /// takes it back with [`Parts::into_coefficient`]. Results are identical
    /// whether or not the buffer is reused.
    fn decompose(&self, buf: Vec<u8>) -> Parts;

    /// Replaces the current value with the one described by the parts.
    ///
    /// `coefficient` is a big-endian magnitude. For non-finite forms the
    /// coefficient and exponent are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotRepresentable`](crate::Error::NotRepresentable) when
    /// the value cannot be held by this type.
    fn compose(
        &mut self,
        form: Form,
        negative: bool,
        coefficient: &[u8],
        exponent: i32,
    ) -> Result<()>;

    /// Forwards the fields of `parts` to [`Decomposer::compose`].
    ///
    /// # Errors
    ///
    /// Same as [`Decomposer::compose`].
    fn compose_parts(&mut self, parts: &Parts) -> Result<()> {
        self.compose(parts.form, parts.negative, &parts.coefficient, parts.exponent)
    }
}
