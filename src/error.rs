//! Error types for decimal composition and parsing.
//!
//! Decomposition never fails: malformed text is reported structurally as
//! [`Form::NaN`](crate::Form::NaN). Errors surface only where a value has to be
//! *built*:
//!
//! - **Not representable**: compose was handed parts the target cannot hold
//!   (non-finite form, scale or magnitude over a configured limit)
//! - **Invalid form**: a form byte code outside `0..=2`
//! - **Syntax errors**: checked parsing of a textual decimal, with the byte offset
//!
//! ## Examples
//!
//! ```rust
//! use decimal_parts::{DecimalString, Error};
//!
//! let result: Result<DecimalString, Error> = "1.2.3".parse();
//! assert!(result.is_err());
//!
//! if let Err(err) = result {
//!     assert!(err.to_string().contains("position 3"));
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised while composing or parsing decimals.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The parts cannot be held by the target representation
    #[error("value not representable: {reason}")]
    NotRepresentable { reason: String },

    /// Form byte code outside the finite/infinite/NaN range
    #[error("invalid form byte {0}, expected 0 (finite), 1 (infinite) or 2 (NaN)")]
    InvalidForm(u8),

    /// Textual decimal does not match `-?[0-9]+(\.[0-9]*)?`
    #[error("Syntax error at position {position}: {msg}")]
    Syntax { position: usize, msg: String },

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a "value not representable" error with the given reason.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use decimal_parts::Error;
    ///
    /// let err = Error::not_representable("infinity has no textual form");
    /// assert!(err.to_string().starts_with("value not representable"));
    /// ```
    pub fn not_representable(reason: &str) -> Self {
        Error::NotRepresentable {
            reason: reason.to_string(),
        }
    }

    /// Creates a syntax error pointing at a byte offset of the input.
    pub fn syntax(position: usize, msg: &str) -> Self {
        Error::Syntax {
            position,
            msg: msg.to_string(),
        }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Returns true for [`Error::NotRepresentable`].
    #[must_use]
    pub fn is_not_representable(&self) -> bool {
        matches!(self, Error::NotRepresentable { .. })
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
