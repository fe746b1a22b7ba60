//! [`DecimalString`], the reference [`Decomposer`] backed by base-10 text.

use crate::compose::compose_string;
use crate::decompose::{decompose_str, scan};
use crate::decomposer::Decomposer;
use crate::error::{Error, Result};
use crate::form::Form;
use crate::options::CodecOptions;
use crate::parts::Parts;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A base-10 decimal held as text, such as `"-3.14"` or `"1000"`.
///
/// [`DecimalString::new`] stores any text; malformed text decomposes to NaN.
/// Parsing with [`str::parse`] checks the `-?[0-9]+(\.[0-9]*)?` grammar first.
///
/// Round trips through [`Parts`] reproduce the text byte for byte, except that
/// every zero (`"-0"`, `"0.00"`) composes back as `"0"`.
///
/// # Examples
///
/// ```rust
/// use decimal_parts::{DecimalString, Decomposer};
///
/// let mut n = DecimalString::new("12345678901234567890123456789012345678");
/// let parts = n.decompose(Vec::with_capacity(38));
/// assert_eq!(parts.coefficient.len(), 16);
///
/// n.compose_parts(&parts).unwrap();
/// assert_eq!(n.to_string(), "12345678901234567890123456789012345678");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DecimalString(String);

impl DecimalString {
    /// Wraps `text` without checking it.
    pub fn new(text: impl Into<String>) -> Self {
        DecimalString(text.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Replaces the text with `parts`, subject to `options` limits.
    ///
    /// The text is left untouched on error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotRepresentable`] for non-finite parts and parts over
    /// the configured limits.
    pub fn compose_with_options(&mut self, parts: &Parts, options: &CodecOptions) -> Result<()> {
        self.0 = compose_string(
            parts.form,
            parts.negative,
            &parts.coefficient,
            parts.exponent,
            options,
        )?;
        Ok(())
    }
}

impl Default for DecimalString {
    fn default() -> Self {
        DecimalString("0".to_string())
    }
}

impl Decomposer for DecimalString {
    fn decompose(&self, buf: Vec<u8>) -> Parts {
        decompose_str(&self.0, buf)
    }

    fn compose(
        &mut self,
        form: Form,
        negative: bool,
        coefficient: &[u8],
        exponent: i32,
    ) -> Result<()> {
        self.0 = compose_string(
            form,
            negative,
            coefficient,
            exponent,
            &CodecOptions::default(),
        )?;
        Ok(())
    }
}

impl FromStr for DecimalString {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        scan(s).map_err(|malformed| Error::syntax(malformed.position, malformed.msg))?;
        Ok(DecimalString(s.to_string()))
    }
}

impl fmt::Display for DecimalString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DecimalString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for DecimalString {
    fn from(text: String) -> Self {
        DecimalString(text)
    }
}

impl From<&str> for DecimalString {
    fn from(text: &str) -> Self {
        DecimalString(text.to_string())
    }
}

impl Serialize for DecimalString {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for DecimalString {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        scan(&text).map_err(|malformed| {
            <D::Error as serde::de::Error>::custom(Error::syntax(
                malformed.position,
                malformed.msg,
            ))
        })?;
        Ok(DecimalString(text))
    }
}
