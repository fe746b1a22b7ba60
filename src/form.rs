//! The finite/infinite/NaN discriminator of a decomposed decimal.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which kind of value a [`Parts`](crate::Parts) describes.
///
/// Each form has a stable byte code (`0` finite, `1` infinite, `2` NaN) so the
/// form can travel through byte-oriented interfaces.
///
/// # Examples
///
/// ```rust
/// use decimal_parts::Form;
///
/// assert_eq!(u8::from(Form::NaN), 2);
/// assert_eq!(Form::try_from(1u8).unwrap(), Form::Infinite);
/// assert!(Form::try_from(3u8).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Form {
    #[default]
    Finite = 0,
    Infinite = 1,
    NaN = 2,
}

impl Form {
    /// Returns the byte code of this form.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn is_finite(self) -> bool {
        matches!(self, Form::Finite)
    }
}

impl From<Form> for u8 {
    fn from(form: Form) -> u8 {
        form.as_u8()
    }
}

impl TryFrom<u8> for Form {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self> {
        match code {
            0 => Ok(Form::Finite),
            1 => Ok(Form::Infinite),
            2 => Ok(Form::NaN),
            other => Err(Error::InvalidForm(other)),
        }
    }
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Form::Finite => write!(f, "finite"),
            Form::Infinite => write!(f, "infinite"),
            Form::NaN => write!(f, "NaN"),
        }
    }
}
