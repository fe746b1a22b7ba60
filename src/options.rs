//! Configuration options for composing textual decimals.
//!
//! [`CodecOptions`] bounds the text a compose call is willing to build. The
//! defaults impose no limits, so every finite value composes.
//!
//! ## Examples
//!
//! ```rust
//! use decimal_parts::{compose_with_options, CodecOptions, Parts};
//!
//! // 1 * 10^-40 needs 40 fractional digits
//! let tiny = Parts::finite(false, vec![1], -40);
//!
//! let options = CodecOptions::new().with_max_scale(38);
//! assert!(compose_with_options(&tiny, &options).is_err());
//!
//! let text = compose_with_options(&tiny, &CodecOptions::new()).unwrap();
//! assert_eq!(text.len(), 42);
//! ```

/// Limits applied by compose before any output is allocated.
///
/// Parts exceeding a limit are rejected with
/// [`Error::NotRepresentable`](crate::Error::NotRepresentable).
///
/// # Examples
///
/// ```rust
/// use decimal_parts::CodecOptions;
///
/// let options = CodecOptions::new()
///     .with_max_scale(38)
///     .with_max_coefficient_len(16);
/// assert_eq!(options.max_scale, Some(38));
/// assert_eq!(options.max_coefficient_len, Some(16));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodecOptions {
    /// Largest accepted `|exponent|`.
    pub max_scale: Option<u32>,
    /// Largest accepted coefficient length, in bytes.
    pub max_coefficient_len: Option<usize>,
}

impl CodecOptions {
    /// Creates default options (no limits).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use decimal_parts::CodecOptions;
    ///
    /// let options = CodecOptions::new();
    /// assert!(options.max_scale.is_none());
    /// assert!(options.max_coefficient_len.is_none());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the largest exponent magnitude compose accepts.
    ///
    /// Large exponents expand into as many zero digits, so this bounds the
    /// length of the produced text.
    #[must_use]
    pub fn with_max_scale(mut self, max_scale: u32) -> Self {
        self.max_scale = Some(max_scale);
        self
    }

    /// Sets the longest coefficient, in bytes, compose accepts.
    #[must_use]
    pub fn with_max_coefficient_len(mut self, len: usize) -> Self {
        self.max_coefficient_len = Some(len);
        self
    }
}
