//! Validated phone-number strings.
//!
//! A phone number is a non-empty run of ASCII decimal digits, at most
//! [`PhoneNumber::MAX_LEN`] of them. Validation happens at construction, so
//! every `PhoneNumber` held anywhere in the system is known to be well formed
//! and the hot paths never re-check.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A validated phone number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Maximum number of digits a phone number may carry.
    pub const MAX_LEN: usize = 22;

    /// Parse and validate a phone-number string.
    pub fn parse(number: impl Into<String>) -> Result<Self, NumberFormatError> {
        let number = number.into();
        Self::check(&number)?;
        Ok(Self(number))
    }

    /// Construct without validating.
    ///
    /// The caller must guarantee the string is a well-formed phone number.
    /// Debug builds assert it; release builds do not look.
    pub fn new_unchecked(number: impl Into<String>) -> Self {
        let number = number.into();
        debug_assert!(
            Self::check(&number).is_ok(),
            "malformed phone number: {number:?}"
        );
        Self(number)
    }

    /// The digits as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of digits.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the number holds no digits. Never the case for a parsed
    /// number.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn check(number: &str) -> Result<(), NumberFormatError> {
        if number.is_empty() {
            return Err(NumberFormatError::Empty);
        }
        if number.len() > Self::MAX_LEN {
            return Err(NumberFormatError::TooLong { len: number.len() });
        }
        for (position, byte) in number.bytes().enumerate() {
            if !byte.is_ascii_digit() {
                return Err(NumberFormatError::NonDigit { byte, position });
            }
        }
        Ok(())
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Errors raised when validating a phone-number string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NumberFormatError {
    #[error("phone number is empty")]
    Empty,

    #[error("phone number has {len} digits, limit is {max}", max = PhoneNumber::MAX_LEN)]
    TooLong { len: usize },

    #[error("phone number contains non-digit byte {byte:#04x} at position {position}")]
    NonDigit { byte: u8, position: usize },
}
