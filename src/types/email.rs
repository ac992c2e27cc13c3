//! Represents a validated email address.
//!
//! A type-safe wrapper around email addresses that can only be constructed
//! through validation, so any instance is a properly formatted address.

use derive_more::derive::Display;
use serde::{Deserialize, Serialize};

use crate::error::InvalidInput;
use crate::patterns::matches_email;

/// A validated email address that is guaranteed to meet format requirements
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[serde(try_from = "String")]
pub struct Email(String);

impl Email {
    /// Returns the validated email address as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Email {
    type Error = InvalidInput;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if matches_email(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidInput)
        }
    }
}

impl TryFrom<&str> for Email {
    type Error = InvalidInput;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if matches_email(value) {
            Ok(Self(value.to_owned()))
        } else {
            Err(InvalidInput)
        }
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
