use derive_more::derive::Display;
use serde::{Deserialize, Serialize};

use crate::error::InvalidInput;
use crate::patterns::matches_postal_code;

/// Wrapper type for a postal code in `00000-000` form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[serde(try_from = "String")]
pub struct PostalCode(String);

impl PostalCode {
    /// Returns the validated postal code as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PostalCode {
    type Error = InvalidInput;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if matches_postal_code(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidInput)
        }
    }
}

impl TryFrom<&str> for PostalCode {
    type Error = InvalidInput;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if matches_postal_code(value) {
            Ok(Self(value.to_owned()))
        } else {
            Err(InvalidInput)
        }
    }
}

impl AsRef<str> for PostalCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
