use derive_more::derive::Display;
use serde::{Deserialize, Serialize};

use crate::error::InvalidInput;
use crate::patterns::matches_date;

/// Wrapper type for a `dd/mm/yyyy` date string.
///
/// Day and month ranges are validated independently: `31/02/2024` is accepted
/// and no leap-year rule is applied.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[serde(try_from = "String")]
pub struct Date(String);

impl Date {
    /// Returns the validated date as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Date {
    type Error = InvalidInput;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if matches_date(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidInput)
        }
    }
}

impl TryFrom<&str> for Date {
    type Error = InvalidInput;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if matches_date(value) {
            Ok(Self(value.to_owned()))
        } else {
            Err(InvalidInput)
        }
    }
}

impl AsRef<str> for Date {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date() {
        assert!(Date::try_from("31/12/2024").is_ok());
        assert!(Date::try_from("32/01/2024").is_err());
        assert!(Date::try_from("01/13/2024").is_err());
        assert!(Date::try_from("2024-12-31").is_err());

        // Field ranges only: no calendar logic
        assert!(Date::try_from("29/02/2023").is_ok());
    }

    #[test]
    fn test_deserialize_validates() {
        assert!(serde_json::from_str::<Date>("\"32/01/2024\"").is_err(),
                "Out-of-range day was deserialized !");
    }
}
