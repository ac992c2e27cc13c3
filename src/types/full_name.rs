use derive_more::derive::Display;
use serde::{Deserialize, Serialize};

use crate::error::InvalidInput;
use crate::patterns::matches_full_name;

/// Wrapper type for a full name of at least two capitalized words
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[serde(try_from = "String")]
pub struct FullName(String);

impl FullName {
    /// Returns the validated full name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for FullName {
    type Error = InvalidInput;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if matches_full_name(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidInput)
        }
    }
}

impl TryFrom<&str> for FullName {
    type Error = InvalidInput;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if matches_full_name(value) {
            Ok(Self(value.to_owned()))
        } else {
            Err(InvalidInput)
        }
    }
}

impl AsRef<str> for FullName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_full_names() {
        let valid_cases = vec![
            "Maria Silva",
            "João Pereira",
            "Anne Marie O'Neil",
        ];

        for name in valid_cases {
            assert!(FullName::try_from(name).is_ok(),
                    "Valid full name {} was rejected !", name);
        }
    }

    #[test]
    fn test_invalid_full_names() {
        let invalid_cases = vec![
            "maria silva",
            "Maria",
            "Ana Li",
            "",
        ];

        for name in invalid_cases {
            assert!(FullName::try_from(name).is_err(),
                    "Invalid full name {} was accepted !", name);
        }
    }

    #[test]
    fn test_deserialize_validates() {
        assert!(serde_json::from_str::<FullName>("\"maria silva\"").is_err(),
                "Lowercase full name was deserialized !");
    }

    #[test]
    fn test_full_name_display() {
        let name = FullName::try_from("Maria Silva").unwrap();
        assert_eq!(name.to_string(), "Maria Silva");
        assert_eq!(name.as_str(), "Maria Silva");
    }
}
