//! Represents a password that satisfies the complexity rules.
//!
//! Unlike the other wrapper types, `Password` wraps a secret: it implements a
//! redacting `Debug`, no `Display` and no `Serialize`, so the raw value only
//! leaves the type through an explicit [`Password::as_str`] call.

use std::fmt;

use serde::Deserialize;

use crate::error::InvalidInput;
use crate::patterns::matches_password;

/// A password validated against the complexity rules: at least 8 characters
/// from the allowed alphabet, with at least one lowercase letter, one
/// uppercase letter, one digit and one of `@$!%*?&`
#[derive(Clone, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String")]
pub struct Password(String);

impl Password {
    /// Returns the raw password as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Password {
    type Error = InvalidInput;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if matches_password(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidInput)
        }
    }
}

impl TryFrom<&str> for Password {
    type Error = InvalidInput;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if matches_password(value) {
            Ok(Self(value.to_owned()))
        } else {
            Err(InvalidInput)
        }
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_passwords() {
        let valid_cases = vec![
            "Abcdef1!",
            "Str0ng*Password",
        ];

        for password in valid_cases {
            assert!(Password::try_from(password).is_ok(),
                    "Valid password {} was rejected !", password);
        }
    }

    #[test]
    fn test_invalid_passwords() {
        let invalid_cases = vec![
            "abcdef1!",  // no uppercase
            "Abc1!",     // too short
            "Abcdefg1",  // no symbol
            "",
        ];

        for password in invalid_cases {
            assert!(Password::try_from(password).is_err(),
                    "Invalid password {} was accepted !", password);
        }
    }

    #[test]
    fn test_deserialize_validates() {
        let parsed: Password = serde_json::from_str("\"Abcdef1!\"").unwrap();
        assert_eq!(parsed.as_str(), "Abcdef1!");

        assert!(serde_json::from_str::<Password>("\"abcdef1!\"").is_err(),
                "Password without uppercase was deserialized !");
    }

    #[test]
    fn test_debug_is_redacted() {
        let password = Password::try_from("Abcdef1!").unwrap();
        let debug = format!("{:?}", password);
        assert_eq!(debug, "Password(***)");
        assert!(!debug.contains("Abcdef1!"));
    }
}
