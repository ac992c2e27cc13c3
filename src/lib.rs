//! Root module for the format validation library.
//! Exposes compiled patterns, predicate functions and validated wrapper types.

pub mod patterns;

mod error;
mod types;

// Re-export commonly used types and functions
pub use error::InvalidInput;
pub use types::{Date, Email, FullName, Password, PostalCode, Username};
