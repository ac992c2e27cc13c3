//! Type definitions for the validation system

mod date;
mod email;
mod full_name;
mod password;
mod postal_code;
mod username;

// Re-export commonly used types and functions
pub use date::Date;
pub use email::Email;
pub use full_name::FullName;
pub use password::Password;
pub use postal_code::PostalCode;
pub use username::Username;
