use derive_more::derive::Display;
use thiserror::Error;

/// Error returned when an input string does not match the expected format
#[derive(Debug, Clone, Copy, Display, Error)]
pub struct InvalidInput;
