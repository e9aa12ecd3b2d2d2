use thiserror::Error;

/// Reasons a raw name is rejected. The `Display` strings are shown to the
/// user verbatim, so they stay in plain language.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a name")]
    EmptyInput,

    #[error("Name must be at least 2 characters long")]
    TooShort,

    #[error("Name can only contain letters, numbers, dots, hyphens, and underscores")]
    InvalidCharacters,
}
