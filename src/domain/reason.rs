//! src/domain/reason.rs

/// Reasons an email address is rejected.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmailError {
    #[error("The email address is empty.")]
    EmptyEmail,
    #[error("The email address is not correctly formatted.")]
    InvalidEmailFormat,
}

/// Reasons a password is rejected.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PasswordError {
    #[error("The password is empty.")]
    EmptyPassword,
    #[error("The password is too short.")]
    PasswordTooShort,
    #[error("The password must contain an uppercase letter.")]
    MissingUppercase,
    #[error("The password must contain a lowercase letter.")]
    MissingLowercase,
    #[error("The password must contain a digit.")]
    MissingDigit,
}
