use std::fmt;

use super::password::PasswordError;

/// Errors raised by registration and login
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    DuplicateUser(String),
    EmptyUsername,
    WeakPassword(PasswordError),
    UnknownUser(String),
    AuthFailure,
}

impl From<PasswordError> for AuthError {
    fn from(error: PasswordError) -> Self {
        AuthError::WeakPassword(error)
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::DuplicateUser(_) => {
                write!(f, "Username already exists. Please try again.")
            }
            AuthError::EmptyUsername => write!(f, "Username cannot be empty."),
            AuthError::WeakPassword(reason) => write!(f, "{}", reason),
            AuthError::UnknownUser(username) => write!(f, "No such user: {}", username),
            // Never says which field was wrong
            AuthError::AuthFailure => {
                write!(f, "Invalid username or password. Please try again.")
            }
        }
    }
}

impl std::error::Error for AuthError {}
