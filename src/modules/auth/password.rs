use std::fmt;

/// Symbols that satisfy the special-character rule
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Minimum password length in characters
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Password strength rule that was violated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordError {
    TooShort,
    NoUppercase,
    NoLowercase,
    NoNumber,
    NoSpecialChar,
}

impl fmt::Display for PasswordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PasswordError::TooShort => write!(
                f,
                "Password must be at least {} characters long.",
                MIN_PASSWORD_LENGTH
            ),
            PasswordError::NoUppercase => {
                write!(f, "Password must contain at least one uppercase letter.")
            }
            PasswordError::NoLowercase => {
                write!(f, "Password must contain at least one lowercase letter.")
            }
            PasswordError::NoNumber => write!(f, "Password must contain at least one number."),
            PasswordError::NoSpecialChar => {
                write!(f, "Password must contain at least one special character.")
            }
        }
    }
}

impl std::error::Error for PasswordError {}

/// Function to validate password strength
///
/// Rules are checked in a fixed order and the first one violated is reported.
pub fn validate_password(password: &str) -> Result<(), PasswordError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(PasswordError::TooShort);
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(PasswordError::NoUppercase);
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(PasswordError::NoLowercase);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(PasswordError::NoNumber);
    }
    if !password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)) {
        return Err(PasswordError::NoSpecialChar);
    }
    Ok(())
}
