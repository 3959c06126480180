pub mod error;
pub mod password;
pub mod service;
pub mod store;
pub mod user_interface;

// Re-export the main types and functions
pub use error::AuthError;
pub use password::{validate_password, PasswordError};
pub use service::AuthService;
pub use store::{Credential, CredentialStore};
pub use user_interface::{
    handle_interactive_login, handle_interactive_registration, RegistrationOutcome,
};
