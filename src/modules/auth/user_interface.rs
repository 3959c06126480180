// src/modules/auth/user_interface.rs
use std::io;

use super::error::AuthError;
use super::password::validate_password;
use super::service::AuthService;
use crate::modules::utils::io::Console;
use crate::modules::utils::time::format_timestamp;

/// Result of the interactive registration flow
#[derive(Debug, PartialEq, Eq)]
pub enum RegistrationOutcome {
    Registered(String),
    Back, // User typed 'back' at the username prompt
}

/// Function to handle interactive registration
///
/// Re-prompts for the username on empty or duplicate names and for the
/// password until it passes every strength rule.
pub fn handle_interactive_registration<C: Console + ?Sized>(
    console: &mut C,
    auth: &mut AuthService,
) -> io::Result<RegistrationOutcome> {
    console.show("");
    console.show("=== User Registration ===");

    // Get username with validation
    let username = loop {
        let input = console.read_line("Enter a username (or 'back' for menu): ")?;

        if input.eq_ignore_ascii_case("back") {
            return Ok(RegistrationOutcome::Back);
        }
        if input.is_empty() {
            console.show(&AuthError::EmptyUsername.to_string());
            continue;
        }
        if auth.is_registered(&input) {
            console.show(&AuthError::DuplicateUser(input).to_string());
            continue;
        }

        break input;
    };

    // Get password with validation
    let password = loop {
        let password = console.read_secret("Enter a password: ")?;

        match validate_password(&password) {
            Ok(()) => break password,
            Err(reason) => console.show(&reason.to_string()),
        }
    };

    match auth.register(&username, &password) {
        Ok(()) => {
            console.show("Registration successful!");
            Ok(RegistrationOutcome::Registered(username))
        }
        // Both inputs were checked above, the service is the final word
        Err(e) => {
            console.show(&e.to_string());
            Ok(RegistrationOutcome::Back)
        }
    }
}

/// Function to handle interactive login
///
/// Returns the authenticated username, or `None` after a failed attempt.
pub fn handle_interactive_login<C: Console + ?Sized>(
    console: &mut C,
    auth: &AuthService,
) -> io::Result<Option<String>> {
    let username = console.read_line("Enter your username: ")?;
    let password = console.read_secret("Enter your password: ")?;

    match auth.authenticate(&username, &password) {
        Ok(credential) => {
            console.show("Login successful!");
            console.show(&format!(
                "Welcome, {}! Registered {}.",
                credential.username,
                format_timestamp(credential.created_at)
            ));
            Ok(Some(credential.username.clone()))
        }
        Err(e) => {
            console.show(&e.to_string());
            Ok(None)
        }
    }
}
