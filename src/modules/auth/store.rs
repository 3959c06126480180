use std::collections::HashMap;

use super::error::AuthError;
use crate::modules::utils::time::get_current_timestamp;

/// Stored authentication details for one user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub username: String,
    pub password_hash: String,
    pub created_at: u64,
}

impl Credential {
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
            created_at: get_current_timestamp(),
        }
    }
}

/// In-memory credential table, lives as long as its owner
#[derive(Debug, Default)]
pub struct CredentialStore {
    credentials: HashMap<String, Credential>,
}

impl CredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exists(&self, username: &str) -> bool {
        self.credentials.contains_key(username)
    }

    /// Insert a credential; an existing entry for the same username is never replaced
    pub fn put(&mut self, credential: Credential) -> Result<(), AuthError> {
        if self.exists(&credential.username) {
            return Err(AuthError::DuplicateUser(credential.username));
        }
        self.credentials
            .insert(credential.username.clone(), credential);
        Ok(())
    }

    pub fn get(&self, username: &str) -> Result<&Credential, AuthError> {
        self.credentials
            .get(username)
            .ok_or_else(|| AuthError::UnknownUser(username.to_string()))
    }

    pub fn len(&self) -> usize {
        self.credentials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.credentials.is_empty()
    }
}
