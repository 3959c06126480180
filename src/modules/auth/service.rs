use super::error::AuthError;
use super::password::validate_password;
use super::store::{Credential, CredentialStore};
use crate::modules::encryption::keys::{derive_password_digest, digests_match, generate_random_salt};
use crate::modules::utils::logging::log_auth_event;

/// Registration and login over an owned credential store
///
/// The store and its salt are created together and dropped together, so
/// digests are only ever compared against ones produced with the same salt.
pub struct AuthService {
    store: CredentialStore,
    salt: Vec<u8>,
    iterations: u32,
}

impl AuthService {
    /// Create a service with an empty store and a fresh random salt
    pub fn new(iterations: u32) -> Self {
        Self::with_salt(generate_random_salt(), iterations)
    }

    pub fn with_salt(salt: Vec<u8>, iterations: u32) -> Self {
        Self {
            store: CredentialStore::new(),
            salt,
            iterations: iterations.max(1),
        }
    }

    pub fn store(&self) -> &CredentialStore {
        &self.store
    }

    pub fn is_registered(&self, username: &str) -> bool {
        self.store.exists(username.trim())
    }

    /// Hex digest of `password` under this service's salt
    pub fn digest(&self, password: &str) -> String {
        derive_password_digest(password, &self.salt, self.iterations)
    }

    /// Register a new user
    ///
    /// Checks run in order: empty username, duplicate username, then password
    /// strength. Nothing is stored unless all of them pass.
    pub fn register(&mut self, username: &str, password: &str) -> Result<(), AuthError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(AuthError::EmptyUsername);
        }

        if self.store.exists(username) {
            log_auth_event("register", username, false, Some("duplicate username"));
            return Err(AuthError::DuplicateUser(username.to_string()));
        }

        if let Err(reason) = validate_password(password) {
            log_auth_event("register", username, false, Some("weak password"));
            return Err(AuthError::WeakPassword(reason));
        }

        let credential = Credential::new(username, self.digest(password));
        self.store.put(credential)?;

        log_auth_event("register", username, true, None);
        Ok(())
    }

    /// Check a username/password pair, returning the stored credential on success
    pub fn authenticate(&self, username: &str, password: &str) -> Result<&Credential, AuthError> {
        let username = username.trim();
        let credential = match self.store.get(username) {
            Ok(credential) => credential,
            Err(_) => {
                log_auth_event("login", username, false, Some("unknown user"));
                return Err(AuthError::AuthFailure);
            }
        };

        if !digests_match(&credential.password_hash, &self.digest(password)) {
            log_auth_event("login", username, false, Some("digest mismatch"));
            return Err(AuthError::AuthFailure);
        }

        log_auth_event("login", username, true, None);
        Ok(credential)
    }

    /// True only if the user exists and the password digest matches
    pub fn login(&self, username: &str, password: &str) -> bool {
        self.authenticate(username, password).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::password::PasswordError;

    const TEST_ITERATIONS: u32 = 10;

    fn service() -> AuthService {
        AuthService::new(TEST_ITERATIONS)
    }

    #[test]
    fn test_register_then_login() {
        let mut auth = service();
        auth.register("alice", "P@ssw0rd").unwrap();

        assert!(auth.login("alice", "P@ssw0rd"));
        assert!(!auth.login("alice", "wrong"));
        assert!(!auth.login("bob", "anything"));
    }

    #[test]
    fn test_duplicate_registration_keeps_original() {
        let mut auth = service();
        auth.register("alice", "P@ssw0rd").unwrap();
        let original_hash = auth.store().get("alice").unwrap().password_hash.clone();

        let result = auth.register("alice", "N3w!Passw0rd");
        assert_eq!(result, Err(AuthError::DuplicateUser("alice".to_string())));

        assert_eq!(auth.store().len(), 1);
        assert_eq!(auth.store().get("alice").unwrap().password_hash, original_hash);
        assert!(auth.login("alice", "P@ssw0rd"));
        assert!(!auth.login("alice", "N3w!Passw0rd"));
    }

    #[test]
    fn test_duplicate_check_runs_before_password_check() {
        let mut auth = service();
        auth.register("alice", "P@ssw0rd").unwrap();
        assert_eq!(
            auth.register("alice", "weak"),
            Err(AuthError::DuplicateUser("alice".to_string()))
        );
    }

    #[test]
    fn test_weak_passwords_report_first_missing_rule() {
        let cases = [
            ("Sh0rt!", PasswordError::TooShort),
            ("p@ssw0rd", PasswordError::NoUppercase),
            ("P@SSW0RD", PasswordError::NoLowercase),
            ("P@ssword", PasswordError::NoNumber),
            ("Passw0rd", PasswordError::NoSpecialChar),
        ];

        let mut auth = service();
        for (password, expected) in cases {
            assert_eq!(
                auth.register("carol", password),
                Err(AuthError::WeakPassword(expected)),
                "password {:?}",
                password
            );
        }
        assert!(auth.store().is_empty());
    }

    #[test]
    fn test_empty_username_rejected() {
        let mut auth = service();
        assert_eq!(auth.register("   ", "P@ssw0rd"), Err(AuthError::EmptyUsername));
        assert!(auth.store().is_empty());
    }

    #[test]
    fn test_usernames_are_trimmed() {
        let mut auth = service();
        auth.register("  dave ", "P@ssw0rd").unwrap();
        assert!(auth.is_registered("dave"));
        assert!(auth.login("dave", "P@ssw0rd"));
        assert!(auth.login(" dave", "P@ssw0rd"));
    }

    #[test]
    fn test_digest_is_deterministic_and_never_plaintext() {
        let mut auth = service();
        assert_eq!(auth.digest("P@ssw0rd"), auth.digest("P@ssw0rd"));
        assert_ne!(auth.digest("P@ssw0rd"), auth.digest("P@ssw0rd1"));

        auth.register("erin", "P@ssw0rd").unwrap();
        let stored = &auth.store().get("erin").unwrap().password_hash;
        assert_ne!(stored, "P@ssw0rd");
        assert_eq!(stored, &auth.digest("P@ssw0rd"));
    }

    #[test]
    fn test_same_salt_same_digest_across_services() {
        let salt = vec![42u8; 16];
        let first = AuthService::with_salt(salt.clone(), TEST_ITERATIONS);
        let second = AuthService::with_salt(salt, TEST_ITERATIONS);
        assert_eq!(first.digest("P@ssw0rd"), second.digest("P@ssw0rd"));
    }

    #[test]
    fn test_shared_salt_gives_equal_passwords_equal_digests() {
        let mut auth = service();
        auth.register("alice", "P@ssw0rd").unwrap();
        auth.register("bob", "P@ssw0rd").unwrap();

        let alice = &auth.store().get("alice").unwrap().password_hash;
        let bob = &auth.store().get("bob").unwrap().password_hash;
        assert_eq!(alice, bob);
        assert!(auth.login("alice", "P@ssw0rd"));
        assert!(auth.login("bob", "P@ssw0rd"));
    }

    #[test]
    fn test_login_rejects_near_miss_passwords() {
        let mut auth = service();
        auth.register("alice", "P@ssw0rd").unwrap();
        for attempt in ["P@ssw0r", "P@ssw0rd!", "p@ssw0rd", "", "P@ssw0rd\n"] {
            assert!(!auth.login("alice", attempt), "attempt {:?}", attempt);
        }
        assert!(auth.login("alice", "P@ssw0rd"));
    }

    #[test]
    fn test_authenticate_hides_which_field_failed() {
        let mut auth = service();
        auth.register("alice", "P@ssw0rd").unwrap();
        assert_eq!(
            auth.authenticate("alice", "wrong").unwrap_err(),
            auth.authenticate("nobody", "P@ssw0rd").unwrap_err()
        );
    }
}
