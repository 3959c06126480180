pub mod keys;

pub use keys::{derive_password_digest, digests_match, generate_random_salt};
