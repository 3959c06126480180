use crate::HmacSha256;
use pbkdf2::pbkdf2;
use rand::Rng;
use subtle::ConstantTimeEq;

/// Length in bytes of the per-store salt
pub const SALT_LEN: usize = 16;

/// Length in bytes of a derived password digest (hex doubles it)
pub const DIGEST_LEN: usize = 32;

/// Function to generate a random salt for PBKDF2
pub fn generate_random_salt() -> Vec<u8> {
    let mut rng = rand::thread_rng();
    (0..SALT_LEN).map(|_| rng.gen()).collect()
}

/// Function to derive a hex-encoded digest from a password using PBKDF2-HMAC-SHA256
pub fn derive_password_digest(password: &str, salt: &[u8], iterations: u32) -> String {
    let mut digest = [0u8; DIGEST_LEN];

    pbkdf2::<HmacSha256>(password.as_bytes(), salt, iterations.max(1), &mut digest);

    hex::encode(digest)
}

/// Constant-time equality of two hex digests
///
/// Malformed hex or a length mismatch never matches.
pub fn digests_match(expected: &str, actual: &str) -> bool {
    match (hex::decode(expected), hex::decode(actual)) {
        (Ok(expected), Ok(actual)) if expected.len() == actual.len() => {
            expected.ct_eq(&actual).into()
        }
        _ => false,
    }
}
