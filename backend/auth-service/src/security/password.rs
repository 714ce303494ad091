/// Password hashing and verification using Argon2id.
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::{AppError, Result};

/// Hash a password with Argon2id and a fresh random salt.
///
/// The PHC output string embeds the salt and cost parameters, so
/// verification needs nothing beyond the stored hash. Default Argon2id
/// parameters track current work-factor guidance.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| {
            tracing::error!(error = %e, "password hashing failed");
            AppError::Internal("Internal server error".to_string())
        })?
        .to_string();

    Ok(password_hash)
}

/// Verify a password against a stored PHC hash.
///
/// Returns a plain boolean: a malformed or truncated hash verifies as
/// `false` rather than erroring, so callers cannot tell "no such hash"
/// apart from "wrong password" by error shape. The underlying comparison
/// is constant-time.
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(password_hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hash = hash_password("correct horse battery staple").expect("should hash");
        assert!(verify_password("correct horse battery staple", &hash));
    }

    #[test]
    fn test_verify_wrong_password() {
        let hash = hash_password("password123").expect("should hash");
        assert!(!verify_password("password124", &hash));
    }

    #[test]
    fn test_verify_malformed_hash_is_false_not_error() {
        assert!(!verify_password("anything", "not-a-phc-string"));
        assert!(!verify_password("anything", ""));
    }

    #[test]
    fn test_hash_is_not_plaintext() {
        let hash = hash_password("hunter2").expect("should hash");
        assert_ne!(hash, "hunter2");
        assert!(hash.starts_with("$argon2"));
    }

    #[test]
    fn test_same_password_different_salts() {
        let hash1 = hash_password("password123").expect("should hash");
        let hash2 = hash_password("password123").expect("should hash");
        assert_ne!(hash1, hash2);
    }

    #[test]
    fn test_single_char_password_hashes() {
        // Registration accepts any non-empty password; hashing must not
        // impose its own strength policy.
        let hash = hash_password("x").expect("should hash");
        assert!(verify_password("x", &hash));
    }
}
