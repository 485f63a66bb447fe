use bcrypt::{hash, verify};

use crate::interceptors::AppError;

/// Work factor for bcrypt. Matches what existing stored hashes were
/// produced with, so do not change it without a rehash migration.
pub const HASH_COST: u32 = 10;

/// Hash a password using bcrypt
pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, HASH_COST)
        .map_err(|e| AppError::InternalError(format!("Failed to hash password: {}", e)))
}

/// Verify a password against a hash
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    verify(password, hash)
        .map_err(|e| AppError::InternalError(format!("Failed to verify password: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_salted_and_verifiable() {
        let hashed = hash_password("Secret1").unwrap();
        assert_ne!(hashed, "Secret1");
        assert!(verify_password("Secret1", &hashed).unwrap());
        assert!(!verify_password("wrong", &hashed).unwrap());

        // Salted: a second hash of the same input differs
        let again = hash_password("Secret1").unwrap();
        assert_ne!(hashed, again);
    }

    #[test]
    fn hash_uses_configured_cost() {
        let hashed = hash_password("Secret1").unwrap();
        assert!(hashed.starts_with("$2b$10$"), "unexpected hash prefix: {}", hashed);
    }
}
