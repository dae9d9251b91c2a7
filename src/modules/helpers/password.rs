use bcrypt::{hash, verify, BcryptError};

/// # hash a password
/// run the plaintext through bcrypt with the given work factor.
/// the returned string embeds the salt, so nothing else needs storing.
///
/// ## Arguments
/// * `plaintext` - the password as entered
/// * `cost` - the bcrypt work factor, supplied by the hosting application
///
/// ## Returns
/// * `String` - the salted hash
pub fn hash_password(plaintext: &str, cost: u32) -> Result<String, BcryptError> {
    hash(plaintext, cost)
}

/// # verify a password
/// check a candidate password against a stored bcrypt hash.
pub fn verify_password(candidate: &str, hashed: &str) -> Result<bool, BcryptError> {
    verify(candidate, hashed)
}

#[cfg(test)]
mod tests {
    use super::*;

    // low work factor to keep the tests fast
    const TEST_COST: u32 = 4;

    #[test]
    fn hash_is_not_the_plaintext() {
        let hashed = hash_password("secret-laptime", TEST_COST).unwrap();
        assert_ne!(hashed, "secret-laptime");
        assert!(hashed.starts_with("$2"));
    }

    #[test]
    fn hashes_are_salted() {
        let first = hash_password("secret-laptime", TEST_COST).unwrap();
        let second = hash_password("secret-laptime", TEST_COST).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn verify_accepts_the_original_and_rejects_others() {
        let hashed = hash_password("secret-laptime", TEST_COST).unwrap();
        assert!(verify_password("secret-laptime", &hashed).unwrap());
        assert!(!verify_password("secret-laptimes", &hashed).unwrap());
        assert!(!verify_password("", &hashed).unwrap());
    }
}
