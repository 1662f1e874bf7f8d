use argon2rs::{verifier::Encoded, Argon2, Variant};
use ring::rand::{SecureRandom, SystemRandom};

/// Generate a random 32-byte salt value.
fn random_salt(rng: &SystemRandom) -> [u8; 32] {
    let mut salt = [0; 32];
    rng.fill(&mut salt).expect("system rng failure");
    salt
}

/// Salt and hash a password into the argon2 encoded form. The salt is
/// embedded in the encoding, so the result is the only value that needs
/// to be stored.
pub fn hash_password(rng: &SystemRandom, password: &str) -> String {
    let salt = random_salt(rng);
    let encoded = Encoded::new(
        Argon2::default(Variant::Argon2d),
        password.as_bytes(),
        &salt,
        b"",
        b"",
    );
    String::from_utf8(encoded.to_u8()).expect("argon2 encoding is ascii")
}

/// Check a password against a stored encoded hash. Stored values that do
/// not decode as an argon2 encoding verify false.
pub fn verify_password(stored: &str, password: &str) -> bool {
    match Encoded::from_u8(stored.as_bytes()) {
        Ok(encoded) => encoded.verify(password.as_bytes()),
        Err(_) => false,
    }
}

#[cfg(test)]
pub mod test {
    use super::*;

    #[test]
    fn test_verify() {
        let rng = SystemRandom::new();
        let password = "some_other_password";
        let stored = hash_password(&rng, password);
        assert_eq!(verify_password(&stored, password), true);
        assert_eq!(verify_password(&stored, "not_that_password"), false);
    }

    #[test]
    fn test_hash_is_not_plaintext() {
        let rng = SystemRandom::new();
        let stored = hash_password(&rng, "hunter2");
        assert_ne!(stored, "hunter2");
    }

    #[test]
    fn test_salts_differ() {
        let rng = SystemRandom::new();
        let password = "same_password";
        assert_ne!(hash_password(&rng, password), hash_password(&rng, password));
    }

    #[test]
    fn test_garbage_stored_value() {
        assert_eq!(verify_password("not-an-encoded-hash", "anything"), false);
    }
}
