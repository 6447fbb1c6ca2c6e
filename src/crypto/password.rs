use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// Hashes a password with a single unsalted SHA-256 pass, hex encoded.
///
/// Good enough for two hardcoded demo accounts. Not a password KDF.
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

/// Verifies a password against a hash produced by [`hash_password`].
pub fn verify_password(password: &str, hash: &str) -> bool {
    let computed = hash_password(password);
    computed.as_bytes().ct_eq(hash.as_bytes()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_lowercase_hex_sha256() {
        assert_eq!(
            hash_password("password123"),
            "ef92b778bafe771e89245b89ecbc08a44a4e166c06659911881f383d4473e94f"
        );
    }

    #[test]
    fn verify_accepts_only_the_hashed_password() {
        let hash = hash_password("userpass");
        assert!(verify_password("userpass", &hash));
        assert!(!verify_password("userpass ", &hash));
        assert!(!verify_password("", &hash));
        assert!(!verify_password("userpass", &hash.to_uppercase()));
    }
}
