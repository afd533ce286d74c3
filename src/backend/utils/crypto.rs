// src/backend/utils/crypto.rs
use crate::error::ServiceError;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};

/// bcrypt work factor for stored passwords.
const BCRYPT_COST: u32 = 10;

/// Generates a secure random hex string of a specific byte length.
pub fn generate_random_hex_string(num_bytes: usize) -> String {
    let mut bytes = vec![0u8; num_bytes];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(&bytes)
}

/// Hashes a plaintext password with a per-hash salt.
pub fn hash_password(plaintext: &str) -> Result<String, ServiceError> {
    bcrypt::hash(plaintext, BCRYPT_COST)
        .map_err(|e| ServiceError::InternalError(format!("bcrypt hash failed: {e}")))
}

/// Checks a plaintext password against a stored hash.
pub fn verify_password(plaintext: &str, hash: &str) -> Result<bool, ServiceError> {
    bcrypt::verify(plaintext, hash)
        .map_err(|e| ServiceError::InternalError(format!("bcrypt verify failed: {e}")))
}

/// Calculates the SHA256 hash of byte data and returns it as a hex string.
pub fn calculate_sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_has_requested_entropy() {
        let a = generate_random_hex_string(32);
        let b = generate_random_hex_string(32);
        assert_eq!(a.len(), 64);
        assert_ne!(a, b);
    }

    #[test]
    fn password_round_trip_only_through_verify() {
        let hash = hash_password("s3cret-pass").unwrap();
        assert_ne!(hash, "s3cret-pass");
        assert!(hash.starts_with("$2"));
        assert!(verify_password("s3cret-pass", &hash).unwrap());
        assert!(!verify_password("wrong", &hash).unwrap());
    }

    #[test]
    fn sha256_hex_known_vector() {
        assert_eq!(
            calculate_sha256_hex(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
