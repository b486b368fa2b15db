use serde::Deserialize;

use super::argon2::Argon2Hasher;
use super::bcrypt::BcryptHasher;
use super::errors::PasswordError;

/// Scheme used for newly produced hashes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    #[default]
    Bcrypt,
    Argon2,
}

/// Password hashing front-end.
///
/// New hashes use the configured algorithm. Verification picks the scheme from
/// the stored hash itself, so existing bcrypt and argon2 hashes both keep
/// working when the configured algorithm changes.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    algorithm: HashAlgorithm,
    bcrypt: BcryptHasher,
    argon2: Argon2Hasher,
}

impl PasswordHasher {
    /// Create a hasher producing bcrypt hashes at the default cost.
    pub fn new() -> Self {
        Self::with_algorithm(HashAlgorithm::Bcrypt)
    }

    /// Create a hasher producing hashes with the given algorithm.
    pub fn with_algorithm(algorithm: HashAlgorithm) -> Self {
        Self {
            algorithm,
            bcrypt: BcryptHasher::default(),
            argon2: Argon2Hasher,
        }
    }

    /// Create a bcrypt hasher with an explicit work factor.
    pub fn bcrypt(cost: u32) -> Self {
        Self {
            algorithm: HashAlgorithm::Bcrypt,
            bcrypt: BcryptHasher::new(cost),
            argon2: Argon2Hasher,
        }
    }

    /// Hash a plaintext password for storage.
    ///
    /// # Arguments
    /// * `password` - Plaintext password
    ///
    /// # Returns
    /// Salted hash string (modular crypt format for bcrypt, PHC for argon2)
    ///
    /// # Errors
    /// * `HashingFailed` - Password hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        match self.algorithm {
            HashAlgorithm::Bcrypt => self.bcrypt.hash(password),
            HashAlgorithm::Argon2 => self.argon2.hash(password),
        }
    }

    /// Verify a password against a stored hash.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `hash` - Stored password hash
    ///
    /// # Returns
    /// True if password matches, false otherwise
    ///
    /// # Errors
    /// * `UnsupportedHash` - Stored hash is empty or of an unknown scheme
    /// * `VerificationFailed` - Stored hash is malformed
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        if BcryptHasher::recognizes(hash) {
            self.bcrypt.verify(password, hash)
        } else if hash.starts_with(Argon2Hasher::PREFIX) {
            self.argon2.verify(password, hash)
        } else {
            Err(PasswordError::UnsupportedHash)
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
