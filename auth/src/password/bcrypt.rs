use super::errors::PasswordError;

/// Bcrypt password hashing in modular crypt format (`$2b$<cost>$...`).
#[derive(Debug, Clone, Copy)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    /// Prefixes of the bcrypt revisions accepted on verification.
    pub const PREFIXES: [&'static str; 3] = ["$2a$", "$2b$", "$2y$"];

    /// Create a hasher with the given work factor (4..=31).
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a plaintext password with a random salt.
    ///
    /// # Errors
    /// * `HashingFailed` - Cost out of range or hashing failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        bcrypt::hash(password, self.cost).map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored bcrypt hash.
    ///
    /// # Returns
    /// True if password matches, false otherwise
    ///
    /// # Errors
    /// * `VerificationFailed` - Stored hash is malformed
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        bcrypt::verify(password, hash).map_err(|e| {
            PasswordError::VerificationFailed(format!("Invalid password hash: {}", e))
        })
    }

    /// Whether the stored hash looks like a bcrypt hash.
    pub fn recognizes(hash: &str) -> bool {
        Self::PREFIXES.iter().any(|prefix| hash.starts_with(prefix))
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}
