use thiserror::Error;

/// Error type for password operations.
///
/// A stored hash that does not match the plaintext is not an error; it is
/// reported as `Ok(false)` by the verifiers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Password verification failed: {0}")]
    VerificationFailed(String),

    #[error("Unsupported password hash format")]
    UnsupportedHash,
}
