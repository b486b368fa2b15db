pub mod argon2;
pub mod bcrypt;
pub mod errors;
pub mod hasher;

pub use self::argon2::Argon2Hasher;
pub use self::bcrypt::BcryptHasher;
pub use errors::PasswordError;
pub use hasher::HashAlgorithm;
pub use hasher::PasswordHasher;
