//! Credential primitives backing the security ports.

mod bcrypt_password_hasher;

pub use bcrypt_password_hasher::BcryptPasswordHasher;
