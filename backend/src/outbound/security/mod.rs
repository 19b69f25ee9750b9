//! Credential hashing adapters.

mod argon2_password_verifier;

pub use argon2_password_verifier::{Argon2PasswordVerifier, hash_password};
