pub use argon2::Error as Argon2Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CipherError {
    #[error("Key derivation error")]
    KeyDerivationError(Argon2Error),

    #[error("Key derivation parameter error")]
    KeyDerivationParamError(Argon2Error),

    /// Covers a wrong password as well as tampered ciphertext, both are indistinguishable.
    #[error("Authentication failed")]
    AuthenticationFailed,

    #[error("Encryption error")]
    EncryptionError,
}
