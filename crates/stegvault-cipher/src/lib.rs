//! # Password based sealing
//!
//! Argon2id turns a password and a random salt into a 256 bit key,
//! XChaCha20Poly1305 encrypts and authenticates with it.
//!
//! ```rust
//! use stegvault_cipher::{decrypt, derive_key, encrypt, generate_nonce, generate_salt, KdfParams};
//!
//! let params = KdfParams::new(1024, 1, 1);
//! let salt = generate_salt();
//! let nonce = generate_nonce();
//!
//! let key = derive_key("hunter42", &salt, &params).unwrap();
//! let sealed = encrypt(&key, &nonce, b"attack at dawn", b"header").unwrap();
//!
//! let key = derive_key("hunter42", &salt, &params).unwrap();
//! let opened = decrypt(&key, &nonce, &sealed, b"header").unwrap();
//! assert_eq!(opened, b"attack at dawn");
//! ```

use std::fmt::{self, Debug, Formatter};

use argon2::{Algorithm, Argon2, ParamsBuilder, Version};
use chacha20poly1305::aead::{Aead, Payload};
use chacha20poly1305::{Key, KeyInit, XChaCha20Poly1305, XNonce};
use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::Zeroizing;

pub mod error;

pub use crate::error::CipherError;

pub const NONCE_LEN: usize = 24;
pub const SALT_LEN: usize = 32;
pub const KEY_LEN: usize = 32;
/// Poly1305 authentication tag appended to every ciphertext
pub const TAG_LEN: usize = 16;

pub type Result<T> = std::result::Result<T, CipherError>;
pub type Salt = [u8; SALT_LEN];
pub type Nonce = [u8; NONCE_LEN];

/// Symmetric key material, wiped from memory on drop.
pub struct DerivedKey(Zeroizing<[u8; KEY_LEN]>);

impl DerivedKey {
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl Debug for DerivedKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "DerivedKey(<redacted>)")
    }
}

/// Cost parameters of the Argon2id key derivation.
///
/// They are not part of the sealed data, hence encryption and decryption
/// have to agree on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KdfParams {
    /// memory size in KiB
    pub m_cost_kib: u32,
    /// number of passes
    pub t_cost: u32,
    /// degree of parallelism
    pub p_cost: u32,
}

impl Default for KdfParams {
    fn default() -> Self {
        Self {
            m_cost_kib: argon2::Params::DEFAULT_M_COST,
            // increased time costs to make it more secure
            t_cost: 10,
            p_cost: 1,
        }
    }
}

impl KdfParams {
    pub const fn new(m_cost_kib: u32, t_cost: u32, p_cost: u32) -> Self {
        Self {
            m_cost_kib,
            t_cost,
            p_cost,
        }
    }

    fn argon2<'key>(&self) -> Result<Argon2<'key>> {
        let params = ParamsBuilder::default()
            .m_cost(self.m_cost_kib)
            .t_cost(self.t_cost)
            .p_cost(self.p_cost)
            .output_len(KEY_LEN)
            .build()
            .map_err(CipherError::KeyDerivationParamError)?;

        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

/// derives the key for `password` and `salt`, the same inputs always give the same key
pub fn derive_key(password: &str, salt: &Salt, params: &KdfParams) -> Result<DerivedKey> {
    let mut output_key_material = Zeroizing::new([0u8; KEY_LEN]);
    params
        .argon2()?
        .hash_password_into(password.as_bytes(), salt, &mut *output_key_material)
        .map_err(CipherError::KeyDerivationError)?;

    Ok(DerivedKey(output_key_material))
}

/// encrypts `plaintext` and returns the ciphertext with the tag appended.
/// `aad` is authenticated but not encrypted.
pub fn encrypt(key: &DerivedKey, nonce: &Nonce, plaintext: &[u8], aad: &[u8]) -> Result<Vec<u8>> {
    XChaCha20Poly1305::new(Key::from_slice(key.as_bytes()))
        .encrypt(
            XNonce::from_slice(nonce),
            Payload {
                msg: plaintext,
                aad,
            },
        )
        .map_err(|_| CipherError::EncryptionError)
}

/// verifies the tag and decrypts, see [`encrypt`]
pub fn decrypt(key: &DerivedKey, nonce: &Nonce, ciphertext: &[u8], aad: &[u8]) -> Result<Vec<u8>> {
    XChaCha20Poly1305::new(Key::from_slice(key.as_bytes()))
        .decrypt(
            XNonce::from_slice(nonce),
            Payload {
                msg: ciphertext,
                aad,
            },
        )
        .map_err(|_| CipherError::AuthenticationFailed)
}

pub fn generate_salt() -> Salt {
    let mut salt = [0u8; SALT_LEN];
    OsRng.fill_bytes(&mut salt);
    salt
}

/// fresh random nonce, 192 bits are plenty to never repeat one by chance
pub fn generate_nonce() -> Nonce {
    let mut nonce = [0u8; NONCE_LEN];
    OsRng.fill_bytes(&mut nonce);
    nonce
}
