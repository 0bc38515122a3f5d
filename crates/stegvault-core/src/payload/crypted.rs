use log::debug;
use stegvault_cipher::{
    decrypt, derive_key, encrypt, generate_nonce, generate_salt, KdfParams, Nonce, Salt,
};

use super::envelope::{Envelope, EnvelopeHeader};
use crate::result::Result;

/// Salt and nonce for one sealing, fresh ones for every encryption
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SealingMaterial {
    pub salt: Salt,
    pub nonce: Nonce,
}

impl SealingMaterial {
    pub fn generate() -> Self {
        Self {
            salt: generate_salt(),
            nonce: generate_nonce(),
        }
    }
}

/// Seals plaintext into an [`Envelope`] and opens it again
pub struct CryptedPayloadCodec<'a> {
    password: &'a str,
    kdf: &'a KdfParams,
}

impl<'a> CryptedPayloadCodec<'a> {
    pub fn new(password: &'a str, kdf: &'a KdfParams) -> Self {
        Self { password, kdf }
    }

    pub fn seal(&self, plaintext: &[u8], material: &SealingMaterial) -> Result<Envelope> {
        let header =
            EnvelopeHeader::for_plaintext(material.salt, material.nonce, plaintext.len())?;
        let key = derive_key(self.password, &material.salt, self.kdf)?;
        let ciphertext = encrypt(&key, &material.nonce, plaintext, &header.to_bytes())?;
        debug!("sealed {} bytes", plaintext.len());

        Envelope::from_parts(header, ciphertext)
    }

    /// The key is always derived before the tag is checked.
    pub fn open(&self, envelope: &Envelope) -> Result<Vec<u8>> {
        let header = envelope.header();
        let key = derive_key(self.password, header.salt(), self.kdf)?;
        let plaintext = decrypt(
            &key,
            header.nonce(),
            envelope.ciphertext(),
            &header.to_bytes(),
        )?;
        debug!("opened {} bytes", plaintext.len());

        Ok(plaintext)
    }
}
