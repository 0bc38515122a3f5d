//! Binary layout of the data hidden in a carrier
//!
//! ```text
//! +-------+---------+------+-------+----------------+----------------------+
//! | magic | version | salt | nonce | ciphertext_len | ciphertext + tag     |
//! | 4     | 1       | 32   | 24    | 4 (u32 BE)     | ciphertext_len       |
//! +-------+---------+------+-------+----------------+----------------------+
//! ```
//!
//! The serialized header is the associated data of the AEAD,
//! any modification of it fails authentication.

use std::io::{Cursor, Read, Write};

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use stegvault_cipher::{Nonce, Salt, NONCE_LEN, SALT_LEN, TAG_LEN};

use crate::error::StegVaultError;
use crate::result::Result;

pub const MAGIC: [u8; 4] = *b"SGVT";
pub const VERSION: u8 = 1;
pub const HEADER_LEN: usize = MAGIC.len() + 1 + SALT_LEN + NONCE_LEN + 4;

/// total number of bytes hidden for a plaintext of `plaintext_len` bytes
pub const fn sealed_len(plaintext_len: usize) -> usize {
    HEADER_LEN + plaintext_len + TAG_LEN
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvelopeHeader {
    salt: Salt,
    nonce: Nonce,
    ciphertext_len: u32,
}

impl EnvelopeHeader {
    pub fn new(salt: Salt, nonce: Nonce, ciphertext_len: usize) -> Result<Self> {
        if ciphertext_len < TAG_LEN {
            return Err(StegVaultError::MalformedEnvelope(
                "ciphertext shorter than authentication tag",
            ));
        }
        let ciphertext_len = u32::try_from(ciphertext_len)
            .map_err(|_| StegVaultError::MalformedEnvelope("ciphertext length exceeds u32"))?;

        Ok(Self {
            salt,
            nonce,
            ciphertext_len,
        })
    }

    /// header for sealing `plaintext_len` bytes
    pub fn for_plaintext(salt: Salt, nonce: Nonce, plaintext_len: usize) -> Result<Self> {
        Self::new(salt, nonce, plaintext_len.saturating_add(TAG_LEN))
    }

    /// Checks magic and version first, only then the remaining fields are read.
    ///
    /// Anything that does not start like an envelope is [`StegVaultError::NotEncrypted`].
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < HEADER_LEN {
            return Err(StegVaultError::NotEncrypted);
        }
        let mut cursor = Cursor::new(bytes);

        let mut magic = [0u8; 4];
        cursor.read_exact(&mut magic)?;
        if magic != MAGIC {
            return Err(StegVaultError::NotEncrypted);
        }
        if cursor.read_u8()? != VERSION {
            return Err(StegVaultError::NotEncrypted);
        }

        let mut salt = [0u8; SALT_LEN];
        cursor.read_exact(&mut salt)?;
        let mut nonce = [0u8; NONCE_LEN];
        cursor.read_exact(&mut nonce)?;
        let ciphertext_len = cursor.read_u32::<BigEndian>()?;

        Self::new(salt, nonce, ciphertext_len as usize)
    }

    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_all(&MAGIC)?;
        writer.write_u8(VERSION)?;
        writer.write_all(&self.salt)?;
        writer.write_all(&self.nonce)?;
        writer.write_u32::<BigEndian>(self.ciphertext_len)?;

        Ok(())
    }

    /// serialized header, also used as associated data
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(HEADER_LEN);
        buf.extend_from_slice(&MAGIC);
        buf.push(VERSION);
        buf.extend_from_slice(&self.salt);
        buf.extend_from_slice(&self.nonce);
        buf.extend_from_slice(&self.ciphertext_len.to_be_bytes());
        buf
    }

    pub fn salt(&self) -> &Salt {
        &self.salt
    }

    pub fn nonce(&self) -> &Nonce {
        &self.nonce
    }

    pub fn ciphertext_len(&self) -> usize {
        self.ciphertext_len as usize
    }

    /// header plus ciphertext
    pub fn envelope_len(&self) -> usize {
        HEADER_LEN + self.ciphertext_len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    header: EnvelopeHeader,
    ciphertext: Vec<u8>,
}

impl Envelope {
    pub fn from_parts(header: EnvelopeHeader, ciphertext: Vec<u8>) -> Result<Self> {
        if header.ciphertext_len() != ciphertext.len() {
            return Err(StegVaultError::MalformedEnvelope(
                "ciphertext does not match declared length",
            ));
        }

        Ok(Self { header, ciphertext })
    }

    /// Parses a header and the declared ciphertext, trailing bytes are ignored.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let header = EnvelopeHeader::parse(bytes)?;
        let ciphertext = bytes
            .get(HEADER_LEN..header.envelope_len())
            .ok_or(StegVaultError::MalformedEnvelope("truncated ciphertext"))?
            .to_vec();

        Ok(Self { header, ciphertext })
    }

    pub fn serialize(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(self.len());
        self.header.write_to(&mut buf)?;
        buf.extend_from_slice(&self.ciphertext);

        Ok(buf)
    }

    pub fn header(&self) -> &EnvelopeHeader {
        &self.header
    }

    pub fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }

    pub fn len(&self) -> usize {
        self.header.envelope_len()
    }

    /// never true, an envelope has at least a header
    pub fn is_empty(&self) -> bool {
        false
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn parsing_arbitrary_bytes_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..200)) {
            let _ = Envelope::parse(&bytes);
        }

        #[test]
        fn parsed_envelopes_serialize_to_their_prefix(
            salt in any::<[u8; SALT_LEN]>(),
            nonce in any::<[u8; NONCE_LEN]>(),
            ciphertext in prop::collection::vec(any::<u8>(), TAG_LEN..128),
        ) {
            let header = EnvelopeHeader::new(salt, nonce, ciphertext.len()).unwrap();
            let bytes = Envelope::from_parts(header, ciphertext).unwrap().serialize().unwrap();

            let parsed = Envelope::parse(&bytes).unwrap();
            prop_assert_eq!(parsed.serialize().unwrap(), bytes);
        }
    }
}
