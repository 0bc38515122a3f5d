pub mod crypted;
pub mod envelope;

use std::fmt::{self, Debug, Formatter};
use std::fs;
use std::path::PathBuf;

use log::{debug, error};

pub use crypted::{CryptedPayloadCodec, SealingMaterial};
pub use envelope::{sealed_len, Envelope, EnvelopeHeader, HEADER_LEN, MAGIC, VERSION};

use crate::error::StegVaultError;
use crate::result::Result;

/// Where the plaintext to hide comes from. No type tag is stored,
/// unveiling always yields raw bytes.
#[derive(Clone, PartialEq, Eq)]
pub enum PayloadSource {
    /// inline text, hidden as its UTF-8 bytes
    Message(String),
    File(PathBuf),
}

impl Debug for PayloadSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PayloadSource::Message(m) => write!(f, "Message(<{} bytes>)", m.len()),
            PayloadSource::File(p) => f.debug_tuple("File").field(p).finish(),
        }
    }
}

impl PayloadSource {
    pub fn read(&self) -> Result<Vec<u8>> {
        match self {
            PayloadSource::Message(m) => Ok(m.as_bytes().to_vec()),
            PayloadSource::File(path) => {
                let data = fs::read(path).map_err(|source| {
                    error!("Error reading payload file {path:?}: {source}");
                    StegVaultError::ReadError { source }
                })?;
                debug!("read {} payload bytes from {path:?}", data.len());

                Ok(data)
            }
        }
    }
}
