//! In memory pipelines that seal a payload into a [`CarrierImage`] and open it again.

use log::debug;
use stegvault_cipher::{KdfParams, TAG_LEN};

use crate::error::StegVaultError;
use crate::media::image::{embed_bits, extract_bits, CarrierImage};
use crate::media::CodecOptions;
use crate::payload::{
    sealed_len, CryptedPayloadCodec, Envelope, EnvelopeHeader, SealingMaterial, HEADER_LEN,
};
use crate::result::Result;

/// Everything both sides have to agree on, next to the password.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VaultOptions {
    pub codec: CodecOptions,
    pub kdf: KdfParams,
}

impl VaultOptions {
    pub fn with_codec_options(mut self, codec: CodecOptions) -> Self {
        self.codec = codec;
        self
    }

    pub fn with_kdf_params(mut self, kdf: KdfParams) -> Self {
        self.kdf = kdf;
        self
    }
}

/// number of bytes the carrier can hold, envelope overhead included
pub fn capacity(carrier: &CarrierImage, opts: &VaultOptions) -> usize {
    carrier.capacity(&opts.codec)
}

/// largest plaintext that still fits
pub fn max_payload_len(carrier: &CarrierImage, opts: &VaultOptions) -> usize {
    capacity(carrier, opts).saturating_sub(HEADER_LEN + TAG_LEN)
}

/// Seals `plaintext` with fresh salt and nonce and hides it in the carrier.
pub fn hide(
    carrier: &mut CarrierImage,
    plaintext: &[u8],
    password: &str,
    opts: &VaultOptions,
) -> Result<()> {
    hide_with(
        carrier,
        plaintext,
        password,
        opts,
        &SealingMaterial::generate(),
    )
}

/// Like [`hide`] with the given salt and nonce, the result is fully deterministic.
///
/// Never reuse `material` for different plaintexts.
pub fn hide_with(
    carrier: &mut CarrierImage,
    plaintext: &[u8],
    password: &str,
    opts: &VaultOptions,
    material: &SealingMaterial,
) -> Result<()> {
    let needed = sealed_len(plaintext.len());
    let capacity = capacity(carrier, opts);
    if needed > capacity {
        return Err(StegVaultError::CapacityExceeded { needed, capacity });
    }
    debug!("hiding {needed} of {capacity} bytes");

    let envelope = CryptedPayloadCodec::new(password, &opts.kdf).seal(plaintext, material)?;
    embed_bits(carrier, &opts.codec, &envelope.serialize()?)
}

/// Recovers the plaintext hidden by [`hide`].
///
/// Without a password only the presence of an envelope is checked,
/// which then ends in [`StegVaultError::PasswordRequired`].
pub fn unveil(
    carrier: &CarrierImage,
    password: Option<&str>,
    opts: &VaultOptions,
) -> Result<Vec<u8>> {
    let header = extract_bits(carrier, &opts.codec, 0, HEADER_LEN * 8).map_err(|e| match e {
        StegVaultError::InsufficientCapacity { .. } => StegVaultError::NotEncrypted,
        e => e,
    })?;
    let header = EnvelopeHeader::parse(&header)?;

    let Some(password) = password else {
        return Err(StegVaultError::PasswordRequired);
    };

    let capacity = capacity(carrier, opts);
    if header.envelope_len() > capacity {
        return Err(StegVaultError::MalformedEnvelope(
            "declared length exceeds carrier capacity",
        ));
    }
    debug!(
        "found envelope of {} bytes, capacity {capacity}",
        header.envelope_len()
    );

    let ciphertext = extract_bits(
        carrier,
        &opts.codec,
        HEADER_LEN * 8,
        header.ciphertext_len() * 8,
    )?;
    let envelope = Envelope::from_parts(header, ciphertext)?;

    CryptedPayloadCodec::new(password, &opts.kdf).open(&envelope)
}
