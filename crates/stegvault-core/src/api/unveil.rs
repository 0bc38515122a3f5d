use std::path::{Path, PathBuf};

use log::debug;

use super::Password;
use crate::media::image::CarrierImage;
use crate::media::{write_atomically, CodecOptions};
use crate::vault::{self, VaultOptions};
use crate::StegVaultError;

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_media: Option<PathBuf>,
    output_file: Option<PathBuf>,
    password: Password,
    options: VaultOptions,
}

impl UnveilApi {
    /// Use the given options, they must match the ones used for hiding
    pub fn with_options(mut self, options: VaultOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_codec_options(mut self, options: CodecOptions) -> Self {
        self.options.codec = options;
        self
    }

    /// This is the secret image that contains the data to be unveiled
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// This is the file the plaintext will be saved to, written as is
    pub fn into_output_file(mut self, output_file: impl AsRef<Path>) -> Self {
        self.output_file = Some(output_file.as_ref().to_path_buf());
        self
    }

    /// Set the password used for decrypting the data.
    /// If `None` is passed, unveiling stops with [`StegVaultError::PasswordRequired`]
    /// once an envelope is found.
    pub fn using_password<P: Into<Password>>(mut self, password: P) -> Self {
        self.password = password.into();
        self
    }

    /// Unveils the plaintext without writing it anywhere
    pub fn reveal(&self) -> Result<Vec<u8>, StegVaultError> {
        let Some(secret_media) = &self.secret_media else {
            return Err(StegVaultError::CarrierNotSet);
        };

        let carrier = CarrierImage::from_file(secret_media)?;
        vault::unveil(&carrier, self.password.as_deref(), &self.options)
    }

    /// Execute the unveil process and blocks until it is finished,
    /// returns the path of the written plaintext.
    pub fn execute(self) -> Result<PathBuf, StegVaultError> {
        let Some(output_file) = &self.output_file else {
            return Err(StegVaultError::TargetNotSet);
        };

        let plaintext = self.reveal()?;
        write_atomically(output_file, |w| Ok(w.write_all(&plaintext)?))?;
        debug!("written {} bytes to {output_file:?}", plaintext.len());

        Ok(output_file.clone())
    }
}
