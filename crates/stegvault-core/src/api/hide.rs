use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;

use super::{png_output_path, Password};
use crate::media::image::CarrierImage;
use crate::media::{CodecOptions, Persist};
use crate::payload::PayloadSource;
use crate::vault::{self, VaultOptions};
use crate::StegVaultError;

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Default, Debug)]
pub struct HideApi {
    payload: Option<PayloadSource>,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    password: Password,
    options: VaultOptions,
}

impl HideApi {
    pub fn with_options(mut self, options: VaultOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_codec_options(mut self, options: CodecOptions) -> Self {
        self.options.codec = options;
        self
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.payload = Some(PayloadSource::Message(message.to_string()));
        self
    }

    /// an inline message wins over a file set before
    pub fn use_message<S: AsRef<str>>(mut self, message: Option<S>) -> Self {
        if let Some(message) = message {
            self.payload = Some(PayloadSource::Message(message.as_ref().to_string()));
        }
        self
    }

    pub fn with_file<A: AsRef<Path>>(mut self, data_file: A) -> Self {
        self.payload = Some(PayloadSource::File(data_file.as_ref().to_path_buf()));
        self
    }

    pub fn use_file<A: AsRef<Path>>(mut self, data_file: Option<A>) -> Self {
        if let Some(data_file) = data_file {
            if !matches!(self.payload, Some(PayloadSource::Message(_))) {
                self.payload = Some(PayloadSource::File(data_file.as_ref().to_path_buf()));
            }
        }
        self
    }

    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    /// `.png` is appended if the path does not end with it
    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Set the password
    pub fn with_password(mut self, password: &str) -> Self {
        self.password = password.into();
        self
    }

    /// Set the password, `None` or an empty one fails on execute
    pub fn using_password<P: Into<Password>>(mut self, password: P) -> Self {
        self.password = password.into();
        self
    }

    /// Hides the payload and returns the path of the written image.
    ///
    /// Nothing is written on any failure.
    pub fn execute(self) -> Result<PathBuf, StegVaultError> {
        let Some(password) = self.password.as_deref() else {
            return Err(StegVaultError::MissingPassword);
        };
        let Some(payload) = &self.payload else {
            return Err(StegVaultError::MissingPayload);
        };
        let Some(image) = &self.image else {
            return Err(StegVaultError::CarrierNotSet);
        };
        let Some(output) = &self.output else {
            return Err(StegVaultError::TargetNotSet);
        };
        let output = png_output_path(output);

        // a payload file that does not exist counts as no payload at all
        let plaintext = payload.read().map_err(|e| match e {
            StegVaultError::ReadError { source }
                if source.kind() == ErrorKind::NotFound
                    && matches!(payload, PayloadSource::File(_)) =>
            {
                StegVaultError::MissingPayload
            }
            e => e,
        })?;
        let mut carrier = CarrierImage::from_file(image)?;
        vault::hide(&mut carrier, &plaintext, password, &self.options)?;
        carrier.save_as(&output)?;
        debug!("written {output:?}");

        Ok(output)
    }
}
