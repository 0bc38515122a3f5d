use std::path::{Path, PathBuf};

use log::debug;
use stegvault_core::api::Password;
use stegvault_core::{PayloadSource, VaultOptions};

use crate::CliResult;

/// an inline message wins over a data file
pub fn payload_source(message: Option<String>, data: Option<PathBuf>) -> Option<PayloadSource> {
    match (message, data) {
        (Some(message), _) => Some(PayloadSource::Message(message)),
        (None, Some(file)) => Some(PayloadSource::File(file)),
        (None, None) => None,
    }
}

pub fn run(
    media: &Path,
    write_to_file: &Path,
    message: Option<String>,
    data: Option<PathBuf>,
    password: Password,
    options: &VaultOptions,
) -> CliResult<PathBuf> {
    let payload = payload_source(message, data);
    debug!("encrypting {payload:?} into {media:?}");

    stegvault_core::commands::encrypt(media, write_to_file, payload, password, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_should_win_over_data() {
        assert_eq!(
            payload_source(Some("hi".to_string()), Some("f.txt".into())),
            Some(PayloadSource::Message("hi".to_string()))
        );
        assert_eq!(
            payload_source(None, Some("f.txt".into())),
            Some(PayloadSource::File("f.txt".into()))
        );
        assert_eq!(payload_source(None, None), None);
    }
}
