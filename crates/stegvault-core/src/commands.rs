use std::path::{Path, PathBuf};

use crate::api::Password;
use crate::payload::PayloadSource;
use crate::vault::VaultOptions;
use crate::StegVaultError;

/// Seals the payload with the password into `image`, writes the stego PNG
/// and returns its actual path (`.png` appended if missing).
pub fn encrypt(
    image: &Path,
    output: &Path,
    payload: Option<PayloadSource>,
    password: Password,
    opts: &VaultOptions,
) -> Result<PathBuf, StegVaultError> {
    let api = crate::api::hide::prepare()
        .with_image(image)
        .with_output(output)
        .using_password(password)
        .with_options(opts.clone());

    let api = match payload {
        Some(PayloadSource::Message(message)) => api.with_message(&message),
        Some(PayloadSource::File(file)) => api.with_file(file),
        None => api,
    };

    api.execute()
}

/// Recovers the payload of `image` into `output`, returns `output`.
pub fn decrypt(
    image: &Path,
    output: &Path,
    password: Password,
    opts: &VaultOptions,
) -> Result<PathBuf, StegVaultError> {
    crate::api::unveil::prepare()
        .from_secret_file(image)
        .into_output_file(output)
        .using_password(password)
        .with_options(opts.clone())
        .execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::Persist;
    use crate::test_utils::{light_options, prepare_rgb_image};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn should_encrypt_and_decrypt_through_files() {
        let dir = tempdir().unwrap();
        let image = dir.path().join("carrier.png");
        prepare_rgb_image(100, 100).save_as(&image).unwrap();

        let stego = encrypt(
            &image,
            &dir.path().join("stego"),
            Some(PayloadSource::Message("hello world".to_string())),
            "correct-horse".into(),
            &light_options(),
        )
        .unwrap();
        assert_eq!(stego, dir.path().join("stego.png"));

        let plain = decrypt(
            &stego,
            &dir.path().join("plain.txt"),
            "correct-horse".into(),
            &light_options(),
        )
        .unwrap();
        assert_eq!(fs::read(plain).unwrap(), b"hello world");
    }

    #[test]
    fn should_report_missing_inputs_by_kind() {
        let dir = tempdir().unwrap();
        let image = dir.path().join("carrier.png");

        assert!(matches!(
            encrypt(&image, &image, None, "pw".into(), &light_options()),
            Err(StegVaultError::MissingPayload)
        ));
        assert!(matches!(
            encrypt(
                &image,
                &image,
                Some(PayloadSource::Message("x".to_string())),
                Password::default(),
                &light_options()
            ),
            Err(StegVaultError::MissingPassword)
        ));
    }
}
