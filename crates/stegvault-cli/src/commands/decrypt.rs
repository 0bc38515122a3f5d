use std::path::{Path, PathBuf};

use log::debug;
use stegvault_core::api::Password;
use stegvault_core::VaultOptions;

use crate::CliResult;

pub fn run(
    media: &Path,
    output_file: &Path,
    password: Password,
    options: &VaultOptions,
) -> CliResult<PathBuf> {
    debug!("decrypting {media:?} with {password:?}");

    stegvault_core::commands::decrypt(media, output_file, password, options)
}
