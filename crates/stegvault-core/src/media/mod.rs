pub mod codec_options;
pub mod image;
mod primitives;

use std::io::{BufWriter, Write};
use std::path::Path;

use log::error;
use tempfile::NamedTempFile;

pub use codec_options::CodecOptions;
pub use primitives::*;

use crate::error::StegVaultError;
use crate::result::Result;

pub trait Persist {
    fn save_as(&self, _: &Path) -> Result<()>;
}

/// Writes into a staging file next to `target` that replaces `target` only
/// after `write` succeeded. On any error the staging file is removed again.
pub(crate) fn write_atomically<F>(target: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut dyn Write) -> Result<()>,
{
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut staging = NamedTempFile::new_in(dir).map_err(|source| {
        error!("Error creating staging file in {dir:?}: {source}");
        StegVaultError::WriteError { source }
    })?;

    {
        let mut writer = BufWriter::new(staging.as_file_mut());
        write(&mut writer)?;
        writer
            .flush()
            .map_err(|source| StegVaultError::WriteError { source })?;
    }

    staging.persist(target).map_err(|e| {
        error!("Error persisting {target:?}: {}", e.error);
        StegVaultError::WriteError { source: e.error }
    })?;

    Ok(())
}
