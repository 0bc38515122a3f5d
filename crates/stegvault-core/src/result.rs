use crate::error::StegVaultError;

pub type Result<T> = std::result::Result<T, StegVaultError>;
