use std::fmt::{self, Display, Formatter};

use thiserror::Error;

pub use stegvault_cipher::CipherError;

#[derive(Error, Debug)]
pub enum StegVaultError {
    /// Represents an unreadable or undecodable carrier image, for example a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents a failure when encoding the output image
    #[error("Image encoding error")]
    ImageEncodingError,

    /// The bit codec was asked for more bits than the carrier offers
    #[error("Insufficient capacity: {requested_bits} bits requested but only {available_bits} bits available")]
    InsufficientCapacity {
        requested_bits: usize,
        available_bits: usize,
    },

    /// The sealed payload does not fit into the carrier, detected before anything is written
    #[error("Data too large to fit into image (capacity bytes={capacity}, needed={needed})")]
    CapacityExceeded { needed: usize, capacity: usize },

    /// No recognized envelope, the image was never sealed or is damaged beyond recognition
    #[error("extraction failed: image does not contain enough embedded data")]
    NotEncrypted,

    /// A recognized envelope was found but no password was given
    #[error("image payload appears encrypted or invalid; provide --password to decrypt")]
    PasswordRequired,

    /// Wrong password or tampered image, intentionally not distinguishable
    #[error("decryption failed: MAC check failed (wrong password or corrupted image)")]
    AuthenticationFailed,

    /// Header fields are inconsistent, e.g. the declared length exceeds the carrier
    #[error("malformed envelope: {0}")]
    MalformedEnvelope(&'static str),

    #[error("Key derivation error")]
    KeyDerivationError(#[source] CipherError),

    #[error("Encryption error")]
    EncryptionError(#[source] CipherError),

    #[error("encryption requires --password")]
    MissingPassword,

    #[error("expected plaintext via --message or file via env PLAIN_INPUT_FILE")]
    MissingPayload,

    #[error("No carrier image set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    /// Represents a failure to read from input.
    #[error("Read error: {source}")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error: {source}")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl From<CipherError> for StegVaultError {
    fn from(e: CipherError) -> Self {
        match e {
            CipherError::AuthenticationFailed => Self::AuthenticationFailed,
            CipherError::EncryptionError => Self::EncryptionError(e),
            CipherError::KeyDerivationError(_) | CipherError::KeyDerivationParamError(_) => {
                Self::KeyDerivationError(e)
            }
        }
    }
}

/// Stable machine readable classification of a [`StegVaultError`].
///
/// Callers should match on these codes, the human readable messages may change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    MissingPassword,
    MissingPayload,
    NotEncrypted,
    AuthenticationFailed,
    PasswordRequired,
    CapacityExceeded,
    MalformedEnvelope,
    InsufficientCapacity,
    InvalidImage,
    ImageEncoding,
    KeyDerivation,
    Encryption,
    Usage,
    Io,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::MissingPassword => "MISSING_PASSWORD",
            ErrorCode::MissingPayload => "MISSING_PAYLOAD",
            ErrorCode::NotEncrypted => "NOT_ENCRYPTED",
            ErrorCode::AuthenticationFailed => "AUTHENTICATION_FAILED",
            ErrorCode::PasswordRequired => "PASSWORD_REQUIRED",
            ErrorCode::CapacityExceeded => "CAPACITY_EXCEEDED",
            ErrorCode::MalformedEnvelope => "MALFORMED_ENVELOPE",
            ErrorCode::InsufficientCapacity => "INSUFFICIENT_CAPACITY",
            ErrorCode::InvalidImage => "INVALID_IMAGE",
            ErrorCode::ImageEncoding => "IMAGE_ENCODING",
            ErrorCode::KeyDerivation => "KEY_DERIVATION",
            ErrorCode::Encryption => "ENCRYPTION",
            ErrorCode::Usage => "USAGE",
            ErrorCode::Io => "IO",
        }
    }

    /// process exit status, the first ones are kept compatible with the former python engine
    pub fn exit_code(&self) -> u8 {
        match self {
            ErrorCode::MissingPassword => 2,
            ErrorCode::MissingPayload => 3,
            ErrorCode::NotEncrypted => 4,
            ErrorCode::AuthenticationFailed => 5,
            ErrorCode::PasswordRequired => 6,
            ErrorCode::CapacityExceeded => 7,
            ErrorCode::MalformedEnvelope => 8,
            _ => 1,
        }
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl StegVaultError {
    pub fn code(&self) -> ErrorCode {
        match self {
            StegVaultError::InvalidImageMedia => ErrorCode::InvalidImage,
            StegVaultError::ImageEncodingError => ErrorCode::ImageEncoding,
            StegVaultError::InsufficientCapacity { .. } => ErrorCode::InsufficientCapacity,
            StegVaultError::CapacityExceeded { .. } => ErrorCode::CapacityExceeded,
            StegVaultError::NotEncrypted => ErrorCode::NotEncrypted,
            StegVaultError::PasswordRequired => ErrorCode::PasswordRequired,
            StegVaultError::AuthenticationFailed => ErrorCode::AuthenticationFailed,
            StegVaultError::MalformedEnvelope(_) => ErrorCode::MalformedEnvelope,
            StegVaultError::KeyDerivationError(_) => ErrorCode::KeyDerivation,
            StegVaultError::EncryptionError(_) => ErrorCode::Encryption,
            StegVaultError::MissingPassword => ErrorCode::MissingPassword,
            StegVaultError::MissingPayload => ErrorCode::MissingPayload,
            StegVaultError::CarrierNotSet | StegVaultError::TargetNotSet => ErrorCode::Usage,
            StegVaultError::ReadError { .. }
            | StegVaultError::WriteError { .. }
            | StegVaultError::IoError(_) => ErrorCode::Io,
        }
    }
}
