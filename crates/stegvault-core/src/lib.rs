//! # StegVault Core API
//!
//! Hides a password protected payload in the least significant bits of an image.
//! The payload is encrypted with XChaCha20Poly1305 under an Argon2id derived key
//! and stored together with salt and nonce in an [`Envelope`][env].
//!
//! The layers, from top to bottom:
//! - [`api::hide`] and [`api::unveil`], builders working on files
//! - [`vault`], the same pipelines on an in-memory [`CarrierImage`]
//! - [`payload`] and [`media::image`], envelope format and bit codec
//!
//! # Usage Examples
//!
//! ```rust
//! use image::{DynamicImage, Rgb, RgbImage};
//! use stegvault_core::media::Persist;
//! use stegvault_core::{CarrierImage, KdfParams, VaultOptions};
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let carrier = temp_dir.path().join("carrier.png");
//! let img = RgbImage::from_fn(100, 100, |x, y| Rgb([x as u8, y as u8, 42]));
//! CarrierImage::from_image(DynamicImage::ImageRgb8(img))
//!     .save_as(&carrier)
//!     .expect("Failed to write carrier");
//!
//! // both sides have to use the same options
//! let options = VaultOptions::default().with_kdf_params(KdfParams::new(1024, 1, 1));
//!
//! let stego = stegvault_core::api::hide::prepare()
//!     .with_message("hello world")
//!     .with_password("correct-horse")
//!     .with_image(&carrier)
//!     .with_output(temp_dir.path().join("stego"))
//!     .with_options(options.clone())
//!     .execute()
//!     .expect("Failed to hide message in image");
//! assert!(stego.ends_with("stego.png"));
//!
//! let plaintext = stegvault_core::api::unveil::prepare()
//!     .from_secret_file(&stego)
//!     .using_password("correct-horse")
//!     .with_options(options)
//!     .reveal()
//!     .expect("Failed to unveil message from image");
//! assert_eq!(plaintext, b"hello world");
//! ```
//!
//! [env]: ./payload/struct.Envelope.html

#![warn(clippy::redundant_else)]

pub mod api;
pub mod commands;
pub mod error;
pub mod media;
pub mod payload;
pub mod result;
pub mod vault;

pub use crate::error::{ErrorCode, StegVaultError};
pub use crate::media::image::CarrierImage;
pub use crate::media::CodecOptions;
pub use crate::payload::PayloadSource;
pub use crate::vault::VaultOptions;
pub use stegvault_cipher::KdfParams;
