use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use stegvault_core::api::Password;
use stegvault_core::{CodecOptions, StegVaultError, VaultOptions};

use crate::commands::{decrypt, encrypt};
use crate::CliResult;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Hide a password protected payload in an image
    Encrypt,
    /// Recover the payload of an image
    Decrypt,
}

/// Hides password protected data in PNG images.
///
/// On success the path of the written file is printed,
/// on failure a line `ERROR [CODE]: message` goes to stderr.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct CliArgs {
    #[arg(long, value_enum)]
    pub mode: Mode,

    /// Carrier image (encrypt) or image with a secret (decrypt), used readonly
    #[arg(short = 'i', long = "in", value_name = "image file")]
    pub input: PathBuf,

    /// Stego image (encrypt, `.png` is appended if missing) or plaintext file (decrypt)
    #[arg(short = 'o', long = "out", value_name = "output file")]
    pub output: PathBuf,

    /// Password used to en-/decrypt the data
    #[arg(short, long, value_name = "password")]
    pub password: Option<String>,

    /// Ask for the password on the terminal if not given by --password
    #[arg(long)]
    pub ask_password: bool,

    /// A text message that will be hidden, wins over --data
    #[arg(short, long, value_name = "text message")]
    pub message: Option<String>,

    /// File to hide in the image
    #[arg(short, long, value_name = "data file", env = "PLAIN_INPUT_FILE")]
    pub data: Option<PathBuf>,

    /// Experimental: image color channel step increment
    #[arg(long = "x-color-step-increment", default_value = "1")]
    pub color_step_increment: usize,

    /// Experimental: also use the alpha channel of images that have one
    #[arg(long = "x-use-alpha-channel")]
    pub use_alpha_channel: bool,
}

impl CliArgs {
    /// runs the requested mode and returns the written file
    pub fn run(self) -> CliResult<PathBuf> {
        let options = self.options();
        let confirm = self.mode == Mode::Encrypt;
        let password = if self.password.is_none() && self.ask_password {
            ask_for_password(confirm)?
        } else {
            self.password.clone().into()
        };

        match self.mode {
            Mode::Encrypt => encrypt::run(
                &self.input,
                &self.output,
                self.message,
                self.data,
                password,
                &options,
            ),
            Mode::Decrypt => decrypt::run(&self.input, &self.output, password, &options),
        }
    }

    pub fn options(&self) -> VaultOptions {
        VaultOptions::default().with_codec_options(
            CodecOptions::default()
                .with_color_channel_step_increment(self.color_step_increment)
                .with_alpha_channel(self.use_alpha_channel),
        )
    }
}

/// prompts on the terminal, with a second prompt for confirmation if `confirm` is true
pub fn ask_for_password(confirm: bool) -> CliResult<Password> {
    let prompt = dialoguer::Password::new().with_prompt("Password");
    let prompt = if confirm {
        prompt.with_confirmation("Repeat password", "Error: the passwords don't match.")
    } else {
        prompt
    };

    let password = prompt.interact().map_err(prompt_error)?;

    Ok(password.into())
}

fn prompt_error(e: dialoguer::Error) -> StegVaultError {
    match e {
        dialoguer::Error::IO(source) => StegVaultError::ReadError { source },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn should_parse_the_invocation_contract() {
        let args = CliArgs::try_parse_from([
            "stegvault",
            "--mode",
            "encrypt",
            "--in",
            "carrier.png",
            "--out",
            "stego",
            "--password",
            "correct-horse",
            "--message",
            "hello world",
        ])
        .unwrap();

        assert_eq!(args.mode, Mode::Encrypt);
        assert_eq!(args.input, PathBuf::from("carrier.png"));
        assert_eq!(args.output, PathBuf::from("stego"));
        assert_eq!(args.password.as_deref(), Some("correct-horse"));
        assert_eq!(args.message.as_deref(), Some("hello world"));
        assert_eq!(args.options(), VaultOptions::default());
    }

    #[test]
    fn should_map_experimental_flags_to_codec_options() {
        let args = CliArgs::try_parse_from([
            "stegvault",
            "--mode",
            "decrypt",
            "--in",
            "a.png",
            "--out",
            "b.txt",
            "--x-color-step-increment",
            "3",
            "--x-use-alpha-channel",
        ])
        .unwrap();

        let codec = args.options().codec;
        assert_eq!(codec.color_channel_step_increment, 3);
        assert!(!codec.skip_alpha_channel);
    }

    #[test]
    fn prompt_failures_are_read_errors() {
        let e = dialoguer::Error::IO(std::io::Error::new(
            std::io::ErrorKind::NotConnected,
            "not a terminal",
        ));

        let e = prompt_error(e);
        assert!(matches!(e, StegVaultError::ReadError { .. }));
        assert_eq!(e.code().exit_code(), 1);
        assert!(e.to_string().contains("not a terminal"));
    }

    #[test]
    fn should_reject_unknown_modes() {
        let result = CliArgs::try_parse_from([
            "stegvault", "--mode", "hide", "--in", "a.png", "--out", "b.png",
        ]);

        assert!(result.is_err());
    }
}
