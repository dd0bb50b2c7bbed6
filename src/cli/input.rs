use lamden_wallet::crypto::{normalize_mnemonic, validate_mnemonic};
use lamden_wallet::{DomainError, DomainResult};
use secrecy::SecretString;
use std::path::{Path, PathBuf};

/// Read inputs for commands from flags or files
pub struct InputReader;

impl InputReader {
    /// Normalize and validate a mnemonic given on the command line
    pub fn read_mnemonic(phrase: &str) -> DomainResult<SecretString> {
        let normalized = normalize_mnemonic(phrase);
        validate_mnemonic(&normalized)?;
        Ok(SecretString::new(normalized))
    }

    /// Read a mnemonic from a plain text file
    pub fn read_mnemonic_from_file(path: &Path) -> DomainResult<SecretString> {
        let contents = SecretString::new(std::fs::read_to_string(path)?);
        Self::read_mnemonic(secrecy::ExposeSecret::expose_secret(&contents))
    }

    /// Message bytes from `--message` or `--message-file`, exactly one of which must be set
    pub fn read_message(message: Option<&str>, message_file: Option<&PathBuf>) -> DomainResult<Vec<u8>> {
        match (message, message_file) {
            (Some(text), None) => Ok(text.as_bytes().to_vec()),
            (None, Some(path)) => Ok(std::fs::read(path)?),
            _ => Err(DomainError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "provide exactly one of --message or --message-file",
            ))),
        }
    }
}
