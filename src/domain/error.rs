use thiserror::Error;

/// Domain-level errors for wallet operations
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid mnemonic phrase: {0}")]
    InvalidMnemonic(String),

    #[error("Invalid derivation index: {0}")]
    InvalidDerivationIndex(String),

    #[error("Invalid key length: {reason}")]
    InvalidKeyLength {
        reason: String,
    },

    #[error("Invalid signature length: {reason}")]
    InvalidSignatureLength {
        reason: String,
    },

    #[error("Secure random source unavailable: {0}")]
    EntropySourceUnavailable(String),

    #[error("Private key access denied: wallet was created with keep_private")]
    PrivateKeyAccessDenied,

    #[error("Public key does not match private key")]
    KeyMismatch,

    /// A primitive refused its input. HMAC-SHA512 accepts keys of any
    /// length, so SLIP-0010 derivation does not raise this today.
    #[error("Cryptographic operation failed: {0}")]
    CryptoError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DomainError {
    pub(crate) fn key_length(reason: impl Into<String>) -> Self {
        Self::InvalidKeyLength {
            reason: reason.into(),
        }
    }

    pub(crate) fn signature_length(reason: impl Into<String>) -> Self {
        Self::InvalidSignatureLength {
            reason: reason.into(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
