use super::error::{DomainError, DomainResult};
use crate::crypto::Ed25519;
use secrecy::SecretString;
use std::fmt;
use zeroize::Zeroizing;

/// Byte length of Ed25519 public and private keys
pub const KEY_LENGTH: usize = 32;

/// Byte length of an Ed25519 signature
pub const SIGNATURE_LENGTH: usize = 64;

/// Decode exactly `N` bytes from a hex string, rejecting any other length.
pub(crate) fn decode_hex_array<const N: usize>(
    input: &str,
    what: &str,
) -> Result<[u8; N], String> {
    if input.len() != N * 2 {
        return Err(format!(
            "{} must be {} hex characters, got {}",
            what,
            N * 2,
            input.len()
        ));
    }

    let mut out = [0u8; N];
    hex::decode_to_slice(input, &mut out).map_err(|e| format!("{} is not valid hex: {}", what, e))?;
    Ok(out)
}

/// Ed25519 verifying key
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey([u8; KEY_LENGTH]);

impl PublicKey {
    pub fn from_bytes(bytes: [u8; KEY_LENGTH]) -> Self {
        Self(bytes)
    }

    pub fn from_hex(vk: &str) -> DomainResult<Self> {
        decode_hex_array(vk, "public key")
            .map(Self)
            .map_err(DomainError::key_length)
    }

    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.0
    }

    /// Lowercase hex, 64 characters
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", self.to_hex())
    }
}

/// Ed25519 signing key seed. Wiped from memory on drop.
#[derive(Clone)]
pub struct SecretKey(Zeroizing<[u8; KEY_LENGTH]>);

impl SecretKey {
    pub fn from_bytes(bytes: [u8; KEY_LENGTH]) -> Self {
        Self(Zeroizing::new(bytes))
    }

    pub fn from_hex(sk: &str) -> DomainResult<Self> {
        // Decode straight into the zeroizing buffer so no plain copy is left behind
        let mut secret = Self(Zeroizing::new([0u8; KEY_LENGTH]));
        if sk.len() != KEY_LENGTH * 2 {
            return Err(DomainError::key_length(format!(
                "private key must be {} hex characters, got {}",
                KEY_LENGTH * 2,
                sk.len()
            )));
        }
        hex::decode_to_slice(sk, &mut secret.0[..])
            .map_err(|e| DomainError::key_length(format!("private key is not valid hex: {}", e)))?;
        Ok(secret)
    }

    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.0
    }

    pub fn to_hex(&self) -> SecretString {
        SecretString::new(hex::encode(&self.0[..]))
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey([REDACTED])")
    }
}

/// A matched Ed25519 keypair
#[derive(Clone)]
pub struct KeyMaterial {
    /// Always the image of `secret_key`
    public_key: PublicKey,
    secret_key: SecretKey,
    /// Set when the key came from a mnemonic
    derivation_path: Option<String>,
}

impl KeyMaterial {
    /// Build key material from a private key, re-deriving the public half
    pub fn from_secret(secret_key: SecretKey) -> Self {
        let public_key = Ed25519::public_key_of(&secret_key);
        Self {
            public_key,
            secret_key,
            derivation_path: None,
        }
    }

    /// Build key material from both halves, checking they belong together
    pub fn from_parts(public_key: PublicKey, secret_key: SecretKey) -> DomainResult<Self> {
        let material = Self::from_secret(secret_key);
        if material.public_key != public_key {
            return Err(DomainError::KeyMismatch);
        }
        Ok(material)
    }

    /// Parse a private key given as 64 hex characters
    pub fn from_secret_hex(sk: &str) -> DomainResult<Self> {
        SecretKey::from_hex(sk).map(Self::from_secret)
    }

    /// Set the derivation path
    pub fn with_derivation_path(mut self, path: impl Into<String>) -> Self {
        self.derivation_path = Some(path.into());
        self
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    pub fn secret_key(&self) -> &SecretKey {
        &self.secret_key
    }

    /// Derivation path used to produce this key, if any
    pub fn derivation_path(&self) -> Option<&str> {
        self.derivation_path.as_deref()
    }

    /// Public key as lowercase hex
    pub fn vk(&self) -> String {
        self.public_key.to_hex()
    }

    /// Private key as lowercase hex
    pub fn sk(&self) -> SecretString {
        self.secret_key.to_hex()
    }
}

impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyMaterial")
            .field("public_key", &self.public_key)
            .field("secret_key", &self.secret_key)
            .field("derivation_path", &self.derivation_path)
            .finish()
    }
}
