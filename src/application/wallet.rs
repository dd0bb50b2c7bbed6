use super::key_generation::KeyGeneration;
use crate::crypto::Ed25519;
use crate::domain::{DomainError, DomainResult, KeyMaterial, PublicKey, SecretKey, KEY_LENGTH};
use rand::{rngs::OsRng, CryptoRng, RngCore};
use secrecy::{ExposeSecret, SecretString};
use std::fmt;

/// Where a wallet's private key comes from
#[derive(Clone, Default)]
enum KeySource {
    #[default]
    Random,
    SecretHex(SecretString),
    Seed(SecretKey),
    Material(KeyMaterial),
}

/// Options for [`create_wallet`]
#[derive(Clone, Default)]
pub struct WalletOptions {
    source: KeySource,
    keep_private: bool,
}

impl WalletOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an existing private key (64 hex characters)
    pub fn with_sk(mut self, sk: SecretString) -> Self {
        self.source = KeySource::SecretHex(sk);
        self
    }

    /// Use raw 32-byte seed material as the private key
    pub fn with_seed(mut self, seed: [u8; KEY_LENGTH]) -> Self {
        self.source = KeySource::Seed(SecretKey::from_bytes(seed));
        self
    }

    /// Wrap key material that already exists
    pub fn with_key_material(mut self, key_material: KeyMaterial) -> Self {
        self.source = KeySource::Material(key_material);
        self
    }

    /// Hide the private key from every accessor
    pub fn keep_private(mut self, keep_private: bool) -> Self {
        self.keep_private = keep_private;
        self
    }
}

impl fmt::Debug for WalletOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source = match self.source {
            KeySource::Random => "random",
            KeySource::SecretHex(_) => "sk",
            KeySource::Seed(_) => "seed",
            KeySource::Material(_) => "key_material",
        };
        f.debug_struct("WalletOptions")
            .field("source", &source)
            .field("keep_private", &self.keep_private)
            .finish()
    }
}

/// A keypair bound to sign and verify operations.
///
/// When created with `keep_private`, the private key can still sign but
/// is never handed out.
#[derive(Clone)]
pub struct Wallet {
    key_material: KeyMaterial,
    keep_private: bool,
}

impl Wallet {
    /// Public key as lowercase hex
    pub fn vk(&self) -> String {
        self.key_material.vk()
    }

    pub fn public_key(&self) -> &PublicKey {
        self.key_material.public_key()
    }

    /// Private key as lowercase hex, unless the wallet keeps it private
    pub fn sk(&self) -> DomainResult<SecretString> {
        if self.keep_private {
            tracing::warn!(vk = %self.key_material.public_key(), "denied private key access");
            return Err(DomainError::PrivateKeyAccessDenied);
        }
        Ok(self.key_material.sk())
    }

    pub fn is_private(&self) -> bool {
        self.keep_private
    }

    /// Sign a message with this wallet's private key
    pub fn sign(&self, message: &[u8]) -> String {
        hex::encode(Ed25519::sign(self.key_material.secret_key(), message))
    }

    /// Verify a signature against this wallet's public key
    pub fn verify(&self, message: &[u8], signature: &str) -> DomainResult<bool> {
        let signature = Ed25519::signature_from_hex(signature)?;
        Ok(Ed25519::verify(self.key_material.public_key(), message, &signature))
    }
}

impl fmt::Debug for Wallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wallet")
            .field("vk", &self.vk())
            .field("keep_private", &self.keep_private)
            .finish_non_exhaustive()
    }
}

/// Create a wallet, generating a fresh keypair when no key is supplied
pub fn create_wallet(options: WalletOptions) -> DomainResult<Wallet> {
    create_wallet_with_rng(options, &mut OsRng)
}

/// Create a wallet, drawing from `rng` only if a keypair must be generated
pub fn create_wallet_with_rng<R: RngCore + CryptoRng>(
    options: WalletOptions,
    rng: &mut R,
) -> DomainResult<Wallet> {
    let key_material = match options.source {
        KeySource::Random => KeyGeneration::generate_with_rng(rng)?,
        KeySource::SecretHex(sk) => KeyMaterial::from_secret_hex(sk.expose_secret())?,
        KeySource::Seed(secret) => KeyMaterial::from_secret(secret),
        KeySource::Material(key_material) => key_material,
    };

    tracing::debug!(
        vk = %key_material.public_key(),
        keep_private = options.keep_private,
        "created wallet"
    );

    Ok(Wallet {
        key_material,
        keep_private: options.keep_private,
    })
}
