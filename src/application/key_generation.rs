use crate::domain::{DomainError, DomainResult, KeyMaterial, SecretKey, KEY_LENGTH};
use rand::{rngs::OsRng, CryptoRng, RngCore};
use zeroize::Zeroizing;

/// Random keypair generation, independent of any mnemonic
pub struct KeyGeneration;

impl KeyGeneration {
    /// Generate a fresh keypair from the operating system RNG
    pub fn generate() -> DomainResult<KeyMaterial> {
        Self::generate_with_rng(&mut OsRng)
    }

    /// Generate a fresh keypair from the given random source
    pub fn generate_with_rng<R: RngCore + CryptoRng>(rng: &mut R) -> DomainResult<KeyMaterial> {
        let mut seed = Zeroizing::new([0u8; KEY_LENGTH]);
        rng.try_fill_bytes(&mut seed[..])
            .map_err(|e| DomainError::EntropySourceUnavailable(e.to_string()))?;

        let key = Self::from_seed(*seed);
        tracing::debug!(vk = %key.public_key(), "generated random keypair");
        Ok(key)
    }

    /// Build a keypair from caller-supplied 32-byte seed material
    pub fn from_seed(seed: [u8; KEY_LENGTH]) -> KeyMaterial {
        KeyMaterial::from_secret(SecretKey::from_bytes(seed))
    }
}

/// Generate a new random keypair
pub fn new_wallet() -> DomainResult<KeyMaterial> {
    KeyGeneration::generate()
}

/// Build a keypair from a 32-byte seed
pub fn new_wallet_from_seed(seed: [u8; KEY_LENGTH]) -> KeyMaterial {
    KeyGeneration::from_seed(seed)
}
