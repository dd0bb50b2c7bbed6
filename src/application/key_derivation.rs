use crate::crypto::{generate_mnemonic_with_rng, mnemonic_to_seed, normalize_mnemonic, parse_mnemonic, Slip10};
use crate::domain::{DerivationIndex, DomainResult, KeyMaterial, LamdenKeyPath};
use rand::{rngs::OsRng, CryptoRng, RngCore};
use secrecy::{ExposeSecret, SecretString};

/// A keypair derived from a mnemonic, together with its derivation inputs
#[derive(Debug, Clone)]
pub struct MnemonicWallet {
    key_material: KeyMaterial,
    /// Normalized phrase the keys were derived from
    mnemonic: SecretString,
    derivation_index: DerivationIndex,
    /// BIP39 seed, hex encoded
    seed: SecretString,
}

impl MnemonicWallet {
    pub fn key_material(&self) -> &KeyMaterial {
        &self.key_material
    }

    /// Normalized phrase the keys were derived from
    pub fn mnemonic(&self) -> &SecretString {
        &self.mnemonic
    }

    pub fn derivation_index(&self) -> DerivationIndex {
        self.derivation_index
    }

    /// BIP39 seed as 128 hex characters
    pub fn seed(&self) -> &SecretString {
        &self.seed
    }

    /// Hand the keypair over, e.g. to build a [`Wallet`](super::Wallet)
    pub fn into_key_material(self) -> KeyMaterial {
        self.key_material
    }

    pub fn vk(&self) -> String {
        self.key_material.vk()
    }

    pub fn sk(&self) -> SecretString {
        self.key_material.sk()
    }
}

/// Mnemonic-based hierarchical key derivation
pub struct KeyDerivation;

impl KeyDerivation {
    /// Derive the keypair at `index` from a mnemonic phrase
    pub fn derive_from_mnemonic(mnemonic: &str, index: DerivationIndex) -> DomainResult<MnemonicWallet> {
        let normalized = SecretString::new(normalize_mnemonic(mnemonic));
        let parsed = parse_mnemonic(normalized.expose_secret())?;
        let seed = mnemonic_to_seed(&parsed);

        let path = LamdenKeyPath::new(index);
        let secret = Slip10::derive(&seed[..], &path.segments())?;
        let key_material = KeyMaterial::from_secret(secret).with_derivation_path(path.to_string_path());

        tracing::debug!(
            path = %path.to_string_path(),
            vk = %key_material.public_key(),
            "derived keypair from mnemonic"
        );

        Ok(MnemonicWallet {
            key_material,
            mnemonic: normalized,
            derivation_index: index,
            seed: SecretString::new(hex::encode(&seed[..])),
        })
    }

    /// Generate a random mnemonic from `rng`, then derive the keypair at `index`
    pub fn derive_with_random_mnemonic<R: RngCore + CryptoRng>(
        rng: &mut R,
        index: DerivationIndex,
    ) -> DomainResult<MnemonicWallet> {
        let mnemonic = generate_mnemonic_with_rng(rng)?;
        tracing::debug!("generated new 24-word mnemonic");
        Self::derive_from_mnemonic(mnemonic.expose_secret(), index)
    }
}

/// Derive a wallet from `mnemonic` at `index`.
///
/// A missing mnemonic is generated from the OS RNG; a missing index is 0.
pub fn new_wallet_from_mnemonic(
    mnemonic: Option<&str>,
    index: Option<DerivationIndex>,
) -> DomainResult<MnemonicWallet> {
    let index = index.unwrap_or_default();
    match mnemonic {
        Some(phrase) => KeyDerivation::derive_from_mnemonic(phrase, index),
        None => KeyDerivation::derive_with_random_mnemonic(&mut OsRng, index),
    }
}
