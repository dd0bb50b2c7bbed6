// Library exports for testing and external integration

pub mod application;
pub mod crypto;
pub mod domain;

// Re-export commonly used items
pub use application::{
    create_wallet, create_wallet_with_rng, new_wallet, new_wallet_from_mnemonic,
    new_wallet_from_seed, KeyDerivation, KeyGeneration, MnemonicWallet, Wallet, WalletExport,
    WalletOptions,
};
pub use crypto::{get_public_key, sign, verify};
pub use domain::{
    DerivationIndex, DomainError, DomainResult, KeyMaterial, LamdenKeyPath, PublicKey, SecretKey,
};
