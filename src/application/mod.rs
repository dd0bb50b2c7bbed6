pub mod export;
pub mod key_derivation;
pub mod key_generation;
pub mod wallet;

// Re-export commonly used items
pub use export::WalletExport;
pub use key_derivation::{new_wallet_from_mnemonic, KeyDerivation, MnemonicWallet};
pub use key_generation::{new_wallet, new_wallet_from_seed, KeyGeneration};
pub use wallet::{create_wallet, create_wallet_with_rng, Wallet, WalletOptions};
