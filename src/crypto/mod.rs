pub mod ed25519;
pub mod mnemonic;
pub mod slip10;

// Re-export commonly used items
pub use ed25519::{get_public_key, sign, verify, Ed25519};
pub use mnemonic::{
    generate_mnemonic, generate_mnemonic_with_rng, mnemonic_to_seed, normalize_mnemonic,
    parse_mnemonic, validate_mnemonic,
};
pub use slip10::Slip10;
