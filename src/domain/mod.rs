pub mod derivation;
pub mod error;
pub mod key_material;

// Re-export commonly used types
pub use derivation::{DerivationIndex, LamdenKeyPath, LAMDEN_COIN_TYPE};
pub use error::{DomainError, DomainResult};
pub use key_material::{KeyMaterial, PublicKey, SecretKey, KEY_LENGTH, SIGNATURE_LENGTH};
