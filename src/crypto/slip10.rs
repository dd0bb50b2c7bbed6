//! SLIP-0010 hierarchical derivation for Ed25519.
//!
//! Ed25519 only supports hardened children, so every path level is derived
//! with the hardened bit set. Reference:
//! <https://github.com/satoshilabs/slips/blob/master/slip-0010.md>

use crate::domain::{DomainError, DomainResult, SecretKey, KEY_LENGTH};
use hmac::{Hmac, Mac};
use sha2::Sha512;
use zeroize::Zeroizing;

type HmacSha512 = Hmac<Sha512>;

const HARDENED_OFFSET: u32 = 0x8000_0000;

/// Extended private key: key bytes plus chain code
struct ExtendedKey {
    key: Zeroizing<[u8; KEY_LENGTH]>,
    chain_code: Zeroizing<[u8; 32]>,
}

impl ExtendedKey {
    fn from_hmac(hmac_key: &[u8], parts: &[&[u8]]) -> DomainResult<Self> {
        // Unreachable for HMAC, which takes any key length
        let mut mac = HmacSha512::new_from_slice(hmac_key)
            .map_err(|e| DomainError::CryptoError(format!("HMAC init failed: {}", e)))?;
        for part in parts {
            mac.update(part);
        }

        let mut output = Zeroizing::new([0u8; 64]);
        output.copy_from_slice(&mac.finalize().into_bytes());

        let mut key = Zeroizing::new([0u8; KEY_LENGTH]);
        let mut chain_code = Zeroizing::new([0u8; 32]);
        key.copy_from_slice(&output[..32]);
        chain_code.copy_from_slice(&output[32..]);

        Ok(Self { key, chain_code })
    }
}

/// SLIP-0010 Ed25519 deriver
pub struct Slip10;

impl Slip10 {
    /// Master HMAC key for the Ed25519 curve
    const MASTER_SECRET: &'static [u8] = b"ed25519 seed";

    /// Derive the private key at `path` from a BIP39 seed.
    ///
    /// Each element of `path` is a level index without the hardened bit;
    /// it is applied here.
    pub fn derive(seed: &[u8], path: &[u32]) -> DomainResult<SecretKey> {
        let mut node = Self::master_key(seed)?;
        for &index in path {
            node = Self::child_key(&node, index)?;
        }
        Ok(SecretKey::from_bytes(*node.key))
    }

    /// I = HMAC-SHA512(Key = "ed25519 seed", Data = seed)
    fn master_key(seed: &[u8]) -> DomainResult<ExtendedKey> {
        ExtendedKey::from_hmac(Self::MASTER_SECRET, &[seed])
    }

    /// I = HMAC-SHA512(Key = chain_code, Data = 0x00 || key || ser32(index | 2^31))
    fn child_key(parent: &ExtendedKey, index: u32) -> DomainResult<ExtendedKey> {
        let hardened = (index | HARDENED_OFFSET).to_be_bytes();
        ExtendedKey::from_hmac(&parent.chain_code[..], &[&[0x00][..], &parent.key[..], &hardened[..]])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // SLIP-0010 test vector 1 for ed25519
    const SEED_1: &str = "000102030405060708090a0b0c0d0e0f";

    fn derive_hex(seed: &str, path: &[u32]) -> String {
        let seed = hex::decode(seed).unwrap();
        hex::encode(Slip10::derive(&seed, path).unwrap().as_bytes())
    }

    #[test]
    fn test_vector_1_master() {
        assert_eq!(
            derive_hex(SEED_1, &[]),
            "2b4be7f19ee27bbf30c667b642d5f4aa69fd169872f8fc3059c08ebae2eb19e7"
        );
    }

    #[test]
    fn test_vector_1_chain_m_0h() {
        assert_eq!(
            derive_hex(SEED_1, &[0]),
            "68e0fe46dfb67e368c75379acec591dad19df3cde26e63b93a8e704f1dade7a3"
        );
    }

    #[test]
    fn test_vector_1_chain_m_0h_1h() {
        assert_eq!(
            derive_hex(SEED_1, &[0, 1]),
            "b1d0bad404bf35da785a64ca1ac54b2617211d2777696fbffaf208f746ae84f2"
        );
    }

    #[test]
    fn test_hardened_bit_is_idempotent() {
        // Passing an index that already carries the hardened bit yields the same child
        assert_eq!(derive_hex(SEED_1, &[0]), derive_hex(SEED_1, &[HARDENED_OFFSET]));
    }

    #[test]
    fn test_different_paths() {
        assert_ne!(derive_hex(SEED_1, &[44, 789, 0]), derive_hex(SEED_1, &[44, 789, 1]));
    }
}
