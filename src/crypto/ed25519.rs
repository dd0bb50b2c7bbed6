use crate::domain::key_material::decode_hex_array;
use crate::domain::{DomainError, DomainResult, PublicKey, SecretKey, SIGNATURE_LENGTH};
use ed25519_dalek::{Signature, Signer, SigningKey, VerifyingKey};

/// Ed25519 key operations (RFC 8032)
pub struct Ed25519;

impl Ed25519 {
    /// Public key for a private key seed
    pub fn public_key_of(secret: &SecretKey) -> PublicKey {
        let signing_key = SigningKey::from_bytes(secret.as_bytes());
        PublicKey::from_bytes(signing_key.verifying_key().to_bytes())
    }

    /// Sign a message
    pub fn sign(secret: &SecretKey, message: &[u8]) -> [u8; SIGNATURE_LENGTH] {
        let signing_key = SigningKey::from_bytes(secret.as_bytes());
        signing_key.sign(message).to_bytes()
    }

    /// Verify a signature.
    ///
    /// A public key that is not a valid curve point cannot have produced
    /// any signature, so it verifies as `false` rather than failing.
    pub fn verify(public: &PublicKey, message: &[u8], signature: &[u8; SIGNATURE_LENGTH]) -> bool {
        let Ok(verifying_key) = VerifyingKey::from_bytes(public.as_bytes()) else {
            tracing::debug!(vk = %public, "public key does not decode to a curve point");
            return false;
        };

        let signature = Signature::from_bytes(signature);
        verifying_key.verify_strict(message, &signature).is_ok()
    }

    /// Parse a signature given as 128 hex characters
    pub fn signature_from_hex(signature_hex: &str) -> DomainResult<[u8; SIGNATURE_LENGTH]> {
        decode_hex_array(signature_hex, "signature").map_err(DomainError::signature_length)
    }
}

/// Public key (hex) for a private key (hex)
pub fn get_public_key(sk: &str) -> DomainResult<String> {
    let secret = SecretKey::from_hex(sk)?;
    Ok(Ed25519::public_key_of(&secret).to_hex())
}

/// Sign `message` with a hex private key, returning a 128-character hex signature
pub fn sign(sk: &str, message: &[u8]) -> DomainResult<String> {
    let secret = SecretKey::from_hex(sk)?;
    Ok(hex::encode(Ed25519::sign(&secret, message)))
}

/// Check a hex signature over `message` against a hex public key.
///
/// Returns `Ok(false)` for any well-formed input that does not verify;
/// errors are reserved for malformed hex or wrong lengths.
pub fn verify(vk: &str, message: &[u8], signature: &str) -> DomainResult<bool> {
    let public = PublicKey::from_hex(vk)?;
    let signature = Ed25519::signature_from_hex(signature)?;
    Ok(Ed25519::verify(&public, message, &signature))
}

#[cfg(test)]
mod tests {
    use super::*;

    // RFC 8032 section 7.1, tests 1 and 2
    const SK_1: &str = "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60";
    const VK_1: &str = "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a";
    const SIG_1: &str = "e5564300c360ac729086e2cc806e828a84877f1eb8e5d974d873e065224901555fb8821590a33bacc61e39701cf9b46bd25bf5f0595bbe24655141438e7a100b";
    const SK_2: &str = "4ccd089b28ff96da9db6c346ec114e0f5b8a319f35aba624da8cf6ed4fb8a6fb";
    const VK_2: &str = "3d4017c3e843895a92b70aa74d1b7ebc9c982ccf2ec4968cc0cd55f12af4660c";

    const MESSAGE: &[u8] = b"this is a message";

    #[test]
    fn test_rfc8032_vector() {
        assert_eq!(get_public_key(SK_1).unwrap(), VK_1);
        assert_eq!(get_public_key(SK_2).unwrap(), VK_2);

        // Test 1 signs the empty message
        assert_eq!(sign(SK_1, b"").unwrap(), SIG_1);
        assert!(verify(VK_1, b"", SIG_1).unwrap());
    }

    #[test]
    fn test_sign_verify() {
        let signature = sign(SK_1, MESSAGE).unwrap();
        assert_eq!(signature.len(), 128);
        assert!(signature.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));

        assert!(verify(VK_1, MESSAGE, &signature).unwrap());
        assert!(!verify(VK_1, b"wrong message", &signature).unwrap());
    }

    #[test]
    fn test_signatures_are_deterministic() {
        assert_eq!(sign(SK_1, MESSAGE).unwrap(), sign(SK_1, MESSAGE).unwrap());
    }

    #[test]
    fn test_wrong_key_is_false_not_error() {
        let signature = sign(SK_1, MESSAGE).unwrap();
        assert!(!verify(VK_2, MESSAGE, &signature).unwrap());
    }

    #[test]
    fn test_tampered_signature_is_false() {
        let signature = sign(SK_1, MESSAGE).unwrap();
        let mut bytes = hex::decode(&signature).unwrap();
        bytes[10] ^= 0x01;
        assert!(!verify(VK_1, MESSAGE, &hex::encode(bytes)).unwrap());
    }

    #[test]
    fn test_small_order_public_key_is_false() {
        // Encoding of the identity point
        let mut bytes = [0u8; 32];
        bytes[0] = 1;
        let signature = sign(SK_1, MESSAGE).unwrap();
        assert!(!verify(&hex::encode(bytes), MESSAGE, &signature).unwrap());
    }

    #[test]
    fn test_malformed_input_errors() {
        let signature = sign(SK_1, MESSAGE).unwrap();

        assert!(matches!(
            get_public_key("00"),
            Err(DomainError::InvalidKeyLength { .. })
        ));
        assert!(matches!(
            sign(&SK_1[..62], MESSAGE),
            Err(DomainError::InvalidKeyLength { .. })
        ));
        assert!(matches!(
            verify(&VK_1[..10], MESSAGE, &signature),
            Err(DomainError::InvalidKeyLength { .. })
        ));
        assert!(matches!(
            verify(VK_1, MESSAGE, &signature[..126]),
            Err(DomainError::InvalidSignatureLength { .. })
        ));
        assert!(matches!(
            verify(VK_1, MESSAGE, &"g".repeat(128)),
            Err(DomainError::InvalidSignatureLength { .. })
        ));
    }

    #[test]
    fn test_prefixed_hex_rejected() {
        let prefixed = format!("0x{}", &SK_1[2..]);
        assert!(get_public_key(&prefixed).is_err());
    }
}
