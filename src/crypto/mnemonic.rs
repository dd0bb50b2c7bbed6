use crate::domain::{DomainError, DomainResult};
use bip39::{Language, Mnemonic};
use rand::{rngs::OsRng, CryptoRng, RngCore};
use secrecy::SecretString;
use zeroize::Zeroizing;

/// Entropy for a 24-word phrase
const MNEMONIC_ENTROPY_BYTES: usize = 32;

/// Generate a new random BIP39 mnemonic phrase (24 words)
pub fn generate_mnemonic() -> DomainResult<SecretString> {
    generate_mnemonic_with_rng(&mut OsRng)
}

/// Generate a new BIP39 mnemonic phrase (24 words) from the given random source
pub fn generate_mnemonic_with_rng<R: RngCore + CryptoRng>(rng: &mut R) -> DomainResult<SecretString> {
    let mut entropy = Zeroizing::new([0u8; MNEMONIC_ENTROPY_BYTES]);
    rng.try_fill_bytes(&mut entropy[..])
        .map_err(|e| DomainError::EntropySourceUnavailable(e.to_string()))?;

    let mnemonic = Mnemonic::from_entropy_in(Language::English, &entropy[..])
        .map_err(|e| DomainError::InvalidMnemonic(format!("Failed to generate mnemonic: {}", e)))?;
    Ok(SecretString::new(mnemonic.to_string()))
}

/// Validate a mnemonic phrase
pub fn validate_mnemonic(phrase: &str) -> DomainResult<()> {
    parse_mnemonic(phrase).map(|_| ())
}

/// Parse a normalized mnemonic phrase, checking wordlist and checksum
pub fn parse_mnemonic(phrase: &str) -> DomainResult<Mnemonic> {
    Mnemonic::parse_in_normalized(Language::English, phrase)
        .map_err(|e| DomainError::InvalidMnemonic(format!("Invalid mnemonic: {}", e)))
}

/// BIP39 seed for a mnemonic, with an empty passphrase
pub fn mnemonic_to_seed(mnemonic: &Mnemonic) -> Zeroizing<[u8; 64]> {
    Zeroizing::new(mnemonic.to_seed_normalized(""))
}

/// Collapse whitespace runs to single spaces and lowercase every word
pub fn normalize_mnemonic(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::key_generation::tests::BrokenRng;
    use rand::{rngs::StdRng, SeedableRng};
    use secrecy::ExposeSecret;

    const LAMDEN_MNEMONIC: &str = "ripple junk access broom element fitness side example ramp flush model creek nest face rent jacket ahead come short find over family wise comfort";

    #[test]
    fn test_phrase_encodes_the_drawn_entropy() {
        let phrase = generate_mnemonic_with_rng(&mut StdRng::seed_from_u64(21)).unwrap();

        let mut drawn = [0u8; MNEMONIC_ENTROPY_BYTES];
        StdRng::seed_from_u64(21).fill_bytes(&mut drawn);

        let parsed = parse_mnemonic(phrase.expose_secret()).unwrap();
        assert_eq!(parsed.to_entropy(), drawn.to_vec());
        assert_eq!(parsed.word_count(), 24);
        assert_eq!(phrase.expose_secret().split(' ').count(), 24);
    }

    #[test]
    fn test_generate_with_seeded_rng() {
        let a = generate_mnemonic_with_rng(&mut StdRng::seed_from_u64(7)).unwrap();
        let b = generate_mnemonic_with_rng(&mut StdRng::seed_from_u64(7)).unwrap();
        let c = generate_mnemonic_with_rng(&mut StdRng::seed_from_u64(8)).unwrap();

        assert_eq!(a.expose_secret(), b.expose_secret());
        assert_ne!(a.expose_secret(), c.expose_secret());
    }

    #[test]
    fn test_broken_rng_is_reported() {
        assert!(matches!(
            generate_mnemonic_with_rng(&mut BrokenRng),
            Err(DomainError::EntropySourceUnavailable(_))
        ));
    }

    #[test]
    fn test_lamden_phrase_validates_and_truncation_fails() {
        assert!(validate_mnemonic(LAMDEN_MNEMONIC).is_ok());

        let words: Vec<_> = LAMDEN_MNEMONIC.split(' ').collect();
        assert!(validate_mnemonic(&words[..23].join(" ")).is_err());
        assert!(validate_mnemonic("").is_err());
    }

    #[test]
    fn test_checksum_failure() {
        // Every word is in the list but the checksum bits are wrong
        let bad = ["abandon"; 12].join(" ");
        assert!(matches!(
            validate_mnemonic(&bad),
            Err(DomainError::InvalidMnemonic(_))
        ));
    }

    #[test]
    fn test_seed_matches_bip39_vector() {
        // Trezor BIP39 reference vector, passphrase "" rather than "TREZOR"
        let mnemonic = parse_mnemonic(
            "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about",
        )
        .unwrap();
        let seed = mnemonic_to_seed(&mnemonic);
        assert_eq!(
            hex::encode(&seed[..]),
            "5eb00bbddcf069084889a8ab9155568165f5c453ccb85e70811aaed6f6da5fc19a5ac40b389cd370d086206dec8aa6c43daea6690f20ad3d8d48b2d2ce9e38e4"
        );
    }

    #[test]
    fn test_pasted_phrase_normalizes_to_canonical() {
        let pasted = format!("\t{}\n", LAMDEN_MNEMONIC.to_uppercase().replace(' ', " \t "));
        let normalized = normalize_mnemonic(&pasted);

        assert_eq!(normalized, LAMDEN_MNEMONIC);
        assert!(validate_mnemonic(&normalized).is_ok());
    }
}
