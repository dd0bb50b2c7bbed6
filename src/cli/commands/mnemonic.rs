use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use lamden_wallet::{DerivationIndex, KeyDerivation, MnemonicWallet};
use rand::{rngs::OsRng, CryptoRng, RngCore};
use secrecy::ExposeSecret;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Subcommand)]
pub enum MnemonicCommands {
    /// Generate a 24-word mnemonic and show the wallet it derives
    Generate(MnemonicGenerateArgs),
}

#[derive(Args)]
pub struct MnemonicGenerateArgs {
    /// Write the phrase to this file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Index of the wallet to report (defaults to 0)
    #[arg(long)]
    pub index: Option<DerivationIndex>,
}

pub fn handle_mnemonic_command(cmd: MnemonicCommands) -> Result<()> {
    match cmd {
        MnemonicCommands::Generate(args) => {
            let wallet = generate(&args, &mut OsRng)?;
            eprintln!(
                "Wallet {} at {}: {}",
                wallet.derivation_index(),
                wallet.key_material().derivation_path().unwrap_or_default(),
                wallet.vk()
            );
            eprintln!("⚠️  Anyone holding this phrase controls every wallet index derived from it.");
            Ok(())
        }
    }
}

/// Draw a phrase from `rng`, derive its wallet and hand the phrase to the user
fn generate<R: RngCore + CryptoRng>(args: &MnemonicGenerateArgs, rng: &mut R) -> Result<MnemonicWallet> {
    let wallet = KeyDerivation::derive_with_random_mnemonic(rng, args.index.unwrap_or_default())?;
    let phrase = wallet.mnemonic().expose_secret();

    match &args.output {
        Some(path) => {
            save_phrase(path, phrase)?;
            eprintln!("Mnemonic written to {}", path.display());
        }
        None => println!("{}", phrase),
    }

    Ok(wallet)
}

/// Create `path` for the phrase; on Unix the file is owner-only from the start
fn save_phrase(path: &Path, phrase: &str) -> Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options
        .open(path)
        .with_context(|| format!("cannot create {}", path.display()))?;
    writeln!(file, "{}", phrase)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::input::InputReader;
    use lamden_wallet::new_wallet_from_mnemonic;
    use rand::{rngs::StdRng, SeedableRng};
    use tempfile::TempDir;

    #[test]
    fn test_saved_phrase_rederives_reported_wallet() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("phrase.txt");
        let args = MnemonicGenerateArgs {
            output: Some(path.clone()),
            index: Some(DerivationIndex::new(5).unwrap()),
        };

        let reported = generate(&args, &mut StdRng::seed_from_u64(11)).unwrap();
        assert_eq!(reported.derivation_index().value(), 5);
        assert_eq!(reported.key_material().derivation_path(), Some("m/44'/789'/5'/0'/0'"));

        let saved = InputReader::read_mnemonic_from_file(&path).unwrap();
        assert_eq!(saved.expose_secret().split_whitespace().count(), 24);
        let again = new_wallet_from_mnemonic(Some(saved.expose_secret()), args.index).unwrap();
        assert_eq!(again.vk(), reported.vk());

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(&path).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o600);
        }
    }

    #[test]
    fn test_default_index_and_seeded_rng() {
        let temp_dir = TempDir::new().unwrap();
        let args = MnemonicGenerateArgs {
            output: Some(temp_dir.path().join("phrase.txt")),
            index: None,
        };

        let a = generate(&args, &mut StdRng::seed_from_u64(3)).unwrap();
        let b = generate(&args, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(a.derivation_index().value(), 0);
        assert_eq!(a.vk(), b.vk());
    }

    #[test]
    fn test_unwritable_destination() {
        let temp_dir = TempDir::new().unwrap();
        let args = MnemonicGenerateArgs {
            output: Some(temp_dir.path().join("missing").join("phrase.txt")),
            index: None,
        };
        assert!(generate(&args, &mut StdRng::seed_from_u64(1)).is_err());
    }
}
