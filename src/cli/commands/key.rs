use crate::cli::input::InputReader;
use crate::cli::output::{print_key_output, OutputFormat};
use anyhow::Result;
use clap::{Args, Subcommand};
use lamden_wallet::{get_public_key, new_wallet, new_wallet_from_mnemonic, DerivationIndex, WalletExport};
use secrecy::{ExposeSecret, SecretString};
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum KeyCommands {
    /// Generate a random keypair
    New(NewArgs),
    /// Derive a keypair from a mnemonic (generates one if none is given)
    Derive(DeriveArgs),
    /// Print the public key for a private key
    Vk(VkArgs),
}

#[derive(Args)]
pub struct NewArgs {
    /// Output format (json, text)
    #[arg(long, default_value = "json")]
    pub format: String,
}

#[derive(Args)]
pub struct DeriveArgs {
    /// Mnemonic phrase
    #[arg(long, env = "LAMDEN_MNEMONIC", hide_env_values = true)]
    pub mnemonic: Option<String>,

    /// Mnemonic file path
    #[arg(long, conflicts_with = "mnemonic")]
    pub mnemonic_file: Option<PathBuf>,

    /// Derivation index (defaults to 0)
    #[arg(long)]
    pub index: Option<DerivationIndex>,

    /// Output format (json, text)
    #[arg(long, default_value = "json")]
    pub format: String,

    /// Include secret key and mnemonic in the output
    #[arg(long)]
    pub show_secret: bool,
}

#[derive(Args)]
pub struct VkArgs {
    /// Private key (64 hex characters)
    #[arg(long, env = "LAMDEN_SK", hide_env_values = true)]
    pub sk: String,
}

pub fn handle_key_command(cmd: KeyCommands) -> Result<()> {
    match cmd {
        KeyCommands::New(args) => handle_new(args),
        KeyCommands::Derive(args) => handle_derive(args),
        KeyCommands::Vk(args) => handle_vk(args),
    }
}

fn parse_format(format: &str) -> Result<OutputFormat> {
    OutputFormat::from_str(format).map_err(|e| anyhow::anyhow!(e))
}

fn handle_new(args: NewArgs) -> Result<()> {
    let format = parse_format(&args.format)?;
    let key = new_wallet()?;

    // A fresh key is useless without its secret
    print_key_output(&WalletExport::from_key_material(&key, true), format)?;
    eprintln!("\n⚠️  Keep the secret key safe; it cannot be recovered.");

    Ok(())
}

fn handle_derive(args: DeriveArgs) -> Result<()> {
    let format = parse_format(&args.format)?;

    let mnemonic: Option<SecretString> = if let Some(ref file) = args.mnemonic_file {
        Some(InputReader::read_mnemonic_from_file(file)?)
    } else if let Some(ref phrase) = args.mnemonic {
        Some(InputReader::read_mnemonic(phrase)?)
    } else {
        None
    };

    let wallet = new_wallet_from_mnemonic(mnemonic.as_ref().map(|m| m.expose_secret().as_str()), args.index)?;

    print_key_output(
        &WalletExport::from_mnemonic_wallet(&wallet, args.show_secret),
        format,
    )?;

    if mnemonic.is_none() && !args.show_secret {
        eprintln!("Generated new mnemonic (keep this safe!):");
        eprintln!("{}", wallet.mnemonic().expose_secret());
    }

    Ok(())
}

fn handle_vk(args: VkArgs) -> Result<()> {
    println!("{}", get_public_key(&args.sk)?);
    Ok(())
}
