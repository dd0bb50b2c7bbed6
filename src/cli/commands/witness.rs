use crate::cli::input::InputReader;
use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use lamden_wallet::{sign, verify};
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum WitnessCommands {
    /// Sign a message with a private key
    Sign(SignArgs),
    /// Verify a signature against a public key
    Verify(VerifyArgs),
}

#[derive(Args)]
pub struct SignArgs {
    /// Private key (64 hex characters)
    #[arg(long, env = "LAMDEN_SK", hide_env_values = true)]
    pub sk: String,

    /// Message to sign, taken as UTF-8 bytes
    #[arg(long)]
    pub message: Option<String>,

    /// File whose raw bytes are signed
    #[arg(long, conflicts_with = "message")]
    pub message_file: Option<PathBuf>,
}

#[derive(Args)]
pub struct VerifyArgs {
    /// Public key (64 hex characters)
    #[arg(long)]
    pub vk: String,

    /// Signature (128 hex characters)
    #[arg(long)]
    pub signature: String,

    /// Signed message, taken as UTF-8 bytes
    #[arg(long)]
    pub message: Option<String>,

    /// File holding the signed bytes
    #[arg(long, conflicts_with = "message")]
    pub message_file: Option<PathBuf>,
}

pub fn handle_witness_command(cmd: WitnessCommands) -> Result<()> {
    match cmd {
        WitnessCommands::Sign(args) => handle_sign(args),
        WitnessCommands::Verify(args) => handle_verify(args),
    }
}

fn handle_sign(args: SignArgs) -> Result<()> {
    let message = InputReader::read_message(args.message.as_deref(), args.message_file.as_ref())?;
    println!("{}", sign(&args.sk, &message)?);
    Ok(())
}

fn handle_verify(args: VerifyArgs) -> Result<()> {
    let message = InputReader::read_message(args.message.as_deref(), args.message_file.as_ref())?;

    if verify(&args.vk, &message, &args.signature)? {
        println!("valid");
        Ok(())
    } else {
        println!("invalid");
        bail!("signature does not match public key {}", args.vk)
    }
}
