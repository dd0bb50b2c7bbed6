use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cli;

use cli::{
    handle_key_command, handle_mnemonic_command, handle_witness_command, KeyCommands,
    MnemonicCommands, WitnessCommands,
};

#[derive(Parser)]
#[command(name = "lamden-wallet")]
#[command(about = "Lamden keypair derivation, generation and signing", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Mnemonic phrase operations
    #[command(subcommand)]
    Mnemonic(MnemonicCommands),

    /// Key management operations
    #[command(subcommand)]
    Key(KeyCommands),

    /// Witness (signature) operations
    #[command(subcommand)]
    Witness(WitnessCommands),
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("lamden_wallet=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lamden_wallet=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Mnemonic(cmd) => handle_mnemonic_command(cmd),
        Commands::Key(cmd) => handle_key_command(cmd),
        Commands::Witness(cmd) => handle_witness_command(cmd),
    }
}
