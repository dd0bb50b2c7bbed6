pub mod commands;
pub mod input;
pub mod output;

pub use commands::{
    handle_key_command, handle_mnemonic_command, handle_witness_command, KeyCommands,
    MnemonicCommands, WitnessCommands,
};
