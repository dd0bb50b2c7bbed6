pub mod key;
pub mod mnemonic;
pub mod witness;

pub use key::{handle_key_command, KeyCommands};
pub use mnemonic::{handle_mnemonic_command, MnemonicCommands};
pub use witness::{handle_witness_command, WitnessCommands};
