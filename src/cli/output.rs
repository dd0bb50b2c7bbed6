use lamden_wallet::WalletExport;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Text,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" => Ok(Self::Text),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

pub fn print_key_output(output: &WalletExport, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(output)?);
        }
        OutputFormat::Text => {
            println!("Public Key: {}", output.vk);
            if let Some(index) = output.derivation_index {
                println!("Derivation Index: {}", index);
            }
            if let Some(path) = &output.derivation_path {
                println!("Derivation Path: {}", path);
            }
            if let Some(mnemonic) = &output.mnemonic {
                println!("Mnemonic: {}", mnemonic);
            }
            if let Some(sk) = &output.sk {
                println!("Secret Key: {}", sk);
            }
        }
    }
    Ok(())
}
