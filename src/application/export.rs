use super::key_derivation::MnemonicWallet;
use crate::domain::KeyMaterial;
use secrecy::ExposeSecret;
use serde::Serialize;

/// JSON view of a keypair, using the wallet field names `vk`, `sk`,
/// `mnemonic`, `derivationIndex` and `derivationPath`.
///
/// `sk` and `mnemonic` are only filled when the caller includes secrets.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletExport {
    pub vk: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sk: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mnemonic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub derivation_index: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub derivation_path: Option<String>,
}

impl WalletExport {
    pub fn from_key_material(key: &KeyMaterial, include_secret: bool) -> Self {
        Self {
            vk: key.vk(),
            sk: include_secret.then(|| key.sk().expose_secret().clone()),
            mnemonic: None,
            derivation_index: None,
            derivation_path: key.derivation_path().map(str::to_owned),
        }
    }

    pub fn from_mnemonic_wallet(wallet: &MnemonicWallet, include_secret: bool) -> Self {
        Self {
            mnemonic: include_secret.then(|| wallet.mnemonic().expose_secret().clone()),
            derivation_index: Some(wallet.derivation_index().value()),
            ..Self::from_key_material(wallet.key_material(), include_secret)
        }
    }
}
