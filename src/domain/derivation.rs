use super::error::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// BIP44 purpose level
pub const BIP44_PURPOSE: u32 = 44;

/// SLIP-0044 coin type registered for Lamden
pub const LAMDEN_COIN_TYPE: u32 = 789;

/// Position of a child key under a mnemonic seed.
///
/// Always within the hardened range SLIP-0010 allows for Ed25519,
/// i.e. `0..2^31`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct DerivationIndex(u32);

impl DerivationIndex {
    pub const MAX: u32 = 0x7fff_ffff;

    pub fn new(index: u32) -> DomainResult<Self> {
        if index > Self::MAX {
            return Err(DomainError::InvalidDerivationIndex(format!(
                "{} exceeds the hardened range (max {})",
                index,
                Self::MAX
            )));
        }
        Ok(Self(index))
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for DerivationIndex {
    type Error = DomainError;

    fn try_from(index: i64) -> DomainResult<Self> {
        let index = u32::try_from(index).map_err(|_| {
            DomainError::InvalidDerivationIndex(format!("{} is not a non-negative 32-bit integer", index))
        })?;
        Self::new(index)
    }
}

impl From<DerivationIndex> for u32 {
    fn from(index: DerivationIndex) -> Self {
        index.0
    }
}

impl FromStr for DerivationIndex {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        let trimmed = s.trim();
        let parsed: i64 = trimmed.parse().map_err(|_| {
            DomainError::InvalidDerivationIndex(format!("'{}' is not an integer", trimmed))
        })?;
        Self::try_from(parsed)
    }
}

impl fmt::Display for DerivationIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Standard Lamden derivation path: `m/44'/789'/INDEX'/0'/0'`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LamdenKeyPath {
    index: DerivationIndex,
}

impl LamdenKeyPath {
    pub fn new(index: DerivationIndex) -> Self {
        Self { index }
    }

    pub fn index(&self) -> DerivationIndex {
        self.index
    }

    /// Path levels, each to be derived as a hardened child
    pub fn segments(&self) -> [u32; 5] {
        [BIP44_PURPOSE, LAMDEN_COIN_TYPE, self.index.value(), 0, 0]
    }

    /// Format as a string path for display
    pub fn to_string_path(&self) -> String {
        self.segments()
            .iter()
            .fold(String::from("m"), |mut path, segment| {
                path.push_str(&format!("/{}'", segment));
                path
            })
    }
}
