use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which bit is appended when a code walk descends into the heavier child.
///
/// The lighter child always receives the other bit.
#[derive(Serialize, Deserialize, ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum HeavierBit {
    #[default]
    One,
    Zero,
}

impl HeavierBit {
    pub const fn heavier(self) -> bool {
        matches!(self, Self::One)
    }

    pub const fn lighter(self) -> bool {
        !self.heavier()
    }
}

/// Code assigned to the only symbol of a one-symbol alphabet.
#[derive(Serialize, Deserialize, ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SingleSymbolCode {
    /// The symbol maps to the empty code. No decision is needed to encode it, but a stream of
    /// empty codes cannot be delimited.
    #[default]
    Empty,
    /// The symbol maps to a single lighter-branch bit, so every code is at least one bit long.
    SingleBit,
}

/// Settings that shape the derived code table.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CoderConfig {
    pub heavier_bit: HeavierBit,
    pub single_symbol: SingleSymbolCode,
}

impl CoderConfig {
    /// Reads a configuration from a JSON file. Fields missing from the file keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let data = fs::read(path).with_context(|| format!("couldn't read config file {}", path.display()))?;
        let config =
            serde_json::from_slice(&data).with_context(|| format!("config file {} is not valid", path.display()))?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn with_heavier_bit(mut self, heavier_bit: HeavierBit) -> Self {
        self.heavier_bit = heavier_bit;
        self
    }

    pub fn with_single_symbol(mut self, single_symbol: SingleSymbolCode) -> Self {
        self.single_symbol = single_symbol;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_reference_convention() {
        let config = CoderConfig::default();
        assert_eq!(config.heavier_bit, HeavierBit::One);
        assert_eq!(config.single_symbol, SingleSymbolCode::Empty);
        assert!(config.heavier_bit.heavier());
        assert!(!config.heavier_bit.lighter());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: CoderConfig = serde_json::from_str(r#"{ "single_symbol": "single-bit" }"#).unwrap();
        assert_eq!(config.heavier_bit, HeavierBit::One);
        assert_eq!(config.single_symbol, SingleSymbolCode::SingleBit);
    }

    #[test]
    fn json_uses_kebab_case_values() {
        let config = CoderConfig::default().with_heavier_bit(HeavierBit::Zero);
        let json = config.to_json().unwrap();
        assert!(json.contains(r#""heavier_bit": "zero""#), "{json}");
        let back: CoderConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn unknown_value_is_rejected() {
        assert!(serde_json::from_str::<CoderConfig>(r#"{ "heavier_bit": "two" }"#).is_err());
    }
}
