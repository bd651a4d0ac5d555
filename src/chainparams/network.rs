//! Network identifiers.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use super::ParamsError;

/// Known networks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Production network
    #[default]
    Main,
    /// Public test network
    Testnet,
}

impl Network {
    pub const ALL: [Network; 2] = [Network::Main, Network::Testnet];

    /// Get network name as string.
    pub fn name(&self) -> &'static str {
        match self {
            Network::Main => "main",
            Network::Testnet => "testnet",
        }
    }

    /// Network chosen by the testnet command-line flag
    pub fn from_testnet_flag(testnet: bool) -> Self {
        if testnet {
            Network::Testnet
        } else {
            Network::Main
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Network {
    type Err = ParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "main" | "mainnet" => Ok(Network::Main),
            "test" | "testnet" => Ok(Network::Testnet),
            _ => Err(ParamsError::UnknownNetwork(s.to_string())),
        }
    }
}
