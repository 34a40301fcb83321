use std::fmt;
use std::str::FromStr;

use anyhow::bail;
use serde::{Deserialize, Serialize};

/// Identifies one of the compiled networks.
///
/// `Unknown` is the "no network recognized" sentinel produced when startup flags
/// conflict; it has no parameter set.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Main,
    #[serde(rename = "test")]
    Testnet,
    Regtest,
    Unittest,
    Unknown,
}

impl Network {
    /// Every network with a parameter set.
    pub const ALL: [Network; 4] = [
        Network::Main,
        Network::Testnet,
        Network::Regtest,
        Network::Unittest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Main => "main",
            Network::Testnet => "test",
            Network::Regtest => "regtest",
            Network::Unittest => "unittest",
            Network::Unknown => "unknown",
        }
    }

    /// Resolves the `-regtest` / `-testnet` startup flags.
    ///
    /// Both flags together are contradictory and yield `Unknown`.
    pub fn from_flags(regtest: bool, testnet: bool) -> Network {
        match (regtest, testnet) {
            (true, true) => Network::Unknown,
            (true, false) => Network::Regtest,
            (false, true) => Network::Testnet,
            (false, false) => Network::Main,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "main" => Ok(Network::Main),
            "test" => Ok(Network::Testnet),
            "regtest" => Ok(Network::Regtest),
            "unittest" => Ok(Network::Unittest),
            other => bail!("unrecognized network: {other:?}"),
        }
    }
}

/// Non-consensus parameters selected together with the chain parameters.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BaseChainParams {
    pub network: Network,
    /// Subdirectory of the data directory used by this network.
    pub data_dir: &'static str,
}

impl BaseChainParams {
    /// Base parameters of `network`. Panics on `Unknown`.
    pub fn for_network(network: Network) -> Self {
        let data_dir = match network {
            Network::Main => "",
            Network::Testnet => "testnet4",
            Network::Regtest => "regtest",
            Network::Unittest => "unittest",
            Network::Unknown => panic!("Unimplemented network"),
        };
        BaseChainParams { network, data_dir }
    }
}
