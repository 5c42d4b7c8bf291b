//! Bitcoin network selection.

use crate::error::BoltboxError;

/// Network the stack runs against, chosen at boot time.
///
/// The value is exported as `NETWORK` to the Vagrant provisioner; the
/// wrapper itself never interprets it beyond validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Network {
    Mainnet,
    Testnet,
    #[default]
    Regtest,
    Simnet,
}

impl Network {
    /// All accepted values, in help-text order.
    pub const ALL: [Network; 4] =
        [Network::Mainnet, Network::Testnet, Network::Regtest, Network::Simnet];

    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
            Network::Regtest => "regtest",
            Network::Simnet => "simnet",
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Network {
    type Err = BoltboxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            "regtest" => Ok(Network::Regtest),
            "simnet" => Ok(Network::Simnet),
            _ => Err(BoltboxError::UnknownNetwork { value: s.to_string() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_networks() {
        for network in Network::ALL {
            assert_eq!(network.as_str().parse::<Network>().unwrap(), network);
        }
        assert_eq!("TESTNET".parse::<Network>().unwrap(), Network::Testnet);
    }

    #[test]
    fn rejects_unknown_network() {
        assert!("foo".parse::<Network>().is_err());
        assert!("".parse::<Network>().is_err());
    }

    #[test]
    fn default_is_regtest() {
        assert_eq!(Network::default(), Network::Regtest);
    }
}
