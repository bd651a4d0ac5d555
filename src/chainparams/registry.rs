//! Active network selection
//!
//! Both profiles are built once, before anything else runs, and never
//! change afterwards. The registry only tracks which one is active, in a
//! single atomic, so `active()` is a plain load from any thread.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::OnceLock;
use tracing::info;
use super::{ChainParams, Network, ParamsError};

/// Holds every network profile and the current selection
#[derive(Debug)]
pub struct Registry {
    main: ChainParams,
    testnet: ChainParams,
    active: AtomicU8,
}

impl Registry {
    /// Build and verify every profile, with Mainnet active
    pub fn new() -> Result<Self, ParamsError> {
        Ok(Self::from_profiles(ChainParams::mainnet()?, ChainParams::testnet()?))
    }

    pub fn from_profiles(main: ChainParams, testnet: ChainParams) -> Self {
        Self {
            main,
            testnet,
            active: AtomicU8::new(Network::Main as u8),
        }
    }

    /// Profile for a specific network, regardless of selection
    pub fn get(&self, network: Network) -> &ChainParams {
        match network {
            Network::Main => &self.main,
            Network::Testnet => &self.testnet,
        }
    }

    /// Currently active profile
    pub fn active(&self) -> &ChainParams {
        let id = self.active.load(Ordering::Acquire);
        if id == Network::Testnet as u8 {
            &self.testnet
        } else {
            &self.main
        }
    }

    /// Make `network` the active profile
    pub fn select(&self, network: Network) -> &ChainParams {
        self.active.store(network as u8, Ordering::Release);
        info!(%network, "selected chain parameters");
        self.get(network)
    }

    /// Select by name; unknown names are an error, never a silent fallback
    pub fn select_by_name(&self, name: &str) -> Result<&ChainParams, ParamsError> {
        let network = name.parse::<Network>()?;
        Ok(self.select(network))
    }

    /// Apply the testnet command-line flag: set selects Testnet, unset
    /// selects Mainnet
    pub fn select_from_flag(&self, testnet: bool) -> &ChainParams {
        self.select(Network::from_testnet_flag(testnet))
    }
}

static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// Build the process-wide registry
///
/// Call at the start of `main`. Later calls return the registry built by
/// the first one.
pub fn bootstrap() -> Result<&'static Registry, ParamsError> {
    if let Some(registry) = REGISTRY.get() {
        return Ok(registry);
    }
    let registry = Registry::new()?;
    Ok(REGISTRY.get_or_init(|| registry))
}

/// Process-wide registry, built on first use if [`bootstrap`] was skipped
///
/// # Panics
///
/// Panics if a genesis block fails verification. The node cannot run with
/// inconsistent parameters.
pub fn registry() -> &'static Registry {
    REGISTRY.get_or_init(|| {
        Registry::new().unwrap_or_else(|e| panic!("chain parameters failed verification: {e}"))
    })
}

/// Parameters of the active network
pub fn params() -> &'static ChainParams {
    registry().active()
}

/// Select the active network for the process
pub fn select_params(network: Network) -> &'static ChainParams {
    registry().select(network)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_mainnet() {
        let registry = Registry::new().unwrap();
        assert_eq!(registry.active().network(), Network::Main);
    }

    #[test]
    fn test_select_switches() {
        let registry = Registry::new().unwrap();
        let testnet = registry.select(Network::Testnet);
        assert_eq!(testnet.network(), Network::Testnet);
        assert_eq!(registry.active().network(), Network::Testnet);
        assert!(std::ptr::eq(registry.active(), registry.get(Network::Testnet)));
    }

    #[test]
    fn test_select_by_unknown_name_keeps_selection() {
        let registry = Registry::new().unwrap();
        registry.select(Network::Testnet);
        assert!(matches!(
            registry.select_by_name("regtest"),
            Err(ParamsError::UnknownNetwork(_))
        ));
        assert_eq!(registry.active().network(), Network::Testnet);
    }

    #[test]
    fn test_testnet_flag_selects_testnet() {
        let registry = Registry::new().unwrap();
        assert_eq!(registry.select_from_flag(true).network(), Network::Testnet);
        assert_eq!(registry.select_from_flag(false).network(), Network::Main);
    }

    // Every check on the shared registry lives in this one test so that
    // parallel tests never observe each other's selection.
    #[test]
    fn test_process_wide_selection() {
        assert_eq!(params().network(), Network::Main);
        let original = params().clone();

        let testnet = select_params(Network::Testnet);
        assert_eq!(testnet.network(), Network::Testnet);
        assert!(std::ptr::eq(params(), registry().get(Network::Testnet)));
        assert_eq!(params().data_dir(), "testnet");

        select_params(Network::Main);
        assert_eq!(params(), &original);
    }

    #[test]
    fn test_bootstrap_is_idempotent() {
        let first = bootstrap().unwrap();
        let second = bootstrap().unwrap();
        assert!(std::ptr::eq(first, second));
        assert!(std::ptr::eq(first, registry()));
    }
}
