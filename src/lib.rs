//! Pearl chain parameters
//!
//! The identifying constants of each Pearl network (genesis block, magic
//! bytes, address prefixes, seed nodes, difficulty limits, consensus
//! transition heights) and the registry that selects the active network.
//! Everything else in a node reads its parameters from here.

pub mod chainparams;
pub mod consensus;
pub mod crypto;
pub mod node;
pub mod p2p;
pub mod telemetry;
pub mod validation;

pub use chainparams::{bootstrap, params, select_params, ChainParams, Network, Registry};

/// Protocol constants - HARD-CODED, NEVER CONFIGURABLE
pub mod constants {
    /// Seconds in one week
    pub const ONE_WEEK: i64 = 7 * 24 * 60 * 60;

    /// Highest block height the protocol can represent
    pub const MAX_BLOCK_HEIGHT: u32 = 0x7fff_ffff;

    /// Message embedded in the genesis coinbase
    pub const GENESIS_MESSAGE: &str = "05/02/2018 On this day Pearl started";

    /// Genesis coinbase transaction time, shared by every network
    pub const GENESIS_COINBASE_TIME: u32 = 1525339768;

    /// Merkle root of the genesis coinbase, shared by every network
    pub const GENESIS_MERKLE_ROOT: &str = "f642a816e501caba624a3789f254360ba3bb8593c1cf878b7a94908aedb13ee0";

    /// Chain name
    pub const CHAIN_NAME: &str = "Pearl";
}
