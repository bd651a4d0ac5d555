//! Chain parameters - per-network constants and the active-network registry
//!
//! Everything that differs between networks (magic bytes, ports, difficulty
//! limits, address prefixes, seeds, genesis block) lives in a
//! [`ChainParams`] profile. The [`Registry`] holds one profile per network
//! and tracks which is active.

mod base58;
mod error;
mod network;
mod profile;
mod registry;

pub use base58::*;
pub use error::*;
pub use network::*;
pub use profile::*;
pub use registry::*;
