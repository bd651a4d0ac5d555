//! Node bootstrap data - genesis block construction

mod genesis;

pub use genesis::*;
