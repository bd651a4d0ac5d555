//! Consensus module - block structure and compact difficulty targets

mod block;
mod difficulty;

pub use block::*;
pub use difficulty::*;
