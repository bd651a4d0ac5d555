//! Transaction and script structures used by block construction

mod script;
mod transaction;

pub use script::*;
pub use transaction::*;
