//! Errors raised while building profiles and decoding addresses.

use thiserror::Error;
use crate::crypto::Hash;
use super::Network;

/// Chain parameter errors
///
/// None of these are recoverable: a node that hits one must not start.
#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("{network} genesis hash mismatch: computed {computed}, expected {expected}")]
    GenesisHashMismatch {
        network: Network,
        computed: Hash,
        expected: Hash,
    },
    #[error("{network} genesis merkle root mismatch: computed {computed}, expected {expected}")]
    GenesisMerkleMismatch {
        network: Network,
        computed: Hash,
        expected: Hash,
    },
    #[error("Unknown network: {0}")]
    UnknownNetwork(String),
    #[error("Invalid hex in {field}: {source}")]
    InvalidHex {
        field: &'static str,
        #[source]
        source: hex::FromHexError,
    },
}

/// Base58Check address errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("Invalid base58 encoding")]
    InvalidBase58,
    #[error("Address too short")]
    TooShort,
    #[error("Invalid checksum")]
    BadChecksum,
    #[error("Address prefix does not match {0:?}")]
    PrefixMismatch(super::Base58Type),
}
