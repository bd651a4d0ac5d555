//! Genesis block generation
//!
//! Every network profile carries a genesis block that is rebuilt from its
//! constants at startup and checked against the hash and merkle root the
//! rest of the network agreed on.

use tracing::{debug, error};
use crate::chainparams::{Network, ParamsError};
use crate::consensus::{Block, BlockHeader};
use crate::crypto::Hash;
use crate::validation::{Script, Transaction, OP_0};

/// Genesis block version
pub const GENESIS_VERSION: i32 = 1;

/// Number pushed after `OP_0` in the genesis coinbase script
const GENESIS_SCRIPT_NUMBER: i64 = 42;

/// Everything needed to rebuild a genesis block and check it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenesisSpec {
    /// Message embedded in the coinbase input
    pub message: String,
    /// Coinbase transaction time
    pub coinbase_time: u32,
    pub version: i32,
    /// Header timestamp
    pub timestamp: u32,
    /// Compact difficulty target
    pub bits: u32,
    pub nonce: u32,
    pub expected_hash: Hash,
    pub expected_merkle_root: Hash,
}

/// Build the genesis block described by `spec`
///
/// Pure and deterministic. It does not check the expected values; see
/// [`create_genesis_block`].
pub fn build_genesis_block(spec: &GenesisSpec) -> Block {
    let script_sig = Script::new()
        .push_opcode(OP_0)
        .push_int(GENESIS_SCRIPT_NUMBER)
        .push_slice(spec.message.as_bytes());

    let coinbase = Transaction::coinbase(spec.coinbase_time, script_sig);
    let merkle_root = coinbase.txid();

    let header = BlockHeader::new(
        spec.version,
        Hash::zero(), // No previous block
        merkle_root,
        spec.timestamp,
        spec.bits,
        spec.nonce,
    );

    Block::new(header, vec![coinbase])
}

/// Check a built genesis block against the expected hash and merkle root
pub fn verify_genesis_block(
    network: Network,
    block: &Block,
    spec: &GenesisSpec,
) -> Result<(), ParamsError> {
    let merkle_root = block.build_merkle_root();
    if merkle_root != spec.expected_merkle_root || block.header.merkle_root != merkle_root {
        error!(%network, computed = %merkle_root, expected = %spec.expected_merkle_root, "genesis merkle root mismatch");
        return Err(ParamsError::GenesisMerkleMismatch {
            network,
            computed: merkle_root,
            expected: spec.expected_merkle_root,
        });
    }

    let hash = block.hash();
    if hash != spec.expected_hash {
        error!(%network, computed = %hash, expected = %spec.expected_hash, "genesis hash mismatch");
        return Err(ParamsError::GenesisHashMismatch {
            network,
            computed: hash,
            expected: spec.expected_hash,
        });
    }

    debug!(%network, %hash, %merkle_root, "genesis block verified");
    Ok(())
}

/// Build and verify the genesis block for a network
pub fn create_genesis_block(network: Network, spec: &GenesisSpec) -> Result<Block, ParamsError> {
    let block = build_genesis_block(spec);
    verify_genesis_block(network, &block, spec)?;
    Ok(block)
}

/// Genesis block statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenesisInfo {
    pub hash: Hash,
    pub merkle_root: Hash,
    pub timestamp: u32,
    pub bits: u32,
    pub nonce: u32,
}

impl GenesisInfo {
    pub fn new(block: &Block) -> Self {
        Self {
            hash: block.hash(),
            merkle_root: block.header.merkle_root,
            timestamp: block.header.timestamp,
            bits: block.header.bits,
            nonce: block.header.nonce,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{GENESIS_COINBASE_TIME, GENESIS_MESSAGE};

    const MERKLE: &str = "f642a816e501caba624a3789f254360ba3bb8593c1cf878b7a94908aedb13ee0";
    const HASH: &str = "00002aedf39ab534a1d6f0e32fe512941cc2dfddff49a0de17f8664ac19c8b50";

    fn spec() -> GenesisSpec {
        GenesisSpec {
            message: GENESIS_MESSAGE.to_string(),
            coinbase_time: GENESIS_COINBASE_TIME,
            version: GENESIS_VERSION,
            timestamp: 1525339768,
            bits: 0x1e3fffff,
            nonce: 1128220,
            expected_hash: Hash::from_hex(HASH).unwrap(),
            expected_merkle_root: Hash::from_hex(MERKLE).unwrap(),
        }
    }

    #[test]
    fn test_genesis_is_deterministic() {
        let genesis1 = build_genesis_block(&spec());
        let genesis2 = build_genesis_block(&spec());
        assert_eq!(genesis1, genesis2);
        assert_eq!(genesis1.hash(), genesis2.hash());
    }

    #[test]
    fn test_genesis_shape() {
        let genesis = build_genesis_block(&spec());
        assert!(genesis.is_genesis());
        assert_eq!(genesis.transactions.len(), 1);

        let coinbase = &genesis.transactions[0];
        assert!(coinbase.is_coinbase());
        assert_eq!(coinbase.outputs.len(), 1);
        assert!(coinbase.outputs[0].is_empty());

        let script = coinbase.inputs[0].script_sig.as_bytes();
        assert_eq!(&script[..4], &[0x00, 0x01, 0x2a, 36]);
        assert_eq!(&script[4..], GENESIS_MESSAGE.as_bytes());
    }

    #[test]
    fn test_genesis_verifies() {
        let block = create_genesis_block(Network::Main, &spec()).unwrap();
        assert_eq!(block.header.merkle_root.to_hex(), MERKLE);
        assert_eq!(block.hash().to_hex(), HASH);
    }

    #[test]
    fn test_changed_nonce_is_integrity_failure() {
        let mut bad = spec();
        bad.nonce += 1;
        let err = create_genesis_block(Network::Main, &bad).unwrap_err();
        assert!(matches!(err, ParamsError::GenesisHashMismatch { .. }));
    }

    #[test]
    fn test_changed_message_is_merkle_failure() {
        let mut bad = spec();
        bad.message.push('!');
        let err = create_genesis_block(Network::Main, &bad).unwrap_err();
        assert!(matches!(err, ParamsError::GenesisMerkleMismatch { .. }));
    }

    #[test]
    fn test_genesis_info() {
        let block = build_genesis_block(&spec());
        let info = GenesisInfo::new(&block);
        assert_eq!(info.timestamp, 1525339768);
        assert_eq!(info.nonce, 1128220);
        assert_eq!(info.hash, block.hash());
    }
}
