//! Transaction structure
//!
//! Timestamped transactions in the proof-of-stake wire layout: the
//! transaction time follows the version field.

use serde::Serialize;
use crate::crypto::{double_sha256, Hash};
use super::Script;

/// Output index marking an input that spends nothing
pub const NULL_OUTPUT_INDEX: u32 = 0xFFFF_FFFF;

/// Sequence number of a final input
pub const FINAL_SEQUENCE: u32 = 0xFFFF_FFFF;

/// A transaction input referencing a previous output
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TxInput {
    /// Hash of the transaction containing the output
    pub prev_tx_hash: Hash,
    /// Index of the output in that transaction
    pub output_index: u32,
    /// Unlocking script
    pub script_sig: Script,
    pub sequence: u32,
}

/// A transaction output
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TxOutput {
    /// Amount in base units
    pub amount: i64,
    /// Locking script
    pub script_pubkey: Script,
}

impl TxOutput {
    /// An output with no value and no script
    pub fn empty() -> Self {
        Self {
            amount: 0,
            script_pubkey: Script::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.amount == 0 && self.script_pubkey.is_empty()
    }
}

/// A complete transaction
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Transaction {
    /// Transaction version
    pub version: i32,
    /// Transaction timestamp (seconds since Unix epoch)
    pub time: u32,
    /// Transaction inputs
    pub inputs: Vec<TxInput>,
    /// Transaction outputs
    pub outputs: Vec<TxOutput>,
    /// Lock time (block height or timestamp)
    pub lock_time: u32,
}

impl Transaction {
    /// Create a coinbase transaction whose only input carries `script_sig`
    /// and whose only output is empty
    pub fn coinbase(time: u32, script_sig: Script) -> Self {
        Self {
            version: 1,
            time,
            inputs: vec![TxInput {
                prev_tx_hash: Hash::zero(),
                output_index: NULL_OUTPUT_INDEX,
                script_sig,
                sequence: FINAL_SEQUENCE,
            }],
            outputs: vec![TxOutput::empty()],
            lock_time: 0,
        }
    }

    /// Check if this is a coinbase transaction
    pub fn is_coinbase(&self) -> bool {
        self.inputs.len() == 1
            && self.inputs[0].prev_tx_hash.is_zero()
            && self.inputs[0].output_index == NULL_OUTPUT_INDEX
    }

    /// Calculate transaction id
    pub fn txid(&self) -> Hash {
        double_sha256(&self.to_bytes())
    }

    /// Wire serialization
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();

        bytes.extend_from_slice(&self.version.to_le_bytes());
        bytes.extend_from_slice(&self.time.to_le_bytes());

        write_compact_size(&mut bytes, self.inputs.len() as u64);
        for input in &self.inputs {
            bytes.extend_from_slice(&input.prev_tx_hash.0);
            bytes.extend_from_slice(&input.output_index.to_le_bytes());
            write_compact_size(&mut bytes, input.script_sig.len() as u64);
            bytes.extend_from_slice(input.script_sig.as_bytes());
            bytes.extend_from_slice(&input.sequence.to_le_bytes());
        }

        write_compact_size(&mut bytes, self.outputs.len() as u64);
        for output in &self.outputs {
            bytes.extend_from_slice(&output.amount.to_le_bytes());
            write_compact_size(&mut bytes, output.script_pubkey.len() as u64);
            bytes.extend_from_slice(output.script_pubkey.as_bytes());
        }

        bytes.extend_from_slice(&self.lock_time.to_le_bytes());

        bytes
    }
}

/// Append a Bitcoin-style variable-length integer
pub fn write_compact_size(out: &mut Vec<u8>, n: u64) {
    match n {
        0..=0xfc => out.push(n as u8),
        0xfd..=0xffff => {
            out.push(0xfd);
            out.extend_from_slice(&(n as u16).to_le_bytes());
        }
        0x1_0000..=0xffff_ffff => {
            out.push(0xfe);
            out.extend_from_slice(&(n as u32).to_le_bytes());
        }
        _ => {
            out.push(0xff);
            out.extend_from_slice(&n.to_le_bytes());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coinbase_detection() {
        let tx = Transaction::coinbase(0, Script::new());
        assert!(tx.is_coinbase());
        assert!(tx.outputs[0].is_empty());
    }

    #[test]
    fn test_compact_size_boundaries() {
        let mut out = Vec::new();
        write_compact_size(&mut out, 0xfc);
        assert_eq!(out, vec![0xfc]);

        out.clear();
        write_compact_size(&mut out, 0xfd);
        assert_eq!(out, vec![0xfd, 0xfd, 0x00]);

        out.clear();
        write_compact_size(&mut out, 0x1_0000);
        assert_eq!(out, vec![0xfe, 0x00, 0x00, 0x01, 0x00]);
    }

    #[test]
    fn test_serialization_layout() {
        let tx = Transaction::coinbase(0x01020304, Script::new());
        let bytes = tx.to_bytes();
        // version, time, 1 input (32 + 4 + 1 + 0 + 4), 1 output (8 + 1), lock time
        assert_eq!(bytes.len(), 4 + 4 + 1 + 41 + 1 + 9 + 4);
        assert_eq!(&bytes[4..8], &[0x04, 0x03, 0x02, 0x01]);
    }

    #[test]
    fn test_txid_depends_on_time() {
        let a = Transaction::coinbase(1, Script::new());
        let b = Transaction::coinbase(2, Script::new());
        assert_ne!(a.txid(), b.txid());
    }
}
