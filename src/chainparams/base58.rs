//! Base58Check prefix table
//!
//! Prefixes keep addresses and keys from different networks, and for
//! different purposes, from being mistaken for one another.

use serde::Serialize;
use crate::crypto::double_sha256;
use super::AddressError;

const CHECKSUM_LEN: usize = 4;

/// What a Base58Check string encodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Base58Type {
    PubkeyAddress,
    ScriptAddress,
    SecretKey,
    StealthAddress,
    ExtPublicKey,
    ExtSecretKey,
}

impl Base58Type {
    pub const ALL: [Base58Type; 6] = [
        Base58Type::PubkeyAddress,
        Base58Type::ScriptAddress,
        Base58Type::SecretKey,
        Base58Type::StealthAddress,
        Base58Type::ExtPublicKey,
        Base58Type::ExtSecretKey,
    ];
}

/// Prefix bytes for each [`Base58Type`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Base58Prefixes {
    pub pubkey_address: [u8; 1],
    pub script_address: [u8; 1],
    pub secret_key: [u8; 1],
    pub stealth_address: [u8; 1],
    #[serde(with = "hex::serde")]
    pub ext_public_key: [u8; 4],
    #[serde(with = "hex::serde")]
    pub ext_secret_key: [u8; 4],
}

impl Base58Prefixes {
    pub fn get(&self, kind: Base58Type) -> &[u8] {
        match kind {
            Base58Type::PubkeyAddress => &self.pubkey_address,
            Base58Type::ScriptAddress => &self.script_address,
            Base58Type::SecretKey => &self.secret_key,
            Base58Type::StealthAddress => &self.stealth_address,
            Base58Type::ExtPublicKey => &self.ext_public_key,
            Base58Type::ExtSecretKey => &self.ext_secret_key,
        }
    }

    /// Base58Check-encode `payload` under the prefix for `kind`
    pub fn encode_check(&self, kind: Base58Type, payload: &[u8]) -> String {
        let prefix = self.get(kind);
        let mut data = Vec::with_capacity(prefix.len() + payload.len() + CHECKSUM_LEN);
        data.extend_from_slice(prefix);
        data.extend_from_slice(payload);

        let checksum = double_sha256(&data);
        data.extend_from_slice(&checksum.0[..CHECKSUM_LEN]);

        bs58::encode(data).into_string()
    }

    /// Decode a Base58Check string and strip the prefix for `kind`
    pub fn decode_check(&self, kind: Base58Type, encoded: &str) -> Result<Vec<u8>, AddressError> {
        let decoded = bs58::decode(encoded)
            .into_vec()
            .map_err(|_| AddressError::InvalidBase58)?;

        let prefix = self.get(kind);
        if decoded.len() < prefix.len() + CHECKSUM_LEN {
            return Err(AddressError::TooShort);
        }

        let (body, checksum) = decoded.split_at(decoded.len() - CHECKSUM_LEN);
        if checksum != &double_sha256(body).0[..CHECKSUM_LEN] {
            return Err(AddressError::BadChecksum);
        }

        body.strip_prefix(prefix)
            .map(<[u8]>::to_vec)
            .ok_or(AddressError::PrefixMismatch(kind))
    }
}
