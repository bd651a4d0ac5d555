//! Network parameter profiles
//!
//! A profile starts life as a [`ProfileDraft`]: plain owned values that can
//! be copied and overridden field by field. [`ProfileDraft::seal`] builds and
//! verifies the genesis block, materializes the fixed seeds and returns an
//! immutable [`ChainParams`]. Testnet is the Mainnet draft, cloned, with an
//! explicit override list applied, so the two share no state.

use primitive_types::U256;
use rand::Rng;
use serde::Serialize;
use crate::constants::{self, MAX_BLOCK_HEIGHT};
use crate::consensus::{target_to_compact, Block};
use crate::crypto::Hash;
use crate::node::{create_genesis_block, GenesisSpec, GENESIS_VERSION};
use crate::p2p::{convert_seed6, unix_now, DnsSeed, NetAddress, SeedSpec6};
use super::{Base58Prefixes, Base58Type, Network, ParamsError};

/// Mixing pool settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MixingPoolParams {
    /// Transactions collected before a pool round runs
    pub max_transactions: u32,
    /// Address used for the pool's placeholder outputs
    pub dummy_address: String,
}

/// Immutable parameters of one network
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChainParams {
    network: Network,
    #[serde(with = "hex::serde")]
    message_start: [u8; 4],
    #[serde(with = "hex::serde")]
    alert_key: Vec<u8>,
    default_port: u16,
    rpc_port: u16,
    proof_of_work_limit: U256,
    proof_of_stake_limit: U256,
    base58_prefixes: Base58Prefixes,
    dns_seeds: Vec<DnsSeed>,
    fixed_seeds: Vec<NetAddress>,
    end_pow_block: u32,
    start_pos_block: u32,
    data_dir: String,
    mixing_pool: MixingPoolParams,
    genesis_hash: Hash,
    #[serde(skip)]
    genesis: Block,
}

impl ChainParams {
    /// Build the production network profile
    pub fn mainnet() -> Result<Self, ParamsError> {
        ProfileDraft::mainnet()?.seal_now()
    }

    /// Build the test network profile
    pub fn testnet() -> Result<Self, ParamsError> {
        ProfileDraft::testnet()?.seal_now()
    }

    pub fn network(&self) -> Network {
        self.network
    }

    /// Magic bytes that start every wire message
    pub fn message_start(&self) -> &[u8; 4] {
        &self.message_start
    }

    pub fn alert_key(&self) -> &[u8] {
        &self.alert_key
    }

    pub fn default_port(&self) -> u16 {
        self.default_port
    }

    pub fn rpc_port(&self) -> u16 {
        self.rpc_port
    }

    pub fn proof_of_work_limit(&self) -> U256 {
        self.proof_of_work_limit
    }

    pub fn proof_of_stake_limit(&self) -> U256 {
        self.proof_of_stake_limit
    }

    pub fn base58_prefixes(&self) -> &Base58Prefixes {
        &self.base58_prefixes
    }

    pub fn base58_prefix(&self, kind: Base58Type) -> &[u8] {
        self.base58_prefixes.get(kind)
    }

    pub fn dns_seeds(&self) -> &[DnsSeed] {
        &self.dns_seeds
    }

    pub fn fixed_seeds(&self) -> &[NetAddress] {
        &self.fixed_seeds
    }

    /// Last height at which proof-of-work blocks are accepted
    pub fn end_pow_block(&self) -> u32 {
        self.end_pow_block
    }

    /// First height at which proof-of-stake blocks are accepted
    pub fn start_pos_block(&self) -> u32 {
        self.start_pos_block
    }

    pub fn is_proof_of_work_allowed(&self, height: u32) -> bool {
        height <= self.end_pow_block
    }

    pub fn is_proof_of_stake_allowed(&self, height: u32) -> bool {
        height >= self.start_pos_block
    }

    /// Subdirectory of the data directory, empty for the production network
    pub fn data_dir(&self) -> &str {
        &self.data_dir
    }

    pub fn mixing_pool(&self) -> &MixingPoolParams {
        &self.mixing_pool
    }

    pub fn genesis_block(&self) -> &Block {
        &self.genesis
    }

    pub fn genesis_hash(&self) -> Hash {
        self.genesis_hash
    }
}

/// One explicit field replacement applied to a draft
#[derive(Debug, Clone)]
pub enum ParamsOverride {
    Network(Network),
    MessageStart([u8; 4]),
    AlertKey(Vec<u8>),
    Ports { default_port: u16, rpc_port: u16 },
    ProofOfWorkLimit(U256),
    ProofOfStakeLimit(U256),
    DataDir(String),
    /// New header time and nonce, with the hash they are expected to produce
    Genesis {
        timestamp: u32,
        nonce: u32,
        expected_hash: Hash,
    },
    Base58Prefixes(Base58Prefixes),
    DnsSeeds(Vec<DnsSeed>),
    FixedSeeds(Vec<SeedSpec6>),
    EndPowBlock(u32),
    StartPosBlock(u32),
}

/// Mutable, unverified profile values
#[derive(Debug, Clone)]
pub struct ProfileDraft {
    pub network: Network,
    pub message_start: [u8; 4],
    pub alert_key: Vec<u8>,
    pub default_port: u16,
    pub rpc_port: u16,
    pub proof_of_work_limit: U256,
    pub proof_of_stake_limit: U256,
    pub base58_prefixes: Base58Prefixes,
    pub dns_seeds: Vec<DnsSeed>,
    pub fixed_seeds: Vec<SeedSpec6>,
    pub end_pow_block: u32,
    pub start_pos_block: u32,
    pub data_dir: String,
    pub mixing_pool: MixingPoolParams,
    /// `bits` is ignored; sealing derives it from the proof-of-work limit
    pub genesis: GenesisSpec,
}

impl ProfileDraft {
    /// Production network values
    pub fn mainnet() -> Result<Self, ParamsError> {
        Ok(Self {
            network: Network::Main,
            message_start: [0x2d, 0xf3, 0xa2, 0x3b],
            alert_key: decode_hex("mainnet alert key", mainnet::ALERT_KEY)?,
            default_port: 2222,
            rpc_port: 2223,
            proof_of_work_limit: U256::MAX >> 18,
            proof_of_stake_limit: U256::MAX >> 18,
            base58_prefixes: Base58Prefixes {
                pubkey_address: [102],
                script_address: [57],
                secret_key: [55],
                stealth_address: [59],
                ext_public_key: [0x04, 0x88, 0xB2, 0x1E],
                ext_secret_key: [0x04, 0x88, 0xAD, 0xE4],
            },
            dns_seeds: vec![DnsSeed::new("127.0.0.1", "127.0.0.1")],
            fixed_seeds: mainnet::FIXED_SEEDS.to_vec(),
            end_pow_block: 30_000,
            start_pos_block: 0,
            data_dir: String::new(),
            mixing_pool: MixingPoolParams {
                max_transactions: 3,
                dummy_address: mainnet::POOL_DUMMY_ADDRESS.to_string(),
            },
            genesis: GenesisSpec {
                message: constants::GENESIS_MESSAGE.to_string(),
                coinbase_time: constants::GENESIS_COINBASE_TIME,
                version: GENESIS_VERSION,
                timestamp: 1525339768,
                bits: 0,
                nonce: 1128220,
                expected_hash: parse_hash("mainnet genesis hash", mainnet::GENESIS_HASH)?,
                expected_merkle_root: parse_hash("genesis merkle root", constants::GENESIS_MERKLE_ROOT)?,
            },
        })
    }

    /// Test network values: the Mainnet draft with [`ProfileDraft::testnet_overrides`]
    pub fn testnet() -> Result<Self, ParamsError> {
        let mut draft = Self::mainnet()?;
        for item in Self::testnet_overrides()? {
            draft.apply(item);
        }
        Ok(draft)
    }

    pub fn testnet_overrides() -> Result<Vec<ParamsOverride>, ParamsError> {
        Ok(vec![
            ParamsOverride::Network(Network::Testnet),
            ParamsOverride::MessageStart([0x2c, 0xcc, 0xc3, 0xca]),
            ParamsOverride::ProofOfWorkLimit(U256::MAX >> 16),
            ParamsOverride::ProofOfStakeLimit(U256::MAX >> 16),
            ParamsOverride::AlertKey(decode_hex("testnet alert key", testnet::ALERT_KEY)?),
            ParamsOverride::Ports {
                default_port: 2223,
                rpc_port: 2222,
            },
            ParamsOverride::DataDir("testnet".to_string()),
            ParamsOverride::Genesis {
                timestamp: 1525339798,
                nonce: 2807444,
                expected_hash: parse_hash("testnet genesis hash", testnet::GENESIS_HASH)?,
            },
            ParamsOverride::FixedSeeds(Vec::new()),
            ParamsOverride::DnsSeeds(Vec::new()),
            ParamsOverride::Base58Prefixes(Base58Prefixes {
                pubkey_address: [103],
                script_address: [39],
                secret_key: [63],
                stealth_address: [37],
                ext_public_key: [0x04, 0x35, 0x87, 0xCF],
                ext_secret_key: [0x04, 0x35, 0x83, 0x94],
            }),
            ParamsOverride::EndPowBlock(MAX_BLOCK_HEIGHT),
        ])
    }

    /// Replace one field
    pub fn apply(&mut self, item: ParamsOverride) {
        match item {
            ParamsOverride::Network(network) => self.network = network,
            ParamsOverride::MessageStart(bytes) => self.message_start = bytes,
            ParamsOverride::AlertKey(key) => self.alert_key = key,
            ParamsOverride::Ports { default_port, rpc_port } => {
                self.default_port = default_port;
                self.rpc_port = rpc_port;
            }
            ParamsOverride::ProofOfWorkLimit(limit) => self.proof_of_work_limit = limit,
            ParamsOverride::ProofOfStakeLimit(limit) => self.proof_of_stake_limit = limit,
            ParamsOverride::DataDir(dir) => self.data_dir = dir,
            ParamsOverride::Genesis { timestamp, nonce, expected_hash } => {
                self.genesis.timestamp = timestamp;
                self.genesis.nonce = nonce;
                self.genesis.expected_hash = expected_hash;
            }
            ParamsOverride::Base58Prefixes(prefixes) => self.base58_prefixes = prefixes,
            ParamsOverride::DnsSeeds(seeds) => self.dns_seeds = seeds,
            ParamsOverride::FixedSeeds(seeds) => self.fixed_seeds = seeds,
            ParamsOverride::EndPowBlock(height) => self.end_pow_block = height,
            ParamsOverride::StartPosBlock(height) => self.start_pos_block = height,
        }
    }

    /// Seal against the wall clock and the thread-local RNG
    pub fn seal_now(self) -> Result<ChainParams, ParamsError> {
        self.seal(unix_now(), &mut rand::thread_rng())
    }

    /// Verify the genesis block and produce the immutable profile
    pub fn seal<R: Rng + ?Sized>(self, now: i64, rng: &mut R) -> Result<ChainParams, ParamsError> {
        let genesis_spec = GenesisSpec {
            bits: target_to_compact(self.proof_of_work_limit),
            ..self.genesis
        };
        let genesis = create_genesis_block(self.network, &genesis_spec)?;
        let fixed_seeds = convert_seed6(&self.fixed_seeds, now, rng);

        Ok(ChainParams {
            network: self.network,
            message_start: self.message_start,
            alert_key: self.alert_key,
            default_port: self.default_port,
            rpc_port: self.rpc_port,
            proof_of_work_limit: self.proof_of_work_limit,
            proof_of_stake_limit: self.proof_of_stake_limit,
            base58_prefixes: self.base58_prefixes,
            dns_seeds: self.dns_seeds,
            fixed_seeds,
            end_pow_block: self.end_pow_block,
            start_pos_block: self.start_pos_block,
            data_dir: self.data_dir,
            mixing_pool: self.mixing_pool,
            genesis_hash: genesis.hash(),
            genesis,
        })
    }
}

fn decode_hex(field: &'static str, value: &str) -> Result<Vec<u8>, ParamsError> {
    hex::decode(value).map_err(|source| ParamsError::InvalidHex { field, source })
}

fn parse_hash(field: &'static str, value: &str) -> Result<Hash, ParamsError> {
    Hash::from_hex(value).map_err(|source| ParamsError::InvalidHex { field, source })
}

mod mainnet {
    use crate::p2p::SeedSpec6;

    pub const ALERT_KEY: &str = "045874288a8c6ebbf491443ebfa1207275d71cb009f201c118b00cf8e77641c7f1e63e330ba909842c009af375c0f5c1c7368e8d7e2066168c40ce3cb629cf212f";
    pub const GENESIS_HASH: &str = "00002aedf39ab534a1d6f0e32fe512941cc2dfddff49a0de17f8664ac19c8b50";
    pub const POOL_DUMMY_ADDRESS: &str = "iGrwXgFQbhiSBsxVSSCeQmty2qzCt4uS7Q";

    pub const FIXED_SEEDS: [SeedSpec6; 2] = [
        // ::ffff:127.0.0.1
        SeedSpec6::new([0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff, 127, 0, 0, 1], 2222),
        // ::1
        SeedSpec6::new([0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1], 2222),
    ];
}

mod testnet {
    pub const ALERT_KEY: &str = "0479e305a8ad845fbbf2d7314b3db290ec21f87010fb04f5d73b067e23da99fa2cb55ed98f6f60247d5795621f0ddaf876bf194265dbf30284c99a9bffdfe79d5f";
    pub const GENESIS_HASH: &str = "0000652b0045e3658f59ee2a82fadc46f0a2cfcf335e79dd6aac703735441dae";
}
