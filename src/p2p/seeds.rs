//! Seed Node Configuration
//!
//! Bootstrap peers for initial peer discovery. A new node connects to one
//! or two of these and learns the rest of the network from them.

use rand::Rng;
use serde::Serialize;
use std::net::{IpAddr, Ipv6Addr, SocketAddr};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;
use crate::constants::ONE_WEEK;

/// Compact fixed seed record: a 16-byte address (IPv4 seeds are
/// IPv4-mapped) and a port
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSpec6 {
    pub addr: [u8; 16],
    pub port: u16,
}

impl SeedSpec6 {
    pub const fn new(addr: [u8; 16], port: u16) -> Self {
        Self { addr, port }
    }
}

/// A peer address with the time it was last seen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetAddress {
    pub ip: Ipv6Addr,
    pub port: u16,
    /// Seconds since Unix epoch
    pub last_seen: i64,
}

impl NetAddress {
    /// Socket address to dial, with IPv4-mapped addresses unwrapped
    pub fn socket_addr(&self) -> SocketAddr {
        let ip = match self.ip.to_ipv4_mapped() {
            Some(v4) => IpAddr::V4(v4),
            None => IpAddr::V6(self.ip),
        };
        SocketAddr::new(ip, self.port)
    }
}

/// DNS seed entry: a display name and the host to resolve
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DnsSeed {
    pub name: String,
    pub host: String,
}

impl DnsSeed {
    pub fn new(name: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            host: host.into(),
        }
    }
}

/// Expand compact seed records into addresses
///
/// Each seed gets a random last-seen time between one and two weeks before
/// `now`, so addresses learned from live peers (which carry newer times)
/// take precedence once the node is connected.
pub fn convert_seed6<R: Rng + ?Sized>(seeds: &[SeedSpec6], now: i64, rng: &mut R) -> Vec<NetAddress> {
    let addresses: Vec<NetAddress> = seeds
        .iter()
        .map(|seed| NetAddress {
            ip: Ipv6Addr::from(seed.addr),
            port: seed.port,
            last_seen: now - rng.gen_range(0..ONE_WEEK) - ONE_WEEK,
        })
        .collect();

    debug!(count = addresses.len(), "converted fixed seeds");
    addresses
}

/// Current wall-clock time in seconds since Unix epoch
pub fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
