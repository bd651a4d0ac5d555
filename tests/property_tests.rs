//! Property-based tests for Pearl chain parameters
//!
//! These tests verify invariants hold under random inputs.

use primitive_types::U256;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use pearl_core::consensus::{compact_to_target, target_to_compact, BlockHeader};
use pearl_core::constants::ONE_WEEK;
use pearl_core::crypto::Hash;
use pearl_core::p2p::{convert_seed6, SeedSpec6};

// ============================================================================
// PROPERTY-BASED TESTS
// ============================================================================

proptest! {
    /// Every converted seed is last seen between one and two weeks ago
    #[test]
    fn prop_seed_last_seen_window(
        now in (2 * ONE_WEEK)..4_000_000_000i64,
        rng_seed in any::<u64>(),
        records in prop::collection::vec((any::<[u8; 16]>(), any::<u16>()), 0..32),
    ) {
        let seeds: Vec<SeedSpec6> = records
            .iter()
            .map(|(addr, port)| SeedSpec6::new(*addr, *port))
            .collect();

        let mut rng = StdRng::seed_from_u64(rng_seed);
        let out = convert_seed6(&seeds, now, &mut rng);

        prop_assert_eq!(out.len(), seeds.len());
        for (addr, seed) in out.iter().zip(&seeds) {
            prop_assert_eq!(addr.ip.octets(), seed.addr);
            prop_assert_eq!(addr.port, seed.port);
            prop_assert!(addr.last_seen >= now - 2 * ONE_WEEK);
            prop_assert!(addr.last_seen <= now - ONE_WEEK);
        }
    }

    /// Compact encoding never loosens a target
    #[test]
    fn prop_compact_never_exceeds_target(shift in 0u32..255) {
        let target = U256::MAX >> shift;
        let decoded = compact_to_target(target_to_compact(target)).unwrap();
        prop_assert!(decoded <= target);
    }

    /// Block hash is deterministic
    #[test]
    fn prop_block_hash_deterministic(
        version in 1i32..10i32,
        timestamp in any::<u32>(),
        bits in 0x1c000001u32..0x1f000000u32,
        nonce in any::<u32>(),
    ) {
        let header1 = BlockHeader::new(version, Hash::zero(), Hash::zero(), timestamp, bits, nonce);
        let header2 = BlockHeader::new(version, Hash::zero(), Hash::zero(), timestamp, bits, nonce);

        prop_assert_eq!(header1.hash(), header2.hash());
    }
}

#[test]
fn test_seed_example() {
    let now = 1_600_000_000;
    let seed = SeedSpec6::new(std::net::Ipv6Addr::LOCALHOST.octets(), 2222);
    let out = convert_seed6(&[seed], now, &mut rand::thread_rng());

    assert_eq!(out[0].ip, std::net::Ipv6Addr::LOCALHOST);
    assert_eq!(out[0].port, 2222);
    assert!((now - 1_209_600..=now - 604_800).contains(&out[0].last_seen));
}
