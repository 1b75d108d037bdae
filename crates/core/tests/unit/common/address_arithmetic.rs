//! Block Address Tests.
//!
//! Byte addresses collapse to 64-byte blocks; blocks map to sets by modulo.

use nbcache_core::BlockAddr;
use nbcache_core::common::{LINE_BYTES, LINE_SHIFT};
use proptest::prelude::*;
use rstest::rstest;

#[test]
fn line_geometry_is_64_bytes() {
    assert_eq!(LINE_SHIFT, 6);
    assert_eq!(LINE_BYTES, 64);
}

#[rstest]
#[case(0x0, 0)]
#[case(0x3f, 0)]
#[case(0x40, 1)]
#[case(0x1234, 0x48)]
#[case(u64::MAX, u64::MAX >> 6)]
fn block_drops_line_offset(#[case] addr: u64, #[case] block: u64) {
    assert_eq!(BlockAddr::of(addr), BlockAddr(block));
    assert_eq!(BlockAddr::of(addr).val(), block);
}

#[test]
fn base_is_first_byte_of_line() {
    assert_eq!(BlockAddr::of(0x1234).base(), 0x1200);
    assert_eq!(BlockAddr(3).base(), 0xc0);
}

/// Consecutive blocks walk the sets round-robin.
#[rstest]
#[case(2, [0, 1, 0, 1])]
#[case(3, [0, 1, 2, 0])]
#[case(1, [0, 0, 0, 0])]
fn consecutive_blocks_cycle_through_sets(#[case] sets: usize, #[case] expected: [usize; 4]) {
    let got: Vec<_> = (0..4u64).map(|n| BlockAddr(n).set_index(sets)).collect();
    assert_eq!(got, expected);
}

#[test]
fn display_is_hex_block_number() {
    assert_eq!(BlockAddr::of(0x1000).to_string(), "0x40");
}

proptest! {
    #[test]
    fn every_byte_of_a_line_shares_block_and_set(addr in any::<u64>(), sets in 1usize..1024) {
        let block = BlockAddr::of(addr);
        let first = BlockAddr::of(block.base());
        let last = BlockAddr::of(block.base() | (LINE_BYTES - 1));
        prop_assert_eq!(first, block);
        prop_assert_eq!(last, block);
        prop_assert_eq!(first.set_index(sets), block.set_index(sets));
        prop_assert!(block.set_index(sets) < sets);
    }
}
