//! Bit-field extractor tests.

use mipsim_core::isa::bits::{field, mask};
use proptest::prelude::*;

#[test]
fn mask_single_bit() {
    assert_eq!(mask(0, 0), 0x0000_0001);
    assert_eq!(mask(31, 31), 0x8000_0000);
}

#[test]
fn mask_opcode_range() {
    assert_eq!(mask(26, 31), 0xFC00_0000);
}

#[test]
fn mask_funct_range() {
    assert_eq!(mask(0, 5), 0x0000_003F);
}

#[test]
fn mask_full_word() {
    assert_eq!(mask(0, 31), u32::MAX);
}

#[test]
fn field_extracts_shifted_bits() {
    assert_eq!(field(0xABCD_1234, 16, 31), 0xABCD);
    assert_eq!(field(0xABCD_1234, 0, 15), 0x1234);
    assert_eq!(field(0xFFFF_FFFF, 26, 31), 0x3F);
}

proptest! {
    /// Every bit inside `[a..=b]` is set and every bit outside it is clear.
    #[test]
    fn mask_sets_exactly_the_requested_bits(a in 0u32..32, width in 0u32..32) {
        prop_assume!(a + width < 32);
        let b = a + width;
        let m = mask(a, b);
        for bit in 0..32u32 {
            let expected = bit >= a && bit <= b;
            prop_assert_eq!(m & (1 << bit) != 0, expected, "bit {}", bit);
        }
    }

    /// `field` is bounded by the width of the requested range.
    #[test]
    fn field_fits_in_its_width(word in any::<u32>(), a in 0u32..32, width in 0u32..31) {
        prop_assume!(a + width < 32);
        let b = a + width;
        prop_assert!(field(word, a, b) < (1 << (width + 1)));
    }
}
