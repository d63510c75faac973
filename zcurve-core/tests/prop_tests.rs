//! Property-based tests for the zcurve-core kernel family.
//!
//! Uses proptest to verify the quantified invariants across random inputs:
//! round-trip identity, strategy agreement, masking and bit preservation.

use proptest::prelude::*;

use zcurve_core::kernels::*;

proptest! {
    // =========================================================================
    // Round-trip identity for every strategy pair
    // =========================================================================

    #[test]
    fn prop_roundtrip_3d_64(x in 0u32..0x20_0000, y in 0u32..0x20_0000, z in 0u32..0x20_0000) {
        let encoders: [fn(u32, u32, u32) -> u64; 7] = [
            morton_encode_for_3d_64,
            morton_encode_for_et_3d_64,
            morton_encode_magicbits_3d_64,
            morton_encode_lut_3d_64,
            morton_encode_lut_et_3d_64,
            morton_encode_lut_shifted_3d_64,
            morton_encode_lut_shifted_et_3d_64,
        ];
        let decoders: [fn(u64) -> (u32, u32, u32); 7] = [
            morton_decode_for_3d_64,
            morton_decode_for_et_3d_64,
            morton_decode_magicbits_3d_64,
            morton_decode_lut_3d_64,
            morton_decode_lut_et_3d_64,
            morton_decode_lut_shifted_3d_64,
            morton_decode_lut_shifted_et_3d_64,
        ];
        for encode in encoders {
            for decode in decoders {
                prop_assert_eq!(decode(encode(x, y, z)), (x, y, z));
            }
        }
    }

    #[test]
    fn prop_roundtrip_3d_32(x in 0u16..0x400, y in 0u16..0x400, z in 0u16..0x400) {
        let encoders: [fn(u16, u16, u16) -> u32; 7] = [
            morton_encode_for_3d_32,
            morton_encode_for_et_3d_32,
            morton_encode_magicbits_3d_32,
            morton_encode_lut_3d_32,
            morton_encode_lut_et_3d_32,
            morton_encode_lut_shifted_3d_32,
            morton_encode_lut_shifted_et_3d_32,
        ];
        let decoders: [fn(u32) -> (u16, u16, u16); 7] = [
            morton_decode_for_3d_32,
            morton_decode_for_et_3d_32,
            morton_decode_magicbits_3d_32,
            morton_decode_lut_3d_32,
            morton_decode_lut_et_3d_32,
            morton_decode_lut_shifted_3d_32,
            morton_decode_lut_shifted_et_3d_32,
        ];
        for encode in encoders {
            for decode in decoders {
                prop_assert_eq!(decode(encode(x, y, z)), (x, y, z));
            }
        }
    }

    #[test]
    fn prop_roundtrip_2d_64(x in any::<u32>(), y in any::<u32>()) {
        let m = morton_encode_magicbits_2d_64(x, y);
        prop_assert_eq!(morton_decode_magicbits_2d_64(m), (x, y));
        prop_assert_eq!(morton_decode_lut_2d_64(m), (x, y));
        prop_assert_eq!(morton_decode_for_et_2d_64(m), (x, y));
    }

    #[test]
    fn prop_roundtrip_2d_32(x in any::<u16>(), y in any::<u16>()) {
        let m = morton_encode_lut_shifted_2d_32(x, y);
        prop_assert_eq!(morton_decode_lut_shifted_2d_32(m), (x, y));
        prop_assert_eq!(morton_decode_magicbits_2d_32(m), (x, y));
    }

    // =========================================================================
    // Strategy agreement on arbitrary (also out-of-range) inputs
    // =========================================================================

    #[test]
    fn prop_encode_agreement_3d_64(x in any::<u32>(), y in any::<u32>(), z in any::<u32>()) {
        let want = morton_encode_for_3d_64(x, y, z);
        prop_assert_eq!(morton_encode_for_et_3d_64(x, y, z), want);
        prop_assert_eq!(morton_encode_magicbits_3d_64(x, y, z), want);
        prop_assert_eq!(morton_encode_lut_3d_64(x, y, z), want);
        prop_assert_eq!(morton_encode_lut_et_3d_64(x, y, z), want);
        prop_assert_eq!(morton_encode_lut_shifted_3d_64(x, y, z), want);
        prop_assert_eq!(morton_encode_lut_shifted_et_3d_64(x, y, z), want);
    }

    #[test]
    fn prop_encode_agreement_3d_32(x in any::<u16>(), y in any::<u16>(), z in any::<u16>()) {
        let want = morton_encode_for_3d_32(x, y, z);
        prop_assert_eq!(morton_encode_for_et_3d_32(x, y, z), want);
        prop_assert_eq!(morton_encode_magicbits_3d_32(x, y, z), want);
        prop_assert_eq!(morton_encode_lut_3d_32(x, y, z), want);
        prop_assert_eq!(morton_encode_lut_et_3d_32(x, y, z), want);
        prop_assert_eq!(morton_encode_lut_shifted_3d_32(x, y, z), want);
        prop_assert_eq!(morton_encode_lut_shifted_et_3d_32(x, y, z), want);
    }

    #[test]
    fn prop_decode_agreement_3d_64(m in any::<u64>()) {
        let want = morton_decode_for_3d_64(m);
        prop_assert_eq!(morton_decode_for_et_3d_64(m), want);
        prop_assert_eq!(morton_decode_magicbits_3d_64(m), want);
        prop_assert_eq!(morton_decode_lut_3d_64(m), want);
        prop_assert_eq!(morton_decode_lut_et_3d_64(m), want);
        prop_assert_eq!(morton_decode_lut_shifted_3d_64(m), want);
        prop_assert_eq!(morton_decode_lut_shifted_et_3d_64(m), want);
    }

    #[test]
    fn prop_decode_agreement_3d_32(m in any::<u32>()) {
        let want = morton_decode_for_3d_32(m);
        prop_assert_eq!(morton_decode_for_et_3d_32(m), want);
        prop_assert_eq!(morton_decode_magicbits_3d_32(m), want);
        prop_assert_eq!(morton_decode_lut_3d_32(m), want);
        prop_assert_eq!(morton_decode_lut_et_3d_32(m), want);
        prop_assert_eq!(morton_decode_lut_shifted_3d_32(m), want);
        prop_assert_eq!(morton_decode_lut_shifted_et_3d_32(m), want);
    }

    #[test]
    fn prop_encode_agreement_2d_64(x in any::<u32>(), y in any::<u32>()) {
        let want = morton_encode_for_2d_64(x, y);
        prop_assert_eq!(morton_encode_for_et_2d_64(x, y), want);
        prop_assert_eq!(morton_encode_magicbits_2d_64(x, y), want);
        prop_assert_eq!(morton_encode_lut_2d_64(x, y), want);
        prop_assert_eq!(morton_encode_lut_et_2d_64(x, y), want);
        prop_assert_eq!(morton_encode_lut_shifted_2d_64(x, y), want);
        prop_assert_eq!(morton_encode_lut_shifted_et_2d_64(x, y), want);
    }

    #[test]
    fn prop_encode_agreement_2d_32(x in any::<u16>(), y in any::<u16>()) {
        let want = morton_encode_for_2d_32(x, y);
        prop_assert_eq!(morton_encode_for_et_2d_32(x, y), want);
        prop_assert_eq!(morton_encode_magicbits_2d_32(x, y), want);
        prop_assert_eq!(morton_encode_lut_2d_32(x, y), want);
        prop_assert_eq!(morton_encode_lut_et_2d_32(x, y), want);
        prop_assert_eq!(morton_encode_lut_shifted_2d_32(x, y), want);
        prop_assert_eq!(morton_encode_lut_shifted_et_2d_32(x, y), want);
    }

    #[test]
    fn prop_decode_agreement_2d_64(m in any::<u64>()) {
        let want = morton_decode_for_2d_64(m);
        prop_assert_eq!(morton_decode_for_et_2d_64(m), want);
        prop_assert_eq!(morton_decode_magicbits_2d_64(m), want);
        prop_assert_eq!(morton_decode_lut_2d_64(m), want);
        prop_assert_eq!(morton_decode_lut_et_2d_64(m), want);
        prop_assert_eq!(morton_decode_lut_shifted_2d_64(m), want);
        prop_assert_eq!(morton_decode_lut_shifted_et_2d_64(m), want);
    }

    #[test]
    fn prop_decode_agreement_2d_32(m in any::<u32>()) {
        let want = morton_decode_for_2d_32(m);
        prop_assert_eq!(morton_decode_for_et_2d_32(m), want);
        prop_assert_eq!(morton_decode_magicbits_2d_32(m), want);
        prop_assert_eq!(morton_decode_lut_2d_32(m), want);
        prop_assert_eq!(morton_decode_lut_et_2d_32(m), want);
        prop_assert_eq!(morton_decode_lut_shifted_2d_32(m), want);
        prop_assert_eq!(morton_decode_lut_shifted_et_2d_32(m), want);
    }

    // =========================================================================
    // Masking and top-bit invariants
    // =========================================================================

    #[test]
    fn prop_encode_masks_high_bits_3d_64(x in any::<u32>(), y in any::<u32>(), z in any::<u32>()) {
        // E(t) = E(t & usable_mask), and the top bit of the code stays clear.
        let m = morton_encode_magicbits_3d_64(x, y, z);
        prop_assert_eq!(
            m,
            morton_encode_magicbits_3d_64(x & 0x1F_FFFF, y & 0x1F_FFFF, z & 0x1F_FFFF)
        );
        prop_assert_eq!(m >> 63, 0);
    }

    #[test]
    fn prop_encode_masks_high_bits_3d_32(x in any::<u16>(), y in any::<u16>(), z in any::<u16>()) {
        let m = morton_encode_lut_3d_32(x, y, z);
        prop_assert_eq!(m, morton_encode_lut_3d_32(x & 0x3FF, y & 0x3FF, z & 0x3FF));
        prop_assert_eq!(m >> 30, 0);
    }

    #[test]
    fn prop_spread_compact_3d_64_inverse(x in 0u64..0x20_0000) {
        prop_assert_eq!(compact_3d_64(spread_3d_64(x)), x);
        prop_assert_eq!(spread_3d_64(x).count_ones(), x.count_ones());
    }

    #[test]
    fn prop_spread_compact_2d_64_inverse(x in 0u64..0x1_0000_0000) {
        prop_assert_eq!(compact_2d_64(spread_2d_64(x)), x);
        prop_assert_eq!(spread_2d_64(x).count_ones(), x.count_ones());
    }
}
