// =============================================================================
// Precomputed Lookup Tables
// =============================================================================
//
// One byte of coordinate (encode) or one Morton chunk (decode) per entry.
// Every table is generated at compile time from the bit-at-a-time reference
// in bits.rs, so the LUT kernels cannot drift from the iterative ones.
//
// 3D decode tables are indexed by 9-bit chunks: 9 is the smallest multiple
// of 3 covering a byte, giving exactly three coordinate bits per axis per
// chunk. 2D tables are plain byte-indexed.

use crate::bits::{gather_ref_u64, spread_ref_u64};

const ENCODE_2D_X_TABLE: [u16; 256] = make_encode_2d(0);
const ENCODE_2D_Y_TABLE: [u16; 256] = make_encode_2d(1);
const ENCODE_3D_X_TABLE: [u32; 256] = make_encode_3d(0);
const ENCODE_3D_Y_TABLE: [u32; 256] = make_encode_3d(1);
const ENCODE_3D_Z_TABLE: [u32; 256] = make_encode_3d(2);
const DECODE_2D_X_TABLE: [u8; 256] = make_decode_2d(0);
const DECODE_2D_Y_TABLE: [u8; 256] = make_decode_2d(1);
const DECODE_3D_X_TABLE: [u8; 512] = make_decode_3d(0);
const DECODE_3D_Y_TABLE: [u8; 512] = make_decode_3d(1);
const DECODE_3D_Z_TABLE: [u8; 512] = make_decode_3d(2);

/// Morton pattern of one coordinate byte on the 2D x axis: bit `i` at bit `2i`.
pub static ENCODE_2D_X: [u16; 256] = ENCODE_2D_X_TABLE;

/// Axis-1 companion of [`ENCODE_2D_X`]: the same spread, pre-shifted left by one.
pub static ENCODE_2D_Y: [u16; 256] = ENCODE_2D_Y_TABLE;

/// Morton pattern of one coordinate byte on the 3D x axis: bit `i` at bit `3i`.
pub static ENCODE_3D_X: [u32; 256] = ENCODE_3D_X_TABLE;

/// Axis-1 companion of [`ENCODE_3D_X`].
pub static ENCODE_3D_Y: [u32; 256] = ENCODE_3D_Y_TABLE;

/// Axis-2 companion of [`ENCODE_3D_X`].
pub static ENCODE_3D_Z: [u32; 256] = ENCODE_3D_Z_TABLE;

/// Even bits of an 8-bit Morton chunk, compacted to the low nibble.
pub static DECODE_2D_X: [u8; 256] = DECODE_2D_X_TABLE;

/// Odd bits of an 8-bit Morton chunk, compacted to the low nibble.
pub static DECODE_2D_Y: [u8; 256] = DECODE_2D_Y_TABLE;

/// Bits 0, 3, 6 of a 9-bit Morton chunk, compacted to the low three bits.
pub static DECODE_3D_X: [u8; 512] = DECODE_3D_X_TABLE;

/// Bits 1, 4, 7 of a 9-bit Morton chunk, compacted to the low three bits.
pub static DECODE_3D_Y: [u8; 512] = DECODE_3D_Y_TABLE;

/// Bits 2, 5, 8 of a 9-bit Morton chunk, compacted to the low three bits.
pub static DECODE_3D_Z: [u8; 512] = DECODE_3D_Z_TABLE;

const fn make_encode_2d(axis: u32) -> [u16; 256] {
    let mut table = [0u16; 256];
    let mut b = 0;
    while b < 256 {
        table[b] = (spread_ref_u64(b as u64, 2, 8) << axis) as u16;
        b += 1;
    }
    table
}

const fn make_encode_3d(axis: u32) -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut b = 0;
    while b < 256 {
        table[b] = (spread_ref_u64(b as u64, 3, 8) << axis) as u32;
        b += 1;
    }
    table
}

const fn make_decode_2d(axis: u32) -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut c = 0;
    while c < 256 {
        table[c] = gather_ref_u64((c as u64) >> axis, 2, 4) as u8;
        c += 1;
    }
    table
}

const fn make_decode_3d(axis: u32) -> [u8; 512] {
    let mut table = [0u8; 512];
    let mut c = 0;
    while c < 512 {
        table[c] = gather_ref_u64((c as u64) >> axis, 3, 3) as u8;
        c += 1;
    }
    table
}

// Cross-family agreement: a full byte through each magic cascade must match
// its table entry, and decoding a spread byte must give the byte back.
const _: () = {
    use crate::kernels::dim2::{spread_2d_32, spread_2d_64};
    use crate::kernels::dim3::{spread_3d_32, spread_3d_64};

    assert!(ENCODE_2D_X_TABLE[0xFF] as u32 == spread_2d_32(0xFF));
    assert!(ENCODE_2D_X_TABLE[0xA7] as u64 == spread_2d_64(0xA7));
    assert!(ENCODE_2D_Y_TABLE[0xFF] as u32 == spread_2d_32(0xFF) << 1);
    assert!(ENCODE_3D_X_TABLE[0xFF] == spread_3d_32(0xFF));
    assert!(ENCODE_3D_X_TABLE[0xA7] as u64 == spread_3d_64(0xA7));
    assert!(ENCODE_3D_Y_TABLE[0xFF] == spread_3d_32(0xFF) << 1);
    assert!(ENCODE_3D_Z_TABLE[0xFF] == spread_3d_32(0xFF) << 2);
    assert!(DECODE_2D_X_TABLE[0x55] == 0x0F);
    assert!(DECODE_2D_Y_TABLE[0xAA] == 0x0F);
    assert!(DECODE_3D_X_TABLE[0b001_001_001] == 0b111);
    assert!(DECODE_3D_Y_TABLE[0b010_010_000] == 0b110);
    assert!(DECODE_3D_Z_TABLE[0b100_000_100] == 0b101);
};
