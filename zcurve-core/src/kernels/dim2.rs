// =============================================================================
// 2D Morton Kernels
// =============================================================================
//
// Coordinates occupy the full 16 (32-bit codes) or 32 (64-bit codes) bits,
// so the usable range is exactly the coordinate type and no masking is
// needed on entry.

use crate::bits::{bit_length, spread_ref_u64};
use crate::tables::{DECODE_2D_X, DECODE_2D_Y, ENCODE_2D_X, ENCODE_2D_Y};

// =============================================================================
// Bit Spreading/Compacting (magic-bits cascades)
// =============================================================================

/// Spread the low 16 bits of `x` to the even bit positions of a 32-bit word.
#[inline(always)]
pub const fn spread_2d_32(x: u32) -> u32 {
    let mut x = x & 0x0000FFFF;
    x = (x | (x << 8)) & 0x00FF00FF;
    x = (x | (x << 4)) & 0x0F0F0F0F;
    x = (x | (x << 2)) & 0x33333333;
    x = (x | (x << 1)) & 0x55555555;
    x
}

/// Compact the even bit positions of a 32-bit word into its low 16 bits.
#[inline(always)]
pub const fn compact_2d_32(m: u32) -> u32 {
    let mut x = m & 0x55555555;
    x = (x | (x >> 1)) & 0x33333333;
    x = (x | (x >> 2)) & 0x0F0F0F0F;
    x = (x | (x >> 4)) & 0x00FF00FF;
    x = (x | (x >> 8)) & 0x0000FFFF;
    x
}

/// Spread the low 32 bits of `x` to the even bit positions of a 64-bit word.
#[inline(always)]
pub const fn spread_2d_64(x: u64) -> u64 {
    let mut x = x & 0x0000_0000_FFFF_FFFF;
    x = (x | (x << 16)) & 0x0000_FFFF_0000_FFFF;
    x = (x | (x << 8)) & 0x00FF_00FF_00FF_00FF;
    x = (x | (x << 4)) & 0x0F0F_0F0F_0F0F_0F0F;
    x = (x | (x << 2)) & 0x3333_3333_3333_3333;
    x = (x | (x << 1)) & 0x5555_5555_5555_5555;
    x
}

/// Compact the even bit positions of a 64-bit word into its low 32 bits.
#[inline(always)]
pub const fn compact_2d_64(m: u64) -> u64 {
    let mut x = m & 0x5555_5555_5555_5555;
    x = (x | (x >> 1)) & 0x3333_3333_3333_3333;
    x = (x | (x >> 2)) & 0x0F0F_0F0F_0F0F_0F0F;
    x = (x | (x >> 4)) & 0x00FF_00FF_00FF_00FF;
    x = (x | (x >> 8)) & 0x0000_FFFF_0000_FFFF;
    x = (x | (x >> 16)) & 0x0000_0000_FFFF_FFFF;
    x
}

// The cascades must agree with the bit-at-a-time reference; a mistyped mask
// fails the build.
const _: () = {
    assert!(spread_2d_32(0xFFFF) as u64 == spread_ref_u64(0xFFFF, 2, 16));
    assert!(spread_2d_32(0xA5C3) as u64 == spread_ref_u64(0xA5C3, 2, 16));
    assert!(spread_2d_64(0xFFFF_FFFF) == spread_ref_u64(0xFFFF_FFFF, 2, 32));
    assert!(spread_2d_64(0xDEAD_BEEF) == spread_ref_u64(0xDEAD_BEEF, 2, 32));
    assert!(compact_2d_32(spread_2d_32(0xA5C3)) == 0xA5C3);
    assert!(compact_2d_32(0x5555_5555) == 0xFFFF);
    assert!(compact_2d_64(spread_2d_64(0xDEAD_BEEF)) == 0xDEAD_BEEF);
    assert!(compact_2d_64(0x5555_5555_5555_5555) == 0xFFFF_FFFF);
};

// =============================================================================
// 32-bit Encoding (16-bit coordinates)
// =============================================================================

/// Bit-at-a-time reference encoder.
pub fn morton_encode_for_2d_32(x: u16, y: u16) -> u32 {
    let mut m = 0u32;
    for i in 0..16 {
        m |= ((x as u32 >> i) & 1) << (2 * i);
        m |= ((y as u32 >> i) & 1) << (2 * i + 1);
    }
    m
}

/// As [`morton_encode_for_2d_32`], stopping at the highest live input bit.
pub fn morton_encode_for_et_2d_32(x: u16, y: u16) -> u32 {
    let live = bit_length((x | y) as u64);
    let mut m = 0u32;
    for i in 0..live {
        m |= ((x as u32 >> i) & 1) << (2 * i);
        m |= ((y as u32 >> i) & 1) << (2 * i + 1);
    }
    m
}

/// Magic-bits encoder: two spread cascades and an OR.
#[inline(always)]
pub fn morton_encode_magicbits_2d_32(x: u16, y: u16) -> u32 {
    spread_2d_32(x as u32) | (spread_2d_32(y as u32) << 1)
}

/// Per-axis lookup-table encoder, one coordinate byte per step.
pub fn morton_encode_lut_2d_32(x: u16, y: u16) -> u32 {
    let mut m = 0u32;
    for c in (0..2u32).rev() {
        m = (m << 16)
            | ENCODE_2D_Y[((y >> (8 * c)) & 0xFF) as usize] as u32
            | ENCODE_2D_X[((x >> (8 * c)) & 0xFF) as usize] as u32;
    }
    m
}

/// As [`morton_encode_lut_2d_32`], skipping all-zero high bytes.
pub fn morton_encode_lut_et_2d_32(x: u16, y: u16) -> u32 {
    let bytes = bit_length((x | y) as u64).div_ceil(8);
    let mut m = 0u32;
    for c in (0..bytes).rev() {
        m = (m << 16)
            | ENCODE_2D_Y[((y >> (8 * c)) & 0xFF) as usize] as u32
            | ENCODE_2D_X[((x >> (8 * c)) & 0xFF) as usize] as u32;
    }
    m
}

/// Single-table encoder; the y spread reuses the x table shifted at the call site.
pub fn morton_encode_lut_shifted_2d_32(x: u16, y: u16) -> u32 {
    let mut m = 0u32;
    for c in (0..2u32).rev() {
        m = (m << 16)
            | (ENCODE_2D_X[((y >> (8 * c)) & 0xFF) as usize] as u32) << 1
            | ENCODE_2D_X[((x >> (8 * c)) & 0xFF) as usize] as u32;
    }
    m
}

/// As [`morton_encode_lut_shifted_2d_32`], skipping all-zero high bytes.
pub fn morton_encode_lut_shifted_et_2d_32(x: u16, y: u16) -> u32 {
    let bytes = bit_length((x | y) as u64).div_ceil(8);
    let mut m = 0u32;
    for c in (0..bytes).rev() {
        m = (m << 16)
            | (ENCODE_2D_X[((y >> (8 * c)) & 0xFF) as usize] as u32) << 1
            | ENCODE_2D_X[((x >> (8 * c)) & 0xFF) as usize] as u32;
    }
    m
}

// =============================================================================
// 32-bit Decoding
// =============================================================================

/// Bit-at-a-time reference decoder.
pub fn morton_decode_for_2d_32(m: u32) -> (u16, u16) {
    let mut x = 0u16;
    let mut y = 0u16;
    for i in 0..16 {
        x |= (((m >> (2 * i)) & 1) as u16) << i;
        y |= (((m >> (2 * i + 1)) & 1) as u16) << i;
    }
    (x, y)
}

/// As [`morton_decode_for_2d_32`], stopping at the highest live Morton bit.
pub fn morton_decode_for_et_2d_32(m: u32) -> (u16, u16) {
    let live = bit_length(m as u64).div_ceil(2);
    let mut x = 0u16;
    let mut y = 0u16;
    for i in 0..live {
        x |= (((m >> (2 * i)) & 1) as u16) << i;
        y |= (((m >> (2 * i + 1)) & 1) as u16) << i;
    }
    (x, y)
}

/// Magic-bits decoder: two compact cascades.
#[inline(always)]
pub fn morton_decode_magicbits_2d_32(m: u32) -> (u16, u16) {
    (compact_2d_32(m) as u16, compact_2d_32(m >> 1) as u16)
}

/// Per-axis lookup-table decoder, one Morton byte per step.
pub fn morton_decode_lut_2d_32(m: u32) -> (u16, u16) {
    let mut x = 0u16;
    let mut y = 0u16;
    for c in 0..4u32 {
        let chunk = ((m >> (8 * c)) & 0xFF) as usize;
        x |= (DECODE_2D_X[chunk] as u16) << (4 * c);
        y |= (DECODE_2D_Y[chunk] as u16) << (4 * c);
    }
    (x, y)
}

/// As [`morton_decode_lut_2d_32`], skipping all-zero high bytes.
pub fn morton_decode_lut_et_2d_32(m: u32) -> (u16, u16) {
    let chunks = bit_length(m as u64).div_ceil(8);
    let mut x = 0u16;
    let mut y = 0u16;
    for c in 0..chunks {
        let chunk = ((m >> (8 * c)) & 0xFF) as usize;
        x |= (DECODE_2D_X[chunk] as u16) << (4 * c);
        y |= (DECODE_2D_Y[chunk] as u16) << (4 * c);
    }
    (x, y)
}

/// Single-table decoder; the y axis indexes the x table on `m >> 1`.
pub fn morton_decode_lut_shifted_2d_32(m: u32) -> (u16, u16) {
    let mut x = 0u16;
    let mut y = 0u16;
    for c in 0..4u32 {
        x |= (DECODE_2D_X[((m >> (8 * c)) & 0xFF) as usize] as u16) << (4 * c);
        y |= (DECODE_2D_X[(((m >> 1) >> (8 * c)) & 0xFF) as usize] as u16) << (4 * c);
    }
    (x, y)
}

/// As [`morton_decode_lut_shifted_2d_32`], skipping all-zero high bytes.
pub fn morton_decode_lut_shifted_et_2d_32(m: u32) -> (u16, u16) {
    let chunks = bit_length(m as u64).div_ceil(8);
    let mut x = 0u16;
    let mut y = 0u16;
    for c in 0..chunks {
        x |= (DECODE_2D_X[((m >> (8 * c)) & 0xFF) as usize] as u16) << (4 * c);
        y |= (DECODE_2D_X[(((m >> 1) >> (8 * c)) & 0xFF) as usize] as u16) << (4 * c);
    }
    (x, y)
}

// =============================================================================
// 64-bit Encoding (32-bit coordinates)
// =============================================================================

/// Bit-at-a-time reference encoder.
pub fn morton_encode_for_2d_64(x: u32, y: u32) -> u64 {
    let mut m = 0u64;
    for i in 0..32 {
        m |= ((x as u64 >> i) & 1) << (2 * i);
        m |= ((y as u64 >> i) & 1) << (2 * i + 1);
    }
    m
}

/// As [`morton_encode_for_2d_64`], stopping at the highest live input bit.
pub fn morton_encode_for_et_2d_64(x: u32, y: u32) -> u64 {
    let live = bit_length((x | y) as u64);
    let mut m = 0u64;
    for i in 0..live {
        m |= ((x as u64 >> i) & 1) << (2 * i);
        m |= ((y as u64 >> i) & 1) << (2 * i + 1);
    }
    m
}

/// Magic-bits encoder.
#[inline(always)]
pub fn morton_encode_magicbits_2d_64(x: u32, y: u32) -> u64 {
    spread_2d_64(x as u64) | (spread_2d_64(y as u64) << 1)
}

/// Per-axis lookup-table encoder, one coordinate byte per step.
pub fn morton_encode_lut_2d_64(x: u32, y: u32) -> u64 {
    let mut m = 0u64;
    for c in (0..4u32).rev() {
        m = (m << 16)
            | ENCODE_2D_Y[((y >> (8 * c)) & 0xFF) as usize] as u64
            | ENCODE_2D_X[((x >> (8 * c)) & 0xFF) as usize] as u64;
    }
    m
}

/// As [`morton_encode_lut_2d_64`], skipping all-zero high bytes.
pub fn morton_encode_lut_et_2d_64(x: u32, y: u32) -> u64 {
    let bytes = bit_length((x | y) as u64).div_ceil(8);
    let mut m = 0u64;
    for c in (0..bytes).rev() {
        m = (m << 16)
            | ENCODE_2D_Y[((y >> (8 * c)) & 0xFF) as usize] as u64
            | ENCODE_2D_X[((x >> (8 * c)) & 0xFF) as usize] as u64;
    }
    m
}

/// Single-table encoder; the y spread reuses the x table shifted at the call site.
pub fn morton_encode_lut_shifted_2d_64(x: u32, y: u32) -> u64 {
    let mut m = 0u64;
    for c in (0..4u32).rev() {
        m = (m << 16)
            | (ENCODE_2D_X[((y >> (8 * c)) & 0xFF) as usize] as u64) << 1
            | ENCODE_2D_X[((x >> (8 * c)) & 0xFF) as usize] as u64;
    }
    m
}

/// As [`morton_encode_lut_shifted_2d_64`], skipping all-zero high bytes.
pub fn morton_encode_lut_shifted_et_2d_64(x: u32, y: u32) -> u64 {
    let bytes = bit_length((x | y) as u64).div_ceil(8);
    let mut m = 0u64;
    for c in (0..bytes).rev() {
        m = (m << 16)
            | (ENCODE_2D_X[((y >> (8 * c)) & 0xFF) as usize] as u64) << 1
            | ENCODE_2D_X[((x >> (8 * c)) & 0xFF) as usize] as u64;
    }
    m
}

// =============================================================================
// 64-bit Decoding
// =============================================================================

/// Bit-at-a-time reference decoder.
pub fn morton_decode_for_2d_64(m: u64) -> (u32, u32) {
    let mut x = 0u32;
    let mut y = 0u32;
    for i in 0..32 {
        x |= (((m >> (2 * i)) & 1) as u32) << i;
        y |= (((m >> (2 * i + 1)) & 1) as u32) << i;
    }
    (x, y)
}

/// As [`morton_decode_for_2d_64`], stopping at the highest live Morton bit.
pub fn morton_decode_for_et_2d_64(m: u64) -> (u32, u32) {
    let live = bit_length(m).div_ceil(2);
    let mut x = 0u32;
    let mut y = 0u32;
    for i in 0..live {
        x |= (((m >> (2 * i)) & 1) as u32) << i;
        y |= (((m >> (2 * i + 1)) & 1) as u32) << i;
    }
    (x, y)
}

/// Magic-bits decoder.
#[inline(always)]
pub fn morton_decode_magicbits_2d_64(m: u64) -> (u32, u32) {
    (compact_2d_64(m) as u32, compact_2d_64(m >> 1) as u32)
}

/// Per-axis lookup-table decoder, one Morton byte per step.
pub fn morton_decode_lut_2d_64(m: u64) -> (u32, u32) {
    let mut x = 0u32;
    let mut y = 0u32;
    for c in 0..8u32 {
        let chunk = ((m >> (8 * c)) & 0xFF) as usize;
        x |= (DECODE_2D_X[chunk] as u32) << (4 * c);
        y |= (DECODE_2D_Y[chunk] as u32) << (4 * c);
    }
    (x, y)
}

/// As [`morton_decode_lut_2d_64`], skipping all-zero high bytes.
pub fn morton_decode_lut_et_2d_64(m: u64) -> (u32, u32) {
    let chunks = bit_length(m).div_ceil(8);
    let mut x = 0u32;
    let mut y = 0u32;
    for c in 0..chunks {
        let chunk = ((m >> (8 * c)) & 0xFF) as usize;
        x |= (DECODE_2D_X[chunk] as u32) << (4 * c);
        y |= (DECODE_2D_Y[chunk] as u32) << (4 * c);
    }
    (x, y)
}

/// Single-table decoder; the y axis indexes the x table on `m >> 1`.
pub fn morton_decode_lut_shifted_2d_64(m: u64) -> (u32, u32) {
    let mut x = 0u32;
    let mut y = 0u32;
    for c in 0..8u32 {
        x |= (DECODE_2D_X[((m >> (8 * c)) & 0xFF) as usize] as u32) << (4 * c);
        y |= (DECODE_2D_X[(((m >> 1) >> (8 * c)) & 0xFF) as usize] as u32) << (4 * c);
    }
    (x, y)
}

/// As [`morton_decode_lut_shifted_2d_64`], skipping all-zero high bytes.
pub fn morton_decode_lut_shifted_et_2d_64(m: u64) -> (u32, u32) {
    let chunks = bit_length(m).div_ceil(8);
    let mut x = 0u32;
    let mut y = 0u32;
    for c in 0..chunks {
        x |= (DECODE_2D_X[((m >> (8 * c)) & 0xFF) as usize] as u32) << (4 * c);
        y |= (DECODE_2D_X[(((m >> 1) >> (8 * c)) & 0xFF) as usize] as u32) << (4 * c);
    }
    (x, y)
}
