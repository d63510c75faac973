//! # zcurve-core: Morton (Z-order) encode/decode kernels
//!
//! `zcurve-core` is a `no_std`, dependency-free library implementing the full
//! matrix of Morton-code kernels for 2D and 3D integer coordinates at 32-bit
//! and 64-bit code widths.
//!
//! ## Overview
//!
//! A Morton code interleaves the bits of several coordinates into a single
//! integer so that nearby points stay nearby under linear traversal. It is a
//! foundational primitive for octrees, cache-aware spatial indexing and GPU
//! data layout. This library provides, for every (dimension, width,
//! direction) combination, seven interchangeable strategies:
//!
//! 1. **Iterative** (`for`) - one bit at a time; the correctness reference
//! 2. **Iterative with early termination** (`for_et`) - stops at the highest
//!    live bit
//! 3. **Magic bits** (`magicbits`) - O(log W) shift-mask cascades
//! 4. **Lookup table** (`lut`) - per-axis byte tables
//! 5. **Lookup table with early termination** (`lut_et`)
//! 6. **Byte-shifted lookup table** (`lut_shifted`) - one shared table, axis
//!    shift at the call site
//! 7. **Byte-shifted lookup table with early termination** (`lut_shifted_et`)
//!
//! All strategies of one (dimension, width, direction) are bit-identical on
//! every input: encoders mask coordinates to the usable `⌊W/D⌋` bits before
//! interleaving, decoders ignore Morton bits above `D·⌊W/D⌋`.
//!
//! ## Quick Start
//!
//! ```
//! use zcurve_core::kernels::{morton_decode_magicbits_3d_64, morton_encode_magicbits_3d_64};
//!
//! let m = morton_encode_magicbits_3d_64(1, 1, 1);
//! assert_eq!(m, 0b111);
//! assert_eq!(morton_decode_magicbits_3d_64(m), (1, 1, 1));
//! ```
//!
//! ## Module Organization
//!
//! - [`bits`] - width helpers, bit-string rendering, the bit-at-a-time
//!   spreading reference
//! - [`tables`] - compile-time generated encode/decode lookup tables
//! - [`kernels`] - the kernel family itself, one module per dimensionality

#![no_std]
#![deny(missing_docs)]

// =============================================================================
// Module Declarations
// =============================================================================

/// Width-parameterised bit helpers and diagnostics rendering.
pub mod bits;

/// The encode/decode kernel family.
pub mod kernels;

/// Precomputed per-byte encode/decode lookup tables.
pub mod tables;

// =============================================================================
// Convenience Re-exports
// =============================================================================

pub use bits::{bit_length, coord_bits, mask_u32, mask_u64, BitString};
