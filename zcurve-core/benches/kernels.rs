//! Instruction-count comparison of the kernel strategies via iai-callgrind.
//!
//! Deterministic counts complement the wall-clock harness in zcurve-bench:
//! the strategy ranking here is immune to frequency scaling and cache noise.

use iai_callgrind::{library_benchmark, library_benchmark_group, main};
use std::hint::black_box;

use zcurve_core::kernels::{
    morton_decode_for_3d_64, morton_decode_lut_shifted_3d_64, morton_decode_magicbits_3d_64,
    morton_encode_for_3d_64, morton_encode_for_et_3d_64, morton_encode_lut_3d_64,
    morton_encode_lut_et_3d_64, morton_encode_lut_shifted_3d_64, morton_encode_magicbits_3d_64,
};

// A mid-range point: all three coordinates live, high bytes non-zero.
const X: u32 = 0x15_5555;
const Y: u32 = 0x0A_AAAA;
const Z: u32 = 0x13_37FF;

const M: u64 = 0x1357_9BDF_0246_8ACE;

#[library_benchmark]
fn bench_encode_for() -> u64 {
    morton_encode_for_3d_64(black_box(X), black_box(Y), black_box(Z))
}

#[library_benchmark]
fn bench_encode_for_et() -> u64 {
    morton_encode_for_et_3d_64(black_box(X), black_box(Y), black_box(Z))
}

#[library_benchmark]
fn bench_encode_magicbits() -> u64 {
    morton_encode_magicbits_3d_64(black_box(X), black_box(Y), black_box(Z))
}

#[library_benchmark]
fn bench_encode_lut() -> u64 {
    morton_encode_lut_3d_64(black_box(X), black_box(Y), black_box(Z))
}

#[library_benchmark]
fn bench_encode_lut_et() -> u64 {
    morton_encode_lut_et_3d_64(black_box(X), black_box(Y), black_box(Z))
}

#[library_benchmark]
fn bench_encode_lut_shifted() -> u64 {
    morton_encode_lut_shifted_3d_64(black_box(X), black_box(Y), black_box(Z))
}

#[library_benchmark]
fn bench_decode_for() -> (u32, u32, u32) {
    morton_decode_for_3d_64(black_box(M))
}

#[library_benchmark]
fn bench_decode_magicbits() -> (u32, u32, u32) {
    morton_decode_magicbits_3d_64(black_box(M))
}

#[library_benchmark]
fn bench_decode_lut_shifted() -> (u32, u32, u32) {
    morton_decode_lut_shifted_3d_64(black_box(M))
}

library_benchmark_group!(
    name = encode_3d_64;
    benchmarks =
        bench_encode_for,
        bench_encode_for_et,
        bench_encode_magicbits,
        bench_encode_lut,
        bench_encode_lut_et,
        bench_encode_lut_shifted
);

library_benchmark_group!(
    name = decode_3d_64;
    benchmarks = bench_decode_for, bench_decode_magicbits, bench_decode_lut_shifted
);

main!(library_benchmark_groups = encode_3d_64, decode_3d_64);
