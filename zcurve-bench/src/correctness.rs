//! Correctness passes: golden-table checks for every registered kernel and
//! round-trip checks for every encode/decode pair.
//!
//! Every pass runs to completion even after a failure; the returned flags
//! are aggregated into the process exit status by main.

use rand::Rng;
use rand_xoshiro::Xoshiro256PlusPlus;

use zcurve_core::bits::{coord_bits, mask_u64, BitString};

use crate::golden;
use crate::registry::{Decode2, Decode3, Encode2, Encode3, Registry, Word};

// =============================================================================
// Per-kernel checks
// =============================================================================

// Pass A: the full small-input cube against the golden encode table.
fn encode_table_check_3d<M: Word, C: Word>(kernel: &Encode3<M, C>) -> bool {
    let mut ok = true;
    for i in 0..16u64 {
        for j in 0..16u64 {
            for k in 0..16u64 {
                let want = golden::ENCODE_3D[(i * 256 + j * 16 + k) as usize];
                let got = (kernel.f)(C::from_u64(i), C::from_u64(j), C::from_u64(k));
                if got.to_u64() != want {
                    ok = false;
                    println!();
                    println!(
                        "    incorrect encoding of ({i}, {j}, {k}) in {}-bit {}: {} != {}",
                        M::BITS,
                        kernel.name,
                        got,
                        want
                    );
                }
            }
        }
    }
    ok
}

fn encode_table_check_2d<M: Word, C: Word>(kernel: &Encode2<M, C>) -> bool {
    let mut ok = true;
    for i in 0..16u64 {
        for j in 0..16u64 {
            let want = golden::ENCODE_2D[(i * 16 + j) as usize];
            let got = (kernel.f)(C::from_u64(i), C::from_u64(j));
            if got.to_u64() != want {
                ok = false;
                println!();
                println!(
                    "    incorrect encoding of ({i}, {j}) in {}-bit {}: {} != {}",
                    M::BITS,
                    kernel.name,
                    got,
                    want
                );
            }
        }
    }
    ok
}

// Pass B: every golden Morton value, plus the saturated sentinel for codes
// wider than 32 bits.
fn decode_table_check_3d<M: Word, C: Word>(kernel: &Decode3<M, C>) -> bool {
    let mut ok = true;
    for m in 0..4096u64 {
        let want = golden::DECODE_3D[m as usize];
        let (x, y, z) = (kernel.f)(M::from_u64(m));
        if [x.to_u64(), y.to_u64(), z.to_u64()] != [want[0] as u64, want[1] as u64, want[2] as u64]
        {
            ok = false;
            print_incorrect_decode_3d(kernel, m, (x, y, z), want);
        }
    }
    if M::BITS > 32 {
        // The saturated 21-bit-per-axis pattern.
        let (x, y, z) = (kernel.f)(M::from_u64(0x7FFF_FFFF_FFFF_FFFF));
        let want = mask_u64(coord_bits(M::BITS, 3));
        if x.to_u64() != want || y.to_u64() != want || z.to_u64() != want {
            ok = false;
            print_incorrect_decode_3d(
                kernel,
                0x7FFF_FFFF_FFFF_FFFF,
                (x, y, z),
                [want as u32; 3],
            );
        }
    }
    ok
}

fn decode_table_check_2d<M: Word, C: Word>(kernel: &Decode2<M, C>) -> bool {
    let mut ok = true;
    for m in 0..256u64 {
        let want = golden::DECODE_2D[m as usize];
        let (x, y) = (kernel.f)(M::from_u64(m));
        if [x.to_u64(), y.to_u64()] != [want[0] as u64, want[1] as u64] {
            ok = false;
            println!();
            println!(
                "    incorrect decoding of {m} in {}-bit {}: ({}, {}) != ({}, {})",
                M::BITS,
                kernel.name,
                x,
                y,
                want[0],
                want[1]
            );
        }
    }
    // The saturated pattern: every usable bit set on both axes.
    let saturated = mask_u64(M::BITS);
    let want = mask_u64(coord_bits(M::BITS, 2));
    let (x, y) = (kernel.f)(M::from_u64(saturated));
    if x.to_u64() != want || y.to_u64() != want {
        ok = false;
        println!();
        println!(
            "    incorrect decoding of {saturated:#x} in {}-bit {}: ({}, {}) != ({want}, {want})",
            M::BITS,
            kernel.name,
            x,
            y
        );
    }
    ok
}

fn print_incorrect_decode_3d<M: Word, C: Word>(
    kernel: &Decode3<M, C>,
    m: u64,
    got: (C, C, C),
    want: [u32; 3],
) {
    println!();
    println!(
        "    incorrect decoding of {m} in {}-bit {}: ({}, {}, {}) != ({}, {}, {})",
        M::BITS,
        kernel.name,
        got.0,
        got.1,
        got.2,
        want[0],
        want[1],
        want[2]
    );
}

// Pass C: random in-range coordinates through encode then decode; each axis
// is compared on its own so a failure names the axis.
fn roundtrip_check_3d<M: Word, C: Word>(
    encode: &Encode3<M, C>,
    decode: &Decode3<M, C>,
    reps: u32,
    rng: &mut Xoshiro256PlusPlus,
) -> bool {
    let cb = coord_bits(M::BITS, 3);
    let span = mask_u64(cb); // exclusive upper bound
    let mut ok = true;
    for _ in 0..reps {
        let (xr, yr, zr) = (
            rng.gen_range(0..span),
            rng.gen_range(0..span),
            rng.gen_range(0..span),
        );
        let (x, y, z) = (C::from_u64(xr), C::from_u64(yr), C::from_u64(zr));
        let m = (encode.f)(x, y, z);
        let (dx, dy, dz) = (decode.f)(m);
        if dx != x || dy != y || dz != z {
            ok = false;
            println!();
            println!("x: {} ({})", BitString::new(xr, cb), x);
            println!("y: {} ({})", BitString::new(yr, cb), y);
            println!("z: {} ({})", BitString::new(zr, cb), z);
            println!("morton: {} ({})", BitString::new(m.to_u64(), M::BITS), m);
            for (axis, want, got) in [("x", x, dx), ("y", y, dy), ("z", z, dz)] {
                if got != want {
                    println!(
                        "{axis}_result: {} ({}) MISMATCH",
                        BitString::new(got.to_u64(), cb),
                        got
                    );
                }
            }
            println!(
                "{}-bit using methods encode {} and decode {}",
                M::BITS,
                encode.name,
                decode.name
            );
        }
    }
    ok
}

fn roundtrip_check_2d<M: Word, C: Word>(
    encode: &Encode2<M, C>,
    decode: &Decode2<M, C>,
    reps: u32,
    rng: &mut Xoshiro256PlusPlus,
) -> bool {
    let cb = coord_bits(M::BITS, 2);
    let span = mask_u64(cb);
    let mut ok = true;
    for _ in 0..reps {
        let (xr, yr) = (rng.gen_range(0..span), rng.gen_range(0..span));
        let (x, y) = (C::from_u64(xr), C::from_u64(yr));
        let m = (encode.f)(x, y);
        let (dx, dy) = (decode.f)(m);
        if dx != x || dy != y {
            ok = false;
            println!();
            println!("x: {} ({})", BitString::new(xr, cb), x);
            println!("y: {} ({})", BitString::new(yr, cb), y);
            println!("morton: {} ({})", BitString::new(m.to_u64(), M::BITS), m);
            for (axis, want, got) in [("x", x, dx), ("y", y, dy)] {
                if got != want {
                    println!(
                        "{axis}_result: {} ({}) MISMATCH",
                        BitString::new(got.to_u64(), cb),
                        got
                    );
                }
            }
            println!(
                "{}-bit using methods encode {} and decode {}",
                M::BITS,
                encode.name,
                decode.name
            );
        }
    }
    ok
}

// =============================================================================
// Pass drivers
// =============================================================================

fn report_pass(ok: bool) {
    if ok {
        println!(" Passed.");
    } else {
        println!("    One or more methods failed.");
    }
}

/// Pass A over every registered 3D encoder.
pub fn check_3d_encoders(reg: &Registry) -> bool {
    print!("++ Checking correctness of 3D encoding methods ... ");
    let mut ok = true;
    for kernel in &reg.encode_3d_64 {
        ok &= encode_table_check_3d(kernel);
    }
    for kernel in &reg.encode_3d_32 {
        ok &= encode_table_check_3d(kernel);
    }
    report_pass(ok);
    ok
}

/// Pass B over every registered 3D decoder.
pub fn check_3d_decoders(reg: &Registry) -> bool {
    print!("++ Checking correctness of 3D decoding methods ... ");
    let mut ok = true;
    for kernel in &reg.decode_3d_64 {
        ok &= decode_table_check_3d(kernel);
    }
    for kernel in &reg.decode_3d_32 {
        ok &= decode_table_check_3d(kernel);
    }
    report_pass(ok);
    ok
}

/// Pass C over every registered 3D encode/decode pair.
pub fn check_3d_pairs(reg: &Registry, reps: u32, rng: &mut Xoshiro256PlusPlus) -> bool {
    print!("++ Checking 3D methods encode/decode match ... ");
    let mut ok = true;
    for encode in &reg.encode_3d_64 {
        for decode in &reg.decode_3d_64 {
            ok &= roundtrip_check_3d(encode, decode, reps, rng);
        }
    }
    for encode in &reg.encode_3d_32 {
        for decode in &reg.decode_3d_32 {
            ok &= roundtrip_check_3d(encode, decode, reps, rng);
        }
    }
    report_pass(ok);
    ok
}

/// Pass A over every registered 2D encoder.
pub fn check_2d_encoders(reg: &Registry) -> bool {
    print!("++ Checking correctness of 2D encoding methods ... ");
    let mut ok = true;
    for kernel in &reg.encode_2d_64 {
        ok &= encode_table_check_2d(kernel);
    }
    for kernel in &reg.encode_2d_32 {
        ok &= encode_table_check_2d(kernel);
    }
    report_pass(ok);
    ok
}

/// Pass B over every registered 2D decoder.
pub fn check_2d_decoders(reg: &Registry) -> bool {
    print!("++ Checking correctness of 2D decoding methods ... ");
    let mut ok = true;
    for kernel in &reg.decode_2d_64 {
        ok &= decode_table_check_2d(kernel);
    }
    for kernel in &reg.decode_2d_32 {
        ok &= decode_table_check_2d(kernel);
    }
    report_pass(ok);
    ok
}

/// Pass C over every registered 2D encode/decode pair.
pub fn check_2d_pairs(reg: &Registry, reps: u32, rng: &mut Xoshiro256PlusPlus) -> bool {
    print!("++ Checking 2D methods encode/decode match ... ");
    let mut ok = true;
    for encode in &reg.encode_2d_64 {
        for decode in &reg.decode_2d_64 {
            ok &= roundtrip_check_2d(encode, decode, reps, rng);
        }
    }
    for encode in &reg.encode_2d_32 {
        for decode in &reg.decode_2d_32 {
            ok &= roundtrip_check_2d(encode, decode, reps, rng);
        }
    }
    report_pass(ok);
    ok
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    // The golden tables must agree with the reference kernels over their
    // whole range; this is the firewall between the embedded vectors and
    // the living code.
    #[test]
    fn test_golden_tables_match_reference() {
        use zcurve_core::kernels::{
            morton_decode_for_2d_64, morton_decode_for_3d_64, morton_encode_for_2d_64,
            morton_encode_for_3d_64,
        };

        for i in 0..16u32 {
            for j in 0..16u32 {
                for k in 0..16u32 {
                    let idx = (i * 256 + j * 16 + k) as usize;
                    assert_eq!(golden::ENCODE_3D[idx], morton_encode_for_3d_64(i, j, k));
                }
                let idx = (i * 16 + j) as usize;
                assert_eq!(golden::ENCODE_2D[idx], morton_encode_for_2d_64(i, j));
            }
        }
        for m in 0..4096u64 {
            let (x, y, z) = morton_decode_for_3d_64(m);
            assert_eq!(golden::DECODE_3D[m as usize], [x, y, z]);
        }
        for m in 0..256u64 {
            let (x, y) = morton_decode_for_2d_64(m);
            assert_eq!(golden::DECODE_2D[m as usize], [x, y]);
        }
    }

    #[test]
    fn test_golden_spot_values() {
        assert_eq!(golden::ENCODE_3D[0], 0);
        assert_eq!(golden::ENCODE_3D[1], 4); // (0, 0, 1)
        assert_eq!(golden::ENCODE_3D[16], 2); // (0, 1, 0)
        assert_eq!(golden::ENCODE_3D[256], 1); // (1, 0, 0)
        assert_eq!(golden::ENCODE_3D[256 + 16 + 1], 7);
        assert_eq!(golden::DECODE_3D[7], [1, 1, 1]);
        assert_eq!(golden::DECODE_3D[56], [2, 2, 2]);
        assert_eq!(golden::ENCODE_2D[16], 1); // (1, 0)
        assert_eq!(golden::ENCODE_2D[1], 2); // (0, 1)
        assert_eq!(golden::DECODE_2D[3], [1, 1]);
    }

    #[test]
    fn test_all_passes_green_on_defaults() {
        let reg = Registry::with_defaults();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
        assert!(check_3d_encoders(&reg));
        assert!(check_3d_decoders(&reg));
        assert!(check_3d_pairs(&reg, 4, &mut rng));
        assert!(check_2d_encoders(&reg));
        assert!(check_2d_decoders(&reg));
        assert!(check_2d_pairs(&reg, 4, &mut rng));
    }
}
