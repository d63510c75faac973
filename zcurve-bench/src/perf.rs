//! Performance passes: a linear sweep and a random-pool benchmark per
//! registered kernel, repeated and averaged.
//!
//! The timed region is exactly the kernel call. Loop bookkeeping, pool
//! indexing and the running-sum accumulation all happen outside the
//! start/stop bracket, for decode as well as encode. The running sums exist
//! only to keep the optimizer from deleting the calls; they are printed,
//! never asserted.

use std::time::{Duration, Instant};

use rand::Rng;
use rand_xoshiro::Xoshiro256PlusPlus;

use zcurve_core::bits::{coord_bits, mask_u64};

use crate::registry::{Registry, Word};
use crate::report;

/// Size of the pre-generated random input pool, reused cyclically to keep
/// RNG cost out of the measured region.
pub const RAND_POOL_SIZE: usize = 10_000;

/// Accumulating monotonic stopwatch.
pub struct Stopwatch {
    total: Duration,
    started: Instant,
}

impl Stopwatch {
    /// A stopped stopwatch with zero accumulated time.
    pub fn new() -> Self {
        Self {
            total: Duration::ZERO,
            started: Instant::now(),
        }
    }

    /// Open a timed region.
    #[inline(always)]
    pub fn start(&mut self) {
        self.started = Instant::now();
    }

    /// Close the timed region and add it to the total.
    #[inline(always)]
    pub fn stop(&mut self) {
        self.total += self.started.elapsed();
    }

    /// Accumulated milliseconds.
    pub fn elapsed_ms(&self) -> f64 {
        self.total.as_secs_f64() * 1e3
    }
}

fn coord_pool<C: Word>(rng: &mut Xoshiro256PlusPlus, bits: u32) -> Vec<C> {
    (0..RAND_POOL_SIZE)
        .map(|_| C::from_u64(rng.gen::<u64>() & mask_u64(bits)))
        .collect()
}

fn morton_pool<M: Word>(rng: &mut Xoshiro256PlusPlus) -> Vec<M> {
    (0..RAND_POOL_SIZE)
        .map(|_| M::from_u64(rng.gen::<u64>() & mask_u64(M::BITS)))
        .collect()
}

// =============================================================================
// 3D benchmarks
// =============================================================================

fn encode_3d_linear<M: Word, C: Word>(
    f: fn(C, C, C) -> M,
    max: u64,
    reps: u32,
    sums: &mut Vec<u64>,
) -> f64 {
    let mut timer = Stopwatch::new();
    let mut runningsum = 0u64;
    for _ in 0..reps {
        for i in 0..max {
            for j in 0..max {
                for k in 0..max {
                    let (x, y, z) = (C::from_u64(i), C::from_u64(j), C::from_u64(k));
                    timer.start();
                    let m = f(x, y, z);
                    timer.stop();
                    runningsum = runningsum.wrapping_add(m.to_u64());
                }
            }
        }
    }
    sums.push(runningsum);
    timer.elapsed_ms() / reps as f64
}

fn encode_3d_random<M: Word, C: Word>(
    f: fn(C, C, C) -> M,
    total: u64,
    reps: u32,
    rng: &mut Xoshiro256PlusPlus,
    sums: &mut Vec<u64>,
) -> f64 {
    let mut timer = Stopwatch::new();
    let mut runningsum = 0u64;
    let bits = coord_bits(M::BITS, 3);
    for _ in 0..reps {
        let pool = coord_pool::<C>(rng, bits);
        for i in 0..total as usize {
            let x = pool[i % RAND_POOL_SIZE];
            let y = pool[(i + 1) % RAND_POOL_SIZE];
            let z = pool[(i + 2) % RAND_POOL_SIZE];
            timer.start();
            let m = f(x, y, z);
            timer.stop();
            runningsum = runningsum.wrapping_add(m.to_u64());
        }
    }
    sums.push(runningsum);
    timer.elapsed_ms() / reps as f64
}

fn decode_3d_linear<M: Word, C: Word>(
    f: fn(M) -> (C, C, C),
    total: u64,
    reps: u32,
    sums: &mut Vec<u64>,
) -> f64 {
    let mut timer = Stopwatch::new();
    let mut runningsum = 0u64;
    for _ in 0..reps {
        for i in 0..total {
            let m = M::from_u64(i);
            timer.start();
            let (x, y, z) = f(m);
            timer.stop();
            runningsum = runningsum.wrapping_add(x.to_u64() + y.to_u64() + z.to_u64());
        }
    }
    sums.push(runningsum);
    timer.elapsed_ms() / reps as f64
}

fn decode_3d_random<M: Word, C: Word>(
    f: fn(M) -> (C, C, C),
    total: u64,
    reps: u32,
    rng: &mut Xoshiro256PlusPlus,
    sums: &mut Vec<u64>,
) -> f64 {
    let mut timer = Stopwatch::new();
    let mut runningsum = 0u64;
    for _ in 0..reps {
        let pool = morton_pool::<M>(rng);
        for i in 0..total as usize {
            let m = pool[i % RAND_POOL_SIZE];
            timer.start();
            let (x, y, z) = f(m);
            timer.stop();
            runningsum = runningsum.wrapping_add(x.to_u64() + y.to_u64() + z.to_u64());
        }
    }
    sums.push(runningsum);
    timer.elapsed_ms() / reps as f64
}

// =============================================================================
// 2D benchmarks
// =============================================================================

fn encode_2d_linear<M: Word, C: Word>(
    f: fn(C, C) -> M,
    max: u64,
    reps: u32,
    sums: &mut Vec<u64>,
) -> f64 {
    let mut timer = Stopwatch::new();
    let mut runningsum = 0u64;
    for _ in 0..reps {
        for i in 0..max {
            for j in 0..max {
                let (x, y) = (C::from_u64(i), C::from_u64(j));
                timer.start();
                let m = f(x, y);
                timer.stop();
                runningsum = runningsum.wrapping_add(m.to_u64());
            }
        }
    }
    sums.push(runningsum);
    timer.elapsed_ms() / reps as f64
}

fn encode_2d_random<M: Word, C: Word>(
    f: fn(C, C) -> M,
    total: u64,
    reps: u32,
    rng: &mut Xoshiro256PlusPlus,
    sums: &mut Vec<u64>,
) -> f64 {
    let mut timer = Stopwatch::new();
    let mut runningsum = 0u64;
    let bits = coord_bits(M::BITS, 2);
    for _ in 0..reps {
        let pool = coord_pool::<C>(rng, bits);
        for i in 0..total as usize {
            let x = pool[i % RAND_POOL_SIZE];
            let y = pool[(i + 1) % RAND_POOL_SIZE];
            timer.start();
            let m = f(x, y);
            timer.stop();
            runningsum = runningsum.wrapping_add(m.to_u64());
        }
    }
    sums.push(runningsum);
    timer.elapsed_ms() / reps as f64
}

fn decode_2d_linear<M: Word, C: Word>(
    f: fn(M) -> (C, C),
    total: u64,
    reps: u32,
    sums: &mut Vec<u64>,
) -> f64 {
    let mut timer = Stopwatch::new();
    let mut runningsum = 0u64;
    for _ in 0..reps {
        for i in 0..total {
            let m = M::from_u64(i);
            timer.start();
            let (x, y) = f(m);
            timer.stop();
            runningsum = runningsum.wrapping_add(x.to_u64() + y.to_u64());
        }
    }
    sums.push(runningsum);
    timer.elapsed_ms() / reps as f64
}

fn decode_2d_random<M: Word, C: Word>(
    f: fn(M) -> (C, C),
    total: u64,
    reps: u32,
    rng: &mut Xoshiro256PlusPlus,
    sums: &mut Vec<u64>,
) -> f64 {
    let mut timer = Stopwatch::new();
    let mut runningsum = 0u64;
    for _ in 0..reps {
        let pool = morton_pool::<M>(rng);
        for i in 0..total as usize {
            let m = pool[i % RAND_POOL_SIZE];
            timer.start();
            let (x, y) = f(m);
            timer.stop();
            runningsum = runningsum.wrapping_add(x.to_u64() + y.to_u64());
        }
    }
    sums.push(runningsum);
    timer.elapsed_ms() / reps as f64
}

// =============================================================================
// Benchmark blocks (one header line, one result line per kernel)
// =============================================================================

/// Linear and random encode benchmarks for every registered 3D kernel at
/// sweep size `max`.
pub fn encode_3d_block(
    reg: &Registry,
    max: u64,
    reps: u32,
    rng: &mut Xoshiro256PlusPlus,
    sums: &mut Vec<u64>,
) {
    let total = max * max * max;
    println!("++ Encoding {max}^3 morton codes ({total} in total)");
    for kernel in &reg.encode_3d_64 {
        let linear = encode_3d_linear(kernel.f, max, reps, sums);
        let random = encode_3d_random(kernel.f, total, reps, rng, sums);
        println!("    {} : 64-bit {}", report::perf_pair(linear, random), kernel.name);
    }
    for kernel in &reg.encode_3d_32 {
        let linear = encode_3d_linear(kernel.f, max, reps, sums);
        let random = encode_3d_random(kernel.f, total, reps, rng, sums);
        println!("    {} : 32-bit {}", report::perf_pair(linear, random), kernel.name);
    }
}

/// Linear and random decode benchmarks for every registered 3D kernel.
pub fn decode_3d_block(
    reg: &Registry,
    max: u64,
    reps: u32,
    rng: &mut Xoshiro256PlusPlus,
    sums: &mut Vec<u64>,
) {
    let total = max * max * max;
    println!("++ Decoding {max}^3 morton codes ({total} in total)");
    for kernel in &reg.decode_3d_64 {
        let linear = decode_3d_linear(kernel.f, total, reps, sums);
        let random = decode_3d_random(kernel.f, total, reps, rng, sums);
        println!("    {} : 64-bit {}", report::perf_pair(linear, random), kernel.name);
    }
    for kernel in &reg.decode_3d_32 {
        let linear = decode_3d_linear(kernel.f, total, reps, sums);
        let random = decode_3d_random(kernel.f, total, reps, rng, sums);
        println!("    {} : 32-bit {}", report::perf_pair(linear, random), kernel.name);
    }
}

/// Linear and random encode benchmarks for every registered 2D kernel.
pub fn encode_2d_block(
    reg: &Registry,
    max: u64,
    reps: u32,
    rng: &mut Xoshiro256PlusPlus,
    sums: &mut Vec<u64>,
) {
    let total = max * max;
    println!("++ Encoding {max}^2 morton codes ({total} in total)");
    for kernel in &reg.encode_2d_64 {
        let linear = encode_2d_linear(kernel.f, max, reps, sums);
        let random = encode_2d_random(kernel.f, total, reps, rng, sums);
        println!("    {} : 64-bit {}", report::perf_pair(linear, random), kernel.name);
    }
    for kernel in &reg.encode_2d_32 {
        let linear = encode_2d_linear(kernel.f, max, reps, sums);
        let random = encode_2d_random(kernel.f, total, reps, rng, sums);
        println!("    {} : 32-bit {}", report::perf_pair(linear, random), kernel.name);
    }
}

/// Linear and random decode benchmarks for every registered 2D kernel.
pub fn decode_2d_block(
    reg: &Registry,
    max: u64,
    reps: u32,
    rng: &mut Xoshiro256PlusPlus,
    sums: &mut Vec<u64>,
) {
    let total = max * max;
    println!("++ Decoding {max}^2 morton codes ({total} in total)");
    for kernel in &reg.decode_2d_64 {
        let linear = decode_2d_linear(kernel.f, total, reps, sums);
        let random = decode_2d_random(kernel.f, total, reps, rng, sums);
        println!("    {} : 64-bit {}", report::perf_pair(linear, random), kernel.name);
    }
    for kernel in &reg.decode_2d_32 {
        let linear = decode_2d_linear(kernel.f, total, reps, sums);
        let random = decode_2d_random(kernel.f, total, reps, rng, sums);
        println!("    {} : 32-bit {}", report::perf_pair(linear, random), kernel.name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use zcurve_core::kernels::{morton_decode_magicbits_3d_64, morton_encode_magicbits_3d_64};

    #[test]
    fn test_stopwatch_accumulates() {
        let mut timer = Stopwatch::new();
        timer.start();
        std::thread::sleep(Duration::from_millis(2));
        timer.stop();
        let first = timer.elapsed_ms();
        assert!(first >= 2.0);

        timer.start();
        std::thread::sleep(Duration::from_millis(2));
        timer.stop();
        assert!(timer.elapsed_ms() >= first + 2.0);
    }

    #[test]
    fn test_pools_respect_value_ranges() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        let coords: Vec<u32> = coord_pool(&mut rng, 21);
        assert!(coords.iter().all(|&c| c <= 0x1F_FFFF));
        assert_eq!(coords.len(), RAND_POOL_SIZE);

        let mortons: Vec<u32> = morton_pool(&mut rng);
        assert_eq!(mortons.len(), RAND_POOL_SIZE);
    }

    #[test]
    fn test_benchmarks_push_running_sums() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(2);
        let mut sums = Vec::new();
        let linear = encode_3d_linear(morton_encode_magicbits_3d_64, 8, 1, &mut sums);
        let random = encode_3d_random(morton_encode_magicbits_3d_64, 512, 1, &mut rng, &mut sums);
        let decode = decode_3d_linear(morton_decode_magicbits_3d_64, 512, 1, &mut sums);
        assert_eq!(sums.len(), 3);
        assert!(linear >= 0.0 && random >= 0.0 && decode >= 0.0);
        // Summing the decoded axes of codes 0..512 must be stable.
        assert!(sums[2] > 0);
    }
}
