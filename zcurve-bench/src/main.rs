//! Differential test and benchmark harness for the zcurve Morton kernels.
//!
//! Cross-validates every registered kernel against the embedded golden
//! vectors, round-trips every encode/decode pair, then benchmarks each
//! kernel on linear and random input distributions.
//!
//! # Usage
//!
//! ```bash
//! # Run with default settings
//! cargo run --release -p zcurve-bench
//!
//! # Correctness only
//! cargo run --release -p zcurve-bench -- --skip-bench
//!
//! # Sweep specific sizes with more repetitions
//! cargo run --release -p zcurve-bench -- --sizes 64,128 --reps 20
//!
//! # Only the LUT family
//! cargo run --release -p zcurve-bench -- --strategies lut
//! ```
//!
//! Exit code is 0 when every correctness pass succeeded; benchmark results
//! are informational only.

mod correctness;
mod golden;
mod perf;
mod registry;
mod report;

use clap::Parser;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::registry::Registry;

#[derive(Parser, Debug)]
#[command(name = "zcurve-bench")]
#[command(about = "Correctness and performance harness for the zcurve Morton kernels")]
struct Args {
    /// Repetitions per benchmark; reported times are the mean
    #[arg(long, default_value_t = 10)]
    reps: u32,

    /// Linear sweep sizes M; each benchmark makes M^D calls per repetition
    #[arg(long, value_delimiter = ',', default_values_t = vec![128, 256, 512])]
    sizes: Vec<u64>,

    /// Only exercise strategies whose name contains one of these
    /// (comma-separated, case-insensitive)
    #[arg(long, value_delimiter = ',')]
    strategies: Option<Vec<String>>,

    /// Random round-trips per encode/decode pair
    #[arg(long, default_value_t = 1)]
    roundtrips: u32,

    /// Random seed
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Run the correctness passes only
    #[arg(long)]
    skip_bench: bool,
}

fn main() {
    let args = Args::parse();

    report::print_header();

    let mut reg = Registry::with_defaults();
    if let Some(ref selectors) = args.strategies {
        reg.retain_strategies(selectors);
    }

    let mut rng = Xoshiro256PlusPlus::seed_from_u64(args.seed);

    println!("++ Checking 3D methods for correctness");
    let mut ok = correctness::check_3d_pairs(&reg, args.roundtrips, &mut rng);
    ok &= correctness::check_3d_encoders(&reg);
    ok &= correctness::check_3d_decoders(&reg);

    println!("++ Checking 2D methods for correctness");
    ok &= correctness::check_2d_pairs(&reg, args.roundtrips, &mut rng);
    ok &= correctness::check_2d_encoders(&reg);
    ok &= correctness::check_2d_decoders(&reg);

    if !args.skip_bench {
        println!(
            "++ Running each performance test {} times and averaging results",
            args.reps
        );
        let mut sums = Vec::new();
        for &max in &args.sizes {
            perf::encode_3d_block(&reg, max, args.reps, &mut rng, &mut sums);
            perf::decode_3d_block(&reg, max, args.reps, &mut rng, &mut sums);
            perf::encode_2d_block(&reg, max, args.reps, &mut rng, &mut sums);
            perf::decode_2d_block(&reg, max, args.reps, &mut rng, &mut sums);
            report::print_running_sums(&sums);
        }
    }

    std::process::exit(if ok { 0 } else { 1 });
}
