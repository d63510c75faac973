//! Report formatting: the suite header, fixed-width timing pairs and the
//! running-sums line.

/// Milliseconds formatted to 3 decimal places, zero-padded to width 6.
pub fn format_ms(ms: f64) -> String {
    format!("{ms:06.3}")
}

/// The per-kernel timing pair: `<linear> ms <random> ms`.
pub fn perf_pair(linear_ms: f64, random_ms: f64) -> String {
    format!("{} ms {} ms", format_ms(linear_ms), format_ms(random_ms))
}

/// Suite banner naming the pointer width of the build.
pub fn print_header() {
    println!("ZCURVE KERNEL TEST SUITE");
    println!("------------------------");
    #[cfg(target_pointer_width = "64")]
    println!("++ 64-bit version");
    #[cfg(not(target_pointer_width = "64"))]
    println!("++ 32-bit version");
}

/// Fold all running sums into one value and print it. An elaborate way to
/// make sure no kernel call gets optimized away.
pub fn print_running_sums(sums: &[u64]) {
    let total = sums.iter().fold(0u64, |acc, &s| acc.wrapping_add(s));
    println!("Running sums check: {total}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_ms_zero_pads() {
        assert_eq!(format_ms(0.0), "00.000");
        assert_eq!(format_ms(1.5), "01.500");
        assert_eq!(format_ms(12.3456), "12.346");
        assert_eq!(format_ms(123.456), "123.456");
    }

    #[test]
    fn test_perf_pair_layout() {
        assert_eq!(perf_pair(1.0, 2.5), "01.000 ms 02.500 ms");
    }
}
