//! Kernel registry: one ordered collection per (dimension, width, direction).
//!
//! Handles are typed `fn` pointers, so a kernel can only ever be registered
//! into the collection matching its signature; the benchmark loops pull the
//! pointer out once and never touch the registry inside timed code.

use std::fmt;

/// Unsigned-integer surface shared by Morton words and coordinates.
///
/// The single seam that lets the harness iterate kernels generically while
/// each kernel call stays a direct, monomorphic `fn` call.
pub trait Word: Copy + Eq + fmt::Display {
    /// Bit width of the type.
    const BITS: u32;

    /// Truncating conversion from `u64`.
    fn from_u64(v: u64) -> Self;

    /// Widening conversion to `u64`.
    fn to_u64(self) -> u64;
}

impl Word for u16 {
    const BITS: u32 = 16;

    #[inline(always)]
    fn from_u64(v: u64) -> Self {
        v as u16
    }

    #[inline(always)]
    fn to_u64(self) -> u64 {
        self as u64
    }
}

impl Word for u32 {
    const BITS: u32 = 32;

    #[inline(always)]
    fn from_u64(v: u64) -> Self {
        v as u32
    }

    #[inline(always)]
    fn to_u64(self) -> u64 {
        self as u64
    }
}

impl Word for u64 {
    const BITS: u32 = 64;

    #[inline(always)]
    fn from_u64(v: u64) -> Self {
        v
    }

    #[inline(always)]
    fn to_u64(self) -> u64 {
        self
    }
}

/// A named 2D encode kernel producing Morton words `M` from coordinates `C`.
#[derive(Clone, Copy)]
pub struct Encode2<M, C> {
    /// Strategy name as it appears in reports.
    pub name: &'static str,
    /// The kernel itself.
    pub f: fn(C, C) -> M,
}

/// A named 2D decode kernel.
#[derive(Clone, Copy)]
pub struct Decode2<M, C> {
    /// Strategy name as it appears in reports.
    pub name: &'static str,
    /// The kernel itself.
    pub f: fn(M) -> (C, C),
}

/// A named 3D encode kernel.
#[derive(Clone, Copy)]
pub struct Encode3<M, C> {
    /// Strategy name as it appears in reports.
    pub name: &'static str,
    /// The kernel itself.
    pub f: fn(C, C, C) -> M,
}

/// A named 3D decode kernel.
#[derive(Clone, Copy)]
pub struct Decode3<M, C> {
    /// Strategy name as it appears in reports.
    pub name: &'static str,
    /// The kernel itself.
    pub f: fn(M) -> (C, C, C),
}

trait Named {
    fn name(&self) -> &'static str;
}

impl<M, C> Named for Encode2<M, C> {
    fn name(&self) -> &'static str {
        self.name
    }
}

impl<M, C> Named for Decode2<M, C> {
    fn name(&self) -> &'static str {
        self.name
    }
}

impl<M, C> Named for Encode3<M, C> {
    fn name(&self) -> &'static str {
        self.name
    }
}

impl<M, C> Named for Decode3<M, C> {
    fn name(&self) -> &'static str {
        self.name
    }
}

// Registration is idempotent by strategy name: a re-register overwrites in
// place, preserving the original position.
fn upsert<K: Named>(list: &mut Vec<K>, kernel: K) {
    if let Some(slot) = list.iter_mut().find(|k| k.name() == kernel.name()) {
        *slot = kernel;
    } else {
        list.push(kernel);
    }
}

/// The eight kernel collections, ordered by registration.
///
/// Populated once at startup and read-only thereafter; report order follows
/// registration order so runs stay comparable.
#[derive(Default)]
pub struct Registry {
    /// 3D encoders, 64-bit codes.
    pub encode_3d_64: Vec<Encode3<u64, u32>>,
    /// 3D encoders, 32-bit codes.
    pub encode_3d_32: Vec<Encode3<u32, u16>>,
    /// 3D decoders, 64-bit codes.
    pub decode_3d_64: Vec<Decode3<u64, u32>>,
    /// 3D decoders, 32-bit codes.
    pub decode_3d_32: Vec<Decode3<u32, u16>>,
    /// 2D encoders, 64-bit codes.
    pub encode_2d_64: Vec<Encode2<u64, u32>>,
    /// 2D encoders, 32-bit codes.
    pub encode_2d_32: Vec<Encode2<u32, u16>>,
    /// 2D decoders, 64-bit codes.
    pub decode_2d_64: Vec<Decode2<u64, u32>>,
    /// 2D decoders, 32-bit codes.
    pub decode_2d_32: Vec<Decode2<u32, u16>>,
}

impl Registry {
    /// Register a 3D 64-bit encoder (overwrites an existing name).
    pub fn register_encode_3d_64(&mut self, name: &'static str, f: fn(u32, u32, u32) -> u64) {
        upsert(&mut self.encode_3d_64, Encode3 { name, f });
    }

    /// Register a 3D 32-bit encoder.
    pub fn register_encode_3d_32(&mut self, name: &'static str, f: fn(u16, u16, u16) -> u32) {
        upsert(&mut self.encode_3d_32, Encode3 { name, f });
    }

    /// Register a 3D 64-bit decoder.
    pub fn register_decode_3d_64(&mut self, name: &'static str, f: fn(u64) -> (u32, u32, u32)) {
        upsert(&mut self.decode_3d_64, Decode3 { name, f });
    }

    /// Register a 3D 32-bit decoder.
    pub fn register_decode_3d_32(&mut self, name: &'static str, f: fn(u32) -> (u16, u16, u16)) {
        upsert(&mut self.decode_3d_32, Decode3 { name, f });
    }

    /// Register a 2D 64-bit encoder.
    pub fn register_encode_2d_64(&mut self, name: &'static str, f: fn(u32, u32) -> u64) {
        upsert(&mut self.encode_2d_64, Encode2 { name, f });
    }

    /// Register a 2D 32-bit encoder.
    pub fn register_encode_2d_32(&mut self, name: &'static str, f: fn(u16, u16) -> u32) {
        upsert(&mut self.encode_2d_32, Encode2 { name, f });
    }

    /// Register a 2D 64-bit decoder.
    pub fn register_decode_2d_64(&mut self, name: &'static str, f: fn(u64) -> (u32, u32)) {
        upsert(&mut self.decode_2d_64, Decode2 { name, f });
    }

    /// Register a 2D 32-bit decoder.
    pub fn register_decode_2d_32(&mut self, name: &'static str, f: fn(u32) -> (u16, u16)) {
        upsert(&mut self.decode_2d_32, Decode2 { name, f });
    }

    /// Every kernel the library ships, in the canonical report order.
    pub fn with_defaults() -> Self {
        use zcurve_core::kernels::*;

        let mut reg = Registry::default();

        // 3D 64-bit encoders, LUT-family first.
        reg.register_encode_3d_64("LUT Shifted ET", morton_encode_lut_shifted_et_3d_64);
        reg.register_encode_3d_64("LUT Shifted", morton_encode_lut_shifted_3d_64);
        reg.register_encode_3d_64("LUT ET", morton_encode_lut_et_3d_64);
        reg.register_encode_3d_64("LUT", morton_encode_lut_3d_64);
        reg.register_encode_3d_64("Magicbits", morton_encode_magicbits_3d_64);
        reg.register_encode_3d_64("For ET", morton_encode_for_et_3d_64);
        reg.register_encode_3d_64("For", morton_encode_for_3d_64);

        // 3D 32-bit encoders, reference first.
        reg.register_encode_3d_32("For", morton_encode_for_3d_32);
        reg.register_encode_3d_32("For ET", morton_encode_for_et_3d_32);
        reg.register_encode_3d_32("Magicbits", morton_encode_magicbits_3d_32);
        reg.register_encode_3d_32("LUT", morton_encode_lut_3d_32);
        reg.register_encode_3d_32("LUT ET", morton_encode_lut_et_3d_32);
        reg.register_encode_3d_32("LUT Shifted", morton_encode_lut_shifted_3d_32);
        reg.register_encode_3d_32("LUT Shifted ET", morton_encode_lut_shifted_et_3d_32);

        // 3D decoders.
        reg.register_decode_3d_64("For", morton_decode_for_3d_64);
        reg.register_decode_3d_64("For ET", morton_decode_for_et_3d_64);
        reg.register_decode_3d_64("Magicbits", morton_decode_magicbits_3d_64);
        reg.register_decode_3d_64("LUT", morton_decode_lut_3d_64);
        reg.register_decode_3d_64("LUT ET", morton_decode_lut_et_3d_64);
        reg.register_decode_3d_64("LUT Shifted", morton_decode_lut_shifted_3d_64);
        reg.register_decode_3d_64("LUT Shifted ET", morton_decode_lut_shifted_et_3d_64);

        reg.register_decode_3d_32("For", morton_decode_for_3d_32);
        reg.register_decode_3d_32("For ET", morton_decode_for_et_3d_32);
        reg.register_decode_3d_32("Magicbits", morton_decode_magicbits_3d_32);
        reg.register_decode_3d_32("LUT", morton_decode_lut_3d_32);
        reg.register_decode_3d_32("LUT ET", morton_decode_lut_et_3d_32);
        reg.register_decode_3d_32("LUT Shifted", morton_decode_lut_shifted_3d_32);
        reg.register_decode_3d_32("LUT Shifted ET", morton_decode_lut_shifted_et_3d_32);

        // 2D 64-bit encoders, LUT-family first.
        reg.register_encode_2d_64("LUT Shifted ET", morton_encode_lut_shifted_et_2d_64);
        reg.register_encode_2d_64("LUT Shifted", morton_encode_lut_shifted_2d_64);
        reg.register_encode_2d_64("LUT ET", morton_encode_lut_et_2d_64);
        reg.register_encode_2d_64("LUT", morton_encode_lut_2d_64);
        reg.register_encode_2d_64("Magicbits", morton_encode_magicbits_2d_64);
        reg.register_encode_2d_64("For ET", morton_encode_for_et_2d_64);
        reg.register_encode_2d_64("For", morton_encode_for_2d_64);

        // 2D 32-bit encoders, reference first.
        reg.register_encode_2d_32("For", morton_encode_for_2d_32);
        reg.register_encode_2d_32("For ET", morton_encode_for_et_2d_32);
        reg.register_encode_2d_32("Magicbits", morton_encode_magicbits_2d_32);
        reg.register_encode_2d_32("LUT", morton_encode_lut_2d_32);
        reg.register_encode_2d_32("LUT ET", morton_encode_lut_et_2d_32);
        reg.register_encode_2d_32("LUT Shifted", morton_encode_lut_shifted_2d_32);
        reg.register_encode_2d_32("LUT Shifted ET", morton_encode_lut_shifted_et_2d_32);

        // 2D decoders.
        reg.register_decode_2d_64("For", morton_decode_for_2d_64);
        reg.register_decode_2d_64("For ET", morton_decode_for_et_2d_64);
        reg.register_decode_2d_64("Magicbits", morton_decode_magicbits_2d_64);
        reg.register_decode_2d_64("LUT", morton_decode_lut_2d_64);
        reg.register_decode_2d_64("LUT ET", morton_decode_lut_et_2d_64);
        reg.register_decode_2d_64("LUT Shifted", morton_decode_lut_shifted_2d_64);
        reg.register_decode_2d_64("LUT Shifted ET", morton_decode_lut_shifted_et_2d_64);

        reg.register_decode_2d_32("For", morton_decode_for_2d_32);
        reg.register_decode_2d_32("For ET", morton_decode_for_et_2d_32);
        reg.register_decode_2d_32("Magicbits", morton_decode_magicbits_2d_32);
        reg.register_decode_2d_32("LUT", morton_decode_lut_2d_32);
        reg.register_decode_2d_32("LUT ET", morton_decode_lut_et_2d_32);
        reg.register_decode_2d_32("LUT Shifted", morton_decode_lut_shifted_2d_32);
        reg.register_decode_2d_32("LUT Shifted ET", morton_decode_lut_shifted_et_2d_32);

        reg
    }

    /// Keep only kernels whose name contains one of `selectors`
    /// (case-insensitive substring match).
    pub fn retain_strategies(&mut self, selectors: &[String]) {
        let lowered: Vec<String> = selectors.iter().map(|s| s.to_ascii_lowercase()).collect();
        let keep = |name: &str| {
            let name = name.to_ascii_lowercase();
            lowered.iter().any(|s| name.contains(s.as_str()))
        };
        self.encode_3d_64.retain(|k| keep(k.name));
        self.encode_3d_32.retain(|k| keep(k.name));
        self.decode_3d_64.retain(|k| keep(k.name));
        self.decode_3d_32.retain(|k| keep(k.name));
        self.encode_2d_64.retain(|k| keep(k.name));
        self.encode_2d_32.retain(|k| keep(k.name));
        self.decode_2d_64.retain(|k| keep(k.name));
        self.decode_2d_32.retain(|k| keep(k.name));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_register_full_matrix() {
        let reg = Registry::with_defaults();
        assert_eq!(reg.encode_3d_64.len(), 7);
        assert_eq!(reg.encode_3d_32.len(), 7);
        assert_eq!(reg.decode_3d_64.len(), 7);
        assert_eq!(reg.decode_3d_32.len(), 7);
        assert_eq!(reg.encode_2d_64.len(), 7);
        assert_eq!(reg.encode_2d_32.len(), 7);
        assert_eq!(reg.decode_2d_64.len(), 7);
        assert_eq!(reg.decode_2d_32.len(), 7);
    }

    #[test]
    fn test_reregistration_overwrites_in_place() {
        let mut reg = Registry::with_defaults();
        let before: Vec<&str> = reg.encode_3d_64.iter().map(|k| k.name).collect();

        // Re-register "Magicbits" with a different kernel.
        reg.register_encode_3d_64("Magicbits", zcurve_core::kernels::morton_encode_for_3d_64);

        let after: Vec<&str> = reg.encode_3d_64.iter().map(|k| k.name).collect();
        assert_eq!(before, after, "order and count must be unchanged");

        let slot = reg
            .encode_3d_64
            .iter()
            .find(|k| k.name == "Magicbits")
            .unwrap();
        assert_eq!(
            slot.f as usize,
            zcurve_core::kernels::morton_encode_for_3d_64 as usize
        );
    }

    #[test]
    fn test_retain_strategies_filters_by_substring() {
        let mut reg = Registry::with_defaults();
        reg.retain_strategies(&["lut shifted".to_string()]);
        assert_eq!(reg.encode_3d_64.len(), 2); // "LUT Shifted" and "LUT Shifted ET"
        assert_eq!(reg.decode_2d_32.len(), 2);

        let mut reg = Registry::with_defaults();
        reg.retain_strategies(&["for".to_string(), "magicbits".to_string()]);
        assert_eq!(reg.encode_3d_64.len(), 3);
    }

    #[test]
    fn test_report_order_preserved() {
        let reg = Registry::with_defaults();
        let names: Vec<&str> = reg.encode_3d_64.iter().map(|k| k.name).collect();
        assert_eq!(
            names,
            [
                "LUT Shifted ET",
                "LUT Shifted",
                "LUT ET",
                "LUT",
                "Magicbits",
                "For ET",
                "For"
            ]
        );
        let names: Vec<&str> = reg.decode_3d_64.iter().map(|k| k.name).collect();
        assert_eq!(
            names,
            [
                "For",
                "For ET",
                "Magicbits",
                "LUT",
                "LUT ET",
                "LUT Shifted",
                "LUT Shifted ET"
            ]
        );
    }
}
