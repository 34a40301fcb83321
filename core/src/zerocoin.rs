use std::sync::OnceLock;

use num_bigint::BigUint;
use num_traits::Num;
use tracing::info;

use crate::constants::{ZEROCOIN_DEFAULT_SECURITY_LEVEL, ZEROCOIN_MODULUS};

/// Accumulator parameters of the zerocoin protocol.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZerocoinParams {
    pub accumulator_modulus: BigUint,
    pub security_level: u32,
}

impl ZerocoinParams {
    pub fn new(accumulator_modulus: BigUint, security_level: u32) -> Self {
        Self {
            accumulator_modulus,
            security_level,
        }
    }

    pub fn modulus_bits(&self) -> u64 {
        self.accumulator_modulus.bits()
    }
}

/// Lazily built, process-lifetime pair of zerocoin parameter objects.
///
/// Both objects come from the same textual literal. The legacy ("v1") object reads
/// it as base 16, the current one as base 10, so the two moduli are different
/// numbers. Both are built on the first request for either one and reused
/// afterwards; concurrent first callers block until construction has finished.
pub struct ZerocoinParamsCache {
    modulus: &'static str,
    hex: OnceLock<ZerocoinParams>,
    dec: OnceLock<ZerocoinParams>,
}

impl ZerocoinParamsCache {
    pub const fn new(modulus: &'static str) -> Self {
        Self {
            modulus,
            hex: OnceLock::new(),
            dec: OnceLock::new(),
        }
    }

    pub fn get(&self, use_modulus_v1: bool) -> &ZerocoinParams {
        let hex = self.hex.get_or_init(|| build_params(self.modulus, 16));
        let dec = self.dec.get_or_init(|| build_params(self.modulus, 10));
        if use_modulus_v1 {
            hex
        } else {
            dec
        }
    }
}

/// The cache shared by every network of the process.
pub static ZEROCOIN_PARAMS: ZerocoinParamsCache = ZerocoinParamsCache::new(ZEROCOIN_MODULUS);

fn build_params(modulus: &str, radix: u32) -> ZerocoinParams {
    let value = BigUint::from_str_radix(modulus, radix)
        .unwrap_or_else(|err| panic!("zerocoin modulus is not valid base-{radix}: {err}"));
    let params = ZerocoinParams::new(value, ZEROCOIN_DEFAULT_SECURITY_LEVEL);
    info!(
        radix,
        bits = params.modulus_bits(),
        "Constructed zerocoin parameters"
    );
    params
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_selector_returns_same_object() {
        let first = ZEROCOIN_PARAMS.get(true);
        let second = ZEROCOIN_PARAMS.get(true);
        assert!(std::ptr::eq(first, second));

        let first = ZEROCOIN_PARAMS.get(false);
        let second = ZEROCOIN_PARAMS.get(false);
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_variants_have_different_moduli() {
        let v1 = ZEROCOIN_PARAMS.get(true);
        let v2 = ZEROCOIN_PARAMS.get(false);

        assert!(!std::ptr::eq(v1, v2));
        assert_ne!(v1.accumulator_modulus, v2.accumulator_modulus);
        assert_eq!(v2.modulus_bits(), 2048);
        assert_eq!(v1.modulus_bits(), 2466);
        assert_eq!(v2.accumulator_modulus.to_str_radix(10), ZEROCOIN_MODULUS);
        assert_eq!(v1.accumulator_modulus.to_str_radix(16), ZEROCOIN_MODULUS);
        assert_eq!(v1.security_level, ZEROCOIN_DEFAULT_SECURITY_LEVEL);
    }

    #[test]
    fn test_first_request_builds_both_variants() {
        let cache = ZerocoinParamsCache::new("123");
        cache.get(false);
        assert!(cache.hex.get().is_some());
        assert!(cache.dec.get().is_some());
        assert_eq!(cache.get(true).accumulator_modulus, BigUint::from(0x123u32));
        assert_eq!(cache.get(false).accumulator_modulus, BigUint::from(123u32));
    }

    #[test]
    fn test_concurrent_first_use_builds_once() {
        let cache = ZerocoinParamsCache::new(ZEROCOIN_MODULUS);
        let addresses: Vec<(usize, usize)> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|i| {
                    let cache = &cache;
                    scope.spawn(move || {
                        // Alternate which variant each thread asks for first.
                        let (v1, v2) = if i % 2 == 0 {
                            let v1 = cache.get(true);
                            (v1, cache.get(false))
                        } else {
                            let v2 = cache.get(false);
                            (cache.get(true), v2)
                        };
                        (address_of(v1), address_of(v2))
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(addresses.len(), 8);
        assert!(addresses.windows(2).all(|pair| pair[0] == pair[1]));
        assert_eq!(addresses[0].0, address_of(cache.get(true)));
        assert_eq!(addresses[0].1, address_of(cache.get(false)));
    }

    fn address_of(params: &ZerocoinParams) -> usize {
        params as *const ZerocoinParams as usize
    }
}
