//! Synthetic demo data: addresses, transaction hashes, and trade profits.
//!
//! Nothing here is unique or persisted; every call produces fresh values.

use rand::Rng;
use rust_decimal::Decimal;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Hex digits in an Ethereum address, excluding the `0x` prefix.
pub const ADDRESS_HEX_LEN: usize = 40;

/// Hex digits in a transaction hash, excluding the `0x` prefix.
pub const TX_HASH_HEX_LEN: usize = 64;

/// Random lowercase hex string of `len` digits.
pub fn random_hex<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| char::from(HEX_DIGITS[rng.gen_range(0..HEX_DIGITS.len())]))
        .collect()
}

/// Fresh `0x`-prefixed 40-digit deposit address.
pub fn deposit_address<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("0x{}", random_hex(rng, ADDRESS_HEX_LEN))
}

/// Fresh 64-digit transaction hash, without prefix.
pub fn transaction_hash<R: Rng + ?Sized>(rng: &mut R) -> String {
    random_hex(rng, TX_HASH_HEX_LEN)
}

/// Inclusive range a simulated trade profit is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfitRange {
    min: Decimal,
    max: Decimal,
}

impl ProfitRange {
    /// Create a range; bounds are rounded to cents. Returns `None` when
    /// `min > max`.
    #[must_use]
    pub fn new(min: Decimal, max: Decimal) -> Option<Self> {
        let min = min.round_dp(2);
        let max = max.round_dp(2);
        (min <= max).then_some(Self { min, max })
    }

    #[must_use]
    pub const fn min(&self) -> Decimal {
        self.min
    }

    #[must_use]
    pub const fn max(&self) -> Decimal {
        self.max
    }

    /// Check whether a value lies inside the range.
    #[must_use]
    pub fn contains(&self, value: Decimal) -> bool {
        value >= self.min && value <= self.max
    }

    /// Sample a profit uniformly over the cent values in the range.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Decimal {
        let lo = cents(self.min);
        let hi = cents(self.max);
        Decimal::from_i128_with_scale(rng.gen_range(lo..=hi), 2)
    }
}

impl Default for ProfitRange {
    fn default() -> Self {
        Self {
            min: Decimal::new(50, 2),
            max: Decimal::new(250, 2),
        }
    }
}

fn cents(value: Decimal) -> i128 {
    let mut scaled = value.round_dp(2);
    scaled.rescale(2);
    scaled.mantissa()
}
