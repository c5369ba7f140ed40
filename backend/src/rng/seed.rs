//! Seed parsing and defaulting
//!
//! Seeds arrive as integers, floats or text. Each one is parsed into a
//! [`RawSeed`] or into `None`, meaning "use the default":
//!
//! 1. Text is trimmed and converted to a number (empty text is 0, `0x`/`0o`/`0b`
//!    prefixes select a radix, anything else is read as a decimal float).
//! 2. NaN and infinities are not numbers.
//! 3. Finite numbers become `abs(floor(x))`.
//! 4. Anything below 1 falls back to the default.
//!
//! Seed A defaults to the wall clock in milliseconds. Seed B defaults to the
//! resolved seed A. This is the only non-deterministic path in the crate.

use std::time::{SystemTime, UNIX_EPOCH};

/// 2^64 as a double; integral values at or above it do not fit in `u64`
const U64_RANGE: f64 = 18_446_744_073_709_551_616.0;

/// A seed as supplied by the caller, before normalization
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Seed {
    /// No seed given
    #[default]
    Missing,
    Integer(u64),
    Signed(i64),
    Number(f64),
    Text(String),
}

impl From<u64> for Seed {
    fn from(value: u64) -> Self {
        Seed::Integer(value)
    }
}

impl From<u32> for Seed {
    fn from(value: u32) -> Self {
        Seed::Integer(u64::from(value))
    }
}

impl From<i64> for Seed {
    fn from(value: i64) -> Self {
        Seed::Signed(value)
    }
}

impl From<i32> for Seed {
    fn from(value: i32) -> Self {
        Seed::Signed(i64::from(value))
    }
}

impl From<f64> for Seed {
    fn from(value: f64) -> Self {
        Seed::Number(value)
    }
}

impl From<&str> for Seed {
    fn from(value: &str) -> Self {
        Seed::Text(value.to_string())
    }
}

impl From<String> for Seed {
    fn from(value: String) -> Self {
        Seed::Text(value)
    }
}

impl<T: Into<Seed>> From<Option<T>> for Seed {
    fn from(value: Option<T>) -> Self {
        value.map_or(Seed::Missing, Into::into)
    }
}

/// A validated seed value, always `>= 1`
///
/// Integers stay exact. Integral doubles beyond `u64` are kept as doubles and
/// reduced with floating-point remainder, which is exact for integral inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawSeed {
    Int(u64),
    Wide(f64),
}

impl RawSeed {
    /// Reduce into a lattice state: `(raw mod (modulus - 1)) + 1`
    pub fn reduce(self, modulus: u64) -> u64 {
        let period = modulus - 1;
        match self {
            RawSeed::Int(value) => value % period + 1,
            RawSeed::Wide(value) => (value % period as f64) as u64 + 1,
        }
    }
}

/// Parse a seed, returning `None` when the default should be used
pub fn parse_seed(seed: &Seed) -> Option<RawSeed> {
    match seed {
        Seed::Missing => None,
        Seed::Integer(value) => from_integer(*value),
        Seed::Signed(value) => from_integer(value.unsigned_abs()),
        Seed::Number(value) => from_number(*value),
        Seed::Text(text) => parse_text(text),
    }
}

/// Resolve both seeds, applying the defaulting rules.
///
/// `clock` is only called when seed A needs a default.
pub fn resolve_seeds<F>(seed_a: &Seed, seed_b: &Seed, clock: F) -> (RawSeed, RawSeed)
where
    F: FnOnce() -> u64,
{
    let resolved_a = match parse_seed(seed_a) {
        Some(raw) => raw,
        None => {
            let now = clock();
            log::debug!("seed A {:?} unusable, falling back to clock value {}", seed_a, now);
            RawSeed::Int(now)
        }
    };

    let resolved_b = match parse_seed(seed_b) {
        Some(raw) => raw,
        None => {
            log::debug!("seed B {:?} unusable, reusing seed A", seed_b);
            resolved_a
        }
    };

    (resolved_a, resolved_b)
}

/// Milliseconds since the Unix epoch (0 if the clock reads before it)
pub fn wall_clock_millis() -> u64 {
    let Ok(elapsed) = SystemTime::now().duration_since(UNIX_EPOCH) else {
        return 0;
    };
    elapsed.as_millis().min(u64::MAX as u128) as u64
}

fn from_integer(value: u64) -> Option<RawSeed> {
    (value >= 1).then_some(RawSeed::Int(value))
}

fn from_number(value: f64) -> Option<RawSeed> {
    if !value.is_finite() {
        return None;
    }
    let value = value.floor().abs();
    if value < 1.0 {
        None
    } else if value < U64_RANGE {
        Some(RawSeed::Int(value as u64))
    } else {
        Some(RawSeed::Wide(value))
    }
}

fn parse_text(text: &str) -> Option<RawSeed> {
    let text = text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    if text.is_empty() {
        return None;
    }

    if let Some(radix) = radix_prefix(text) {
        let digits = &text[2..];
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return None;
        }
        return match u64::from_str_radix(digits, radix) {
            Ok(value) => from_integer(value),
            Err(_) => from_number(wide_radix_value(digits, radix)),
        };
    }

    text.parse::<f64>().ok().and_then(from_number)
}

/// Value of validated radix digits too wide for `u64`.
///
/// Rounded once when it fits in `u128`, otherwise accumulated in `f64`.
/// Overflows to infinity, which [`from_number`] treats as "not a number".
fn wide_radix_value(digits: &str, radix: u32) -> f64 {
    if let Ok(value) = u128::from_str_radix(digits, radix) {
        return value as f64;
    }
    digits
        .chars()
        .filter_map(|c| c.to_digit(radix))
        .fold(0.0, |acc, digit| acc * f64::from(radix) + f64::from(digit))
}

fn radix_prefix(text: &str) -> Option<u32> {
    let prefix = text.get(..2)?;
    if prefix.eq_ignore_ascii_case("0x") {
        Some(16)
    } else if prefix.eq_ignore_ascii_case("0o") {
        Some(8)
    } else if prefix.eq_ignore_ascii_case("0b") {
        Some(2)
    } else {
        None
    }
}
