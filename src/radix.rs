//! Positional-notation decoding of share values into big integers.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::error::{Error, Result};

/// Smallest radix a share value may be written in.
pub const MIN_RADIX: u32 = 2;
/// Largest radix a share value may be written in (digits `0`-`9` then `a`-`z`).
pub const MAX_RADIX: u32 = 36;

/// Decode `digits` as a base-`radix` number.
///
/// Digits are case-insensitive and read most-significant first, accumulating
/// `value = value * radix + digit` over an unbounded integer, so a share
/// value of any length decodes without overflow.
pub fn decode(radix: u32, digits: &str) -> Result<BigUint> {
    if !(MIN_RADIX..=MAX_RADIX).contains(&radix) {
        return Err(Error::InvalidRadix {
            given: radix.to_string(),
        });
    }
    if digits.is_empty() {
        return Err(Error::EmptyDigits);
    }

    let mut value = BigUint::zero();
    for c in digits.chars() {
        let digit = c
            .to_digit(radix)
            .ok_or(Error::InvalidDigit { digit: c, radix })?;
        value = value * radix + digit;
    }
    Ok(value)
}
