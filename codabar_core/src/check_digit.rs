//! Check-digit strategies.
//!
//! Each strategy maps a [`Seed`] to one [`CheckDigit`]. The weighted
//! schemes read the seed's decimal digits and apply weights starting from
//! the least-significant digit:
//! - Modulus 10, weights 2·1 (digit-folded or bulk) and 3·1
//! - Modulus 11, weights 2–7 cycling and 1, 2, 3, … increasing
//!
//! The seven/nine checks divide the seed itself.

use crate::{CheckDigit, Seed};

/// Anything that turns a seed into a check digit
///
/// Plain functions and closures implement this through the blanket impl,
/// so callers can plug in their own scheme without touching the composer.
pub trait CheckDigitStrategy: Send + Sync {
    fn check_digit(&self, seed: Seed) -> CheckDigit;
}

impl<F> CheckDigitStrategy for F
where
    F: Fn(Seed) -> CheckDigit + Send + Sync,
{
    fn check_digit(&self, seed: Seed) -> CheckDigit {
        self(seed)
    }
}

/// Decimal digits of the seed, most significant first. Zero has no digits.
fn digits(seed: Seed) -> Vec<u64> {
    let mut num = seed.value();
    let mut digits = Vec::new();
    while num > 0 {
        digits.push(num % 10);
        num /= 10;
    }
    digits.reverse();
    digits
}

/// Casting out: 16 becomes 1 + 6.
fn fold(product: u64) -> u64 {
    if product >= 10 {
        product / 10 + product % 10
    } else {
        product
    }
}

/// Sum of digit × weight, walking from the last digit backward.
fn weighted_sum(seed: Seed, weights: impl Iterator<Item = u64>, reduce: fn(u64) -> u64) -> u64 {
    digits(seed)
        .iter()
        .rev()
        .zip(weights)
        .map(|(digit, weight)| reduce(digit * weight))
        .sum()
}

/// `(modulus - value % modulus) % modulus`
fn complement(value: u64, modulus: u64) -> CheckDigit {
    CheckDigit::from_value((modulus - value % modulus) % modulus)
}

/// Modulus 11 maps remainders 0 and 1 to a check digit of 0.
fn mod11_complement(sum: u64) -> CheckDigit {
    match sum % 11 {
        0 | 1 => CheckDigit::from_value(0),
        rem => CheckDigit::from_value(11 - rem),
    }
}

/// Modulus 10, weights 2·1, two-digit products folded into their digit sum.
///
/// 12345678: 16+7+12+5+8+3+4+1 folds to 38, 10 - 8 = 2.
pub fn mod10_w21_division(seed: Seed) -> CheckDigit {
    let sum = weighted_sum(seed, [2, 1].into_iter().cycle(), fold);
    complement(sum, 10)
}

/// Modulus 10, weights 2·1, raw products summed.
///
/// 12345678: 16+7+12+5+8+3+4+1 = 56, 10 - 6 = 4.
pub fn mod10_w21_bulk(seed: Seed) -> CheckDigit {
    let sum = weighted_sum(seed, [2, 1].into_iter().cycle(), std::convert::identity);
    complement(sum, 10)
}

/// Modulus 10, weights 3·1.
pub fn mod10_w31(seed: Seed) -> CheckDigit {
    let sum = weighted_sum(seed, [3, 1].into_iter().cycle(), std::convert::identity);
    complement(sum, 10)
}

/// Modulus 11, weights 2 through 7 repeating.
pub fn mod11_w2_7(seed: Seed) -> CheckDigit {
    let sum = weighted_sum(
        seed,
        [2, 3, 4, 5, 6, 7].into_iter().cycle(),
        std::convert::identity,
    );
    mod11_complement(sum)
}

/// Modulus 11, weights 1, 2, 3, … from the last digit.
pub fn mod11_w1_up(seed: Seed) -> CheckDigit {
    let sum = weighted_sum(seed, 1.., std::convert::identity);
    mod11_complement(sum)
}

/// Seven check, subtracted form (7DSR): `7 - seed % 7`, or 0.
pub fn seven_check(seed: Seed) -> CheckDigit {
    complement(seed.value(), 7)
}

/// Nine check, subtracted form (9DSR): `9 - seed % 9`, or 0.
pub fn nine_check(seed: Seed) -> CheckDigit {
    complement(seed.value(), 9)
}

/// Seven check, remainder form (7DR).
pub fn seven_remainder(seed: Seed) -> CheckDigit {
    CheckDigit::from_value(seed.value() % 7)
}

/// Nine check, remainder form (9DR).
pub fn nine_remainder(seed: Seed) -> CheckDigit {
    CheckDigit::from_value(seed.value() % 9)
}
