//! Named catalog of the built-in check-digit strategies.
//!
//! Lets the CLI and the config file pick a strategy by name.

use crate::check_digit::{self, CheckDigitStrategy};
use crate::{CheckDigit, Error, Result, Seed};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// A built-in check-digit algorithm
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Algorithm {
    Mod10W21Division,
    Mod10W21Bulk,
    Mod10W31,
    Mod11W7,
    Mod11W10,
    SevenCheck,
    NineCheck,
    SevenRemainder,
    NineRemainder,
}

/// Lookup table keyed by lowercase canonical name and alias, built once
static BY_NAME: Lazy<HashMap<&'static str, Algorithm>> = Lazy::new(|| {
    let mut table = HashMap::new();
    for algorithm in Algorithm::ALL {
        table.insert(algorithm.name(), algorithm);
        table.insert(algorithm.alias(), algorithm);
    }
    table
});

impl Algorithm {
    pub const ALL: [Algorithm; 9] = [
        Algorithm::Mod10W21Division,
        Algorithm::Mod10W21Bulk,
        Algorithm::Mod10W31,
        Algorithm::Mod11W7,
        Algorithm::Mod11W10,
        Algorithm::SevenCheck,
        Algorithm::NineCheck,
        Algorithm::SevenRemainder,
        Algorithm::NineRemainder,
    ];

    /// Canonical kebab-case name
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Mod10W21Division => "mod10-w21-division",
            Algorithm::Mod10W21Bulk => "mod10-w21-bulk",
            Algorithm::Mod10W31 => "mod10-w31",
            Algorithm::Mod11W7 => "mod11-w2-7",
            Algorithm::Mod11W10 => "mod11-w1-up",
            Algorithm::SevenCheck => "seven-check",
            Algorithm::NineCheck => "nine-check",
            Algorithm::SevenRemainder => "seven-remainder",
            Algorithm::NineRemainder => "nine-remainder",
        }
    }

    /// Short alias accepted wherever a name is
    pub fn alias(self) -> &'static str {
        match self {
            Algorithm::Mod10W21Division => "m10w21d",
            Algorithm::Mod10W21Bulk => "m10w21b",
            Algorithm::Mod10W31 => "m10w31",
            Algorithm::Mod11W7 => "m11w7",
            Algorithm::Mod11W10 => "m11w10",
            Algorithm::SevenCheck => "7dsr",
            Algorithm::NineCheck => "9dsr",
            Algorithm::SevenRemainder => "7dr",
            Algorithm::NineRemainder => "9dr",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Algorithm::Mod10W21Division => {
                "Modulus 10, weights 2-1, two-digit products split and added"
            }
            Algorithm::Mod10W21Bulk => "Modulus 10, weights 2-1, products summed as-is",
            Algorithm::Mod10W31 => "Modulus 10, weights 3-1",
            Algorithm::Mod11W7 => "Modulus 11, weights 2 to 7 repeating",
            Algorithm::Mod11W10 => "Modulus 11, weights 1, 2, 3, ... from the last digit",
            Algorithm::SevenCheck => "Seven check (7DSR): 7 minus seed mod 7",
            Algorithm::NineCheck => "Nine check (9DSR): 9 minus seed mod 9",
            Algorithm::SevenRemainder => "Seven check (7DR): seed mod 7",
            Algorithm::NineRemainder => "Nine check (9DR): seed mod 9",
        }
    }

    /// The strategy function this algorithm names
    pub fn strategy(self) -> fn(Seed) -> CheckDigit {
        match self {
            Algorithm::Mod10W21Division => check_digit::mod10_w21_division,
            Algorithm::Mod10W21Bulk => check_digit::mod10_w21_bulk,
            Algorithm::Mod10W31 => check_digit::mod10_w31,
            Algorithm::Mod11W7 => check_digit::mod11_w2_7,
            Algorithm::Mod11W10 => check_digit::mod11_w1_up,
            Algorithm::SevenCheck => check_digit::seven_check,
            Algorithm::NineCheck => check_digit::nine_check,
            Algorithm::SevenRemainder => check_digit::seven_remainder,
            Algorithm::NineRemainder => check_digit::nine_remainder,
        }
    }
}

impl CheckDigitStrategy for Algorithm {
    fn check_digit(&self, seed: Seed) -> CheckDigit {
        (self.strategy())(seed)
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        BY_NAME
            .get(s.trim().to_ascii_lowercase().as_str())
            .copied()
            .ok_or_else(|| Error::invalid(s))
    }
}

impl TryFrom<String> for Algorithm {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Algorithm> for String {
    fn from(value: Algorithm) -> String {
        value.name().to_string()
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.name().parse::<Algorithm>().unwrap(), algorithm);
            assert_eq!(algorithm.alias().parse::<Algorithm>().unwrap(), algorithm);
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!("MOD11-W2-7".parse::<Algorithm>().unwrap(), Algorithm::Mod11W7);
        assert_eq!("7DSR".parse::<Algorithm>().unwrap(), Algorithm::SevenCheck);
    }

    #[test]
    fn test_unknown_name_is_invalid_argument() {
        let err = "luhn".parse::<Algorithm>().unwrap_err();
        assert_eq!(err.invalid_input(), Some("luhn"));
    }

    #[test]
    fn test_names_are_unique() {
        assert_eq!(BY_NAME.len(), Algorithm::ALL.len() * 2);
    }

    #[test]
    fn test_golden_vectors_through_catalog() {
        let cases = [
            (Algorithm::Mod10W21Division, 12345678, '2'),
            (Algorithm::Mod10W21Bulk, 12345678, '4'),
            (Algorithm::Mod10W31, 12345, '7'),
            (Algorithm::Mod11W7, 12345, '5'),
            (Algorithm::Mod11W10, 12345678, '1'),
            (Algorithm::SevenCheck, 12345, '3'),
            (Algorithm::NineCheck, 12345, '3'),
            (Algorithm::SevenRemainder, 12345, '4'),
            (Algorithm::NineRemainder, 12345, '6'),
        ];
        for (algorithm, seed, expected) in cases {
            assert_eq!(
                algorithm.check_digit(Seed::from(seed)).as_char(),
                expected,
                "{}",
                algorithm
            );
        }
    }

    #[test]
    fn test_serde_uses_canonical_name() {
        let json = serde_json::to_string(&Algorithm::Mod11W10).unwrap();
        assert_eq!(json, "\"mod11-w1-up\"");
        let parsed: Algorithm = serde_json::from_str("\"9dr\"").unwrap();
        assert_eq!(parsed, Algorithm::NineRemainder);
    }
}
