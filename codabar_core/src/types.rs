//! Validated scalar types for Codabar composition.
//!
//! Every type here is built through a validating constructor and is
//! immutable afterwards:
//! - Start/stop symbols (`Prefix`, `Suffix`)
//! - The numeric payload (`Body`) and the number derived from it (`Seed`)
//! - A single computed `CheckDigit`

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Start/Stop Symbols
// ============================================================================

/// Characters allowed as Codabar start/stop symbols
pub const SYMBOL_ALPHABET: [char; 4] = ['A', 'B', 'C', 'D'];

fn parse_symbol(text: &str) -> Result<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if text.len() == 1 && SYMBOL_ALPHABET.contains(&c) => Ok(c),
        _ => {
            tracing::debug!("Rejected start/stop symbol {:?}", text);
            Err(Error::invalid(text))
        }
    }
}

/// Start symbol of a Codabar string
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Prefix(char);

impl Prefix {
    /// Accepts exactly one of `A`, `B`, `C`, `D`
    pub fn new(text: &str) -> Result<Self> {
        parse_symbol(text).map(Prefix)
    }

    pub fn as_char(&self) -> char {
        self.0
    }
}

/// Stop symbol of a Codabar string
///
/// Same alphabet as [`Prefix`], kept as its own type so the two cannot be
/// swapped in a composer call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Suffix(char);

impl Suffix {
    /// Accepts exactly one of `A`, `B`, `C`, `D`
    pub fn new(text: &str) -> Result<Self> {
        parse_symbol(text).map(Suffix)
    }

    pub fn as_char(&self) -> char {
        self.0
    }
}

// ============================================================================
// Body and Seed
// ============================================================================

/// Parse an unsigned base-10 numeral.
///
/// `u64::from_str` tolerates a leading `+`; a barcode body must not.
fn parse_decimal(text: &str) -> Option<u64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// Numeric payload of a Codabar string
///
/// Keeps the original text, so leading zeros survive composition
/// (`"007"` composes to `A007B`, not `A7B`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Body(String);

impl Body {
    /// Accepts an unsigned decimal numeral within `u64` range
    pub fn new(text: &str) -> Result<Self> {
        match parse_decimal(text) {
            Some(_) => Ok(Body(text.to_string())),
            None => {
                tracing::debug!("Rejected body {:?}", text);
                Err(Error::invalid(text))
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Number fed to check-digit arithmetic
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seed(u64);

impl Seed {
    /// Parses an unsigned decimal numeral; leading zeros are discarded
    pub fn new(text: &str) -> Result<Self> {
        match parse_decimal(text) {
            Some(value) => Ok(Seed(value)),
            None => {
                tracing::debug!("Rejected seed {:?}", text);
                Err(Error::invalid(text))
            }
        }
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for Seed {
    fn from(value: u64) -> Self {
        Seed(value)
    }
}

// ============================================================================
// Check Digit
// ============================================================================

/// A single decimal check digit, `0` through `9`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CheckDigit(u8);

impl CheckDigit {
    /// Accepts exactly one ASCII digit
    pub fn new(text: &str) -> Result<Self> {
        match text.as_bytes() {
            [b] if b.is_ascii_digit() => Ok(CheckDigit(b - b'0')),
            _ => Err(Error::invalid(text)),
        }
    }

    /// Built-in strategies only ever produce remainders below 10.
    pub(crate) fn from_value(value: u64) -> Self {
        debug_assert!(value < 10, "check digit out of range: {}", value);
        CheckDigit((value % 10) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn as_char(&self) -> char {
        char::from(b'0' + self.0)
    }
}

// ============================================================================
// Conversions shared by all scalars
// ============================================================================

macro_rules! text_conversions {
    ($($ty:ident),+) => {$(
        impl FromStr for $ty {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                $ty::new(s)
            }
        }

        impl TryFrom<String> for $ty {
            type Error = Error;

            fn try_from(value: String) -> Result<Self> {
                $ty::new(&value)
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> String {
                value.to_string()
            }
        }
    )+};
}

text_conversions!(Prefix, Suffix, Body, CheckDigit);

impl FromStr for Seed {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Seed::new(s)
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for Suffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for CheckDigit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
