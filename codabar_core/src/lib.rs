#![forbid(unsafe_code)]

//! Codabar barcode string construction.
//!
//! This crate provides:
//! - Validated scalar types (prefix, suffix, body, seed, check digit)
//! - Check-digit strategies and a named catalog of them
//! - Seed generators
//! - The Codabar composer
//! - Configuration file and logging setup for the CLI

pub mod types;
pub mod error;
pub mod check_digit;
pub mod algorithm;
pub mod seed;
pub mod codabar;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use check_digit::CheckDigitStrategy;
pub use algorithm::Algorithm;
pub use seed::{default_seed, without_trailing_digits, SeedGenerator};
pub use codabar::{new_codabar, Codabar, CodabarOptions};
pub use config::Config;
