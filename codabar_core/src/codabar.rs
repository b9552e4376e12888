//! Codabar composition.
//!
//! Joins prefix, body, an optional check digit and suffix into the final
//! barcode string. Which check digit (if any) is computed, and from which
//! seed, is decided by [`CodabarOptions`].

use crate::check_digit::CheckDigitStrategy;
use crate::seed::{default_seed, SeedGenerator};
use crate::{Body, CheckDigit, Error, Prefix, Result, Seed, Suffix};
use serde::Serialize;
use std::fmt;

/// How a Codabar string is composed
///
/// With no strategy set, composition is plain concatenation. Setting an
/// option twice keeps the later value.
#[derive(Default)]
pub struct CodabarOptions {
    check_digit: Option<Box<dyn CheckDigitStrategy>>,
    seed: Option<Box<SeedGenerator>>,
}

impl CodabarOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a check digit computed by `strategy`
    pub fn with_check_digit(mut self, strategy: impl CheckDigitStrategy + 'static) -> Self {
        self.check_digit = Some(Box::new(strategy));
        self
    }

    /// Derive the seed with `generator` instead of parsing the body
    pub fn with_seed<G>(mut self, generator: G) -> Self
    where
        G: Fn(&Body) -> Result<Seed> + Send + Sync + 'static,
    {
        self.seed = Some(Box::new(generator));
        self
    }

    pub fn has_check_digit(&self) -> bool {
        self.check_digit.is_some()
    }

    fn derive_seed(&self, body: &Body) -> Result<Seed> {
        match &self.seed {
            Some(generator) => generator(body),
            None => default_seed(body),
        }
    }
}

impl fmt::Debug for CodabarOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodabarOptions")
            .field("check_digit", &self.check_digit.is_some())
            .field("custom_seed", &self.seed.is_some())
            .finish()
    }
}

/// A composed Codabar string
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Codabar {
    value: String,
    check_digit: Option<CheckDigit>,
}

impl Codabar {
    /// Compose `prefix + body + [check digit] + suffix`
    ///
    /// The seed generator only runs when a check-digit strategy is set. If it
    /// fails, composition fails with `InvalidArgument` carrying the body.
    pub fn new(
        prefix: &Prefix,
        body: &Body,
        suffix: &Suffix,
        options: &CodabarOptions,
    ) -> Result<Self> {
        let Some(strategy) = &options.check_digit else {
            return Ok(Codabar {
                value: format!("{}{}{}", prefix, body, suffix),
                check_digit: None,
            });
        };

        let seed = options.derive_seed(body).map_err(|e| {
            tracing::debug!("Seed derivation failed for body {}: {}", body, e);
            Error::invalid(body.as_str())
        })?;
        let check_digit = strategy.check_digit(seed);

        tracing::debug!(
            "Composed codabar with seed {} and check digit {}",
            seed,
            check_digit
        );

        Ok(Codabar {
            value: format!("{}{}{}{}", prefix, body, check_digit, suffix),
            check_digit: Some(check_digit),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn into_string(self) -> String {
        self.value
    }

    /// The inserted check digit, if a strategy was configured
    pub fn check_digit(&self) -> Option<&CheckDigit> {
        self.check_digit.as_ref()
    }
}

/// Free-function form of [`Codabar::new`]
pub fn new_codabar(
    prefix: &Prefix,
    body: &Body,
    suffix: &Suffix,
    options: &CodabarOptions,
) -> Result<Codabar> {
    Codabar::new(prefix, body, suffix, options)
}

impl fmt::Display for Codabar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl PartialEq<&str> for Codabar {
    fn eq(&self, other: &&str) -> bool {
        self.value == *other
    }
}

impl PartialEq<str> for Codabar {
    fn eq(&self, other: &str) -> bool {
        self.value == other
    }
}

impl AsRef<str> for Codabar {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check_digit;
    use crate::seed::without_trailing_digits;
    use crate::Algorithm;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn parts(prefix: &str, body: &str, suffix: &str) -> (Prefix, Body, Suffix) {
        (
            Prefix::new(prefix).unwrap(),
            Body::new(body).unwrap(),
            Suffix::new(suffix).unwrap(),
        )
    }

    fn fixed(digit: &str) -> impl Fn(Seed) -> CheckDigit + Send + Sync {
        let digit = CheckDigit::new(digit).unwrap();
        move |_| digit
    }

    #[test]
    fn test_no_options_concatenates() {
        crate::logging::init_test();
        let (p, b, s) = parts("A", "123456", "B");
        let codabar = Codabar::new(&p, &b, &s, &CodabarOptions::new()).unwrap();
        assert_eq!(codabar, "A123456B");
        assert!(codabar.check_digit().is_none());
    }

    #[test]
    fn test_leading_zeros_survive() {
        let (p, b, s) = parts("A", "007", "B");
        let codabar = new_codabar(&p, &b, &s, &CodabarOptions::default()).unwrap();
        assert_eq!(codabar.as_str(), "A007B");
    }

    #[test]
    fn test_with_fixed_check_digit() {
        let (p, b, s) = parts("A", "123456", "B");
        let options = CodabarOptions::new().with_check_digit(fixed("7"));
        let codabar = Codabar::new(&p, &b, &s, &options).unwrap();
        assert_eq!(codabar, "A1234567B");
        assert_eq!(codabar.check_digit().map(CheckDigit::as_char), Some('7'));
    }

    #[test]
    fn test_with_real_strategy_and_default_seed() {
        crate::logging::init_test();
        let (p, b, s) = parts("A", "123456", "B");
        let options = CodabarOptions::new().with_check_digit(check_digit::mod10_w31);
        let codabar = Codabar::new(&p, &b, &s, &options).unwrap();
        let expected = check_digit::mod10_w31(Seed::from(123456));
        assert_eq!(codabar.into_string(), format!("A123456{}B", expected));
    }

    #[test]
    fn test_custom_seed_feeds_strategy() {
        let (p, b, s) = parts("A", "123456", "B");
        let options = CodabarOptions::new()
            .with_seed(|_: &Body| Ok(Seed::from(654321)))
            .with_check_digit(|seed: Seed| {
                assert_eq!(seed.value(), 654321);
                CheckDigit::new("5").unwrap()
            });
        let codabar = Codabar::new(&p, &b, &s, &options).unwrap();
        assert_eq!(codabar, "A1234565B");
    }

    #[test]
    fn test_failing_seed_generator_aborts() {
        let (p, b, s) = parts("A", "123456", "B");
        let options = CodabarOptions::new()
            .with_seed(|body: &Body| Err(Error::invalid(body.as_str())))
            .with_check_digit(fixed("0"));
        let err = Codabar::new(&p, &b, &s, &options).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(ref v) if v == "123456"));
    }

    #[test]
    fn test_seed_generator_not_called_without_strategy() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let options = CodabarOptions::new().with_seed(move |body: &Body| {
            counter.fetch_add(1, Ordering::SeqCst);
            default_seed(body)
        });
        let (p, b, s) = parts("C", "42", "D");
        let codabar = Codabar::new(&p, &b, &s, &options).unwrap();
        assert_eq!(codabar, "C42D");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_later_option_overrides_earlier() {
        let (p, b, s) = parts("A", "12345", "B");
        let options = CodabarOptions::new()
            .with_check_digit(fixed("1"))
            .with_check_digit(Algorithm::SevenCheck);
        let codabar = Codabar::new(&p, &b, &s, &options).unwrap();
        assert_eq!(codabar, "A123453B");
    }

    #[test]
    fn test_trailing_digit_excluded_from_seed() {
        // seed 123456 under mod11-w2-7 is 0
        let (p, b, s) = parts("A", "1234569", "B");
        let options = CodabarOptions::new()
            .with_seed(without_trailing_digits(1))
            .with_check_digit(Algorithm::Mod11W7);
        let codabar = Codabar::new(&p, &b, &s, &options).unwrap();
        assert_eq!(codabar, "A12345690B");
    }

    #[test]
    fn test_composition_is_idempotent() {
        let (p, b, s) = parts("B", "0012345", "C");
        let options = CodabarOptions::new().with_check_digit(Algorithm::NineCheck);
        let first = Codabar::new(&p, &b, &s, &options).unwrap();
        let second = Codabar::new(&p, &b, &s, &options).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, "B00123453C");
    }

    #[test]
    fn test_serializes_value_and_check_digit() {
        let (p, b, s) = parts("A", "12345", "B");
        let options = CodabarOptions::new().with_check_digit(Algorithm::Mod10W31);
        let codabar = Codabar::new(&p, &b, &s, &options).unwrap();
        let json = serde_json::to_value(&codabar).unwrap();
        assert_eq!(json["value"], "A123457B");
        assert_eq!(json["check_digit"], "7");
    }
}
