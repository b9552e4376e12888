//! Seed generators: how a [`Body`] becomes the [`Seed`] a strategy sees.

use crate::{Body, Error, Result, Seed};

/// A function deriving the check-digit seed from a body
pub type SeedGenerator = dyn Fn(&Body) -> Result<Seed> + Send + Sync;

/// Parse the body's digit text as-is
pub fn default_seed(body: &Body) -> Result<Seed> {
    Seed::new(body.as_str())
}

/// Ignore the last `count` body digits when deriving the seed
///
/// For bodies that end in a fixed marker digit which must not take part in
/// the check-digit calculation. Fails if no digits would remain.
pub fn without_trailing_digits(count: usize) -> impl Fn(&Body) -> Result<Seed> + Send + Sync {
    move |body: &Body| {
        let text = body.as_str();
        if count == 0 {
            return Seed::new(text);
        }
        if count >= text.len() {
            tracing::debug!(
                "Cannot drop {} trailing digits from body {:?}",
                count,
                text
            );
            return Err(Error::invalid(text));
        }
        Seed::new(&text[..text.len() - count])
    }
}
