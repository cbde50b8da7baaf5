//! Locale contract
//!
//! A [`Locale`] supplies every language-specific fact the converter
//! needs: the word tables for small values, the scale words for the
//! large brackets, the connective and separator tokens, and the
//! message returned for unsupported input. Implementations hold only
//! read-only data and are shared across calls behind `Arc<dyn Locale>`.

use crate::magnitude::NumberCategory;
use crate::scale::ScaleMode;

/// Language-specific word tables and joining rules.
pub trait Locale: Send + Sync {
    /// Direct word for a value inside its bracket, when one exists.
    ///
    /// Covers the small brackets: units (including zero), tens that
    /// have their own word, and exact hundred multiples from 200 up.
    /// Returns `None` for values that must be decomposed further and
    /// for the value 100, which [`Locale::hundred_word`] owns.
    fn lookup(&self, category: NumberCategory, value: u64) -> Option<&str>;

    /// Word for exactly 100. Some languages change it when a remainder
    /// follows, so `prefixed` marks that position.
    fn hundred_word(&self, prefixed: bool) -> &str;

    /// Scale word for a large bracket under the given naming system.
    ///
    /// `plural` selects the form used after a coefficient greater than
    /// one. Returns `None` for brackets that have no scale word.
    fn scale_word(
        &self,
        category: NumberCategory,
        scale: ScaleMode,
        plural: bool,
    ) -> Option<&str>;

    /// Connective inserted between spelled groups.
    fn connective(&self) -> &str;

    /// Whether `word` joins the phrase with a plain space instead of
    /// the connective. Scale words behave this way in Portuguese.
    fn attaches_bare(&self, word: &str) -> bool;

    /// Word spoken for the decimal point.
    fn decimal_separator(&self) -> &str;

    /// Word for the digit zero, read out for each leading zero of a
    /// fractional part.
    fn zero_word(&self) -> &str;

    /// Message returned when the input is outside the supported range.
    fn unsupported_message(&self) -> &str;
}
