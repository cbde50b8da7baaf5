//! Decimal spelling
//!
//! The whole and fractional parts are spelled independently and tied
//! together with the locale's separator word. Leading zeros in the
//! fraction are read digit by digit, which keeps "0.05" and "0.5"
//! apart.

use extenso_core::{Locale, Result, ScaleMode};

use crate::joiner;
use crate::resolver::Resolver;

/// Spell a fixed-precision decimal from its digit strings.
pub(crate) fn spell(
    locale: &dyn Locale,
    scale: ScaleMode,
    whole: &str,
    frac: &str,
) -> Result<String> {
    let whole_words = spell_part(locale, scale, digits_to_value(whole))?;

    let frac_value = digits_to_value(frac);
    if frac_value == 0 {
        // Covers both an absent fraction and an all-zero one, which
        // reads as the whole number alone.
        return Ok(whole_words);
    }

    let mut phrase = whole_words;
    phrase.push(' ');
    phrase.push_str(locale.decimal_separator());
    phrase.push(' ');
    for _ in frac.bytes().take_while(|b| *b == b'0') {
        phrase.push_str(locale.zero_word());
        phrase.push(' ');
    }
    phrase.push_str(&spell_part(locale, scale, frac_value)?);
    Ok(phrase)
}

fn spell_part(locale: &dyn Locale, scale: ScaleMode, value: u64) -> Result<String> {
    let tokens = Resolver::new(locale, scale).resolve(value)?;
    Ok(joiner::join(locale, &tokens))
}

/// Numeric value of a validated ASCII digit string. Empty reads as
/// zero. Callers enforce the digit limit first, so the fold cannot
/// overflow.
pub(crate) fn digits_to_value(digits: &str) -> u64 {
    digits
        .bytes()
        .fold(0u64, |acc, b| acc * 10 + u64::from(b - b'0'))
}
