//! Token assembly
//!
//! Tokens come out of the resolver in spoken order; joining inserts
//! the locale connective between groups except before words the
//! locale marks as attaching bare.

use extenso_core::Locale;

/// Join word tokens into a single phrase.
pub(crate) fn join(locale: &dyn Locale, tokens: &[&str]) -> String {
    let mut phrase = String::new();
    for token in tokens {
        if phrase.is_empty() {
            phrase.push_str(token);
            continue;
        }
        phrase.push(' ');
        if !locale.attaches_bare(token) {
            phrase.push_str(locale.connective());
            phrase.push(' ');
        }
        phrase.push_str(token);
    }
    phrase
}
