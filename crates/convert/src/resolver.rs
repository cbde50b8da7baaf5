//! Recursive number decomposition
//!
//! A value is reduced to word tokens by, at each step, either finding
//! a direct word in the locale tables, emitting a coefficient plus a
//! scale word, or peeling the leading digit group off and recursing on
//! both halves. The bridge index tells how many digits the leading
//! group keeps.

use extenso_core::{
    bridge_index, digit_count, ConvertError, Locale, NumberCategory, Result, ScaleMode,
};

/// Per-call decomposition state.
///
/// Built fresh for every value, so concurrent conversions never share
/// a token buffer. Tokens borrow straight from the locale tables.
pub(crate) struct Resolver<'a> {
    locale: &'a dyn Locale,
    scale: ScaleMode,
    tokens: Vec<&'a str>,
}

impl<'a> Resolver<'a> {
    pub(crate) fn new(locale: &'a dyn Locale, scale: ScaleMode) -> Self {
        Self {
            locale,
            scale,
            tokens: Vec::new(),
        }
    }

    /// Decompose `value` into word tokens in spoken order.
    pub(crate) fn resolve(mut self, value: u64) -> Result<Vec<&'a str>> {
        self.push_value(value, false)?;
        Ok(self.tokens)
    }

    fn push_value(&mut self, value: u64, prefixed_hundred: bool) -> Result<()> {
        let category = NumberCategory::of(value);
        match category {
            // 100 alone reads "cem", "cento" when a remainder follows.
            NumberCategory::Hundred if value == 100 => {
                let word = self.locale.hundred_word(prefixed_hundred);
                self.tokens.push(word);
                Ok(())
            }
            NumberCategory::Unity | NumberCategory::Ten | NumberCategory::Hundred => {
                if let Some(word) = self.locale.lookup(category, value) {
                    self.tokens.push(word);
                    Ok(())
                } else {
                    self.split(value, category)
                }
            }
            _ => self.push_scaled(value, category),
        }
    }

    /// Values in a scale bracket: the boundary itself takes the bare
    /// scale word, clean multiples take coefficient plus plural, and
    /// everything else splits.
    fn push_scaled(&mut self, value: u64, category: NumberCategory) -> Result<()> {
        let boundary = category.boundary();
        if value == boundary {
            return self.push_scale_word(category, false);
        }
        if value % boundary == 0 {
            self.push_value(value / boundary, false)?;
            return self.push_scale_word(category, true);
        }
        self.split(value, category)
    }

    fn push_scale_word(&mut self, category: NumberCategory, plural: bool) -> Result<()> {
        let word = self
            .locale
            .scale_word(category, self.scale, plural)
            .ok_or(ConvertError::MissingWord {
                category,
                value: category.boundary(),
            })?;
        self.tokens.push(word);
        Ok(())
    }

    /// Peel the leading digit group off `value` and recurse on both
    /// halves.
    fn split(&mut self, value: u64, category: NumberCategory) -> Result<()> {
        let tail_len = digit_count(value) - bridge_index(value);
        let pow = 10u64.pow(tail_len);
        let head = (value / pow) * pow;
        let tail = value % pow;

        if tail == 0 {
            // The head equals the value and lookup already failed for
            // it, so recursing could never terminate.
            return Err(ConvertError::MissingWord { category, value });
        }

        self.push_value(head, category == NumberCategory::Hundred && value != 100)?;
        self.push_value(tail, tail != 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use extenso_locale::PtLocale;

    fn resolve(value: u64) -> Vec<&'static str> {
        let locale: &'static dyn Locale = &PtLocale;
        Resolver::new(locale, ScaleMode::LongScale)
            .resolve(value)
            .unwrap()
    }

    #[test]
    fn test_direct_words() {
        assert_eq!(resolve(0), vec!["zero"]);
        assert_eq!(resolve(7), vec!["sete"]);
        assert_eq!(resolve(15), vec!["quinze"]);
        assert_eq!(resolve(90), vec!["noventa"]);
    }

    #[test]
    fn test_compound_tens_split() {
        assert_eq!(resolve(23), vec!["vinte", "três"]);
        assert_eq!(resolve(99), vec!["noventa", "nove"]);
    }

    #[test]
    fn test_hundred_takes_prefix_form_before_remainder() {
        assert_eq!(resolve(100), vec!["cem"]);
        assert_eq!(resolve(150), vec!["cento", "cinquenta"]);
        assert_eq!(resolve(125), vec!["cento", "vinte", "cinco"]);
        assert_eq!(resolve(500), vec!["quinhentos"]);
    }

    #[test]
    fn test_hundred_remainder_of_thousand_stays_bare() {
        assert_eq!(resolve(1100), vec!["mil", "cem"]);
    }

    #[test]
    fn test_scale_boundary_takes_bare_word() {
        assert_eq!(resolve(1_000), vec!["mil"]);
        assert_eq!(resolve(1_000_000), vec!["milhão"]);
        assert_eq!(resolve(1_000_000_000), vec!["mil milhões"]);
    }

    #[test]
    fn test_clean_multiples_take_coefficient_and_plural() {
        assert_eq!(resolve(2_000), vec!["dois", "mil"]);
        assert_eq!(resolve(2_000_000), vec!["dois", "milhões"]);
        assert_eq!(resolve(100_000), vec!["cem", "mil"]);
        assert_eq!(resolve(123_000), vec!["cento", "vinte", "três", "mil"]);
    }

    #[test]
    fn test_mixed_values_split_head_and_tail() {
        assert_eq!(resolve(1_023), vec!["mil", "vinte", "três"]);
        assert_eq!(resolve(2_500), vec!["dois", "mil", "quinhentos"]);
        assert_eq!(
            resolve(123_456),
            vec!["cento", "vinte", "três", "mil", "quatrocentos", "cinquenta", "seis"]
        );
    }

    #[test]
    fn test_short_scale_changes_upper_brackets() {
        let locale: &'static dyn Locale = &PtLocale;
        let tokens = Resolver::new(locale, ScaleMode::ShortScale)
            .resolve(1_000_000_000)
            .unwrap();
        assert_eq!(tokens, vec!["bilião"]);

        let tokens = Resolver::new(locale, ScaleMode::ShortScale)
            .resolve(3_000_000_000_000)
            .unwrap();
        assert_eq!(tokens, vec!["três", "triliões"]);
    }

    #[test]
    fn test_defective_tables_error_instead_of_recursing() {
        struct EmptyLocale;

        impl Locale for EmptyLocale {
            fn lookup(&self, _: NumberCategory, _: u64) -> Option<&str> {
                None
            }
            fn hundred_word(&self, _: bool) -> &str {
                "?"
            }
            fn scale_word(&self, _: NumberCategory, _: ScaleMode, _: bool) -> Option<&str> {
                None
            }
            fn connective(&self) -> &str {
                "?"
            }
            fn attaches_bare(&self, _: &str) -> bool {
                false
            }
            fn decimal_separator(&self) -> &str {
                "?"
            }
            fn zero_word(&self) -> &str {
                "?"
            }
            fn unsupported_message(&self) -> &str {
                "?"
            }
        }

        let err = Resolver::new(&EmptyLocale, ScaleMode::LongScale)
            .resolve(20)
            .unwrap_err();
        assert!(matches!(err, ConvertError::MissingWord { value: 20, .. }));

        let err = Resolver::new(&EmptyLocale, ScaleMode::LongScale)
            .resolve(1_000)
            .unwrap_err();
        assert!(matches!(err, ConvertError::MissingWord { .. }));
    }
}
