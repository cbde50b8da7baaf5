//! European Portuguese word tables
//!
//! European usage differs from Brazilian in the teens ("catorze",
//! "dezasseis") and in defaulting to the long scale, where "bilião"
//! names a million millions. Both naming systems are exposed through
//! the scale word table so callers pick per conversion.

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;

use extenso_core::{Locale, NumberCategory, ScaleMode};

/// Unit words indexed by value, zero included.
const UNITS: [&str; 10] = [
    "zero", "um", "dois", "três", "quatro", "cinco", "seis", "sete", "oito", "nove",
];

/// Two-digit values with a word of their own: the teens and the exact
/// multiples of ten. Everything else in the bracket is decomposed.
static TENS: Lazy<HashMap<u64, &'static str>> = Lazy::new(|| {
    let mut map = HashMap::new();

    // 10..=19
    map.insert(10, "dez");
    map.insert(11, "onze");
    map.insert(12, "doze");
    map.insert(13, "treze");
    map.insert(14, "catorze");
    map.insert(15, "quinze");
    map.insert(16, "dezasseis");
    map.insert(17, "dezassete");
    map.insert(18, "dezoito");
    map.insert(19, "dezanove");

    // Exact tens
    map.insert(20, "vinte");
    map.insert(30, "trinta");
    map.insert(40, "quarenta");
    map.insert(50, "cinquenta");
    map.insert(60, "sessenta");
    map.insert(70, "setenta");
    map.insert(80, "oitenta");
    map.insert(90, "noventa");

    map
});

/// Exact hundred multiples from 200 up. 100 itself has two forms and
/// lives in [`PtLocale::hundred_word`].
static HUNDREDS: Lazy<HashMap<u64, &'static str>> = Lazy::new(|| {
    let mut map = HashMap::new();

    map.insert(200, "duzentos");
    map.insert(300, "trezentos");
    map.insert(400, "quatrocentos");
    map.insert(500, "quinhentos");
    map.insert(600, "seiscentos");
    map.insert(700, "setecentos");
    map.insert(800, "oitocentos");
    map.insert(900, "novecentos");

    map
});

/// Words that follow the preceding group with a plain space. "dois mil"
/// takes no connective, "vinte e três" does.
const NO_CONNECTIVE: &[&str] = &[
    "mil",
    "milhão",
    "milhões",
    "mil milhões",
    "bilião",
    "biliões",
    "trilião",
    "triliões",
];

/// European Portuguese tables behind the [`Locale`] contract.
#[derive(Debug, Default, Clone, Copy)]
pub struct PtLocale;

impl PtLocale {
    /// Shared handle to the Portuguese tables.
    pub fn shared() -> Arc<dyn Locale> {
        static SHARED: Lazy<Arc<PtLocale>> = Lazy::new(|| Arc::new(PtLocale));
        SHARED.clone()
    }
}

impl Locale for PtLocale {
    fn lookup(&self, category: NumberCategory, value: u64) -> Option<&str> {
        match category {
            NumberCategory::Unity => UNITS.get(value as usize).copied(),
            NumberCategory::Ten => TENS.get(&value).copied(),
            NumberCategory::Hundred => HUNDREDS.get(&value).copied(),
            _ => None,
        }
    }

    fn hundred_word(&self, prefixed: bool) -> &str {
        if prefixed {
            "cento"
        } else {
            "cem"
        }
    }

    fn scale_word(
        &self,
        category: NumberCategory,
        scale: ScaleMode,
        plural: bool,
    ) -> Option<&str> {
        let word = match (category, scale) {
            (NumberCategory::Thousand, _) => "mil",
            (NumberCategory::Million, _) => {
                if plural {
                    "milhões"
                } else {
                    "milhão"
                }
            }
            // Long scale names 10^9 by composition and keeps "bilião"
            // for 10^12; short scale shifts each word down a bracket.
            (NumberCategory::ThousandMillions, ScaleMode::LongScale) => "mil milhões",
            (NumberCategory::ThousandMillions, ScaleMode::ShortScale) => {
                if plural {
                    "biliões"
                } else {
                    "bilião"
                }
            }
            (NumberCategory::Billion, ScaleMode::LongScale) => {
                if plural {
                    "biliões"
                } else {
                    "bilião"
                }
            }
            (NumberCategory::Billion, ScaleMode::ShortScale) => {
                if plural {
                    "triliões"
                } else {
                    "trilião"
                }
            }
            _ => return None,
        };
        Some(word)
    }

    fn connective(&self) -> &str {
        "e"
    }

    fn attaches_bare(&self, word: &str) -> bool {
        NO_CONNECTIVE.contains(&word)
    }

    fn decimal_separator(&self) -> &str {
        "vírgula"
    }

    fn zero_word(&self) -> &str {
        "zero"
    }

    fn unsupported_message(&self) -> &str {
        "número não suportado"
    }
}
