//! Conversion front end
//!
//! [`Converter`] owns the shared pieces of a conversion, the locale
//! tables and the configured naming system, and checks the digit limit
//! before handing values to the resolver. The lossless entry point is
//! [`Converter::try_convert`]; [`Converter::convert`] masks every
//! failure with the locale's unsupported message.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use extenso_core::{digit_count, ConvertError, Locale, Number, Result, ScaleMode, DIGIT_LIMIT};
use extenso_locale::PtLocale;

use crate::decimal;
use crate::joiner;
use crate::resolver::Resolver;

/// Converter settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// Naming system for the brackets past the millions.
    #[serde(default)]
    pub scale: ScaleMode,
}

/// Spells numbers out as words.
///
/// Holds only read-only shared state, so one instance serves any
/// number of threads; each call keeps its working buffer on its own
/// stack.
#[derive(Clone)]
pub struct Converter {
    locale: Arc<dyn Locale>,
    config: ConverterConfig,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(ConverterConfig::default())
    }
}

impl Converter {
    /// Portuguese converter with the given settings.
    pub fn new(config: ConverterConfig) -> Self {
        Self {
            locale: PtLocale::shared(),
            config,
        }
    }

    /// Converter over custom locale tables.
    pub fn with_locale(locale: Arc<dyn Locale>, config: ConverterConfig) -> Self {
        Self { locale, config }
    }

    /// Spell `number` out, masking any failure with the locale's
    /// unsupported message.
    pub fn convert(&self, number: impl Into<Number>) -> String {
        self.spell_or_mask(&number.into(), self.config.scale)
    }

    /// Spell `number` out under an explicit naming system.
    pub fn convert_with(&self, number: impl Into<Number>, scale: ScaleMode) -> String {
        self.spell_or_mask(&number.into(), scale)
    }

    /// Spell `number` out, surfacing the failure cause.
    pub fn try_convert(&self, number: impl Into<Number>) -> Result<String> {
        self.try_spell(&number.into(), self.config.scale)
    }

    /// Spell `number` out under an explicit naming system, surfacing
    /// the failure cause.
    pub fn try_convert_with(&self, number: impl Into<Number>, scale: ScaleMode) -> Result<String> {
        self.try_spell(&number.into(), scale)
    }

    /// Spell a floating point value through its shortest decimal form.
    /// Non-finite and negative input masks to the unsupported message.
    pub fn convert_f64(&self, value: f64) -> String {
        self.convert_f64_with(value, self.config.scale)
    }

    /// Spell a floating point value under an explicit naming system.
    pub fn convert_f64_with(&self, value: f64, scale: ScaleMode) -> String {
        match Number::try_from(value) {
            Ok(number) => self.spell_or_mask(&number, scale),
            Err(err) => {
                tracing::debug!(value, error = %err, "float input rejected");
                self.locale.unsupported_message().to_string()
            }
        }
    }

    /// Spell a single precision value. See [`Converter::convert_f64`].
    pub fn convert_f32(&self, value: f32) -> String {
        self.convert_f32_with(value, self.config.scale)
    }

    /// Spell a single precision value under an explicit naming system.
    pub fn convert_f32_with(&self, value: f32, scale: ScaleMode) -> String {
        match Number::try_from(value) {
            Ok(number) => self.spell_or_mask(&number, scale),
            Err(err) => {
                tracing::debug!(value, error = %err, "float input rejected");
                self.locale.unsupported_message().to_string()
            }
        }
    }

    fn spell_or_mask(&self, number: &Number, scale: ScaleMode) -> String {
        match self.try_spell(number, scale) {
            Ok(words) => words,
            Err(err) => {
                tracing::debug!(number = %number, error = %err, "conversion rejected");
                self.locale.unsupported_message().to_string()
            }
        }
    }

    fn try_spell(&self, number: &Number, scale: ScaleMode) -> Result<String> {
        tracing::debug!(number = %number, ?scale, "converting");
        match number {
            Number::Int(value) => {
                if *value < 0 {
                    return Err(ConvertError::NegativeNumber);
                }
                let value = *value as u64;
                let digits = digit_count(value) as usize;
                if digits > DIGIT_LIMIT {
                    return Err(ConvertError::DigitLimitExceeded {
                        digits,
                        limit: DIGIT_LIMIT,
                    });
                }
                let tokens = Resolver::new(self.locale.as_ref(), scale).resolve(value)?;
                Ok(joiner::join(self.locale.as_ref(), &tokens))
            }
            Number::Decimal(digits) => {
                let longest = digits.whole().len().max(digits.frac().len());
                if longest > DIGIT_LIMIT {
                    return Err(ConvertError::DigitLimitExceeded {
                        digits: longest,
                        limit: DIGIT_LIMIT,
                    });
                }
                decimal::spell(
                    self.locale.as_ref(),
                    scale,
                    digits.whole(),
                    digits.frac(),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_spell_out() {
        let converter = Converter::default();
        assert_eq!(converter.convert(0), "zero");
        assert_eq!(converter.convert(23), "vinte e três");
        assert_eq!(converter.convert(1_000u32), "mil");
        assert_eq!(converter.convert(2_500i64), "dois mil e quinhentos");
    }

    #[test]
    fn test_configured_scale_applies() {
        let long = Converter::default();
        let short = Converter::new(ConverterConfig {
            scale: ScaleMode::ShortScale,
        });
        assert_eq!(long.convert(1_000_000_000i64), "mil milhões");
        assert_eq!(short.convert(1_000_000_000i64), "bilião");
    }

    #[test]
    fn test_explicit_scale_overrides_configuration() {
        let converter = Converter::default();
        assert_eq!(
            converter.convert_with(1_000_000_000_000i64, ScaleMode::ShortScale),
            "trilião"
        );
        assert_eq!(
            converter.convert_with(1_000_000_000_000i64, ScaleMode::LongScale),
            "bilião"
        );
    }

    #[test]
    fn test_negative_input_masks_and_errors() {
        let converter = Converter::default();
        assert_eq!(converter.convert(-1), "número não suportado");
        assert!(matches!(
            converter.try_convert(-1),
            Err(ConvertError::NegativeNumber)
        ));
    }

    #[test]
    fn test_digit_limit_masks_and_errors() {
        let converter = Converter::default();
        let too_wide = 1_000_000_000_000_000i64;
        assert_eq!(converter.convert(too_wide), "número não suportado");
        assert!(matches!(
            converter.try_convert(too_wide),
            Err(ConvertError::DigitLimitExceeded {
                digits: 16,
                limit: 15,
            })
        ));

        let at_limit = 999_999_999_999_999i64;
        assert_eq!(
            converter.convert(at_limit),
            "novecentos e noventa e nove biliões e novecentos e noventa e nove mil milhões \
             e novecentos e noventa e nove milhões e novecentos e noventa e nove mil \
             e novecentos e noventa e nove"
        );
    }

    #[test]
    fn test_decimal_digit_limit_checks_each_part() {
        let converter = Converter::default();
        let wide_frac = Number::decimal("1", "0000000000000005").unwrap();
        assert_eq!(converter.convert(wide_frac), "número não suportado");

        let at_limit = Number::decimal("1", "000000000000005").unwrap();
        assert_eq!(
            converter.convert(at_limit),
            "um vírgula zero zero zero zero zero zero zero zero zero zero zero zero zero zero cinco"
        );
    }

    #[test]
    fn test_float_entry_points() {
        let converter = Converter::default();
        assert_eq!(converter.convert_f64(0.05), "zero vírgula zero cinco");
        assert_eq!(converter.convert_f64(5.0), "cinco");
        assert_eq!(converter.convert_f32(2.5), "dois vírgula cinco");
        assert_eq!(converter.convert_f64(f64::NAN), "número não suportado");
        assert_eq!(converter.convert_f64(-3.2), "número não suportado");
    }

    #[test]
    fn test_parsed_strings_convert() {
        let converter = Converter::default();
        let number: Number = "123.450".parse().unwrap();
        assert_eq!(
            converter.convert(number),
            "cento e vinte e três vírgula quatrocentos e cinquenta"
        );
    }

    #[test]
    fn test_custom_locale_handle() {
        let converter = Converter::with_locale(PtLocale::shared(), ConverterConfig::default());
        assert_eq!(converter.convert(42), "quarenta e dois");
    }

    #[test]
    fn test_config_serde_round_trip() {
        let config: ConverterConfig = serde_json::from_str(r#"{"scale":"short_scale"}"#).unwrap();
        assert_eq!(config.scale, ScaleMode::ShortScale);

        let config: ConverterConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.scale, ScaleMode::LongScale);
    }
}
