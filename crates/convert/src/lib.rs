//! Numbers spelled out in European Portuguese
//!
//! This crate turns numeric values into their written form:
//! - **Cardinals**: "vinte e três", "mil e cem", up to fifteen digits
//! - **Decimals**: "dois vírgula cinquenta", with leading fraction
//!   zeros read digit by digit
//! - **Naming systems**: European long scale by default, short scale
//!   on request
//!
//! # Example
//!
//! ```
//! use extenso::{Converter, ToWords};
//!
//! let converter = Converter::default();
//! assert_eq!(converter.convert(23), "vinte e três");
//! assert_eq!(converter.convert_f64(2.5), "dois vírgula cinco");
//! assert_eq!(42.to_words(), "quarenta e dois");
//! ```

mod converter;
mod decimal;
mod joiner;
mod resolver;
mod to_words;

pub use converter::{Converter, ConverterConfig};
pub use to_words::ToWords;

// Re-export the core vocabulary so most callers depend on one crate.
pub use extenso_core::{
    ConvertError, DecimalDigits, Locale, Number, NumberCategory, ParseNumberError, Result,
    ScaleMode, DIGIT_LIMIT,
};
pub use extenso_locale::PtLocale;
