//! Spelling directly on the numeric primitives
//!
//! `42.to_words()` runs a process-wide default converter, Portuguese
//! tables under the long scale. `to_words_with` picks the naming
//! system per call; anything beyond that goes through an owned
//! [`Converter`].

use once_cell::sync::Lazy;

use extenso_core::ScaleMode;

use crate::converter::Converter;

static DEFAULT_CONVERTER: Lazy<Converter> = Lazy::new(Converter::default);

/// Spell a value with the default converter.
pub trait ToWords {
    /// Words for this value, or the unsupported message when it is
    /// outside the supported range.
    fn to_words(&self) -> String;

    /// Words for this value under an explicit naming system.
    fn to_words_with(&self, scale: ScaleMode) -> String;
}

impl ToWords for u8 {
    fn to_words(&self) -> String {
        DEFAULT_CONVERTER.convert(*self)
    }

    fn to_words_with(&self, scale: ScaleMode) -> String {
        DEFAULT_CONVERTER.convert_with(*self, scale)
    }
}

impl ToWords for u16 {
    fn to_words(&self) -> String {
        DEFAULT_CONVERTER.convert(*self)
    }

    fn to_words_with(&self, scale: ScaleMode) -> String {
        DEFAULT_CONVERTER.convert_with(*self, scale)
    }
}

impl ToWords for u32 {
    fn to_words(&self) -> String {
        DEFAULT_CONVERTER.convert(*self)
    }

    fn to_words_with(&self, scale: ScaleMode) -> String {
        DEFAULT_CONVERTER.convert_with(*self, scale)
    }
}

impl ToWords for u64 {
    fn to_words(&self) -> String {
        DEFAULT_CONVERTER.convert(*self)
    }

    fn to_words_with(&self, scale: ScaleMode) -> String {
        DEFAULT_CONVERTER.convert_with(*self, scale)
    }
}

impl ToWords for i8 {
    fn to_words(&self) -> String {
        DEFAULT_CONVERTER.convert(*self)
    }

    fn to_words_with(&self, scale: ScaleMode) -> String {
        DEFAULT_CONVERTER.convert_with(*self, scale)
    }
}

impl ToWords for i16 {
    fn to_words(&self) -> String {
        DEFAULT_CONVERTER.convert(*self)
    }

    fn to_words_with(&self, scale: ScaleMode) -> String {
        DEFAULT_CONVERTER.convert_with(*self, scale)
    }
}

impl ToWords for i32 {
    fn to_words(&self) -> String {
        DEFAULT_CONVERTER.convert(*self)
    }

    fn to_words_with(&self, scale: ScaleMode) -> String {
        DEFAULT_CONVERTER.convert_with(*self, scale)
    }
}

impl ToWords for i64 {
    fn to_words(&self) -> String {
        DEFAULT_CONVERTER.convert(*self)
    }

    fn to_words_with(&self, scale: ScaleMode) -> String {
        DEFAULT_CONVERTER.convert_with(*self, scale)
    }
}

impl ToWords for f32 {
    fn to_words(&self) -> String {
        DEFAULT_CONVERTER.convert_f32(*self)
    }

    fn to_words_with(&self, scale: ScaleMode) -> String {
        DEFAULT_CONVERTER.convert_f32_with(*self, scale)
    }
}

impl ToWords for f64 {
    fn to_words(&self) -> String {
        DEFAULT_CONVERTER.convert_f64(*self)
    }

    fn to_words_with(&self, scale: ScaleMode) -> String {
        DEFAULT_CONVERTER.convert_f64_with(*self, scale)
    }
}
