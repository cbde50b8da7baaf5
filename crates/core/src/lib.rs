//! Core types and contracts for the extenso workspace
//!
//! This crate provides the foundations shared by the locale data and the
//! converter:
//! - Tagged numeric input ([`Number`]) capturing exact decimal digits
//! - Magnitude classification ([`NumberCategory`] and digit helpers)
//! - Scale naming conventions ([`ScaleMode`])
//! - The locale data contract ([`Locale`])
//! - Error types

pub mod error;
pub mod locale;
pub mod magnitude;
pub mod number;
pub mod scale;

pub use error::{ConvertError, Result};
pub use locale::Locale;
pub use magnitude::{bridge_index, digit_count, NumberCategory};
pub use number::{DecimalDigits, Number, ParseNumberError, DIGIT_LIMIT};
pub use scale::ScaleMode;
