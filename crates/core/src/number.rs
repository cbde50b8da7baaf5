//! Tagged numeric input
//!
//! One entry type covers every accepted source: whole numbers arrive as
//! [`Number::Int`], fixed-precision decimals as [`Number::Decimal`] with
//! their exact digit strings. Floating point callers convert through the
//! locale-invariant `Display` form before conversion, so binary rounding
//! can never change which digits get spelled.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum digits accepted in the whole part or the fractional part.
/// Inputs beyond the limit are rejected, never approximated.
pub const DIGIT_LIMIT: usize = 15;

/// Unsigned decimal literal: digits, optionally a point and more digits.
static DECIMAL_LITERAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)(?:\.(\d+))?$").unwrap());

/// Errors from building a [`Number`] out of text or floating point input.
#[derive(Error, Debug)]
pub enum ParseNumberError {
    #[error("empty numeric literal")]
    Empty,

    #[error("invalid numeric literal: {0:?}")]
    InvalidLiteral(String),

    #[error("negative values have no defined spelling")]
    Negative,

    #[error("value is not finite")]
    NotFinite,
}

/// Exact decimal digits of a fixed-precision value.
///
/// Both parts hold ASCII digits only; the whole part is never empty.
/// Leading zeros in the fractional part are significant: "05" spells an
/// extra zero that "5" does not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecimalDigits {
    whole: String,
    frac: String,
}

impl DecimalDigits {
    /// Build from raw digit strings. The fractional part may be empty.
    pub fn new(
        whole: impl Into<String>,
        frac: impl Into<String>,
    ) -> Result<Self, ParseNumberError> {
        let whole = whole.into();
        let frac = frac.into();

        if whole.is_empty() {
            return Err(ParseNumberError::Empty);
        }
        if !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseNumberError::InvalidLiteral(whole));
        }
        if !frac.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseNumberError::InvalidLiteral(frac));
        }

        Ok(Self { whole, frac })
    }

    /// Digits before the decimal point.
    pub fn whole(&self) -> &str {
        &self.whole
    }

    /// Digits after the decimal point, empty when none were given.
    pub fn frac(&self) -> &str {
        &self.frac
    }
}

/// A numeric value accepted by the converter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Number {
    /// A whole number.
    Int(i64),
    /// A fixed-precision decimal captured as exact digit strings.
    Decimal(DecimalDigits),
}

impl Number {
    /// Build the decimal arm from digit strings.
    pub fn decimal(
        whole: impl Into<String>,
        frac: impl Into<String>,
    ) -> Result<Self, ParseNumberError> {
        DecimalDigits::new(whole, frac).map(Number::Decimal)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(v) => write!(f, "{v}"),
            Number::Decimal(d) if d.frac.is_empty() => write!(f, "{}", d.whole),
            Number::Decimal(d) => write!(f, "{}.{}", d.whole, d.frac),
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Int(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Int(i64::from(value))
    }
}

impl From<i16> for Number {
    fn from(value: i16) -> Self {
        Number::Int(i64::from(value))
    }
}

impl From<i8> for Number {
    fn from(value: i8) -> Self {
        Number::Int(i64::from(value))
    }
}

impl From<u8> for Number {
    fn from(value: u8) -> Self {
        Number::Int(i64::from(value))
    }
}

impl From<u16> for Number {
    fn from(value: u16) -> Self {
        Number::Int(i64::from(value))
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Number::Int(i64::from(value))
    }
}

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(v) => Number::Int(v),
            // Past i64 the value is over the digit limit anyway; keep the
            // exact digits so the converter can reject it by count.
            Err(_) => Number::Decimal(DecimalDigits {
                whole: value.to_string(),
                frac: String::new(),
            }),
        }
    }
}

impl TryFrom<f64> for Number {
    type Error = ParseNumberError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(ParseNumberError::NotFinite);
        }
        if value == 0.0 {
            // Covers the negatively signed zero, which formats as "-0".
            return Ok(Number::Int(0));
        }
        if value < 0.0 {
            return Err(ParseNumberError::Negative);
        }
        format!("{value}").parse()
    }
}

impl TryFrom<f32> for Number {
    type Error = ParseNumberError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(ParseNumberError::NotFinite);
        }
        if value == 0.0 {
            return Ok(Number::Int(0));
        }
        if value < 0.0 {
            return Err(ParseNumberError::Negative);
        }
        // Format at f32 precision; widening to f64 first would drag in
        // digits the caller never wrote.
        format!("{value}").parse()
    }
}

impl FromStr for Number {
    type Err = ParseNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseNumberError::Empty);
        }
        if let Some(rest) = s.strip_prefix('-') {
            if DECIMAL_LITERAL.is_match(rest) {
                return Err(ParseNumberError::Negative);
            }
            return Err(ParseNumberError::InvalidLiteral(s.to_string()));
        }

        let caps = DECIMAL_LITERAL
            .captures(s)
            .ok_or_else(|| ParseNumberError::InvalidLiteral(s.to_string()))?;
        let whole = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
        let frac = caps.get(2).map(|m| m.as_str()).unwrap_or_default();

        Ok(Number::Decimal(DecimalDigits {
            whole: whole.to_string(),
            frac: frac.to_string(),
        }))
    }
}
