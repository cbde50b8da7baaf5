//! Conversion error types

use thiserror::Error;

use crate::NumberCategory;

/// Errors surfaced by the fallible conversion surface.
///
/// The string-returning surface maps all of these to the locale's
/// unsupported sentinel; `try_convert` reports the precise cause.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The whole or the fractional part carries more digits than supported.
    #[error("number exceeds the {limit}-digit limit ({digits} digits)")]
    DigitLimitExceeded { digits: usize, limit: usize },

    /// Negative input. No sign-word convention is defined, so negatives are
    /// rejected rather than spelled approximately.
    #[error("negative numbers have no defined spelling")]
    NegativeNumber,

    /// The locale table lacks an entry the decomposition relies on. This is
    /// a locale-data defect, not an input error; it cannot occur with the
    /// bundled Portuguese tables.
    #[error("no word mapping for {value} in the {category} bracket")]
    MissingWord {
        category: NumberCategory,
        value: u64,
    },
}

pub type Result<T> = std::result::Result<T, ConvertError>;
