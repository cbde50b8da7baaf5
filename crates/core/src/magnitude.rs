//! Magnitude classification of whole numbers
//!
//! Classifies a value by its decimal digit count and locates the bridge
//! index: the digit position separating the significant coefficient from
//! the magnitude-filling trailing zeros. The converter decomposes numbers
//! along these brackets.

use serde::{Deserialize, Serialize};

/// Number of decimal digits in `n`. Zero counts as one digit.
pub fn digit_count(n: u64) -> u32 {
    if n == 0 {
        1
    } else {
        n.ilog10() + 1
    }
}

/// Magnitude bracket of a whole number.
///
/// Each bracket carries the power of ten at its base, which is also the
/// number of implied trailing zeros a coefficient is padded with when a
/// value is split at the bracket boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberCategory {
    /// 0–9
    Unity,
    /// 10–99
    Ten,
    /// 100–999
    Hundred,
    /// 10^3 through 10^6 - 1
    Thousand,
    /// 10^6 through 10^9 - 1
    Million,
    /// 10^9 through 10^12 - 1
    ThousandMillions,
    /// 10^12 and above
    Billion,
}

impl NumberCategory {
    /// Classify a value by digit count.
    ///
    /// Values beyond the billions bracket still classify as [`Billion`];
    /// the converter rejects anything over the digit limit before
    /// classification matters.
    ///
    /// [`Billion`]: NumberCategory::Billion
    pub fn of(n: u64) -> Self {
        match digit_count(n) {
            1 => Self::Unity,
            2 => Self::Ten,
            3 => Self::Hundred,
            4..=6 => Self::Thousand,
            7..=9 => Self::Million,
            10..=12 => Self::ThousandMillions,
            _ => Self::Billion,
        }
    }

    /// Power of ten at the base of the bracket.
    pub fn power(self) -> u32 {
        match self {
            Self::Unity => 0,
            Self::Ten => 1,
            Self::Hundred => 2,
            Self::Thousand => 3,
            Self::Million => 6,
            Self::ThousandMillions => 9,
            Self::Billion => 12,
        }
    }

    /// Scale boundary of the bracket: `10^power`.
    pub fn boundary(self) -> u64 {
        10u64.pow(self.power())
    }

    /// Lowercase bracket name, for messages and logs.
    pub fn name(self) -> &'static str {
        match self {
            Self::Unity => "unity",
            Self::Ten => "ten",
            Self::Hundred => "hundred",
            Self::Thousand => "thousand",
            Self::Million => "million",
            Self::ThousandMillions => "thousand-millions",
            Self::Billion => "billion",
        }
    }
}

impl std::fmt::Display for NumberCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Digit position separating a value's significant coefficient from its
/// magnitude-filling trailing zeros.
///
/// For 123456 (thousand bracket) the bridge is 3: "123" | "456".
/// For 123 (hundred bracket) the bridge is 1: "1" | "23".
pub fn bridge_index(n: u64) -> u32 {
    digit_count(n) - NumberCategory::of(n).power()
}
