//! Scale naming conventions for large powers of ten

use serde::{Deserialize, Serialize};

/// Naming convention applied at the 10^9 and 10^12 boundaries.
///
/// Nothing below 10^9 is affected: "novecentos e noventa e nove" reads the
/// same under both modes. Long scale is the default, matching European
/// Portuguese usage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ScaleMode {
    /// 10^9 reads as a thousand millions, 10^12 as a billion.
    #[default]
    LongScale,
    /// 10^9 reads as a billion, 10^12 as a trillion.
    ShortScale,
}

impl ScaleMode {
    pub fn is_short(self) -> bool {
        matches!(self, Self::ShortScale)
    }
}
