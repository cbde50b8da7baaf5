//! Locale data for extenso
//!
//! Word tables implementing the `Locale` contract from `extenso-core`.
//! Currently ships European Portuguese; further languages slot in as
//! sibling modules with their own tables.

pub mod pt;

pub use pt::PtLocale;
