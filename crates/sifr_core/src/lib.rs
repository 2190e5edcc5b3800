//! Core of SIFR, a single-byte code space for Arabic script.
//! This crate is the single source of truth for the byte table and the
//! skeleton/mark composition model.

pub mod extension;
pub mod logging;
pub mod model;
pub mod skeleton;
pub mod table;
pub mod text;

pub use extension::allocation::{ExtensionAllocation, ExtensionError};
pub use extension::registry::ExtensionRegistry;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::category::Category;
pub use model::control::Control;
pub use model::letter::Letter;
pub use model::mark::Mark;
pub use model::symbol::{Digit, Ligature, Punctuation, Symbol};
pub use skeleton::{
    compose, decompose, derived_letters, marks_of, same_skeleton, skeleton_of, skeleton_of_byte,
    CombiningMark, MarkSet, Skeleton, SkeletonError, SkeletonId,
};
pub use table::band::{band_of, bands, Band, Fold};
pub use table::{
    canonical, category, classify, code_space, decode, digit_value, is_reserved, require_assigned,
    table_rows, Classification, TableError, TableRow, TABLE_VERSION,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
