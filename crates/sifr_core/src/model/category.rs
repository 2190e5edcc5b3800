//! Code-point category model.
//!
//! # Invariants
//! - Every byte of the code space belongs to exactly one `Category`.
//! - The variant set is part of the published table version; adding a
//!   variant is a table version bump.

use serde::{Deserialize, Serialize};

/// Semantic band a raw byte belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// C0 control codes plus Delete.
    Control,
    /// Bytes reused from the host text range.
    SharedText,
    ArabicLetter,
    ArabicDigit,
    ArabicPunctuation,
    /// Harakat, tanween and related combining signs.
    DiacriticMark,
    Ligature,
    /// Valid, addressable, but carrying no current meaning.
    Reserved,
    /// Kept for future allocation; see `crate::extension`.
    Extended,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Self::Control,
        Self::SharedText,
        Self::ArabicLetter,
        Self::ArabicDigit,
        Self::ArabicPunctuation,
        Self::DiacriticMark,
        Self::Ligature,
        Self::Reserved,
        Self::Extended,
    ];

    /// Stable string id, identical to the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Control => "control",
            Self::SharedText => "shared_text",
            Self::ArabicLetter => "arabic_letter",
            Self::ArabicDigit => "arabic_digit",
            Self::ArabicPunctuation => "arabic_punctuation",
            Self::DiacriticMark => "diacritic_mark",
            Self::Ligature => "ligature",
            Self::Reserved => "reserved",
            Self::Extended => "extended",
        }
    }

    /// Returns whether bytes of this category carry no assigned meaning.
    pub fn is_unassigned(self) -> bool {
        matches!(self, Self::Reserved | Self::Extended)
    }
}
