//! Band layout of the 256-slot code space.
//!
//! # Invariants
//! - `BANDS` covers 0x00–0xFF with no gap and no overlap. This is checked
//!   while the lookup index is built at compile time; a violating edit fails
//!   the build.
//! - Bands are listed in ascending byte order except Delete, which sits
//!   inside the shared-text run and is listed right after it.

use crate::model::category::Category;
use crate::table::codes::*;
use serde::Serialize;
use std::ops::RangeInclusive;

/// How raw bytes of a band map to their canonical value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "rule", content = "value", rename_all = "snake_case")]
pub enum Fold {
    /// Canonical value equals the raw byte.
    Identity,
    /// Every byte of the band folds to this representative.
    To(u8),
}

/// One contiguous run of the code space sharing a category and fold rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Band {
    /// First byte, inclusive.
    pub first: u8,
    /// Last byte, inclusive.
    pub last: u8,
    pub category: Category,
    pub fold: Fold,
}

impl Band {
    const fn new(first: u8, last: u8, category: Category, fold: Fold) -> Self {
        Self {
            first,
            last,
            category,
            fold,
        }
    }

    pub fn contains(&self, byte: u8) -> bool {
        self.bytes().contains(&byte)
    }

    pub fn bytes(&self) -> RangeInclusive<u8> {
        self.first..=self.last
    }

    pub fn len(&self) -> usize {
        (self.last as usize + 1).saturating_sub(self.first as usize)
    }

    /// Only a hand-built band with `first > last` is empty; every entry of
    /// `BANDS` holds at least one slot.
    pub fn is_empty(&self) -> bool {
        self.first > self.last
    }

    /// Canonical value for `byte` under this band's fold rule.
    pub const fn canonical(&self, byte: u8) -> u8 {
        match self.fold {
            Fold::Identity => byte,
            Fold::To(value) => value,
        }
    }
}

/// The code-space partition, table version 1.
pub const BANDS: [Band; 13] = [
    Band::new(
        SIFR_CONTROL_NULL,
        SIFR_CONTROL_UNIT_SEPARATOR,
        Category::Control,
        Fold::To(SIFR_CONTROL_CANONICAL),
    ),
    Band::new(
        SIFR_SHARED_TEXT_START,
        SIFR_SHARED_TEXT_END,
        Category::SharedText,
        Fold::To(SIFR_SHARED_TEXT_CANONICAL),
    ),
    // Delete overrides the shared-text fold and keeps its own value.
    Band::new(
        SIFR_CONTROL_DELETE,
        SIFR_CONTROL_DELETE,
        Category::Control,
        Fold::Identity,
    ),
    Band::new(
        SIFR_LETTER_ALIF,
        SIFR_LETTER_ALEF_MAQSURA,
        Category::ArabicLetter,
        Fold::Identity,
    ),
    Band::new(0xA4, 0xAF, Category::Reserved, Fold::To(SIFR_UNASSIGNED_CANONICAL)),
    Band::new(
        SIFR_DIGIT_ARABIC_ZERO,
        SIFR_DIGIT_ARABIC_NINE,
        Category::ArabicDigit,
        Fold::Identity,
    ),
    Band::new(
        SIFR_PUNCTUATION_ARABIC_COMMA,
        SIFR_PUNCTUATION_ARABIC_QUESTION_MARK,
        Category::ArabicPunctuation,
        Fold::Identity,
    ),
    Band::new(0xBD, 0xBF, Category::Reserved, Fold::To(SIFR_UNASSIGNED_CANONICAL)),
    Band::new(
        SIFR_MARK_FATHA,
        SIFR_MARK_SUPERALIF,
        Category::DiacriticMark,
        Fold::Identity,
    ),
    Band::new(0xD2, 0xDF, Category::Reserved, Fold::To(SIFR_UNASSIGNED_CANONICAL)),
    Band::new(
        SIFR_LIGATURE_LA,
        SIFR_LIGATURE_LA_HAMZA_BELOW,
        Category::Ligature,
        Fold::Identity,
    ),
    Band::new(0xE4, 0xEF, Category::Reserved, Fold::To(SIFR_UNASSIGNED_CANONICAL)),
    Band::new(
        SIFR_EXTENDED_START,
        SIFR_EXTENDED_END,
        Category::Extended,
        Fold::To(SIFR_UNASSIGNED_CANONICAL),
    ),
];

const UNSET: u8 = u8::MAX;

/// Maps every byte to its position in `BANDS`.
pub(crate) const BAND_INDEX: [u8; 256] = build_band_index();

const fn build_band_index() -> [u8; 256] {
    let mut index = [UNSET; 256];
    let mut band = 0;
    while band < BANDS.len() {
        let mut byte = BANDS[band].first as usize;
        while byte <= BANDS[band].last as usize {
            if index[byte] != UNSET {
                panic!("SIFR bands overlap");
            }
            index[byte] = band as u8;
            byte += 1;
        }
        band += 1;
    }

    let mut byte = 0;
    while byte < 256 {
        if index[byte] == UNSET {
            panic!("SIFR bands leave a gap");
        }
        byte += 1;
    }
    index
}

/// Returns the band holding `byte`.
pub fn band_of(byte: u8) -> &'static Band {
    &BANDS[BAND_INDEX[byte as usize] as usize]
}

/// Returns the full band layout.
pub fn bands() -> &'static [Band] {
    &BANDS
}

#[cfg(test)]
mod tests {
    use super::{band_of, bands, Band, Fold};
    use crate::model::category::Category;

    #[test]
    fn band_lengths_sum_to_code_space_size() {
        let total: usize = bands().iter().map(|band| band.len()).sum();
        assert_eq!(total, 256);
    }

    #[test]
    fn delete_band_is_identity_control() {
        let band = band_of(0x7F);
        assert_eq!(band.category, Category::Control);
        assert_eq!(band.fold, Fold::Identity);
        assert_eq!(band.len(), 1);
    }

    #[test]
    fn shared_text_band_stops_before_delete() {
        let band = band_of(0x7E);
        assert_eq!(band.category, Category::SharedText);
        assert_eq!(band.bytes(), 0x20..=0x7E);
    }

    #[test]
    fn hand_built_inverted_band_is_empty() {
        let inverted = Band {
            first: 5,
            last: 2,
            category: Category::Control,
            fold: Fold::To(0x00),
        };
        assert_eq!(inverted.len(), 0);
        assert!(inverted.is_empty());
        assert!(bands().iter().all(|band| !band.is_empty()));
    }
}
