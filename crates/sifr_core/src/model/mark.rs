//! Diacritic mark (harakat) band symbols.

use crate::table::codes::*;
use serde::{Deserialize, Serialize};

/// Combining sign from the diacritic band 0xC0–0xD1.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mark {
    Fatha = SIFR_MARK_FATHA,
    TanweenFatha = SIFR_MARK_TANWEEN_FATHA,
    Damma = SIFR_MARK_DAMMA,
    TanweenDamma = SIFR_MARK_TANWEEN_DAMMA,
    Kasra = SIFR_MARK_KASRA,
    TanweenKasra = SIFR_MARK_TANWEEN_KASRA,
    Sukun = SIFR_MARK_SUKUN,
    Shadda = SIFR_MARK_SHADDA,
    DaggerAlif = SIFR_MARK_DAGGER_ALIF,
    Tatweel = SIFR_MARK_TATWEEL,
    MaddahAbove = SIFR_MARK_MADDAH_ABOVE,
    HamzaAboveSign = SIFR_MARK_HAMZA_ABOVE_SIGN,
    HamzaBelowSign = SIFR_MARK_HAMZA_BELOW_SIGN,
    ShaddaFatha = SIFR_MARK_SHADDA_FATHA,
    ShaddaDamma = SIFR_MARK_SHADDA_DAMMA,
    ShaddaKasra = SIFR_MARK_SHADDA_KASRA,
    Wasla = SIFR_MARK_WASLA,
    SuperAlif = SIFR_MARK_SUPERALIF,
}

impl Mark {
    pub const ALL: [Mark; 18] = [
        Self::Fatha,
        Self::TanweenFatha,
        Self::Damma,
        Self::TanweenDamma,
        Self::Kasra,
        Self::TanweenKasra,
        Self::Sukun,
        Self::Shadda,
        Self::DaggerAlif,
        Self::Tatweel,
        Self::MaddahAbove,
        Self::HamzaAboveSign,
        Self::HamzaBelowSign,
        Self::ShaddaFatha,
        Self::ShaddaDamma,
        Self::ShaddaKasra,
        Self::Wasla,
        Self::SuperAlif,
    ];

    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            SIFR_MARK_FATHA..=SIFR_MARK_SUPERALIF => {
                Some(Self::ALL[(byte - SIFR_MARK_FATHA) as usize])
            }
            _ => None,
        }
    }

    pub const fn byte(self) -> u8 {
        self as u8
    }

    /// Nunation marks.
    pub fn is_tanween(self) -> bool {
        matches!(
            self,
            Self::TanweenFatha | Self::TanweenDamma | Self::TanweenKasra
        )
    }

    /// Short vowels, with or without nunation or gemination.
    pub fn is_vowel(self) -> bool {
        matches!(
            self,
            Self::Fatha
                | Self::Damma
                | Self::Kasra
                | Self::ShaddaFatha
                | Self::ShaddaDamma
                | Self::ShaddaKasra
        ) || self.is_tanween()
    }

    /// Splits precomposed marks into the single marks they stand for.
    ///
    /// Single marks return themselves.
    pub fn components(self) -> &'static [Mark] {
        match self {
            Self::ShaddaFatha => &[Self::Shadda, Self::Fatha],
            Self::ShaddaDamma => &[Self::Shadda, Self::Damma],
            Self::ShaddaKasra => &[Self::Shadda, Self::Kasra],
            Self::Fatha => &[Self::Fatha],
            Self::TanweenFatha => &[Self::TanweenFatha],
            Self::Damma => &[Self::Damma],
            Self::TanweenDamma => &[Self::TanweenDamma],
            Self::Kasra => &[Self::Kasra],
            Self::TanweenKasra => &[Self::TanweenKasra],
            Self::Sukun => &[Self::Sukun],
            Self::Shadda => &[Self::Shadda],
            Self::DaggerAlif => &[Self::DaggerAlif],
            Self::Tatweel => &[Self::Tatweel],
            Self::MaddahAbove => &[Self::MaddahAbove],
            Self::HamzaAboveSign => &[Self::HamzaAboveSign],
            Self::HamzaBelowSign => &[Self::HamzaBelowSign],
            Self::Wasla => &[Self::Wasla],
            Self::SuperAlif => &[Self::SuperAlif],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Mark;
    use crate::table::codes::SIFR_MARK_FATHA;

    #[test]
    fn all_is_contiguous_from_fatha() {
        for (index, mark) in Mark::ALL.iter().enumerate() {
            assert_eq!(mark.byte(), SIFR_MARK_FATHA + index as u8);
            assert_eq!(Mark::from_byte(mark.byte()), Some(*mark));
        }
        assert_eq!(Mark::from_byte(0xD2), None);
    }

    #[test]
    fn shadda_compounds_split_into_shadda_then_vowel() {
        assert_eq!(Mark::ShaddaDamma.components(), &[Mark::Shadda, Mark::Damma]);
        assert_eq!(Mark::Sukun.components(), &[Mark::Sukun]);
        assert!(Mark::ShaddaKasra.is_vowel());
        assert!(!Mark::Shadda.is_vowel());
        assert!(Mark::TanweenKasra.is_tanween());
    }
}
