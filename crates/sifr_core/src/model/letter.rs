//! Arabic letter band symbols.
//!
//! # Invariants
//! - Discriminants are the raw SIFR bytes 0x80–0xA3, contiguous.
//! - `Letter::ALL[i].byte() == SIFR_LETTER_ALIF + i`.

use crate::table::codes::*;
use serde::{Deserialize, Serialize};

/// Arabic core letter, presentation-form agnostic.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Letter {
    Alif = SIFR_LETTER_ALIF,
    Ba = SIFR_LETTER_BA,
    Ta = SIFR_LETTER_TA,
    Tha = SIFR_LETTER_THA,
    Jeem = SIFR_LETTER_JEEM,
    Ha = SIFR_LETTER_HA,
    Kha = SIFR_LETTER_KHA,
    Dal = SIFR_LETTER_DAL,
    Thal = SIFR_LETTER_THAL,
    Ra = SIFR_LETTER_RA,
    Zay = SIFR_LETTER_ZAY,
    Seen = SIFR_LETTER_SEEN,
    Sheen = SIFR_LETTER_SHEEN,
    Sad = SIFR_LETTER_SAD,
    Dad = SIFR_LETTER_DAD,
    Tta = SIFR_LETTER_TTA,
    Zza = SIFR_LETTER_ZZA,
    Ain = SIFR_LETTER_AIN,
    Ghain = SIFR_LETTER_GHAIN,
    Fa = SIFR_LETTER_FA,
    Qaf = SIFR_LETTER_QAF,
    Kaf = SIFR_LETTER_KAF,
    Lam = SIFR_LETTER_LAM,
    Meem = SIFR_LETTER_MEEM,
    Noon = SIFR_LETTER_NOON,
    Heh = SIFR_LETTER_HEH,
    Waw = SIFR_LETTER_WAW,
    Ya = SIFR_LETTER_YA,
    Hamza = SIFR_LETTER_HAMZA,
    TaMarbuta = SIFR_LETTER_TAMARBUTA,
    AlifMadda = SIFR_LETTER_ALIF_MADDA,
    AlifHamzaAbove = SIFR_LETTER_ALIF_HAMZA_ABOVE,
    AlifHamzaBelow = SIFR_LETTER_ALIF_HAMZA_BELOW,
    YaHamza = SIFR_LETTER_YA_HAMZA,
    WawHamza = SIFR_LETTER_WAW_HAMZA,
    AlefMaqsura = SIFR_LETTER_ALEF_MAQSURA,
}

impl Letter {
    pub const COUNT: usize = (SIFR_LETTER_ALEF_MAQSURA - SIFR_LETTER_ALIF) as usize + 1;

    pub const ALL: [Letter; Self::COUNT] = [
        Self::Alif,
        Self::Ba,
        Self::Ta,
        Self::Tha,
        Self::Jeem,
        Self::Ha,
        Self::Kha,
        Self::Dal,
        Self::Thal,
        Self::Ra,
        Self::Zay,
        Self::Seen,
        Self::Sheen,
        Self::Sad,
        Self::Dad,
        Self::Tta,
        Self::Zza,
        Self::Ain,
        Self::Ghain,
        Self::Fa,
        Self::Qaf,
        Self::Kaf,
        Self::Lam,
        Self::Meem,
        Self::Noon,
        Self::Heh,
        Self::Waw,
        Self::Ya,
        Self::Hamza,
        Self::TaMarbuta,
        Self::AlifMadda,
        Self::AlifHamzaAbove,
        Self::AlifHamzaBelow,
        Self::YaHamza,
        Self::WawHamza,
        Self::AlefMaqsura,
    ];

    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            SIFR_LETTER_ALIF..=SIFR_LETTER_ALEF_MAQSURA => {
                Some(Self::ALL[(byte - SIFR_LETTER_ALIF) as usize])
            }
            _ => None,
        }
    }

    pub const fn byte(self) -> u8 {
        self as u8
    }

    /// Zero-based position inside the letter band.
    pub const fn index(self) -> usize {
        (self as u8 - SIFR_LETTER_ALIF) as usize
    }

    /// Letters written with a hamza seat or the hamza itself.
    pub fn carries_hamza(self) -> bool {
        matches!(
            self,
            Self::Hamza
                | Self::AlifHamzaAbove
                | Self::AlifHamzaBelow
                | Self::YaHamza
                | Self::WawHamza
        )
    }
}
