//! Digit, punctuation and ligature bands, and the tagged `Symbol` union
//! a decoded byte resolves to.

use crate::model::category::Category;
use crate::model::control::Control;
use crate::model::letter::Letter;
use crate::model::mark::Mark;
use crate::table;
use crate::table::codes::*;
use serde::{Deserialize, Serialize};

/// Arabic digit 0–9 (0xB0–0xB9).
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Digit {
    Zero = SIFR_DIGIT_ARABIC_ZERO,
    One = SIFR_DIGIT_ARABIC_ONE,
    Two = SIFR_DIGIT_ARABIC_TWO,
    Three = SIFR_DIGIT_ARABIC_THREE,
    Four = SIFR_DIGIT_ARABIC_FOUR,
    Five = SIFR_DIGIT_ARABIC_FIVE,
    Six = SIFR_DIGIT_ARABIC_SIX,
    Seven = SIFR_DIGIT_ARABIC_SEVEN,
    Eight = SIFR_DIGIT_ARABIC_EIGHT,
    Nine = SIFR_DIGIT_ARABIC_NINE,
}

impl Digit {
    pub const ALL: [Digit; 10] = [
        Self::Zero,
        Self::One,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
    ];

    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            SIFR_DIGIT_ARABIC_ZERO..=SIFR_DIGIT_ARABIC_NINE => {
                Some(Self::ALL[(byte - SIFR_DIGIT_ARABIC_ZERO) as usize])
            }
            _ => None,
        }
    }

    /// Inverse of `value`; `None` above 9.
    pub fn from_value(value: u8) -> Option<Self> {
        Self::ALL.get(value as usize).copied()
    }

    pub const fn byte(self) -> u8 {
        self as u8
    }

    /// Numeric value, `byte - SIFR_DIGIT_ARABIC_ZERO`.
    pub const fn value(self) -> u8 {
        self as u8 - SIFR_DIGIT_ARABIC_ZERO
    }
}

/// Arabic punctuation (0xBA–0xBC).
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Punctuation {
    Comma = SIFR_PUNCTUATION_ARABIC_COMMA,
    Semicolon = SIFR_PUNCTUATION_ARABIC_SEMICOLON,
    QuestionMark = SIFR_PUNCTUATION_ARABIC_QUESTION_MARK,
}

impl Punctuation {
    pub const ALL: [Punctuation; 3] = [Self::Comma, Self::Semicolon, Self::QuestionMark];

    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            SIFR_PUNCTUATION_ARABIC_COMMA => Some(Self::Comma),
            SIFR_PUNCTUATION_ARABIC_SEMICOLON => Some(Self::Semicolon),
            SIFR_PUNCTUATION_ARABIC_QUESTION_MARK => Some(Self::QuestionMark),
            _ => None,
        }
    }

    pub const fn byte(self) -> u8 {
        self as u8
    }
}

/// Lam-Alif ligatures (0xE0–0xE3).
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ligature {
    La = SIFR_LIGATURE_LA,
    LaHamzaAbove = SIFR_LIGATURE_LA_HAMZA_ABOVE,
    LaMadda = SIFR_LIGATURE_LA_MADDA,
    LaHamzaBelow = SIFR_LIGATURE_LA_HAMZA_BELOW,
}

impl Ligature {
    pub const ALL: [Ligature; 4] = [
        Self::La,
        Self::LaHamzaAbove,
        Self::LaMadda,
        Self::LaHamzaBelow,
    ];

    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            SIFR_LIGATURE_LA..=SIFR_LIGATURE_LA_HAMZA_BELOW => {
                Some(Self::ALL[(byte - SIFR_LIGATURE_LA) as usize])
            }
            _ => None,
        }
    }

    pub const fn byte(self) -> u8 {
        self as u8
    }

    /// Letter pair the ligature stands for, in logical order.
    pub fn components(self) -> [Letter; 2] {
        match self {
            Self::La => [Letter::Lam, Letter::Alif],
            Self::LaHamzaAbove => [Letter::Lam, Letter::AlifHamzaAbove],
            Self::LaMadda => [Letter::Lam, Letter::AlifMadda],
            Self::LaHamzaBelow => [Letter::Lam, Letter::AlifHamzaBelow],
        }
    }

    /// Inverse of `components`.
    pub fn from_components(first: Letter, second: Letter) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|ligature| ligature.components() == [first, second])
    }
}

/// A decoded SIFR byte.
///
/// Bands without individually named slots (shared text, reserved, extended)
/// keep the raw byte so no information is lost on decode.
///
/// Deserialized symbols are checked against the code-space table: a raw
/// byte is accepted only under the variant `decode` gives it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    tag = "kind",
    content = "value",
    rename_all = "snake_case",
    try_from = "SymbolRepr"
)]
pub enum Symbol {
    Control(Control),
    SharedText(u8),
    Letter(Letter),
    Digit(Digit),
    Punctuation(Punctuation),
    Mark(Mark),
    Ligature(Ligature),
    Reserved(u8),
    Extended(u8),
}

impl Symbol {
    /// Raw byte this symbol was decoded from.
    pub fn byte(self) -> u8 {
        match self {
            Self::Control(control) => control.byte(),
            Self::Letter(letter) => letter.byte(),
            Self::Digit(digit) => digit.byte(),
            Self::Punctuation(punctuation) => punctuation.byte(),
            Self::Mark(mark) => mark.byte(),
            Self::Ligature(ligature) => ligature.byte(),
            Self::SharedText(byte) | Self::Reserved(byte) | Self::Extended(byte) => byte,
        }
    }

    pub fn category(self) -> Category {
        match self {
            Self::Control(_) => Category::Control,
            Self::SharedText(_) => Category::SharedText,
            Self::Letter(_) => Category::ArabicLetter,
            Self::Digit(_) => Category::ArabicDigit,
            Self::Punctuation(_) => Category::ArabicPunctuation,
            Self::Mark(_) => Category::DiacriticMark,
            Self::Ligature(_) => Category::Ligature,
            Self::Reserved(_) => Category::Reserved,
            Self::Extended(_) => Category::Extended,
        }
    }

    pub fn as_letter(self) -> Option<Letter> {
        match self {
            Self::Letter(letter) => Some(letter),
            _ => None,
        }
    }

    pub fn as_mark(self) -> Option<Mark> {
        match self {
            Self::Mark(mark) => Some(mark),
            _ => None,
        }
    }
}

/// Unchecked wire form of `Symbol`.
#[derive(Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
enum SymbolRepr {
    Control(Control),
    SharedText(u8),
    Letter(Letter),
    Digit(Digit),
    Punctuation(Punctuation),
    Mark(Mark),
    Ligature(Ligature),
    Reserved(u8),
    Extended(u8),
}

impl TryFrom<SymbolRepr> for Symbol {
    type Error = String;

    fn try_from(value: SymbolRepr) -> Result<Self, Self::Error> {
        let claimed = match value {
            SymbolRepr::Control(control) => Self::Control(control),
            SymbolRepr::SharedText(byte) => Self::SharedText(byte),
            SymbolRepr::Letter(letter) => Self::Letter(letter),
            SymbolRepr::Digit(digit) => Self::Digit(digit),
            SymbolRepr::Punctuation(punctuation) => Self::Punctuation(punctuation),
            SymbolRepr::Mark(mark) => Self::Mark(mark),
            SymbolRepr::Ligature(ligature) => Self::Ligature(ligature),
            SymbolRepr::Reserved(byte) => Self::Reserved(byte),
            SymbolRepr::Extended(byte) => Self::Extended(byte),
        };
        let decoded = table::decode(claimed.byte());
        if decoded != claimed {
            return Err(format!(
                "byte 0x{:02X} is {}, not {}",
                claimed.byte(),
                decoded.category().as_str(),
                claimed.category().as_str()
            ));
        }
        Ok(claimed)
    }
}
