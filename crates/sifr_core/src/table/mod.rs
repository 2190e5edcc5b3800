//! Code-space table: the authoritative interpretation of a raw SIFR byte.
//!
//! # Responsibility
//! - Classify every byte into exactly one `Category` with its canonical value.
//! - Decode bytes into typed band symbols.
//!
//! # Invariants
//! - `classify` is total over 0x00–0xFF; there is no invalid byte, only
//!   unassigned ones.
//! - The table is a compile-time constant with no runtime mutation path.
//! - Reserved slots decode successfully; callers that need a meaning ask
//!   `require_assigned`, which reports `UnassignedSlot`.

pub mod band;
pub mod codes;

use crate::model::category::Category;
use crate::model::control::Control;
use crate::model::letter::Letter;
use crate::model::mark::Mark;
use crate::model::symbol::{Digit, Ligature, Punctuation, Symbol};
use band::{Band, BANDS, BAND_INDEX};
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Published version of the band layout and named slots.
pub const TABLE_VERSION: &str = "0.0.1";

/// Category and canonical (folded) value of one byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Classification {
    pub category: Category,
    /// Representative value for category-level comparison.
    pub canonical: u8,
}

impl Classification {
    const fn from_band(band: &Band, byte: u8) -> Self {
        Self {
            category: band.category,
            canonical: band.canonical(byte),
        }
    }
}

static CODE_SPACE: [Classification; 256] = build_code_space();

const fn build_code_space() -> [Classification; 256] {
    let mut table = [Classification {
        category: Category::Reserved,
        canonical: 0,
    }; 256];
    let mut byte = 0;
    while byte < 256 {
        let band = &BANDS[BAND_INDEX[byte] as usize];
        table[byte] = Classification::from_band(band, byte as u8);
        byte += 1;
    }
    table
}

pub type TableResult<T> = Result<T, TableError>;

/// Misuse of a band-specific operation on a byte outside that band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    NotADigit(u8),
    NotALetter(u8),
    NotAMark(u8),
    /// The byte is valid but carries no meaning (reserved or extended).
    UnassignedSlot(u8),
}

impl TableError {
    /// Offending raw byte.
    pub fn byte(self) -> u8 {
        match self {
            Self::NotADigit(byte)
            | Self::NotALetter(byte)
            | Self::NotAMark(byte)
            | Self::UnassignedSlot(byte) => byte,
        }
    }
}

impl Display for TableError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotADigit(byte) => write!(f, "byte 0x{byte:02X} is not an Arabic digit"),
            Self::NotALetter(byte) => write!(f, "byte 0x{byte:02X} is not an Arabic letter"),
            Self::NotAMark(byte) => write!(f, "byte 0x{byte:02X} is not a diacritic mark"),
            Self::UnassignedSlot(byte) => {
                write!(f, "byte 0x{byte:02X} is an unassigned slot")
            }
        }
    }
}

impl Error for TableError {}

/// Returns the category and canonical value of `byte`.
pub fn classify(byte: u8) -> Classification {
    CODE_SPACE[byte as usize]
}

pub fn category(byte: u8) -> Category {
    classify(byte).category
}

/// Returns the folded value used for category-level comparison.
pub fn canonical(byte: u8) -> u8 {
    classify(byte).canonical
}

/// Returns the full 256-entry table in byte order.
pub fn code_space() -> &'static [Classification; 256] {
    &CODE_SPACE
}

/// Numeric value 0–9 of an Arabic digit byte.
///
/// # Errors
/// - `NotADigit` when `byte` is outside 0xB0–0xB9.
pub fn digit_value(byte: u8) -> TableResult<u8> {
    Digit::from_byte(byte)
        .map(Digit::value)
        .ok_or(TableError::NotADigit(byte))
}

/// Returns whether `byte` is an unassigned slot.
///
/// True for the reserved runs inside the Arabic bands and for the whole
/// extended range, which stays reserved until an allocation is published.
pub fn is_reserved(byte: u8) -> bool {
    category(byte).is_unassigned()
}

/// Decodes `byte` into its band symbol. Never fails.
pub fn decode(byte: u8) -> Symbol {
    if let Some(control) = Control::from_byte(byte) {
        return Symbol::Control(control);
    }
    if let Some(letter) = Letter::from_byte(byte) {
        return Symbol::Letter(letter);
    }
    if let Some(digit) = Digit::from_byte(byte) {
        return Symbol::Digit(digit);
    }
    if let Some(punctuation) = Punctuation::from_byte(byte) {
        return Symbol::Punctuation(punctuation);
    }
    if let Some(mark) = Mark::from_byte(byte) {
        return Symbol::Mark(mark);
    }
    if let Some(ligature) = Ligature::from_byte(byte) {
        return Symbol::Ligature(ligature);
    }
    match category(byte) {
        Category::SharedText => Symbol::SharedText(byte),
        Category::Extended => Symbol::Extended(byte),
        _ => Symbol::Reserved(byte),
    }
}

/// Decodes `byte`, rejecting slots without an assigned meaning.
///
/// # Errors
/// - `UnassignedSlot` for reserved and extended bytes.
pub fn require_assigned(byte: u8) -> TableResult<Symbol> {
    match decode(byte) {
        Symbol::Reserved(_) | Symbol::Extended(_) => Err(TableError::UnassignedSlot(byte)),
        symbol => Ok(symbol),
    }
}

/// # Errors
/// - `NotALetter` when `byte` is outside 0x80–0xA3.
pub fn letter(byte: u8) -> TableResult<Letter> {
    Letter::from_byte(byte).ok_or(TableError::NotALetter(byte))
}

/// # Errors
/// - `NotAMark` when `byte` is outside 0xC0–0xD1.
pub fn mark(byte: u8) -> TableResult<Mark> {
    Mark::from_byte(byte).ok_or(TableError::NotAMark(byte))
}

/// One row of a table dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub byte: u8,
    pub category: Category,
    pub canonical: u8,
    pub symbol: Symbol,
}

/// Dumps all 256 rows in byte order, for tooling and documentation.
pub fn table_rows() -> Vec<TableRow> {
    (0..=u8::MAX)
        .map(|byte| {
            let Classification {
                category,
                canonical,
            } = classify(byte);
            TableRow {
                byte,
                category,
                canonical,
                symbol: decode(byte),
            }
        })
        .collect()
}
