//! Extended-range allocation declaration and validation.

use crate::model::category::Category;
use crate::table::codes::{SIFR_EXTENDED_END, SIFR_EXTENDED_START};
use crate::table::{self, TABLE_VERSION};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static ALLOCATION_ID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9]+(?:[._-][a-z0-9]+)*$").expect("valid allocation id regex")
});
static SEMVER_TRIPLET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.\d+\.\d+$").expect("valid semver regex"));

/// Declaration claiming one byte of the extended range.
///
/// Allocations are an overlay: they never change what `classify` returns
/// for the byte, which stays `Extended` for table version 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionAllocation {
    /// Stable allocation identifier, e.g. `quranic.small_high_meem`.
    pub id: String,
    /// Allocation semantic version string (`major.minor.patch`).
    pub version: String,
    /// Claimed byte, inside 0xF0–0xFF.
    pub slot: u8,
    /// Human-readable meaning of the slot.
    pub label: String,
    /// Table version the allocation was declared against.
    #[serde(default = "current_table_version")]
    pub table_version: String,
}

fn current_table_version() -> String {
    TABLE_VERSION.to_string()
}

impl ExtensionAllocation {
    /// Creates an allocation declared against the current table version.
    pub fn new(
        id: impl Into<String>,
        version: impl Into<String>,
        slot: u8,
        label: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            version: version.into(),
            slot,
            label: label.into(),
            table_version: current_table_version(),
        }
    }

    /// Validates declaration-level invariants.
    ///
    /// # Errors
    /// - Id, version or label are empty or malformed.
    /// - `slot` is a reserved slot of a defined band, or an assigned slot.
    /// - `table_version` differs from the running table version.
    pub fn validate(&self) -> Result<(), ExtensionError> {
        let id = self.id.trim();
        if id.is_empty() {
            return Err(ExtensionError::EmptyId);
        }
        if !ALLOCATION_ID_RE.is_match(id) {
            return Err(ExtensionError::InvalidId(self.id.clone()));
        }
        if !SEMVER_TRIPLET_RE.is_match(self.version.trim()) {
            return Err(ExtensionError::InvalidVersion(self.version.clone()));
        }
        if self.label.trim().is_empty() {
            return Err(ExtensionError::EmptyLabel);
        }
        if self.table_version != TABLE_VERSION {
            return Err(ExtensionError::TableVersionMismatch(
                self.table_version.clone(),
            ));
        }
        check_slot(self.slot)
    }
}

fn check_slot(slot: u8) -> Result<(), ExtensionError> {
    match table::category(slot) {
        Category::Extended => Ok(()),
        Category::Reserved => Err(ExtensionError::ReservedSlot(slot)),
        _ => Err(ExtensionError::SlotOutOfRange(slot)),
    }
}

/// Extended-range bytes in ascending order.
pub fn extended_slots() -> impl Iterator<Item = u8> {
    SIFR_EXTENDED_START..=SIFR_EXTENDED_END
}

/// Allocation validation and registration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtensionError {
    EmptyId,
    InvalidId(String),
    InvalidVersion(String),
    EmptyLabel,
    TableVersionMismatch(String),
    /// Slot belongs to a reserved run of a defined band; those stay
    /// reserved for that band's own future entries.
    ReservedSlot(u8),
    /// Slot already carries a meaning in the table.
    SlotOutOfRange(u8),
    SlotTaken { slot: u8, owner: String },
    DuplicateId(String),
}

impl Display for ExtensionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "allocation id must not be empty"),
            Self::InvalidId(value) => write!(f, "allocation id is invalid: {value}"),
            Self::InvalidVersion(value) => write!(
                f,
                "allocation version is invalid: {value} (expected major.minor.patch)"
            ),
            Self::EmptyLabel => write!(f, "allocation label must not be empty"),
            Self::TableVersionMismatch(value) => write!(
                f,
                "allocation targets table version {value}, running {TABLE_VERSION}"
            ),
            Self::ReservedSlot(slot) => {
                write!(f, "slot 0x{slot:02X} is reserved inside a defined band")
            }
            Self::SlotOutOfRange(slot) => write!(
                f,
                "slot 0x{slot:02X} is outside the extended range 0x{SIFR_EXTENDED_START:02X}-0x{SIFR_EXTENDED_END:02X}"
            ),
            Self::SlotTaken { slot, owner } => {
                write!(f, "slot 0x{slot:02X} already allocated to {owner}")
            }
            Self::DuplicateId(value) => write!(f, "allocation id already registered: {value}"),
        }
    }
}

impl Error for ExtensionError {}
