//! Byte-string helpers over the code-space table.
//!
//! # Responsibility
//! - Walk SIFR byte strings as typed symbols.
//! - Fold byte strings to canonical values for category-level comparison.
//! - Flag unassigned bytes for tooling that must not persist them silently.
//!
//! # Invariants
//! - Scanning never fails; unassigned bytes surface as `Symbol::Reserved`
//!   or `Symbol::Extended` unless the caller asks for strict decoding.

use crate::model::category::Category;
use crate::model::symbol::Symbol;
use crate::table::{self, TableResult};
use log::warn;
use std::collections::BTreeMap;

/// Iterator over `(offset, symbol)` pairs of a byte string.
#[derive(Debug, Clone)]
pub struct Symbols<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl Iterator for Symbols<'_> {
    type Item = (usize, Symbol);

    fn next(&mut self) -> Option<Self::Item> {
        let byte = *self.bytes.get(self.offset)?;
        let offset = self.offset;
        self.offset += 1;
        Some((offset, table::decode(byte)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bytes.len() - self.offset;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Symbols<'_> {}

pub fn symbols(bytes: &[u8]) -> Symbols<'_> {
    Symbols { bytes, offset: 0 }
}

/// Maps every byte to its canonical value.
pub fn fold(bytes: &[u8]) -> Vec<u8> {
    bytes.iter().map(|byte| table::canonical(*byte)).collect()
}

/// Returns whether two byte strings are equal after folding.
pub fn fold_eq(left: &[u8], right: &[u8]) -> bool {
    left.len() == right.len()
        && left
            .iter()
            .zip(right)
            .all(|(l, r)| table::canonical(*l) == table::canonical(*r))
}

/// Decodes a byte string, failing on the first unassigned byte.
///
/// # Errors
/// - `UnassignedSlot` carrying the first reserved or extended byte.
pub fn decode_assigned(bytes: &[u8]) -> TableResult<Vec<Symbol>> {
    bytes.iter().map(|byte| table::require_assigned(*byte)).collect()
}

/// Offset of the first unassigned byte, if any.
///
/// Emits a warning so callers assigning or persisting text see the
/// collision with a future allocation in the logs.
pub fn first_unassigned(bytes: &[u8]) -> Option<usize> {
    let offset = bytes.iter().position(|byte| table::is_reserved(*byte))?;
    warn!(
        "event=reserved_slot_touched module=text status=warn offset={} byte=0x{:02X} category={}",
        offset,
        bytes[offset],
        table::category(bytes[offset]).as_str()
    );
    Some(offset)
}

/// Counts bytes per category.
pub fn category_counts(bytes: &[u8]) -> BTreeMap<Category, usize> {
    let mut counts = BTreeMap::new();
    for byte in bytes {
        *counts.entry(table::category(*byte)).or_insert(0) += 1;
    }
    counts
}
