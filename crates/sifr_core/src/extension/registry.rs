//! In-process registry of extended-range allocations.

use crate::extension::allocation::{extended_slots, ExtensionAllocation, ExtensionError};
use log::{info, warn};
use std::collections::BTreeMap;

/// Allocations keyed by slot, with an id index.
#[derive(Debug, Default, Clone)]
pub struct ExtensionRegistry {
    by_slot: BTreeMap<u8, ExtensionAllocation>,
    slot_by_id: BTreeMap<String, u8>,
}

impl ExtensionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one allocation after declaration validation.
    ///
    /// # Errors
    /// - Any `ExtensionAllocation::validate` failure.
    /// - `DuplicateId` when the id is already registered.
    /// - `SlotTaken` when another allocation owns the slot.
    pub fn register(&mut self, allocation: ExtensionAllocation) -> Result<(), ExtensionError> {
        let result = self.try_register(allocation);
        if let Err(err) = &result {
            warn!(
                "event=extension_rejected module=extension status=error reason=\"{}\"",
                err
            );
        }
        result
    }

    fn try_register(&mut self, mut allocation: ExtensionAllocation) -> Result<(), ExtensionError> {
        allocation.validate()?;
        allocation.id = allocation.id.trim().to_string();
        let id = allocation.id.clone();
        if self.slot_by_id.contains_key(id.as_str()) {
            return Err(ExtensionError::DuplicateId(id));
        }
        if let Some(owner) = self.by_slot.get(&allocation.slot) {
            return Err(ExtensionError::SlotTaken {
                slot: allocation.slot,
                owner: owner.id.clone(),
            });
        }

        info!(
            "event=extension_registered module=extension status=ok id={} version={} slot=0x{:02X}",
            id, allocation.version, allocation.slot
        );
        self.slot_by_id.insert(id, allocation.slot);
        self.by_slot.insert(allocation.slot, allocation);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.by_slot.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_slot.is_empty()
    }

    /// Allocation owning `byte`, if any.
    pub fn resolve(&self, byte: u8) -> Option<&ExtensionAllocation> {
        self.by_slot.get(&byte)
    }

    pub fn get(&self, id: &str) -> Option<&ExtensionAllocation> {
        let slot = self.slot_by_id.get(id.trim())?;
        self.by_slot.get(slot)
    }

    /// Extended bytes nobody has claimed yet, ascending.
    pub fn free_slots(&self) -> Vec<u8> {
        extended_slots()
            .filter(|slot| !self.by_slot.contains_key(slot))
            .collect()
    }

    /// Registered allocations in slot order.
    pub fn allocations(&self) -> impl Iterator<Item = &ExtensionAllocation> {
        self.by_slot.values()
    }
}

#[cfg(test)]
mod tests {
    use super::ExtensionRegistry;
    use crate::extension::allocation::{ExtensionAllocation, ExtensionError};

    #[test]
    fn registers_and_resolves_allocation() {
        let mut registry = ExtensionRegistry::new();
        registry
            .register(ExtensionAllocation::new(
                "quranic.small_high_meem",
                "0.1.0",
                0xF2,
                "small high meem",
            ))
            .expect("allocation registration");

        assert_eq!(registry.len(), 1);
        let entry = registry.resolve(0xF2).expect("slot resolves");
        assert_eq!(entry.id, "quranic.small_high_meem");
        assert_eq!(registry.get("quranic.small_high_meem"), Some(entry));
        assert!(registry.resolve(0xF3).is_none());
        assert_eq!(registry.free_slots().len(), 15);
    }

    #[test]
    fn rejects_duplicate_id() {
        let mut registry = ExtensionRegistry::new();
        registry
            .register(ExtensionAllocation::new("mark.a", "0.1.0", 0xF0, "a"))
            .expect("first registration should succeed");
        let err = registry
            .register(ExtensionAllocation::new("mark.a", "0.2.0", 0xF1, "a again"))
            .expect_err("duplicate id must fail");
        assert_eq!(err, ExtensionError::DuplicateId("mark.a".to_string()));
    }

    #[test]
    fn rejects_taken_slot() {
        let mut registry = ExtensionRegistry::new();
        registry
            .register(ExtensionAllocation::new("mark.a", "0.1.0", 0xF0, "a"))
            .expect("first registration should succeed");
        let err = registry
            .register(ExtensionAllocation::new("mark.b", "0.1.0", 0xF0, "b"))
            .expect_err("taken slot must fail");
        assert_eq!(
            err,
            ExtensionError::SlotTaken {
                slot: 0xF0,
                owner: "mark.a".to_string(),
            }
        );
        assert_eq!(registry.len(), 1);
    }
}
