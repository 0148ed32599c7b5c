//! The set of module types the controller can arm.

use std::collections::BTreeMap;

use crate::error::PlacementError;
use crate::module_type::{ModuleType, ModuleTypeId};

/// Registered module types, keyed by id.
///
/// The registry itself has no side effects; the controller wraps
/// `register`/`unregister` to queue the setup and teardown notifications.
#[derive(Debug, Clone, Default)]
pub struct ModuleRegistry {
    types: BTreeMap<ModuleTypeId, ModuleType>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, module_type: ModuleType) -> Result<(), PlacementError> {
        if self.types.contains_key(module_type.id()) {
            return Err(PlacementError::DuplicateType(module_type.id().clone()));
        }
        self.types.insert(module_type.id().clone(), module_type);
        Ok(())
    }

    pub fn unregister(&mut self, id: &ModuleTypeId) -> Result<ModuleType, PlacementError> {
        self.types
            .remove(id)
            .ok_or_else(|| PlacementError::UnknownType(id.clone()))
    }

    pub fn get(&self, id: &ModuleTypeId) -> Option<&ModuleType> {
        self.types.get(id)
    }

    pub fn contains(&self, id: &ModuleTypeId) -> bool {
        self.types.contains_key(id)
    }

    /// Every registered type, ordered by id.
    pub fn all(&self) -> Vec<&ModuleType> {
        self.types.values().collect()
    }

    pub fn ids(&self) -> Vec<ModuleTypeId> {
        self.types.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
