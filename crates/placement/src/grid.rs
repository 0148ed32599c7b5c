//! Cell occupancy: which placed instance, if any, sits on each coordinate.

use std::collections::HashMap;

use crate::coord::{Coordinate, GridBounds};
use crate::error::PlacementError;
use crate::module_type::{ModuleTypeId, PlacedInstance};

/// The authoritative record of which cell holds which instance.
///
/// At most one instance per cell. Bounds are optional; an unbounded grid
/// accepts every coordinate.
#[derive(Debug, Clone, Default)]
pub struct PlacementGrid {
    cells: HashMap<Coordinate, PlacedInstance>,
    bounds: Option<GridBounds>,
}

impl PlacementGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bounded(bounds: GridBounds) -> Self {
        Self {
            cells: HashMap::new(),
            bounds: Some(bounds),
        }
    }

    pub fn bounds(&self) -> Option<GridBounds> {
        self.bounds
    }

    #[inline]
    pub fn in_bounds(&self, coord: Coordinate) -> bool {
        self.bounds.map_or(true, |b| b.contains(coord))
    }

    #[inline]
    pub fn occupant_at(&self, coord: Coordinate) -> Option<&PlacedInstance> {
        self.cells.get(&coord)
    }

    #[inline]
    pub fn is_free(&self, coord: Coordinate) -> bool {
        !self.cells.contains_key(&coord)
    }

    /// Record `instance` at `coord`. Never overwrites: an occupied cell is
    /// reported as `CellOccupied` and the grid is left untouched.
    pub fn insert(
        &mut self,
        coord: Coordinate,
        instance: PlacedInstance,
    ) -> Result<(), PlacementError> {
        debug_assert_eq!(instance.coord, coord, "instance placed at a foreign cell");
        match self.cells.entry(coord) {
            std::collections::hash_map::Entry::Occupied(_) => {
                Err(PlacementError::CellOccupied(coord))
            }
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(instance);
                Ok(())
            }
        }
    }

    pub fn remove(&mut self, coord: Coordinate) -> Option<PlacedInstance> {
        self.cells.remove(&coord)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlacedInstance> {
        self.cells.values()
    }

    /// Number of placed instances of one module type.
    pub fn count_of(&self, type_id: &ModuleTypeId) -> usize {
        self.cells.values().filter(|i| &i.type_id == type_id).count()
    }
}
