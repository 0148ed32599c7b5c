// ---------------------------------------------------------------------------
// PlacementError: the recoverable failures of the placement core
// ---------------------------------------------------------------------------

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::coord::Coordinate;
use crate::module_type::ModuleTypeId;

/// Every failure the placement core reports. None of them are fatal: the
/// controller stays consistent and the caller can retry with other input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementError {
    /// A selection or unregistration named an id that is not registered.
    UnknownType(ModuleTypeId),
    /// A placement targeted a cell that already holds an instance.
    CellOccupied(Coordinate),
    /// A module type was registered under an id that is already taken.
    DuplicateType(ModuleTypeId),
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::UnknownType(id) => write!(f, "Unknown module type '{id}'"),
            PlacementError::CellOccupied(coord) => write!(f, "Cell ({coord}) is already occupied"),
            PlacementError::DuplicateType(id) => {
                write!(f, "Module type '{id}' is already registered")
            }
        }
    }
}

impl std::error::Error for PlacementError {}
