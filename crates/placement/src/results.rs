//! Outcome types returned by selection, hover and placement.

use serde::{Deserialize, Serialize};

use crate::coord::Coordinate;
use crate::error::PlacementError;
use crate::module_type::{ModuleTypeId, PlacedInstance};

/// Which of the three selection states the controller is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionPhase {
    /// Nothing is armed.
    Idle,
    /// A module type is armed but no cell is hovered.
    Armed,
    /// A module type is armed and a cell is hovered.
    Hovering,
}

/// What the rendering collaborator needs to tint the preview at a cell.
/// `coord == None` means the preview should be hidden.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewFeedback {
    pub type_id: ModuleTypeId,
    pub coord: Option<Coordinate>,
    pub is_valid: bool,
}

/// Why a placement did not happen. All of these are expected, user-driven
/// outcomes; a rejected placement leaves every piece of state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    /// No module type is armed.
    NoArmedType,
    CellOccupied(Coordinate),
    OutOfBounds(Coordinate),
    /// The cell is free but the armed type's placement rule refuses it.
    RuleNotMet(Coordinate),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlacementResult {
    /// The instance now lives in the grid; `cost` is for the economy
    /// collaborator to debit.
    Accepted { instance: PlacedInstance, cost: f64 },
    Rejected(RejectReason),
}

impl PlacementResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self, PlacementResult::Accepted { .. })
    }

    pub fn instance(&self) -> Option<&PlacedInstance> {
        match self {
            PlacementResult::Accepted { instance, .. } => Some(instance),
            PlacementResult::Rejected(_) => None,
        }
    }

    /// Cost to debit, zero for a rejection.
    pub fn cost(&self) -> f64 {
        match self {
            PlacementResult::Accepted { cost, .. } => *cost,
            PlacementResult::Rejected(_) => 0.0,
        }
    }

    pub fn reject_reason(&self) -> Option<&RejectReason> {
        match self {
            PlacementResult::Rejected(reason) => Some(reason),
            PlacementResult::Accepted { .. } => None,
        }
    }

    /// The error kind behind a rejection, if it has one. Rejections such as
    /// "nothing armed" are plain no-ops and map to `None`.
    pub fn error(&self) -> Option<PlacementError> {
        match self {
            PlacementResult::Rejected(RejectReason::CellOccupied(coord)) => {
                Some(PlacementError::CellOccupied(*coord))
            }
            _ => None,
        }
    }
}
