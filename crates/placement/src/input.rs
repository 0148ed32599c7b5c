//! Input-adapter calls as data.
//!
//! Each [`PlacementInput`] is one call an input adapter would make on the
//! controller. Representing them as values lets the Bevy plugin process a
//! single ordered stream, and lets the headless driver replay scripts.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::controller::PlacementController;
use crate::coord::Coordinate;
use crate::error::PlacementError;
use crate::module_type::{ModuleTypeId, PlacedInstance};
use crate::results::{PlacementResult, PreviewFeedback, SelectionPhase};

#[derive(Event, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementInput {
    Select { type_id: Option<ModuleTypeId> },
    Hover { coord: Option<Coordinate> },
    Place { coord: Coordinate },
    Remove { coord: Coordinate },
    DragStart { coord: Coordinate },
    DragMove { coord: Coordinate },
    DragEnd { coord: Coordinate },
}

impl PlacementInput {
    pub fn select(type_id: &str) -> Self {
        PlacementInput::Select {
            type_id: Some(ModuleTypeId::new(type_id)),
        }
    }

    pub fn deselect() -> Self {
        PlacementInput::Select { type_id: None }
    }

    pub fn hover(x: i32, z: i32) -> Self {
        PlacementInput::Hover {
            coord: Some(Coordinate::new(x, z)),
        }
    }

    pub fn place(x: i32, z: i32) -> Self {
        PlacementInput::Place {
            coord: Coordinate::new(x, z),
        }
    }
}

/// What applying one input produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InputOutcome {
    Selected(Result<SelectionPhase, PlacementError>),
    Hovered(Option<PreviewFeedback>),
    Placed(PlacementResult),
    Removed(Option<PlacedInstance>),
    DragStarted(bool),
    DragPreview(Vec<PreviewFeedback>),
    DragPlaced(Vec<PlacementResult>),
}

impl InputOutcome {
    /// Every placement result carried by this outcome.
    pub fn placements(&self) -> &[PlacementResult] {
        match self {
            InputOutcome::Placed(result) => std::slice::from_ref(result),
            InputOutcome::DragPlaced(results) => results,
            _ => &[],
        }
    }
}

/// Apply one input to the controller.
pub fn apply_input(controller: &mut PlacementController, input: &PlacementInput) -> InputOutcome {
    match input {
        PlacementInput::Select { type_id } => {
            InputOutcome::Selected(controller.select(type_id.clone()))
        }
        PlacementInput::Hover { coord } => InputOutcome::Hovered(controller.hover(*coord)),
        PlacementInput::Place { coord } => InputOutcome::Placed(controller.place(*coord)),
        PlacementInput::Remove { coord } => InputOutcome::Removed(controller.remove(*coord)),
        PlacementInput::DragStart { coord } => {
            InputOutcome::DragStarted(controller.drag_start(*coord))
        }
        PlacementInput::DragMove { coord } => {
            InputOutcome::DragPreview(controller.drag_move(*coord))
        }
        PlacementInput::DragEnd { coord } => InputOutcome::DragPlaced(controller.drag_end(*coord)),
    }
}
