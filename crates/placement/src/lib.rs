//! Module placement for the grid city builder.
//!
//! A [`PlacementController`] owns the registry of placeable module types, the
//! grid of placed instances and the single selection/hover state. Input
//! adapters feed it snapped cell coordinates; rendering and economy
//! collaborators react to what it reports. [`PlacementPlugin`] wires all of
//! it into a Bevy app.

pub mod catalog;
pub mod config;
pub mod controller;
pub mod coord;
pub mod economy;
pub mod error;
pub mod grid;
pub mod input;
pub mod log;
pub mod module_type;
pub mod plugin;
pub mod registry;
pub mod results;
pub mod selection;
pub mod shared;

#[cfg(test)]
pub mod test_harness;

pub use controller::{ControllerEvent, PlacementController};
pub use coord::{Coordinate, GridBounds};
pub use economy::{CityBudget, PlacementAccepted};
pub use error::PlacementError;
pub use grid::PlacementGrid;
pub use input::{apply_input, InputOutcome, PlacementInput};
pub use log::{LogEntry, PlacementLog};
pub use module_type::{
    Capability, InstanceId, ModuleCategory, ModuleInfo, ModuleType, ModuleTypeId, PlacedInstance,
    PlacementRule,
};
pub use plugin::{PlacementPlugin, PlacementSet};
pub use registry::ModuleRegistry;
pub use results::{PlacementResult, PreviewFeedback, RejectReason, SelectionPhase};
pub use selection::SelectionState;
pub use shared::SharedPlacementController;
