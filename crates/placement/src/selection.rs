//! Armed type and hovered cell, the two halves of the selection state.

use crate::coord::Coordinate;
use crate::module_type::ModuleTypeId;
use crate::results::SelectionPhase;

/// Which module type is armed and which cell is hovered.
///
/// Read-only outside the crate; the controller is its only mutator. `hovered`
/// is always `None` while nothing is armed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    armed: Option<ModuleTypeId>,
    hovered: Option<Coordinate>,
}

impl SelectionState {
    pub fn armed(&self) -> Option<&ModuleTypeId> {
        self.armed.as_ref()
    }

    pub fn hovered(&self) -> Option<Coordinate> {
        self.hovered
    }

    pub fn phase(&self) -> SelectionPhase {
        match (&self.armed, self.hovered) {
            (None, _) => SelectionPhase::Idle,
            (Some(_), None) => SelectionPhase::Armed,
            (Some(_), Some(_)) => SelectionPhase::Hovering,
        }
    }

    pub fn is_armed_with(&self, id: &ModuleTypeId) -> bool {
        self.armed.as_ref() == Some(id)
    }

    /// Arm `id`, dropping any hover left over from a previous type.
    pub(crate) fn arm(&mut self, id: ModuleTypeId) {
        self.armed = Some(id);
        self.hovered = None;
    }

    pub(crate) fn disarm(&mut self) -> Option<ModuleTypeId> {
        self.hovered = None;
        self.armed.take()
    }

    /// Ignored while nothing is armed.
    pub(crate) fn set_hovered(&mut self, coord: Option<Coordinate>) {
        if self.armed.is_some() {
            self.hovered = coord;
        }
    }
}
