//! Thread-safe handle for hosts that drive the controller from several
//! threads without Bevy's scheduler.
//!
//! Every entry point takes the same lock, so the occupancy check and the
//! insert inside `place` can never interleave with another call.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::controller::{ControllerEvent, PlacementController};
use crate::coord::Coordinate;
use crate::error::PlacementError;
use crate::input::{apply_input, InputOutcome, PlacementInput};
use crate::module_type::{ModuleType, ModuleTypeId, PlacedInstance};
use crate::results::{PlacementResult, PreviewFeedback, SelectionPhase};

#[derive(Clone, Default)]
pub struct SharedPlacementController(Arc<Mutex<PlacementController>>);

impl SharedPlacementController {
    pub fn new(controller: PlacementController) -> Self {
        Self(Arc::new(Mutex::new(controller)))
    }

    /// A poisoned lock still holds a consistent controller: every mutation
    /// either completes or leaves state untouched, so recover the guard.
    fn lock(&self) -> MutexGuard<'_, PlacementController> {
        self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Run `f` with exclusive access, for reads or multi-step sequences that
    /// must not interleave with other callers.
    pub fn with<R>(&self, f: impl FnOnce(&mut PlacementController) -> R) -> R {
        f(&mut *self.lock())
    }

    pub fn register(&self, module_type: ModuleType) -> Result<(), PlacementError> {
        self.lock().register(module_type)
    }

    pub fn unregister(&self, id: &ModuleTypeId) -> Result<ModuleType, PlacementError> {
        self.lock().unregister(id)
    }

    pub fn select(&self, type_id: Option<ModuleTypeId>) -> Result<SelectionPhase, PlacementError> {
        self.lock().select(type_id)
    }

    pub fn hover(&self, coord: Option<Coordinate>) -> Option<PreviewFeedback> {
        self.lock().hover(coord)
    }

    pub fn place(&self, coord: Coordinate) -> PlacementResult {
        self.lock().place(coord)
    }

    pub fn remove(&self, coord: Coordinate) -> Option<PlacedInstance> {
        self.lock().remove(coord)
    }

    pub fn apply(&self, input: &PlacementInput) -> InputOutcome {
        apply_input(&mut self.lock(), input)
    }

    /// Take the queued notifications. Hosts without `PlacementPlugin` call
    /// this once per frame to hand them to their renderer.
    pub fn drain_events(&self) -> Vec<ControllerEvent> {
        self.lock().drain_events()
    }
}
