//! The placement state machine.
//!
//! `PlacementController` owns the registry, the grid and the selection, and
//! is the only thing that mutates them. Hooks a module type opted into
//! (preview, tick) are not called directly: the controller queues
//! [`ControllerEvent`]s that the embedding application drains and hands to
//! its rendering collaborator.

use std::collections::VecDeque;

use bevy::prelude::*;

use crate::config::{GRID_HALF_EXTENT, MAX_PENDING_EVENTS};
use crate::coord::{line_cells, Coordinate, GridBounds};
use crate::error::PlacementError;
use crate::grid::PlacementGrid;
use crate::module_type::{Capability, InstanceId, ModuleType, ModuleTypeId, PlacedInstance};
use crate::registry::ModuleRegistry;
use crate::results::{PlacementResult, PreviewFeedback, RejectReason, SelectionPhase};
use crate::selection::SelectionState;

/// Notifications queued for collaborators, in the order they happened.
/// `PlacementPlugin` forwards them as Bevy events.
#[derive(Event, Debug, Clone, PartialEq)]
pub enum ControllerEvent {
    /// A type was registered; build its preview resources.
    ModuleSetup(ModuleTypeId),
    /// A type was unregistered; release its preview resources.
    ModuleTeardown(ModuleTypeId),
    /// A type was armed and a fresh hover sequence may begin.
    HoverStarted(ModuleTypeId),
    Preview(PreviewFeedback),
    Placed(PlacedInstance),
    Removed(PlacedInstance),
    Tick { type_id: ModuleTypeId, tick: u64 },
}

#[derive(Resource, Debug, Clone)]
pub struct PlacementController {
    registry: ModuleRegistry,
    grid: PlacementGrid,
    selection: SelectionState,
    drag_anchor: Option<Coordinate>,
    next_instance_id: u64,
    tick: u64,
    outbox: VecDeque<ControllerEvent>,
}

impl Default for PlacementController {
    /// Empty registry over the standard interactive surface.
    fn default() -> Self {
        Self::new(PlacementGrid::bounded(GridBounds::centered(GRID_HALF_EXTENT)))
    }
}

impl PlacementController {
    pub fn new(grid: PlacementGrid) -> Self {
        Self {
            registry: ModuleRegistry::new(),
            grid,
            selection: SelectionState::default(),
            drag_anchor: None,
            next_instance_id: 1,
            tick: 0,
            outbox: VecDeque::new(),
        }
    }

    /// Controller over `grid` with every type in `catalog` registered.
    pub fn with_catalog(
        grid: PlacementGrid,
        catalog: impl IntoIterator<Item = ModuleType>,
    ) -> Result<Self, PlacementError> {
        let mut controller = Self::new(grid);
        for module_type in catalog {
            controller.register(module_type)?;
        }
        Ok(controller)
    }

    // -----------------------------------------------------------------------
    // Read access
    // -----------------------------------------------------------------------

    pub fn registry(&self) -> &ModuleRegistry {
        &self.registry
    }

    pub fn grid(&self) -> &PlacementGrid {
        &self.grid
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn phase(&self) -> SelectionPhase {
        self.selection.phase()
    }

    /// The armed module type, if any.
    pub fn armed_type(&self) -> Option<&ModuleType> {
        self.selection.armed().and_then(|id| self.registry.get(id))
    }

    pub fn drag_anchor(&self) -> Option<Coordinate> {
        self.drag_anchor
    }

    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    pub fn has_pending_events(&self) -> bool {
        !self.outbox.is_empty()
    }

    /// Take every queued notification, oldest first.
    ///
    /// Hosts should drain once per frame; `PlacementPlugin` does. At most
    /// `MAX_PENDING_EVENTS` are held, and older ones are dropped first.
    pub fn drain_events(&mut self) -> Vec<ControllerEvent> {
        self.outbox.drain(..).collect()
    }

    fn notify(&mut self, event: ControllerEvent) {
        if self.outbox.len() >= MAX_PENDING_EVENTS {
            self.outbox.pop_front();
        }
        self.outbox.push_back(event);
    }

    // -----------------------------------------------------------------------
    // Registration
    // -----------------------------------------------------------------------

    pub fn register(&mut self, module_type: ModuleType) -> Result<(), PlacementError> {
        let id = module_type.id().clone();
        self.registry.register(module_type)?;
        info!("Registered module type '{}'", id);
        self.notify(ControllerEvent::ModuleSetup(id));
        Ok(())
    }

    /// Remove a type. If it is armed, the selection is cleared first so the
    /// type still sees its hover end before it is torn down. Instances it
    /// already placed stay in the grid.
    pub fn unregister(&mut self, id: &ModuleTypeId) -> Result<ModuleType, PlacementError> {
        if self.selection.is_armed_with(id) {
            self.deselect();
        }
        let removed = self.registry.unregister(id)?;
        info!("Unregistered module type '{}'", id);
        self.notify(ControllerEvent::ModuleTeardown(id.clone()));
        Ok(removed)
    }

    /// Disarm and tear down every registered type. Placed instances remain.
    pub fn cleanup(&mut self) {
        self.deselect();
        for id in self.registry.ids() {
            if self.registry.unregister(&id).is_ok() {
                self.notify(ControllerEvent::ModuleTeardown(id));
            }
        }
        info!("Placement controller cleaned up");
    }

    // -----------------------------------------------------------------------
    // Selection
    // -----------------------------------------------------------------------

    /// Arm a module type, or disarm with `None`.
    ///
    /// Selecting the already armed type toggles back to idle. An unknown id
    /// is reported as `UnknownType` and leaves the selection as it was.
    pub fn select(
        &mut self,
        type_id: Option<ModuleTypeId>,
    ) -> Result<SelectionPhase, PlacementError> {
        let Some(type_id) = type_id else {
            self.deselect();
            return Ok(SelectionPhase::Idle);
        };
        if self.selection.is_armed_with(&type_id) {
            debug!("Toggled off module type '{}'", type_id);
            self.deselect();
            return Ok(SelectionPhase::Idle);
        }
        if !self.registry.contains(&type_id) {
            warn!("Cannot select unknown module type '{}'", type_id);
            return Err(PlacementError::UnknownType(type_id));
        }

        self.deselect();
        self.selection.arm(type_id.clone());
        debug!("Armed module type '{}'", type_id);
        if self.type_supports(&type_id, Capability::Preview) {
            self.notify(ControllerEvent::HoverStarted(type_id));
        }
        Ok(SelectionPhase::Armed)
    }

    fn deselect(&mut self) {
        self.drag_anchor = None;
        if let Some(previous) = self.selection.disarm() {
            let feedback = PreviewFeedback {
                type_id: previous,
                coord: None,
                is_valid: false,
            };
            self.emit_preview(&feedback);
        }
    }

    // -----------------------------------------------------------------------
    // Hover
    // -----------------------------------------------------------------------

    /// Move the hover to `coord` (or off the surface with `None`) and report
    /// whether the armed type could be placed there. Returns `None` while
    /// idle.
    pub fn hover(&mut self, coord: Option<Coordinate>) -> Option<PreviewFeedback> {
        let type_id = self.selection.armed()?.clone();
        let feedback = self.preview_feedback(&type_id, coord);
        self.selection.set_hovered(coord);
        self.emit_preview(&feedback);
        Some(feedback)
    }

    fn preview_feedback(&self, type_id: &ModuleTypeId, coord: Option<Coordinate>) -> PreviewFeedback {
        let is_valid = match coord {
            Some(c) => self
                .registry
                .get(type_id)
                .is_some_and(|t| t.validate(c, &self.grid)),
            None => false,
        };
        PreviewFeedback {
            type_id: type_id.clone(),
            coord,
            is_valid,
        }
    }

    fn emit_preview(&mut self, feedback: &PreviewFeedback) {
        if self.type_supports(&feedback.type_id, Capability::Preview) {
            self.notify(ControllerEvent::Preview(feedback.clone()));
        }
    }

    fn type_supports(&self, type_id: &ModuleTypeId, capability: Capability) -> bool {
        self.registry
            .get(type_id)
            .is_some_and(|t| t.supports(capability))
    }

    // -----------------------------------------------------------------------
    // Placement
    // -----------------------------------------------------------------------

    /// Place one instance of the armed type at `coord`.
    ///
    /// Rejections (nothing armed, occupied, out of bounds, rule not met)
    /// leave every piece of state unchanged. On acceptance the hover is
    /// re-issued at `coord` so the preview reflects the now occupied cell.
    pub fn place(&mut self, coord: Coordinate) -> PlacementResult {
        let Some(type_id) = self.selection.armed().cloned() else {
            debug!("Place at ({}) ignored: no module type armed", coord);
            return PlacementResult::Rejected(RejectReason::NoArmedType);
        };
        let Some(module_type) = self.registry.get(&type_id) else {
            return PlacementResult::Rejected(RejectReason::NoArmedType);
        };
        if let Err(reason) = module_type.check(coord, &self.grid) {
            debug!("Rejected '{}' at ({}): {:?}", type_id, coord, reason);
            return PlacementResult::Rejected(reason);
        }

        let instance = module_type.instantiate(InstanceId(self.next_instance_id), coord);
        let cost = module_type.cost();
        if let Err(err) = self.grid.insert(coord, instance.clone()) {
            warn!("Grid refused validated placement: {}", err);
            return PlacementResult::Rejected(RejectReason::CellOccupied(coord));
        }
        self.next_instance_id += 1;

        info!(
            "Placed '{}' {} at ({}) for ${:.0}",
            type_id, instance.instance_id, coord, cost
        );
        self.notify(ControllerEvent::Placed(instance.clone()));
        self.hover(Some(coord));
        PlacementResult::Accepted { instance, cost }
    }

    /// Bulldoze whatever occupies `coord`.
    pub fn remove(&mut self, coord: Coordinate) -> Option<PlacedInstance> {
        let removed = self.grid.remove(coord)?;
        info!(
            "Removed '{}' {} at ({})",
            removed.type_id, removed.instance_id, coord
        );
        self.notify(ControllerEvent::Removed(removed.clone()));
        if self.selection.hovered() == Some(coord) {
            self.hover(Some(coord));
        }
        Some(removed)
    }

    // -----------------------------------------------------------------------
    // Drag placement
    // -----------------------------------------------------------------------

    /// Anchor a drag at `coord`. Only types with `Capability::Drag` can be
    /// dragged; returns whether the drag started.
    pub fn drag_start(&mut self, coord: Coordinate) -> bool {
        let draggable = self
            .armed_type()
            .is_some_and(|t| t.supports(Capability::Drag));
        if !draggable {
            return false;
        }
        self.drag_anchor = Some(coord);
        self.hover(Some(coord));
        true
    }

    /// Preview every in-bounds cell between the anchor and `coord`. Without an active
    /// drag this is a plain hover.
    pub fn drag_move(&mut self, coord: Coordinate) -> Vec<PreviewFeedback> {
        let Some(anchor) = self.drag_anchor else {
            return self.hover(Some(coord)).into_iter().collect();
        };
        let Some(type_id) = self.selection.armed().cloned() else {
            return Vec::new();
        };
        self.selection.set_hovered(Some(coord));
        let feedback: Vec<PreviewFeedback> = self
            .drag_line(anchor, coord)
            .into_iter()
            .map(|c| self.preview_feedback(&type_id, Some(c)))
            .collect();
        for f in &feedback {
            self.emit_preview(f);
        }
        feedback
    }

    /// Cells of the line anchor -> `coord` that lie inside the grid bounds.
    fn drag_line(&self, anchor: Coordinate, coord: Coordinate) -> Vec<Coordinate> {
        line_cells(anchor, coord)
            .into_iter()
            .filter(|c| self.grid.in_bounds(*c))
            .collect()
    }

    /// Place along the line from the anchor to `coord`, each cell validated
    /// on its own. Without an active drag this is a single `place`.
    pub fn drag_end(&mut self, coord: Coordinate) -> Vec<PlacementResult> {
        let Some(anchor) = self.drag_anchor.take() else {
            return vec![self.place(coord)];
        };
        let results: Vec<PlacementResult> = self
            .drag_line(anchor, coord)
            .into_iter()
            .map(|c| self.place(c))
            .collect();
        let placed = results.iter().filter(|r| r.is_accepted()).count();
        debug!(
            "Drag ({}) -> ({}) placed {}/{} cells",
            anchor,
            coord,
            placed,
            results.len()
        );
        self.hover(Some(coord));
        results
    }

    // -----------------------------------------------------------------------
    // Tick
    // -----------------------------------------------------------------------

    /// Advance one simulation tick and notify every tick-capable type.
    pub fn tick(&mut self) -> u64 {
        self.tick += 1;
        let tickers: Vec<ModuleTypeId> = self
            .registry
            .all()
            .into_iter()
            .filter(|t| t.supports(Capability::Tick))
            .map(|t| t.id().clone())
            .collect();
        for type_id in tickers {
            self.notify(ControllerEvent::Tick {
                type_id,
                tick: self.tick,
            });
        }
        self.tick
    }
}
