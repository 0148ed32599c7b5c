//! Plugin that wires the placement core into a Bevy app: the controller
//! resource, the ordered input stream, notifications and the budget.

use bevy::prelude::*;

use crate::catalog::default_catalog;
use crate::config::GRID_HALF_EXTENT;
use crate::controller::{ControllerEvent, PlacementController};
use crate::coord::GridBounds;
use crate::economy::{debit_accepted_placements, CityBudget, PlacementAccepted};
use crate::grid::PlacementGrid;
use crate::input::{apply_input, PlacementInput};
use crate::log::PlacementLog;
use crate::results::PlacementResult;

/// Systems that consume `PlacementInput`. Input adapters that raycast the
/// pointer should run before this set.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlacementSet;

/// Registers the controller (with the default catalog unless the app already
/// inserted its own), the placement log, the budget, events and systems.
pub struct PlacementPlugin;

impl Plugin for PlacementPlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<PlacementController>() {
            let grid = PlacementGrid::bounded(GridBounds::centered(GRID_HALF_EXTENT));
            let controller = match PlacementController::with_catalog(grid, default_catalog()) {
                Ok(controller) => controller,
                Err(err) => {
                    warn!("Default module catalog failed to register: {}", err);
                    PlacementController::default()
                }
            };
            app.insert_resource(controller);
        }
        app.init_resource::<PlacementLog>();
        app.init_resource::<CityBudget>();

        app.add_event::<PlacementInput>();
        app.add_event::<ControllerEvent>();
        app.add_event::<PlacementAccepted>();

        app.add_systems(
            Update,
            (
                apply_placement_inputs,
                forward_controller_events,
                debit_accepted_placements,
            )
                .chain()
                .in_set(PlacementSet),
        );
        app.add_systems(FixedUpdate, tick_modules);
    }
}

/// Applies every pending input in arrival order.
pub fn apply_placement_inputs(
    mut inputs: EventReader<PlacementInput>,
    mut controller: ResMut<PlacementController>,
    mut log: ResMut<PlacementLog>,
    mut accepted: EventWriter<PlacementAccepted>,
) {
    for input in inputs.read() {
        let outcome = apply_input(&mut controller, input);
        for result in outcome.placements() {
            if let PlacementResult::Accepted { instance, cost } = result {
                accepted.send(PlacementAccepted {
                    type_id: instance.type_id.clone(),
                    instance_id: instance.instance_id,
                    cost: *cost,
                });
            }
        }
        log.record(input.clone(), outcome);
    }
}

/// Hands queued controller notifications to rendering collaborators.
pub fn forward_controller_events(
    mut controller: ResMut<PlacementController>,
    mut events: EventWriter<ControllerEvent>,
) {
    if !controller.has_pending_events() {
        return;
    }
    for event in controller.drain_events() {
        events.send(event);
    }
}

pub fn tick_modules(mut controller: ResMut<PlacementController>) {
    controller.tick();
}
