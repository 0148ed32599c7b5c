//! # TestPlacement: headless harness for the placement plugin
//!
//! Wraps `bevy::app::App` + `MinimalPlugins` + `PlacementPlugin` so tests can
//! push inputs, run frames and inspect resources and emitted events without
//! a window or renderer.

use bevy::app::App;
use bevy::prelude::*;

use crate::controller::{ControllerEvent, PlacementController};
use crate::coord::Coordinate;
use crate::economy::{CityBudget, PlacementAccepted};
use crate::input::{InputOutcome, PlacementInput};
use crate::log::PlacementLog;
use crate::module_type::{ModuleType, PlacedInstance};
use crate::plugin::PlacementPlugin;

pub struct TestPlacement {
    app: App,
}

/// Notifications captured during the most recent frame.
#[derive(Resource, Default)]
struct RecordedEvents {
    controller: Vec<ControllerEvent>,
    accepted: Vec<PlacementAccepted>,
}

fn record_events(
    mut controller_events: EventReader<ControllerEvent>,
    mut accepted_events: EventReader<PlacementAccepted>,
    mut recorded: ResMut<RecordedEvents>,
) {
    recorded.controller.extend(controller_events.read().cloned());
    recorded.accepted.extend(accepted_events.read().cloned());
}

fn headless_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.init_resource::<RecordedEvents>();
    app.add_systems(PostUpdate, record_events);
    app
}

impl TestPlacement {
    /// App with the default catalog over the standard bounded grid.
    pub fn new() -> Self {
        let mut app = headless_app();
        app.add_plugins(PlacementPlugin);
        app.update();
        Self { app }
    }

    /// App using `controller` instead of the default one.
    pub fn with_controller(controller: PlacementController) -> Self {
        let mut app = headless_app();
        app.insert_resource(controller);
        app.add_plugins(PlacementPlugin);
        app.update();
        Self { app }
    }

    pub fn with_treasury(mut self, treasury: f64) -> Self {
        self.app.world_mut().resource_mut::<CityBudget>().treasury = treasury;
        self
    }

    pub fn with_module(mut self, module_type: ModuleType) -> Self {
        self.app
            .world_mut()
            .resource_mut::<PlacementController>()
            .register(module_type)
            .expect("test module type should register");
        self
    }

    // -----------------------------------------------------------------------
    // Driving
    // -----------------------------------------------------------------------

    /// Queue one input for the next frame.
    pub fn send(&mut self, input: PlacementInput) -> &mut Self {
        self.app.world_mut().send_event(input);
        self
    }

    /// Queue inputs and run a single frame.
    pub fn run(&mut self, inputs: impl IntoIterator<Item = PlacementInput>) -> &mut Self {
        for input in inputs {
            self.send(input);
        }
        self.update()
    }

    pub fn update(&mut self) -> &mut Self {
        {
            let mut recorded = self.app.world_mut().resource_mut::<RecordedEvents>();
            recorded.controller.clear();
            recorded.accepted.clear();
        }
        self.app.update();
        self
    }

    /// Run the fixed-timestep schedule once, regardless of elapsed time.
    pub fn fixed_tick(&mut self) -> &mut Self {
        self.app.world_mut().run_schedule(FixedUpdate);
        self
    }

    // -----------------------------------------------------------------------
    // Inspection
    // -----------------------------------------------------------------------

    pub fn controller(&self) -> &PlacementController {
        self.app.world().resource::<PlacementController>()
    }

    pub fn budget(&self) -> &CityBudget {
        self.app.world().resource::<CityBudget>()
    }

    pub fn log(&self) -> &PlacementLog {
        self.app.world().resource::<PlacementLog>()
    }

    pub fn last_outcome(&self) -> Option<&InputOutcome> {
        self.log().latest().map(|entry| &entry.outcome)
    }

    pub fn occupant(&self, x: i32, z: i32) -> Option<&PlacedInstance> {
        self.controller().grid().occupant_at(Coordinate::new(x, z))
    }

    /// Controller notifications emitted during the last frame.
    pub fn controller_events(&self) -> &[ControllerEvent] {
        &self.app.world().resource::<RecordedEvents>().controller
    }

    /// Economy notifications emitted during the last frame.
    pub fn accepted_events(&self) -> &[PlacementAccepted] {
        &self.app.world().resource::<RecordedEvents>().accepted
    }
}

impl Default for TestPlacement {
    fn default() -> Self {
        Self::new()
    }
}
