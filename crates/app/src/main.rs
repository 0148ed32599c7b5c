//! Headless driver: runs the placement plugin without a window, replays an
//! input script one input per frame and logs what happened.

mod script;

use std::path::Path;

use bevy::log::LogPlugin;
use bevy::prelude::*;

use placement::{CityBudget, InputOutcome, PlacementController, PlacementLog, PlacementPlugin};

use script::{demo_script, load_script, SCRIPT_ENV_VAR};

fn main() {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, LogPlugin::default()))
        .add_plugins(PlacementPlugin);

    // Startup frame: registers the catalog and flushes setup notifications.
    app.update();

    let inputs = match std::env::var(SCRIPT_ENV_VAR) {
        Ok(path) => match load_script(Path::new(&path)) {
            Ok(inputs) => {
                info!("Loaded {} inputs from {}", inputs.len(), path);
                inputs
            }
            Err(err) => {
                warn!("{}; running the demo script instead", err);
                demo_script()
            }
        },
        Err(_) => demo_script(),
    };

    for input in inputs {
        app.world_mut().send_event(input);
        app.update();
        if let Some(entry) = app.world().resource::<PlacementLog>().latest() {
            info!("[{}] {:?} -> {}", entry.seq, entry.input, describe(&entry.outcome));
        }
    }

    let world = app.world();
    let controller = world.resource::<PlacementController>();
    let budget = world.resource::<CityBudget>();
    let log = world.resource::<PlacementLog>();
    for module_type in controller.registry().all() {
        info!(
            "{} ({}): {} placed",
            module_type.info().name,
            module_type.category().label(),
            controller.grid().count_of(module_type.id())
        );
    }
    if let Some((input, reason)) = log.last_rejection() {
        info!("Last rejection: {:?} ({:?})", input, reason);
    }
    info!(
        "Done: {} inputs, {} placements accepted, {} modules on the grid, \
         treasury ${:.0} (spent ${:.0}), selection {:?}",
        log.recorded(),
        log.accepted().count(),
        controller.grid().len(),
        budget.treasury,
        budget.total_spent,
        controller.phase()
    );

    app.world_mut()
        .resource_mut::<PlacementController>()
        .cleanup();
    app.update();
}

fn describe(outcome: &InputOutcome) -> String {
    match outcome {
        InputOutcome::Selected(Ok(phase)) => format!("selection {:?}", phase),
        InputOutcome::Selected(Err(err)) => format!("selection failed: {}", err),
        InputOutcome::Hovered(Some(feedback)) => format!(
            "preview {}",
            if feedback.is_valid { "valid" } else { "invalid" }
        ),
        InputOutcome::Hovered(None) => "ignored (nothing armed)".to_string(),
        InputOutcome::Placed(result) => match result.reject_reason() {
            Some(reason) => format!("rejected: {:?}", reason),
            None => format!("placed for ${:.0}", result.cost()),
        },
        InputOutcome::DragPlaced(results) => {
            let placed = results.iter().filter(|r| r.is_accepted()).count();
            format!("drag placed {}/{} cells", placed, results.len())
        }
        InputOutcome::Removed(Some(instance)) => {
            format!("removed '{}' {}", instance.type_id, instance.instance_id)
        }
        InputOutcome::Removed(None) => "nothing to remove".to_string(),
        InputOutcome::DragStarted(started) => format!("drag started: {}", started),
        InputOutcome::DragPreview(cells) => format!("drag preview over {} cells", cells.len()),
    }
}
