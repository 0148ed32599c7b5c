//! Controller notifications reach collaborators as Bevy events.

use crate::controller::{ControllerEvent, PlacementController};
use crate::coord::Coordinate;
use crate::grid::PlacementGrid;
use crate::input::PlacementInput;
use crate::module_type::{Capability, ModuleCategory, ModuleInfo, ModuleType, ModuleTypeId};
use crate::results::PreviewFeedback;
use crate::test_harness::TestPlacement;

fn road_id() -> ModuleTypeId {
    ModuleTypeId::new("road")
}

#[test]
fn test_startup_emits_setup_for_default_catalog() {
    // Setup happens in the first frame; re-run the app from scratch and look
    // at the controller's queue before any frame has run.
    let controller = PlacementController::with_catalog(
        PlacementGrid::new(),
        crate::catalog::default_catalog(),
    )
    .unwrap();
    assert!(controller.has_pending_events());

    let city = TestPlacement::with_controller(controller);
    assert_eq!(
        city.controller_events(),
        &[ControllerEvent::ModuleSetup(road_id())]
    );
    assert!(!city.controller().has_pending_events());
}

#[test]
fn test_hover_emits_valid_then_invalid_preview() {
    let mut city = TestPlacement::new();
    city.run([
        PlacementInput::select("road"),
        PlacementInput::hover(3, 4),
        PlacementInput::place(3, 4),
    ]);

    let previews: Vec<&PreviewFeedback> = city
        .controller_events()
        .iter()
        .filter_map(|e| match e {
            ControllerEvent::Preview(p) => Some(p),
            _ => None,
        })
        .collect();
    assert_eq!(previews.len(), 2);
    assert!(previews[0].is_valid);
    assert!(!previews[1].is_valid);
    assert_eq!(previews[1].coord, Some(Coordinate::new(3, 4)));

    assert!(city
        .controller_events()
        .iter()
        .any(|e| matches!(e, ControllerEvent::Placed(i) if i.coord == Coordinate::new(3, 4))));
}

#[test]
fn test_select_emits_hover_started() {
    let mut city = TestPlacement::new();
    city.run([PlacementInput::select("road")]);
    assert_eq!(
        city.controller_events(),
        &[ControllerEvent::HoverStarted(road_id())]
    );
}

#[test]
fn test_fixed_tick_notifies_tick_capable_types() {
    let factory = ModuleType::new(
        "factory",
        ModuleInfo {
            name: "Factory".to_string(),
            description: "Produces goods".to_string(),
            icon: None,
            cost: 800.0,
            category: ModuleCategory::Industrial,
        },
    )
    .with_capabilities(&[Capability::Tick]);
    let mut city = TestPlacement::new().with_module(factory);
    let before = city.controller().current_tick();

    city.fixed_tick();
    assert_eq!(city.controller().current_tick(), before + 1);

    city.update();
    let ticks: Vec<u64> = city
        .controller_events()
        .iter()
        .filter_map(|e| match e {
            ControllerEvent::Tick { type_id, tick } if type_id.as_str() == "factory" => Some(*tick),
            _ => None,
        })
        .collect();
    assert!(!ticks.is_empty());
    assert_eq!(ticks[0], before + 1);
    // Roads are not tick-capable.
    assert!(!city
        .controller_events()
        .iter()
        .any(|e| matches!(e, ControllerEvent::Tick { type_id, .. } if *type_id == road_id())));
}
