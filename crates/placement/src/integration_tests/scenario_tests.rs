//! The select/hover/place walkthroughs, driven through the plugin's input
//! stream.

use crate::controller::PlacementController;
use crate::coord::Coordinate;
use crate::error::PlacementError;
use crate::grid::PlacementGrid;
use crate::input::{InputOutcome, PlacementInput};
use crate::module_type::ModuleTypeId;
use crate::results::{RejectReason, SelectionPhase};
use crate::test_harness::TestPlacement;

// -----------------------------------------------------------------------
// Place, then place again on the same cell
// -----------------------------------------------------------------------

#[test]
fn test_road_select_hover_place_then_occupied() {
    let mut city = TestPlacement::new();

    city.run([PlacementInput::select("road")]);
    assert_eq!(city.controller().phase(), SelectionPhase::Armed);

    city.run([PlacementInput::hover(3, 4)]);
    assert_eq!(city.controller().phase(), SelectionPhase::Hovering);
    match city.last_outcome() {
        Some(InputOutcome::Hovered(Some(feedback))) => assert!(feedback.is_valid),
        other => panic!("expected hover feedback, got {other:?}"),
    }

    city.run([PlacementInput::place(3, 4)]);
    let placed = city.last_outcome().unwrap().placements()[0].clone();
    assert!(placed.is_accepted());
    assert_eq!(placed.cost(), 100.0);
    assert_eq!(
        city.occupant(3, 4).map(|i| i.type_id.as_str()),
        Some("road")
    );

    city.run([PlacementInput::place(3, 4)]);
    let again = city.last_outcome().unwrap().placements()[0].clone();
    assert_eq!(
        again.error(),
        Some(PlacementError::CellOccupied(Coordinate::new(3, 4)))
    );
    assert_eq!(city.controller().grid().len(), 1);
}

// -----------------------------------------------------------------------
// Deselect, then place
// -----------------------------------------------------------------------

#[test]
fn test_deselect_then_place_is_rejected() {
    let mut city = TestPlacement::new();
    city.run([
        PlacementInput::select("road"),
        PlacementInput::deselect(),
        PlacementInput::place(0, 0),
    ]);

    assert_eq!(city.controller().phase(), SelectionPhase::Idle);
    let result = city.last_outcome().unwrap().placements()[0].clone();
    assert_eq!(result.reject_reason(), Some(&RejectReason::NoArmedType));
    assert!(city.controller().grid().is_empty());
}

// -----------------------------------------------------------------------
// Unknown type
// -----------------------------------------------------------------------

#[test]
fn test_select_unknown_type_keeps_previous_selection() {
    let mut city = TestPlacement::new();
    city.run([PlacementInput::select("road"), PlacementInput::hover(1, 1)]);
    let before = city.controller().selection().clone();

    city.run([PlacementInput::select("unknown-type")]);
    assert_eq!(
        city.last_outcome(),
        Some(&InputOutcome::Selected(Err(PlacementError::UnknownType(
            ModuleTypeId::new("unknown-type")
        ))))
    );
    assert_eq!(city.controller().selection(), &before);
}

#[test]
fn test_select_unknown_from_idle_stays_idle() {
    let mut city = TestPlacement::new();
    city.run([PlacementInput::select("unknown-type")]);
    assert_eq!(city.controller().phase(), SelectionPhase::Idle);
}

// -----------------------------------------------------------------------
// Toggle and idle hover
// -----------------------------------------------------------------------

#[test]
fn test_selecting_twice_toggles_off() {
    let mut city = TestPlacement::new();
    city.run([PlacementInput::select("road"), PlacementInput::select("road")]);
    assert_eq!(city.controller().phase(), SelectionPhase::Idle);
    assert!(city.controller().selection().armed().is_none());
}

#[test]
fn test_idle_hover_never_touches_grid() {
    let mut city = TestPlacement::new();
    city.run((-3..=3).map(|x| PlacementInput::hover(x, x)));
    assert!(city.controller().grid().is_empty());
    assert!(city.controller().selection().hovered().is_none());
}

// -----------------------------------------------------------------------
// Drag and bulldoze
// -----------------------------------------------------------------------

#[test]
fn test_drag_lays_a_road_line() {
    let mut city = TestPlacement::new();
    city.run([
        PlacementInput::select("road"),
        PlacementInput::DragStart {
            coord: Coordinate::new(0, 0),
        },
        PlacementInput::DragMove {
            coord: Coordinate::new(0, 3),
        },
        PlacementInput::DragEnd {
            coord: Coordinate::new(0, 5),
        },
    ]);

    let results = city.last_outcome().unwrap().placements().to_vec();
    assert_eq!(results.len(), 6);
    assert!(results.iter().all(|r| r.is_accepted()));
    for z in 0..=5 {
        assert!(city.occupant(0, z).is_some(), "cell (0, {z}) should hold road");
    }
}

#[test]
fn test_remove_then_replace() {
    let mut city = TestPlacement::new();
    city.run([
        PlacementInput::select("road"),
        PlacementInput::place(2, 2),
        PlacementInput::Remove {
            coord: Coordinate::new(2, 2),
        },
    ]);
    assert!(city.occupant(2, 2).is_none());
    assert!(matches!(
        city.last_outcome(),
        Some(InputOutcome::Removed(Some(_)))
    ));

    city.run([PlacementInput::place(2, 2)]);
    assert!(city.occupant(2, 2).is_some());
}

#[test]
fn test_edge_of_surface_is_placeable_but_beyond_is_not() {
    let mut city = TestPlacement::new();
    city.run([PlacementInput::select("road"), PlacementInput::place(20, -20)]);
    assert!(city.occupant(20, -20).is_some());

    city.run([PlacementInput::place(21, 0)]);
    let result = city.last_outcome().unwrap().placements()[0].clone();
    assert_eq!(
        result.reject_reason(),
        Some(&RejectReason::OutOfBounds(Coordinate::new(21, 0)))
    );
}

#[test]
fn test_app_supplied_controller_is_kept() {
    let controller = PlacementController::new(PlacementGrid::new());
    let mut city = TestPlacement::with_controller(controller);
    assert!(city.controller().registry().is_empty());

    city.run([PlacementInput::select("road")]);
    assert!(matches!(
        city.last_outcome(),
        Some(InputOutcome::Selected(Err(PlacementError::UnknownType(_))))
    ));
}
