//! The economy collaborator: a treasury debited by accepted placements.
//!
//! The placement core never checks affordability. It reports the cost of
//! each accepted placement and this module deducts it.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::STARTING_TREASURY;
use crate::module_type::{InstanceId, ModuleTypeId};

/// Emitted once per accepted placement, for the economy to debit.
#[derive(Event, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementAccepted {
    pub type_id: ModuleTypeId,
    pub instance_id: InstanceId,
    pub cost: f64,
}

#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct CityBudget {
    pub treasury: f64,
    pub total_spent: f64,
}

impl Default for CityBudget {
    fn default() -> Self {
        Self {
            treasury: STARTING_TREASURY,
            total_spent: 0.0,
        }
    }
}

impl CityBudget {
    pub fn debit(&mut self, amount: f64) {
        self.treasury -= amount;
        self.total_spent += amount;
    }
}

pub fn debit_accepted_placements(
    mut accepted: EventReader<PlacementAccepted>,
    mut budget: ResMut<CityBudget>,
) {
    for placement in accepted.read() {
        budget.debit(placement.cost);
        if budget.treasury < 0.0 {
            warn!(
                "Treasury overdrawn to ${:.0} after placing '{}' {}",
                budget.treasury, placement.type_id, placement.instance_id
            );
        }
    }
}
