//! Built-in module types.
//!
//! Only roads ship today. Embedding applications register their own types on
//! top through `PlacementController::register`.

use crate::config::ROAD_COST;
use crate::module_type::{Capability, ModuleCategory, ModuleInfo, ModuleType};

pub const ROAD_ID: &str = "road";

/// One-cell road tile. Drawn by dragging as well as by clicking.
pub fn road() -> ModuleType {
    ModuleType::new(
        ROAD_ID,
        ModuleInfo {
            name: "Road".to_string(),
            description: "Connect your city with roads".to_string(),
            icon: Some("🛣️".to_string()),
            cost: ROAD_COST,
            category: ModuleCategory::Infrastructure,
        },
    )
    .with_capabilities(&[Capability::Preview, Capability::Drag])
}

/// Types registered by `PlacementPlugin` at startup.
pub fn default_catalog() -> Vec<ModuleType> {
    vec![road()]
}
